//! # 图片像素字节导出工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs ── env_logger 初始化 · 配置加载 · 退出码         │
//! │     ↓                                                    │
//! │  cli::run ── 参数校验 · 存在性校验 · 写出结果            │
//! │     ↓ Result<i32, AppError>                              │
//! │  ┌─ error ─────── AppError (统一错误类型)                │
//! │  └─ byte_dumper ─ 加载 · 解码 · 列表渲染                 │
//! │        ├─ loader    文件体积 / 签名校验                  │
//! │        ├─ pipeline  尺寸预检 / 解码 / 长度校验           │
//! │        └─ format    `[b0.0, b1.0, ...]`                  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError` 与退出码映射 |
//! | [`cli`] | `run(args, config, out)`：命令行契约 |
//! | [`byte_dumper`] | 从文件加载图片并取出解码后的像素字节 |

pub mod error;
pub mod cli;
pub mod byte_dumper;
