//! # 像素字节导出模块（byte_dumper）
//!
//! ## 设计思路
//!
//! 该模块将“文件加载校验 → 解码取缓冲 → 列表渲染”按职责拆分为多个子模块，
//! 不依赖任何 CLI 细节，库调用方可以直接拿到 `PixelBytes`。
//!
//! - `handler`：编排整条处理流水线
//! - `loader`：负责文件存在性、体积与签名校验
//! - `pipeline`：负责尺寸预检、像素限制与解码
//! - `format`：负责列表字面量输出
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 调用链
//!
//! ```text
//! cli::run
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（文件加载 + 体积/签名校验）
//!    └─ pipeline.rs（尺寸预检 + 解码 + 长度校验）
//!    ↓
//! format.rs（写出 `[b0.0, b1.0, ...]`）
//! ```

mod config;
mod error;
mod format;
mod handler;
mod loader;
mod pipeline;
mod source;

pub use config::{CONFIG_ENV_VAR, DumpConfig};
pub use error::DumpError;
pub use format::{format_float_list, write_float_list};
pub use handler::ByteDumper;
pub use source::PixelBytes;
