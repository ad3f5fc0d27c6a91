//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 加载与解码阶段的所有失败都收敛到 `DumpError`，避免字符串拼接式错误处理。
//! CLI 层不会逐项处理这些分支，只负责把它们统一上报为进程级失败。

/// 字节导出链路统一错误类型。
///
/// 在 CLI 层被上转为 `AppError`，最终输出到 stderr。
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("解码错误：{0}")]
    Decode(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),
}
