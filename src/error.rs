//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，承载所有“未在本地处理”的失败：
//! 解码链路错误与输出阶段的 I/O 错误。
//! 参数个数错误与文件不存在属于可预期结果，由 `cli::run` 直接返回退出码，不经过这里。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `DumpError` 与 `std::io::Error` 提供 `From` 转换，调用侧直接 `?`。
//! - `exit_code` 统一给出进程退出码，入口无需逐项匹配。

use crate::byte_dumper::DumpError;

/// 未处理失败对应的进程退出码。
pub const FAILURE_EXIT_CODE: i32 = 2;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图片加载 / 解码错误
    #[error("{0}")]
    Dump(#[from] DumpError),

    /// 写出结果时的 I/O 错误
    #[error("输出失败: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// 进程退出码。
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Dump(_) | AppError::Io(_) => FAILURE_EXIT_CODE,
        }
    }
}
