//! 命令行入口逻辑
//!
//! # 设计思路
//!
//! `run` 只做三件事：参数个数校验、存在性校验、调用导出器并写出结果。
//! 两种可预期的用户错误打印提示并返回 `1`；其余失败以 `Err` 向上传递，由 `main` 统一上报。
//!
//! 参数保持 `OsString` 原样，非 UTF-8 路径也能正确判断存在性与读取；
//! 只有拼接提示文本时才做有损转换。输出目标以 `Write` 注入，测试时可直接捕获。

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use crate::byte_dumper::{ByteDumper, DumpConfig, write_float_list};
use crate::error::AppError;

/// 成功退出码。
pub const EXIT_SUCCESS: i32 = 0;
/// 参数错误或文件不存在时的退出码。
pub const EXIT_USAGE: i32 = 1;

const DEFAULT_PROGRAM_NAME: &str = "img_to_bytes";

/// 执行一次导出。
///
/// `args` 包含程序名（即 `std::env::args_os()` 的完整结果）。
///
/// # 返回
/// - `Ok(0)` — 已写出列表
/// - `Ok(1)` — 参数个数错误或文件不存在，已写出提示
/// - `Err(AppError)` — 解码或输出失败，未写出任何结果
pub fn run<W: Write>(args: &[OsString], config: DumpConfig, out: &mut W) -> Result<i32, AppError> {
    if args.len() != 2 {
        let program = args
            .first()
            .map(|arg| arg.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string());
        writeln!(out, "Usage: {} <image>", program)?;
        return Ok(EXIT_USAGE);
    }

    let path = Path::new(&args[1]);
    if !path.exists() {
        writeln!(out, "Error: {} not found.", path.display())?;
        return Ok(EXIT_USAGE);
    }

    let dumper = ByteDumper::new(config)?;
    let pixels = dumper.dump(path)?;

    write_float_list(out, &pixels.bytes)?;
    writeln!(out)?;
    out.flush()?;

    Ok(EXIT_SUCCESS)
}
