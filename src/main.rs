//! # 图片像素字节导出工具 — 命令行入口
//!
//! 本文件仅负责日志初始化、配置加载与退出码转换。
//! 业务逻辑见 `cli::run`。

use std::ffi::OsString;
use std::io::{self, BufWriter};
use std::process;

use img_to_bytes::byte_dumper::DumpConfig;
use img_to_bytes::cli;

fn main() {
    // 日志写入 stderr，默认只输出警告，避免干扰 stdout 上的结果
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<OsString> = std::env::args_os().collect();
    let config = DumpConfig::from_env();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let code = match cli::run(&args, config, &mut out) {
        Ok(code) => code,
        Err(e) => {
            log::debug!("❌ 导出失败：{:?}", e);
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    drop(out);
    process::exit(code);
}
