//! # 输出格式模块
//!
//! 将像素字节渲染为单行列表字面量：`[0.0, 128.0, 255.0]`，空缓冲渲染为 `[]`。
//! 字节到浮点的扩宽是无损的，因此每个值都是 `{b}.0`。

use std::io::{self, Write};

/// 以流式方式写出列表字面量，不在内存中拼出整段字符串。
pub fn write_float_list<W: Write>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    out.write_all(b"[")?;
    for (i, &byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.write_all(b", ")?;
        }
        write!(out, "{:.1}", f64::from(byte))?;
    }
    out.write_all(b"]")
}

/// 渲染为字符串，便于测试与库调用方使用。
///
/// # 示例
/// ```rust
/// use img_to_bytes::byte_dumper::format_float_list;
///
/// assert_eq!(format_float_list(&[200, 0]), "[200.0, 0.0]");
/// ```
pub fn format_float_list(bytes: &[u8]) -> String {
    let values: Vec<String> = bytes
        .iter()
        .map(|&byte| format!("{:.1}", f64::from(byte)))
        .collect();
    format!("[{}]", values.join(", "))
}
