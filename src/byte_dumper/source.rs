//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“已读取的文件字节”和“解码后的像素缓冲”解耦：
//! - `RawImageData` 表示已加载但未解码的字节
//! - `PixelBytes` 表示解码器自然内存布局下的像素字节

use image::ColorType;

/// 加载阶段输出：原始字节与来源标识。
pub(crate) struct RawImageData {
    /// 原始文件字节。
    pub(crate) bytes: Vec<u8>,
    /// 来源提示（用于日志与诊断）。
    pub(crate) source_hint: String,
}

/// 解码阶段输出：像素缓冲及其尺寸信息。
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBytes {
    /// 图像宽度（像素）。
    pub width: u32,
    /// 图像高度（像素）。
    pub height: u32,
    /// 解码器给出的颜色类型，决定每像素字节数。
    pub color: ColorType,
    /// 行优先、通道交错的原始字节（`width * height * bytes_per_pixel`）。
    pub bytes: Vec<u8>,
}

impl PixelBytes {
    /// 每像素字节数。
    pub fn bytes_per_pixel(&self) -> usize {
        self.color.bytes_per_pixel() as usize
    }

    /// 按尺寸与颜色类型推算的缓冲长度；溢出时返回 `None`。
    pub fn expected_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|pixels| pixels.checked_mul(self.bytes_per_pixel()))
    }

    /// 将每个字节无损扩宽为 `f64`，可直接作为数值计算的输入向量。
    ///
    /// # 示例
    /// ```rust
    /// use image::ColorType;
    /// use img_to_bytes::byte_dumper::PixelBytes;
    ///
    /// let pixels = PixelBytes { width: 1, height: 1, color: ColorType::L8, bytes: vec![128] };
    /// assert_eq!(pixels.to_f64_vec(), vec![128.0]);
    /// ```
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.bytes.iter().map(|&b| f64::from(b)).collect()
    }
}
