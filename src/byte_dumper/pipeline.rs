//! # 解码流水线模块
//!
//! ## 设计思路
//!
//! 将“字节 → 图像 → 像素缓冲”的过程集中管理，并在关键节点增加资源上限控制。
//! 优先做尺寸检查，再进行完整解码。
//!
//! ## 实现思路
//!
//! 1. 猜测格式并读取 header 中的尺寸与颜色类型
//! 2. 按像素上限、以及“像素数 × 每像素字节数”的内存上限快速拒绝
//! 3. 完整解码
//! 4. 取出解码器自然布局的字节，并校验长度一致性

use image::{ColorType, GenericImageView, ImageDecoder, ImageFormat};
use std::io::Cursor;

use super::source::{PixelBytes, RawImageData};
use super::{ByteDumper, DumpError};

impl ByteDumper {
    /// 将原始字节解码为像素缓冲。
    pub(super) fn decode_pixel_bytes(&self, raw: RawImageData) -> Result<PixelBytes, DumpError> {
        let format: ImageFormat = image::guess_format(&raw.bytes)
            .map_err(|e| DumpError::InvalidFormat(format!("不支持的图片格式：{}", e)))?;
        log::debug!("识别图片格式：{:?} - 来源: {}", format, raw.source_hint);

        let (header_width, header_height, header_color) = Self::inspect_header(&raw.bytes, format)?;
        self.validate_pixel_limits(header_width, header_height)?;
        self.validate_decoded_memory_limits(header_width, header_height, header_color)?;

        let decoded = image::load_from_memory_with_format(&raw.bytes, format)
            .map_err(|e| DumpError::Decode(format!("图片解码失败：{}", e)))?;

        let (width, height) = decoded.dimensions();
        let color = decoded.color();
        let bytes = decoded.into_bytes();

        let pixels = PixelBytes {
            width,
            height,
            color,
            bytes,
        };

        let expected_len = pixels
            .expected_len()
            .ok_or_else(|| DumpError::ResourceLimit("图片尺寸导致内存溢出风险".to_string()))?;

        if pixels.bytes.len() != expected_len {
            return Err(DumpError::Decode(format!(
                "解码后像素数据长度异常：{}（期望：{}）",
                pixels.bytes.len(),
                expected_len
            )));
        }

        log::info!(
            "✅ 图片解码成功 - 来源: {} 尺寸: {}x{} 颜色: {:?} 字节数: {}",
            raw.source_hint,
            width,
            height,
            color,
            pixels.bytes.len()
        );

        Ok(pixels)
    }

    /// 仅通过图片头信息读取宽高与颜色类型。
    ///
    /// 用于在完整解码前做像素与内存限制检查。
    fn inspect_header(
        bytes: &[u8],
        format: ImageFormat,
    ) -> Result<(u32, u32, ColorType), DumpError> {
        let decoder = image::ImageReader::with_format(Cursor::new(bytes), format)
            .into_decoder()
            .map_err(|e| DumpError::Decode(format!("无法读取图片头信息：{}", e)))?;

        let (width, height) = decoder.dimensions();
        Ok((width, height, decoder.color_type()))
    }

    /// 校验像素数量是否超过配置上限。
    fn validate_pixel_limits(&self, width: u32, height: u32) -> Result<(), DumpError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| DumpError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > self.config.max_decoded_pixels {
            return Err(DumpError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, self.config.max_decoded_pixels
            )));
        }

        Ok(())
    }

    /// 校验解码缓冲（`width * height * bytes_per_pixel`）是否超过内存上限。
    fn validate_decoded_memory_limits(
        &self,
        width: u32,
        height: u32,
        color: ColorType,
    ) -> Result<(), DumpError> {
        let estimated = (width as u64)
            .checked_mul(height as u64)
            .and_then(|pixels| pixels.checked_mul(color.bytes_per_pixel() as u64))
            .ok_or_else(|| DumpError::ResourceLimit("图片解码内存估算溢出".to_string()))?;

        if estimated > self.config.max_decoded_bytes {
            return Err(DumpError::ResourceLimit(format!(
                "图片解码预计内存过大：{:.2} MB（限制：{:.2} MB）",
                estimated as f64 / 1024.0 / 1024.0,
                self.config.max_decoded_bytes as f64 / 1024.0 / 1024.0
            )));
        }

        Ok(())
    }
}
