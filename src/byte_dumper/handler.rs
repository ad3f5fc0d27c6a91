//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `ByteDumper` 只负责流程编排与配置持有，不关心参数解析与输出。
//! 处理链路固定为：
//! 1. 按路径加载原始字节
//! 2. 解码并取出像素缓冲
//!
//! ## 实现思路
//!
//! - 配置在构造时校验一次，之后只读。
//! - 记录 `load/decode/total` 阶段耗时，便于性能诊断。

use std::path::Path;
use std::time::Instant;

use super::{DumpConfig, DumpError, PixelBytes};

/// 像素字节导出器。
pub struct ByteDumper {
    pub(super) config: DumpConfig,
}

impl ByteDumper {
    /// 根据配置创建导出器。
    ///
    /// # 示例
    /// ```rust
    /// use img_to_bytes::byte_dumper::{ByteDumper, DumpConfig};
    ///
    /// let dumper = ByteDumper::new(DumpConfig::default())?;
    /// # let _ = dumper;
    /// # Ok::<(), img_to_bytes::byte_dumper::DumpError>(())
    /// ```
    pub fn new(config: DumpConfig) -> Result<Self, DumpError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 处理主入口：读取并解码图片，返回像素缓冲。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use img_to_bytes::byte_dumper::{ByteDumper, DumpConfig};
    ///
    /// let dumper = ByteDumper::new(DumpConfig::default())?;
    /// let pixels = dumper.dump("digit.png")?;
    /// println!("{} bytes", pixels.bytes.len());
    /// # Ok::<(), img_to_bytes::byte_dumper::DumpError>(())
    /// ```
    pub fn dump(&self, path: impl AsRef<Path>) -> Result<PixelBytes, DumpError> {
        let path = path.as_ref();
        let total_start = Instant::now();

        let load_start = Instant::now();
        let raw = self.load_from_file(path)?;
        let load_elapsed = load_start.elapsed();

        let decode_start = Instant::now();
        let pixels = self.decode_pixel_bytes(raw)?;
        let decode_elapsed = decode_start.elapsed();

        log::info!(
            "✅ 像素导出完成 - load={}ms decode={}ms total={}ms",
            load_elapsed.as_millis(),
            decode_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, DynamicImage, GrayImage, ImageBuffer, ImageFormat, Luma, Rgb};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_file(name: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock error")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("img-to-bytes-handler-test-{nanos}"));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir.join(name)
    }

    #[test]
    fn rejects_invalid_config_on_construction() {
        let config = DumpConfig {
            max_file_size: 0,
            ..DumpConfig::default()
        };

        assert!(matches!(ByteDumper::new(config), Err(DumpError::InvalidFormat(_))));
    }

    #[test]
    fn dump_grayscale_png_yields_single_channel_bytes() {
        let path = unique_temp_file("gray.png");
        let img: GrayImage = ImageBuffer::from_fn(4, 3, |x, y| Luma([(x * 10 + y) as u8]));
        DynamicImage::ImageLuma8(img)
            .save_with_format(&path, ImageFormat::Png)
            .expect("write test image");

        let dumper = ByteDumper::new(DumpConfig::default()).expect("dumper init failed");
        let pixels = dumper.dump(&path).expect("dump should succeed");

        assert_eq!((pixels.width, pixels.height), (4, 3));
        assert_eq!(pixels.color, ColorType::L8);
        assert_eq!(pixels.bytes.len(), 12);
        assert_eq!(pixels.bytes[0..4], [0, 10, 20, 30]);
        assert_eq!(pixels.bytes[4], 1);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn dump_rgb_bmp_keeps_interleaved_layout() {
        let path = unique_temp_file("rgb.bmp");
        let img = ImageBuffer::from_fn(2, 2, |x, y| Rgb([x as u8, y as u8, 7]));
        DynamicImage::ImageRgb8(img)
            .save_with_format(&path, ImageFormat::Bmp)
            .expect("write test image");

        let dumper = ByteDumper::new(DumpConfig::default()).expect("dumper init failed");
        let pixels = dumper.dump(&path).expect("dump should succeed");

        assert_eq!(pixels.color, ColorType::Rgb8);
        assert_eq!(pixels.bytes, vec![0, 0, 7, 1, 0, 7, 0, 1, 7, 1, 1, 7]);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn dump_is_idempotent() {
        let path = unique_temp_file("repeat.png");
        let img = ImageBuffer::from_fn(8, 8, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
        DynamicImage::ImageRgb8(img)
            .save_with_format(&path, ImageFormat::Png)
            .expect("write test image");

        let dumper = ByteDumper::new(DumpConfig::default()).expect("dumper init failed");
        let first = dumper.dump(&path).expect("first dump");
        let second = dumper.dump(&path).expect("second dump");

        assert_eq!(first, second);
        let _ = std::fs::remove_file(&path);
    }
}
