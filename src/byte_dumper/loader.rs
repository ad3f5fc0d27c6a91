//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 在解码前“尽可能早”地执行输入校验：存在性、体积、文件签名。
//! 目标是尽快失败，减少不必要的内存与 CPU 消耗。
//!
//! ## 实现思路
//!
//! - metadata 体积限制先于读取。
//! - 签名校验只拒绝“已识别且不是图片”的内容；`infer` 不认识的格式交给解码器判断。

use std::path::Path;

use super::source::RawImageData;
use super::{ByteDumper, DumpError};

impl ByteDumper {
    /// 从本地路径加载图片原始字节。
    pub(super) fn load_from_file(&self, path: &Path) -> Result<RawImageData, DumpError> {
        log::info!("📁 开始读取本地图片 - 路径: {}", path.display());

        if !path.exists() {
            return Err(DumpError::FileSystem(format!("文件不存在：{}", path.display())));
        }

        let metadata = std::fs::metadata(path)
            .map_err(|e| DumpError::FileSystem(format!("无法读取文件信息：{}", e)))?;

        if !metadata.is_file() {
            return Err(DumpError::FileSystem(format!("不是普通文件：{}", path.display())));
        }

        if metadata.len() > self.config.max_file_size {
            return Err(DumpError::ResourceLimit(format!(
                "文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                self.config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| DumpError::FileSystem(format!("无法读取图片文件：{}", e)))?;

        if self.config.validate_signature {
            Self::validate_image_signature(&bytes)?;
        }

        Ok(RawImageData {
            bytes,
            source_hint: path.display().to_string(),
        })
    }

    /// 通过文件签名（magic bytes）校验输入是否为图片。
    fn validate_image_signature(bytes: &[u8]) -> Result<(), DumpError> {
        if bytes.is_empty() {
            return Err(DumpError::InvalidFormat("图片内容为空".to_string()));
        }

        match infer::get(bytes) {
            Some(kind) if kind.matcher_type() != infer::MatcherType::Image => {
                Err(DumpError::InvalidFormat(format!(
                    "文件签名不是图片类型：{}",
                    kind.mime_type()
                )))
            }
            Some(kind) => {
                log::debug!("文件签名识别为 {}", kind.mime_type());
                Ok(())
            }
            None => {
                log::debug!("文件签名未识别，交由解码器判断");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte_dumper::DumpConfig;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir() -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock error")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("img-to-bytes-loader-test-{nanos}"));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn load_from_file_reports_missing_path() {
        let dumper = ByteDumper::new(DumpConfig::default()).expect("dumper init failed");
        let dir = unique_temp_dir();

        let result = dumper.load_from_file(&dir.join("absent.png"));

        assert!(matches!(result, Err(DumpError::FileSystem(_))));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn load_from_file_rejects_directory() {
        let dumper = ByteDumper::new(DumpConfig::default()).expect("dumper init failed");
        let dir = unique_temp_dir();

        let result = dumper.load_from_file(&dir);

        assert!(matches!(result, Err(DumpError::FileSystem(_))));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn load_from_file_rejects_oversized_file_before_read() {
        let config = DumpConfig {
            max_file_size: 16,
            ..DumpConfig::default()
        };
        let dumper = ByteDumper::new(config).expect("dumper init failed");
        let dir = unique_temp_dir();
        let path = dir.join("big.png");
        std::fs::write(&path, vec![0u8; 64]).expect("write file");

        let result = dumper.load_from_file(&path);

        assert!(matches!(result, Err(DumpError::ResourceLimit(_))));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn signature_accepts_png_header() {
        let png_signature = [137_u8, 80, 78, 71, 13, 10, 26, 10, 0, 0, 0, 13];

        assert!(ByteDumper::validate_image_signature(&png_signature).is_ok());
    }

    #[test]
    fn signature_rejects_known_non_image_payload() {
        let pdf = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3\n";

        let result = ByteDumper::validate_image_signature(pdf);

        assert!(matches!(result, Err(DumpError::InvalidFormat(_))));
    }

    #[test]
    fn signature_rejects_empty_payload() {
        assert!(matches!(
            ByteDumper::validate_image_signature(&[]),
            Err(DumpError::InvalidFormat(_))
        ));
    }

    #[test]
    fn signature_defers_unknown_payload_to_decoder() {
        let pgm = b"P5\n1 1\n255\n\x80";

        assert!(ByteDumper::validate_image_signature(pgm).is_ok());
    }
}
