//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有资源上限集中到 `DumpConfig`，让超大文件或恶意头信息在完整解码前就被拒绝。
//! 输出格式不可配置，这里只承载“读多大、解多大”的策略。
//!
//! ## 实现思路
//!
//! - `Default` 提供足够宽松的生产配置，正常图片不会触发限制。
//! - 可选 JSON 配置文件，每个字段都带 `#[serde(default)]`，缺省字段回退默认值。
//! - 文件缺失或解析失败时宽松回退到默认配置，仅记录警告。

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::DumpError;

/// 指定配置文件路径的环境变量。
pub const CONFIG_ENV_VAR: &str = "IMG_TO_BYTES_CONFIG";

/// 字节导出配置。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DumpConfig {
    /// 读取原始文件时允许的最大体积（字节）。
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    #[serde(default = "default_max_decoded_pixels")]
    pub max_decoded_pixels: u64,
    /// 解码阶段允许的预计内存上限（按最宽的 RGBA16 估算，字节）。
    #[serde(default = "default_max_decoded_bytes")]
    pub max_decoded_bytes: u64,
    /// 是否在解码前通过 magic bytes 拒绝明显不是图片的文件。
    #[serde(default = "default_validate_signature")]
    pub validate_signature: bool,
}

fn default_max_file_size() -> u64 {
    256 * 1024 * 1024
}

fn default_max_decoded_pixels() -> u64 {
    100_000_000
}

fn default_max_decoded_bytes() -> u64 {
    1024 * 1024 * 1024
}

fn default_validate_signature() -> bool {
    true
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
            max_decoded_pixels: default_max_decoded_pixels(),
            max_decoded_bytes: default_max_decoded_bytes(),
            validate_signature: default_validate_signature(),
        }
    }
}

impl DumpConfig {
    /// 从 JSON 文件加载配置。
    ///
    /// 文件不存在、无法读取或无法解析时回退到默认配置。
    pub fn load_from_path(config_path: &Path) -> Self {
        if !config_path.exists() {
            log::warn!("⚠️ 配置文件不存在，使用默认配置：{}", config_path.display());
            return Self::default();
        }

        let content = match fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("⚠️ 读取配置文件失败，使用默认配置：{}", e);
                return Self::default();
            }
        };

        let config: Self = match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("⚠️ 解析配置文件失败，使用默认配置：{}", e);
                return Self::default();
            }
        };

        if let Err(e) = config.validate() {
            log::warn!("⚠️ 配置无效，使用默认配置：{}", e);
            return Self::default();
        }

        log::debug!("已加载配置：{:?}", config);
        config
    }

    /// 根据 `IMG_TO_BYTES_CONFIG` 环境变量加载配置，未设置时使用默认值。
    pub fn from_env() -> Self {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load_from_path(Path::new(&path)),
            _ => Self::default(),
        }
    }

    /// 校验各项上限均为正数。
    pub fn validate(&self) -> Result<(), DumpError> {
        if self.max_file_size == 0 {
            return Err(DumpError::InvalidFormat("max_file_size 不能为 0".to_string()));
        }
        if self.max_decoded_pixels == 0 {
            return Err(DumpError::InvalidFormat("max_decoded_pixels 不能为 0".to_string()));
        }
        if self.max_decoded_bytes == 0 {
            return Err(DumpError::InvalidFormat("max_decoded_bytes 不能为 0".to_string()));
        }
        Ok(())
    }
}
