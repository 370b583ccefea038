use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{AppResult, ConfigError, FileError};

/// 程序配置
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 后端服务地址
    pub base_url: String,
    /// 单个请求的超时时间（秒）
    pub request_timeout_secs: u64,
    /// 允许上传的最大文件大小（字节）
    pub max_upload_bytes: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            request_timeout_secs: 30,
            max_upload_bytes: 10 * 1024 * 1024,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载配置，未填写的字段取默认值，环境变量优先
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| FileError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })?;
        Ok(config.with_env_overrides())
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn with_env_overrides(self) -> Self {
        Self {
            base_url: std::env::var("INTERVIEW_BASE_URL").unwrap_or(self.base_url),
            request_timeout_secs: std::env::var("INTERVIEW_REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.request_timeout_secs),
            max_upload_bytes: std::env::var("INTERVIEW_MAX_UPLOAD_BYTES").ok().and_then(|v| v.parse().ok()).unwrap_or(self.max_upload_bytes),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
