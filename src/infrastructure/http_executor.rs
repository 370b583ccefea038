//! HTTP 执行器 - 基础设施层
//!
//! 持有唯一的 `reqwest::Client`，只暴露"发送请求"的能力

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{ApiError, AppResult, ConfigError};
use crate::models::UploadFile;

/// 失败响应体
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// HTTP 执行器
///
/// 职责：
/// - 持有唯一的 Client（带超时）
/// - 发送 JSON / multipart 请求
/// - 按状态码区分成功与失败，提取失败响应中的 `error` 字段
/// - 不认识简历 / 问题 / 评估
pub struct HttpExecutor {
    client: Client,
    base_url: String,
}

impl HttpExecutor {
    /// 创建新的 HTTP 执行器
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// 发送 JSON 请求并反序列化成功响应
    pub async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {} (json)", endpoint);

        let response = self
            .client
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(endpoint, e))?;

        decode(endpoint, response).await
    }

    /// 以 multipart 表单上传单个文件
    ///
    /// # 参数
    /// - `endpoint`: 接口路径
    /// - `field`: 表单字段名
    /// - `file`: 待上传文件
    pub async fn post_file<T>(&self, endpoint: &str, field: &str, file: &UploadFile) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        debug!("POST {} (multipart, {} = {}, {} 字节)", endpoint, field, file.file_name, file.size());

        let part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        let form = Form::new().part(field.to_string(), part);

        let response = self
            .client
            .post(self.url(endpoint))
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport_error(endpoint, e))?;

        decode(endpoint, response).await
    }
}

/// 按状态码分类并解析响应体
async fn decode<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| transport_error(endpoint, e))?;

    if status.is_success() {
        return serde_json::from_slice(&body).map_err(|source| {
            warn!("{} 响应无法解析: {}", endpoint, source);
            ApiError::MalformedResponse {
                endpoint: endpoint.to_string(),
                source,
            }
        });
    }

    let message = serde_json::from_slice::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty());

    warn!("{} 返回 {}: {:?}", endpoint, status, message);

    Err(ApiError::Rejected {
        endpoint: endpoint.to_string(),
        status: status.as_u16(),
        message,
    })
}

fn transport_error(endpoint: &str, err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        warn!("{} 请求超时", endpoint);
        ApiError::Timeout {
            endpoint: endpoint.to_string(),
        }
    } else {
        warn!("{} 请求失败: {}", endpoint, err);
        ApiError::RequestFailed {
            endpoint: endpoint.to_string(),
            source: err,
        }
    }
}
