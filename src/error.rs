use thiserror::Error;

use crate::services::Control;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 本地校验失败（未发出任何请求）
    #[error("校验错误: {0}")]
    Validation(#[from] ValidationError),
    /// 后端服务调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 控件上已有进行中的请求
    #[error("操作进行中: {control}")]
    Busy { control: Control },
}

/// 本地校验错误
///
/// Display 文本即展示给用户的提示
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("请先上传简历和职位描述")]
    MissingUploads,
    #[error("请先生成面试问题")]
    NoQuestionSet,
    #[error("问题不存在: {id}")]
    UnknownQuestion { id: i64 },
    #[error("请先选择问题")]
    NoQuestionSelected,
    #[error("请输入回答")]
    EmptyAnswer,
    #[error("文件过大: {file_name} ({size} 字节, 上限 {limit} 字节)")]
    FileTooLarge {
        file_name: String,
        size: usize,
        limit: usize,
    },
}

/// 后端服务调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 服务端返回非成功状态
    #[error("API返回错误响应 ({endpoint}): status={status}, message={message:?}")]
    Rejected {
        endpoint: String,
        status: u16,
        message: Option<String>,
    },
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 请求超时
    #[error("API请求超时 ({endpoint})")]
    Timeout { endpoint: String },
    /// 响应体无法解析
    #[error("JSON解析失败 ({endpoint}): {source}")]
    MalformedResponse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// 可展示给用户的失败原因
    ///
    /// 没有结构化原因时返回 `None`，由调用方替换为兜底文本
    pub fn reason(&self) -> Option<String> {
        match self {
            ApiError::Rejected { message, .. } => message.clone(),
            ApiError::RequestFailed { source, .. } => Some(source.to_string()),
            ApiError::Timeout { .. } => Some("请求超时".to_string()),
            ApiError::MalformedResponse { .. } => None,
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            ApiError::Rejected { endpoint, .. }
            | ApiError::RequestFailed { endpoint, .. }
            | ApiError::Timeout { endpoint }
            | ApiError::MalformedResponse { endpoint, .. } => endpoint,
        }
    }
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("不是有效的文件路径: {path}")]
    NotAFile { path: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("HTTP客户端初始化失败: {0}")]
    HttpClient(#[source] reqwest::Error),
}

// ========== 便捷方法 ==========

impl AppError {
    /// 展示给用户的失败原因，缺失时使用 `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Api(e) => e.reason().unwrap_or_else(|| fallback.to_string()),
            AppError::Validation(e) => e.to_string(),
            AppError::File(e) => e.to_string(),
            AppError::Config(_) | AppError::Busy { .. } => fallback.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
