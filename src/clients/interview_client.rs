/// 面试服务 API 客户端
///
/// 封装与后端四个接口的交互，请求/响应契约见 `models`
use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{ApiError, AppResult};
use crate::infrastructure::HttpExecutor;
use crate::models::{
    EvaluateRequest, EvaluateResponse, GenerateRequest, GenerateResponse, JdUploadResponse,
    ResumeUploadResponse, UploadFile, UploadKind,
};

/// 后端接口路径
pub mod endpoints {
    pub const UPLOAD_RESUME: &str = "/upload/resume";
    pub const UPLOAD_JD: &str = "/upload/jd";
    pub const GENERATE_QUESTIONS: &str = "/generate/questions";
    pub const EVALUATE_ANSWER: &str = "/evaluate/answer";
}

/// 面试服务契约
///
/// 控制器只依赖此 trait，测试中可替换为脚本化实现
#[async_trait]
pub trait InterviewApi: Send + Sync {
    async fn upload_resume(&self, file: &UploadFile) -> Result<ResumeUploadResponse, ApiError>;

    async fn upload_jd(&self, file: &UploadFile) -> Result<JdUploadResponse, ApiError>;

    async fn generate_questions(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError>;

    async fn evaluate_answer(&self, request: &EvaluateRequest) -> Result<EvaluateResponse, ApiError>;
}

/// 基于 HTTP 的面试服务客户端
pub struct HttpInterviewApi {
    executor: HttpExecutor,
}

impl HttpInterviewApi {
    /// 创建新的客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            executor: HttpExecutor::new(config)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.executor.base_url()
    }
}

#[async_trait]
impl InterviewApi for HttpInterviewApi {
    async fn upload_resume(&self, file: &UploadFile) -> Result<ResumeUploadResponse, ApiError> {
        let response: ResumeUploadResponse = self
            .executor
            .post_file(endpoints::UPLOAD_RESUME, UploadKind::Resume.field_name(), file)
            .await?;
        info!("✓ 简历已上传: {}", response.resume_id);
        Ok(response)
    }

    async fn upload_jd(&self, file: &UploadFile) -> Result<JdUploadResponse, ApiError> {
        let response: JdUploadResponse = self
            .executor
            .post_file(endpoints::UPLOAD_JD, UploadKind::Jd.field_name(), file)
            .await?;
        info!("✓ JD已上传: {}", response.jd_id);
        Ok(response)
    }

    async fn generate_questions(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError> {
        let response: GenerateResponse = self
            .executor
            .post_json(endpoints::GENERATE_QUESTIONS, request)
            .await?;
        info!("✓ 生成 {} 个面试问题", response.questions.questions.len());
        if let Some(message) = &response.message {
            debug!("服务端消息: {}", message);
        }
        Ok(response)
    }

    async fn evaluate_answer(&self, request: &EvaluateRequest) -> Result<EvaluateResponse, ApiError> {
        let response: EvaluateResponse = self
            .executor
            .post_json(endpoints::EVALUATE_ANSWER, request)
            .await?;
        info!(
            "✓ 问题 {} 评估完成: {}/10",
            request.question_id, response.evaluation.score
        );
        Ok(response)
    }
}
