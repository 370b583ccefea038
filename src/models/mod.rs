pub mod evaluation;
pub mod loaders;
pub mod question;
pub mod upload;

pub use evaluation::{Answer, EvaluateRequest, EvaluateResponse, Evaluation, ScoreLevel};
pub use loaders::load_upload_file;
pub use question::{
    GenerateRequest, GenerateResponse, Question, QuestionId, QuestionSet, QuestionSetId,
    QuestionSetPayload,
};
pub use upload::{
    JdUploadResponse, JobSummary, ResumeSummary, ResumeUploadResponse, UploadFile, UploadKind,
    UploadReceipt, UploadStatus,
};

/// 把 JSON `null` 当作缺省值处理
///
/// 服务端对未解析出的列表字段会返回 `null`，`#[serde(default)]` 只覆盖字段缺失的情况
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let value: Option<T> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
