use serde::{Deserialize, Serialize};
use std::fmt;

/// 问题标识（由服务端分配）
pub type QuestionId = i64;

/// 面试问题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub content: String,
    #[serde(default)]
    pub category: String,
}

/// 问题集标识
///
/// 只能由简历 ID 和 JD ID 推导得到，不能单独赋值
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct QuestionSetId(String);

impl QuestionSetId {
    /// 推导问题集标识：`{resume_id}_{jd_id}`
    pub fn derive(resume_id: &str, jd_id: &str) -> Self {
        Self(format!("{}_{}", resume_id, jd_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 当前会话持有的问题集
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    pub id: QuestionSetId,
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(id: QuestionSetId, questions: Vec<Question>) -> Self {
        Self { id, questions }
    }

    /// 按标识查找问题
    pub fn find(&self, question_id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}

/// `/generate/questions` 请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub resume_id: String,
    pub jd_id: String,
}

/// 服务端返回的问题集
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSetPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jd_id: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub questions: Vec<Question>,
}

/// `/generate/questions` 成功响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub questions: QuestionSetPayload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
