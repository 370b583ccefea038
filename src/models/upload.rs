//! 上传相关的数据模型
//!
//! 包括待上传文件、简历/JD 上传的响应体，以及上传状态的展示结构

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::services::Control;

/// 上传类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadKind {
    /// 简历
    Resume,
    /// 职位描述
    Jd,
}

impl UploadKind {
    /// multipart 表单中的文件字段名
    pub fn field_name(self) -> &'static str {
        match self {
            UploadKind::Resume => "resume",
            UploadKind::Jd => "jd",
        }
    }

    /// 触发该上传的控件
    pub fn control(self) -> Control {
        match self {
            UploadKind::Resume => Control::ResumeUpload,
            UploadKind::Jd => Control::JdUpload,
        }
    }

    /// 服务端未识别出名称时使用的占位文本
    pub fn placeholder(self) -> &'static str {
        match self {
            UploadKind::Resume => "未识别姓名",
            UploadKind::Jd => "未识别职位名称",
        }
    }

    /// 上传成功提示
    pub fn success_message(self, display_name: Option<&str>) -> String {
        let name = display_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.placeholder());
        match self {
            UploadKind::Resume => format!("简历上传成功: {}", name),
            UploadKind::Jd => format!("JD上传成功: {}", name),
        }
    }
}

impl fmt::Display for UploadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadKind::Resume => write!(f, "简历"),
            UploadKind::Jd => write!(f, "职位描述"),
        }
    }
}

/// 待上传的文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// 文件名（服务端以文件名作为标识）
    pub file_name: String,
    /// 文件内容
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// 文件大小（字节）
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// 解析后的简历摘要
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeSummary {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub education: Vec<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub experience: Vec<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub skills: Vec<String>,
}

/// 解析后的职位描述摘要
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobSummary {
    pub title: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub requirements: Vec<String>,
}

/// `/upload/resume` 成功响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeUploadResponse {
    pub resume_id: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub resume: ResumeSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// `/upload/jd` 成功响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JdUploadResponse {
    pub jd_id: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub jd: JobSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// 两种上传响应的统一视图
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub id: String,
    pub display_name: Option<String>,
    pub message: Option<String>,
}

impl From<ResumeUploadResponse> for UploadReceipt {
    fn from(response: ResumeUploadResponse) -> Self {
        Self {
            id: response.resume_id,
            display_name: response.resume.name,
            message: response.message,
        }
    }
}

impl From<JdUploadResponse> for UploadReceipt {
    fn from(response: JdUploadResponse) -> Self {
        Self {
            id: response.jd_id,
            display_name: response.jd.title,
            message: response.message,
        }
    }
}

/// 上传结果的内联展示
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStatus {
    Succeeded { message: String },
    Failed { reason: String },
}
