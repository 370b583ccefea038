//! 会话状态
//!
//! 封装"当前上传了什么、生成了哪组问题、正在回答哪一题"

use crate::error::ValidationError;
use crate::models::{
    Answer, EvaluateRequest, Evaluation, GenerateRequest, Question, QuestionId, QuestionSet,
    QuestionSetId, UploadKind,
};

/// 会话状态，页面刷新（进程重启）前一直有效
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// 简历标识，上传成功后设置，会话内不清除
    pub resume_id: Option<String>,
    /// JD 标识
    pub jd_id: Option<String>,
    /// 最近一次生成的问题集
    pub question_set: Option<QuestionSet>,
    /// 当前选中的问题
    pub current_question_id: Option<QuestionId>,
    /// 正在编辑的回答
    pub answer_draft: String,
    /// 最近一次评估结果
    pub evaluation: Option<Evaluation>,
}

impl SessionState {
    /// 两个标识都存在时才允许生成问题
    pub fn can_generate(&self) -> bool {
        self.resume_id.is_some() && self.jd_id.is_some()
    }

    pub fn upload_id(&self, kind: UploadKind) -> Option<&str> {
        match kind {
            UploadKind::Resume => self.resume_id.as_deref(),
            UploadKind::Jd => self.jd_id.as_deref(),
        }
    }

    pub(crate) fn set_upload_id(&mut self, kind: UploadKind, id: String) {
        match kind {
            UploadKind::Resume => self.resume_id = Some(id),
            UploadKind::Jd => self.jd_id = Some(id),
        }
    }

    pub fn question_set_id(&self) -> Option<&QuestionSetId> {
        self.question_set.as_ref().map(|set| &set.id)
    }

    pub fn current_question(&self) -> Option<&Question> {
        let id = self.current_question_id?;
        self.question_set.as_ref()?.find(id)
    }

    /// 生成请求，缺少任一标识时返回 `None`
    pub fn generate_request(&self) -> Option<GenerateRequest> {
        Some(GenerateRequest {
            resume_id: self.resume_id.clone()?,
            jd_id: self.jd_id.clone()?,
        })
    }

    /// 评估请求，回答内容原样提交（不去除首尾空白）
    pub fn evaluate_request(&self) -> Result<EvaluateRequest, ValidationError> {
        let (Some(question_id), Some(set)) = (self.current_question_id, self.question_set.as_ref()) else {
            return Err(ValidationError::NoQuestionSelected);
        };

        if self.answer_draft.trim().is_empty() {
            return Err(ValidationError::EmptyAnswer);
        }

        Ok(EvaluateRequest {
            question_set_id: set.id.to_string(),
            question_id,
            answer: Answer {
                question_id,
                content: self.answer_draft.clone(),
            },
        })
    }
}
