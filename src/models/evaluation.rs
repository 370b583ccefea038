use serde::{Deserialize, Serialize};
use std::fmt;

use super::question::QuestionId;

/// 面试回答
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: QuestionId,
    pub content: String,
}

/// `/evaluate/answer` 请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    pub question_set_id: String,
    pub question_id: QuestionId,
    pub answer: Answer,
}

/// 回答评估结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// 0-10 分
    pub score: f64,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub suggestions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_id: Option<i64>,
}

impl Evaluation {
    pub fn level(&self) -> ScoreLevel {
        ScoreLevel::from_score(self.score)
    }
}

/// `/evaluate/answer` 成功响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluateResponse {
    pub evaluation: Evaluation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// 分数等级
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreLevel {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
    Insufficient,
}

impl ScoreLevel {
    /// 按固定阈值从高到低匹配，首个命中即返回
    pub fn from_score(score: f64) -> Self {
        if score >= 9.0 {
            ScoreLevel::Excellent
        } else if score >= 7.0 {
            ScoreLevel::Good
        } else if score >= 5.0 {
            ScoreLevel::Average
        } else if score >= 3.0 {
            ScoreLevel::NeedsImprovement
        } else {
            ScoreLevel::Insufficient
        }
    }

    /// 展示给用户的等级文本
    pub fn label(self) -> &'static str {
        match self {
            ScoreLevel::Excellent => "优秀",
            ScoreLevel::Good => "良好",
            ScoreLevel::Average => "一般",
            ScoreLevel::NeedsImprovement => "需改进",
            ScoreLevel::Insufficient => "不足",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScoreLevel::Excellent => "excellent",
            ScoreLevel::Good => "good",
            ScoreLevel::Average => "average",
            ScoreLevel::NeedsImprovement => "needs improvement",
            ScoreLevel::Insufficient => "insufficient",
        }
    }
}

impl fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
