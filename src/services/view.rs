//! 展示能力 - 业务能力层
//!
//! 只描述"界面能展示什么"，不关心流程

use std::fmt;

use crate::models::{Evaluation, Question, QuestionId, UploadKind, UploadStatus};

/// 会被请求占用的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    ResumeUpload,
    JdUpload,
    Generate,
    SubmitAnswer,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::ResumeUpload,
        Control::JdUpload,
        Control::Generate,
        Control::SubmitAnswer,
    ];

    /// 空闲时的控件文本
    pub fn default_label(self) -> &'static str {
        match self {
            Control::ResumeUpload => "上传简历",
            Control::JdUpload => "上传职位描述",
            Control::Generate => "生成面试问题",
            Control::SubmitAnswer => "提交回答",
        }
    }

    /// 请求进行中的控件文本
    pub fn busy_label(self) -> &'static str {
        match self {
            Control::ResumeUpload | Control::JdUpload => "上传中...",
            Control::Generate => "生成中...",
            Control::SubmitAnswer => "评估中...",
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_label())
    }
}

/// 展示能力集合
///
/// 方法均为 `&self`：实现方像界面句柄一样自行管理内部可变性，
/// 以便多个进行中的操作共享同一个视图
pub trait View: Send + Sync {
    /// 内联展示上传结果
    fn render_upload_status(&self, kind: UploadKind, status: &UploadStatus);

    /// 切换"生成"控件的可用状态
    fn set_generate_enabled(&self, enabled: bool);

    /// 重新渲染问题列表，`active` 为高亮的问题
    fn render_list(&self, questions: &[Question], active: Option<QuestionId>);

    /// 展示当前问题详情，`None` 表示清空
    fn render_detail(&self, question: Option<&Question>);

    /// 展示评估结果，`None` 表示清空
    fn render_evaluation(&self, evaluation: Option<&Evaluation>);

    /// 将评估结果滚动到可见区域
    fn scroll_to_evaluation(&self) {}

    /// 控件进入/退出请求中状态
    fn set_busy(&self, control: Control, busy: bool);

    /// 阻塞式提示
    fn notify(&self, message: &str);
}
