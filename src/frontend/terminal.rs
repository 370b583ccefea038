//! 终端视图
//!
//! 把展示能力逐条打印到终端

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};
use tracing::warn;

use crate::frontend::command::HELP;
use crate::models::{Evaluation, Question, QuestionId, UploadKind, UploadStatus};
use crate::services::{Control, View};
use crate::workflow::SessionState;

/// 终端视图
pub struct TerminalView<W: Write + Send> {
    out: Mutex<W>,
    labels: Mutex<HashMap<Control, &'static str>>,
    generate_enabled: Mutex<Option<bool>>,
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            labels: Mutex::new(
                Control::ALL
                    .into_iter()
                    .map(|c| (c, c.default_label()))
                    .collect(),
            ),
            generate_enabled: Mutex::new(None),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// 控件当前显示的文本
    pub fn control_label(&self, control: Control) -> &'static str {
        self.labels
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&control)
            .copied()
            .unwrap_or_else(|| control.default_label())
    }

    fn write_lines<I, S>(&self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let result = lines
            .into_iter()
            .try_for_each(|line| writeln!(out, "{}", line.as_ref()))
            .and_then(|_| out.flush());
        if let Err(e) = result {
            warn!("终端输出失败: {}", e);
        }
    }

    /// 输出一行普通信息
    pub fn render_message(&self, message: &str) {
        self.write_lines([message]);
    }

    pub fn render_help(&self) {
        self.write_lines(HELP.lines());
    }

    /// 输出会话状态
    pub fn render_status(&self, state: &SessionState) {
        let or_missing = |v: Option<&str>| v.unwrap_or("未上传").to_string();
        let mut lines = vec![
            format!("简历: {}", or_missing(state.resume_id.as_deref())),
            format!("职位描述: {}", or_missing(state.jd_id.as_deref())),
        ];

        match &state.question_set {
            Some(set) => lines.push(format!("问题集: {} (共 {} 题)", set.id, set.questions.len())),
            None => lines.push("问题集: 未生成".to_string()),
        }
        if let Some(question) = state.current_question() {
            lines.push(format!("当前问题: [{}] {}", question.id, question.content));
        }
        if !state.answer_draft.is_empty() {
            lines.push(format!("回答草稿: {}", state.answer_draft));
        }
        for control in Control::ALL {
            let label = self.control_label(control);
            if label != control.default_label() {
                lines.push(format!("进行中: {}", label));
            }
        }

        self.write_lines(lines);
    }
}

impl<W: Write + Send> View for TerminalView<W> {
    fn render_upload_status(&self, _kind: UploadKind, status: &UploadStatus) {
        match status {
            UploadStatus::Succeeded { message } => self.write_lines([format!("✅ {}", message)]),
            UploadStatus::Failed { reason } => self.write_lines([format!("❌ 错误: {}", reason)]),
        }
    }

    fn set_generate_enabled(&self, enabled: bool) {
        let changed = {
            let mut current = self
                .generate_enabled
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let changed = *current != Some(enabled);
            *current = Some(enabled);
            changed
        };

        if changed {
            let line = if enabled {
                format!("[{}] 已可用，输入 generate 开始", Control::Generate)
            } else {
                format!("[{}] 不可用：请先上传简历和职位描述", Control::Generate)
            };
            self.write_lines([line]);
        }
    }

    fn render_list(&self, questions: &[Question], active: Option<QuestionId>) {
        let header = format!("面试问题 (共 {} 题):", questions.len());
        let items = questions.iter().map(|q| {
            let marker = if active == Some(q.id) { "▶" } else { " " };
            format!("  {} [{}] {}  〔{}〕", marker, q.id, q.content, q.category)
        });
        self.write_lines(std::iter::once(header).chain(items));
    }

    fn render_detail(&self, question: Option<&Question>) {
        if let Some(q) = question {
            self.write_lines([
                format!("当前问题 [{}]: {}", q.id, q.content),
                "提示: 输入 answer <回答内容>，然后输入 submit 提交".to_string(),
            ]);
        }
    }

    fn render_evaluation(&self, evaluation: Option<&Evaluation>) {
        if let Some(e) = evaluation {
            self.write_lines([
                format!("{} 评估结果 {}", "─".repeat(12), "─".repeat(12)),
                format!("得分: {}/10 ({})", e.score, e.level()),
                format!("评价: {}", e.feedback),
                format!("改进建议: {}", e.suggestions),
                "─".repeat(34),
            ]);
        }
    }

    fn set_busy(&self, control: Control, busy: bool) {
        let label = if busy {
            control.busy_label()
        } else {
            control.default_label()
        };
        self.labels
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(control, label);

        if busy {
            self.write_lines([format!("⏳ {}", label)]);
        }
    }

    fn notify(&self, message: &str) {
        self.write_lines([format!("⚠️ {}", message)]);
    }
}
