//! 交互控制器 - 流程层
//!
//! 核心职责：定义"上传简历与职位描述 → 生成 → 选题 → 回答 → 评估"的完整顺序
//!
//! - 所有会话状态都在 `SessionState` 中，锁只在两次 await 之间短暂持有
//! - 每个请求期间占用对应控件（`BusyGuard`），任何退出路径都会释放
//! - 所有失败都会通过视图展示，然后再作为 `Err` 返回给调用方

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info, warn};

use crate::clients::InterviewApi;
use crate::error::{AppError, AppResult, ValidationError};
use crate::models::{
    Evaluation, Question, QuestionId, QuestionSet, QuestionSetId, UploadFile, UploadKind,
    UploadReceipt, UploadStatus,
};
use crate::services::{BusyGuard, Control, ControlFlags, View};
use crate::utils::logging::truncate_text;
use crate::workflow::session::SessionState;

const UPLOAD_FALLBACK: &str = "上传失败";
const GENERATE_FALLBACK: &str = "生成问题失败";
const EVALUATE_FALLBACK: &str = "评估失败";
const BUSY_NOTICE: &str = "操作进行中，请稍候";

/// 交互控制器
///
/// - 只依赖服务契约（`InterviewApi`）和展示能力（`View`）
/// - 不持有任何界面资源
pub struct InteractionController<A: InterviewApi, V: View> {
    api: A,
    view: Arc<V>,
    flags: Arc<ControlFlags>,
    state: Mutex<SessionState>,
    max_upload_bytes: Option<usize>,
}

impl<A: InterviewApi, V: View> InteractionController<A, V> {
    /// 创建新的控制器
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view: Arc::new(view),
            flags: Arc::new(ControlFlags::default()),
            state: Mutex::new(SessionState::default()),
            max_upload_bytes: None,
        }
    }

    /// 设置本地上传大小限制，超出时不发出请求
    pub fn with_upload_limit(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = Some(max_upload_bytes);
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &Arc<V> {
        &self.view
    }

    pub fn busy_flags(&self) -> &Arc<ControlFlags> {
        &self.flags
    }

    /// 当前会话状态的副本
    pub fn snapshot(&self) -> SessionState {
        self.state().clone()
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn occupy(&self, control: Control) -> AppResult<BusyGuard<V>> {
        BusyGuard::acquire(control, &self.flags, &self.view).map_err(|e| {
            self.view.notify(BUSY_NOTICE);
            e
        })
    }

    /// 本地校验失败：提示用户，不修改状态
    fn reject(&self, err: ValidationError) -> AppError {
        warn!("⚠️ {}", err);
        self.view.notify(&err.to_string());
        err.into()
    }

    // ========== 上传 ==========

    /// 上传简历，成功时返回简历标识
    pub async fn upload_resume(&self, file: UploadFile) -> AppResult<String> {
        self.upload(UploadKind::Resume, file).await
    }

    /// 上传职位描述，成功时返回 JD 标识
    pub async fn upload_jd(&self, file: UploadFile) -> AppResult<String> {
        self.upload(UploadKind::Jd, file).await
    }

    /// 上传文件
    ///
    /// 结果内联展示；每次上传尝试（包括控件占用被拒）后都会重新计算"生成"控件的可用状态
    pub async fn upload(&self, kind: UploadKind, file: UploadFile) -> AppResult<String> {
        let _guard = match self.occupy(kind.control()) {
            Ok(guard) => guard,
            Err(e) => {
                self.check_generate_eligibility();
                return Err(e);
            }
        };

        info!("📤 上传{}: {} ({} 字节)", kind, file.file_name, file.size());

        let outcome = match self.send_upload(kind, &file).await {
            Ok(receipt) => {
                if let Some(message) = &receipt.message {
                    debug!("服务端消息: {}", message);
                }
                self.state().set_upload_id(kind, receipt.id.clone());

                let message = kind.success_message(receipt.display_name.as_deref());
                info!("✓ {}", message);
                self.view
                    .render_upload_status(kind, &UploadStatus::Succeeded { message });
                Ok(receipt.id)
            }
            Err(err) => {
                error!("❌ {}上传失败: {}", kind, err);
                let reason = err.user_message(UPLOAD_FALLBACK);
                self.view
                    .render_upload_status(kind, &UploadStatus::Failed { reason });
                Err(err)
            }
        };

        self.check_generate_eligibility();
        outcome
    }

    async fn send_upload(&self, kind: UploadKind, file: &UploadFile) -> AppResult<UploadReceipt> {
        if let Some(limit) = self.max_upload_bytes {
            if file.size() > limit {
                return Err(ValidationError::FileTooLarge {
                    file_name: file.file_name.clone(),
                    size: file.size(),
                    limit,
                }
                .into());
            }
        }

        let receipt = match kind {
            UploadKind::Resume => self.api.upload_resume(file).await?.into(),
            UploadKind::Jd => self.api.upload_jd(file).await?.into(),
        };
        Ok(receipt)
    }

    /// 根据两个标识切换"生成"控件
    pub fn check_generate_eligibility(&self) -> bool {
        let enabled = self.state().can_generate();
        self.view.set_generate_enabled(enabled);
        enabled
    }

    // ========== 生成问题 ==========

    /// 生成面试问题，成功时返回推导出的问题集标识
    ///
    /// 缺少任一标识时只提示用户，不发请求，也不触碰控件
    pub async fn generate_questions(&self) -> AppResult<QuestionSetId> {
        let Some(request) = self.state().generate_request() else {
            return Err(self.reject(ValidationError::MissingUploads));
        };

        let _guard = self.occupy(Control::Generate)?;

        info!(
            "🧠 正在生成面试问题 (简历: {}, JD: {})",
            request.resume_id, request.jd_id
        );

        match self.api.generate_questions(&request).await {
            Ok(response) => {
                let set_id = QuestionSetId::derive(&request.resume_id, &request.jd_id);
                let questions = response.questions.questions;

                {
                    let mut state = self.state();
                    state.question_set = Some(QuestionSet::new(set_id.clone(), questions.clone()));
                    state.current_question_id = None;
                    state.answer_draft.clear();
                    state.evaluation = None;
                }

                info!("✓ 问题集 {} 共 {} 题", set_id, questions.len());
                self.render_questions(&questions);
                self.view.render_detail(None);
                self.view.render_evaluation(None);
                Ok(set_id)
            }
            Err(err) => {
                let err = AppError::from(err);
                error!("❌ 生成问题失败: {}", err);
                self.view
                    .notify(&format!("错误: {}", err.user_message(GENERATE_FALLBACK)));
                Err(err)
            }
        }
    }

    /// 按接收顺序重新渲染问题列表，不保留任何高亮
    pub fn render_questions(&self, questions: &[Question]) {
        self.view.render_list(questions, None);
    }

    // ========== 选题与回答 ==========

    /// 选中问题
    ///
    /// 重复选中同一题得到相同的展示；回答草稿清空
    pub fn select_question(&self, question_id: QuestionId) -> AppResult<Question> {
        let selected = {
            let mut state = self.state();
            let lookup = state
                .question_set
                .as_ref()
                .map(|set| (set.find(question_id).cloned(), set.questions.clone()));

            match lookup {
                None => Err(ValidationError::NoQuestionSet),
                Some((None, _)) => Err(ValidationError::UnknownQuestion { id: question_id }),
                Some((Some(question), questions)) => {
                    state.current_question_id = Some(question.id);
                    state.answer_draft.clear();
                    Ok((question, questions))
                }
            }
        };

        let (question, questions) = selected.map_err(|e| self.reject(e))?;

        debug!("选中问题 {}: {}", question.id, truncate_text(&question.content, 40));
        self.view.render_list(&questions, Some(question.id));
        self.view.render_detail(Some(&question));
        Ok(question)
    }

    /// 更新当前问题的回答草稿
    pub fn set_answer(&self, content: impl Into<String>) {
        self.state().answer_draft = content.into();
    }

    /// 提交回答并展示评估
    pub async fn submit_answer(&self) -> AppResult<Evaluation> {
        let request = self.state().evaluate_request();
        let request = request.map_err(|e| self.reject(e))?;

        let _guard = self.occupy(Control::SubmitAnswer)?;

        info!(
            "📝 提交问题 {} 的回答: {}",
            request.question_id,
            truncate_text(&request.answer.content, 40)
        );

        match self.api.evaluate_answer(&request).await {
            Ok(response) => {
                let evaluation = response.evaluation;
                self.state().evaluation = Some(evaluation.clone());
                info!("✓ 得分 {}/10 ({})", evaluation.score, evaluation.level());
                self.render_evaluation(&evaluation);
                Ok(evaluation)
            }
            Err(err) => {
                let err = AppError::from(err);
                error!("❌ 评估失败: {}", err);
                self.view
                    .notify(&format!("错误: {}", err.user_message(EVALUATE_FALLBACK)));
                Err(err)
            }
        }
    }

    /// 展示评估并滚动到可见区域
    pub fn render_evaluation(&self, evaluation: &Evaluation) {
        self.view.render_evaluation(Some(evaluation));
        self.view.scroll_to_evaluation();
    }
}
