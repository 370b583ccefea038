//! 测试替身：脚本化的服务端与记录型视图

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::clients::{endpoints, InterviewApi};
use crate::error::ApiError;
use crate::models::{
    EvaluateRequest, EvaluateResponse, Evaluation, GenerateRequest, GenerateResponse,
    JdUploadResponse, JobSummary, Question, QuestionId, QuestionSetPayload, ResumeSummary,
    ResumeUploadResponse, UploadFile, UploadKind, UploadStatus,
};
use crate::services::{Control, View};

// ========== 脚本化服务端 ==========

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    UploadResume(String),
    UploadJd(String),
    Generate(GenerateRequest),
    Evaluate(EvaluateRequest),
}

type Script<T> = Mutex<VecDeque<Result<T, ApiError>>>;

/// 按入队顺序返回预设结果，并记录收到的每个请求
#[derive(Default)]
pub struct FakeApi {
    resume: Script<ResumeUploadResponse>,
    jd: Script<JdUploadResponse>,
    generate: Script<GenerateResponse>,
    evaluate: Script<EvaluateResponse>,
    calls: Mutex<Vec<ApiCall>>,
}

impl FakeApi {
    pub fn with_resume(self, result: Result<ResumeUploadResponse, ApiError>) -> Self {
        self.resume.lock().unwrap().push_back(result);
        self
    }

    pub fn with_jd(self, result: Result<JdUploadResponse, ApiError>) -> Self {
        self.jd.lock().unwrap().push_back(result);
        self
    }

    pub fn with_generate(self, result: Result<GenerateResponse, ApiError>) -> Self {
        self.generate.lock().unwrap().push_back(result);
        self
    }

    pub fn with_evaluate(self, result: Result<EvaluateResponse, ApiError>) -> Self {
        self.evaluate.lock().unwrap().push_back(result);
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }
}

fn next<T>(script: &Script<T>, endpoint: &str) -> Result<T, ApiError> {
    script
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| panic!("unexpected call to {}", endpoint))
}

#[async_trait]
impl InterviewApi for FakeApi {
    async fn upload_resume(&self, file: &UploadFile) -> Result<ResumeUploadResponse, ApiError> {
        self.record(ApiCall::UploadResume(file.file_name.clone()));
        next(&self.resume, endpoints::UPLOAD_RESUME)
    }

    async fn upload_jd(&self, file: &UploadFile) -> Result<JdUploadResponse, ApiError> {
        self.record(ApiCall::UploadJd(file.file_name.clone()));
        next(&self.jd, endpoints::UPLOAD_JD)
    }

    async fn generate_questions(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError> {
        self.record(ApiCall::Generate(request.clone()));
        next(&self.generate, endpoints::GENERATE_QUESTIONS)
    }

    async fn evaluate_answer(&self, request: &EvaluateRequest) -> Result<EvaluateResponse, ApiError> {
        self.record(ApiCall::Evaluate(request.clone()));
        next(&self.evaluate, endpoints::EVALUATE_ANSWER)
    }
}

pub fn resume_ok(id: &str, name: Option<&str>) -> Result<ResumeUploadResponse, ApiError> {
    Ok(ResumeUploadResponse {
        resume_id: id.to_string(),
        resume: ResumeSummary {
            name: name.map(str::to_string),
            ..ResumeSummary::default()
        },
        message: None,
    })
}

pub fn jd_ok(id: &str, title: Option<&str>) -> Result<JdUploadResponse, ApiError> {
    Ok(JdUploadResponse {
        jd_id: id.to_string(),
        jd: JobSummary {
            title: title.map(str::to_string),
            ..JobSummary::default()
        },
        message: None,
    })
}

pub fn questions_ok(questions: &[(QuestionId, &str, &str)]) -> Result<GenerateResponse, ApiError> {
    Ok(GenerateResponse {
        questions: QuestionSetPayload {
            resume_id: None,
            jd_id: None,
            questions: questions
                .iter()
                .map(|(id, content, category)| Question {
                    id: *id,
                    content: content.to_string(),
                    category: category.to_string(),
                })
                .collect(),
        },
        message: None,
    })
}

pub fn evaluation_ok(score: f64, feedback: &str, suggestions: &str) -> Result<EvaluateResponse, ApiError> {
    Ok(EvaluateResponse {
        evaluation: Evaluation {
            score,
            feedback: feedback.to_string(),
            suggestions: suggestions.to_string(),
            answer_id: None,
        },
        message: None,
    })
}

pub fn rejected(endpoint: &str, status: u16, message: Option<&str>) -> ApiError {
    ApiError::Rejected {
        endpoint: endpoint.to_string(),
        status,
        message: message.map(str::to_string),
    }
}

// ========== 记录型视图 ==========

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    UploadStatus(UploadKind, UploadStatus),
    GenerateEnabled(bool),
    List(Vec<QuestionId>, Option<QuestionId>),
    Detail(Option<QuestionId>),
    Evaluation(Option<Evaluation>),
    ScrollToEvaluation,
    Busy(Control, bool),
    Notify(String),
}

/// 当前展示内容（由事件折叠得到）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayState {
    pub resume_status: Option<UploadStatus>,
    pub jd_status: Option<UploadStatus>,
    pub generate_enabled: Option<bool>,
    pub list: Vec<QuestionId>,
    pub active: Option<QuestionId>,
    pub detail: Option<QuestionId>,
    pub evaluation: Option<Evaluation>,
}

#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
    display: Mutex<DisplayState>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn display(&self) -> DisplayState {
        self.display.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Notify(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    /// 控件最近一次的占用状态
    pub fn busy(&self, control: Control) -> Option<bool> {
        self.events().into_iter().rev().find_map(|e| match e {
            ViewEvent::Busy(c, busy) if c == control => Some(busy),
            _ => None,
        })
    }

    fn push(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl View for RecordingView {
    fn render_upload_status(&self, kind: UploadKind, status: &UploadStatus) {
        self.push(ViewEvent::UploadStatus(kind, status.clone()));
        let mut display = self.display.lock().unwrap();
        match kind {
            UploadKind::Resume => display.resume_status = Some(status.clone()),
            UploadKind::Jd => display.jd_status = Some(status.clone()),
        }
    }

    fn set_generate_enabled(&self, enabled: bool) {
        self.push(ViewEvent::GenerateEnabled(enabled));
        self.display.lock().unwrap().generate_enabled = Some(enabled);
    }

    fn render_list(&self, questions: &[Question], active: Option<QuestionId>) {
        let ids: Vec<QuestionId> = questions.iter().map(|q| q.id).collect();
        self.push(ViewEvent::List(ids.clone(), active));
        let mut display = self.display.lock().unwrap();
        display.list = ids;
        display.active = active;
    }

    fn render_detail(&self, question: Option<&Question>) {
        let id = question.map(|q| q.id);
        self.push(ViewEvent::Detail(id));
        self.display.lock().unwrap().detail = id;
    }

    fn render_evaluation(&self, evaluation: Option<&Evaluation>) {
        self.push(ViewEvent::Evaluation(evaluation.cloned()));
        self.display.lock().unwrap().evaluation = evaluation.cloned();
    }

    fn scroll_to_evaluation(&self) {
        self.push(ViewEvent::ScrollToEvaluation);
    }

    fn set_busy(&self, control: Control, busy: bool) {
        self.push(ViewEvent::Busy(control, busy));
    }

    fn notify(&self, message: &str) {
        self.push(ViewEvent::Notify(message.to_string()));
    }
}
