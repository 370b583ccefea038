//! # Interview Client
//!
//! 简历/职位描述面试问题服务的客户端
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（HTTP Client），只暴露能力
//! - `HttpExecutor` - 唯一的 client owner，提供 JSON / multipart 请求能力
//!
//! ### ② 服务契约（Clients）
//! - `clients/` - 后端四个接口的类型化契约
//! - `InterviewApi` - 上传简历 / 上传 JD / 生成问题 / 评估回答
//!
//! ### ③ 业务能力层（Services）
//! - `services/` - 描述"界面能做什么"
//! - `View` - 展示能力集合
//! - `BusyGuard` - 请求期间占用控件，作用域结束自动释放
//!
//! ### ④ 流程层（Workflow）
//! - `workflow/` - 定义"上传 → 生成 → 选题 → 回答 → 评估"的完整流程
//! - `SessionState` - 会话状态
//! - `InteractionController` - 流程编排
//!
//! ### ⑤ 前端（Frontend）
//! - `frontend/` - 终端视图与命令循环
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod frontend;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

#[cfg(test)]
mod test_support;

// 重新导出常用类型
pub use clients::{HttpInterviewApi, InterviewApi};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use frontend::TerminalView;
pub use infrastructure::HttpExecutor;
pub use models::{Evaluation, Question, ScoreLevel, UploadFile, UploadKind};
pub use services::{BusyGuard, Control, View};
pub use workflow::{InteractionController, SessionState};
