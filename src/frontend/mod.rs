//! 终端前端
//!
//! 以命令行交互的方式驱动 `InteractionController`

pub mod command;
pub mod session;
pub mod terminal;

pub use command::{Command, CommandError};
pub use session::{execute, run_session, upload_from_path};
pub use terminal::TerminalView;
