//! 终端会话循环
//!
//! 逐行读取命令并分发给控制器

use std::io::Write;
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::clients::InterviewApi;
use crate::frontend::command::Command;
use crate::frontend::terminal::TerminalView;
use crate::models::{load_upload_file, UploadKind};
use crate::services::View;
use crate::workflow::InteractionController;

/// 读取文件并上传
///
/// 读取失败时直接提示，不会发出请求
pub async fn upload_from_path<A: InterviewApi, V: View>(
    controller: &InteractionController<A, V>,
    kind: UploadKind,
    path: &Path,
) {
    let file = match load_upload_file(path).await {
        Ok(file) => file,
        Err(e) => {
            controller.view().notify(&format!("错误: {}", e));
            return;
        }
    };

    if let Err(e) = controller.upload(kind, file).await {
        debug!("{}上传未完成: {}", kind, e);
    }
}

/// 执行单条命令，返回是否继续会话
pub async fn execute<A: InterviewApi, W: Write + Send>(
    controller: &InteractionController<A, TerminalView<W>>,
    command: Command,
) -> bool {
    let view = controller.view();

    match command {
        Command::UploadResume(path) => upload_from_path(controller, UploadKind::Resume, &path).await,
        Command::UploadJd(path) => upload_from_path(controller, UploadKind::Jd, &path).await,
        Command::Generate => {
            if let Err(e) = controller.generate_questions().await {
                debug!("生成未完成: {}", e);
            }
        }
        Command::Select(id) => {
            if let Err(e) = controller.select_question(id) {
                debug!("选题未完成: {}", e);
            }
        }
        Command::Answer(text) => {
            controller.set_answer(text);
            view.render_message("已记录回答，输入 submit 提交");
        }
        Command::Submit => {
            if let Err(e) = controller.submit_answer().await {
                debug!("提交未完成: {}", e);
            }
        }
        Command::Status => view.render_status(&controller.snapshot()),
        Command::Help => view.render_help(),
        Command::Quit => return false,
        Command::Empty => {}
    }

    true
}

/// 运行交互会话，直到输入 quit 或输入流结束
pub async fn run_session<A, W, R>(
    controller: &InteractionController<A, TerminalView<W>>,
    input: R,
) -> std::io::Result<()>
where
    A: InterviewApi,
    W: Write + Send,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Ok(command) => {
                if !execute(controller, command).await {
                    break;
                }
            }
            Err(e) => controller.view().notify(&e.to_string()),
        }
    }

    Ok(())
}
