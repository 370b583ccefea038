use std::path::PathBuf;
use thiserror::Error;

use crate::models::QuestionId;

/// 帮助文本
pub const HELP: &str = "\
可用命令:
  resume <路径>    上传简历
  jd <路径>        上传职位描述
  generate         生成面试问题
  select <编号>    选择问题
  answer <内容>    填写当前问题的回答
  submit           提交回答并获取评估
  status           查看当前会话状态
  help             显示本帮助
  quit             退出";

/// 终端命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    UploadResume(PathBuf),
    UploadJd(PathBuf),
    Generate,
    Select(QuestionId),
    Answer(String),
    Submit,
    Status,
    Help,
    Quit,
    /// 空行
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("未知命令: {0}（输入 help 查看可用命令）")]
    Unknown(String),
    #[error("命令 {command} 缺少参数: {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("无效的问题编号: {0}")]
    InvalidQuestionId(String),
}

impl Command {
    /// 解析一行输入
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Command::Empty);
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim_start()),
            None => (line, ""),
        };

        match name.to_lowercase().as_str() {
            "resume" => Ok(Command::UploadResume(path_arg("resume", rest)?)),
            "jd" => Ok(Command::UploadJd(path_arg("jd", rest)?)),
            "generate" | "gen" => Ok(Command::Generate),
            "select" => {
                let arg = required("select", "<编号>", rest)?;
                arg.parse()
                    .map(Command::Select)
                    .map_err(|_| CommandError::InvalidQuestionId(arg.to_string()))
            }
            "answer" => Ok(Command::Answer(required("answer", "<内容>", rest)?.to_string())),
            "submit" => Ok(Command::Submit),
            "status" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn required<'a>(command: &'static str, expected: &'static str, rest: &'a str) -> Result<&'a str, CommandError> {
    let rest = rest.trim_end();
    if rest.is_empty() {
        return Err(CommandError::MissingArgument { command, expected });
    }
    Ok(rest)
}

fn path_arg(command: &'static str, rest: &str) -> Result<PathBuf, CommandError> {
    let raw = required(command, "<路径>", rest)?;
    let unquoted = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);
    Ok(PathBuf::from(unquoted))
}
