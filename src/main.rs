use anyhow::{Context, Result};
use clap::Parser;
use interview_client::frontend::{self, TerminalView};
use interview_client::utils::logging;
use interview_client::{Config, HttpInterviewApi, InteractionController, UploadKind};
use std::path::PathBuf;
use tokio::io::BufReader;

#[derive(Parser)]
#[command(name = "interview_client")]
#[command(about = "简历/职位描述面试问题生成与回答评估客户端")]
struct Cli {
    /// TOML 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 后端服务地址（覆盖配置）
    #[arg(long)]
    base_url: Option<String>,

    /// 启动时上传的简历
    #[arg(long)]
    resume: Option<PathBuf>,

    /// 启动时上传的职位描述
    #[arg(long)]
    jd: Option<PathBuf>,

    /// 显示详细日志
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("无法加载配置文件: {}", path.display()))?,
        None => Config::from_env(),
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    config.verbose_logging |= cli.verbose;

    // 初始化日志
    logging::init(config.verbose_logging);
    logging::log_startup(&config);

    let api = HttpInterviewApi::new(&config).context("无法创建 HTTP 客户端")?;
    let controller = InteractionController::new(api, TerminalView::stdout())
        .with_upload_limit(config.max_upload_bytes);

    controller.check_generate_eligibility();

    // 两个上传互不依赖，同时进行
    let resume = async {
        if let Some(path) = &cli.resume {
            frontend::upload_from_path(&controller, UploadKind::Resume, path).await;
        }
    };
    let jd = async {
        if let Some(path) = &cli.jd {
            frontend::upload_from_path(&controller, UploadKind::Jd, path).await;
        }
    };
    futures::join!(resume, jd);

    controller.view().render_help();
    frontend::run_session(&controller, BufReader::new(tokio::io::stdin()))
        .await
        .context("读取终端输入失败")?;

    Ok(())
}
