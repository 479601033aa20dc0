use std::process::ExitCode;

use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, error, warn};

// 从 lib.rs 导入模块
use course_dashboard::config::AppConfig;
use course_dashboard::errors::DashboardError;
use course_dashboard::runtime::lifetime;
use course_dashboard::services::load_dashboard;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    // 记录程序启动时间
    let start_datetime = chrono::Utc::now();

    // 初始化配置
    setup_panic!();
    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting {}...
        Project: {}
        Version: {}
        Authors: {}",
        config.app.system_name,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let mut startup = match lifetime::startup::prepare_session_startup(config).await {
        Ok(startup) => startup,
        Err(e) => return report(&e),
    };

    debug!(
        "Session startup completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_datetime)
            .num_milliseconds()
    );

    let user_id = config.session.user_id;
    let dashboard = match load_dashboard(&mut startup.store, user_id).await {
        Ok(dashboard) => dashboard,
        Err(e) => return report(&e),
    };

    match serde_json::to_string_pretty(&dashboard) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => report(&DashboardError::from(e)),
    }
}

fn report(err: &DashboardError) -> ExitCode {
    error!(code = err.code(), "{}", err.message());
    #[cfg(debug_assertions)]
    eprintln!("{}", err.format_colored());
    #[cfg(not(debug_assertions))]
    eprintln!("{}", err.format_simple());
    ExitCode::FAILURE
}
