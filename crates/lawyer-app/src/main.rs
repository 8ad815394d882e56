mod app_state;
mod cli;
mod logging;
mod oneshot;
mod ui;

use std::path::Path;
use std::process::ExitCode;

use lawyer_api::{ApiClientConfig, ApiError, HttpApiClient};
use lawyer_common::{ConfigError, LawyerError};
use lawyer_config::LawyerConfig;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = lawyer_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- AI Lawyer crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("-------------------------\n");

        default_hook(info);
    }));
}

/// Load config the way the flags ask for, then apply `--api-url`.
///
/// A config that fails to load is replaced by defaults; the error is
/// returned so it can be logged once tracing is up.
fn load_config(args: &Args) -> (LawyerConfig, Option<ConfigError>) {
    let loaded = match &args.config {
        Some(path) => lawyer_config::load_config_from(Path::new(path)),
        None => lawyer_config::load_config(),
    };
    let (mut config, error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => {
            let mut config = LawyerConfig::default();
            lawyer_config::apply_env_overrides(&mut config);
            (config, Some(e))
        }
    };
    if let Some(url) = &args.api_url {
        lawyer_config::apply_api_url(&mut config, url);
    }
    (config, error)
}

fn init_logging(args: &Args, config: &LawyerConfig) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = logging::select_directives(
        args.log_level.as_deref(),
        env.as_deref(),
        config.logging.level.as_filter(),
    );

    if !args.is_interactive() {
        logging::init_stderr(&directives);
        return;
    }
    if !config.logging.file_logging {
        return;
    }
    match lawyer_platform::ensure_dirs().and_then(|_| lawyer_platform::log_file()) {
        Ok(path) => logging::init_file(&directives, &path),
        Err(e) => eprintln!("file logging disabled: {e}"),
    }
}

/// HTTP client configured from the `[api]` section.
pub(crate) fn build_api_client(config: &LawyerConfig) -> Result<HttpApiClient, ApiError> {
    HttpApiClient::new(
        ApiClientConfig::new(config.api.base_url.as_str())
            .with_connect_timeout(config.api.connect_timeout())
            .with_request_timeout(config.api.request_timeout())
            .with_upload_timeout(config.api.upload_timeout()),
    )
}

async fn run(command: Command, config: LawyerConfig) -> Result<ExitCode, LawyerError> {
    match command {
        Command::Chat => {
            app_state::run_chat(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Ask {
            question,
            session_id,
        } => oneshot::ask(&config, &question, session_id.as_deref()).await,
        Command::Upload { file, permanent } => {
            oneshot::upload(&config, Path::new(&file), permanent).await
        }
        Command::Config => Ok(oneshot::print_config(&config)),
    }
}

fn main() -> ExitCode {
    // Install panic hook for crash reports
    install_panic_hook();

    let args = cli::parse();
    let (config, load_error) = load_config(&args);
    init_logging(&args, &config);

    tracing::info!("AI Lawyer v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    tracing::info!("Backend: {}", config.api.base_url);

    // Ensure platform directories exist
    if let Err(e) = lawyer_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let code = match runtime.block_on(run(args.command(), config)) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    };
    tracing::info!("Shutdown complete");
    code
}
