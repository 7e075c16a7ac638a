use rrd_cli::cli;
use rrd_cli::errors::{AppError, AppResult};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> AppResult<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let rt = tokio::runtime::Runtime::new().map_err(|e| AppError::IoError(e.to_string()))?;
    rt.block_on(cli::cli())?;
    Ok(())
}
