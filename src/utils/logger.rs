use std::env;
use std::io::Write;

use chrono::Utc;
use log::{info, SetLoggerError};

/// Filter used when `RUST_LOG` is not set: our crate at `LOG_LEVEL`
/// (default `info`), everything else (iced, wgpu, reqwest) at `warn`.
pub fn default_filter(log_level: Option<&str>) -> String {
    let level = log_level.map(str::trim).filter(|l| !l.is_empty()).unwrap_or("info");
    format!("warn,prompt_enhancer={},chain_check={}", level, level)
}

/// Installs the global `env_logger` with a timestamped line format.
pub fn init() -> Result<(), SetLoggerError> {
    let fallback = default_filter(env::var("LOG_LEVEL").ok().as_deref());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(fallback))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] [{}:{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init()?;

    info!("Prompt enhancer logger initialized");
    Ok(())
}
