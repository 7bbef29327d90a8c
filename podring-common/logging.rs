use anyhow::Result;
use std::path::PathBuf;
use tracing_error::ErrorLayer;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
#[path = "./logging.tests.rs"]
mod logging_tests;

/// Initializes new logging to file and returns worker guard that will flush logs on drop.\
/// Logs are written to the `HOME/.{app_name}/logs` directory and rotated daily.
pub fn initialize(app_name: &str) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let (non_blocking_appender, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(
        logs_dir(app_name),
        format!("{app_name}.log"),
    ));

    let timer = time::format_description::parse("[year]-[month padding:zero]-[day padding:zero] [hour]:[minute]:[second]")?;
    let time_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = tracing_subscriber::fmt::time::OffsetTime::new(time_offset, timer);

    let env_filter = tracing_subscriber::filter::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new(default_filter(app_name)));

    let file_subscriber = tracing_subscriber::fmt::layer()
        .compact()
        .with_file(cfg!(debug_assertions))
        .with_line_number(cfg!(debug_assertions))
        .with_target(true)
        .with_thread_ids(true)
        .with_timer(timer)
        .with_ansi(false)
        .with_writer(non_blocking_appender)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(guard)
}

/// Returns path to the logs directory for the specified application.
pub fn logs_dir(app_name: &str) -> PathBuf {
    match std::env::home_dir() {
        Some(path) => path.join(format!(".{app_name}")).join("logs"),
        None => PathBuf::from("logs"),
    }
}

fn default_filter(app_name: &str) -> String {
    let crate_name = app_name.replace('-', "_");
    if cfg!(debug_assertions) {
        format!("warn,{crate_name}=info,{crate_name}_kube=info")
    } else {
        format!("warn,{crate_name}=info")
    }
}
