use std::path::PathBuf;

use directories::ProjectDirs;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    Layer, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_ENV: &str = "NOWTUI_LOG";
const LOG_FILE: &str = "nowtui.log";

fn data_dir() -> PathBuf {
    ProjectDirs::from("com", "nowtui", "nowtui")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".").join(".data"))
}

/// Logs go to a file; stdout belongs to the terminal UI.
pub fn initialize_logging() -> color_eyre::Result<()> {
    let directory = data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_file = std::fs::File::create(directory.join(LOG_FILE))?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
