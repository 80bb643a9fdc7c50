use color_eyre::eyre::eyre;

/// Base URL of the now-playing service. Supplied by the environment and
/// passed explicitly to the API client; nothing below `main` reads it from
/// ambient state.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
}

impl Config {
    pub fn new(host: impl Into<String>) -> Self {
        let host = host.into();
        Self {
            host: host.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> color_eyre::Result<Self> {
        let host = std::env::var("NOWPLAYING_HOST")
            .map_err(|_| eyre!("NOWPLAYING_HOST environment variable must be set"))?;
        if host.is_empty() {
            return Err(eyre!("NOWPLAYING_HOST must not be empty"));
        }
        Ok(Self::new(host))
    }
}
