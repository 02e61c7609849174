use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub assets: AssetsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Static asset configuration: the directory produced by the frontend
/// build and the entry document served for non-asset routes.
#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    pub root: String,
    pub index: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
}

impl Config {
    /// Load configuration from `config.toml` (optional) and the environment.
    ///
    /// `SERVER_*` variables override file values; the plain `PORT` variable
    /// overrides the listen port on top of everything else, so the process
    /// can run in a container with only `PORT` set.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("assets.root", "dist")?
            .set_default("assets.index", "index.html")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Immutable per-process state shared with every request handler.
///
/// The static root is canonicalized once here; a missing or unreadable root
/// fails construction and the process must not start.
pub struct AppState {
    pub config: Config,
    pub static_root: PathBuf,
    pub fallback: PathBuf,
}

impl AppState {
    pub fn new(config: &Config) -> std::io::Result<Self> {
        let static_root = PathBuf::from(&config.assets.root).canonicalize()?;
        let fallback = static_root.join(&config.assets.index);

        Ok(Self {
            config: config.clone(),
            static_root,
            fallback,
        })
    }
}
