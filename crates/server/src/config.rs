use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 3000;
const PORT_VAR: &str = "KOLTUK_PORT";
const SEED_VAR: &str = "KOLTUK_SEED";

pub struct Config {
    pub port: u16,
    /// CSV sheet of trips loaded on start up.
    pub seed_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            seed_path: None,
        }
    }
}

impl Config {
    /// The first command line argument wins over `KOLTUK_SEED` for the seed sheet.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(port) = env::var(PORT_VAR).ok().and_then(|port| port.parse().ok()) {
            config.port = port;
        }
        config.seed_path = env::args()
            .nth(1)
            .or_else(|| env::var(SEED_VAR).ok())
            .map(PathBuf::from);
        config
    }
}
