use std::sync::Arc;

use super::config::{Config, ConfigError};

pub struct State {
    pub config: Config,
}

impl State {
    pub fn new() -> Result<Arc<Self>, ConfigError> {
        let config = Config::load()?;

        Ok(Arc::new(Self { config }))
    }
}
