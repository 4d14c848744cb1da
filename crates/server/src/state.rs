use loket_core::{Config, ServiceHall};

/// Shared application state
pub struct AppState {
    config: Config,
    hall: ServiceHall,
}

impl AppState {
    pub fn new(config: Config, hall: ServiceHall) -> Self {
        Self { config, hall }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn hall(&self) -> &ServiceHall {
        &self.hall
    }
}
