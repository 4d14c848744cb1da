use crate::ticket::Category;

use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Every category has at least one counter and a non-empty prefix
/// - Category prefixes are distinct (display codes must not collide)
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    for category in Category::ALL {
        let section = config.hall.category(category);
        if section.counters == 0 {
            return Err(ConfigError::ValidationError(format!(
                "hall.{}.counters must be at least 1",
                category
            )));
        }
        if section.prefix.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "hall.{}.prefix cannot be empty",
                category
            )));
        }
    }

    if config.hall.teller.prefix == config.hall.customer_service.prefix {
        return Err(ConfigError::ValidationError(format!(
            "category prefixes must be distinct, both are \"{}\"",
            config.hall.teller.prefix
        )));
    }

    Ok(())
}
