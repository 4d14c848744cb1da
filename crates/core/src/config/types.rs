use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::ticket::Category;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub hall: HallConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

/// Sizing and prefixing for every category in the hall.
///
/// Bank sizes are configuration, never constants; the defaults mirror
/// the reference branch layout (4 teller counters, 3 customer-service
/// counters).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HallConfig {
    #[serde(default = "default_teller")]
    pub teller: CategoryConfig,
    #[serde(default = "default_customer_service")]
    pub customer_service: CategoryConfig,
}

impl Default for HallConfig {
    fn default() -> Self {
        Self {
            teller: default_teller(),
            customer_service: default_customer_service(),
        }
    }
}

impl HallConfig {
    /// The section for one category.
    pub fn category(&self, category: Category) -> &CategoryConfig {
        match category {
            Category::Teller => &self.teller,
            Category::CustomerService => &self.customer_service,
        }
    }
}

/// One category's ticket prefix and counter-bank size.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CategoryConfig {
    /// Ticket code prefix, e.g. "A".
    pub prefix: String,
    /// Number of counters in the bank.
    pub counters: usize,
}

fn default_teller() -> CategoryConfig {
    CategoryConfig {
        prefix: "A".to_string(),
        counters: 4,
    }
}

fn default_customer_service() -> CategoryConfig {
    CategoryConfig {
        prefix: "B".to_string(),
        counters: 3,
    }
}
