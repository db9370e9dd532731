use std::sync::LazyLock;

use log::warn;
use shared::REVIEW_PAGE_SIZE;
use validator::Validate;

/// Where the static datasets live and how the views page through them
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct Config {
    /// Base URL of the dataset directory, relative or absolute
    #[validate(length(min = 1, message = "data base URL must not be empty"))]
    pub data_base_url: String,

    #[validate(range(min = 1, max = 50))]
    pub review_page_size: usize,

    /// Number of dataset bodies kept in memory across views
    #[validate(range(min = 1, max = 64))]
    pub cache_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_base_url: "/data".to_string(),
            review_page_size: REVIEW_PAGE_SIZE,
            cache_capacity: 16,
        }
    }
}

static CONFIG: LazyLock<Config> = LazyLock::new(Config::load);

impl Config {
    /// Builds the configuration. `DASHBOARD_DATA_URL` set at build time
    /// overrides the dataset location.
    pub fn load() -> Self {
        let mut config = Config::default();
        if let Some(url) = option_env!("DASHBOARD_DATA_URL") {
            config.data_base_url = url.to_string();
        }
        match config.validated() {
            Ok(config) => config,
            Err(e) => {
                warn!("Invalid dashboard configuration ({}), using defaults", e);
                Config::default()
            }
        }
    }

    /// Returns the configuration if every field is in range
    pub fn validated(self) -> shared::Result<Config> {
        self.validate()?;
        Ok(self)
    }

    pub fn get() -> &'static Config {
        &CONFIG
    }

    pub fn data_base_url() -> String {
        CONFIG.data_base_url.clone()
    }
}
