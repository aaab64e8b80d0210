use crate::{api::ApiClient, config::Config};

/// Configuration and backend client, provided once at the root.
#[derive(Debug, Clone, PartialEq)]
pub struct AppContext {
    pub config: Config,
    pub api: ApiClient,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let api = ApiClient::from_config(&config);

        Self { config, api }
    }
}
