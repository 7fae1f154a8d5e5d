use reqwest::Client;

use crate::config::Defaults;

/// Build the HTTP client shared by the storage and generation adapters.
pub fn build_client(defaults: &Defaults) -> reqwest::Result<Client> {
    Client::builder()
        .connect_timeout(defaults.connect_timeout())
        .timeout(defaults.request_timeout())
        .user_agent(concat!("descgen/", env!("CARGO_PKG_VERSION")))
        .build()
}
