//! Open Food Facts client

use std::time::Duration;

use async_trait::async_trait;

use super::database::{LookupError, ProductDatabase, ProductResponse};
use crate::config::DatabaseSettings;

/// Blocking `ureq` client run on the tokio blocking pool
#[derive(Clone)]
pub struct OpenFoodFactsClient {
    agent: ureq::Agent,
    base_url: String,
}

impl OpenFoodFactsClient {
    pub fn new(settings: &DatabaseSettings) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .user_agent(&settings.user_agent)
            .build();

        Self {
            agent,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Query URL for `barcode`, which is used verbatim as one path segment
    pub fn product_url(&self, barcode: &str) -> String {
        format!(
            "{}/api/v0/product/{}.json",
            self.base_url,
            urlencoding::encode(barcode)
        )
    }
}

impl Default for OpenFoodFactsClient {
    fn default() -> Self {
        Self::new(&DatabaseSettings::default())
    }
}

impl std::fmt::Debug for OpenFoodFactsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenFoodFactsClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ProductDatabase for OpenFoodFactsClient {
    async fn fetch(&self, barcode: &str) -> Result<ProductResponse, LookupError> {
        let agent = self.agent.clone();
        let url = self.product_url(barcode);
        tokio::task::spawn_blocking(move || fetch_blocking(&agent, &url)).await?
    }
}

fn fetch_blocking(agent: &ureq::Agent, url: &str) -> Result<ProductResponse, LookupError> {
    tracing::debug!("GET {}", url);

    let response = agent.get(url).call().map_err(|e| match e {
        ureq::Error::Status(code, _) => LookupError::Status(code),
        other => LookupError::Transport(other.to_string()),
    })?;

    let body = response.into_string()?;
    let parsed: ProductResponse = serde_json::from_str(&body)?;

    if !parsed.is_found() {
        tracing::debug!(
            "Product database answered status {:?} ({})",
            parsed.status,
            parsed.status_verbose.as_deref().unwrap_or("no detail")
        );
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OpenFoodFactsClient {
        OpenFoodFactsClient::new(&DatabaseSettings {
            base_url: "https://off.test/".to_string(),
            ..DatabaseSettings::default()
        })
    }

    #[test]
    fn test_product_url_for_barcode() {
        assert_eq!(
            client().product_url("3017620422003"),
            "https://off.test/api/v0/product/3017620422003.json"
        );
    }

    #[test]
    fn test_product_url_escapes_reserved_characters() {
        assert_eq!(
            client().product_url("https://x.io/p?id=7#top"),
            "https://off.test/api/v0/product/https%3A%2F%2Fx.io%2Fp%3Fid%3D7%23top.json"
        );
        assert_eq!(
            client().product_url("two words"),
            "https://off.test/api/v0/product/two%20words.json"
        );
    }
}
