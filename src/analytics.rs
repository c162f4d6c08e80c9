use once_cell::sync::Lazy;
use serde_json::{Value, json};

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Fire-and-forget product analytics (PostHog capture protocol). Capture failures
/// are logged and never surface to the request that triggered them.
#[derive(Clone)]
pub struct Analytics {
    config: Option<AnalyticsConfig>,
}

#[derive(Clone)]
struct AnalyticsConfig {
    api_key: String,
    host: String,
}

impl Analytics {
    /// Reads `POSTHOG_KEY` / `POSTHOG_HOST`; capture is disabled when the key is unset.
    pub fn from_env() -> Self {
        let config = std::env::var("POSTHOG_KEY").ok().map(|api_key| {
            let host = std::env::var("POSTHOG_HOST")
                .unwrap_or_else(|_| "https://app.posthog.com".to_string());
            AnalyticsConfig { api_key, host }
        });

        if config.is_none() {
            tracing::info!("POSTHOG_KEY not set, analytics capture disabled");
        }

        Self { config }
    }

    pub fn capture(&self, event: &str, distinct_id: &str, properties: Value) {
        let Some(config) = self.config.clone() else {
            return;
        };

        let body = json!({
            "api_key": config.api_key,
            "event": event,
            "distinct_id": distinct_id,
            "properties": properties,
        });
        let event = event.to_string();

        tokio::spawn(async move {
            let result = HTTP_CLIENT
                .post(format!("{}/capture/", config.host))
                .json(&body)
                .send()
                .await;

            match result {
                Ok(response) if !response.status().is_success() => {
                    tracing::warn!(
                        "Analytics capture '{}' rejected: {}",
                        event,
                        response.status()
                    );
                }
                Err(e) => {
                    tracing::warn!("Analytics capture '{}' failed: {}", event, e);
                }
                _ => {}
            }
        });
    }
}
