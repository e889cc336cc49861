//! HTTP implementation of [`SentimentModel`].
//!
//! Posts `{"text": ...}` to an inference endpoint returning
//! `{"label": "positive", "score": 0.93}` (Cardiff-style binary head).

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

use crate::{ClassifierOutput, SentimentModel};

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct ClassifyResponse {
    label: String,
    score: f64,
}

/// Sentiment model backed by an HTTP inference endpoint.
pub struct HttpSentimentModel {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl HttpSentimentModel {
    pub fn new(url: String, api_key: Option<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build sentiment HTTP client")?;
        Ok(Self {
            client,
            url,
            api_key,
        })
    }
}

#[async_trait]
impl SentimentModel for HttpSentimentModel {
    async fn classify(&self, text: &str) -> Result<ClassifierOutput> {
        let mut request = self.client.post(&self.url).json(&ClassifyRequest { text });
        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .context("Sentiment endpoint unreachable")?;

        if !response.status().is_success() {
            anyhow::bail!("Sentiment endpoint returned {}", response.status());
        }

        let body: ClassifyResponse = response
            .json()
            .await
            .context("Invalid sentiment response body")?;

        info!(label = %body.label, score = body.score, "sentiment model response");

        Ok(ClassifierOutput {
            category: body.label,
            confidence: body.score,
        })
    }
}
