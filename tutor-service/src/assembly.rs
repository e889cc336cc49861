//! Assembly: builds the service components from config, once at startup.
//! All reference data (library index, synonym dictionary) is loaded here and
//! immutable afterwards; components share it by reference.

use anyhow::Result;
use illustrator::{FsAssetStore, ImageLibrary, TopicIllustrator};
use llm_client::OpenAiLlmClient;
use orchestrator::ResponseOrchestrator;
use sentiment::{HttpSentimentModel, SentimentClassifier};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use storage::TurnRepository;
use tracing::info;

use crate::config::{AppConfig, ASSET_URL_PREFIX};
use crate::TutorService;

/// Builds the full service from config.
pub async fn build_service(config: &AppConfig) -> Result<TutorService> {
    let llm = Arc::new(
        OpenAiLlmClient::with_base_url(config.llm.api_key.clone(), config.llm.base_url.clone())
            .with_model(config.llm.model.clone()),
    );
    let orchestrator =
        ResponseOrchestrator::new(llm, Duration::from_secs(config.llm.timeout_secs));

    let model = HttpSentimentModel::new(
        config.sentiment_api_url.clone(),
        config.sentiment_api_key.clone(),
        config.sentiment_timeout_secs,
    )?;
    let classifier = SentimentClassifier::new(Arc::new(model));

    let library = ImageLibrary::scan(
        Path::new(&config.topic_image_dir),
        Path::new(&config.reference_image_dir),
    );
    let assets = Arc::new(FsAssetStore::new(
        PathBuf::from(&config.asset_dir),
        ASSET_URL_PREFIX,
    ));
    let illustrator = TopicIllustrator::new(library, assets, ASSET_URL_PREFIX);

    let repo = TurnRepository::new(&config.database_url).await?;

    info!(model = %config.llm.model, db = %config.database_url, "service assembled");

    Ok(TutorService::new(
        classifier,
        orchestrator,
        illustrator,
        Arc::new(repo),
    ))
}
