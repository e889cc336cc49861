//! # Topic illustrator
//!
//! Maps a query to a visual aid via a strict-priority fallback chain:
//!
//! 1. topic-library exact match (pre-indexed, topic from file stem)
//! 2. procedurally generated vector diagram, persisted via [`AssetStore`]
//! 3. reference-library image copied to a servable location
//! 4. none, with a single generic explanation
//!
//! Each stage yields an explicit [`StageResult`]; the first `Found` wins.
//! Stage errors are logged and degrade to `NotFound` — this component never
//! fails, worst case the caller gets source kind `none`.
//!
//! The library index and synonym dictionary are loaded once at startup and
//! read without synchronization afterwards; stages write fresh
//! turn-id-tagged files per call (at-most-once-per-call, not a cache).

use std::sync::Arc;
use tracing::{info, warn};
use tutor_core::{Explanation, Illustration, IllustrationSource};

mod assets;
mod keywords;
mod library;
mod svg;

pub use assets::{AssetStore, FsAssetStore};
pub use keywords::topic_keywords;
pub use library::{ImageLibrary, TopicImage};
pub use svg::generate_svg;

/// Generic subject words that qualify a query for the reference library.
const SUBJECT_WORDS: [&str; 4] = ["chemistry", "math", "physics", "biology"];

/// Outcome of one fallback stage.
enum StageResult {
    Found(Illustration),
    NotFound,
}

/// The staged illustration pipeline. Construct once at startup; safe to share
/// across concurrent requests (all state is read-only).
pub struct TopicIllustrator {
    library: ImageLibrary,
    assets: Arc<dyn AssetStore>,
    /// URL prefix under which topic-library images are already served.
    topic_url_prefix: String,
}

impl TopicIllustrator {
    pub fn new(
        library: ImageLibrary,
        assets: Arc<dyn AssetStore>,
        topic_url_prefix: impl Into<String>,
    ) -> Self {
        Self {
            library,
            assets,
            topic_url_prefix: topic_url_prefix.into(),
        }
    }

    /// Produces an illustration for the query. Never fails; `turn_id` tags
    /// any files written by stage 2 or 3.
    pub async fn illustrate(&self, query: &str, turn_id: &str) -> Illustration {
        if let StageResult::Found(found) = self.topic_library_stage(query) {
            return found;
        }
        if let StageResult::Found(found) = self.generated_vector_stage(query, turn_id).await {
            return found;
        }
        if let StageResult::Found(found) = self.reference_library_stage(query, turn_id).await {
            return found;
        }
        Illustration {
            source: IllustrationSource::None,
            url: None,
            svg: None,
            explanations: vec![generic_explanation(query)],
        }
    }

    /// Stage 1: first indexed image whose topic is in the extracted keyword
    /// set. No ranking beyond containment; scan order breaks ties.
    fn topic_library_stage(&self, query: &str) -> StageResult {
        let keywords = topic_keywords(query);
        if keywords.is_empty() {
            return StageResult::NotFound;
        }
        for image in self.library.topic_images() {
            if keywords.contains(&image.topic) {
                info!(topic = %image.topic, file = %image.file_name, "topic library match");
                return StageResult::Found(Illustration {
                    source: IllustrationSource::TopicLibrary,
                    url: Some(format!("{}/{}", self.topic_url_prefix, image.file_name)),
                    svg: None,
                    explanations: vec![Explanation {
                        text: format!(
                            "This image illustrates the concept of {}. {}",
                            title_case(&image.topic),
                            query
                        ),
                        source_name: "Topic Reference".to_string(),
                        page: 1,
                    }],
                });
            }
        }
        StageResult::NotFound
    }

    /// Stage 2: procedural vector diagram, persisted so the locator is
    /// retrievable; the inline payload travels with the result.
    async fn generated_vector_stage(&self, query: &str, turn_id: &str) -> StageResult {
        let Some(svg_content) = generate_svg(query) else {
            return StageResult::NotFound;
        };
        let name = format!("{}_{}.svg", turn_id, sanitize_name(query));
        match self.assets.save(&name, &svg_content).await {
            Ok(url) => {
                info!(url = %url, "generated vector diagram");
                StageResult::Found(Illustration {
                    source: IllustrationSource::GeneratedVector,
                    url: Some(url),
                    svg: Some(svg_content),
                    explanations: Vec::new(),
                })
            }
            Err(e) => {
                warn!(error = %e, "failed to persist generated vector; falling through");
                StageResult::NotFound
            }
        }
    }

    /// Stage 3: for generic subject queries, copy the first reference image
    /// to the asset store.
    async fn reference_library_stage(&self, query: &str, turn_id: &str) -> StageResult {
        let lowered = query.to_lowercase();
        if !SUBJECT_WORDS.iter().any(|w| lowered.contains(w)) {
            return StageResult::NotFound;
        }
        let Some(source_path) = self.library.reference_images().first() else {
            return StageResult::NotFound;
        };
        let stem = source_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("reference");
        let name = format!("{}_{}.png", turn_id, stem);
        match self.assets.copy(source_path, &name).await {
            Ok(url) => {
                info!(url = %url, "reference library fallback");
                StageResult::Found(Illustration {
                    source: IllustrationSource::ReferenceLibrary,
                    url: Some(url),
                    svg: None,
                    explanations: vec![generic_explanation(query)],
                })
            }
            Err(e) => {
                warn!(error = %e, "failed to copy reference image; falling through");
                StageResult::NotFound
            }
        }
    }
}

fn generic_explanation(query: &str) -> Explanation {
    Explanation {
        text: format!(
            "This is an explanation about {query}. The system provides detailed information about this topic."
        ),
        source_name: "Reference Material".to_string(),
        page: 1,
    }
}

fn title_case(topic: &str) -> String {
    topic
        .replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn sanitize_name(query: &str) -> String {
    query.replace(' ', "_").replace('/', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("parabola"), "Parabola");
        assert_eq!(title_case("light_reaction"), "Light Reaction");
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("a b/c"), "a_b_c");
    }
}
