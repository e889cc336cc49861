//! Integration tests for the [`illustrator::TopicIllustrator`] fallback chain
//! using temporary directories; no network or external services.

use illustrator::{FsAssetStore, ImageLibrary, TopicIllustrator};
use std::sync::Arc;
use tempfile::TempDir;
use tutor_core::IllustrationSource;

struct Fixture {
    _topic_dir: TempDir,
    _reference_dir: TempDir,
    asset_dir: TempDir,
    illustrator: TopicIllustrator,
}

/// Builds an illustrator over temp dirs. `topic_files` / `reference_files`
/// are created empty with the given names before the library scan.
fn fixture(topic_files: &[&str], reference_files: &[&str]) -> Fixture {
    let topic_dir = TempDir::new().expect("topic dir");
    let reference_dir = TempDir::new().expect("reference dir");
    let asset_dir = TempDir::new().expect("asset dir");

    for name in topic_files {
        std::fs::write(topic_dir.path().join(name), b"png").expect("topic image");
    }
    for name in reference_files {
        std::fs::write(reference_dir.path().join(name), b"png").expect("reference image");
    }

    let library = ImageLibrary::scan(topic_dir.path(), reference_dir.path());
    let assets = Arc::new(FsAssetStore::new(
        asset_dir.path().to_path_buf(),
        "/static/generated",
    ));
    let illustrator = TopicIllustrator::new(library, assets, "/static/generated");

    Fixture {
        _topic_dir: topic_dir,
        _reference_dir: reference_dir,
        asset_dir,
        illustrator,
    }
}

/// **Test: Library wins over generation.**
///
/// **Setup:** Topic library contains parabola.png; the query also matches the
/// "quadratic" SVG generator.
/// **Action:** `illustrate("Explain the quadratic parabola", ...)`.
/// **Expected:** Source is TopicLibrary (stage 1 short-circuits stage 2) and
/// the url points at the indexed file.
#[tokio::test]
async fn test_topic_library_wins_over_generator() {
    let f = fixture(&["parabola.png"], &[]);
    let result = f
        .illustrator
        .illustrate("Explain the quadratic parabola", "t1")
        .await;

    assert_eq!(result.source, IllustrationSource::TopicLibrary);
    assert_eq!(
        result.url.as_deref(),
        Some("/static/generated/parabola.png")
    );
    assert!(result.svg.is_none());
    assert_eq!(result.explanations.len(), 1);
    assert!(result.explanations[0].text.contains("Parabola"));
}

/// **Test: Generated vector when no library topic matches.**
///
/// **Setup:** Empty topic library; query recognized by the quadratic generator.
/// **Action:** `illustrate("solve quadratic equations", "t2")`.
/// **Expected:** Source GeneratedVector, inline svg and url both populated,
/// and the svg file written under the asset dir.
#[tokio::test]
async fn test_generated_vector_stage() {
    let f = fixture(&[], &[]);
    let result = f
        .illustrator
        .illustrate("solve quadratic equations", "t2")
        .await;

    assert_eq!(result.source, IllustrationSource::GeneratedVector);
    let url = result.url.expect("url");
    assert!(url.starts_with("/static/generated/t2_"));
    assert!(url.ends_with(".svg"));
    assert!(result.svg.expect("svg").contains("<path"));

    let file_name = url.rsplit('/').next().expect("file name");
    assert!(f.asset_dir.path().join(file_name).exists());
}

/// **Test: Reference library fallback for generic subject words.**
///
/// **Setup:** Empty topic library, one reference image; query contains
/// "chemistry" but matches neither topics nor generators.
/// **Action:** `illustrate("basic chemistry question", "t3")`.
/// **Expected:** Source ReferenceLibrary with a copied, turn-tagged image.
#[tokio::test]
async fn test_reference_library_fallback() {
    let f = fixture(&[], &["periodic_table.png"]);
    let result = f
        .illustrator
        .illustrate("basic chemistry question", "t3")
        .await;

    assert_eq!(result.source, IllustrationSource::ReferenceLibrary);
    assert_eq!(
        result.url.as_deref(),
        Some("/static/generated/t3_periodic_table.png")
    );
    assert!(f.asset_dir.path().join("t3_periodic_table.png").exists());
    assert_eq!(result.explanations.len(), 1);
}

/// **Test: Total fallback yields source none and one explanation.**
///
/// **Setup:** Empty libraries; query matches no topic, generator, or subject.
/// **Action:** `illustrate("who wrote this novel", "t4")`.
/// **Expected:** Source None, no url, exactly one non-empty explanation.
#[tokio::test]
async fn test_total_fallback_none() {
    let f = fixture(&[], &[]);
    let result = f.illustrator.illustrate("who wrote this novel", "t4").await;

    assert_eq!(result.source, IllustrationSource::None);
    assert!(result.url.is_none());
    assert!(result.svg.is_none());
    assert_eq!(result.explanations.len(), 1);
    assert!(!result.explanations[0].text.is_empty());
    assert!(result.explanations[0].text.contains("who wrote this novel"));
}

/// **Test: Non-image files are not indexed as topics.**
///
/// **Setup:** Topic dir contains notes.txt and friction.png.
/// **Action:** `illustrate("tell me about friction", "t5")`.
/// **Expected:** Matches friction.png; a query for the txt stem does not match.
#[tokio::test]
async fn test_library_scan_skips_non_images() {
    let f = fixture(&["notes.txt", "friction.png"], &[]);

    let hit = f
        .illustrator
        .illustrate("tell me about friction", "t5")
        .await;
    assert_eq!(hit.source, IllustrationSource::TopicLibrary);

    let miss = f.illustrator.illustrate("notes please", "t6").await;
    assert_eq!(miss.source, IllustrationSource::None);
}
