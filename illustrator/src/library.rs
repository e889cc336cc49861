//! Image library index, scanned once at startup and read-only afterwards.
//!
//! Topic images carry their topic in the file stem ("parabola.png" tags the
//! topic `parabola`); reference images are an untagged secondary pool.

use std::path::{Path, PathBuf};
use tracing::{info, warn};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

/// One pre-indexed topic-tagged image.
#[derive(Debug, Clone)]
pub struct TopicImage {
    pub file_name: String,
    pub topic: String,
    pub path: PathBuf,
}

/// Read-only index over the topic and reference image directories.
#[derive(Debug, Clone, Default)]
pub struct ImageLibrary {
    topic_images: Vec<TopicImage>,
    reference_images: Vec<PathBuf>,
}

impl ImageLibrary {
    /// Scans both directories. Missing directories yield empty pools rather
    /// than errors; entries are sorted by file name so scan order is stable.
    pub fn scan(topic_dir: &Path, reference_dir: &Path) -> Self {
        let mut topic_images = Vec::new();
        for path in list_files(topic_dir) {
            if !has_image_extension(&path) {
                continue;
            }
            let (Some(file_name), Some(stem)) = (
                path.file_name().and_then(|n| n.to_str()),
                path.file_stem().and_then(|s| s.to_str()),
            ) else {
                continue;
            };
            topic_images.push(TopicImage {
                file_name: file_name.to_string(),
                topic: stem.to_lowercase(),
                path: path.clone(),
            });
        }
        topic_images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        let mut reference_images: Vec<PathBuf> = list_files(reference_dir)
            .into_iter()
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("png"))
            .collect();
        reference_images.sort();

        info!(
            topic_count = topic_images.len(),
            reference_count = reference_images.len(),
            "image library indexed"
        );

        Self {
            topic_images,
            reference_images,
        }
    }

    pub fn topic_images(&self) -> &[TopicImage] {
        &self.topic_images
    }

    pub fn reference_images(&self) -> &[PathBuf] {
        &self.reference_images
    }
}

fn list_files(dir: &Path) -> Vec<PathBuf> {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file())
            .collect(),
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "image directory not readable; empty pool");
            Vec::new()
        }
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}
