//! Topic keyword extraction from a query, via a fixed synonym dictionary.
//!
//! Single-word synonyms match as whole words (so "ai" does not fire inside
//! "explain"); multi-word synonyms match as substrings of the lowercased query.

use std::collections::HashSet;

/// Canonical topic -> surface forms that map to it.
const TOPIC_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "deeplearning",
        &[
            "deep learning",
            "neural network",
            "ai",
            "artificial intelligence",
            "machine learning",
            "ml",
            "dl",
        ],
    ),
    (
        "friction",
        &["friction", "force", "physics", "mechanics", "resistance"],
    ),
    (
        "hyperbola",
        &[
            "hyperbola",
            "conic section",
            "math",
            "mathematics",
            "geometry",
            "curve",
        ],
    ),
    (
        "parabola",
        &[
            "parabola",
            "quadratic",
            "conic section",
            "math",
            "mathematics",
            "geometry",
            "curve",
        ],
    ),
    (
        "photosynthesis",
        &[
            "photosynthesis",
            "plant",
            "biology",
            "chlorophyll",
            "light reaction",
            "dark reaction",
        ],
    ),
];

/// Extracts the canonical topics the query refers to.
pub fn topic_keywords(query: &str) -> HashSet<String> {
    let lowered = query.to_lowercase();
    let words: HashSet<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    let mut keywords = HashSet::new();
    for (topic, synonyms) in TOPIC_SYNONYMS {
        for synonym in *synonyms {
            let matched = if synonym.contains(' ') {
                lowered.contains(synonym)
            } else {
                words.contains(synonym)
            };
            if matched {
                keywords.insert((*topic).to_string());
                break;
            }
        }
    }

    // A query word that is itself a canonical topic name always counts.
    for (topic, _) in TOPIC_SYNONYMS {
        if words.contains(topic) {
            keywords.insert((*topic).to_string());
        }
    }

    keywords
}
