//! Name normalization against a dataset's actual headers.

use rapidfuzz::distance::jaro_winkler::similarity as jaro_similarity;

/// Normalizes text for comparison by lowercasing and replacing separators
/// with spaces.
pub fn normalize_text(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-', '.', '/', '\\'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-insensitive Jaro-Winkler similarity over normalized text.
pub fn similarity(a: &str, b: &str) -> f64 {
    jaro_similarity(normalize_text(a).chars(), normalize_text(b).chars())
}

/// Reconciles a free-text column reference against the actual headers.
///
/// Returns the best-matching real header when its similarity reaches the
/// cutoff, otherwise `None`. A below-threshold candidate is never echoed
/// back: callers get a real header or an explicit "unresolved" signal.
pub fn normalize_name(candidate: &str, headers: &[&str], cutoff: f64) -> Option<String> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return None;
    }
    let needle = normalize_text(trimmed);
    let mut best: Option<(f64, &str)> = None;
    for header in headers {
        let score = jaro_similarity(needle.chars(), normalize_text(header).chars());
        if best.is_none_or(|(top, _)| score > top) {
            best = Some((score, header));
        }
    }
    match best {
        Some((score, header)) if score >= cutoff => Some(header.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn normalize_text_collapses_separators() {
        assert_eq!(normalize_text("Product_Name"), "product name");
        assert_eq!(normalize_text("  Total   Revenue "), "total revenue");
    }

    #[test]
    fn exact_header_matches_regardless_of_case() {
        let headers = ["Fecha", "Producto", "Ingresos"];
        assert_eq!(
            normalize_name("ingresos", &headers, 0.85),
            Some("Ingresos".to_string())
        );
    }

    #[test]
    fn near_miss_resolves_to_real_header() {
        let headers = ["Revenue", "Product"];
        assert_eq!(
            normalize_name("Revenu", &headers, 0.85),
            Some("Revenue".to_string())
        );
    }

    #[test]
    fn below_threshold_returns_none() {
        let headers = ["Fecha", "Producto"];
        assert_eq!(normalize_name("Quarter", &headers, 0.85), None);
    }

    #[test]
    fn blank_candidate_returns_none() {
        let headers = ["Fecha"];
        assert_eq!(normalize_name("   ", &headers, 0.6), None);
        assert_eq!(normalize_name("x", &[], 0.6), None);
    }

    proptest! {
        // The normalizer never invents a name: any result is a real header.
        #[test]
        fn result_is_always_a_real_header(
            candidate in "[A-Za-z0-9 _-]{0,16}",
            headers in proptest::collection::vec("[A-Za-z][A-Za-z0-9 _]{0,11}", 0..6),
        ) {
            let refs: Vec<&str> = headers.iter().map(String::as_str).collect();
            if let Some(resolved) = normalize_name(&candidate, &refs, 0.8) {
                prop_assert!(headers.contains(&resolved));
            }
        }
    }
}
