//! TF-IDF scoring math.
//!
//! Term frequency is computed once at index time and stored in the postings;
//! inverse document frequency is computed at query time from the per-term
//! document counts. Both are plain `f64` math: the sums involved are a
//! handful of small positive terms, well inside double precision.

/// Frequency of a term within one document: occurrence count over document
/// length in tokens (duplicates included).
///
/// Always in `(0, 1]` for a term that actually occurs.
pub fn term_frequency(term_count: usize, document_length: usize) -> f64 {
    term_count as f64 / document_length as f64
}

/// Inverse document frequency: `ln(N / df)`.
///
/// Callers must ensure `term_document_count >= 1`; the matcher skips terms
/// that occur nowhere before ever computing this.
pub fn inverse_document_frequency(term_document_count: usize, number_of_documents: usize) -> f64 {
    (number_of_documents as f64 / term_document_count as f64).ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_frequency_is_count_over_length() {
        assert_eq!(term_frequency(2, 4), 0.5);
        assert_eq!(term_frequency(1, 4), 0.25);
        assert_eq!(term_frequency(3, 3), 1.0);
    }

    #[test]
    fn idf_of_universal_term_is_zero() {
        // A term in every document carries no discriminating signal.
        assert_eq!(inverse_document_frequency(5, 5), 0.0);
    }

    #[test]
    fn idf_grows_as_terms_get_rarer() {
        let common = inverse_document_frequency(4, 5);
        let rare = inverse_document_frequency(1, 5);
        assert!(rare > common);
        assert!((rare - (5.0f64).ln()).abs() < 1e-12);
    }

    #[test]
    fn idf_matches_natural_log() {
        assert!((inverse_document_frequency(2, 3) - 1.5f64.ln()).abs() < 1e-12);
    }
}
