pub mod simd;

/// Similarity function selector. Fixed at store construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// `dot(a, b) / (norm(a) * norm(b))`, range [-1, 1] for non-degenerate
    /// inputs.
    Cosine,
}

/// Cosine similarity between two equal-length slices.
///
/// Known sharp edge: a zero-norm input is not guarded. The IEEE-754
/// quotient (`NaN` or infinity) is returned as-is, and callers that care
/// must screen their vectors.
///
/// # Panics
/// Panics if the slices differ in length.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "cosine inputs must share a length");
    let kernel = simd::vector_kernel();
    // SAFETY: both pointers are valid for `a.len()` reads, checked above.
    unsafe {
        let dot = kernel(a.as_ptr(), b.as_ptr(), a.len());
        let norm_a = kernel(a.as_ptr(), a.as_ptr(), a.len()).sqrt();
        let norm_b = kernel(b.as_ptr(), b.as_ptr(), b.len()).sqrt();
        dot / (norm_a * norm_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_parallel() {
        let sim = cosine_similarity(&[3.0, 4.0], &[3.0, 4.0]);
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_scaled_parallel() {
        let sim = cosine_similarity(&[1.0, 0.0], &[5.0, 0.0]);
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal() {
        let sim = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]);
        assert!(sim.abs() < 1e-6);
    }

    #[test]
    fn test_cosine_opposite() {
        let sim = cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]);
        assert!((sim + 1.0).abs() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "must share a length")]
    fn test_cosine_length_mismatch_panics() {
        let _ = cosine_similarity(&[1.0, 2.0, 3.0], &[1.0]);
    }

    #[test]
    fn test_cosine_zero_vector_is_nan() {
        let sim = cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]);
        assert!(sim.is_nan());
    }
}
