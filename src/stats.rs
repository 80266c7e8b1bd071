//! Composition statistics for a loaded sequence.
//!
//! Statistics are computed once, right after loading, and never change
//! while the viewer runs. Only the uppercase canonical bases `A`, `T`, `G`
//! and `C` are tallied; anything else (ambiguity codes, gaps, lowercase)
//! still counts toward the length.

/// Aggregate base counts and GC content of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stats {
    /// Number of characters in the sequence
    pub length: usize,
    /// GC content in percent, `0.0` for an empty sequence
    pub gc_percent: f64,
    pub count_a: usize,
    pub count_t: usize,
    pub count_g: usize,
    pub count_c: usize,
}

impl Stats {
    /// Total number of canonical bases (A + T + G + C).
    pub fn canonical_total(&self) -> usize {
        self.count_a + self.count_t + self.count_g + self.count_c
    }
}

/// Computes composition statistics for `sequence`.
///
/// The length is measured in characters. GC content is reported as `0.0`
/// for an empty sequence instead of dividing by zero.
pub fn compute_stats(sequence: &str) -> Stats {
    let mut stats = Stats {
        length: sequence.chars().count(),
        ..Stats::default()
    };

    // ASCII bytes never appear inside multi-byte UTF-8 sequences
    for b in sequence.bytes() {
        match b {
            b'A' => stats.count_a += 1,
            b'T' => stats.count_t += 1,
            b'G' => stats.count_g += 1,
            b'C' => stats.count_c += 1,
            _ => {}
        }
    }

    if stats.length > 0 {
        let gc = (stats.count_g + stats.count_c) as f64;
        stats.gc_percent = gc / stats.length as f64 * 100.0;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_counts() {
        let stats = compute_stats("ACGTACGTN");
        assert_eq!(stats.length, 9);
        assert_eq!(stats.count_a, 2);
        assert_eq!(stats.count_t, 2);
        assert_eq!(stats.count_g, 2);
        assert_eq!(stats.count_c, 2);
        assert_eq!(stats.canonical_total(), 8);
        assert!((stats.gc_percent - 400.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_sequence() {
        let stats = compute_stats("");
        assert_eq!(stats.length, 0);
        assert_eq!(stats.canonical_total(), 0);
        assert_eq!(stats.gc_percent, 0.0);
        assert!(!stats.gc_percent.is_nan());
    }

    #[test]
    fn test_lowercase_not_counted() {
        let stats = compute_stats("acgt");
        assert_eq!(stats.length, 4);
        assert_eq!(stats.canonical_total(), 0);
        assert_eq!(stats.gc_percent, 0.0);
    }

    #[test]
    fn test_all_gc() {
        let stats = compute_stats("GGCC");
        assert_eq!(stats.gc_percent, 100.0);
    }

    #[test]
    fn test_length_counts_characters() {
        // 'É' is two bytes in UTF-8 but one position
        let stats = compute_stats("AÉT");
        assert_eq!(stats.length, 3);
        assert_eq!(stats.canonical_total(), 2);
    }

    #[test]
    fn test_whitespace_counted_in_length() {
        let stats = compute_stats("A T");
        assert_eq!(stats.length, 3);
        assert_eq!(stats.canonical_total(), 2);
    }
}
