//! Sequence file loader.
//!
//! Reads a simplified FASTA file into a single flat sequence:
//! header lines (starting with `>`) are skipped, every other line is
//! trimmed, upper-cased and appended in file order.
//!
//! ## Format
//!
//! ```text
//! >chr1 optional description
//! ACGTACGTACGT...
//! acgtnnACGT...
//! ```
//!
//! Multiple records are concatenated into one sequence. No character
//! validation is performed, and a file without residues is not an error.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::model::Sequence;

/// Errors that can occur while loading a sequence file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read sequence data: {0}")]
    Read(#[from] io::Error),
}

/// Result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Loads a sequence file from disk.
///
/// # Examples
///
/// ```no_run
/// use genome_explorer::fasta::load_sequence;
///
/// let sequence = load_sequence("chr1.fasta").unwrap();
/// println!("Loaded {} bases", sequence.len());
/// ```
pub fn load_sequence<P: AsRef<Path>>(path: P) -> LoadResult<Sequence> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    parse_sequence(BufReader::new(file))
}

/// Parses sequence content from a reader.
pub fn parse_sequence<R: BufRead>(reader: R) -> LoadResult<Sequence> {
    let mut data = String::new();
    let mut headers = 0usize;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.starts_with('>') {
            headers += 1;
            continue;
        }

        if line.is_ascii() {
            data.extend(line.chars().map(|c| c.to_ascii_uppercase()));
        } else {
            data.push_str(&line.to_uppercase());
        }
    }

    debug!(headers, bytes = data.len(), "parsed sequence file");
    Ok(Sequence::new(data))
}

/// Parses sequence content from a string.
///
/// Useful for testing or processing in-memory data.
pub fn parse_sequence_str(content: &str) -> LoadResult<Sequence> {
    parse_sequence(content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let seq = parse_sequence_str(">seq1\nACGT\n").unwrap();
        assert_eq!(seq.as_str(), "ACGT");
    }

    #[test]
    fn test_parse_multiline_and_case() {
        let seq = parse_sequence_str(">header\nACGT\nacgtN\n").unwrap();
        assert_eq!(seq.as_str(), "ACGTACGTN");
        assert_eq!(seq.len(), 9);
    }

    #[test]
    fn test_multiple_records_are_concatenated() {
        let seq = parse_sequence_str(">a\nAA\n>b\nCC\n").unwrap();
        assert_eq!(seq.as_str(), "AACC");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let seq = parse_sequence_str("  >indented header\n  ac gt \t\n\n").unwrap();
        assert_eq!(seq.as_str(), "AC GT");
    }

    #[test]
    fn test_no_header_required() {
        let seq = parse_sequence_str("ACGT\nTTTT").unwrap();
        assert_eq!(seq.as_str(), "ACGTTTTT");
    }

    #[test]
    fn test_empty_content() {
        let seq = parse_sequence_str("").unwrap();
        assert!(seq.is_empty());

        let seq = parse_sequence_str(">only a header\n").unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let seq = parse_sequence_str(">h\r\nAC\r\ngt\r\n").unwrap();
        assert_eq!(seq.as_str(), "ACGT");
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let bytes: &[u8] = b">h\nAC\xff\n";
        let result = parse_sequence(bytes);
        assert!(matches!(result, Err(LoadError::Read(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_sequence("/nonexistent/path/to/file.fasta");
        assert!(matches!(result, Err(LoadError::Open { .. })));
    }
}
