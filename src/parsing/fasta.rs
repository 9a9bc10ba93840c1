//! FASTA input handling using noodles.
//!
//! Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fasta;

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    // Check for uncompressed FASTA
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open a FASTA file as a record reader, transparently decompressing
/// gzip/bgzip input.
///
/// # Errors
///
/// Returns `std::io::Error` if the file cannot be opened.
pub fn open_fasta(path: &Path) -> std::io::Result<fasta::io::Reader<Box<dyn BufRead>>> {
    let file = std::fs::File::open(path)?;

    let reader: Box<dyn BufRead> = if is_gzipped(path) {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    Ok(fasta::io::Reader::new(reader))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_is_fasta_file() {
        assert!(is_fasta_file(Path::new("test.fa")));
        assert!(is_fasta_file(Path::new("test.fasta")));
        assert!(is_fasta_file(Path::new("test.fna")));
        assert!(is_fasta_file(Path::new("test.fa.gz")));
        assert!(is_fasta_file(Path::new("test.fasta.bgz")));
        assert!(is_fasta_file(Path::new("/path/to/Assembly.FA")));

        assert!(!is_fasta_file(Path::new("test.agp")));
        assert!(!is_fasta_file(Path::new("test.fai")));
        assert!(!is_fasta_file(Path::new("test.txt")));
    }

    #[test]
    fn test_open_plain_fasta() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">chr1 test\nACGTACGT\nACGT\n>chr2\nGGGG\n")
            .unwrap();
        temp.flush().unwrap();

        let mut reader = open_fasta(temp.path()).unwrap();
        let records: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sequence().len(), 12); // 8 + 4 bases
        assert_eq!(records[1].sequence().len(), 4);
    }

    #[test]
    fn test_open_gzipped_fasta() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">chr1\nACGT\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let mut temp = NamedTempFile::with_suffix(".fa.gz").unwrap();
        temp.write_all(&compressed).unwrap();
        temp.flush().unwrap();

        let mut reader = open_fasta(temp.path()).unwrap();
        let records: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sequence().len(), 4);
    }
}
