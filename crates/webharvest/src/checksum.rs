//! File content digests.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::Result;

const CHUNK_SIZE: usize = 8192;

/// SHA-256 of the file at `path` as a lowercase hex string.
///
/// The file is streamed in fixed-size chunks, so arbitrarily large files
/// hash in constant memory. Open and read failures propagate.
pub fn compute_checksum(path: impl AsRef<Path>) -> Result<String> {
    let file = File::open(path.as_ref())?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn identical_bytes_yield_identical_digests() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.bin");
        let b = dir.path().join("b.bin");
        fs::write(&a, b"same content").unwrap();
        fs::write(&b, b"same content").unwrap();
        assert_eq!(compute_checksum(&a).unwrap(), compute_checksum(&b).unwrap());
    }

    #[test]
    fn one_byte_change_changes_the_digest() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.bin");
        let b = dir.path().join("b.bin");
        fs::write(&a, b"same content").unwrap();
        fs::write(&b, b"same content!").unwrap();
        assert_ne!(compute_checksum(&a).unwrap(), compute_checksum(&b).unwrap());
    }

    #[test]
    fn digest_matches_known_vector() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty");
        fs::write(&path, b"").unwrap();
        assert_eq!(
            compute_checksum(&path).unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn files_larger_than_one_chunk_stream_correctly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.bin");
        fs::write(&path, vec![0xabu8; CHUNK_SIZE * 3 + 17]).unwrap();
        let first = compute_checksum(&path).unwrap();
        assert_eq!(first.len(), 64);
        assert_eq!(first, compute_checksum(&path).unwrap());
    }

    #[test]
    fn missing_file_propagates_the_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(compute_checksum(dir.path().join("absent")).is_err());
    }
}
