//! SHA-256 fingerprinting for idempotent re-ingestion: an unchanged
//! source tree should not force a needless re-encode.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

pub fn sha256_file(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex_encode(&hasher.finalize()))
}

/// Fingerprint a whole source cell set by hashing each file's digest in
/// sorted path order, so unrelated directory-walk ordering doesn't change
/// the result.
pub fn sha256_many(paths: &[PathBuf]) -> std::io::Result<String> {
    let mut sorted = paths.to_vec();
    sorted.sort();
    let mut hasher = Sha256::new();
    for path in &sorted {
        hasher.update(sha256_file(path)?.as_bytes());
    }
    Ok(hex_encode(&hasher.finalize()))
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_content_same_hash() {
        let tmp = tempfile::tempdir().unwrap();
        let a = tmp.path().join("a.000");
        let b = tmp.path().join("b.000");
        std::fs::write(&a, b"hello").unwrap();
        std::fs::write(&b, b"hello").unwrap();
        assert_eq!(sha256_file(&a).unwrap(), sha256_file(&b).unwrap());
    }

    #[test]
    fn many_is_order_independent() {
        let tmp = tempfile::tempdir().unwrap();
        let a = tmp.path().join("a.000");
        let b = tmp.path().join("b.000");
        std::fs::write(&a, b"one").unwrap();
        std::fs::write(&b, b"two").unwrap();
        let forward = sha256_many(&[a.clone(), b.clone()]).unwrap();
        let reverse = sha256_many(&[b, a]).unwrap();
        assert_eq!(forward, reverse);
    }
}
