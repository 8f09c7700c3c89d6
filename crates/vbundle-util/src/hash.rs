use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of a byte slice, returning a lowercase hex string.
pub fn sha256_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// First `len` characters of a hex digest, for display.
pub fn short_hash(hex: &str, len: usize) -> &str {
    &hex[..len.min(hex.len())]
}
