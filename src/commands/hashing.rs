use sha2::{Digest, Sha256};

/// SHA-256 of the text's UTF-8 bytes as lowercase hex.
pub fn sha256_hex(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
