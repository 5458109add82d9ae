use blake3::Hasher as Blake3Hasher;
use serde::Serialize;
use std::error::Error;

/// Computes the blake3 content hash of a serializable value, folded to i64.
///
/// Audit entries are hashed with their `hash` field set to 0; the result is
/// stored alongside the row so later verification can detect tampering.
pub fn hash_as_i64<T: Serialize>(data: &T) -> Result<i64, Box<dyn Error + Send + Sync>> {
    let json = serde_json::to_vec(data)?;
    let mut hasher = Blake3Hasher::new();
    hasher.update(&json);
    let hash = hasher.finalize();
    Ok(i64::from_le_bytes(hash.as_bytes()[0..8].try_into()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic_and_content_sensitive() {
        let a = ("asset", 42u32);
        let b = ("asset", 43u32);

        assert_eq!(hash_as_i64(&a).unwrap(), hash_as_i64(&a).unwrap());
        assert_ne!(hash_as_i64(&a).unwrap(), hash_as_i64(&b).unwrap());
    }
}
