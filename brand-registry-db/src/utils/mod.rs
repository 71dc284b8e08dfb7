use heapless::String as HeaplessString;
use serde::Serialize;
use std::hash::Hasher;
use twox_hash::XxHash64;

/// Hashes serializable data into an i64 using CBOR serialization and XxHash64.
///
/// This provides a stable hash across different runs and systems by:
/// - Serializing the data to CBOR format (deterministic binary representation)
/// - Using XxHash64 with a fixed seed (0) for consistent hashing
pub fn hash_as_i64<T: Serialize>(data: &T) -> Result<i64, String> {
    let mut hasher = XxHash64::with_seed(0);
    let mut cbor = Vec::new();
    ciborium::ser::into_writer(data, &mut cbor)
        .map_err(|e| format!("Failed to serialize data for hashing: {e}"))?;
    hasher.write(&cbor);
    Ok(hasher.finish() as i64)
}

/// Builds a bounded string from `value`, keeping as many leading characters
/// as fit the byte capacity. Validation has already bounded the character
/// count; the clamp only guards the byte capacity of the storage model.
pub fn clamp_str<const N: usize>(value: &str) -> HeaplessString<N> {
    let mut out = HeaplessString::new();
    for c in value.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_for_equal_input() {
        let a = hash_as_i64(&"20-12345678-6").unwrap();
        let b = hash_as_i64(&"20-12345678-6").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, hash_as_i64(&"20-12345678-9").unwrap());
    }

    #[test]
    fn clamp_keeps_whole_characters() {
        let clamped = clamp_str::<4>("ñañá");
        assert_eq!(clamped.as_str(), "ña");
        assert_eq!(clamp_str::<8>("corto").as_str(), "corto");
    }
}
