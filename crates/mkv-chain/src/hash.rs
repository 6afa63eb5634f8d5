use mkv_core::{ErrorInfo, MarkovError, MatrixBackend};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::chain::Chain;

/// Computes the canonical structural hash of a chain.
///
/// The digest covers the number of states followed by the IEEE-754 bit
/// pattern of every entry in row-major order, so two chains hash equal iff
/// their matrices are bit-identical.
pub fn canonical_hash<M: MatrixBackend>(chain: &Chain<M>) -> String {
    let mut hasher = Sha256::new();
    let size = chain.size();
    hasher.update((size as u64).to_le_bytes());
    for row in 0..size {
        for col in 0..size {
            hasher.update(chain.matrix().entry(row, col).to_bits().to_le_bytes());
        }
    }
    hex::encode(hasher.finalize())
}

/// Hashes the canonical JSON encoding of `value`.
pub fn stable_hash_string<T: Serialize + ?Sized>(value: &T) -> Result<String, MarkovError> {
    let bytes = serde_json::to_vec(value)
        .map_err(|err| MarkovError::Serde(ErrorInfo::new("serialize-json", err.to_string())))?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}
