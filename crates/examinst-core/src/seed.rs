//! Seed derivation for per-examinee instances.

use sha2::{Digest, Sha512};

/// Derive the generator seed for one (token, examination, subject) triple.
///
/// The identifiers are concatenated in that order without a separator and
/// hashed with SHA-512. The first 32 bytes of the digest are read as four
/// big-endian `u64` words and XOR-folded into one.
///
/// Empty identifiers are accepted; validating them is the caller's job.
pub fn derive_seed(token_id: &str, examination_id: &str, subject_id: &str) -> u64 {
    let mut hasher = Sha512::new();
    hasher.update(token_id.as_bytes());
    hasher.update(examination_id.as_bytes());
    hasher.update(subject_id.as_bytes());
    let digest = hasher.finalize();

    digest[..32]
        .chunks_exact(8)
        .map(|word| {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(word);
            u64::from_be_bytes(buf)
        })
        .fold(0, |acc, word| acc ^ word)
}
