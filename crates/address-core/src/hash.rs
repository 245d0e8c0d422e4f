//! BLAKE2b digests for address payloads and checksums.

use blake2b_simd::Params;

/// Length of a hashed address payload in bytes.
pub const PAYLOAD_HASH_LENGTH: usize = 20;

/// Length of an address checksum in bytes.
pub const CHECKSUM_HASH_LENGTH: usize = 4;

/// BLAKE2b-160 digest used to derive secp256k1 and actor address payloads.
#[inline]
pub fn address_hash(ingest: &[u8]) -> [u8; PAYLOAD_HASH_LENGTH] {
    let digest = Params::new().hash_length(PAYLOAD_HASH_LENGTH).hash(ingest);
    let mut result = [0u8; PAYLOAD_HASH_LENGTH];
    result.copy_from_slice(digest.as_bytes());
    result
}

/// 4-byte BLAKE2b digest protecting the string form of an address.
#[inline]
pub fn checksum(ingest: &[u8]) -> [u8; CHECKSUM_HASH_LENGTH] {
    let digest = Params::new().hash_length(CHECKSUM_HASH_LENGTH).hash(ingest);
    let mut result = [0u8; CHECKSUM_HASH_LENGTH];
    result.copy_from_slice(digest.as_bytes());
    result
}

/// Check a computed checksum against the expected bytes.
#[inline]
pub fn validate_checksum(ingest: &[u8], expect: &[u8]) -> bool {
    checksum(ingest).as_slice() == expect
}
