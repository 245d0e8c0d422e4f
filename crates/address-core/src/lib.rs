//! Core address codec for the Filament storage network.
//!
//! This crate provides pure Rust implementations of:
//! - Address derivation from actor IDs, secp256k1 and BLS public keys, and
//!   actor initialization data
//! - The on-chain byte representation (protocol byte followed by payload)
//! - The checksummed, network-prefixed string representation
//! - BLAKE2b payload and checksum digests

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod address;
pub mod hash;
pub mod network;

pub use address::{decode, encode, Address, AddressError, Protocol, BLS_PUBLIC_KEY_LENGTH};
pub use hash::{address_hash, checksum, validate_checksum};
pub use hash::{CHECKSUM_HASH_LENGTH, PAYLOAD_HASH_LENGTH};
pub use network::Network;
