//! Filament address construction, validation, and text encoding.
//!
//! An address has two representations. On chain it is always raw bytes: a
//! one-byte protocol discriminant followed by the payload. Off chain it is a
//! string carrying a network prefix and a checksum, for sharing between
//! humans; the string form never appears on chain.
//!
//! ```text
//! Bytes:   | protocol | payload |
//!          |  1 byte  | n bytes |
//!
//! String:  |  network   | protocol | payload | checksum |
//!          | 'f' or 't' | 1 digit  | n bytes | 4 bytes  |
//! ```
//!
//! The payload and checksum of the string form are base32-encoded, except
//! for ID addresses, which spell the actor ID in decimal and carry no
//! checksum.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::hash::{address_hash, checksum, validate_checksum};
use crate::hash::{CHECKSUM_HASH_LENGTH, PAYLOAD_HASH_LENGTH};
use crate::network::Network;

/// Length of a BLS public key payload in bytes.
pub const BLS_PUBLIC_KEY_LENGTH: usize = 48;

/// Address validation and decoding errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressError {
    /// Varint payload is empty, truncated, non-minimal, or exceeds 64 bits
    MalformedVarint,
    /// Base32 portion contains a foreign character or a dangling bit group
    MalformedEncoding,
    /// Address string is too short to hold a prefix and a protocol
    TooShort,
    /// First character is not a known network prefix
    InvalidNetworkPrefix(char),
    /// Second character is not a known protocol digit
    InvalidProtocolDigit(char),
    /// Leading byte is not a known protocol discriminant
    InvalidProtocol(u8),
    /// ID payload region is not a decimal 64-bit integer
    InvalidIDPayload,
    /// Payload length does not match the protocol
    InvalidPayloadLength(usize),
    /// Checksum mismatch
    InvalidChecksum,
}

impl core::fmt::Display for AddressError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AddressError::MalformedVarint => write!(f, "Malformed varint payload"),
            AddressError::MalformedEncoding => write!(f, "Malformed base32 encoding"),
            AddressError::TooShort => write!(f, "Address too short"),
            AddressError::InvalidNetworkPrefix(c) => write!(f, "Invalid network prefix: {}", c),
            AddressError::InvalidProtocolDigit(c) => write!(f, "Invalid protocol digit: {}", c),
            AddressError::InvalidProtocol(b) => write!(f, "Invalid protocol byte: {}", b),
            AddressError::InvalidIDPayload => write!(f, "Invalid ID payload"),
            AddressError::InvalidPayloadLength(len) => {
                write!(f, "Invalid payload length: {}", len)
            }
            AddressError::InvalidChecksum => write!(f, "Invalid checksum"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AddressError {}

/// Address protocol: how the payload was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Protocol {
    /// Numeric actor ID; payload is a canonical unsigned varint
    ID = 0,
    /// secp256k1 public key; payload is a 20-byte BLAKE2b digest of the key
    Secp256k1 = 1,
    /// Actor initialization data; payload is a 20-byte BLAKE2b digest
    Actor = 2,
    /// BLS public key; payload is the raw 48-byte key, unhashed
    BLS = 3,
}

impl Protocol {
    /// Map a discriminant byte from the wire form back to its protocol.
    pub fn from_byte(byte: u8) -> Result<Self, AddressError> {
        match byte {
            0 => Ok(Protocol::ID),
            1 => Ok(Protocol::Secp256k1),
            2 => Ok(Protocol::Actor),
            3 => Ok(Protocol::BLS),
            _ => Err(AddressError::InvalidProtocol(byte)),
        }
    }

    fn from_digit(c: char) -> Result<Self, AddressError> {
        match c {
            '0' => Ok(Protocol::ID),
            '1' => Ok(Protocol::Secp256k1),
            '2' => Ok(Protocol::Actor),
            '3' => Ok(Protocol::BLS),
            _ => Err(AddressError::InvalidProtocolDigit(c)),
        }
    }

    /// Get the display name for this protocol.
    pub fn name(&self) -> &'static str {
        match self {
            Protocol::ID => "ID",
            Protocol::Secp256k1 => "SECP256K1",
            Protocol::Actor => "Actor",
            Protocol::BLS => "BLS",
        }
    }
}

/// A Filament account/actor address.
///
/// Addresses are immutable; two addresses are equal iff their protocol and
/// payload bytes are equal. Every value of this type satisfies its protocol
/// invariant: the public constructors derive the payload themselves, and the
/// decoders validate before constructing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    protocol: Protocol,
    payload: Vec<u8>,
}

impl Address {
    /// Payload bytes must already satisfy the protocol invariant.
    fn new(protocol: Protocol, payload: Vec<u8>) -> Self {
        Address { protocol, payload }
    }

    /// Create an ID address from a numeric actor ID.
    pub fn new_id(id: u64) -> Self {
        Self::new(Protocol::ID, encode_uvarint(id))
    }

    /// Create an address from a secp256k1 public key.
    pub fn new_secp256k1(pubkey: &[u8]) -> Self {
        Self::new(Protocol::Secp256k1, address_hash(pubkey).to_vec())
    }

    /// Create an actor address from actor initialization data.
    pub fn new_actor(data: &[u8]) -> Self {
        Self::new(Protocol::Actor, address_hash(data).to_vec())
    }

    /// Create an address from a BLS public key. The key is the payload,
    /// unhashed.
    pub fn new_bls(pubkey: &[u8]) -> Self {
        Self::new(Protocol::BLS, pubkey.to_vec())
    }

    /// Get the protocol of this address.
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Get the payload bytes of this address.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Serialize to the on-chain byte form: protocol byte followed by
    /// payload.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(1 + self.payload.len());
        bytes.push(self.protocol as u8);
        bytes.extend_from_slice(&self.payload);
        bytes
    }

    /// Deserialize an address from its on-chain byte form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        if bytes.is_empty() {
            return Err(AddressError::TooShort);
        }
        let protocol = Protocol::from_byte(bytes[0])?;
        let payload = &bytes[1..];

        match protocol {
            Protocol::ID => {
                decode_uvarint(payload)?;
            }
            Protocol::Secp256k1 | Protocol::Actor => {
                if payload.len() != PAYLOAD_HASH_LENGTH {
                    return Err(AddressError::InvalidPayloadLength(payload.len()));
                }
            }
            Protocol::BLS => {}
        }

        Ok(Self::new(protocol, payload.to_vec()))
    }
}

/// Encode an address to its string form for the given network.
///
/// The only reachable failure is a malformed ID payload, which cannot occur
/// for addresses built by this crate's constructors or decoders.
pub fn encode(network: Network, addr: &Address) -> Result<String, AddressError> {
    let prefix = network.prefix();

    match addr.protocol() {
        Protocol::ID => {
            let id = decode_uvarint(addr.payload())?;
            Ok(format!("{}{}{}", prefix, Protocol::ID as u8, id))
        }
        protocol => {
            let mut ingest = Vec::with_capacity(1 + addr.payload().len());
            ingest.push(protocol as u8);
            ingest.extend_from_slice(addr.payload());
            let cksm = checksum(&ingest);

            let mut body = Vec::with_capacity(addr.payload().len() + CHECKSUM_HASH_LENGTH);
            body.extend_from_slice(addr.payload());
            body.extend_from_slice(&cksm);
            Ok(format!(
                "{}{}{}",
                prefix,
                protocol as u8,
                base32_encode(&body)
            ))
        }
    }
}

/// Decode an address from its string form.
///
/// Validation is ordered: structural failures (length, prefix, protocol
/// digit, encoding) are reported before integrity failures (payload length,
/// checksum). The network prefix is validated but not part of the result;
/// both networks accept the same payload and checksum bytes.
pub fn decode(text: &str) -> Result<Address, AddressError> {
    if text.len() < 3 {
        return Err(AddressError::TooShort);
    }

    let mut chars = text.chars();
    let ntwk = chars.next().ok_or(AddressError::TooShort)?;
    Network::from_prefix(ntwk).ok_or(AddressError::InvalidNetworkPrefix(ntwk))?;

    let digit = chars.next().ok_or(AddressError::TooShort)?;
    let protocol = Protocol::from_digit(digit)?;
    let raw = chars.as_str();

    if protocol == Protocol::ID {
        // u64::from_str would accept a leading '+'; the address grammar is
        // digits only
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AddressError::InvalidIDPayload);
        }
        let id = raw.parse::<u64>().map_err(|_| AddressError::InvalidIDPayload)?;
        return Ok(Address::new_id(id));
    }

    let payloadcksm = base32_decode(raw)?;
    if payloadcksm.len() < CHECKSUM_HASH_LENGTH {
        return Err(AddressError::InvalidPayloadLength(payloadcksm.len()));
    }
    let (payload, cksm) = payloadcksm.split_at(payloadcksm.len() - CHECKSUM_HASH_LENGTH);

    if matches!(protocol, Protocol::Secp256k1 | Protocol::Actor)
        && payload.len() != PAYLOAD_HASH_LENGTH
    {
        return Err(AddressError::InvalidPayloadLength(payload.len()));
    }

    let mut ingest = Vec::with_capacity(1 + payload.len());
    ingest.push(protocol as u8);
    ingest.extend_from_slice(payload);
    if !validate_checksum(&ingest, cksm) {
        return Err(AddressError::InvalidChecksum);
    }

    Ok(Address::new(protocol, payload.to_vec()))
}

// ============================================================================
// Canonical Unsigned Varint Implementation
// ============================================================================

/// Longest unsigned varint encoding of a 64-bit value.
const MAX_VARINT_LENGTH: usize = 10;

/// Encode a u64 as a minimal little-endian base-128 varint.
fn encode_uvarint(mut value: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(MAX_VARINT_LENGTH);
    while value >= 0x80 {
        buf.push(value as u8 | 0x80);
        value >>= 7;
    }
    buf.push(value as u8);
    buf
}

/// Decode a canonical unsigned varint back to its u64 value.
///
/// The input must be exactly one minimal encoding: truncated input, redundant
/// continuation groups, and values past 64 bits are all malformed.
fn decode_uvarint(bytes: &[u8]) -> Result<u64, AddressError> {
    if bytes.is_empty() || bytes.len() > MAX_VARINT_LENGTH {
        return Err(AddressError::MalformedVarint);
    }

    let mut value: u64 = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        let last = i + 1 == bytes.len();
        if (byte & 0x80 == 0) != last {
            return Err(AddressError::MalformedVarint);
        }
        let group = (byte & 0x7F) as u64;
        if i == MAX_VARINT_LENGTH - 1 && group > 1 {
            // The tenth group holds only the top bit of a u64
            return Err(AddressError::MalformedVarint);
        }
        if last && i > 0 && group == 0 {
            // A zero final group means the previous continuation bit was
            // redundant
            return Err(AddressError::MalformedVarint);
        }
        value |= group << (7 * i);
    }

    Ok(value)
}

// ============================================================================
// Base32 Implementation
// ============================================================================

/// Lowercase RFC 4648 alphabet; the string form is never padded.
const BASE32_ALPHABET: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyz234567";

fn base32_encode(data: &[u8]) -> String {
    let mut out = String::with_capacity((data.len() * 8 + 4) / 5);
    let mut acc: u32 = 0;
    let mut bits: u8 = 0;

    for &byte in data {
        acc = (acc << 8) | byte as u32;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(BASE32_ALPHABET[(acc >> bits) as usize & 31] as char);
        }
    }

    // Final partial group, zero-filled on the right
    if bits > 0 {
        out.push(BASE32_ALPHABET[(acc << (5 - bits)) as usize & 31] as char);
    }

    out
}

fn base32_decode(input: &str) -> Result<Vec<u8>, AddressError> {
    let mut out = Vec::with_capacity(input.len() * 5 / 8);
    let mut acc: u32 = 0;
    let mut bits: u8 = 0;

    // Iterate bytes, not chars: every alphabet symbol is single-byte ASCII,
    // and any byte of a multi-byte character falls outside the alphabet
    for byte in input.bytes() {
        let value = BASE32_ALPHABET
            .iter()
            .position(|&x| x == byte)
            .ok_or(AddressError::MalformedEncoding)?;
        acc = (acc << 5) | value as u32;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
        }
    }

    // A dangling symbol or nonzero fill bits cannot come from whole bytes
    if bits >= 5 || (acc << (8 - bits)) as u8 != 0 {
        return Err(AddressError::MalformedEncoding);
    }

    Ok(out)
}
