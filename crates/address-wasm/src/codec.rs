//! JS-facing address derivation and parsing.

use address_core::{decode, encode, Address, Network};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

fn parse_network(network: &str) -> Result<Network, JsValue> {
    Network::from_str(network).ok_or_else(|| JsValue::from_str("Invalid network"))
}

fn encode_to_js(network: &str, addr: &Address) -> Result<String, JsValue> {
    let net = parse_network(network)?;
    encode(net, addr).map_err(|e| JsValue::from_str(&format!("Encoding failed: {}", e)))
}

/// Derive an ID address and encode it for the given network.
#[wasm_bindgen]
pub fn derive_id_address(id: u64, network: &str) -> Result<String, JsValue> {
    encode_to_js(network, &Address::new_id(id))
}

/// Derive an address from a secp256k1 public key.
#[wasm_bindgen]
pub fn derive_secp256k1_address(pubkey: &[u8], network: &str) -> Result<String, JsValue> {
    encode_to_js(network, &Address::new_secp256k1(pubkey))
}

/// Derive an actor address from actor initialization data.
#[wasm_bindgen]
pub fn derive_actor_address(data: &[u8], network: &str) -> Result<String, JsValue> {
    encode_to_js(network, &Address::new_actor(data))
}

/// Derive an address from a BLS public key.
#[wasm_bindgen]
pub fn derive_bls_address(pubkey: &[u8], network: &str) -> Result<String, JsValue> {
    encode_to_js(network, &Address::new_bls(pubkey))
}

/// Decoded address details for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressInfo {
    /// Protocol discriminant byte.
    pub protocol: u8,
    /// Protocol display name.
    pub protocol_name: String,
    /// Payload bytes as hex.
    pub payload_hex: String,
    /// Full on-chain byte form as hex.
    pub bytes_hex: String,
}

impl AddressInfo {
    fn from_address(addr: &Address) -> Self {
        AddressInfo {
            protocol: addr.protocol() as u8,
            protocol_name: addr.protocol().name().to_string(),
            payload_hex: hex::encode(addr.payload()),
            bytes_hex: hex::encode(addr.to_bytes()),
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

/// Parse an address string and return its decoded details.
#[wasm_bindgen]
pub fn parse_address(text: &str) -> Result<JsValue, JsValue> {
    let addr =
        decode(text).map_err(|e| JsValue::from_str(&format!("Invalid address: {}", e)))?;
    AddressInfo::from_address(&addr).to_js()
}

/// Check whether an address string is well-formed.
#[wasm_bindgen]
pub fn check_address(text: &str) -> bool {
    decode(text).is_ok()
}
