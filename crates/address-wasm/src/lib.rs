//! WebAssembly bindings for the Filament address codec.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Deriving addresses from actor IDs, public keys, and actor init data
//! - Encoding addresses to their checksummed string form
//! - Parsing and validating address strings

use wasm_bindgen::prelude::*;

pub mod codec;

// Re-export main entry points for JS access
pub use codec::{check_address, parse_address, AddressInfo};

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
