//! Filament network definitions.

/// Filament network type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    /// Filament mainnet
    Mainnet,
    /// Filament testnet
    Testnet,
}

impl Network {
    /// Get the one-character prefix for addresses on this network.
    pub fn prefix(&self) -> &'static str {
        match self {
            Network::Mainnet => "f",
            Network::Testnet => "t",
        }
    }

    /// Map an address prefix character back to its network.
    pub fn from_prefix(c: char) -> Option<Self> {
        match c {
            'f' => Some(Network::Mainnet),
            't' => Some(Network::Testnet),
            _ => None,
        }
    }

    /// Parse network from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Some(Network::Mainnet),
            "testnet" | "test" => Some(Network::Testnet),
            _ => None,
        }
    }

    /// Get network name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }

    /// Get display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Network::Mainnet => "Filament Mainnet",
            Network::Testnet => "Filament Testnet",
        }
    }
}

impl core::fmt::Display for Network {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::Mainnet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_from_str() {
        assert_eq!(Network::from_str("mainnet"), Some(Network::Mainnet));
        assert_eq!(Network::from_str("MAINNET"), Some(Network::Mainnet));
        assert_eq!(Network::from_str("testnet"), Some(Network::Testnet));
        assert_eq!(Network::from_str("invalid"), None);
    }

    #[test]
    fn test_prefix_round_trip() {
        for network in [Network::Mainnet, Network::Testnet] {
            let prefix = network.prefix();
            assert_eq!(prefix.len(), 1);
            let c = prefix.chars().next().unwrap();
            assert_eq!(Network::from_prefix(c), Some(network));
        }
        assert_eq!(Network::from_prefix('x'), None);
    }
}
