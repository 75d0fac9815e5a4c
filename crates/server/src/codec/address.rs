//! Rendering of 32-byte public keys as address strings.
//!
//! The canonical form is bech32 with the network's fixed `claw` prefix.
//! A hex rendering exists for tooling that cannot consume bech32; the two
//! forms are not round-trip compatible, so the choice is made once at
//! startup via [`AddressRenderer`] and never per call. Mixing formats
//! within one dataset is a configuration bug this module makes
//! unrepresentable.

use bech32::{Bech32, Hrp};
use config::AddressFormat;

use super::scalar::PUBKEY_WIDTH;

/// Human-readable prefix of every Claws network address.
pub const HRP: Hrp = Hrp::parse_unchecked("claw");

/// Encode a 32-byte public key as a checksummed claw1... bech32 address.
///
/// Total over any 32-byte input: the payload is far below the bech32
/// length limit, so encoding cannot fail.
pub fn encode_address(pubkey: &[u8; PUBKEY_WIDTH]) -> String {
    bech32::encode::<Bech32>(HRP, pubkey).expect("32-byte payload is within the bech32 length limit")
}

/// Degraded rendering: 0x-prefixed lowercase hex of the raw public key.
///
/// Not interchangeable with [`encode_address`] output; only reachable
/// when the deployment explicitly selects [`AddressFormat::Hex`].
pub fn encode_address_hex(pubkey: &[u8; PUBKEY_WIDTH]) -> String {
    format!("0x{}", hex::encode(pubkey))
}

/// Address rendering capability, fixed at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRenderer {
    format: AddressFormat,
}

impl AddressRenderer {
    pub fn new(format: AddressFormat) -> Self {
        Self { format }
    }

    /// Canonical bech32 rendering; what production deployments use.
    pub fn bech32() -> Self {
        Self::new(AddressFormat::Bech32)
    }

    pub fn render(&self, pubkey: &[u8; PUBKEY_WIDTH]) -> String {
        match self.format {
            AddressFormat::Bech32 => encode_address(pubkey),
            AddressFormat::Hex => encode_address_hex(pubkey),
        }
    }
}
