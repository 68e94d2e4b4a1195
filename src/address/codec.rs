use bech32::{FromBase32, ToBase32, Variant};
use thiserror::Error;

/// Maximum length of a decoded account address payload in bytes
pub const MAX_ADDR_LEN: usize = 255;

/// Reasons a string is not a valid account address
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("empty address string is not allowed")]
    Empty,

    #[error("decoding bech32 failed: {0}")]
    Bech32(#[from] bech32::Error),

    #[error("address uses the bech32m checksum, expected bech32")]
    UnsupportedVariant,

    #[error("invalid bech32 prefix; expected {expected}, got {actual}")]
    PrefixMismatch { expected: String, actual: String },

    #[error("addresses cannot be empty")]
    EmptyPayload,

    #[error("address max length is {max}, got {len}")]
    TooLong { len: usize, max: usize },
}

/// Raw account address bytes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccAddress(Vec<u8>);

impl AccAddress {
    /// Decode a bech32 account address and check it against the expected prefix
    ///
    /// # Arguments
    /// * `address` - Bech32 string, e.g. `mars1...`
    /// * `prefix` - Human-readable part the address must carry
    pub fn from_bech32(address: &str, prefix: &str) -> Result<Self, AddressError> {
        if address.trim().is_empty() {
            return Err(AddressError::Empty);
        }

        let (hrp, data, variant) = bech32::decode(address)?;
        if variant != Variant::Bech32 {
            return Err(AddressError::UnsupportedVariant);
        }
        if hrp != prefix {
            return Err(AddressError::PrefixMismatch {
                expected: prefix.to_string(),
                actual: hrp,
            });
        }

        let bytes = Vec::<u8>::from_base32(&data)?;
        verify_address_format(&bytes)?;

        Ok(Self(bytes))
    }

    /// Encode the address with the given human-readable prefix
    pub fn to_bech32(&self, prefix: &str) -> Result<String, AddressError> {
        Ok(bech32::encode(prefix, self.0.to_base32(), Variant::Bech32)?)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for AccAddress {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Check the decoded payload length of an account address
pub fn verify_address_format(bytes: &[u8]) -> Result<(), AddressError> {
    if bytes.is_empty() {
        return Err(AddressError::EmptyPayload);
    }
    if bytes.len() > MAX_ADDR_LEN {
        return Err(AddressError::TooLong {
            len: bytes.len(),
            max: MAX_ADDR_LEN,
        });
    }
    Ok(())
}
