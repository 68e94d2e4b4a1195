//! Address Module
//! 
//! Bech32 account addresses: decoding with human-readable prefix and
//! payload format checks, and encoding back to the string form.

mod codec;
pub use codec::{AccAddress, AddressError, MAX_ADDR_LEN, verify_address_format};
