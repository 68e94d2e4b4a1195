//! Ante Filter Module
//! 
//! Pre-execution checks run on every transaction before any of its messages
//! touch state:
//! - `MessageFilterDecorator`: runs an ordered list of message filters over
//!   every message and rejects the transaction at the first failure
//! - `IbcSecurityFilter`: field length and address checks for IBC messages
//!   that the IBC modules themselves do not enforce
//! 
//! Filter chains are assembled from configuration through `build_decorator`.

mod decorator;
mod ibc_security;
mod policies;


pub use decorator::{
    AnteDecorator,
    AnteHandler,
    MessageFilter,
    MessageFilterDecorator,
    terminator,
};
pub use ibc_security::{IbcSecurityFilter, MAXIMUM_MEMO_LENGTH, MAXIMUM_RECEIVER_LENGTH};
pub use policies::{FilterType, build_decorator, create_filter};
