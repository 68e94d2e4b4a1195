//! API Module
//! 
//! This module handles the JSON-RPC API for checking and simulating
//! transactions against the ante filters.

mod server;
pub use server::Server;
