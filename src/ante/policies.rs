//! Filter selection
//!
//! Maps configured filter names to filter instances and assembles the
//! message filter decorator in configuration order.

use crate::ante::{IbcSecurityFilter, MessageFilter, MessageFilterDecorator};
use crate::config::{AddressConfig, AnteConfig};
use serde::Deserialize;

/// Message filters that can be enabled from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    /// Length and address checks for IBC transfer, ICA and fee messages
    IbcSecurity,
}

/// Factory function to create a filter instance
pub fn create_filter(filter_type: FilterType, address: &AddressConfig) -> Box<dyn MessageFilter> {
    match filter_type {
        FilterType::IbcSecurity => Box::new(IbcSecurityFilter::new(address.account_prefix.clone())),
    }
}

/// Build the message filter decorator with filters in configured order
pub fn build_decorator(ante: &AnteConfig, address: &AddressConfig) -> MessageFilterDecorator {
    let filters = ante
        .filters
        .iter()
        .map(|filter_type| create_filter(*filter_type, address))
        .collect();

    MessageFilterDecorator::new(filters)
}
