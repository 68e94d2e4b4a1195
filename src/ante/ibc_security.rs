use crate::{
    address::AccAddress,
    ante::MessageFilter,
    Context, FilterError, Msg,
};

/// Maximum length of an IBC receiver, owner or payee address in bytes
pub const MAXIMUM_RECEIVER_LENGTH: usize = 2048;

/// Maximum length of an ICS-20 transfer memo in bytes
pub const MAXIMUM_MEMO_LENGTH: usize = 32768;

/// Extra field checks for IBC messages, backported from ibc-go
///
/// The IBC modules' own `ValidateBasic` covers everything else; this filter
/// only adds the bounds they are missing:
/// - `MsgTransfer`: receiver length, memo length, receiver must be a bech32
///   account address with the chain's prefix
/// - `MsgSendTx`: owner length
/// - `MsgRegisterCounterpartyPayee`: counterparty payee length
///
/// Other messages pass through. The checks are identical in simulation so
/// gas estimation cannot be used to skip them.
#[derive(Debug, Clone)]
pub struct IbcSecurityFilter {
    account_prefix: String,
}

impl IbcSecurityFilter {
    /// # Arguments
    /// * `account_prefix` - Bech32 human-readable prefix of account addresses
    pub fn new(account_prefix: impl Into<String>) -> Self {
        Self {
            account_prefix: account_prefix.into(),
        }
    }

    pub fn account_prefix(&self) -> &str {
        &self.account_prefix
    }
}

impl MessageFilter for IbcSecurityFilter {
    fn name(&self) -> &str {
        "ibc_security"
    }

    fn check(&self, _ctx: &Context, msg: &Msg, _simulate: bool) -> Result<(), FilterError> {
        match msg {
            Msg::Transfer(transfer) => {
                check_length("receiver address", &transfer.receiver, MAXIMUM_RECEIVER_LENGTH)?;
                check_length("memo", &transfer.memo, MAXIMUM_MEMO_LENGTH)?;

                AccAddress::from_bech32(&transfer.receiver, &self.account_prefix).map_err(
                    |source| FilterError::InvalidAddressEncoding {
                        field: "receiver",
                        source,
                    },
                )?;
            }
            Msg::SendTx(send_tx) => {
                check_length("owner address", &send_tx.owner, MAXIMUM_RECEIVER_LENGTH)?;
            }
            Msg::RegisterCounterpartyPayee(register) => {
                check_length(
                    "counterparty payee address",
                    &register.counterparty_payee,
                    MAXIMUM_RECEIVER_LENGTH,
                )?;
            }
            Msg::Other(_) => {}
        }

        Ok(())
    }
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), FilterError> {
    if value.len() > max {
        return Err(FilterError::FieldTooLong {
            field,
            len: value.len(),
            max,
        });
    }
    Ok(())
}
