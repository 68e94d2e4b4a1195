use crate::address::AddressError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Token amount attached to an IBC transfer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    /// Decimal integer encoded as a string, as on the wire
    pub amount: String,
}

/// IBC client height used for packet timeouts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Height {
    pub revision_number: u64,
    pub revision_height: u64,
}

/// ICS-20 fungible token transfer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgTransfer {
    pub source_port: String,
    pub source_channel: String,
    pub token: Coin,
    pub sender: String,
    /// Address on the counterparty chain
    pub receiver: String,
    pub timeout_height: Height,
    pub timeout_timestamp: u64,
    pub memo: String,
}

impl MsgTransfer {
    pub const TYPE_URL: &'static str = "/ibc.applications.transfer.v1.MsgTransfer";
}

/// Interchain accounts controller message that relays a packet to a host chain
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgSendTx {
    pub owner: String,
    pub connection_id: String,
    pub packet_data: Value,
    pub relative_timeout: u64,
}

impl MsgSendTx {
    pub const TYPE_URL: &'static str =
        "/ibc.applications.interchain_accounts.controller.v1.MsgSendTx";
}

/// Fee middleware message registering the payee on the counterparty chain
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgRegisterCounterpartyPayee {
    pub port_id: String,
    pub channel_id: String,
    pub relayer: String,
    pub counterparty_payee: String,
}

impl MsgRegisterCounterpartyPayee {
    pub const TYPE_URL: &'static str = "/ibc.applications.fee.v1.MsgRegisterCounterpartyPayee";
}

/// Wire envelope of a message: `{"@type": "<type url>", ...fields}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnyMsg {
    #[serde(rename = "@type")]
    pub type_url: String,
    #[serde(flatten)]
    pub value: Map<String, Value>,
}

/// A single message inside a transaction
///
/// Only the message kinds inspected by the ante filters are decoded into
/// typed variants. Everything else is kept as an opaque envelope and left to
/// the message's own validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "AnyMsg")]
pub enum Msg {
    Transfer(MsgTransfer),
    SendTx(MsgSendTx),
    RegisterCounterpartyPayee(MsgRegisterCounterpartyPayee),
    Other(AnyMsg),
}

impl Msg {
    pub fn type_url(&self) -> &str {
        match self {
            Msg::Transfer(_) => MsgTransfer::TYPE_URL,
            Msg::SendTx(_) => MsgSendTx::TYPE_URL,
            Msg::RegisterCounterpartyPayee(_) => MsgRegisterCounterpartyPayee::TYPE_URL,
            Msg::Other(any) => &any.type_url,
        }
    }
}

impl TryFrom<AnyMsg> for Msg {
    type Error = serde_json::Error;

    fn try_from(any: AnyMsg) -> Result<Self, Self::Error> {
        match any.type_url.as_str() {
            MsgTransfer::TYPE_URL => Ok(Msg::Transfer(serde_json::from_value(Value::Object(any.value))?)),
            MsgSendTx::TYPE_URL => Ok(Msg::SendTx(serde_json::from_value(Value::Object(any.value))?)),
            MsgRegisterCounterpartyPayee::TYPE_URL => Ok(Msg::RegisterCounterpartyPayee(
                serde_json::from_value(Value::Object(any.value))?,
            )),
            _ => Ok(Msg::Other(any)),
        }
    }
}

/// Transaction body as submitted by clients
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TxBody {
    pub messages: Vec<Msg>,
    #[serde(default)]
    pub memo: String,
}

/// Decoded transaction handed to the ante chain
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Tx {
    pub body: TxBody,
}

impl Tx {
    pub fn new(messages: Vec<Msg>) -> Self {
        Self {
            body: TxBody {
                messages,
                memo: String::new(),
            },
        }
    }

    /// Messages in the order they will be executed
    pub fn msgs(&self) -> &[Msg] {
        &self.body.messages
    }
}

/// Block-level state visible to ante filters. Filters never mutate it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    pub chain_id: String,
    pub block_height: u64,
    pub block_time: DateTime<Utc>,
    /// True while checking a transaction for mempool admission
    pub check_tx: bool,
}

impl Context {
    pub fn new(chain_id: impl Into<String>, block_height: u64, block_time: DateTime<Utc>) -> Self {
        Self {
            chain_id: chain_id.into(),
            block_height,
            block_time,
            check_tx: false,
        }
    }

    pub fn with_check_tx(mut self, check_tx: bool) -> Self {
        self.check_tx = check_tx;
        self
    }
}

/// Rejection reasons produced by a single message filter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("{field} exceeds maximum length of {max} bytes (got {len})")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("{field} is not a validly encoded address: {source}")]
    InvalidAddressEncoding {
        field: &'static str,
        #[source]
        source: AddressError,
    },

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Errors returned by an ante handler
#[derive(Debug, Error)]
pub enum AnteError {
    /// A message filter rejected one of the transaction's messages
    #[error("message filter invariant violated: {source}")]
    FilterInvariantViolated {
        msg_index: usize,
        filter: String,
        #[source]
        source: FilterError,
    },

    /// Failure reported by a later stage of the pipeline
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

impl AnteError {
    /// The underlying filter rejection, if this error came from a message filter
    pub fn filter_error(&self) -> Option<&FilterError> {
        match self {
            AnteError::FilterInvariantViolated { source, .. } => Some(source),
            AnteError::Handler(_) => None,
        }
    }
}

/// Result of a `checkTx` / `simulateTx` call returned to RPC clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckTxResponse {
    pub accepted: bool,
    pub simulate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl CheckTxResponse {
    pub fn accepted(simulate: bool) -> Self {
        Self {
            accepted: true,
            simulate,
            reason: None,
            msg_index: None,
            filter: None,
        }
    }

    pub fn rejected(simulate: bool, err: &AnteError) -> Self {
        let (msg_index, filter) = match err {
            AnteError::FilterInvariantViolated { msg_index, filter, .. } => {
                (Some(*msg_index), Some(filter.clone()))
            }
            AnteError::Handler(_) => (None, None),
        };

        Self {
            accepted: false,
            simulate,
            reason: Some(err.to_string()),
            msg_index,
            filter,
        }
    }

    /// Passed the ante filters but was not admitted by the host
    pub fn not_admitted(simulate: bool, reason: impl Into<String>) -> Self {
        Self {
            accepted: false,
            simulate,
            reason: Some(reason.into()),
            msg_index: None,
            filter: None,
        }
    }
}
