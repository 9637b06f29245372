use soroban_sdk::contracterror;

/// Typed error codes returned by the contract.
///
/// `#[contracterror]` encodes each variant as a `ScError::Contract(u32)`,
/// so the codes below are part of the contract's public interface and must
/// stay stable across releases.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// `initialize` was called a second time.
    AlreadyInitialized = 1,
    /// The contract was never initialized.
    NotInitialized = 2,
    /// `withdraw` was called by an address that is not the recipient.
    Unauthorized = 3,
    /// `buy_coffee` was called with a negative amount.
    InvalidAmount = 4,
    /// The token transfer to the recipient failed; nothing was changed.
    TransferFailed = 5,
    /// `get_memo` was called with an index past the end of the log.
    MemoNotFound = 6,
}
