use soroban_sdk::{contracttype, vec, Address, Env, String, Vec};

use crate::errors::ContractError;

// TTL budget, assuming ~5-second ledger close times:
//   MIN_TTL  = 17 280 ledgers, about a day; extend once the remaining TTL
//              drops below this
//   BUMP_TTL = 518 400 ledgers, about thirty days; the target TTL after an
//              extension

const MIN_TTL: u32 = 17_280;
const BUMP_TTL: u32 = 518_400;

// Storage keys

/// All keys used in this contract's instance and persistent storage.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// The recipient [`Address`] in **instance** storage.
    Recipient,
    /// The payment token contract [`Address`] in **instance** storage.
    Token,
    /// Running count of memos in **instance** storage.
    MemoCount,
    /// A [`Memo`] indexed by position in **persistent** storage.
    Memo(u32),
}

// Data structures

/// Immutable record of a single coffee payment.
///
/// Appended exactly once per accepted payment, in arrival order, and never
/// mutated or removed afterwards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Memo {
    /// Address that paid for the coffee.
    pub from: Address,
    /// Ledger timestamp (Unix seconds) at the time of payment.
    pub timestamp: u64,
    /// Name the buyer chose to sign with. Arbitrary text, stored verbatim.
    pub name: String,
    /// Message to the recipient. Arbitrary text, stored verbatim.
    pub message: String,
}

// Recipient helpers (instance storage)

/// Return `true` if the contract has been initialized.
pub fn has_recipient(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Recipient)
}

/// Read the current recipient.
///
/// Returns [`ContractError::NotInitialized`] if `initialize()` was never called.
pub fn get_recipient(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Recipient)
        .ok_or(ContractError::NotInitialized)
}

/// Persist a new recipient address and extend instance TTL.
pub fn set_recipient(env: &Env, recipient: &Address) {
    env.storage().instance().set(&DataKey::Recipient, recipient);
    env.storage().instance().extend_ttl(MIN_TTL, BUMP_TTL);
}

// Token helpers (instance storage)

/// Read the payment token address.
///
/// Returns [`ContractError::NotInitialized`] if `initialize()` was never called.
pub fn get_token(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(ContractError::NotInitialized)
}

/// Persist the payment token address and extend instance TTL.
pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    env.storage().instance().extend_ttl(MIN_TTL, BUMP_TTL);
}

// Memo helpers (persistent storage, indexed by position)

/// Return the current memo count (0 if not yet set).
pub fn get_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::MemoCount)
        .unwrap_or(0u32)
}

/// Read the memo at `index`.
///
/// Returns [`ContractError::MemoNotFound`] for any index at or past the
/// current count.
pub fn get_memo(env: &Env, index: u32) -> Result<Memo, ContractError> {
    let key = DataKey::Memo(index);
    let memo: Option<Memo> = env.storage().persistent().get(&key);
    match memo {
        Some(m) => {
            // Extend TTL every time we read so hot entries stay alive.
            env.storage()
                .persistent()
                .extend_ttl(&key, MIN_TTL, BUMP_TTL);
            Ok(m)
        }
        None => Err(ContractError::MemoNotFound),
    }
}

/// Append a [`Memo`] at the next index, bump the counter, and extend TTLs.
pub fn push_memo(env: &Env, memo: &Memo) {
    let index = get_count(env);
    let key = DataKey::Memo(index);
    env.storage().persistent().set(&key, memo);
    env.storage()
        .persistent()
        .extend_ttl(&key, MIN_TTL, BUMP_TTL);
    env.storage()
        .instance()
        .set(&DataKey::MemoCount, &(index + 1u32));
    env.storage().instance().extend_ttl(MIN_TTL, BUMP_TTL);
}

/// Read the whole memo log in insertion order.
///
/// Every index below the counter has a stored entry, so the lookup inside
/// the loop cannot fail.
pub fn get_memos(env: &Env) -> Result<Vec<Memo>, ContractError> {
    let mut memos = vec![env];
    for index in 0..get_count(env) {
        memos.push_back(get_memo(env, index)?);
    }
    Ok(memos)
}
