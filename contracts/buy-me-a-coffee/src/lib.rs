#![no_std]
use soroban_sdk::{contract, contractimpl, token, Address, Env, String, Vec};

pub mod errors;
pub mod events;
pub mod storage;

// Re-export the main types so `use super::*` in test.rs picks them up.
pub use errors::ContractError;
pub use storage::{DataKey, Memo};

use events::{emit_coffee_bought, emit_recipient_updated, emit_withdrawn};
use storage::{
    get_count, get_memo, get_memos, get_recipient, get_token, has_recipient, push_memo,
    set_recipient, set_token,
};

// Contract

/// # Buy-Me-A-Coffee Ledger Contract
///
/// A minimal value-custody Soroban contract: anyone can buy the recipient a
/// coffee by sending tokens along with a short note. Each payment is logged
/// as an immutable [`Memo`], the funds accumulate in the contract, and the
/// current recipient can sweep the whole balance at any time.
///
/// ## Module layout
/// | Module        | Responsibility                              |
/// |---------------|---------------------------------------------|
/// | `errors.rs`   | `#[contracterror]` typed error codes        |
/// | `storage.rs`  | `DataKey`, `Memo`, storage + TTL helpers    |
/// | `events.rs`   | `("coffee", ...)` Soroban event helpers     |
/// | `lib.rs`      | Contract entry-points (this file)           |
///
/// ## Design decisions
/// - **Explicit callers:** every write takes the acting `Address` and
///   authenticates it with `require_auth`, instead of relying on any
///   ambient notion of "sender".
/// - **Balance lives in the token contract:** the escrowed balance is the
///   contract address's balance in the payment token, so sweeping it is a
///   single token transfer. There is no mirrored balance in storage that
///   could drift out of sync or be observed half-updated.
/// - **Append-only memo log:** one persistent entry per memo, indexed by
///   position, plus an instance-storage counter. Entries are never mutated
///   or removed and TTLs are extended on every read and write.
/// - **Open recipient reassignment:** `set_myself_as_recipient` has no
///   access control. Any caller may take the role, and with it the right to
///   sweep funds contributed before the takeover. This mirrors the behavior
///   the contract has always shipped with and is covered by the test suite;
///   see `set_myself_as_recipient` before relying on it.
/// - **Typed errors:** `#[contracterror]` codes that appear in host
///   responses and are matchable in tests via `try_` client calls.
#[contract]
pub struct BuyMeACoffee;

#[contractimpl]
impl BuyMeACoffee {
    // Lifecycle

    /// Initialize the contract with its first `recipient` and the `token`
    /// coffees are paid in.
    ///
    /// Must be called **once** right after deployment, by convention with
    /// the deployer's own address as `recipient`. The token address is
    /// typically the native-asset Stellar Asset Contract, but any token
    /// interface implementation works.
    ///
    /// Returns [`ContractError::AlreadyInitialized`] if called a second time.
    pub fn initialize(env: Env, recipient: Address, token: Address) -> Result<(), ContractError> {
        if has_recipient(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        set_recipient(&env, &recipient);
        set_token(&env, &token);
        // Initialize the counter explicitly so `memo_count` is always readable.
        env.storage().instance().set(&DataKey::MemoCount, &0u32);
        Ok(())
    }

    // Write

    /// Buy the recipient a coffee: escrow `amount` tokens and log a memo.
    ///
    /// ## Authorization
    /// `from` must authorize the call. Anyone may pay; there is no
    /// restriction on the payer.
    ///
    /// ## Parameters
    /// - `from`: the paying address
    /// - `name`: name to sign the memo with; any text, stored verbatim
    /// - `message`: note to the recipient; any text, stored verbatim
    /// - `amount`: tokens to attach, in the token's smallest unit. Zero is
    ///   accepted (a memo with no money is still a memo).
    ///
    /// ## Errors
    /// - [`ContractError::NotInitialized`]: contract was never initialized
    /// - [`ContractError::InvalidAmount`]: `amount` is negative
    ///
    /// A payer that cannot cover `amount` fails inside the token transfer,
    /// which aborts the whole invocation before any memo is stored.
    pub fn buy_coffee(
        env: Env,
        from: Address,
        name: String,
        message: String,
        amount: i128,
    ) -> Result<(), ContractError> {
        // 1. Payer authorization.
        from.require_auth();

        // 2. Amount guard. i128 is signed; only negatives are rejected.
        if amount < 0 {
            return Err(ContractError::InvalidAmount);
        }

        // 3. Escrow the payment in the contract's own token balance.
        let token_id = get_token(&env)?;
        token::Client::new(&env, &token_id).transfer(
            &from,
            &env.current_contract_address(),
            &amount,
        );

        // 4. Build and persist the memo (also bumps the counter and TTLs).
        let memo = Memo {
            from,
            timestamp: env.ledger().timestamp(),
            name,
            message,
        };
        push_memo(&env, &memo);

        // 5. Emit Soroban event so off-chain indexers don't need to poll state.
        emit_coffee_bought(&env, memo);

        Ok(())
    }

    /// Sweep the entire escrowed balance to the current recipient.
    ///
    /// ## Authorization
    /// `caller` must authorize the call **and** be the current recipient.
    ///
    /// The swept amount is whatever the contract's token balance is at call
    /// time; after a successful call the balance is exactly zero. There is
    /// no partial withdrawal.
    ///
    /// ## Errors
    /// - [`ContractError::NotInitialized`]: contract was never initialized
    /// - [`ContractError::Unauthorized`]: `caller` is not the recipient;
    ///   balance and memos are untouched
    /// - [`ContractError::TransferFailed`]: the token transfer did not
    ///   complete; the whole invocation rolls back and the balance stays
    ///   intact
    pub fn withdraw(env: Env, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();

        let recipient = get_recipient(&env)?;
        if caller != recipient {
            return Err(ContractError::Unauthorized);
        }

        let token_id = get_token(&env)?;
        let client = token::Client::new(&env, &token_id);

        // Capture the full balance, then move it in one transfer. The host
        // rolls the sub-call back together with this invocation on error,
        // and contract invocations cannot reenter, so the balance can never
        // be observed swept-but-not-cleared or cleared-but-not-swept.
        let amount = client.balance(&env.current_contract_address());
        if client
            .try_transfer(&env.current_contract_address(), &recipient, &amount)
            .is_err()
        {
            return Err(ContractError::TransferFailed);
        }

        emit_withdrawn(&env, recipient, amount);

        Ok(())
    }

    /// Make `caller` the recipient.
    ///
    /// ## Authorization
    /// `caller` must authorize the call. **There is no other check**: any
    /// address may claim the role, including while the contract still holds
    /// funds accrued for the previous recipient, which the new recipient
    /// can then withdraw. Deliberately permissive; callers who want the
    /// previous recipient paid out first should `withdraw` before this.
    ///
    /// Does not touch the balance or the memo log.
    ///
    /// Returns [`ContractError::NotInitialized`] if the contract has not
    /// been initialized yet.
    pub fn set_myself_as_recipient(env: Env, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();
        let previous = get_recipient(&env)?;
        set_recipient(&env, &caller);
        emit_recipient_updated(&env, previous, caller);
        Ok(())
    }

    // Read

    /// Return the current recipient address.
    ///
    /// Returns [`ContractError::NotInitialized`] if the contract has not
    /// been initialized yet.
    pub fn recipient(env: Env) -> Result<Address, ContractError> {
        get_recipient(&env)
    }

    /// Return the whole memo log in insertion order.
    pub fn memos(env: Env) -> Result<Vec<Memo>, ContractError> {
        get_memos(&env)
    }

    /// Return the total number of memos logged so far.
    pub fn memo_count(env: Env) -> u32 {
        get_count(&env)
    }

    /// Return the [`Memo`] at `index` (0-based, insertion order).
    ///
    /// Returns [`ContractError::MemoNotFound`] past the end of the log.
    pub fn get_memo(env: Env, index: u32) -> Result<Memo, ContractError> {
        get_memo(&env, index)
    }

    /// Return the payment token address.
    ///
    /// Returns [`ContractError::NotInitialized`] if the contract has not
    /// been initialized yet.
    pub fn token(env: Env) -> Result<Address, ContractError> {
        get_token(&env)
    }
}
