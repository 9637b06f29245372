use soroban_sdk::{Address, Env, Symbol};

use crate::storage::Memo;

// Every mutating entry point after `initialize` publishes exactly one event
// under the ("coffee", <verb>) topic pair, so off-chain indexers can follow
// the ledger without polling state.

/// Publish `("coffee", "bought")` carrying the freshly stored [`Memo`].
pub fn emit_coffee_bought(env: &Env, memo: Memo) {
    let topics = (Symbol::new(env, "coffee"), Symbol::new(env, "bought"));
    env.events().publish(topics, memo);
}

/// Publish `("coffee", "withdrawn")` with the recipient and swept amount.
pub fn emit_withdrawn(env: &Env, recipient: Address, amount: i128) {
    let topics = (Symbol::new(env, "coffee"), Symbol::new(env, "withdrawn"));
    env.events().publish(topics, (recipient, amount));
}

/// Publish `("coffee", "recipient")` with the previous and new recipient.
pub fn emit_recipient_updated(env: &Env, previous: Address, new: Address) {
    let topics = (Symbol::new(env, "coffee"), Symbol::new(env, "recipient"));
    env.events().publish(topics, (previous, new));
}
