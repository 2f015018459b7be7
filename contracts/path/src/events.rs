//! Path contract events

use soroban_sdk::{BytesN, Env, Symbol};

/// Emitted when a route is packed into a path
pub fn emit_path_encoded(env: &Env, num_tokens: u32, path_len: u32) {
    env.events().publish(
        (Symbol::new(env, "PathEncoded"),),
        (num_tokens, path_len),
    );
}

/// Emitted after a path has been walked hop by hop
pub fn emit_path_walked(
    env: &Env,
    token_in: &BytesN<20>,
    token_out: &BytesN<20>,
    num_hops: u32,
) {
    env.events().publish(
        (Symbol::new(env, "PathWalked"),),
        (token_in.clone(), token_out.clone(), num_hops),
    );
}
