#![allow(dead_code)]

use belugaswap_path_contract::{BelugaPath, BelugaPathClient};
use soroban_sdk::{vec, BytesN, Env, Vec};

// Test constants
pub const TICK_SPACING_MEDIUM: u32 = 60;
pub const FEE_LOW: u32 = 500;
pub const FEE_MEDIUM: u32 = 3000;

/// Register the path contract
pub fn setup_path(env: &Env) -> BelugaPathClient<'_> {
    let contract_id = env.register(BelugaPath, ());
    BelugaPathClient::new(env, &contract_id)
}

pub fn token(env: &Env, seed: u8) -> BytesN<20> {
    BytesN::from_array(env, &[seed; 20])
}

/// Three distinct tokens A, B, C
pub fn three_tokens(env: &Env) -> Vec<BytesN<20>> {
    vec![env, token(env, 0xa1), token(env, 0xb2), token(env, 0xc3)]
}
