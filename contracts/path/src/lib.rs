#![no_std]

//! # BelugaSwap Path
//!
//! Stateless contract over the packed multi-hop path format, for off-chain
//! callers building call data and for contracts that want to inspect a path
//! before executing it.
//!
//! ## Functions:
//! - Build (2): encode, decode
//! - Navigate (5): has_multiple_pools, decode_first_pool, get_first_pool, skip_token, num_pools
//! - Walk (1): walk

use soroban_sdk::{contract, contractimpl, log, Bytes, BytesN, Env, Vec};

use belugaswap_path as codec;

mod events;

use events::*;

pub use codec::{HopParameter, PathError, PoolKey, Route};

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct BelugaPath;

#[contractimpl]
impl BelugaPath {
    // ========================================================
    // BUILD
    // ========================================================

    /// Pack tokens and raw hop parameters into a path
    pub fn encode(
        env: Env,
        tokens: Vec<BytesN<20>>,
        hop_params: Vec<u32>,
    ) -> Result<Bytes, PathError> {
        codec::check_counts(tokens.len(), hop_params.len())?;

        let mut params = Vec::new(&env);
        for raw in hop_params.iter() {
            params.push_back(HopParameter::new(raw)?);
        }

        let path = codec::encode(&env, &tokens, &params)?;

        emit_path_encoded(&env, tokens.len(), path.len());

        Ok(path)
    }

    /// Unpack a full path
    pub fn decode(env: Env, path: Bytes) -> Result<Route, PathError> {
        codec::decode(&env, &path)
    }

    // ========================================================
    // NAVIGATE
    // ========================================================

    pub fn has_multiple_pools(_env: Env, path: Bytes) -> bool {
        codec::has_multiple_pools(&path)
    }

    pub fn decode_first_pool(env: Env, path: Bytes) -> Result<PoolKey, PathError> {
        codec::decode_first_pool(&env, &path)
    }

    pub fn get_first_pool(_env: Env, path: Bytes) -> Result<Bytes, PathError> {
        codec::get_first_pool(&path)
    }

    pub fn skip_token(_env: Env, path: Bytes) -> Result<Bytes, PathError> {
        codec::skip_token(&path)
    }

    pub fn num_pools(_env: Env, path: Bytes) -> u32 {
        codec::num_pools(&path)
    }

    // ========================================================
    // WALK
    // ========================================================

    /// Decode every hop the way a multi-hop swap consumes the path
    pub fn walk(env: Env, path: Bytes) -> Result<Vec<PoolKey>, PathError> {
        let mut pools = Vec::new(&env);

        for pool in codec::hops(&env, &path) {
            let pool = pool?;
            log!(&env, "hop param", pool.hop_param.get());
            pools.push_back(pool);
        }

        let (first, last) = match (pools.first(), pools.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(PathError::BufferUnderrun),
        };

        emit_path_walked(&env, &first.token_a, &last.token_b, pools.len());

        Ok(pools)
    }
}
