//! Route -> encoded path

use soroban_sdk::{Bytes, BytesN, Env, Vec};

use crate::constants::{ADDR_SIZE, MIN_TOKENS, POOL_OFFSET};
use crate::error::PathError;
use crate::types::{HopParameter, Route};

/// At least two tokens and one hop parameter per adjacent pair
pub fn check_counts(num_tokens: u32, num_params: u32) -> Result<(), PathError> {
    if num_tokens < MIN_TOKENS || num_params != num_tokens - 1 {
        return Err(PathError::InvalidPath);
    }
    Ok(())
}

/// Pack `tokens` and `hop_params` as
/// `token[0] param[0] token[1] ... param[N-2] token[N-1]`.
///
/// Requires at least two tokens and exactly one parameter per adjacent pair.
pub fn encode(
    env: &Env,
    tokens: &Vec<BytesN<20>>,
    hop_params: &Vec<HopParameter>,
) -> Result<Bytes, PathError> {
    check_counts(tokens.len(), hop_params.len())?;

    let mut out = Bytes::new(env);
    for (token, param) in tokens.iter().zip(hop_params.iter()) {
        if !param.is_in_range() {
            return Err(PathError::HopParameterOutOfRange);
        }
        out.extend_from_array(&token.to_array());
        out.extend_from_array(&param.to_be_bytes());
    }

    let last = tokens.last().ok_or(PathError::InvalidPath)?;
    out.extend_from_array(&last.to_array());

    Ok(out)
}

pub fn encode_route(env: &Env, route: &Route) -> Result<Bytes, PathError> {
    encode(env, &route.tokens, &route.hop_params)
}

/// Byte length of a path with `num_tokens` tokens (`20*N + 3*(N-1)`)
pub fn encoded_len(num_tokens: u32) -> Option<u32> {
    if num_tokens < MIN_TOKENS {
        return None;
    }
    (num_tokens - 1)
        .checked_mul(POOL_OFFSET)?
        .checked_add(ADDR_SIZE)
}
