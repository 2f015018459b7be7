//! Encoded path -> route

use soroban_sdk::{Bytes, Env, Vec};

use crate::constants::{ADDR_SIZE, NEXT_OFFSET, PARAM_SIZE, POOL_OFFSET};
use crate::error::PathError;
use crate::reader::{read_hop_param, read_token};
use crate::types::Route;

/// Check the length invariant and return the number of pools.
pub fn validate(path: &Bytes) -> Result<u32, PathError> {
    let len = path.len();
    if len < NEXT_OFFSET || (len - ADDR_SIZE) % POOL_OFFSET != 0 {
        return Err(PathError::MalformedPath);
    }
    Ok((len - ADDR_SIZE) / POOL_OFFSET)
}

pub fn is_well_formed(path: &Bytes) -> bool {
    validate(path).is_ok()
}

/// Parse every token and hop parameter. Inverse of `encode`.
pub fn decode(env: &Env, path: &Bytes) -> Result<Route, PathError> {
    validate(path)?;

    let mut tokens = Vec::new(env);
    let mut hop_params = Vec::new(env);
    let mut offset: u32 = 0;

    loop {
        tokens.push_back(read_token(env, path, offset)?);
        offset += ADDR_SIZE;

        if offset == path.len() {
            break;
        }

        hop_params.push_back(read_hop_param(path, offset)?);
        offset += PARAM_SIZE;
    }

    Ok(Route { tokens, hop_params })
}
