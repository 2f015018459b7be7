//! Hop-by-hop navigation over an encoded path.
//!
//! None of these functions parse the whole route. Each one reads only the
//! bytes of the first hop, and the sub-paths they return are host-side slices
//! of the input.
//!
//! Walking a route:
//!
//! ```ignore
//! loop {
//!     let pool = decode_first_pool(&env, &path)?;
//!     // swap through `pool`
//!     if !has_multiple_pools(&path) {
//!         break;
//!     }
//!     path = skip_token(&path)?;
//! }
//! ```

use soroban_sdk::{Bytes, Env};

use crate::constants::{ADDR_SIZE, NEXT_OFFSET, POOL_OFFSET};
use crate::error::PathError;
use crate::reader::{ensure_len, read_hop_param, read_token};
use crate::types::PoolKey;

/// True when the path is longer than a single hop
#[inline]
pub fn has_multiple_pools(path: &Bytes) -> bool {
    path.len() > NEXT_OFFSET
}

/// Number of pools implied by the length alone (no validation)
pub fn num_pools(path: &Bytes) -> u32 {
    path.len().saturating_sub(ADDR_SIZE) / POOL_OFFSET
}

/// Decode `(token_a, token_b, hop_param)` of the first hop
pub fn decode_first_pool(env: &Env, path: &Bytes) -> Result<PoolKey, PathError> {
    ensure_len(path, NEXT_OFFSET)?;

    Ok(PoolKey {
        token_a: read_token(env, path, 0)?,
        hop_param: read_hop_param(path, ADDR_SIZE)?,
        token_b: read_token(env, path, POOL_OFFSET)?,
    })
}

/// The first hop as a standalone one-hop path
pub fn get_first_pool(path: &Bytes) -> Result<Bytes, PathError> {
    ensure_len(path, NEXT_OFFSET)?;
    Ok(path.slice(..NEXT_OFFSET))
}

/// Drop the first token and its parameter, so the path starts at the second token
pub fn skip_token(path: &Bytes) -> Result<Bytes, PathError> {
    ensure_len(path, POOL_OFFSET)?;
    Ok(path.slice(POOL_OFFSET..))
}

// ============================================================
// ITERATOR
// ============================================================

/// Yields every hop of a path in order.
///
/// A truncated tail yields one `BufferUnderrun` and ends the iteration.
pub struct HopIter<'a> {
    env: &'a Env,
    remaining: Option<Bytes>,
}

impl<'a> Iterator for HopIter<'a> {
    type Item = Result<PoolKey, PathError>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.remaining.take()?;

        let pool = match decode_first_pool(self.env, &path) {
            Ok(pool) => pool,
            Err(e) => return Some(Err(e)),
        };

        if has_multiple_pools(&path) {
            match skip_token(&path) {
                Ok(rest) => self.remaining = Some(rest),
                Err(e) => return Some(Err(e)),
            }
        }

        Some(Ok(pool))
    }
}

pub fn hops<'a>(env: &'a Env, path: &Bytes) -> HopIter<'a> {
    HopIter {
        env,
        remaining: Some(path.clone()),
    }
}
