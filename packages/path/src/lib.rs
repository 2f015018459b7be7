// BelugaSwap Path Package
//
// Packed multi-hop swap path:
//   token (20) | hop param (3) | token (20) | ... | token (20)

#![no_std]

pub mod constants;
pub mod error;
pub mod types;
pub mod encoder;
pub mod decoder;
pub mod navigator;

mod reader;

pub use constants::*;
pub use error::PathError;
pub use types::{HopParameter, PoolKey, Route};

pub use encoder::{check_counts, encode, encode_route, encoded_len};
pub use decoder::{decode, is_well_formed, validate};
pub use navigator::{
    decode_first_pool,
    get_first_pool,
    has_multiple_pools,
    hops,
    num_pools,
    skip_token,
    HopIter,
};
