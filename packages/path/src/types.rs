// Path Types

use soroban_sdk::{contracttype, BytesN, Vec};

use crate::constants::{MAX_HOP_PARAMETER, PARAM_SIZE};
use crate::error::PathError;

// ============================================================
// HOP PARAMETER
// ============================================================

/// Per-hop pool selector (fee tier or tick spacing class).
///
/// Always fits in 24 bits and travels big-endian.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub struct HopParameter(u32);

impl HopParameter {
    pub const MAX: u32 = MAX_HOP_PARAMETER;

    pub fn new(value: u32) -> Result<Self, PathError> {
        if value > Self::MAX {
            return Err(PathError::HopParameterOutOfRange);
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// A value built through the contract ABI skips `new`, so callers
    /// re-check before writing it out.
    pub fn is_in_range(&self) -> bool {
        self.0 <= Self::MAX
    }

    pub fn to_be_bytes(&self) -> [u8; PARAM_SIZE as usize] {
        let [_, hi, mid, lo] = self.0.to_be_bytes();
        [hi, mid, lo]
    }

    pub fn from_be_bytes(bytes: [u8; PARAM_SIZE as usize]) -> Self {
        let [hi, mid, lo] = bytes;
        Self(u32::from_be_bytes([0, hi, mid, lo]))
    }
}

impl TryFrom<u32> for HopParameter {
    type Error = PathError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HopParameter> for u32 {
    fn from(param: HopParameter) -> Self {
        param.0
    }
}

// ============================================================
// DECODED VALUES
// ============================================================

/// One hop of a path: the pool between two adjacent tokens
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolKey {
    /// Token the hop starts from
    pub token_a: BytesN<20>,
    /// Token the hop ends at
    pub token_b: BytesN<20>,
    /// Pool variant used for the hop
    pub hop_param: HopParameter,
}

/// Fully decoded route
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Route {
    /// Ordered tokens, at least two
    pub tokens: Vec<BytesN<20>>,
    /// One parameter between every adjacent token pair
    pub hop_params: Vec<HopParameter>,
}

impl Route {
    pub fn num_pools(&self) -> u32 {
        self.hop_params.len()
    }
}
