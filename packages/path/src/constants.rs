// Encoded path layout:
//
//   | token (20) | param (3) | token (20) | param (3) | ... | token (20) |
//
// Every offset used by the navigator is derived from ADDR_SIZE and PARAM_SIZE.

// ============================================================
// FIELD WIDTHS
// ============================================================

/// Width of a token address in bytes
pub const ADDR_SIZE: u32 = 20;

/// Width of a hop parameter (fee tier / tick spacing class) in bytes
pub const PARAM_SIZE: u32 = 3;

/// Largest value a hop parameter can carry (2^24 - 1)
pub const MAX_HOP_PARAMETER: u32 = (1 << (PARAM_SIZE * 8)) - 1;

// ============================================================
// NAVIGATION OFFSETS
// ============================================================

/// Offset of the second token, i.e. the stride of one token + param pair
pub const POOL_OFFSET: u32 = ADDR_SIZE + PARAM_SIZE;

/// Length of exactly one encoded hop (token, param, token)
pub const NEXT_OFFSET: u32 = POOL_OFFSET + ADDR_SIZE;

/// Shortest path holding two hops
pub const MULTIPLE_POOLS_MIN_LENGTH: u32 = NEXT_OFFSET + POOL_OFFSET;

// ============================================================
// ROUTE LIMITS
// ============================================================

/// Fewest tokens a route may have
pub const MIN_TOKENS: u32 = 2;
