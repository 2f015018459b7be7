//! Path codec errors

use soroban_sdk::{contracterror, symbol_short, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PathError {
    // Encoding (1-9)
    /// Fewer than two tokens, or hop parameter count != token count - 1
    InvalidPath = 1,
    /// Hop parameter does not fit in 3 bytes
    HopParameterOutOfRange = 2,

    // Decoding (10-19)
    /// Byte length is not 20*N + 3*(N-1) for any N >= 2
    MalformedPath = 10,

    // Navigation (20-29)
    /// Path is shorter than the offsets being read
    BufferUnderrun = 20,
}

impl PathError {
    /// Short symbol for lightweight error reporting
    pub fn to_symbol(&self) -> Symbol {
        match self {
            PathError::InvalidPath => symbol_short!("BAD_PATH"),
            PathError::HopParameterOutOfRange => symbol_short!("PARAM_HI"),
            PathError::MalformedPath => symbol_short!("MALFORM"),
            PathError::BufferUnderrun => symbol_short!("UNDERRUN"),
        }
    }
}
