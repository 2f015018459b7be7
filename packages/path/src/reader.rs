// Bounds-checked reads at fixed offsets of an encoded path

use soroban_sdk::{Bytes, BytesN, Env};

use crate::constants::{ADDR_SIZE, PARAM_SIZE};
use crate::error::PathError;
use crate::types::HopParameter;

/// Fails with BufferUnderrun unless `path` holds at least `min_len` bytes
#[inline]
pub(crate) fn ensure_len(path: &Bytes, min_len: u32) -> Result<(), PathError> {
    if path.len() < min_len {
        return Err(PathError::BufferUnderrun);
    }
    Ok(())
}

fn window(path: &Bytes, offset: u32, size: u32) -> Result<Bytes, PathError> {
    let end = offset.checked_add(size).ok_or(PathError::BufferUnderrun)?;
    ensure_len(path, end)?;
    Ok(path.slice(offset..end))
}

pub(crate) fn read_token(env: &Env, path: &Bytes, offset: u32) -> Result<BytesN<20>, PathError> {
    let mut buf = [0u8; ADDR_SIZE as usize];
    window(path, offset, ADDR_SIZE)?.copy_into_slice(&mut buf);
    Ok(BytesN::from_array(env, &buf))
}

pub(crate) fn read_hop_param(path: &Bytes, offset: u32) -> Result<HopParameter, PathError> {
    let mut buf = [0u8; PARAM_SIZE as usize];
    window(path, offset, PARAM_SIZE)?.copy_into_slice(&mut buf);
    Ok(HopParameter::from_be_bytes(buf))
}
