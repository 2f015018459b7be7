#![allow(dead_code)]

use belugaswap_path::HopParameter;
use soroban_sdk::{BytesN, Env, Vec};

// Test constants
pub const TICK_SPACING_MEDIUM: u32 = 60;
pub const FEE_MEDIUM: u32 = 3000;

/// Addresses used by the reference path vector
pub const TOKEN_ADDRESSES: [[u8; 20]; 3] = [
    [0x5f, 0xc8, 0xd3, 0x26, 0x90, 0xcc, 0x91, 0xd4, 0xc3, 0x9d, 0x9d, 0x3a, 0xbc, 0xbd, 0x16, 0x98, 0x9f, 0x87, 0x57, 0x07],
    [0xcf, 0x7e, 0xd3, 0xac, 0xca, 0x5a, 0x46, 0x7e, 0x9e, 0x70, 0x4c, 0x70, 0x3e, 0x8d, 0x87, 0xf6, 0x34, 0xfb, 0x0f, 0xc9],
    [0xdc, 0x64, 0xa1, 0x40, 0xaa, 0x3e, 0x98, 0x11, 0x00, 0xa9, 0xbe, 0xca, 0x4e, 0x68, 0x5f, 0x96, 0x2f, 0x0c, 0xf6, 0xc9],
];

/// Distinct token filled with `seed`
pub fn token(env: &Env, seed: u8) -> BytesN<20> {
    BytesN::from_array(env, &[seed; 20])
}

/// `count` distinct tokens
pub fn tokens(env: &Env, count: u8) -> Vec<BytesN<20>> {
    let mut out = Vec::new(env);
    for i in 0..count {
        out.push_back(token(env, i + 1));
    }
    out
}

pub fn reference_tokens(env: &Env) -> Vec<BytesN<20>> {
    let mut out = Vec::new(env);
    for addr in TOKEN_ADDRESSES.iter() {
        out.push_back(BytesN::from_array(env, addr));
    }
    out
}

pub fn param(value: u32) -> HopParameter {
    HopParameter::new(value).unwrap()
}

pub fn params(env: &Env, values: &[u32]) -> Vec<HopParameter> {
    let mut out = Vec::new(env);
    for v in values {
        out.push_back(param(*v));
    }
    out
}
