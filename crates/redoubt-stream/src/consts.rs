// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Sizes and domain-separation constants shared by ChaCha20 and Salsa20.

use crate::types::Constant;

/// Keystream block size in bytes
pub const BLOCK_SIZE: usize = 64;

/// Size of each key half in bytes
pub const KEY_HALF_SIZE: usize = 16;

/// 128-bit key size in bytes
pub const KEY_128_SIZE: usize = 16;

/// 256-bit key size in bytes
pub const KEY_256_SIZE: usize = 32;

/// Caller nonce size in standard mode
pub const NONCE_SIZE: usize = 8;

/// Internal nonce/counter block size
pub const NONCE_BLOCK_SIZE: usize = 16;

/// Counter length used by standard mode
pub const STANDARD_COUNTER_LEN: usize = 8;

/// 20 rounds = 10 double rounds
pub const DOUBLE_ROUNDS: usize = 10;

/// Constant for 128-bit keys
pub static TAU: Constant = *b"expand 16-byte k";

/// Constant for 256-bit keys
pub static SIGMA: Constant = *b"expand 32-byte k";
