// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Type aliases for stream cipher inputs and outputs.

use crate::consts::{BLOCK_SIZE, KEY_HALF_SIZE, NONCE_BLOCK_SIZE, NONCE_SIZE};

/// One keystream block
pub type Block = [u8; BLOCK_SIZE];

/// Half of the key schedule input
pub type KeyHalf = [u8; KEY_HALF_SIZE];

/// Caller nonce (standard mode)
pub type Nonce = [u8; NONCE_SIZE];

/// Full nonce/counter block
pub type NonceBlock = [u8; NONCE_BLOCK_SIZE];

/// Domain-separation constant
pub type Constant = [u8; 16];
