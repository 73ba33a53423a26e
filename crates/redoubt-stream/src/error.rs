// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Stream cipher error types.

use redoubt_blockwise::BlockwiseError;

use crate::consts::{KEY_128_SIZE, KEY_256_SIZE, NONCE_BLOCK_SIZE};

/// Errors that can occur while constructing or driving a stream cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    #[error("invalid key size: got {len} bytes, expected {KEY_128_SIZE} or {KEY_256_SIZE}")]
    InvalidKeySize { len: usize },

    #[error("invalid counter length: got {len} bytes, expected 1..={NONCE_BLOCK_SIZE}")]
    InvalidCounterLength { len: usize },

    #[error("BlockwiseError: {0}")]
    Blockwise(#[from] BlockwiseError),
}
