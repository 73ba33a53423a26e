// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Salsa20 stream cipher.
//!
//! The caller's 8-byte nonce occupies bytes 0..8 of the nonce block and the
//! little-endian block counter bytes 8..16.

use redoubt_blockwise::{BlockBuffer, KeystreamSource};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_SIZE, NONCE_BLOCK_SIZE, NONCE_SIZE};
use crate::counter::increment_le;
use crate::error::StreamError;
use crate::key::KeyMaterial;
use crate::transform::salsa20_core;
use crate::types::{Block, Nonce, NonceBlock};

/// Salsa20 session state without keystream buffering.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Salsa20Core {
    key: KeyMaterial,
    nonce: NonceBlock,
}

impl Salsa20Core {
    pub fn new(key: &[u8], nonce: &Nonce) -> Result<Self, StreamError> {
        let key = KeyMaterial::from_slice(key)?;

        let mut block = [0u8; NONCE_BLOCK_SIZE];
        block[..NONCE_SIZE].copy_from_slice(nonce);

        Ok(Self { key, nonce: block })
    }

    pub fn next_block(&mut self, out: &mut Block) {
        salsa20_core(
            self.key.key0(),
            self.key.key1(),
            &self.nonce,
            self.key.constant(),
            out,
        );
        increment_le(&mut self.nonce[NONCE_SIZE..]);
    }

    #[inline]
    pub fn nonce_block(&self) -> &NonceBlock {
        &self.nonce
    }
}

impl KeystreamSource<BLOCK_SIZE> for Salsa20Core {
    #[inline(always)]
    fn next_block(&mut self, out: &mut Block) {
        Salsa20Core::next_block(self, out);
    }
}

impl core::fmt::Debug for Salsa20Core {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Salsa20Core {{ [protected] }}")
    }
}

/// Salsa20 stream cipher with keystream carried across calls.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Salsa20 {
    core: Salsa20Core,
    buffer: BlockBuffer<BLOCK_SIZE>,
}

impl Salsa20 {
    pub fn new(key: &[u8], nonce: &Nonce) -> Result<Self, StreamError> {
        Ok(Self {
            core: Salsa20Core::new(key, nonce)?,
            buffer: BlockBuffer::new(),
        })
    }

    /// Produces one raw keystream block and advances the counter.
    pub fn next_block(&mut self, out: &mut Block) {
        self.core.next_block(out);
    }

    /// Writes `input ^ keystream` into `output`.
    pub fn cipher(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), StreamError> {
        self.buffer.xor(&mut self.core, input, output)?;
        Ok(())
    }

    /// XORs keystream into `data` in place.
    pub fn apply_keystream(&mut self, data: &mut [u8]) {
        self.buffer.apply(&mut self.core, data);
    }

    #[inline]
    pub fn buffered(&self) -> usize {
        self.buffer.remaining()
    }

    #[inline]
    pub fn core(&self) -> &Salsa20Core {
        &self.core
    }
}

impl core::fmt::Debug for Salsa20 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Salsa20 {{ [protected] }}")
    }
}
