// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20 stream cipher.
//!
//! The 16-byte nonce block feeds state words 12..16. In standard mode the
//! first 8 bytes are the block counter and the caller's 8-byte nonce fills the
//! last 8, matching the original ChaCha20 layout. Custom mode takes the whole
//! block from the caller together with the number of leading bytes that act
//! as counter (RFC 8439 uses 4).

use redoubt_blockwise::{BlockBuffer, KeystreamSource};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_SIZE, NONCE_BLOCK_SIZE, NONCE_SIZE, STANDARD_COUNTER_LEN};
use crate::counter::increment_le;
use crate::error::StreamError;
use crate::key::KeyMaterial;
use crate::transform::chacha20_core;
use crate::types::{Block, Nonce, NonceBlock};

/// ChaCha20 session state without keystream buffering.
///
/// Each [`next_block`](Self::next_block) call emits one 64-byte block and
/// advances the counter.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20Core {
    key: KeyMaterial,
    nonce: NonceBlock,
    counter_len: usize,
}

impl ChaCha20Core {
    /// Standard mode: zero counter in bytes 0..8, `nonce` in bytes 8..16.
    pub fn new(key: &[u8], nonce: &Nonce) -> Result<Self, StreamError> {
        let key = KeyMaterial::from_slice(key)?;

        let mut block = [0u8; NONCE_BLOCK_SIZE];
        block[NONCE_BLOCK_SIZE - NONCE_SIZE..].copy_from_slice(nonce);

        Ok(Self {
            key,
            nonce: block,
            counter_len: STANDARD_COUNTER_LEN,
        })
    }

    /// Custom mode: the first `counter_len` bytes of `nonce` are the counter.
    ///
    /// `counter_len` must be in `1..=16`.
    pub fn with_counter(
        key: &[u8],
        nonce: &NonceBlock,
        counter_len: usize,
    ) -> Result<Self, StreamError> {
        if counter_len == 0 || counter_len > NONCE_BLOCK_SIZE {
            return Err(StreamError::InvalidCounterLength { len: counter_len });
        }

        let key = KeyMaterial::from_slice(key)?;

        Ok(Self {
            key,
            nonce: *nonce,
            counter_len,
        })
    }

    /// Writes the keystream block for the current counter into `out`, then
    /// increments the counter.
    pub fn next_block(&mut self, out: &mut Block) {
        chacha20_core(
            self.key.key0(),
            self.key.key1(),
            &self.nonce,
            self.key.constant(),
            out,
        );
        increment_le(&mut self.nonce[..self.counter_len]);
    }

    /// Current nonce block, counter included.
    #[inline]
    pub fn nonce_block(&self) -> &NonceBlock {
        &self.nonce
    }

    #[inline]
    pub fn counter_len(&self) -> usize {
        self.counter_len
    }
}

impl KeystreamSource<BLOCK_SIZE> for ChaCha20Core {
    #[inline(always)]
    fn next_block(&mut self, out: &mut Block) {
        ChaCha20Core::next_block(self, out);
    }
}

impl core::fmt::Debug for ChaCha20Core {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ChaCha20Core {{ [protected] }}")
    }
}

/// ChaCha20 stream cipher.
///
/// Keystream is consumed byte by byte across calls: a message may be split
/// at any offset and processed in several [`cipher`](Self::cipher) or
/// [`apply_keystream`](Self::apply_keystream) calls. Encryption and
/// decryption are the same operation.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20 {
    core: ChaCha20Core,
    buffer: BlockBuffer<BLOCK_SIZE>,
}

impl ChaCha20 {
    /// Standard mode. See [`ChaCha20Core::new`].
    pub fn new(key: &[u8], nonce: &Nonce) -> Result<Self, StreamError> {
        Ok(Self::from_core(ChaCha20Core::new(key, nonce)?))
    }

    /// Custom counter mode. See [`ChaCha20Core::with_counter`].
    pub fn with_counter(
        key: &[u8],
        nonce: &NonceBlock,
        counter_len: usize,
    ) -> Result<Self, StreamError> {
        Ok(Self::from_core(ChaCha20Core::with_counter(
            key,
            nonce,
            counter_len,
        )?))
    }

    fn from_core(core: ChaCha20Core) -> Self {
        Self {
            core,
            buffer: BlockBuffer::new(),
        }
    }

    /// Produces one raw keystream block and advances the counter.
    ///
    /// Leftover bytes buffered by earlier `cipher` calls are left untouched
    /// and will still be used by the next `cipher` call.
    pub fn next_block(&mut self, out: &mut Block) {
        self.core.next_block(out);
    }

    /// Writes `input ^ keystream` into `output`.
    ///
    /// Fails with [`StreamError::Blockwise`] when the lengths differ; no
    /// keystream is consumed in that case.
    pub fn cipher(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), StreamError> {
        self.buffer.xor(&mut self.core, input, output)?;
        Ok(())
    }

    /// XORs keystream into `data` in place.
    pub fn apply_keystream(&mut self, data: &mut [u8]) {
        self.buffer.apply(&mut self.core, data);
    }

    /// Keystream bytes left over from the last block.
    #[inline]
    pub fn buffered(&self) -> usize {
        self.buffer.remaining()
    }

    #[inline]
    pub fn core(&self) -> &ChaCha20Core {
        &self.core
    }
}

impl core::fmt::Debug for ChaCha20 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ChaCha20 {{ [protected] }}")
    }
}
