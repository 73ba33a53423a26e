// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::BlockwiseError;
use crate::traits::KeystreamSource;

/// Leftover keystream from the most recently produced block.
///
/// The valid bytes are always the last `remaining` bytes of `block`. Once a
/// block is fully consumed it is zeroized.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct BlockBuffer<const N: usize> {
    block: [u8; N],
    remaining: usize,
}

impl<const N: usize> Default for BlockBuffer<N> {
    fn default() -> Self {
        Self {
            block: [0; N],
            remaining: 0,
        }
    }
}

impl<const N: usize> BlockBuffer<N> {
    /// Creates an empty buffer. The first byte of keystream requested will
    /// trigger a block from the source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keystream bytes still available before a new block is needed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Discards any leftover keystream.
    pub fn reset(&mut self) {
        self.block.zeroize();
        self.remaining = 0;
    }

    /// Writes `input ^ keystream` into `output`.
    ///
    /// Keystream continues from where the previous call stopped. Fails without
    /// consuming keystream when `input` and `output` differ in length.
    pub fn xor<S>(
        &mut self,
        source: &mut S,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<(), BlockwiseError>
    where
        S: KeystreamSource<N> + ?Sized,
    {
        if input.len() != output.len() {
            return Err(BlockwiseError::LengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }

        let mut pos = 0;
        while pos < input.len() {
            let taken = self.take(source, input.len() - pos);
            let keystream = &self.block[N - self.remaining - taken..N - self.remaining];

            for ((out, inp), ks) in output[pos..pos + taken]
                .iter_mut()
                .zip(&input[pos..pos + taken])
                .zip(keystream)
            {
                *out = inp ^ ks;
            }

            pos += taken;
            self.wipe_if_exhausted();
        }

        Ok(())
    }

    /// XORs keystream into `data` in place.
    pub fn apply<S>(&mut self, source: &mut S, data: &mut [u8])
    where
        S: KeystreamSource<N> + ?Sized,
    {
        let mut pos = 0;
        while pos < data.len() {
            let taken = self.take(source, data.len() - pos);
            let keystream = &self.block[N - self.remaining - taken..N - self.remaining];

            for (byte, ks) in data[pos..pos + taken].iter_mut().zip(keystream) {
                *byte ^= ks;
            }

            pos += taken;
            self.wipe_if_exhausted();
        }
    }

    /// Reserves up to `wanted` bytes of keystream, refilling from `source`
    /// when empty. Returns how many bytes were reserved; they end right
    /// before the new `remaining` tail.
    #[inline(always)]
    fn take<S>(&mut self, source: &mut S, wanted: usize) -> usize
    where
        S: KeystreamSource<N> + ?Sized,
    {
        if self.remaining == 0 {
            source.next_block(&mut self.block);
            self.remaining = N;
        }

        let taken = wanted.min(self.remaining);
        self.remaining -= taken;
        taken
    }

    #[cfg(test)]
    pub(crate) fn block(&self) -> &[u8; N] {
        &self.block
    }

    #[inline(always)]
    fn wipe_if_exhausted(&mut self) {
        if self.remaining == 0 {
            self.block.zeroize();
        }
    }
}

impl<const N: usize> core::fmt::Debug for BlockBuffer<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "BlockBuffer {{ [protected], remaining: {} }}", self.remaining)
    }
}
