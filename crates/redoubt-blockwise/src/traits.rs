// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Producer of fixed-size keystream blocks.
///
/// Implemented by cipher cores. Each call must advance the session state so
/// that the next call yields the following block of the keystream.
pub trait KeystreamSource<const N: usize> {
    /// Writes the next `N`-byte block into `out`.
    fn next_block(&mut self, out: &mut [u8; N]);
}

impl<S, const N: usize> KeystreamSource<N> for &mut S
where
    S: KeystreamSource<N> + ?Sized,
{
    #[inline(always)]
    fn next_block(&mut self, out: &mut [u8; N]) {
        (**self).next_block(out);
    }
}
