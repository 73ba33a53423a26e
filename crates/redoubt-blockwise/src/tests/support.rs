// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::KeystreamSource;

/// Emits blocks whose every byte is the block index, starting at 1.
#[derive(Default)]
pub(crate) struct IndexSource {
    pub calls: usize,
}

impl<const N: usize> KeystreamSource<N> for IndexSource {
    fn next_block(&mut self, out: &mut [u8; N]) {
        self.calls += 1;
        out.fill(self.calls as u8);
    }
}

/// Emits a running byte counter, so keystream position `i` is `i as u8`.
#[derive(Default)]
pub(crate) struct SequentialSource {
    next: u8,
}

impl<const N: usize> KeystreamSource<N> for SequentialSource {
    fn next_block(&mut self, out: &mut [u8; N]) {
        for byte in out.iter_mut() {
            *byte = self.next;
            self.next = self.next.wrapping_add(1);
        }
    }
}
