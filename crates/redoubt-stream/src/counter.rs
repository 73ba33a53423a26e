// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Increments `counter` as a little-endian integer, least significant byte
/// first.
///
/// The carry stops at the first byte that does not wrap. A region of all
/// `0xFF` wraps to all zeros.
///
/// ```
/// use redoubt_stream::increment_le;
///
/// let mut counter = [0xFF, 0x01, 0x00];
/// increment_le(&mut counter);
/// assert_eq!(counter, [0x00, 0x02, 0x00]);
/// ```
#[inline]
pub fn increment_le(counter: &mut [u8]) {
    for byte in counter.iter_mut() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            return;
        }
    }
}
