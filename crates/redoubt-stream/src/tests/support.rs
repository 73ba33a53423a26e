// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Decodes a hex string of exactly `2 * N` digits.
pub(crate) fn hex<const N: usize>(hex: &str) -> [u8; N] {
    assert_eq!(hex.len(), 2 * N, "hex string has wrong length");

    let mut out = [0u8; N];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[2 * i..2 * i + 2], 16).expect("invalid hex digit");
    }
    out
}

/// 00 01 02 .. 1f
pub(crate) fn sequential_key() -> [u8; 32] {
    core::array::from_fn(|i| i as u8)
}
