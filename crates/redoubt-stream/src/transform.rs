// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20 and Salsa20 block transforms.
//!
//! Both map (key0, key1, nonce block, constant) to a 64-byte keystream block
//! through 10 double rounds followed by a feed-forward addition of the input
//! state. They differ in state layout and quarter-round, so each has its own
//! entry point.

use zeroize::Zeroize;

use crate::consts::DOUBLE_ROUNDS;
use crate::types::{Block, Constant, KeyHalf, NonceBlock};

type State = [u32; 16];

#[inline(always)]
fn read_words(dst: &mut [u32], src: &[u8]) {
    for (word, chunk) in dst.iter_mut().zip(src.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

/// Adds `initial` into `working` and serializes the result little-endian.
#[inline(always)]
fn feed_forward(working: &mut State, initial: &State, out: &mut Block) {
    for ((word, init), chunk) in working
        .iter_mut()
        .zip(initial.iter())
        .zip(out.chunks_exact_mut(4))
    {
        *word = word.wrapping_add(*init);
        chunk.copy_from_slice(&word.to_le_bytes());
    }
}

#[inline(always)]
fn chacha_quarter_round(s: &mut State, a: usize, b: usize, c: usize, d: usize) {
    s[a] = s[a].wrapping_add(s[b]);
    s[d] ^= s[a];
    s[d] = s[d].rotate_left(16);

    s[c] = s[c].wrapping_add(s[d]);
    s[b] ^= s[c];
    s[b] = s[b].rotate_left(12);

    s[a] = s[a].wrapping_add(s[b]);
    s[d] ^= s[a];
    s[d] = s[d].rotate_left(8);

    s[c] = s[c].wrapping_add(s[d]);
    s[b] ^= s[c];
    s[b] = s[b].rotate_left(7);
}

#[inline(always)]
fn chacha_double_round(s: &mut State) {
    // Columns
    chacha_quarter_round(s, 0, 4, 8, 12);
    chacha_quarter_round(s, 1, 5, 9, 13);
    chacha_quarter_round(s, 2, 6, 10, 14);
    chacha_quarter_round(s, 3, 7, 11, 15);

    // Diagonals
    chacha_quarter_round(s, 0, 5, 10, 15);
    chacha_quarter_round(s, 1, 6, 11, 12);
    chacha_quarter_round(s, 2, 7, 8, 13);
    chacha_quarter_round(s, 3, 4, 9, 14);
}

/// ChaCha20 block function.
///
/// State words 0..4 hold the constant, 4..8 `key0`, 8..12 `key1` and
/// 12..16 the nonce block.
pub fn chacha20_core(
    key0: &KeyHalf,
    key1: &KeyHalf,
    nonce: &NonceBlock,
    constant: &Constant,
    out: &mut Block,
) {
    let mut initial: State = [0; 16];
    read_words(&mut initial[0..4], constant);
    read_words(&mut initial[4..8], key0);
    read_words(&mut initial[8..12], key1);
    read_words(&mut initial[12..16], nonce);

    let mut working = initial;
    for _ in 0..DOUBLE_ROUNDS {
        chacha_double_round(&mut working);
    }

    feed_forward(&mut working, &initial, out);

    working.zeroize();
    initial.zeroize();
}

#[cfg(feature = "salsa20")]
#[inline(always)]
fn salsa_quarter_round(s: &mut State, a: usize, b: usize, c: usize, d: usize) {
    s[b] ^= s[a].wrapping_add(s[d]).rotate_left(7);
    s[c] ^= s[b].wrapping_add(s[a]).rotate_left(9);
    s[d] ^= s[c].wrapping_add(s[b]).rotate_left(13);
    s[a] ^= s[d].wrapping_add(s[c]).rotate_left(18);
}

#[cfg(feature = "salsa20")]
#[inline(always)]
fn salsa_double_round(s: &mut State) {
    // Columns
    salsa_quarter_round(s, 0, 4, 8, 12);
    salsa_quarter_round(s, 5, 9, 13, 1);
    salsa_quarter_round(s, 10, 14, 2, 6);
    salsa_quarter_round(s, 15, 3, 7, 11);

    // Rows
    salsa_quarter_round(s, 0, 1, 2, 3);
    salsa_quarter_round(s, 5, 6, 7, 4);
    salsa_quarter_round(s, 10, 11, 8, 9);
    salsa_quarter_round(s, 15, 12, 13, 14);
}

/// Salsa20 block function.
///
/// The constant occupies the diagonal (words 0, 5, 10, 15), `key0` words
/// 1..5, the nonce block words 6..10 and `key1` words 11..15.
#[cfg(feature = "salsa20")]
pub fn salsa20_core(
    key0: &KeyHalf,
    key1: &KeyHalf,
    nonce: &NonceBlock,
    constant: &Constant,
    out: &mut Block,
) {
    let mut diagonal = [0u32; 4];
    read_words(&mut diagonal, constant);

    let mut initial: State = [0; 16];
    initial[0] = diagonal[0];
    read_words(&mut initial[1..5], key0);
    initial[5] = diagonal[1];
    read_words(&mut initial[6..10], nonce);
    initial[10] = diagonal[2];
    read_words(&mut initial[11..15], key1);
    initial[15] = diagonal[3];

    let mut working = initial;
    for _ in 0..DOUBLE_ROUNDS {
        salsa_double_round(&mut working);
    }

    feed_forward(&mut working, &initial, out);

    working.zeroize();
    initial.zeroize();
}
