// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Key halves and constant selection.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{KEY_128_SIZE, KEY_256_SIZE, KEY_HALF_SIZE, SIGMA, TAU};
use crate::error::StreamError;
use crate::types::{Constant, KeyHalf};

/// Key schedule input for the block transforms.
///
/// A 128-bit key is used for both halves with the [`TAU`] constant; a 256-bit
/// key is split into two independent halves with the [`SIGMA`] constant.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    key0: KeyHalf,
    key1: KeyHalf,
    #[zeroize(skip)]
    constant: &'static Constant,
}

impl KeyMaterial {
    /// Splits `key` into halves and selects the matching constant.
    ///
    /// Fails with [`StreamError::InvalidKeySize`] unless `key` is exactly 16
    /// or 32 bytes long.
    pub fn from_slice(key: &[u8]) -> Result<Self, StreamError> {
        let mut material = Self {
            key0: [0; KEY_HALF_SIZE],
            key1: [0; KEY_HALF_SIZE],
            constant: &TAU,
        };

        match key.len() {
            KEY_128_SIZE => {
                material.key0.copy_from_slice(key);
                material.key1.copy_from_slice(key);
            }
            KEY_256_SIZE => {
                material.key0.copy_from_slice(&key[..KEY_HALF_SIZE]);
                material.key1.copy_from_slice(&key[KEY_HALF_SIZE..]);
                material.constant = &SIGMA;
            }
            len => return Err(StreamError::InvalidKeySize { len }),
        }

        Ok(material)
    }

    #[inline(always)]
    pub fn key0(&self) -> &KeyHalf {
        &self.key0
    }

    #[inline(always)]
    pub fn key1(&self) -> &KeyHalf {
        &self.key1
    }

    #[inline(always)]
    pub fn constant(&self) -> &'static Constant {
        self.constant
    }
}

impl core::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "KeyMaterial {{ [protected] }}")
    }
}
