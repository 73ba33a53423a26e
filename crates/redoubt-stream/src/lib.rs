// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20 and Salsa20 stream ciphers.
//!
//! Both ciphers accept 128-bit or 256-bit keys and produce keystream in
//! 64-byte blocks from a 16-byte nonce block whose leading (ChaCha20) or
//! trailing (Salsa20) bytes form a little-endian block counter.
//!
//! # Example
//!
//! ```
//! use redoubt_stream::ChaCha20;
//!
//! let key = [0x42u8; 32];
//! let nonce = [0x24u8; 8];
//!
//! let mut data = *b"attack at dawn";
//! ChaCha20::new(&key, &nonce)?.apply_keystream(&mut data);
//! assert_ne!(&data, b"attack at dawn");
//!
//! ChaCha20::new(&key, &nonce)?.apply_keystream(&mut data);
//! assert_eq!(&data, b"attack at dawn");
//! # Ok::<(), redoubt_stream::StreamError>(())
//! ```
//!
//! All key material, counter state and buffered keystream is zeroized on drop.

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
mod tests;

mod chacha20;
mod counter;
mod error;
mod key;
#[cfg(feature = "salsa20")]
mod salsa20;
mod transform;

pub mod consts;
pub mod types;

pub use chacha20::{ChaCha20, ChaCha20Core};
pub use counter::increment_le;
pub use error::StreamError;
pub use key::KeyMaterial;
#[cfg(feature = "salsa20")]
pub use salsa20::{Salsa20, Salsa20Core};
#[cfg(feature = "salsa20")]
pub use transform::salsa20_core;
pub use transform::chacha20_core;

pub use redoubt_blockwise::{BlockBuffer, BlockwiseError, KeystreamSource};
