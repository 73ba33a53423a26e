// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Blockwise keystream buffering.
//!
//! Stream ciphers produce keystream in fixed-size blocks, while callers hand
//! over messages of arbitrary length, possibly split across several calls.
//! [`BlockBuffer`] bridges the two: it keeps the unconsumed tail of the most
//! recent block and asks a [`KeystreamSource`] for a fresh block only once
//! that tail is exhausted.
//!
//! ```
//! use redoubt_blockwise::{BlockBuffer, KeystreamSource};
//!
//! struct Counter(u8);
//!
//! impl KeystreamSource<4> for Counter {
//!     fn next_block(&mut self, out: &mut [u8; 4]) {
//!         out.fill(self.0);
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut source = Counter(1);
//! let mut buffer = BlockBuffer::<4>::new();
//! let mut output = [0u8; 6];
//!
//! buffer.xor(&mut source, &[0u8; 6], &mut output).unwrap();
//! assert_eq!(output, [1, 1, 1, 1, 2, 2]);
//! assert_eq!(buffer.remaining(), 2);
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
mod tests;

mod blockwise;
mod error;
mod traits;

pub use blockwise::BlockBuffer;
pub use error::BlockwiseError;
pub use traits::KeystreamSource;
