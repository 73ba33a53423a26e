// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for redoubt-blockwise.

/// Errors that can occur while applying buffered keystream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BlockwiseError {
    #[error("length mismatch: input is {input} bytes, output is {output} bytes")]
    LengthMismatch { input: usize, output: usize },
}
