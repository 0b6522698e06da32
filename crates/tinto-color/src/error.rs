// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors produced while reading or converting colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not a 6-digit hex color (`#rrggbb` or `rrggbb`).
    #[error("invalid hex color {0:?}: expected 6 hex digits with optional leading '#'")]
    InvalidHex(String),

    /// A color component was NaN or infinite.
    #[error("non-finite OKLCH component in {0}")]
    NonFinite(String),
}
