// SPDX-License-Identifier: MIT

use thiserror::Error;
use tinto_color::ColorError;

/// Errors raised inside the theme pipeline.
///
/// None of these escape [`build_theme_tokens`](crate::build_theme_tokens):
/// the assembler converts them into the fallback theme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("unknown harmony strategy {0:?} (expected complementary, triadic or analogous)")]
    UnknownStrategy(String),

    #[error("token {name} resolved to invalid color {value:?}")]
    InvalidToken { name: String, value: String },
}
