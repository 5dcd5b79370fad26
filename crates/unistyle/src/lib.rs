//! Unicode text styling without markup.
//!
//! Two kinds of transform are provided, both working codepoint by codepoint:
//!
//! - **Diacritics**: [`strikethrough`], [`underline`] and [`overline`] append a
//!   combining mark after every character except newlines.
//! - **Letterforms**: [`bold_sans`], [`bold_serif`], [`italic_sans`],
//!   [`italic_serif`], [`bold_italic_sans`], [`bold_italic_serif`], [`cursive`]
//!   and [`fraktur`] swap ASCII letters (and digits where Unicode has them)
//!   for codepoints in the Mathematical Alphanumeric Symbols and Letterlike
//!   Symbols blocks.
//!
//! Every transform is total: characters without a styled equivalent pass
//! through unchanged, and none of them can fail.
//!
//! # Example
//!
//! ```rust
//! use unistyle::{bold_sans, cursive, strikethrough, StrikeStyle};
//!
//! assert_eq!(bold_sans("Bold"), "𝗕𝗼𝗹𝗱");
//! assert_eq!(cursive("Hi"), "ℋ𝒾");
//! assert_eq!(strikethrough("AB", StrikeStyle::SolidusLong), "A\u{0338}B\u{0338}");
//! ```
//!
//! # Building blocks
//!
//! The primitives behind the named transforms are public too:
//! [`combine`] appends any mark, and [`translate`] runs text through any
//! table of [`RangeMapping`]s. [`RangeTable`] holds a table assembled at
//! runtime.
//!
//! # Configuration and templates
//!
//! [`Style`] names any transform and has a textual form
//! (`"bold-sans"`, `"underline:double-line"`) used by `FromStr`, `Display`
//! and serde. [`register_filters`] exposes the transforms as minijinja
//! filters.

mod diacritic;
mod error;
mod filters;
mod letterform;
mod marks;
mod names;
mod range;
mod style;
mod tables;

pub use diacritic::{combine, overline, strikethrough, underline};
pub use error::StyleError;
pub use filters::register_filters;
pub use letterform::{
    bold_italic_sans, bold_italic_serif, bold_sans, bold_serif, cursive, fraktur, italic_sans,
    italic_serif, Letterform,
};
pub use marks::{OverlineStyle, StrikeStyle, UnderlineStyle};
pub use range::{translate, RangeMapping, RangeTable};
pub use style::{apply_all, Style};
