// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A text property backed by [`range_attributes`].
//!
//! [`StyledTextHost`] is the piece an editing widget holds on to. The widget writes plain text
//! into it and reads styled text back out; in between, the host applies its typing defaults to
//! the whole text and lets its [`RangeAttributeStore`] overlay any range formatting.
//!
//! ## Typing defaults and the fast path
//!
//! When the typing defaults are empty, [`StyledTextHost::set_text`] stores the text as-is and does
//! not consult the attribute store at all, so range formatting only shows up once some typing
//! defaults are set. [`StyledTextHost::text`] reads the styled value in that case, and the raw
//! text written by the last `set_text` otherwise.
//!
//! Formatting changes do not restyle the current value; they are picked up by the next
//! `set_text`.
//!
//! ## Example
//!
//! ```
//! use range_attributes::{AttributeKey, AttributeValue, TextRange};
//! use styled_text_host::StyledTextHost;
//!
//! let mut host: StyledTextHost = StyledTextHost::new();
//! host.set_typing_defaults(
//!     [(AttributeKey::FONT, AttributeValue::from("Inter"))]
//!         .into_iter()
//!         .collect(),
//! );
//! host.add_attributes(
//!     [(AttributeKey::UNDERLINE, AttributeValue::Bool(true))],
//!     TextRange::new(0, 5),
//! );
//! host.set_text("Hello world");
//!
//! let styled = host.styled_text();
//! assert_eq!(styled.runs().len(), 2);
//! assert_eq!(
//!     styled.attribute(0, &AttributeKey::UNDERLINE),
//!     Some(&AttributeValue::Bool(true))
//! );
//! assert_eq!(host.text(), "Hello world");
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! [`RangeAttributeStore`]: range_attributes::RangeAttributeStore
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod host;


pub use host::StyledTextHost;
