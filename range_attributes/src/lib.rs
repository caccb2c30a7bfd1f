// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range Attributes stores attribute maps against ranges of a text and resolves them into
//! [`StyledText`] on demand.
//!
//! - [`TextRange`] is a `(location, length)` pair counted in `char`s.
//! - [`AttributeMap`] maps opaque keys to opaque values. [`AttributeKey`] and [`AttributeValue`]
//!   are provided as a default vocabulary, but any hashable key and comparable value will do.
//! - [`RangeAttributeStore`] holds at most one map per distinct range and builds styled text from
//!   a plain string plus a set of defaults.
//! - [`StyledText`] is the resolved output: the text plus contiguous runs, each with the attribute
//!   map that applies to it.
//!
//! ## Overlaps
//!
//! Ranges are keyed by exact value. Two entries with different ranges are independent even when
//! they overlap. When building, entries are applied in the order their range was first added
//! (last writer wins, key by key), on top of the defaults.
//!
//! ## Stale ranges
//!
//! Ranges are never validated against a text when they are stored. When building, a range that
//! starts past the end of the text is skipped and a range that runs past the end is clipped.
//!
//! ## Example
//!
//! ```
//! use range_attributes::{
//!     AttributeKey, AttributeMap, AttributeValue, RangeAttributeStore, TextRange,
//! };
//!
//! let mut store: RangeAttributeStore = RangeAttributeStore::new();
//! store.add_attributes(
//!     [(AttributeKey::UNDERLINE, AttributeValue::Bool(true))],
//!     TextRange::new(0, 5),
//! );
//!
//! let defaults: AttributeMap = [(AttributeKey::FONT, AttributeValue::from("Inter"))]
//!     .into_iter()
//!     .collect();
//! let styled = store.build("Hello world", Some(&defaults));
//!
//! assert_eq!(styled.runs().len(), 2);
//! assert_eq!(styled.runs()[0].range(), 0..5);
//! assert_eq!(
//!     styled.attribute(2, &AttributeKey::UNDERLINE),
//!     Some(&AttributeValue::Bool(true))
//! );
//! assert_eq!(styled.attribute(7, &AttributeKey::UNDERLINE), None);
//! assert_eq!(
//!     styled.attribute(7, &AttributeKey::FONT),
//!     Some(&AttributeValue::from("Inter"))
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
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

mod attribute_map;
mod error;
mod store;
mod styled_text;
mod text_range;
mod value;


pub use crate::attribute_map::AttributeMap;
pub use crate::error::{Error, ErrorKind};
pub use crate::store::{Overlays, RangeAttributeStore};
pub use crate::styled_text::{StyledRun, StyledText};
pub use crate::text_range::TextRange;
pub use crate::value::{AttributeKey, AttributeValue, Rgba8};
