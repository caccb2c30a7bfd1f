// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default attribute vocabulary.
//!
//! The store and styled text are generic over their key and value types. These types are the
//! defaults: string-named keys and a small closed set of payloads. Their meaning is up to
//! whoever renders the [`StyledText`](crate::StyledText).

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

/// An opaque attribute name.
///
/// Any string is a valid key. A few common names are provided as constants so that hosts and
/// renderers agree on spelling.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeKey(Cow<'static, str>);

impl AttributeKey {
    /// The font to draw the text with.
    pub const FONT: Self = Self::from_static("font");
    /// The colour of the glyphs.
    pub const FOREGROUND_COLOR: Self = Self::from_static("foreground_color");
    /// The colour behind the glyphs.
    pub const BACKGROUND_COLOR: Self = Self::from_static("background_color");
    /// Underline decoration.
    pub const UNDERLINE: Self = Self::from_static("underline");
    /// Strikethrough decoration.
    pub const STRIKETHROUGH: Self = Self::from_static("strikethrough");
    /// Extra spacing between characters.
    pub const KERN: Self = Self::from_static("kern");
    /// A link target.
    pub const LINK: Self = Self::from_static("link");

    /// Creates a key from a static name without allocating.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// The name of this key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&'static str> for AttributeKey {
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

impl From<String> for AttributeKey {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

/// An 8-bit per channel, non-premultiplied RGBA colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8 {
    /// Creates an opaque colour.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// An opaque attribute payload.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// A flag, such as underline on/off.
    Bool(bool),
    /// An integer, such as a font weight.
    Int(i64),
    /// A number, such as a font size or kerning amount.
    Float(f64),
    /// A string, such as a font name or link target.
    Text(Arc<str>),
    /// A colour.
    Color(Rgba8),
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(Arc::from(value))
    }
}

impl From<Arc<str>> for AttributeValue {
    fn from(value: Arc<str>) -> Self {
        Self::Text(value)
    }
}

impl From<Rgba8> for AttributeValue {
    fn from(value: Rgba8) -> Self {
        Self::Color(value)
    }
}
