// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::hash::Hash;

use log::trace;
use range_attributes::{
    AttributeKey, AttributeMap, AttributeValue, RangeAttributeStore, StyledText, TextRange,
};

/// A settable text property that resolves typing defaults and range attributes into
/// [`StyledText`].
///
/// The host exclusively owns its [`RangeAttributeStore`]; the formatting methods on the host
/// delegate to it.
#[derive(Clone, Debug)]
pub struct StyledTextHost<K = AttributeKey, V = AttributeValue> {
    store: RangeAttributeStore<K, V>,
    typing_defaults: AttributeMap<K, V>,
    styled: StyledText<K, V>,
    /// The text as last written, independent of `styled`.
    text: String,
}

impl<K, V> StyledTextHost<K, V> {
    /// Create a host with empty text, no typing defaults and no range attributes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: RangeAttributeStore::new(),
            typing_defaults: AttributeMap::new(),
            styled: StyledText::new(String::new()),
            text: String::new(),
        }
    }

    /// Returns the current text.
    ///
    /// Without typing defaults this is the text of the [styled value](Self::styled_text). With
    /// typing defaults it is the raw text passed to the last [`set_text`](Self::set_text) or
    /// [`set_styled_text`](Self::set_styled_text).
    pub fn text(&self) -> &str {
        if self.typing_defaults.is_empty() {
            self.styled.as_str()
        } else {
            &self.text
        }
    }

    /// Returns the current styled value.
    pub fn styled_text(&self) -> &StyledText<K, V> {
        &self.styled
    }

    /// Replace the styled value directly, bypassing typing defaults and range attributes.
    pub fn set_styled_text(&mut self, styled: StyledText<K, V>) {
        self.text.clear();
        self.text.push_str(styled.as_str());
        self.styled = styled;
    }

    /// Returns the attributes applied to the whole text by [`set_text`](Self::set_text).
    pub fn typing_defaults(&self) -> &AttributeMap<K, V> {
        &self.typing_defaults
    }

    /// Set the attributes applied to the whole text by [`set_text`](Self::set_text).
    ///
    /// The current styled value is left as it is.
    pub fn set_typing_defaults(&mut self, attributes: AttributeMap<K, V>) {
        self.typing_defaults = attributes;
    }

    /// Returns the range attributes that will be applied by [`set_text`](Self::set_text).
    pub fn attribute_store(&self) -> &RangeAttributeStore<K, V> {
        &self.store
    }

    /// Remove every range attribute.
    ///
    /// See [`RangeAttributeStore::remove_all_attributes`].
    pub fn remove_all_attributes(&mut self) {
        self.store.remove_all_attributes();
    }
}

impl<K: Eq + Hash, V> StyledTextHost<K, V> {
    /// Set each of `attributes` on `range`.
    ///
    /// See [`RangeAttributeStore::add_attributes`].
    pub fn add_attributes(
        &mut self,
        attributes: impl IntoIterator<Item = (K, V)>,
        range: TextRange,
    ) {
        self.store.add_attributes(attributes, range);
    }

    /// Remove `key` from exactly `range`.
    ///
    /// See [`RangeAttributeStore::remove_attribute`].
    pub fn remove_attribute(&mut self, key: &K, range: TextRange) {
        self.store.remove_attribute(key, range);
    }
}

impl<K: Eq + Hash + Clone, V: Clone + PartialEq> StyledTextHost<K, V> {
    /// Replace the text.
    ///
    /// With typing defaults, the styled value is rebuilt from `text`, the defaults and the range
    /// attributes. Without them, the styled value becomes `text` with no attributes at all.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.typing_defaults.is_empty() {
            trace!("no typing defaults, storing {} bytes as plain text", text.len());
            self.styled = StyledText::new(text.clone());
        } else {
            self.styled = self.store.build(&text, Some(&self.typing_defaults));
        }
        self.text = text;
    }
}

impl<K, V> Default for StyledTextHost<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::StyledTextHost;
    use range_attributes::{AttributeMap, StyledText, TextRange};

    type Host = StyledTextHost<&'static str, i32>;

    fn defaults() -> AttributeMap<&'static str, i32> {
        [("size", 12)].into_iter().collect()
    }

    #[test]
    fn starts_empty() {
        let host = Host::new();
        assert_eq!(host.text(), "");
        assert!(host.styled_text().is_empty());
        assert!(host.typing_defaults().is_empty());
        assert!(host.attribute_store().is_empty());
    }

    #[test]
    fn formatting_delegates_to_the_store() {
        let mut host = Host::new();
        let range = TextRange::new(0, 3);
        host.add_attributes([("bold", 1), ("italic", 1)], range);
        host.remove_attribute(&"italic", range);
        let stored = host.attribute_store().get(range).unwrap();
        assert_eq!(stored.get(&"bold"), Some(&1));
        assert_eq!(stored.get(&"italic"), None);

        host.remove_all_attributes();
        assert!(host.attribute_store().is_empty());
    }

    #[test]
    fn typing_defaults_do_not_restyle_existing_text() {
        let mut host = Host::new();
        host.set_text("abc");
        host.set_typing_defaults(defaults());
        assert_eq!(host.typing_defaults(), &defaults());
        assert!(host.styled_text().attributes_at(0).unwrap().is_empty());

        host.set_text("abc");
        assert_eq!(host.styled_text().attribute(0, &"size"), Some(&12));
    }

    #[test]
    fn set_styled_text_replaces_both_views() {
        let mut host = Host::new();
        host.set_typing_defaults(defaults());
        host.set_text("old");

        host.set_styled_text(StyledText::with_attributes("new", &defaults()));
        assert_eq!(host.text(), "new");
        assert_eq!(host.styled_text().as_str(), "new");
    }
}
