// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::hash::Hash;
use core::iter::FusedIterator;

use hashbrown::HashMap;
use log::{debug, trace};

use crate::{AttributeKey, AttributeMap, AttributeValue, StyledText, TextRange};

/// Attribute maps keyed by exact [`TextRange`].
///
/// The store holds at most one [`AttributeMap`] per distinct range. Adding attributes to a range
/// that already has an entry merges them into that entry; ranges that merely overlap get their
/// own entries.
///
/// Ranges are not checked against any text when they are added. They are
/// [clipped](TextRange::clip) when [building](Self::build), so a range recorded before the text
/// shrank degrades gracefully instead of failing.
///
/// Entries are kept in the order their range was first added, which is also the order in which
/// they are applied when building.
#[derive(Clone, Debug)]
pub struct RangeAttributeStore<K = AttributeKey, V = AttributeValue> {
    entries: Vec<(TextRange, AttributeMap<K, V>)>,
    /// Position of each range in `entries`.
    index: HashMap<TextRange, usize>,
}

impl<K, V> RangeAttributeStore<K, V> {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the number of ranges with an entry.
    ///
    /// This counts entries whose attribute map has since become empty.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no range has an entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the attributes stored for exactly `range`.
    pub fn get(&self, range: TextRange) -> Option<&AttributeMap<K, V>> {
        self.index.get(&range).map(|&ix| &self.entries[ix].1)
    }

    /// Iterate over the entries in application order.
    pub fn iter(&self) -> Overlays<'_, K, V> {
        Overlays {
            inner: self.entries.iter(),
        }
    }

    /// Remove every entry, retaining allocated storage.
    pub fn remove_all_attributes(&mut self) {
        debug!("removing {} attribute ranges", self.entries.len());
        self.entries.clear();
        self.index.clear();
    }
}

impl<K: Eq + Hash, V> RangeAttributeStore<K, V> {
    /// Set each of `attributes` on `range`.
    ///
    /// Values for keys already set on exactly this range are replaced; other keys on the range are
    /// kept. If `attributes` is empty, nothing is recorded.
    pub fn add_attributes(
        &mut self,
        attributes: impl IntoIterator<Item = (K, V)>,
        range: TextRange,
    ) {
        let mut attributes = attributes.into_iter().peekable();
        if attributes.peek().is_none() {
            return;
        }
        let ix = *self.index.entry(range).or_insert_with(|| {
            self.entries.push((range, AttributeMap::new()));
            self.entries.len() - 1
        });
        self.entries[ix].1.extend(attributes);
    }

    /// Remove `key` from exactly `range`.
    ///
    /// The entry for `range` is kept even if this leaves it empty. If there is no entry for
    /// `range`, this does nothing; in particular, entries for larger ranges containing `range`
    /// are unaffected.
    pub fn remove_attribute(&mut self, key: &K, range: TextRange) {
        if let Some(&ix) = self.index.get(&range) {
            self.entries[ix].1.remove(key);
        }
    }
}

impl<K: Eq + Hash + Clone, V: Clone + PartialEq> RangeAttributeStore<K, V> {
    /// Build styled text from `base`, or return `None` if there is no text.
    ///
    /// See [`build`](Self::build).
    pub fn build_styled_text(
        &self,
        base: Option<&str>,
        defaults: Option<&AttributeMap<K, V>>,
    ) -> Option<StyledText<K, V>> {
        base.map(|base| self.build(base, defaults))
    }

    /// Build styled text from `base`.
    ///
    /// `defaults` are applied to the whole text first. Each entry is then applied in turn over
    /// its range clipped to the text, each key overwriting whatever value the defaults or earlier
    /// entries left at that position. Entries whose range starts past the end of `base`, or is
    /// empty after clipping, are skipped.
    pub fn build(&self, base: &str, defaults: Option<&AttributeMap<K, V>>) -> StyledText<K, V> {
        let mut styled = match defaults {
            Some(defaults) => StyledText::with_attributes(base, defaults),
            None => StyledText::new(base),
        };
        let len = styled.len();
        for (range, attributes) in &self.entries {
            let Some(clipped) = range.clip(len) else {
                trace!("skipping attributes at {range:?}: nothing left in {len} chars");
                continue;
            };
            if clipped != *range {
                trace!("clipping attributes at {range:?} to {clipped:?}");
            }
            styled.add_attributes(attributes, clipped);
        }
        styled
    }
}

impl<K, V> Default for RangeAttributeStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K, V> IntoIterator for &'a RangeAttributeStore<K, V> {
    type Item = (TextRange, &'a AttributeMap<K, V>);
    type IntoIter = Overlays<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`RangeAttributeStore`], in application order.
#[derive(Clone, Debug)]
pub struct Overlays<'a, K, V> {
    inner: core::slice::Iter<'a, (TextRange, AttributeMap<K, V>)>,
}

impl<'a, K, V> Iterator for Overlays<'a, K, V> {
    type Item = (TextRange, &'a AttributeMap<K, V>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(range, attributes)| (*range, attributes))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Overlays<'_, K, V> {}

impl<K, V> FusedIterator for Overlays<'_, K, V> {}
