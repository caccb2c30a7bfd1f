// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::hash::Hash;
use core::ops::Range;

use crate::{AttributeKey, AttributeMap, AttributeValue, TextRange};

/// A contiguous part of a [`StyledText`] with a single resolved attribute map.
#[derive(Clone, Debug)]
pub struct StyledRun<K = AttributeKey, V = AttributeValue> {
    range: Range<usize>,
    byte_range: Range<usize>,
    attributes: AttributeMap<K, V>,
}

impl<K, V> StyledRun<K, V> {
    /// The char range covered by this run.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The byte range covered by this run in [`StyledText::as_str`].
    pub fn byte_range(&self) -> Range<usize> {
        self.byte_range.clone()
    }

    /// The attributes that apply to every char of this run.
    pub fn attributes(&self) -> &AttributeMap<K, V> {
        &self.attributes
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for StyledRun<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.range == other.range && self.attributes == other.attributes
    }
}

/// Text with a resolved attribute map for every char.
///
/// The attributes are stored as runs: non-empty, non-overlapping and contiguous char ranges that
/// together cover the whole text. Adjacent runs always have different attribute maps. Empty text
/// has no runs.
///
/// `StyledText` is usually produced by [`RangeAttributeStore::build`], but can also be assembled
/// directly.
///
/// ```
/// use range_attributes::{AttributeMap, StyledText, TextRange};
///
/// let mut text = StyledText::<&str, i32>::new("abcdef");
/// let red: AttributeMap<&str, i32> = [("color", 1)].into_iter().collect();
/// let blue: AttributeMap<&str, i32> = [("color", 2)].into_iter().collect();
/// text.add_attributes(&red, TextRange::new(1, 3));
/// text.add_attributes(&blue, TextRange::new(2, 3));
///
/// let colors: Vec<_> = text
///     .runs()
///     .iter()
///     .map(|run| (run.range(), run.attributes().get(&"color").copied()))
///     .collect();
/// assert_eq!(
///     colors,
///     [(0..1, None), (1..2, Some(1)), (2..5, Some(2)), (5..6, None)]
/// );
/// ```
///
/// [`RangeAttributeStore::build`]: crate::RangeAttributeStore::build
#[derive(Clone, Debug)]
pub struct StyledText<K = AttributeKey, V = AttributeValue> {
    text: String,
    len: usize,
    runs: Vec<StyledRun<K, V>>,
}

impl<K, V> StyledText<K, V> {
    /// Create a `StyledText` with no attributes.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_attributes_owned(text.into(), AttributeMap::new())
    }

    fn with_attributes_owned(text: String, attributes: AttributeMap<K, V>) -> Self {
        let len = text.chars().count();
        let runs = if len == 0 {
            Vec::new()
        } else {
            vec![StyledRun {
                range: 0..len,
                byte_range: 0..text.len(),
                attributes,
            }]
        };
        Self { text, len, runs }
    }

    /// Returns the underlying text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes this value and returns the underlying text.
    pub fn into_string(self) -> String {
        self.text
    }

    /// Returns the length of the text, in chars.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The attribute runs, in text order.
    pub fn runs(&self) -> &[StyledRun<K, V>] {
        &self.runs
    }

    /// Iterate over each run's text together with its attributes.
    pub fn segments(&self) -> impl Iterator<Item = (&str, &AttributeMap<K, V>)> + '_ {
        self.runs
            .iter()
            .map(|run| (&self.text[run.byte_range.clone()], &run.attributes))
    }

    /// Returns the attributes at char `index`, or `None` if `index` is out of bounds.
    pub fn attributes_at(&self, index: usize) -> Option<&AttributeMap<K, V>> {
        let ix = self.run_index_at(index);
        self.runs.get(ix).map(|run| &run.attributes)
    }

    /// Index of the run containing char `index`, or `runs.len()` if past the end.
    fn run_index_at(&self, index: usize) -> usize {
        self.runs.partition_point(|run| run.range.end <= index)
    }
}

impl<K: Eq + Hash + Clone, V: Clone + PartialEq> StyledText<K, V> {
    /// Create a `StyledText` with `attributes` applied to all of `text`.
    pub fn with_attributes(text: impl Into<String>, attributes: &AttributeMap<K, V>) -> Self {
        Self::with_attributes_owned(text.into(), attributes.clone())
    }

    /// Returns the value of `key` at char `index`.
    pub fn attribute(&self, index: usize, key: &K) -> Option<&V> {
        self.attributes_at(index)?.get(key)
    }

    /// Set every attribute of `attributes` over `range`, overwriting existing values for the same
    /// keys.
    ///
    /// The range is [clipped](TextRange::clip) to the text; if nothing is left, this does nothing.
    pub fn add_attributes(&mut self, attributes: &AttributeMap<K, V>, range: TextRange) {
        let Some(range) = range.clip(self.len) else {
            return;
        };
        if attributes.is_empty() {
            return;
        }
        let first = self.split_at(range.location());
        let last = self.split_at(range.end());
        for run in &mut self.runs[first..last] {
            run.attributes.merge_from(attributes);
        }
        self.coalesce();
    }

    /// Ensure a run starts at char `index` and return its index.
    ///
    /// For `index == len` this returns `runs.len()`.
    fn split_at(&mut self, index: usize) -> usize {
        let ix = self.run_index_at(index);
        let Some(run) = self.runs.get_mut(ix) else {
            return ix;
        };
        if run.range.start == index {
            return ix;
        }
        let chars_before = index - run.range.start;
        let run_text = &self.text[run.byte_range.clone()];
        let byte_offset = run_text
            .char_indices()
            .nth(chars_before)
            .map_or(run_text.len(), |(offset, _)| offset);
        let split_byte = run.byte_range.start + byte_offset;

        let tail = StyledRun {
            range: index..run.range.end,
            byte_range: split_byte..run.byte_range.end,
            attributes: run.attributes.clone(),
        };
        run.range.end = index;
        run.byte_range.end = split_byte;
        self.runs.insert(ix + 1, tail);
        ix + 1
    }

    /// Merge adjacent runs with equal attributes.
    fn coalesce(&mut self) {
        self.runs.dedup_by(|next, prev| {
            if prev.range.end == next.range.start && prev.attributes == next.attributes {
                prev.range.end = next.range.end;
                prev.byte_range.end = next.byte_range.end;
                true
            } else {
                false
            }
        });
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for StyledText<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.runs == other.runs
    }
}

#[cfg(test)]
mod tests {
    use super::StyledText;
    use crate::{AttributeMap, TextRange};
    use alloc::vec::Vec;
    use core::ops::Range;

    fn attrs(pairs: &[(&'static str, i32)]) -> AttributeMap<&'static str, i32> {
        pairs.iter().copied().collect()
    }

    fn ranges(text: &StyledText<&'static str, i32>) -> Vec<Range<usize>> {
        text.runs().iter().map(|run| run.range()).collect()
    }

    #[test]
    fn empty_text_has_no_runs() {
        let text = StyledText::with_attributes("", &attrs(&[("a", 1)]));
        assert!(text.is_empty());
        assert!(text.runs().is_empty());
        assert!(text.attributes_at(0).is_none());
    }

    #[test]
    fn plain_text_is_a_single_unstyled_run() {
        let text = StyledText::<&str, i32>::new("hello");
        assert_eq!(ranges(&text), [0..5]);
        assert!(text.attributes_at(4).unwrap().is_empty());
        assert!(text.attributes_at(5).is_none());
    }

    #[test]
    fn add_splits_and_merges() {
        let mut text = StyledText::with_attributes("hello", &attrs(&[("size", 12)]));
        text.add_attributes(&attrs(&[("bold", 1)]), TextRange::new(1, 2));
        assert_eq!(ranges(&text), [0..1, 1..3, 3..5]);
        assert_eq!(text.attribute(2, &"size"), Some(&12));
        assert_eq!(text.attribute(2, &"bold"), Some(&1));
        assert_eq!(text.attribute(3, &"bold"), None);
    }

    #[test]
    fn later_values_overwrite_earlier_ones() {
        let mut text = StyledText::with_attributes("hello", &attrs(&[("color", 0)]));
        text.add_attributes(&attrs(&[("color", 1)]), TextRange::new(0, 5));
        assert_eq!(ranges(&text), [0..5]);
        assert_eq!(text.attribute(0, &"color"), Some(&1));
    }

    #[test]
    fn equal_neighbours_are_coalesced() {
        let mut text = StyledText::<&str, i32>::new("abcdef");
        text.add_attributes(&attrs(&[("k", 1)]), TextRange::new(0, 3));
        text.add_attributes(&attrs(&[("k", 1)]), TextRange::new(3, 3));
        assert_eq!(ranges(&text), [0..6]);
    }

    #[test]
    fn out_of_bounds_ranges_are_clipped_or_ignored() {
        let mut text = StyledText::<&str, i32>::new("Hi");
        text.add_attributes(&attrs(&[("bold", 1)]), TextRange::new(0, 5));
        assert_eq!(ranges(&text), [0..2]);
        assert_eq!(text.attribute(1, &"bold"), Some(&1));

        let before = text.clone();
        text.add_attributes(&attrs(&[("italic", 1)]), TextRange::new(3, 1));
        text.add_attributes(&attrs(&[("italic", 1)]), TextRange::new(2, 1));
        assert_eq!(text, before);
    }

    #[test]
    fn runs_track_byte_ranges_for_multibyte_text() {
        // "é" is 2 bytes in UTF-8.
        let mut text = StyledText::<&str, i32>::new("éclair");
        text.add_attributes(&attrs(&[("k", 1)]), TextRange::new(1, 2));
        let byte_ranges: Vec<_> = text.runs().iter().map(|run| run.byte_range()).collect();
        assert_eq!(byte_ranges, [0..2, 2..4, 4..7]);
        let pieces: Vec<_> = text.segments().map(|(s, _)| s).collect();
        assert_eq!(pieces, ["é", "cl", "air"]);
    }
}
