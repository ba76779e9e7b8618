// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The list of active formatting elements (spec.md §4.2), with the Noah's
//! Ark condition and the bookkeeping the adoption agency algorithm needs.
//! Grounded on the teacher's `active_formatting: RefCell<Vec<FormatEntry
//! <Handle>>>` field and its surrounding methods (`position_in_active_
//! formatting`, `create_formatting_element_for`, `reconstruct_active_
//! formatting_elements`, `clear_active_formatting_to_marker`) in
//! `tree_builder/mod.rs`.

use crate::token::Tag;

/// One entry in the list: either a real formatting element (with the tag it
/// was created from, so it can be recreated during adoption agency /
/// reconstruction) or a scope marker, inserted at the boundaries of
/// `<button>`, table cells, captions, and object elements.
#[derive(Clone)]
pub enum FormatEntry<Handle> {
    Marker,
    Element(Handle, Tag),
}

/// Where to splice a reconstructed formatting element back into the list,
/// computed during the adoption agency's inner loop (spec.md §4.2, step 13
/// and step 18 of the algorithm in the teacher's `adoption_agency`).
pub enum Bookmark<Handle> {
    Replace(Handle),
    InsertAfter(Handle),
}

/// The formatting elements named in the HTML spec that trigger the Noah's
/// Ark condition: no more than 3 elements with the same tag name and exact
/// attribute set may appear between the end of the list and the last
/// marker. Grounded on `create_formatting_element_for`'s `matches >= 3`
/// check.
const NOAHS_ARK_LIMIT: usize = 3;

pub struct FormattingElementList<Handle> {
    entries: Vec<FormatEntry<Handle>>,
}

impl<Handle: Clone> Default for FormattingElementList<Handle> {
    fn default() -> Self {
        FormattingElementList {
            entries: Vec::new(),
        }
    }
}

impl<Handle: Clone> FormattingElementList<Handle> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&FormatEntry<Handle>> {
        self.entries.last()
    }

    pub fn get(&self, index: usize) -> &FormatEntry<Handle> {
        &self.entries[index]
    }

    pub fn set(&mut self, index: usize, entry: FormatEntry<Handle>) {
        self.entries[index] = entry;
    }

    pub fn insert_at(&mut self, index: usize, entry: FormatEntry<Handle>) {
        self.entries.insert(index, entry);
    }

    pub fn remove_at(&mut self, index: usize) {
        self.entries.remove(index);
    }

    pub fn insert_marker(&mut self) {
        self.entries.push(FormatEntry::Marker);
    }

    /// https://html.spec.whatwg.org/multipage/#clear-the-list-of-active-formatting-elements-up-to-the-last-marker
    pub fn clear_to_last_marker(&mut self) {
        loop {
            match self.entries.pop() {
                None | Some(FormatEntry::Marker) => break,
                _ => (),
            }
        }
    }

    pub fn position(&self, same_node: impl Fn(&Handle, &Handle) -> bool, elem: &Handle) -> Option<usize> {
        self.entries.iter().position(|entry| match entry {
            FormatEntry::Marker => false,
            FormatEntry::Element(h, _) => same_node(h, elem),
        })
    }

    /// An iterator over `(index, handle, tag)` from the end of the list back
    /// to (but excluding) the last marker, or to the start if there is none.
    /// Grounded on `active_formatting_end_to_marker`.
    pub fn iter_to_last_marker(&self) -> impl Iterator<Item = (usize, &Handle, &Tag)> {
        let boundary = self
            .entries
            .iter()
            .rposition(|e| matches!(e, FormatEntry::Marker))
            .map(|i| i + 1)
            .unwrap_or(0);
        self.entries[boundary..]
            .iter()
            .enumerate()
            .rev()
            .filter_map(move |(i, entry)| match entry {
                FormatEntry::Marker => None,
                FormatEntry::Element(h, t) => Some((boundary + i, h, t)),
            })
    }

    fn is_marker_or<F>(&self, entry: &FormatEntry<Handle>, is_open: F) -> bool
    where
        F: Fn(&Handle) -> bool,
    {
        match entry {
            FormatEntry::Marker => true,
            FormatEntry::Element(h, _) => is_open(h),
        }
    }

    /// https://html.spec.whatwg.org/#reconstruct-the-active-formatting-elements
    ///
    /// `is_open` tests whether a handle is (still) on the stack of open
    /// elements. `create` is called once per entry that needs to be
    /// reinserted, in order from the earliest to the most recent, and must
    /// return the freshly-inserted element; the entry is then updated to
    /// point at it.
    pub fn reconstruct<IsOpen, Create>(&mut self, is_open: IsOpen, mut create: Create)
    where
        IsOpen: Fn(&Handle) -> bool,
        Create: FnMut(&Tag) -> Handle,
    {
        if self.entries.is_empty() {
            return;
        }
        if self.is_marker_or(self.entries.last().unwrap(), &is_open) {
            return;
        }

        let mut entry_index = self.entries.len() - 1;
        loop {
            if entry_index == 0 {
                break;
            }
            entry_index -= 1;
            if self.is_marker_or(&self.entries[entry_index], &is_open) {
                entry_index += 1;
                break;
            }
        }

        loop {
            let tag = match &self.entries[entry_index] {
                FormatEntry::Element(_, t) => t.clone(),
                FormatEntry::Marker => panic!("marker found during formatting element reconstruction"),
            };
            let new_element = create(&tag);
            self.entries[entry_index] = FormatEntry::Element(new_element, tag);

            if entry_index == self.entries.len() - 1 {
                break;
            }
            entry_index += 1;
        }
    }

    /// Push a newly-created formatting element, enforcing the Noah's Ark
    /// condition: if three matching entries already exist since the last
    /// marker, drop the earliest of them first.
    pub fn push_with_noahs_ark(&mut self, elem: Handle, tag: Tag) {
        let mut first_match = None;
        let mut matches = 0usize;
        for (i, _, old_tag) in self.iter_to_last_marker() {
            if tag.equiv_modulo_attr_order(old_tag) {
                first_match = Some(i);
                matches += 1;
            }
        }
        if matches >= NOAHS_ARK_LIMIT {
            self.entries.remove(first_match.expect("matches with no index"));
        }
        self.entries.push(FormatEntry::Element(elem, tag));
    }

    pub fn remove(&mut self, same_node: impl Fn(&Handle, &Handle) -> bool, elem: &Handle) {
        if let Some(pos) = self.position(&same_node, elem) {
            self.entries.remove(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TagKind;

    fn b_tag() -> Tag {
        Tag::new(TagKind::StartTag, "b".into(), false)
    }

    #[test]
    fn noahs_ark_drops_the_earliest_match_past_the_limit() {
        let mut list = FormattingElementList::<u32>::new();
        for handle in 0..3 {
            list.push_with_noahs_ark(handle, b_tag());
        }
        assert_eq!(list.len(), 3);

        list.push_with_noahs_ark(3, b_tag());

        // The fourth matching <b> pushes out the first (handle 0), not the
        // ones in between.
        assert_eq!(list.len(), 3);
        let handles: Vec<u32> = (0..list.len())
            .map(|i| match list.get(i) {
                FormatEntry::Element(h, _) => *h,
                FormatEntry::Marker => panic!("unexpected marker"),
            })
            .collect();
        assert_eq!(handles, vec![1, 2, 3]);
    }

    #[test]
    fn noahs_ark_ignores_matches_before_a_marker() {
        let mut list = FormattingElementList::<u32>::new();
        for handle in 0..3 {
            list.push_with_noahs_ark(handle, b_tag());
        }
        list.insert_marker();
        // A <button> scope boundary resets the count; a fourth <b> past the
        // marker should not evict anything before it.
        list.push_with_noahs_ark(3, b_tag());
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn clear_to_last_marker_drops_everything_above_it() {
        let mut list = FormattingElementList::<u32>::new();
        list.push_with_noahs_ark(0, b_tag());
        list.insert_marker();
        list.push_with_noahs_ark(1, b_tag());
        list.push_with_noahs_ark(2, b_tag());

        list.clear_to_last_marker();

        assert_eq!(list.len(), 1);
        assert!(matches!(list.get(0), FormatEntry::Element(0, _)));
    }

    #[test]
    fn position_skips_markers_and_finds_by_identity() {
        let mut list = FormattingElementList::<u32>::new();
        list.push_with_noahs_ark(0, b_tag());
        list.insert_marker();
        list.push_with_noahs_ark(1, b_tag());

        let same_node = |a: &u32, b: &u32| a == b;
        assert_eq!(list.position(same_node, &1), Some(2));
        assert_eq!(list.position(same_node, &99), None);
    }
}
