// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The stack of open elements (spec.md §4.1), with scope queries and the
//! implied-end-tag generators. Grounded on the field layout and helper
//! methods of the teacher's `TreeBuilder` (`open_elems: RefCell<Vec<Handle>>`
//! plus the free methods in `tree_builder/mod.rs` that operate on it), split
//! out into its own type the way spec.md names it as a standalone
//! component.

use crate::interface::TreeAdapter;
use markup5ever::ExpandedName;

/// An ordered stack of open elements. Index 0 is always the root `<html>`
/// element (or, in fragment parsing, the context mock); `current()` is the
/// top.
pub struct OpenElementStack<Handle> {
    elems: Vec<Handle>,
}

impl<Handle: Clone> Default for OpenElementStack<Handle> {
    fn default() -> Self {
        OpenElementStack { elems: Vec::new() }
    }
}

impl<Handle: Clone> OpenElementStack<Handle> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, elem: Handle) {
        self.elems.push(elem);
    }

    pub fn pop(&mut self) -> Option<Handle> {
        self.elems.pop()
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn current(&self) -> &Handle {
        self.elems.last().expect("no current element")
    }

    pub fn html_elem(&self) -> &Handle {
        &self.elems[0]
    }

    pub fn get(&self, index: usize) -> Option<&Handle> {
        self.elems.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Handle> {
        self.elems.iter()
    }

    pub fn as_slice(&self) -> &[Handle] {
        &self.elems
    }

    pub fn shorten_to_length(&mut self, len: usize) {
        self.elems.truncate(len);
    }

    pub fn replace(&mut self, index: usize, new: Handle) -> Handle {
        std::mem::replace(&mut self.elems[index], new)
    }

    pub fn insert_at(&mut self, index: usize, elem: Handle) {
        self.elems.insert(index, elem);
    }

    pub fn remove_at(&mut self, index: usize) -> Handle {
        self.elems.remove(index)
    }

    pub fn position<F: Fn(&Handle) -> bool>(&self, pred: F) -> Option<usize> {
        self.elems.iter().position(|h| pred(h))
    }

    pub fn rposition<F: Fn(&Handle) -> bool>(&self, pred: F) -> Option<usize> {
        self.elems.iter().rposition(|h| pred(h))
    }

    /// Remove (by identity, from the top) the topmost occurrence of `elem`.
    pub fn remove(&mut self, same_node: impl Fn(&Handle, &Handle) -> bool, elem: &Handle) {
        if let Some(pos) = self.elems.iter().rposition(|x| same_node(x, elem)) {
            self.elems.remove(pos);
        }
    }

    /// Is `elem` anywhere on the stack?
    pub fn contains(&self, same_node: impl Fn(&Handle, &Handle) -> bool, elem: &Handle) -> bool {
        self.elems.iter().any(|x| same_node(x, elem))
    }

    /// Is the only element left on the stack the root `<html>` element (or,
    /// in fragment parsing, its context mock)?
    pub fn is_root_html_element_current(&self) -> bool {
        self.elems.len() == 1
    }

    /// Pop until an element with the given predicate has been popped.
    /// Returns the number of elements popped. Mirrors `pop_until` / the
    /// `popUntilTagNamePopped` family from spec.md §4.1.
    pub fn pop_until<Sink, F>(&mut self, sink: &Sink, pred: F) -> usize
    where
        Sink: TreeAdapter<Handle = Handle>,
        F: Fn(ExpandedName) -> bool,
    {
        let mut n = 0;
        loop {
            n += 1;
            match self.elems.pop() {
                None => break,
                Some(elem) => {
                    sink.pop(&elem);
                    if pred(sink.elem_name(&elem)) {
                        break;
                    }
                },
            }
        }
        n
    }

    pub fn pop_until_current<Sink, F>(&mut self, sink: &Sink, tag_set: F)
    where
        Sink: TreeAdapter<Handle = Handle>,
        F: Fn(ExpandedName) -> bool,
    {
        while !tag_set(sink.elem_name(self.current())) {
            let elem = self.elems.pop().expect("ran off stack");
            sink.pop(&elem);
        }
    }

    /// https://html.spec.whatwg.org/#generate-implied-end-tags
    pub fn generate_implied_end_tags<Sink, F>(&mut self, sink: &Sink, set: F)
    where
        Sink: TreeAdapter<Handle = Handle>,
        F: Fn(ExpandedName) -> bool,
    {
        while let Some(elem) = self.elems.last() {
            if !set(sink.elem_name(elem)) {
                break;
            }
            let elem = self.elems.pop().unwrap();
            sink.pop(&elem);
        }
    }

    /// `generate_implied_end_tags` excluding one HTML-namespace local name.
    pub fn generate_implied_end_tags_except<Sink>(
        &mut self,
        sink: &Sink,
        except: &markup5ever::LocalName,
    ) where
        Sink: TreeAdapter<Handle = Handle>,
    {
        let except = except.clone();
        self.generate_implied_end_tags(sink, |name| {
            if *name.ns == markup5ever::ns!(html) && *name.local == except {
                false
            } else {
                super::tag_sets::cursory_implied_end(name)
            }
        });
    }

    pub fn generate_implied_end_tags_thoroughly<Sink>(&mut self, sink: &Sink)
    where
        Sink: TreeAdapter<Handle = Handle>,
    {
        self.generate_implied_end_tags(sink, super::tag_sets::thorough_implied_end);
    }

    /// https://html.spec.whatwg.org/multipage/#has-an-element-in-the-specific-scope
    pub fn has_in_scope<Sink, Scope, Pred>(&self, sink: &Sink, scope: Scope, pred: Pred) -> bool
    where
        Sink: TreeAdapter<Handle = Handle>,
        Scope: Fn(ExpandedName) -> bool,
        Pred: Fn(&Handle) -> bool,
    {
        for node in self.elems.iter().rev() {
            if pred(node) {
                return true;
            }
            if scope(sink.elem_name(node)) {
                return false;
            }
        }
        false
    }

    pub fn has_in_scope_named<Sink, Scope>(
        &self,
        sink: &Sink,
        scope: Scope,
        local: &markup5ever::LocalName,
    ) -> bool
    where
        Sink: TreeAdapter<Handle = Handle>,
        Scope: Fn(ExpandedName) -> bool,
    {
        self.has_in_scope(sink, scope, |node| {
            html_elem_named(sink, node, local)
        })
    }

    pub fn has_numbered_header_in_scope<Sink>(&self, sink: &Sink) -> bool
    where
        Sink: TreeAdapter<Handle = Handle>,
    {
        self.has_in_scope(sink, super::tag_sets::default_scope, |node| {
            super::tag_sets::heading_tag(sink.elem_name(node))
        })
    }

    pub fn has_table_body_context_in_table_scope<Sink>(&self, sink: &Sink) -> bool
    where
        Sink: TreeAdapter<Handle = Handle>,
    {
        self.has_in_scope(sink, super::tag_sets::table_scope, |node| {
            let name = sink.elem_name(node);
            *name.ns == markup5ever::ns!(html)
                && matches!(
                    *name.local,
                    markup5ever::local_name!("tbody")
                        | markup5ever::local_name!("thead")
                        | markup5ever::local_name!("tfoot")
                )
        })
    }

    /// The element immediately below `elem` on the stack, or `None` if
    /// `elem` is not found or is at the bottom.
    pub fn common_ancestor<Sink>(&self, sink: &Sink, elem: &Handle) -> Option<Handle>
    where
        Sink: TreeAdapter<Handle = Handle>,
    {
        let idx = self
            .elems
            .iter()
            .rposition(|x| sink.same_node(x, elem))?;
        if idx == 0 {
            None
        } else {
            Some(self.elems[idx - 1].clone())
        }
    }
}

pub(crate) fn html_elem_named<Sink>(
    sink: &Sink,
    elem: &Sink::Handle,
    local: &markup5ever::LocalName,
) -> bool
where
    Sink: TreeAdapter,
{
    let name = sink.elem_name(elem);
    *name.ns == markup5ever::ns!(html) && *name.local == *local
}

impl<Handle, I> std::ops::Index<I> for OpenElementStack<Handle>
where
    I: std::slice::SliceIndex<[Handle]>,
{
    type Output = I::Output;
    fn index(&self, index: I) -> &I::Output {
        self.elems.index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::ElementFlags;
    use crate::rcdom::{Handle as RcHandle, Rcdom};
    use crate::{local_name, ns, QualName};

    fn elem(dom: &Rcdom, local: &str) -> RcHandle {
        dom.create_element(
            QualName::new(None, ns!(html), local.into()),
            vec![],
            ElementFlags::default(),
        )
    }

    #[test]
    fn is_root_html_element_current_only_with_one_element() {
        let dom = Rcdom::default();
        let mut stack = OpenElementStack::new();
        stack.push(elem(&dom, "html"));
        assert!(stack.is_root_html_element_current());
        stack.push(elem(&dom, "body"));
        assert!(!stack.is_root_html_element_current());
    }

    #[test]
    fn has_in_scope_named_finds_an_open_ancestor() {
        let dom = Rcdom::default();
        let mut stack = OpenElementStack::new();
        stack.push(elem(&dom, "html"));
        stack.push(elem(&dom, "div"));
        stack.push(elem(&dom, "p"));
        assert!(stack.has_in_scope_named(&dom, super::super::tag_sets::default_scope, &local_name!("div")));
        assert!(!stack.has_in_scope_named(&dom, super::super::tag_sets::default_scope, &local_name!("span")));
    }

    #[test]
    fn has_in_scope_named_is_blocked_by_a_scope_boundary() {
        let dom = Rcdom::default();
        let mut stack = OpenElementStack::new();
        stack.push(elem(&dom, "html"));
        stack.push(elem(&dom, "div"));
        stack.push(elem(&dom, "table"));
        stack.push(elem(&dom, "td"));
        stack.push(elem(&dom, "p"));
        // `table`/`td` are default-scope boundaries, so `div` below them is
        // out of scope even though it's still on the stack.
        assert!(!stack.has_in_scope_named(&dom, super::super::tag_sets::default_scope, &local_name!("div")));
    }

    #[test]
    fn has_numbered_header_in_scope_matches_any_h1_through_h6() {
        let dom = Rcdom::default();
        let mut stack = OpenElementStack::new();
        stack.push(elem(&dom, "html"));
        stack.push(elem(&dom, "h3"));
        assert!(stack.has_numbered_header_in_scope(&dom));
        stack.pop();
        stack.push(elem(&dom, "div"));
        assert!(!stack.has_numbered_header_in_scope(&dom));
    }

    #[test]
    fn has_table_body_context_in_table_scope_checks_tbody_thead_tfoot() {
        let dom = Rcdom::default();
        let mut stack = OpenElementStack::new();
        stack.push(elem(&dom, "html"));
        stack.push(elem(&dom, "table"));
        assert!(!stack.has_table_body_context_in_table_scope(&dom));
        stack.push(elem(&dom, "tbody"));
        assert!(stack.has_table_body_context_in_table_scope(&dom));
    }

    #[test]
    fn common_ancestor_is_the_element_directly_below_on_the_stack() {
        let dom = Rcdom::default();
        let mut stack = OpenElementStack::new();
        let html = elem(&dom, "html");
        let div = elem(&dom, "div");
        let span = elem(&dom, "span");
        stack.push(html.clone());
        stack.push(div.clone());
        stack.push(span.clone());

        let ancestor = stack.common_ancestor(&dom, &span).unwrap();
        assert!(dom.same_node(&ancestor, &div));

        let ancestor = stack.common_ancestor(&dom, &div).unwrap();
        assert!(dom.same_node(&ancestor, &html));

        assert!(stack.common_ancestor(&dom, &html).is_none());
    }

    #[test]
    fn pop_until_stops_at_the_first_matching_element() {
        let dom = Rcdom::default();
        let mut stack = OpenElementStack::new();
        stack.push(elem(&dom, "html"));
        stack.push(elem(&dom, "div"));
        stack.push(elem(&dom, "p"));

        let popped = stack.pop_until(&dom, |name| *name.local == local_name!("div"));

        assert_eq!(popped, 2);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn generate_implied_end_tags_thoroughly_stops_at_table() {
        let dom = Rcdom::default();
        let mut stack = OpenElementStack::new();
        stack.push(elem(&dom, "html"));
        stack.push(elem(&dom, "table"));
        stack.push(elem(&dom, "tbody"));
        stack.push(elem(&dom, "tr"));
        stack.push(elem(&dom, "td"));
        stack.push(elem(&dom, "p"));

        stack.generate_implied_end_tags_thoroughly(&dom);

        assert_eq!(stack.len(), 2);
        assert_eq!(*dom.elem_name(stack.current()).local, local_name!("table"));
    }
}
