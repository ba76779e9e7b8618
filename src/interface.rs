// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The `TreeAdapter` capability surface: everything the parser needs from a
//! host-supplied DOM-like tree. External collaborator, per spec.md §1/§6 —
//! this module defines the contract only; `crate::rcdom` bundles one
//! reference implementation.

use crate::location::SourceSpan;
use crate::{ExpandedName, QualName};
use std::borrow::Cow;
use tendril::StrTendril;

/// A tag attribute. The namespace is almost always the null namespace; the
/// tree builder rewrites it for certain foreign-content attributes (SVG,
/// MathML, XLink, XML, XMLNS adjustment tables, see spec.md §4.4).
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Debug)]
pub struct Attribute {
    pub name: QualName,
    pub value: StrTendril,
}

/// Document quirks classification, derived from the DOCTYPE (spec.md's
/// "Doctype + quirks classifier" component).
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug, Default)]
pub enum QuirksMode {
    Quirks,
    LimitedQuirks,
    #[default]
    NoQuirks,
}

/// What to do with a script element once the tree builder hands control
/// back after a `</script>` pause (spec.md §5, "pending script handoff").
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum NextParserState {
    #[default]
    Continue,
    Suspend,
}

/// Extra context passed to `TreeAdapter::create_element`, mirroring the
/// handful of flags `create_an_element_for_the_token` needs that aren't
/// part of the tag itself (fragment parsing suppresses custom-element
/// upgrade reactions; this engine does not implement custom elements but
/// keeps the flag so hosts that do can hook it).
#[derive(Debug, Default, Clone, Copy)]
pub struct ElementFlags {
    pub template: bool,
    pub mathml_annotation_xml_integration_point: bool,
}

/// Either a node to append/insert directly, or text to append/insert,
/// coalescing with an adjacent text node if present. Splitting this out
/// from a plain `Handle` lets the adapter implement the "consecutive
/// character tokens merge into one text node" guarantee (spec.md §8)
/// without the tree builder needing to know about text-node identity.
pub enum NodeOrText<Handle> {
    Node(Handle),
    Text(StrTendril),
}

/// Helper mirroring `create_element` in the teacher: build a qualified name
/// and ask the sink to materialize it. Kept as a free function (not a
/// trait default method) so it can be called without a `Sink` value when
/// only the name is in hand.
pub fn create_element<Sink>(
    sink: &Sink,
    name: QualName,
    attrs: Vec<Attribute>,
    flags: ElementFlags,
) -> Sink::Handle
where
    Sink: TreeAdapter,
{
    sink.create_element(name, attrs, flags)
}

/// The capability surface a host DOM exposes to the tree builder.
///
/// This is the Rust-idiomatic shape of the "TreeAdapter" described in
/// spec.md §6: instead of a grab-bag of getters per concept (`getTagName`,
/// `getNamespaceURI`, ...), `elem_name` returns a single
/// [`ExpandedName`], and instead of reference-equality handles, `same_node`
/// makes node identity explicit — both choices following the teacher's own
/// `TreeSink` trait, since handles here are opaque and may not be
/// `PartialEq`.
pub trait TreeAdapter {
    /// Handle type for nodes in the host tree. The engine only ever clones
    /// and compares these; it never inspects their contents except through
    /// this trait.
    type Handle: Clone;

    /// Consume the sink, producing whatever the host considers the parse
    /// result (a full document, or a fragment's children).
    type Output;
    fn finish(self) -> Self::Output;

    /// Get a handle to the document node.
    fn get_document(&self) -> Self::Handle;

    /// Get the template content fragment of a `<template>` element.
    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle;

    /// Are `x` and `y` handles to the same node?
    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool;

    /// The expanded (namespace, local) name of an element.
    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> ExpandedName<'a>;

    /// Create an element, without inserting it anywhere yet.
    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Attribute>,
        flags: ElementFlags,
    ) -> Self::Handle;

    /// Create a comment node, without inserting it.
    fn create_comment(&self, text: StrTendril) -> Self::Handle;

    /// Append `child` as the last child of `parent`, merging into a
    /// trailing text node if both are text.
    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>);

    /// Insert `child` immediately before `sibling`.
    fn append_before_sibling(&self, sibling: &Self::Handle, child: NodeOrText<Self::Handle>);

    /// Foster-parenting insertion: append based on whether `element` (a
    /// `<table>`) currently has a parent. See spec.md §4.3 "Foster
    /// parenting".
    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    );

    /// Record a DOCTYPE on the document.
    fn append_doctype_to_document(
        &self,
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    );

    /// Record the document's quirks mode.
    fn set_quirks_mode(&self, mode: QuirksMode);

    /// Merge `attrs` onto `target`, without overwriting attributes that are
    /// already present (used for the root `<html>` when a second `<html>`
    /// start tag is seen in AFTER_HEAD/AFTER_BODY/...).
    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: Vec<Attribute>);

    /// Detach `target` from its current parent, if any.
    fn remove_from_parent(&self, target: &Self::Handle);

    /// Move all children of `node` to be children of `new_parent`, in
    /// order (used by the adoption agency, step 16).
    fn reparent_children(&self, node: &Self::Handle, new_parent: &Self::Handle);

    /// Does `target` currently have a parent?
    fn has_parent(&self, target: &Self::Handle) -> bool;

    /// Mark a `<script>` element as "already started", so fragment parsing
    /// and re-parses don't execute it twice.
    fn mark_script_already_started(&self, node: &Self::Handle);

    /// Associate a form-associatable element with its owner `<form>`.
    fn associate_with_form(
        &self,
        _target: &Self::Handle,
        _form: &Self::Handle,
        _nodes: (&Self::Handle, Option<&Self::Handle>),
    ) {
    }

    /// Whether `handle` is a MathML `<annotation-xml>` integration point
    /// (its `encoding` attribute, recorded at creation time, matched
    /// `text/html` or `application/xhtml+xml`).
    fn is_mathml_annotation_xml_integration_point(&self, handle: &Self::Handle) -> bool;

    /// Called once per element popped from the stack of open elements, so
    /// an adapter that tracks end-of-element bookkeeping (or, in this
    /// engine, the location-tracking hooks) can react.
    fn pop(&self, _node: &Self::Handle) {}

    /// Report a parse error. Never fatal; see spec.md §4.7.
    fn parse_error(&self, _message: Cow<'static, str>) {}

    /// Track the current line, for adapters that want coarse location
    /// without the full `sourceCodeLocationInfo` machinery.
    fn set_current_line(&self, _line_number: u64) {}

    /// Whether the document hosting `intended_parent` permits declarative
    /// shadow roots on `<template shadowrootmode>` (a newer WHATWG
    /// addition the teacher carries; see SPEC_FULL.md §11).
    fn allow_declarative_shadow_roots(&self, _intended_parent: &Self::Handle) -> bool {
        false
    }

    /// Attach a declarative shadow root to `shadow_host`, using `template`'s
    /// contents. Returns whether attachment happened.
    fn attach_declarative_shadow(
        &self,
        _shadow_host: &Self::Handle,
        _template: &Self::Handle,
        _attrs: &[Attribute],
    ) -> bool {
        false
    }

    // -- source-location bookkeeping (spec.md §4.6); no-ops unless the
    // adapter opts in to tracking them.
    fn get_node_source_span(&self, _node: &Self::Handle) -> Option<SourceSpan> {
        None
    }
    fn set_node_source_span(&self, _node: &Self::Handle, _span: SourceSpan) {}
    fn update_node_source_span_end(&self, _node: &Self::Handle, _end: crate::location::Bounds) {}
}
