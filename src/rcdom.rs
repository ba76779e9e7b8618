// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A simple reference-counted DOM.
//!
//! This is sufficient as a static parse tree, but don't build a web
//! browser using it. :) It exists to give the tree builder something to
//! drive in tests and small tools; real callers bring their own
//! [`TreeAdapter`].

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::fmt;
use std::rc::{Rc, Weak};

use tendril::StrTendril;

use crate::interface::{Attribute, ElementFlags, NodeOrText, QuirksMode, TreeAdapter};
use crate::location::{Bounds, SourceSpan};
use crate::{expanded_name, local_name, ns, ExpandedName, QualName};

/// Element-specific bookkeeping beyond a bare tag name and attributes.
pub enum ElementData {
    Normal,
    /// A script element and its "already started" flag.
    /// <https://html.spec.whatwg.org/multipage/#already-started>
    Script(Cell<bool>),
    /// A template element and its template contents document fragment.
    /// <https://html.spec.whatwg.org/multipage/#template-contents>
    Template(Handle),
    /// A MathML `<annotation-xml>` whose `encoding` attribute was an ASCII
    /// case-insensitive match for `text/html` or `application/xhtml+xml`.
    /// <https://html.spec.whatwg.org/multipage/embedded-content.html#math:annotation-xml>
    AnnotationXml(bool),
}

/// The different kinds of nodes in the tree.
pub enum NodeData {
    Document,
    Doctype {
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    },
    Text(RefCell<StrTendril>),
    Comment(StrTendril),
    Element {
        name: QualName,
        data: ElementData,
        attrs: RefCell<Vec<Attribute>>,
    },
}

/// A DOM node.
pub struct Node {
    pub data: NodeData,
    pub parent: Cell<Option<WeakHandle>>,
    pub children: RefCell<Vec<Handle>>,
    source_span: RefCell<Option<SourceSpan>>,
}

impl Node {
    fn new(data: NodeData) -> Node {
        Node {
            data,
            parent: Cell::new(None),
            children: RefCell::new(Vec::new()),
            source_span: RefCell::new(None),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            NodeData::Document => write!(f, "#document"),
            NodeData::Doctype { name, .. } => write!(f, "<!DOCTYPE {}>", name),
            NodeData::Text(text) => write!(f, "{:?}", &*text.borrow()),
            NodeData::Comment(text) => write!(f, "<!--{}-->", text),
            NodeData::Element { name, .. } => write!(f, "<{}>", name.local),
        }
    }
}

/// Reference to a DOM node.
#[derive(Clone, Debug)]
pub struct Handle(Rc<Node>);

impl std::ops::Deref for Handle {
    type Target = Node;
    fn deref(&self) -> &Node {
        &self.0
    }
}

/// Identity, not structural, equality: two handles are equal iff they
/// refer to the same node. Mirrors `TreeAdapter::same_node`.
impl PartialEq for Handle {
    fn eq(&self, other: &Handle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
impl Eq for Handle {}

/// Weak reference to a DOM node, used for parent pointers.
pub type WeakHandle = Weak<Node>;

fn new_handle(data: NodeData) -> Handle {
    Handle(Rc::new(Node::new(data)))
}

fn append(new_parent: &Handle, child: Handle) {
    let previous_parent = child.parent.replace(Some(Rc::downgrade(&new_parent.0)));
    assert!(previous_parent.is_none(), "node already had a parent");
    new_parent.children.borrow_mut().push(child);
}

fn get_parent_and_index(target: &Handle) -> Option<(Handle, usize)> {
    let weak = target.parent.take()?;
    let parent = weak.upgrade().expect("dangling weak pointer");
    target.parent.set(Some(weak));
    let i = parent
        .children
        .borrow()
        .iter()
        .position(|child| Rc::ptr_eq(&child.0, &target.0))
        .expect("have parent but couldn't find self in parent's children");
    Some((Handle(parent), i))
}

fn append_to_existing_text(prev: &Handle, text: &str) -> bool {
    match &prev.data {
        NodeData::Text(existing) => {
            existing.borrow_mut().push_slice(text);
            true
        },
        _ => false,
    }
}

fn detach(target: &Handle) {
    if let Some((parent, i)) = get_parent_and_index(target) {
        parent.children.borrow_mut().remove(i);
        target.parent.set(None);
    }
}

/// The reference DOM: the result of parsing.
pub struct Rcdom {
    /// The document node.
    pub document: Handle,
    /// The document's quirks mode, as classified from its DOCTYPE.
    pub quirks_mode: Cell<QuirksMode>,
}

impl Default for Rcdom {
    fn default() -> Rcdom {
        Rcdom {
            document: new_handle(NodeData::Document),
            quirks_mode: Cell::new(QuirksMode::NoQuirks),
        }
    }
}

impl TreeAdapter for Rcdom {
    type Handle = Handle;
    type Output = Self;

    fn finish(self) -> Self {
        self
    }

    fn get_document(&self) -> Handle {
        self.document.clone()
    }

    fn get_template_contents(&self, target: &Handle) -> Handle {
        match &target.data {
            NodeData::Element {
                data: ElementData::Template(contents),
                ..
            } => contents.clone(),
            _ => panic!("get_template_contents called on a non-template element"),
        }
    }

    fn same_node(&self, x: &Handle, y: &Handle) -> bool {
        Rc::ptr_eq(&x.0, &y.0)
    }

    fn elem_name<'a>(&'a self, target: &'a Handle) -> ExpandedName<'a> {
        match &target.data {
            NodeData::Element { name, .. } => name.expanded(),
            _ => panic!("elem_name called on a non-element node"),
        }
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Attribute>,
        flags: ElementFlags,
    ) -> Handle {
        let data = if name.ns == ns!(html) && name.local == local_name!("script") {
            ElementData::Script(Cell::new(false))
        } else if name.ns == ns!(html) && name.local == local_name!("template") {
            ElementData::Template(new_handle(NodeData::Document))
        } else if name.expanded() == expanded_name!(mathml "annotation-xml") {
            let is_html_integration_point = attrs.iter().any(|attr| {
                attr.name.expanded() == expanded_name!("", "encoding")
                    && (attr.value.eq_ignore_ascii_case("text/html")
                        || attr.value.eq_ignore_ascii_case("application/xhtml+xml"))
            });
            ElementData::AnnotationXml(is_html_integration_point)
        } else {
            let _ = flags;
            ElementData::Normal
        };
        new_handle(NodeData::Element {
            name,
            data,
            attrs: RefCell::new(attrs),
        })
    }

    fn create_comment(&self, text: StrTendril) -> Handle {
        new_handle(NodeData::Comment(text))
    }

    fn append(&self, parent: &Handle, child: NodeOrText<Handle>) {
        if let NodeOrText::Text(ref text) = child {
            if let Some(last) = parent.children.borrow().last() {
                if append_to_existing_text(last, text) {
                    return;
                }
            }
        }
        let node = match child {
            NodeOrText::Text(text) => new_handle(NodeData::Text(RefCell::new(text))),
            NodeOrText::Node(node) => node,
        };
        append(parent, node);
    }

    fn append_before_sibling(&self, sibling: &Handle, child: NodeOrText<Handle>) {
        let (parent, i) = get_parent_and_index(sibling)
            .expect("append_before_sibling called on a node without a parent");

        let child = match (child, i) {
            (NodeOrText::Text(text), 0) => new_handle(NodeData::Text(RefCell::new(text))),
            (NodeOrText::Text(text), i) => {
                let children = parent.children.borrow();
                let prev = &children[i - 1];
                if append_to_existing_text(prev, &text) {
                    return;
                }
                new_handle(NodeData::Text(RefCell::new(text)))
            },
            (NodeOrText::Node(node), _) => node,
        };

        detach(&child);
        child.parent.set(Some(Rc::downgrade(&parent.0)));
        parent.children.borrow_mut().insert(i, child);
    }

    fn append_based_on_parent_node(
        &self,
        element: &Handle,
        prev_element: &Handle,
        child: NodeOrText<Handle>,
    ) {
        if get_parent_and_index(element).is_some() {
            self.append_before_sibling(element, child);
        } else {
            self.append(prev_element, child);
        }
    }

    fn append_doctype_to_document(
        &self,
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    ) {
        append(
            &self.document,
            new_handle(NodeData::Doctype {
                name,
                public_id,
                system_id,
            }),
        );
    }

    fn set_quirks_mode(&self, mode: QuirksMode) {
        self.quirks_mode.set(mode);
    }

    fn add_attrs_if_missing(&self, target: &Handle, attrs: Vec<Attribute>) {
        let mut existing = match &target.data {
            NodeData::Element { attrs, .. } => attrs.borrow_mut(),
            _ => panic!("add_attrs_if_missing called on a non-element node"),
        };
        let existing_names = existing
            .iter()
            .map(|attr| attr.name.clone())
            .collect::<HashSet<_>>();
        existing.extend(
            attrs
                .into_iter()
                .filter(|attr| !existing_names.contains(&attr.name)),
        );
    }

    fn remove_from_parent(&self, target: &Handle) {
        detach(target);
    }

    fn reparent_children(&self, node: &Handle, new_parent: &Handle) {
        let mut children = node.children.borrow_mut();
        for child in children.iter() {
            let previous = child
                .parent
                .replace(Some(Rc::downgrade(&new_parent.0)))
                .expect("reparented child had no parent");
            assert!(Rc::ptr_eq(
                &node.0,
                &previous.upgrade().expect("dangling weak pointer")
            ));
        }
        new_parent
            .children
            .borrow_mut()
            .extend(std::mem::take(&mut *children));
    }

    fn has_parent(&self, target: &Handle) -> bool {
        let parent = target.parent.take();
        let has_parent = parent.is_some();
        target.parent.set(parent);
        has_parent
    }

    fn mark_script_already_started(&self, node: &Handle) {
        match &node.data {
            NodeData::Element {
                data: ElementData::Script(already_started),
                ..
            } => already_started.set(true),
            _ => panic!("mark_script_already_started called on a non-script element"),
        }
    }

    fn is_mathml_annotation_xml_integration_point(&self, handle: &Handle) -> bool {
        match &handle.data {
            NodeData::Element {
                data: ElementData::AnnotationXml(is_integration_point),
                ..
            } => *is_integration_point,
            _ => false,
        }
    }

    fn get_node_source_span(&self, node: &Handle) -> Option<SourceSpan> {
        *node.source_span.borrow()
    }

    fn set_node_source_span(&self, node: &Handle, span: SourceSpan) {
        *node.source_span.borrow_mut() = Some(span);
    }

    fn update_node_source_span_end(&self, node: &Handle, end: Bounds) {
        let mut span = node.source_span.borrow_mut();
        if let Some(span) = span.as_mut() {
            span.end = end;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::NodeOrText;

    fn html_name(local: &str) -> QualName {
        QualName::new(None, ns!(html), local.into())
    }

    #[test]
    fn appends_merge_adjacent_text_nodes() {
        let dom = Rcdom::default();
        let body = dom.create_element(html_name("body"), vec![], ElementFlags::default());
        dom.append(&body, NodeOrText::Text("hello ".into()));
        dom.append(&body, NodeOrText::Text("world".into()));
        assert_eq!(body.children.borrow().len(), 1);
        match &body.children.borrow()[0].data {
            NodeData::Text(text) => assert_eq!(&**text.borrow(), "hello world"),
            _ => panic!("expected a text node"),
        }
    }

    #[test]
    fn reparent_children_moves_every_child() {
        let dom = Rcdom::default();
        let div = dom.create_element(html_name("div"), vec![], ElementFlags::default());
        let span = dom.create_element(html_name("span"), vec![], ElementFlags::default());
        dom.append(&div, NodeOrText::Node(span.clone()));

        let new_parent = dom.create_element(html_name("p"), vec![], ElementFlags::default());
        dom.reparent_children(&div, &new_parent);

        assert!(div.children.borrow().is_empty());
        assert_eq!(new_parent.children.borrow().len(), 1);
        assert!(dom.same_node(&new_parent.children.borrow()[0], &span));
    }

    #[test]
    fn template_contents_is_a_separate_document_fragment() {
        let dom = Rcdom::default();
        let template = dom.create_element(
            html_name("template"),
            vec![],
            ElementFlags {
                template: true,
                ..ElementFlags::default()
            },
        );
        let contents = dom.get_template_contents(&template);
        assert!(!dom.same_node(&contents, &template));
        assert!(matches!(&contents.data, NodeData::Document));
    }
}
