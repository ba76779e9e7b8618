// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! End-to-end tree-construction scenarios, driven through the bundled
//! [`Rcdom`] adapter with hand-built token streams (tokenizing HTML is out
//! of scope for this crate; see `token::ReplayTokenSource`).

use html5tree::error::DiscardErrors;
use html5tree::location::SourceSpan;
use html5tree::rcdom::{ElementData, NodeData, Rcdom};
use html5tree::token::{Doctype, ReplayTokenSource, Tag, TagKind, Token, TokenSourceResult};
use html5tree::{ns, Attribute, ElementFlags, Parser, ParserOptions, QualName, TreeAdapter};

fn start(name: &str) -> Token {
    Token::Tag(Tag::new(TagKind::StartTag, name.into(), false))
}

fn end(name: &str) -> Token {
    Token::Tag(Tag::new(TagKind::EndTag, name.into(), false))
}

fn start_with_attr(name: &str, attr_name: &str, attr_value: &str) -> Token {
    let mut tag = Tag::new(TagKind::StartTag, name.into(), false);
    tag.attrs.push(Attribute {
        name: QualName::new(None, ns!(), attr_name.into()),
        value: attr_value.into(),
    });
    Token::Tag(tag)
}

fn text(s: &str) -> Token {
    Token::Character(s.into(), SourceSpan::default())
}

fn eof() -> Token {
    Token::Eof(SourceSpan::default())
}

/// An element's local name, or `None` if `handle` isn't an element.
fn local_name(handle: &html5tree::rcdom::Handle) -> Option<String> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

fn text_content(handle: &html5tree::rcdom::Handle) -> Option<String> {
    match &handle.data {
        NodeData::Text(text) => Some(text.borrow().to_string()),
        _ => None,
    }
}

fn child_named<'a>(
    parent: &'a html5tree::rcdom::Handle,
    name: &str,
) -> Option<html5tree::rcdom::Handle> {
    parent
        .children
        .borrow()
        .iter()
        .find(|child| local_name(child).as_deref() == Some(name))
        .cloned()
}

fn run_to_completion(parser: &Parser<Rcdom>, tokens: Vec<Token>) {
    let mut source = ReplayTokenSource::new(tokens);
    let result = parser.run(&mut source);
    assert_eq!(result, TokenSourceResult::Suspend);
}

#[test]
fn basic_document() {
    let dom = Rcdom::default();
    let parser = Parser::new(dom, ParserOptions::default());

    run_to_completion(
        &parser,
        vec![
            Token::Doctype(Doctype {
                name: Some("html".into()),
                ..Default::default()
            }),
            start("html"),
            start("head"),
            end("head"),
            start("body"),
            text("Hi there!"),
            end("body"),
            end("html"),
            eof(),
        ],
    );

    let dom = parser.finish();
    assert!(matches!(
        &dom.document.children.borrow()[0].data,
        NodeData::Doctype { .. }
    ));

    let html = child_named(&dom.document, "html").expect("html element");
    let children = html.children.borrow();
    assert_eq!(local_name(&children[0]).as_deref(), Some("head"));
    assert_eq!(local_name(&children[1]).as_deref(), Some("body"));

    let body = &children[1];
    assert_eq!(body.children.borrow().len(), 1);
    assert_eq!(
        text_content(&body.children.borrow()[0]).as_deref(),
        Some("Hi there!")
    );
}

#[test]
fn adoption_agency_misnesting() {
    // <p>1<b>2<i>3</b>4</i>5</p>
    let dom = Rcdom::default();
    let parser = Parser::new(dom, ParserOptions::default());

    run_to_completion(
        &parser,
        vec![
            start("p"),
            text("1"),
            start("b"),
            text("2"),
            start("i"),
            text("3"),
            end("b"),
            text("4"),
            end("i"),
            text("5"),
            end("p"),
            eof(),
        ],
    );

    let dom = parser.finish();
    let html = child_named(&dom.document, "html").expect("html element");
    let body = child_named(&html, "body").expect("body element");
    let p = child_named(&body, "p").expect("p element");
    let p_children = p.children.borrow();

    assert_eq!(text_content(&p_children[0]).as_deref(), Some("1"));

    assert_eq!(local_name(&p_children[1]).as_deref(), Some("b"));
    let b_children = p_children[1].children.borrow();
    assert_eq!(text_content(&b_children[0]).as_deref(), Some("2"));
    assert_eq!(local_name(&b_children[1]).as_deref(), Some("i"));
    assert_eq!(
        text_content(&b_children[1].children.borrow()[0]).as_deref(),
        Some("3")
    );

    assert_eq!(local_name(&p_children[2]).as_deref(), Some("i"));
    assert_eq!(
        text_content(&p_children[2].children.borrow()[0]).as_deref(),
        Some("4")
    );

    assert_eq!(text_content(&p_children[3]).as_deref(), Some("5"));
}

#[test]
fn foster_parenting_out_of_table() {
    // <table>a<tr><td>b</td></tr></table>
    let dom = Rcdom::default();
    let parser = Parser::new(dom, ParserOptions::default());

    run_to_completion(
        &parser,
        vec![
            start("table"),
            text("a"),
            start("tr"),
            start("td"),
            text("b"),
            end("td"),
            end("tr"),
            end("table"),
            eof(),
        ],
    );

    let dom = parser.finish();
    let html = child_named(&dom.document, "html").expect("html element");
    let body = child_named(&html, "body").expect("body element");
    let body_children = body.children.borrow();

    assert_eq!(text_content(&body_children[0]).as_deref(), Some("a"));
    assert_eq!(local_name(&body_children[1]).as_deref(), Some("table"));

    let table = &body_children[1];
    let tbody = child_named(table, "tbody").expect("foster-inserted tbody");
    let tr = child_named(&tbody, "tr").expect("tr");
    let td = child_named(&tr, "td").expect("td");
    assert_eq!(
        text_content(&td.children.borrow()[0]).as_deref(),
        Some("b")
    );
}

#[test]
fn noahs_ark_limits_formatting_reconstruction_but_not_tree_shape() {
    // <p><b id=x>1<b id=x>2<b id=x>3<b id=x>4</p>
    let dom = Rcdom::default();
    let parser = Parser::new(dom, ParserOptions::default());

    run_to_completion(
        &parser,
        vec![
            start("p"),
            start_with_attr("b", "id", "x"),
            text("1"),
            start_with_attr("b", "id", "x"),
            text("2"),
            start_with_attr("b", "id", "x"),
            text("3"),
            start_with_attr("b", "id", "x"),
            text("4"),
            end("p"),
            eof(),
        ],
    );

    let dom = parser.finish();
    let html = child_named(&dom.document, "html").expect("html element");
    let body = child_named(&html, "body").expect("body element");
    let p = child_named(&body, "p").expect("p element");

    let mut node = p;
    for expected_text in ["1", "2", "3", "4"] {
        let b = child_named(&node, "b").expect("nested <b id=x>");
        assert_eq!(
            match &b.data {
                NodeData::Element { attrs, .. } => attrs
                    .borrow()
                    .iter()
                    .find(|a| &*a.name.local == "id")
                    .map(|a| a.value.to_string()),
                _ => None,
            }
            .as_deref(),
            Some("x")
        );
        assert_eq!(
            text_content(&b.children.borrow()[0]).as_deref(),
            Some(expected_text)
        );
        node = b;
    }
}

#[test]
fn fragment_parsing_in_table_context() {
    let dom = Rcdom::default();
    let context = dom.create_element(
        QualName::new(None, ns!(html), "table".into()),
        vec![],
        ElementFlags::default(),
    );
    let parser =
        Parser::new_for_fragment(dom, context, None, ParserOptions::default(), Box::new(DiscardErrors));

    run_to_completion(
        &parser,
        vec![start("td"), text("x"), end("td"), eof()],
    );

    let dom = parser.finish();
    let root = child_named(&dom.document, "html").expect("synthetic fragment root");
    let tbody = child_named(&root, "tbody").expect("phantom tbody");
    let tr = child_named(&tbody, "tr").expect("phantom tr");
    let td = child_named(&tr, "td").expect("td");
    assert_eq!(
        text_content(&td.children.borrow()[0]).as_deref(),
        Some("x")
    );
}

#[test]
fn script_pauses_parsing_and_resumes_afterward() {
    let dom = Rcdom::default();
    let parser = Parser::new(dom, ParserOptions::default());
    let mut source = ReplayTokenSource::new(vec![
        start("body"),
        start("script"),
        text("A"),
        end("script"),
        start("p"),
        text("B"),
        end("p"),
        eof(),
    ]);

    let pending = match parser.run(&mut source) {
        TokenSourceResult::Script(node) => node,
        other => panic!("expected a script pause, got {:?}", other),
    };
    assert_eq!(local_name(&pending).as_deref(), Some("script"));

    let result = parser.run(&mut source);
    assert_eq!(result, TokenSourceResult::Suspend);

    let dom = parser.finish();
    let html = child_named(&dom.document, "html").expect("html element");
    let body = child_named(&html, "body").expect("body element");
    let body_children = body.children.borrow();

    assert_eq!(local_name(&body_children[0]).as_deref(), Some("script"));
    assert!(matches!(
        &body_children[0].data,
        NodeData::Element {
            data: ElementData::Script(_),
            ..
        }
    ));
    assert_eq!(
        text_content(&body_children[0].children.borrow()[0]).as_deref(),
        Some("A")
    );

    assert_eq!(local_name(&body_children[1]).as_deref(), Some("p"));
    assert_eq!(
        text_content(&body_children[1].children.borrow()[0]).as_deref(),
        Some("B")
    );
}
