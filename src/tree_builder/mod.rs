// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The HTML5 tree builder: the insertion-mode state machine, driven by
//! tokens pulled from a [`TokenSource`](crate::token::TokenSource) and
//! applied to a [`TreeAdapter`](crate::interface::TreeAdapter).
//!
//! Grounded throughout on the teacher's `TreeBuilder<Handle, Sink>` in
//! `html5ever`'s own `tree_builder/mod.rs`: the field layout, the
//! `process_to_completion` dispatch loop, and every helper method below
//! (`insert_element`, `appropriate_place_for_insertion`, `adoption_agency`,
//! `reset_insertion_mode`, ...) are the same algorithm, generalized to this
//! crate's `TreeAdapter`/`TokenSource` boundary instead of html5ever's
//! `TreeSink`/`Tokenizer` boundary.

use std::cell::{Cell, Ref, RefCell};
use std::collections::VecDeque;

use log::{debug, log_enabled, warn, Level};
use markup5ever::{expanded_name, local_name, ns};

use crate::error::{DiscardErrors, ErrorCode, ErrorSink, ParseError};
use crate::interface::{
    create_element, Attribute, ElementFlags, NodeOrText, QuirksMode, TreeAdapter,
};
use crate::location::{Bounds, LocationTracker, NoLocations, SinkLocations, SourceSpan};
use crate::token::{
    self, Doctype, SplitStatus, Tag, TagId, TagKind, TokenSource, TokenSourceResult,
    TokenizerState,
};
use crate::{ExpandedName, LocalName, Namespace, QualName};

pub(crate) use self::types::{InsertionMode, InsertionPoint, ProcessResult, Token};
pub use formatting::{Bookmark, FormatEntry};
pub use open_elements::OpenElementStack;

mod tag_sets;

mod foreign;
mod formatting;
mod open_elements;
mod rules;
mod types;

use formatting::FormattingElementList;
use tag_sets::*;

/// Mirrors the teacher's `TreeBuilderOpts`, plus `source_code_location_info`
/// (spec.md §4.6) since this engine supports location tracking the teacher
/// leaves to its callers.
#[derive(Copy, Clone)]
pub struct ParserOptions {
    /// Report all parse errors with a human-readable `detail`, at some
    /// performance cost? Default: false.
    pub exact_errors: bool,

    /// Is scripting enabled? Affects whether `<noscript>` content is parsed
    /// as a single text node or as a normal subtree.
    pub scripting_enabled: bool,

    /// Is this document being parsed from the `srcdoc` attribute of an
    /// `<iframe>`? Affects DOCTYPE-driven quirks-mode heuristics.
    pub iframe_srcdoc: bool,

    /// Drop the DOCTYPE (if any) instead of appending it to the document?
    pub drop_doctype: bool,

    /// Initial quirks mode, before any DOCTYPE is seen.
    pub quirks_mode: QuirksMode,

    /// Track per-node source spans via `TreeAdapter`'s location hooks.
    pub source_code_location_info: bool,
}

impl Default for ParserOptions {
    fn default() -> ParserOptions {
        ParserOptions {
            exact_errors: false,
            scripting_enabled: true,
            iframe_srcdoc: false,
            drop_doctype: false,
            quirks_mode: QuirksMode::NoQuirks,
            source_code_location_info: false,
        }
    }
}

enum PushFlag {
    Push,
    NoPush,
}

/// The tree-construction engine. Generic over a host [`TreeAdapter`]; pulls
/// tokens from a caller-supplied [`TokenSource`] one at a time via
/// [`Parser::run`] or [`Parser::feed`].
pub struct Parser<Sink: TreeAdapter> {
    options: ParserOptions,
    sink: Sink,
    errors: RefCell<Box<dyn ErrorSink>>,

    mode: Cell<InsertionMode>,
    orig_mode: Cell<Option<InsertionMode>>,
    template_modes: RefCell<Vec<InsertionMode>>,
    pending_table_text: RefCell<Vec<(SplitStatus, tendril::StrTendril, SourceSpan)>>,
    quirks_mode: Cell<QuirksMode>,

    doc_handle: Sink::Handle,
    open_elems: RefCell<OpenElementStack<Sink::Handle>>,
    active_formatting: RefCell<FormattingElementList<Sink::Handle>>,

    head_elem: RefCell<Option<Sink::Handle>>,
    form_elem: RefCell<Option<Sink::Handle>>,

    frameset_ok: Cell<bool>,
    ignore_lf: Cell<bool>,
    foster_parenting: Cell<bool>,

    context_elem: RefCell<Option<Sink::Handle>>,
    current_line: Cell<u64>,
}

impl<Sink> Parser<Sink>
where
    Sink: TreeAdapter,
    Sink::Handle: Clone,
{
    pub fn new(sink: Sink, options: ParserOptions) -> Self {
        Self::new_with_errors(sink, options, Box::new(DiscardErrors))
    }

    pub fn new_with_errors(
        sink: Sink,
        options: ParserOptions,
        errors: Box<dyn ErrorSink>,
    ) -> Self {
        let doc_handle = sink.get_document();
        Parser {
            options,
            sink,
            errors: RefCell::new(errors),
            mode: Cell::new(InsertionMode::Initial),
            orig_mode: Cell::new(None),
            template_modes: Default::default(),
            pending_table_text: Default::default(),
            quirks_mode: Cell::new(options.quirks_mode),
            doc_handle,
            open_elems: Default::default(),
            active_formatting: Default::default(),
            head_elem: Default::default(),
            form_elem: Default::default(),
            frameset_ok: Cell::new(true),
            ignore_lf: Default::default(),
            foster_parenting: Default::default(),
            context_elem: Default::default(),
            current_line: Cell::new(1),
        }
    }

    /// <https://html.spec.whatwg.org/multipage/#concept-frag-parse-context>
    pub fn new_for_fragment(
        sink: Sink,
        context_elem: Sink::Handle,
        form_elem: Option<Sink::Handle>,
        options: ParserOptions,
        errors: Box<dyn ErrorSink>,
    ) -> Self {
        let doc_handle = sink.get_document();
        let context_is_template =
            sink.elem_name(&context_elem) == expanded_name!(html "template");
        let template_modes = if context_is_template {
            RefCell::new(vec![InsertionMode::InTemplate])
        } else {
            RefCell::new(vec![])
        };

        let p = Parser {
            options,
            sink,
            errors: RefCell::new(errors),
            mode: Cell::new(InsertionMode::Initial),
            orig_mode: Cell::new(None),
            template_modes,
            pending_table_text: Default::default(),
            quirks_mode: Cell::new(options.quirks_mode),
            doc_handle,
            open_elems: Default::default(),
            active_formatting: Default::default(),
            head_elem: Default::default(),
            form_elem: RefCell::new(form_elem),
            frameset_ok: Cell::new(true),
            ignore_lf: Default::default(),
            foster_parenting: Default::default(),
            context_elem: RefCell::new(Some(context_elem)),
            current_line: Cell::new(1),
        };

        // https://html.spec.whatwg.org/multipage/#parsing-html-fragments
        // Steps 5-7: a new root `<html>` element with the stack seeded.
        p.create_root(vec![]);
        // Step 10.
        let mode = p.reset_insertion_mode();
        p.mode.set(mode);
        p
    }

    /// <https://html.spec.whatwg.org/multipage/#concept-frag-parse-context>
    /// step 4: the tokenizer text state to enter for the context element.
    pub fn tokenizer_state_for_context_elem(
        &self,
        context_element_allows_scripting: bool,
    ) -> TokenizerState {
        let context_elem = self.context_elem.borrow();
        let elem = context_elem.as_ref().expect("no context element");
        let name = match self.sink.elem_name(elem) {
            ExpandedName {
                ns: &ns!(html),
                local,
            } => local,
            _ => return TokenizerState::Data,
        };
        match *name {
            local_name!("title") | local_name!("textarea") => TokenizerState::Rcdata,
            local_name!("style")
            | local_name!("xmp")
            | local_name!("iframe")
            | local_name!("noembed")
            | local_name!("noframes") => TokenizerState::Rawtext,
            local_name!("script") => TokenizerState::ScriptData,
            local_name!("noscript") => {
                if context_element_allows_scripting {
                    TokenizerState::Rawtext
                } else {
                    TokenizerState::Data
                }
            },
            local_name!("plaintext") => TokenizerState::Plaintext,
            _ => TokenizerState::Data,
        }
    }

    pub fn is_fragment(&self) -> bool {
        self.context_elem.borrow().is_some()
    }

    /// Consume the parser, handing back whatever the sink considers the
    /// parse result.
    pub fn finish(self) -> Sink::Output {
        self.sink.finish()
    }

    fn report(&self, code: ErrorCode, location: SourceSpan, detail: Option<String>) {
        self.errors.borrow_mut().report(ParseError {
            code,
            location,
            detail: if self.options.exact_errors { detail } else { None },
        });
    }

    /// Drive the parser to completion against a `TokenSource`, pulling
    /// tokens until `Hibernation` (end of available input) or `Eof`. Returns
    /// `TokenSourceResult::Script` if parsing paused for a `<script>`
    /// element the caller must now execute, mirroring spec.md §5.
    pub fn run(&self, source: &mut dyn TokenSource) -> TokenSourceResult<Sink::Handle> {
        loop {
            match source.next_token() {
                token::Token::Hibernation => return TokenSourceResult::Suspend,
                tok => match self.feed(tok, source) {
                    TokenSourceResult::Continue => continue,
                    other => return other,
                },
            }
        }
    }

    /// Feed a single token (pulled by the caller, e.g. for step-wise
    /// drivers/tests). `source` receives tokenizer-state writebacks
    /// (RCDATA/RAWTEXT/script-data switches, the CDATA-allowed flag).
    pub fn feed(
        &self,
        token: token::Token,
        source: &mut dyn TokenSource,
    ) -> TokenSourceResult<Sink::Handle> {
        if let token::Token::Hibernation = token {
            return TokenSourceResult::Suspend;
        }

        let ignore_lf = self.ignore_lf.take();

        let local_token = match token {
            token::Token::Doctype(dt) => {
                self.process_doctype(dt);
                return TokenSourceResult::Continue;
            },
            token::Token::Tag(tag) => Token::Tag(tag),
            token::Token::Comment(text, loc) => Token::Comment(text, loc),
            token::Token::NullCharacter(loc) => Token::NullCharacter(loc),
            token::Token::Eof(loc) => Token::Eof(loc),
            token::Token::Character(mut text, loc) => {
                if ignore_lf && text.starts_with('\n') {
                    text.pop_front(1);
                }
                if text.is_empty() {
                    return TokenSourceResult::Continue;
                }
                Token::Characters(SplitStatus::NotSplit, text, loc)
            },
            token::Token::Hibernation => unreachable!(),
        };

        self.process_to_completion(local_token, source)
    }

    fn process_doctype(&self, dt: Doctype) {
        if self.mode.get() == InsertionMode::Initial {
            let (err, quirk) =
                crate::quirks::classify_doctype(&dt, self.options.iframe_srcdoc);
            if err {
                self.report(ErrorCode::NonConformingDoctype, dt.location, None);
            }
            if !self.options.drop_doctype {
                self.sink.append_doctype_to_document(
                    dt.name.clone().unwrap_or_default(),
                    dt.public_id.clone().unwrap_or_default(),
                    dt.system_id.clone().unwrap_or_default(),
                );
            }
            self.set_quirks_mode(quirk);
            self.mode.set(InsertionMode::BeforeHtml);
        } else if self.mode.get() == InsertionMode::InBody {
            self.report(ErrorCode::DoctypeInBody, dt.location, None);
        } else {
            self.report(ErrorCode::MisplacedDoctype, dt.location, None);
        }
    }

    fn debug_step(&self, mode: InsertionMode, token: &Token) {
        if log_enabled!(Level::Debug) {
            debug!("processing {:?} in insertion mode {:?}", token, mode);
        }
    }

    fn process_to_completion(
        &self,
        mut token: Token,
        source: &mut dyn TokenSource,
    ) -> TokenSourceResult<Sink::Handle> {
        let mut more_tokens: VecDeque<Token> = VecDeque::new();

        loop {
            let should_ack_self_closing = matches!(
                token,
                Token::Tag(Tag {
                    self_closing: true,
                    kind: TagKind::StartTag,
                    ..
                })
            );
            self.debug_step(self.mode.get(), &token);
            let result = if self.is_in_foreign_content(&token) {
                self.step_foreign(token, source)
            } else {
                let mode = self.mode.get();
                self.step(mode, token, source)
            };
            match result {
                ProcessResult::Done => {
                    if should_ack_self_closing {
                        self.report(ErrorCode::NonVoidHtmlElementStartTagWithTrailingSolidus, SourceSpan::default(), None);
                    }
                    match more_tokens.pop_front() {
                        Some(t) => token = t,
                        None => return TokenSourceResult::Continue,
                    }
                },
                ProcessResult::DoneAckSelfClosing => match more_tokens.pop_front() {
                    Some(t) => token = t,
                    None => return TokenSourceResult::Continue,
                },
                ProcessResult::Reprocess(mode, t) => {
                    self.mode.set(mode);
                    token = t;
                },
                ProcessResult::ReprocessForeign(t) => {
                    token = t;
                },
                ProcessResult::SplitWhitespace(mut buf) => {
                    let Some((first, is_ws)) = buf.pop_front_char_run(|c| c.is_ascii_whitespace())
                    else {
                        return TokenSourceResult::Continue;
                    };
                    let status = if is_ws {
                        SplitStatus::Whitespace
                    } else {
                        SplitStatus::NotWhitespace
                    };
                    token = Token::Characters(status, first, SourceSpan::default());
                    if buf.len32() > 0 {
                        more_tokens.push_back(Token::Characters(
                            SplitStatus::NotSplit,
                            buf,
                            SourceSpan::default(),
                        ));
                    }
                },
                ProcessResult::Script(node) => {
                    debug_assert!(more_tokens.is_empty());
                    return TokenSourceResult::Script(node);
                },
                ProcessResult::ToPlaintext => {
                    debug_assert!(more_tokens.is_empty());
                    source.set_state(TokenizerState::Plaintext);
                    return TokenSourceResult::Continue;
                },
                ProcessResult::ToRawData(state) => {
                    debug_assert!(more_tokens.is_empty());
                    source.set_state(state);
                    return TokenSourceResult::Continue;
                },
            }
        }
    }

    fn set_quirks_mode(&self, mode: QuirksMode) {
        self.quirks_mode.set(mode);
        self.sink.set_quirks_mode(mode);
    }

    fn stop_parsing(&self) -> ProcessResult<Sink::Handle> {
        ProcessResult::Done
    }

    /// Switch to `Text` insertion mode, save the old mode, and ask the
    /// caller's `TokenSource` to switch to a raw-data tokenizer state. The
    /// latter only takes effect after the current token finishes processing.
    fn to_raw_text_mode(&self, state: TokenizerState) -> ProcessResult<Sink::Handle> {
        self.orig_mode.set(Some(self.mode.get()));
        self.mode.set(InsertionMode::Text);
        ProcessResult::ToRawData(state)
    }

    fn parse_raw_data(&self, tag: Tag, state: TokenizerState) -> ProcessResult<Sink::Handle> {
        self.insert_element_for(tag);
        self.to_raw_text_mode(state)
    }

    /// The `<body>` element, if the stack has one at index 1 (i.e. directly
    /// under `<html>`).
    fn body_elem(&self) -> Option<Ref<'_, Sink::Handle>> {
        if self.open_elems.borrow().len() <= 1 {
            return None;
        }
        let node = Ref::map(self.open_elems.borrow(), |elems| &elems[1]);
        if self.html_elem_named(&node, local_name!("body")) {
            Some(node)
        } else {
            None
        }
    }

    //§ stack-and-location-bookkeeping

    fn locations(&self) -> SinkLocations<'_, Sink> {
        SinkLocations { sink: &self.sink }
    }

    fn push(&self, elem: &Sink::Handle, start_tag_location: SourceSpan) {
        self.open_elems.borrow_mut().push(elem.clone());
        if self.options.source_code_location_info {
            self.locations().on_push(elem, start_tag_location);
        }
    }

    fn pop(&self) -> Sink::Handle {
        let elem = self
            .open_elems
            .borrow_mut()
            .pop()
            .expect("no current element");
        self.sink.pop(&elem);
        if self.options.source_code_location_info {
            self.locations().on_pop(&elem, SourceSpan::default());
        }
        elem
    }

    fn remove_from_stack(&self, elem: &Sink::Handle) {
        let same_node = |a: &Sink::Handle, b: &Sink::Handle| self.sink.same_node(a, b);
        if self.open_elems.borrow().contains(&same_node, elem) {
            self.open_elems.borrow_mut().remove(&same_node, elem);
            self.sink.pop(elem);
        }
    }

    fn current_node(&self) -> Ref<'_, Sink::Handle> {
        Ref::map(self.open_elems.borrow(), |s| s.current())
    }

    fn html_elem(&self) -> Ref<'_, Sink::Handle> {
        Ref::map(self.open_elems.borrow(), |s| s.html_elem())
    }

    fn adjusted_current_node(&self) -> Ref<'_, Sink::Handle> {
        if self.open_elems.borrow().is_root_html_element_current() {
            let context_elem = self.context_elem.borrow();
            if let Ok(ctx) = Ref::filter_map(context_elem, |e| e.as_ref()) {
                return ctx;
            }
        }
        self.current_node()
    }

    fn elem_in<TagSet>(&self, elem: &Sink::Handle, set: TagSet) -> bool
    where
        TagSet: Fn(ExpandedName) -> bool,
    {
        set(self.sink.elem_name(elem))
    }

    fn current_node_in<TagSet>(&self, set: TagSet) -> bool
    where
        TagSet: Fn(ExpandedName) -> bool,
    {
        self.elem_in(&self.current_node(), set)
    }

    fn html_elem_named(&self, elem: &Sink::Handle, name: LocalName) -> bool {
        let n = self.sink.elem_name(elem);
        *n.ns == ns!(html) && *n.local == name
    }

    fn in_html_elem_named(&self, name: LocalName) -> bool {
        self.open_elems
            .borrow()
            .iter()
            .any(|elem| self.html_elem_named(elem, name.clone()))
    }

    fn current_node_named(&self, name: LocalName) -> bool {
        self.html_elem_named(&self.current_node(), name)
    }

    fn in_scope<TagSet, Pred>(&self, scope: TagSet, pred: Pred) -> bool
    where
        TagSet: Fn(ExpandedName) -> bool,
        Pred: Fn(&Sink::Handle) -> bool,
    {
        self.open_elems
            .borrow()
            .has_in_scope(&self.sink, scope, pred)
    }

    fn in_scope_named<TagSet>(&self, scope: TagSet, name: LocalName) -> bool
    where
        TagSet: Fn(ExpandedName) -> bool,
    {
        self.open_elems
            .borrow()
            .has_in_scope_named(&self.sink, scope, &name)
    }

    fn has_numbered_header_in_scope(&self) -> bool {
        self.open_elems
            .borrow()
            .has_numbered_header_in_scope(&self.sink)
    }

    /// <https://html.spec.whatwg.org/#generate-implied-end-tags>
    fn generate_implied_end_tags<TagSet>(&self, set: TagSet)
    where
        TagSet: Fn(ExpandedName) -> bool,
    {
        self.open_elems
            .borrow_mut()
            .generate_implied_end_tags(&self.sink, set);
    }

    fn generate_implied_end_except(&self, except: LocalName) {
        self.open_elems
            .borrow_mut()
            .generate_implied_end_tags_except(&self.sink, &except);
    }

    fn pop_until_current<TagSet>(&self, tag_set: TagSet)
    where
        TagSet: Fn(ExpandedName) -> bool,
    {
        self.open_elems
            .borrow_mut()
            .pop_until_current(&self.sink, tag_set);
    }

    fn pop_until<P>(&self, pred: P) -> usize
    where
        P: Fn(ExpandedName) -> bool,
    {
        self.open_elems.borrow_mut().pop_until(&self.sink, pred)
    }

    fn pop_until_named(&self, name: LocalName) -> usize {
        self.pop_until(|p| *p.ns == ns!(html) && *p.local == name)
    }

    fn expect_to_close(&self, name: LocalName) {
        if self.pop_until_named(name) != 1 {
            self.report(ErrorCode::ClosingOfElementWithOpenChildElements, SourceSpan::default(), None);
        }
    }

    fn close_p_element(&self) {
        declare_tag_set!(implied = [cursory_implied_end] - "p");
        self.generate_implied_end_tags(implied);
        self.expect_to_close(local_name!("p"));
    }

    fn close_p_element_in_button_scope(&self) {
        if self.in_scope_named(button_scope, local_name!("p")) {
            self.close_p_element();
        }
    }

    fn is_type_hidden(&self, tag: &Tag) -> bool {
        match tag.get_attribute(&local_name!("type")) {
            None => false,
            Some(v) => v.eq_ignore_ascii_case("hidden"),
        }
    }

    fn check_body_end(&self) {
        for elem in self.open_elems.borrow().iter() {
            let name = self.sink.elem_name(elem);
            if body_end_ok(name) {
                continue;
            }
            self.report(ErrorCode::UnexpectedOpenElementAtEndOfBody, SourceSpan::default(), None);
            return;
        }
    }

    //§ foster-parenting

    /// <https://html.spec.whatwg.org/multipage/#appropriate-place-for-inserting-a-node>
    fn appropriate_place_for_insertion(
        &self,
        override_target: Option<Sink::Handle>,
    ) -> InsertionPoint<Sink::Handle> {
        let target = override_target.unwrap_or_else(|| self.current_node().clone());
        if !(self.foster_parenting.get() && self.elem_in(&target, foster_target)) {
            if self.html_elem_named(&target, local_name!("template")) {
                let contents = self.sink.get_template_contents(&target);
                return InsertionPoint::LastChild(contents);
            }
            return InsertionPoint::LastChild(target);
        }

        let open_elems = self.open_elems.borrow();
        let mut iter = open_elems.iter().rev().peekable();
        while let Some(elem) = iter.next() {
            if self.html_elem_named(elem, local_name!("template")) {
                let contents = self.sink.get_template_contents(elem);
                return InsertionPoint::LastChild(contents);
            } else if self.html_elem_named(elem, local_name!("table")) {
                return InsertionPoint::TableFosterParenting {
                    element: elem.clone(),
                    prev_element: (*iter.peek().unwrap()).clone(),
                };
            }
        }
        InsertionPoint::LastChild(open_elems.html_elem().clone())
    }

    fn insert_at(&self, point: InsertionPoint<Sink::Handle>, child: NodeOrText<Sink::Handle>) {
        match point {
            InsertionPoint::LastChild(parent) => self.sink.append(&parent, child),
            InsertionPoint::BeforeSibling(sibling) => {
                self.sink.append_before_sibling(&sibling, child)
            },
            InsertionPoint::TableFosterParenting {
                element,
                prev_element,
            } => self
                .sink
                .append_based_on_parent_node(&element, &prev_element, child),
        }
    }

    fn insert_appropriately(&self, child: NodeOrText<Sink::Handle>, override_target: Option<Sink::Handle>) {
        let point = self.appropriate_place_for_insertion(override_target);
        self.insert_at(point, child);
    }

    fn foster_parent_in_body(
        &self,
        token: Token,
        source: &mut dyn TokenSource,
    ) -> ProcessResult<Sink::Handle> {
        warn!("foster parenting triggered");
        self.foster_parenting.set(true);
        let res = self.step(InsertionMode::InBody, token, source);
        self.foster_parenting.set(false);
        res
    }

    fn process_chars_in_table(
        &self,
        token: Token,
        source: &mut dyn TokenSource,
    ) -> ProcessResult<Sink::Handle> {
        if self.current_node_in(table_outer) {
            debug_assert!(self.pending_table_text.borrow().is_empty());
            self.orig_mode.set(Some(self.mode.get()));
            ProcessResult::Reprocess(InsertionMode::InTableText, token)
        } else {
            self.report(ErrorCode::UnexpectedCharacterInTable, SourceSpan::default(), None);
            self.foster_parent_in_body(token, source)
        }
    }

    //§ the-insertion-mode-reset-algorithm
    fn reset_insertion_mode(&self) -> InsertionMode {
        let open_elems = self.open_elems.borrow();
        for i in (0..open_elems.len()).rev() {
            let last = i == 0;
            let context_elem = self.context_elem.borrow();
            let node = if last {
                context_elem.as_ref().unwrap_or(&open_elems[i])
            } else {
                &open_elems[i]
            };
            let elem_name = self.sink.elem_name(node);
            let name = match elem_name {
                ExpandedName {
                    ns: &ns!(html),
                    local,
                } => local,
                _ => continue,
            };
            match *name {
                local_name!("select") => {
                    for ancestor in open_elems.as_slice()[0..i].iter().rev() {
                        if self.html_elem_named(ancestor, local_name!("template")) {
                            return InsertionMode::InSelect;
                        } else if self.html_elem_named(ancestor, local_name!("table")) {
                            return InsertionMode::InSelectInTable;
                        }
                    }
                    return InsertionMode::InSelect;
                },
                local_name!("td") | local_name!("th") => {
                    if !last {
                        return InsertionMode::InCell;
                    }
                },
                local_name!("tr") => return InsertionMode::InRow,
                local_name!("tbody") | local_name!("thead") | local_name!("tfoot") => {
                    return InsertionMode::InTableBody;
                },
                local_name!("caption") => return InsertionMode::InCaption,
                local_name!("colgroup") => return InsertionMode::InColumnGroup,
                local_name!("table") => return InsertionMode::InTable,
                local_name!("template") => return *self.template_modes.borrow().last().unwrap(),
                local_name!("head") => {
                    if !last {
                        return InsertionMode::InHead;
                    }
                },
                local_name!("body") => return InsertionMode::InBody,
                local_name!("frameset") => return InsertionMode::InFrameset,
                local_name!("html") => {
                    return match *self.head_elem.borrow() {
                        None => InsertionMode::BeforeHead,
                        Some(_) => InsertionMode::AfterHead,
                    }
                },
                _ => (),
            }
        }
        InsertionMode::InBody
    }

    fn close_the_cell(&self) {
        self.generate_implied_end_tags(cursory_implied_end);
        if self.pop_until(td_th) != 1 {
            self.report(ErrorCode::ClosingOfElementWithOpenChildElements, SourceSpan::default(), None);
        }
        self.active_formatting.borrow_mut().clear_to_last_marker();
    }

    //§ creating-and-inserting-nodes

    fn append_text(&self, text: tendril::StrTendril, loc: SourceSpan) -> ProcessResult<Sink::Handle> {
        if self.options.source_code_location_info {
            let current = self.current_node().clone();
            self.locations().on_text(&current, loc);
        }
        self.insert_appropriately(NodeOrText::Text(text), None);
        ProcessResult::Done
    }

    fn append_comment(&self, text: tendril::StrTendril) -> ProcessResult<Sink::Handle> {
        let comment = self.sink.create_comment(text);
        self.insert_appropriately(NodeOrText::Node(comment), None);
        ProcessResult::Done
    }

    fn append_comment_to_doc(&self, text: tendril::StrTendril) -> ProcessResult<Sink::Handle> {
        let comment = self.sink.create_comment(text);
        self.sink.append(&self.doc_handle, NodeOrText::Node(comment));
        ProcessResult::Done
    }

    fn append_comment_to_html(&self, text: tendril::StrTendril) -> ProcessResult<Sink::Handle> {
        let target = self.html_elem().clone();
        let comment = self.sink.create_comment(text);
        self.sink.append(&target, NodeOrText::Node(comment));
        ProcessResult::Done
    }

    fn create_root(&self, attrs: Vec<Attribute>) {
        let elem = create_element(
            &self.sink,
            QualName::new(None, ns!(html), local_name!("html")),
            attrs,
            ElementFlags::default(),
        );
        self.push(&elem, SourceSpan::default());
        self.sink.append(&self.doc_handle, NodeOrText::Node(elem));
    }

    /// <https://html.spec.whatwg.org/multipage/#create-an-element-for-the-token>
    fn insert_element(
        &self,
        push: PushFlag,
        ns: Namespace,
        name: LocalName,
        attrs: Vec<Attribute>,
        location: SourceSpan,
    ) -> Sink::Handle {
        let qname = QualName::new(None, ns, name);
        let elem = create_element(
            &self.sink,
            qname.clone(),
            attrs.clone(),
            ElementFlags::default(),
        );

        let insertion_point = self.appropriate_place_for_insertion(None);
        let (node1, node2) = match &insertion_point {
            InsertionPoint::LastChild(p) | InsertionPoint::BeforeSibling(p) => (p.clone(), None),
            InsertionPoint::TableFosterParenting {
                element,
                prev_element,
            } => (element.clone(), Some(prev_element.clone())),
        };

        if form_associatable(qname.expanded())
            && self.form_elem.borrow().is_some()
            && !self.in_html_elem_named(local_name!("template"))
            && !(listed_form_associatable(qname.expanded())
                && attrs.iter().any(|a| a.name.expanded() == expanded_name!("", "form")))
        {
            let form = self.form_elem.borrow().as_ref().unwrap().clone();
            self.sink
                .associate_with_form(&elem, &form, (&node1, node2.as_ref()));
        }

        self.insert_at(insertion_point, NodeOrText::Node(elem.clone()));

        match push {
            PushFlag::Push => self.push(&elem, location),
            PushFlag::NoPush => {
                if self.options.source_code_location_info {
                    self.locations().on_push(&elem, location);
                    self.locations().on_pop(&elem, location);
                }
            },
        }
        elem
    }

    fn insert_element_for(&self, tag: Tag) -> Sink::Handle {
        let loc = tag.location;
        self.insert_element(PushFlag::Push, ns!(html), tag.name, tag.attrs, loc)
    }

    fn insert_and_pop_element_for(&self, tag: Tag) -> Sink::Handle {
        let loc = tag.location;
        self.insert_element(PushFlag::NoPush, ns!(html), tag.name, tag.attrs, loc)
    }

    fn insert_phantom(&self, name: LocalName) -> Sink::Handle {
        self.insert_element(PushFlag::Push, ns!(html), name, vec![], SourceSpan::default())
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#insert-an-element-at-the-adjusted-insertion-location>
    fn insert_foreign_element(
        &self,
        tag: Tag,
        ns: Namespace,
        only_add_to_element_stack: bool,
    ) -> Sink::Handle {
        let adjusted_insertion_location = self.appropriate_place_for_insertion(None);
        let qname = QualName::new(None, ns, tag.name);
        let elem = create_element(
            &self.sink,
            qname,
            tag.attrs.clone(),
            ElementFlags::default(),
        );

        if !only_add_to_element_stack {
            self.insert_at(adjusted_insertion_location, NodeOrText::Node(elem.clone()));
        }
        self.push(&elem, tag.location);
        elem
    }

    /// <https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inhead>
    fn should_attach_declarative_shadow(&self, tag: &Tag) -> bool {
        let adjusted_insertion_location = self.appropriate_place_for_insertion(None);
        let intended_parent = match &adjusted_insertion_location {
            InsertionPoint::LastChild(p) | InsertionPoint::BeforeSibling(p) => p.clone(),
            InsertionPoint::TableFosterParenting { element, .. } => element.clone(),
        };

        let is_shadow_root_mode = tag.attrs.iter().any(|attr| {
            attr.name.local == local_name!("shadowrootmode")
                && (attr.value.as_ref() == "open" || attr.value.as_ref() == "closed")
        });
        let allow = self.sink.allow_declarative_shadow_roots(&intended_parent);
        let not_topmost = self.open_elems.borrow().len() > 1;

        is_shadow_root_mode && allow && not_topmost
    }

    fn attach_declarative_shadow(
        &self,
        tag: &Tag,
        shadow_host: &Sink::Handle,
        template: &Sink::Handle,
    ) -> bool {
        self.sink
            .attach_declarative_shadow(shadow_host, template, &tag.attrs)
    }

    //§ active-formatting-elements

    fn position_in_active_formatting(&self, elem: &Sink::Handle) -> Option<usize> {
        self.active_formatting
            .borrow()
            .position(|a, b| self.sink.same_node(a, b), elem)
    }

    fn clear_active_formatting_to_marker(&self) {
        self.active_formatting.borrow_mut().clear_to_last_marker();
    }

    fn create_formatting_element_for(&self, tag: Tag) -> Sink::Handle {
        let loc = tag.location;
        let elem = self.insert_element(
            PushFlag::Push,
            ns!(html),
            tag.name.clone(),
            tag.attrs.clone(),
            loc,
        );
        self.active_formatting
            .borrow_mut()
            .push_with_noahs_ark(elem.clone(), tag);
        elem
    }

    /// <https://html.spec.whatwg.org/#reconstruct-the-active-formatting-elements>
    fn reconstruct_active_formatting_elements(&self) {
        let open_elems = &self.open_elems;
        let sink = &self.sink;
        self.active_formatting.borrow_mut().reconstruct(
            |h| {
                let same_node = |a: &Sink::Handle, b: &Sink::Handle| sink.same_node(a, b);
                open_elems.borrow().contains(&same_node, h)
            },
            |tag| self.insert_element(PushFlag::Push, ns!(html), tag.name.clone(), tag.attrs.clone(), tag.location),
        );
    }

    /// <https://html.spec.whatwg.org/multipage/#adoption-agency-algorithm>
    fn adoption_agency(&self, subject: LocalName) {
        if self.current_node_named(subject.clone()) && self.position_in_active_formatting(&self.current_node()).is_none()
        {
            self.pop();
            return;
        }

        for _ in 0..8 {
            let maybe_fmt_entry = self
                .active_formatting
                .borrow()
                .iter_to_last_marker()
                .find(|&(_, _, tag)| tag.name == subject)
                .map(|(i, h, t)| (i, h.clone(), t.clone()));

            let Some((fmt_elem_index, fmt_elem, fmt_elem_tag)) = maybe_fmt_entry else {
                return self.process_end_tag_in_body(Tag::new(TagKind::EndTag, subject, false));
            };

            let same_node = |a: &Sink::Handle, b: &Sink::Handle| self.sink.same_node(a, b);

            let Some(fmt_elem_stack_index) = self.open_elems.borrow().rposition(|n| same_node(n, &fmt_elem)) else {
                self.report(ErrorCode::FormattingElementNotOpen, fmt_elem_tag.location, None);
                self.active_formatting.borrow_mut().remove_at(fmt_elem_index);
                return;
            };

            if !self.in_scope(default_scope, |n| same_node(n, &fmt_elem)) {
                self.report(ErrorCode::FormattingElementNotInScope, fmt_elem_tag.location, None);
                return;
            }

            if !same_node(&self.current_node(), &fmt_elem) {
                self.report(ErrorCode::FormattingElementNotCurrentNode, fmt_elem_tag.location, None);
            }

            let maybe_furthest_block = {
                let open_elems = self.open_elems.borrow();
                (fmt_elem_stack_index..open_elems.len())
                    .find(|&i| self.elem_in(&open_elems[i], special_tag))
                    .map(|i| (i, open_elems[i].clone()))
            };

            let Some((furthest_block_index, furthest_block)) = maybe_furthest_block else {
                self.open_elems.borrow_mut().shorten_to_length(fmt_elem_stack_index);
                self.active_formatting.borrow_mut().remove_at(fmt_elem_index);
                return;
            };

            let common_ancestor = self
                .open_elems
                .borrow()
                .common_ancestor(&self.sink, &fmt_elem)
                .expect("formatting element is not the root html element");
            let mut bookmark = Bookmark::Replace(fmt_elem.clone());

            let mut node;
            let mut node_index = furthest_block_index;
            let mut last_node = furthest_block.clone();
            let mut inner_counter = 0;
            loop {
                inner_counter += 1;
                node_index -= 1;
                node = self.open_elems.borrow()[node_index].clone();

                if same_node(&node, &fmt_elem) {
                    break;
                }

                if inner_counter > 3 {
                    if let Some(pos) = self.position_in_active_formatting(&node) {
                        self.active_formatting.borrow_mut().remove_at(pos);
                    }
                    self.open_elems.borrow_mut().remove_at(node_index);
                    continue;
                }

                let Some(node_formatting_index) = self.position_in_active_formatting(&node) else {
                    self.open_elems.borrow_mut().remove_at(node_index);
                    continue;
                };

                let tag = match self.active_formatting.borrow().get(node_formatting_index) {
                    FormatEntry::Element(h, t) => {
                        debug_assert!(same_node(h, &node));
                        t.clone()
                    },
                    FormatEntry::Marker => panic!("marker found during adoption agency"),
                };
                let new_element = create_element(
                    &self.sink,
                    QualName::new(None, ns!(html), tag.name.clone()),
                    tag.attrs.clone(),
                    ElementFlags::default(),
                );
                self.open_elems.borrow_mut().replace(node_index, new_element.clone());
                self.active_formatting
                    .borrow_mut()
                    .set(node_formatting_index, FormatEntry::Element(new_element.clone(), tag));
                node = new_element;

                if same_node(&last_node, &furthest_block) {
                    bookmark = Bookmark::InsertAfter(node.clone());
                }

                self.sink.remove_from_parent(&last_node);
                self.sink.append(&node, NodeOrText::Node(last_node.clone()));
                last_node = node.clone();
            }

            self.sink.remove_from_parent(&last_node);
            self.insert_appropriately(NodeOrText::Node(last_node.clone()), Some(common_ancestor));

            let new_element = create_element(
                &self.sink,
                QualName::new(None, ns!(html), fmt_elem_tag.name.clone()),
                fmt_elem_tag.attrs.clone(),
                ElementFlags::default(),
            );
            let new_entry = FormatEntry::Element(new_element.clone(), fmt_elem_tag);

            self.sink.reparent_children(&furthest_block, &new_element);
            self.sink.append(&furthest_block, NodeOrText::Node(new_element.clone()));

            match bookmark {
                Bookmark::Replace(to_replace) => {
                    let index = self
                        .position_in_active_formatting(&to_replace)
                        .expect("bookmark not found in active formatting elements");
                    self.active_formatting.borrow_mut().set(index, new_entry);
                },
                Bookmark::InsertAfter(previous) => {
                    let index = self
                        .position_in_active_formatting(&previous)
                        .expect("bookmark not found in active formatting elements")
                        + 1;
                    self.active_formatting.borrow_mut().insert_at(index, new_entry);
                    let old_index = self
                        .position_in_active_formatting(&fmt_elem)
                        .expect("formatting element missing from active formatting elements");
                    self.active_formatting.borrow_mut().remove_at(old_index);
                },
            }

            self.remove_from_stack(&fmt_elem);
            let new_furthest_block_index = self
                .open_elems
                .borrow()
                .position(|n| same_node(n, &furthest_block))
                .expect("furthest block missing from open element stack");
            self.open_elems
                .borrow_mut()
                .insert_at(new_furthest_block_index + 1, new_element);
        }
    }

    /// <https://html.spec.whatwg.org/multipage/#parsing-main-inbody>, the
    /// "any other end tag" catch-all.
    fn process_end_tag_in_body(&self, tag: Tag) {
        let mut match_idx = None;
        for (i, elem) in self.open_elems.borrow().iter().enumerate().rev() {
            if self.html_elem_named(elem, tag.name.clone()) {
                match_idx = Some(i);
                break;
            }
            if self.elem_in(elem, special_tag) {
                self.report(ErrorCode::SpecialTagWhileClosingGenericTag, tag.location, None);
                return;
            }
        }

        let Some(match_idx) = match_idx else {
            self.unexpected(&tag, tag.location);
            return;
        };

        self.generate_implied_end_except(tag.name.clone());

        if match_idx != self.open_elems.borrow().len() - 1 {
            self.unexpected(&tag, tag.location);
        }
        self.open_elems.borrow_mut().shorten_to_length(match_idx);
    }

    fn handle_misnested_a_tags(&self, tag: &Tag) {
        let Some(node) = self
            .active_formatting
            .borrow()
            .iter_to_last_marker()
            .find(|&(_, n, _)| self.html_elem_named(n, local_name!("a")))
            .map(|(_, n, _)| n.clone())
        else {
            return;
        };

        self.unexpected(tag, tag.location);
        self.adoption_agency(local_name!("a"));
        if let Some(index) = self.position_in_active_formatting(&node) {
            self.active_formatting.borrow_mut().remove_at(index);
        }
        self.remove_from_stack(&node);
    }

    //§ foreign-content

    fn is_in_foreign_content(&self, token: &Token) -> bool {
        if self.open_elems.borrow().is_empty() {
            return false;
        }
        let current = self.adjusted_current_node();
        let name = self.sink.elem_name(&current);
        if *name.ns == ns!(html) {
            return false;
        }

        if foreign::mathml_text_integration_point(name) {
            match token {
                Token::Characters(..) | Token::NullCharacter(..) => return false,
                Token::Tag(Tag {
                    kind: TagKind::StartTag,
                    name: n,
                    ..
                }) if !matches!(*n, local_name!("mglyph") | local_name!("malignmark")) => {
                    return false
                },
                _ => (),
            }
        }

        if foreign::svg_html_integration_point(name) {
            match token {
                Token::Characters(..) | Token::NullCharacter(..) => return false,
                Token::Tag(Tag {
                    kind: TagKind::StartTag,
                    ..
                }) => return false,
                _ => (),
            }
        }

        if let expanded_name!(mathml "annotation-xml") = name {
            match token {
                Token::Tag(Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("svg"),
                    ..
                }) => return false,
                Token::Characters(..)
                | Token::NullCharacter(..)
                | Token::Tag(Tag {
                    kind: TagKind::StartTag,
                    ..
                }) => {
                    return !self
                        .sink
                        .is_mathml_annotation_xml_integration_point(&self.adjusted_current_node());
                },
                _ => {},
            }
        }

        true
    }

    fn enter_foreign(&self, mut tag: Tag, ns: Namespace) -> ProcessResult<Sink::Handle> {
        match ns {
            ns!(mathml) => self.adjust_mathml_attributes(&mut tag),
            ns!(svg) => self.adjust_svg_attributes(&mut tag),
            _ => (),
        }
        self.adjust_foreign_attributes(&mut tag);

        if tag.self_closing {
            self.insert_element(PushFlag::NoPush, ns, tag.name, tag.attrs, tag.location);
            ProcessResult::DoneAckSelfClosing
        } else {
            self.insert_element(PushFlag::Push, ns, tag.name, tag.attrs, tag.location);
            ProcessResult::Done
        }
    }

    fn adjust_svg_tag_name(&self, tag: &mut Tag) {
        if let Some(replacement) = foreign::adjust_svg_tag_name(&tag.name) {
            tag.name = replacement;
        }
    }

    fn adjust_attributes<F>(&self, tag: &mut Tag, mut map: F)
    where
        F: FnMut(&LocalName) -> Option<QualName>,
    {
        for attr in &mut tag.attrs {
            if let Some(replacement) = map(&attr.name.local) {
                attr.name = replacement;
            }
        }
    }

    fn adjust_svg_attributes(&self, tag: &mut Tag) {
        self.adjust_attributes(tag, foreign::adjust_svg_attribute_name);
    }

    fn adjust_mathml_attributes(&self, tag: &mut Tag) {
        self.adjust_attributes(tag, foreign::adjust_mathml_attribute_name);
    }

    fn adjust_foreign_attributes(&self, tag: &mut Tag) {
        self.adjust_attributes(tag, foreign::adjust_foreign_attribute_name);
    }

    fn foreign_start_tag(&self, mut tag: Tag) -> ProcessResult<Sink::Handle> {
        let current_ns = self.sink.elem_name(&self.adjusted_current_node()).ns.clone();
        match current_ns {
            ns!(mathml) => self.adjust_mathml_attributes(&mut tag),
            ns!(svg) => {
                self.adjust_svg_tag_name(&mut tag);
                self.adjust_svg_attributes(&mut tag);
            },
            _ => (),
        }
        self.adjust_foreign_attributes(&mut tag);
        let loc = tag.location;
        if tag.self_closing {
            self.insert_element(PushFlag::NoPush, current_ns, tag.name, tag.attrs, loc);
            ProcessResult::DoneAckSelfClosing
        } else {
            self.insert_element(PushFlag::Push, current_ns, tag.name, tag.attrs, loc);
            ProcessResult::Done
        }
    }

    fn unexpected_start_tag_in_foreign_content(
        &self,
        tag: Tag,
        source: &mut dyn TokenSource,
    ) -> ProcessResult<Sink::Handle> {
        self.report(ErrorCode::UnexpectedTokenInForeignContent, tag.location, None);
        while !self.current_node_in(|n| {
            *n.ns == ns!(html)
                || foreign::mathml_text_integration_point(n)
                || foreign::svg_html_integration_point(n)
        }) {
            self.pop();
        }
        let mode = self.mode.get();
        self.step(mode, Token::Tag(tag), source)
    }

    fn unexpected<T: std::fmt::Debug>(&self, thing: &T, location: SourceSpan) -> ProcessResult<Sink::Handle> {
        self.report(
            ErrorCode::UnexpectedToken { mode: self.mode.get().name() },
            location,
            Some(format!("{thing:?}")),
        );
        ProcessResult::Done
    }

    // `step`/`step_foreign` and the per-mode dispatch live in `rules.rs`,
    // which is declared as a child module so it can see these private
    // fields/methods directly.
}

/// Canonical tag-name dispatch, used by `token::TagId::from_local_name`.
/// Mirrors the `tagID` densification spec.md §3 describes: a fast path for
/// the closed set of HTML tag names the tree builder's own rules care
/// about, `TagId::Other` for everything else.
pub(crate) fn tag_id_for(name: &LocalName) -> TagId {
    match *name {
        local_name!("a") => TagId::A,
        local_name!("address") => TagId::Address,
        local_name!("applet") => TagId::Applet,
        local_name!("area") => TagId::Area,
        local_name!("article") => TagId::Article,
        local_name!("aside") => TagId::Aside,
        local_name!("b") => TagId::B,
        local_name!("base") => TagId::Base,
        local_name!("basefont") => TagId::Basefont,
        local_name!("bgsound") => TagId::Bgsound,
        local_name!("big") => TagId::Big,
        local_name!("blockquote") => TagId::Blockquote,
        local_name!("body") => TagId::Body,
        local_name!("br") => TagId::Br,
        local_name!("button") => TagId::Button,
        local_name!("caption") => TagId::Caption,
        local_name!("center") => TagId::Center,
        local_name!("code") => TagId::Code,
        local_name!("col") => TagId::Col,
        local_name!("colgroup") => TagId::Colgroup,
        local_name!("dd") => TagId::Dd,
        local_name!("details") => TagId::Details,
        local_name!("dialog") => TagId::Dialog,
        local_name!("dir") => TagId::Dir,
        local_name!("div") => TagId::Div,
        local_name!("dl") => TagId::Dl,
        local_name!("dt") => TagId::Dt,
        local_name!("em") => TagId::Em,
        local_name!("embed") => TagId::Embed,
        local_name!("fieldset") => TagId::Fieldset,
        local_name!("figcaption") => TagId::Figcaption,
        local_name!("figure") => TagId::Figure,
        local_name!("font") => TagId::Font,
        local_name!("footer") => TagId::Footer,
        local_name!("form") => TagId::Form,
        local_name!("frame") => TagId::Frame,
        local_name!("frameset") => TagId::Frameset,
        local_name!("h1") => TagId::H1,
        local_name!("h2") => TagId::H2,
        local_name!("h3") => TagId::H3,
        local_name!("h4") => TagId::H4,
        local_name!("h5") => TagId::H5,
        local_name!("h6") => TagId::H6,
        local_name!("head") => TagId::Head,
        local_name!("header") => TagId::Header,
        local_name!("hgroup") => TagId::Hgroup,
        local_name!("hr") => TagId::Hr,
        local_name!("html") => TagId::Html,
        local_name!("i") => TagId::I,
        local_name!("iframe") => TagId::Iframe,
        local_name!("image") => TagId::Image,
        local_name!("img") => TagId::Img,
        local_name!("input") => TagId::Input,
        local_name!("keygen") => TagId::Keygen,
        local_name!("li") => TagId::Li,
        local_name!("link") => TagId::Link,
        local_name!("listing") => TagId::Listing,
        local_name!("main") => TagId::Main,
        local_name!("marquee") => TagId::Marquee,
        local_name!("math") => TagId::Math,
        local_name!("menu") => TagId::Menu,
        local_name!("meta") => TagId::Meta,
        local_name!("nav") => TagId::Nav,
        local_name!("nobr") => TagId::Nobr,
        local_name!("noembed") => TagId::Noembed,
        local_name!("noframes") => TagId::Noframes,
        local_name!("noscript") => TagId::Noscript,
        local_name!("object") => TagId::Object,
        local_name!("ol") => TagId::Ol,
        local_name!("optgroup") => TagId::Optgroup,
        local_name!("option") => TagId::Option,
        local_name!("p") => TagId::P,
        local_name!("param") => TagId::Param,
        local_name!("plaintext") => TagId::Plaintext,
        local_name!("pre") => TagId::Pre,
        local_name!("rb") => TagId::Rb,
        local_name!("rp") => TagId::Rp,
        local_name!("rt") => TagId::Rt,
        local_name!("rtc") => TagId::Rtc,
        local_name!("ruby") => TagId::Ruby,
        local_name!("s") => TagId::S,
        local_name!("script") => TagId::Script,
        local_name!("section") => TagId::Section,
        local_name!("select") => TagId::Select,
        local_name!("small") => TagId::Small,
        local_name!("source") => TagId::Source,
        local_name!("span") => TagId::Span,
        local_name!("strike") => TagId::Strike,
        local_name!("strong") => TagId::Strong,
        local_name!("style") => TagId::Style,
        local_name!("summary") => TagId::Summary,
        local_name!("svg") => TagId::Svg,
        local_name!("table") => TagId::Table,
        local_name!("tbody") => TagId::Tbody,
        local_name!("td") => TagId::Td,
        local_name!("template") => TagId::Template,
        local_name!("textarea") => TagId::Textarea,
        local_name!("tfoot") => TagId::Tfoot,
        local_name!("th") => TagId::Th,
        local_name!("thead") => TagId::Thead,
        local_name!("title") => TagId::Title,
        local_name!("tr") => TagId::Tr,
        local_name!("track") => TagId::Track,
        local_name!("tt") => TagId::Tt,
        local_name!("u") => TagId::U,
        local_name!("ul") => TagId::Ul,
        local_name!("wbr") => TagId::Wbr,
        local_name!("xmp") => TagId::Xmp,
        _ => TagId::Other,
    }
}
