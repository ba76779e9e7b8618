// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The token shapes this engine consumes, and the interface it expects
//! from an external tokenizer.
//!
//! This module does **not** contain a tokenizer. Lexing HTML into these
//! tokens, including character-reference decoding and the raw-text/RCDATA
//! state machine, is out of scope for a tree-construction engine: see
//! `spec.md` §1. A [`TokenSource`] is any lazy producer of [`Token`]s that
//! also lets the parser push state changes back into it (RCDATA/RAWTEXT/
//! script-data switches, the CDATA-allowed flag for foreign content).

use crate::location::SourceSpan;
use crate::LocalName;
use std::borrow::Cow;
use tendril::StrTendril;

/// Canonical tag identifiers for fast dispatch in the tree builder.
///
/// `TagId::Other` covers every tag name outside this known set; callers
/// must then fall back to comparing `Tag::name` directly. This mirrors the
/// "tagID ... UNKNOWN" scheme from spec.md §3: a dense integer for the
/// common case, string comparison for the long tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TagId {
    A,
    Address,
    Applet,
    Area,
    Article,
    Aside,
    B,
    Base,
    Basefont,
    Bgsound,
    Big,
    Blockquote,
    Body,
    Br,
    Button,
    Caption,
    Center,
    Code,
    Col,
    Colgroup,
    Dd,
    Details,
    Dialog,
    Dir,
    Div,
    Dl,
    Dt,
    Em,
    Embed,
    Fieldset,
    Figcaption,
    Figure,
    Font,
    Footer,
    Form,
    Frame,
    Frameset,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Head,
    Header,
    Hgroup,
    Hr,
    Html,
    I,
    Iframe,
    Image,
    Img,
    Input,
    Keygen,
    Li,
    Link,
    Listing,
    Main,
    Marquee,
    Math,
    Menu,
    Meta,
    Nav,
    Nobr,
    Noembed,
    Noframes,
    Noscript,
    Object,
    Ol,
    Optgroup,
    Option,
    P,
    Param,
    Plaintext,
    Pre,
    Rb,
    Rp,
    Rt,
    Rtc,
    Ruby,
    S,
    Script,
    Section,
    Select,
    Small,
    Source,
    Span,
    Strike,
    Strong,
    Style,
    Summary,
    Svg,
    Table,
    Tbody,
    Td,
    Template,
    Textarea,
    Tfoot,
    Th,
    Thead,
    Title,
    Tr,
    Track,
    Tt,
    U,
    Ul,
    Wbr,
    Xmp,
    /// Any tag name outside the canonical set above.
    Other,
}

impl TagId {
    pub fn from_local_name(name: &LocalName) -> TagId {
        crate::tree_builder::tag_id_for(name)
    }
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum TagKind {
    StartTag,
    EndTag,
}

/// A `DOCTYPE` token.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Doctype {
    pub name: Option<StrTendril>,
    pub public_id: Option<StrTendril>,
    pub system_id: Option<StrTendril>,
    pub force_quirks: bool,
    pub location: SourceSpan,
}

/// A start or end tag token.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Tag {
    pub kind: TagKind,
    pub name: LocalName,
    pub id: TagId,
    pub self_closing: bool,
    pub ack_self_closing: std::cell::Cell<bool>,
    pub attrs: Vec<crate::interface::Attribute>,
    pub location: SourceSpan,
}

impl Tag {
    pub fn new(kind: TagKind, name: LocalName, self_closing: bool) -> Tag {
        let id = TagId::from_local_name(&name);
        Tag {
            kind,
            name,
            id,
            self_closing,
            ack_self_closing: std::cell::Cell::new(false),
            attrs: Vec::new(),
            location: SourceSpan::default(),
        }
    }

    /// Are the tags equivalent for Noah's Ark purposes: same kind, name and
    /// exact (name -> value) attribute set, ignoring attribute order.
    pub fn equiv_modulo_attr_order(&self, other: &Tag) -> bool {
        if self.kind != other.kind || self.name != other.name {
            return false;
        }
        let mut self_attrs = self.attrs.clone();
        let mut other_attrs = other.attrs.clone();
        self_attrs.sort();
        other_attrs.sort();
        self_attrs == other_attrs
    }

    pub fn get_attribute(&self, local: &LocalName) -> Option<&StrTendril> {
        self.attrs
            .iter()
            .find(|a| a.name.ns == markup5ever::ns!() && a.name.local == *local)
            .map(|a| &a.value)
    }
}

/// Whether a run of character tokens is whitespace-only; the parser splits
/// mixed runs at the first whitespace/non-whitespace boundary so that modes
/// which treat whitespace specially (INITIAL, BEFORE_HTML, IN_HEAD, tables)
/// can look at a single token without re-scanning its contents.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub(crate) enum SplitStatus {
    NotSplit,
    Whitespace,
    NotWhitespace,
}

/// The token stream between tokenizer and tree builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Doctype(Doctype),
    Tag(Tag),
    Comment(StrTendril, SourceSpan),
    Character(StrTendril, SourceSpan),
    NullCharacter(SourceSpan),
    Eof(SourceSpan),
    /// Internal sentinel: "await more input". Never handed to the tree
    /// builder's insertion-mode dispatch; `Parser::run_parsing_loop_for_
    /// current_chunk` stops the loop when it sees this.
    Hibernation,
}

/// Result of feeding one token through the engine for a single
/// `TokenSource::next_token` call; mirrors `tokenizer::TokenSinkResult` in
/// the teacher, renamed so the tokenizer-facing vocabulary matches
/// spec.md's "Hibernation" / pause-point language.
#[derive(Debug, PartialEq)]
#[must_use]
pub enum TokenSourceResult<Handle> {
    Continue,
    /// The tokenizer should hand control back without the parser consuming
    /// more input (more is needed, or a script pause occurred upstream).
    Suspend,
    /// A `<script>` element has been inserted and parsing is paused; `Handle`
    /// is the script element.
    Script(Handle),
}

/// Enumerated tokenizer text states the parser writes back, per spec.md §6
/// ("Tokenizer surface ... writable `state`").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerState {
    Data,
    Rcdata,
    Rawtext,
    ScriptData,
    Plaintext,
    CdataSection,
}

/// External collaborator: a lazy source of tokens that the parser both
/// pulls from and pushes state back into. Analogous to `html5ever`'s
/// `Tokenizer` + `TokenSink` boundary, but made an explicit trait since this
/// crate does not implement a tokenizer itself.
pub trait TokenSource {
    /// Pull the next token, or `Token::Hibernation` if the current chunk of
    /// input has been exhausted and more is expected.
    fn next_token(&mut self) -> Token;

    /// Switch the tokenizer's text-parsing state (used when entering
    /// RCDATA/RAWTEXT/script-data/PLAINTEXT, and on `</script>` / EOF to
    /// switch back to `Data`).
    fn set_state(&mut self, state: TokenizerState);

    /// Set whether CDATA sections are recognized (true inside foreign
    /// content whose adjusted current node is not in the HTML namespace).
    fn set_allow_cdata(&mut self, allow: bool) {
        let _ = allow;
    }

    /// Report a non-fatal tokenizer-level parse error, if the source wants
    /// to surface one (most call sites for parse errors originate in the
    /// tree builder itself; this exists for completeness with spec.md's
    /// token model, which allows the tokenizer to carry its own errors).
    fn parse_error(&mut self, _message: Cow<'static, str>) {}
}

/// A `TokenSource` that simply replays a fixed, pre-tokenized sequence.
/// This is the form tree-builder unit tests use: tokenizing HTML is out of
/// scope, so tests construct `Token`s directly (the same approach
/// `html5ever`'s own `tree_builder` test harness takes with its `.dat`
/// fixture format, just inline instead of file-driven).
pub struct ReplayTokenSource {
    tokens: std::collections::VecDeque<Token>,
}

impl ReplayTokenSource {
    pub fn new(tokens: Vec<Token>) -> Self {
        ReplayTokenSource {
            tokens: tokens.into(),
        }
    }
}

impl TokenSource for ReplayTokenSource {
    fn next_token(&mut self) -> Token {
        self.tokens.pop_front().unwrap_or(Token::Hibernation)
    }

    fn set_state(&mut self, _state: TokenizerState) {}
}
