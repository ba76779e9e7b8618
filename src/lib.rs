// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! An HTML5 tree-construction engine.
//!
//! This crate implements the WHATWG "tree construction" stage of HTML
//! parsing: the insertion-mode state machine, the stack of open elements,
//! the list of active formatting elements (with the adoption agency
//! algorithm), foster parenting, foreign-content switching, fragment
//! parsing and source-location bookkeeping.
//!
//! It deliberately does *not* implement a tokenizer: callers drive the
//! [`Parser`] with tokens from whatever lexer they like, via
//! [`TokenSource`]. It also does not implement a DOM: callers provide a
//! [`TreeAdapter`] that knows how to create and mutate their tree. A
//! reference adapter, [`rcdom::Rcdom`], is bundled for tests and simple
//! uses.

pub extern crate markup5ever;
pub extern crate tendril;

pub use markup5ever::{
    expanded_name, local_name, namespace_prefix, ns, ExpandedName, LocalName, Namespace, Prefix,
    QualName,
};
pub use tendril::StrTendril;

#[macro_use]
mod macros;

pub mod error;
pub mod interface;
pub mod location;
pub mod quirks;
pub mod rcdom;
pub mod token;
pub mod tree_builder;

pub use error::{ErrorCode, ParseError};
pub use interface::{
    create_element, Attribute, ElementFlags, NextParserState, NodeOrText, QuirksMode, TreeAdapter,
};
pub use location::{Bounds, SourceSpan};
pub use token::{Doctype, Tag, TagKind, Token, TokenSource, TokenSourceResult};
pub use tree_builder::{Parser, ParserOptions};
