// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The per-insertion-mode rules (spec.md §4.3), as one large `match` over
//! [`InsertionMode`] and [`Token`]. Grounded on the teacher's `rules.rs`,
//! translated from its `match_token!` macro DSL into plain `match` arms on
//! this crate's own token shapes.

use markup5ever::{expanded_name, local_name, ns};

use crate::error::ErrorCode;
use crate::interface::{create_element, ElementFlags, NodeOrText, QuirksMode, TreeAdapter};
use crate::location::SourceSpan;
use crate::token::{SplitStatus, Tag, TagKind, TokenSource, TokenizerState};
use crate::QualName;

use super::tag_sets::*;
use super::types::{InsertionMode, ProcessResult, Token};
use super::Parser;

fn any_not_whitespace(x: &tendril::StrTendril) -> bool {
    x.chars().any(|c| !c.is_ascii_whitespace())
}

impl<Sink> Parser<Sink>
where
    Sink: TreeAdapter,
    Sink::Handle: Clone,
{
    pub(crate) fn step(
        &self,
        mode: InsertionMode,
        token: Token,
        source: &mut dyn TokenSource,
    ) -> ProcessResult<Sink::Handle> {
        match mode {
            //§ the-initial-insertion-mode
            InsertionMode::Initial => match token {
                Token::Characters(SplitStatus::NotSplit, text, _) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, _, _) => ProcessResult::Done,
                Token::Comment(text, _) => self.append_comment(text),
                token => {
                    let loc = token_location(&token);
                    if !self.options.iframe_srcdoc {
                        self.report(ErrorCode::MissingDoctype, loc, None);
                        self.set_quirks_mode(QuirksMode::Quirks);
                    }
                    ProcessResult::Reprocess(InsertionMode::BeforeHtml, token)
                },
            },

            //§ the-before-html-insertion-mode
            InsertionMode::BeforeHtml => match token {
                Token::Characters(SplitStatus::NotSplit, text, _) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, _, _) => ProcessResult::Done,
                Token::Comment(text, _) => self.append_comment_to_doc(text),

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("html"),
                        ..
                    },
                ) => {
                    self.create_root(tag.attrs);
                    self.mode.set(InsertionMode::BeforeHead);
                    ProcessResult::Done
                },

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::EndTag,
                        ..
                    },
                ) if !matches!(
                    tag.name,
                    local_name!("head") | local_name!("body") | local_name!("html") | local_name!("br")
                ) =>
                {
                    let loc = tag.location;
                    self.unexpected(&tag, loc)
                },

                token => {
                    self.create_root(vec![]);
                    ProcessResult::Reprocess(InsertionMode::BeforeHead, token)
                },
            },

            //§ the-before-head-insertion-mode
            InsertionMode::BeforeHead => match token {
                Token::Characters(SplitStatus::NotSplit, text, _) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, _, _) => ProcessResult::Done,
                Token::Comment(text, _) => self.append_comment(text),

                Token::Tag(
                    Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("html"),
                        ..
                    },
                ) => self.step(InsertionMode::InBody, token, source),

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("head"),
                        ..
                    },
                ) => {
                    *self.head_elem.borrow_mut() = Some(self.insert_element_for(tag));
                    self.mode.set(InsertionMode::InHead);
                    ProcessResult::Done
                },

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::EndTag,
                        ..
                    },
                ) if !matches!(
                    tag.name,
                    local_name!("head") | local_name!("body") | local_name!("html") | local_name!("br")
                ) =>
                {
                    let loc = tag.location;
                    self.unexpected(&tag, loc)
                },

                token => {
                    *self.head_elem.borrow_mut() = Some(self.insert_phantom(local_name!("head")));
                    ProcessResult::Reprocess(InsertionMode::InHead, token)
                },
            },

            //§ parsing-main-inhead
            InsertionMode::InHead => self.step_in_head(token, source),

            //§ parsing-main-inheadnoscript
            InsertionMode::InHeadNoscript => match token {
                Token::Tag(
                    Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("html"),
                        ..
                    },
                ) => self.step(InsertionMode::InBody, token, source),

                Token::Tag(
                    Tag {
                        kind: TagKind::EndTag,
                        name: local_name!("noscript"),
                        ..
                    },
                ) => {
                    self.pop();
                    self.mode.set(InsertionMode::InHead);
                    ProcessResult::Done
                },

                Token::Characters(SplitStatus::NotSplit, text, _) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, _, _) => {
                    self.step(InsertionMode::InHead, token, source)
                },

                Token::Comment(_, _) => self.step(InsertionMode::InHead, token, source),

                Token::Tag(
                    Tag {
                        kind: TagKind::StartTag,
                        name:
                            local_name!("basefont")
                            | local_name!("bgsound")
                            | local_name!("link")
                            | local_name!("meta")
                            | local_name!("noframes")
                            | local_name!("style"),
                        ..
                    },
                ) => self.step(InsertionMode::InHead, token, source),

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("head") | local_name!("noscript"),
                        ..
                    },
                ) => {
                    let loc = tag.location;
                    self.report(ErrorCode::NestedNoscriptInHead, loc, None);
                    ProcessResult::Done
                },

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::EndTag,
                        ..
                    },
                ) if tag.name != local_name!("br") => {
                    let loc = tag.location;
                    self.unexpected(&tag, loc)
                },

                token => {
                    let loc = token_location(&token);
                    self.unexpected(&token, loc);
                    self.pop();
                    ProcessResult::Reprocess(InsertionMode::InHead, token)
                },
            },

            //§ the-after-head-insertion-mode
            InsertionMode::AfterHead => match token {
                Token::Characters(SplitStatus::NotSplit, text, _) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, text, loc) => self.append_text(text, loc),
                Token::Comment(text, _) => self.append_comment(text),

                Token::Tag(
                    Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("html"),
                        ..
                    },
                ) => self.step(InsertionMode::InBody, token, source),

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("body"),
                        ..
                    },
                ) => {
                    self.insert_element_for(tag);
                    self.frameset_ok.set(false);
                    self.mode.set(InsertionMode::InBody);
                    ProcessResult::Done
                },

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("frameset"),
                        ..
                    },
                ) => {
                    self.insert_element_for(tag);
                    self.mode.set(InsertionMode::InFrameset);
                    ProcessResult::Done
                },

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::StartTag,
                        name:
                            local_name!("base")
                            | local_name!("basefont")
                            | local_name!("bgsound")
                            | local_name!("link")
                            | local_name!("meta")
                            | local_name!("noframes")
                            | local_name!("script")
                            | local_name!("style")
                            | local_name!("template")
                            | local_name!("title"),
                        ..
                    },
                ) => {
                    let loc = tag.location;
                    self.report(ErrorCode::MisplacedStartTagForHeadElement, loc, None);
                    let head = self.head_elem.borrow().as_ref().expect("no head element").clone();
                    self.push(&head, loc);
                    let result = self.step(InsertionMode::InHead, Token::Tag(tag), source);
                    self.remove_from_stack(&head);
                    result
                },

                Token::Tag(
                    Tag {
                        kind: TagKind::EndTag,
                        name: local_name!("template"),
                        ..
                    },
                ) => self.step(InsertionMode::InHead, token, source),

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::EndTag,
                        ..
                    },
                ) if !matches!(tag.name, local_name!("body") | local_name!("html") | local_name!("br")) => {
                    let loc = tag.location;
                    self.unexpected(&tag, loc)
                },

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("head"),
                        ..
                    },
                ) => {
                    let loc = tag.location;
                    self.report(ErrorCode::MisplacedStartTagForHeadElement, loc, None);
                    ProcessResult::Done
                },

                token => {
                    self.insert_phantom(local_name!("body"));
                    ProcessResult::Reprocess(InsertionMode::InBody, token)
                },
            },

            //§ parsing-main-inbody
            InsertionMode::InBody => self.step_in_body(token, source),

            //§ parsing-main-incdata
            InsertionMode::Text => match token {
                Token::Characters(_, text, loc) => self.append_text(text, loc),

                Token::Eof(loc) => {
                    self.report(ErrorCode::EofInElementThatCanContainOnlyText, loc, None);
                    if self.current_node_named(local_name!("script")) {
                        let current = self.current_node().clone();
                        self.sink.mark_script_already_started(&current);
                    }
                    self.pop();
                    ProcessResult::Reprocess(self.orig_mode.take().unwrap(), token)
                },

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::EndTag,
                        ..
                    },
                ) => {
                    let node = self.pop();
                    self.mode.set(self.orig_mode.take().unwrap());
                    if tag.name == local_name!("script") {
                        return ProcessResult::Script(node);
                    }
                    ProcessResult::Done
                },

                _ => unreachable!("Text mode only ever sees characters, EOF or an end tag"),
            },

            //§ parsing-main-intable
            InsertionMode::InTable => self.step_in_table(token, source),

            //§ parsing-main-intabletext
            InsertionMode::InTableText => match token {
                Token::NullCharacter(loc) => self.unexpected(&token, loc),

                Token::Characters(split, text, loc) => {
                    self.pending_table_text.borrow_mut().push((split, text, loc));
                    ProcessResult::Done
                },

                token => {
                    let pending = self.pending_table_text.take();
                    let contains_nonspace = pending.iter().any(|(split, text, _)| match split {
                        SplitStatus::Whitespace => false,
                        SplitStatus::NotWhitespace => true,
                        SplitStatus::NotSplit => any_not_whitespace(text),
                    });

                    if contains_nonspace {
                        self.report(ErrorCode::UnexpectedCharacterInTable, token_location(&token), None);
                        for (split, text, loc) in pending.into_iter() {
                            match self.foster_parent_in_body(Token::Characters(split, text, loc), source) {
                                ProcessResult::Done => (),
                                _ => unreachable!("foster-parented characters always finish in one step"),
                            }
                        }
                    } else {
                        for (_, text, loc) in pending.into_iter() {
                            self.append_text(text, loc);
                        }
                    }

                    ProcessResult::Reprocess(self.orig_mode.take().unwrap(), token)
                },
            },

            //§ parsing-main-incaption
            InsertionMode::InCaption => match token {
                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::StartTag,
                        name:
                            local_name!("caption")
                            | local_name!("col")
                            | local_name!("colgroup")
                            | local_name!("tbody")
                            | local_name!("td")
                            | local_name!("tfoot")
                            | local_name!("th")
                            | local_name!("thead")
                            | local_name!("tr"),
                        ..
                    },
                )
                | Token::Tag(
                    tag @ Tag {
                        kind: TagKind::EndTag,
                        name: local_name!("table") | local_name!("caption"),
                        ..
                    },
                ) => {
                    if self.in_scope_named(table_scope, local_name!("caption")) {
                        self.generate_implied_end_tags(cursory_implied_end);
                        self.expect_to_close(local_name!("caption"));
                        self.clear_active_formatting_to_marker();
                        if tag.kind == TagKind::EndTag && tag.name == local_name!("caption") {
                            self.mode.set(InsertionMode::InTable);
                            ProcessResult::Done
                        } else {
                            ProcessResult::Reprocess(InsertionMode::InTable, Token::Tag(tag))
                        }
                    } else {
                        let loc = tag.location;
                        self.unexpected(&tag, loc)
                    }
                },

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::EndTag,
                        name:
                            local_name!("body")
                            | local_name!("col")
                            | local_name!("colgroup")
                            | local_name!("html")
                            | local_name!("tbody")
                            | local_name!("td")
                            | local_name!("tfoot")
                            | local_name!("th")
                            | local_name!("thead")
                            | local_name!("tr"),
                        ..
                    },
                ) => {
                    let loc = tag.location;
                    self.unexpected(&tag, loc)
                },

                token => self.step(InsertionMode::InBody, token, source),
            },

            //§ parsing-main-incolgroup
            InsertionMode::InColumnGroup => match token {
                Token::Characters(SplitStatus::NotSplit, text, _) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, text, loc) => self.append_text(text, loc),
                Token::Comment(text, _) => self.append_comment(text),

                Token::Tag(
                    Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("html"),
                        ..
                    },
                ) => self.step(InsertionMode::InBody, token, source),

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("col"),
                        ..
                    },
                ) => {
                    self.insert_and_pop_element_for(tag);
                    ProcessResult::DoneAckSelfClosing
                },

                Token::Tag(
                    Tag {
                        kind: TagKind::EndTag,
                        name: local_name!("colgroup"),
                        ..
                    },
                ) => {
                    if self.current_node_named(local_name!("colgroup")) {
                        self.pop();
                        self.mode.set(InsertionMode::InTable);
                    } else {
                        let loc = token_location(&token);
                        self.unexpected(&token, loc);
                    }
                    ProcessResult::Done
                },

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::EndTag,
                        name: local_name!("col"),
                        ..
                    },
                ) => {
                    let loc = tag.location;
                    self.unexpected(&tag, loc)
                },

                Token::Tag(
                    Tag {
                        name: local_name!("template"),
                        ..
                    },
                ) => self.step(InsertionMode::InHead, token, source),

                Token::Eof(_) => self.step(InsertionMode::InBody, token, source),

                token => {
                    if self.current_node_named(local_name!("colgroup")) {
                        self.pop();
                        ProcessResult::Reprocess(InsertionMode::InTable, token)
                    } else {
                        let loc = token_location(&token);
                        self.unexpected(&token, loc)
                    }
                },
            },

            //§ parsing-main-intbody
            InsertionMode::InTableBody => match token {
                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("tr"),
                        ..
                    },
                ) => {
                    self.pop_until_current(table_body_context);
                    self.insert_element_for(tag);
                    self.mode.set(InsertionMode::InRow);
                    ProcessResult::Done
                },

                Token::Tag(
                    Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("th") | local_name!("td"),
                        ..
                    },
                ) => {
                    let loc = token_location(&token);
                    self.unexpected(&token, loc);
                    self.pop_until_current(table_body_context);
                    self.insert_phantom(local_name!("tr"));
                    ProcessResult::Reprocess(InsertionMode::InRow, token)
                },

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::EndTag,
                        name: local_name!("tbody") | local_name!("tfoot") | local_name!("thead"),
                        ..
                    },
                ) => {
                    if self.in_scope_named(table_scope, tag.name.clone()) {
                        self.pop_until_current(table_body_context);
                        self.pop();
                        self.mode.set(InsertionMode::InTable);
                    } else {
                        let loc = tag.location;
                        self.unexpected(&tag, loc);
                    }
                    ProcessResult::Done
                },

                Token::Tag(Tag {
                    kind: TagKind::StartTag,
                    name:
                        local_name!("caption")
                        | local_name!("col")
                        | local_name!("colgroup")
                        | local_name!("tbody")
                        | local_name!("tfoot")
                        | local_name!("thead"),
                    ..
                })
                | Token::Tag(Tag {
                    kind: TagKind::EndTag,
                    name: local_name!("table"),
                    ..
                }) => {
                    if self.open_elems.borrow().has_table_body_context_in_table_scope(&self.sink) {
                        self.pop_until_current(table_body_context);
                        self.pop();
                        ProcessResult::Reprocess(InsertionMode::InTable, token)
                    } else {
                        let loc = token_location(&token);
                        self.unexpected(&token, loc)
                    }
                },

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::EndTag,
                        name:
                            local_name!("body")
                            | local_name!("caption")
                            | local_name!("col")
                            | local_name!("colgroup")
                            | local_name!("html")
                            | local_name!("td")
                            | local_name!("th")
                            | local_name!("tr"),
                        ..
                    },
                ) => {
                    let loc = tag.location;
                    self.unexpected(&tag, loc)
                },

                token => self.step(InsertionMode::InTable, token, source),
            },

            //§ parsing-main-intr
            InsertionMode::InRow => match token {
                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("th") | local_name!("td"),
                        ..
                    },
                ) => {
                    self.pop_until_current(table_row_context);
                    self.insert_element_for(tag);
                    self.mode.set(InsertionMode::InCell);
                    self.active_formatting.borrow_mut().insert_marker();
                    ProcessResult::Done
                },

                Token::Tag(
                    Tag {
                        kind: TagKind::EndTag,
                        name: local_name!("tr"),
                        ..
                    },
                ) => {
                    if self.in_scope_named(table_scope, local_name!("tr")) {
                        self.pop_until_current(table_row_context);
                        self.pop();
                        self.mode.set(InsertionMode::InTableBody);
                    } else {
                        let loc = token_location(&token);
                        self.unexpected(&token, loc);
                    }
                    ProcessResult::Done
                },

                Token::Tag(Tag {
                    kind: TagKind::StartTag,
                    name:
                        local_name!("caption")
                        | local_name!("col")
                        | local_name!("colgroup")
                        | local_name!("tbody")
                        | local_name!("tfoot")
                        | local_name!("thead")
                        | local_name!("tr"),
                    ..
                })
                | Token::Tag(Tag {
                    kind: TagKind::EndTag,
                    name: local_name!("table"),
                    ..
                }) => {
                    if self.in_scope_named(table_scope, local_name!("tr")) {
                        self.pop_until_current(table_row_context);
                        self.pop();
                        ProcessResult::Reprocess(InsertionMode::InTableBody, token)
                    } else {
                        let loc = token_location(&token);
                        self.unexpected(&token, loc)
                    }
                },

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::EndTag,
                        name: local_name!("tbody") | local_name!("tfoot") | local_name!("thead"),
                        ..
                    },
                ) => {
                    if self.in_scope_named(table_scope, tag.name.clone()) {
                        if self.in_scope_named(table_scope, local_name!("tr")) {
                            self.pop_until_current(table_row_context);
                            self.pop();
                            ProcessResult::Reprocess(InsertionMode::InTableBody, Token::Tag(tag))
                        } else {
                            ProcessResult::Done
                        }
                    } else {
                        let loc = tag.location;
                        self.unexpected(&tag, loc)
                    }
                },

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::EndTag,
                        name:
                            local_name!("body")
                            | local_name!("caption")
                            | local_name!("col")
                            | local_name!("colgroup")
                            | local_name!("html")
                            | local_name!("td")
                            | local_name!("th"),
                        ..
                    },
                ) => {
                    let loc = tag.location;
                    self.unexpected(&tag, loc)
                },

                token => self.step(InsertionMode::InTable, token, source),
            },

            //§ parsing-main-intd
            InsertionMode::InCell => match token {
                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::EndTag,
                        name: local_name!("td") | local_name!("th"),
                        ..
                    },
                ) => {
                    if self.in_scope_named(table_scope, tag.name.clone()) {
                        self.generate_implied_end_tags(cursory_implied_end);
                        self.expect_to_close(tag.name);
                        self.clear_active_formatting_to_marker();
                        self.mode.set(InsertionMode::InRow);
                    } else {
                        let loc = tag.location;
                        self.unexpected(&tag, loc);
                    }
                    ProcessResult::Done
                },

                Token::Tag(
                    Tag {
                        kind: TagKind::StartTag,
                        name:
                            local_name!("caption")
                            | local_name!("col")
                            | local_name!("colgroup")
                            | local_name!("tbody")
                            | local_name!("td")
                            | local_name!("tfoot")
                            | local_name!("th")
                            | local_name!("thead")
                            | local_name!("tr"),
                        ..
                    },
                ) => {
                    if self.in_scope(table_scope, |n| self.elem_in(n, td_th)) {
                        self.close_the_cell();
                        ProcessResult::Reprocess(InsertionMode::InRow, token)
                    } else {
                        let loc = token_location(&token);
                        self.unexpected(&token, loc)
                    }
                },

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::EndTag,
                        name:
                            local_name!("body") | local_name!("caption") | local_name!("col")
                            | local_name!("colgroup") | local_name!("html"),
                        ..
                    },
                ) => {
                    let loc = tag.location;
                    self.unexpected(&tag, loc)
                },

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::EndTag,
                        name:
                            local_name!("table") | local_name!("tbody") | local_name!("tfoot")
                            | local_name!("thead") | local_name!("tr"),
                        ..
                    },
                ) => {
                    if self.in_scope_named(table_scope, tag.name.clone()) {
                        self.close_the_cell();
                        ProcessResult::Reprocess(InsertionMode::InRow, Token::Tag(tag))
                    } else {
                        let loc = tag.location;
                        self.unexpected(&tag, loc)
                    }
                },

                token => self.step(InsertionMode::InBody, token, source),
            },

            //§ parsing-main-inselect
            InsertionMode::InSelect => match token {
                Token::NullCharacter(loc) => self.unexpected(&token, loc),
                Token::Characters(_, text, loc) => self.append_text(text, loc),
                Token::Comment(text, _) => self.append_comment(text),

                Token::Tag(
                    Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("html"),
                        ..
                    },
                ) => self.step(InsertionMode::InBody, token, source),

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("option"),
                        ..
                    },
                ) => {
                    if self.current_node_named(local_name!("option")) {
                        self.pop();
                    }
                    self.insert_element_for(tag);
                    ProcessResult::Done
                },

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("optgroup"),
                        ..
                    },
                ) => {
                    if self.current_node_named(local_name!("option")) {
                        self.pop();
                    }
                    if self.current_node_named(local_name!("optgroup")) {
                        self.pop();
                    }
                    self.insert_element_for(tag);
                    ProcessResult::Done
                },

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("hr"),
                        ..
                    },
                ) => {
                    if self.current_node_named(local_name!("option")) {
                        self.pop();
                    }
                    if self.current_node_named(local_name!("optgroup")) {
                        self.pop();
                    }
                    self.insert_element_for(tag);
                    self.pop();
                    ProcessResult::DoneAckSelfClosing
                },

                Token::Tag(
                    Tag {
                        kind: TagKind::EndTag,
                        name: local_name!("optgroup"),
                        ..
                    },
                ) => {
                    let len = self.open_elems.borrow().len();
                    if len >= 2
                        && self.current_node_named(local_name!("option"))
                        && self.html_elem_named(&self.open_elems.borrow()[len - 2], local_name!("optgroup"))
                    {
                        self.pop();
                    }
                    if self.current_node_named(local_name!("optgroup")) {
                        self.pop();
                    } else {
                        let loc = token_location(&token);
                        self.unexpected(&token, loc);
                    }
                    ProcessResult::Done
                },

                Token::Tag(
                    Tag {
                        kind: TagKind::EndTag,
                        name: local_name!("option"),
                        ..
                    },
                ) => {
                    if self.current_node_named(local_name!("option")) {
                        self.pop();
                    } else {
                        let loc = token_location(&token);
                        self.unexpected(&token, loc);
                    }
                    ProcessResult::Done
                },

                Token::Tag(
                    tag @ Tag {
                        name: local_name!("select"),
                        ..
                    },
                ) => {
                    let in_scope = self.in_scope_named(select_scope, local_name!("select"));
                    let loc = tag.location;
                    if !in_scope || tag.kind == TagKind::StartTag {
                        self.unexpected(&tag, loc);
                    }
                    if in_scope {
                        self.pop_until_named(local_name!("select"));
                        self.mode.set(self.reset_insertion_mode());
                    }
                    ProcessResult::Done
                },

                Token::Tag(
                    Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("input") | local_name!("keygen") | local_name!("textarea"),
                        ..
                    },
                ) => {
                    let loc = token_location(&token);
                    self.unexpected(&token, loc);
                    if self.in_scope_named(select_scope, local_name!("select")) {
                        self.pop_until_named(local_name!("select"));
                        ProcessResult::Reprocess(self.reset_insertion_mode(), token)
                    } else {
                        ProcessResult::Done
                    }
                },

                Token::Tag(Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("script"),
                    ..
                })
                | Token::Tag(Tag {
                    name: local_name!("template"),
                    ..
                }) => self.step(InsertionMode::InHead, token, source),

                Token::Eof(_) => self.step(InsertionMode::InBody, token, source),

                token => {
                    let loc = token_location(&token);
                    self.unexpected(&token, loc)
                },
            },

            //§ parsing-main-inselectintable
            InsertionMode::InSelectInTable => match token {
                Token::Tag(Tag {
                    kind: TagKind::StartTag,
                    name:
                        local_name!("caption") | local_name!("table") | local_name!("tbody")
                        | local_name!("tfoot") | local_name!("thead") | local_name!("tr")
                        | local_name!("td") | local_name!("th"),
                    ..
                }) => {
                    let loc = token_location(&token);
                    self.unexpected(&token, loc);
                    self.pop_until_named(local_name!("select"));
                    ProcessResult::Reprocess(self.reset_insertion_mode(), token)
                },

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::EndTag,
                        name:
                            local_name!("caption") | local_name!("table") | local_name!("tbody")
                            | local_name!("tfoot") | local_name!("thead") | local_name!("tr")
                            | local_name!("td") | local_name!("th"),
                        ..
                    },
                ) => {
                    let loc = tag.location;
                    self.unexpected(&tag, loc);
                    if self.in_scope_named(table_scope, tag.name.clone()) {
                        self.pop_until_named(local_name!("select"));
                        ProcessResult::Reprocess(self.reset_insertion_mode(), Token::Tag(tag))
                    } else {
                        ProcessResult::Done
                    }
                },

                token => self.step(InsertionMode::InSelect, token, source),
            },

            //§ parsing-main-intemplate
            InsertionMode::InTemplate => match token {
                Token::Characters(..) | Token::Comment(..) => self.step(InsertionMode::InBody, token, source),

                Token::Tag(Tag {
                    name:
                        local_name!("base") | local_name!("basefont") | local_name!("bgsound")
                        | local_name!("link") | local_name!("meta") | local_name!("noframes")
                        | local_name!("script") | local_name!("style") | local_name!("template")
                        | local_name!("title"),
                    ..
                }) => self.step(InsertionMode::InHead, token, source),

                Token::Tag(
                    Tag {
                        kind: TagKind::StartTag,
                        name:
                            local_name!("caption") | local_name!("colgroup") | local_name!("tbody")
                            | local_name!("tfoot") | local_name!("thead"),
                        ..
                    },
                ) => {
                    let mut modes = self.template_modes.borrow_mut();
                    modes.pop();
                    modes.push(InsertionMode::InTable);
                    drop(modes);
                    ProcessResult::Reprocess(InsertionMode::InTable, token)
                },

                Token::Tag(
                    Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("col"),
                        ..
                    },
                ) => {
                    let mut modes = self.template_modes.borrow_mut();
                    modes.pop();
                    modes.push(InsertionMode::InColumnGroup);
                    drop(modes);
                    ProcessResult::Reprocess(InsertionMode::InColumnGroup, token)
                },

                Token::Tag(
                    Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("tr"),
                        ..
                    },
                ) => {
                    let mut modes = self.template_modes.borrow_mut();
                    modes.pop();
                    modes.push(InsertionMode::InTableBody);
                    drop(modes);
                    ProcessResult::Reprocess(InsertionMode::InTableBody, token)
                },

                Token::Tag(
                    Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("td") | local_name!("th"),
                        ..
                    },
                ) => {
                    let mut modes = self.template_modes.borrow_mut();
                    modes.pop();
                    modes.push(InsertionMode::InRow);
                    drop(modes);
                    ProcessResult::Reprocess(InsertionMode::InRow, token)
                },

                Token::Eof(_) => {
                    if !self.in_html_elem_named(local_name!("template")) {
                        self.stop_parsing()
                    } else {
                        let loc = token_location(&token);
                        self.unexpected(&token, loc);
                        self.pop_until_named(local_name!("template"));
                        self.clear_active_formatting_to_marker();
                        self.template_modes.borrow_mut().pop();
                        ProcessResult::Reprocess(self.reset_insertion_mode(), token)
                    }
                },

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::StartTag,
                        ..
                    },
                ) => {
                    let mut modes = self.template_modes.borrow_mut();
                    modes.pop();
                    modes.push(InsertionMode::InBody);
                    drop(modes);
                    ProcessResult::Reprocess(InsertionMode::InBody, Token::Tag(tag))
                },

                token => {
                    let loc = token_location(&token);
                    self.unexpected(&token, loc)
                },
            },

            //§ parsing-main-afterbody
            InsertionMode::AfterBody => match token {
                Token::Characters(SplitStatus::NotSplit, text, _) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, _, _) => {
                    self.step(InsertionMode::InBody, token, source)
                },
                Token::Comment(text, _) => self.append_comment_to_html(text),

                Token::Tag(
                    Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("html"),
                        ..
                    },
                ) => self.step(InsertionMode::InBody, token, source),

                Token::Tag(
                    Tag {
                        kind: TagKind::EndTag,
                        name: local_name!("html"),
                        ..
                    },
                ) => {
                    if self.is_fragment() {
                        let loc = token_location(&token);
                        self.unexpected(&token, loc);
                    } else {
                        self.mode.set(InsertionMode::AfterAfterBody);
                    }
                    ProcessResult::Done
                },

                Token::Eof(_) => self.stop_parsing(),

                token => {
                    let loc = token_location(&token);
                    self.unexpected(&token, loc);
                    ProcessResult::Reprocess(InsertionMode::InBody, token)
                },
            },

            //§ parsing-main-inframeset
            InsertionMode::InFrameset => match token {
                Token::Characters(SplitStatus::NotSplit, text, _) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, text, loc) => self.append_text(text, loc),
                Token::Comment(text, _) => self.append_comment(text),

                Token::Tag(
                    Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("html"),
                        ..
                    },
                ) => self.step(InsertionMode::InBody, token, source),

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("frameset"),
                        ..
                    },
                ) => {
                    self.insert_element_for(tag);
                    ProcessResult::Done
                },

                Token::Tag(
                    Tag {
                        kind: TagKind::EndTag,
                        name: local_name!("frameset"),
                        ..
                    },
                ) => {
                    if self.open_elems.borrow().is_root_html_element_current() {
                        let loc = token_location(&token);
                        self.unexpected(&token, loc);
                    } else {
                        self.pop();
                        if !self.is_fragment() && !self.current_node_named(local_name!("frameset")) {
                            self.mode.set(InsertionMode::AfterFrameset);
                        }
                    }
                    ProcessResult::Done
                },

                Token::Tag(
                    tag @ Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("frame"),
                        ..
                    },
                ) => {
                    self.insert_and_pop_element_for(tag);
                    ProcessResult::DoneAckSelfClosing
                },

                Token::Tag(Tag {
                    name: local_name!("noframes"),
                    ..
                }) => self.step(InsertionMode::InHead, token, source),

                Token::Eof(loc) => {
                    if self.open_elems.borrow().len() != 1 {
                        self.unexpected(&token, loc);
                    }
                    self.stop_parsing()
                },

                token => {
                    let loc = token_location(&token);
                    self.unexpected(&token, loc)
                },
            },

            //§ parsing-main-afterframeset
            InsertionMode::AfterFrameset => match token {
                Token::Characters(SplitStatus::NotSplit, text, _) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, text, loc) => self.append_text(text, loc),
                Token::Comment(text, _) => self.append_comment(text),

                Token::Tag(
                    Tag {
                        kind: TagKind::StartTag,
                        name: local_name!("html"),
                        ..
                    },
                ) => self.step(InsertionMode::InBody, token, source),

                Token::Tag(
                    Tag {
                        kind: TagKind::EndTag,
                        name: local_name!("html"),
                        ..
                    },
                ) => {
                    self.mode.set(InsertionMode::AfterAfterFrameset);
                    ProcessResult::Done
                },

                Token::Tag(Tag {
                    name: local_name!("noframes"),
                    ..
                }) => self.step(InsertionMode::InHead, token, source),

                Token::Eof(_) => self.stop_parsing(),

                token => {
                    let loc = token_location(&token);
                    self.unexpected(&token, loc)
                },
            },

            //§ the-after-after-body-insertion-mode
            InsertionMode::AfterAfterBody => match token {
                Token::Characters(SplitStatus::NotSplit, text, _) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, _, _) => {
                    self.step(InsertionMode::InBody, token, source)
                },
                Token::Comment(text, _) => self.append_comment_to_doc(text),

                Token::Tag(Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("html"),
                    ..
                }) => self.step(InsertionMode::InBody, token, source),

                Token::Eof(_) => self.stop_parsing(),

                token => {
                    let loc = token_location(&token);
                    self.unexpected(&token, loc);
                    ProcessResult::Reprocess(InsertionMode::InBody, token)
                },
            },

            //§ the-after-after-frameset-insertion-mode
            InsertionMode::AfterAfterFrameset => match token {
                Token::Characters(SplitStatus::NotSplit, text, _) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, _, _) => {
                    self.step(InsertionMode::InBody, token, source)
                },
                Token::Comment(text, _) => self.append_comment_to_doc(text),

                Token::Tag(Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("html"),
                    ..
                }) => self.step(InsertionMode::InBody, token, source),

                Token::Eof(_) => self.stop_parsing(),

                Token::Tag(Tag {
                    name: local_name!("noframes"),
                    ..
                }) => self.step(InsertionMode::InHead, token, source),

                token => {
                    let loc = token_location(&token);
                    self.unexpected(&token, loc)
                },
            },
        }
    }

    //§ parsing-main-inhead
    fn step_in_head(&self, token: Token, source: &mut dyn TokenSource) -> ProcessResult<Sink::Handle> {
        match token {
            Token::Characters(SplitStatus::NotSplit, text, _) => ProcessResult::SplitWhitespace(text),
            Token::Characters(SplitStatus::Whitespace, text, loc) => self.append_text(text, loc),
            Token::Comment(text, _) => self.append_comment(text),

            Token::Tag(
                Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("html"),
                    ..
                },
            ) => self.step(InsertionMode::InBody, token, source),

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name:
                        local_name!("base") | local_name!("basefont") | local_name!("bgsound")
                        | local_name!("link") | local_name!("meta"),
                    ..
                },
            ) => {
                self.insert_and_pop_element_for(tag);
                ProcessResult::DoneAckSelfClosing
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("title"),
                    ..
                },
            ) => self.parse_raw_data(tag, TokenizerState::Rcdata),

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("noframes") | local_name!("style") | local_name!("noscript"),
                    ..
                },
            ) => {
                if !self.options.scripting_enabled && tag.name == local_name!("noscript") {
                    self.insert_element_for(tag);
                    self.mode.set(InsertionMode::InHeadNoscript);
                    ProcessResult::Done
                } else {
                    self.parse_raw_data(tag, TokenizerState::Rawtext)
                }
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("script"),
                    ..
                },
            ) => {
                let elem = create_element(
                    &self.sink,
                    QualName::new(None, ns!(html), local_name!("script")),
                    tag.attrs,
                    ElementFlags::default(),
                );
                if self.is_fragment() {
                    self.sink.mark_script_already_started(&elem);
                }
                self.insert_appropriately(NodeOrText::Node(elem.clone()), None);
                self.push(&elem, tag.location);
                self.to_raw_text_mode(TokenizerState::ScriptData)
            },

            Token::Tag(
                Tag {
                    kind: TagKind::EndTag,
                    name: local_name!("head"),
                    ..
                },
            ) => {
                self.pop();
                self.mode.set(InsertionMode::AfterHead);
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("template"),
                    ..
                },
            ) => {
                self.active_formatting.borrow_mut().insert_marker();
                self.frameset_ok.set(false);
                self.mode.set(InsertionMode::InTemplate);
                self.template_modes.borrow_mut().push(InsertionMode::InTemplate);

                if self.should_attach_declarative_shadow(&tag) {
                    let mut shadow_host = self.open_elems.borrow().current().clone();
                    if self.is_fragment() && self.open_elems.borrow().is_root_html_element_current() {
                        shadow_host = self.context_elem.borrow().clone().unwrap();
                    }

                    let template = self.insert_foreign_element(tag.clone(), ns!(html), true);

                    let succeeded = self.attach_declarative_shadow(&tag, &shadow_host, &template);
                    if !succeeded {
                        self.pop();
                        self.insert_element_for(tag);
                    }
                } else {
                    self.insert_element_for(tag);
                }

                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::EndTag,
                    name: local_name!("template"),
                    ..
                },
            ) => {
                if !self.in_html_elem_named(local_name!("template")) {
                    let loc = tag.location;
                    self.unexpected(&tag, loc);
                } else {
                    self.generate_implied_end_tags(thorough_implied_end);
                    self.expect_to_close(local_name!("template"));
                    self.clear_active_formatting_to_marker();
                    self.template_modes.borrow_mut().pop();
                    self.mode.set(self.reset_insertion_mode());
                }
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("head"),
                    ..
                },
            ) => {
                let loc = tag.location;
                self.unexpected(&tag, loc)
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::EndTag,
                    ..
                },
            ) if !matches!(tag.name, local_name!("body") | local_name!("html") | local_name!("br")) => {
                let loc = tag.location;
                self.unexpected(&tag, loc)
            },

            token => {
                self.pop();
                ProcessResult::Reprocess(InsertionMode::AfterHead, token)
            },
        }
    }

    //§ parsing-main-inbody
    fn step_in_body(&self, token: Token, source: &mut dyn TokenSource) -> ProcessResult<Sink::Handle> {
        match token {
            Token::NullCharacter(loc) => self.unexpected(&token, loc),

            Token::Characters(_, text, loc) => {
                self.reconstruct_active_formatting_elements();
                if any_not_whitespace(&text) {
                    self.frameset_ok.set(false);
                }
                self.append_text(text, loc)
            },

            Token::Comment(text, _) => self.append_comment(text),

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("html"),
                    ..
                },
            ) => {
                let loc = tag.location;
                self.unexpected(&Token::Tag(tag.clone()), loc);
                if !self.in_html_elem_named(local_name!("template")) {
                    let top = self.html_elem().clone();
                    self.sink.add_attrs_if_missing(&top, tag.attrs);
                }
                ProcessResult::Done
            },

            Token::Tag(Tag {
                kind: TagKind::StartTag,
                name:
                    local_name!("base") | local_name!("basefont") | local_name!("bgsound")
                    | local_name!("link") | local_name!("meta") | local_name!("noframes")
                    | local_name!("script") | local_name!("style") | local_name!("template")
                    | local_name!("title"),
                ..
            })
            | Token::Tag(Tag {
                kind: TagKind::EndTag,
                name: local_name!("template"),
                ..
            }) => self.step(InsertionMode::InHead, token, source),

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("body"),
                    ..
                },
            ) => {
                let loc = tag.location;
                self.unexpected(&Token::Tag(tag.clone()), loc);
                if let Some(body) = self.body_elem() {
                    let body = body.clone();
                    if self.open_elems.borrow().len() != 1 && !self.in_html_elem_named(local_name!("template")) {
                        self.frameset_ok.set(false);
                        self.sink.add_attrs_if_missing(&body, tag.attrs);
                    }
                }
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("frameset"),
                    ..
                },
            ) => {
                let loc = tag.location;
                self.unexpected(&Token::Tag(tag.clone()), loc);
                if !self.frameset_ok.get() {
                    return ProcessResult::Done;
                }
                let Some(body) = self.body_elem().map(|b| b.clone()) else {
                    return ProcessResult::Done;
                };
                self.sink.remove_from_parent(&body);
                self.open_elems.borrow_mut().shorten_to_length(1);
                self.insert_element_for(tag);
                self.mode.set(InsertionMode::InFrameset);
                ProcessResult::Done
            },

            Token::Eof(_) => {
                if !self.template_modes.borrow().is_empty() {
                    self.step(InsertionMode::InTemplate, token, source)
                } else {
                    self.check_body_end();
                    self.stop_parsing()
                }
            },

            Token::Tag(
                Tag {
                    kind: TagKind::EndTag,
                    name: local_name!("body"),
                    ..
                },
            ) => {
                if self.in_scope_named(default_scope, local_name!("body")) {
                    self.check_body_end();
                    self.mode.set(InsertionMode::AfterBody);
                } else {
                    self.report(ErrorCode::EndTagWithoutMatchingOpenElement, token_location(&token), None);
                }
                ProcessResult::Done
            },

            Token::Tag(
                Tag {
                    kind: TagKind::EndTag,
                    name: local_name!("html"),
                    ..
                },
            ) => {
                if self.in_scope_named(default_scope, local_name!("body")) {
                    self.check_body_end();
                    ProcessResult::Reprocess(InsertionMode::AfterBody, token)
                } else {
                    self.report(ErrorCode::EndTagWithoutMatchingOpenElement, token_location(&token), None);
                    ProcessResult::Done
                }
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name:
                        local_name!("address") | local_name!("article") | local_name!("aside")
                        | local_name!("blockquote") | local_name!("center") | local_name!("details")
                        | local_name!("dialog") | local_name!("dir") | local_name!("div")
                        | local_name!("dl") | local_name!("fieldset") | local_name!("figcaption")
                        | local_name!("figure") | local_name!("footer") | local_name!("header")
                        | local_name!("hgroup") | local_name!("main") | local_name!("menu")
                        | local_name!("nav") | local_name!("ol") | local_name!("p")
                        | local_name!("search") | local_name!("section") | local_name!("summary")
                        | local_name!("ul"),
                    ..
                },
            ) => {
                self.close_p_element_in_button_scope();
                self.insert_element_for(tag);
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("h1") | local_name!("h2") | local_name!("h3") | local_name!("h4")
                        | local_name!("h5") | local_name!("h6"),
                    ..
                },
            ) => {
                self.close_p_element_in_button_scope();
                if self.current_node_in(heading_tag) {
                    self.report(
                        ErrorCode::UnexpectedToken { mode: self.mode.get().name() },
                        tag.location,
                        Some("nested heading tags".into()),
                    );
                    self.pop();
                }
                self.insert_element_for(tag);
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("pre") | local_name!("listing"),
                    ..
                },
            ) => {
                self.close_p_element_in_button_scope();
                self.insert_element_for(tag);
                self.ignore_lf.set(true);
                self.frameset_ok.set(false);
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("form"),
                    ..
                },
            ) => {
                if self.form_elem.borrow().is_some() && !self.in_html_elem_named(local_name!("template")) {
                    self.report(
                        ErrorCode::UnexpectedToken { mode: self.mode.get().name() },
                        tag.location,
                        Some("nested forms".into()),
                    );
                } else {
                    self.close_p_element_in_button_scope();
                    let elem = self.insert_element_for(tag);
                    if !self.in_html_elem_named(local_name!("template")) {
                        *self.form_elem.borrow_mut() = Some(elem);
                    }
                }
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("li") | local_name!("dd") | local_name!("dt"),
                    ..
                },
            ) => {
                declare_tag_set!(close_list = "li");
                declare_tag_set!(close_defn = "dd" "dt");
                declare_tag_set!(extra_special = [special_tag] - "address" "div" "p");
                let list = tag.name == local_name!("li");

                self.frameset_ok.set(false);

                let mut to_close = None;
                for node in self.open_elems.borrow().iter().rev() {
                    let elem_name = self.sink.elem_name(node);
                    let can_close = if list {
                        close_list(elem_name)
                    } else {
                        close_defn(elem_name)
                    };
                    if can_close {
                        to_close = Some(elem_name.local.clone());
                        break;
                    }
                    if extra_special(elem_name) {
                        break;
                    }
                }

                if let Some(name) = to_close {
                    self.generate_implied_end_except(name.clone());
                    self.expect_to_close(name);
                }

                self.close_p_element_in_button_scope();
                self.insert_element_for(tag);
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("plaintext"),
                    ..
                },
            ) => {
                self.close_p_element_in_button_scope();
                self.insert_element_for(tag);
                ProcessResult::ToPlaintext
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("button"),
                    ..
                },
            ) => {
                if self.in_scope_named(default_scope, local_name!("button")) {
                    self.report(
                        ErrorCode::UnexpectedToken { mode: self.mode.get().name() },
                        tag.location,
                        Some("nested buttons".into()),
                    );
                    self.generate_implied_end_tags(cursory_implied_end);
                    self.pop_until_named(local_name!("button"));
                }
                self.reconstruct_active_formatting_elements();
                self.insert_element_for(tag);
                self.frameset_ok.set(false);
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::EndTag,
                    name:
                        local_name!("address") | local_name!("article") | local_name!("aside")
                        | local_name!("blockquote") | local_name!("button") | local_name!("center")
                        | local_name!("details") | local_name!("dialog") | local_name!("dir")
                        | local_name!("div") | local_name!("dl") | local_name!("fieldset")
                        | local_name!("figcaption") | local_name!("figure") | local_name!("footer")
                        | local_name!("header") | local_name!("hgroup") | local_name!("listing")
                        | local_name!("main") | local_name!("menu") | local_name!("nav")
                        | local_name!("ol") | local_name!("pre") | local_name!("search")
                        | local_name!("section") | local_name!("summary") | local_name!("ul"),
                    ..
                },
            ) => {
                if !self.in_scope_named(default_scope, tag.name.clone()) {
                    let loc = tag.location;
                    self.unexpected(&tag, loc);
                } else {
                    self.generate_implied_end_tags(cursory_implied_end);
                    self.expect_to_close(tag.name);
                }
                ProcessResult::Done
            },

            Token::Tag(
                Tag {
                    kind: TagKind::EndTag,
                    name: local_name!("form"),
                    ..
                },
            ) => {
                if !self.in_html_elem_named(local_name!("template")) {
                    let Some(node) = self.form_elem.take() else {
                        self.report(ErrorCode::EndTagWithoutMatchingOpenElement, token_location(&token), None);
                        return ProcessResult::Done;
                    };
                    if !self.in_scope(default_scope, |n| self.sink.same_node(&node, n)) {
                        self.report(ErrorCode::EndTagWithoutMatchingOpenElement, token_location(&token), None);
                        return ProcessResult::Done;
                    }
                    self.generate_implied_end_tags(cursory_implied_end);
                    let current = self.current_node().clone();
                    self.remove_from_stack(&node);
                    if !self.sink.same_node(&current, &node) {
                        self.report(ErrorCode::ClosingOfElementWithOpenChildElements, token_location(&token), None);
                    }
                } else {
                    if !self.in_scope_named(default_scope, local_name!("form")) {
                        self.report(ErrorCode::EndTagWithoutMatchingOpenElement, token_location(&token), None);
                        return ProcessResult::Done;
                    }
                    self.generate_implied_end_tags(cursory_implied_end);
                    if !self.current_node_named(local_name!("form")) {
                        self.report(ErrorCode::ClosingOfElementWithOpenChildElements, token_location(&token), None);
                    }
                    self.pop_until_named(local_name!("form"));
                }
                ProcessResult::Done
            },

            Token::Tag(
                Tag {
                    kind: TagKind::EndTag,
                    name: local_name!("p"),
                    ..
                },
            ) => {
                if !self.in_scope_named(button_scope, local_name!("p")) {
                    self.report(ErrorCode::EndTagWithoutMatchingOpenElement, token_location(&token), None);
                    self.insert_phantom(local_name!("p"));
                }
                self.close_p_element();
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::EndTag,
                    name: local_name!("li") | local_name!("dd") | local_name!("dt"),
                    ..
                },
            ) => {
                let in_scope = if tag.name == local_name!("li") {
                    self.in_scope_named(list_item_scope, tag.name.clone())
                } else {
                    self.in_scope_named(default_scope, tag.name.clone())
                };
                if in_scope {
                    self.generate_implied_end_except(tag.name.clone());
                    self.expect_to_close(tag.name);
                } else {
                    self.report(ErrorCode::EndTagWithoutMatchingOpenElement, tag.location, None);
                }
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::EndTag,
                    name: local_name!("h1") | local_name!("h2") | local_name!("h3") | local_name!("h4")
                        | local_name!("h5") | local_name!("h6"),
                    ..
                },
            ) => {
                if self.has_numbered_header_in_scope() {
                    self.generate_implied_end_tags(cursory_implied_end);
                    if !self.current_node_named(tag.name.clone()) {
                        self.report(ErrorCode::EndTagWithoutMatchingOpenElement, tag.location, Some("closing wrong heading tag".into()));
                    }
                    self.pop_until(heading_tag);
                } else {
                    self.report(ErrorCode::EndTagWithoutMatchingOpenElement, tag.location, None);
                }
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("a"),
                    ..
                },
            ) => {
                self.handle_misnested_a_tags(&tag);
                self.reconstruct_active_formatting_elements();
                self.create_formatting_element_for(tag);
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name:
                        local_name!("b") | local_name!("big") | local_name!("code") | local_name!("em")
                        | local_name!("font") | local_name!("i") | local_name!("s") | local_name!("small")
                        | local_name!("strike") | local_name!("strong") | local_name!("tt") | local_name!("u"),
                    ..
                },
            ) => {
                self.reconstruct_active_formatting_elements();
                self.create_formatting_element_for(tag);
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("nobr"),
                    ..
                },
            ) => {
                self.reconstruct_active_formatting_elements();
                if self.in_scope_named(default_scope, local_name!("nobr")) {
                    self.report(
                        ErrorCode::UnexpectedToken { mode: self.mode.get().name() },
                        tag.location,
                        Some("nested <nobr>".into()),
                    );
                    self.adoption_agency(local_name!("nobr"));
                    self.reconstruct_active_formatting_elements();
                }
                self.create_formatting_element_for(tag);
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::EndTag,
                    name:
                        local_name!("a") | local_name!("b") | local_name!("big") | local_name!("code")
                        | local_name!("em") | local_name!("font") | local_name!("i") | local_name!("nobr")
                        | local_name!("s") | local_name!("small") | local_name!("strike")
                        | local_name!("strong") | local_name!("tt") | local_name!("u"),
                    ..
                },
            ) => {
                self.adoption_agency(tag.name);
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("applet") | local_name!("marquee") | local_name!("object"),
                    ..
                },
            ) => {
                self.reconstruct_active_formatting_elements();
                self.insert_element_for(tag);
                self.active_formatting.borrow_mut().insert_marker();
                self.frameset_ok.set(false);
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::EndTag,
                    name: local_name!("applet") | local_name!("marquee") | local_name!("object"),
                    ..
                },
            ) => {
                if !self.in_scope_named(default_scope, tag.name.clone()) {
                    let loc = tag.location;
                    self.unexpected(&tag, loc);
                } else {
                    self.generate_implied_end_tags(cursory_implied_end);
                    self.expect_to_close(tag.name);
                    self.clear_active_formatting_to_marker();
                }
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("table"),
                    ..
                },
            ) => {
                if self.quirks_mode.get() != QuirksMode::Quirks {
                    self.close_p_element_in_button_scope();
                }
                self.insert_element_for(tag);
                self.frameset_ok.set(false);
                self.mode.set(InsertionMode::InTable);
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::EndTag,
                    name: local_name!("br"),
                    ..
                },
            ) => {
                let loc = tag.location;
                self.unexpected(&tag, loc);
                self.step_in_body(
                    Token::Tag(Tag {
                        kind: TagKind::StartTag,
                        attrs: vec![],
                        ..tag
                    }),
                    source,
                )
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name:
                        local_name!("area") | local_name!("br") | local_name!("embed") | local_name!("img")
                        | local_name!("keygen") | local_name!("wbr") | local_name!("input"),
                    ..
                },
            ) => {
                let keep_frameset_ok = tag.name == local_name!("input") && self.is_type_hidden(&tag);
                self.reconstruct_active_formatting_elements();
                self.insert_and_pop_element_for(tag);
                if !keep_frameset_ok {
                    self.frameset_ok.set(false);
                }
                ProcessResult::DoneAckSelfClosing
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("param") | local_name!("source") | local_name!("track"),
                    ..
                },
            ) => {
                self.insert_and_pop_element_for(tag);
                ProcessResult::DoneAckSelfClosing
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("hr"),
                    ..
                },
            ) => {
                self.close_p_element_in_button_scope();
                self.insert_and_pop_element_for(tag);
                self.frameset_ok.set(false);
                ProcessResult::DoneAckSelfClosing
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("image"),
                    ..
                },
            ) => {
                let loc = tag.location;
                self.unexpected(&tag, loc);
                self.step_in_body(
                    Token::Tag(Tag {
                        name: local_name!("img"),
                        ..tag
                    }),
                    source,
                )
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("textarea"),
                    ..
                },
            ) => {
                self.ignore_lf.set(true);
                self.frameset_ok.set(false);
                self.parse_raw_data(tag, TokenizerState::Rcdata)
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("xmp"),
                    ..
                },
            ) => {
                self.close_p_element_in_button_scope();
                self.reconstruct_active_formatting_elements();
                self.frameset_ok.set(false);
                self.parse_raw_data(tag, TokenizerState::Rawtext)
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("iframe"),
                    ..
                },
            ) => {
                self.frameset_ok.set(false);
                self.parse_raw_data(tag, TokenizerState::Rawtext)
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("noembed"),
                    ..
                },
            ) => self.parse_raw_data(tag, TokenizerState::Rawtext),

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("select"),
                    ..
                },
            ) => {
                self.reconstruct_active_formatting_elements();
                self.insert_element_for(tag);
                self.frameset_ok.set(false);
                self.mode.set(match self.mode.get() {
                    InsertionMode::InTable
                    | InsertionMode::InCaption
                    | InsertionMode::InTableBody
                    | InsertionMode::InRow
                    | InsertionMode::InCell => InsertionMode::InSelectInTable,
                    _ => InsertionMode::InSelect,
                });
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("optgroup") | local_name!("option"),
                    ..
                },
            ) => {
                if self.current_node_named(local_name!("option")) {
                    self.pop();
                }
                self.reconstruct_active_formatting_elements();
                self.insert_element_for(tag);
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("rb") | local_name!("rtc"),
                    ..
                },
            ) => {
                if self.in_scope_named(default_scope, local_name!("ruby")) {
                    self.generate_implied_end_tags(cursory_implied_end);
                }
                if !self.current_node_named(local_name!("ruby")) {
                    let loc = tag.location;
                    self.unexpected(&Token::Tag(tag.clone()), loc);
                }
                self.insert_element_for(tag);
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("rp") | local_name!("rt"),
                    ..
                },
            ) => {
                if self.in_scope_named(default_scope, local_name!("ruby")) {
                    self.generate_implied_end_except(local_name!("rtc"));
                }
                if !self.current_node_named(local_name!("rtc")) && !self.current_node_named(local_name!("ruby")) {
                    let loc = tag.location;
                    self.unexpected(&Token::Tag(tag.clone()), loc);
                }
                self.insert_element_for(tag);
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("math"),
                    ..
                },
            ) => self.enter_foreign(tag, ns!(mathml)),

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("svg"),
                    ..
                },
            ) => self.enter_foreign(tag, ns!(svg)),

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name:
                        local_name!("caption") | local_name!("col") | local_name!("colgroup")
                        | local_name!("frame") | local_name!("head") | local_name!("tbody")
                        | local_name!("td") | local_name!("tfoot") | local_name!("th")
                        | local_name!("thead") | local_name!("tr"),
                    ..
                },
            ) => {
                let loc = tag.location;
                self.unexpected(&tag, loc);
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    ..
                },
            ) => {
                if self.options.scripting_enabled && tag.name == local_name!("noscript") {
                    self.parse_raw_data(tag, TokenizerState::Rawtext)
                } else {
                    self.reconstruct_active_formatting_elements();
                    self.insert_element_for(tag);
                    ProcessResult::Done
                }
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::EndTag,
                    ..
                },
            ) => {
                self.process_end_tag_in_body(tag);
                ProcessResult::Done
            },

            _ => unreachable!("InBody mode only ever sees tags, text, and comments"),
        }
    }

    //§ parsing-main-intable
    fn step_in_table(&self, token: Token, source: &mut dyn TokenSource) -> ProcessResult<Sink::Handle> {
        match token {
            Token::NullCharacter(..) => self.process_chars_in_table(token, source),
            Token::Characters(..) => self.process_chars_in_table(token, source),

            Token::Comment(text, _) => self.append_comment(text),

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("caption"),
                    ..
                },
            ) => {
                self.pop_until_current(table_scope);
                self.active_formatting.borrow_mut().insert_marker();
                self.insert_element_for(tag);
                self.mode.set(InsertionMode::InCaption);
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("colgroup"),
                    ..
                },
            ) => {
                self.pop_until_current(table_scope);
                self.insert_element_for(tag);
                self.mode.set(InsertionMode::InColumnGroup);
                ProcessResult::Done
            },

            Token::Tag(
                Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("col"),
                    ..
                },
            ) => {
                self.pop_until_current(table_scope);
                self.insert_phantom(local_name!("colgroup"));
                ProcessResult::Reprocess(InsertionMode::InColumnGroup, token)
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("tbody") | local_name!("tfoot") | local_name!("thead"),
                    ..
                },
            ) => {
                self.pop_until_current(table_scope);
                self.insert_element_for(tag);
                self.mode.set(InsertionMode::InTableBody);
                ProcessResult::Done
            },

            Token::Tag(
                Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("td") | local_name!("th") | local_name!("tr"),
                    ..
                },
            ) => {
                self.pop_until_current(table_scope);
                self.insert_phantom(local_name!("tbody"));
                ProcessResult::Reprocess(InsertionMode::InTableBody, token)
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("table"),
                    ..
                },
            ) => {
                let loc = tag.location;
                self.unexpected(&Token::Tag(tag.clone()), loc);
                if self.in_scope_named(table_scope, local_name!("table")) {
                    self.pop_until_named(local_name!("table"));
                    ProcessResult::Reprocess(self.reset_insertion_mode(), Token::Tag(tag))
                } else {
                    ProcessResult::Done
                }
            },

            Token::Tag(
                Tag {
                    kind: TagKind::EndTag,
                    name: local_name!("table"),
                    ..
                },
            ) => {
                if self.in_scope_named(table_scope, local_name!("table")) {
                    self.pop_until_named(local_name!("table"));
                    self.mode.set(self.reset_insertion_mode());
                } else {
                    let loc = token_location(&token);
                    self.unexpected(&token, loc);
                }
                ProcessResult::Done
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::EndTag,
                    name:
                        local_name!("body") | local_name!("caption") | local_name!("col")
                        | local_name!("colgroup") | local_name!("html") | local_name!("tbody")
                        | local_name!("td") | local_name!("tfoot") | local_name!("th")
                        | local_name!("thead") | local_name!("tr"),
                    ..
                },
            ) => {
                let loc = tag.location;
                self.unexpected(&tag, loc)
            },

            Token::Tag(Tag {
                name:
                    local_name!("style") | local_name!("script") | local_name!("template"),
                ..
            })
            | Token::Tag(Tag {
                kind: TagKind::EndTag,
                name: local_name!("template"),
                ..
            }) => self.step(InsertionMode::InHead, token, source),

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("input"),
                    ..
                },
            ) => {
                let loc = tag.location;
                self.unexpected(&Token::Tag(tag.clone()), loc);
                if self.is_type_hidden(&tag) {
                    self.insert_and_pop_element_for(tag);
                    ProcessResult::DoneAckSelfClosing
                } else {
                    self.foster_parent_in_body(Token::Tag(tag), source)
                }
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("form"),
                    ..
                },
            ) => {
                let loc = tag.location;
                self.unexpected(&Token::Tag(tag.clone()), loc);
                if !self.in_html_elem_named(local_name!("template")) && self.form_elem.borrow().is_none() {
                    let elem = self.insert_and_pop_element_for(tag);
                    *self.form_elem.borrow_mut() = Some(elem);
                }
                ProcessResult::Done
            },

            Token::Eof(_) => self.step(InsertionMode::InBody, token, source),

            token => {
                let loc = token_location(&token);
                self.unexpected(&token, loc);
                self.foster_parent_in_body(token, source)
            },
        }
    }

    /// Foreign-content token dispatch (spec.md §4.4): reached whenever
    /// [`Parser::is_in_foreign_content`] says the adjusted current node is
    /// non-HTML.
    pub(crate) fn step_foreign(
        &self,
        token: Token,
        source: &mut dyn TokenSource,
    ) -> ProcessResult<Sink::Handle> {
        match token {
            Token::NullCharacter(loc) => {
                self.unexpected(&token, loc);
                self.append_text("\u{fffd}".into(), loc)
            },

            Token::Characters(_, text, loc) => {
                if any_not_whitespace(&text) {
                    self.frameset_ok.set(false);
                }
                self.append_text(text, loc)
            },

            Token::Comment(text, _) => self.append_comment(text),

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name:
                        local_name!("b") | local_name!("big") | local_name!("blockquote") | local_name!("body")
                        | local_name!("br") | local_name!("center") | local_name!("code") | local_name!("dd")
                        | local_name!("div") | local_name!("dl") | local_name!("dt") | local_name!("em")
                        | local_name!("embed") | local_name!("h1") | local_name!("h2") | local_name!("h3")
                        | local_name!("h4") | local_name!("h5") | local_name!("h6") | local_name!("head")
                        | local_name!("hr") | local_name!("i") | local_name!("img") | local_name!("li")
                        | local_name!("listing") | local_name!("menu") | local_name!("meta")
                        | local_name!("nobr") | local_name!("ol") | local_name!("p") | local_name!("pre")
                        | local_name!("ruby") | local_name!("s") | local_name!("small") | local_name!("span")
                        | local_name!("strong") | local_name!("strike") | local_name!("sub")
                        | local_name!("sup") | local_name!("table") | local_name!("tt") | local_name!("u")
                        | local_name!("ul") | local_name!("var"),
                    ..
                },
            )
            | Token::Tag(
                tag @ Tag {
                    kind: TagKind::EndTag,
                    name: local_name!("br") | local_name!("p"),
                    ..
                },
            ) => self.unexpected_start_tag_in_foreign_content(tag, source),

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    name: local_name!("font"),
                    ..
                },
            ) => {
                let unexpected = tag.attrs.iter().any(|attr| {
                    matches!(
                        attr.name.expanded(),
                        expanded_name!("", "color") | expanded_name!("", "face") | expanded_name!("", "size")
                    )
                });
                if unexpected {
                    self.unexpected_start_tag_in_foreign_content(tag, source)
                } else {
                    self.foreign_start_tag(tag)
                }
            },

            Token::Tag(
                tag @ Tag {
                    kind: TagKind::StartTag,
                    ..
                },
            ) => self.foreign_start_tag(tag),

            // NOTE: </script> inside an SVG `<script>` element isn't handled
            // specially here; SVG scripting execution is out of scope.
            Token::Tag(
                tag @ Tag {
                    kind: TagKind::EndTag,
                    ..
                },
            ) => {
                let mut first = true;
                let mut stack_idx = self.open_elems.borrow().len() - 1;
                loop {
                    if stack_idx == 0 {
                        return ProcessResult::Done;
                    }

                    let (html, eq) = {
                        let open_elems = self.open_elems.borrow();
                        let node_name = self.sink.elem_name(&open_elems[stack_idx]);
                        let html = *node_name.ns == ns!(html);
                        let eq = node_name.local.eq_ignore_ascii_case(&tag.name);
                        (html, eq)
                    };
                    if !first && html {
                        let mode = self.mode.get();
                        return self.step(mode, Token::Tag(tag), source);
                    }

                    if eq {
                        self.open_elems.borrow_mut().shorten_to_length(stack_idx);
                        return ProcessResult::Done;
                    }

                    if first {
                        let loc = tag.location;
                        self.unexpected(&tag, loc);
                        first = false;
                    }
                    stack_idx -= 1;
                }
            },

            _ => unreachable!("foreign content only ever sees tags, text and comments"),
        }
    }
}

fn token_location(token: &Token) -> SourceSpan {
    match *token {
        Token::Tag(ref tag) => tag.location,
        Token::Comment(_, loc)
        | Token::Characters(_, _, loc)
        | Token::NullCharacter(loc)
        | Token::Eof(loc) => loc,
    }
}
