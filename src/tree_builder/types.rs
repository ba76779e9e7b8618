// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Types used within the tree builder. Not exported to users.

use crate::location::SourceSpan;
use crate::token::{SplitStatus, Tag, TokenizerState};
use tendril::StrTendril;

/// The 23 insertion modes of the tree construction stage.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub(crate) enum InsertionMode {
    /// <https://html.spec.whatwg.org/#the-initial-insertion-mode>
    Initial,
    /// <https://html.spec.whatwg.org/#the-before-html-insertion-mode>
    BeforeHtml,
    /// <https://html.spec.whatwg.org/#the-before-head-insertion-mode>
    BeforeHead,
    /// <https://html.spec.whatwg.org/#parsing-main-inhead>
    InHead,
    /// <https://html.spec.whatwg.org/#parsing-main-inheadnoscript>
    InHeadNoscript,
    /// <https://html.spec.whatwg.org/#the-after-head-insertion-mode>
    AfterHead,
    /// <https://html.spec.whatwg.org/#parsing-main-inbody>
    InBody,
    /// <https://html.spec.whatwg.org/#parsing-main-incdata>
    Text,
    /// <https://html.spec.whatwg.org/#parsing-main-intable>
    InTable,
    /// <https://html.spec.whatwg.org/#parsing-main-intabletext>
    InTableText,
    /// <https://html.spec.whatwg.org/#parsing-main-incaption>
    InCaption,
    /// <https://html.spec.whatwg.org/#parsing-main-incolgroup>
    InColumnGroup,
    /// <https://html.spec.whatwg.org/#parsing-main-intbody>
    InTableBody,
    /// <https://html.spec.whatwg.org/#parsing-main-intr>
    InRow,
    /// <https://html.spec.whatwg.org/#parsing-main-intd>
    InCell,
    /// <https://html.spec.whatwg.org/#parsing-main-inselect>
    InSelect,
    /// <https://html.spec.whatwg.org/#parsing-main-inselectintable>
    InSelectInTable,
    /// <https://html.spec.whatwg.org/#parsing-main-intemplate>
    InTemplate,
    /// <https://html.spec.whatwg.org/#parsing-main-afterbody>
    AfterBody,
    /// <https://html.spec.whatwg.org/#parsing-main-inframeset>
    InFrameset,
    /// <https://html.spec.whatwg.org/#parsing-main-afterframeset>
    AfterFrameset,
    /// <https://html.spec.whatwg.org/#the-after-after-body-insertion-mode>
    AfterAfterBody,
    /// <https://html.spec.whatwg.org/#the-after-after-frameset-insertion-mode>
    AfterAfterFrameset,
}

impl InsertionMode {
    /// The name embedded in `ErrorCode::UnexpectedToken { mode }`, mirroring
    /// the teacher's `exact_errors` messages which splice in `self.mode.get()`.
    pub(crate) fn name(self) -> &'static str {
        match self {
            InsertionMode::Initial => "initial",
            InsertionMode::BeforeHtml => "before html",
            InsertionMode::BeforeHead => "before head",
            InsertionMode::InHead => "in head",
            InsertionMode::InHeadNoscript => "in head noscript",
            InsertionMode::AfterHead => "after head",
            InsertionMode::InBody => "in body",
            InsertionMode::Text => "text",
            InsertionMode::InTable => "in table",
            InsertionMode::InTableText => "in table text",
            InsertionMode::InCaption => "in caption",
            InsertionMode::InColumnGroup => "in column group",
            InsertionMode::InTableBody => "in table body",
            InsertionMode::InRow => "in row",
            InsertionMode::InCell => "in cell",
            InsertionMode::InSelect => "in select",
            InsertionMode::InSelectInTable => "in select in table",
            InsertionMode::InTemplate => "in template",
            InsertionMode::AfterBody => "after body",
            InsertionMode::InFrameset => "in frameset",
            InsertionMode::AfterFrameset => "after frameset",
            InsertionMode::AfterAfterBody => "after after body",
            InsertionMode::AfterAfterFrameset => "after after frameset",
        }
    }
}

/// A subset/refinement of `token::Token`: everything the per-mode rules
/// dispatch on directly. DOCTYPE and `Token::Hibernation` never reach this
/// far (handled before dispatch in `Parser::step`).
#[derive(PartialEq, Eq, Clone, Debug)]
pub(crate) enum Token {
    Tag(Tag),
    Comment(StrTendril, SourceSpan),
    Characters(SplitStatus, StrTendril, SourceSpan),
    NullCharacter(SourceSpan),
    Eof(SourceSpan),
}

pub(crate) enum ProcessResult<Handle> {
    Done,
    DoneAckSelfClosing,
    SplitWhitespace(StrTendril),
    Reprocess(InsertionMode, Token),
    ReprocessForeign(Token),
    Script(Handle),
    ToPlaintext,
    ToRawData(TokenizerState),
}

pub(crate) enum InsertionPoint<Handle> {
    /// Insert as last child in this parent.
    LastChild(Handle),
    /// Insert before this following sibling.
    BeforeSibling(Handle),
    /// Insertion point is decided based on existence of element's parent node.
    TableFosterParenting {
        element: Handle,
        prev_element: Handle,
    },
}
