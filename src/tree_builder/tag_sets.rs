// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Named tag sets: the scope boundaries, the "special" elements set, and a
//! handful of ad-hoc sets the insertion-mode rules reach for. Grounded on
//! the `declare_tag_set!` call sites visible in the teacher's
//! `tree_builder/mod.rs` and `rules.rs` (the `tag_sets.rs` module itself
//! was not present in the retrieved snapshot, but its call sites spell out
//! exactly what it must contain).

use markup5ever::ExpandedName;

fn is_html(name: ExpandedName) -> bool {
    *name.ns == markup5ever::ns!(html)
}

fn is_mathml(name: ExpandedName) -> bool {
    *name.ns == markup5ever::ns!(mathml)
}

fn is_svg(name: ExpandedName) -> bool {
    *name.ns == markup5ever::ns!(svg)
}

// https://html.spec.whatwg.org/multipage/#has-an-element-in-the-specific-scope
declare_tag_set!(default_scope =
    "applet" "caption" "html" "table" "td" "th" "marquee" "object" "template");

declare_tag_set!(list_item_scope = [default_scope] + "ol" "ul");
declare_tag_set!(button_scope = [default_scope] + "button");
declare_tag_set!(table_scope = "html" "table" "template");

/// https://html.spec.whatwg.org/multipage/#has-an-element-in-select-scope
/// Every element is a boundary except `<optgroup>` and `<option>`
/// themselves, so this is the complement of those two.
pub(crate) fn select_scope(name: ExpandedName) -> bool {
    !(is_html(name)
        && matches!(
            *name.local,
            markup5ever::local_name!("optgroup") | markup5ever::local_name!("option")
        ))
}

/// https://html.spec.whatwg.org/multipage/#special
pub(crate) fn special_tag(name: ExpandedName) -> bool {
    if is_mathml(name) {
        return matches!(
            *name.local,
            markup5ever::local_name!("mi")
                | markup5ever::local_name!("mo")
                | markup5ever::local_name!("mn")
                | markup5ever::local_name!("ms")
                | markup5ever::local_name!("mtext")
                | markup5ever::local_name!("annotation-xml")
        );
    }
    if is_svg(name) {
        return matches!(
            *name.local,
            markup5ever::local_name!("foreignObject")
                | markup5ever::local_name!("desc")
                | markup5ever::local_name!("title")
        );
    }
    if !is_html(name) {
        return false;
    }
    matches!(
        *name.local,
        markup5ever::local_name!("address")
            | markup5ever::local_name!("applet")
            | markup5ever::local_name!("area")
            | markup5ever::local_name!("article")
            | markup5ever::local_name!("aside")
            | markup5ever::local_name!("base")
            | markup5ever::local_name!("basefont")
            | markup5ever::local_name!("bgsound")
            | markup5ever::local_name!("blockquote")
            | markup5ever::local_name!("body")
            | markup5ever::local_name!("br")
            | markup5ever::local_name!("button")
            | markup5ever::local_name!("caption")
            | markup5ever::local_name!("center")
            | markup5ever::local_name!("col")
            | markup5ever::local_name!("colgroup")
            | markup5ever::local_name!("dd")
            | markup5ever::local_name!("details")
            | markup5ever::local_name!("dir")
            | markup5ever::local_name!("div")
            | markup5ever::local_name!("dl")
            | markup5ever::local_name!("dt")
            | markup5ever::local_name!("embed")
            | markup5ever::local_name!("fieldset")
            | markup5ever::local_name!("figcaption")
            | markup5ever::local_name!("figure")
            | markup5ever::local_name!("footer")
            | markup5ever::local_name!("form")
            | markup5ever::local_name!("frame")
            | markup5ever::local_name!("frameset")
            | markup5ever::local_name!("h1")
            | markup5ever::local_name!("h2")
            | markup5ever::local_name!("h3")
            | markup5ever::local_name!("h4")
            | markup5ever::local_name!("h5")
            | markup5ever::local_name!("h6")
            | markup5ever::local_name!("head")
            | markup5ever::local_name!("header")
            | markup5ever::local_name!("hgroup")
            | markup5ever::local_name!("hr")
            | markup5ever::local_name!("html")
            | markup5ever::local_name!("iframe")
            | markup5ever::local_name!("img")
            | markup5ever::local_name!("input")
            | markup5ever::local_name!("keygen")
            | markup5ever::local_name!("li")
            | markup5ever::local_name!("link")
            | markup5ever::local_name!("listing")
            | markup5ever::local_name!("main")
            | markup5ever::local_name!("marquee")
            | markup5ever::local_name!("menu")
            | markup5ever::local_name!("meta")
            | markup5ever::local_name!("nav")
            | markup5ever::local_name!("noembed")
            | markup5ever::local_name!("noframes")
            | markup5ever::local_name!("noscript")
            | markup5ever::local_name!("object")
            | markup5ever::local_name!("ol")
            | markup5ever::local_name!("p")
            | markup5ever::local_name!("param")
            | markup5ever::local_name!("plaintext")
            | markup5ever::local_name!("pre")
            | markup5ever::local_name!("script")
            | markup5ever::local_name!("section")
            | markup5ever::local_name!("select")
            | markup5ever::local_name!("source")
            | markup5ever::local_name!("style")
            | markup5ever::local_name!("summary")
            | markup5ever::local_name!("table")
            | markup5ever::local_name!("tbody")
            | markup5ever::local_name!("td")
            | markup5ever::local_name!("template")
            | markup5ever::local_name!("textarea")
            | markup5ever::local_name!("tfoot")
            | markup5ever::local_name!("th")
            | markup5ever::local_name!("thead")
            | markup5ever::local_name!("title")
            | markup5ever::local_name!("tr")
            | markup5ever::local_name!("track")
            | markup5ever::local_name!("ul")
            | markup5ever::local_name!("wbr")
            | markup5ever::local_name!("xmp")
    )
}

// https://html.spec.whatwg.org/multipage/#generate-implied-end-tags
declare_tag_set!(cursory_implied_end =
    "dd" "dt" "li" "optgroup" "option" "p" "rb" "rp" "rt" "rtc");

declare_tag_set!(thorough_implied_end = [cursory_implied_end] +
    "caption" "colgroup" "tbody" "td" "tfoot" "th" "thead" "tr");

declare_tag_set!(td_th = "td" "th");

declare_tag_set!(foster_target = "table" "tbody" "tfoot" "thead" "tr");

declare_tag_set!(table_outer = "table" "tbody" "tfoot" "thead" "tr");

declare_tag_set!(body_end_ok =
    "dd" "dt" "li" "optgroup" "option" "p" "rp" "rt" "tbody" "td" "tfoot" "th"
    "thead" "tr" "body" "html");

declare_tag_set!(heading_tag =
    "h1" "h2" "h3" "h4" "h5" "h6");

declare_tag_set!(form_associatable =
    "button" "fieldset" "input" "object" "output" "select" "textarea" "img");

declare_tag_set!(listed_form_associatable = [form_associatable] - "img");

declare_tag_set!(table_body_context = "tbody" "tfoot" "thead" "template" "html");

declare_tag_set!(table_row_context = "tr" "template" "html");
