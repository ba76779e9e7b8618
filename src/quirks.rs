// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Doctype + quirks classifier (spec.md §4.3 INITIAL mode, §6).
//!
//! Ported from the shape of the teacher's (missing-from-the-retrieval-pack)
//! `tree_builder/data.rs::doctype_error_and_quirks`; the public/system ID
//! tables themselves come straight from the WHATWG "initial insertion mode"
//! algorithm, which is normative and does not vary between implementations.

use crate::interface::QuirksMode;
use crate::token::Doctype;
use tendril::StrTendril;

fn ascii_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

fn starts_with_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    haystack.len() >= needle.len() && ascii_lower(&haystack[..needle.len()]) == ascii_lower(needle)
}

const QUIRKY_PUBLIC_PREFIXES: &[&str] = &[
    "-//w3o//dtd w3 html strict 3.0//en//",
    "-/w3d/dtd html 4.0 transitional/en",
    "html",
    "+//silmaril//dtd html pro v0r11 19970101//",
    "-//as//dtd html 3.0 aswedit + extensions//",
    "-//advasoft ltd//dtd html 3.0 aswedit + extensions//",
    "-//ietf//dtd html 2.0 level 1//",
    "-//ietf//dtd html 2.0 level 2//",
    "-//ietf//dtd html 2.0 strict level 1//",
    "-//ietf//dtd html 2.0 strict level 2//",
    "-//ietf//dtd html 2.0 strict//",
    "-//ietf//dtd html 2.0//",
    "-//ietf//dtd html 2.1e//",
    "-//ietf//dtd html 3.0//",
    "-//ietf//dtd html 3.2 final//",
    "-//ietf//dtd html 3.2//",
    "-//ietf//dtd html 3//",
    "-//ietf//dtd html level 0//",
    "-//ietf//dtd html level 1//",
    "-//ietf//dtd html level 2//",
    "-//ietf//dtd html level 3//",
    "-//ietf//dtd html strict level 0//",
    "-//ietf//dtd html strict level 1//",
    "-//ietf//dtd html strict level 2//",
    "-//ietf//dtd html strict level 3//",
    "-//ietf//dtd html strict//",
    "-//ietf//dtd html//",
    "-//metrius//dtd metrius presentational//",
    "-//microsoft//dtd internet explorer 2.0 html strict//",
    "-//microsoft//dtd internet explorer 2.0 html//",
    "-//microsoft//dtd internet explorer 2.0 tables//",
    "-//microsoft//dtd internet explorer 3.0 html strict//",
    "-//microsoft//dtd internet explorer 3.0 html//",
    "-//microsoft//dtd internet explorer 3.0 tables//",
    "-//netscape comm. corp.//dtd html//",
    "-//netscape comm. corp.//dtd strict html//",
    "-//o'reilly and associates//dtd html 2.0//",
    "-//o'reilly and associates//dtd html extended 1.0//",
    "-//o'reilly and associates//dtd html extended relaxed 1.0//",
    "-//softquad software//dtd hotmetal pro 6.0::19990601::extensions to html 4.0//",
    "-//softquad//dtd hotmetal pro 4.0::19971010::extensions to html 4.0//",
    "-//spyglass//dtd html 2.0 extended//",
    "-//sq//dtd html 2.0 hotmetal + extensions//",
    "-//sun microsystems corp.//dtd hotjava html//",
    "-//sun microsystems corp.//dtd hotjava strict html//",
    "-//w3c//dtd html 3 1995-03-24//",
    "-//w3c//dtd html 3.2 draft//",
    "-//w3c//dtd html 3.2 final//",
    "-//w3c//dtd html 3.2//",
    "-//w3c//dtd html 3.2s draft//",
    "-//w3c//dtd html 4.0 frameset//",
    "-//w3c//dtd html 4.0 transitional//",
    "-//w3c//dtd html experimental 19960712//",
    "-//w3c//dtd html experimental 970421//",
    "-//w3c//dtd w3 html//",
    "-//w3o//dtd w3 html 3.0//",
    "-//webtechs//dtd mozilla html 2.0//",
    "-//webtechs//dtd mozilla html//",
];

const QUIRKY_PUBLIC_EXACT: &[&str] = &[
    "-//w3o//dtd w3 html strict 3.0//en//",
    "-/w3d/dtd html 4.0 transitional/en",
    "html",
];

const QUIRKY_SYSTEMLESS_PUBLIC_PREFIXES: &[&str] =
    &["-//w3c//dtd html 4.01 frameset//", "-//w3c//dtd html 4.01 transitional//"];

const LIMITED_QUIRKS_PUBLIC_PREFIXES: &[&str] =
    &["-//w3c//dtd xhtml 1.0 frameset//", "-//w3c//dtd xhtml 1.0 transitional//"];

const QUIRKY_SYSTEM_ID: &str = "http://www.ibm.com/data/dtd/v11/ibmxhtml1-transitional.dtd";

/// Classify a `DOCTYPE` token, returning `(error, quirks_mode)`: `error` is
/// whether this DOCTYPE is conforming enough to skip the "non-conforming
/// doctype" parse error (spec.md's `nonConformingDoctype`), and
/// `quirks_mode` is the resulting document mode.
///
/// `iframe_srcdoc` documents are never put into quirks mode regardless of
/// the DOCTYPE, per the WHATWG algorithm -- kept here even though spec.md
/// does not mention srcdoc, since it's a one-line carve-out in the same
/// algorithm this function already implements and costs nothing to keep.
pub fn classify_doctype(doctype: &Doctype, iframe_srcdoc: bool) -> (bool, QuirksMode) {
    let name_ok = matches!(doctype.name.as_deref(), Some("html"));
    let public_id = doctype.public_id.as_deref().unwrap_or("");
    let system_id = doctype.system_id.as_deref().unwrap_or("");

    let conforming = name_ok
        && doctype.public_id.is_none()
        && (doctype.system_id.is_none()
            || system_id == "about:legacy-compat");

    if iframe_srcdoc {
        return (!conforming, QuirksMode::NoQuirks);
    }

    if doctype.force_quirks || !name_ok {
        return (true, QuirksMode::Quirks);
    }

    if QUIRKY_PUBLIC_EXACT
        .iter()
        .any(|p| public_id.eq_ignore_ascii_case(p))
        || QUIRKY_PUBLIC_PREFIXES
            .iter()
            .any(|p| starts_with_ignore_ascii_case(public_id, p))
        || public_id.eq_ignore_ascii_case(QUIRKY_PUBLIC_EXACT[2])
        || system_id.eq_ignore_ascii_case(QUIRKY_SYSTEM_ID)
        || (doctype.system_id.is_none()
            && QUIRKY_SYSTEMLESS_PUBLIC_PREFIXES
                .iter()
                .any(|p| starts_with_ignore_ascii_case(public_id, p)))
    {
        return (true, QuirksMode::Quirks);
    }

    if LIMITED_QUIRKS_PUBLIC_PREFIXES
        .iter()
        .any(|p| starts_with_ignore_ascii_case(public_id, p))
    {
        return (true, QuirksMode::LimitedQuirks);
    }

    (!conforming, QuirksMode::NoQuirks)
}

pub fn new_doctype(
    name: Option<StrTendril>,
    public_id: Option<StrTendril>,
    system_id: Option<StrTendril>,
) -> Doctype {
    Doctype {
        name,
        public_id,
        system_id,
        force_quirks: false,
        location: Default::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctype(name: &str, public: Option<&str>, system: Option<&str>) -> Doctype {
        Doctype {
            name: Some(name.into()),
            public_id: public.map(Into::into),
            system_id: system.map(Into::into),
            force_quirks: false,
            location: Default::default(),
        }
    }

    #[test]
    fn plain_html5_doctype_is_no_quirks() {
        let dt = doctype("html", None, None);
        assert_eq!(classify_doctype(&dt, false), (false, QuirksMode::NoQuirks));
    }

    #[test]
    fn html4_transitional_without_system_id_is_quirks() {
        let dt = doctype("html", Some("-//W3C//DTD HTML 4.01 Transitional//EN"), None);
        assert_eq!(classify_doctype(&dt, false).1, QuirksMode::Quirks);
    }

    #[test]
    fn xhtml1_transitional_is_limited_quirks() {
        let dt = doctype(
            "html",
            Some("-//W3C//DTD XHTML 1.0 Transitional//EN"),
            Some("http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd"),
        );
        assert_eq!(classify_doctype(&dt, false).1, QuirksMode::LimitedQuirks);
    }

    #[test]
    fn force_quirks_always_wins() {
        let mut dt = doctype("html", None, None);
        dt.force_quirks = true;
        assert_eq!(classify_doctype(&dt, false).1, QuirksMode::Quirks);
    }
}
