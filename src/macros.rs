// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Build a tag-name predicate (an `Fn(ExpandedName) -> bool`) from a set of
/// HTML-namespace local names, optionally extending or subtracting another
/// set. Mirrors the combinator the teacher's tree builder uses for scope
/// sets (`default_scope`, `button_scope`, ...) and the special-elements set.
macro_rules! declare_tag_set {
    ($name:ident = $($tag:tt)*) => {
        #[allow(dead_code)]
        pub(crate) fn $name(name: markup5ever::ExpandedName) -> bool {
            declare_tag_set!(@is_one_of name, $($tag)*)
        }
    };

    ($name:ident = [$($base:ident)|+] - $($tag:tt)*) => {
        #[allow(dead_code)]
        pub(crate) fn $name(name: markup5ever::ExpandedName) -> bool {
            if declare_tag_set!(@is_one_of name, $($tag)*) {
                return false;
            }
            $( if $base(name) { return true; } )+
            false
        }
    };

    ($name:ident = [$($base:ident)|+] + $($tag:tt)*) => {
        #[allow(dead_code)]
        pub(crate) fn $name(name: markup5ever::ExpandedName) -> bool {
            if declare_tag_set!(@is_one_of name, $($tag)*) {
                return true;
            }
            $( if $base(name) { return true; } )+
            false
        }
    };

    (@is_one_of $name:ident, $($tag:expr)*) => {
        {
            use markup5ever::{local_name, ns};
            *$name.ns == ns!(html) && ( $( *$name.local == local_name!($tag) )||* )
        }
    };
}
