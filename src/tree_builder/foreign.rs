// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Foreign-content adjustment tables and integration-point predicates
//! (spec.md §4.4). Grounded on `adjust_svg_tag_name`, `adjust_svg_attributes`,
//! `adjust_mathml_attributes`, `adjust_foreign_attributes`, and the
//! `mathml_text_integration_point` / `svg_html_integration_point` call sites
//! in the teacher's `tree_builder/mod.rs`; those two predicates' own
//! definitions were not present in the retrieved snapshot, so they're
//! reconstructed here straight from the normative "integration point"
//! definitions in the WHATWG spec.

use crate::{ExpandedName, LocalName, QualName};
use markup5ever::{local_name, ns, Prefix};

/// https://html.spec.whatwg.org/multipage/#adjust-svg-tag-names
pub fn adjust_svg_tag_name(name: &LocalName) -> Option<LocalName> {
    Some(match *name {
        local_name!("altglyph") => local_name!("altGlyph"),
        local_name!("altglyphdef") => local_name!("altGlyphDef"),
        local_name!("altglyphitem") => local_name!("altGlyphItem"),
        local_name!("animatecolor") => local_name!("animateColor"),
        local_name!("animatemotion") => local_name!("animateMotion"),
        local_name!("animatetransform") => local_name!("animateTransform"),
        local_name!("clippath") => local_name!("clipPath"),
        local_name!("feblend") => local_name!("feBlend"),
        local_name!("fecolormatrix") => local_name!("feColorMatrix"),
        local_name!("fecomponenttransfer") => local_name!("feComponentTransfer"),
        local_name!("fecomposite") => local_name!("feComposite"),
        local_name!("feconvolvematrix") => local_name!("feConvolveMatrix"),
        local_name!("fediffuselighting") => local_name!("feDiffuseLighting"),
        local_name!("fedisplacementmap") => local_name!("feDisplacementMap"),
        local_name!("fedistantlight") => local_name!("feDistantLight"),
        local_name!("fedropshadow") => local_name!("feDropShadow"),
        local_name!("feflood") => local_name!("feFlood"),
        local_name!("fefunca") => local_name!("feFuncA"),
        local_name!("fefuncb") => local_name!("feFuncB"),
        local_name!("fefuncg") => local_name!("feFuncG"),
        local_name!("fefuncr") => local_name!("feFuncR"),
        local_name!("fegaussianblur") => local_name!("feGaussianBlur"),
        local_name!("feimage") => local_name!("feImage"),
        local_name!("femerge") => local_name!("feMerge"),
        local_name!("femergenode") => local_name!("feMergeNode"),
        local_name!("femorphology") => local_name!("feMorphology"),
        local_name!("feoffset") => local_name!("feOffset"),
        local_name!("fepointlight") => local_name!("fePointLight"),
        local_name!("fespecularlighting") => local_name!("feSpecularLighting"),
        local_name!("fespotlight") => local_name!("feSpotLight"),
        local_name!("fetile") => local_name!("feTile"),
        local_name!("feturbulence") => local_name!("feTurbulence"),
        local_name!("foreignobject") => local_name!("foreignObject"),
        local_name!("glyphref") => local_name!("glyphRef"),
        local_name!("lineargradient") => local_name!("linearGradient"),
        local_name!("radialgradient") => local_name!("radialGradient"),
        local_name!("textpath") => local_name!("textPath"),
        _ => return None,
    })
}

fn qname(prefix: Option<Prefix>, ns: markup5ever::Namespace, local: LocalName) -> QualName {
    QualName::new(prefix, ns, local)
}

/// https://html.spec.whatwg.org/multipage/#adjust-svg-attributes
pub fn adjust_svg_attribute_name(name: &LocalName) -> Option<QualName> {
    let adjusted = match *name {
        local_name!("attributename") => "attributeName",
        local_name!("attributetype") => "attributeType",
        local_name!("basefrequency") => "baseFrequency",
        local_name!("baseprofile") => "baseProfile",
        local_name!("calcmode") => "calcMode",
        local_name!("clippathunits") => "clipPathUnits",
        local_name!("diffuseconstant") => "diffuseConstant",
        local_name!("edgemode") => "edgeMode",
        local_name!("filterunits") => "filterUnits",
        local_name!("glyphref") => "glyphRef",
        local_name!("gradienttransform") => "gradientTransform",
        local_name!("gradientunits") => "gradientUnits",
        local_name!("kernelmatrix") => "kernelMatrix",
        local_name!("kernelunitlength") => "kernelUnitLength",
        local_name!("keypoints") => "keyPoints",
        local_name!("keysplines") => "keySplines",
        local_name!("keytimes") => "keyTimes",
        local_name!("lengthadjust") => "lengthAdjust",
        local_name!("limitingconeangle") => "limitingConeAngle",
        local_name!("markerheight") => "markerHeight",
        local_name!("markerunits") => "markerUnits",
        local_name!("markerwidth") => "markerWidth",
        local_name!("maskcontentunits") => "maskContentUnits",
        local_name!("maskunits") => "maskUnits",
        local_name!("numoctaves") => "numOctaves",
        local_name!("pathlength") => "pathLength",
        local_name!("patterncontentunits") => "patternContentUnits",
        local_name!("patterntransform") => "patternTransform",
        local_name!("patternunits") => "patternUnits",
        local_name!("pointsatx") => "pointsAtX",
        local_name!("pointsaty") => "pointsAtY",
        local_name!("pointsatz") => "pointsAtZ",
        local_name!("preservealpha") => "preserveAlpha",
        local_name!("preserveaspectratio") => "preserveAspectRatio",
        local_name!("primitiveunits") => "primitiveUnits",
        local_name!("refx") => "refX",
        local_name!("refy") => "refY",
        local_name!("repeatcount") => "repeatCount",
        local_name!("repeatdur") => "repeatDur",
        local_name!("requiredextensions") => "requiredExtensions",
        local_name!("requiredfeatures") => "requiredFeatures",
        local_name!("specularconstant") => "specularConstant",
        local_name!("specularexponent") => "specularExponent",
        local_name!("spreadmethod") => "spreadMethod",
        local_name!("startoffset") => "startOffset",
        local_name!("stddeviation") => "stdDeviation",
        local_name!("stitchtiles") => "stitchTiles",
        local_name!("surfacescale") => "surfaceScale",
        local_name!("systemlanguage") => "systemLanguage",
        local_name!("tablevalues") => "tableValues",
        local_name!("targetx") => "targetX",
        local_name!("targety") => "targetY",
        local_name!("textlength") => "textLength",
        local_name!("viewbox") => "viewBox",
        local_name!("viewtarget") => "viewTarget",
        local_name!("xchannelselector") => "xChannelSelector",
        local_name!("ychannelselector") => "yChannelSelector",
        local_name!("zoomandpan") => "zoomAndPan",
        _ => return None,
    };
    Some(qname(None, ns!(), adjusted.into()))
}

/// https://html.spec.whatwg.org/multipage/#adjust-mathml-attributes
pub fn adjust_mathml_attribute_name(name: &LocalName) -> Option<QualName> {
    match *name {
        local_name!("definitionurl") => Some(qname(None, ns!(), "definitionURL".into())),
        _ => None,
    }
}

/// https://html.spec.whatwg.org/multipage/#adjust-foreign-attributes
pub fn adjust_foreign_attribute_name(name: &LocalName) -> Option<QualName> {
    macro_rules! xlink {
        ($local:expr) => {
            qname(Some("xlink".into()), ns!(xlink), $local.into())
        };
    }
    macro_rules! xml {
        ($local:expr) => {
            qname(Some("xml".into()), ns!(xml), $local.into())
        };
    }
    Some(match *name {
        local_name!("xlink:actuate") => xlink!("actuate"),
        local_name!("xlink:arcrole") => xlink!("arcrole"),
        local_name!("xlink:href") => xlink!("href"),
        local_name!("xlink:role") => xlink!("role"),
        local_name!("xlink:show") => xlink!("show"),
        local_name!("xlink:title") => xlink!("title"),
        local_name!("xlink:type") => xlink!("type"),
        local_name!("xml:lang") => xml!("lang"),
        local_name!("xml:space") => xml!("space"),
        local_name!("xmlns") => qname(None, ns!(xmlns), "xmlns".into()),
        local_name!("xmlns:xlink") => qname(Some("xmlns".into()), ns!(xmlns), "xlink".into()),
        _ => return None,
    })
}

/// https://html.spec.whatwg.org/multipage/#mathml-text-integration-point
pub fn mathml_text_integration_point(name: ExpandedName) -> bool {
    *name.ns == ns!(mathml)
        && matches!(
            *name.local,
            local_name!("mi")
                | local_name!("mo")
                | local_name!("mn")
                | local_name!("ms")
                | local_name!("mtext")
        )
}

/// https://html.spec.whatwg.org/multipage/#html-integration-point (the SVG
/// branch; the MathML `annotation-xml` branch additionally depends on an
/// attribute and is handled by the tree builder directly).
pub fn svg_html_integration_point(name: ExpandedName) -> bool {
    *name.ns == ns!(svg)
        && matches!(
            *name.local,
            local_name!("foreignObject") | local_name!("desc") | local_name!("title")
        )
}
