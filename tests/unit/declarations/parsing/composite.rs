/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use crate::{expand, expanded_value};

#[test]
fn font_should_parse_prefix_size_line_height_and_families() {
    assert_eq!(
        expand("font", "italic bold 12px/1.5 Helvetica, sans-serif").unwrap(),
        [
            "font-style:italic",
            "font-variant-caps:normal",
            "font-weight:bold",
            "font-stretch:normal",
            "font-size:12px",
            "line-height:1.5",
            "font-family:Helvetica,sans-serif",
        ]
    );
}

#[test]
fn font_should_accept_normal_in_any_prefix_position() {
    assert_eq!(
        expand("font", "normal small-caps 700 condensed 1em \"Times New Roman\"").unwrap(),
        [
            "font-style:normal",
            "font-variant-caps:small-caps",
            "font-weight:700",
            "font-stretch:condensed",
            "font-size:1em",
            "line-height:normal",
            "font-family:\"Times New Roman\"",
        ]
    );
    assert_eq!(expanded_value("font", "oblique 10deg 12px serif", "font-style"), "oblique 10deg");
}

#[test]
fn font_family_names_may_span_several_identifiers() {
    assert_eq!(
        expanded_value("font", "12px Times New Roman, serif", "font-family"),
        "Times New Roman,serif"
    );
}

#[test]
fn font_should_require_size_and_family() {
    assert!(expand("font", "bold").is_err());
    assert!(expand("font", "bold 12px").is_err());
    assert!(expand("font", "12px/ serif").is_err());
    assert!(expand("font", "bold bold 12px serif").is_err());
}

#[test]
fn font_should_not_expand_system_fonts() {
    assert!(expand("font", "caption").is_err());
    assert!(expand("font", "menu").is_err());
}

#[test]
fn border_image_should_parse_slice_width_and_outset() {
    assert_eq!(
        expand("border-image", "url(b.png) 30 30 / 10px round").unwrap(),
        [
            "border-image-source:url(b.png)",
            "border-image-slice:30",
            "border-image-width:10px",
            "border-image-outset:0",
            "border-image-repeat:round",
        ]
    );
    assert_eq!(
        expand("border-image", "fill 10% / / 2px stretch space").unwrap(),
        [
            "border-image-source:none",
            "border-image-slice:10% fill",
            "border-image-width:1",
            "border-image-outset:2px",
            "border-image-repeat:stretch space",
        ]
    );
}

#[test]
fn border_image_should_reject_a_dangling_slash() {
    assert!(expand("border-image", "30 /").is_err());
    assert!(expand("border-image", "30 / 1 /").is_err());
    assert!(expand("border-image", "url(a.png) url(b.png)").is_err());
}

#[test]
fn flex_keywords() {
    assert_eq!(expand("flex", "none").unwrap(), ["flex-grow:0", "flex-shrink:0", "flex-basis:auto"]);
    assert_eq!(expand("flex", "auto").unwrap(), ["flex-grow:1", "flex-shrink:1", "flex-basis:auto"]);
}

#[test]
fn flex_factors_default_the_basis_to_zero() {
    assert_eq!(expand("flex", "2").unwrap(), ["flex-grow:2", "flex-shrink:1", "flex-basis:0"]);
    assert_eq!(expand("flex", "2 3").unwrap(), ["flex-grow:2", "flex-shrink:3", "flex-basis:0"]);
    assert_eq!(expand("flex", "30px").unwrap(), ["flex-grow:1", "flex-shrink:1", "flex-basis:30px"]);
    assert_eq!(
        expand("flex", "1 2 content").unwrap(),
        ["flex-grow:1", "flex-shrink:2", "flex-basis:content"]
    );
}

#[test]
fn flex_should_reject_invalid_values() {
    assert!(expand("flex", "-1").is_err());
    assert!(expand("flex", "1 2 3").is_err());
    assert!(expand("flex", "10px 20px").is_err());
}
