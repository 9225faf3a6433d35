/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use crate::{expand, expanded_value};

#[test]
fn border_should_set_all_four_sides() {
    let longhands = expand("border", "1px solid red").unwrap();
    assert_eq!(longhands.len(), 12);
    for side in ["top", "right", "bottom", "left"] {
        assert!(longhands.contains(&format!("border-{}-width:1px", side)));
        assert!(longhands.contains(&format!("border-{}-style:solid", side)));
        assert!(longhands.contains(&format!("border-{}-color:red", side)));
    }
}

#[test]
fn border_side_components_may_come_in_any_order() {
    assert_eq!(
        expand("border-top", "red thick dashed").unwrap(),
        ["border-top-width:thick", "border-top-style:dashed", "border-top-color:red"]
    );
    assert_eq!(
        expand("border-left", "solid").unwrap(),
        ["border-left-width:medium", "border-left-style:solid", "border-left-color:currentcolor"]
    );
    assert!(expand("border-top", "1px 2px").is_err());
}

#[test]
fn outline_accepts_auto_style() {
    assert_eq!(
        expand("outline", "auto 2px").unwrap(),
        ["outline-color:currentcolor", "outline-style:auto", "outline-width:2px"]
    );
}

#[test]
fn text_decoration_line_may_take_several_keywords() {
    assert_eq!(
        expand("text-decoration", "underline overline dotted red").unwrap(),
        [
            "text-decoration-line:underline overline",
            "text-decoration-style:dotted",
            "text-decoration-color:red",
            "text-decoration-thickness:auto",
        ]
    );
    assert!(expand("text-decoration", "underline underline").is_err());
    assert!(expand("text-decoration", "none underline").is_err());
}

#[test]
fn flex_flow_should_parse_direction_and_wrap() {
    assert_eq!(
        expand("flex-flow", "wrap column").unwrap(),
        ["flex-direction:column", "flex-wrap:wrap"]
    );
}

#[test]
fn list_style_none_sets_image_and_type() {
    assert_eq!(
        expand("list-style", "none").unwrap(),
        ["list-style-position:outside", "list-style-image:none", "list-style-type:none"]
    );
    assert_eq!(
        expand("list-style", "none square").unwrap(),
        ["list-style-position:outside", "list-style-image:none", "list-style-type:square"]
    );
    assert_eq!(
        expand("list-style", "none none").unwrap(),
        ["list-style-position:outside", "list-style-image:none", "list-style-type:none"]
    );
    assert!(expand("list-style", "none none none").is_err());
}

#[test]
fn list_style_type_may_be_a_string() {
    assert_eq!(expanded_value("list-style", "inside \"-\"", "list-style-type"), "\"-\"");
    assert_eq!(expanded_value("list-style", "inside \"-\"", "list-style-position"), "inside");
}

#[test]
fn columns_auto_fills_the_remaining_slot() {
    assert_eq!(expand("columns", "auto 3").unwrap(), ["column-width:auto", "column-count:3"]);
    assert_eq!(expand("columns", "10em").unwrap(), ["column-width:10em", "column-count:auto"]);
    assert_eq!(expand("columns", "auto auto").unwrap(), ["column-width:auto", "column-count:auto"]);
    assert!(expand("columns", "auto auto auto").is_err());
    assert!(expand("columns", "2 3").is_err());
}

#[test]
fn column_rule_should_parse_width_style_and_color() {
    assert_eq!(
        expand("column-rule", "thin dotted #FF0000").unwrap(),
        ["column-rule-width:thin", "column-rule-style:dotted", "column-rule-color:#f00"]
    );
}
