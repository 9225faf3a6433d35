/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Shorthand expansion, one module per grammar family.

mod composite;
mod generic;
mod grid;
mod layered;
mod ordered_pair;

use declarations::parser::ParsingMode;
use declarations::properties::{ExpansionError, ShorthandId};
use declarations::values::{CssWideKeyword, Value};

use crate::{expand, parse, parse_value, parse_with_mode};

#[test]
fn css_wide_keyword_is_given_to_every_longhand() {
    assert_eq!(
        expand("margin", "inherit").unwrap(),
        ["margin-top:inherit", "margin-right:inherit", "margin-bottom:inherit", "margin-left:inherit"]
    );
    let declarations = declarations::properties::expand(
        "flex",
        &Value::CssWide(CssWideKeyword::Unset),
        Default::default(),
    )
    .unwrap();
    assert_eq!(declarations.len(), 3);
    assert!(declarations.iter().all(|d| d.value().css_wide_keyword() == Some(CssWideKeyword::Unset)));
}

#[test]
fn substitution_is_given_to_every_longhand_with_its_shorthand() {
    let declarations = declarations::properties::expand(
        "padding",
        &parse_value("var(--gutter) 0"),
        Default::default(),
    )
    .unwrap();
    assert_eq!(declarations.len(), 4);
    for declaration in &declarations {
        let unparsed = declaration.value().pending_substitution().unwrap();
        assert_eq!(unparsed.css, "var(--gutter) 0");
        assert_eq!(unparsed.from_shorthand, Some(ShorthandId::Padding));
    }
}

#[test]
fn unknown_shorthand_is_an_error() {
    let error = declarations::properties::expand("color", &parse_value("red"), Default::default())
        .unwrap_err();
    assert_eq!(error, ExpansionError::UnknownShorthand("color".to_owned()));
}

#[test]
fn invalid_shorthand_sets_no_longhand() {
    let block = parse("margin:1px 2px 3px 4px 5px;padding:1px");
    assert_eq!(block.len(), 4);
    assert!(block.declarations().all(|d| d.name().starts_with("padding-")));
}

#[test]
fn invalid_shorthand_is_reported() {
    let (block, errors) = parse_with_mode(ParsingMode::DEFAULT, "margin:1px 2px 3px 4px 5px");
    assert!(block.is_empty());
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Invalid shorthand declaration"), "{}", errors[0]);
    assert!(errors[0].contains("expected one to four values"), "{}", errors[0]);
}

#[test]
fn shorthand_names_are_case_insensitive() {
    let block = parse("MARGIN:1px");
    assert_eq!(block.property_value("margin-left"), "1px");
}
