/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use cssparser::{Parser, ParserInput, ToCss};
use declarations::parser::{Parse, ParserContext};
use declarations::values::{CssWideKeyword, HackMarker, Value, split_hack_marker};

use crate::{expanded_value, parse, parse_value};

fn parse_error(css: &str) -> String {
    let context = ParserContext::default();
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let error = parser
        .parse_entirely(|input| Value::parse(&context, input))
        .unwrap_err();
    format!("{:?}", error.kind)
}

#[test]
fn values_are_stored_in_canonical_form() {
    assert_eq!(parse_value("0px").to_css_string(), "0");
    assert_eq!(parse_value("0s").to_css_string(), "0s");
    assert_eq!(parse_value("#AABBCC").to_css_string(), "#abc");
    assert_eq!(parse_value("#AABBCD").to_css_string(), "#aabbcd");
    assert_eq!(parse_value("SOLID").to_css_string(), "solid");
    assert_eq!(parse_value("1.50").to_css_string(), "1.5");
    assert_eq!(parse_value("10.0PX").to_css_string(), "10px");
    assert_eq!(parse_value("calc( 1px  +  2% )").to_css_string(), "calc(1px + 2%)");
    assert_eq!(parse_value("RGB(0, 0 ,0)").to_css_string(), "rgb(0,0,0)");
}

#[test]
fn custom_identifiers_keep_their_case() {
    assert_eq!(parse_value("MyFont").to_css_string(), "MyFont");
    assert_eq!(parse_value("MyFont"), Value::ident("MyFont"));
}

#[test]
fn urls_are_quoted_when_needed() {
    assert_eq!(parse_value("url(a.png)").to_css_string(), "url(a.png)");
    assert_eq!(parse_value("url('a.png')").to_css_string(), "url(a.png)");
    assert_eq!(parse_value("url(\"a b.png\")").to_css_string(), "url(\"a b.png\")");
}

#[test]
fn layers_and_lists() {
    let value = parse_value("a b, c");
    assert_eq!(value.as_layers().len(), 2);
    assert_eq!(value.as_layers()[0].components().len(), 2);
    assert_eq!(value.to_css_string(), "a b,c");
    assert_eq!(parse_value("12px / 1.5").to_css_string(), "12px/1.5");
}

#[test]
fn css_wide_keywords_must_stand_alone() {
    assert_eq!(parse_value("INHERIT"), Value::CssWide(CssWideKeyword::Inherit));
    assert_eq!(parse_value("revert-layer").to_css_string(), "revert-layer");
    assert_eq!(parse_error("1px inherit"), "Custom(UnexpectedCssWideKeyword)");
    assert_eq!(parse_error("initial, initial"), "Custom(UnexpectedCssWideKeyword)");
}

#[test]
fn invalid_values_are_rejected() {
    assert!(parse_error("#ggg").starts_with("Custom(InvalidHexColor("));
    assert_eq!(parse_error("a,,b"), "Custom(EmptyValue)");
    assert_eq!(parse_error("1px * 2"), "Custom(UnexpectedDelimiter('*'))");
}

#[test]
fn substitutions_keep_the_value_unparsed() {
    let value = parse_value("calc(var(--a) * 2)   1px");
    let unparsed = value.pending_substitution().unwrap();
    assert_eq!(unparsed.css, "calc(var(--a) * 2) 1px");
    assert_eq!(unparsed.from_shorthand, None);
    assert!(parse_value("env(safe-area-inset-top)").pending_substitution().is_some());
    assert!(parse_value("foo(var(--a) x)").pending_substitution().is_some());
    assert!(parse_value("a(b(var(--a)) c) d").pending_substitution().is_some());
    assert!(parse_value("calc(1px + 2px) 1px").pending_substitution().is_none());
}

#[test]
fn substitutions_nested_in_shorthands_reach_every_longhand() {
    let block = parse("border-style:foo(var(--a) x)");
    assert_eq!(block.len(), 4);
    assert_eq!(block.property_value("border-top-style"), "foo(var(--a) x)");

    let font = "bold calc(var(--s) * 1px) serif";
    assert_eq!(expanded_value("font", font, "font-size"), font);
    assert_eq!(expanded_value("font", font, "font-weight"), font);
}

#[test]
fn percentages_keep_four_decimals() {
    assert_eq!(parse_value("12.5%").to_css_string(), "12.5%");
    assert_eq!(parse_value("33.333333%").to_css_string(), "33.3333%");
}

#[test]
fn hack_markers_are_split_off() {
    assert_eq!(split_hack_marker("red\\9"), ("red", Some(HackMarker::Backslash9)));
    assert_eq!(split_hack_marker("1px \\0/ "), ("1px", Some(HackMarker::Backslash0Slash)));
    assert_eq!(split_hack_marker("1px\\0"), ("1px", Some(HackMarker::Backslash0)));
    assert_eq!(split_hack_marker("red"), ("red", None));
}

#[test]
fn hack_markers_are_written_back() {
    let block = parse("color:red\\9");
    let declaration = block.get("color").unwrap();
    assert_eq!(declaration.hack(), Some(HackMarker::Backslash9));
    assert_eq!(declaration.value(), &Value::ident("red"));
    assert_eq!(block.to_css_string(), "color:red\\9;");
}
