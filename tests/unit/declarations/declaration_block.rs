/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use cssparser::ToCss;
use declarations::parser::{ParserContext, ParsingMode};
use declarations::properties::{Importance, PropertyDeclarationBlock};
use declarations::values::{HackMarker, Value};

use crate::{CSSErrorReporterTest, parse, parse_with_mode};

fn names(block: &PropertyDeclarationBlock) -> Vec<&str> {
    block.declarations().map(|d| d.name()).collect()
}

#[test]
fn parsed_declarations_move_to_the_end() {
    let block = parse("color:red;width:1px;color:blue");
    assert_eq!(names(&block), ["width", "color"]);
    assert_eq!(block.property_value("color"), "blue");
}

#[test]
fn normal_declarations_do_not_override_important_ones() {
    let block = parse("color:red!important;color:blue");
    assert_eq!(block.property_value("color"), "red");
    assert_eq!(block.property_priority("color"), Importance::Important);

    let block = parse("color:red!important;color:blue ! IMPORTANT");
    assert_eq!(block.property_value("color"), "blue");
}

#[test]
fn set_property_replaces_in_place() {
    let context = ParserContext::default();
    let mut block = parse("color:red;width:1px");
    assert!(block.set_property(&context, "color", "blue", Importance::Normal));
    assert_eq!(names(&block), ["color", "width"]);
    assert_eq!(block.property_value("color"), "blue");

    assert!(!block.set_property(&context, "color", "BLUE", Importance::Normal));
    assert!(block.set_property(&context, "color", "blue", Importance::Important));
    assert_eq!(block.property_priority("color"), Importance::Important);

    assert!(block.set_property(&context, "height", "2px", Importance::Normal));
    assert_eq!(names(&block), ["color", "width", "height"]);
}

#[test]
fn set_property_with_a_shorthand() {
    let context = ParserContext::default();
    let mut block = PropertyDeclarationBlock::new();
    assert!(block.set_property(&context, "margin", "1px 2px", Importance::Important));
    assert_eq!(block.len(), 4);
    assert_eq!(block.property_value("margin"), "1px 2px");
    assert_eq!(block.property_value("margin-left"), "2px");
    assert_eq!(block.property_priority("margin"), Importance::Important);
}

#[test]
fn set_property_rejects_invalid_values() {
    let reporter = CSSErrorReporterTest::new();
    let context = ParserContext::new(ParsingMode::DEFAULT, Some(&reporter));
    let mut block = parse("margin:1px");
    assert!(!block.set_property(&context, "margin", "1px 2px 3px 4px 5px", Importance::Normal));
    assert!(!block.set_property(&context, "color", "#ggg", Importance::Normal));
    assert_eq!(block, parse("margin:1px"));
    assert_eq!(reporter.errors.borrow().len(), 2);
}

#[test]
fn set_property_with_an_empty_value_removes() {
    let context = ParserContext::default();
    let mut block = parse("color:red;width:1px");
    assert!(block.set_property(&context, "color", "  ", Importance::Normal));
    assert_eq!(names(&block), ["width"]);
    assert!(!block.set_property(&context, "color", "", Importance::Normal));
}

#[test]
fn remove_property() {
    let mut block = parse("margin:1px;color:red");
    assert!(block.remove_property("MARGIN"));
    assert_eq!(names(&block), ["color"]);
    assert!(!block.remove_property("margin"));

    let mut compacted = parse("margin:1px;color:red").compact();
    assert!(compacted.contains("margin"));
    assert!(compacted.remove_property("margin"));
    assert_eq!(names(&compacted), ["color"]);
}

#[test]
fn shorthand_values_need_a_single_importance() {
    let block = parse("margin:1px;margin-top:2px!important");
    assert_eq!(block.property_value("margin"), "");
    assert_eq!(block.property_priority("margin"), Importance::Normal);
    assert_eq!(block.property_value("margin-top"), "2px");
    assert_eq!(block.property_priority("margin-top"), Importance::Important);

    let block = parse("margin-top:1px");
    assert_eq!(block.property_value("margin"), "");
    assert_eq!(block.property_value("padding-top"), "");
}

#[test]
fn shorthand_values_in_compacted_blocks() {
    let block = parse("margin:1px!important").compact();
    assert_eq!(names(&block), ["margin"]);
    assert_eq!(block.property_value("margin"), "1px");
    assert_eq!(block.property_priority("margin"), Importance::Important);
}

#[test]
fn property_names_are_case_insensitive() {
    let block = parse("COLOR:red;--Foo:1");
    assert!(block.contains("color"));
    assert!(block.contains("Color"));
    assert_eq!(block.get("--Foo").map(|d| d.value()), Some(&Value::Number(1.)));
    assert!(!block.contains("--foo"));
    assert_eq!(block.to_css_string(), "--Foo:1;color:red;");
}

#[test]
fn importance_queries() {
    let block = parse("color:red;width:1px");
    assert!(block.any_normal());
    assert!(!block.any_important());

    let block = parse("color:red!important;width:1px");
    assert!(block.any_important());
    assert_eq!(block.normal_declaration_iter().count(), 1);

    let block = parse("color:red!important");
    assert!(!block.any_normal());
}

#[test]
fn serialization_is_sorted_and_minified() {
    let block = parse("  width : 1px ;\n/* note */ color: RED  !important ; ");
    assert_eq!(names(&block), ["width", "color"]);
    assert_eq!(block.to_css_string(), "color:red!important;width:1px;");
    assert_eq!(PropertyDeclarationBlock::new().to_css_string(), "");
}

#[test]
fn blocks_compare_by_declarations() {
    assert_eq!(
        parse("margin:1px"),
        parse("margin-top:1px;margin-right:1px;margin-bottom:1px;margin-left:1px")
    );
    assert_eq!(parse("color:red\\9"), parse("color:red"));
    assert_ne!(parse("color:red"), parse("color:red!important"));
    assert_ne!(parse("color:red;width:1px"), parse("width:1px;color:red"));
}

#[test]
fn invalid_declarations_are_dropped_one_by_one() {
    let (block, errors) = parse_with_mode(
        ParsingMode::DEFAULT,
        "color:#ggg;width:1px;@media print{};height:2px;margin:1px 2px 3px 4px 5px;top:1px !important x",
    );
    assert_eq!(names(&block), ["width", "height"]);
    assert_eq!(errors.len(), 4);
}

#[test]
fn hacks_can_be_disallowed() {
    let (block, errors) = parse_with_mode(ParsingMode::DEFAULT, "color:red\\9;width:1px");
    assert_eq!(block.get("color").and_then(|d| d.hack()), Some(HackMarker::Backslash9));
    assert!(errors.is_empty());

    let (block, errors) = parse_with_mode(ParsingMode::DISALLOW_HACKS, "color:red\\9;width:1px");
    assert_eq!(names(&block), ["width"]);
    assert_eq!(errors.len(), 1);
}

#[test]
fn reporters_do_not_change_the_result() {
    use declarations::error_reporting::{NullReporter, RustLogReporter};
    use declarations::properties::parse_property_declaration_list;

    crate::init_logger();
    let css = "color:#ggg;width:1px";
    let expected = parse(css);
    let context = ParserContext::new(ParsingMode::DEFAULT, Some(&RustLogReporter));
    assert_eq!(parse_property_declaration_list(&context, css), expected);
    let context = ParserContext::new(ParsingMode::DEFAULT, Some(&NullReporter));
    assert_eq!(parse_property_declaration_list(&context, css), expected);
}

#[test]
fn trailing_input_after_important_is_reported() {
    let (block, errors) = parse_with_mode(ParsingMode::DEFAULT, "top:1px !important x;left:2px");
    assert_eq!(names(&block), ["left"]);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].ends_with("unexpected trailing input"), "{}", errors[0]);
}
