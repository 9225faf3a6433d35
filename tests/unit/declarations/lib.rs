/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

#![cfg(test)]

use std::cell::RefCell;

use cssparser::{Parser, ParserInput, SourceLocation, ToCss};
use declarations::error_reporting::{ContextualParseError, ParseErrorReporter};
use declarations::parser::{Parse, ParserContext, ParsingMode};
use declarations::properties::{
    ExpansionError, Importance, PropertyDeclarationBlock, ShorthandId,
    parse_property_declaration_list,
};
use declarations::values::Value;

/// Compacts `$input`, checks the result, then checks that compacting the
/// re-parsed result gives it back unchanged.
macro_rules! assert_compacts {
    ($input:expr, $expected:expr) => {{
        let compacted = crate::compact_css($input);
        assert_eq!(compacted, $expected, "compacting {:?}", $input);
        assert_eq!(
            crate::compact_css(&compacted),
            compacted,
            "compaction of {:?} is not idempotent",
            $input
        );
    }};
}

mod compaction;
mod declaration_block;
mod parsing;
mod registry;
mod values;

pub struct CSSErrorReporterTest {
    pub errors: RefCell<Vec<String>>,
}

impl CSSErrorReporterTest {
    pub fn new() -> CSSErrorReporterTest {
        CSSErrorReporterTest {
            errors: RefCell::new(vec![]),
        }
    }
}

impl ParseErrorReporter for CSSErrorReporterTest {
    fn report_error(&self, _location: SourceLocation, error: ContextualParseError) {
        self.errors.borrow_mut().push(error.to_string());
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses a declaration list in the default mode.
pub fn parse(css: &str) -> PropertyDeclarationBlock {
    init_logger();
    parse_property_declaration_list(&ParserContext::default(), css)
}

/// Parses a declaration list, returning the block and the reported errors.
pub fn parse_with_mode(mode: ParsingMode, css: &str) -> (PropertyDeclarationBlock, Vec<String>) {
    init_logger();
    let reporter = CSSErrorReporterTest::new();
    let context = ParserContext::new(mode, Some(&reporter));
    let block = parse_property_declaration_list(&context, css);
    let errors = reporter.errors.borrow().clone();
    (block, errors)
}

pub fn compact_css(css: &str) -> String {
    parse(css).compact().to_css_string()
}

/// Parses a single value in the default mode.
pub fn parse_value(css: &str) -> Value {
    let context = ParserContext::default();
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    parser
        .parse_entirely(|input| Value::parse(&context, input))
        .unwrap()
}

/// Expands a shorthand, returning each longhand as `name:value`.
pub fn expand(name: &str, css: &str) -> Result<Vec<String>, ExpansionError> {
    let shorthand = ShorthandId::from_name(name).unwrap();
    let declarations = shorthand.expand(
        &ParserContext::default(),
        &parse_value(css),
        Importance::Normal,
        None,
    )?;
    Ok(declarations
        .iter()
        .map(|declaration| {
            let mut css = format!("{}:", declaration.name());
            declaration.value_to_css(&mut css).unwrap();
            css
        })
        .collect())
}

/// The value of one longhand after expanding a shorthand.
pub fn expanded_value(name: &str, css: &str, longhand: &str) -> String {
    let prefix = format!("{}:", longhand);
    expand(name, css)
        .unwrap()
        .into_iter()
        .find_map(|declaration| declaration.strip_prefix(&prefix).map(str::to_owned))
        .unwrap()
}
