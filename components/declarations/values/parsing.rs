/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Conversion of declaration values from tokens into the value model.

use std::mem;
use std::sync::Arc;

use cssparser::{Parser, SourceLocation, ToCss, Token};

use super::specified;
use super::{Color, CssWideKeyword, Dimension, FunctionCall, Image, UnparsedValue, Value};
use crate::parser::{Parse, ParseError, ParserContext, StyleParseErrorKind};

/// A legacy suffix used to target old versions of Internet Explorer.
///
/// These are not valid CSS, but they are common enough in the wild that they
/// are carried along with the declaration and written back untouched. They
/// take no part in value comparisons.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HackMarker {
    /// `\9`, understood by IE 6 to 10.
    Backslash9,
    /// `\0`, understood by IE 8 to 10.
    Backslash0,
    /// `\0/`, understood by IE 8 and 9.
    Backslash0Slash,
}

impl HackMarker {
    /// The marker as written after the value.
    pub fn as_str(&self) -> &'static str {
        match *self {
            HackMarker::Backslash9 => "\\9",
            HackMarker::Backslash0 => "\\0",
            HackMarker::Backslash0Slash => "\\0/",
        }
    }
}

/// Splits a trailing hack marker off the text of a declaration value.
pub fn split_hack_marker(css: &str) -> (&str, Option<HackMarker>) {
    let trimmed = css.trim_end();
    for marker in [
        HackMarker::Backslash0Slash,
        HackMarker::Backslash9,
        HackMarker::Backslash0,
    ] {
        if let Some(rest) = trimmed.strip_suffix(marker.as_str()) {
            return (rest.trim_end(), Some(marker));
        }
    }
    (css, None)
}

/// Lowercases and shortens a hex color, returning `None` if the hash is not
/// a valid color.
pub fn canonical_hex(hash: &str) -> Option<String> {
    if !matches!(hash.len(), 3 | 4 | 6 | 8) || !hash.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let hex = hash.to_ascii_lowercase();
    if hex.len() >= 6 {
        let bytes = hex.as_bytes();
        if bytes.chunks(2).all(|pair| pair[0] == pair[1]) {
            return Some(bytes.chunks(2).map(|pair| pair[0] as char).collect());
        }
    }
    Some(hex)
}

fn canonical_ident(ident: &str) -> String {
    let lower = ident.to_ascii_lowercase();
    if specified::is_known_keyword(&lower) {
        lower
    } else {
        ident.to_owned()
    }
}

/// Percentages are kept to four decimal places, which hides the noise of
/// the `unit_value` division, so `33.333333%` is stored as `33.3333`.
fn canonical_percentage(unit_value: f32, int_value: Option<i32>) -> f32 {
    match int_value {
        Some(int_value) => int_value as f32,
        None => (unit_value * 100. * 10000.).round() / 10000.,
    }
}

/// Whether the input contains a `var()` or `env()` reference at any depth.
///
/// Every nested block is walked to its end, so that `parse_nested_block`
/// never sees leftover tokens.
fn contains_substitution<'i, 't>(input: &mut Parser<'i, 't>) -> bool {
    let mut found = false;
    while let Ok(token) = input.next() {
        let nested = match *token {
            Token::Function(ref name) => {
                found |= name.eq_ignore_ascii_case("var") || name.eq_ignore_ascii_case("env");
                true
            },
            Token::ParenthesisBlock | Token::SquareBracketBlock | Token::CurlyBracketBlock => true,
            _ => false,
        };
        if nested {
            found |= input
                .parse_nested_block(|input| Ok::<_, ParseError<'i>>(contains_substitution(input)))
                .unwrap_or(false);
        }
    }
    found
}

/// Re-serializes the rest of a block, dropping comments and any whitespace
/// that is not needed to separate tokens.
pub fn serialize_block<'i, 't>(
    input: &mut Parser<'i, 't>,
    dest: &mut String,
) -> Result<(), ParseError<'i>> {
    let mut first = true;
    let mut pending_space = false;
    loop {
        let token = match input.next_including_whitespace() {
            Ok(token) => token.clone(),
            Err(_) => return Ok(()),
        };
        let closing = match token {
            Token::WhiteSpace(_) => {
                pending_space = !first;
                continue;
            },
            Token::Comma => {
                dest.push(',');
                pending_space = false;
                first = true;
                continue;
            },
            Token::Function(_) | Token::ParenthesisBlock => Some(')'),
            Token::SquareBracketBlock => Some(']'),
            Token::CurlyBracketBlock => Some('}'),
            Token::BadUrl(_) |
            Token::BadString(_) |
            Token::CloseParenthesis |
            Token::CloseSquareBracket |
            Token::CloseCurlyBracket => return Err(input.new_unexpected_token_error(token.clone())),
            _ => None,
        };
        if pending_space {
            dest.push(' ');
            pending_space = false;
        }
        first = false;
        match token {
            Token::Function(ref name) => {
                dest.push_str(&name.to_ascii_lowercase());
                dest.push('(');
            },
            ref other => dest.push_str(&other.to_css_string()),
        }
        if let Some(closing) = closing {
            input.parse_nested_block(|input| serialize_block(input, dest))?;
            dest.push(closing);
        }
    }
}

fn parse_function<'i, 't>(input: &mut Parser<'i, 't>, name: String) -> Result<Value, ParseError<'i>> {
    if name == "url" {
        let url = input.parse_nested_block(|input| {
            let url = input.expect_string()?.as_ref().to_owned();
            input.expect_exhausted()?;
            Ok::<_, ParseError<'i>>(url)
        })?;
        return Ok(Value::Image(Image::Url(url)));
    }

    let mut arguments = String::new();
    input.parse_nested_block(|input| serialize_block(input, &mut arguments))?;
    let function = FunctionCall { name, arguments };
    Ok(if specified::is_color_function(&function.name) {
        Value::Color(Color::Function(function))
    } else if specified::is_image_function(&function.name) {
        Value::Image(Image::Function(function))
    } else {
        Value::Function(function)
    })
}

fn parse_line_names<'i, 't>(input: &mut Parser<'i, 't>) -> Result<Value, ParseError<'i>> {
    let names = input.parse_nested_block(|input| {
        let mut names = vec![];
        while !input.is_exhausted() {
            names.push(input.expect_ident()?.as_ref().to_owned());
        }
        Ok::<_, ParseError<'i>>(names)
    })?;
    Ok(Value::LineNames(names))
}

fn parse_component<'i, 't>(
    input: &mut Parser<'i, 't>,
    location: SourceLocation,
    token: Token<'i>,
) -> Result<Value, ParseError<'i>> {
    Ok(match token {
        Token::Ident(ref ident) => match CssWideKeyword::from_ident(ident) {
            Some(keyword) => Value::CssWide(keyword),
            None => Value::Ident(canonical_ident(ident)),
        },
        Token::Number { value, .. } => Value::Number(value),
        Token::Percentage {
            unit_value,
            int_value,
            ..
        } => Value::Percentage(canonical_percentage(unit_value, int_value)),
        Token::Dimension {
            value, ref unit, ..
        } => {
            let unit = unit.to_ascii_lowercase();
            if value == 0. && specified::is_length_unit(&unit) {
                Value::Number(0.)
            } else {
                Value::Dimension(Dimension { value, unit })
            }
        },
        Token::Hash(ref hash) | Token::IDHash(ref hash) => match canonical_hex(hash) {
            Some(hex) => Value::Color(Color::Hex(hex)),
            None => {
                return Err(
                    location.new_custom_error(StyleParseErrorKind::InvalidHexColor(hash.clone()))
                );
            },
        },
        Token::QuotedString(ref string) => Value::String(string.as_ref().to_owned()),
        Token::UnquotedUrl(ref url) => Value::Image(Image::Url(url.as_ref().to_owned())),
        Token::Function(ref name) => return parse_function(input, name.to_ascii_lowercase()),
        Token::SquareBracketBlock => return parse_line_names(input),
        Token::Delim('/') => Value::Delim('/'),
        Token::Delim(c) => {
            return Err(location.new_custom_error(StyleParseErrorKind::UnexpectedDelimiter(c)));
        },
        other => return Err(location.new_unexpected_token_error(other)),
    })
}

fn contains_css_wide_keyword(value: &Value) -> bool {
    match *value {
        Value::CssWide(..) => true,
        Value::List(ref values) | Value::Layers(ref values) => {
            values.iter().any(contains_css_wide_keyword)
        },
        _ => false,
    }
}

impl Parse for Value {
    /// Parses a whole declaration value.
    ///
    /// Values referencing `var()` or `env()` anywhere are kept unparsed.
    fn parse<'i, 't>(
        _context: &ParserContext,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self, ParseError<'i>> {
        let start = input.state();
        let has_substitution = contains_substitution(input);
        input.reset(&start);
        if has_substitution {
            let mut css = String::new();
            serialize_block(input, &mut css)?;
            return Ok(Value::PendingSubstitution(Arc::new(UnparsedValue {
                css,
                from_shorthand: None,
            })));
        }

        let mut layers = vec![];
        let mut components = vec![];
        loop {
            let location = input.current_source_location();
            let token = match input.next() {
                Ok(token) => token.clone(),
                Err(_) => break,
            };
            if let Token::Comma = token {
                if components.is_empty() {
                    return Err(location.new_custom_error(StyleParseErrorKind::EmptyValue));
                }
                layers.push(Value::list(mem::take(&mut components)));
                continue;
            }
            components.push(parse_component(input, location, token)?);
        }
        if components.is_empty() {
            return Err(input.new_custom_error(StyleParseErrorKind::EmptyValue));
        }
        layers.push(Value::list(components));

        let value = Value::layers(layers);
        if !value.is_component() && contains_css_wide_keyword(&value) {
            return Err(input.new_custom_error(StyleParseErrorKind::UnexpectedCssWideKeyword));
        }
        Ok(value)
    }
}
