/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Types used to report parsing errors.

#![deny(missing_docs)]

use std::fmt;

use cssparser::{BasicParseErrorKind, ParseErrorKind, SourceLocation, Token};
use log::{Level, info, log_enabled};

use crate::parser::ParseError;
use crate::properties::ExpansionError;

/// Errors that can be encountered while parsing a declaration list.
#[derive(Debug)]
pub enum ContextualParseError<'a> {
    /// A property declaration was not understood and has been dropped.
    UnsupportedPropertyDeclaration(&'a str, ParseError<'a>),
    /// A shorthand value did not match its grammar, so none of its longhands
    /// were set.
    InvalidShorthand(&'a str, ExpansionError),
    /// Something other than a declaration appeared in a declaration list.
    InvalidRule(&'a str, ParseError<'a>),
}

fn token_to_str(t: &Token, f: &mut fmt::Formatter) -> fmt::Result {
    match *t {
        Token::Ident(ref i) => write!(f, "identifier {}", i),
        Token::AtKeyword(ref kw) => write!(f, "keyword @{}", kw),
        Token::Hash(ref h) | Token::IDHash(ref h) => write!(f, "hash #{}", h),
        Token::QuotedString(ref s) => write!(f, "quoted string \"{}\"", s),
        Token::UnquotedUrl(ref u) => write!(f, "url {}", u),
        Token::Delim(ref d) => write!(f, "delimiter {}", d),
        Token::Number { value, .. } => write!(f, "number {}", value),
        Token::Percentage { unit_value, .. } => write!(f, "percentage {}", unit_value * 100.),
        Token::Dimension {
            value, ref unit, ..
        } => write!(f, "dimension {}{}", value, unit),
        Token::WhiteSpace(_) => f.write_str("whitespace"),
        Token::Comment(_) => f.write_str("comment"),
        Token::Colon => f.write_str("colon (:)"),
        Token::Semicolon => f.write_str("semicolon (;)"),
        Token::Comma => f.write_str("comma (,)"),
        Token::Function(ref name) => write!(f, "function {}", name),
        Token::ParenthesisBlock => f.write_str("parenthesis ("),
        Token::SquareBracketBlock => f.write_str("square bracket ["),
        Token::CurlyBracketBlock => f.write_str("curly bracket {"),
        Token::BadUrl(ref url) => write!(f, "bad url parse error {}", url),
        Token::BadString(ref s) => write!(f, "bad string parse error {}", s),
        Token::CloseParenthesis => f.write_str("unmatched close parenthesis"),
        Token::CloseSquareBracket => f.write_str("unmatched close square bracket"),
        Token::CloseCurlyBracket => f.write_str("unmatched close curly bracket"),
        ref other => write!(f, "token {:?}", other),
    }
}

fn parse_error_to_str(err: &ParseError, f: &mut fmt::Formatter) -> fmt::Result {
    match err.kind {
        ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(ref t)) => {
            write!(f, "found unexpected ")?;
            token_to_str(t, f)
        },
        ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => {
            f.write_str("unexpected end of input")
        },
        ParseErrorKind::Basic(BasicParseErrorKind::AtRuleInvalid(ref i)) => {
            write!(f, "@ rule invalid: {}", i)
        },
        ParseErrorKind::Basic(BasicParseErrorKind::AtRuleBodyInvalid) => {
            f.write_str("@ rule invalid")
        },
        ParseErrorKind::Basic(BasicParseErrorKind::QualifiedRuleInvalid) => {
            f.write_str("qualified rule invalid")
        },
        ParseErrorKind::Custom(ref err) => fmt::Display::fmt(err, f),
    }
}

impl<'a> fmt::Display for ContextualParseError<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ContextualParseError::UnsupportedPropertyDeclaration(decl, ref err) => {
                write!(f, "Unsupported property declaration: '{}', ", decl)?;
                parse_error_to_str(err, f)
            },
            ContextualParseError::InvalidShorthand(decl, ref err) => {
                write!(f, "Invalid shorthand declaration: '{}', {}", decl, err)
            },
            ContextualParseError::InvalidRule(rule, ref err) => {
                write!(f, "Invalid rule in declaration list: '{}', ", rule)?;
                parse_error_to_str(err, f)
            },
        }
    }
}

/// A generic trait for an error reporter.
pub trait ParseErrorReporter {
    /// Called when the declaration parser detects an error.
    ///
    /// Returns the location the error was reported from, and the error
    /// itself.
    fn report_error(&self, location: SourceLocation, error: ContextualParseError);
}

/// An error reporter that uses [the `log` crate](https://github.com/rust-lang-nursery/log)
/// at `info` level.
///
/// This logging is silent by default, and can be enabled with a `RUST_LOG=declarations=info`
/// environment variable.
/// (See [`env_logger`](https://rust-lang-nursery.github.io/log/env_logger/).)
pub struct RustLogReporter;

impl ParseErrorReporter for RustLogReporter {
    fn report_error(&self, location: SourceLocation, error: ContextualParseError) {
        if log_enabled!(Level::Info) {
            info!("{}:{} {}", location.line, location.column, error)
        }
    }
}

/// Error reporter which silently forgets errors
pub struct NullReporter;

impl ParseErrorReporter for NullReporter {
    fn report_error(&self, _: SourceLocation, _: ContextualParseError) {
        // do nothing
    }
}
