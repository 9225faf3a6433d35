/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The context within which CSS declarations are parsed.

use std::fmt;

use bitflags::bitflags;
use cssparser::{CowRcStr, Parser, SourceLocation};

use crate::error_reporting::{ContextualParseError, ParseErrorReporter};
use crate::properties::ExpansionError;

bitflags! {
    /// The mode to use when parsing values.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct ParsingMode: u8 {
        /// Lengths must have units, except for zero values, where the unit can be omitted.
        /// <https://www.w3.org/TR/css3-values/#lengths>
        const DEFAULT = 0x00;
        /// Quirks mode: a length without a unit identifier (e.g. `25`) is
        /// accepted and treated as pixels.
        /// <https://quirks.spec.whatwg.org/#the-unitless-length-quirk>
        const ALLOW_UNITLESS_LENGTH = 0x01;
        /// Declarations carrying a legacy browser hack suffix (`\9`, `\0`,
        /// `\0/`) are dropped instead of being preserved.
        const DISALLOW_HACKS = 0x02;
    }
}

impl ParsingMode {
    /// Whether the parsing mode allows unitless lengths for non-zero values to be intpreted as px.
    #[inline]
    pub fn allows_unitless_lengths(&self) -> bool {
        self.intersects(ParsingMode::ALLOW_UNITLESS_LENGTH)
    }

    /// Whether hack-marked declarations survive parsing.
    #[inline]
    pub fn allows_hacks(&self) -> bool {
        !self.intersects(ParsingMode::DISALLOW_HACKS)
    }
}

impl Default for ParsingMode {
    fn default() -> Self {
        ParsingMode::DEFAULT
    }
}

/// Errors that can be encountered while parsing CSS declarations.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleParseErrorKind<'i> {
    /// A CSS-wide keyword was combined with other components.
    UnexpectedCssWideKeyword,
    /// A hash token that is not a valid hex color.
    InvalidHexColor(CowRcStr<'i>),
    /// An empty value, or an empty item in a comma-separated list.
    EmptyValue,
    /// A delimiter that has no meaning in a declaration value.
    UnexpectedDelimiter(char),
    /// A declaration value was not consumed entirely.
    PropertyDeclarationValueNotExhausted,
    /// A declaration carried a hack marker while hacks are disallowed.
    HackNotAllowed,
    /// A shorthand value did not match its grammar.
    InvalidShorthand(ExpansionError),
}

impl<'i> fmt::Display for StyleParseErrorKind<'i> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            StyleParseErrorKind::UnexpectedCssWideKeyword => {
                f.write_str("CSS-wide keywords must be used alone")
            },
            StyleParseErrorKind::InvalidHexColor(ref hash) => {
                write!(f, "invalid hex color `#{}`", hash)
            },
            StyleParseErrorKind::EmptyValue => f.write_str("empty value"),
            StyleParseErrorKind::UnexpectedDelimiter(c) => write!(f, "unexpected `{}`", c),
            StyleParseErrorKind::PropertyDeclarationValueNotExhausted => {
                f.write_str("unexpected trailing input")
            },
            StyleParseErrorKind::HackNotAllowed => f.write_str("hack markers are not allowed"),
            StyleParseErrorKind::InvalidShorthand(ref error) => fmt::Display::fmt(error, f),
        }
    }
}

/// A parse error with the kinds of errors this crate reports.
pub type ParseError<'i> = cssparser::ParseError<'i, StyleParseErrorKind<'i>>;

/// The data that the parser needs from outside in order to parse declarations.
pub struct ParserContext<'a> {
    /// The mode to use when parsing.
    pub parsing_mode: ParsingMode,
    /// The active error reporter, or none if error reporting is disabled.
    error_reporter: Option<&'a dyn ParseErrorReporter>,
}

impl<'a> ParserContext<'a> {
    /// Create a parser context.
    #[inline]
    pub fn new(
        parsing_mode: ParsingMode,
        error_reporter: Option<&'a dyn ParseErrorReporter>,
    ) -> Self {
        Self {
            parsing_mode,
            error_reporter,
        }
    }

    /// Returns whether CSS error reporting is enabled.
    #[inline]
    pub fn error_reporting_enabled(&self) -> bool {
        self.error_reporter.is_some()
    }

    /// Record a CSS parse error with this context’s error reporting.
    pub fn log_css_error(&self, location: SourceLocation, error: ContextualParseError) {
        let error_reporter = match self.error_reporter {
            Some(r) => r,
            None => return,
        };

        error_reporter.report_error(location, error)
    }
}

impl Default for ParserContext<'static> {
    fn default() -> Self {
        ParserContext::new(ParsingMode::DEFAULT, None)
    }
}

/// A trait to abstract parsing of a specified value given a `ParserContext` and
/// CSS input.
pub trait Parse: Sized {
    /// Parse a value of this type.
    ///
    /// Returns an error on failure.
    fn parse<'i, 't>(
        context: &ParserContext,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self, ParseError<'i>>;
}
