/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! A property declaration block.

#![deny(missing_docs)]

use std::fmt::{self, Write};

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, Delimiter, ParseErrorKind, Parser, ParserInput,
    ParserState, QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, ToCss, parse_important,
};
use indexmap::IndexMap;
use itertools::Itertools;
use log::debug;
use smallvec::SmallVec;

use super::compaction;
use super::longhands;
use super::shorthands::ShorthandId;
use super::{Importance, PropertyDeclaration, PropertyId};
use crate::error_reporting::ContextualParseError;
use crate::parser::{Parse, ParseError, ParserContext, ParsingMode, StyleParseErrorKind};
use crate::values::{Value, split_hack_marker};

/// How a declaration got into a block, which decides what happens when the
/// property is already there.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeclarationSource {
    /// The declaration comes from parsing a stylesheet or style attribute.
    /// It moves to the end of the block, unless the existing declaration is
    /// `!important` and this one is not.
    Parsing,
    /// The declaration comes from CSSOM, such as `setProperty`. It replaces
    /// the existing declaration in place.
    CssOm,
}

/// A declaration block: at most one declaration per property, in insertion
/// order.
#[derive(Clone, Default)]
pub struct PropertyDeclarationBlock {
    declarations: IndexMap<String, PropertyDeclaration>,
    next_index: u32,
}

impl fmt::Debug for PropertyDeclarationBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.declarations.values()).finish()
    }
}

/// Blocks compare by their declarations, in order.
impl PartialEq for PropertyDeclarationBlock {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.declarations().zip(other.declarations()).all(|(a, b)| a == b)
    }
}

/// The key a property is stored under: custom properties are
/// case-sensitive, everything else is not.
fn property_key(name: &str) -> String {
    PropertyId::parse(name).name().to_owned()
}

impl PropertyDeclarationBlock {
    /// Create an empty block
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of declarations in the block.
    #[inline]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns whether the block has no declarations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Iterate over the declarations, in insertion order.
    pub fn declarations(&self) -> impl DoubleEndedIterator<Item = &PropertyDeclaration> + '_ {
        self.declarations.values()
    }

    /// Iterate over the declarations that are not `!important`.
    pub fn normal_declaration_iter(&self) -> impl DoubleEndedIterator<Item = &PropertyDeclaration> + '_ {
        self.declarations().filter(|d| !d.importance().important())
    }

    /// Returns whether this block contains any declaration with `!important`.
    pub fn any_important(&self) -> bool {
        self.declarations().any(|d| d.importance().important())
    }

    /// Returns whether this block contains any declaration without
    /// `!important`.
    pub fn any_normal(&self) -> bool {
        self.declarations().any(|d| !d.importance().important())
    }

    /// Get the declaration for a given property. Shorthands only have one
    /// in compacted blocks.
    pub fn get(&self, name: &str) -> Option<&PropertyDeclaration> {
        self.declarations.get(&*property_key(name))
    }

    /// Returns whether the block has a declaration for the given property.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Adds or overrides the declaration for a given property in this block.
    ///
    /// Returns whether the declaration has changed.
    pub fn push(&mut self, mut declaration: PropertyDeclaration, source: DeclarationSource) -> bool {
        match source {
            DeclarationSource::Parsing => {
                if let Some(existing) = self.declarations.get(declaration.name()) {
                    // For declarations from parsing, non-important declarations
                    // shouldn't override existing important one.
                    if existing.importance().important() && !declaration.importance().important() {
                        return false;
                    }
                    self.declarations.shift_remove(declaration.name());
                }
            },
            DeclarationSource::CssOm => {
                if let Some(existing) = self.declarations.get_mut(declaration.name()) {
                    if *existing == declaration && existing.hack() == declaration.hack() {
                        return false;
                    }
                    declaration.set_index(existing.index());
                    *existing = declaration;
                    return true;
                }
            },
        }
        declaration.set_index(self.next_index);
        self.next_index += 1;
        self.declarations
            .insert(declaration.name().to_owned(), declaration);
        true
    }

    /// Adds or overrides several declarations, in order.
    ///
    /// Returns whether any declaration has changed.
    pub fn extend<I>(&mut self, declarations: I, source: DeclarationSource) -> bool
    where
        I: IntoIterator<Item = PropertyDeclaration>,
    {
        declarations
            .into_iter()
            .fold(false, |changed, declaration| self.push(declaration, source) | changed)
    }

    /// Parses and sets a property, as `CSSStyleDeclaration.setProperty`
    /// does. Shorthands set all of their longhands. An empty value removes
    /// the property.
    ///
    /// Returns whether the block has changed. Invalid values are reported
    /// through the context and leave the block untouched.
    pub fn set_property(
        &mut self,
        context: &ParserContext,
        name: &str,
        css: &str,
        importance: Importance,
    ) -> bool {
        if css.trim().is_empty() {
            return self.remove_property(name);
        }
        let mut declarations = vec![];
        if parse_one_declaration_into(context, &mut declarations, name, css).is_err() {
            return false;
        }
        let declarations = declarations.into_iter().map(|mut declaration| {
            declaration.importance = importance;
            declaration
        });
        self.extend(declarations, DeclarationSource::CssOm)
    }

    /// Removes a property, or every longhand of a shorthand.
    ///
    /// Returns whether anything was removed.
    pub fn remove_property(&mut self, name: &str) -> bool {
        match PropertyId::parse(name) {
            PropertyId::Shorthand(shorthand) => shorthand
                .longhands()
                .iter()
                .copied()
                .chain(std::iter::once(shorthand.name()))
                .fold(false, |removed, name| {
                    self.declarations.shift_remove(name).is_some() | removed
                }),
            id => self.declarations.shift_remove(id.name()).is_some(),
        }
    }

    fn shorthand_declaration(&self, shorthand: ShorthandId) -> Option<PropertyDeclaration> {
        if let Some(declaration) = self.declarations.get(shorthand.name()) {
            return Some(declaration.clone());
        }
        let longhands: SmallVec<[&PropertyDeclaration; 12]> = shorthand
            .longhands()
            .iter()
            .map(|longhand| self.declarations.get(*longhand))
            .collect::<Option<_>>()?;
        compaction::shorthand_declaration(shorthand, &longhands)
    }

    /// Find the value of the given property in this block and serialize it,
    /// without its importance.
    ///
    /// A shorthand only has a value when all of its longhands are present
    /// with the same importance, and can be written as that shorthand.
    /// Properties without a value serialize to the empty string.
    ///
    /// <https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-getpropertyvalue>
    pub fn property_value(&self, name: &str) -> String {
        let declaration = match PropertyId::parse(name) {
            PropertyId::Shorthand(shorthand) => self.shorthand_declaration(shorthand),
            id => self.declarations.get(id.name()).cloned(),
        };
        let mut css = String::new();
        if let Some(declaration) = declaration {
            // Writing to a string does not fail.
            let _ = declaration.value_to_css(&mut css);
        }
        css
    }

    /// <https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-getpropertypriority>
    pub fn property_priority(&self, name: &str) -> Importance {
        match PropertyId::parse(name) {
            PropertyId::Shorthand(shorthand) => {
                if let Some(declaration) = self.declarations.get(shorthand.name()) {
                    return declaration.importance();
                }
                if shorthand.longhands().iter().all(|longhand| {
                    self.declarations
                        .get(*longhand)
                        .is_some_and(|d| d.importance().important())
                }) {
                    Importance::Important
                } else {
                    Importance::Normal
                }
            },
            id => self
                .declarations
                .get(id.name())
                .map_or(Importance::Normal, |d| d.importance()),
        }
    }

    /// Returns a new block where longhands are merged into shorthands
    /// wherever that keeps the meaning of the block.
    pub fn compact(&self) -> PropertyDeclarationBlock {
        compaction::compact(self, ParsingMode::DEFAULT)
    }

    /// Like `compact`, for a block parsed in the given mode.
    pub fn compact_with_parsing_mode(&self, parsing_mode: ParsingMode) -> PropertyDeclarationBlock {
        compaction::compact(self, parsing_mode)
    }
}

impl ToCss for PropertyDeclarationBlock {
    /// Writes the canonical, minified form of the block: every declaration
    /// as `name:value;`, sorted by property name.
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        for declaration in self.declarations().sorted_by(|a, b| a.name().cmp(b.name())) {
            declaration.to_css(dest)?;
        }
        Ok(())
    }
}

/// A struct to parse property declarations.
struct PropertyDeclarationParser<'a, 'b: 'a> {
    context: &'a ParserContext<'b>,
    declarations: &'a mut Vec<PropertyDeclaration>,
    /// The last parsed property id if any.
    last_parsed_property_id: Option<PropertyId>,
}

/// Default methods reject all at rules.
impl<'a, 'b, 'i> AtRuleParser<'i> for PropertyDeclarationParser<'a, 'b> {
    type Prelude = ();
    type AtRule = Importance;
    type Error = StyleParseErrorKind<'i>;
}

/// Default methods reject all rules.
impl<'a, 'b, 'i> QualifiedRuleParser<'i> for PropertyDeclarationParser<'a, 'b> {
    type Prelude = ();
    type QualifiedRule = Importance;
    type Error = StyleParseErrorKind<'i>;
}

impl<'a, 'b, 'i> RuleBodyItemParser<'i, Importance, StyleParseErrorKind<'i>>
    for PropertyDeclarationParser<'a, 'b>
{
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

/// Parses the value of one declaration, up to but excluding `!important`,
/// into `declarations`. The importance of the produced declarations is
/// normal.
fn parse_declaration_value<'i, 't>(
    id: &PropertyId,
    context: &ParserContext,
    declarations: &mut Vec<PropertyDeclaration>,
    input: &mut Parser<'i, 't>,
) -> Result<(), ParseError<'i>> {
    let start = input.position();
    while input.next_including_whitespace_and_comments().is_ok() {}
    let (css, hack) = split_hack_marker(input.slice_from(start));
    if hack.is_some() && !context.parsing_mode.allows_hacks() {
        return Err(input.new_custom_error(StyleParseErrorKind::HackNotAllowed));
    }

    let mut value_input = ParserInput::new(css);
    let mut value_parser = Parser::new(&mut value_input);
    let value = value_parser.parse_entirely(|input| Value::parse(context, input))?;

    match *id {
        PropertyId::Shorthand(shorthand) => {
            let expanded = shorthand
                .expand(context, &value, Importance::Normal, hack)
                .map_err(|error| input.new_custom_error(StyleParseErrorKind::InvalidShorthand(error)))?;
            declarations.extend(expanded);
        },
        PropertyId::Longhand(ref name) => {
            let value = longhands::normalize(name, value, context);
            declarations.push(PropertyDeclaration::new(name.clone(), value, Importance::Normal).with_hack(hack));
        },
        PropertyId::Custom(ref name) => {
            declarations.push(PropertyDeclaration::new(name.clone(), value, Importance::Normal).with_hack(hack));
        },
    }
    Ok(())
}

impl<'a, 'b, 'i> DeclarationParser<'i> for PropertyDeclarationParser<'a, 'b> {
    type Declaration = Importance;
    type Error = StyleParseErrorKind<'i>;

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        _declaration_start: &ParserState,
    ) -> Result<Importance, ParseError<'i>> {
        let id = PropertyId::parse(&name);
        if self.context.error_reporting_enabled() {
            self.last_parsed_property_id = Some(id.clone());
        }
        let context = self.context;
        let declarations = &mut *self.declarations;
        input.parse_until_before(Delimiter::Bang, |input| {
            parse_declaration_value(&id, context, declarations, input)
        })?;
        let importance = match input.try_parse(parse_important) {
            Ok(()) => Importance::Important,
            Err(_) => Importance::Normal,
        };
        // In case there is still unparsed text in the declaration, we should roll back.
        if !input.is_exhausted() {
            return Err(input.new_custom_error(StyleParseErrorKind::PropertyDeclarationValueNotExhausted));
        }
        for declaration in self.declarations.iter_mut() {
            declaration.importance = importance;
        }
        Ok(importance)
    }
}

#[cold]
fn report_one_css_error<'i>(
    context: &ParserContext,
    error: ParseError<'i>,
    slice: &str,
    property: Option<PropertyId>,
) {
    debug_assert!(context.error_reporting_enabled());

    let location = error.location;
    let error = match (property, error.kind) {
        (Some(_), ParseErrorKind::Custom(StyleParseErrorKind::InvalidShorthand(error))) => {
            ContextualParseError::InvalidShorthand(slice, error)
        },
        (Some(_), kind) => {
            ContextualParseError::UnsupportedPropertyDeclaration(slice, ParseError { kind, location })
        },
        (None, kind) => ContextualParseError::InvalidRule(slice, ParseError { kind, location }),
    };
    context.log_css_error(location, error);
}

/// Parse a list of property declarations and return a property declaration
/// block.
///
/// Invalid declarations are dropped one by one and reported through the
/// context; the rest of the list is unaffected.
pub fn parse_property_declaration_list(context: &ParserContext, css: &str) -> PropertyDeclarationBlock {
    let mut input = ParserInput::new(css);
    let mut input = Parser::new(&mut input);
    let mut declarations = vec![];
    let mut block = PropertyDeclarationBlock::new();
    let mut parser = PropertyDeclarationParser {
        context,
        last_parsed_property_id: None,
        declarations: &mut declarations,
    };
    let mut iter = RuleBodyParser::new(&mut input, &mut parser);
    while let Some(declaration) = iter.next() {
        match declaration {
            Ok(_) => {
                block.extend(iter.parser.declarations.drain(..), DeclarationSource::Parsing);
                // We've successfully parsed a declaration, so forget about
                // `last_parsed_property_id`. It'd be wrong to associate any
                // following error with this property.
                iter.parser.last_parsed_property_id = None;
            },
            Err((error, slice)) => {
                iter.parser.declarations.clear();
                debug!("Dropping declaration `{}`", slice);
                if context.error_reporting_enabled() {
                    let property = iter.parser.last_parsed_property_id.take();
                    report_one_css_error(context, error, slice, property);
                }
            },
        }
    }
    block
}

/// Parse a given property declaration. Can result in multiple
/// `PropertyDeclaration`s when expanding a shorthand, for example.
///
/// This does not attempt to parse !important at all.
pub fn parse_one_declaration_into(
    context: &ParserContext,
    declarations: &mut Vec<PropertyDeclaration>,
    name: &str,
    css: &str,
) -> Result<(), ()> {
    let id = PropertyId::parse(name);
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let start_position = parser.position();
    let mut parsed = vec![];
    parser
        .parse_entirely(|parser| parse_declaration_value(&id, context, &mut parsed, parser))
        .map_err(|error| {
            debug!("Dropping declaration `{}: {}`", name, css);
            if context.error_reporting_enabled() {
                report_one_css_error(context, error, parser.slice_from(start_position), Some(id.clone()))
            }
        })?;
    declarations.extend(parsed);
    Ok(())
}
