/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The value model shared by longhands and shorthands.
//!
//! A declaration value is kept close to its token structure: whitespace
//! separated components become a [`Value::List`], comma separated layers a
//! [`Value::Layers`]. Everything is stored in canonical form so that two
//! spellings of the same value compare equal.

use std::fmt::{self, Write};
use std::sync::Arc;

use cssparser::{ToCss, match_ignore_ascii_case, serialize_identifier, serialize_string};
use itertools::Itertools;

use crate::properties::ShorthandId;

pub mod grid;
pub mod parsing;
pub mod position;
pub mod specified;

pub use self::parsing::{HackMarker, split_hack_marker};

/// A CSS-wide keyword, valid as the whole value of any property.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CssWideKeyword {
    /// The `initial` keyword.
    Initial,
    /// The `inherit` keyword.
    Inherit,
    /// The `unset` keyword.
    Unset,
    /// The `revert` keyword.
    Revert,
    /// The `revert-layer` keyword.
    RevertLayer,
}

impl CssWideKeyword {
    /// Returns the keyword as written in CSS.
    pub fn to_str(&self) -> &'static str {
        match *self {
            CssWideKeyword::Initial => "initial",
            CssWideKeyword::Inherit => "inherit",
            CssWideKeyword::Unset => "unset",
            CssWideKeyword::Revert => "revert",
            CssWideKeyword::RevertLayer => "revert-layer",
        }
    }

    /// Matches an identifier against the CSS-wide keywords, ASCII
    /// case-insensitively.
    pub fn from_ident(ident: &str) -> Option<Self> {
        Some(match_ignore_ascii_case! { ident,
            "initial" => CssWideKeyword::Initial,
            "inherit" => CssWideKeyword::Inherit,
            "unset" => CssWideKeyword::Unset,
            "revert" => CssWideKeyword::Revert,
            "revert-layer" => CssWideKeyword::RevertLayer,
            _ => return None,
        })
    }
}

/// A numeric value followed by a unit, e.g. `10px` or `0.3s`.
#[derive(Clone, Debug, PartialEq)]
pub struct Dimension {
    /// The magnitude.
    pub value: f32,
    /// The unit, lowercased.
    pub unit: String,
}

/// A color that is not a plain keyword.
///
/// Named colors, `transparent` and `currentcolor` stay identifiers; see
/// [`specified::is_color`].
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    /// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`, lowercased and shortened
    /// when possible. Stored without the leading `#`.
    Hex(String),
    /// `rgb()`, `hsl()`, `color-mix()` and friends.
    Function(FunctionCall),
}

/// An image value.
#[derive(Clone, Debug, PartialEq)]
pub enum Image {
    /// `url(...)`, with the URL unescaped.
    Url(String),
    /// A gradient or another image-producing function.
    Function(FunctionCall),
}

/// A function call whose arguments are kept as canonical CSS text.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionCall {
    /// The function name, lowercased.
    pub name: String,
    /// The arguments, re-serialized without redundant whitespace.
    pub arguments: String,
}

/// A value containing `var()` or `env()` references, which can only be
/// resolved at computed-value time.
#[derive(Clone, Debug, PartialEq)]
pub struct UnparsedValue {
    /// The value as canonical CSS text.
    pub css: String,
    /// The shorthand this value was set through, if any. Longhands set from
    /// a shorthand with a pending substitution share the whole shorthand
    /// value.
    pub from_shorthand: Option<ShorthandId>,
}

/// A specified value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// `initial`, `inherit`, `unset`, `revert` or `revert-layer`.
    CssWide(CssWideKeyword),
    /// A keyword or a custom identifier.
    Ident(String),
    /// A unitless number.
    Number(f32),
    /// A number with a unit.
    Dimension(Dimension),
    /// A percentage, stored as written (`50%` is `50.`).
    Percentage(f32),
    /// A hex or functional color.
    Color(Color),
    /// A quoted string.
    String(String),
    /// An image.
    Image(Image),
    /// Any other function call (`calc()`, `attr()`, `minmax()`...).
    Function(FunctionCall),
    /// Grid line names, `[a b]`.
    LineNames(Vec<String>),
    /// A `/` separating two parts of a value.
    Delim(char),
    /// A value containing an unresolved substitution.
    PendingSubstitution(Arc<UnparsedValue>),
    /// Whitespace separated components.
    List(Vec<Value>),
    /// Comma separated layers.
    Layers(Vec<Value>),
}

impl Value {
    /// Builds an identifier.
    pub fn ident(ident: &str) -> Self {
        Value::Ident(ident.to_owned())
    }

    /// Builds a list out of components, unwrapping single components.
    pub fn list(mut components: Vec<Value>) -> Self {
        if components.len() == 1 {
            return components.remove(0);
        }
        Value::List(components)
    }

    /// Builds a layered value, unwrapping a single layer.
    pub fn layers(mut layers: Vec<Value>) -> Self {
        if layers.len() == 1 {
            return layers.remove(0);
        }
        Value::Layers(layers)
    }

    /// The whitespace separated components of this value.
    pub fn components(&self) -> &[Value] {
        match *self {
            Value::List(ref components) => components,
            ref other => std::slice::from_ref(other),
        }
    }

    /// The comma separated layers of this value.
    pub fn as_layers(&self) -> &[Value] {
        match *self {
            Value::Layers(ref layers) => layers,
            ref other => std::slice::from_ref(other),
        }
    }

    /// Returns the identifier if this is one.
    pub fn as_ident(&self) -> Option<&str> {
        match *self {
            Value::Ident(ref ident) => Some(ident),
            _ => None,
        }
    }

    /// Whether this is the given keyword.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.as_ident()
            .is_some_and(|ident| ident.eq_ignore_ascii_case(keyword))
    }

    /// Whether this is one of the given keywords.
    pub fn is_one_of(&self, keywords: &[&str]) -> bool {
        self.as_ident().is_some_and(|ident| {
            keywords
                .iter()
                .any(|keyword| ident.eq_ignore_ascii_case(keyword))
        })
    }

    /// Returns the CSS-wide keyword if this value is one.
    pub fn css_wide_keyword(&self) -> Option<CssWideKeyword> {
        match *self {
            Value::CssWide(keyword) => Some(keyword),
            _ => None,
        }
    }

    /// Returns the pending substitution if this value is one.
    pub fn pending_substitution(&self) -> Option<&UnparsedValue> {
        match *self {
            Value::PendingSubstitution(ref unparsed) => Some(unparsed),
            _ => None,
        }
    }

    /// Whether this is the `/` delimiter.
    pub fn is_slash(&self) -> bool {
        matches!(*self, Value::Delim('/'))
    }

    /// Whether this is a single component, rather than a list or layers.
    pub fn is_component(&self) -> bool {
        !matches!(*self, Value::List(..) | Value::Layers(..))
    }

    /// The numeric value of a unitless number.
    pub fn as_number(&self) -> Option<f32> {
        match *self {
            Value::Number(number) => Some(number),
            _ => None,
        }
    }
}

/// Serializes a number in its shortest form.
pub fn serialize_number<W>(value: f32, dest: &mut W) -> fmt::Result
where
    W: Write,
{
    if value == 0. {
        return dest.write_str("0");
    }
    if value.fract() == 0. && value.abs() < 1e9 {
        return write!(dest, "{}", value as i64);
    }
    write!(dest, "{}", value)
}

fn is_safe_unquoted_url(url: &str) -> bool {
    !url.is_empty() &&
        !url.chars().any(|c| {
            c.is_whitespace() || matches!(c, '"' | '\'' | '(' | ')' | '\\') || c.is_control()
        })
}

impl ToCss for FunctionCall {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        serialize_identifier(&self.name, dest)?;
        dest.write_char('(')?;
        dest.write_str(&self.arguments)?;
        dest.write_char(')')
    }
}

impl ToCss for Color {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        match *self {
            Color::Hex(ref hex) => {
                dest.write_char('#')?;
                dest.write_str(hex)
            },
            Color::Function(ref function) => function.to_css(dest),
        }
    }
}

impl ToCss for Image {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        match *self {
            Image::Url(ref url) => {
                dest.write_str("url(")?;
                if is_safe_unquoted_url(url) {
                    dest.write_str(url)?;
                } else {
                    serialize_string(url, dest)?;
                }
                dest.write_char(')')
            },
            Image::Function(ref function) => function.to_css(dest),
        }
    }
}

impl ToCss for Value {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        match *self {
            Value::CssWide(keyword) => dest.write_str(keyword.to_str()),
            Value::Ident(ref ident) => serialize_identifier(ident, dest),
            Value::Number(number) => serialize_number(number, dest),
            Value::Dimension(ref dimension) => {
                serialize_number(dimension.value, dest)?;
                dest.write_str(&dimension.unit)
            },
            Value::Percentage(percentage) => {
                serialize_number(percentage, dest)?;
                dest.write_char('%')
            },
            Value::Color(ref color) => color.to_css(dest),
            Value::String(ref string) => serialize_string(string, dest),
            Value::Image(ref image) => image.to_css(dest),
            Value::Function(ref function) => function.to_css(dest),
            Value::LineNames(ref names) => {
                dest.write_char('[')?;
                for (i, name) in names.iter().enumerate() {
                    if i > 0 {
                        dest.write_char(' ')?;
                    }
                    serialize_identifier(name, dest)?;
                }
                dest.write_char(']')
            },
            Value::Delim(delim) => dest.write_char(delim),
            Value::PendingSubstitution(ref unparsed) => dest.write_str(&unparsed.css),
            Value::List(ref components) => {
                // No whitespace around `/`, it is a delimiter on its own.
                let mut previous_was_delim = true;
                for component in components {
                    let is_delim = component.is_slash();
                    if !previous_was_delim && !is_delim {
                        dest.write_char(' ')?;
                    }
                    component.to_css(dest)?;
                    previous_was_delim = is_delim;
                }
                Ok(())
            },
            Value::Layers(ref layers) => {
                let css = layers.iter().map(|layer| layer.to_css_string()).join(",");
                dest.write_str(&css)
            },
        }
    }
}
