/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Property declarations, shorthand expansion and compaction.

use std::fmt::{self, Write};

use cssparser::{ToCss, serialize_identifier};

use crate::values::{HackMarker, Value};

pub mod compaction;
pub mod declaration_block;
pub mod longhands;
pub mod shorthands;

pub use self::compaction::compact;
pub use self::declaration_block::{
    DeclarationSource, PropertyDeclarationBlock, parse_one_declaration_into,
    parse_property_declaration_list,
};
pub use self::shorthands::{ExpansionError, ShorthandFamily, ShorthandId, expand};

/// A declaration [importance][importance].
///
/// [importance]: https://drafts.csswg.org/css-cascade/#importance
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Importance {
    /// Indicates a declaration without `!important`.
    Normal,

    /// Indicates a declaration with `!important`.
    Important,
}

impl Importance {
    /// Return whether this is an important declaration.
    pub fn important(self) -> bool {
        match self {
            Importance::Normal => false,
            Importance::Important => true,
        }
    }
}

impl Default for Importance {
    fn default() -> Self {
        Importance::Normal
    }
}

/// What a property name refers to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PropertyId {
    /// A shorthand known to the registry.
    Shorthand(ShorthandId),
    /// Any other standard or vendor-prefixed property, lowercased.
    Longhand(String),
    /// A custom property, `--*`, whose name is case-sensitive.
    Custom(String),
}

impl PropertyId {
    /// Resolves a property name as written in CSS.
    pub fn parse(name: &str) -> Self {
        if name.starts_with("--") {
            return PropertyId::Custom(name.to_owned());
        }
        let lower = name.to_ascii_lowercase();
        match ShorthandId::from_name(&lower) {
            Some(shorthand) => PropertyId::Shorthand(shorthand),
            None => PropertyId::Longhand(lower),
        }
    }

    /// The canonical property name.
    pub fn name(&self) -> &str {
        match *self {
            PropertyId::Shorthand(shorthand) => shorthand.name(),
            PropertyId::Longhand(ref name) | PropertyId::Custom(ref name) => name,
        }
    }
}

/// A single property declaration.
///
/// Declarations are immutable once built; setting a property in a block
/// replaces the whole declaration.
#[derive(Clone, Debug)]
pub struct PropertyDeclaration {
    name: String,
    value: Value,
    importance: Importance,
    hack: Option<HackMarker>,
    /// Assigned by the owning block.
    index: u32,
}

impl PropertyDeclaration {
    /// Creates a declaration. The name must already be canonical.
    pub fn new(name: impl Into<String>, value: Value, importance: Importance) -> Self {
        PropertyDeclaration {
            name: name.into(),
            value,
            importance,
            hack: None,
            index: 0,
        }
    }

    /// Attaches a hack marker to the declaration value.
    pub fn with_hack(mut self, hack: Option<HackMarker>) -> Self {
        self.hack = hack;
        self
    }

    /// The property name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared value.
    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Whether this declaration is `!important`.
    #[inline]
    pub fn importance(&self) -> Importance {
        self.importance
    }

    /// The hack marker carried by the value, if any.
    #[inline]
    pub fn hack(&self) -> Option<HackMarker> {
        self.hack
    }

    /// The insertion index within the owning block.
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: u32) {
        self.index = index;
    }

    /// Serializes the value, including its hack marker, without the
    /// importance.
    pub fn value_to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        self.value.to_css(dest)?;
        if let Some(hack) = self.hack {
            dest.write_str(hack.as_str())?;
        }
        Ok(())
    }
}

/// Declarations compare by name, value and importance. Hack markers and
/// insertion indices are ignored.
impl PartialEq for PropertyDeclaration {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value == other.value && self.importance == other.importance
    }
}

impl ToCss for PropertyDeclaration {
    /// Writes the declaration in its canonical form, `name:value;`.
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        if self.name.starts_with("--") {
            dest.write_str(&self.name)?;
        } else {
            serialize_identifier(&self.name, dest)?;
        }
        dest.write_char(':')?;
        self.value_to_css(dest)?;
        if self.importance.important() {
            dest.write_str("!important")?;
        }
        dest.write_char(';')
    }
}
