/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The shorthand registry and the expansion of shorthands into longhands.
//!
//! Each shorthand belongs to a [`ShorthandFamily`], and each family has a
//! module with a `parse_value` function, turning a shorthand value into the
//! values of its longhands, and a `to_shorthand_value` function doing the
//! reverse.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use fnv::FnvHashMap;
use lazy_static::lazy_static;
use log::debug;
use smallvec::SmallVec;

use super::{Importance, PropertyDeclaration};
use crate::parser::ParserContext;
use crate::values::{HackMarker, UnparsedValue, Value};

pub mod box_edges;
pub mod composite;
pub mod generic;
pub mod grid;
pub mod layered;
pub mod ordered_pair;

/// The values of the longhands of a shorthand, in registry order.
pub type Longhands = SmallVec<[Value; 8]>;

/// The grammar family a shorthand belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ShorthandFamily {
    /// Comma separated layers, each distributing its components over the
    /// longhands (`background`, `transition`...).
    Layered,
    /// One to four values mapped onto the sides of a box, or one to two
    /// values onto the start and end of a logical axis.
    BoxEdges(u8),
    /// Components in a fixed order, some separated by `/` (`font`,
    /// `border-image`, `flex`).
    CompositeSequence,
    /// Components in any order, each matching the grammar of one longhand.
    GenericSequence,
    /// A value per axis, the second mirroring the first when omitted.
    OrderedPair,
    /// `grid-template` and `grid`.
    GridTemplate,
    /// `grid-row` and `grid-column`.
    GridPlacement,
    /// `grid-area`.
    GridArea,
}

/// An entry of the shorthand registry.
#[derive(Debug)]
pub struct ShorthandEntry {
    /// The shorthand.
    pub id: ShorthandId,
    /// The shorthand name.
    pub name: &'static str,
    /// The longhands it sets, in the order family algorithms produce them.
    pub longhands: &'static [&'static str],
    /// The grammar family.
    pub family: ShorthandFamily,
}

macro_rules! shorthands {
    ($($variant:ident: $name:tt => $family:expr, [$($longhand:tt),+ $(,)?];)+) => {
        /// A shorthand property known to the registry.
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum ShorthandId {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )+
        }

        static SHORTHAND_ENTRIES: &[ShorthandEntry] = &[
            $(
                ShorthandEntry {
                    id: ShorthandId::$variant,
                    name: $name,
                    longhands: &[$($longhand),+],
                    family: $family,
                },
            )+
        ];
    };
}

shorthands! {
    Background: "background" => ShorthandFamily::Layered, [
        "background-image", "background-position", "background-size", "background-repeat",
        "background-attachment", "background-origin", "background-clip", "background-color",
    ];
    Mask: "mask" => ShorthandFamily::Layered, [
        "mask-image", "mask-position", "mask-size", "mask-repeat", "mask-origin", "mask-clip",
        "mask-composite", "mask-mode",
    ];
    Transition: "transition" => ShorthandFamily::Layered, [
        "transition-property", "transition-duration", "transition-timing-function",
        "transition-delay",
    ];
    Animation: "animation" => ShorthandFamily::Layered, [
        "animation-name", "animation-duration", "animation-timing-function", "animation-delay",
        "animation-iteration-count", "animation-direction", "animation-fill-mode",
        "animation-play-state",
    ];
    Margin: "margin" => ShorthandFamily::BoxEdges(4), [
        "margin-top", "margin-right", "margin-bottom", "margin-left",
    ];
    Padding: "padding" => ShorthandFamily::BoxEdges(4), [
        "padding-top", "padding-right", "padding-bottom", "padding-left",
    ];
    BorderWidth: "border-width" => ShorthandFamily::BoxEdges(4), [
        "border-top-width", "border-right-width", "border-bottom-width", "border-left-width",
    ];
    BorderStyle: "border-style" => ShorthandFamily::BoxEdges(4), [
        "border-top-style", "border-right-style", "border-bottom-style", "border-left-style",
    ];
    BorderColor: "border-color" => ShorthandFamily::BoxEdges(4), [
        "border-top-color", "border-right-color", "border-bottom-color", "border-left-color",
    ];
    BorderRadius: "border-radius" => ShorthandFamily::BoxEdges(4), [
        "border-top-left-radius", "border-top-right-radius", "border-bottom-right-radius",
        "border-bottom-left-radius",
    ];
    Inset: "inset" => ShorthandFamily::BoxEdges(4), ["top", "right", "bottom", "left"];
    MarginBlock: "margin-block" => ShorthandFamily::BoxEdges(2), [
        "margin-block-start", "margin-block-end",
    ];
    MarginInline: "margin-inline" => ShorthandFamily::BoxEdges(2), [
        "margin-inline-start", "margin-inline-end",
    ];
    PaddingBlock: "padding-block" => ShorthandFamily::BoxEdges(2), [
        "padding-block-start", "padding-block-end",
    ];
    PaddingInline: "padding-inline" => ShorthandFamily::BoxEdges(2), [
        "padding-inline-start", "padding-inline-end",
    ];
    InsetBlock: "inset-block" => ShorthandFamily::BoxEdges(2), [
        "inset-block-start", "inset-block-end",
    ];
    InsetInline: "inset-inline" => ShorthandFamily::BoxEdges(2), [
        "inset-inline-start", "inset-inline-end",
    ];
    Font: "font" => ShorthandFamily::CompositeSequence, [
        "font-style", "font-variant-caps", "font-weight", "font-stretch", "font-size",
        "line-height", "font-family",
    ];
    BorderImage: "border-image" => ShorthandFamily::CompositeSequence, [
        "border-image-source", "border-image-slice", "border-image-width",
        "border-image-outset", "border-image-repeat",
    ];
    Flex: "flex" => ShorthandFamily::CompositeSequence, [
        "flex-grow", "flex-shrink", "flex-basis",
    ];
    TextDecoration: "text-decoration" => ShorthandFamily::GenericSequence, [
        "text-decoration-line", "text-decoration-style", "text-decoration-color",
        "text-decoration-thickness",
    ];
    Outline: "outline" => ShorthandFamily::GenericSequence, [
        "outline-color", "outline-style", "outline-width",
    ];
    ColumnRule: "column-rule" => ShorthandFamily::GenericSequence, [
        "column-rule-width", "column-rule-style", "column-rule-color",
    ];
    FlexFlow: "flex-flow" => ShorthandFamily::GenericSequence, [
        "flex-direction", "flex-wrap",
    ];
    Border: "border" => ShorthandFamily::GenericSequence, [
        "border-top-width", "border-right-width", "border-bottom-width", "border-left-width",
        "border-top-style", "border-right-style", "border-bottom-style", "border-left-style",
        "border-top-color", "border-right-color", "border-bottom-color", "border-left-color",
    ];
    BorderTop: "border-top" => ShorthandFamily::GenericSequence, [
        "border-top-width", "border-top-style", "border-top-color",
    ];
    BorderRight: "border-right" => ShorthandFamily::GenericSequence, [
        "border-right-width", "border-right-style", "border-right-color",
    ];
    BorderBottom: "border-bottom" => ShorthandFamily::GenericSequence, [
        "border-bottom-width", "border-bottom-style", "border-bottom-color",
    ];
    BorderLeft: "border-left" => ShorthandFamily::GenericSequence, [
        "border-left-width", "border-left-style", "border-left-color",
    ];
    ListStyle: "list-style" => ShorthandFamily::GenericSequence, [
        "list-style-position", "list-style-image", "list-style-type",
    ];
    Columns: "columns" => ShorthandFamily::GenericSequence, ["column-width", "column-count"];
    Overflow: "overflow" => ShorthandFamily::OrderedPair, ["overflow-x", "overflow-y"];
    Gap: "gap" => ShorthandFamily::OrderedPair, ["row-gap", "column-gap"];
    PlaceContent: "place-content" => ShorthandFamily::OrderedPair, [
        "align-content", "justify-content",
    ];
    PlaceItems: "place-items" => ShorthandFamily::OrderedPair, ["align-items", "justify-items"];
    PlaceSelf: "place-self" => ShorthandFamily::OrderedPair, ["align-self", "justify-self"];
    GridRow: "grid-row" => ShorthandFamily::GridPlacement, ["grid-row-start", "grid-row-end"];
    GridColumn: "grid-column" => ShorthandFamily::GridPlacement, [
        "grid-column-start", "grid-column-end",
    ];
    GridArea: "grid-area" => ShorthandFamily::GridArea, [
        "grid-row-start", "grid-column-start", "grid-row-end", "grid-column-end",
    ];
    GridTemplate: "grid-template" => ShorthandFamily::GridTemplate, [
        "grid-template-rows", "grid-template-columns", "grid-template-areas",
    ];
    Grid: "grid" => ShorthandFamily::GridTemplate, [
        "grid-template-rows", "grid-template-columns", "grid-template-areas",
        "grid-auto-rows", "grid-auto-columns", "grid-auto-flow",
    ];
}

/// Lookup tables over the shorthand entries, built once per process.
pub struct ShorthandRegistry {
    by_name: FnvHashMap<&'static str, ShorthandId>,
    by_longhand: FnvHashMap<&'static str, SmallVec<[ShorthandId; 4]>>,
    compaction_order: Vec<ShorthandId>,
}

lazy_static! {
    static ref REGISTRY: ShorthandRegistry = ShorthandRegistry::build();
}

impl ShorthandRegistry {
    fn build() -> Self {
        let mut by_name = FnvHashMap::default();
        let mut by_longhand: FnvHashMap<_, SmallVec<_>> = FnvHashMap::default();
        for entry in SHORTHAND_ENTRIES {
            by_name.insert(entry.name, entry.id);
            for longhand in entry.longhands {
                by_longhand.entry(*longhand).or_default().push(entry.id);
            }
        }
        // Wider shorthands go first, so that `border` gets a chance before
        // `border-width` and `border-top`.
        let mut compaction_order: Vec<_> = SHORTHAND_ENTRIES.iter().map(|entry| entry.id).collect();
        compaction_order.sort_by_key(|id| std::cmp::Reverse(id.longhands().len()));
        ShorthandRegistry {
            by_name,
            by_longhand,
            compaction_order,
        }
    }

    /// The process-wide registry.
    pub fn get() -> &'static Self {
        &REGISTRY
    }

    /// Looks a shorthand up by its lowercase name.
    pub fn lookup(&self, name: &str) -> Option<ShorthandId> {
        self.by_name.get(name).copied()
    }

    /// The shorthands a longhand belongs to.
    pub fn shorthands_for_longhand(&self, longhand: &str) -> &[ShorthandId] {
        self.by_longhand
            .get(longhand)
            .map(|shorthands| &shorthands[..])
            .unwrap_or(&[])
    }

    /// The order in which compaction tries shorthands.
    pub fn compaction_order(&self) -> &[ShorthandId] {
        &self.compaction_order
    }
}

/// The reason a shorthand value could not be expanded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ExpansionError {
    /// The name does not belong to a known shorthand.
    UnknownShorthand(String),
    /// The value does not match the shorthand grammar.
    InvalidGrammar {
        /// The shorthand being expanded.
        shorthand: ShorthandId,
        /// What was wrong.
        reason: &'static str,
    },
}

impl ExpansionError {
    pub(crate) fn invalid(shorthand: ShorthandId, reason: &'static str) -> Self {
        ExpansionError::InvalidGrammar { shorthand, reason }
    }
}

impl fmt::Display for ExpansionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ExpansionError::UnknownShorthand(ref name) => write!(f, "`{}` is not a shorthand", name),
            ExpansionError::InvalidGrammar { shorthand, reason } => {
                write!(f, "invalid `{}` value: {}", shorthand.name(), reason)
            },
        }
    }
}

impl Error for ExpansionError {}

impl ShorthandId {
    /// The registry entry of this shorthand.
    #[inline]
    pub fn entry(self) -> &'static ShorthandEntry {
        &SHORTHAND_ENTRIES[self as usize]
    }

    /// The shorthand name.
    #[inline]
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// The longhands this shorthand sets.
    #[inline]
    pub fn longhands(self) -> &'static [&'static str] {
        self.entry().longhands
    }

    /// The grammar family of the shorthand.
    #[inline]
    pub fn family(self) -> ShorthandFamily {
        self.entry().family
    }

    /// Looks a shorthand up by name, ASCII case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let registry = ShorthandRegistry::get();
        registry
            .lookup(name)
            .or_else(|| registry.lookup(&name.to_ascii_lowercase()))
    }

    /// Every registered shorthand, in registry order.
    pub fn all() -> impl Iterator<Item = ShorthandId> {
        SHORTHAND_ENTRIES.iter().map(|entry| entry.id)
    }

    /// Expands a shorthand value into declarations of all its longhands.
    ///
    /// CSS-wide keywords and values with pending substitutions are given to
    /// every longhand as they are; anything else goes through the family
    /// grammar. Either every longhand is produced, or none is.
    pub fn expand(
        self,
        context: &ParserContext,
        value: &Value,
        importance: Importance,
        hack: Option<HackMarker>,
    ) -> Result<Vec<PropertyDeclaration>, ExpansionError> {
        let longhands = self.longhands();
        let values: Longhands = if let Some(keyword) = value.css_wide_keyword() {
            longhands.iter().map(|_| Value::CssWide(keyword)).collect()
        } else if let Some(unparsed) = value.pending_substitution() {
            let pending = Value::PendingSubstitution(Arc::new(UnparsedValue {
                css: unparsed.css.clone(),
                from_shorthand: Some(self),
            }));
            longhands.iter().map(|_| pending.clone()).collect()
        } else {
            self.parse_value(context, value).inspect_err(|error| {
                debug!("Dropping shorthand declaration: {}", error);
            })?
        };
        debug_assert_eq!(values.len(), longhands.len());

        Ok(longhands
            .iter()
            .zip(values)
            .map(|(name, value)| PropertyDeclaration::new(*name, value, importance).with_hack(hack))
            .collect())
    }

    /// Runs the family grammar over a value that is neither a CSS-wide
    /// keyword nor a pending substitution.
    pub fn parse_value(
        self,
        context: &ParserContext,
        value: &Value,
    ) -> Result<Longhands, ExpansionError> {
        match self.family() {
            ShorthandFamily::Layered => layered::parse_value(self, context, value),
            ShorthandFamily::BoxEdges(_) => box_edges::parse_value(self, context, value),
            ShorthandFamily::CompositeSequence => composite::parse_value(self, context, value),
            ShorthandFamily::GenericSequence => generic::parse_value(self, context, value),
            ShorthandFamily::OrderedPair => ordered_pair::parse_value(self, context, value),
            ShorthandFamily::GridPlacement |
            ShorthandFamily::GridArea |
            ShorthandFamily::GridTemplate => grid::parse_value(self, context, value),
        }
    }

    /// The reverse of `parse_value`: a candidate shorthand value for the
    /// given longhand values. The candidate is not guaranteed to expand back
    /// to the same longhands; callers verify it.
    pub fn to_shorthand_value(self, longhands: &[&Value]) -> Option<Value> {
        debug_assert_eq!(longhands.len(), self.longhands().len());
        match self.family() {
            ShorthandFamily::Layered => layered::to_shorthand_value(self, longhands),
            ShorthandFamily::BoxEdges(_) => box_edges::to_shorthand_value(self, longhands),
            ShorthandFamily::CompositeSequence => composite::to_shorthand_value(self, longhands),
            ShorthandFamily::GenericSequence => generic::to_shorthand_value(self, longhands),
            ShorthandFamily::OrderedPair => ordered_pair::to_shorthand_value(self, longhands),
            ShorthandFamily::GridPlacement |
            ShorthandFamily::GridArea |
            ShorthandFamily::GridTemplate => grid::to_shorthand_value(self, longhands),
        }
    }
}

/// Expands a shorthand by name with the default parsing mode.
pub fn expand(
    name: &str,
    value: &Value,
    importance: Importance,
) -> Result<Vec<PropertyDeclaration>, ExpansionError> {
    let shorthand =
        ShorthandId::from_name(name).ok_or_else(|| ExpansionError::UnknownShorthand(name.to_owned()))?;
    shorthand.expand(&ParserContext::default(), value, importance, None)
}
