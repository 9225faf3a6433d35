/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! A CSS declaration engine.
//!
//! Declaration blocks are parsed with [`cssparser`] into a small value model,
//! shorthands are expanded into their longhands on the way in, and
//! [`compact`](properties::compaction::compact) folds longhands back into the
//! shortest equivalent shorthands on the way out. The [`cascade`] module
//! orders competing rules by specificity.
//!
//! The main entry points are:
//!
//! * [`parse_property_declaration_list`](properties::parse_property_declaration_list),
//!   which turns the contents of a style rule or a `style` attribute into a
//!   [`PropertyDeclarationBlock`](properties::PropertyDeclarationBlock).
//! * [`ShorthandId::expand`](properties::ShorthandId::expand) and the
//!   [`expand`](properties::expand) helper.
//! * [`PropertyDeclarationBlock::compact`](properties::PropertyDeclarationBlock::compact).

#![deny(unsafe_code)]

pub mod cascade;
pub mod error_reporting;
pub mod parser;
pub mod properties;
pub mod values;

pub use crate::cascade::{Cascade, Specificity};
pub use crate::parser::{ParserContext, ParsingMode};
pub use crate::properties::{
    Importance, PropertyDeclaration, PropertyDeclarationBlock, ShorthandId,
};
pub use crate::values::Value;
