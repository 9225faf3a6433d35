/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Compaction of longhand declarations back into shorthands.
//!
//! Shorthands are tried largest first. For each one, the longhands of the
//! block are grouped by importance and every group covering the whole
//! shorthand is joined into a single shorthand value. A candidate value is
//! only accepted if expanding it gives back exactly the same longhands, so
//! compaction can make the output longer than ideal but never changes what
//! it means.

use std::sync::Arc;

use cssparser::ToCss;
use fnv::FnvHashSet;
use indexmap::IndexMap;
use itertools::Itertools;
use log::trace;
use smallvec::SmallVec;

use super::declaration_block::{DeclarationSource, PropertyDeclarationBlock};
use super::longhands::initial_value;
use super::shorthands::{ShorthandId, ShorthandRegistry};
use super::{Importance, PropertyDeclaration};
use crate::parser::{ParserContext, ParsingMode};
use crate::values::{UnparsedValue, Value};

/// Why a group of longhands was not merged into a shorthand.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum MergeFailure {
    /// Some longhands of the shorthand are missing from the group.
    PartialCoverage,
    /// A substitution appears on only some longhands, or the longhands
    /// come from different shorthand values.
    AmbiguousSubstitution,
    /// A CSS-wide keyword appears on only some longhands, or different
    /// keywords are used.
    MixedCssWideKeywords,
    /// The longhands carry different hack markers.
    MismatchedHacks,
    /// The family cannot write these values as a shorthand.
    Unrepresentable,
    /// The candidate shorthand does not expand back to the same longhands.
    VerificationFailed,
    /// The shorthand would not be shorter than the longhands.
    NotShorter,
}

/// A shorthand declaration built from a group of longhands.
struct Merged {
    declaration: PropertyDeclaration,
    /// The longhands the shorthand replaces.
    consumed: SmallVec<[&'static str; 12]>,
}

/// Joins a complete set of longhand declarations into a shorthand value,
/// verified by expanding it again. `slots` follows the registry order of
/// the shorthand longhands; a `None` slot is filled with the initial value
/// of its longhand and its declaration is not consumed.
fn merge_group(
    context: &ParserContext,
    shorthand: ShorthandId,
    importance: Importance,
    slots: &[Option<&PropertyDeclaration>],
) -> Result<Merged, MergeFailure> {
    let names = shorthand.longhands();
    let present: SmallVec<[&PropertyDeclaration; 12]> = slots.iter().flatten().copied().collect();
    let Some(first) = present.first() else {
        return Err(MergeFailure::PartialCoverage);
    };
    let filled = present.len() != slots.len();

    let hack = first.hack();
    if present.iter().any(|declaration| declaration.hack() != hack) {
        return Err(MergeFailure::MismatchedHacks);
    }

    let value = if let Some(keyword) = first.value().css_wide_keyword() {
        if present
            .iter()
            .any(|declaration| declaration.value().css_wide_keyword() != Some(keyword))
        {
            return Err(MergeFailure::MixedCssWideKeywords);
        }
        Value::CssWide(keyword)
    } else if present
        .iter()
        .any(|declaration| declaration.value().css_wide_keyword().is_some())
    {
        return Err(MergeFailure::MixedCssWideKeywords);
    } else if present
        .iter()
        .any(|declaration| declaration.value().pending_substitution().is_some())
    {
        pending_shorthand_value(shorthand, &present)?
    } else {
        let values: SmallVec<[&Value; 12]> = slots
            .iter()
            .zip(names)
            .map(|(slot, name)| match *slot {
                Some(declaration) => Some(declaration.value()),
                None => initial_value(name),
            })
            .collect::<Option<_>>()
            .ok_or(MergeFailure::Unrepresentable)?;
        verified_shorthand_value(context, shorthand, &values)?
    };

    let mut declaration =
        PropertyDeclaration::new(shorthand.name(), value, importance).with_hack(hack);
    declaration.set_index(present.iter().map(|d| d.index()).min().unwrap_or_default());

    if filled {
        let longhands_length: usize = present.iter().map(|d| d.to_css_string().len()).sum();
        if declaration.to_css_string().len() >= longhands_length {
            return Err(MergeFailure::NotShorter);
        }
    }

    Ok(Merged {
        declaration,
        consumed: slots
            .iter()
            .zip(names)
            .filter(|(slot, _)| slot.is_some())
            .map(|(_, name)| *name)
            .collect(),
    })
}

/// A substitution can be put back on the shorthand only if every longhand
/// came from that same shorthand value.
fn pending_shorthand_value(
    shorthand: ShorthandId,
    present: &[&PropertyDeclaration],
) -> Result<Value, MergeFailure> {
    let mut css: Option<&String> = None;
    for declaration in present {
        match declaration.value().pending_substitution() {
            Some(unparsed)
                if unparsed.from_shorthand == Some(shorthand) &&
                    css.is_none_or(|css| *css == unparsed.css) =>
            {
                css = Some(&unparsed.css);
            },
            _ => return Err(MergeFailure::AmbiguousSubstitution),
        }
    }
    let css = css.ok_or(MergeFailure::AmbiguousSubstitution)?;
    Ok(Value::PendingSubstitution(Arc::new(UnparsedValue {
        css: css.clone(),
        from_shorthand: None,
    })))
}

/// Builds a shorthand value from its longhand values and checks that it
/// expands back to the same values.
fn verified_shorthand_value(
    context: &ParserContext,
    shorthand: ShorthandId,
    values: &[&Value],
) -> Result<Value, MergeFailure> {
    let candidate = shorthand
        .to_shorthand_value(values)
        .ok_or(MergeFailure::Unrepresentable)?;
    let expanded = shorthand
        .parse_value(context, &candidate)
        .map_err(|_| MergeFailure::VerificationFailed)?;
    if expanded.len() != values.len() || expanded.iter().zip(values).any(|(a, b)| a != *b) {
        return Err(MergeFailure::VerificationFailed);
    }
    Ok(candidate)
}

/// The shorthand declaration equivalent to the given longhand
/// declarations, in registry order, if there is one.
pub(crate) fn shorthand_declaration(
    shorthand: ShorthandId,
    declarations: &[&PropertyDeclaration],
) -> Option<PropertyDeclaration> {
    let importance = declarations.first()?.importance();
    if declarations.iter().any(|d| d.importance() != importance) {
        return None;
    }
    let slots: SmallVec<[Option<&PropertyDeclaration>; 12]> =
        declarations.iter().map(|d| Some(*d)).collect();
    merge_group(&ParserContext::default(), shorthand, importance, &slots)
        .inspect_err(|failure| trace!("No value for `{}`: {:?}", shorthand.name(), failure))
        .ok()
        .map(|merged| merged.declaration)
}

/// Puts the longhands of every shorthand declaration of the block in its
/// place, so that shorthands already present are compacted like any other.
fn expand_shorthand_declarations(
    context: &ParserContext,
    block: &PropertyDeclarationBlock,
) -> IndexMap<String, PropertyDeclaration> {
    let mut longhands: IndexMap<String, PropertyDeclaration> = IndexMap::new();
    let mut insert = |declaration: PropertyDeclaration| {
        if let Some(existing) = longhands.get(declaration.name()) {
            if existing.importance().important() && !declaration.importance().important() {
                return;
            }
        }
        longhands.shift_remove(declaration.name());
        longhands.insert(declaration.name().to_owned(), declaration);
    };

    for declaration in block.declarations() {
        let expanded = ShorthandId::from_name(declaration.name()).and_then(|shorthand| {
            shorthand
                .expand(
                    context,
                    declaration.value(),
                    declaration.importance(),
                    declaration.hack(),
                )
                .ok()
        });
        match expanded {
            Some(expanded) => {
                for mut longhand in expanded {
                    longhand.set_index(declaration.index());
                    insert(longhand);
                }
            },
            None => insert(declaration.clone()),
        }
    }
    longhands
}

/// Merges the longhand declarations of a block into shorthands wherever
/// that is possible without changing the meaning of the block.
///
/// Shorthand declarations are placed where their earliest longhand was;
/// every other declaration keeps its relative order. Compacting the result
/// again gives the same block.
///
/// Candidate shorthands are re-expanded in `parsing_mode`, which should be
/// the mode the block was parsed in: in standards mode, unitless lengths
/// accepted by quirks mode stay longhands.
pub fn compact(block: &PropertyDeclarationBlock, parsing_mode: ParsingMode) -> PropertyDeclarationBlock {
    let context = ParserContext::new(parsing_mode, None);
    let longhands = expand_shorthand_declarations(&context, block);
    let mut consumed: FnvHashSet<&'static str> = FnvHashSet::default();
    let mut merged: Vec<PropertyDeclaration> = vec![];

    for &shorthand in ShorthandRegistry::get().compaction_order() {
        let names = shorthand.longhands();
        if !names.iter().any(|name| longhands.contains_key(*name)) {
            continue;
        }
        for importance in [Importance::Important, Importance::Normal] {
            let available = |name: &str| {
                longhands
                    .get(name)
                    .filter(|d| d.importance() == importance && !consumed.contains(name))
            };
            let slots: SmallVec<[Option<&PropertyDeclaration>; 12]> =
                names.iter().map(|name| available(name)).collect();
            if slots.iter().all(Option::is_none) {
                continue;
            }

            // Missing normal longhands overridden by important ones do not
            // matter, and may take any value in the shorthand.
            let overridden = |name: &&str| {
                longhands
                    .get(*name)
                    .is_some_and(|d| d.importance().important())
            };
            let complete = slots
                .iter()
                .zip(names)
                .all(|(slot, name)| slot.is_some() || (!importance.important() && overridden(name)));
            if !complete {
                trace!(
                    "Not merging into `{}`: {:?}",
                    shorthand.name(),
                    MergeFailure::PartialCoverage
                );
                continue;
            }

            match merge_group(&context, shorthand, importance, &slots) {
                Ok(group) => {
                    trace!("Merged {:?} into `{}`", group.consumed, shorthand.name());
                    consumed.extend(group.consumed.iter().copied());
                    merged.push(group.declaration);
                },
                Err(failure) => trace!("Not merging into `{}`: {:?}", shorthand.name(), failure),
            }
        }
    }

    let leftovers = longhands
        .values()
        .filter(|d| !consumed.contains(d.name()))
        .cloned();
    let mut result = PropertyDeclarationBlock::new();
    let declarations = merged
        .into_iter()
        .chain(leftovers)
        .enumerate()
        .sorted_by_key(|(position, declaration)| (declaration.index(), *position))
        .map(|(_, declaration)| declaration);
    result.extend(declarations, DeclarationSource::Parsing);
    result
}
