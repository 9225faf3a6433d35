/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Ordering of competing rules by specificity.
//!
//! A [`Cascade`] is filled by whoever matched the rules, and iterated in
//! ascending precedence, so that the rule visited last wins.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use crate::properties::{DeclarationSource, PropertyDeclarationBlock};

/// The precedence of a rule, derived from its selector.
///
/// Fields compare in declaration order; `source_order` breaks ties between
/// otherwise equal selectors.
///
/// <https://drafts.csswg.org/selectors/#specificity-rules>
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Specificity {
    /// The number of ID selectors.
    pub id_count: u32,
    /// The number of class, attribute and pseudo-class selectors.
    pub attrib_class_count: u32,
    /// The number of type and pseudo-element selectors.
    pub names_pseudo_count: u32,
    /// The position of the rule in the style sheet.
    pub source_order: u32,
}

impl Specificity {
    /// Creates a specificity.
    pub fn new(
        id_count: u32,
        attrib_class_count: u32,
        names_pseudo_count: u32,
        source_order: u32,
    ) -> Self {
        Specificity {
            id_count,
            attrib_class_count,
            names_pseudo_count,
            source_order,
        }
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({},{},{})#{}",
            self.id_count, self.attrib_class_count, self.names_pseudo_count, self.source_order
        )
    }
}

/// Rules ordered by ascending specificity.
///
/// Rules with equal specificity are kept in insertion order, so adding the
/// same specificity twice keeps both.
pub struct Cascade<R> {
    rules: BTreeMap<(Specificity, u64), R>,
    next_sequence: u64,
}

impl<R> Default for Cascade<R> {
    fn default() -> Self {
        Cascade {
            rules: BTreeMap::new(),
            next_sequence: 0,
        }
    }
}

impl<R: fmt::Debug> fmt::Debug for Cascade<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter_with_specificity()).finish()
    }
}

impl<R> Cascade<R> {
    /// Creates an empty cascade.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule at the position given by its specificity.
    pub fn add(&mut self, specificity: Specificity, rule: R) {
        self.rules.insert((specificity, self.next_sequence), rule);
        self.next_sequence += 1;
    }

    /// The number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rule was added.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over the rules, lowest precedence first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &R> + '_ {
        self.rules.values()
    }

    /// Iterates over the rules and their specificities, lowest precedence
    /// first.
    pub fn iter_with_specificity(
        &self,
    ) -> impl DoubleEndedIterator<Item = (Specificity, &R)> + '_ {
        self.rules
            .iter()
            .map(|(&(specificity, _), rule)| (specificity, rule))
    }
}

impl<R> Cascade<R>
where
    R: Borrow<PropertyDeclarationBlock>,
{
    /// Folds the declarations of every rule into one block, as the cascade
    /// resolves them: later rules win, and `!important` declarations win
    /// over normal ones regardless of specificity.
    pub fn cascaded_declarations(&self) -> PropertyDeclarationBlock {
        let mut block = PropertyDeclarationBlock::new();
        for rule in self.iter() {
            block.extend(
                rule.borrow().normal_declaration_iter().cloned(),
                DeclarationSource::Parsing,
            );
        }
        for rule in self.iter() {
            block.extend(
                rule.borrow()
                    .declarations()
                    .filter(|declaration| declaration.importance().important())
                    .cloned(),
                DeclarationSource::Parsing,
            );
        }
        block
    }
}

impl<R> FromIterator<(Specificity, R)> for Cascade<R> {
    fn from_iter<I: IntoIterator<Item = (Specificity, R)>>(iter: I) -> Self {
        let mut cascade = Cascade::new();
        for (specificity, rule) in iter {
            cascade.add(specificity, rule);
        }
        cascade
    }
}
