/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Shorthands setting two longhands from one or two values, where a single
//! value is mirrored onto both: `overflow`, `gap` and the `place-*`
//! alignment shorthands.

use super::{ExpansionError, Longhands, ShorthandId};
use crate::parser::ParserContext;
use crate::values::Value;
use crate::values::specified::{
    CONTENT_DISTRIBUTION, CONTENT_POSITION, OVERFLOW, OVERFLOW_POSITION, SELF_POSITION,
    is_length_percentage, is_non_negative,
};

/// What a value of one side of the pair may be.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Kind {
    Overflow,
    Gap,
    AlignContent,
    JustifyContent,
    AlignItems,
    JustifyItems,
    AlignSelf,
    JustifySelf,
}

impl Kind {
    fn pair(shorthand: ShorthandId) -> Option<(Kind, Kind)> {
        Some(match shorthand {
            ShorthandId::Overflow => (Kind::Overflow, Kind::Overflow),
            ShorthandId::Gap => (Kind::Gap, Kind::Gap),
            ShorthandId::PlaceContent => (Kind::AlignContent, Kind::JustifyContent),
            ShorthandId::PlaceItems => (Kind::AlignItems, Kind::JustifyItems),
            ShorthandId::PlaceSelf => (Kind::AlignSelf, Kind::JustifySelf),
            _ => return None,
        })
    }

    fn is_justify(self) -> bool {
        matches!(
            self,
            Kind::JustifyContent | Kind::JustifyItems | Kind::JustifySelf
        )
    }

    fn accepts_baseline(self) -> bool {
        !matches!(self, Kind::JustifyContent)
    }

    /// Whether `value` is a position that may follow `safe` or `unsafe`.
    fn accepts_position(self, value: &Value) -> bool {
        let positions = match self {
            Kind::AlignContent | Kind::JustifyContent => CONTENT_POSITION,
            _ => SELF_POSITION,
        };
        value.is_one_of(positions) || (self.is_justify() && value.is_one_of(&["left", "right"]))
    }

    fn accepts_keyword(self, value: &Value) -> bool {
        match self {
            Kind::Overflow => value.is_one_of(OVERFLOW),
            Kind::Gap => false,
            Kind::AlignContent | Kind::JustifyContent => {
                value.is_keyword("normal") || value.is_one_of(CONTENT_DISTRIBUTION)
            },
            Kind::AlignItems | Kind::JustifyItems => value.is_one_of(&["normal", "stretch"]),
            Kind::AlignSelf | Kind::JustifySelf => value.is_one_of(&["auto", "normal", "stretch"]),
        }
    }

    /// Reads one value of this kind from the start of `components`,
    /// returning it along with the number of components used.
    fn take(self, components: &[Value], context: &ParserContext) -> Option<(Value, usize)> {
        let first = components.first()?;
        let second = components.get(1);

        if self == Kind::Gap {
            let valid = first.is_keyword("normal") ||
                (is_length_percentage(first, context) && is_non_negative(first));
            return valid.then(|| (first.clone(), 1));
        }
        if self.accepts_keyword(first) {
            return Some((first.clone(), 1));
        }
        if self.accepts_baseline() {
            if first.is_keyword("baseline") {
                return Some((first.clone(), 1));
            }
            if first.is_one_of(&["first", "last"]) && second.is_some_and(|s| s.is_keyword("baseline")) {
                // `first baseline` is the same as `baseline`.
                let value = if first.is_keyword("first") {
                    Value::ident("baseline")
                } else {
                    Value::List(vec![first.clone(), Value::ident("baseline")])
                };
                return Some((value, 2));
            }
        }
        if self == Kind::JustifyItems {
            let is_legacy_side = |v: &Value| v.is_one_of(&["left", "right", "center"]);
            if first.is_keyword("legacy") {
                return Some(match second.filter(|s| is_legacy_side(s)) {
                    Some(side) => (Value::List(vec![first.clone(), side.clone()]), 2),
                    None => (first.clone(), 1),
                });
            }
            if is_legacy_side(first) && second.is_some_and(|s| s.is_keyword("legacy")) {
                return Some((Value::List(vec![Value::ident("legacy"), first.clone()]), 2));
            }
        }
        if first.is_one_of(OVERFLOW_POSITION) {
            let position = second.filter(|s| self.accepts_position(s))?;
            return Some((Value::List(vec![first.clone(), position.clone()]), 2));
        }
        if self.accepts_position(first) {
            return Some((first.clone(), 1));
        }
        None
    }

    fn accepts(self, value: &Value, context: &ParserContext) -> bool {
        let components = value.components();
        self.take(components, context)
            .is_some_and(|(_, used)| used == components.len())
    }
}

fn is_baseline(value: &Value) -> bool {
    value
        .components()
        .last()
        .is_some_and(|v| v.is_keyword("baseline"))
}

/// Brings an alignment longhand value into the form the `place-*`
/// shorthands produce, such as `baseline` for `first baseline`.
pub fn normalize_alignment(name: &str, value: &Value, context: &ParserContext) -> Option<Value> {
    let kind = match name {
        "align-content" => Kind::AlignContent,
        "justify-content" => Kind::JustifyContent,
        "align-items" => Kind::AlignItems,
        "justify-items" => Kind::JustifyItems,
        "align-self" => Kind::AlignSelf,
        "justify-self" => Kind::JustifySelf,
        _ => return None,
    };
    let components = value.components();
    kind.take(components, context)
        .filter(|&(_, used)| used == components.len())
        .map(|(value, _)| value)
}

/// Expands an ordered-pair shorthand.
pub fn parse_value(
    shorthand: ShorthandId,
    context: &ParserContext,
    value: &Value,
) -> Result<Longhands, ExpansionError> {
    let invalid = |reason| ExpansionError::invalid(shorthand, reason);
    let (first_kind, second_kind) =
        Kind::pair(shorthand).ok_or(invalid("not an ordered-pair shorthand"))?;
    if let Value::Layers(..) = *value {
        return Err(invalid("unexpected comma"));
    }
    let components = value.components();

    let (first, used) = first_kind
        .take(components, context)
        .ok_or_else(|| invalid("invalid first value"))?;
    let rest = &components[used..];
    let second = if rest.is_empty() {
        if shorthand == ShorthandId::PlaceContent && is_baseline(&first) {
            Value::ident("start")
        } else if second_kind.accepts(&first, context) {
            first.clone()
        } else {
            return Err(invalid("a single value must be valid for both longhands"));
        }
    } else {
        let (second, used) = second_kind
            .take(rest, context)
            .ok_or_else(|| invalid("invalid second value"))?;
        if used != rest.len() {
            return Err(invalid("more than two values"));
        }
        second
    };
    Ok(Longhands::from_vec(vec![first, second]))
}

/// Joins two longhand values back into an ordered-pair shorthand value.
pub fn to_shorthand_value(shorthand: ShorthandId, longhands: &[&Value]) -> Option<Value> {
    let [first, second] = *longhands else {
        return None;
    };
    let mirrored = if shorthand == ShorthandId::PlaceContent && is_baseline(first) {
        second.is_keyword("start")
    } else {
        first == second
    };
    if mirrored {
        return Some(first.clone());
    }
    let mut components = first.components().to_vec();
    components.extend(second.components().iter().cloned());
    Some(Value::List(components))
}
