/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Shorthands whose components may appear in any order, each identified by
//! its type: `border`, `outline`, `text-decoration`, `list-style`...

use smallvec::SmallVec;

use super::{ExpansionError, Longhands, ShorthandId};
use crate::parser::ParserContext;
use crate::properties::longhands::initial_value;
use crate::values::Value;
use crate::values::specified::{
    COUNTER_STYLES, FLEX_DIRECTION, FLEX_WRAP, LIST_STYLE_POSITION, TEXT_DECORATION_LINE,
    TEXT_DECORATION_STYLE, TEXT_DECORATION_THICKNESS, is_color, is_custom_ident, is_image,
    is_integer, is_length, is_length_percentage, is_line_style, is_line_width, is_non_negative,
};

type Accepts = fn(&Value, &ParserContext) -> bool;

/// The grammar of an any-order shorthand.
struct Grammar {
    /// One classifier per longhand, in registry order.
    slots: &'static [Accepts],
    /// A slot that may take several adjacent components.
    repeatable: Option<usize>,
    /// A keyword valid for more than one slot, assigned once everything
    /// else is placed.
    ambiguous: Option<&'static str>,
    /// The slot written out when every longhand has its initial value.
    fallback: usize,
}

fn color(value: &Value, _: &ParserContext) -> bool {
    is_color(value)
}

fn line_style(value: &Value, _: &ParserContext) -> bool {
    is_line_style(value)
}

fn outline_style(value: &Value, _: &ParserContext) -> bool {
    value.is_keyword("auto") || is_line_style(value)
}

fn decoration_line(value: &Value, _: &ParserContext) -> bool {
    value.is_keyword("none") || value.is_one_of(TEXT_DECORATION_LINE)
}

fn decoration_style(value: &Value, _: &ParserContext) -> bool {
    value.is_one_of(TEXT_DECORATION_STYLE)
}

fn decoration_thickness(value: &Value, context: &ParserContext) -> bool {
    value.is_one_of(TEXT_DECORATION_THICKNESS) || is_length_percentage(value, context)
}

fn flex_direction(value: &Value, _: &ParserContext) -> bool {
    value.is_one_of(FLEX_DIRECTION)
}

fn flex_wrap(value: &Value, _: &ParserContext) -> bool {
    value.is_one_of(FLEX_WRAP)
}

fn list_position(value: &Value, _: &ParserContext) -> bool {
    value.is_one_of(LIST_STYLE_POSITION)
}

fn list_image(value: &Value, _: &ParserContext) -> bool {
    value.is_keyword("none") || is_image(value)
}

fn list_type(value: &Value, _: &ParserContext) -> bool {
    value.is_keyword("none") ||
        value.is_one_of(COUNTER_STYLES) ||
        matches!(*value, Value::String(..)) ||
        is_custom_ident(value, &["inside", "outside"])
}

fn column_width(value: &Value, context: &ParserContext) -> bool {
    value.is_keyword("auto") || (is_length(value, context) && is_non_negative(value))
}

fn column_count(value: &Value, _: &ParserContext) -> bool {
    value.is_keyword("auto") || (is_integer(value) && value.as_number().is_some_and(|n| n >= 1.))
}

static BORDER_SIDE: Grammar = Grammar {
    slots: &[is_line_width, line_style, color],
    repeatable: None,
    ambiguous: None,
    fallback: 1,
};

static OUTLINE: Grammar = Grammar {
    slots: &[color, outline_style, is_line_width],
    repeatable: None,
    ambiguous: None,
    fallback: 1,
};

static COLUMN_RULE: Grammar = Grammar {
    slots: &[is_line_width, line_style, color],
    repeatable: None,
    ambiguous: None,
    fallback: 1,
};

static TEXT_DECORATION: Grammar = Grammar {
    slots: &[decoration_line, decoration_style, color, decoration_thickness],
    repeatable: Some(0),
    ambiguous: None,
    fallback: 0,
};

static FLEX_FLOW: Grammar = Grammar {
    slots: &[flex_direction, flex_wrap],
    repeatable: None,
    ambiguous: None,
    fallback: 0,
};

static LIST_STYLE: Grammar = Grammar {
    slots: &[list_position, list_image, list_type],
    repeatable: None,
    ambiguous: Some("none"),
    fallback: 2,
};

static COLUMNS: Grammar = Grammar {
    slots: &[column_width, column_count],
    repeatable: None,
    ambiguous: Some("auto"),
    fallback: 0,
};

fn grammar(shorthand: ShorthandId) -> Option<&'static Grammar> {
    Some(match shorthand {
        ShorthandId::Border |
        ShorthandId::BorderTop |
        ShorthandId::BorderRight |
        ShorthandId::BorderBottom |
        ShorthandId::BorderLeft => &BORDER_SIDE,
        ShorthandId::Outline => &OUTLINE,
        ShorthandId::ColumnRule => &COLUMN_RULE,
        ShorthandId::TextDecoration => &TEXT_DECORATION,
        ShorthandId::FlexFlow => &FLEX_FLOW,
        ShorthandId::ListStyle => &LIST_STYLE,
        ShorthandId::Columns => &COLUMNS,
        _ => return None,
    })
}

/// The longhands whose initial values fill the slots of `grammar`. For
/// `border` these are the ones of `border-top`, as all sides are equal.
fn slot_names(shorthand: ShorthandId) -> &'static [&'static str] {
    match shorthand {
        ShorthandId::Border => ShorthandId::BorderTop.longhands(),
        _ => shorthand.longhands(),
    }
}

fn parse_slots(
    shorthand: ShorthandId,
    grammar: &Grammar,
    context: &ParserContext,
    components: &[Value],
) -> Result<Longhands, ExpansionError> {
    let invalid = |reason| ExpansionError::invalid(shorthand, reason);
    let mut slots: SmallVec<[Vec<Value>; 4]> = grammar.slots.iter().map(|_| vec![]).collect();
    let mut deferred = 0;
    let mut previous = None;

    for component in components {
        if grammar.ambiguous.is_some_and(|keyword| component.is_keyword(keyword)) {
            deferred += 1;
            previous = None;
            continue;
        }
        let extends_previous = |slot: usize| {
            grammar.repeatable == Some(slot) &&
                previous == Some(slot) &&
                !component.is_keyword("none") &&
                !slots[slot].iter().any(|v: &Value| v.is_keyword("none") || v == component)
        };
        let slot = (0..slots.len())
            .find(|&slot| {
                (slots[slot].is_empty() || extends_previous(slot)) &&
                    (grammar.slots[slot])(component, context)
            })
            .ok_or_else(|| invalid("unexpected component"))?;
        slots[slot].push(component.clone());
        previous = Some(slot);
    }

    if let Some(keyword) = grammar.ambiguous {
        let keyword_value = Value::ident(keyword);
        let empty: SmallVec<[usize; 4]> = (0..slots.len())
            .filter(|&slot| slots[slot].is_empty() && (grammar.slots[slot])(&keyword_value, context))
            .collect();
        if deferred > empty.len() {
            return Err(invalid("too many ambiguous keywords"));
        }
        // A single `none` in `list-style` sets both the image and the type.
        let fill = if shorthand == ShorthandId::ListStyle && deferred == 1 {
            empty.len()
        } else {
            deferred
        };
        for &slot in empty.iter().take(fill) {
            slots[slot].push(keyword_value.clone());
        }
    }

    slots
        .into_iter()
        .zip(slot_names(shorthand))
        .map(|(values, name)| {
            if values.is_empty() {
                initial_value(name)
                    .cloned()
                    .ok_or(invalid("missing initial value"))
            } else {
                Ok(Value::list(values))
            }
        })
        .collect()
}

/// Expands an any-order shorthand.
pub fn parse_value(
    shorthand: ShorthandId,
    context: &ParserContext,
    value: &Value,
) -> Result<Longhands, ExpansionError> {
    let grammar =
        grammar(shorthand).ok_or(ExpansionError::invalid(shorthand, "not a generic shorthand"))?;
    if let Value::Layers(..) = *value {
        return Err(ExpansionError::invalid(shorthand, "unexpected comma"));
    }
    let side = parse_slots(shorthand, grammar, context, value.components())?;
    if shorthand != ShorthandId::Border {
        return Ok(side);
    }
    // `border` sets the width, style and color of all four sides.
    Ok(side
        .iter()
        .flat_map(|value| std::iter::repeat_n(value.clone(), 4))
        .collect())
}

/// Joins longhand values back into an any-order shorthand value.
pub fn to_shorthand_value(shorthand: ShorthandId, longhands: &[&Value]) -> Option<Value> {
    let grammar = grammar(shorthand)?;
    let side: SmallVec<[&Value; 4]> = if shorthand == ShorthandId::Border {
        let sides = longhands.chunks(4).map(|values| {
            let first = values[0];
            values.iter().all(|value| *value == first).then_some(first)
        });
        sides.collect::<Option<_>>()?
    } else {
        longhands.iter().copied().collect()
    };

    let names = slot_names(shorthand);
    let mut components = vec![];
    for (slot, value) in side.iter().enumerate() {
        if initial_value(names[slot]) != Some(*value) {
            components.extend(value.components().iter().cloned());
        }
    }
    if components.is_empty() {
        components.extend(side[grammar.fallback].components().iter().cloned());
    }
    Some(Value::list(components))
}
