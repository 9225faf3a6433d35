/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! `<position>` values, as used by `background-position` and
//! `mask-position`.
//!
//! Positions are stored with an explicit horizontal and vertical component,
//! so `top` becomes `center top` and `10px` becomes `10px center`.

use super::Value;
use super::specified::is_length_percentage;
use crate::parser::ParserContext;

fn is_horizontal_keyword(value: &Value) -> bool {
    value.is_one_of(&["left", "right"])
}

fn is_vertical_keyword(value: &Value) -> bool {
    value.is_one_of(&["top", "bottom"])
}

/// Whether `value` may appear inside a `<position>`.
pub fn is_position_component(value: &Value, context: &ParserContext) -> bool {
    value.is_one_of(&["left", "right", "top", "bottom", "center"]) ||
        is_length_percentage(value, context)
}

fn fits_horizontal(value: &Value, context: &ParserContext) -> bool {
    value.is_one_of(&["left", "right", "center"]) || is_length_percentage(value, context)
}

fn fits_vertical(value: &Value, context: &ParserContext) -> bool {
    value.is_one_of(&["top", "bottom", "center"]) || is_length_percentage(value, context)
}

/// Validates a three or four value position, where each edge keyword may be
/// followed by an offset.
fn is_valid_edge_offset_position(components: &[Value], context: &ParserContext) -> bool {
    let mut sides = vec![];
    let mut i = 0;
    while i < components.len() {
        let keyword = &components[i];
        if !keyword.is_one_of(&["left", "right", "top", "bottom", "center"]) {
            return false;
        }
        let has_offset = components
            .get(i + 1)
            .is_some_and(|next| is_length_percentage(next, context));
        if has_offset && keyword.is_keyword("center") {
            return false;
        }
        sides.push(keyword);
        i += if has_offset { 2 } else { 1 };
    }
    if sides.len() != 2 {
        return false;
    }
    let horizontal = sides.iter().filter(|side| is_horizontal_keyword(side)).count();
    let vertical = sides.iter().filter(|side| is_vertical_keyword(side)).count();
    horizontal <= 1 && vertical <= 1
}

/// Parses the components of a single `<position>`, returning its normalized
/// form, or `None` if they do not form a valid position.
pub fn parse_position(components: &[Value], context: &ParserContext) -> Option<Value> {
    if !components.iter().all(|c| is_position_component(c, context)) {
        return None;
    }
    match components.len() {
        1 => {
            let value = components[0].clone();
            Some(if is_vertical_keyword(&value) {
                Value::List(vec![Value::ident("center"), value])
            } else {
                Value::List(vec![value, Value::ident("center")])
            })
        },
        2 => {
            let (first, second) = (&components[0], &components[1]);
            let swap = is_vertical_keyword(first) || is_horizontal_keyword(second);
            let (horizontal, vertical) = if swap { (second, first) } else { (first, second) };
            if !fits_horizontal(horizontal, context) || !fits_vertical(vertical, context) {
                return None;
            }
            // `top 10px` and `10px left` are not valid.
            if swap &&
                (is_length_percentage(first, context) || is_length_percentage(second, context))
            {
                return None;
            }
            Some(Value::List(vec![horizontal.clone(), vertical.clone()]))
        },
        3 | 4 if is_valid_edge_offset_position(components, context) => {
            Some(Value::List(components.to_vec()))
        },
        _ => None,
    }
}

/// Parses a layered position value, normalizing every layer.
pub fn normalize_position_layers(value: &Value, context: &ParserContext) -> Option<Value> {
    let layers = value
        .as_layers()
        .iter()
        .map(|layer| parse_position(layer.components(), context))
        .collect::<Option<Vec<_>>>()?;
    Some(Value::layers(layers))
}

/// The shortest spelling of a normalized position.
pub fn minimize_position(position: &Value) -> Value {
    match position.components() {
        [horizontal, vertical] => {
            if vertical.is_keyword("center") {
                horizontal.clone()
            } else if horizontal.is_keyword("center") && is_vertical_keyword(vertical) {
                vertical.clone()
            } else {
                position.clone()
            }
        },
        _ => position.clone(),
    }
}

/// Whether the position sits at its initial `0% 0%`.
pub fn is_initial_position(position: &Value) -> bool {
    matches!(
        position.components(),
        [Value::Percentage(x), Value::Percentage(y)] if *x == 0. && *y == 0.
    )
}
