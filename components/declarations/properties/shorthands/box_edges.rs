/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Shorthands mapping one to four values onto the sides of a box (`margin`,
//! `padding`, `border-width`, `border-radius`...), and the logical ones
//! mapping one or two values onto the start and end of an axis.

use super::{ExpansionError, Longhands, ShorthandId};
use crate::parser::ParserContext;
use crate::values::Value;
use crate::values::specified::{
    is_color, is_length_percentage, is_line_style, is_line_width, is_non_negative,
};

/// Expands one to four values to top, right, bottom and left, following
/// the usual CSS rule.
pub fn expand_sides<T: Clone>(values: &[T]) -> Option<[T; 4]> {
    Some(match *values {
        [ref all] => [all.clone(), all.clone(), all.clone(), all.clone()],
        [ref vertical, ref horizontal] => [
            vertical.clone(),
            horizontal.clone(),
            vertical.clone(),
            horizontal.clone(),
        ],
        [ref top, ref horizontal, ref bottom] => [
            top.clone(),
            horizontal.clone(),
            bottom.clone(),
            horizontal.clone(),
        ],
        [ref top, ref right, ref bottom, ref left] => {
            [top.clone(), right.clone(), bottom.clone(), left.clone()]
        },
        _ => return None,
    })
}

/// The shortest list of values that expands to the given sides.
///
/// Lists of one to four values are accepted; anything else is returned as
/// it is.
pub fn minimize_sides<T: Clone + PartialEq>(values: Vec<T>) -> Vec<T> {
    let Some([top, right, bottom, left]) = expand_sides(&values) else {
        return values;
    };
    if left != right {
        vec![top, right, bottom, left]
    } else if bottom != top {
        vec![top, right, bottom]
    } else if right != top {
        vec![top, right]
    } else {
        vec![top]
    }
}

fn accepts(shorthand: ShorthandId, value: &Value, context: &ParserContext) -> bool {
    match shorthand {
        ShorthandId::Margin |
        ShorthandId::MarginBlock |
        ShorthandId::MarginInline |
        ShorthandId::Inset |
        ShorthandId::InsetBlock |
        ShorthandId::InsetInline => {
            value.is_keyword("auto") || is_length_percentage(value, context)
        },
        ShorthandId::Padding |
        ShorthandId::PaddingBlock |
        ShorthandId::PaddingInline |
        ShorthandId::BorderRadius => is_length_percentage(value, context) && is_non_negative(value),
        ShorthandId::BorderWidth => is_line_width(value, context),
        ShorthandId::BorderStyle => is_line_style(value),
        ShorthandId::BorderColor => is_color(value),
        _ => false,
    }
}

fn parse_sides(
    shorthand: ShorthandId,
    context: &ParserContext,
    components: &[Value],
) -> Result<[Value; 4], ExpansionError> {
    if !components.iter().all(|c| accepts(shorthand, c, context)) {
        return Err(ExpansionError::invalid(shorthand, "unexpected component"));
    }
    expand_sides(components).ok_or(ExpansionError::invalid(shorthand, "expected one to four values"))
}

fn parse_border_radius(
    context: &ParserContext,
    components: &[Value],
) -> Result<Longhands, ExpansionError> {
    let shorthand = ShorthandId::BorderRadius;
    let mut parts = components.split(|c| c.is_slash());
    let horizontal = parse_sides(shorthand, context, parts.next().unwrap_or(&[]))?;
    let vertical = match parts.next() {
        Some(vertical) => parse_sides(shorthand, context, vertical)?,
        None => horizontal.clone(),
    };
    if parts.next().is_some() {
        return Err(ExpansionError::invalid(shorthand, "more than one `/`"));
    }
    Ok(horizontal
        .into_iter()
        .zip(vertical)
        .map(|(h, v)| if h == v { h } else { Value::List(vec![h, v]) })
        .collect())
}

/// Expands a box-edge shorthand.
pub fn parse_value(
    shorthand: ShorthandId,
    context: &ParserContext,
    value: &Value,
) -> Result<Longhands, ExpansionError> {
    if let Value::Layers(..) = *value {
        return Err(ExpansionError::invalid(shorthand, "unexpected comma"));
    }
    let components = value.components();
    if shorthand == ShorthandId::BorderRadius {
        return parse_border_radius(context, components);
    }
    if shorthand.longhands().len() == 2 {
        if !components.iter().all(|c| accepts(shorthand, c, context)) {
            return Err(ExpansionError::invalid(shorthand, "unexpected component"));
        }
        return match *components {
            [ref both] => Ok(Longhands::from_vec(vec![both.clone(), both.clone()])),
            [ref start, ref end] => Ok(Longhands::from_vec(vec![start.clone(), end.clone()])),
            _ => Err(ExpansionError::invalid(shorthand, "expected one or two values")),
        };
    }
    Ok(Longhands::from_iter(parse_sides(shorthand, context, components)?))
}

fn split_radius(corner: &Value) -> Option<(Value, Value)> {
    match *corner.components() {
        [ref both] => Some((both.clone(), both.clone())),
        [ref horizontal, ref vertical] => Some((horizontal.clone(), vertical.clone())),
        _ => None,
    }
}

/// Joins the sides back into a box-edge shorthand value.
pub fn to_shorthand_value(shorthand: ShorthandId, longhands: &[&Value]) -> Option<Value> {
    if shorthand == ShorthandId::BorderRadius {
        let (horizontal, vertical): (Vec<_>, Vec<_>) = longhands
            .iter()
            .map(|corner| split_radius(corner))
            .collect::<Option<Vec<_>>>()?
            .into_iter()
            .unzip();
        let mut components = minimize_sides(horizontal.clone());
        if horizontal != vertical {
            components.push(Value::Delim('/'));
            components.extend(minimize_sides(vertical));
        }
        return Some(Value::list(components));
    }

    if !longhands.iter().all(|value| value.is_component()) {
        return None;
    }
    let values: Vec<Value> = longhands.iter().map(|value| (*value).clone()).collect();
    if values.len() == 2 {
        return Some(if values[0] == values[1] {
            values[0].clone()
        } else {
            Value::List(values)
        });
    }
    Some(Value::list(minimize_sides(values)))
}
