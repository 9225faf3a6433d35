/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Shorthands with a fixed internal structure: `font`, `border-image` and
//! `flex`.

use super::box_edges::minimize_sides;
use super::{ExpansionError, Longhands, ShorthandId};
use crate::parser::ParserContext;
use crate::properties::longhands::initial_value;
use crate::values::Value;
use crate::values::specified::{
    BORDER_IMAGE_REPEAT, FONT_SIZE, FONT_STRETCH, FONT_STYLE, FONT_VARIANT_CSS2, FONT_WEIGHT,
    SYSTEM_FONTS, is_angle, is_custom_ident, is_image, is_length, is_length_percentage,
    is_non_negative, is_number,
};

fn is_initial(name: &str, value: &Value) -> bool {
    initial_value(name).is_some_and(|initial| initial == value)
}

fn is_font_weight(value: &Value) -> bool {
    value.is_one_of(FONT_WEIGHT) ||
        value
            .as_number()
            .is_some_and(|weight| (1. ..=1000.).contains(&weight))
}

fn is_font_size(value: &Value, context: &ParserContext) -> bool {
    value.is_one_of(FONT_SIZE) || (is_length_percentage(value, context) && is_non_negative(value))
}

fn is_line_height(value: &Value, context: &ParserContext) -> bool {
    value.is_keyword("normal") ||
        ((is_number(value) || is_length_percentage(value, context)) && is_non_negative(value))
}

/// A family name: a quoted string, or a sequence of identifiers.
fn is_family_name(components: &[Value]) -> bool {
    match *components {
        [Value::String(..)] => true,
        [] => false,
        _ => components
            .iter()
            .all(|c| is_custom_ident(c, &["initial", "inherit", "unset", "revert"])),
    }
}

fn parse_font(context: &ParserContext, value: &Value) -> Result<Longhands, ExpansionError> {
    const STYLE: usize = 0;
    const VARIANT_CAPS: usize = 1;
    const WEIGHT: usize = 2;
    const STRETCH: usize = 3;
    let invalid = |reason| ExpansionError::invalid(ShorthandId::Font, reason);

    let layers = value.as_layers();
    let components = layers[0].components();
    if let [ref single] = *components {
        if single.is_one_of(SYSTEM_FONTS) {
            return Err(invalid("system fonts are not expanded"));
        }
    }

    let mut prefix: [Option<Value>; 4] = Default::default();
    let mut normals = 0;
    let mut i = 0;
    loop {
        let Some(component) = components.get(i) else {
            return Err(invalid("missing font size"));
        };
        if prefix.iter().flatten().count() + normals >= 4 {
            break;
        }
        let slot = if component.is_keyword("normal") {
            normals += 1;
            i += 1;
            continue;
        } else if component.is_one_of(FONT_STYLE) {
            STYLE
        } else if component.is_one_of(FONT_VARIANT_CSS2) {
            VARIANT_CAPS
        } else if is_font_weight(component) {
            WEIGHT
        } else if component.is_one_of(FONT_STRETCH) {
            STRETCH
        } else {
            break;
        };
        if prefix[slot].is_some() {
            return Err(invalid("duplicate font property"));
        }
        // `oblique` may carry an angle.
        let angle = components
            .get(i + 1)
            .filter(|next| component.is_keyword("oblique") && is_angle(next) && !is_number(next));
        prefix[slot] = Some(match angle {
            Some(angle) => {
                i += 1;
                Value::List(vec![component.clone(), angle.clone()])
            },
            None => component.clone(),
        });
        i += 1;
    }

    let size = components
        .get(i)
        .filter(|c| is_font_size(c, context))
        .ok_or_else(|| invalid("missing font size"))?
        .clone();
    i += 1;
    let mut line_height = None;
    if components.get(i).is_some_and(|c| c.is_slash()) {
        line_height = Some(
            components
                .get(i + 1)
                .filter(|c| is_line_height(c, context))
                .ok_or_else(|| invalid("invalid line height"))?
                .clone(),
        );
        i += 2;
    }

    let first_family = &components[i..];
    let families = std::iter::once(first_family)
        .chain(layers[1..].iter().map(|layer| layer.components()))
        .map(|family| {
            if is_family_name(family) {
                Ok(Value::list(family.to_vec()))
            } else {
                Err(invalid("invalid font family"))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut values: Longhands = prefix
        .into_iter()
        .map(|value| value.unwrap_or_else(|| Value::ident("normal")))
        .collect();
    values.push(size);
    values.push(line_height.unwrap_or_else(|| Value::ident("normal")));
    values.push(Value::layers(families));
    Ok(values)
}

fn font_to_shorthand_value(longhands: &[&Value]) -> Option<Value> {
    let [style, variant_caps, weight, stretch, size, line_height, family] = *longhands else {
        return None;
    };
    if !variant_caps.is_one_of(FONT_VARIANT_CSS2) || !stretch.is_one_of(FONT_STRETCH) {
        return None;
    }
    let mut components = vec![];
    for value in [style, variant_caps, weight, stretch] {
        if !value.is_keyword("normal") {
            components.extend(value.components().iter().cloned());
        }
    }
    components.push(size.clone());
    if !line_height.is_keyword("normal") {
        components.push(Value::Delim('/'));
        components.push(line_height.clone());
    }
    let (first, rest) = family.as_layers().split_first()?;
    components.extend(first.components().iter().cloned());

    let mut layers = vec![Value::list(components)];
    layers.extend(rest.iter().cloned());
    Some(Value::layers(layers))
}

fn is_slice_number(value: &Value) -> bool {
    matches!(*value, Value::Number(..) | Value::Percentage(..)) && is_non_negative(value)
}

fn is_image_width(value: &Value, context: &ParserContext) -> bool {
    value.is_keyword("auto") ||
        ((is_number(value) || is_length_percentage(value, context)) && is_non_negative(value))
}

fn is_image_outset(value: &Value, context: &ParserContext) -> bool {
    (is_number(value) || is_length(value, context)) && is_non_negative(value)
}

/// The shortest spelling of a `border-image-slice` value, with `fill` last.
pub fn normalize_slice(value: &Value) -> Option<Value> {
    let components = value.components();
    let fill = components.iter().filter(|c| c.is_keyword("fill")).count();
    let numbers: Vec<Value> = components
        .iter()
        .filter(|c| !c.is_keyword("fill"))
        .cloned()
        .collect();
    if fill > 1 || numbers.is_empty() || numbers.len() > 4 || !numbers.iter().all(is_slice_number) {
        return None;
    }
    let mut normalized = minimize_sides(numbers);
    if fill == 1 {
        normalized.push(Value::ident("fill"));
    }
    Some(Value::list(normalized))
}

/// The shortest spelling of a `border-image-repeat` value.
pub fn normalize_image_repeat(value: &Value) -> Option<Value> {
    match *value.components() {
        [ref single] if single.is_one_of(BORDER_IMAGE_REPEAT) => Some(single.clone()),
        [ref x, ref y] if x.is_one_of(BORDER_IMAGE_REPEAT) && y.is_one_of(BORDER_IMAGE_REPEAT) => {
            Some(if x == y { x.clone() } else { value.clone() })
        },
        _ => None,
    }
}

/// Takes up to four components accepted by `accepts`, starting at `start`.
fn take_sides(components: &[Value], start: usize, accepts: impl Fn(&Value) -> bool) -> &[Value] {
    let rest = components.get(start..).unwrap_or(&[]);
    let count = rest.iter().take(4).take_while(|c| accepts(*c)).count();
    &rest[..count]
}

fn parse_border_image(context: &ParserContext, value: &Value) -> Result<Longhands, ExpansionError> {
    let invalid = |reason| ExpansionError::invalid(ShorthandId::BorderImage, reason);
    if let Value::Layers(..) = *value {
        return Err(invalid("unexpected comma"));
    }
    let components = value.components();

    let mut source = None;
    let mut slice = None;
    let mut width = None;
    let mut outset = None;
    let mut repeat = None;
    let mut i = 0;
    while i < components.len() {
        let component = &components[i];
        if source.is_none() && (is_image(component) || component.is_keyword("none")) {
            source = Some(component.clone());
            i += 1;
            continue;
        }
        if repeat.is_none() && component.is_one_of(BORDER_IMAGE_REPEAT) {
            let count = if components
                .get(i + 1)
                .is_some_and(|next| next.is_one_of(BORDER_IMAGE_REPEAT))
            {
                2
            } else {
                1
            };
            repeat = normalize_image_repeat(&Value::list(components[i..i + count].to_vec()));
            i += count;
            continue;
        }
        if slice.is_none() && (is_slice_number(component) || component.is_keyword("fill")) {
            let start = i;
            if component.is_keyword("fill") {
                i += 1;
            }
            i += take_sides(components, i, is_slice_number).len();
            if components.get(i).is_some_and(|c| c.is_keyword("fill")) &&
                !components[start].is_keyword("fill")
            {
                i += 1;
            }
            slice = Some(
                normalize_slice(&Value::list(components[start..i].to_vec()))
                    .ok_or_else(|| invalid("invalid slice"))?,
            );

            if components.get(i).is_some_and(|c| c.is_slash()) {
                i += 1;
                let widths = take_sides(components, i, |c| is_image_width(c, context));
                if !widths.is_empty() {
                    width = Some(Value::list(minimize_sides(widths.to_vec())));
                    i += widths.len();
                }
                if components.get(i).is_some_and(|c| c.is_slash()) {
                    i += 1;
                    let outsets = take_sides(components, i, |c| is_image_outset(c, context));
                    if outsets.is_empty() {
                        return Err(invalid("expected an outset after `/`"));
                    }
                    outset = Some(Value::list(minimize_sides(outsets.to_vec())));
                    i += outsets.len();
                } else if width.is_none() {
                    return Err(invalid("expected a width after `/`"));
                }
            }
            continue;
        }
        return Err(invalid("unexpected component"));
    }

    let defaults = ShorthandId::BorderImage.longhands();
    [source, slice, width, outset, repeat]
        .into_iter()
        .zip(defaults)
        .map(|(value, name)| {
            value
                .or_else(|| initial_value(name).cloned())
                .ok_or(invalid("missing initial value"))
        })
        .collect()
}

fn border_image_to_shorthand_value(longhands: &[&Value]) -> Option<Value> {
    let names = ShorthandId::BorderImage.longhands();
    let [source, slice, width, outset, repeat] = *longhands else {
        return None;
    };
    let mut components = vec![];
    if !is_initial(names[0], source) {
        components.push(source.clone());
    }
    let show_outset = !is_initial(names[3], outset);
    let show_width = show_outset || !is_initial(names[2], width);
    if show_width || !is_initial(names[1], slice) {
        components.extend(slice.components().iter().cloned());
    }
    if show_width {
        components.push(Value::Delim('/'));
        components.extend(width.components().iter().cloned());
    }
    if show_outset {
        components.push(Value::Delim('/'));
        components.extend(outset.components().iter().cloned());
    }
    if !is_initial(names[4], repeat) {
        components.extend(repeat.components().iter().cloned());
    }
    if components.is_empty() {
        components.push(Value::ident("none"));
    }
    Some(Value::list(components))
}

fn is_flex_basis(value: &Value, context: &ParserContext) -> bool {
    value.is_one_of(&["auto", "content"]) ||
        (is_length_percentage(value, context) && is_non_negative(value))
}

fn is_flex_factor(value: &Value) -> bool {
    is_number(value) && is_non_negative(value)
}

fn parse_flex(context: &ParserContext, value: &Value) -> Result<Longhands, ExpansionError> {
    let invalid = |reason| ExpansionError::invalid(ShorthandId::Flex, reason);
    if let Value::Layers(..) = *value {
        return Err(invalid("unexpected comma"));
    }
    let components = value.components();
    if let [ref single] = *components {
        if single.is_keyword("none") {
            return Ok(Longhands::from_vec(vec![
                Value::Number(0.),
                Value::Number(0.),
                Value::ident("auto"),
            ]));
        }
        if single.is_keyword("auto") {
            return Ok(Longhands::from_vec(vec![
                Value::Number(1.),
                Value::Number(1.),
                Value::ident("auto"),
            ]));
        }
    }

    let mut grow = None;
    let mut shrink = None;
    let mut basis = None;
    let mut i = 0;
    while i < components.len() {
        let component = &components[i];
        if grow.is_none() && is_flex_factor(component) {
            grow = Some(component.clone());
            if let Some(next) = components.get(i + 1).filter(|next| is_flex_factor(next)) {
                shrink = Some(next.clone());
                i += 1;
            }
        } else if basis.is_none() && is_flex_basis(component, context) {
            basis = Some(component.clone());
        } else {
            return Err(invalid("unexpected component"));
        }
        i += 1;
    }

    // An omitted flex-basis is zero once a factor is given.
    let basis = match (basis, &grow) {
        (Some(basis), _) => basis,
        (None, Some(..)) => Value::Number(0.),
        (None, None) => return Err(invalid("empty flex value")),
    };
    Ok(Longhands::from_vec(vec![
        grow.unwrap_or(Value::Number(1.)),
        shrink.unwrap_or(Value::Number(1.)),
        basis,
    ]))
}

fn flex_to_shorthand_value(longhands: &[&Value]) -> Option<Value> {
    let [grow, shrink, basis] = *longhands else {
        return None;
    };
    let (grow_factor, shrink_factor) = (grow.as_number()?, shrink.as_number()?);
    let zero_basis = basis.as_number() == Some(0.);
    let auto_basis = basis.is_keyword("auto");
    Some(if grow_factor == 0. && shrink_factor == 0. && auto_basis {
        Value::ident("none")
    } else if grow_factor == 1. && shrink_factor == 1. && auto_basis {
        Value::ident("auto")
    } else if shrink_factor == 1. && zero_basis {
        grow.clone()
    } else if grow_factor == 1. && shrink_factor == 1. {
        basis.clone()
    } else if shrink_factor == 1. {
        Value::List(vec![grow.clone(), basis.clone()])
    } else if zero_basis {
        Value::List(vec![grow.clone(), shrink.clone()])
    } else {
        Value::List(vec![grow.clone(), shrink.clone(), basis.clone()])
    })
}

/// Expands a composite shorthand.
pub fn parse_value(
    shorthand: ShorthandId,
    context: &ParserContext,
    value: &Value,
) -> Result<Longhands, ExpansionError> {
    match shorthand {
        ShorthandId::Font => parse_font(context, value),
        ShorthandId::BorderImage => parse_border_image(context, value),
        ShorthandId::Flex => parse_flex(context, value),
        _ => Err(ExpansionError::invalid(shorthand, "not a composite shorthand")),
    }
}

/// Joins longhand values back into a composite shorthand value.
pub fn to_shorthand_value(shorthand: ShorthandId, longhands: &[&Value]) -> Option<Value> {
    match shorthand {
        ShorthandId::Font => font_to_shorthand_value(longhands),
        ShorthandId::BorderImage => border_image_to_shorthand_value(longhands),
        ShorthandId::Flex => flex_to_shorthand_value(longhands),
        _ => None,
    }
}
