/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Layered shorthands: `background`, `mask`, `transition` and `animation`.
//!
//! The value is split into comma separated layers. Within a layer each
//! component is classified by type and given to the matching longhand; a
//! longhand not mentioned in a layer takes its initial value for that layer.

use smallvec::SmallVec;

use super::{ExpansionError, Longhands, ShorthandId};
use crate::parser::ParserContext;
use crate::properties::longhands::{initial_value, longhand_info};
use crate::values::Value;
use crate::values::position::{
    is_initial_position, is_position_component, minimize_position, parse_position,
};
use crate::values::specified::{
    ANIMATION_DIRECTION, ANIMATION_FILL_MODE, ANIMATION_PLAY_STATE, ATTACHMENT, EASING_KEYWORDS,
    GEOMETRY_BOX, MASK_COMPOSITE, MASK_MODE, REPEAT_STYLE, VISUAL_BOX, is_color,
    is_custom_ident, is_easing_function, is_image, is_length_percentage, is_non_negative,
    is_number, is_time,
};

type Layer = SmallVec<[Option<Value>; 8]>;

/// The shortest spelling of one layer of `background-size`.
pub fn minimize_size(layer: &Value) -> Value {
    match *layer.components() {
        [ref width, ref height] if height.is_keyword("auto") => width.clone(),
        _ => layer.clone(),
    }
}

/// The shortest spelling of one layer of `background-repeat`, or `None` if
/// it is not a valid `<repeat-style>`.
pub fn minimize_repeat(layer: &Value) -> Option<Value> {
    const AXIS: &[&str] = &["repeat", "space", "round", "no-repeat"];
    match *layer.components() {
        [ref single] if single.is_one_of(REPEAT_STYLE) => Some(single.clone()),
        [ref x, ref y] if x.is_one_of(AXIS) && y.is_one_of(AXIS) => Some(if x == y {
            x.clone()
        } else if x.is_keyword("repeat") && y.is_keyword("no-repeat") {
            Value::ident("repeat-x")
        } else if x.is_keyword("no-repeat") && y.is_keyword("repeat") {
            Value::ident("repeat-y")
        } else {
            layer.clone()
        }),
        _ => None,
    }
}

fn is_size_component(value: &Value, context: &ParserContext) -> bool {
    value.is_keyword("auto") || (is_length_percentage(value, context) && is_non_negative(value))
}

/// Slots of `background` and `mask` layers.
mod slot {
    pub const IMAGE: usize = 0;
    pub const POSITION: usize = 1;
    pub const SIZE: usize = 2;
    pub const REPEAT: usize = 3;
    // `background` only.
    pub const ATTACHMENT: usize = 4;
    pub const BACKGROUND_ORIGIN: usize = 5;
    pub const BACKGROUND_CLIP: usize = 6;
    pub const COLOR: usize = 7;
    // `mask` only.
    pub const MASK_ORIGIN: usize = 4;
    pub const MASK_CLIP: usize = 5;
    pub const COMPOSITE: usize = 6;
    pub const MODE: usize = 7;
}

fn parse_image_layer(
    shorthand: ShorthandId,
    context: &ParserContext,
    components: &[Value],
    is_final: bool,
) -> Result<Layer, ExpansionError> {
    let is_mask = shorthand == ShorthandId::Mask;
    let invalid = |reason| ExpansionError::invalid(shorthand, reason);
    let (origin_slot, clip_slot) = if is_mask {
        (slot::MASK_ORIGIN, slot::MASK_CLIP)
    } else {
        (slot::BACKGROUND_ORIGIN, slot::BACKGROUND_CLIP)
    };
    let boxes = if is_mask { GEOMETRY_BOX } else { VISUAL_BOX };

    let mut layer: Layer = smallvec::smallvec![None; 8];
    let mut i = 0;
    while i < components.len() {
        let component = &components[i];
        if layer[slot::IMAGE].is_none() && (is_image(component) || component.is_keyword("none")) {
            layer[slot::IMAGE] = Some(component.clone());
            i += 1;
            continue;
        }
        if layer[slot::POSITION].is_none() && is_position_component(component, context) {
            let run = components[i..]
                .iter()
                .take(4)
                .take_while(|c| is_position_component(c, context))
                .count();
            let (length, position) = (1..=run)
                .rev()
                .find_map(|n| parse_position(&components[i..i + n], context).map(|p| (n, p)))
                .ok_or_else(|| invalid("invalid position"))?;
            layer[slot::POSITION] = Some(position);
            i += length;
            if components.get(i).is_some_and(|c| c.is_slash()) {
                i += 1;
                let size = match components.get(i) {
                    Some(c) if c.is_one_of(&["cover", "contain"]) => vec![c.clone()],
                    _ => components[i..]
                        .iter()
                        .take(2)
                        .take_while(|c| is_size_component(c, context))
                        .cloned()
                        .collect(),
                };
                if size.is_empty() {
                    return Err(invalid("expected a size after `/`"));
                }
                i += size.len();
                layer[slot::SIZE] = Some(minimize_size(&Value::list(size)));
            }
            continue;
        }
        if layer[slot::REPEAT].is_none() && component.is_one_of(REPEAT_STYLE) {
            let pair = components
                .get(i + 1)
                .filter(|_| !component.is_one_of(&["repeat-x", "repeat-y"]))
                .and_then(|next| {
                    minimize_repeat(&Value::List(vec![component.clone(), next.clone()]))
                });
            match pair {
                Some(repeat) => {
                    layer[slot::REPEAT] = Some(repeat);
                    i += 2;
                },
                None => {
                    layer[slot::REPEAT] = Some(component.clone());
                    i += 1;
                },
            }
            continue;
        }
        if !is_mask && layer[slot::ATTACHMENT].is_none() && component.is_one_of(ATTACHMENT) {
            layer[slot::ATTACHMENT] = Some(component.clone());
            i += 1;
            continue;
        }
        if component.is_one_of(boxes) {
            if layer[origin_slot].is_none() {
                layer[origin_slot] = Some(component.clone());
            } else if layer[clip_slot].is_none() {
                layer[clip_slot] = Some(component.clone());
            } else {
                return Err(invalid("more than two boxes in a layer"));
            }
            i += 1;
            continue;
        }
        if layer[clip_slot].is_none() &&
            ((!is_mask && component.is_keyword("text")) || (is_mask && component.is_keyword("no-clip")))
        {
            layer[clip_slot] = Some(component.clone());
            i += 1;
            continue;
        }
        if is_mask {
            if layer[slot::COMPOSITE].is_none() && component.is_one_of(MASK_COMPOSITE) {
                layer[slot::COMPOSITE] = Some(component.clone());
                i += 1;
                continue;
            }
            if layer[slot::MODE].is_none() && component.is_one_of(MASK_MODE) {
                layer[slot::MODE] = Some(component.clone());
                i += 1;
                continue;
            }
        } else if layer[slot::COLOR].is_none() && is_color(component) {
            if !is_final {
                return Err(invalid("a color is only allowed in the final layer"));
            }
            layer[slot::COLOR] = Some(component.clone());
            i += 1;
            continue;
        }
        return Err(invalid("unexpected component"));
    }

    // A single box sets both the origin and the clip.
    if layer[clip_slot].is_none() {
        if let Some(origin) = layer[origin_slot].clone() {
            layer[clip_slot] = Some(origin);
        }
    }
    Ok(layer)
}

fn parse_transition_layer(components: &[Value], single_layer: bool) -> Result<Layer, ExpansionError> {
    const PROPERTY: usize = 0;
    const DURATION: usize = 1;
    const TIMING: usize = 2;
    const DELAY: usize = 3;
    let invalid = |reason| ExpansionError::invalid(ShorthandId::Transition, reason);

    let mut layer: Layer = smallvec::smallvec![None; 4];
    for component in components {
        if is_time(component) {
            let slot = if layer[DURATION].is_none() {
                if !is_non_negative(component) {
                    return Err(invalid("negative duration"));
                }
                DURATION
            } else if layer[DELAY].is_none() {
                DELAY
            } else {
                return Err(invalid("more than two times in a layer"));
            };
            layer[slot] = Some(component.clone());
        } else if layer[TIMING].is_none() && is_easing_function(component) {
            layer[TIMING] = Some(component.clone());
        } else if layer[PROPERTY].is_none() && is_custom_ident(component, &["initial"]) {
            if component.is_keyword("none") && !single_layer {
                return Err(invalid("`none` is only allowed in a single layer"));
            }
            layer[PROPERTY] = Some(component.clone());
        } else {
            return Err(invalid("unexpected component"));
        }
    }
    Ok(layer)
}

fn parse_animation_layer(components: &[Value]) -> Result<Layer, ExpansionError> {
    const NAME: usize = 0;
    const DURATION: usize = 1;
    const TIMING: usize = 2;
    const DELAY: usize = 3;
    const ITERATION_COUNT: usize = 4;
    const DIRECTION: usize = 5;
    const FILL_MODE: usize = 6;
    const PLAY_STATE: usize = 7;
    let invalid = |reason| ExpansionError::invalid(ShorthandId::Animation, reason);

    let mut layer: Layer = smallvec::smallvec![None; 8];
    for component in components {
        let slot = if is_time(component) {
            if layer[DURATION].is_none() {
                if !is_non_negative(component) {
                    return Err(invalid("negative duration"));
                }
                DURATION
            } else {
                DELAY
            }
        } else if is_easing_function(component) {
            TIMING
        } else if component.is_keyword("infinite") ||
            (is_number(component) && is_non_negative(component))
        {
            ITERATION_COUNT
        } else if component.is_one_of(ANIMATION_DIRECTION) && layer[DIRECTION].is_none() {
            DIRECTION
        } else if component.is_keyword("none") && layer[NAME].is_none() {
            NAME
        } else if component.is_one_of(ANIMATION_FILL_MODE) {
            FILL_MODE
        } else if component.is_one_of(ANIMATION_PLAY_STATE) {
            PLAY_STATE
        } else if matches!(*component, Value::String(..)) ||
            is_custom_ident(component, &[
                "none", "initial", "inherit", "unset", "revert",
            ]) && !component.is_one_of(EASING_KEYWORDS)
        {
            NAME
        } else {
            return Err(invalid("unexpected component"));
        };
        if layer[slot].is_some() {
            return Err(invalid("duplicate component"));
        }
        layer[slot] = Some(component.clone());
    }
    Ok(layer)
}

/// Expands a layered shorthand.
pub fn parse_value(
    shorthand: ShorthandId,
    context: &ParserContext,
    value: &Value,
) -> Result<Longhands, ExpansionError> {
    let layers = value.as_layers();
    let count = layers.len();
    let parsed = layers
        .iter()
        .enumerate()
        .map(|(index, layer)| {
            let components = layer.components();
            match shorthand {
                ShorthandId::Background | ShorthandId::Mask => {
                    parse_image_layer(shorthand, context, components, index + 1 == count)
                },
                ShorthandId::Transition => parse_transition_layer(components, count == 1),
                ShorthandId::Animation => parse_animation_layer(components),
                _ => Err(ExpansionError::invalid(shorthand, "not a layered shorthand")),
            }
        })
        .collect::<Result<Vec<Layer>, _>>()?;

    let mut longhands = Longhands::new();
    for (slot, name) in shorthand.longhands().iter().enumerate() {
        let initial = initial_value(name)
            .cloned()
            .ok_or(ExpansionError::invalid(shorthand, "missing initial value"))?;
        if shorthand == ShorthandId::Background && slot == slot::COLOR {
            let color = parsed.last().and_then(|layer| layer[slot].clone());
            longhands.push(color.unwrap_or(initial));
            continue;
        }
        let values = parsed
            .iter()
            .map(|layer| layer[slot].clone().unwrap_or_else(|| initial.clone()))
            .collect();
        longhands.push(Value::layers(values));
    }
    Ok(longhands)
}

fn is_initial(name: &str, value: &Value) -> bool {
    initial_value(name).is_some_and(|initial| initial == value)
}

fn image_layer_components(
    shorthand: ShorthandId,
    layer: &[&Value],
    color: Option<&Value>,
) -> Vec<Value> {
    let names = shorthand.longhands();
    let is_mask = shorthand == ShorthandId::Mask;
    let (origin_slot, clip_slot) = if is_mask {
        (slot::MASK_ORIGIN, slot::MASK_CLIP)
    } else {
        (slot::BACKGROUND_ORIGIN, slot::BACKGROUND_CLIP)
    };
    let mut components = vec![];

    if !layer[slot::IMAGE].is_keyword("none") {
        components.push(layer[slot::IMAGE].clone());
    }
    let position = layer[slot::POSITION];
    let size = layer[slot::SIZE];
    let initial_size = is_initial(names[slot::SIZE], size);
    if !is_initial_position(position) || !initial_size {
        components.extend(minimize_position(position).components().iter().cloned());
        if !initial_size {
            components.push(Value::Delim('/'));
            components.extend(size.components().iter().cloned());
        }
    }
    if !is_initial(names[slot::REPEAT], layer[slot::REPEAT]) {
        components.extend(layer[slot::REPEAT].components().iter().cloned());
    }
    if !is_mask && !is_initial(names[slot::ATTACHMENT], layer[slot::ATTACHMENT]) {
        components.push(layer[slot::ATTACHMENT].clone());
    }
    let (origin, clip) = (layer[origin_slot], layer[clip_slot]);
    if !is_initial(names[origin_slot], origin) || !is_initial(names[clip_slot], clip) {
        components.push(origin.clone());
        if origin != clip {
            components.push(clip.clone());
        }
    }
    if is_mask {
        for slot in [slot::COMPOSITE, slot::MODE] {
            if !is_initial(names[slot], layer[slot]) {
                components.push(layer[slot].clone());
            }
        }
    }
    if let Some(color) = color.filter(|color| !is_initial(names[slot::COLOR], color)) {
        components.push(color.clone());
    }
    if components.is_empty() {
        components.push(Value::ident("none"));
    }
    components
}

fn transition_layer_components(layer: &[&Value]) -> Vec<Value> {
    let names = ShorthandId::Transition.longhands();
    let mut components = vec![];
    let [property, duration, timing, delay] = *layer else {
        return components;
    };
    if !is_initial(names[0], property) {
        components.push(property.clone());
    }
    let show_delay = !is_initial(names[3], delay);
    if show_delay || !is_initial(names[1], duration) {
        components.push(duration.clone());
    }
    if !is_initial(names[2], timing) {
        components.push(timing.clone());
    }
    if show_delay {
        components.push(delay.clone());
    }
    if components.is_empty() {
        components.push(property.clone());
    }
    components
}

fn animation_layer_components(layer: &[&Value]) -> Vec<Value> {
    let names = ShorthandId::Animation.longhands();
    let mut components = vec![];
    let show_delay = !is_initial(names[3], layer[3]);
    // Duration, timing function, delay, iteration count, direction, fill
    // mode and play state, then the name, which is the least ambiguous when
    // it comes last.
    for slot in 1..8 {
        if (slot == 1 && show_delay) || !is_initial(names[slot], layer[slot]) {
            components.push(layer[slot].clone());
        }
    }
    if !is_initial(names[0], layer[0]) || components.is_empty() {
        components.push(layer[0].clone());
    }
    components
}

/// Joins per-layer longhand values back into a layered shorthand value.
/// Every layered longhand must have the same number of layers; the others
/// (`background-color`) go into the final layer.
pub fn to_shorthand_value(shorthand: ShorthandId, longhands: &[&Value]) -> Option<Value> {
    let is_layered = |name: &str| longhand_info(name).is_some_and(|info| info.layered);
    let names = shorthand.longhands();
    let layered: SmallVec<[&Value; 8]> = longhands
        .iter()
        .zip(names)
        .filter(|(_, name)| is_layered(name))
        .map(|(value, _)| *value)
        .collect();
    let final_layer_only = names
        .iter()
        .position(|name| !is_layered(name))
        .map(|index| longhands[index]);
    let count = layered.first()?.as_layers().len();
    if layered.iter().any(|value| value.as_layers().len() != count) {
        return None;
    }

    let mut layers = Vec::with_capacity(count);
    for index in 0..count {
        let layer: SmallVec<[&Value; 8]> =
            layered.iter().map(|value| &value.as_layers()[index]).collect();
        let color = final_layer_only.filter(|_| index + 1 == count);
        let components = match shorthand {
            ShorthandId::Background | ShorthandId::Mask => {
                image_layer_components(shorthand, &layer, color)
            },
            ShorthandId::Transition => transition_layer_components(&layer),
            ShorthandId::Animation => animation_layer_components(&layer),
            _ => return None,
        };
        layers.push(Value::list(components));
    }
    Some(Value::layers(layers))
}
