/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The longhands that shorthands expand into, with their initial values.

use cssparser::{Parser, ParserInput};
use fnv::FnvHashMap;
use lazy_static::lazy_static;

use super::shorthands::box_edges::minimize_sides;
use super::shorthands::composite::{normalize_image_repeat, normalize_slice};
use super::shorthands::grid::normalize_auto_flow;
use super::shorthands::layered::{minimize_repeat, minimize_size};
use super::shorthands::ordered_pair::normalize_alignment;
use crate::parser::{Parse, ParserContext};
use crate::values::Value;
use crate::values::grid::parse_track_list;
use crate::values::position::normalize_position_layers;

/// Information about a longhand.
pub struct LonghandInfo {
    /// The initial value.
    pub initial: Value,
    /// Whether the longhand takes one value per layer of a layered shorthand.
    pub layered: bool,
}

/// (name, initial value, layered)
static LONGHANDS: &[(&str, &str, bool)] = &[
    ("background-image", "none", true),
    ("background-position", "0% 0%", true),
    ("background-size", "auto", true),
    ("background-repeat", "repeat", true),
    ("background-attachment", "scroll", true),
    ("background-origin", "padding-box", true),
    ("background-clip", "border-box", true),
    ("background-color", "transparent", false),
    ("mask-image", "none", true),
    ("mask-position", "0% 0%", true),
    ("mask-size", "auto", true),
    ("mask-repeat", "repeat", true),
    ("mask-origin", "border-box", true),
    ("mask-clip", "border-box", true),
    ("mask-composite", "add", true),
    ("mask-mode", "match-source", true),
    ("transition-property", "all", true),
    ("transition-duration", "0s", true),
    ("transition-timing-function", "ease", true),
    ("transition-delay", "0s", true),
    ("animation-name", "none", true),
    ("animation-duration", "0s", true),
    ("animation-timing-function", "ease", true),
    ("animation-delay", "0s", true),
    ("animation-iteration-count", "1", true),
    ("animation-direction", "normal", true),
    ("animation-fill-mode", "none", true),
    ("animation-play-state", "running", true),
    ("margin-top", "0", false),
    ("margin-right", "0", false),
    ("margin-bottom", "0", false),
    ("margin-left", "0", false),
    ("padding-top", "0", false),
    ("padding-right", "0", false),
    ("padding-bottom", "0", false),
    ("padding-left", "0", false),
    ("border-top-width", "medium", false),
    ("border-right-width", "medium", false),
    ("border-bottom-width", "medium", false),
    ("border-left-width", "medium", false),
    ("border-top-style", "none", false),
    ("border-right-style", "none", false),
    ("border-bottom-style", "none", false),
    ("border-left-style", "none", false),
    ("border-top-color", "currentcolor", false),
    ("border-right-color", "currentcolor", false),
    ("border-bottom-color", "currentcolor", false),
    ("border-left-color", "currentcolor", false),
    ("border-top-left-radius", "0", false),
    ("border-top-right-radius", "0", false),
    ("border-bottom-right-radius", "0", false),
    ("border-bottom-left-radius", "0", false),
    ("top", "auto", false),
    ("right", "auto", false),
    ("bottom", "auto", false),
    ("left", "auto", false),
    ("margin-block-start", "0", false),
    ("margin-block-end", "0", false),
    ("margin-inline-start", "0", false),
    ("margin-inline-end", "0", false),
    ("padding-block-start", "0", false),
    ("padding-block-end", "0", false),
    ("padding-inline-start", "0", false),
    ("padding-inline-end", "0", false),
    ("inset-block-start", "auto", false),
    ("inset-block-end", "auto", false),
    ("inset-inline-start", "auto", false),
    ("inset-inline-end", "auto", false),
    ("font-style", "normal", false),
    ("font-variant-caps", "normal", false),
    ("font-weight", "normal", false),
    ("font-stretch", "normal", false),
    ("font-size", "medium", false),
    ("line-height", "normal", false),
    ("font-family", "serif", false),
    ("border-image-source", "none", false),
    ("border-image-slice", "100%", false),
    ("border-image-width", "1", false),
    ("border-image-outset", "0", false),
    ("border-image-repeat", "stretch", false),
    ("flex-grow", "0", false),
    ("flex-shrink", "1", false),
    ("flex-basis", "auto", false),
    ("text-decoration-line", "none", false),
    ("text-decoration-style", "solid", false),
    ("text-decoration-color", "currentcolor", false),
    ("text-decoration-thickness", "auto", false),
    ("outline-color", "currentcolor", false),
    ("outline-style", "none", false),
    ("outline-width", "medium", false),
    ("column-rule-width", "medium", false),
    ("column-rule-style", "none", false),
    ("column-rule-color", "currentcolor", false),
    ("flex-direction", "row", false),
    ("flex-wrap", "nowrap", false),
    ("list-style-position", "outside", false),
    ("list-style-image", "none", false),
    ("list-style-type", "disc", false),
    ("column-width", "auto", false),
    ("column-count", "auto", false),
    ("overflow-x", "visible", false),
    ("overflow-y", "visible", false),
    ("row-gap", "normal", false),
    ("column-gap", "normal", false),
    ("align-content", "normal", false),
    ("justify-content", "normal", false),
    ("align-items", "normal", false),
    ("justify-items", "legacy", false),
    ("align-self", "auto", false),
    ("justify-self", "auto", false),
    ("grid-row-start", "auto", false),
    ("grid-row-end", "auto", false),
    ("grid-column-start", "auto", false),
    ("grid-column-end", "auto", false),
    ("grid-template-rows", "none", false),
    ("grid-template-columns", "none", false),
    ("grid-template-areas", "none", false),
    ("grid-auto-rows", "auto", false),
    ("grid-auto-columns", "auto", false),
    ("grid-auto-flow", "row", false),
];

fn parse_initial(css: &str) -> Value {
    let context = ParserContext::default();
    let mut input = ParserInput::new(css);
    let mut input = Parser::new(&mut input);
    Value::parse(&context, &mut input).unwrap_or_else(|_| Value::ident(css))
}

lazy_static! {
    static ref LONGHAND_INFO: FnvHashMap<&'static str, LonghandInfo> = LONGHANDS
        .iter()
        .map(|&(name, initial, layered)| {
            (name, LonghandInfo { initial: parse_initial(initial), layered })
        })
        .collect();
}

/// Looks up a longhand that belongs to some shorthand.
pub fn longhand_info(name: &str) -> Option<&'static LonghandInfo> {
    LONGHAND_INFO.get(name)
}

/// The initial value of a longhand that belongs to some shorthand.
pub fn initial_value(name: &str) -> Option<&'static Value> {
    longhand_info(name).map(|info| &info.initial)
}

fn map_layers(value: &Value, f: impl Fn(&Value) -> Option<Value>) -> Option<Value> {
    let layers = value.as_layers().iter().map(f).collect::<Option<Vec<_>>>()?;
    Some(Value::layers(layers))
}

/// Brings a longhand value set directly into the form the shorthands
/// produce, so that equal values compare equal no matter how they were
/// written. Values that cannot be normalized are kept as they are.
pub fn normalize(name: &str, value: Value, context: &ParserContext) -> Value {
    if value.css_wide_keyword().is_some() || value.pending_substitution().is_some() {
        return value;
    }
    let normalized = match name {
        "background-position" | "mask-position" => normalize_position_layers(&value, context),
        "background-size" | "mask-size" => map_layers(&value, |layer| Some(minimize_size(layer))),
        "background-repeat" | "mask-repeat" => map_layers(&value, minimize_repeat),
        "border-top-left-radius" |
        "border-top-right-radius" |
        "border-bottom-right-radius" |
        "border-bottom-left-radius" => match value.components() {
            [horizontal, vertical] if horizontal == vertical => Some(horizontal.clone()),
            _ => None,
        },
        "border-image-slice" => normalize_slice(&value),
        "border-image-repeat" => normalize_image_repeat(&value),
        "border-image-width" | "border-image-outset" => {
            Some(Value::list(minimize_sides(value.components().to_vec())))
        },
        "grid-auto-flow" => normalize_auto_flow(&value),
        "grid-template-rows" | "grid-template-columns" => {
            parse_track_list(value.components(), context)
        },
        "align-content" | "justify-content" | "align-items" | "justify-items" | "align-self" |
        "justify-self" => normalize_alignment(name, &value, context),
        _ => None,
    };
    normalized.unwrap_or(value)
}
