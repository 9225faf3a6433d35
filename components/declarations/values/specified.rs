/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Classification of value components against the grammars used by
//! shorthands: lengths, colors, keywords and so on.

use fnv::FnvHashSet;
use lazy_static::lazy_static;

use super::{Color, Value};
use crate::parser::ParserContext;

/// <https://drafts.csswg.org/css-backgrounds/#typedef-line-style>
pub static BORDER_STYLE: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];
/// <https://drafts.csswg.org/css-backgrounds/#typedef-line-width>
pub static LINE_WIDTH: &[&str] = &["thin", "medium", "thick"];
/// <https://drafts.csswg.org/css-backgrounds/#typedef-visual-box>
pub static VISUAL_BOX: &[&str] = &["border-box", "padding-box", "content-box"];
/// <https://drafts.fxtf.org/css-masking/#typedef-geometry-box>
pub static GEOMETRY_BOX: &[&str] = &[
    "border-box",
    "padding-box",
    "content-box",
    "margin-box",
    "fill-box",
    "stroke-box",
    "view-box",
];
/// <https://drafts.csswg.org/css-backgrounds/#typedef-repeat-style>
pub static REPEAT_STYLE: &[&str] = &["repeat-x", "repeat-y", "repeat", "space", "round", "no-repeat"];
/// <https://drafts.csswg.org/css-backgrounds/#typedef-attachment>
pub static ATTACHMENT: &[&str] = &["scroll", "fixed", "local"];
/// Keywords of `<position>`.
pub static POSITION_KEYWORDS: &[&str] = &["left", "right", "top", "bottom", "center"];
/// Keywords of `<bg-size>`.
pub static SIZE_KEYWORDS: &[&str] = &["cover", "contain", "auto"];
/// <https://drafts.fxtf.org/css-masking/#propdef-mask-composite>
pub static MASK_COMPOSITE: &[&str] = &["add", "subtract", "intersect", "exclude"];
/// <https://drafts.fxtf.org/css-masking/#propdef-mask-mode>
pub static MASK_MODE: &[&str] = &["alpha", "luminance", "match-source"];
/// Keywords of `<easing-function>`.
pub static EASING_KEYWORDS: &[&str] = &[
    "ease",
    "linear",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "step-start",
    "step-end",
];
/// Functions of `<easing-function>`.
pub static EASING_FUNCTIONS: &[&str] = &["cubic-bezier", "steps", "linear"];
/// <https://drafts.csswg.org/css-animations/#propdef-animation-direction>
pub static ANIMATION_DIRECTION: &[&str] = &["normal", "reverse", "alternate", "alternate-reverse"];
/// <https://drafts.csswg.org/css-animations/#propdef-animation-fill-mode>
pub static ANIMATION_FILL_MODE: &[&str] = &["none", "forwards", "backwards", "both"];
/// <https://drafts.csswg.org/css-animations/#propdef-animation-play-state>
pub static ANIMATION_PLAY_STATE: &[&str] = &["running", "paused"];
/// Keywords of `font-style`; `oblique` may be followed by an angle.
pub static FONT_STYLE: &[&str] = &["normal", "italic", "oblique"];
/// The values of `font-variant` accepted by the `font` shorthand.
pub static FONT_VARIANT_CSS2: &[&str] = &["normal", "small-caps"];
/// Keywords of `font-weight`.
pub static FONT_WEIGHT: &[&str] = &["normal", "bold", "bolder", "lighter"];
/// The values of `font-stretch` accepted by the `font` shorthand.
pub static FONT_STRETCH: &[&str] = &[
    "normal",
    "ultra-condensed",
    "extra-condensed",
    "condensed",
    "semi-condensed",
    "semi-expanded",
    "expanded",
    "extra-expanded",
    "ultra-expanded",
];
/// Keywords of `font-size`.
pub static FONT_SIZE: &[&str] = &[
    "xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large", "xxx-large",
    "larger", "smaller",
];
/// System font keywords, which `font` does not expand.
pub static SYSTEM_FONTS: &[&str] = &[
    "caption",
    "icon",
    "menu",
    "message-box",
    "small-caption",
    "status-bar",
];
/// Generic font families.
pub static GENERIC_FAMILIES: &[&str] = &[
    "serif",
    "sans-serif",
    "cursive",
    "fantasy",
    "monospace",
    "system-ui",
    "math",
    "emoji",
    "fangsong",
    "ui-serif",
    "ui-sans-serif",
    "ui-monospace",
    "ui-rounded",
];
/// Line keywords of `text-decoration-line`, besides `none`.
pub static TEXT_DECORATION_LINE: &[&str] = &["underline", "overline", "line-through", "blink"];
/// <https://drafts.csswg.org/css-text-decor/#propdef-text-decoration-style>
pub static TEXT_DECORATION_STYLE: &[&str] = &["solid", "double", "dotted", "dashed", "wavy"];
/// Keywords of `text-decoration-thickness`.
pub static TEXT_DECORATION_THICKNESS: &[&str] = &["auto", "from-font"];
/// <https://drafts.csswg.org/css-flexbox/#propdef-flex-direction>
pub static FLEX_DIRECTION: &[&str] = &["row", "row-reverse", "column", "column-reverse"];
/// <https://drafts.csswg.org/css-flexbox/#propdef-flex-wrap>
pub static FLEX_WRAP: &[&str] = &["nowrap", "wrap", "wrap-reverse"];
/// <https://drafts.csswg.org/css-lists/#propdef-list-style-position>
pub static LIST_STYLE_POSITION: &[&str] = &["inside", "outside"];
/// Predefined counter styles.
pub static COUNTER_STYLES: &[&str] = &[
    "disc",
    "circle",
    "square",
    "decimal",
    "decimal-leading-zero",
    "lower-roman",
    "upper-roman",
    "lower-greek",
    "lower-latin",
    "upper-latin",
    "lower-alpha",
    "upper-alpha",
    "armenian",
    "georgian",
    "disclosure-open",
    "disclosure-closed",
];
/// <https://drafts.csswg.org/css-overflow/#propdef-overflow-x>
pub static OVERFLOW: &[&str] = &["visible", "hidden", "clip", "scroll", "auto"];
/// `<content-distribution>`
pub static CONTENT_DISTRIBUTION: &[&str] = &["space-between", "space-around", "space-evenly", "stretch"];
/// `<content-position>`
pub static CONTENT_POSITION: &[&str] = &["center", "start", "end", "flex-start", "flex-end"];
/// `<self-position>`
pub static SELF_POSITION: &[&str] = &[
    "center",
    "start",
    "end",
    "self-start",
    "self-end",
    "flex-start",
    "flex-end",
];
/// `<overflow-position>`
pub static OVERFLOW_POSITION: &[&str] = &["safe", "unsafe"];
/// Keywords of `border-image-repeat`.
pub static BORDER_IMAGE_REPEAT: &[&str] = &["stretch", "repeat", "round", "space"];
/// Keywords of grid properties.
pub static GRID_KEYWORDS: &[&str] = &[
    "auto",
    "span",
    "dense",
    "auto-flow",
    "none",
    "subgrid",
    "min-content",
    "max-content",
];

/// <https://drafts.csswg.org/css-color/#named-colors>, plus `transparent`
/// and `currentcolor`.
pub static COLOR_KEYWORDS: &[&str] = &[
    "transparent", "currentcolor", "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure",
    "beige", "bisque", "black", "blanchedalmond", "blue", "blueviolet", "brown", "burlywood",
    "cadetblue", "chartreuse", "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson",
    "cyan", "darkblue", "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey",
    "darkkhaki", "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred",
    "darksalmon", "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey",
    "darkturquoise", "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue",
    "firebrick", "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold",
    "goldenrod", "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred",
    "indigo", "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon",
    "lightblue", "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen",
    "lightgrey", "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen",
    "mediumslateblue", "mediumspringgreen", "mediumturquoise", "mediumvioletred", "midnightblue",
    "mintcream", "mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive", "olivedrab",
    "orange", "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise",
    "palevioletred", "papayawhip", "peachpuff", "peru", "pink", "plum", "powderblue", "purple",
    "rebeccapurple", "red", "rosybrown", "royalblue", "saddlebrown", "salmon", "sandybrown",
    "seagreen", "seashell", "sienna", "silver", "skyblue", "slateblue", "slategray", "slategrey",
    "snow", "springgreen", "steelblue", "tan", "teal", "thistle", "tomato", "turquoise", "violet",
    "wheat", "white", "whitesmoke", "yellow", "yellowgreen",
];

static MISC_KEYWORDS: &[&str] = &[
    "auto", "none", "normal", "all", "infinite", "baseline", "first", "last", "legacy", "left",
    "right", "outline", "invert", "fill", "text", "no-clip",
];

static LENGTH_UNITS: &[&str] = &[
    "px", "em", "rem", "ex", "rex", "ch", "rch", "cap", "rcap", "ic", "ric", "lh", "rlh", "vw",
    "vh", "vi", "vb", "vmin", "vmax", "svw", "svh", "svi", "svb", "svmin", "svmax", "lvw", "lvh",
    "lvi", "lvb", "lvmin", "lvmax", "dvw", "dvh", "dvi", "dvb", "dvmin", "dvmax", "cqw", "cqh",
    "cqi", "cqb", "cqmin", "cqmax", "cm", "mm", "q", "in", "pt", "pc",
];

static MATH_FUNCTIONS: &[&str] = &[
    "calc", "min", "max", "clamp", "round", "mod", "rem", "abs", "sign",
];

static COLOR_FUNCTIONS: &[&str] = &[
    "rgb",
    "rgba",
    "hsl",
    "hsla",
    "hwb",
    "lab",
    "lch",
    "oklab",
    "oklch",
    "color",
    "color-mix",
    "light-dark",
    "contrast-color",
];

static IMAGE_FUNCTIONS: &[&str] = &[
    "linear-gradient",
    "radial-gradient",
    "conic-gradient",
    "repeating-linear-gradient",
    "repeating-radial-gradient",
    "repeating-conic-gradient",
    "image",
    "image-set",
    "cross-fade",
    "element",
    "paint",
    "-webkit-gradient",
    "-webkit-linear-gradient",
    "-webkit-radial-gradient",
    "-webkit-repeating-linear-gradient",
    "-webkit-repeating-radial-gradient",
    "-webkit-image-set",
    "-moz-linear-gradient",
    "-moz-radial-gradient",
    "-moz-repeating-linear-gradient",
    "-moz-repeating-radial-gradient",
    "-o-linear-gradient",
];

lazy_static! {
    /// Every keyword any grammar of this crate knows about. Identifiers in
    /// this set are stored lowercased, everything else is kept as written.
    static ref KEYWORDS: FnvHashSet<&'static str> = {
        let tables: &[&[&str]] = &[
            BORDER_STYLE, LINE_WIDTH, GEOMETRY_BOX, REPEAT_STYLE, ATTACHMENT, POSITION_KEYWORDS,
            SIZE_KEYWORDS, MASK_COMPOSITE, MASK_MODE, EASING_KEYWORDS, ANIMATION_DIRECTION,
            ANIMATION_FILL_MODE, ANIMATION_PLAY_STATE, FONT_STYLE, FONT_VARIANT_CSS2, FONT_WEIGHT,
            FONT_STRETCH, FONT_SIZE, SYSTEM_FONTS, GENERIC_FAMILIES, TEXT_DECORATION_LINE,
            TEXT_DECORATION_STYLE, TEXT_DECORATION_THICKNESS, FLEX_DIRECTION, FLEX_WRAP,
            LIST_STYLE_POSITION, COUNTER_STYLES, OVERFLOW, CONTENT_DISTRIBUTION, CONTENT_POSITION,
            SELF_POSITION, OVERFLOW_POSITION, BORDER_IMAGE_REPEAT, GRID_KEYWORDS, COLOR_KEYWORDS,
            MISC_KEYWORDS,
        ];
        tables.iter().flat_map(|table| table.iter().copied()).collect()
    };
}

/// Whether `ident` (already lowercased) is a keyword of some grammar.
pub fn is_known_keyword(ident: &str) -> bool {
    KEYWORDS.contains(ident)
}

/// Whether `unit` (lowercased) is a length unit.
pub fn is_length_unit(unit: &str) -> bool {
    LENGTH_UNITS.contains(&unit)
}

/// Whether `name` is a math function such as `calc()`.
pub fn is_math_function(name: &str) -> bool {
    MATH_FUNCTIONS.contains(&name)
}

/// Whether `name` is a function producing a color.
pub fn is_color_function(name: &str) -> bool {
    COLOR_FUNCTIONS.contains(&name)
}

/// Whether `name` is a function producing an image.
pub fn is_image_function(name: &str) -> bool {
    IMAGE_FUNCTIONS.contains(&name)
}

fn is_math(value: &Value) -> bool {
    matches!(*value, Value::Function(ref function) if is_math_function(&function.name))
}

/// `<length>`
pub fn is_length(value: &Value, context: &ParserContext) -> bool {
    match *value {
        Value::Dimension(ref dimension) => is_length_unit(&dimension.unit),
        Value::Number(number) => number == 0. || context.parsing_mode.allows_unitless_lengths(),
        _ => is_math(value),
    }
}

/// `<length-percentage>`
pub fn is_length_percentage(value: &Value, context: &ParserContext) -> bool {
    matches!(*value, Value::Percentage(..)) || is_length(value, context)
}

/// Whether a numeric value is not negative. Math functions are assumed to
/// be in range.
pub fn is_non_negative(value: &Value) -> bool {
    match *value {
        Value::Number(number) | Value::Percentage(number) => number >= 0.,
        Value::Dimension(ref dimension) => dimension.value >= 0.,
        _ => true,
    }
}

/// `<number>`
pub fn is_number(value: &Value) -> bool {
    matches!(*value, Value::Number(..)) || is_math(value)
}

/// `<integer>`
pub fn is_integer(value: &Value) -> bool {
    match *value {
        Value::Number(number) => number.fract() == 0.,
        _ => is_math(value),
    }
}

/// `<time>`
pub fn is_time(value: &Value) -> bool {
    match *value {
        Value::Dimension(ref dimension) => dimension.unit == "s" || dimension.unit == "ms",
        _ => is_math(value),
    }
}

/// `<angle>`
pub fn is_angle(value: &Value) -> bool {
    match *value {
        Value::Dimension(ref dimension) => {
            matches!(&*dimension.unit, "deg" | "grad" | "rad" | "turn")
        },
        Value::Number(number) => number == 0.,
        _ => is_math(value),
    }
}

/// `<flex>`, i.e. a dimension in `fr`.
pub fn is_flex(value: &Value) -> bool {
    matches!(*value, Value::Dimension(ref dimension) if dimension.unit == "fr")
}

/// `<color>`
pub fn is_color(value: &Value) -> bool {
    match *value {
        Value::Color(Color::Hex(..)) | Value::Color(Color::Function(..)) => true,
        Value::Ident(ref ident) => COLOR_KEYWORDS.contains(&&**ident),
        _ => false,
    }
}

/// `<image>`
pub fn is_image(value: &Value) -> bool {
    matches!(*value, Value::Image(..))
}

/// `<custom-ident>`, excluding the given keywords.
pub fn is_custom_ident(value: &Value, excluded: &[&str]) -> bool {
    match *value {
        Value::Ident(ref ident) => {
            !ident.eq_ignore_ascii_case("default") &&
                !excluded.iter().any(|keyword| ident.eq_ignore_ascii_case(keyword))
        },
        _ => false,
    }
}

/// `<line-width>`
pub fn is_line_width(value: &Value, context: &ParserContext) -> bool {
    value.is_one_of(LINE_WIDTH) || (is_length(value, context) && is_non_negative(value))
}

/// `<line-style>`
pub fn is_line_style(value: &Value) -> bool {
    value.is_one_of(BORDER_STYLE)
}

/// `<easing-function>`
pub fn is_easing_function(value: &Value) -> bool {
    match *value {
        Value::Function(ref function) => EASING_FUNCTIONS.contains(&&*function.name),
        _ => value.is_one_of(EASING_KEYWORDS),
    }
}
