/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use cssparser::ToCss;
use declarations::parser::ParsingMode;

use crate::{parse, parse_with_mode};

#[test]
fn box_edges() {
    assert_compacts!(
        "margin-top:1px;margin-right:2px;margin-bottom:1px;margin-left:2px",
        "margin:1px 2px;"
    );
    assert_compacts!("padding:1px 2px 3px 4px", "padding:1px 2px 3px 4px;");
    assert_compacts!(
        "margin-top:1px!important;margin-right:1px!important;margin-bottom:1px!important;margin-left:1px!important",
        "margin:1px!important;"
    );
}

#[test]
fn incomplete_shorthands_stay_longhands() {
    assert_compacts!(
        "margin-top:1px;margin-right:1px;margin-bottom:1px",
        "margin-bottom:1px;margin-right:1px;margin-top:1px;"
    );
    assert_compacts!("color:red;width:1px", "color:red;width:1px;");
}

#[test]
fn overridden_longhands_are_filled_with_initial_values() {
    assert_compacts!(
        "margin-top:1px!important;margin-right:1px;margin-bottom:1px;margin-left:1px",
        "margin:0 1px 1px;margin-top:1px!important;"
    );
    assert_compacts!(
        "border-top-left-radius:5px!important;border-top-right-radius:2px;border-bottom-right-radius:3px;border-bottom-left-radius:4px",
        "border-radius:0 2px 3px 4px;border-top-left-radius:5px!important;"
    );
    assert_compacts!(
        "border-radius:1px 2px 3px 4px;border-top-left-radius:5px!important;",
        "border-radius:0 2px 3px 4px;border-top-left-radius:5px!important;"
    );
}

#[test]
fn unverifiable_values_stay_longhands() {
    assert_compacts!(
        "margin-top:2px;margin-right:2px;margin-bottom:2px;margin-left:2",
        "margin-bottom:2px;margin-left:2;margin-right:2px;margin-top:2px;"
    );
}

#[test]
fn css_wide_keywords() {
    assert_compacts!(
        "margin-top:inherit;margin-right:inherit;margin-bottom:inherit;margin-left:inherit",
        "margin:inherit;"
    );
    assert_compacts!(
        "flex-grow:0;flex-shrink:0;flex-basis:inherit",
        "flex-basis:inherit;flex-grow:0;flex-shrink:0;"
    );
}

#[test]
fn substitutions() {
    assert_compacts!("margin:var(--m)", "margin:var(--m);");
    assert_compacts!(
        "margin:var(--m);margin-top:1px",
        "margin-bottom:var(--m);margin-left:var(--m);margin-right:var(--m);margin-top:1px;"
    );
}

#[test]
fn hack_markers() {
    assert_compacts!(
        "margin-top:1px\\9;margin-right:1px\\9;margin-bottom:1px\\9;margin-left:1px\\9",
        "margin:1px\\9;"
    );
    assert_compacts!(
        "margin-top:1px\\9;margin-right:1px;margin-bottom:1px;margin-left:1px",
        "margin-bottom:1px;margin-left:1px;margin-right:1px;margin-top:1px\\9;"
    );
}

#[test]
fn shorthand_families() {
    assert_compacts!("flex-grow:1;flex-shrink:1;flex-basis:0", "flex:1;");
    assert_compacts!("overflow-x:hidden;overflow-y:hidden", "overflow:hidden;");
    assert_compacts!("border:1px solid red", "border:1px solid red;");
    assert_compacts!("place-content:baseline", "place-content:baseline;");
    assert_compacts!(
        "font:italic bold 12px/1.5 Helvetica,sans-serif",
        "font:italic bold 12px/1.5 Helvetica,sans-serif;"
    );
    assert_compacts!("grid-area:a", "grid-area:a;");
    assert_compacts!(
        "background:url(a.png) no-repeat",
        "background:url(a.png) no-repeat;"
    );
    assert_compacts!("background:center no-repeat", "background:center no-repeat;");
    assert_compacts!(
        "background: transparent none no-repeat scroll center center",
        "background:center no-repeat;"
    );
}

#[test]
fn invalid_layers_leave_nothing_to_compact() {
    assert_compacts!("background:red url(a.png),url(b.png)", "");
    assert_compacts!(
        "background: url('bkg.png') 40% / 10em gray round fixed border-box, url('foo.png');",
        ""
    );
}

#[test]
fn compaction_keeps_the_meaning() {
    let block = parse("margin:1px 2px;color:red!important;padding-top:3px");
    let compacted = block.compact();
    assert_eq!(compacted.to_css_string(), "color:red!important;margin:1px 2px;padding-top:3px;");
    for name in ["margin", "color", "padding-top"] {
        assert_eq!(compacted.property_value(name), block.property_value(name));
    }
    assert_eq!(
        compacted.declarations().map(|d| d.name()).collect::<Vec<_>>(),
        ["margin", "color", "padding-top"]
    );
}

#[test]
fn quirks_mode_blocks_compact_in_quirks_mode() {
    let (block, errors) = parse_with_mode(ParsingMode::ALLOW_UNITLESS_LENGTH, "margin:1 2");
    assert!(errors.is_empty());
    assert_eq!(
        block.compact_with_parsing_mode(ParsingMode::ALLOW_UNITLESS_LENGTH).to_css_string(),
        "margin:1 2;"
    );
    assert_eq!(
        block.compact().to_css_string(),
        "margin-bottom:1;margin-left:2;margin-right:2;margin-top:1;"
    );
}

#[test]
fn only_the_final_background_layer_takes_the_color() {
    assert_compacts!(
        "background:url(a.png),url(b.png) red",
        "background:url(a.png),url(b.png) red;"
    );
    assert_compacts!("transition:opacity 1s,transform 2s", "transition:opacity 1s,transform 2s;");
}
