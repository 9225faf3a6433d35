/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use declarations::properties::ExpansionError;

use crate::{expand, expanded_value};

#[test]
fn background_shorthand_should_parse_all_available_properties_when_specified() {
    assert_eq!(
        expand(
            "background",
            "url(\"http://servo/test.png\") top center / 200px 200px repeat-x fixed padding-box content-box red"
        )
        .unwrap(),
        [
            "background-image:url(http://servo/test.png)",
            "background-position:center top",
            "background-size:200px 200px",
            "background-repeat:repeat-x",
            "background-attachment:fixed",
            "background-origin:padding-box",
            "background-clip:content-box",
            "background-color:red",
        ]
    );
}

#[test]
fn background_shorthand_should_parse_when_some_fields_set() {
    assert_eq!(
        expanded_value("background", "14px 40px repeat-y", "background-position"),
        "14px 40px"
    );
    assert_eq!(
        expanded_value("background", "14px 40px repeat-y", "background-repeat"),
        "repeat-y"
    );
    assert_eq!(
        expanded_value("background", "14px 40px repeat-y", "background-image"),
        "none"
    );
    assert_eq!(
        expanded_value("background", "url(a.png) repeat blue", "background-color"),
        "blue"
    );
    assert_eq!(
        expanded_value("background", "padding-box", "background-clip"),
        "padding-box"
    );
}

#[test]
fn background_position_keywords_are_normalized() {
    assert_eq!(expanded_value("background", "top", "background-position"), "center top");
    assert_eq!(expanded_value("background", "left", "background-position"), "left center");
    assert_eq!(
        expanded_value("background", "bottom 10px right 5%", "background-position"),
        "bottom 10px right 5%"
    );
    assert!(expand("background", "top 10px").is_err());
}

#[test]
fn background_repeat_pairs_are_minimized() {
    assert_eq!(
        expanded_value("background", "repeat no-repeat", "background-repeat"),
        "repeat-x"
    );
    assert_eq!(
        expanded_value("background", "space space", "background-repeat"),
        "space"
    );
    assert_eq!(
        expanded_value("background", "round space", "background-repeat"),
        "round space"
    );
}

#[test]
fn background_size_needs_a_position() {
    assert_eq!(
        expanded_value("background", "center / cover", "background-size"),
        "cover"
    );
    assert_eq!(
        expanded_value("background", "0 0 / 10px auto", "background-size"),
        "10px"
    );
    assert!(expand("background", "center /").is_err());
}

#[test]
fn background_layers_take_initial_values_for_missing_components() {
    assert_eq!(
        expand("background", "url(a.png), url(b.png) red").unwrap(),
        [
            "background-image:url(a.png),url(b.png)",
            "background-position:0% 0%,0% 0%",
            "background-size:auto,auto",
            "background-repeat:repeat,repeat",
            "background-attachment:scroll,scroll",
            "background-origin:padding-box,padding-box",
            "background-clip:border-box,border-box",
            "background-color:red",
        ]
    );
}

#[test]
fn background_color_is_only_allowed_in_the_final_layer() {
    assert!(expand("background", "red, url(a.png)").is_err());
    assert!(expand("background", "url('bkg.png') 40% / 10em gray round fixed border-box, url('foo.png')").is_err());
}

#[test]
fn background_should_reject_duplicate_components() {
    assert!(expand("background", "url(a.png) url(b.png)").is_err());
    assert!(expand("background", "red blue").is_err());
    assert!(expand("background", "border-box padding-box content-box").is_err());
}

#[test]
fn background_text_clip() {
    assert_eq!(expanded_value("background", "text", "background-clip"), "text");
    assert_eq!(expanded_value("background", "text", "background-origin"), "padding-box");
}

#[test]
fn mask_shorthand_should_parse_composite_and_mode() {
    assert_eq!(
        expand("mask", "url(m.svg) center / contain no-repeat content-box subtract luminance")
            .unwrap(),
        [
            "mask-image:url(m.svg)",
            "mask-position:center center",
            "mask-size:contain",
            "mask-repeat:no-repeat",
            "mask-origin:content-box",
            "mask-clip:content-box",
            "mask-composite:subtract",
            "mask-mode:luminance",
        ]
    );
    assert!(expand("mask", "url(m.svg) red").is_err());
}

#[test]
fn transition_should_assign_times_in_order() {
    assert_eq!(
        expand("transition", "opacity 1s ease-in 0.5s, transform 2s").unwrap(),
        [
            "transition-property:opacity,transform",
            "transition-duration:1s,2s",
            "transition-timing-function:ease-in,ease",
            "transition-delay:0.5s,0s",
        ]
    );
    assert!(expand("transition", "1s 2s 3s").is_err());
}

#[test]
fn durations_cannot_be_negative() {
    assert!(matches!(
        expand("transition", "-1s"),
        Err(ExpansionError::InvalidGrammar { .. })
    ));
    assert_eq!(expanded_value("transition", "1s -1s", "transition-delay"), "-1s");
    assert!(matches!(
        expand("animation", "slide -2s"),
        Err(ExpansionError::InvalidGrammar { .. })
    ));
    assert_eq!(expanded_value("animation", "slide 2s -1s", "animation-delay"), "-1s");
}

#[test]
fn transition_none_is_only_valid_alone() {
    assert_eq!(expanded_value("transition", "none", "transition-property"), "none");
    assert!(expand("transition", "none, opacity").is_err());
}

#[test]
fn animation_should_classify_components() {
    assert_eq!(
        expand("animation", "slide 3s infinite alternate").unwrap(),
        [
            "animation-name:slide",
            "animation-duration:3s",
            "animation-timing-function:ease",
            "animation-delay:0s",
            "animation-iteration-count:infinite",
            "animation-direction:alternate",
            "animation-fill-mode:none",
            "animation-play-state:running",
        ]
    );
    assert_eq!(
        expanded_value("animation", "2s steps(4, end) 1s 3 both paused spin", "animation-timing-function"),
        "steps(4,end)"
    );
    assert!(expand("animation", "spin 1s 2s 3s").is_err());
}
