/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use crate::expand;

#[test]
fn overflow_should_mirror_a_single_value() {
    assert_eq!(expand("overflow", "hidden").unwrap(), ["overflow-x:hidden", "overflow-y:hidden"]);
    assert_eq!(expand("overflow", "hidden scroll").unwrap(), ["overflow-x:hidden", "overflow-y:scroll"]);
    assert!(expand("overflow", "hidden scroll auto").is_err());
}

#[test]
fn gap_should_reject_negative_lengths() {
    assert_eq!(expand("gap", "10px 5%").unwrap(), ["row-gap:10px", "column-gap:5%"]);
    assert!(expand("gap", "-1px").is_err());
    assert!(expand("gap", "auto").is_err());
}

#[test]
fn place_content_baseline_sets_justify_to_start() {
    assert_eq!(
        expand("place-content", "baseline").unwrap(),
        ["align-content:baseline", "justify-content:start"]
    );
    assert_eq!(
        expand("place-content", "first baseline").unwrap(),
        ["align-content:baseline", "justify-content:start"]
    );
    assert_eq!(
        expand("place-content", "last baseline space-between").unwrap(),
        ["align-content:last baseline", "justify-content:space-between"]
    );
    assert!(expand("place-content", "center baseline").is_err());
}

#[test]
fn place_content_with_overflow_position() {
    assert_eq!(
        expand("place-content", "safe center unsafe end").unwrap(),
        ["align-content:safe center", "justify-content:unsafe end"]
    );
    assert!(expand("place-content", "safe stretch").is_err());
}

#[test]
fn place_items_should_accept_legacy_justification() {
    assert_eq!(expand("place-items", "center").unwrap(), ["align-items:center", "justify-items:center"]);
    assert_eq!(
        expand("place-items", "start legacy left").unwrap(),
        ["align-items:start", "justify-items:legacy left"]
    );
    assert_eq!(
        expand("place-items", "end right legacy").unwrap(),
        ["align-items:end", "justify-items:legacy right"]
    );
    assert!(expand("place-items", "legacy").is_err());
}

#[test]
fn place_self_should_accept_auto() {
    assert_eq!(expand("place-self", "auto").unwrap(), ["align-self:auto", "justify-self:auto"]);
    assert_eq!(expand("place-self", "stretch left").unwrap(), ["align-self:stretch", "justify-self:left"]);
    assert!(expand("place-self", "left").is_err());
}
