/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use declarations::properties::longhands::{initial_value, longhand_info};
use declarations::properties::shorthands::ShorthandRegistry;
use declarations::properties::{ExpansionError, Importance, ShorthandFamily, ShorthandId, expand};
use declarations::values::Value;

use crate::parse_value;

#[test]
fn lookup_by_name() {
    assert_eq!(ShorthandId::from_name("margin"), Some(ShorthandId::Margin));
    assert_eq!(ShorthandId::from_name("Grid-Template"), Some(ShorthandId::GridTemplate));
    assert_eq!(ShorthandId::from_name("margin-top"), None);
    assert_eq!(ShorthandRegistry::get().lookup("MARGIN"), None);
    assert_eq!(ShorthandId::Flex.family(), ShorthandFamily::CompositeSequence);
    assert_eq!(ShorthandId::MarginBlock.family(), ShorthandFamily::BoxEdges(2));
}

#[test]
fn entries_are_consistent() {
    for shorthand in ShorthandId::all() {
        assert_eq!(shorthand.entry().id, shorthand);
        assert_eq!(ShorthandId::from_name(shorthand.name()), Some(shorthand));
        for longhand in shorthand.longhands() {
            assert!(longhand_info(longhand).is_some(), "no info for {}", longhand);
            assert!(
                ShorthandRegistry::get()
                    .shorthands_for_longhand(longhand)
                    .contains(&shorthand)
            );
        }
    }
}

#[test]
fn shorthands_for_longhand() {
    let registry = ShorthandRegistry::get();
    assert_eq!(
        registry.shorthands_for_longhand("border-top-width"),
        [ShorthandId::BorderWidth, ShorthandId::Border, ShorthandId::BorderTop]
    );
    assert!(registry.shorthands_for_longhand("color").is_empty());
}

#[test]
fn compaction_order_tries_wider_shorthands_first() {
    let order = ShorthandRegistry::get().compaction_order();
    assert_eq!(order.len(), ShorthandId::all().count());
    assert_eq!(order[0], ShorthandId::Border);
    let position = |id| order.iter().position(|&other| other == id).unwrap();
    assert!(position(ShorthandId::Border) < position(ShorthandId::BorderTop));
    assert!(position(ShorthandId::Margin) < position(ShorthandId::MarginBlock));
    assert!(position(ShorthandId::GridArea) < position(ShorthandId::GridRow));
    assert!(order.windows(2).all(|pair| pair[0].longhands().len() >= pair[1].longhands().len()));
}

#[test]
fn longhand_information() {
    assert!(longhand_info("background-image").unwrap().layered);
    assert!(!longhand_info("background-color").unwrap().layered);
    assert!(longhand_info("color").is_none());
    assert_eq!(initial_value("margin-top"), Some(&Value::Number(0.)));
    assert_eq!(initial_value("font-family"), Some(&Value::ident("serif")));
    assert_eq!(initial_value("background-position").map(|v| v.components().len()), Some(2));
}

#[test]
fn expand_by_name() {
    let declarations = expand("gap", &parse_value("1px"), Importance::Important).unwrap();
    assert_eq!(declarations.len(), 2);
    assert!(declarations.iter().all(|d| d.importance() == Importance::Important));
    assert_eq!(
        expand("color", &parse_value("red"), Importance::Normal).unwrap_err(),
        ExpansionError::UnknownShorthand("color".to_owned())
    );
}
