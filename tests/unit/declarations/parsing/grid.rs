/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use declarations::values::grid::TemplateAreas;

use crate::{expand, expanded_value};

#[test]
fn grid_row_should_default_the_end_line() {
    assert_eq!(expand("grid-row", "2 / span 3").unwrap(), ["grid-row-start:2", "grid-row-end:span 3"]);
    assert_eq!(expand("grid-row", "2").unwrap(), ["grid-row-start:2", "grid-row-end:auto"]);
    assert_eq!(expand("grid-column", "main").unwrap(), ["grid-column-start:main", "grid-column-end:main"]);
}

#[test]
fn grid_line_should_reject_invalid_combinations() {
    assert!(expand("grid-row", "0").is_err());
    assert!(expand("grid-row", "span").is_err());
    assert!(expand("grid-row", "span -1").is_err());
    assert!(expand("grid-row", "1 span 2").is_err());
    assert!(expand("grid-row", "1 / 2 / 3").is_err());
}

#[test]
fn grid_area_should_copy_custom_identifiers() {
    assert_eq!(
        expand("grid-area", "a").unwrap(),
        ["grid-row-start:a", "grid-column-start:a", "grid-row-end:a", "grid-column-end:a"]
    );
    assert_eq!(
        expand("grid-area", "1 / b").unwrap(),
        ["grid-row-start:1", "grid-column-start:b", "grid-row-end:auto", "grid-column-end:b"]
    );
    assert!(expand("grid-area", "1 / 2 / 3 / 4 / 5").is_err());
}

#[test]
fn grid_template_rows_and_columns() {
    assert_eq!(
        expand("grid-template", "100px 1fr / [start] repeat(2, 50px) [end]").unwrap(),
        [
            "grid-template-rows:100px 1fr",
            "grid-template-columns:[start] repeat(2,50px) [end]",
            "grid-template-areas:none",
        ]
    );
    assert_eq!(
        expand("grid-template", "none").unwrap(),
        ["grid-template-rows:none", "grid-template-columns:none", "grid-template-areas:none"]
    );
    assert!(expand("grid-template", "100px").is_err());
}

#[test]
fn grid_template_areas_with_row_sizes() {
    assert_eq!(
        expand("grid-template", "[top] \"a a\" 40px [middle] \"b c\" / 1fr 2fr").unwrap(),
        [
            "grid-template-rows:[top] 40px [middle] auto",
            "grid-template-columns:1fr 2fr",
            "grid-template-areas:\"a a\" \"b c\"",
        ]
    );
}

#[test]
fn grid_template_should_reject_non_rectangular_areas() {
    assert!(expand("grid-template", "\"a a\" \"a b\"").is_err());
    assert!(expand("grid-template", "\"a a\" \"b\"").is_err());
    assert!(expand("grid-template", "\"a\" / none").is_err());
}

#[test]
fn grid_auto_flow_forms() {
    assert_eq!(
        expand("grid", "auto-flow dense / 100px 1fr").unwrap(),
        [
            "grid-template-rows:none",
            "grid-template-columns:100px 1fr",
            "grid-template-areas:none",
            "grid-auto-rows:auto",
            "grid-auto-columns:auto",
            "grid-auto-flow:row dense",
        ]
    );
    assert_eq!(
        expand("grid", "100px / auto-flow 50px").unwrap(),
        [
            "grid-template-rows:100px",
            "grid-template-columns:none",
            "grid-template-areas:none",
            "grid-auto-rows:auto",
            "grid-auto-columns:50px",
            "grid-auto-flow:column",
        ]
    );
    assert!(expand("grid", "auto-flow auto-flow / 1fr").is_err());
}

#[test]
fn grid_template_form_resets_the_implicit_grid() {
    assert_eq!(expanded_value("grid", "\"a\" 1fr / 1fr", "grid-auto-flow"), "row");
    assert_eq!(expanded_value("grid", "\"a\" 1fr / 1fr", "grid-template-areas"), "\"a\"");
}

#[test]
fn template_areas_should_expose_implicit_line_names() {
    let areas = TemplateAreas::from_strings(&["a a b", "a a c"]).unwrap();
    assert_eq!(areas.rows, 2);
    assert_eq!(areas.columns, 3);
    assert_eq!(areas.areas.len(), 3);
    assert_eq!(areas.areas[0].name, "a");
    assert_eq!(areas.areas[0].rows, 0..2);
    assert_eq!(areas.areas[0].columns, 0..2);
    assert_eq!(
        areas.implicit_row_line_names(),
        vec![
            vec!["a-start".to_owned(), "b-start".to_owned()],
            vec!["b-end".to_owned(), "c-start".to_owned()],
            vec!["a-end".to_owned(), "c-end".to_owned()],
        ]
    );
    assert_eq!(
        areas.implicit_column_line_names(),
        vec![
            vec!["a-start".to_owned()],
            vec![],
            vec!["a-end".to_owned(), "b-start".to_owned(), "c-start".to_owned()],
            vec!["b-end".to_owned(), "c-end".to_owned()],
        ]
    );
}

#[test]
fn template_areas_null_cells() {
    let areas = TemplateAreas::from_strings(&[". a", "... a"]).unwrap();
    assert_eq!(areas.columns, 2);
    assert_eq!(areas.areas[0].columns, 1..2);
    assert_eq!(areas.areas[0].rows, 0..2);
    assert!(TemplateAreas::from_strings(&["a b a"]).is_none());
    assert!(TemplateAreas::from_strings(&["a", "b", "a"]).is_none());
}
