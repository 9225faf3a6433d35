/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Grid values: `<grid-line>`, track lists and `grid-template-areas`.

use std::ops::Range;

use super::Value;
use super::specified::{is_custom_ident, is_flex, is_integer, is_length_percentage};
use crate::parser::ParserContext;

fn is_line_ident(value: &Value) -> bool {
    is_custom_ident(value, &["auto", "span"])
}

fn is_line_integer(value: &Value) -> bool {
    is_integer(value) && value.as_number() != Some(0.)
}

/// Parses the components of a `<grid-line>`:
///
/// `auto | <custom-ident> | [ <integer> && <custom-ident>? ] |
///  [ span && [ <integer> || <custom-ident> ] ]`
pub fn parse_grid_line(components: &[Value]) -> Option<Value> {
    let mut span = false;
    let mut integer = None;
    let mut ident = None;
    match components {
        [value] if value.is_keyword("auto") => return Some(value.clone()),
        [] => return None,
        _ => {},
    }
    for component in components {
        if component.is_keyword("span") && !span {
            span = true;
        } else if integer.is_none() && is_line_integer(component) {
            integer = Some(component);
        } else if ident.is_none() && is_line_ident(component) {
            ident = Some(component);
        } else {
            return None;
        }
    }
    // `span` must come first or last.
    if span &&
        !components[0].is_keyword("span") &&
        !components[components.len() - 1].is_keyword("span")
    {
        return None;
    }
    if span {
        if integer.is_none() && ident.is_none() {
            return None;
        }
        if integer.is_some_and(|integer| integer.as_number().is_some_and(|n| n < 0.)) {
            return None;
        }
    }
    Some(Value::list(components.to_vec()))
}

/// Whether a grid line is a lone `<custom-ident>`, which an omitted
/// opposite line copies.
pub fn is_custom_ident_line(line: &Value) -> bool {
    line.is_component() && is_line_ident(line)
}

/// The value an omitted end line takes, given its start line.
pub fn default_end_line(start: &Value) -> Value {
    if is_custom_ident_line(start) {
        start.clone()
    } else {
        Value::ident("auto")
    }
}

fn is_track_breadth(value: &Value, context: &ParserContext) -> bool {
    value.is_one_of(&["auto", "min-content", "max-content"]) ||
        is_flex(value) ||
        is_length_percentage(value, context)
}

/// Whether `value` is a single `<track-size>`.
pub fn is_track_size(value: &Value, context: &ParserContext) -> bool {
    match *value {
        Value::Function(ref function) => {
            matches!(&*function.name, "minmax" | "fit-content") ||
                is_track_breadth(value, context)
        },
        _ => is_track_breadth(value, context),
    }
}

fn is_repeat(value: &Value) -> bool {
    matches!(*value, Value::Function(ref function) if function.name == "repeat")
}

/// Parses a `<track-list>` or `<auto-track-list>` (or `none`), merging
/// adjacent line name lists.
pub fn parse_track_list(components: &[Value], context: &ParserContext) -> Option<Value> {
    match components {
        [] => return None,
        [value] if value.is_keyword("none") => return Some(value.clone()),
        _ => {},
    }
    if components[0].is_keyword("subgrid") {
        if components[1..]
            .iter()
            .all(|c| matches!(*c, Value::LineNames(..)) || is_repeat(c))
        {
            return Some(Value::list(components.to_vec()));
        }
        return None;
    }
    let mut result: Vec<Value> = vec![];
    let mut has_track = false;
    for component in components {
        match *component {
            Value::LineNames(ref names) => {
                if let Some(Value::LineNames(previous)) = result.last_mut() {
                    previous.extend(names.iter().cloned());
                    continue;
                }
            },
            _ if is_track_size(component, context) || is_repeat(component) => has_track = true,
            _ => return None,
        }
        result.push(component.clone());
    }
    if !has_track {
        return None;
    }
    Some(Value::list(result))
}

/// Parses a list of track sizes without line names, as used by
/// `grid-auto-rows` and `grid-auto-columns`.
pub fn parse_implicit_tracks(components: &[Value], context: &ParserContext) -> Option<Value> {
    if components.is_empty() || !components.iter().all(|c| is_track_size(c, context)) {
        return None;
    }
    Some(Value::list(components.to_vec()))
}

/// A named area of a `grid-template-areas` value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedArea {
    /// The name of the area.
    pub name: String,
    /// The rows the area spans, zero based.
    pub rows: Range<u32>,
    /// The columns the area spans, zero based.
    pub columns: Range<u32>,
}

/// A parsed `grid-template-areas` value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TemplateAreas {
    /// The number of rows.
    pub rows: u32,
    /// The number of columns.
    pub columns: u32,
    /// The named areas, in order of first appearance.
    pub areas: Vec<NamedArea>,
}

fn tokenize_area_row(row: &str) -> Option<Vec<Option<String>>> {
    let mut cells = vec![];
    let mut chars = row.chars().peekable();
    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c == '.' {
            while chars.peek() == Some(&'.') {
                chars.next();
            }
            cells.push(None);
        } else if c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
            let mut name = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
                    name.push(c);
                    chars.next();
                } else {
                    break;
                }
            }
            cells.push(Some(name));
        } else {
            return None;
        }
    }
    Some(cells)
}

impl TemplateAreas {
    /// Parses the strings of a `grid-template-areas` value. Every row must
    /// have the same number of columns and every named area must be a
    /// rectangle.
    pub fn from_strings<S: AsRef<str>>(strings: &[S]) -> Option<Self> {
        let mut grid = vec![];
        for string in strings {
            let cells = tokenize_area_row(string.as_ref())?;
            if cells.is_empty() {
                return None;
            }
            grid.push(cells);
        }
        let columns = grid.first()?.len();
        if grid.iter().any(|row| row.len() != columns) {
            return None;
        }

        let mut areas: Vec<NamedArea> = vec![];
        for (row_index, row) in grid.iter().enumerate() {
            for (column_index, cell) in row.iter().enumerate() {
                let Some(name) = cell else { continue };
                let (row_index, column_index) = (row_index as u32, column_index as u32);
                match areas.iter_mut().find(|area| area.name == *name) {
                    Some(area) => {
                        area.rows.end = area.rows.end.max(row_index + 1);
                        area.columns.start = area.columns.start.min(column_index);
                        area.columns.end = area.columns.end.max(column_index + 1);
                    },
                    None => areas.push(NamedArea {
                        name: name.clone(),
                        rows: row_index..row_index + 1,
                        columns: column_index..column_index + 1,
                    }),
                }
            }
        }

        // Each area's bounding box must be filled by that area alone, and
        // the number of cells it owns must match the box.
        for area in &areas {
            let mut owned = 0;
            for row in area.rows.clone() {
                for column in area.columns.clone() {
                    if grid[row as usize][column as usize].as_deref() != Some(&*area.name) {
                        return None;
                    }
                }
            }
            for row in &grid {
                owned += row
                    .iter()
                    .filter(|cell| cell.as_deref() == Some(&*area.name))
                    .count();
            }
            if owned != area.rows.len() * area.columns.len() {
                return None;
            }
        }

        Some(TemplateAreas {
            rows: grid.len() as u32,
            columns: columns as u32,
            areas,
        })
    }

    fn implicit_line_names(&self, lines: u32, range: impl Fn(&NamedArea) -> &Range<u32>) -> Vec<Vec<String>> {
        let mut names = vec![vec![]; lines as usize + 1];
        for area in &self.areas {
            let range = range(area);
            names[range.start as usize].push(format!("{}-start", area.name));
            names[range.end as usize].push(format!("{}-end", area.name));
        }
        names
    }

    /// The implicitly-assigned names of every row line, from the first to
    /// the last.
    pub fn implicit_row_line_names(&self) -> Vec<Vec<String>> {
        self.implicit_line_names(self.rows, |area| &area.rows)
    }

    /// The implicitly-assigned names of every column line.
    pub fn implicit_column_line_names(&self) -> Vec<Vec<String>> {
        self.implicit_line_names(self.columns, |area| &area.columns)
    }
}

/// The strings of a `grid-template-areas` value, if it is a list of strings.
pub fn area_strings(value: &Value) -> Option<Vec<&str>> {
    value
        .components()
        .iter()
        .map(|component| match *component {
            Value::String(ref string) => Some(&**string),
            _ => None,
        })
        .collect()
}
