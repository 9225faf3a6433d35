/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Grid shorthands: `grid-row`, `grid-column`, `grid-area`,
//! `grid-template` and `grid`.

use super::{ExpansionError, Longhands, ShorthandId};
use crate::parser::ParserContext;
use crate::values::Value;
use crate::values::grid::{
    TemplateAreas, area_strings, default_end_line, is_track_size, parse_grid_line,
    parse_implicit_tracks, parse_track_list,
};

fn split_slashes(components: &[Value]) -> Vec<&[Value]> {
    components.split(|c| c.is_slash()).collect()
}

fn is_repeat(value: &Value) -> bool {
    matches!(*value, Value::Function(ref function) if function.name == "repeat")
}

fn none() -> Value {
    Value::ident("none")
}

fn auto() -> Value {
    Value::ident("auto")
}

fn parse_placement(
    shorthand: ShorthandId,
    components: &[Value],
) -> Result<Longhands, ExpansionError> {
    let invalid = |reason| ExpansionError::invalid(shorthand, reason);
    let lines = split_slashes(components)
        .into_iter()
        .map(parse_grid_line)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| invalid("invalid grid line"))?;

    match shorthand {
        ShorthandId::GridRow | ShorthandId::GridColumn => match *lines {
            [ref start] => Ok(Longhands::from_vec(vec![start.clone(), default_end_line(start)])),
            [ref start, ref end] => Ok(Longhands::from_vec(vec![start.clone(), end.clone()])),
            _ => Err(invalid("expected one or two grid lines")),
        },
        _ => {
            if lines.len() > 4 {
                return Err(invalid("expected one to four grid lines"));
            }
            // row-start / column-start / row-end / column-end
            let row_start = lines[0].clone();
            let column_start = lines
                .get(1)
                .cloned()
                .unwrap_or_else(|| default_end_line(&row_start));
            let row_end = lines
                .get(2)
                .cloned()
                .unwrap_or_else(|| default_end_line(&row_start));
            let column_end = lines
                .get(3)
                .cloned()
                .unwrap_or_else(|| default_end_line(&column_start));
            Ok(Longhands::from_vec(vec![
                row_start,
                column_start,
                row_end,
                column_end,
            ]))
        },
    }
}

fn placement_to_shorthand_value(shorthand: ShorthandId, longhands: &[&Value]) -> Option<Value> {
    let mut lines: Vec<&Value> = longhands.to_vec();
    if shorthand == ShorthandId::GridArea {
        // Drop trailing lines equal to what omitting them would produce.
        let [row_start, column_start, row_end, column_end] = *longhands else {
            return None;
        };
        if *column_end == default_end_line(column_start) {
            lines.pop();
            if *row_end == default_end_line(row_start) {
                lines.pop();
                if *column_start == default_end_line(row_start) {
                    lines.pop();
                }
            }
        }
    } else if *lines[1] == default_end_line(lines[0]) {
        lines.pop();
    }

    let mut components = vec![];
    for (index, line) in lines.into_iter().enumerate() {
        if index > 0 {
            components.push(Value::Delim('/'));
        }
        components.extend(line.components().iter().cloned());
    }
    Some(Value::list(components))
}

/// Parses the `grid-template` forms, returning the rows, columns and areas.
fn parse_template(
    shorthand: ShorthandId,
    context: &ParserContext,
    components: &[Value],
) -> Result<[Value; 3], ExpansionError> {
    let invalid = |reason| ExpansionError::invalid(shorthand, reason);
    if let [ref single] = *components {
        if single.is_keyword("none") {
            return Ok([none(), none(), none()]);
        }
    }
    let parts = split_slashes(components);
    if parts.len() > 2 {
        return Err(invalid("more than one `/`"));
    }

    let rows_part = parts[0];
    if !rows_part.iter().any(|c| matches!(*c, Value::String(..))) {
        let [rows, columns] = *parts else {
            return Err(invalid("expected rows and columns"));
        };
        let rows = parse_track_list(rows, context).ok_or_else(|| invalid("invalid rows"))?;
        let columns =
            parse_track_list(columns, context).ok_or_else(|| invalid("invalid columns"))?;
        return Ok([rows, columns, none()]);
    }

    // Rows interleaved with area strings.
    let mut rows: Vec<Value> = vec![];
    let mut strings: Vec<Value> = vec![];
    let mut i = 0;
    while i < rows_part.len() {
        match rows_part[i] {
            Value::LineNames(ref names) => {
                if let Some(Value::LineNames(previous)) = rows.last_mut() {
                    previous.extend(names.iter().cloned());
                } else {
                    rows.push(rows_part[i].clone());
                }
            },
            Value::String(..) => {
                strings.push(rows_part[i].clone());
                match rows_part.get(i + 1) {
                    Some(size) if !matches!(*size, Value::String(..) | Value::LineNames(..)) => {
                        if !is_track_size(size, context) {
                            return Err(invalid("invalid row size"));
                        }
                        rows.push(size.clone());
                        i += 1;
                    },
                    _ => rows.push(auto()),
                }
            },
            _ => return Err(invalid("expected an area string")),
        }
        i += 1;
    }
    let areas = Value::list(strings);
    let valid = area_strings(&areas).and_then(|rows| TemplateAreas::from_strings(&rows));
    if valid.is_none() {
        return Err(invalid("invalid template areas"));
    }

    let columns = match parts.get(1) {
        Some(columns) => parse_track_list(columns, context)
            .filter(|columns| !columns.is_keyword("none"))
            .ok_or_else(|| invalid("invalid columns"))?,
        None => none(),
    };
    Ok([Value::list(rows), columns, areas])
}

fn template_to_shorthand_value(rows: &Value, columns: &Value, areas: &Value) -> Option<Value> {
    if areas.is_keyword("none") {
        if rows.is_keyword("none") && columns.is_keyword("none") {
            return Some(none());
        }
        let mut components = rows.components().to_vec();
        components.push(Value::Delim('/'));
        components.extend(columns.components().iter().cloned());
        return Some(Value::List(components));
    }

    let strings = areas.components();
    let tracks = rows
        .components()
        .iter()
        .filter(|c| !matches!(**c, Value::LineNames(..)));
    if rows.is_keyword("none") ||
        tracks.clone().count() != strings.len() ||
        tracks.clone().any(is_repeat)
    {
        return None;
    }

    let mut components = vec![];
    let mut strings = strings.iter();
    for component in rows.components() {
        if let Value::LineNames(..) = *component {
            components.push(component.clone());
            continue;
        }
        components.push(strings.next()?.clone());
        if !component.is_keyword("auto") {
            components.push(component.clone());
        }
    }
    if !columns.is_keyword("none") {
        components.push(Value::Delim('/'));
        components.extend(columns.components().iter().cloned());
    }
    Some(Value::list(components))
}

/// The canonical form of a `grid-auto-flow` value, with the direction
/// first.
pub fn normalize_auto_flow(value: &Value) -> Option<Value> {
    let components = value.components();
    let dense = components.iter().filter(|c| c.is_keyword("dense")).count();
    let directions: Vec<&Value> = components
        .iter()
        .filter(|c| c.is_one_of(&["row", "column"]))
        .collect();
    if dense > 1 || directions.len() > 1 || dense + directions.len() != components.len() {
        return None;
    }
    if components.is_empty() {
        return None;
    }
    let direction = directions.first().map_or_else(|| Value::ident("row"), |d| (*d).clone());
    Some(if dense == 1 {
        Value::List(vec![direction, Value::ident("dense")])
    } else {
        direction
    })
}

/// Splits an `auto-flow [dense]` side of `grid` into the flow keywords and
/// the implicit track sizes.
fn split_auto_flow(part: &[Value]) -> Option<(bool, &[Value])> {
    let keywords = part
        .iter()
        .take(2)
        .take_while(|c| c.is_one_of(&["auto-flow", "dense"]))
        .count();
    let flow = &part[..keywords];
    if !flow.iter().any(|c| c.is_keyword("auto-flow")) {
        return None;
    }
    let dense = flow.iter().filter(|c| c.is_keyword("dense")).count();
    if dense > 1 || flow.iter().filter(|c| c.is_keyword("auto-flow")).count() > 1 {
        return None;
    }
    Some((dense == 1, &part[keywords..]))
}

fn auto_flow_value(direction: &str, dense: bool) -> Value {
    if dense {
        Value::List(vec![Value::ident(direction), Value::ident("dense")])
    } else {
        Value::ident(direction)
    }
}

fn parse_grid(context: &ParserContext, components: &[Value]) -> Result<Longhands, ExpansionError> {
    let invalid = |reason| ExpansionError::invalid(ShorthandId::Grid, reason);
    let parts = split_slashes(components);
    let implicit = |tracks: &[Value]| {
        if tracks.is_empty() {
            return Ok(auto());
        }
        parse_implicit_tracks(tracks, context).ok_or_else(|| invalid("invalid implicit tracks"))
    };

    if let [left, right] = *parts {
        if let Some((dense, tracks)) = split_auto_flow(left) {
            let columns =
                parse_track_list(right, context).ok_or_else(|| invalid("invalid columns"))?;
            return Ok(Longhands::from_vec(vec![
                none(),
                columns,
                none(),
                implicit(tracks)?,
                auto(),
                auto_flow_value("row", dense),
            ]));
        }
        if let Some((dense, tracks)) = split_auto_flow(right) {
            let rows = parse_track_list(left, context).ok_or_else(|| invalid("invalid rows"))?;
            return Ok(Longhands::from_vec(vec![
                rows,
                none(),
                none(),
                auto(),
                implicit(tracks)?,
                auto_flow_value("column", dense),
            ]));
        }
    }

    let [rows, columns, areas] = parse_template(ShorthandId::Grid, context, components)?;
    Ok(Longhands::from_vec(vec![
        rows,
        columns,
        areas,
        auto(),
        auto(),
        Value::ident("row"),
    ]))
}

fn grid_to_shorthand_value(longhands: &[&Value]) -> Option<Value> {
    let [rows, columns, areas, auto_rows, auto_columns, flow] = *longhands else {
        return None;
    };
    let direction = flow.components().first()?;
    let dense = flow.components().iter().any(|c| c.is_keyword("dense"));
    let no_areas = areas.is_keyword("none");

    if auto_rows.is_keyword("auto") && auto_columns.is_keyword("auto") && flow.is_keyword("row") {
        return template_to_shorthand_value(rows, columns, areas);
    }

    let mut flow_components = vec![Value::ident("auto-flow")];
    if dense {
        flow_components.push(Value::ident("dense"));
    }
    let mut components = vec![];
    if direction.is_keyword("row") &&
        rows.is_keyword("none") &&
        no_areas &&
        auto_columns.is_keyword("auto")
    {
        components.extend(flow_components);
        if !auto_rows.is_keyword("auto") {
            components.extend(auto_rows.components().iter().cloned());
        }
        components.push(Value::Delim('/'));
        components.extend(columns.components().iter().cloned());
    } else if direction.is_keyword("column") &&
        columns.is_keyword("none") &&
        no_areas &&
        auto_rows.is_keyword("auto")
    {
        components.extend(rows.components().iter().cloned());
        components.push(Value::Delim('/'));
        components.extend(flow_components);
        if !auto_columns.is_keyword("auto") {
            components.extend(auto_columns.components().iter().cloned());
        }
    } else {
        return None;
    }
    Some(Value::List(components))
}

/// Expands a grid shorthand.
pub fn parse_value(
    shorthand: ShorthandId,
    context: &ParserContext,
    value: &Value,
) -> Result<Longhands, ExpansionError> {
    if let Value::Layers(..) = *value {
        return Err(ExpansionError::invalid(shorthand, "unexpected comma"));
    }
    let components = value.components();
    match shorthand {
        ShorthandId::GridRow | ShorthandId::GridColumn | ShorthandId::GridArea => {
            parse_placement(shorthand, components)
        },
        ShorthandId::GridTemplate => {
            Ok(Longhands::from_iter(parse_template(shorthand, context, components)?))
        },
        ShorthandId::Grid => parse_grid(context, components),
        _ => Err(ExpansionError::invalid(shorthand, "not a grid shorthand")),
    }
}

/// Joins longhand values back into a grid shorthand value.
pub fn to_shorthand_value(shorthand: ShorthandId, longhands: &[&Value]) -> Option<Value> {
    match shorthand {
        ShorthandId::GridRow | ShorthandId::GridColumn | ShorthandId::GridArea => {
            placement_to_shorthand_value(shorthand, longhands)
        },
        ShorthandId::GridTemplate => match *longhands {
            [rows, columns, areas] => template_to_shorthand_value(rows, columns, areas),
            _ => None,
        },
        ShorthandId::Grid => grid_to_shorthand_value(longhands),
        _ => None,
    }
}
