// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxdraw-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxdraw and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::grid::char_at;
use crate::model::arrow::{JUNCTION, STROKE_HORIZONTAL, STROKE_VERTICAL};
use crate::model::{BoxBounds, Point};

/// Finds the box enclosing the selection `from`..`to` by walking outwards along its border.
///
/// - left: along row `from.y`, leftwards from `from.x`, to the first `|` or `+`
/// - right: along row `to.y`, rightwards from `to.x`, to the first `|` or `+`
/// - top: along the left border column, upwards from `from.y`, to the first `-` or `+`
/// - bottom: along the right border column, downwards from `to.y`, to the first `-` or `+`
///
/// Each walk includes its starting cell. A walk that leaves the buffer without meeting a border
/// stops on the first position outside it, so the reported edge is `-1`, the row length, or
/// the line count.
pub fn find_box(lines: &[String], from: Point, to: Point) -> BoxBounds {
    let left = scan(lines, from, (0, -1), is_vertical_border).x;
    let right = scan(lines, to, (0, 1), is_vertical_border).x;
    let top = scan(lines, Point::new(from.y, left), (-1, 0), is_horizontal_border).y;
    let bottom = scan(lines, Point::new(to.y, right), (1, 0), is_horizontal_border).y;

    let bounds = BoxBounds {
        top,
        left,
        bottom,
        right,
    };
    tracing::debug!(%from, %to, ?bounds, "find box");
    bounds
}

/// The whole box under the selection, border included.
pub fn select_outer_box(lines: &[String], from: Point, to: Point) -> Vec<String> {
    vec![format_bounds(find_box(lines, from, to))]
}

/// The interior of the box under the selection.
pub fn select_inner_box(lines: &[String], from: Point, to: Point) -> Vec<String> {
    vec![format_bounds(find_box(lines, from, to).inner())]
}

/// Formats bounds as `top,left,bottom,right`.
pub fn format_bounds(bounds: BoxBounds) -> String {
    let mut buf = itoa::Buffer::new();
    let mut out = String::with_capacity(24);
    for (idx, value) in [bounds.top, bounds.left, bounds.bottom, bounds.right]
        .into_iter()
        .enumerate()
    {
        if idx > 0 {
            out.push(',');
        }
        out.push_str(buf.format(value));
    }
    out
}

fn is_vertical_border(ch: char) -> bool {
    matches!(ch, STROKE_VERTICAL | JUNCTION)
}

fn is_horizontal_border(ch: char) -> bool {
    matches!(ch, STROKE_HORIZONTAL | JUNCTION)
}

fn scan(
    lines: &[String],
    start: Point,
    (dy, dx): (i64, i64),
    is_border: fn(char) -> bool,
) -> Point {
    let mut at = start;
    loop {
        match char_at(lines, at.y, at.x) {
            Some(ch) if is_border(ch) => return at,
            Some(_) => {
                at = Point::new(at.y + dy, at.x + dx);
            }
            None => {
                tracing::warn!(%start, stopped_at = %at, "no border before the edge of the buffer");
                return at;
            }
        }
    }
}
