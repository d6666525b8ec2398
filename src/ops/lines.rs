// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxdraw-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxdraw and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use crate::grid::{char_at_or, merge_block, tile_row, tile_window, visible_rows, MergePolicy};
use crate::model::arrow::{is_stroke, JUNCTION};
use crate::model::rect::to_i64;
use crate::model::{ArrowPattern, Point, Rect};

/// Which axis an elbowed connector runs along first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineOrder {
    HorizontalFirst,
    VerticalFirst,
}

impl LineOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HorizontalFirst => "hv",
            Self::VerticalFirst => "vh",
        }
    }
}

impl fmt::Display for LineOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLineOrderError;

impl fmt::Display for ParseLineOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid line order (expected `hv` or `vh`)")
    }
}

impl std::error::Error for ParseLineOrderError {}

impl FromStr for LineOrder {
    type Err = ParseLineOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hv" => Ok(Self::HorizontalFirst),
            "vh" => Ok(Self::VerticalFirst),
            _ => Err(ParseLineOrderError),
        }
    }
}

/// Snaps the start glyph to `+` when the connector starts on an existing stroke.
pub fn arrow_start(lines: &[String], from: Point, pattern: ArrowPattern) -> ArrowPattern {
    if is_stroke(char_at_or(lines, from.y, from.x, ' ')) {
        pattern.with_start(JUNCTION)
    } else {
        pattern
    }
}

/// Draws a connector from `from` to `to`, horizontal run first.
pub fn draw_line_hv(
    lines: &[String],
    from: Point,
    to: Point,
    pattern: ArrowPattern,
) -> Vec<String> {
    draw_line(lines, from, to, pattern, LineOrder::HorizontalFirst)
}

/// Draws a connector from `from` to `to`, vertical run first.
pub fn draw_line_vh(
    lines: &[String],
    from: Point,
    to: Point,
    pattern: ArrowPattern,
) -> Vec<String> {
    draw_line(lines, from, to, pattern, LineOrder::VerticalFirst)
}

/// Draws an elbowed connector from `from` to `to`.
///
/// The pattern is written left-to-right; each run reverses it when it travels against that
/// direction (or upwards), so the end glyph always sits at `to`. When both runs exist they meet
/// in a `+` at the elbow. Runs are merged with [`MergePolicy::Overwrite`], so crossing existing
/// strokes leaves junctions behind.
pub fn draw_line(
    lines: &[String],
    from: Point,
    to: Point,
    pattern: ArrowPattern,
    order: LineOrder,
) -> Vec<String> {
    let pattern = arrow_start(lines, from, pattern);
    let rect = Rect::from_corners(from, to);
    if rect.height == 1 && rect.width == 1 {
        return lines.to_vec();
    }

    tracing::debug!(%from, %to, %pattern, %order, "draw line");

    let elbow = rect.height > 1 && rect.width > 1;
    let (first, second) = if elbow {
        (pattern.with_end(JUNCTION), pattern.with_start(JUNCTION))
    } else {
        (pattern, pattern)
    };

    match order {
        LineOrder::HorizontalFirst => {
            let corner = Point::new(from.y, to.x);
            let lines = draw_horizontal(lines, from, corner, first);
            draw_vertical(&lines, corner, to, second)
        }
        LineOrder::VerticalFirst => {
            let corner = Point::new(to.y, from.x);
            let lines = draw_vertical(lines, from, corner, first);
            draw_horizontal(&lines, corner, to, second)
        }
    }
}

fn draw_horizontal(lines: &[String], from: Point, to: Point, pattern: ArrowPattern) -> Vec<String> {
    let rect = Rect::from_corners(from, to);
    if rect.width < 2 {
        return lines.to_vec();
    }

    let pattern = if to.x > from.x {
        pattern
    } else {
        pattern.reversed()
    };
    let row = tile_row(pattern.glyphs(), rect.width);
    merge_block(lines, rect.top, rect.left, &[row], MergePolicy::Overwrite)
}

fn draw_vertical(lines: &[String], from: Point, to: Point, pattern: ArrowPattern) -> Vec<String> {
    let rect = Rect::from_corners(from, to);
    if rect.height < 2 {
        return lines.to_vec();
    }

    let pattern = if to.y > from.y {
        pattern
    } else {
        pattern.reversed()
    };
    let rows = visible_rows(lines, rect.top, rect.height);
    let top = rect.top + to_i64(rows.start);
    let column = tile_window(pattern.rotated().glyphs(), rect.height, rows)
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();
    merge_block(lines, top, rect.left, &column, MergePolicy::Overwrite)
}
