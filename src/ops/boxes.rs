// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxdraw-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxdraw and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::grid::{merge_block, tile_block_rows, visible_rows, MergePolicy};
use crate::layout::wrap_and_align_rows;
use crate::model::rect::to_i64;
use crate::model::{HAlign, Rect, VAlign};

const BOX_TEMPLATE: [[char; 3]; 3] = [['+', '-', '+'], ['|', ' ', '|'], ['+', '-', '+']];

/// Draws a `+-+` bordered box over `rect` and clears its interior.
///
/// Rectangles smaller than 3x3 have no room for corners plus interior and are left alone.
pub fn draw_box(lines: &[String], rect: Rect) -> Vec<String> {
    if rect.height < 3 || rect.width < 3 {
        tracing::debug!(%rect, "box too small to draw");
        return lines.to_vec();
    }

    tracing::debug!(%rect, "draw box");
    let rows = visible_rows(lines, rect.top, rect.height);
    let top = rect.top + to_i64(rows.start);
    let block = tile_block_rows(&BOX_TEMPLATE, rect.height, rect.width, rows);
    merge_block(lines, top, rect.left, &block, MergePolicy::Replace)
}

/// Clears `rect` and lays `text` out inside it.
pub fn fill_box(
    lines: &[String],
    rect: Rect,
    valign: VAlign,
    halign: HAlign,
    text: &str,
) -> Vec<String> {
    tracing::debug!(%rect, %valign, %halign, "fill box");
    let rows = visible_rows(lines, rect.top, rect.height);
    let top = rect.top + to_i64(rows.start);
    let block = wrap_and_align_rows(text, rect.height, rect.width, valign, halign, rows);
    merge_block(lines, top, rect.left, &block, MergePolicy::Replace)
}

/// Draws a box and fills its interior with `text`, keeping one blank column inside each side
/// of the border.
pub fn draw_box_with_label(
    lines: &[String],
    rect: Rect,
    valign: VAlign,
    halign: HAlign,
    text: &str,
) -> Vec<String> {
    let lines = draw_box(lines, rect);
    match rect.inset(1, 2) {
        Some(inner) => fill_box(&lines, inner, valign, halign, text),
        None => {
            tracing::debug!(%rect, "no room for a label");
            lines
        }
    }
}
