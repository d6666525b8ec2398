// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxdraw-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxdraw and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::ops::Range;

use crate::model::arrow::{JUNCTION, STROKE_HORIZONTAL, STROKE_VERTICAL};
use crate::model::rect::to_i64;

use super::line::{overlay_at, text_len};

/// How an overlay cell combines with the character already in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergePolicy {
    /// The overlay always wins, blanks included.
    Replace,
    /// Blank overlay cells are transparent and crossing strokes merge into `+`.
    Overwrite,
}

impl MergePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Overwrite => "overwrite",
        }
    }

    pub fn merge_cell(self, existing: char, overlay: char) -> char {
        match self {
            Self::Replace => overlay,
            Self::Overwrite => {
                if overlay == ' ' {
                    existing
                } else if (joins_horizontally(overlay) && joins_vertically(existing))
                    || (joins_vertically(overlay) && joins_horizontally(existing))
                {
                    JUNCTION
                } else {
                    overlay
                }
            }
        }
    }

    fn prepare_row(self, row: &str) -> &str {
        match self {
            Self::Replace => row,
            Self::Overwrite => row.trim_end_matches(' '),
        }
    }
}

fn joins_horizontally(ch: char) -> bool {
    matches!(ch, STROKE_HORIZONTAL | JUNCTION)
}

fn joins_vertically(ch: char) -> bool {
    matches!(ch, STROKE_VERTICAL | JUNCTION)
}

/// Width of a (possibly ragged) block: its longest row.
pub fn block_width(block: &[String]) -> usize {
    block.iter().map(|row| text_len(row)).max().unwrap_or(0)
}

/// Offsets into a `height`-row block placed at `top` whose rows land on existing lines.
///
/// Callers build only these rows of a block; [`merge_block`] would drop the others anyway.
pub fn visible_rows(lines: &[String], top: i64, height: usize) -> Range<usize> {
    let count = i128::try_from(lines.len()).unwrap_or(i128::MAX);
    let top = i128::from(top);
    let height = i128::try_from(height).unwrap_or(i128::MAX);

    let start = (-top).clamp(0, height);
    let end = (count - top).clamp(start, height);
    // Both ends lie within `0..=height`, so they fit in a usize.
    let to_usize = |n: i128| usize::try_from(n).unwrap_or(usize::MAX);
    to_usize(start)..to_usize(end)
}

/// Overlays `block` onto `lines` with its top-left cell at `(top, left)`.
///
/// Only rows that already exist are touched; the block is never allowed to grow the buffer
/// downwards. Cells that would land left of column 0 are dropped.
pub fn merge_block(
    lines: &[String],
    top: i64,
    left: i64,
    block: &[String],
    policy: MergePolicy,
) -> Vec<String> {
    if block.is_empty() || block_width(block) == 0 {
        return lines.to_vec();
    }

    tracing::trace!(
        top,
        left,
        height = block.len(),
        width = block_width(block),
        policy = policy.as_str(),
        "merge block"
    );

    lines
        .iter()
        .enumerate()
        .map(|(y, line)| match block_row(block, top, y) {
            Some(row) => merge_row(line, left, row, policy),
            None => line.clone(),
        })
        .collect()
}

fn block_row(block: &[String], top: i64, y: usize) -> Option<&str> {
    let offset = usize::try_from(to_i64(y) - top).ok()?;
    block.get(offset).map(String::as_str)
}

fn merge_row(line: &str, left: i64, row: &str, policy: MergePolicy) -> String {
    let row = policy.prepare_row(row);
    let (pos, skip) = match usize::try_from(left) {
        Ok(pos) => (pos, 0),
        Err(_) => (0, usize::try_from(left.unsigned_abs()).unwrap_or(usize::MAX)),
    };

    let cells = row.chars().skip(skip).collect::<Vec<_>>();
    if cells.is_empty() {
        return line.to_owned();
    }

    overlay_at(line, pos, &cells, |existing, new| {
        policy.merge_cell(existing, new)
    })
}
