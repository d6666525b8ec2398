// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxdraw-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxdraw and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;
use std::ops::Range;

use textwrap::{Options, WordSeparator};

use crate::grid::line::text_len;
use crate::model::{HAlign, VAlign};

/// Wraps, aligns and places `text` in a `height` x `width` block.
///
/// Every returned row is exactly `width` cells, and there are exactly `height` rows. A zero
/// dimension yields an empty block, which merges as a no-op.
pub fn wrap_and_align(
    text: &str,
    height: usize,
    width: usize,
    valign: VAlign,
    halign: HAlign,
) -> Vec<String> {
    wrap_and_align_rows(text, height, width, valign, halign, 0..height)
}

/// The `rows` window of [`wrap_and_align`]. Rows outside the window are never built.
pub fn wrap_and_align_rows(
    text: &str,
    height: usize,
    width: usize,
    valign: VAlign,
    halign: HAlign,
    rows: Range<usize>,
) -> Vec<String> {
    if height == 0 || width == 0 {
        return Vec::new();
    }

    let lines = wrap_text(text, width)
        .iter()
        .map(|line| align_line(line, width, halign))
        .collect::<Vec<_>>();

    tracing::trace!(
        wrapped = lines.len(),
        height,
        width,
        valign = valign.as_str(),
        halign = halign.as_str(),
        "layout text"
    );

    align_block_rows(lines, height, width, valign, rows)
}

/// Greedy word wrap at `width` columns. Words are never split; a word wider than `width` gets a
/// line of its own.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let text = text
        .chars()
        .map(|ch| if matches!(ch, '\t' | '\n' | '\r') { ' ' } else { ch })
        .collect::<String>();
    if text.trim().is_empty() || width == 0 {
        return Vec::new();
    }

    let options = Options::new(width)
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace);

    textwrap::wrap(&text, options)
        .into_iter()
        .map(Cow::into_owned)
        .collect()
}

/// Truncates `line` to `width` cells, then pads it to exactly `width`.
///
/// Centered lines put the odd padding cell on the right.
pub fn align_line(line: &str, width: usize, halign: HAlign) -> String {
    let line = line.chars().take(width).collect::<String>();
    let deficit = width - text_len(&line);
    let (before, after) = match halign {
        HAlign::Left => (0, deficit),
        HAlign::Right => (deficit, 0),
        HAlign::Center => (deficit / 2, deficit - deficit / 2),
    };

    let mut out = String::with_capacity(line.len() + deficit);
    out.extend(std::iter::repeat(' ').take(before));
    out.push_str(&line);
    out.extend(std::iter::repeat(' ').take(after));
    out
}

/// Keeps the first `height` lines and pads the block with blank rows to exactly `height`.
pub fn align_block(lines: Vec<String>, height: usize, width: usize, valign: VAlign) -> Vec<String> {
    align_block_rows(lines, height, width, valign, 0..height)
}

/// The `rows` window of [`align_block`].
pub fn align_block_rows(
    mut lines: Vec<String>,
    height: usize,
    width: usize,
    valign: VAlign,
    rows: Range<usize>,
) -> Vec<String> {
    lines.truncate(height);
    let deficit = height - lines.len();
    let above = match valign {
        VAlign::Top => 0,
        VAlign::Bottom => deficit,
        VAlign::Middle => deficit / 2,
    };

    let blank = " ".repeat(width);
    let rows = rows.start.min(height)..rows.end.min(height);
    rows.map(|row| {
        row.checked_sub(above)
            .and_then(|idx| lines.get(idx))
            .unwrap_or(&blank)
            .clone()
    })
    .collect()
}
