// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxdraw-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxdraw and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Splits a line into its body and trailing newline marker.
pub fn split_newline(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, &line[body.len()..])
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, &line[body.len()..])
    } else {
        (line, "")
    }
}

/// Splits a buffer into lines that keep their newline markers.
///
/// Concatenating the result gives back `text` exactly. A trailing newline does not start an
/// extra empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0;
    for end in memchr::memchr_iter(b'\n', text.as_bytes()) {
        lines.push(text[start..=end].to_owned());
        start = end + 1;
    }
    if start < text.len() {
        lines.push(text[start..].to_owned());
    }
    lines
}

/// Pads the body of `line` with spaces to at least `width` cells. Never truncates.
pub fn pad_to(line: &str, width: usize) -> String {
    overlay_at(line, width, &[], |existing, _| existing)
}

/// Replaces the cells `pos..pos + len(text)` with `text`, padding the line first if needed.
pub fn write_at(line: &str, pos: usize, text: &str) -> String {
    let cells = text.chars().collect::<Vec<_>>();
    overlay_at(line, pos, &cells, |_, new| new)
}

/// Combines `overlay` into `line` starting at cell `pos`, one cell at a time.
///
/// `combine` receives the existing cell (a space when the line had to be padded) and the
/// overlay cell. Cells after the overlay and the newline marker are kept.
pub(crate) fn overlay_at<F>(line: &str, pos: usize, overlay: &[char], mut combine: F) -> String
where
    F: FnMut(char, char) -> char,
{
    let (body, marker) = split_newline(line);
    let end = pos + overlay.len();

    // The only place a row grows: short bodies are padded with spaces up to `end`.
    let mut cells = body.chars().collect::<Vec<_>>();
    if cells.len() < end {
        cells.resize(end, ' ');
    }

    for (cell, &new) in cells[pos..end].iter_mut().zip(overlay) {
        *cell = combine(*cell, new);
    }

    let mut out = String::with_capacity(line.len() + overlay.len());
    out.extend(cells);
    out.push_str(marker);
    out
}

/// Returns the character at `(y, x)`, or `None` if either coordinate is outside the buffer.
///
/// A row shorter than `x` (including its newline marker, which is not a cell) counts as out of
/// range.
pub fn char_at(lines: &[String], y: i64, x: i64) -> Option<char> {
    let y = usize::try_from(y).ok()?;
    let x = usize::try_from(x).ok()?;
    let (body, _) = split_newline(lines.get(y)?);
    body.chars().nth(x)
}

/// [`char_at`] with a fallback for out-of-range positions.
pub fn char_at_or(lines: &[String], y: i64, x: i64, default: char) -> char {
    char_at(lines, y, x).unwrap_or(default)
}

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}
