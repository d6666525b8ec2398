// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxdraw-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxdraw and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::ops::Range;

/// Which of `[first, middle, last]` sits at `offset` in a pattern stretched to `len`.
///
/// The middle element is repeated at least once before truncating, so a two-element result
/// keeps `first, middle` rather than `first, last`.
pub fn tile_index(offset: usize, len: usize) -> usize {
    if offset == 0 {
        0
    } else if len >= 3 && offset == len - 1 {
        2
    } else {
        1
    }
}

/// Stretches a `[first, middle, last]` pattern to exactly `len` elements.
pub fn tile<T: Clone>(pattern: &[T; 3], len: usize) -> Vec<T> {
    tile_window(pattern, len, 0..len)
}

/// The `window` slice of `tile(pattern, len)`, built without materializing the rest.
pub fn tile_window<T: Clone>(pattern: &[T; 3], len: usize, window: Range<usize>) -> Vec<T> {
    let window = window.start.min(len)..window.end.min(len);
    window
        .map(|offset| pattern[tile_index(offset, len)].clone())
        .collect()
}

pub fn tile_row(pattern: &[char; 3], width: usize) -> String {
    tile(pattern, width).into_iter().collect()
}

/// Tiles a 3x3 template to a `height` x `width` block, rows first, then columns.
pub fn tile_block(template: &[[char; 3]; 3], height: usize, width: usize) -> Vec<String> {
    tile_block_rows(template, height, width, 0..height)
}

/// The `rows` window of [`tile_block`].
pub fn tile_block_rows(
    template: &[[char; 3]; 3],
    height: usize,
    width: usize,
    rows: Range<usize>,
) -> Vec<String> {
    let template_rows = [
        tile_row(&template[0], width),
        tile_row(&template[1], width),
        tile_row(&template[2], width),
    ];
    tile_window(&template_rows, height, rows)
}
