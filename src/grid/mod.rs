// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxdraw-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxdraw and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The grid engine: a buffer of text lines edited in place by overlaying small blocks.
//!
//! Rows are never normalized up front. A row is padded with spaces only as far as a write
//! needs, and its newline marker (`\n`, `\r\n` or none) survives every edit verbatim. Rows an
//! operation does not touch are passed through unchanged.

pub mod line;
pub mod merge;
pub mod tile;

pub use line::{char_at, char_at_or, pad_to, split_lines, split_newline, write_at};
pub use merge::{block_width, merge_block, visible_rows, MergePolicy};
pub use tile::{tile, tile_block, tile_block_rows, tile_index, tile_row, tile_window};
