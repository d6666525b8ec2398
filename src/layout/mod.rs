// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxdraw-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxdraw and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout of free text inside a rectangle.
//!
//! Text is word-wrapped to the rectangle width and then aligned line by line and as a block.

pub mod text;

pub use text::{
    align_block, align_block_rows, align_line, wrap_and_align, wrap_and_align_rows, wrap_text,
};
