// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxdraw-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxdraw and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Drawing and selection operations over a text buffer.
//!
//! Every operation is pure: it takes the buffer as a slice of lines and returns the edited
//! buffer. Lines the operation does not touch are returned unchanged.

pub mod boxes;
pub mod lines;
pub mod select;

pub use boxes::{draw_box, draw_box_with_label, fill_box};
pub use lines::{arrow_start, draw_line, draw_line_hv, draw_line_vh, LineOrder, ParseLineOrderError};
pub use select::{find_box, format_bounds, select_inner_box, select_outer_box};
