// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxdraw-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxdraw and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core value types shared by the grid engine and the drawing operations.
//!
//! Everything here is transient: values are built from command arguments, consumed by one
//! operation, and dropped.

pub mod align;
pub mod arrow;
pub mod rect;

pub use align::{HAlign, ParseAlignError, VAlign};
pub use arrow::{ArrowPattern, ArrowPatternError};
pub use rect::{BoxBounds, Point, Rect};
