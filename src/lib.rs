// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxdraw-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxdraw and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boxdraw: draws and selects ASCII-art boxes and arrows inside plain text buffers.
//!
//! The buffer is a list of lines, each keeping its own newline marker. Every operation takes
//! the lines plus two selection corners and returns a new list of lines (or, for selections,
//! a single coordinate string). [`command::CommandTable`] maps editor command tokens such as
//! `+O` or `++>` onto those operations.

pub mod command;
pub mod grid;
pub mod layout;
pub mod model;
pub mod ops;
