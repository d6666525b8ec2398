// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxdraw-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxdraw and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// A `(y, x)` cell coordinate in buffer space.
///
/// Coordinates are signed because callers may hand over anything; nothing is clamped until an
/// operation touches the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub y: i64,
    pub x: i64,
}

impl Point {
    pub fn new(y: i64, x: i64) -> Self {
        Self { y, x }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.y, self.x)
    }
}

/// A normalized rectangle: top-left corner plus a non-zero extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub top: i64,
    pub left: i64,
    pub height: usize,
    pub width: usize,
}

impl Rect {
    /// Builds the rectangle spanned by two corners given in any order.
    ///
    /// Both corners are inclusive, so coinciding points yield a 1x1 rectangle.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            top: a.y.min(b.y),
            left: a.x.min(b.x),
            height: extent(a.y, b.y),
            width: extent(a.x, b.x),
        }
    }

    /// Inclusive bottom row.
    pub fn bottom(&self) -> i64 {
        self.top + to_i64(self.height) - 1
    }

    /// Inclusive right column.
    pub fn right(&self) -> i64 {
        self.left + to_i64(self.width) - 1
    }

    /// Shrinks the rectangle by `dy` rows and `dx` columns on every side.
    ///
    /// Returns `None` when nothing is left.
    pub fn inset(&self, dy: usize, dx: usize) -> Option<Self> {
        let height = self.height.checked_sub(dy.checked_mul(2)?)?;
        let width = self.width.checked_sub(dx.checked_mul(2)?)?;
        if height == 0 || width == 0 {
            return None;
        }

        Some(Self {
            top: self.top + to_i64(dy),
            left: self.left + to_i64(dx),
            height,
            width,
        })
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}@({},{})", self.width, self.height, self.top, self.left)
    }
}

/// Inclusive edges of a box found in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxBounds {
    pub top: i64,
    pub left: i64,
    pub bottom: i64,
    pub right: i64,
}

impl BoxBounds {
    /// The bounds one cell inside the border on each side.
    ///
    /// Boxes one or two cells thick collapse onto a single row/column instead of inverting.
    pub fn inner(&self) -> Self {
        let top = (self.top + 1).min(self.bottom);
        let left = (self.left + 1).min(self.right);
        Self {
            top,
            left,
            bottom: (self.bottom - 1).max(top),
            right: (self.right - 1).max(left),
        }
    }
}

impl From<Rect> for BoxBounds {
    fn from(rect: Rect) -> Self {
        Self {
            top: rect.top,
            left: rect.left,
            bottom: rect.bottom(),
            right: rect.right(),
        }
    }
}

fn extent(a: i64, b: i64) -> usize {
    usize::try_from(a.abs_diff(b)).map_or(usize::MAX, |d| d.saturating_add(1))
}

pub(crate) fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
