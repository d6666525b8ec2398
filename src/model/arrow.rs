// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxdraw-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxdraw and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

/// Horizontal glyph for a run of a connector.
pub const STROKE_HORIZONTAL: char = '-';
/// Vertical glyph for a run of a connector.
pub const STROKE_VERTICAL: char = '|';
/// Corner and crossing glyph.
pub const JUNCTION: char = '+';

/// Returns `true` for `-`, `|` and `+`.
pub fn is_stroke(ch: char) -> bool {
    matches!(ch, STROKE_HORIZONTAL | STROKE_VERTICAL | JUNCTION)
}

/// A three-glyph connector template: start, shaft fill, end.
///
/// Patterns are written for left-to-right drawing (`-->`, `o->`, `<->`). Direction and
/// orientation variants are derived on demand with [`ArrowPattern::reversed`] and
/// [`ArrowPattern::rotated`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrowPattern {
    glyphs: [char; 3],
}

impl ArrowPattern {
    pub const ARROW: Self = Self::from_glyphs(['-', '-', '>']);
    pub const BACK_ARROW: Self = Self::from_glyphs(['<', '-', '-']);
    pub const BIDIRECTIONAL: Self = Self::from_glyphs(['<', '-', '>']);
    pub const LINE: Self = Self::from_glyphs(['-', '-', '-']);

    pub const fn from_glyphs(glyphs: [char; 3]) -> Self {
        Self { glyphs }
    }

    pub fn glyphs(&self) -> &[char; 3] {
        &self.glyphs
    }

    pub fn start(&self) -> char {
        self.glyphs[0]
    }

    pub fn shaft(&self) -> char {
        self.glyphs[1]
    }

    pub fn end(&self) -> char {
        self.glyphs[2]
    }

    pub fn with_start(self, start: char) -> Self {
        Self::from_glyphs([start, self.glyphs[1], self.glyphs[2]])
    }

    pub fn with_end(self, end: char) -> Self {
        Self::from_glyphs([self.glyphs[0], self.glyphs[1], end])
    }

    /// The same connector drawn right-to-left: the ends swap places and their heads flip.
    ///
    /// `-->` becomes `<--`; symmetric patterns such as `<->` and `---` are fixed points.
    pub fn reversed(self) -> Self {
        let [start, shaft, end] = self.glyphs;
        Self::from_glyphs([flip_head(end), shaft, flip_head(start)])
    }

    /// The glyphs to use when the connector runs top-to-bottom.
    pub fn rotated(self) -> Self {
        Self::from_glyphs(self.glyphs.map(rotate_glyph))
    }
}

fn flip_head(ch: char) -> char {
    match ch {
        '>' => '<',
        '<' => '>',
        '^' => 'v',
        'v' => '^',
        other => other,
    }
}

fn rotate_glyph(ch: char) -> char {
    match ch {
        STROKE_HORIZONTAL => STROKE_VERTICAL,
        '<' => '^',
        '>' => 'v',
        other => other,
    }
}

impl fmt::Display for ArrowPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for ch in self.glyphs {
            f.write_char(ch)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrowPatternError {
    pub len: usize,
}

impl fmt::Display for ArrowPatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arrow pattern must be exactly 3 characters (start, shaft, end), got {}",
            self.len
        )
    }
}

impl std::error::Error for ArrowPatternError {}

impl FromStr for ArrowPattern {
    type Err = ArrowPatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(start), Some(shaft), Some(end), None) => {
                Ok(Self::from_glyphs([start, shaft, end]))
            }
            _ => Err(ArrowPatternError {
                len: s.chars().count(),
            }),
        }
    }
}
