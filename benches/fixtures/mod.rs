// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxdraw-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxdraw and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Deterministic text buffers for benches.

/// Grid size presets. Case IDs are part of bench identity; keep them stable.
#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Large,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }

    fn dims(self) -> (usize, usize) {
        match self {
            Self::Small => (24, 80),
            Self::Large => (400, 240),
        }
    }
}

/// A ragged buffer of newline-terminated lines with a lattice of boxes drawn every 8 rows and
/// 20 columns. Every fourth line is left short so writes have to pad.
pub fn grid(case: Case) -> Vec<String> {
    let (height, width) = case.dims();
    (0..height)
        .map(|y| {
            let len = if y % 4 == 3 { width / 3 } else { width };
            let mut line = (0..len)
                .map(|x| match (y % 8, x % 20) {
                    (0 | 6, 0 | 16) => '+',
                    (0 | 6, 1..=15) => '-',
                    (1..=5, 0 | 16) => '|',
                    _ => ' ',
                })
                .collect::<String>();
            line.push('\n');
            line
        })
        .collect()
}
