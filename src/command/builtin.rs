// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxdraw-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxdraw and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{ArrowPattern, HAlign, VAlign};
use crate::ops::LineOrder;

use super::Operation;

// `+{` / `+}` pick top/bottom, `[` / `]` pick left/right; no prefix means middle/center.
const VALIGN_PREFIXES: [(&str, VAlign); 3] = [
    ("{", VAlign::Top),
    ("", VAlign::Middle),
    ("}", VAlign::Bottom),
];
const HALIGN_PREFIXES: [(&str, HAlign); 3] = [
    ("[", HAlign::Left),
    ("", HAlign::Center),
    ("]", HAlign::Right),
];

const LINE_FAMILIES: [(&str, ArrowPattern); 3] = [
    ("+", ArrowPattern::ARROW),
    ("++", ArrowPattern::BIDIRECTIONAL),
    ("+-", ArrowPattern::LINE),
];

// (suffix, order, backwards). `>`/`<` end on a horizontal run, `v`/`V`/`^` on a vertical one.
const LINE_SPELLINGS: [(&str, LineOrder, bool); 5] = [
    (">", LineOrder::VerticalFirst, false),
    ("<", LineOrder::VerticalFirst, true),
    ("v", LineOrder::HorizontalFirst, false),
    ("V", LineOrder::HorizontalFirst, false),
    ("^", LineOrder::HorizontalFirst, true),
];

pub(super) fn entries() -> Vec<(String, Operation)> {
    let mut entries = vec![
        ("+o".to_owned(), Operation::DrawBox),
        ("+ao".to_owned(), Operation::SelectOuterBox),
        ("+io".to_owned(), Operation::SelectInnerBox),
        (
            "+hv".to_owned(),
            Operation::DrawLine {
                order: LineOrder::HorizontalFirst,
                pattern: None,
            },
        ),
        (
            "+vh".to_owned(),
            Operation::DrawLine {
                order: LineOrder::VerticalFirst,
                pattern: None,
            },
        ),
    ];

    for (v, valign) in VALIGN_PREFIXES {
        for (h, halign) in HALIGN_PREFIXES {
            entries.push((format!("+{v}{h}O"), Operation::DrawBoxWithLabel { valign, halign }));
            entries.push((format!("+{v}{h}c"), Operation::FillBox { valign, halign }));
        }
    }

    for (prefix, pattern) in LINE_FAMILIES {
        for (suffix, order, backwards) in LINE_SPELLINGS {
            let pattern = if backwards {
                pattern.reversed()
            } else {
                pattern
            };
            entries.push((
                format!("{prefix}{suffix}"),
                Operation::DrawLine {
                    order,
                    pattern: Some(pattern),
                },
            ));
        }
    }

    entries
}
