// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxdraw-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxdraw and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! User command files: a JSON object mapping extra tokens to operations.
//!
//! ```json
//! {
//!   "+=>": { "op": "draw_line", "order": "vh", "pattern": "==>" },
//!   "+t": { "op": "fill_box", "valign": "top", "halign": "left" },
//!   "+b": { "op": "draw_box" }
//! }
//! ```
//!
//! Omitted alignments default to middle/center. A `draw_line` without a `pattern` takes the
//! pattern as a runtime argument.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::{ArrowPattern, ArrowPatternError, HAlign, VAlign};
use crate::ops::LineOrder;

use super::Operation;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum OperationJson {
    DrawBox,
    DrawBoxWithLabel {
        #[serde(default)]
        valign: VAlignJson,
        #[serde(default)]
        halign: HAlignJson,
    },
    FillBox {
        #[serde(default)]
        valign: VAlignJson,
        #[serde(default)]
        halign: HAlignJson,
    },
    DrawLine {
        order: LineOrderJson,
        #[serde(default)]
        pattern: Option<String>,
    },
    SelectOuterBox,
    SelectInnerBox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum VAlignJson {
    Top,
    #[default]
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum HAlignJson {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum LineOrderJson {
    Hv,
    Vh,
}

impl From<VAlignJson> for VAlign {
    fn from(align: VAlignJson) -> Self {
        match align {
            VAlignJson::Top => Self::Top,
            VAlignJson::Middle => Self::Middle,
            VAlignJson::Bottom => Self::Bottom,
        }
    }
}

impl From<HAlignJson> for HAlign {
    fn from(align: HAlignJson) -> Self {
        match align {
            HAlignJson::Left => Self::Left,
            HAlignJson::Center => Self::Center,
            HAlignJson::Right => Self::Right,
        }
    }
}

impl From<LineOrderJson> for LineOrder {
    fn from(order: LineOrderJson) -> Self {
        match order {
            LineOrderJson::Hv => Self::HorizontalFirst,
            LineOrderJson::Vh => Self::VerticalFirst,
        }
    }
}

impl TryFrom<OperationJson> for Operation {
    type Error = ArrowPatternError;

    fn try_from(op: OperationJson) -> Result<Self, Self::Error> {
        Ok(match op {
            OperationJson::DrawBox => Self::DrawBox,
            OperationJson::DrawBoxWithLabel { valign, halign } => Self::DrawBoxWithLabel {
                valign: valign.into(),
                halign: halign.into(),
            },
            OperationJson::FillBox { valign, halign } => Self::FillBox {
                valign: valign.into(),
                halign: halign.into(),
            },
            OperationJson::DrawLine { order, pattern } => Self::DrawLine {
                order: order.into(),
                pattern: pattern.as_deref().map(str::parse::<ArrowPattern>).transpose()?,
            },
            OperationJson::SelectOuterBox => Self::SelectOuterBox,
            OperationJson::SelectInnerBox => Self::SelectInnerBox,
        })
    }
}

#[derive(Debug)]
pub enum CommandFileError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    InvalidPattern {
        token: String,
        source: ArrowPatternError,
    },
}

impl fmt::Display for CommandFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read command file {}: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid command file: {err}"),
            Self::InvalidPattern { token, source } => {
                write!(f, "invalid command file entry `{token}`: {source}")
            }
        }
    }
}

impl std::error::Error for CommandFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidPattern { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for CommandFileError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Parses a command file body into `(token, operation)` pairs, in token order.
pub fn parse_command_file(src: &str) -> Result<Vec<(String, Operation)>, CommandFileError> {
    let raw: BTreeMap<String, OperationJson> = serde_json::from_str(src)?;

    raw.into_iter()
        .map(|(token, op)| match Operation::try_from(op) {
            Ok(operation) => Ok((token, operation)),
            Err(source) => Err(CommandFileError::InvalidPattern { token, source }),
        })
        .collect()
}

/// Reads and parses the command file at `path`.
pub fn load_command_file(path: &Path) -> Result<Vec<(String, Operation)>, CommandFileError> {
    let src = std::fs::read_to_string(path).map_err(|source| CommandFileError::Io {
        path: path.to_owned(),
        source,
    })?;

    let entries = parse_command_file(&src)?;
    tracing::debug!(path = %path.display(), commands = entries.len(), "loaded command file");
    Ok(entries)
}
