// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxdraw-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxdraw and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Command tokens and their dispatch onto drawing/selection operations.
//!
//! A command token (as typed in the host editor, e.g. `+O` or `++>`) resolves to an
//! [`Operation`] with some arguments already bound (alignment, arrow pattern). The caller
//! supplies the selection corners and any remaining runtime arguments.

use std::collections::BTreeMap;
use std::fmt;

use crate::model::{ArrowPattern, ArrowPatternError, HAlign, Point, Rect, VAlign};
use crate::ops::{self, LineOrder};

mod builtin;
pub mod file;

pub use file::{load_command_file, parse_command_file, CommandFileError};

const MIN_SUGGESTION_SCORE: f64 = 0.5;

/// An operation with its bound parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    DrawBox,
    DrawBoxWithLabel {
        valign: VAlign,
        halign: HAlign,
    },
    FillBox {
        valign: VAlign,
        halign: HAlign,
    },
    /// `pattern: None` takes the pattern as a runtime argument.
    DrawLine {
        order: LineOrder,
        pattern: Option<ArrowPattern>,
    },
    SelectOuterBox,
    SelectInnerBox,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::DrawBox => "draw_box",
            Self::DrawBoxWithLabel { .. } => "draw_box_with_label",
            Self::FillBox { .. } => "fill_box",
            Self::DrawLine { .. } => "draw_line",
            Self::SelectOuterBox => "select_outer_box",
            Self::SelectInnerBox => "select_inner_box",
        }
    }

    /// Names of the runtime arguments, in order.
    pub fn params(&self) -> &'static [&'static str] {
        match self {
            Self::DrawBoxWithLabel { .. } | Self::FillBox { .. } => &["text"],
            Self::DrawLine { pattern: None, .. } => &["pattern"],
            Self::DrawBox
            | Self::DrawLine { pattern: Some(_), .. }
            | Self::SelectOuterBox
            | Self::SelectInnerBox => &[],
        }
    }

    /// Applies the operation to `lines` for the selection `from`..`to`.
    pub fn apply(
        &self,
        lines: &[String],
        from: Point,
        to: Point,
        args: &[String],
    ) -> Result<Vec<String>, ArgumentError> {
        let rect = Rect::from_corners(from, to);

        match (*self, args) {
            (Self::DrawBox, []) => Ok(ops::draw_box(lines, rect)),
            (Self::DrawBoxWithLabel { valign, halign }, [text]) => {
                Ok(ops::draw_box_with_label(lines, rect, valign, halign, text))
            }
            (Self::FillBox { valign, halign }, [text]) => {
                Ok(ops::fill_box(lines, rect, valign, halign, text))
            }
            (
                Self::DrawLine {
                    order,
                    pattern: Some(pattern),
                },
                [],
            ) => Ok(ops::draw_line(lines, from, to, pattern, order)),
            (
                Self::DrawLine {
                    order,
                    pattern: None,
                },
                [raw],
            ) => {
                let pattern = raw.parse::<ArrowPattern>()?;
                Ok(ops::draw_line(lines, from, to, pattern, order))
            }
            (Self::SelectOuterBox, []) => Ok(ops::select_outer_box(lines, from, to)),
            (Self::SelectInnerBox, []) => Ok(ops::select_inner_box(lines, from, to)),
            (operation, args) => {
                let params = operation.params();
                match params.get(args.len()) {
                    Some(&name) => Err(ArgumentError::Missing { name }),
                    None => Err(ArgumentError::Unexpected {
                        count: args.len() - params.len(),
                    }),
                }
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        match self {
            Self::DrawBoxWithLabel { valign, halign } | Self::FillBox { valign, halign } => {
                write!(f, " valign={valign} halign={halign}")
            }
            Self::DrawLine { order, pattern } => {
                write!(f, " order={order}")?;
                match pattern {
                    Some(pattern) => write!(f, " pattern={pattern}"),
                    None => f.write_str(" pattern=<arg>"),
                }
            }
            Self::DrawBox | Self::SelectOuterBox | Self::SelectInnerBox => Ok(()),
        }
    }
}

/// Maps command tokens to operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTable {
    entries: BTreeMap<String, Operation>,
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CommandTable {
    /// The built-in box, fill, arrow and selection commands.
    pub fn builtin() -> Self {
        Self {
            entries: builtin::entries().into_iter().collect(),
        }
    }

    /// Adds or replaces a command, returning the operation it replaced.
    pub fn insert(&mut self, token: impl Into<String>, operation: Operation) -> Option<Operation> {
        self.entries.insert(token.into(), operation)
    }

    pub fn get(&self, token: &str) -> Option<&Operation> {
        self.entries.get(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates commands in token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Operation)> + '_ {
        self.entries.iter().map(|(token, op)| (token.as_str(), op))
    }

    /// The known token closest to `token`, if any is reasonably close.
    pub fn suggest(&self, token: &str) -> Option<&str> {
        self.entries
            .keys()
            .map(|known| (known, rapidfuzz::fuzz::ratio(token.chars(), known.chars())))
            .filter(|(_, score)| *score >= MIN_SUGGESTION_SCORE)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(known, _)| known.as_str())
    }

    /// Resolves `token` and applies it.
    pub fn run(
        &self,
        token: &str,
        lines: &[String],
        from: Point,
        to: Point,
        args: &[String],
    ) -> Result<Vec<String>, CommandError> {
        let operation = self.get(token).ok_or_else(|| CommandError::UnknownCommand {
            token: token.to_owned(),
            suggestion: self.suggest(token).map(str::to_owned),
        })?;

        let _span = tracing::debug_span!("command", token, op = operation.name()).entered();
        operation
            .apply(lines, from, to, args)
            .map_err(|source| CommandError::Arguments {
                token: token.to_owned(),
                source,
            })
    }
}

impl Extend<(String, Operation)> for CommandTable {
    fn extend<I: IntoIterator<Item = (String, Operation)>>(&mut self, iter: I) {
        for (token, operation) in iter {
            if let Some(previous) = self.insert(token.clone(), operation) {
                tracing::debug!(token = %token, %previous, %operation, "command overridden");
            }
        }
    }
}

/// Runtime arguments that do not fit the operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    Missing { name: &'static str },
    Unexpected { count: usize },
    InvalidPattern(ArrowPatternError),
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { name } => write!(f, "missing argument `{name}`"),
            Self::Unexpected { count } => write!(f, "{count} unexpected argument(s)"),
            Self::InvalidPattern(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern(err) => Some(err),
            Self::Missing { .. } | Self::Unexpected { .. } => None,
        }
    }
}

impl From<ArrowPatternError> for ArgumentError {
    fn from(err: ArrowPatternError) -> Self {
        Self::InvalidPattern(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    UnknownCommand {
        token: String,
        suggestion: Option<String>,
    },
    Arguments {
        token: String,
        source: ArgumentError,
    },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand {
                token,
                suggestion: Some(suggestion),
            } => write!(f, "unknown command `{token}` (did you mean `{suggestion}`?)"),
            Self::UnknownCommand {
                token,
                suggestion: None,
            } => write!(f, "unknown command `{token}`"),
            Self::Arguments { token, source } => write!(f, "command `{token}`: {source}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Arguments { source, .. } => Some(source),
            Self::UnknownCommand { .. } => None,
        }
    }
}
