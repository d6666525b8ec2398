// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxdraw-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxdraw and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boxdraw CLI entrypoint.
//!
//! Reads the buffer from stdin, applies one command to it and writes the result to stdout.
//! Coordinates are zero-based `row col` pairs for the two selection corners, in any order.
//!
//! Set `BOXDRAW_LOG` (an `EnvFilter` directive such as `debug` or `boxdraw::ops=trace`) to
//! see what an operation did; logs go to stderr.

use std::error::Error;
use std::io::{Read, Write};
use std::path::Path;

use boxdraw::command::{load_command_file, CommandTable};
use boxdraw::grid::split_lines;
use boxdraw::model::Point;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "BOXDRAW_LOG";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--commands <file>] <command> <y1> <x1> <y2> <x2> [args...]\n  {program} [--commands <file>] --list-commands\n\nThe buffer is read from stdin and the result written to stdout.\n--commands loads extra or overriding command tokens from a JSON file.\n--list-commands prints every known token with the operation it runs.\n\nSet {LOG_ENV} (default `warn`) to control logging on stderr."
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Invocation {
    token: String,
    from: Point,
    to: Point,
    args: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    commands: Option<String>,
    list_commands: bool,
    invocation: Option<Invocation>,
}

fn parse_coordinate(args: &mut impl Iterator<Item = String>) -> Result<i64, ()> {
    let raw = args.next().ok_or(())?;
    raw.trim().parse::<i64>().map_err(|_| ())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--commands" => {
                if options.commands.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.commands = Some(path);
            }
            "--list-commands" => {
                if options.list_commands {
                    return Err(());
                }
                options.list_commands = true;
            }
            // Command tokens start with `+`, so a dash here is always an unknown flag.
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                let y1 = parse_coordinate(&mut args)?;
                let x1 = parse_coordinate(&mut args)?;
                let y2 = parse_coordinate(&mut args)?;
                let x2 = parse_coordinate(&mut args)?;
                // Everything after the coordinates is an operation argument, even `-->`.
                options.invocation = Some(Invocation {
                    token: arg,
                    from: Point::new(y1, x1),
                    to: Point::new(y2, x2),
                    args: args.by_ref().collect(),
                });
            }
        }
    }

    if options.list_commands == options.invocation.is_some() {
        return Err(());
    }

    Ok(options)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn command_table(path: Option<&str>) -> Result<CommandTable, Box<dyn Error>> {
    let mut table = CommandTable::builtin();
    if let Some(path) = path {
        table.extend(load_command_file(Path::new(path))?);
    }
    Ok(table)
}

#[derive(Debug)]
enum Failure {
    Usage,
    Run(Box<dyn Error>),
}

impl Failure {
    fn exit_code(&self) -> i32 {
        match self {
            Self::Usage => 2,
            Self::Run(_) => 1,
        }
    }
}

/// Parses `args`, runs the command on the buffer read from `input` and writes the result to
/// `out`. Lines are written back verbatim; no newline is added.
fn run(
    args: impl Iterator<Item = String>,
    input: &mut impl Read,
    out: &mut impl Write,
) -> Result<(), Failure> {
    let options = parse_options(args).map_err(|()| Failure::Usage)?;
    execute(&options, input, out).map_err(Failure::Run)
}

fn execute(
    options: &CliOptions,
    input: &mut impl Read,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let table = command_table(options.commands.as_deref())?;

    let Some(invocation) = &options.invocation else {
        for (token, operation) in table.iter() {
            writeln!(out, "{token}\t{operation}")?;
        }
        return Ok(());
    };

    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let lines = split_lines(&text);
    tracing::debug!(lines = lines.len(), token = %invocation.token, "read buffer");

    let output = table.run(
        &invocation.token,
        &lines,
        invocation.from,
        invocation.to,
        &invocation.args,
    )?;

    for line in &output {
        out.write_all(line.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "boxdraw".to_owned());

    init_logging();
    let result = run(args, &mut std::io::stdin().lock(), &mut std::io::stdout().lock());

    if let Err(failure) = result {
        match &failure {
            Failure::Usage => print_usage(&program),
            Failure::Run(err) => eprintln!("boxdraw: {err}"),
        }
        std::process::exit(failure.exit_code());
    }
}
