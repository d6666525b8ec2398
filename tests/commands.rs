// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxdraw-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxdraw and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::{Path, PathBuf};

use rstest::rstest;

use boxdraw::command::{load_command_file, CommandError, CommandFileError, CommandTable};
use boxdraw::model::Point;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("commands")
        .join(name)
}

/// Runs `token` on interleaved `[input, expected, ...]` rows. The `1` and `2` markers in the
/// input are the selection corners and are replaced by `cur1` / `cur2` before running.
fn assert_cmd(
    table: &CommandTable,
    token: &str,
    cur1: char,
    cur2: char,
    rows: &[&str],
    args: &[&str],
) {
    assert!(rows.len() % 2 == 0, "rows must come in input/expected pairs");
    let input = rows.iter().step_by(2).copied().collect::<Vec<_>>();
    let expected = rows.iter().skip(1).step_by(2).copied().collect::<Vec<_>>();

    let find = |marker: char| {
        input
            .iter()
            .enumerate()
            .find_map(|(y, row)| {
                row.chars().position(|ch| ch == marker).map(|x| Point::new(y as i64, x as i64))
            })
            .unwrap_or_else(|| panic!("marker {marker} not found"))
    };
    let from = find('1');
    let to = find('2');

    let lines = input
        .iter()
        .map(|row| row.replace('1', &cur1.to_string()).replace('2', &cur2.to_string()))
        .collect::<Vec<_>>();
    let args = args.iter().map(|arg| (*arg).to_owned()).collect::<Vec<_>>();

    let actual = table
        .run(token, &lines, from, to, &args)
        .unwrap_or_else(|err| panic!("{token} failed: {err}"));
    assert_eq!(actual, expected, "{token}");
}

#[test]
#[rustfmt::skip]
fn draws_a_box() {
    let table = CommandTable::builtin();
    assert_cmd(
        &table,
        "+o",
        '.',
        '.',
        &[
            "........", "........",
            "..1.....", "..+---+.",
            "........", "..|   |.",
            "......2.", "..+---+.",
            "........", "........",
        ],
        &[],
    );
}

#[test]
#[rustfmt::skip]
fn draws_a_box_past_the_end_of_short_lines() {
    let table = CommandTable::builtin();
    assert_cmd(
        &table,
        "+o",
        '.',
        '.',
        &[
            "........", "........",
            "..1.", "..+---+",
            "", "  |   |",
            "......2", "..+---+",
        ],
        &[],
    );
}

#[rstest]
#[case::top_left("+{[c", ["This is a   ", "test.       ", "            ", "            "])]
#[case::top_center("+{c", [" This is a  ", "   test.    ", "            ", "            "])]
#[case::top_right("+{]c", ["   This is a", "       test.", "            ", "            "])]
#[case::middle_center("+c", ["            ", " This is a  ", "   test.    ", "            "])]
#[case::bottom_right("+}]c", ["            ", "            ", "   This is a", "       test."])]
#[case::bottom_left("+}[c", ["            ", "            ", "This is a   ", "test.       "])]
#[case::middle_right("+]c", ["            ", "   This is a", "       test.", "            "])]
fn fills_with_every_alignment(#[case] token: &str, #[case] interior: [&str; 4]) {
    let table = CommandTable::builtin();
    let body = interior.map(|row| format!("|{row}|"));
    #[rustfmt::skip]
    let rows = [
        "+------------+", "+------------+",
        "|1...........|", body[0].as_str(),
        "|....FOO.....|", body[1].as_str(),
        "|............|", body[2].as_str(),
        "|...........2|", body[3].as_str(),
        "+------------+", "+------------+",
    ];
    assert_cmd(&table, token, ' ', ' ', &rows, &["This is a test."]);
}

#[test]
#[rustfmt::skip]
fn fill_truncates_words_that_do_not_fit() {
    let table = CommandTable::builtin();
    assert_cmd(
        &table,
        "+{[c",
        ' ',
        ' ',
        &[
            "+-----+", "+-----+",
            "|1    |", "|not  |",
            "|    2|", "|enoug|",
            "+-----+", "+-----+",
        ],
        &["not enough space"],
    );

    assert_cmd(
        &table,
        "+{[c",
        ' ',
        ' ',
        &[
            "+-+", "+-+",
            "|1|", "|n|",
            "|.|", "|e|",
            "|2|", "|s|",
            "+-+", "+-+",
        ],
        &["not enough space"],
    );
}

#[test]
#[rustfmt::skip]
fn draws_a_labeled_box() {
    let table = CommandTable::builtin();
    assert_cmd(
        &table,
        "+O",
        '.',
        '.',
        &[
            ".........", ".........",
            ".1.......", ".+-----+.",
            ".........", ".| foo |.",
            ".........", ".| bar |.",
            ".......2.", ".+-----+.",
            ".........", ".........",
        ],
        &["foo bar"],
    );
}

#[test]
#[rustfmt::skip]
fn labeled_box_too_narrow_for_text_keeps_only_the_border() {
    let table = CommandTable::builtin();
    assert_cmd(
        &table,
        "+O",
        '.',
        '.',
        &[
            ".....", ".....",
            ".1...", ".+-+.",
            ".....", ".| |.",
            "...2.", ".+-+.",
        ],
        &["label"],
    );
}

#[test]
#[rustfmt::skip]
fn arrow_tokens_pick_order_and_pattern() {
    let table = CommandTable::builtin();

    assert_cmd(&table, "+>", ' ', ' ', &[" 1    2 ", " -----> "], &[]);
    assert_cmd(&table, "+<", ' ', ' ', &[" 1    2 ", " <----- "], &[]);
    assert_cmd(&table, "++>", ' ', ' ', &[" 2    1 ", " <----> "], &[]);
    assert_cmd(&table, "+->", ' ', ' ', &[" 1    2 ", " ------ "], &[]);

    assert_cmd(
        &table,
        "+v",
        ' ',
        ' ',
        &[
            "        ", "        ",
            " 1      ", " -----+ ",
            "        ", "      | ",
            "      2 ", "      v ",
            "        ", "        ",
        ],
        &[],
    );
    assert_cmd(
        &table,
        "+>",
        ' ',
        ' ',
        &[
            "        ", "        ",
            " 1      ", " |      ",
            "        ", " |      ",
            "      2 ", " +----> ",
            "        ", "        ",
        ],
        &[],
    );
}

#[test]
#[rustfmt::skip]
fn arrows_join_existing_strokes() {
    let table = CommandTable::builtin();
    assert_cmd(
        &table,
        "+>",
        '-',
        ' ',
        &[
            "       |", "       |",
            "      2|", " +---->|",
            "       |", " |     |",
            "-1-     ", "-+-     ",
            "        ", "        ",
        ],
        &[],
    );
    assert_cmd(
        &table,
        "+->",
        '-',
        '|',
        &[
            "       |", "       |",
            "       2", " +-----+",
            "       |", " |     |",
            "-1-     ", "-+-     ",
            "        ", "        ",
        ],
        &[],
    );
}

#[test]
fn runtime_pattern_lines_take_the_pattern_argument() {
    let table = CommandTable::builtin();
    assert_cmd(&table, "+hv", ' ', ' ', &[" 1    2 ", " o----> "], &["o->"]);
    assert_cmd(&table, "+vh", ' ', ' ', &[" 2    1 ", " <----o "], &["o->"]);
}

#[test]
fn selects_outer_and_inner_box() {
    let table = CommandTable::builtin();
    let lines = [
        "              ",
        "   +-------+  ",
        "   | #     |  ",
        "   +-------+  ",
        "              ",
    ]
    .map(str::to_owned);
    let p = Point::new(2, 5);

    assert_eq!(table.run("+ao", &lines, p, p, &[]).expect("outer"), ["1,3,3,11"]);
    assert_eq!(table.run("+io", &lines, p, p, &[]).expect("inner"), ["2,4,2,10"]);
}

#[test]
fn preserves_newline_markers() {
    let table = CommandTable::builtin();
    let lines = ["......\r\n", "......\r\n", "....\n", "......"].map(str::to_owned);

    let out = table
        .run("+o", &lines, Point::new(0, 1), Point::new(2, 4), &[])
        .expect("box");
    assert_eq!(out, [".+--+.\r\n", ".|  |.\r\n", ".+--+\n", "......"]);
}

#[test]
fn unknown_tokens_report_the_closest_command() {
    let table = CommandTable::builtin();
    let err = table
        .run("+oo", &[], Point::new(0, 0), Point::new(0, 0), &[])
        .unwrap_err();
    assert_eq!(
        err,
        CommandError::UnknownCommand {
            token: "+oo".to_owned(),
            suggestion: Some("+o".to_owned()),
        }
    );
}

#[test]
#[rustfmt::skip]
fn command_files_add_and_override_tokens() {
    let mut table = CommandTable::builtin();
    let builtin_len = table.len();
    table.extend(load_command_file(&fixture("extra.json")).expect("load extra.json"));
    assert_eq!(table.len(), builtin_len + 2);

    assert_cmd(&table, "+=>", ' ', ' ', &["1   2 ", "====> "], &[]);
    assert_cmd(
        &table,
        "+o",
        '.',
        '.',
        &[
            "1.....", "hi    ",
            ".....2", "      ",
            "......", "......",
        ],
        &["hi"],
    );
    assert_cmd(
        &table,
        "+note",
        '.',
        '.',
        &[
            "1........", "+-------+",
            ".........", "| todo  |",
            ".........", "|       |",
            "........2", "+-------+",
        ],
        &["todo"],
    );
}

#[test]
fn command_files_report_bad_entries() {
    match load_command_file(&fixture("bad_pattern.json")).unwrap_err() {
        CommandFileError::InvalidPattern { token, .. } => assert_eq!(token, "+=>"),
        other => panic!("unexpected error: {other}"),
    }

    match load_command_file(&fixture("missing.json")).unwrap_err() {
        CommandFileError::Io { path, .. } => assert_eq!(path, fixture("missing.json")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn selections_running_past_the_last_line_only_touch_existing_rows() {
    let table = CommandTable::builtin();
    let lines = ["....\n", "....\n", "...."].map(str::to_owned);
    let far = Point::new(1 << 60, 3);

    let out = table.run("+o", &lines, Point::new(0, 0), far, &[]).expect("box");
    assert_eq!(out, ["+--+\n", "|  |\n", "|  |"]);

    let out = table.run("+v", &lines, Point::new(0, 1), Point::new(1 << 60, 1), &[]).expect("line");
    assert_eq!(out, [".|..\n", ".|..\n", ".|.."]);
}
