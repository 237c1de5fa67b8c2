//! Plain-text rendering for the interactive trainer.

use std::fmt::Write;

use shared::protocol::{CoordinateRow, Verdict};

pub const TITLE: &str = "Leg Angle, Foot Angle, and Ankle Relative Angle Practice";

pub const HELP: &str = "\
Commands:
  leg <degrees>     check your absolute leg angle
  foot <degrees>    check your absolute foot angle
  ankle <degrees>   check your relative ankle angle
  how               show how to calculate (also writes the segment plot)
  plot [path]       write the segment plot again, optionally to another file
  table             show the coordinates again
  new               try another problem
  dorsi             try when the ankle is dorsiflexed (same leg, new foot)
  help              show this list
  quit              leave the trainer";

pub fn coordinate_table(rows: &[CoordinateRow]) -> String {
    let name_width = rows
        .iter()
        .map(|row| row.name.chars().count())
        .chain(std::iter::once("Anatomical Location".len()))
        .max()
        .unwrap_or_default();

    let mut table = String::from("Provided Coordinates\n");
    let _ = writeln!(
        table,
        "{:<name_width$}  {:>14}  {:>14}",
        "Anatomical Location", "X Position (m)", "Y Position (m)"
    );
    for row in rows {
        let _ = writeln!(
            table,
            "{:<name_width$}  {:>14.3}  {:>14.3}",
            row.name, row.x, row.y
        );
    }
    table
}

pub fn verdict_line(verdict: &Verdict) -> String {
    let mark = if verdict.correct { "✅" } else { "❌" };
    format!("{mark} {}", verdict.message)
}
