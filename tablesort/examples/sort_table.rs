//! Sorts a small table by each column in turn and prints it.
//!
//! Run with `cargo run -p tablesort --example sort_table`. Sorter logs go to
//! `sort_table.log`.

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tablesort::{Document, Table, render};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("sort_table.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)?;

    let mut doc = Document::new();
    doc.insert(
        "nests",
        Table::new(["Park", "Species", "Sightings"])
            .with_row(["Elm Park", "Onix", "12"])
            .with_row(["Riverside", "abra", "-"])
            .with_row(["Harbor", "Zubat", "4"])
            .with_row(["Old Mill", "Pidgey", "unknown"]),
    );

    println!("{}", render(doc.get("nests").ok_or("missing table")?));

    // Each column twice: ascending, then descending.
    for column in [0, 0, 1, 1, 2, 2] {
        let outcome = doc.sort_table("nests", column)?;
        println!("column {} -> {:?} ({} swaps)", column, outcome.direction, outcome.swaps);
        println!("{}", render(doc.get("nests").ok_or("missing table")?));
    }

    Ok(())
}
