//! Plain-text rendering of the inventory table.

use crate::model::InventoryItem;
use std::io::{self, Write};

const HEADERS: [&str; 3] = ["Item", "Current Amount", "Increment Factor"];

/// Writes `rows` as a three-column table. `increment` supplies each row's factor.
pub fn render<W, F>(out: &mut W, rows: &[&InventoryItem], increment: F) -> io::Result<()>
where
    W: Write,
    F: Fn(&InventoryItem) -> u64,
{
    let cells: Vec<[String; 3]> = rows
        .iter()
        .map(|item| {
            [
                item.name.to_string(),
                item.quantity.to_string(),
                increment(item).to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(
        out,
        "{:<w0$} | {:>w1$} | {:>w2$}",
        HEADERS[0],
        HEADERS[1],
        HEADERS[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2]
    )?;
    writeln!(
        out,
        "{}-+-{}-+-{}",
        "-".repeat(widths[0]),
        "-".repeat(widths[1]),
        "-".repeat(widths[2])
    )?;

    if cells.is_empty() {
        writeln!(out, "(no items)")?;
        return Ok(());
    }
    for [name, quantity, factor] in &cells {
        writeln!(
            out,
            "{:<w0$} | {:>w1$} | {:>w2$}",
            name,
            quantity,
            factor,
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2]
        )?;
    }
    Ok(())
}
