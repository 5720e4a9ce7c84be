//! `table` and `describe`: print the resolver's view of every vector type

use anyhow::{bail, Result};
use lanes::{TableRow, TABLE};

fn companion(name: Option<&'static str>) -> &'static str {
    name.unwrap_or("-")
}

fn header() -> String {
    format!(
        "{:<8} {:<4} {:<9} {:>5} {:>5} {:>5}  {:<8} {:<8} {:<8} {:<8}",
        "type", "elem", "kind", "lanes", "bits", "align", "half", "lower", "higher", "float"
    )
}

pub fn format_row(row: &TableRow) -> String {
    format!(
        "{:<8} {:<4} {:<9} {:>5} {:>5} {:>5}  {:<8} {:<8} {:<8} {:<8}",
        row.name,
        row.element,
        row.kind.name(),
        row.lanes,
        row.bits,
        row.alignment,
        companion(row.half),
        companion(row.lower),
        companion(row.higher),
        companion(row.float),
    )
}

/// Rows whose element type matches `element`, or every row
pub fn select_rows(element: Option<&str>) -> Vec<&'static TableRow> {
    TABLE
        .iter()
        .filter(|row| element.map_or(true, |e| row.element == e))
        .collect()
}

pub fn print_table(element: Option<&str>) -> Result<()> {
    let rows = select_rows(element);
    if rows.is_empty() {
        bail!(
            "No vector types with element '{}'",
            element.unwrap_or_default()
        );
    }
    log::info!("{} vector types", rows.len());

    println!("{}", header());
    for row in rows {
        println!("{}", format_row(row));
    }
    Ok(())
}

pub fn describe(name: &str) -> Result<()> {
    let Some(row) = lanes::describe(name) else {
        bail!("Unknown vector type '{}'", name);
    };

    println!("type:      {}", row.name);
    println!("element:   {} ({})", row.element, row.kind.name());
    println!("lanes:     {}", row.lanes);
    println!("bits:      {}", row.bits);
    println!("alignment: {}", row.alignment);
    println!("mask:      mask{}", row.lanes);
    println!("half:      {}", companion(row.half));
    println!("lower:     {}", companion(row.lower));
    println!("higher:    {}", companion(row.higher));
    println!("float:     {}", companion(row.float));
    Ok(())
}
