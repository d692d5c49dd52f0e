// src/export.rs
//
// Turn a projected view into CSV/TSV text (clipboard + CLI output).
// Always the fixed leaderboard columns, in display order, header first.

use std::io::{self, Write};

use crate::config::consts::COLUMNS;
use crate::config::options::ExportFormat;
use crate::csv::write_rows;
use crate::loader::Record;
use crate::view::View;

/// Cells for one record, absent cells as "".
pub fn display_cells<'a>(rec: &'a Record) -> impl Iterator<Item = &'a str> {
    COLUMNS.iter().map(move |c| rec.get(c).unwrap_or(""))
}

pub fn write_view<W: Write>(w: W, view: &View<'_>, format: ExportFormat) -> ::csv::Result<()> {
    let header: Vec<&str> = COLUMNS.to_vec();
    let body = view.iter().map(|rec| display_cells(rec).collect::<Vec<_>>());
    write_rows(w, std::iter::once(header).chain(body), format.delim())
}

pub fn to_export_string(view: &View<'_>, format: ExportFormat) -> ::csv::Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_view(&mut buf, view, format)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Plain aligned text table for terminals.
pub fn to_text_table(view: &View<'_>) -> String {
    let rows: Vec<Vec<&str>> = view.iter().map(|r| display_cells(r).collect()).collect();

    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = s!();
    let mut push_line = |cells: &[&str]| {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:<w$}"))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    };

    push_line(&COLUMNS);
    for row in &rows {
        push_line(row);
    }
    out
}
