// src/csv.rs
use std::io::Write;

use ::csv::{ReaderBuilder, WriterBuilder};

/// One parsed line: ordered cells with no meaning attached yet.
pub type RawRow = Vec<String>;

/* ---------------- Parsing ---------------- */

/// Parse CSV bytes into rows. Standard quoting, rows may differ in width,
/// fully empty lines are dropped. Invalid UTF-8 is an error.
pub fn parse_rows(bytes: &[u8]) -> Result<Vec<RawRow>, ::csv::Error> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        // The reader already skips bare newlines; a lone `""` line still
        // shows up as one empty field.
        if rec.len() == 1 && rec[0].is_empty() {
            continue;
        }
        rows.push(rec.iter().map(String::from).collect());
    }
    Ok(rows)
}

/* ---------------- Writing ---------------- */

/// Write rows with the given delimiter, quoting only where needed.
pub fn write_rows<W, R, C>(w: W, rows: R, delim: u8) -> ::csv::Result<()>
where
    W: Write,
    R: IntoIterator<Item = C>,
    C: IntoIterator,
    C::Item: AsRef<[u8]>,
{
    let mut wtr = WriterBuilder::new()
        .delimiter(delim)
        .flexible(true)
        .from_writer(w);
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
