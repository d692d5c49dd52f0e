// src/cli.rs
use std::io::{self, Write};
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    boards::{BOARDS, BoardId},
    config::{
        consts::{COLUMNS, DEFAULT_SORT_COLUMN, HTTP_TIMEOUT_SECS},
        options::{DataLocation, ExportFormat, SourceOptions},
    },
    export, loader, source,
    view::{SortDirection, SortSpec, View, column_named},
};

#[derive(Parser, Debug)]
#[command(name = "peloton", about = "Cycling points leaderboards from CSV", version)]
pub struct Args {
    /// Data directory or base URL serving the leaderboard CSVs
    #[arg(long, global = true, env = "PELOTON_DATA", value_name = "DIR|URL")]
    pub data: Option<String>,

    /// HTTP timeout in seconds (URL sources only)
    #[arg(long, global = true, default_value_t = HTTP_TIMEOUT_SECS)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List the available leaderboards
    Boards,
    /// Load one leaderboard and print the filtered, sorted view
    Show {
        /// overall | stage | gc | classics
        board: BoardId,
        /// Match Name (any case) or ARR (verbatim)
        #[arg(short, long, default_value = "")]
        search: String,
        /// Column to sort by (any case)
        #[arg(long, default_value = DEFAULT_SORT_COLUMN, value_parser = parse_sort_column)]
        sort: String,
        /// Sort descending
        #[arg(long)]
        desc: bool,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Tsv,
}

fn parse_sort_column(s: &str) -> std::result::Result<String, String> {
    column_named(s)
        .map(String::from)
        .ok_or_else(|| format!("unknown column `{s}` (expected one of: {})", COLUMNS.join(", ")))
}

impl Args {
    pub fn source_options(&self) -> SourceOptions {
        let mut opts = SourceOptions::default();
        if let Some(d) = &self.data {
            opts.location = DataLocation::parse(d);
        }
        opts.http_timeout = Duration::from_secs(self.timeout);
        opts
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let stdout = io::stdout();
    execute(&args, &mut stdout.lock())
}

/// Run a parsed command, writing the table to `out` and the summary to stderr.
pub fn execute<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    match &args.command {
        Command::Boards => {
            for b in BOARDS.iter() {
                writeln!(out, "{}\t{}\t{}", b.id, b.label, b.resource)?;
            }
        }
        Command::Show { board, search, sort, desc, format } => {
            let opts = args.source_options();
            let src = source::from_options(&opts);
            logd!("CLI: show {} from {}", board, src.describe());

            let records = loader::load(src.as_ref(), board.resource())
                .wrap_err_with(|| format!("could not load the {} leaderboard", board.label()))?;

            let dir = if *desc { SortDirection::Descending } else { SortDirection::Ascending };
            let spec = SortSpec::new(sort, dir);
            let view = View::new(&records, search, &spec);

            match format {
                OutputFormat::Table => out.write_all(export::to_text_table(&view).as_bytes())?,
                OutputFormat::Csv => export::write_view(&mut *out, &view, ExportFormat::Csv)?,
                OutputFormat::Tsv => export::write_view(&mut *out, &view, ExportFormat::Tsv)?,
            }
            out.flush()?;
            eprintln!("{}", view.summary());
        }
    }
    Ok(())
}
