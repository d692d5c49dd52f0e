// src/bin/cli.rs
use peloton_board::{cli, log::{self, LogTarget}};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(LogTarget::Stderr);
    cli::run()
}
