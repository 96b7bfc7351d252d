// src/bin/cli.rs
use clap::Parser;
use champ_scrape::cli::Arguments;
use color_eyre::eyre::WrapErr;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let summary = Arguments::parse()
        .run()
        .wrap_err("champion table extraction failed")?;

    println!("Wrote {} row(s) to {}", summary.rows, summary.out_path.display());
    Ok(())
}
