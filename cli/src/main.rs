// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use log::info;
use sais_bwt::SuffixArray;

#[derive(Parser)]
#[command(version, about = "Suffix arrays and Burrows-Wheeler transforms of files")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Writes the suffix array of a file, one offset per line
    Sa {
        input: PathBuf,
        /// Defaults to standard output
        output: Option<PathBuf>,
        /// Write offsets as native-endian 32-bit integers instead of text
        #[arg(long)]
        raw: bool,
    },
    /// Writes the last column of a file's transform and prints the sentinel row
    Bwt {
        input: PathBuf,
        output: PathBuf,
        /// The byte terminating the input, appended if the input does not end with it
        #[arg(long, default_value_t = 0)]
        sentinel: u8,
    },
    /// Restores a file from the last column of its transform
    Unbwt {
        input: PathBuf,
        /// The sentinel row printed by the `bwt` command
        row: usize,
        output: PathBuf,
    },
    /// Prints the number of runs in the last column of a file's transform
    Runs {
        input: PathBuf,
        #[arg(long, default_value_t = 0)]
        sentinel: u8,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Sa { input, output, raw } => {
            let data = read_input(&input)?;
            let sa = SuffixArray::new(&data)
                .with_context(|| format!("Failed to sort suffixes of '{}'", input.display()))?;

            let mut writer: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(File::create(path).with_context(
                    || format!("Failed to create output file '{}'", path.display()),
                )?)),
                None => Box::new(BufWriter::new(io::stdout().lock())),
            };

            let written = if raw {
                writer.write_all(sa.as_bytes())
            } else {
                sa.as_slice()
                    .iter()
                    .try_for_each(|offset| writeln!(writer, "{offset}"))
            };
            written
                .and_then(|()| writer.flush())
                .context("I/O error occurred while writing suffix array")?;

            info!("wrote {} suffix offsets", sa.len());
        }
        Command::Bwt {
            input,
            output,
            sentinel,
        } => {
            let data = read_input(&input)?;
            let sa = SuffixArray::with_sentinel(&data, &sentinel).with_context(|| {
                format!("Failed to sort suffixes of '{}'", input.display())
            })?;
            let bwt = sa
                .bwt(sentinel)
                .with_context(|| format!("Failed to transform '{}'", input.display()))?;

            fs::write(&output, bwt.last_column())
                .with_context(|| format!("Failed to write output file '{}'", output.display()))?;

            info!(
                "wrote last column of {} symbols with {} runs",
                bwt.len(),
                bwt.runs(),
            );
            println!("{}", bwt.sentinel_row());
        }
        Command::Unbwt { input, row, output } => {
            let last_column = read_input(&input)?;
            let mut text = sais_bwt::inverse_bwt(&last_column, row).with_context(|| {
                format!("Failed to invert transform read from '{}'", input.display())
            })?;

            // The restored text ends with the sentinel
            text.pop();

            fs::write(&output, &text)
                .with_context(|| format!("Failed to write output file '{}'", output.display()))?;

            info!("restored {} bytes", text.len());
        }
        Command::Runs { input, sentinel } => {
            let data = read_input(&input)?;
            let sa = SuffixArray::with_sentinel(&data, &sentinel).with_context(|| {
                format!("Failed to sort suffixes of '{}'", input.display())
            })?;
            let bwt = sa
                .bwt(sentinel)
                .with_context(|| format!("Failed to transform '{}'", input.display()))?;

            println!("{}\t{}", bwt.runs(), bwt.len());
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    let data =
        fs::read(path).with_context(|| format!("Failed to read input file '{}'", path.display()))?;
    if data.is_empty() {
        bail!("Input file '{}' is empty", path.display());
    }

    info!("read {} bytes from '{}'", data.len(), path.display());

    Ok(data)
}
