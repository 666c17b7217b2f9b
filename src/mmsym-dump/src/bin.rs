/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use std::{error::Error, fs, path::Path, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};

use mmsym::symbols::SymbolTable;

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum ArgFormat {
    /// Loosely-formatted `name: hexvalue` lines, optionally wrapped in `{}`.
    Text,
    /// The binary encoding embedded into patched images.
    Bytes,
}

/// mmsym-dump: decode a symbols file and print every entry
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    input_path: PathBuf,

    /// Input encoding. Defaults from the extension: `json`/`txt` are text,
    /// anything else is bytes.
    #[clap(long)]
    format: Option<ArgFormat>,

    /// Also print the payload range the table describes.
    #[clap(long)]
    payload: bool,
}

fn format_for(path: &Path) -> ArgFormat {
    match path.extension().and_then(|extension| extension.to_str()) {
        Some("json" | "txt") => ArgFormat::Text,
        _ => ArgFormat::Bytes,
    }
}

fn load_table(args: &Args) -> Result<SymbolTable, Box<dyn Error>> {
    let format = args
        .format
        .unwrap_or_else(|| format_for(&args.input_path));

    let table = match format {
        ArgFormat::Text => {
            let text = fs::read_to_string(&args.input_path)?;
            SymbolTable::from_text(&text)?
        }
        ArgFormat::Bytes => {
            let bytes = fs::read(&args.input_path)?;
            SymbolTable::from_bytes(&bytes)?
        }
    };

    Ok(table)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let table = match load_table(&args) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Unable to load '{}': {}", args.input_path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    for (name, value) in table.iter() {
        println!("{} = 0x{:08X}", name, value);
    }

    if args.payload {
        match (table.payload_start(), table.payload_end()) {
            (Ok(start), Ok(end)) => {
                println!("payload: 0x{:08X}..0x{:08X}", start, end);
            }
            (Err(e), _) | (_, Err(e)) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_defaults_from_the_extension() {
        assert_eq!(format_for(Path::new("symbols.json")), ArgFormat::Text);
        assert_eq!(format_for(Path::new("symbols.txt")), ArgFormat::Text);
        assert_eq!(format_for(Path::new("symbols.bin")), ArgFormat::Bytes);
        assert_eq!(format_for(Path::new("symbols")), ArgFormat::Bytes);
    }
}
