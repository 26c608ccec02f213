use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use clap::{Args, Parser};
use hashcalc::{Config, Error, Family, Report, Result};
use env_logger::Env;
use log::info;

#[derive(Debug, Parser)]
#[command(name = "hashcalc", version)]
#[command(about = "Print checksums, digests and text encodings of a file or string")]
struct Cli {
    #[command(flatten)]
    input: Input,

    /// Only report these families
    #[arg(long, value_enum, value_delimiter = ',', num_args = 1..)]
    only: Vec<Family>,

    /// Render checksums and digests in lowercase hex
    #[arg(long)]
    lowercase_hex: bool,

    /// Wrap Ascii85 output at N columns
    #[arg(long, value_name = "N", default_value_t = 0)]
    ascii85_width: usize,

    /// Wrap Base32 output every N symbols
    #[arg(long, value_name = "N", default_value_t = 0)]
    base32_line_length: usize,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct Input {
    /// Read input from a file
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Use the UTF-8 bytes of a string as input
    #[arg(long, value_name = "STRING")]
    text: Option<String>,
}

impl Input {
    fn read(self) -> Result<Vec<u8>> {
        match (self.file, self.text) {
            (Some(path), _) => {
                info!("reading {}", path.display());
                fs::read(&path).map_err(|source| Error::Read { path, source })
            }
            (None, Some(text)) => Ok(text.into_bytes()),
            (None, None) => Ok(Vec::new()),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config {
        only: cli.only,
        lowercase_hex: cli.lowercase_hex,
        ascii85_width: cli.ascii85_width,
        base32_line_length: cli.base32_line_length,
    };
    let data = cli.input.read()?;
    let report = Report::generate(&data, &config)?;

    let mut out = io::stdout().lock();
    write!(out, "{report}")?;
    out.flush()?;
    Ok(())
}
