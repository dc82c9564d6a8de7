use base65536::io_stream::{DecodeReader, EncodeWriter};
use base65536::table::{BLOCK_STARTS, PADDING_BLOCK_START};
use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "b65536", about = "Base65536 binary-to-text codec CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode bytes into Base65536 text
    Encode {
        /// Input file; standard input when omitted or "-"
        input: Option<PathBuf>,
        /// Output file; standard output when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Insert a line feed after every N code points
        #[arg(short, long)]
        wrap: Option<usize>,
    },
    /// Decode Base65536 text back into bytes
    Decode {
        /// Input file; standard input when omitted or "-"
        input: Option<PathBuf>,
        /// Output file; standard output when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Skip characters outside the alphabet instead of failing
        #[arg(short = 'g', long)]
        ignore_garbage: bool,
    },
    /// Print the 256 block starts and the padding block
    Table,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    match Cli::parse().command {

        // ── Encode ───────────────────────────────────────────────────────────
        Commands::Encode { input, output, wrap } => {
            let mut src = open_input(input.as_deref())?;
            let dst = open_output(output.as_deref())?;
            let mut enc = match wrap {
                Some(width) => EncodeWriter::with_wrap(dst, width),
                None        => EncodeWriter::new(dst),
            };
            io::copy(&mut src, &mut enc)?;
            enc.finish()?;
        }

        // ── Decode ───────────────────────────────────────────────────────────
        Commands::Decode { input, output, ignore_garbage } => {
            let src = open_input(input.as_deref())?;
            let mut dst = open_output(output.as_deref())?;
            let mut dec = DecodeReader::with_options(src, ignore_garbage);
            io::copy(&mut dec, &mut dst)?;
            dst.flush()?;
        }

        // ── Table ────────────────────────────────────────────────────────────
        Commands::Table => {
            println!("{:>4}  {:>7}  Sample", "Byte", "Block");
            for (i, &start) in BLOCK_STARTS.iter().enumerate() {
                println!("0x{:02X}  U+{:05X}  {}", i, start, char::from_u32(start).unwrap());
            }
            println!(" pad  U+{:05X}  {}",
                     PADDING_BLOCK_START, char::from_u32(PADDING_BLOCK_START).unwrap());
        }
    }

    Ok(())
}

// ── helpers ──────────────────────────────────────────────────────────────────

fn open_input(path: Option<&Path>) -> io::Result<Box<dyn Read>> {
    Ok(match path {
        Some(p) if p.as_os_str() != "-" => Box::new(std::fs::File::open(p)?),
        _ => Box::new(io::stdin().lock()),
    })
}

fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => Box::new(io::BufWriter::new(std::fs::File::create(p)?)),
        None    => Box::new(io::BufWriter::new(io::stdout().lock())),
    })
}
