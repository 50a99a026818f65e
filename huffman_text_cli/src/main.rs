#![doc = include_str!("../README.md")]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dyn_size_of::GetSize;
use huffman_text::{compress, decompress, io, stats::Statistics, Error};

#[derive(Subcommand)]
pub enum Command {
    /// Decompresses NAME_comp.bin to NAME.txt, using the frequencies from NAME_freq.txt
    #[clap(visible_alias = "d")]
    Decompress {
        /// The compressed file
        compressed: PathBuf,

        /// The frequency table file (default: derived from the name of the compressed file)
        #[arg(short = 'f', long)]
        frequencies: Option<PathBuf>,

        /// The output text file (default: derived from the name of the compressed file)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Whether to print the codewords of all symbols
        #[arg(long, default_value_t = false)]
        codes: bool,
    },
    /// Compresses NAME.txt to NAME_comp.bin and writes its frequency table to NAME_freq.txt
    #[clap(visible_alias = "c")]
    Compress {
        /// The text file
        text: PathBuf,

        /// The output compressed file (default: derived from the name of the text file)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// The output frequency table file (default: derived from the name of the output file)
        #[arg(short = 'f', long)]
        frequencies: Option<PathBuf>,
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = None, infer_subcommands=true)]
/// Huffman compression of text files.
pub struct Conf {
    #[command(subcommand)]
    pub command: Command,
}

fn run_decompress(compressed: PathBuf, frequencies: Option<PathBuf>, output: Option<PathBuf>, codes: bool) -> Result<(), Error> {
    let frequencies_file = match frequencies { Some(f) => f, None => io::frequencies_path(&compressed)? };
    let output = match output { Some(o) => o, None => io::text_path(&compressed)? };
    let frequencies = io::read_frequencies(&frequencies_file)?;
    let bytes = io::read_compressed(&compressed)?;
    let decompressed = decompress(&frequencies, &bytes)?;
    if codes {
        for (symbol, code) in decompressed.table().iter() {
            println!("{:>4} {}", symbol, code);
        }
        println!("code table occupies {} bytes", decompressed.table().size_bytes());
    }
    let written = io::write_text(&output, decompressed.iter())?;
    println!("{} symbols decoded to {}", decompressed.len(), output.display());
    println!("{}", Statistics::new(bytes.len() as u64, written, &frequencies));
    Ok(())
}

fn run_compress(text: PathBuf, output: Option<PathBuf>, frequencies: Option<PathBuf>) -> Result<(), Error> {
    let output = match output { Some(o) => o, None => io::compressed_path(&text)? };
    let frequencies_file = match frequencies { Some(f) => f, None => io::frequencies_path(&output)? };
    let compressed = compress(&std::fs::read_to_string(&text)?)?;
    io::write_compressed(&output, &compressed.bytes)?;
    io::write_frequencies(&frequencies_file, &compressed.frequencies)?;
    println!("{} symbols ({} different) compressed to {} bytes in {}",
        compressed.frequencies.total_count(), compressed.frequencies.len(), compressed.bytes.len(), output.display());
    Ok(())
}

fn main() -> ExitCode {
    let conf: Conf = Conf::parse();
    let result = match conf.command {
        Command::Decompress { compressed, frequencies, output, codes } =>
            run_decompress(compressed, frequencies, output, codes),
        Command::Compress { text, output, frequencies } =>
            run_compress(text, output, frequencies),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
