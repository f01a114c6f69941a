use std::num::NonZeroUsize;
use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::{info, LevelFilter};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

impl From<u8> for Verbosity {
    /// -v0 is silent, -v5 and up is chatty
    fn from(v: u8) -> Self {
        match v {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}

impl Display for Verbosity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Defines all user settable options to control program behavior
#[derive(Debug, Clone)]
pub struct HuffOpts {
    /// Name of file to read for input
    pub file: String,
    /// Number of bytes that make up one symbol
    pub chunk_size: NonZeroUsize,
    /// Verbosity of user information
    pub verbose: Verbosity,
    /// Print the frequency listing
    pub show_freqs: bool,
    /// Print the merge tree
    pub show_tree: bool,
    /// Print the code listing
    pub show_codes: bool,
}

impl HuffOpts {
    /// Set default parameters on program start
    pub fn new() -> Self {
        Self {
            file: DEFAULT_FILE.to_string(),
            chunk_size: NonZeroUsize::MIN,
            verbose: Verbosity::Info,
            show_freqs: true,
            show_tree: true,
            show_codes: true,
        }
    }

    /// Put command line information from CLAP into our internal structure and
    /// apply the requested log level.
    pub fn from_args(args: Args) -> Self {
        let opts = Self {
            file: args.filename,
            chunk_size: args.chunk_size,
            verbose: Verbosity::from(args.v),
            show_freqs: !args.no_freqs,
            show_tree: !args.no_tree,
            show_codes: !args.no_codes,
        };

        log::set_max_level(opts.verbose.level_filter());

        info!("---- Initialization Start ----",);
        info!("Verbosity set to {}", opts.verbose);
        info!("Getting input from the file {}", opts.file);
        info!("Chunk size set to {}", opts.chunk_size);
        if !opts.show_tree {
            info!("Not drawing the tree")
        };
        info!("---- Initialization End ----\n");
        opts
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

const DEFAULT_FILE: &str = "input.txt";

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman code table and encoded size for a file",
    long_about = "
    Counts how often every symbol (a fixed number of bytes) occurs in the input, builds a
    Huffman tree from those counts, and lists the resulting code words together with the
    total number of bits the input would take when encoded with them.

    No compressed output is written; this only reports the code and its size."
)]
pub struct Args {
    /// Filename of file to process
    #[clap(default_value = "input.txt")]
    pub filename: String,

    /// Number of bytes per symbol
    #[clap(short = 'k', long = "chunk-size", default_value = "1")]
    pub chunk_size: NonZeroUsize,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    pub v: u8,

    /// Don't list symbol frequencies
    #[clap(long = "no-freqs")]
    pub no_freqs: bool,

    /// Don't draw the tree
    #[clap(long = "no-tree")]
    pub no_tree: bool,

    /// Don't list the code words
    #[clap(long = "no-codes")]
    pub no_codes: bool,
}

/// Read the real command line into a HuffOpts.
pub fn huffopts_init() -> HuffOpts {
    HuffOpts::from_args(Args::parse())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_test() {
        let args = Args::try_parse_from(["huffsize"]).unwrap();
        assert_eq!(args.filename, "input.txt");
        assert_eq!(args.chunk_size.get(), 1);
        assert_eq!(args.v, 3);
        assert!(!args.no_tree);
    }

    #[test]
    fn chunk_size_test() {
        let args = Args::try_parse_from(["huffsize", "-k", "2", "data.bin"]).unwrap();
        assert_eq!(args.filename, "data.bin");
        assert_eq!(args.chunk_size.get(), 2);
    }

    #[test]
    fn zero_chunk_size_test() {
        assert!(Args::try_parse_from(["huffsize", "--chunk-size", "0"]).is_err());
    }

    #[test]
    fn opts_from_args_test() {
        let args =
            Args::try_parse_from(["huffsize", "-v", "9", "--no-tree", "--no-codes", "f"]).unwrap();
        let opts = HuffOpts::from_args(args);
        assert_eq!(opts.verbose, Verbosity::Trace);
        assert!(opts.show_freqs);
        assert!(!opts.show_tree);
        assert!(!opts.show_codes);
        assert_eq!(opts.file, "f");
    }

    #[test]
    fn verbosity_order_test() {
        assert!(Verbosity::from(0) < Verbosity::from(3));
        assert_eq!(Verbosity::from(2).level_filter(), LevelFilter::Warn);
    }
}
