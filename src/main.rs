//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::fs;
use std::io::{self, Write};
use std::process::exit;

use huffsize::tools::cli::{huffopts_init, HuffOpts};
use huffsize::tools::report::write_report;
use huffsize::{analyze, Result};

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace. The cli lowers this per -v.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("Can't start the logger: {}", e);
    }

    let opts = huffopts_init();

    if let Err(e) = run(&opts) {
        error!("{}", e);
        exit(1);
    }
    info!("Done.\n");
}

/// Read the whole input file, run the pipeline and print the report to stdout.
fn run(opts: &HuffOpts) -> Result<()> {
    let data = fs::read(&opts.file).map_err(|e| {
        error!("Error while opening the file => {}", opts.file);
        e
    })?;
    info!("Read {} bytes from {}", data.len(), opts.file);

    let analysis = analyze(&data, opts.chunk_size)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, opts, &analysis)?;
    out.flush()?;
    Ok(())
}
