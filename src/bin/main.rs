use std::process;
use clap::Parser;

#[macro_use]
extern crate log;

use anyhow::Result;

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;


/// Parse command line arguments and run `mendacity_rs::run()`
fn main() -> Result<()> {
    // ----------------------------- Run CLI Parser 
    let cli = parser::Cli::parse();

    // ----------------------------- Init logger.
    let verbosity = logger::Logger::verbosity(cli.quiet, cli.verbose);
    if let Err(e) = logger::Logger::init(verbosity) {
        eprintln!("Failed to initialize logger: {e}");
    }
    
    // ----------------------------- Serialize command line arguments
    if let Err(e) = cli.serialize() {
        error!("{:?}", e);
        process::exit(1);
    };
    
    // ----------------------------- Generate test fixtures.
    if let Err(e) = mendacity_rs::run(&cli) {
        error!("{:?}", e);
        process::exit(1);
    };

    Ok(())
}
