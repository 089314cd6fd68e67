use std::io;
use std::process::exit;

use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG controls engine event verbosity; off by default so game
    // output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let code = gothahula_cli::run(std::env::args(), &mut input, &mut out);
    exit(code);
}
