use clap::Parser;

use hexpix::cli::{self, ViewArgs};

fn main() {
    // The viewer owns the screen; only errors go to stderr while it runs
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let args = ViewArgs::parse();
    if let Err(e) = cli::run_view(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
