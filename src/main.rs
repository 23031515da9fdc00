use clap::Parser;

use hexpix::cli::{self, Args};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = cli::run_convert(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
