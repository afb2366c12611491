mod args;
mod eloquent;

use clap::Parser;
use log::error;

use crate::args::Args;

fn main() {
    let args = Args::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if args.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    if let Err(e) = eloquent::run_ranking(&args) {
        error!("{:?}", e);
        eprintln!("An error occured: {}", e);
        std::process::exit(1);
    }
}
