use std::path::PathBuf;

use dotenv::dotenv;
use structopt::StructOpt;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use graphclean::driver::{self, Config};

#[derive(StructOpt)]
struct Opts {
    /// Directory scanned recursively for input graph files
    #[structopt(short, long)]
    input_dir: Option<PathBuf>,

    /// Directory the normalized edge lists are written to
    #[structopt(short, long)]
    output_dir: Option<PathBuf>,
}

fn main() {
    dotenv().ok();

    let opts = Opts::from_args();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "graphclean=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config {
        input_root: opts
            .input_dir
            .or_else(|| std::env::var_os("INPUT_DIR").map(PathBuf::from))
            .expect("INPUT_DIR must be set or --input-dir must be provided"),
        output_root: opts
            .output_dir
            .or_else(|| std::env::var_os("OUTPUT_DIR").map(PathBuf::from))
            .expect("OUTPUT_DIR must be set or --output-dir must be provided"),
    };

    match driver::run(&config) {
        Ok(summary) => info!(
            "Conversion completed: {} file(s) converted, {} failed",
            summary.converted, summary.failed
        ),
        Err(err) => {
            error!("{err:#}");
            std::process::exit(1);
        }
    }
}
