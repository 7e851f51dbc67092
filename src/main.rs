use clap::Parser;
use image_grayscale::cli::{self, Args, Command};
use image_grayscale::config::Config;
use image_grayscale::GrayscaleError;

/// Initialise logging. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(args: Args) -> Result<(), GrayscaleError> {
    let config = Config::load(args.config.as_deref())?;

    match args.command {
        Command::Convert {
            path,
            workers,
            strategy,
            output_dir,
        } => {
            let request = cli::job_request(&config, path, workers, strategy, output_dir);
            cli::convert(&request)
        }
        Command::Bench {
            path,
            workers,
            iterations,
        } => cli::bench(&path, &workers, iterations),
        Command::Config { action } => {
            cli::handle_config_action(action, &config, args.config.as_deref())
        }
    }
}

fn main() {
    // dotenv::dotenv() returns Err if .env doesn't exist, which is fine
    let _ = dotenv::dotenv();

    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
