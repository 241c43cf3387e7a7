use apicheck_lib::{run, RunConfig, DEFAULT_ENDPOINT};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "apicheck",
    about = "Product API response validator",
    version,
    long_about = "Fetches the product listing from an HTTP endpoint once and reports every product that breaks a data-quality rule.\n\nExamples:\n  apicheck                                        # Check http://localhost:3001/products\n  apicheck --url http://staging:3001/products     # Check another endpoint\n  apicheck --verbose                              # Show a line per product"
)]
struct Apicheck {
    /// Endpoint returning the JSON array of products
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    url: String,

    /// Show per-product progress and informational logs
    #[arg(short, long)]
    verbose: bool,

    /// Show detailed debug logs
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let cli = Apicheck::parse();

    if cli.debug {
        logging::set_log_level(logging::LogLevel::Debug);
        logging::debug("Debug mode enabled - showing detailed logs");
    } else if cli.verbose {
        logging::set_log_level(logging::LogLevel::Info);
        logging::info("Verbose mode enabled");
    } else {
        logging::set_log_level(logging::LogLevel::Warning);
    }

    let config = RunConfig {
        endpoint: cli.url,
        verbose: cli.verbose,
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = run(&config, &mut stdout).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
