use evaluator::{evaluate_products, EvaluationError};
use fetcher::{build_client, fetch_products, FetchError, FetchedProducts};
use models::ValidationResult;
use std::io::{self, Write};

pub use fetcher::DEFAULT_ENDPOINT;

/// Settings for a single fetch-validate-report cycle
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub endpoint: String,
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            verbose: false,
        }
    }
}

impl RunConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        RunConfig {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }
}

/// How a run ended. Both variants are a clean finish for the process.
#[derive(Debug)]
pub enum RunOutcome {
    Completed(ValidationResult),
    Aborted(FetchError),
}

impl RunOutcome {
    pub fn defects_found(&self) -> usize {
        match self {
            RunOutcome::Completed(result) => result.defect_count(),
            RunOutcome::Aborted(_) => 0,
        }
    }
}

/// Fetch the product listing, validate every product and print the report.
///
/// Fetch failures are printed and turned into `RunOutcome::Aborted`; the only
/// error returned is a failure to write to `out`.
pub async fn run<W: Write>(config: &RunConfig, out: &mut W) -> io::Result<RunOutcome> {
    reporter::print_banner(out)?;
    logging::info(&format!("Testing endpoint {}", config.endpoint));

    let FetchedProducts { status, products } = match fetch(config).await {
        Ok(fetched) => fetched,
        Err(e) => return abort(e, out),
    };

    reporter::print_fetch_success(status, out)?;
    reporter::print_product_count(products.len(), out)?;
    logging::debug(&format!("Decoded {} product records", products.len()));

    let result = match evaluate_products(&products, config.verbose, out) {
        Ok(result) => result,
        Err(EvaluationError::Io(e)) => return Err(e),
        Err(e) => return abort(FetchError::Unexpected(e.to_string()), out),
    };

    reporter::print_results(&result, out)?;
    logging::info(&format!(
        "Checked {} products, found {} defects",
        result.products_checked,
        result.defect_count()
    ));

    Ok(RunOutcome::Completed(result))
}

async fn fetch(config: &RunConfig) -> Result<FetchedProducts, FetchError> {
    let client = build_client()?;
    fetch_products(&client, &config.endpoint).await
}

fn abort<W: Write>(error: FetchError, out: &mut W) -> io::Result<RunOutcome> {
    reporter::print_fetch_error(&error, out)?;
    logging::warning(&format!("Run aborted: {}", error));
    Ok(RunOutcome::Aborted(error))
}
