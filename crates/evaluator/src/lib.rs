use colored::*;
use models::{ProductId, ValidationResult};
use serde_json::Value;
use std::io::{self, Write};
use thiserror::Error;
use validators::validate_product;

#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error("Product at index {index} is not a JSON object: {value}")]
    NotAnObject { index: usize, value: String },

    #[error("Failed to write progress output: {0}")]
    Io(#[from] io::Error),
}

/// Validate every product in listing order, starting from an empty result.
///
/// In verbose mode one progress line per product is written to `out`.
pub fn evaluate_products<W: Write>(
    products: &[Value],
    verbose: bool,
    out: &mut W,
) -> Result<ValidationResult, EvaluationError> {
    let mut result = ValidationResult::new();

    for (index, product) in products.iter().enumerate() {
        let product_map = product
            .as_object()
            .ok_or_else(|| EvaluationError::NotAnObject {
                index,
                value: product.to_string(),
            })?;

        let before = result.defect_count();
        validate_product(product_map, &mut result);
        result.record_product();

        let found = result.defect_count() - before;
        let product_id = ProductId::of(product_map);
        if found > 0 {
            logging::debug(&format!("Product {} failed {} rule(s)", product_id, found));
        }

        if verbose {
            if found == 0 {
                writeln!(
                    out,
                    "{} Product {} passed validation",
                    "✓".green(),
                    product_id
                )?;
            } else {
                writeln!(out, "{} Product {}: {} defect(s)", "✗".red(), product_id, found)?;
            }
        }
    }

    Ok(result)
}
