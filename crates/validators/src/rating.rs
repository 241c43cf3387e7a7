use crate::numeric_value;
use models::{render_literal, Defect, DefectKind, ProductId, ValidationResult};
use serde_json::{Map, Value};

const MAX_RATE: f64 = 5.0;

/// Only the upper bound of `rate` is enforced; negative rates pass.
pub fn validate_rating(
    product_id: &ProductId,
    product: &Map<String, Value>,
    result: &mut ValidationResult,
) {
    let rating = match product.get("rating") {
        // An absent rating is an empty mapping, whose rate defaults to 0
        None => return,
        Some(rating) => rating,
    };

    match rating {
        Value::Object(rating_map) => {
            let default = Value::from(0);
            let rate = rating_map.get("rate").unwrap_or(&default);

            let is_valid = matches!(numeric_value(rate), Some(value) if value <= MAX_RATE);

            if !is_valid {
                result.add_defect(Defect::new(
                    product_id.clone(),
                    DefectKind::InvalidRating,
                    format!(
                        "Product rating exceeds 5 or is not a number: {}",
                        render_literal(rate)
                    ),
                ));
            }
        }
        _ => {
            result.add_defect(Defect::new(
                product_id.clone(),
                DefectKind::MissingRating,
                "Product rating object is missing or invalid".to_string(),
            ));
        }
    }
}
