use crate::numeric_value;
use models::{render_literal, Defect, DefectKind, ProductId, ValidationResult};
use serde_json::{Map, Value};

pub fn validate_price(
    product_id: &ProductId,
    product: &Map<String, Value>,
    result: &mut ValidationResult,
) {
    let default = Value::from(0);
    let price = product.get("price").unwrap_or(&default);

    let is_valid = matches!(numeric_value(price), Some(amount) if amount >= 0.0);

    if !is_valid {
        result.add_defect(Defect::new(
            product_id.clone(),
            DefectKind::InvalidPrice,
            format!(
                "Product price is negative or not a number: {}",
                render_literal(price)
            ),
        ));
    }
}
