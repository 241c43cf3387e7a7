use models::{render_literal, Defect, DefectKind, ProductId, ValidationResult};
use serde_json::{Map, Value};

pub fn validate_title(
    product_id: &ProductId,
    product: &Map<String, Value>,
    result: &mut ValidationResult,
) {
    let default = Value::String(String::new());
    let title = product.get("title").unwrap_or(&default);

    let is_valid = match title {
        Value::String(s) => !s.trim().is_empty(),
        _ => false,
    };

    if !is_valid {
        result.add_defect(Defect::new(
            product_id.clone(),
            DefectKind::EmptyOrInvalidTitle,
            format!(
                "Product title is empty or not a string: {}",
                render_literal(title)
            ),
        ));
    }
}
