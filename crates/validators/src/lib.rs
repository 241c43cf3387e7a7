// validators crate

mod price;
mod rating;
mod title;

pub use price::validate_price;
pub use rating::validate_rating;
pub use title::validate_title;

use models::{Defect, ProductId, ValidationResult};
use serde_json::{Map, Value};

/// Run every product rule in order: title, price, rating.
///
/// Rules never short-circuit each other, so one product adds up to three defects.
pub fn validate_product(product: &Map<String, Value>, result: &mut ValidationResult) {
    let product_id = ProductId::of(product);

    validate_title(&product_id, product, result);
    validate_price(&product_id, product, result);
    validate_rating(&product_id, product, result);
}

/// Numeric value of a JSON number; booleans and numeric strings are not numbers.
pub(crate) fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Defects of a single product, without touching any shared collection
pub fn product_defects(product: &Map<String, Value>) -> Vec<Defect> {
    let mut result = ValidationResult::new();
    validate_product(product, &mut result);
    result.defects
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::DefectKind;
    use serde_json::json;

    fn defects_of(value: Value) -> Vec<Defect> {
        product_defects(value.as_object().expect("test product must be an object"))
    }

    fn kinds(defects: &[Defect]) -> Vec<DefectKind> {
        defects.iter().map(|d| d.kind).collect()
    }

    #[test]
    fn test_valid_product_has_no_defects() {
        let defects = defects_of(json!({
            "id": 1,
            "title": "Shirt",
            "price": 19.99,
            "rating": {"rate": 4.5, "count": 120}
        }));
        assert!(defects.is_empty());
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let defects = defects_of(json!({
            "id": "p-9",
            "title": "   ",
            "price": "free",
            "rating": {"rate": 9}
        }));

        assert_eq!(
            kinds(&defects),
            vec![
                DefectKind::EmptyOrInvalidTitle,
                DefectKind::InvalidPrice,
                DefectKind::InvalidRating
            ]
        );
        for defect in &defects {
            assert_eq!(defect.product_id, ProductId::Known(json!("p-9")));
        }
    }

    #[test]
    fn test_empty_record_only_fails_title() {
        let defects = defects_of(json!({}));

        assert_eq!(kinds(&defects), vec![DefectKind::EmptyOrInvalidTitle]);
        assert_eq!(defects[0].product_id, ProductId::Unknown);
        assert_eq!(defects[0].product_id.to_string(), "Unknown ID");
        assert_eq!(
            defects[0].details,
            "Product title is empty or not a string: "
        );
    }

    #[test]
    fn test_non_mapping_rating_with_other_failures() {
        let defects = defects_of(json!({
            "id": 3,
            "title": 42,
            "price": 5,
            "rating": 4
        }));

        assert_eq!(
            kinds(&defects),
            vec![DefectKind::EmptyOrInvalidTitle, DefectKind::MissingRating]
        );
    }

    #[test]
    fn test_revalidation_is_identical() {
        let product = json!({"id": 4, "title": "", "price": -2, "rating": {"rate": 6}});
        let first = defects_of(product.clone());
        let second = defects_of(product);

        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }
}
