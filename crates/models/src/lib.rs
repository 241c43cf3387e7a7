use serde_json::Value;
use std::fmt;

/// Placeholder shown for products that carry no `id` field
pub const UNKNOWN_ID: &str = "Unknown ID";

/// Render a JSON literal the way it appears in reports.
///
/// Strings print their raw contents, everything else prints as compact JSON.
pub fn render_literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Identifier of the product a defect belongs to
#[derive(Debug, Clone, PartialEq)]
pub enum ProductId {
    /// The literal `id` value of the record, whatever its JSON type
    Known(Value),
    /// The record has no `id` field
    Unknown,
}

impl ProductId {
    pub fn of(product: &serde_json::Map<String, Value>) -> Self {
        match product.get("id") {
            Some(id) => ProductId::Known(id.clone()),
            None => ProductId::Unknown,
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Known(value) => f.write_str(&render_literal(value)),
            ProductId::Unknown => f.write_str(UNKNOWN_ID),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefectKind {
    EmptyOrInvalidTitle,
    InvalidPrice,
    InvalidRating,
    MissingRating,
}

impl DefectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefectKind::EmptyOrInvalidTitle => "Empty or invalid title",
            DefectKind::InvalidPrice => "Invalid price",
            DefectKind::InvalidRating => "Invalid rating",
            DefectKind::MissingRating => "Missing rating",
        }
    }
}

impl fmt::Display for DefectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rule violation found on one product
#[derive(Debug, Clone, PartialEq)]
pub struct Defect {
    pub product_id: ProductId,
    pub kind: DefectKind,
    pub details: String,
}

impl Defect {
    pub fn new(product_id: ProductId, kind: DefectKind, details: String) -> Self {
        Defect {
            product_id,
            kind,
            details,
        }
    }
}

/// Defects collected over one validation run, in the order they were found
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub products_checked: usize,
    pub defects: Vec<Defect>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        ValidationResult {
            is_valid: true,
            products_checked: 0,
            defects: Vec::new(),
        }
    }

    pub fn add_defect(&mut self, defect: Defect) {
        self.is_valid = false;
        self.defects.push(defect);
    }

    pub fn record_product(&mut self) {
        self.products_checked += 1;
    }

    pub fn defect_count(&self) -> usize {
        self.defects.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_literal_strips_string_quotes() {
        assert_eq!(render_literal(&json!("Shirt")), "Shirt");
        assert_eq!(render_literal(&json!("")), "");
        assert_eq!(render_literal(&json!(-0.01)), "-0.01");
        assert_eq!(render_literal(&json!(null)), "null");
        assert_eq!(render_literal(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn test_product_id_display() {
        let with_id = json!({"id": 7});
        let without_id = json!({"title": "Shirt"});

        assert_eq!(
            ProductId::of(with_id.as_object().unwrap()).to_string(),
            "7"
        );
        assert_eq!(
            ProductId::of(without_id.as_object().unwrap()).to_string(),
            "Unknown ID"
        );
    }

    #[test]
    fn test_add_defect_marks_result_invalid() {
        let mut result = ValidationResult::new();
        assert!(result.is_valid);

        result.add_defect(Defect::new(
            ProductId::Unknown,
            DefectKind::MissingRating,
            "Product rating object is missing or invalid".to_string(),
        ));

        assert!(!result.is_valid);
        assert_eq!(result.defect_count(), 1);
        assert_eq!(result.defects[0].kind.to_string(), "Missing rating");
    }
}
