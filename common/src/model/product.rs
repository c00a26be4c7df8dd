use serde::{Deserialize, Serialize};

/// A product row as annotated by the catalog validation service.
///
/// The service owns the semantic checks; the client only aggregates the
/// `validation` messages. An empty `validation` list means the row can be
/// updated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedProduct {
    pub code: String,
    pub name: String,
    pub current_price: f64,
    pub new_price: f64,
    /// Error messages returned for this row, in service order.
    #[serde(default)]
    pub validation: Vec<String>,
}

/// How a single table row is displayed in the Validation column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus<'a> {
    Validated,
    Rejected(&'a [String]),
}

impl ValidatedProduct {
    pub fn is_valid(&self) -> bool {
        self.validation.is_empty()
    }

    pub fn status(&self) -> RowStatus<'_> {
        if self.is_valid() {
            RowStatus::Validated
        } else {
            RowStatus::Rejected(&self.validation)
        }
    }
}

/// True when every row passed the service checks. An empty batch passes.
pub fn all_rows_valid(rows: &[ValidatedProduct]) -> bool {
    rows.iter().all(ValidatedProduct::is_valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_service_row() {
        let json = r#"{"code":"16","name":"AZEITE","currentPrice":35.5,"newPrice":37.9,"validation":["price below minimum"]}"#;
        let row: ValidatedProduct = serde_json::from_str(json).unwrap();
        assert_eq!(row.code, "16");
        assert_eq!(row.current_price, 35.5);
        assert_eq!(row.new_price, 37.9);
        assert_eq!(row.status(), RowStatus::Rejected(&["price below minimum".to_string()]));
    }

    #[test]
    fn test_missing_validation_defaults_to_clean() {
        let json = r#"{"code":"18","name":"BEBIDA","currentPrice":8.0,"newPrice":8.5}"#;
        let row: ValidatedProduct = serde_json::from_str(json).unwrap();
        assert!(row.is_valid());
        assert_eq!(row.status(), RowStatus::Validated);
    }

    #[test]
    fn test_serializes_camel_case() {
        let row = ValidatedProduct {
            code: "P1".to_string(),
            name: "Produto".to_string(),
            current_price: 10.0,
            new_price: 11.0,
            validation: vec![],
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["currentPrice"], 10.0);
        assert_eq!(value["newPrice"], 11.0);
    }

    #[test]
    fn test_all_rows_valid() {
        let clean = ValidatedProduct::default();
        let dirty = ValidatedProduct {
            validation: vec!["x".to_string()],
            ..ValidatedProduct::default()
        };
        assert!(all_rows_valid(&[]));
        assert!(all_rows_valid(&[clean.clone(), clean.clone()]));
        assert!(!all_rows_valid(&[clean, dirty]));
    }
}
