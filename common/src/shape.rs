//! Offline structural check of a picked file.
//!
//! A price update file must have exactly two columns, named `product_code`
//! and `new_price` in any order, and at least one data row. The check never
//! talks to the catalog service.

use crate::model::csv::ParsedFile;

pub const PRODUCT_CODE_HEADER: &str = "product_code";
pub const NEW_PRICE_HEADER: &str = "new_price";
pub const EXPECTED_COLUMNS: usize = 2;

/// Outcome of `validate_shape`.
///
/// `invalid` gates the Validate action, `show_feedback` gates the error
/// banner. Nothing picked yet is invalid but silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeCheck {
    pub invalid: bool,
    pub show_feedback: bool,
}

impl ShapeCheck {
    pub const IDLE: ShapeCheck = ShapeCheck {
        invalid: true,
        show_feedback: false,
    };
    pub const REJECTED: ShapeCheck = ShapeCheck {
        invalid: true,
        show_feedback: true,
    };
    pub const ACCEPTED: ShapeCheck = ShapeCheck {
        invalid: false,
        show_feedback: false,
    };
}

impl Default for ShapeCheck {
    fn default() -> Self {
        Self::IDLE
    }
}

pub fn validate_shape(selected_file: Option<&ParsedFile>) -> ShapeCheck {
    let Some(file) = selected_file else {
        return ShapeCheck::IDLE;
    };

    let malformed = file.column_count() != EXPECTED_COLUMNS
        || file.row_count() == 0
        || !file.has_header(PRODUCT_CODE_HEADER)
        || !file.has_header(NEW_PRICE_HEADER);

    if malformed {
        ShapeCheck::REJECTED
    } else {
        ShapeCheck::ACCEPTED
    }
}

/// Text of the invalid-file banner, built from the file's actual contents so
/// the user can see what was wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeFeedback {
    pub title: String,
    pub expectation: String,
    pub observed: String,
}

impl ShapeFeedback {
    pub fn for_file(file: &ParsedFile) -> Self {
        Self {
            title: "Arquivo inválido!".to_string(),
            expectation: format!(
                "Era esperado um arquivo CSV com {} colunas ({} e {}) e pelo menos 1 registro.",
                EXPECTED_COLUMNS, PRODUCT_CODE_HEADER, NEW_PRICE_HEADER
            ),
            observed: format!(
                "Seu arquivo contém {} registro(s) e {} colunas: {}.",
                file.row_count(),
                file.column_count(),
                file.headers.join(", ")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::csv::RawRow;

    fn file(headers: &[&str], rows: usize) -> ParsedFile {
        let data = (0..rows)
            .map(|i| {
                headers
                    .iter()
                    .map(|h| (h.to_string(), format!("{h}-{i}")))
                    .collect::<RawRow>()
            })
            .collect();
        ParsedFile {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            data,
        }
    }

    #[test]
    fn test_nothing_picked_is_silent() {
        assert_eq!(validate_shape(None), ShapeCheck::IDLE);
    }

    #[test]
    fn test_expected_headers_in_any_order() {
        assert_eq!(
            validate_shape(Some(&file(&["product_code", "new_price"], 1))),
            ShapeCheck::ACCEPTED
        );
        assert_eq!(
            validate_shape(Some(&file(&["new_price", "product_code"], 3))),
            ShapeCheck::ACCEPTED
        );
    }

    #[test]
    fn test_rejections() {
        let cases = [
            file(&["sku", "price"], 1),
            file(&["product_code", "new_price"], 0),
            file(&["product_code"], 2),
            file(&["product_code", "new_price", "name"], 2),
            file(&["Product_Code", "new_price"], 1),
            file(&["product_code", "product_code"], 1),
        ];
        for case in &cases {
            assert_eq!(validate_shape(Some(case)), ShapeCheck::REJECTED, "{case:?}");
        }
    }

    #[test]
    fn test_feedback_reports_observed_file() {
        let feedback = ShapeFeedback::for_file(&file(&["sku", "price"], 1));
        assert_eq!(feedback.title, "Arquivo inválido!");
        assert_eq!(
            feedback.expectation,
            "Era esperado um arquivo CSV com 2 colunas (product_code e new_price) e pelo menos 1 registro."
        );
        assert_eq!(
            feedback.observed,
            "Seu arquivo contém 1 registro(s) e 2 colunas: sku, price."
        );
    }
}
