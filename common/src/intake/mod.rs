//! Turns the bytes of a user-picked file into a `ParsedFile`.
//!
//! The intake only decides whether the file can be read as CSV at all. Whether
//! the columns are the right ones is the job of `shape::validate_shape`, which
//! needs the parsed headers and row count to produce its diagnostics.

use crate::error::IntakeError;
use crate::model::csv::{ParsedFile, RawRow};
use csv::{ReaderBuilder, Trim};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Rejects anything whose name does not end with `.csv` (any case).
pub fn ensure_csv_extension(name: &str) -> Result<(), IntakeError> {
    let is_csv = name
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        Ok(())
    } else {
        Err(IntakeError::NotCsv {
            name: name.to_string(),
        })
    }
}

/// Reads a price update file picked by the user.
///
/// The file name is checked first, then the contents are parsed with
/// `parse_csv`. A file with a header line and no data rows is returned as-is.
pub fn read_price_file(name: &str, contents: &[u8]) -> Result<ParsedFile, IntakeError> {
    ensure_csv_extension(name)?;
    let parsed = parse_csv(contents).map_err(|err| match err {
        IntakeError::Empty { .. } => IntakeError::Empty {
            name: name.to_string(),
        },
        other => other,
    })?;
    log::debug!(
        "read {}: {} row(s), headers {:?}",
        name,
        parsed.row_count(),
        parsed.headers
    );
    Ok(parsed)
}

/// Parses CSV bytes into headers and rows keyed by header.
///
/// The delimiter is sniffed from the header line. Cells are trimmed and lines
/// whose cells are all blank are skipped, wherever they appear; a row with a
/// different field count than the header is rejected.
pub fn parse_csv(contents: &[u8]) -> Result<ParsedFile, IntakeError> {
    let contents = contents.strip_prefix(UTF8_BOM).unwrap_or(contents);
    let empty = || IntakeError::Empty {
        name: String::new(),
    };
    let header_line = first_non_blank_line(contents).ok_or_else(empty)?;
    let delimiter = detect_delimiter(header_line);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(contents);

    let mut headers: Option<Vec<String>> = None;
    let mut data = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cells: Vec<String> = record.iter().map(normalize_cell).collect();
        if cells.iter().all(String::is_empty) {
            continue;
        }
        let Some(header_cells) = headers.as_ref() else {
            headers = Some(cells);
            continue;
        };
        if cells.len() != header_cells.len() {
            return Err(IntakeError::field_count(
                record.position().map(|pos| pos.line()),
                header_cells.len() as u64,
                cells.len() as u64,
            ));
        }
        let row: RawRow = header_cells.iter().cloned().zip(cells).collect();
        data.push(row);
    }

    let headers = headers.ok_or_else(empty)?;
    Ok(ParsedFile { headers, data })
}

/// Picks the most frequent candidate delimiter on the header line, defaulting
/// to a comma when none appears. Bytes inside double quotes are not counted.
pub fn detect_delimiter(header_line: &[u8]) -> u8 {
    let mut counts = [0usize; CANDIDATE_DELIMITERS.len()];
    let mut quoted = false;
    for &b in header_line {
        if b == b'"' {
            quoted = !quoted;
        } else if !quoted {
            if let Some(i) = CANDIDATE_DELIMITERS.iter().position(|&d| d == b) {
                counts[i] += 1;
            }
        }
    }

    CANDIDATE_DELIMITERS
        .iter()
        .zip(counts)
        .filter(|&(_, count)| count > 0)
        .fold(None, |best: Option<(u8, usize)>, (&d, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((d, count)),
        })
        .map_or(b',', |(d, _)| d)
}

fn first_non_blank_line(contents: &[u8]) -> Option<&[u8]> {
    contents
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .find(|line| line.iter().any(|b| !b.is_ascii_whitespace()))
}

fn normalize_cell(cell: &str) -> String {
    let cell = cell.trim();
    let cell = cell
        .strip_prefix('"')
        .and_then(|c| c.strip_suffix('"'))
        .unwrap_or(cell);
    cell.replace('\u{00A0}', " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_comma_separated_file() {
        let parsed = read_price_file("precos.csv", b"product_code,new_price\n16,20.5\n18,9.99\n").unwrap();
        assert_eq!(parsed.headers, vec!["product_code", "new_price"]);
        assert_eq!(parsed.row_count(), 2);
        assert_eq!(parsed.data[0]["product_code"], "16");
        assert_eq!(parsed.data[1]["new_price"], "9.99");
    }

    #[test]
    fn test_detects_semicolon_and_strips_bom() {
        let parsed = parse_csv("\u{feff}product_code;new_price\r\nP1;10,00\r\n".as_bytes()).unwrap();
        assert_eq!(parsed.headers, vec!["product_code", "new_price"]);
        assert_eq!(parsed.data[0]["new_price"], "10,00");
    }

    #[test]
    fn test_single_column_defaults_to_comma() {
        assert_eq!(detect_delimiter(b"product_code"), b',');
        let parsed = parse_csv(b"product_code\nP1\n").unwrap();
        assert_eq!(parsed.headers, vec!["product_code"]);
        assert_eq!(parsed.row_count(), 1);
    }

    #[test]
    fn test_delimiter_ties_prefer_comma() {
        assert_eq!(detect_delimiter(b"a,b;c"), b',');
        assert_eq!(detect_delimiter(b"a;b;c,d"), b';');
    }

    #[test]
    fn test_delimiter_ignores_quoted_header_cells() {
        assert_eq!(detect_delimiter("\"código;sku\",new_price".as_bytes()), b',');
        let parsed = parse_csv("\"código;sku\",new_price\nP1,1\n".as_bytes()).unwrap();
        assert_eq!(parsed.headers, vec!["código;sku", "new_price"]);
    }

    #[test]
    fn test_trims_cells_and_quotes() {
        let parsed = parse_csv(b" product_code , \"new_price\" \n \"P 1\" , 10.00 \n").unwrap();
        assert_eq!(parsed.headers, vec!["product_code", "new_price"]);
        assert_eq!(parsed.data[0]["product_code"], "P 1");
        assert_eq!(parsed.data[0]["new_price"], "10.00");
    }

    #[test]
    fn test_header_only_file_has_no_rows() {
        let parsed = parse_csv(b"product_code,new_price\n").unwrap();
        assert_eq!(parsed.column_count(), 2);
        assert_eq!(parsed.row_count(), 0);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let parsed = parse_csv(b"\nproduct_code,new_price\n\nP1,1\n\n").unwrap();
        assert_eq!(parsed.row_count(), 1);
    }

    #[test]
    fn test_whitespace_only_lines_are_skipped() {
        let trailing = parse_csv(b"product_code,new_price\nP1,10.00\n \n\t\n").unwrap();
        assert_eq!(trailing.row_count(), 1);

        let leading = parse_csv(b"   \nproduct_code,new_price\nP1,10.00\n").unwrap();
        assert_eq!(leading.headers, vec!["product_code", "new_price"]);
        assert_eq!(leading.data[0]["new_price"], "10.00");

        let between = parse_csv(b"product_code;new_price\n ; \nP1;10,00\n").unwrap();
        assert_eq!(between.row_count(), 1);
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let err = read_price_file("vazio.csv", b"  \n\n").unwrap_err();
        assert_eq!(
            err,
            IntakeError::Empty {
                name: "vazio.csv".to_string()
            }
        );
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let err = parse_csv(b"product_code,new_price\nP1,1,extra\n").unwrap_err();
        assert_eq!(err, IntakeError::field_count(Some(2), 2, 3));
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let err = parse_csv(b"product_code,new_price\nP\xff,1\n").unwrap_err();
        assert!(matches!(err, IntakeError::Malformed { .. }));
    }

    #[test]
    fn test_extension_check() {
        assert!(ensure_csv_extension("precos.CSV").is_ok());
        assert!(ensure_csv_extension("a.b.csv").is_ok());
        assert_eq!(
            read_price_file("precos.xlsx", b"product_code,new_price\nP1,1\n").unwrap_err(),
            IntakeError::NotCsv {
                name: "precos.xlsx".to_string()
            }
        );
        assert!(ensure_csv_extension("csv").is_err());
    }
}
