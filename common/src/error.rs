//! Error types shared by the price update workflow.
//!
//! All errors are `Clone + PartialEq` because the workflow keeps the last
//! failure around as a user-facing notice and tests compare them directly.

use crate::workflow::{Action, Phase};
use thiserror::Error;

/// Errors produced while turning a picked file into a `ParsedFile`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// The file name does not carry a `.csv` extension.
    #[error("o arquivo {name} não é um CSV")]
    NotCsv { name: String },

    /// The browser could not hand over the file contents.
    #[error("falha ao ler {name}: {reason}")]
    Unreadable { name: String, reason: String },

    /// The file holds no header line at all.
    #[error("o arquivo {name} está vazio")]
    Empty { name: String },

    /// The CSV reader rejected the contents.
    #[error("CSV malformado na linha {}: {message}", describe_line(.line))]
    Malformed { line: Option<u64>, message: String },
}

impl IntakeError {
    /// A data row whose field count differs from the header's.
    pub fn field_count(line: Option<u64>, expected: u64, found: u64) -> Self {
        Self::Malformed {
            line,
            message: format!("esperado {expected} campos, encontrado {found}"),
        }
    }
}

impl From<csv::Error> for IntakeError {
    fn from(err: csv::Error) -> Self {
        log::warn!("csv reader rejected the file: {err}");
        let line = err.position().map(|pos| pos.line());
        match err.kind() {
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => Self::field_count(line, *expected_len, *len),
            csv::ErrorKind::Utf8 { .. } => Self::Malformed {
                line,
                message: "texto não é UTF-8".to_string(),
            },
            csv::ErrorKind::Io(_) => Self::Malformed {
                line,
                message: "falha de leitura".to_string(),
            },
            _ => Self::Malformed {
                line,
                message: "conteúdo ilegível".to_string(),
            },
        }
    }
}

fn describe_line(line: &Option<u64>) -> String {
    line.map_or_else(|| "?".to_string(), |l| l.to_string())
}

/// Failures of a call to the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The request never produced a response (DNS, CORS, connection reset...).
    #[error("network failure: {0}")]
    Network(String),

    /// The request body could not be serialized.
    #[error("could not encode request: {0}")]
    Encode(String),

    /// The service answered with a non-success status.
    #[error("service responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("could not decode service response: {0}")]
    Decode(String),

    /// No response arrived within the configured timeout.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u32 },
}

/// Illegal calls into the workflow state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// The action is not enabled in the current phase.
    #[error("cannot {action} while the workflow is {phase}")]
    ActionNotAllowed { action: Action, phase: Phase },

    /// Another request has not completed yet.
    #[error("a {0} request is already in flight")]
    RequestInFlight(Action),

    /// A completion arrived that does not match the request in flight.
    #[error("received a {received} response with no matching request")]
    UnexpectedResponse { received: Action },
}

/// Result type for workflow operations.
pub type Result<T> = std::result::Result<T, WorkflowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display_without_position() {
        let err = IntakeError::Malformed {
            line: None,
            message: "bad quote".to_string(),
        };
        assert_eq!(err.to_string(), "CSV malformado na linha ?: bad quote");
    }

    fn first_record_error(contents: &[u8]) -> csv::Error {
        csv::ReaderBuilder::new()
            .from_reader(contents)
            .records()
            .find_map(|record| record.err())
            .unwrap()
    }

    #[test]
    fn test_unequal_lengths_reads_in_portuguese() {
        let err = IntakeError::from(first_record_error(b"a,b\n1\n"));
        assert_eq!(
            err,
            IntakeError::Malformed {
                line: Some(2),
                message: "esperado 2 campos, encontrado 1".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "CSV malformado na linha 2: esperado 2 campos, encontrado 1"
        );
    }

    #[test]
    fn test_invalid_utf8_reads_in_portuguese() {
        let err = IntakeError::from(first_record_error(b"a,b\n\xff,1\n"));
        match err {
            IntakeError::Malformed { message, .. } => assert_eq!(message, "texto não é UTF-8"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_workflow_error_display() {
        let err = WorkflowError::ActionNotAllowed {
            action: Action::Update,
            phase: Phase::ValidatedHasErrors,
        };
        assert_eq!(
            err.to_string(),
            "cannot update while the workflow is validated with errors"
        );
    }
}
