use std::fmt;

/// Where the upload/validate/update cycle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No file picked, or the last cycle completed.
    Idle,
    /// A file was picked but failed the shape check.
    FileInvalid,
    /// The file passed the shape check and has not been validated yet.
    ReadyToValidate,
    /// The service validated every row without errors.
    ValidatedAllPass,
    /// At least one row came back with errors. Only a new pick leaves this.
    ValidatedHasErrors,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::Idle => "idle",
            Phase::FileInvalid => "holding an invalid file",
            Phase::ReadyToValidate => "ready to validate",
            Phase::ValidatedAllPass => "validated",
            Phase::ValidatedHasErrors => "validated with errors",
        };
        f.write_str(label)
    }
}

/// The two remote actions a user can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Validate,
    Update,
}

impl Action {
    /// The phase in which the action is enabled.
    pub fn enabled_in(self) -> Phase {
        match self {
            Action::Validate => Phase::ReadyToValidate,
            Action::Update => Phase::ValidatedAllPass,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Validate => f.write_str("validate"),
            Action::Update => f.write_str("update"),
        }
    }
}
