//! Component state for the price update page.
//!
//! All workflow state lives in `common::workflow::Workflow`; the component
//! only adds what the browser side needs on top of it.

use common::config::ClientConfig;
use common::workflow::Workflow;
use yew::prelude::*;

pub struct PriceUpdateComponent {
    /// Upload/validate/update state machine.
    pub workflow: Workflow,

    /// Where and how to reach the catalog service.
    pub config: ClientConfig,

    /// Reference to the `<input type="file">`, cleared after a successful update.
    pub file_input_ref: NodeRef,

    /// True while the browser is reading the picked file.
    pub reading_file: bool,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl PriceUpdateComponent {
    pub fn new() -> Self {
        Self {
            workflow: Workflow::new(),
            config: ClientConfig::default(),
            file_input_ref: Default::default(),
            reading_file: false,
            loaded: false,
        }
    }

    /// Controls are locked while a file is being read or a request is in flight.
    pub fn is_busy(&self) -> bool {
        self.reading_file || !self.workflow.can_select_file()
    }

    pub fn validate_enabled(&self) -> bool {
        !self.reading_file && self.workflow.can_validate()
    }

    pub fn update_enabled(&self) -> bool {
        !self.reading_file && self.workflow.can_update()
    }
}
