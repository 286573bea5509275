//! Input events delivered to components by the host.
//!
//! These mirror the two browser events the creation form reacts to: a text
//! field change carrying the whole field value, and a form submission whose
//! default action the handler may suppress.

/// The text field's value changed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeEvent {
    /// The complete new field value
    pub value: String,
}

impl ChangeEvent {
    /// Creates a change event for the given field value
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// The form was submitted
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    /// Creates a fresh submit event
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_prevented: false,
        }
    }

    /// Suppress the host's default submit behaviour (navigation, reload)
    pub const fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a handler suppressed the default behaviour
    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
