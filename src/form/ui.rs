//! Contact-form UI state.
//!
//! A headless rendition of the site's contact form: three field values, a
//! status line, and the submit control. The pending state is a resource,
//! acquired before the request goes out and released on every exit path by
//! [`PendingGuard`]'s `Drop`, including panic unwind.

/// Status line shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    /// Nothing displayed
    Hidden,
    /// Affirmative message after a delivered submission
    Success(String),
    /// Error message; the form keeps its contents for resubmission
    Error(String),
}

/// State of the contact form between events.
///
/// Initialized once on page load, torn down never.
#[derive(Debug, Clone)]
pub struct ContactForm {
    /// Name field value
    pub name: String,

    /// Email field value
    pub email: String,

    /// Message field value
    pub message: String,

    status: FormStatus,
    pending: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    /// Create an empty, idle form.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            status: FormStatus::Hidden,
            pending: false,
        }
    }

    /// Whether a submission is currently in flight.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Whether the submit control accepts clicks.
    pub fn submit_enabled(&self) -> bool {
        !self.pending
    }

    /// Whether the loading indicator replaces the submit label.
    pub fn loader_visible(&self) -> bool {
        self.pending
    }

    /// Current status line.
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub(crate) fn set_status(&mut self, status: FormStatus) {
        self.status = status;
    }

    /// Clear all field values (after a successful submission).
    pub fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Scoped pending state: acquired before the request, released on drop.
///
/// Holding the only `&mut` to the form for its lifetime also enforces that at
/// most one submission is outstanding.
pub struct PendingGuard<'a> {
    form: &'a mut ContactForm,
}

impl<'a> PendingGuard<'a> {
    /// Enter pending state, or `None` when a submission is already in flight
    /// (the submit control is disabled, so this is a no-op).
    pub fn begin(form: &'a mut ContactForm) -> Option<Self> {
        if form.pending {
            return None;
        }
        form.pending = true;
        form.status = FormStatus::Hidden;
        Some(Self { form })
    }

    /// Access the guarded form.
    pub fn form(&mut self) -> &mut ContactForm {
        self.form
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.form.pending = false;
    }
}
