//! Contact form state.
//!
//! The form never leaves the page: submitting it only flips the phase from
//! [`ContactPhase::Editing`] to [`ContactPhase::Submitted`], synchronously.
//! `Submitted` is terminal for the page's lifetime; there is no
//! "edit and resend" path.
//!
//! Required-field enforcement belongs to the host's native form validation,
//! so [`ContactForm::submit`] never rejects a draft.

/// Where the form is in its two-state lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactPhase {
    /// Inputs are shown and editable.
    #[default]
    Editing,
    /// The acknowledgment replaced the inputs.
    Submitted,
}

/// Result of a submit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// First submit: the form moved to `Submitted`.
    Acknowledged,
    /// The form was already submitted; nothing changed.
    AlreadySubmitted,
}

/// Input fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Organization,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Organization,
        ContactField::Message,
    ];

    /// Element id / form name of the field.
    pub fn id(&self) -> &'static str {
        match self {
            ContactField::Name => "contact-name",
            ContactField::Email => "contact-email",
            ContactField::Organization => "contact-organization",
            ContactField::Message => "contact-message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Your name",
            ContactField::Email => "Email",
            ContactField::Organization => "Organization",
            ContactField::Message => "What do you need?",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Full name",
            ContactField::Email => "name@org.org",
            ContactField::Organization => "Your nonprofit",
            ContactField::Message => "Bookkeeping, compilation reporting, 990\u{2026}",
        }
    }

    /// Whether native validation must block submission while empty.
    pub fn required(&self) -> bool {
        matches!(self, ContactField::Name | ContactField::Email)
    }

    /// HTML input type. The message field is a textarea and has none.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            ContactField::Email => Some("email"),
            ContactField::Name | ContactField::Organization => Some("text"),
            ContactField::Message => None,
        }
    }
}

/// Values typed into the form so far. Kept only in memory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Organization => &self.organization,
            ContactField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Organization => &mut self.organization,
            ContactField::Message => &mut self.message,
        }
    }
}

/// Confirmation shown once the form has been submitted.
pub const CONFIRMATION: &str = "Thanks! We'll be in touch shortly.";

/// The contact section's only piece of state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    phase: ContactPhase,
    draft: ContactDraft,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ContactPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == ContactPhase::Submitted
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    /// Mirror an input change. Ignored once submitted.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        if self.is_submitted() {
            return;
        }
        *self.draft.slot(field) = value.into();
    }

    /// Handle a submit event. Always succeeds; only the first call changes state.
    pub fn submit(&mut self) -> SubmitOutcome {
        match self.phase {
            ContactPhase::Editing => {
                self.phase = ContactPhase::Submitted;
                tracing::info!(
                    has_organization = !self.draft.organization.trim().is_empty(),
                    has_message = !self.draft.message.trim().is_empty(),
                    "Contact form acknowledged locally"
                );
                SubmitOutcome::Acknowledged
            }
            ContactPhase::Submitted => {
                tracing::debug!("Ignoring repeated contact form submit");
                SubmitOutcome::AlreadySubmitted
            }
        }
    }
}
