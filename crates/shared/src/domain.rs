use serde::{Deserialize, Serialize};

/// Observable regions of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Home,
    Stories,
    Projects,
    FavouredLiterature,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Stories,
        SectionId::Projects,
        SectionId::FavouredLiterature,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Stories => "stories",
            SectionId::Projects => "projects",
            SectionId::FavouredLiterature => "favoured-literature",
            SectionId::Contact => "contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, SubmissionStatus::Success | SubmissionStatus::Error)
    }

    /// Status line shown under the form, if any.
    pub fn message(self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Sending => Some("Sending…"),
            SubmissionStatus::Success => Some("Message sent — thank you!"),
            SubmissionStatus::Error => Some("Failed to send. Please try again later."),
        }
    }
}

/// Named form fields as the relay template sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    UserName,
    UserEmail,
    Message,
}

impl FormField {
    pub fn name(self) -> &'static str {
        match self {
            FormField::UserName => "user_name",
            FormField::UserEmail => "user_email",
            FormField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormPayload {
    pub user_name: String,
    pub user_email: String,
    pub message: String,
}
