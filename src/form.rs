use std::str::FromStr;
use std::time::Duration;

/// How long a simulated submission stays in flight before it "succeeds".
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

pub const SENT_TITLE: &str = "Message Sent!";
pub const SENT_DESCRIPTION: &str = "Thank you for your message. I'll get back to you soon!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Value of the input's `name` and `id` attributes.
    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

impl FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "subject" => Ok(Self::Subject),
            "message" => Ok(Self::Message),
            other => Err(format!("unknown contact field: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Stores `value` in the field whose input carries `name`.
    pub fn apply_input(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<ContactField, String> {
        let field = name.parse::<ContactField>()?;
        self.set(field, value);
        Ok(field)
    }

    /// Every input is `required`, so a draft is submittable once no field is blank.
    pub fn is_complete(&self) -> bool {
        ContactField::ALL
            .iter()
            .all(|f| !self.get(*f).trim().is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Moves `state` to `Submitting`. Returns false when a submission is
    /// already in flight or the draft is incomplete.
    pub fn begin_submit(&self, state: &mut SubmitState) -> bool {
        if *state == SubmitState::Submitting || !self.is_complete() {
            return false;
        }
        *state = SubmitState::Submitting;
        true
    }

    /// Completes an in-flight submission: the draft is cleared and the form is idle again.
    pub fn finish_submit(&mut self, state: &mut SubmitState) {
        self.clear();
        *state = SubmitState::Idle;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

impl SubmitState {
    pub fn is_submitting(self) -> bool {
        self == SubmitState::Submitting
    }

    pub fn button_label(self) -> &'static str {
        match self {
            SubmitState::Idle => "Send Message",
            SubmitState::Submitting => "Sending...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        let mut draft = ContactDraft::default();
        draft.set(ContactField::Name, "Ada");
        draft.set(ContactField::Email, "ada@example.com");
        draft.set(ContactField::Subject, "Website");
        draft.set(ContactField::Message, "Let's build something.");
        draft
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in ContactField::ALL {
            assert_eq!(field.name().parse::<ContactField>(), Ok(field));
        }
        assert!("phone".parse::<ContactField>().is_err());
    }

    #[test]
    fn test_set_updates_only_named_field() {
        let mut draft = ContactDraft::default();
        draft.set(ContactField::Subject, "Hello");
        assert_eq!(draft.subject, "Hello");
        assert_eq!(draft.get(ContactField::Name), "");
        assert_eq!(draft.get(ContactField::Subject), "Hello");
    }

    #[test]
    fn test_input_routed_by_name_attribute() {
        let mut draft = ContactDraft::default();
        assert_eq!(draft.apply_input("email", "ada@example.com"), Ok(ContactField::Email));
        assert_eq!(draft.email, "ada@example.com");

        let err = draft.apply_input("phone", "0322").unwrap_err();
        assert_eq!(err, "unknown contact field: phone");
        assert_eq!(draft, ContactDraft { email: "ada@example.com".into(), ..Default::default() });
    }

    #[test]
    fn test_blank_field_makes_draft_incomplete() {
        let mut draft = filled();
        assert!(draft.is_complete());
        draft.set(ContactField::Message, "   ");
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_submit_lifecycle() {
        let mut draft = filled();
        let mut state = SubmitState::default();
        assert_eq!(state.button_label(), "Send Message");

        assert!(draft.begin_submit(&mut state));
        assert!(state.is_submitting());
        assert_eq!(state.button_label(), "Sending...");

        // a second click while in flight is ignored
        assert!(!draft.begin_submit(&mut state));

        draft.finish_submit(&mut state);
        assert_eq!(state, SubmitState::Idle);
        assert_eq!(draft, ContactDraft::default());
    }

    #[test]
    fn test_incomplete_draft_does_not_submit() {
        let draft = ContactDraft::default();
        let mut state = SubmitState::Idle;
        assert!(!draft.begin_submit(&mut state));
        assert_eq!(state, SubmitState::Idle);
    }

    #[test]
    fn test_submit_delay_is_one_second() {
        assert_eq!(SUBMIT_DELAY.as_millis(), 1000);
    }
}
