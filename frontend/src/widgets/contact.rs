//! Contact form model. Submission is simulated: nothing leaves the browser.

use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Returns a copy with the field called `field` replaced. Unknown names are ignored.
    pub fn with_field(&self, field: &str, value: String) -> Self {
        let mut next = self.clone();
        match field {
            "name" => next.name = value,
            "email" => next.email = value,
            "subject" => next.subject = value,
            "message" => next.message = value,
            _ => {}
        }
        next
    }

    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Editing,
    Submitting,
    Sent,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactState {
    pub form: ContactForm,
    pub phase: SubmitPhase,
}

impl Default for ContactState {
    fn default() -> Self {
        Self {
            form: ContactForm::default(),
            phase: SubmitPhase::Editing,
        }
    }
}

impl ContactState {
    pub fn edit(&self, field: &str, value: String) -> Self {
        Self {
            form: self.form.with_field(field, value),
            phase: self.phase,
        }
    }

    /// Editing -> Submitting; ignored from any other phase.
    pub fn submit(&self) -> Option<Self> {
        (self.phase == SubmitPhase::Editing).then(|| Self {
            form: self.form.clone(),
            phase: SubmitPhase::Submitting,
        })
    }

    /// Submitting -> Sent, clearing the form.
    pub fn delivered(&self) -> Self {
        Self {
            form: ContactForm::default(),
            phase: SubmitPhase::Sent,
        }
    }

    pub fn acknowledged(&self) -> Self {
        Self {
            form: self.form.clone(),
            phase: SubmitPhase::Editing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactState {
        ContactState::default()
            .edit("name", "Ada".into())
            .edit("email", "ada@example.com".into())
            .edit("subject", "Admissions".into())
            .edit("message", "Hello".into())
    }

    #[test]
    fn edit_replaces_one_field() {
        let state = filled().edit("subject", "Events".into());
        assert_eq!(state.form.subject, "Events");
        assert_eq!(state.form.name, "Ada");
        assert!(state.form.is_complete());
    }

    #[test]
    fn unknown_field_is_ignored() {
        let state = filled();
        assert_eq!(state.edit("phone", "123".into()), state);
    }

    #[test]
    fn submission_lifecycle() {
        let submitting = filled().submit().expect("editing can submit");
        assert_eq!(submitting.phase, SubmitPhase::Submitting);
        assert!(submitting.submit().is_none());

        let sent = submitting.delivered();
        assert_eq!(sent.phase, SubmitPhase::Sent);
        assert_eq!(sent.form, ContactForm::default());

        assert_eq!(sent.acknowledged().phase, SubmitPhase::Editing);
    }

    #[test]
    fn serializes_for_logging() {
        let json = serde_json::to_string(&filled().form).unwrap();
        assert!(json.contains("\"email\":\"ada@example.com\""));
    }
}
