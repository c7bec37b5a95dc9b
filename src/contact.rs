//! # Contact Form
//!
//! Form state, validation and the hand-off to a remote submission backend.
//! The backend is abstracted behind [`FormSubmitter`]: one call, one
//! outcome, no retry. User feedback is queued as [`Notification`]s.

use futures::future::LocalBoxFuture;

use crate::error::{ContactError, SubmitError};

/// Record handed to the backend. Fields are trimmed; a blank subject is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

/// Remote persistence of contact messages
pub trait FormSubmitter {
    fn submit(&self, record: ContactRecord) -> LocalBoxFuture<'_, Result<(), SubmitError>>;
}

/// Tone of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Default,
    Destructive,
}

/// Toast shown to the visitor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    fn missing_fields() -> Self {
        Self {
            title: "Missing fields".into(),
            description: "Please fill in all required fields.".into(),
            variant: Variant::Destructive,
        }
    }

    fn sent() -> Self {
        Self {
            title: "Message sent!".into(),
            description: "Thank you for reaching out. I'll get back to you soon!".into(),
            variant: Variant::Default,
        }
    }

    fn failed() -> Self {
        Self {
            title: "Error".into(),
            description: "Failed to send message. Please try again.".into(),
            variant: Variant::Destructive,
        }
    }
}

/// Editable field of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// Contact form state
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    is_submitting: bool,
    submitted_until: Option<f64>,
    reset_after: f64,
    notifications: Vec<Notification>,
}

impl ContactForm {
    /// Form whose "submitted" flag clears `reset_after` seconds after success
    pub fn new(reset_after: f64) -> Self {
        Self {
            reset_after,
            ..Self::default()
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted_until.is_some()
    }

    /// Clear the "submitted" flag once its time is up
    pub fn tick(&mut self, now: f64) {
        if matches!(self.submitted_until, Some(until) if now >= until) {
            self.submitted_until = None;
        }
    }

    /// Drain queued notifications
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Names of required fields that are blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }

    /// Validated, trimmed record
    pub fn record(&self) -> Result<ContactRecord, ContactError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }
        let subject = self.subject.trim();
        Ok(ContactRecord {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: (!subject.is_empty()).then(|| subject.to_string()),
            message: self.message.trim().to_string(),
        })
    }

    /// Validate and send the form
    ///
    /// On success the fields are cleared and the form reports "submitted"
    /// until `now + reset_after`. On failure the fields are kept.
    pub async fn submit<S>(&mut self, submitter: &S, now: f64) -> Result<(), ContactError>
    where
        S: FormSubmitter + ?Sized,
    {
        let record = match self.record() {
            Ok(record) => record,
            Err(err) => {
                self.notifications.push(Notification::missing_fields());
                return Err(err);
            }
        };

        self.is_submitting = true;
        let outcome = submitter.submit(record).await;
        self.is_submitting = false;

        match outcome {
            Ok(()) => {
                log::info!("contact message submitted");
                self.name.clear();
                self.email.clear();
                self.subject.clear();
                self.message.clear();
                self.submitted_until = Some(now + self.reset_after);
                self.notifications.push(Notification::sent());
                Ok(())
            }
            Err(err) => {
                log::error!("error submitting contact form: {err}");
                self.notifications.push(Notification::failed());
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every call and answers with a fixed outcome
    struct StubSubmitter {
        outcome: Result<(), SubmitError>,
        calls: RefCell<Vec<ContactRecord>>,
    }

    impl StubSubmitter {
        fn new(outcome: Result<(), SubmitError>) -> Self {
            Self {
                outcome,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl FormSubmitter for StubSubmitter {
        fn submit(&self, record: ContactRecord) -> LocalBoxFuture<'_, Result<(), SubmitError>> {
            self.calls.borrow_mut().push(record);
            let outcome = self.outcome.clone();
            Box::pin(async move { outcome })
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new(5.0);
        form.set(Field::Name, "  Ada ");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Subject, "   ");
        form.set(Field::Message, "Hello there");
        form
    }

    #[test]
    fn test_missing_fields_block_submit() {
        let submitter = StubSubmitter::new(Ok(()));
        let mut form = ContactForm::new(5.0);
        form.set(Field::Name, "Ada");
        form.set(Field::Message, "   ");

        let err = pollster::block_on(form.submit(&submitter, 0.0)).unwrap_err();
        assert_eq!(err, ContactError::MissingFields(vec!["email", "message"]));
        assert!(submitter.calls.borrow().is_empty());
        let notes = form.take_notifications();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].variant, Variant::Destructive);
    }

    #[test]
    fn test_success_clears_and_resets_later() {
        let submitter = StubSubmitter::new(Ok(()));
        let mut form = filled();

        pollster::block_on(form.submit(&submitter, 10.0)).unwrap();
        let sent = submitter.calls.borrow()[0].clone();
        assert_eq!(sent.name, "Ada");
        assert_eq!(sent.subject, None);
        assert!(form.name.is_empty() && form.message.is_empty());
        assert!(form.is_submitted());
        assert!(!form.is_submitting());

        form.tick(14.9);
        assert!(form.is_submitted());
        form.tick(15.0);
        assert!(!form.is_submitted());
        assert_eq!(form.take_notifications()[0].title, "Message sent!");
    }

    #[test]
    fn test_failure_keeps_fields() {
        let submitter = StubSubmitter::new(Err(SubmitError::Transport("offline".into())));
        let mut form = filled();

        let err = pollster::block_on(form.submit(&submitter, 0.0)).unwrap_err();
        assert_eq!(err, ContactError::Submit(SubmitError::Transport("offline".into())));
        assert_eq!(submitter.calls.borrow().len(), 1);
        assert_eq!(form.name, "  Ada ");
        assert!(!form.is_submitted());
        assert_eq!(form.take_notifications(), vec![Notification::failed()]);
    }

    #[test]
    fn test_subject_kept_when_present() {
        let mut form = filled();
        form.set(Field::Subject, " Hiring ");
        assert_eq!(form.record().unwrap().subject.as_deref(), Some("Hiring"));
    }
}
