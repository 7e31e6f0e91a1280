//! Newsletter signup form
//!
//! Submission is a local validation step. A valid address is passed to a
//! [`NewsletterHandoff`]; the shipped one, [`NoopHandoff`], sends nothing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::view::ContactFormView;

pub const ERROR_MESSAGE: &str = "Whoops, make sure it's an email";

/// HTML email local part, then dot-separated DNS labels ending in an
/// alphabetic top-level label of two or more characters.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$",
    )
    .expect("email pattern is valid")
});

/// Why an address was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rejection {
    Empty,
    Malformed,
}

/// Validate an address the way the form does. Returns the trimmed value.
pub fn validate_email(raw: &str) -> Result<&str, Rejection> {
    let value = raw.trim();
    if value.is_empty() {
        Err(Rejection::Empty)
    } else if EMAIL_PATTERN.is_match(value) {
        Ok(value)
    } else {
        Err(Rejection::Malformed)
    }
}

/// Payload handed off after a successful submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signup {
    pub email: String,
}

impl Signup {
    /// Domain only, safe to put in logs
    pub fn domain(&self) -> &str {
        self.email.rsplit_once('@').map_or("", |(_, domain)| domain)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted(Signup),
    Rejected(Rejection),
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted(_))
    }
}

/// Where accepted signups go
pub trait NewsletterHandoff {
    fn deliver(&self, signup: &Signup);
}

/// Accepts the signup and sends it nowhere
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHandoff;

impl NewsletterHandoff for NoopHandoff {
    fn deliver(&self, signup: &Signup) {
        debug!(domain = signup.domain(), "Newsletter signup accepted (no delivery configured)");
    }
}

/// Form state: whether the last submit attempt failed validation
#[derive(Debug, Clone, Default)]
pub struct ContactForm<H: NewsletterHandoff = NoopHandoff> {
    invalid: bool,
    handoff: H,
}

impl ContactForm<NoopHandoff> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: NewsletterHandoff> ContactForm<H> {
    pub fn with_handoff(handoff: H) -> Self {
        Self {
            invalid: false,
            handoff,
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn handoff(&self) -> &H {
        &self.handoff
    }

    pub fn submit(&mut self, email: &str) -> Submission {
        match validate_email(email) {
            Ok(value) => {
                self.invalid = false;
                let signup = Signup {
                    email: value.to_string(),
                };
                self.handoff.deliver(&signup);
                Submission::Accepted(signup)
            }
            Err(rejection) => {
                debug!(?rejection, "Newsletter submit rejected");
                self.invalid = true;
                Submission::Rejected(rejection)
            }
        }
    }

    pub fn render(&self) -> ContactFormView {
        ContactFormView {
            invalid: self.invalid,
            error: self.invalid.then_some(ERROR_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        delivered: RefCell<Vec<Signup>>,
    }

    impl NewsletterHandoff for Recorder {
        fn deliver(&self, signup: &Signup) {
            self.delivered.borrow_mut().push(signup.clone());
        }
    }

    #[test]
    fn test_rejects_without_handoff() {
        let mut form = ContactForm::with_handoff(Recorder::default());
        for input in ["", "   ", "not-an-email", "user@domain", "@example.com", "user@.com"] {
            let outcome = form.submit(input);
            assert!(!outcome.is_accepted(), "{input:?} should be rejected");
            assert!(form.is_invalid());
        }
        assert!(form.handoff().delivered.borrow().is_empty());
    }

    #[test]
    fn test_accepts_and_hands_off() {
        let mut form = ContactForm::with_handoff(Recorder::default());
        form.submit("nope");
        assert!(form.is_invalid());

        let outcome = form.submit("user@example.com");
        assert_eq!(
            outcome,
            Submission::Accepted(Signup {
                email: "user@example.com".to_string()
            })
        );
        assert!(!form.is_invalid());
        assert_eq!(form.handoff().delivered.borrow().len(), 1);
    }

    #[test]
    fn test_signup_domain_hides_mailbox() {
        let signup = Signup {
            email: "jane.doe+news@mail.example.com".to_string(),
        };
        assert_eq!(signup.domain(), "mail.example.com");
        assert!(!signup.domain().contains("jane"));
    }

    #[test]
    fn test_noop_handoff_accepts() {
        let mut form = ContactForm::new();
        assert!(form.submit("user@example.com").is_accepted());
        assert!(!form.is_invalid());
    }

    #[test]
    fn test_rejection_reasons() {
        assert_eq!(validate_email(""), Err(Rejection::Empty));
        assert_eq!(validate_email("not-an-email"), Err(Rejection::Malformed));
        assert_eq!(validate_email("a b@example.com"), Err(Rejection::Malformed));
        assert_eq!(validate_email("user@domain"), Err(Rejection::Malformed));
    }

    #[test]
    fn test_accepted_shapes() {
        assert_eq!(validate_email("  user@example.com "), Ok("user@example.com"));
        assert!(validate_email("first.last+tag@mail.example.co.uk").is_ok());
        assert!(validate_email("o'brien@example.ie").is_ok());
    }

    #[test]
    fn test_render_error_indicator() {
        let mut form = ContactForm::new();
        assert_eq!(form.render().error, None);
        form.submit("bad");
        let view = form.render();
        assert!(view.invalid);
        assert_eq!(view.error, Some(ERROR_MESSAGE));
    }
}
