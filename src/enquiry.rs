//! Artwork enquiry form - validation and mailto dispatch.
//!
//! The enquiry modal binds this form to one artwork. Validation is pure and
//! total: it returns every failed rule so the UI can annotate each field.
//! There is no form-submission endpoint; a valid enquiry becomes a prefilled
//! `mailto:` URL handed to the system mail client.

use crate::constants::{ENQUIRY_MAILTO, MIN_MESSAGE_LEN};
use crate::types::Artwork;
use thiserror::Error;

/// A field of the enquiry form, for mapping errors to inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnquiryField {
    Name,
    Email,
    Message,
    Privacy,
}

/// A single failed validation rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email address looks invalid")]
    EmailInvalid,
    #[error("Message must be at least {MIN_MESSAGE_LEN} characters")]
    MessageTooShort,
    #[error("Please accept the privacy policy")]
    PrivacyRequired,
}

impl ValidationError {
    /// Which input this error annotates.
    pub fn field(&self) -> EnquiryField {
        match self {
            ValidationError::NameRequired => EnquiryField::Name,
            ValidationError::EmailRequired | ValidationError::EmailInvalid => EnquiryField::Email,
            ValidationError::MessageTooShort => EnquiryField::Message,
            ValidationError::PrivacyRequired => EnquiryField::Privacy,
        }
    }
}

/// The enquiry form state. Phone and message are optional; newsletter is an
/// opt-in; privacy consent is required.
#[derive(Clone, Debug, Default)]
pub struct EnquiryForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub newsletter: bool,
    pub privacy_consent: bool,
}

impl EnquiryForm {
    /// Check every rule; returns all failures so the UI can show them at
    /// once rather than one at a time.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::NameRequired);
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(ValidationError::EmailRequired);
        } else if !email_is_plausible(email) {
            errors.push(ValidationError::EmailInvalid);
        }

        let message = self.message.trim();
        if !message.is_empty() && message.chars().count() < MIN_MESSAGE_LEN {
            errors.push(ValidationError::MessageTooShort);
        }

        if !self.privacy_consent {
            errors.push(ValidationError::PrivacyRequired);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Minimal shape check: `local@domain.tld`, no whitespace. This is a sanity
/// gate, not an RFC parser; the mail client does the real addressing.
fn email_is_plausible(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}

/// Build the prefilled `mailto:` URL for a validated enquiry.
pub fn mailto_url(artwork: &Artwork, form: &EnquiryForm) -> String {
    let mut body = format!(
        "Artwork: {} ({})\nSeries: {}\n\nFrom: {}\nEmail: {}\n",
        artwork.title, artwork.year, artwork.series, form.name.trim(), form.email.trim(),
    );
    if !form.phone.trim().is_empty() {
        body.push_str(&format!("Phone: {}\n", form.phone.trim()));
    }
    if !form.message.trim().is_empty() {
        body.push_str(&format!("\n{}\n", form.message.trim()));
    }
    if form.newsletter {
        body.push_str("\nPlease add me to the newsletter.\n");
    }

    format!(
        "mailto:{}?subject={}&body={}",
        ENQUIRY_MAILTO,
        urlencoding::encode(&artwork.enquiry_subject()),
        urlencoding::encode(&body),
    )
}

/// Validate and hand the enquiry to the system mail client.
pub fn dispatch(artwork: &Artwork, form: &EnquiryForm) -> Result<(), Vec<ValidationError>> {
    form.validate()?;
    let url = mailto_url(artwork, form);
    if let Err(e) = open::that(&url) {
        // A missing mail handler is logged, not fatal: the enquiry itself
        // validated and the user can retry from their own client.
        tracing::warn!(error = %e, "Could not open mail client");
    }
    Ok(())
}
