//! Enquiry Workflow Integration Tests
//!
//! The validation matrix a submit attempt runs through, and the mailto URL
//! a valid enquiry turns into.

use crate::helpers::artwork;
use atelier::enquiry::{mailto_url, EnquiryField, EnquiryForm, ValidationError};

fn filled_form() -> EnquiryForm {
    EnquiryForm {
        name: "Ada Collector".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+44 20 7946 0000".to_string(),
        message: "Interested in pricing and shipping to London.".to_string(),
        newsletter: true,
        privacy_consent: true,
    }
}

#[test]
fn test_submit_matrix() {
    // (mutation, expected errors)
    let cases: Vec<(Box<dyn Fn(&mut EnquiryForm)>, Vec<ValidationError>)> = vec![
        (Box::new(|_| {}), vec![]),
        (
            Box::new(|f| f.name.clear()),
            vec![ValidationError::NameRequired],
        ),
        (
            Box::new(|f| f.email = "not-an-email".to_string()),
            vec![ValidationError::EmailInvalid],
        ),
        (
            Box::new(|f| f.message = "short".to_string()),
            vec![ValidationError::MessageTooShort],
        ),
        (
            Box::new(|f| f.privacy_consent = false),
            vec![ValidationError::PrivacyRequired],
        ),
        (
            Box::new(|f| {
                f.name.clear();
                f.email.clear();
                f.privacy_consent = false;
            }),
            vec![
                ValidationError::NameRequired,
                ValidationError::EmailRequired,
                ValidationError::PrivacyRequired,
            ],
        ),
    ];

    for (i, (mutate, expected)) in cases.iter().enumerate() {
        let mut form = filled_form();
        mutate(&mut form);
        match form.validate() {
            Ok(()) => assert!(expected.is_empty(), "case {i} should have failed"),
            Err(errors) => assert_eq!(&errors, expected, "case {i}"),
        }
    }
}

#[test]
fn test_every_error_maps_to_a_field() {
    let mut form = EnquiryForm::default();
    form.message = "short".to_string();
    let errors = form.validate().unwrap_err();

    let fields: Vec<EnquiryField> = errors.iter().map(|e| e.field()).collect();
    assert!(fields.contains(&EnquiryField::Name));
    assert!(fields.contains(&EnquiryField::Email));
    assert!(fields.contains(&EnquiryField::Message));
    assert!(fields.contains(&EnquiryField::Privacy));
}

#[test]
fn test_mailto_url_contains_artwork_and_sender() {
    let art = artwork(1, "painting", true);
    let url = mailto_url(&art, &filled_form());

    assert!(url.starts_with("mailto:studio@atelier.app?subject="));
    // Subject carries the title and year, percent-encoded
    assert!(url.contains("Piece%201"));
    assert!(url.contains("2026"));
    // Body carries sender details
    assert!(url.contains("Ada%20Collector"));
    assert!(url.contains("ada%40example.com"));
    // Newsletter opt-in is spelled out
    assert!(url.contains("newsletter"));
    // Raw spaces and newlines never survive encoding
    assert!(!url.contains(' '));
    assert!(!url.contains('\n'));
}

#[test]
fn test_mailto_url_omits_empty_optionals() {
    let art = artwork(2, "sculpture", false);
    let mut form = filled_form();
    form.phone.clear();
    form.message.clear();
    form.newsletter = false;

    let url = mailto_url(&art, &form);
    assert!(!url.contains("Phone"));
    assert!(!url.contains("newsletter"));
}
