//! Contact form inquiries.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Maximum length of the inquiry message, mirrored by the `Validate` rule.
pub const MAX_MESSAGE_LENGTH: usize = 5_000;

/// A visitor's message submitted through the contact form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Inquiry {
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 5000, message = "must be 1-5000 characters"))]
    pub message: String,
}

/// Render the plain-text notification body for an inquiry.
pub fn format_inquiry(inquiry: &Inquiry) -> String {
    format!(
        "New inquiry from the website\n\nName: {}\nEmail: {}\nMessage:\n{}",
        inquiry.name.trim(),
        inquiry.email.trim(),
        inquiry.message.trim(),
    )
}
