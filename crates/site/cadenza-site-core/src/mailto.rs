//! `mailto:` link for the contact form.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters `encodeURIComponent` leaves alone, besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// Copy with every field trimmed.
    pub fn trimmed(&self) -> ContactForm {
        ContactForm {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    pub fn subject(&self) -> String {
        format!("Website inquiry from {} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Body lines joined by `\n`, empty lines dropped.
    pub fn body(&self) -> String {
        let name = format!("Name: {} {}", self.first_name, self.last_name);
        let email = if self.email.is_empty() {
            String::new()
        } else {
            format!("Email: {}", self.email)
        };
        let phone = if self.phone.is_empty() {
            String::new()
        } else {
            format!("Phone: {}", self.phone)
        };
        [
            name.trim().to_string(),
            email,
            phone,
            "Message:".to_string(),
            self.message.clone(),
        ]
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
    }
}

fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Build `mailto:<to>?subject=..&body=..` from the (trimmed) form fields.
pub fn compose_mailto(to: &str, form: &ContactForm) -> String {
    let form = form.trimmed();
    format!(
        "mailto:{to}?subject={}&body={}",
        encode_component(&form.subject()),
        encode_component(&form.body())
    )
}
