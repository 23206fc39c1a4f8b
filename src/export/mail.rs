//! Email export
//!
//! Builds the subject/body/recipient triple for sharing the ledger and the
//! `mailto:` URI handed to the platform mail handler. The recipient is the
//! signed-in user's own address.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::debug;

use super::text::{entry_lines, HEADER};
use crate::ledger::LedgerSnapshot;

/// Fixed subject line of the shared ledger
pub const MAIL_SUBJECT: &str = "Expense List";

/// Indentation preceding the header and the first entry line in the body
const BODY_INDENT: &str = "      ";

/// Characters left unescaped in URI components: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
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

/// An email ready to be opened in a mail composer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailPayload {
    pub subject: String,
    pub body: String,
    pub recipient: String,
}

impl MailPayload {
    /// Build `mailto:<recipient>?subject=<subject>&body=<body>`
    ///
    /// Subject and body are percent-encoded; the address is used as is.
    pub fn to_mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }
}

/// Percent-encode one URI query component
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Render the ledger as an email addressed to `recipient`
pub fn to_mail_payload(snapshot: &LedgerSnapshot<'_>, recipient: &str) -> MailPayload {
    let body = format!(
        "\n{indent}{}\n{indent}{}",
        HEADER,
        entry_lines(snapshot),
        indent = BODY_INDENT
    );
    debug!(recipient, entries = snapshot.entries.len(), "mail payload built");

    MailPayload {
        subject: MAIL_SUBJECT.to_string(),
        body,
        recipient: recipient.to_string(),
    }
}
