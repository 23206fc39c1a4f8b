//! Export module for expense-ledger
//!
//! Two renderings of the same ledger content:
//! - Text: the numbered list written to `expense-list.txt`
//! - Mail: subject/body/recipient plus the `mailto:` URI for sharing

pub mod mail;
pub mod text;

pub use mail::{encode_component, to_mail_payload, MailPayload, MAIL_SUBJECT};
pub use text::{export_text, to_plain_text, write_text_export, HEADER};
