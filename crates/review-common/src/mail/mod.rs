//! Outgoing mail dispatch

mod mailer;

pub use mailer::Mailer;
