//! One-shot flash messages carried in the session cookie.

use actix_session::Session;
use serde::{Deserialize, Serialize};

const FLASH_KEY: &str = "_flash";

/// A transient status message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: String,
    pub message: String,
}

/// Queue a flash message for the next rendered page.
pub fn set_flash(session: &Session, kind: &str, message: &str) {
    let flash = Flash {
        kind: kind.to_string(),
        message: message.to_string(),
    };

    if let Err(err) = session.insert(FLASH_KEY, flash) {
        tracing::warn!("Failed to store flash message: {}", err);
    }
}

/// Take the pending flash message, clearing it from the session.
pub fn take_flash(session: &Session) -> Option<Flash> {
    let raw = session.remove(FLASH_KEY)?;
    serde_json::from_str(&raw).ok()
}
