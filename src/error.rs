//! .
//!
//! Everything fallible in this crate returns [`anyhow::Result`].
pub use anyhow::{Error, Result};

/// Render the whole context chain of `error`, outermost first.
pub fn display(error: &Error) -> String {
  let mut msg = "Error:".to_string();
  error
    .chain()
    .enumerate()
    .for_each(|(index, error)| msg.push_str(&format!("\n└> {} - {}", index, error)));
  msg
}
