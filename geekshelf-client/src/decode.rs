use std::fmt::Display;

use serde::de::DeserializeOwned;

use crate::envelope::{envelope_message, root_element};
use crate::error::BggError;

/// Turn a decode failure into an `Upstream` error when the body is an error
/// envelope, or a `Decode` error otherwise.
pub(crate) fn decode_failure(operation: &'static str, body: &[u8], err: impl Display) -> BggError {
    match envelope_message(body) {
        Some(message) => {
            log::debug!("{operation}: response is an error envelope: {message:?}");
            BggError::upstream(operation, message)
        }
        None => BggError::decode(operation, err),
    }
}

/// Decode an XML document whose root element must be `root`.
pub(crate) fn decode_xml<T: DeserializeOwned>(
    operation: &'static str,
    root: &str,
    body: &[u8],
) -> Result<T, BggError> {
    let text = std::str::from_utf8(body)
        .map_err(|e| decode_failure(operation, body, format!("response is not UTF-8: {e}")))?;
    let text = text.trim_start_matches('\u{feff}');

    match root_element(text) {
        Some(name) if name == root => {}
        Some(name) => {
            return Err(decode_failure(
                operation,
                body,
                format!("expected <{root}> document, found <{name}>"),
            ));
        }
        None => {
            return Err(decode_failure(
                operation,
                body,
                format!("expected <{root}> document, found no XML element"),
            ));
        }
    }

    quick_xml::de::from_str(text).map_err(|e| decode_failure(operation, body, e))
}

pub(crate) fn decode_json<T: DeserializeOwned>(
    operation: &'static str,
    body: &[u8],
) -> Result<T, BggError> {
    serde_json::from_slice(body).map_err(|e| decode_failure(operation, body, e))
}
