//! Error envelopes: the shapes upstream sends in place of the expected
//! document when a request is rejected.
//!
//! Recognised bodies are a top-level JSON object with a `message` string,
//! `<error><message>..</message></error>` and
//! `<errors><error><message>..</message></error></errors>`.

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct JsonEnvelope {
    message: String,
}

#[derive(Debug, Deserialize)]
struct XmlError {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct XmlErrors {
    #[serde(rename = "error", default)]
    errors: Vec<XmlError>,
}

/// The message carried by an error envelope, if `body` is one.
pub fn envelope_message(body: &[u8]) -> Option<String> {
    if let Ok(envelope) = serde_json::from_slice::<JsonEnvelope>(body) {
        return Some(envelope.message);
    }

    let text = std::str::from_utf8(body).ok()?;
    match root_element(text)?.as_str() {
        "error" => quick_xml::de::from_str::<XmlError>(text)
            .ok()
            .map(|e| e.message.trim().to_string()),
        "errors" => {
            let errors = quick_xml::de::from_str::<XmlErrors>(text).ok()?;
            let messages: Vec<&str> = errors
                .errors
                .iter()
                .map(|e| e.message.trim())
                .filter(|m| !m.is_empty())
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

/// Name of the first element of an XML document.
///
/// Returns `None` when the text is not XML (for instance a JSON body) or has
/// no element at all.
pub fn root_element(text: &str) -> Option<String> {
    let mut reader = Reader::from_str(text);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Some(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Ok(Event::Text(e)) => {
                if !e.iter().all(u8::is_ascii_whitespace) {
                    return None;
                }
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
    }
}
