//! Outer envelope decoding
//!
//! The upstream answers with URL-encoded form data that carries its own
//! status signal and, on success, a JSON document as a string under
//! `player_response`. A 200 response can therefore still be a logical
//! failure; that signal is surfaced here, distinct from transport errors.

use crate::utils::error::ResolveError;
use std::collections::HashMap;

/// Parsed outer form body. Intermediate representation only; it never
/// leaves this module.
struct DecodedForm(HashMap<String, String>);

impl DecodedForm {
    fn parse(body: &[u8]) -> Result<Self, ResolveError> {
        let text = std::str::from_utf8(body)
            .map_err(|e| ResolveError::MalformedEnvelope(format!("body is not UTF-8: {}", e)))?;

        let mut fields = HashMap::new();
        for pair in text.split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            fields.insert(unescape(key)?, unescape(value)?);
        }
        Ok(Self(fields))
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

/// Percent-decode one form component, `+` meaning space. Strict: a broken
/// escape is a decode error, not a literal.
fn unescape(component: &str) -> Result<String, ResolveError> {
    let bytes = component.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' => {
                let hi = bytes.get(i + 1).and_then(|b| (*b as char).to_digit(16));
                let lo = bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16));
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi * 16 + lo) as u8);
                        i += 2;
                    }
                    _ => {
                        return Err(ResolveError::MalformedEnvelope(format!(
                            "invalid percent escape in {:?}",
                            component
                        )))
                    }
                }
            }
            byte => out.push(byte),
        }
        i += 1;
    }
    String::from_utf8(out)
        .map_err(|e| ResolveError::MalformedEnvelope(format!("escaped data is not UTF-8: {}", e)))
}

/// Decode the outer envelope body and extract the inner JSON payload.
///
/// `status=fail` is the upstream's rejection signal and comes back as
/// `UpstreamRejected` with errorcode and reason verbatim. A missing
/// `status` key counts as success, which is how the live endpoint behaves.
/// A success envelope without a `player_response` points at an upstream
/// contract change and is reported separately as `MissingPayload`.
pub fn decode(body: &[u8]) -> Result<String, ResolveError> {
    let form = DecodedForm::parse(body)?;

    if form.get("status") == Some("fail") {
        return Err(ResolveError::UpstreamRejected {
            errorcode: form.get("errorcode").unwrap_or("").to_string(),
            reason: form.get("reason").unwrap_or("").to_string(),
        });
    }

    match form.get("player_response") {
        Some(payload) if !payload.is_empty() => Ok(payload.to_string()),
        _ => Err(ResolveError::MissingPayload),
    }
}
