//! Form Codec
//!
//! `application/x-www-form-urlencoded` bodies for the sync request.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

// Everything but the characters encodeURIComponent leaves alone
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single form name or value
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT_ENCODE_SET).to_string()
}

/// Encode one `name=value` pair
pub fn encode_field(name: &str, value: &str) -> String {
    format!("{}={}", encode_component(name), encode_component(value))
}
