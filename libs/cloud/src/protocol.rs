//! Addresses of server-side endpoints

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use stratus_core::AddressError;

/// REST API version prefixed to every path
pub const VERSION: u32 = 1;

/// Path segment under which cloud functions live
pub const FUNCTIONS: &str = "functions";

/// Characters escaped in a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Build the address of the cloud function `name`, e.g. `/1/functions/hello`
///
/// The name becomes one percent-encoded path segment. Names made only of dots
/// are encoded in full so they cannot act as `.` or `..` segments.
pub fn cloud_function_uri(name: &str) -> Result<String, AddressError> {
    if name.is_empty() {
        return Err(AddressError::EmptyName);
    }

    let segment = if name.chars().all(|c| c == '.') {
        name.replace('.', "%2E")
    } else {
        utf8_percent_encode(name, SEGMENT).to_string()
    };

    Ok(format!("/{VERSION}/{FUNCTIONS}/{segment}"))
}
