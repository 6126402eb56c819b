//! Submission timestamps.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// The current wall-clock time as a human-readable, locale-formatted
/// string, e.g. `4/5/2025, 9:12:01 PM` in a US-English browser.
///
/// This is presentation data, not a sortable instant; records store it
/// verbatim. Outside the browser there is no locale to ask, so the stub
/// returns an empty string.
#[must_use]
pub fn locale_timestamp() -> String {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::new_0()
            .to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
            .into()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
