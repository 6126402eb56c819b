#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn locale_timestamp_is_empty_outside_the_browser() {
    assert!(locale_timestamp().is_empty());
}
