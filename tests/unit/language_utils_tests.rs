/*!
 * Tests for language code utilities
 */

use docwai::language_utils::{validate_language_code, get_language_name};

/// Test that common ISO 639-1 codes validate
#[test]
fn test_validateLanguageCode_withValidCodes_shouldSucceed() {
    assert!(validate_language_code("fa").is_ok());
    assert!(validate_language_code("de").is_ok());
    assert!(validate_language_code("en").is_ok());
}

/// Test that codes are trimmed and case-normalized before validation
#[test]
fn test_validateLanguageCode_withUppercaseAndWhitespace_shouldSucceed() {
    assert!(validate_language_code(" FA ").is_ok());
    assert!(validate_language_code("De").is_ok());
}

/// Test that unknown or malformed codes are rejected
#[test]
fn test_validateLanguageCode_withInvalidCodes_shouldFail() {
    assert!(validate_language_code("zz").is_err());
    assert!(validate_language_code("german").is_err());
    assert!(validate_language_code("").is_err());
}

/// Test that display names resolve for valid codes
#[test]
fn test_getLanguageName_withValidCode_shouldReturnName() {
    assert_eq!(get_language_name("de").unwrap(), "German");

    let persian = get_language_name("fa").unwrap();
    assert!(!persian.is_empty());
}

/// Test that display-name lookup fails for unknown codes
#[test]
fn test_getLanguageName_withUnknownCode_shouldFail() {
    assert!(get_language_name("zz").is_err());
}
