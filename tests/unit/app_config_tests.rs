/*!
 * Tests for the application configuration
 */

use std::str::FromStr;
use docwai::app_config::{Config, TranslationProvider, parse_extensions};
use crate::common;

/// Test that the default configuration targets Persian Markdown docs
#[test]
fn test_defaultConfig_shouldTargetPersianMarkdown() {
    let config = Config::default();

    assert_eq!(config.provider, "openai");
    assert_eq!(config.target_language, "Persian");
    assert_eq!(config.target_language_code, "fa");
    assert_eq!(config.file_extensions, vec!["md".to_string()]);
    assert_eq!(config.output_format, "*-{lang}.{ext}");
}

/// Test that the default prompt templates carry their substitution tokens
#[test]
fn test_defaultConfig_promptTemplates_shouldCarryTokens() {
    let config = Config::default();

    assert!(config.system_prompt.contains("{TARGET_LANG}"));
    assert!(config.user_prompt.contains("{TARGET_LANG}"));
    assert!(config.user_prompt.contains("{text}"));
}

/// Test that provider names parse case-insensitively
#[test]
fn test_providerFromStr_withMixedCase_shouldParse() {
    assert_eq!(TranslationProvider::from_str("OpenAI").unwrap(), TranslationProvider::OpenAI);
    assert_eq!(TranslationProvider::from_str("GEMINI").unwrap(), TranslationProvider::Gemini);
    assert_eq!(TranslationProvider::from_str("anthropic").unwrap(), TranslationProvider::Anthropic);
    assert_eq!(TranslationProvider::from_str(" azure ").unwrap(), TranslationProvider::Azure);
}

/// Test that an unknown provider name is rejected
#[test]
fn test_providerFromStr_withUnknownName_shouldFail() {
    let result = TranslationProvider::from_str("deepl");

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Unsupported translation provider"));
}

/// Test that display and lowercase names stay in sync with parsing
#[test]
fn test_providerRoundTrip_shouldParseItsOwnLowercaseName() {
    for provider in [
        TranslationProvider::OpenAI,
        TranslationProvider::Gemini,
        TranslationProvider::Anthropic,
        TranslationProvider::Azure,
    ] {
        let reparsed = TranslationProvider::from_str(&provider.to_lowercase_string()).unwrap();
        assert_eq!(reparsed, provider);
    }
}

/// Test that validation requires a credential before anything else
#[test]
fn test_validate_withMissingApiKey_shouldFail() {
    let config = Config::default();

    let result = config.validate();

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("API key"));
}

/// Test that a complete configuration validates
#[test]
fn test_validate_withApiKey_shouldSucceed() {
    let config = common::create_test_config();

    assert!(config.validate().is_ok());
}

/// Test that an invalid target language code is rejected
#[test]
fn test_validate_withInvalidLanguageCode_shouldFail() {
    let mut config = common::create_test_config();
    config.target_language_code = "zz".to_string();

    assert!(config.validate().is_err());
}

/// Test that the Azure provider requires a region
#[test]
fn test_validate_withAzureAndNoRegion_shouldFail() {
    let mut config = common::create_test_config();
    config.provider = "azure".to_string();

    let result = config.validate();

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("region"));
}

/// Test that the Azure provider validates once a region is set
#[test]
fn test_validate_withAzureAndRegion_shouldSucceed() {
    let mut config = common::create_test_config();
    config.provider = "azure".to_string();
    config.azure_region = "westeurope".to_string();

    assert!(config.validate().is_ok());
}

/// Test that a malformed endpoint override is rejected
#[test]
fn test_validate_withMalformedEndpoint_shouldFail() {
    let mut config = common::create_test_config();
    config.endpoint = "not a url".to_string();

    assert!(config.validate().is_err());
}

/// Test that the extension list accepts whitespace and comma separators
#[test]
fn test_parseExtensions_withMixedSeparators_shouldSplit() {
    assert_eq!(parse_extensions("md"), vec!["md".to_string()]);
    assert_eq!(parse_extensions("md txt"), vec!["md".to_string(), "txt".to_string()]);
    assert_eq!(parse_extensions("md,txt"), vec!["md".to_string(), "txt".to_string()]);
    assert_eq!(parse_extensions(" .md , .RST "), vec!["md".to_string(), "rst".to_string()]);
}

/// Test that an empty extension string parses to an empty list
#[test]
fn test_parseExtensions_withBlankInput_shouldReturnEmpty() {
    assert!(parse_extensions("  ,  ").is_empty());
}

/// Test that an unset model falls back to a per-provider default
#[test]
fn test_getModel_withEmptyModel_shouldUseProviderDefault() {
    let mut config = common::create_test_config();

    config.provider = "openai".to_string();
    assert!(!config.get_model().is_empty());

    config.provider = "anthropic".to_string();
    assert!(config.get_model().contains("claude"));

    config.provider = "gemini".to_string();
    assert!(config.get_model().contains("gemini"));
}

/// Test that an explicit model wins over the provider default
#[test]
fn test_getModel_withExplicitModel_shouldUseIt() {
    let mut config = common::create_test_config();
    config.model = "gpt-4o".to_string();

    assert_eq!(config.get_model(), "gpt-4o");
}

/// Test that each provider has a sensible default endpoint
#[test]
fn test_getEndpoint_withEmptyOverride_shouldUseProviderDefault() {
    let mut config = common::create_test_config();

    config.provider = "openai".to_string();
    assert!(config.get_endpoint().contains("api.openai.com"));

    config.provider = "gemini".to_string();
    assert!(config.get_endpoint().contains("generativelanguage.googleapis.com"));

    config.provider = "anthropic".to_string();
    assert!(config.get_endpoint().contains("api.anthropic.com"));

    config.provider = "azure".to_string();
    assert!(config.get_endpoint().contains("microsofttranslator.com"));
}

/// Test that an endpoint override wins over the provider default
#[test]
fn test_getEndpoint_withOverride_shouldUseIt() {
    let mut config = common::create_test_config();
    config.endpoint = "http://localhost:8080".to_string();

    assert_eq!(config.get_endpoint(), "http://localhost:8080");
}
