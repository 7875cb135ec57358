/*!
 * Tests for the Markdown front matter codec
 */

use anyhow::Result;
use serde_yaml::Value;
use docwai::MarkdownDocument;

/// Test that a document without front matter keeps its trimmed body
#[test]
fn test_parse_withoutFrontMatter_shouldReturnTrimmedBody() -> Result<()> {
    let document = MarkdownDocument::parse("\n# Title\n\nSome body text.\n")?;

    assert!(document.front_matter.is_none());
    assert_eq!(document.body, "# Title\n\nSome body text.");

    Ok(())
}

/// Test that rendering without front matter returns the body unchanged
#[test]
fn test_render_withoutFrontMatter_shouldReturnBodyOnly() -> Result<()> {
    let document = MarkdownDocument::parse("Plain paragraph.")?;

    assert_eq!(document.render()?, "Plain paragraph.");

    Ok(())
}

/// Test that a leading front matter block is split off and parsed
#[test]
fn test_parse_withFrontMatter_shouldSplitMetadataAndBody() -> Result<()> {
    let text = "---\ntitle: Guide\ndraft: true\n---\n\n# Guide\n\nBody here.\n";
    let document = MarkdownDocument::parse(text)?;

    let mapping = document.front_matter.as_ref().expect("front matter should be parsed");
    assert_eq!(mapping.get(&Value::from("title")), Some(&Value::from("Guide")));
    assert_eq!(mapping.get(&Value::from("draft")), Some(&Value::from(true)));
    assert_eq!(document.body, "# Guide\n\nBody here.");

    Ok(())
}

/// Test that parse then render round-trips the metadata structurally
#[test]
fn test_roundTrip_withFrontMatter_shouldPreserveKeysAndValues() -> Result<()> {
    let text = "---\ntitle: Release notes\nversion: 3\nnested:\n  key: value\n---\n\nBody text.\n";
    let document = MarkdownDocument::parse(text)?;
    let rendered = document.render()?;
    let reparsed = MarkdownDocument::parse(&rendered)?;

    assert_eq!(reparsed.front_matter, document.front_matter);
    assert_eq!(reparsed.body, document.body);

    Ok(())
}

/// Test that unicode metadata values survive rendering unescaped
#[test]
fn test_render_withUnicodeValues_shouldKeepThemUnescaped() -> Result<()> {
    let text = "---\ntitle: \u{631}\u{627}\u{647}\u{646}\u{645}\u{627}\n---\n\nBody.\n";
    let document = MarkdownDocument::parse(text)?;
    let rendered = document.render()?;

    assert!(rendered.contains('\u{631}'));
    assert!(!rendered.contains("\\u"));

    Ok(())
}

/// Test that a translated body is carried while the metadata stays put
#[test]
fn test_withBody_shouldReplaceBodyAndKeepMetadata() -> Result<()> {
    let document = MarkdownDocument::parse("---\ntitle: Guide\n---\n\nOriginal body.\n")?;
    let translated = document.with_body("Translated body.");

    assert_eq!(translated.front_matter, document.front_matter);
    assert_eq!(translated.body, "Translated body.");

    let rendered = translated.render()?;
    assert!(rendered.starts_with("---\n"));
    assert!(rendered.contains("title: Guide"));
    assert!(rendered.ends_with("Translated body."));

    Ok(())
}

/// Test that delimiters around non-mapping content are a hard error
#[test]
fn test_parse_withMalformedFrontMatter_shouldFail() {
    let text = "---\n- just\n- a list\n---\n\nBody.\n";
    let result = MarkdownDocument::parse(text);

    assert!(result.is_err());
}

/// Test that only lines of exactly three hyphens delimit front matter
#[test]
fn test_parse_withFourHyphenFence_shouldTreatWholeTextAsBody() -> Result<()> {
    let text = "----\ntitle: Not front matter\n----\nBody.\n";
    let document = MarkdownDocument::parse(text)?;

    assert!(document.front_matter.is_none());
    assert_eq!(document.body, text.trim());

    Ok(())
}

/// Test that body_only ignores a leading three-hyphen line
#[test]
fn test_bodyOnly_withLeadingFence_shouldNotParseMetadata() {
    let text = "---\ntitle: Looks like front matter\n---\nBody.";
    let document = MarkdownDocument::body_only(text);

    assert!(document.front_matter.is_none());
    assert_eq!(document.body, text);
}

/// Test that a three-hyphen line later in the document is plain text
#[test]
fn test_parse_withFenceInTheMiddle_shouldTreatWholeTextAsBody() -> Result<()> {
    let text = "Intro paragraph.\n---\ntitle: Not metadata\n---\nMore text.\n";
    let document = MarkdownDocument::parse(text)?;

    assert!(document.front_matter.is_none());
    assert_eq!(document.body, text.trim());

    Ok(())
}
