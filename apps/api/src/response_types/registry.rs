//! Response type registry — maps a response type name to its formatting instructions.
//!
//! The registry is built once on first access and never mutated afterwards, so
//! any number of threads can read it without locking.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::response_types::prompts::{
    BULLET_POINTS, COMPARATIVE_ANALYSIS, DEFAULT_INSTRUCTIONS, DETAILED_REPORT, FAQ_FORMAT,
    MULTIPLE_PARAGRAPHS, SHORT_REPORT, SINGLE_PARAGRAPH, STEP_BY_STEP_GUIDE, TABLE_FORMAT,
    TECHNICAL_DOCUMENTATION,
};

/// A named output-formatting style selectable for generated answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ResponseType {
    #[default]
    #[serde(rename = "Multiple Paragraphs")]
    MultipleParagraphs,
    #[serde(rename = "Single Paragraph")]
    SingleParagraph,
    #[serde(rename = "Bullet Points")]
    BulletPoints,
    #[serde(rename = "Table Format")]
    TableFormat,
    #[serde(rename = "Step-by-Step Guide")]
    StepByStepGuide,
    #[serde(rename = "Short Report")]
    ShortReport,
    #[serde(rename = "Detailed Report")]
    DetailedReport,
    #[serde(rename = "Technical Documentation")]
    TechnicalDocumentation,
    #[serde(rename = "FAQ Format")]
    FaqFormat,
    #[serde(rename = "Comparative Analysis")]
    ComparativeAnalysis,
}

impl ResponseType {
    /// Every response type, in catalogue order.
    pub const ALL: [ResponseType; 10] = [
        ResponseType::MultipleParagraphs,
        ResponseType::SingleParagraph,
        ResponseType::BulletPoints,
        ResponseType::TableFormat,
        ResponseType::StepByStepGuide,
        ResponseType::ShortReport,
        ResponseType::DetailedReport,
        ResponseType::TechnicalDocumentation,
        ResponseType::FaqFormat,
        ResponseType::ComparativeAnalysis,
    ];

    /// The exact registry key for this response type.
    pub fn name(self) -> &'static str {
        match self {
            ResponseType::MultipleParagraphs => "Multiple Paragraphs",
            ResponseType::SingleParagraph => "Single Paragraph",
            ResponseType::BulletPoints => "Bullet Points",
            ResponseType::TableFormat => "Table Format",
            ResponseType::StepByStepGuide => "Step-by-Step Guide",
            ResponseType::ShortReport => "Short Report",
            ResponseType::DetailedReport => "Detailed Report",
            ResponseType::TechnicalDocumentation => "Technical Documentation",
            ResponseType::FaqFormat => "FAQ Format",
            ResponseType::ComparativeAnalysis => "Comparative Analysis",
        }
    }

    pub fn instructions(self) -> &'static str {
        match self {
            ResponseType::MultipleParagraphs => MULTIPLE_PARAGRAPHS,
            ResponseType::SingleParagraph => SINGLE_PARAGRAPH,
            ResponseType::BulletPoints => BULLET_POINTS,
            ResponseType::TableFormat => TABLE_FORMAT,
            ResponseType::StepByStepGuide => STEP_BY_STEP_GUIDE,
            ResponseType::ShortReport => SHORT_REPORT,
            ResponseType::DetailedReport => DETAILED_REPORT,
            ResponseType::TechnicalDocumentation => TECHNICAL_DOCUMENTATION,
            ResponseType::FaqFormat => FAQ_FORMAT,
            ResponseType::ComparativeAnalysis => COMPARATIVE_ANALYSIS,
        }
    }

    /// Exact, case-sensitive match against the registry keys. No trimming.
    pub fn from_name(name: &str) -> Option<ResponseType> {
        ResponseType::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl std::fmt::Display for ResponseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable name → instruction text mapping.
#[derive(Debug)]
pub struct ResponseTypeRegistry {
    entries: HashMap<&'static str, &'static str>,
}

impl ResponseTypeRegistry {
    fn new() -> Self {
        let entries = ResponseType::ALL
            .into_iter()
            .map(|t| (t.name(), t.instructions()))
            .collect();
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.entries.get(name).copied()
    }

    /// Instruction text for `name`, or [`DEFAULT_INSTRUCTIONS`] on a miss.
    pub fn instructions_for(&self, name: &str) -> &'static str {
        self.get(name).unwrap_or(DEFAULT_INSTRUCTIONS)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in catalogue order.
    pub fn names(&self) -> Vec<&'static str> {
        ResponseType::ALL.into_iter().map(ResponseType::name).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static REGISTRY: Lazy<ResponseTypeRegistry> = Lazy::new(ResponseTypeRegistry::new);

/// The process-wide registry.
pub fn response_type_registry() -> &'static ResponseTypeRegistry {
    &REGISTRY
}

/// Returns the formatting instructions for `response_type`.
///
/// Unknown names (including the empty string and case variants of a known
/// name) get [`DEFAULT_INSTRUCTIONS`]; a miss is not distinguishable from a
/// hit by the return value. Use [`ResponseType::from_name`] to detect typos.
pub fn get_response_type_instructions(response_type: &str) -> &'static str {
    REGISTRY.instructions_for(response_type)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_every_key_returns_its_own_text() {
        let expected = [
            ("Multiple Paragraphs", MULTIPLE_PARAGRAPHS),
            ("Single Paragraph", SINGLE_PARAGRAPH),
            ("Bullet Points", BULLET_POINTS),
            ("Table Format", TABLE_FORMAT),
            ("Step-by-Step Guide", STEP_BY_STEP_GUIDE),
            ("Short Report", SHORT_REPORT),
            ("Detailed Report", DETAILED_REPORT),
            ("Technical Documentation", TECHNICAL_DOCUMENTATION),
            ("FAQ Format", FAQ_FORMAT),
            ("Comparative Analysis", COMPARATIVE_ANALYSIS),
        ];
        for (name, text) in expected {
            let got = get_response_type_instructions(name);
            assert_eq!(got, text, "wrong instructions for {name}");
            assert_ne!(got, DEFAULT_INSTRUCTIONS, "{name} fell back to default");
        }
    }

    #[test]
    fn test_bullet_points_starts_with_first_directive() {
        assert!(get_response_type_instructions("Bullet Points")
            .starts_with("- Structure your response as a list of bullet points"));
    }

    #[test]
    fn test_table_format_mentions_markdown_table() {
        assert!(get_response_type_instructions("Table Format").contains("markdown table format"));
    }

    #[test]
    fn test_unknown_names_get_default() {
        for name in [
            "Nonexistent Type",
            "",
            "   ",
            "bullet points",
            "BULLET POINTS",
            " Bullet Points",
            "Bullet Points\n",
            "faq format",
        ] {
            assert_eq!(
                get_response_type_instructions(name),
                "Provide a clear, concise response in an appropriate format.",
                "expected default for {name:?}"
            );
        }
    }

    #[test]
    fn test_registry_has_ten_unique_keys() {
        let registry = response_type_registry();
        assert_eq!(registry.len(), 10);
        assert!(!registry.is_empty());

        let names = registry.names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len(), "duplicate response type name");
        assert!(names.iter().all(|n| registry.contains(n)));
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let first = get_response_type_instructions("Short Report");
        let second = get_response_type_instructions("Short Report");
        assert_eq!(first, second);
        assert!(std::ptr::eq(first, second));

        let miss_a = get_response_type_instructions("nope");
        let miss_b = get_response_type_instructions("nope");
        assert!(std::ptr::eq(miss_a, miss_b));
    }

    #[test]
    fn test_texts_have_no_surrounding_whitespace() {
        for t in ResponseType::ALL {
            let text = t.instructions();
            assert_eq!(text, text.trim(), "{t} has surrounding whitespace");
            assert!(text.starts_with("- "), "{t} does not start with a directive");
        }
    }

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(
            ResponseType::from_name("FAQ Format"),
            Some(ResponseType::FaqFormat)
        );
        assert_eq!(ResponseType::from_name("FAQ format"), None);
        assert_eq!(ResponseType::from_name(""), None);
        for t in ResponseType::ALL {
            assert_eq!(ResponseType::from_name(t.name()), Some(t));
        }
    }

    #[test]
    fn test_default_response_type_is_multiple_paragraphs() {
        assert_eq!(ResponseType::default(), ResponseType::MultipleParagraphs);
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&ResponseType::StepByStepGuide).unwrap();
        assert_eq!(json, r#""Step-by-Step Guide""#);
        assert_eq!(ResponseType::StepByStepGuide.to_string(), "Step-by-Step Guide");
    }

    #[test]
    fn test_concurrent_reads_agree() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    ResponseType::ALL
                        .into_iter()
                        .map(|t| get_response_type_instructions(t.name()))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        let expected: Vec<_> = ResponseType::ALL.into_iter().map(ResponseType::instructions).collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    }
}
