//! Outline structure and indentation-based parsing.
//!
//! The outline stage asks the model for plain text in the shape
//!
//! ```text
//! Introduction
//!   why it matters
//!   who this is for
//! Main Body
//!   the core argument
//! ```
//!
//! A line with no leading whitespace starts a new section; an indented line
//! adds a point to the section above it.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::fmt;
use tracing::debug;

/// One outline section: a heading and its key points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineSection {
    /// Section heading, trimmed.
    pub heading: String,
    /// Key points under the heading, trimmed, in order of appearance.
    pub points: Vec<String>,
}

impl OutlineSection {
    /// Create a section from a heading and its points.
    #[must_use]
    pub fn new(heading: impl Into<String>, points: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            points,
        }
    }
}

/// An ordered blog-post outline.
///
/// Section order is the order of appearance in the model's response, and the
/// content stage writes sections in exactly this order. On the wire the
/// outline serializes as a heading → points map, preserving that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    sections: Vec<OutlineSection>,
}

impl Outline {
    /// Parse raw outline text by indentation.
    ///
    /// Blank lines are skipped. An indented line that appears before any
    /// heading has nothing to attach to and is dropped.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut sections: Vec<OutlineSection> = Vec::new();

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if line.starts_with(char::is_whitespace) {
                match sections.last_mut() {
                    Some(section) => section.points.push(trimmed.to_string()),
                    None => debug!(point = trimmed, "dropping point that precedes any heading"),
                }
            } else {
                sections.push(OutlineSection::new(trimmed, Vec::new()));
            }
        }

        Self { sections }
    }

    /// The sections, in order.
    #[must_use]
    pub fn sections(&self) -> &[OutlineSection] {
        &self.sections
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the outline has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Serialize for Outline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.heading, &section.points)?;
        }
        map.end()
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "{}", section.heading)?;
            for point in &section.points {
                writeln!(f, "  {point}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_headings_and_points() {
        let outline =
            Outline::parse("Intro\n  point1\n  point2\nBody\n  point3\nConclusion\n  point4");

        assert_eq!(
            outline.sections(),
            &[
                OutlineSection::new("Intro", vec!["point1".into(), "point2".into()]),
                OutlineSection::new("Body", vec!["point3".into()]),
                OutlineSection::new("Conclusion", vec!["point4".into()]),
            ]
        );
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let outline = Outline::parse("Intro\n\n  point1\n\nBody\n");

        assert_eq!(outline.len(), 2);
        assert_eq!(outline.sections()[0].points, vec!["point1".to_string()]);
        assert!(outline.sections()[1].points.is_empty());
    }

    #[test]
    fn test_parse_drops_points_before_first_heading() {
        let outline = Outline::parse("  orphan point\nIntro\n  point1");

        assert_eq!(outline.len(), 1);
        assert_eq!(outline.sections()[0].heading, "Intro");
        assert_eq!(outline.sections()[0].points, vec!["point1".to_string()]);
    }

    #[test]
    fn test_parse_tab_indentation() {
        let outline = Outline::parse("Intro\n\tpoint1");
        assert_eq!(outline.sections()[0].points, vec!["point1".to_string()]);
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(Outline::parse("").is_empty());
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let outline = Outline::parse("Intro\n  point1\n  point2\nBody\n  point3");
        let json = serde_json::to_string(&outline).expect("serialize");

        assert_eq!(
            json,
            r#"{"Intro":["point1","point2"],"Body":["point3"]}"#
        );
    }

    #[test]
    fn test_display_roundtrips_shape() {
        let text = "Intro\n  point1\nBody\n  point2\n";
        let outline = Outline::parse(text);
        assert_eq!(outline.to_string(), text);
    }
}
