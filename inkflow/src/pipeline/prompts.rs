//! Prompt templates for the four stages.

/// Prompt for the topic-generation stage.
pub(crate) fn topics(domain: &str, audience: &str) -> String {
    format!(
        "Generate 5 engaging blog post topics for {audience} in the {domain} domain. \
         Each topic should be unique and interesting."
    )
}

/// Prompt for the outline stage.
pub(crate) fn outline(topic: &str) -> String {
    format!(
        "Create a detailed outline for a blog post about '{topic}'. \
         Include main sections and key points for each section."
    )
}

/// Prompt for one section of the content stage.
pub(crate) fn section(points: &[String]) -> String {
    format!(
        "Write a detailed section for a blog post covering the following points: {}. \
         Do not include the section title in your response.",
        points.join(", ")
    )
}

/// Prompt for the polish stage. Embeds the full draft.
pub(crate) fn polish(content: &str) -> String {
    format!(
        "Please edit and polish the following blog post content. \
         Improve clarity, fix any grammatical issues, and enhance the overall flow:\n\n{content}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topics_prompt_names_domain_and_audience() {
        let prompt = topics("cloud security", "startup founders");
        assert!(prompt.contains("cloud security"));
        assert!(prompt.contains("startup founders"));
        assert!(prompt.contains('5'));
    }

    #[test]
    fn test_section_prompt_joins_points_and_forbids_title() {
        let points = vec!["point1".to_string(), "point2".to_string()];
        let prompt = section(&points);
        assert!(prompt.contains("point1, point2"));
        assert!(prompt.contains("Do not include the section title"));
    }

    #[test]
    fn test_polish_prompt_embeds_content_verbatim() {
        let prompt = polish("the whole draft, word for word");
        assert!(prompt.ends_with("the whole draft, word for word"));
    }
}
