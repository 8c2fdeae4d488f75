/// Raw entry content tagged with the MIME type it was declared as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub content_type: String,
    pub value: String,
}

impl Content {
    pub fn new(content_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            value: value.into(),
        }
    }
}

/// Text fragments extracted from a [`Content`], in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedContent {
    values: Vec<String>,
}

impl ParsedContent {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// First fragment, if any. Absence is not an error.
    pub fn first(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<String> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_returns_leading_fragment() {
        let parsed = ParsedContent::new(vec!["A".to_string(), "B".to_string()]);
        assert_eq!(parsed.first(), Some("A"));
        assert_eq!(parsed.values(), ["A", "B"]);
    }

    #[test]
    fn test_first_on_empty_is_none() {
        let parsed = ParsedContent::default();
        assert!(parsed.is_empty());
        assert_eq!(parsed.first(), None);
    }

    #[test]
    fn test_content_new() {
        let content = Content::new("text/html", "<p>Hi</p>");
        assert_eq!(content.content_type, "text/html");
        assert_eq!(content.value, "<p>Hi</p>");
    }
}
