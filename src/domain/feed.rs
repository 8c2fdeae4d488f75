use super::Content;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub title: String,
    pub description: String,
    pub entries: Vec<Entry>,
}

impl Feed {
    pub fn new(title: String, description: String) -> Self {
        Self {
            title,
            description,
            entries: Vec::new(),
        }
    }

    pub fn with_entries(mut self, entries: Vec<Entry>) -> Self {
        self.entries = entries;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub link: String,
    pub description: Option<Content>,
}

impl Entry {
    pub fn new(title: String, link: String) -> Self {
        Self {
            title,
            link,
            description: None,
        }
    }

    pub fn with_description(mut self, description: Option<Content>) -> Self {
        self.description = description;
        self
    }
}
