use super::Author;

/// A blog post carrying a snapshot of its author taken at creation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blog {
    pub id: String,
    pub author: Author,
    pub title: String,
    pub body: String,
}

impl Blog {
    pub fn new(author: Author, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            author,
            title: title.into(),
            body: body.into(),
        }
    }
}
