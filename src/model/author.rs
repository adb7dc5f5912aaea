/// A person who writes blogs.
///
/// `id` is empty until the store assigns one on creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
}

impl Author {
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }

    /// "Firstname Lastname", without stray whitespace when a part is missing.
    pub fn display_name(&self) -> String {
        match (self.firstname.is_empty(), self.lastname.is_empty()) {
            (false, false) => format!("{} {}", self.firstname, self.lastname),
            (false, true) => self.firstname.clone(),
            (true, false) => self.lastname.clone(),
            (true, true) => String::new(),
        }
    }
}
