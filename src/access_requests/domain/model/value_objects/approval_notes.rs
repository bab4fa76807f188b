#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ApprovalNotes(String);

impl ApprovalNotes {
    /// Blank input carries no rationale and yields `None`.
    pub fn new(value: Option<String>) -> Option<Self> {
        value
            .map(|notes| notes.trim().to_string())
            .filter(|notes| !notes.is_empty())
            .map(Self)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
