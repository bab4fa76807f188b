#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Justification(String);

impl Justification {
    pub fn new(value: Option<String>) -> Self {
        Self(value.map(|text| text.trim().to_string()).unwrap_or_default())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
