use crate::access_requests::domain::model::enums::access_request_domain_error::AccessRequestDomainError;

lazy_static::lazy_static! {
    static ref EMAIL_REGEX: regex::Regex =
        regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex");
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RequesterEmail(String);

impl RequesterEmail {
    pub const MAX_LENGTH: usize = 120;

    pub fn new(value: String) -> Result<Self, AccessRequestDomainError> {
        let trimmed = value.trim();
        if trimmed.chars().count() > Self::MAX_LENGTH || !EMAIL_REGEX.is_match(trimmed) {
            return Err(AccessRequestDomainError::InvalidRequesterEmail);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
