use crate::access_requests::domain::model::{
    enums::{access_request_domain_error::AccessRequestDomainError, access_type::AccessType},
    value_objects::{
        justification::Justification, requester_email::RequesterEmail,
        requester_name::RequesterName,
    },
};

#[derive(Clone, Debug)]
pub struct SubmitAccessRequestCommand {
    name: RequesterName,
    email: RequesterEmail,
    access_type: AccessType,
    justification: Justification,
}

impl SubmitAccessRequestCommand {
    pub fn new(
        name: String,
        email: String,
        access_type: String,
        justification: Option<String>,
    ) -> Result<Self, AccessRequestDomainError> {
        Ok(Self {
            name: RequesterName::new(name)?,
            email: RequesterEmail::new(email)?,
            access_type: access_type.parse()?,
            justification: Justification::new(justification),
        })
    }

    pub fn name(&self) -> &RequesterName {
        &self.name
    }

    pub fn email(&self) -> &RequesterEmail {
        &self.email
    }

    pub fn access_type(&self) -> AccessType {
        self.access_type
    }

    pub fn justification(&self) -> &Justification {
        &self.justification
    }
}
