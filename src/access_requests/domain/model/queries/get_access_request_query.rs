use crate::access_requests::domain::model::{
    enums::access_request_domain_error::AccessRequestDomainError,
    value_objects::access_request_id::AccessRequestId,
};

#[derive(Clone, Debug)]
pub struct GetAccessRequestQuery {
    request_id: AccessRequestId,
}

impl GetAccessRequestQuery {
    pub fn new(request_id: String) -> Result<Self, AccessRequestDomainError> {
        Ok(Self {
            request_id: AccessRequestId::new(request_id)?,
        })
    }

    pub fn request_id(&self) -> AccessRequestId {
        self.request_id
    }
}
