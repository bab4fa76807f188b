use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, RwLock},
};

use async_trait::async_trait;

use crate::access_requests::{
    domain::model::{
        entities::access_request::AccessRequest,
        enums::{
            access_request_domain_error::AccessRequestDomainError,
            access_request_status::AccessRequestStatus,
        },
        value_objects::{
            access_request_decision::AccessRequestDecision, access_request_id::AccessRequestId,
        },
    },
    infrastructure::persistence::repositories::access_request_repository::{
        AccessRequestRepository, StatusUpdateOutcome,
    },
};

type RecordSlot = Arc<Mutex<AccessRequest>>;

#[derive(Default)]
struct SlotIndex {
    ordered: Vec<RecordSlot>,
    by_id: HashMap<AccessRequestId, RecordSlot>,
}

/// Process-local store. The index lock is held only to look up or append a
/// slot; each record has its own mutex, so decisions on different requests
/// never wait on each other.
#[derive(Default)]
pub struct InMemoryAccessRequestRepositoryImpl {
    index: RwLock<SlotIndex>,
}

impl InMemoryAccessRequestRepositoryImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<AccessRequest>) -> Self {
        let mut index = SlotIndex::default();
        for request in entries {
            let slot = Arc::new(Mutex::new(request.clone()));
            index.by_id.insert(request.id(), slot.clone());
            index.ordered.push(slot);
        }
        Self {
            index: RwLock::new(index),
        }
    }

    fn slot(&self, id: AccessRequestId) -> Result<Option<RecordSlot>, AccessRequestDomainError> {
        let index = self.index.read().map_err(|_| poisoned())?;
        Ok(index.by_id.get(&id).cloned())
    }

    fn snapshot_slots(&self) -> Result<Vec<RecordSlot>, AccessRequestDomainError> {
        let index = self.index.read().map_err(|_| poisoned())?;
        Ok(index.ordered.clone())
    }
}

#[async_trait]
impl AccessRequestRepository for InMemoryAccessRequestRepositoryImpl {
    async fn create(&self, request: &AccessRequest) -> Result<(), AccessRequestDomainError> {
        let mut index = self.index.write().map_err(|_| poisoned())?;
        if index.by_id.contains_key(&request.id()) {
            return Err(AccessRequestDomainError::InfrastructureError(format!(
                "access request {} already stored",
                request.id()
            )));
        }

        let slot = Arc::new(Mutex::new(request.clone()));
        index.by_id.insert(request.id(), slot.clone());
        index.ordered.push(slot);
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: AccessRequestId,
    ) -> Result<Option<AccessRequest>, AccessRequestDomainError> {
        match self.slot(id)? {
            Some(slot) => Ok(Some(lock_record(&slot)?.clone())),
            None => Ok(None),
        }
    }

    async fn list(
        &self,
        status: Option<AccessRequestStatus>,
    ) -> Result<Vec<AccessRequest>, AccessRequestDomainError> {
        let mut requests = Vec::new();
        for slot in self.snapshot_slots()? {
            let request = lock_record(&slot)?;
            if status.is_none_or(|wanted| request.status() == wanted) {
                requests.push(request.clone());
            }
        }
        Ok(requests)
    }

    async fn update_status(
        &self,
        id: AccessRequestId,
        decision: &AccessRequestDecision,
    ) -> Result<StatusUpdateOutcome, AccessRequestDomainError> {
        let Some(slot) = self.slot(id)? else {
            return Ok(StatusUpdateOutcome::NotFound);
        };

        let mut request = lock_record(&slot)?;
        match request.apply_decision(decision.clone()) {
            Ok(()) => Ok(StatusUpdateOutcome::Updated(request.clone())),
            Err(AccessRequestDomainError::InvalidStatusTransition) => {
                Ok(StatusUpdateOutcome::Conflict)
            }
            Err(error) => Err(error),
        }
    }
}

fn lock_record(
    slot: &RecordSlot,
) -> Result<MutexGuard<'_, AccessRequest>, AccessRequestDomainError> {
    slot.lock().map_err(|_| poisoned())
}

fn poisoned() -> AccessRequestDomainError {
    AccessRequestDomainError::InfrastructureError("access request store lock poisoned".to_string())
}
