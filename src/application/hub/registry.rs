//! HubRegistry - one mounted hub per signed-in session.
//!
//! Entries live until sign-out or until the access token expires. An expired
//! entry is evicted the next time its token is looked up, or by
//! [`HubRegistry::evict_expired`].

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::foundation::{Session, SessionContext, Timestamp};

use super::professional_hub::{HubPorts, ProfessionalHub};

/// Live hubs keyed by the session's access token.
pub struct HubRegistry {
    ports: HubPorts,
    hubs: RwLock<HashMap<String, Arc<ProfessionalHub>>>,
}

impl HubRegistry {
    pub fn new(ports: HubPorts) -> Self {
        Self {
            ports,
            hubs: RwLock::new(HashMap::new()),
        }
    }

    /// Starts a session context for `session` and registers a fresh hub for it.
    ///
    /// The hub is not mounted yet. Re-opening the same token replaces the
    /// previous hub.
    pub fn open(&self, session: Session) -> Arc<ProfessionalHub> {
        let token = session.access_token().to_string();
        let context = Arc::new(SessionContext::start(session));
        let hub = Arc::new(ProfessionalHub::new(context, self.ports.clone()));

        self.hubs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token, hub.clone());
        hub
    }

    /// Returns the live hub for `token`.
    ///
    /// A hub whose session has expired is removed, its session ended and its
    /// state discarded; the lookup then reports `None`.
    pub async fn get(&self, token: &str) -> Option<Arc<ProfessionalHub>> {
        let hub = self
            .hubs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()?;

        if !is_stale(&hub, Timestamp::now()) {
            return Some(hub);
        }

        let removed = {
            let mut hubs = self.hubs.write().unwrap_or_else(PoisonError::into_inner);
            match hubs.get(token) {
                Some(current) if Arc::ptr_eq(current, &hub) => hubs.remove(token),
                _ => None,
            }
        };
        if let Some(hub) = removed {
            tracing::info!("Evicting hub for expired session");
            retire(&hub).await;
        }
        None
    }

    /// Removes every hub whose session has expired. Returns how many went.
    pub async fn evict_expired(&self) -> usize {
        let now = Timestamp::now();
        let expired: Vec<_> = {
            let mut hubs = self.hubs.write().unwrap_or_else(PoisonError::into_inner);
            let tokens: Vec<String> = hubs
                .iter()
                .filter(|(_, hub)| is_stale(hub, now))
                .map(|(token, _)| token.clone())
                .collect();
            tokens.iter().filter_map(|token| hubs.remove(token)).collect()
        };

        for hub in &expired {
            retire(hub).await;
        }
        if !expired.is_empty() {
            tracing::info!(count = expired.len(), "Evicted hubs for expired sessions");
        }
        expired.len()
    }

    /// Removes the hub for `token`, returning it for teardown.
    pub fn close(&self, token: &str) -> Option<Arc<ProfessionalHub>> {
        self.hubs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token)
    }

    pub fn len(&self) -> usize {
        self.hubs.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An ended session also counts: nothing can use that hub any more.
fn is_stale(hub: &ProfessionalHub, now: Timestamp) -> bool {
    match hub.session().current() {
        Ok(session) => session.is_expired_at(now),
        Err(_) => true,
    }
}

async fn retire(hub: &ProfessionalHub) {
    hub.session().end();
    hub.unmount().await;
}
