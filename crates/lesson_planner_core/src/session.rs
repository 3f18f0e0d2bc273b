//! crates/lesson_planner_core/src/session.rs
//!
//! The session gate: a persisted boolean and one hardcoded credential pair.
//! This is a demo-grade gate, not a security boundary; the single-pair check
//! and tokenless flag are deliberate and must not be "hardened" here.

use crate::ports::{KeyValueStore, PortResult};
use std::sync::Arc;

/// The storage key holding the session flag.
pub const SESSION_KEY: &str = "isAuthenticated";

const DEMO_USERNAME: &str = "demouser";
const DEMO_PASSWORD: &str = "demopass";

/// Two states: anonymous and authenticated. Constructed explicitly at startup
/// and handed to whoever needs it, rather than living in an ambient global.
pub struct SessionGate {
    storage: Arc<dyn KeyValueStore>,
    authenticated: bool,
}

impl SessionGate {
    /// Restores the gate from the persisted flag; absence means anonymous.
    pub fn restore(storage: Arc<dyn KeyValueStore>) -> PortResult<Self> {
        let authenticated = matches!(storage.get(SESSION_KEY)?.as_deref(), Some("true"));
        Ok(Self {
            storage,
            authenticated,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Transitions to authenticated only when the submitted credentials
    /// exactly match the demo pair, persisting the flag. Any other input
    /// leaves the gate anonymous and returns `false`.
    pub fn login(&mut self, username: &str, password: &str) -> PortResult<bool> {
        if username == DEMO_USERNAME && password == DEMO_PASSWORD {
            self.storage.set(SESSION_KEY, "true")?;
            self.authenticated = true;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Unconditionally returns to anonymous and clears the persisted flag.
    pub fn logout(&mut self) -> PortResult<()> {
        self.storage.remove(SESSION_KEY)?;
        self.authenticated = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryStore;

    #[test]
    fn login_with_the_demo_pair_authenticates_and_persists() {
        let storage = Arc::new(MemoryStore::default());
        let mut gate = SessionGate::restore(storage.clone()).unwrap();
        assert!(!gate.is_authenticated());

        assert!(gate.login("demouser", "demopass").unwrap());
        assert!(gate.is_authenticated());
        assert_eq!(storage.get(SESSION_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn login_with_any_other_pair_stays_anonymous() {
        let storage = Arc::new(MemoryStore::default());
        let mut gate = SessionGate::restore(storage.clone()).unwrap();

        assert!(!gate.login("demouser", "wrong").unwrap());
        assert!(!gate.login("admin", "demopass").unwrap());
        assert!(!gate.is_authenticated());
        assert_eq!(storage.get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn logout_clears_the_flag_unconditionally() {
        let storage = Arc::new(MemoryStore::default());
        let mut gate = SessionGate::restore(storage.clone()).unwrap();
        gate.login("demouser", "demopass").unwrap();

        gate.logout().unwrap();
        assert!(!gate.is_authenticated());
        assert_eq!(storage.get(SESSION_KEY).unwrap(), None);

        // Logging out while anonymous is fine too.
        gate.logout().unwrap();
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn restore_picks_up_a_previously_persisted_session() {
        let storage = Arc::new(MemoryStore::default());
        storage.set(SESSION_KEY, "true").unwrap();

        let gate = SessionGate::restore(storage).unwrap();
        assert!(gate.is_authenticated());
    }
}
