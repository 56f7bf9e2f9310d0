//! Pending email verification hand-off. Sign-up passes the record to the
//! verification screen through a [`PendingSlot`]; a copy is kept in the tab's
//! `sessionStorage` so a reload of the verification screen does not lose it.
//! The record only holds the email address.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// `sessionStorage` key for the mirrored record.
pub const STORAGE_KEY: &str = "mirrorx.pending_verification";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// An account that registered but has not confirmed its email yet.
pub struct PendingVerification {
    email: String,
}

impl PendingVerification {
    /// Builds a record for a normalized email; blank input yields `None`.
    #[must_use]
    pub fn new(email: &str) -> Option<Self> {
        let email = normalize_email(email);
        if email.is_empty() {
            None
        } else {
            Some(Self { email })
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Serialized form stored in `sessionStorage`.
    #[must_use]
    pub fn to_storage_value(&self) -> String {
        serde_json::json!({ "email": self.email }).to_string()
    }

    /// Parses a stored value; corrupt or blank values are treated as absent.
    #[must_use]
    pub fn from_storage_value(value: &str) -> Option<Self> {
        let stored: Self = serde_json::from_str(value).ok()?;
        Self::new(&stored.email)
    }
}

/// Normalizes emails for stable API requests and comparisons.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Mirror that keeps the record across page loads. Failures are swallowed;
/// the in-memory record stays authoritative.
pub trait PendingStorage {
    fn load(&self) -> Option<PendingVerification>;
    fn save(&self, record: &PendingVerification);
    fn clear(&self);
}

/// Owns the pending verification of one tab.
#[derive(Debug, Default)]
pub struct PendingSlot<S> {
    record: Option<PendingVerification>,
    storage: S,
}

impl<S: PendingStorage> PendingSlot<S> {
    pub fn new(storage: S) -> Self {
        Self {
            record: None,
            storage,
        }
    }

    /// Records the hand-off from sign-up and mirrors it.
    pub fn set(&mut self, record: PendingVerification) {
        self.storage.save(&record);
        self.record = Some(record);
    }

    /// Current record, restored from the mirror after a reload.
    pub fn current(&mut self) -> Option<PendingVerification> {
        if let Some(record) = &self.record {
            return Some(record.clone());
        }
        let restored = self.storage.load()?;
        debug!("restored pending verification from session storage");
        self.record = Some(restored.clone());
        Some(restored)
    }

    /// Removes the record and its mirror.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.record = None;
    }
}

/// Browser `sessionStorage` mirror of the hand-off record.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserSessionStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl PendingStorage for BrowserSessionStorage {
    fn load(&self) -> Option<PendingVerification> {
        let value = Self::storage()?.get_item(STORAGE_KEY).ok().flatten()?;
        PendingVerification::from_storage_value(&value)
    }

    fn save(&self, record: &PendingVerification) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if storage
            .set_item(STORAGE_KEY, &record.to_storage_value())
            .is_err()
        {
            tracing::warn!("failed to persist pending verification");
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    /// Stand-in for `sessionStorage`; clones share the stored value.
    #[derive(Clone, Default)]
    struct MemoryStorage {
        value: Rc<RefCell<Option<String>>>,
    }

    impl PendingStorage for MemoryStorage {
        fn load(&self) -> Option<PendingVerification> {
            PendingVerification::from_storage_value(self.value.borrow().as_deref()?)
        }

        fn save(&self, record: &PendingVerification) {
            *self.value.borrow_mut() = Some(record.to_storage_value());
        }

        fn clear(&self) {
            *self.value.borrow_mut() = None;
        }
    }

    #[test]
    fn slot_mirrors_and_restores_after_reload() {
        let storage = MemoryStorage::default();
        let record = PendingVerification::new("ada@example.com").expect("record");

        let mut before_reload = PendingSlot::new(storage.clone());
        before_reload.set(record.clone());

        let mut after_reload = PendingSlot::new(storage);
        assert_eq!(after_reload.current(), Some(record));
    }

    #[test]
    fn clear_removes_record_and_mirror() {
        let storage = MemoryStorage::default();
        let mut slot = PendingSlot::new(storage.clone());
        slot.set(PendingVerification::new("ada@example.com").expect("record"));

        slot.clear();

        assert_eq!(slot.current(), None);
        assert!(storage.value.borrow().is_none());
    }

    #[test]
    fn new_normalizes_and_rejects_blank() {
        let record = PendingVerification::new("  Ada@Example.COM ").expect("record");
        assert_eq!(record.email(), "ada@example.com");
        assert_eq!(PendingVerification::new("   "), None);
    }

    #[test]
    fn storage_value_survives_reload() {
        let record = PendingVerification::new("ada@example.com").expect("record");
        let stored = record.to_storage_value();
        assert_eq!(
            PendingVerification::from_storage_value(&stored),
            Some(record)
        );
    }

    #[test]
    fn corrupt_storage_value_is_absent() {
        assert_eq!(PendingVerification::from_storage_value("not json"), None);
        assert_eq!(
            PendingVerification::from_storage_value(r#"{"email":"  "}"#),
            None
        );
        assert_eq!(PendingVerification::from_storage_value("{}"), None);
    }
}
