// 🗃️ Model Store - session-wide reactive state holder
// Single owner of view state; transport-agnostic; mutated only through setters

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::RwLock;

use crate::model::{ClientConfig, JournalMetadata, Posting, Transaction};

/// Holds the client's view state for one session: journal list, the
/// currently loaded transactions and postings, the loading flag, the last
/// load error, and the client config.
///
/// Created once at startup and shared by handle. Every setter is an atomic,
/// synchronous assignment that is visible to readers before the call
/// returns; accessors poll the current value. No setter touches any field
/// but its own, and no value is validated: an empty list or a `None` error
/// is stored verbatim.
///
/// Consumers that want to notice changes cheaply can poll [`revision`],
/// which increases on every write.
///
/// [`revision`]: ModelStore::revision
#[derive(Debug, Default)]
pub struct ModelStore {
    journals: RwLock<Vec<JournalMetadata>>,
    transactions: RwLock<Vec<Transaction>>,
    postings: RwLock<Vec<Posting>>,
    loading: AtomicBool,
    error: RwLock<Option<String>>,
    config: RwLock<Option<ClientConfig>>,
    revision: AtomicU64,
}

impl ModelStore {
    pub fn new() -> Self {
        Default::default()
    }

    fn bump(&self) {
        self.revision.fetch_add(1, Ordering::SeqCst);
    }

    // ========================================================================
    // SETTERS
    // ========================================================================

    pub fn set_journals(&self, journals: Vec<JournalMetadata>) {
        *self.journals.write().unwrap() = journals;
        self.bump();
    }

    pub fn set_transactions(&self, transactions: Vec<Transaction>) {
        *self.transactions.write().unwrap() = transactions;
        self.bump();
    }

    pub fn set_postings(&self, postings: Vec<Posting>) {
        *self.postings.write().unwrap() = postings;
        self.bump();
    }

    pub fn set_loading(&self, loading: bool) {
        self.loading.store(loading, Ordering::SeqCst);
        self.bump();
    }

    pub fn set_error(&self, error: Option<String>) {
        *self.error.write().unwrap() = error;
        self.bump();
    }

    pub fn set_config(&self, config: ClientConfig) {
        *self.config.write().unwrap() = Some(config);
        self.bump();
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn journals(&self) -> Vec<JournalMetadata> {
        self.journals.read().unwrap().clone()
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.read().unwrap().clone()
    }

    pub fn postings(&self) -> Vec<Posting> {
        self.postings.read().unwrap().clone()
    }

    pub fn loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub fn error(&self) -> Option<String> {
        self.error.read().unwrap().clone()
    }

    pub fn config(&self) -> Option<ClientConfig> {
        self.config.read().unwrap().clone()
    }

    /// Monotonically increasing write counter. Equal values between two
    /// reads mean no setter ran in between.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn journal(id: &str) -> JournalMetadata {
        JournalMetadata {
            id: id.to_string(),
            title: format!("Journal {}", id),
            subtitle: None,
            currency: "CHF".to_string(),
            commodities: Default::default(),
        }
    }

    #[test]
    fn test_starts_empty() {
        let store = ModelStore::new();
        assert!(store.journals().is_empty());
        assert!(store.transactions().is_empty());
        assert!(store.postings().is_empty());
        assert!(!store.loading());
        assert!(store.error().is_none());
        assert!(store.config().is_none());
    }

    #[test]
    fn test_set_then_clear_leaves_cleared_value() {
        let store = ModelStore::new();
        store.set_journals(vec![journal("a"), journal("b")]);
        assert_eq!(store.journals().len(), 2);

        store.set_journals(vec![]);
        assert!(store.journals().is_empty());
    }

    #[test]
    fn test_loading_and_error_are_independent() {
        let store = ModelStore::new();
        store.set_error(Some("Failed to load journals".to_string()));
        store.set_loading(true);
        assert_eq!(store.error().as_deref(), Some("Failed to load journals"));

        store.set_loading(false);
        assert_eq!(store.error().as_deref(), Some("Failed to load journals"));

        store.set_error(None);
        assert!(!store.loading());
    }

    #[test]
    fn test_collections_are_independent() {
        let store = ModelStore::new();
        store.set_journals(vec![journal("a")]);
        store.set_postings(vec![]);
        store.set_transactions(vec![]);
        assert_eq!(store.journals().len(), 1);
    }

    #[test]
    fn test_reads_reflect_the_latest_write() {
        let store = ModelStore::new();
        store.set_loading(true);
        assert!(store.loading());
        store.set_loading(false);
        assert!(!store.loading());
    }

    #[test]
    fn test_revision_bumps_on_every_setter() {
        let store = ModelStore::new();
        let before = store.revision();
        store.set_loading(true);
        store.set_error(None);
        store.set_journals(vec![]);
        assert_eq!(store.revision(), before + 3);
    }

    #[test]
    fn test_config_is_stored_verbatim() {
        let store = ModelStore::new();
        store.set_config(ClientConfig {
            log_level: "debug".to_string(),
        });
        assert_eq!(store.config().unwrap().log_level, "debug");
    }
}
