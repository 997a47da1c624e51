// 🎛️ Ledger Controller - orchestrates gateway calls and store updates
// Reads degrade into the store's error field; mutations reload then propagate

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::ApiRequest;
use crate::gateway::{ApiError, ApiGateway};
use crate::model::{
    AccountBalance, AccountSummary, ClientConfig, JournalMetadata, Posting, PostingFilters,
    Transaction, TransactionFilters,
};
use crate::store::ModelStore;

/// Drives the request/response/store-update protocol against an
/// [`ApiGateway`].
///
/// Store-backed reads (`load_journals`, `load_transactions`,
/// `load_postings`) never fail to the caller: a failure lands in the store's
/// error field with a fixed message and the previous collection stays put.
/// Pass-through reads and mutations log and return their error, so callers
/// can react. Mutations that succeed trigger an unconditional journal-list
/// reload; the store only ever reflects server-confirmed state.
///
/// Each store-backed resource carries a sequence counter. A response that is
/// no longer the newest issued for its resource is discarded without
/// touching the store, so a slow superseded request can never overwrite a
/// newer result.
pub struct Controller<G> {
    gateway: G,
    store: Arc<ModelStore>,
    journals_seq: AtomicU64,
    transactions_seq: AtomicU64,
    postings_seq: AtomicU64,
}

impl<G: ApiGateway> Controller<G> {
    pub fn new(gateway: G, store: Arc<ModelStore>) -> Self {
        Controller {
            gateway,
            store,
            journals_seq: AtomicU64::new(0),
            transactions_seq: AtomicU64::new(0),
            postings_seq: AtomicU64::new(0),
        }
    }

    pub fn store(&self) -> &Arc<ModelStore> {
        &self.store
    }

    async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let value = self.gateway.execute(request).await?;
        Ok(serde_json::from_value(value)?)
    }

    // ========================================================================
    // STORE-BACKED READS
    // ========================================================================

    /// Loads the journal list into the store.
    pub async fn load_journals(&self) {
        let seq = self.journals_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.store.set_loading(true);
        self.store.set_error(None);

        let result = self
            .fetch::<Vec<JournalMetadata>>(ApiRequest::list_journals())
            .await;

        if self.journals_seq.load(Ordering::SeqCst) != seq {
            log::debug!("discarding superseded journal list response");
            return;
        }

        match result {
            Ok(journals) => {
                self.store.set_journals(journals);
                self.store.set_loading(false);
            }
            Err(err) => {
                log::error!("error loading journals: {}", err);
                self.store
                    .set_error(Some("Failed to load journals".to_string()));
                self.store.set_loading(false);
            }
        }
    }

    /// Loads a journal's transactions into the store, filtered by the
    /// optional date range, partner, and status.
    pub async fn load_transactions(&self, journal_id: &str, filters: &TransactionFilters) {
        let seq = self.transactions_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.store.set_loading(true);
        self.store.set_error(None);

        let result = self
            .fetch::<Vec<Transaction>>(ApiRequest::transactions(journal_id, filters))
            .await;

        if self.transactions_seq.load(Ordering::SeqCst) != seq {
            log::debug!("discarding superseded transactions response");
            return;
        }

        match result {
            Ok(transactions) => {
                self.store.set_transactions(transactions);
                self.store.set_loading(false);
            }
            Err(err) => {
                log::error!("error loading transactions: {}", err);
                self.store
                    .set_error(Some("Failed to load transactions".to_string()));
                self.store.set_loading(false);
            }
        }
    }

    /// Loads the filtered flat posting list into the store.
    pub async fn load_postings(&self, filters: &PostingFilters) {
        let seq = self.postings_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.store.set_loading(true);
        self.store.set_error(None);

        let result = self
            .fetch::<Vec<Posting>>(ApiRequest::all_postings(filters))
            .await;

        if self.postings_seq.load(Ordering::SeqCst) != seq {
            log::debug!("discarding superseded postings response");
            return;
        }

        match result {
            Ok(postings) => {
                self.store.set_postings(postings);
                self.store.set_loading(false);
            }
            Err(err) => {
                log::error!("error loading postings: {}", err);
                self.store
                    .set_error(Some("Failed to load postings".to_string()));
                self.store.set_loading(false);
            }
        }
    }

    // ========================================================================
    // PASS-THROUGH READS
    // ========================================================================

    /// Fetches the client config and stores it.
    pub async fn load_config(&self) -> Result<ClientConfig, ApiError> {
        let config = self
            .fetch_logged::<ClientConfig>("config", ApiRequest::client_config())
            .await?;
        self.store.set_config(config.clone());
        Ok(config)
    }

    pub async fn journal_metadata(&self, journal_id: &str) -> Result<JournalMetadata, ApiError> {
        self.fetch_logged("journal metadata", ApiRequest::journal_metadata(journal_id))
            .await
    }

    pub async fn accounts(&self) -> Result<Vec<AccountSummary>, ApiError> {
        self.fetch_logged("accounts", ApiRequest::accounts()).await
    }

    pub async fn account_balance(
        &self,
        account_name: &str,
        as_of_date: Option<NaiveDate>,
    ) -> Result<AccountBalance, ApiError> {
        self.fetch_logged(
            "account balance",
            ApiRequest::account_balance(account_name, as_of_date),
        )
        .await
    }

    pub async fn account_postings(
        &self,
        account_name: &str,
        filters: &PostingFilters,
    ) -> Result<Vec<Posting>, ApiError> {
        self.fetch_logged(
            "account postings",
            ApiRequest::account_postings(account_name, filters),
        )
        .await
    }

    pub async fn all_balances(
        &self,
        as_of_date: Option<NaiveDate>,
    ) -> Result<Vec<AccountBalance>, ApiError> {
        self.fetch_logged("balances", ApiRequest::all_balances(as_of_date))
            .await
    }

    async fn fetch_logged<T: DeserializeOwned>(
        &self,
        what: &str,
        request: ApiRequest,
    ) -> Result<T, ApiError> {
        match self.fetch(request).await {
            Ok(value) => Ok(value),
            Err(err) => {
                log::error!("error loading {}: {}", what, err);
                Err(err)
            }
        }
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    /// Creates a journal. On success the journal list is reloaded so the
    /// store holds the server-confirmed collection.
    pub async fn create_journal(
        &self,
        journal: &JournalMetadata,
    ) -> Result<JournalMetadata, ApiError> {
        self.mutate_and_reload("creating journal", ApiRequest::create_journal(journal))
            .await
    }

    /// Updates a journal, then reloads the list.
    pub async fn update_journal(
        &self,
        journal: &JournalMetadata,
    ) -> Result<JournalMetadata, ApiError> {
        self.mutate_and_reload("updating journal", ApiRequest::update_journal(journal))
            .await
    }

    /// Deletes a journal, then reloads the list.
    pub async fn delete_journal(&self, journal_id: &str) -> Result<(), ApiError> {
        self.mutate_and_reload::<Value>("deleting journal", ApiRequest::delete_journal(journal_id))
            .await
            .map(|_| ())
    }

    /// Uploads a ledger file as raw text, then reloads the journal list.
    pub async fn upload_journal(&self, content: &str) -> Result<(), ApiError> {
        self.mutate_and_reload::<Value>("uploading journal", ApiRequest::upload(content))
            .await
            .map(|_| ())
    }

    /// Shared mutation protocol: issue the request, and only after its own
    /// response succeeded trigger the journal-list reload. On failure the
    /// store's collections stay untouched, loading drops back to false, and
    /// the error goes to the caller. Concurrent mutations each trigger their
    /// own reload; the sequence counter in `load_journals` makes the newest
    /// one win.
    async fn mutate_and_reload<T: DeserializeOwned>(
        &self,
        what: &str,
        request: ApiRequest,
    ) -> Result<T, ApiError> {
        self.store.set_loading(true);
        self.store.set_error(None);

        match self.fetch::<T>(request).await {
            Ok(value) => {
                self.load_journals().await;
                Ok(value)
            }
            Err(err) => {
                log::error!("error {}: {}", what, err);
                self.store.set_loading(false);
                Err(err)
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
