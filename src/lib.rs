// LedgerLens - view-model layer for a personal ledger client
// Exposes the state store, derivation functions, and controller for UI
// shells, the demo binary, and tests

pub mod api;
pub mod balance;
pub mod controller;
pub mod gateway;
pub mod grouping;
pub mod hierarchy;
pub mod model;
pub mod store;

// Re-export commonly used types
pub use api::{ApiRequest, Method, RequestBody};
pub use balance::format_balances;
pub use controller::Controller;
pub use gateway::{ApiError, ApiGateway};
pub use grouping::{group_postings, sort_postings_desc, GroupedTransaction};
pub use hierarchy::{derive_hierarchy, hierarchy_path};
pub use model::{
    AccountBalance, AccountSummary, AccountType, ClientConfig, Entry, JournalMetadata, Posting,
    PostingFilters, Tag, Transaction, TransactionFilters, TransactionStatus,
};
pub use store::ModelStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
