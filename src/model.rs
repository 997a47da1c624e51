// 📒 Data Model - DTOs exchanged with the journal API
// Wire shapes are camelCase JSON; enums serialize as their server-side names

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// ENUMS
// ============================================================================

/// Reconciliation state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// Cleared/reconciled (marked with `*` in the ledger file)
    Cleared,
    /// Pending (marked with `!`)
    Pending,
    /// No status marker
    Uncleared,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Cleared => "CLEARED",
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Uncleared => "UNCLEARED",
        }
    }
}

/// Account classification from the chart of accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
    /// Cash subtype of ASSET, used in cash flow reporting
    Cash,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Asset => "ASSET",
            AccountType::Liability => "LIABILITY",
            AccountType::Equity => "EQUITY",
            AccountType::Revenue => "REVENUE",
            AccountType::Expense => "EXPENSE",
            AccountType::Cash => "CASH",
        }
    }
}

// ============================================================================
// JOURNAL
// ============================================================================

/// Journal header as served by the list/metadata endpoints.
///
/// Immutable once fetched; the whole collection is replaced on reload.
/// `commodities` maps commodity code to its display format string and keeps
/// the declaration order from the ledger file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalMetadata {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub currency: String,
    #[serde(default)]
    pub commodities: IndexMap<String, String>,
}

// ============================================================================
// TRANSACTION & ENTRIES
// ============================================================================

/// Key/value annotation attached to a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// One leg of a transaction. A transaction exclusively owns its entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub entry_order: u32,
    pub account_id: String,
    pub account_name: String,
    pub account_type: AccountType,
    pub commodity: String,
    /// Signed amount in the entry's commodity. Entries of a balanced
    /// transaction sum to zero per commodity; the server guarantees this.
    pub amount: f64,
    pub note: Option<String>,
}

/// A journal transaction with its entries and tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub status: TransactionStatus,
    pub description: String,
    pub partner_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

// ============================================================================
// POSTINGS & BALANCES
// ============================================================================

/// Account-centric projection of one transaction leg, as served by the
/// postings endpoints. Carries enough of the parent transaction to group
/// flat lists back into transaction-level records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    pub transaction_date: NaiveDate,
    pub transaction_status: TransactionStatus,
    pub transaction_description: String,
    pub transaction_id: Option<String>,
    pub account_number: String,
    pub account_name: String,
    pub account_type: AccountType,
    pub commodity: String,
    pub amount: f64,
    pub running_balance: Option<f64>,
}

/// Account line for the chart-of-accounts listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub account_number: String,
    pub account_name: String,
    pub account_type: AccountType,
    pub note: Option<String>,
}

/// Per-account balances keyed by commodity, in server-reported order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    pub account_number: String,
    pub account_name: String,
    pub account_type: AccountType,
    #[serde(default)]
    pub balances: IndexMap<String, f64>,
}

// ============================================================================
// CLIENT CONFIG & FILTERS
// ============================================================================

/// Runtime configuration served from `/public/config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub log_level: String,
}

/// Filter set for the per-journal transactions endpoint. Unset fields are
/// omitted from the request entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilters {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub partner_id: Option<String>,
    pub status: Option<TransactionStatus>,
}

/// Filter set for the postings endpoints. Unset fields are omitted from the
/// request entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostingFilters {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<TransactionStatus>,
    pub account_name: Option<String>,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posting_wire_shape() {
        let json = r#"{
            "transactionDate": "2025-03-14",
            "transactionStatus": "CLEARED",
            "transactionDescription": "Opening balance",
            "transactionId": "tx-1",
            "accountNumber": "1020",
            "accountName": "1020 Bank Account",
            "accountType": "ASSET",
            "commodity": "CHF",
            "amount": 1000.5,
            "runningBalance": null
        }"#;

        let posting: Posting = serde_json::from_str(json).unwrap();
        assert_eq!(
            posting.transaction_date,
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
        );
        assert_eq!(posting.transaction_status, TransactionStatus::Cleared);
        assert_eq!(posting.transaction_id.as_deref(), Some("tx-1"));
        assert_eq!(posting.account_type, AccountType::Asset);
        assert_eq!(posting.amount, 1000.5);
        assert!(posting.running_balance.is_none());
    }

    #[test]
    fn test_journal_metadata_keeps_commodity_order() {
        let json = r#"{
            "id": "j-1",
            "title": "Main Journal",
            "subtitle": null,
            "currency": "CHF",
            "commodities": {"CHF": "1000.00", "USD": "1,000.00", "EUR": "1000,00"}
        }"#;

        let journal: JournalMetadata = serde_json::from_str(json).unwrap();
        let codes: Vec<&String> = journal.commodities.keys().collect();
        assert_eq!(codes, ["CHF", "USD", "EUR"]);
    }

    #[test]
    fn test_transaction_round_trip() {
        let tx = Transaction {
            id: "tx-9".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            status: TransactionStatus::Pending,
            description: "Rent January".to_string(),
            partner_id: None,
            tags: vec![Tag {
                key: "project".to_string(),
                value: "office".to_string(),
            }],
            entries: vec![],
        };

        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["status"], "PENDING");
        assert_eq!(value["partnerId"], serde_json::Value::Null);
        assert_eq!(value["tags"][0]["key"], "project");

        let back: Transaction = serde_json::from_value(value).unwrap();
        assert_eq!(back, tx);
    }

    #[test]
    fn test_status_and_type_names() {
        assert_eq!(TransactionStatus::Cleared.as_str(), "CLEARED");
        assert_eq!(TransactionStatus::Uncleared.as_str(), "UNCLEARED");
        assert_eq!(AccountType::Revenue.as_str(), "REVENUE");
        assert_eq!(AccountType::Cash.as_str(), "CASH");
    }

    #[test]
    fn test_filters_default_to_unset() {
        let filters = TransactionFilters::default();
        assert!(filters.start_date.is_none());
        assert!(filters.end_date.is_none());
        assert!(filters.partner_id.is_none());
        assert!(filters.status.is_none());
    }
}
