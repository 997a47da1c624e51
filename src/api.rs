// 🔌 API Requests - resource-oriented call descriptions for the journal API
// One constructor per endpoint; transports execute these, tests assert on them

use chrono::NaiveDate;
use serde_json::Value;

use crate::model::{JournalMetadata, PostingFilters, TransactionFilters};

const API_ROOT: &str = "/api/journal";

/// HTTP method of a resource call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Request payload. Journal uploads go up as the raw ledger text, everything
/// else is JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Text(String),
}

/// A single resource-oriented call: method, path, optional query parameters,
/// optional body. Optional parameters that the caller left unset are absent
/// from `query` entirely, never present as empty strings.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    fn get(path: String) -> Self {
        ApiRequest {
            method: Method::Get,
            path,
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    // ========================================================================
    // JOURNALS
    // ========================================================================

    /// GET `/api/journal/list`
    pub fn list_journals() -> Self {
        Self::get(format!("{}/list", API_ROOT))
    }

    /// GET `/api/journal/{id}/metadata`
    pub fn journal_metadata(journal_id: &str) -> Self {
        Self::get(format!(
            "{}/{}/metadata",
            API_ROOT,
            urlencoding::encode(journal_id)
        ))
    }

    /// GET `/api/journal/{id}/transactions` with the optional
    /// startDate/endDate/partnerId/status parameters.
    pub fn transactions(journal_id: &str, filters: &TransactionFilters) -> Self {
        let mut request = Self::get(format!(
            "{}/{}/transactions",
            API_ROOT,
            urlencoding::encode(journal_id)
        ));
        if let Some(start) = filters.start_date {
            request.query.push(("startDate", start.to_string()));
        }
        if let Some(end) = filters.end_date {
            request.query.push(("endDate", end.to_string()));
        }
        if let Some(partner) = &filters.partner_id {
            request.query.push(("partnerId", partner.clone()));
        }
        if let Some(status) = filters.status {
            request.query.push(("status", status.as_str().to_string()));
        }
        request
    }

    /// POST `/api/journal` with the journal as JSON body.
    pub fn create_journal(journal: &JournalMetadata) -> Self {
        ApiRequest {
            method: Method::Post,
            path: API_ROOT.to_string(),
            query: Vec::new(),
            body: RequestBody::Json(
                serde_json::to_value(journal).expect("journal metadata serializes to JSON"),
            ),
        }
    }

    /// PUT `/api/journal` with the journal as JSON body.
    pub fn update_journal(journal: &JournalMetadata) -> Self {
        ApiRequest {
            method: Method::Put,
            path: API_ROOT.to_string(),
            query: Vec::new(),
            body: RequestBody::Json(
                serde_json::to_value(journal).expect("journal metadata serializes to JSON"),
            ),
        }
    }

    /// DELETE `/api/journal/{id}`
    pub fn delete_journal(journal_id: &str) -> Self {
        ApiRequest {
            method: Method::Delete,
            path: format!("{}/{}", API_ROOT, urlencoding::encode(journal_id)),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    /// POST `/api/journal/upload` with the raw ledger file text as body.
    pub fn upload(content: &str) -> Self {
        ApiRequest {
            method: Method::Post,
            path: format!("{}/upload", API_ROOT),
            query: Vec::new(),
            body: RequestBody::Text(content.to_string()),
        }
    }

    // ========================================================================
    // ACCOUNTS, POSTINGS, BALANCES
    // ========================================================================

    /// GET `/api/journal/accounts`
    pub fn accounts() -> Self {
        Self::get(format!("{}/accounts", API_ROOT))
    }

    /// GET `/api/journal/accounts/{name}/balance` with the optional asOfDate
    /// parameter. Account names with spaces or special characters are
    /// percent-encoded into the path segment.
    pub fn account_balance(account_name: &str, as_of_date: Option<NaiveDate>) -> Self {
        let mut request = Self::get(format!(
            "{}/accounts/{}/balance",
            API_ROOT,
            urlencoding::encode(account_name)
        ));
        if let Some(as_of) = as_of_date {
            request.query.push(("asOfDate", as_of.to_string()));
        }
        request
    }

    /// GET `/api/journal/accounts/{name}/postings` with the optional
    /// startDate/endDate/status parameters. The account is addressed by the
    /// path segment; `filters.account_name` plays no role here.
    pub fn account_postings(account_name: &str, filters: &PostingFilters) -> Self {
        let mut request = Self::get(format!(
            "{}/accounts/{}/postings",
            API_ROOT,
            urlencoding::encode(account_name)
        ));
        Self::push_posting_params(&mut request, filters);
        request
    }

    /// GET `/api/journal/postings` with the optional
    /// startDate/endDate/status/accountName parameters.
    pub fn all_postings(filters: &PostingFilters) -> Self {
        let mut request = Self::get(format!("{}/postings", API_ROOT));
        Self::push_posting_params(&mut request, filters);
        if let Some(account) = &filters.account_name {
            request.query.push(("accountName", account.clone()));
        }
        request
    }

    /// GET `/api/journal/balances` with the optional asOfDate parameter.
    pub fn all_balances(as_of_date: Option<NaiveDate>) -> Self {
        let mut request = Self::get(format!("{}/balances", API_ROOT));
        if let Some(as_of) = as_of_date {
            request.query.push(("asOfDate", as_of.to_string()));
        }
        request
    }

    /// GET `/public/config`
    pub fn client_config() -> Self {
        Self::get("/public/config".to_string())
    }

    fn push_posting_params(request: &mut ApiRequest, filters: &PostingFilters) {
        if let Some(start) = filters.start_date {
            request.query.push(("startDate", start.to_string()));
        }
        if let Some(end) = filters.end_date {
            request.query.push(("endDate", end.to_string()));
        }
        if let Some(status) = filters.status {
            request.query.push(("status", status.as_str().to_string()));
        }
    }

    // ========================================================================
    // RENDERING
    // ========================================================================

    /// Path plus query string with percent-encoded values, as a transport
    /// would put it on the wire.
    pub fn url(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let params: Vec<String> = self
            .query
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect();
        format!("{}?{}", self.path, params.join("&"))
    }
}

// ============================================================================
// TESTS
// ============================================================================
