// LedgerLens demo - drives the controller against an in-memory gateway
// Loads a canned journal, groups its postings, and prints balances

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

use ledgerlens::{
    format_balances, group_postings, hierarchy_path, sort_postings_desc, AccountBalance,
    AccountType, ApiError, ApiGateway, ApiRequest, Controller, JournalMetadata, Method,
    ModelStore, Posting, PostingFilters, TransactionStatus,
};

/// Serves a canned journal from memory so the whole read/group/format flow
/// can run without a server.
struct FixtureGateway {
    journals: Mutex<Vec<JournalMetadata>>,
    postings: Vec<Posting>,
    balances: Vec<AccountBalance>,
}

#[async_trait]
impl ApiGateway for FixtureGateway {
    async fn execute(&self, request: ApiRequest) -> Result<Value, ApiError> {
        match (request.method, request.path.as_str()) {
            (Method::Get, "/api/journal/list") => {
                Ok(serde_json::to_value(&*self.journals.lock().unwrap())?)
            }
            (Method::Get, "/api/journal/postings") => Ok(serde_json::to_value(&self.postings)?),
            (Method::Get, "/api/journal/balances") => Ok(serde_json::to_value(&self.balances)?),
            (Method::Delete, path) => {
                let id = path.rsplit('/').next().unwrap_or_default().to_string();
                self.journals.lock().unwrap().retain(|j| j.id != id);
                Ok(Value::Null)
            }
            _ => Err(ApiError::status(404, format!("no route for {}", request.url()))),
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

fn posting(
    day: (i32, u32, u32),
    description: &str,
    transaction_id: &str,
    account_number: &str,
    account_name: &str,
    account_type: AccountType,
    amount: f64,
) -> Posting {
    Posting {
        transaction_date: date(day.0, day.1, day.2),
        transaction_status: TransactionStatus::Cleared,
        transaction_description: description.to_string(),
        transaction_id: Some(transaction_id.to_string()),
        account_number: account_number.to_string(),
        account_name: account_name.to_string(),
        account_type,
        commodity: "CHF".to_string(),
        amount,
        running_balance: None,
    }
}

fn fixture_gateway(journal_id: &str) -> FixtureGateway {
    let journal = JournalMetadata {
        id: journal_id.to_string(),
        title: "Demo Ledger".to_string(),
        subtitle: Some("fixture data".to_string()),
        currency: "CHF".to_string(),
        commodities: [
            ("CHF".to_string(), "1000.00".to_string()),
            ("USD".to_string(), "1,000.00".to_string()),
        ]
        .into_iter()
        .collect(),
    };

    let postings = vec![
        posting(
            (2025, 1, 5),
            "Opening balance",
            "tx-1",
            "1020",
            "1020 Bank Account",
            AccountType::Asset,
            5000.0,
        ),
        posting(
            (2025, 1, 5),
            "Opening balance",
            "tx-1",
            "2800",
            "2800 Equity",
            AccountType::Equity,
            -5000.0,
        ),
        posting(
            (2025, 2, 1),
            "Office rent February",
            "tx-2",
            "6570.001",
            "6570.001 Rent Main Office",
            AccountType::Expense,
            1500.0,
        ),
        posting(
            (2025, 2, 1),
            "Office rent February",
            "tx-2",
            "1020",
            "1020 Bank Account",
            AccountType::Asset,
            -1500.0,
        ),
        posting(
            (2025, 1, 20),
            "Consulting invoice 2025-01",
            "tx-3",
            "3200",
            "3200 Consulting Revenue",
            AccountType::Revenue,
            -2400.0,
        ),
        posting(
            (2025, 1, 20),
            "Consulting invoice 2025-01",
            "tx-3",
            "1020",
            "1020 Bank Account",
            AccountType::Asset,
            2400.0,
        ),
    ];

    let balances = vec![
        AccountBalance {
            account_number: "1020".to_string(),
            account_name: "1020 Bank Account".to_string(),
            account_type: AccountType::Asset,
            balances: [("CHF".to_string(), 5900.0), ("USD".to_string(), 120.5)]
                .into_iter()
                .collect(),
        },
        AccountBalance {
            account_number: "6570.001".to_string(),
            account_name: "6570.001 Rent Main Office".to_string(),
            account_type: AccountType::Expense,
            balances: [("CHF".to_string(), 1500.0)].into_iter().collect(),
        },
    ];

    FixtureGateway {
        journals: Mutex::new(vec![journal]),
        postings,
        balances,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    println!("📖 LedgerLens {} - demo run", ledgerlens::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let journal_id = uuid::Uuid::new_v4().to_string();
    let store = Arc::new(ModelStore::new());
    let controller = Controller::new(fixture_gateway(&journal_id), store.clone());

    // 1. Journals
    controller.load_journals().await;
    println!("\n📒 Journals");
    for journal in store.journals() {
        println!("  ✓ {} ({})", journal.title, journal.currency);
    }

    // 2. Postings, newest first, grouped into transactions
    controller.load_postings(&PostingFilters::default()).await;
    let mut postings = store.postings();
    sort_postings_desc(&mut postings);

    println!("\n🧾 Transactions");
    for group in group_postings(&postings) {
        println!("  {} {}", group.date, group.description);
        for posting in &group.postings {
            println!(
                "      {:<28} {:>10.2} {}   [{}]",
                posting.account_name,
                posting.amount,
                posting.commodity,
                hierarchy_path(&posting.account_number),
            );
        }
    }

    // 3. Balances
    let balances = controller.all_balances(Some(date(2025, 12, 31))).await?;
    println!("\n💰 Balances as of 2025-12-31");
    for account in &balances {
        println!(
            "  {:<28} {}",
            account.account_name,
            format_balances(&account.balances)
        );
    }

    // 4. Delete reloads the list from the gateway
    controller.delete_journal(&journal_id).await?;
    println!(
        "\n🗑️  Deleted demo journal, {} journals remain",
        store.journals().len()
    );

    Ok(())
}
