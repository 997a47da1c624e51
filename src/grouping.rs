// 🧾 Posting Grouper - rebuild transaction-level records from flat postings
// Groups are keyed by (date, description, transaction id), first-seen order

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::model::{Posting, Tag};

/// Separator between grouping key components. NUL cannot occur in dates,
/// descriptions, or ids coming off the wire, so composite keys cannot
/// collide across component boundaries.
const KEY_SEPARATOR: char = '\u{0000}';

/// Transaction-level record rebuilt from flat postings.
///
/// Derived view data with the lifetime of one render cycle; recompute it
/// whenever the underlying posting list changes. `tags` cannot be recovered
/// from flat postings and stays empty unless filled in from transaction
/// DTOs by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub tags: Vec<Tag>,
    pub postings: Vec<Posting>,
}

fn grouping_key(posting: &Posting) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        posting.transaction_date,
        posting.transaction_description,
        posting.transaction_id.as_deref().unwrap_or(""),
        sep = KEY_SEPARATOR,
    )
}

/// Groups a flat posting list into transaction records.
///
/// Two postings land in the same group iff date, description, and
/// transaction id all match; a posting without a transaction id only merges
/// with other id-less postings that share date and description. Postings
/// keep their input order within each group, and groups come back in
/// first-seen order. No sorting happens here: callers that want
/// chronological-descending groups sort the postings first (see
/// [`sort_postings_desc`]).
pub fn group_postings(postings: &[Posting]) -> Vec<GroupedTransaction> {
    let mut groups: IndexMap<String, GroupedTransaction> = IndexMap::new();

    for posting in postings {
        let group = groups
            .entry(grouping_key(posting))
            .or_insert_with(|| GroupedTransaction {
                date: posting.transaction_date,
                description: posting.transaction_description.clone(),
                tags: Vec::new(),
                postings: Vec::new(),
            });
        group.postings.push(posting.clone());
    }

    groups.into_values().collect()
}

/// Stable sort by transaction date, newest first. Apply before grouping to
/// get groups in chronological-descending order; postings sharing a date
/// keep their relative order.
pub fn sort_postings_desc(postings: &mut [Posting]) {
    postings.sort_by(|a, b| b.transaction_date.cmp(&a.transaction_date));
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccountType, TransactionStatus};

    fn posting(
        date: (i32, u32, u32),
        description: &str,
        transaction_id: Option<&str>,
        account_number: &str,
        amount: f64,
    ) -> Posting {
        Posting {
            transaction_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            transaction_status: TransactionStatus::Cleared,
            transaction_description: description.to_string(),
            transaction_id: transaction_id.map(str::to_string),
            account_number: account_number.to_string(),
            account_name: format!("{} Account", account_number),
            account_type: AccountType::Asset,
            commodity: "CHF".to_string(),
            amount,
            running_balance: None,
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(group_postings(&[]).is_empty());
    }

    #[test]
    fn test_single_key_collects_all_postings_in_order() {
        let postings = vec![
            posting((2025, 3, 1), "Rent", Some("tx-1"), "1020", -1500.0),
            posting((2025, 3, 1), "Rent", Some("tx-1"), "6570", 1500.0),
            posting((2025, 3, 1), "Rent", Some("tx-1"), "2000", 0.0),
        ];

        let groups = group_postings(&postings);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].description, "Rent");
        assert_eq!(groups[0].postings.len(), 3);
        let numbers: Vec<&str> = groups[0]
            .postings
            .iter()
            .map(|p| p.account_number.as_str())
            .collect();
        assert_eq!(numbers, ["1020", "6570", "2000"]);
    }

    #[test]
    fn test_different_transaction_ids_split_groups() {
        let postings = vec![
            posting((2025, 3, 1), "Coffee", Some("tx-1"), "1020", -4.5),
            posting((2025, 3, 1), "Coffee", Some("tx-2"), "1020", -4.5),
        ];

        let groups = group_postings(&postings);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_missing_id_merges_only_on_matching_date_and_description() {
        let postings = vec![
            posting((2025, 3, 1), "Coffee", None, "1020", -4.5),
            posting((2025, 3, 1), "Coffee", None, "6570", 4.5),
            posting((2025, 3, 2), "Coffee", None, "1020", -4.5),
            posting((2025, 3, 1), "Tea", None, "1020", -3.0),
        ];

        let groups = group_postings(&postings);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].postings.len(), 2);
    }

    #[test]
    fn test_missing_id_never_merges_with_a_real_id() {
        let postings = vec![
            posting((2025, 3, 1), "Coffee", None, "1020", -4.5),
            posting((2025, 3, 1), "Coffee", Some("tx-1"), "6570", 4.5),
        ];

        assert_eq!(group_postings(&postings).len(), 2);
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let postings = vec![
            posting((2025, 3, 2), "Later", Some("tx-2"), "1020", 1.0),
            posting((2025, 3, 1), "Earlier", Some("tx-1"), "1020", 2.0),
            posting((2025, 3, 2), "Later", Some("tx-2"), "6570", -1.0),
        ];

        let groups = group_postings(&postings);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].description, "Later");
        assert_eq!(groups[1].description, "Earlier");
    }

    #[test]
    fn test_grouped_tags_are_empty() {
        let postings = vec![posting((2025, 3, 1), "Rent", Some("tx-1"), "1020", -1500.0)];
        assert!(group_postings(&postings)[0].tags.is_empty());
    }

    #[test]
    fn test_sort_desc_then_group() {
        let mut postings = vec![
            posting((2025, 1, 15), "Old", Some("tx-1"), "1020", 1.0),
            posting((2025, 3, 1), "New", Some("tx-3"), "1020", 3.0),
            posting((2025, 2, 10), "Mid", Some("tx-2"), "1020", 2.0),
        ];

        sort_postings_desc(&mut postings);
        let groups = group_postings(&postings);
        let order: Vec<&str> = groups.iter().map(|g| g.description.as_str()).collect();
        assert_eq!(order, ["New", "Mid", "Old"]);
    }
}
