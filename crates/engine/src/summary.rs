//! Spending totals derived from the stored records.

use crate::{Expense, MoneyCents, ResultStore, StoreError};

/// Label used for records whose category is blank.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Totals over every record in the store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of records summed.
    pub count: usize,
    pub total: MoneyCents,
    /// Per-category totals, largest first. Ties keep first-seen order.
    pub by_category: Vec<(String, MoneyCents)>,
}

impl Summary {
    /// Aggregate `expenses`, failing on the first amount that does not parse.
    pub fn from_expenses(expenses: &[Expense]) -> ResultStore<Self> {
        let overflow = || StoreError::Aggregation("total is too large".to_string());

        let mut total = MoneyCents::ZERO;
        let mut by_category: Vec<(String, MoneyCents)> = Vec::new();

        for (position, expense) in expenses.iter().enumerate() {
            let amount = expense.amount_cents().map_err(|_| {
                StoreError::Aggregation(format!(
                    "row {} has an invalid amount '{}'",
                    position + 1,
                    expense.amount
                ))
            })?;
            total = total.checked_add(amount).ok_or_else(overflow)?;

            let category = match expense.category.trim() {
                "" => UNCATEGORIZED,
                name => name,
            };
            match by_category.iter_mut().find(|(name, _)| name == category) {
                Some((_, sum)) => *sum = sum.checked_add(amount).ok_or_else(overflow)?,
                None => by_category.push((category.to_string(), amount)),
            }
        }

        by_category.sort_by(|a, b| b.1.cmp(&a.1));

        Ok(Self {
            count: expenses.len(),
            total,
            by_category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(category: &str, amount: &str) -> Expense {
        Expense {
            date: "2024-01-01".to_string(),
            category: category.to_string(),
            amount: amount.to_string(),
            note: String::new(),
            extra: Vec::new(),
        }
    }

    #[test]
    fn groups_and_orders_by_amount() {
        let summary = Summary::from_expenses(&[
            expense("Travel", "30"),
            expense("Food", "100"),
            expense("Books", "30"),
            expense("Food", "50"),
        ])
        .unwrap();

        assert_eq!(summary.count, 4);
        assert_eq!(summary.total, MoneyCents::new(210_00));
        assert_eq!(
            summary.by_category,
            vec![
                ("Food".to_string(), MoneyCents::new(150_00)),
                ("Travel".to_string(), MoneyCents::new(30_00)),
                ("Books".to_string(), MoneyCents::new(30_00)),
            ]
        );
    }

    #[test]
    fn blank_category_is_uncategorized() {
        let summary = Summary::from_expenses(&[expense("", "5"), expense("  ", "2.50")]).unwrap();
        assert_eq!(
            summary.by_category,
            vec![(UNCATEGORIZED.to_string(), MoneyCents::new(7_50))]
        );
    }

    #[test]
    fn invalid_amount_aborts_whole_summary() {
        let err = Summary::from_expenses(&[expense("Food", "10"), expense("Food", "lots")])
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::Aggregation("row 2 has an invalid amount 'lots'".to_string())
        );
    }

    #[test]
    fn missing_amount_is_an_aggregation_error() {
        assert!(matches!(
            Summary::from_expenses(&[expense("Food", "")]),
            Err(StoreError::Aggregation(_))
        ));
    }

    #[test]
    fn overflowing_total_is_an_aggregation_error() {
        let huge = (i64::MAX / 100).to_string();
        assert_eq!(
            Summary::from_expenses(&[expense("A", &huge), expense("B", &huge)]),
            Err(StoreError::Aggregation("total is too large".to_string()))
        );
    }

    #[test]
    fn empty_store_sums_to_zero() {
        let summary = Summary::from_expenses(&[]).unwrap();
        assert_eq!(summary.total, MoneyCents::ZERO);
        assert!(summary.by_category.is_empty());
    }
}
