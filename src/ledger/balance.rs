//! Remaining balance computation
//!
//! Every place that shows or exports a balance goes through
//! [`remaining_balance`], so the formula lives in exactly one spot.

use crate::models::{parse_budget, parse_integer, Balance, ExpenseEntry};

/// Compute `budget - sum(amounts)` from raw field text
///
/// The result is [`Balance::Undefined`] if the budget or any single amount
/// is not numeric.
pub fn remaining_balance(budget: &str, entries: &[ExpenseEntry]) -> Balance {
    let Some(budget) = parse_budget(budget) else {
        return Balance::Undefined;
    };

    let spent = entries.iter().try_fold(0.0_f64, |total, entry| {
        parse_integer(entry.amount()).map(|amount| total + amount)
    });

    Balance::from(spent.map(|spent| budget - spent))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(amounts: &[&str]) -> Vec<ExpenseEntry> {
        amounts
            .iter()
            .map(|a| ExpenseEntry::new("item", *a, "2024-01-01"))
            .collect()
    }

    #[test]
    fn test_empty_ledger_is_budget() {
        assert_eq!(remaining_balance("100", &[]), Balance::Amount(100.0));
    }

    #[test]
    fn test_subtracts_all_amounts() {
        let balance = remaining_balance("500", &entries(&["120", "40"]));
        assert_eq!(balance, Balance::Amount(340.0));
    }

    #[test]
    fn test_fractional_amounts_truncate() {
        let balance = remaining_balance("100", &entries(&["10.9", "-2.5"]));
        assert_eq!(balance, Balance::Amount(92.0));
    }

    #[test]
    fn test_amount_beyond_i64_stays_numeric() {
        let balance = remaining_balance(
            "100000000000000000000000",
            &entries(&["99999999999999999999"]),
        );
        let value = balance.value().unwrap();
        assert!((value - 9.99e22).abs() / 1e23 < 1e-9);
    }

    #[test]
    fn test_fractional_budget_kept() {
        let balance = remaining_balance("100.75", &entries(&["0.75"]));
        assert_eq!(balance, Balance::Amount(100.75));
    }

    #[test]
    fn test_overspend_goes_negative() {
        let balance = remaining_balance("50", &entries(&["80"]));
        assert_eq!(balance, Balance::Amount(-30.0));
    }

    #[test]
    fn test_one_bad_amount_poisons_balance() {
        let balance = remaining_balance("100", &entries(&["10", "abc", "20"]));
        assert!(!balance.is_defined());
    }

    #[test]
    fn test_empty_amount_poisons_balance() {
        assert!(!remaining_balance("100", &entries(&[""])).is_defined());
    }

    #[test]
    fn test_bad_budget_is_undefined() {
        assert!(!remaining_balance("five hundred", &entries(&["10"])).is_defined());
    }

    #[test]
    fn test_empty_budget_counts_as_zero() {
        assert_eq!(remaining_balance("", &entries(&["15"])), Balance::Amount(-15.0));
    }
}
