//! Loan payment arithmetic for the lending views.
//!
//! The product table and the amortized-payment formula the loan calculator
//! quotes from. Rates are annual percentages.

use serde::{Deserialize, Serialize};

/// Loan products offered by the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanKind {
    Personal,
    Home,
    Auto,
    Student,
}

/// Amount and rate bounds for a loan product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanProduct {
    /// Which product these bounds describe.
    pub kind: LoanKind,
    /// Smallest principal offered.
    pub min_amount: f64,
    /// Largest principal offered.
    pub max_amount: f64,
    /// Best advertised annual rate, percent.
    pub min_rate: f64,
    /// Worst advertised annual rate, percent.
    pub max_rate: f64,
}

/// Annual rate (percent) quoted when no product is selected.
pub const DEFAULT_ANNUAL_RATE: f64 = 8.0;

/// The product table shown on the lending views.
pub const PRODUCTS: [LoanProduct; 4] = [
    LoanProduct {
        kind: LoanKind::Personal,
        min_amount: 1_000.0,
        max_amount: 50_000.0,
        min_rate: 8.5,
        max_rate: 15.9,
    },
    LoanProduct {
        kind: LoanKind::Home,
        min_amount: 50_000.0,
        max_amount: 1_000_000.0,
        min_rate: 3.2,
        max_rate: 6.8,
    },
    LoanProduct {
        kind: LoanKind::Auto,
        min_amount: 5_000.0,
        max_amount: 100_000.0,
        min_rate: 4.1,
        max_rate: 8.9,
    },
    LoanProduct {
        kind: LoanKind::Student,
        min_amount: 1_000.0,
        max_amount: 200_000.0,
        min_rate: 3.5,
        max_rate: 7.2,
    },
];

impl LoanKind {
    /// Product parameters for this loan kind.
    #[must_use]
    pub const fn product(self) -> LoanProduct {
        match self {
            Self::Personal => PRODUCTS[0],
            Self::Home => PRODUCTS[1],
            Self::Auto => PRODUCTS[2],
            Self::Student => PRODUCTS[3],
        }
    }
}

/// Monthly payment for a fixed-rate amortized loan.
///
/// `annual_rate` is in percent. A zero rate degenerates to straight
/// principal division; a zero term quotes a zero payment.
#[must_use]
pub fn monthly_payment(principal: f64, annual_rate: f64, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    let rate = annual_rate / 100.0 / 12.0;
    if rate.abs() < f64::EPSILON {
        return principal / f64::from(months);
    }
    let growth = (1.0 + rate).powf(f64::from(months));
    principal * rate * growth / (growth - 1.0)
}

/// Payment quoted for a product at its best rate, as the calculator does.
///
/// Falls back to [`DEFAULT_ANNUAL_RATE`] when no product is selected.
#[must_use]
pub fn quoted_payment(kind: Option<LoanKind>, principal: f64, months: u32) -> f64 {
    let rate = kind.map_or(DEFAULT_ANNUAL_RATE, |k| k.product().min_rate);
    monthly_payment(principal, rate, months)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_mortgage_payment() {
        // $100,000 over 30 years at 6% is the textbook $599.55/month.
        let payment = monthly_payment(100_000.0, 6.0, 360);
        assert!((payment - 599.55).abs() < 0.01, "got {payment}");
    }

    #[test]
    fn test_zero_rate_divides_principal() {
        let payment = monthly_payment(12_000.0, 0.0, 12);
        assert!((payment - 1_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_term_quotes_nothing() {
        assert!(monthly_payment(10_000.0, 5.0, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_quote_uses_best_product_rate() {
        let quoted = quoted_payment(Some(LoanKind::Home), 200_000.0, 360);
        let direct = monthly_payment(200_000.0, 3.2, 360);
        assert!((quoted - direct).abs() < f64::EPSILON);
    }

    #[test]
    fn test_quote_without_product_uses_default_rate() {
        let quoted = quoted_payment(None, 10_000.0, 24);
        let direct = monthly_payment(10_000.0, DEFAULT_ANNUAL_RATE, 24);
        assert!((quoted - direct).abs() < f64::EPSILON);
    }

    #[test]
    fn test_product_table_bounds() {
        let home = LoanKind::Home.product();
        assert_eq!(home.kind, LoanKind::Home);
        assert!((home.min_rate - 3.2).abs() < f64::EPSILON);
        assert!((home.max_amount - 1_000_000.0).abs() < f64::EPSILON);
    }
}
