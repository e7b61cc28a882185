//! Cash flow analysis

use std::fmt;

use crate::models::{Money, Transaction};

use super::BalanceSummary;

/// How healthy the savings rate is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashFlowRating {
    /// Savings rate above 20%
    Excellent,
    /// Savings rate above 0%
    Positive,
    Negative,
}

impl CashFlowRating {
    pub fn from_savings_rate(rate: f64) -> Self {
        if rate > 20.0 {
            Self::Excellent
        } else if rate > 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent savings rate! Keep it up!",
            Self::Positive => "Positive savings rate. Good job!",
            Self::Negative => "Negative savings rate. Consider reducing expenses.",
        }
    }
}

impl fmt::Display for CashFlowRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Excellent => "Excellent",
            Self::Positive => "Positive",
            Self::Negative => "Negative",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CashFlowReport {
    pub inflow: Money,
    pub outflow: Money,
    /// Net as a percentage of inflow; 0 when there is no inflow
    pub savings_rate: f64,
    pub rating: CashFlowRating,
}

impl CashFlowReport {
    pub fn generate(transactions: &[Transaction]) -> Self {
        let balance = BalanceSummary::generate(transactions);
        let inflow = balance.total_income;
        let outflow = balance.total_expenses;

        let savings_rate = if inflow.is_positive() {
            (inflow - outflow).as_f64() / inflow.as_f64() * 100.0
        } else {
            0.0
        };

        Self {
            inflow,
            outflow,
            savings_rate,
            rating: CashFlowRating::from_savings_rate(savings_rate),
        }
    }

    pub fn net(&self) -> Money {
        self.inflow - self.outflow
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Cash Flow Analysis\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "Total Cash Inflow:  {}\n",
            self.inflow.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Total Cash Outflow: {}\n",
            self.outflow.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Net Cash Flow:      {}\n",
            self.net().format_with_symbol(symbol)
        ));
        output.push_str(&format!("Savings Rate:       {:.1}%\n", self.savings_rate));
        output.push('\n');
        output.push_str(self.rating.advice());
        output.push('\n');

        output
    }
}
