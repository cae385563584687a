//! Verdict classification - ordered payback thresholds.

use serde::{Deserialize, Serialize};

/// Payback above this many months is too slow to be worth the risk.
pub const SLOW_ROI_MONTHS: f64 = 36.0;

/// Payback above this many months means the owner is buying a job.
pub const GRIND_MODE_MONTHS: f64 = 18.0;

/// Traffic-light signal shown for a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Red,
    Yellow,
    Green,
}

impl Signal {
    /// Fixed display color token.
    pub fn color(&self) -> &'static str {
        match self {
            Signal::Red => "#ff4b4b",
            Signal::Yellow => "#ffa500",
            Signal::Green => "#0df2c9",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Red => "RED",
            Signal::Yellow => "YELLOW",
            Signal::Green => "GREEN",
        }
    }
}

/// Outcome of the viability check, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    NegativeCashflow,
    SlowRoi,
    GrindMode,
    MoneyPrinter,
}

impl Verdict {
    /// Classifies a location. First matching rule wins:
    /// loss-making, then payback over 36 months, then over 18 months.
    pub fn classify(monthly_net_profit: f64, payback_months: f64) -> Self {
        if monthly_net_profit <= 0.0 {
            Verdict::NegativeCashflow
        } else if payback_months > SLOW_ROI_MONTHS {
            Verdict::SlowRoi
        } else if payback_months > GRIND_MODE_MONTHS {
            Verdict::GrindMode
        } else {
            Verdict::MoneyPrinter
        }
    }

    pub fn signal(&self) -> Signal {
        match self {
            Verdict::NegativeCashflow | Verdict::SlowRoi => Signal::Red,
            Verdict::GrindMode => Signal::Yellow,
            Verdict::MoneyPrinter => Signal::Green,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::NegativeCashflow => "Negative Cashflow",
            Verdict::SlowRoi => "Slow ROI",
            Verdict::GrindMode => "Grind Mode",
            Verdict::MoneyPrinter => "Money Printer",
        }
    }

    pub fn color(&self) -> &'static str {
        self.signal().color()
    }

    /// e.g. `YELLOW LIGHT (Grind Mode)`.
    pub fn headline(&self) -> String {
        format!("{} LIGHT ({})", self.signal().as_str(), self.label())
    }

    /// One-line advice under the headline.
    pub fn subtitle(&self, payback_months: f64) -> String {
        match self {
            Verdict::NegativeCashflow => {
                "You are paying to work here. Burn this plan.".to_string()
            }
            Verdict::SlowRoi => format!(
                "It takes {:.1} months to get your money back. Too risky.",
                payback_months
            ),
            Verdict::GrindMode => {
                "It works, but you're buying yourself a job, not a business.".to_string()
            }
            Verdict::MoneyPrinter => format!(
                "ROI in {:.1} months. Scale this immediately.",
                payback_months
            ),
        }
    }
}
