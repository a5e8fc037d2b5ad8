//! Three-way budget allocation between marketing, investments and labor.
//!
//! The split is kept as whole percentages. When auto-balance is on, editing one
//! field redistributes the remainder over the other two in proportion to their
//! current values, with the rounding remainder assigned to the later field so
//! the total stays at exactly 100.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound of a single allocation percentage.
pub const MAX_PERCENT: u8 = 100;

/// Recommended split used on first load and by "Reset to Recommended".
pub const RECOMMENDED: (u8, u8, u8) = (40, 35, 25);

/// Default monthly budget in USD.
pub const DEFAULT_MONTHLY_BUDGET: u32 = 15_320;

/// Default current balance in USD.
pub const DEFAULT_BALANCE: u32 = 42_750;

/// One of the three allocation sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocationField {
    Marketing,
    Investments,
    Labor,
}

impl AllocationField {
    pub const ALL: [AllocationField; 3] = [
        AllocationField::Marketing,
        AllocationField::Investments,
        AllocationField::Labor,
    ];

    /// The two fields that absorb an edit to `self`, in display order.
    pub fn others(self) -> (AllocationField, AllocationField) {
        match self {
            AllocationField::Marketing => (AllocationField::Investments, AllocationField::Labor),
            AllocationField::Investments => (AllocationField::Marketing, AllocationField::Labor),
            AllocationField::Labor => (AllocationField::Marketing, AllocationField::Investments),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AllocationField::Marketing => "Marketing Initiatives",
            AllocationField::Investments => "Investments & Assets",
            AllocationField::Labor => "Outsourced Labor",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AllocationField::Marketing => {
                "Digital advertising, content creation, SEO, social media and other customer acquisition efforts."
            }
            AllocationField::Investments => {
                "Capital expenditures, equipment, software licenses and other assets that provide long-term value."
            }
            AllocationField::Labor => {
                "Freelancers, contractors, consultants and other external workforce expenses."
            }
        }
    }

    /// Typical range for early-stage startups, shown next to each slider.
    pub fn industry_average(self) -> &'static str {
        match self {
            AllocationField::Marketing => "35-45%",
            AllocationField::Investments => "30-40%",
            AllocationField::Labor => "20-30%",
        }
    }

    pub fn recommended(self) -> u8 {
        match self {
            AllocationField::Marketing => RECOMMENDED.0,
            AllocationField::Investments => RECOMMENDED.1,
            AllocationField::Labor => RECOMMENDED.2,
        }
    }
}

impl fmt::Display for AllocationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AllocationField::Marketing => "marketing",
            AllocationField::Investments => "investments",
            AllocationField::Labor => "labor",
        };
        f.write_str(name)
    }
}

impl FromStr for AllocationField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "marketing" => Ok(AllocationField::Marketing),
            "investments" => Ok(AllocationField::Investments),
            "labor" => Ok(AllocationField::Labor),
            other => anyhow::bail!("unknown allocation field: {}", other),
        }
    }
}

/// Split `100 - edited` between two fields in proportion to `a : b`.
///
/// When both are zero the remainder is split evenly. The second field receives
/// the rounding remainder, so `edited + first + second == 100` always holds.
pub fn rebalance(edited: u8, a: u8, b: u8) -> (u8, u8) {
    let edited = edited.min(MAX_PERCENT);
    let remaining = MAX_PERCENT - edited;
    let total = u32::from(a) + u32::from(b);
    let ratio = if total > 0 {
        f64::from(a) / f64::from(total)
    } else {
        0.5
    };
    let first = (f64::from(remaining) * ratio).round() as u8;
    let first = first.min(remaining);
    (first, remaining - first)
}

/// The allocation sliders of the budgeting panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationState {
    pub marketing: u8,
    pub investments: u8,
    pub labor: u8,
    pub auto_adjust: bool,
}

impl Default for AllocationState {
    fn default() -> Self {
        Self::new(RECOMMENDED.0, RECOMMENDED.1, RECOMMENDED.2)
    }
}

impl AllocationState {
    /// Build a state from raw percentages with auto-balance on.
    ///
    /// Values are clamped to `[0, 100]` but the sum is taken as given.
    pub fn new(marketing: u8, investments: u8, labor: u8) -> Self {
        Self {
            marketing: marketing.min(MAX_PERCENT),
            investments: investments.min(MAX_PERCENT),
            labor: labor.min(MAX_PERCENT),
            auto_adjust: true,
        }
    }

    pub fn get(&self, field: AllocationField) -> u8 {
        match field {
            AllocationField::Marketing => self.marketing,
            AllocationField::Investments => self.investments,
            AllocationField::Labor => self.labor,
        }
    }

    fn put(&mut self, field: AllocationField, value: u8) {
        match field {
            AllocationField::Marketing => self.marketing = value,
            AllocationField::Investments => self.investments = value,
            AllocationField::Labor => self.labor = value,
        }
    }

    /// Apply a slider edit.
    ///
    /// With auto-balance off only `field` changes and the total may drift away
    /// from 100 until the user corrects it.
    pub fn set(&mut self, field: AllocationField, value: u8) {
        let value = value.min(MAX_PERCENT);
        self.put(field, value);
        if !self.auto_adjust {
            return;
        }
        let (first, second) = field.others();
        let (a, b) = rebalance(value, self.get(first), self.get(second));
        self.put(first, a);
        self.put(second, b);
    }

    pub fn set_auto_adjust(&mut self, enabled: bool) {
        self.auto_adjust = enabled;
    }

    pub fn reset_to_recommended(&mut self) {
        self.marketing = RECOMMENDED.0;
        self.investments = RECOMMENDED.1;
        self.labor = RECOMMENDED.2;
    }

    pub fn total(&self) -> u32 {
        u32::from(self.marketing) + u32::from(self.investments) + u32::from(self.labor)
    }

    pub fn is_balanced(&self) -> bool {
        self.total() == u32::from(MAX_PERCENT)
    }
}

/// Monthly budget and balance the allocation is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub monthly_usd: u32,
    pub balance_usd: u32,
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            monthly_usd: DEFAULT_MONTHLY_BUDGET,
            balance_usd: DEFAULT_BALANCE,
        }
    }
}

impl Budget {
    /// Dollars per month for a percentage of the monthly budget, rounded.
    pub fn monthly_amount(&self, percent: u8) -> u32 {
        (f64::from(self.monthly_usd) * f64::from(percent) / 100.0).round() as u32
    }

    /// Months the current balance lasts at the monthly budget.
    pub fn runway_months(&self) -> f64 {
        if self.monthly_usd == 0 {
            return f64::INFINITY;
        }
        f64::from(self.balance_usd) / f64::from(self.monthly_usd)
    }
}

/// Format a whole-dollar amount with thousands separators, e.g. `$6,128`.
pub fn format_usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("${}", out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marketing_edit_rebalances_others() {
        let mut state = AllocationState::new(40, 35, 25);
        state.set(AllocationField::Marketing, 60);
        assert_eq!((state.marketing, state.investments, state.labor), (60, 23, 17));
    }

    #[test]
    fn test_sum_stays_at_100_for_every_edit() {
        for m in 0..=100u8 {
            for i in 0..=(100 - m) {
                let l = 100 - m - i;
                for field in AllocationField::ALL {
                    for v in 0..=100u8 {
                        let mut state = AllocationState::new(m, i, l);
                        state.set(field, v);
                        assert_eq!(state.total(), 100, "{}/{}/{} {}={}", m, i, l, field, v);
                        assert_eq!(state.get(field), v);
                    }
                }
            }
        }
    }

    #[test]
    fn test_setting_current_value_is_noop() {
        for (m, i, l) in [(40, 35, 25), (0, 0, 100), (33, 33, 34), (1, 98, 1), (100, 0, 0)] {
            for field in AllocationField::ALL {
                let mut state = AllocationState::new(m, i, l);
                let before = state;
                state.set(field, before.get(field));
                assert_eq!(state, before);
            }
        }
    }

    #[test]
    fn test_repeated_edit_is_idempotent() {
        let mut once = AllocationState::new(12, 70, 18);
        once.set(AllocationField::Labor, 45);
        let mut twice = once;
        twice.set(AllocationField::Labor, 45);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_full_allocation_zeroes_others() {
        let mut state = AllocationState::default();
        state.set(AllocationField::Investments, 100);
        assert_eq!((state.marketing, state.investments, state.labor), (0, 100, 0));
    }

    #[test]
    fn test_zero_keeps_proportion() {
        let mut state = AllocationState::new(50, 30, 20);
        state.set(AllocationField::Marketing, 0);
        assert_eq!((state.investments, state.labor), (60, 40));
    }

    #[test]
    fn test_even_split_when_others_are_zero() {
        let mut state = AllocationState::new(100, 0, 0);
        state.set(AllocationField::Marketing, 30);
        assert_eq!((state.investments, state.labor), (35, 35));

        // Rounding half up favours the first of the other two fields.
        state = AllocationState::new(100, 0, 0);
        state.set(AllocationField::Marketing, 29);
        assert_eq!((state.investments, state.labor), (36, 35));
    }

    #[test]
    fn test_auto_adjust_off_leaves_others() {
        let mut state = AllocationState::default();
        state.set_auto_adjust(false);
        state.set(AllocationField::Labor, 60);
        assert_eq!((state.marketing, state.investments, state.labor), (40, 35, 60));
        assert!(!state.is_balanced());
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let mut state = AllocationState::default();
        state.set(AllocationField::Marketing, 250);
        assert_eq!((state.marketing, state.investments, state.labor), (100, 0, 0));
    }

    #[test]
    fn test_reset_to_recommended() {
        let mut state = AllocationState::new(10, 10, 80);
        state.reset_to_recommended();
        assert_eq!(state, AllocationState::default());
    }

    #[test]
    fn test_budget_amounts() {
        let budget = Budget::default();
        assert_eq!(budget.monthly_amount(40), 6_128);
        assert_eq!(budget.monthly_amount(35), 5_362);
        assert_eq!(budget.monthly_amount(25), 3_830);
        assert_eq!(format!("{:.1}", budget.runway_months()), "2.8");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(999), "$999");
        assert_eq!(format_usd(6_128), "$6,128");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
    }

    #[test]
    fn test_field_parse() {
        assert_eq!("Labor".parse::<AllocationField>().unwrap(), AllocationField::Labor);
        assert!("rent".parse::<AllocationField>().is_err());
    }
}
