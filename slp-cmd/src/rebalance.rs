//! `rebalance`: run one slider edit through the allocation rebalancer.

use slp_core::allocation::{format_usd, AllocationField, AllocationState, Budget};
use std::fmt::Write;

/// Parse an edit of the form `field=value`.
pub fn parse_edit(edit: &str) -> anyhow::Result<(AllocationField, u8)> {
    let (field, value) = edit
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("edit must look like field=value, got '{}'", edit))?;
    let field: AllocationField = field.parse()?;
    let value: u8 = value
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid percentage '{}': {}", value.trim(), e))?;
    if value > 100 {
        anyhow::bail!("percentage must be between 0 and 100, got {}", value);
    }
    Ok((field, value))
}

/// Apply `edit` to the split and render the outcome as a small table.
pub fn run_rebalance(
    split: (u8, u8, u8),
    edit: &str,
    auto_adjust: bool,
    monthly_budget: u32,
) -> anyhow::Result<String> {
    let (field, value) = parse_edit(edit)?;
    let mut state = AllocationState::new(split.0, split.1, split.2);
    state.set_auto_adjust(auto_adjust);
    state.set(field, value);

    let budget = Budget {
        monthly_usd: monthly_budget,
        ..Budget::default()
    };

    let mut out = String::new();
    for f in AllocationField::ALL {
        writeln!(
            out,
            "{:<12} {:>3}%  {:>10}/mo",
            f.to_string(),
            state.get(f),
            format_usd(budget.monthly_amount(state.get(f)))
        )?;
    }
    write!(out, "{:<12} {:>3}%", "total", state.total())?;
    if !state.is_balanced() {
        out.push_str("  (unbalanced)");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edit() {
        assert_eq!(parse_edit("marketing=60").unwrap(), (AllocationField::Marketing, 60));
        assert_eq!(parse_edit("Labor= 5").unwrap(), (AllocationField::Labor, 5));
        assert!(parse_edit("marketing").is_err());
        assert!(parse_edit("payroll=10").is_err());
        assert!(parse_edit("labor=101").is_err());
        assert!(parse_edit("labor=-1").is_err());
    }

    #[test]
    fn test_rebalance_report() {
        let report = run_rebalance((40, 35, 25), "marketing=60", true, 15_320).unwrap();
        assert!(report.contains("marketing     60%"));
        assert!(report.contains("investments   23%"));
        assert!(report.contains("labor         17%"));
        assert!(report.contains("$9,192/mo"));
        assert!(!report.contains("unbalanced"));
    }

    #[test]
    fn test_rebalance_without_auto_adjust() {
        let report = run_rebalance((40, 35, 25), "labor=50", false, 15_320).unwrap();
        assert!(report.contains("total        125%"));
        assert!(report.contains("(unbalanced)"));
    }
}
