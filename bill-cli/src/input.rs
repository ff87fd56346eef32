use std::path::Path;

use anyhow::{bail, ensure, Context};
use bill_core::BillInputs;

/// Largest number of injection records a bill may list.
pub const MAX_INJECTIONS: usize = 12;

/// Read, parse and validate a bill file.
pub fn load_bill(path: &Path) -> anyhow::Result<BillInputs> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_bill(&text).with_context(|| format!("invalid bill file {}", path.display()))
}

pub fn parse_bill(text: &str) -> anyhow::Result<BillInputs> {
    let bill: BillInputs = toml::from_str(text)?;
    validate(&bill)?;
    Ok(bill)
}

fn amount(name: &str, value: f64) -> anyhow::Result<()> {
    if !value.is_finite() || value < 0.0 {
        bail!(
            "{} must be a finite, non-negative number (got {})",
            name,
            value
        );
    }
    Ok(())
}

/// Enforce the ranges the calculation expects its inputs to be in.
pub fn validate(bill: &BillInputs) -> anyhow::Result<()> {
    amount("consumption_kwh", bill.consumption_kwh)?;
    amount("consumption_cost", bill.consumption_cost)?;
    amount("public_lighting_cost", bill.public_lighting_cost)?;
    amount("itaipu_bonus.amount", bill.itaipu_bonus.amount)?;
    amount(
        "indicator_compensation.amount",
        bill.indicator_compensation.amount,
    )?;
    ensure!(bill.discount_pct.is_finite(), "discount_pct must be finite");

    ensure!(
        bill.injections.len() <= MAX_INJECTIONS,
        "at most {} injections are supported (got {})",
        MAX_INJECTIONS,
        bill.injections.len()
    );
    for (i, record) in bill.injections.iter().enumerate() {
        amount(&format!("injections[{}].energy_kwh", i), record.energy_kwh)?;
        amount(&format!("injections[{}].value", i), record.value)?;
    }

    for (kind, flag) in bill.flags.iter() {
        amount(&format!("{} unit_rate", kind.name()), flag.unit_rate)?;
        ensure!(
            !flag.active || flag.reading_days >= 1,
            "flag {} needs at least one reading day",
            kind.name()
        );
    }
    Ok(())
}
