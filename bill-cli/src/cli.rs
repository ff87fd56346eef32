use std::path::PathBuf;

use bill_core::{DiscountScope, FlagCostDisplay, Month, StatementOptions};
use clap::{Parser, ValueEnum};

/// Render a solar compensation statement as a PNG image.
#[derive(Debug, Parser)]
#[command(name = "bill-statement", version)]
pub struct Args {
    /// Bill description (TOML)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Statement month, by name ("Agosto") or number (8)
    #[arg(short, long, value_parser = parse_month)]
    pub month: Month,

    /// Statement year
    #[arg(short, long, value_parser = clap::value_parser!(i32).range(2000..=2100))]
    pub year: i32,

    /// Directory the PNG is written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Extra directory searched for font files; may be repeated
    #[arg(long = "font-dir")]
    pub font_dirs: Vec<PathBuf>,

    /// Override the discount percentage from the bill file
    #[arg(long)]
    pub discount: Option<f64>,

    /// Override what the discount applies to
    #[arg(long, value_enum)]
    pub discount_scope: Option<ScopeArg>,

    /// Show flag surcharges after discount instead of before
    #[arg(long)]
    pub net_flags: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    InjectionAndFlags,
    InjectionOnly,
}

impl From<ScopeArg> for DiscountScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::InjectionAndFlags => DiscountScope::InjectionAndFlags,
            ScopeArg::InjectionOnly => DiscountScope::InjectionOnly,
        }
    }
}

impl Args {
    pub fn statement_options(&self) -> StatementOptions {
        StatementOptions {
            flag_cost_display: if self.net_flags {
                FlagCostDisplay::Net
            } else {
                FlagCostDisplay::Gross
            },
        }
    }
}

fn parse_month(s: &str) -> Result<Month, String> {
    match s.trim().parse::<u32>() {
        Ok(number) => Month::from_number(number)
            .ok_or_else(|| format!("Month number out of range: {}", number)),
        Err(_) => s.parse(),
    }
}
