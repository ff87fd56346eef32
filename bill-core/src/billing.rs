use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

/// Calendar month, displayed with its Portuguese name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    Janeiro,
    Fevereiro,
    #[serde(rename = "Março", alias = "Marco")]
    Marco,
    Abril,
    Maio,
    Junho,
    Julho,
    Agosto,
    Setembro,
    Outubro,
    Novembro,
    Dezembro,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Janeiro,
        Month::Fevereiro,
        Month::Marco,
        Month::Abril,
        Month::Maio,
        Month::Junho,
        Month::Julho,
        Month::Agosto,
        Month::Setembro,
        Month::Outubro,
        Month::Novembro,
        Month::Dezembro,
    ];

    /// Display name as printed on the statement.
    pub fn name(&self) -> &'static str {
        match self {
            Month::Janeiro => "Janeiro",
            Month::Fevereiro => "Fevereiro",
            Month::Marco => "Março",
            Month::Abril => "Abril",
            Month::Maio => "Maio",
            Month::Junho => "Junho",
            Month::Julho => "Julho",
            Month::Agosto => "Agosto",
            Month::Setembro => "Setembro",
            Month::Outubro => "Outubro",
            Month::Novembro => "Novembro",
            Month::Dezembro => "Dezembro",
        }
    }

    /// Month from its 1-based calendar number.
    pub fn from_number(number: u32) -> Option<Month> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        Month::ALL.get(index).copied()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = String;

    /// Case-insensitive; "Marco" is accepted for "Março".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == "marco" {
            return Ok(Month::Marco);
        }
        Month::ALL
            .into_iter()
            .find(|m| m.name().to_lowercase() == wanted)
            .ok_or_else(|| format!("Unknown month: {}", s))
    }
}

impl Default for Month {
    fn default() -> Self {
        Month::Junho
    }
}

/// The four regulator tariff flags, in statement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FlagKind {
    Yellow,
    Red,
    RedP1,
    RedP2,
}

impl FlagKind {
    pub const ALL: [FlagKind; 4] = [
        FlagKind::Yellow,
        FlagKind::Red,
        FlagKind::RedP1,
        FlagKind::RedP2,
    ];

    /// Name printed on the statement ("Bandeira <name>:").
    pub fn name(&self) -> &'static str {
        match self {
            FlagKind::Yellow => "Amarela",
            FlagKind::Red => "Vermelha",
            FlagKind::RedP1 => "Vermelha P1",
            FlagKind::RedP2 => "Vermelha P2",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One tariff surcharge period applied to part of the reading cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateFlag {
    pub active: bool,
    /// Surcharge in R$/kWh.
    pub unit_rate: f64,
    /// Length of the reading cycle in days.
    pub reading_days: u32,
    /// Days of the cycle the flag was in effect.
    pub flag_days: u32,
    pub reference_month: Month,
}

impl Default for RateFlag {
    fn default() -> Self {
        RateFlag {
            active: false,
            unit_rate: 0.0,
            reading_days: 30,
            flag_days: 0,
            reference_month: Month::default(),
        }
    }
}

impl RateFlag {
    /// Whether this flag adds energy and cost to the bill.
    pub fn contributes(&self) -> bool {
        self.active && self.reading_days > 0 && self.flag_days > 0
    }

    /// Consumption pro-rated onto the flagged days.
    pub fn energy_kwh(&self, consumption_kwh: f64) -> f64 {
        if !self.contributes() {
            return 0.0;
        }
        consumption_kwh / f64::from(self.reading_days) * f64::from(self.flag_days)
    }

    /// Rate actually charged; inactive flags never charge, whatever their
    /// stored rate.
    fn effective_rate(&self) -> f64 {
        if self.active { self.unit_rate } else { 0.0 }
    }
}

/// The flag set of one bill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateFlags {
    pub yellow: RateFlag,
    pub red: RateFlag,
    pub red_p1: RateFlag,
    pub red_p2: RateFlag,
}

impl RateFlags {
    pub fn get(&self, kind: FlagKind) -> &RateFlag {
        match kind {
            FlagKind::Yellow => &self.yellow,
            FlagKind::Red => &self.red,
            FlagKind::RedP1 => &self.red_p1,
            FlagKind::RedP2 => &self.red_p2,
        }
    }

    pub fn get_mut(&mut self, kind: FlagKind) -> &mut RateFlag {
        match kind {
            FlagKind::Yellow => &mut self.yellow,
            FlagKind::Red => &mut self.red,
            FlagKind::RedP1 => &mut self.red_p1,
            FlagKind::RedP2 => &mut self.red_p2,
        }
    }

    /// Flags in statement order.
    pub fn iter(&self) -> impl Iterator<Item = (FlagKind, &RateFlag)> {
        FlagKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

/// Energy fed back into the grid ("GDII/ATV") and its credited value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectionRecord {
    pub energy_kwh: f64,
    pub value: f64,
}

impl InjectionRecord {
    pub fn new(energy_kwh: f64, value: f64) -> Self {
        InjectionRecord { energy_kwh, value }
    }
}

/// Optional amount subtracted from the bill when `active`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deduction {
    pub active: bool,
    pub amount: f64,
}

impl Deduction {
    pub fn new(amount: f64) -> Self {
        Deduction {
            active: true,
            amount,
        }
    }

    fn applied(&self) -> f64 {
        if self.active { self.amount } else { 0.0 }
    }
}

/// What the discount percentage applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiscountScope {
    /// Injected value and flag surcharges are both discounted.
    #[default]
    InjectionAndFlags,
    /// Only the injected value is discounted (older statements).
    InjectionOnly,
}

/// Default discount on injected energy and flags, in percent.
pub const DEFAULT_DISCOUNT_PCT: f64 = 20.0;

fn default_discount_pct() -> f64 {
    DEFAULT_DISCOUNT_PCT
}

/// Everything the bill calculation needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillInputs {
    pub consumption_kwh: f64,
    pub consumption_cost: f64,
    pub public_lighting_cost: f64,
    #[serde(default)]
    pub injections: Vec<InjectionRecord>,
    #[serde(default)]
    pub itaipu_bonus: Deduction,
    #[serde(default)]
    pub indicator_compensation: Deduction,
    #[serde(default)]
    pub flags: RateFlags,
    /// Discount in percent; clamped to 0..=100 before use.
    #[serde(default = "default_discount_pct")]
    pub discount_pct: f64,
    #[serde(default)]
    pub discount_scope: DiscountScope,
}

impl Default for BillInputs {
    fn default() -> Self {
        BillInputs {
            consumption_kwh: 0.0,
            consumption_cost: 0.0,
            public_lighting_cost: 0.0,
            injections: Vec::new(),
            itaipu_bonus: Deduction::default(),
            indicator_compensation: Deduction::default(),
            flags: RateFlags::default(),
            discount_pct: DEFAULT_DISCOUNT_PCT,
            discount_scope: DiscountScope::default(),
        }
    }
}

impl BillInputs {
    /// Discount percentage after clamping to 0..=100.
    pub fn clamped_discount_pct(&self) -> f64 {
        self.discount_pct.clamp(0.0, 100.0)
    }
}

/// Per-flag figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlagFigures {
    pub kind: FlagKind,
    pub energy_kwh: f64,
    /// Surcharge before discount.
    pub gross_cost: f64,
    /// Surcharge after discount.
    pub net_cost: f64,
}

/// Derived figures of one bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillOutputs {
    pub flags: [FlagFigures; 4],
    pub cost_before_solar: f64,
    pub injection_discount: f64,
    pub flag_discount: f64,
    pub payable: f64,
    pub injected_energy_kwh: f64,
    pub injected_value: f64,
}

impl BillOutputs {
    pub fn flag(&self, kind: FlagKind) -> &FlagFigures {
        &self.flags[kind.index()]
    }

    pub fn total_flag_gross(&self) -> f64 {
        self.flags.iter().map(|f| f.gross_cost).sum()
    }

    pub fn total_flag_net(&self) -> f64 {
        self.flags.iter().map(|f| f.net_cost).sum()
    }
}

/// Compute every figure of the bill. Pure and total for finite inputs.
pub fn compute(inputs: &BillInputs) -> BillOutputs {
    let d = inputs.clamped_discount_pct() / 100.0;
    let flag_d = match inputs.discount_scope {
        DiscountScope::InjectionAndFlags => d,
        DiscountScope::InjectionOnly => 0.0,
    };

    let flags = FlagKind::ALL.map(|kind| {
        let flag = inputs.flags.get(kind);
        let energy_kwh = flag.energy_kwh(inputs.consumption_kwh);
        let gross_cost = energy_kwh * flag.effective_rate();
        FlagFigures {
            kind,
            energy_kwh,
            gross_cost,
            net_cost: gross_cost * (1.0 - flag_d),
        }
    });

    let total_gross: f64 = flags.iter().map(|f| f.gross_cost).sum();
    let total_net: f64 = flags.iter().map(|f| f.net_cost).sum();
    let flag_discount = total_gross - total_net;

    let injected_energy_kwh: f64 = inputs.injections.iter().map(|r| r.energy_kwh).sum();
    let injected_value: f64 = inputs.injections.iter().map(|r| r.value).sum();
    let injection_discount = injected_value * d;

    let cost_before_solar = inputs.consumption_cost + inputs.public_lighting_cost + total_gross
        - inputs.itaipu_bonus.applied()
        - inputs.indicator_compensation.applied();

    let payable = cost_before_solar - injection_discount - flag_discount;

    debug!(
        "computed bill: cost_before_solar={:.4} discounts={:.4}+{:.4} payable={:.4}",
        cost_before_solar, injection_discount, flag_discount, payable
    );

    BillOutputs {
        flags,
        cost_before_solar,
        injection_discount,
        flag_discount,
        payable,
        injected_energy_kwh,
        injected_value,
    }
}
