/// Renders the reference bill, with flags and deductions, to a PNG.
///
/// Run with:
///   cargo run --example render_statement -p bill-core [path/to/font.ttf]
///
/// Writes: compensacao_Agosto_2025.png in the current directory.
use bill_core::{
    compute, render, BillInputs, Deduction, InjectionRecord, Month, RateFlag, TrueTypeFace,
};

fn flag(unit_rate: f64, flag_days: u32, month: Month) -> RateFlag {
    RateFlag {
        active: true,
        unit_rate,
        reading_days: 30,
        flag_days,
        reference_month: month,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut inputs = BillInputs {
        consumption_kwh: 642.0,
        consumption_cost: 706.00,
        public_lighting_cost: 92.51,
        injections: vec![InjectionRecord::new(542.0, 595.98)],
        itaipu_bonus: Deduction::new(20.11),
        indicator_compensation: Deduction::new(9.23),
        ..Default::default()
    };
    inputs.flags.red_p1 = flag(0.0787, 24, Month::Julho);
    inputs.flags.red_p2 = flag(0.0100, 6, Month::Agosto);

    let face = match std::env::args().nth(1) {
        Some(path) => TrueTypeFace::load(path)?,
        None => TrueTypeFace::builtin()?,
    };

    let outputs = compute(&inputs);
    let image = render(&inputs, &outputs, Month::Agosto, 2025, &face)?;
    std::fs::write("compensacao_Agosto_2025.png", &image.png_data)?;
    println!(
        "Wrote compensacao_Agosto_2025.png ({}x{}, payable {})",
        image.width,
        image.height,
        bill_core::format::currency(outputs.payable)
    );
    Ok(())
}
