use anyhow::Context;
use bill_core::format::{currency, discount_label_pct, energy};
use bill_core::{compute, render_with, BillInputs, BillOutputs, Month};
use clap::Parser;
use log::info;

mod cli;
mod fonts;
mod input;

/// File name the statement is saved under.
fn statement_file_name(month: Month, year: i32) -> String {
    format!("compensacao_{}_{}.png", month, year)
}

fn print_summary(inputs: &BillInputs, outputs: &BillOutputs) {
    let pct = discount_label_pct(inputs.clamped_discount_pct());
    let cost = currency(outputs.cost_before_solar);
    let injected_kwh = energy(outputs.injected_energy_kwh);
    let injected = currency(outputs.injected_value);
    let injection_discount = currency(outputs.injection_discount);

    println!("Resumo");
    println!("  Custo sem a Solar:        {}", cost);
    println!("  Energia injetada (kWh):   {}", injected_kwh);
    println!("  Energia injetada (R$):    {}", injected);
    println!("  Desconto {}% (injetada):  {}", pct, injection_discount);
    if outputs.flag_discount > 0.0 {
        let flag_discount = currency(outputs.flag_discount);
        println!("  Desconto {}% (bandeiras): {}", pct, flag_discount);
    }
    println!("  Valor a pagar via boleto: {}", currency(outputs.payable));
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = cli::Args::parse();

    let mut inputs = input::load_bill(&args.input)?;
    if let Some(pct) = args.discount {
        inputs.discount_pct = pct;
    }
    if let Some(scope) = args.discount_scope {
        inputs.discount_scope = scope.into();
    }
    input::validate(&inputs)?;

    let outputs = compute(&inputs);
    print_summary(&inputs, &outputs);

    let mut dirs = args.font_dirs.clone();
    dirs.extend(fonts::system_font_dirs());
    let face = fonts::resolve_face(&dirs).context("loading font")?;

    let options = args.statement_options();
    let image = render_with(&inputs, &outputs, args.month, args.year, &face, &options)
        .context("rendering statement")?;

    let path = args.out_dir.join(statement_file_name(args.month, args.year));
    std::fs::write(&path, &image.png_data)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(
        "wrote {} ({}x{}, {} bytes)",
        path.display(),
        image.width,
        image.height,
        image.png_data.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_uses_month_name_and_year() {
        assert_eq!(
            statement_file_name(Month::Agosto, 2025),
            "compensacao_Agosto_2025.png"
        );
        assert_eq!(
            statement_file_name(Month::Marco, 2024),
            "compensacao_Março_2024.png"
        );
    }
}
