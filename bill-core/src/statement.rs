//! Itemized statement layout and rendering.
//!
//! Layout is separated from rasterization: [`layout`] turns the bill into a
//! display list using only text measurement, and [`StatementLayout::rasterize`]
//! paints that list with a [`Typeface`]. [`render`] does both and encodes PNG.
//!
//! The header band lists the bill items with every value left-aligned on a
//! single column placed right after the consumption label. Flag rows may
//! carry an annotation that is word-wrapped when it does not fit before the
//! right margin. The summary section below repeats the totals with its value
//! column nudged further right.

use image::{Rgb, RgbImage};
use log::debug;

use crate::billing::{BillInputs, BillOutputs, FlagKind, Month};
use crate::error::Result;
use crate::fonts::{TextMeasurer, TextStyle, Typeface};
use crate::format::{currency, discount_label_pct, energy};
use crate::raster::{encode_png, fill_rect};
use crate::textflow::{flow_text, Flow};

/// Fixed statement width in pixels.
pub const CANVAS_WIDTH: u32 = 1280;
/// Vertical distance between header rows.
pub const ROW_STEP: u32 = 38;
/// Vertical advance of a wrapped annotation line: 0.8 × row step, truncated.
pub const WRAP_ADVANCE: u32 = ROW_STEP * 8 / 10;

const MIN_HEIGHT: u32 = 620;
const SUMMARY_HEIGHT: u32 = 360;
const HEADER_TOP: u32 = 24;
const HEADER_BOTTOM: u32 = 60;

const LABEL_X: f64 = 22.0;
const FIRST_ROW_Y: f64 = 16.0;
const CLOSE_PAREN_GAP: f64 = 6.0;
const ANNOTATION_PADDING: f64 = 22.0;
const RIGHT_MARGIN: f64 = 20.0;
const HEADER_TOTAL_INDENT: f64 = 60.0;
const HEADER_TOTAL_GAP: f64 = 6.0;
const SUMMARY_X: f64 = 20.0;
const SUMMARY_VALUE_NUDGE: f64 = 80.0;

/// Amounts at or below this magnitude are treated as absent.
const NEGLIGIBLE: f64 = 1e-9;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const GREEN: Rgb<u8> = Rgb([23, 145, 23]);
const LIGHT_GREEN: Rgb<u8> = Rgb([0, 153, 0]);
const ORANGE: Rgb<u8> = Rgb([237, 114, 44]);
const HEADER_BACKGROUND: Rgb<u8> = Rgb([250, 228, 214]);

fn title_style() -> TextStyle {
    TextStyle::bold(36.0)
}

fn row_style() -> TextStyle {
    TextStyle::bold(28.0)
}

fn annotation_style() -> TextStyle {
    TextStyle::bold(22.0)
}

/// Which flag cost the header rows show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlagCostDisplay {
    /// Surcharge before discount; the discount appears as its own line.
    #[default]
    Gross,
    /// Surcharge after discount.
    Net,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatementOptions {
    pub flag_cost_display: FlagCostDisplay,
}

/// What a header row stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Consumption,
    PublicLighting,
    Flag(FlagKind),
    IndicatorCompensation,
    ItaipuBonus,
}

/// One line of the statement header.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementRow {
    pub kind: RowKind,
    pub label: String,
    pub value: f64,
    pub annotation: Option<String>,
}

impl StatementRow {
    fn plain(kind: RowKind, label: impl Into<String>, value: f64) -> Self {
        StatementRow {
            kind,
            label: label.into(),
            value,
            annotation: None,
        }
    }
}

/// Label of the consumption row; its `(` is closed after the value.
pub fn consumption_label(consumption_kwh: f64) -> String {
    format!("Consumo  {}  kWh (em reais   ", energy(consumption_kwh))
}

/// Build the header rows in statement order.
pub fn statement_rows(
    inputs: &BillInputs,
    outputs: &BillOutputs,
    options: &StatementOptions,
) -> Vec<StatementRow> {
    let mut rows = vec![
        StatementRow::plain(
            RowKind::Consumption,
            consumption_label(inputs.consumption_kwh),
            inputs.consumption_cost,
        ),
        StatementRow::plain(
            RowKind::PublicLighting,
            "Valor Iluminação Pública:",
            inputs.public_lighting_cost,
        ),
    ];

    for (kind, flag) in inputs.flags.iter().filter(|(_, f)| f.active) {
        let figures = outputs.flag(kind);
        let value = match options.flag_cost_display {
            FlagCostDisplay::Gross => figures.gross_cost,
            FlagCostDisplay::Net => figures.net_cost,
        };
        let annotation = (flag.flag_days > 0 && figures.energy_kwh > 0.0).then(|| {
            format!(
                "(Calculado   {}   kWh   {}   Dias de {})",
                energy(figures.energy_kwh),
                flag.flag_days,
                flag.reference_month
            )
        });
        rows.push(StatementRow {
            kind: RowKind::Flag(kind),
            label: format!("Bandeira {}:", kind.name()),
            value,
            annotation,
        });
    }

    let deductions = [
        (
            RowKind::IndicatorCompensation,
            "Compensação por indicador",
            &inputs.indicator_compensation,
        ),
        (RowKind::ItaipuBonus, "Bônus Itaipu", &inputs.itaipu_bonus),
    ];
    for (kind, label, deduction) in deductions {
        if deduction.active && deduction.amount.abs() > NEGLIGIBLE {
            rows.push(StatementRow::plain(kind, label, -deduction.amount.abs()));
        }
    }

    rows
}

/// Height of the tinted header band for `row_count` rows.
pub fn header_height(row_count: usize) -> u32 {
    let rows = u32::try_from(row_count).unwrap_or(u32::MAX);
    HEADER_TOP
        .saturating_add(ROW_STEP.saturating_mul(rows))
        .saturating_add(HEADER_BOTTOM)
}

/// Total canvas height given the header height.
pub fn canvas_height(header_height: u32) -> u32 {
    MIN_HEIGHT.max(header_height.saturating_add(SUMMARY_HEIGHT))
}

/// A primitive of the statement display list.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgb<u8>,
    },
    /// Text anchored at its top-left corner.
    Text {
        x: f64,
        y: f64,
        text: String,
        style: TextStyle,
        color: Rgb<u8>,
    },
}

/// Positioned content of one statement.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementLayout {
    pub width: u32,
    pub height: u32,
    pub header_height: u32,
    /// X of the header value column.
    pub value_x: f64,
    pub rows: Vec<StatementRow>,
    pub ops: Vec<DrawOp>,
}

impl StatementLayout {
    /// Text operations as (x, y, text, style).
    pub fn texts(&self) -> impl Iterator<Item = (f64, f64, &str, TextStyle)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text {
                x, y, text, style, ..
            } => Some((*x, *y, text.as_str(), *style)),
            DrawOp::FillRect { .. } => None,
        })
    }

    /// Paint the display list on a white image.
    pub fn rasterize(&self, face: &dyn Typeface) -> RgbImage {
        let mut image = RgbImage::from_pixel(self.width, self.height, WHITE);
        for op in &self.ops {
            match op {
                DrawOp::FillRect {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => fill_rect(&mut image, *x, *y, *width, *height, *color),
                DrawOp::Text {
                    x,
                    y,
                    text,
                    style,
                    color,
                } => face.draw_text(&mut image, *x, *y, text, *style, *color),
            }
        }
        image
    }
}

/// Encoded statement image.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

struct Painter<'a, M: ?Sized> {
    measure: &'a M,
    ops: Vec<DrawOp>,
}

impl<M: TextMeasurer + ?Sized> Painter<'_, M> {
    fn text(&mut self, x: f64, y: f64, text: impl Into<String>, style: TextStyle, color: Rgb<u8>) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: text.into(),
            style,
            color,
        });
    }

    fn width(&self, text: &str, style: TextStyle) -> f64 {
        self.measure.text_width(text, style)
    }
}

/// Lay out the statement for `month`/`year`.
pub fn layout<M>(
    inputs: &BillInputs,
    outputs: &BillOutputs,
    month: Month,
    year: i32,
    measure: &M,
    options: &StatementOptions,
) -> StatementLayout
where
    M: TextMeasurer + ?Sized,
{
    let rows = statement_rows(inputs, outputs, options);
    let header_height = header_height(rows.len());
    let height = canvas_height(header_height);
    let width = f64::from(CANVAS_WIDTH);

    let mut painter = Painter {
        measure,
        ops: Vec::new(),
    };
    painter.ops.push(DrawOp::FillRect {
        x: 0.0,
        y: 0.0,
        width,
        height: f64::from(header_height),
        color: HEADER_BACKGROUND,
    });

    let consumption = consumption_label(inputs.consumption_kwh);
    let value_x = LABEL_X + painter.width(&consumption, row_style());

    let mut y = FIRST_ROW_Y;
    for row in &rows {
        let value = currency(row.value);
        let value_width = painter.width(&value, row_style());
        painter.text(LABEL_X, y, row.label.as_str(), row_style(), GREEN);
        painter.text(value_x, y, value, row_style(), GREEN);

        if row.kind == RowKind::Consumption {
            let paren_x = value_x + value_width + CLOSE_PAREN_GAP;
            painter.text(paren_x, y, ")", row_style(), GREEN);
        }

        if let Some(annotation) = &row.annotation {
            let x = value_x + value_width + ANNOTATION_PADDING;
            let available = width - x - RIGHT_MARGIN;
            match flow_text(annotation, annotation_style(), available, measure) {
                Flow::SingleLine(line) => painter.text(x, y, line, annotation_style(), BLACK),
                Flow::Wrapped(lines) => {
                    let mut line_y = y;
                    for line in lines {
                        if !line.is_empty() {
                            painter.text(x, line_y, line, annotation_style(), BLACK);
                        }
                        line_y += f64::from(WRAP_ADVANCE);
                    }
                }
            }
        }
        y += f64::from(ROW_STEP);
    }

    let heading = title_style();
    let total_y = y + HEADER_TOTAL_GAP;
    let total_x = LABEL_X + HEADER_TOTAL_INDENT;
    painter.text(total_x, total_y, "Custo sem a Solar:", heading, ORANGE);
    let total = currency(outputs.cost_before_solar);
    painter.text(value_x, total_y, total, heading, ORANGE);

    let summary_value_x = value_x + SUMMARY_VALUE_NUDGE;
    let mut y = f64::from(header_height) + 24.0;
    let title = format!("Compensação {}/{}", month, year);
    painter.text(SUMMARY_X, y, title, heading, ORANGE);
    y += 48.0;

    let pct = discount_label_pct(inputs.clamped_discount_pct());
    let mut summary = vec![
        ("Custo sem a solar:".to_string(), currency(outputs.cost_before_solar)),
        (
            "Energia injetada kWh (AKTI):".to_string(),
            format!("{}   kWh", energy(outputs.injected_energy_kwh)),
        ),
        (
            "Energia injetada R$ (AKTI):".to_string(),
            currency(outputs.injected_value),
        ),
        (
            format!("Desconto {}% da energia injetada:", pct),
            currency(outputs.injection_discount),
        ),
    ];
    if outputs.flag_discount > 0.0 {
        summary.push((
            format!("Desconto {}% nas bandeiras:", pct),
            currency(outputs.flag_discount),
        ));
    }
    for (label, value) in summary {
        painter.text(SUMMARY_X, y, label, row_style(), BLACK);
        painter.text(summary_value_x, y, value, row_style(), BLACK);
        y += f64::from(ROW_STEP);
    }

    let payable_y = y + 16.0;
    let payable_label = "Valor a ser pago via boleto:";
    painter.text(SUMMARY_X, payable_y, payable_label, heading, LIGHT_GREEN);
    let payable = currency(outputs.payable);
    painter.text(summary_value_x, payable_y, payable, heading, LIGHT_GREEN);

    debug!(
        "statement layout: {} rows, {}x{} px, header {} px, value column at {:.1}",
        rows.len(),
        CANVAS_WIDTH,
        height,
        header_height,
        value_x
    );

    StatementLayout {
        width: CANVAS_WIDTH,
        height,
        header_height,
        value_x,
        rows,
        ops: painter.ops,
    }
}

/// Render the statement as PNG with default options.
pub fn render(
    inputs: &BillInputs,
    outputs: &BillOutputs,
    month: Month,
    year: i32,
    face: &dyn Typeface,
) -> Result<RasterImage> {
    let options = StatementOptions::default();
    render_with(inputs, outputs, month, year, face, &options)
}

/// Render the statement as PNG.
pub fn render_with(
    inputs: &BillInputs,
    outputs: &BillOutputs,
    month: Month,
    year: i32,
    face: &dyn Typeface,
    options: &StatementOptions,
) -> Result<RasterImage> {
    let layout = layout(inputs, outputs, month, year, face, options);
    let image = layout.rasterize(face);
    let png_data = encode_png(&image)?;
    debug!("encoded statement PNG: {} bytes", png_data.len());
    Ok(RasterImage {
        width: layout.width,
        height: layout.height,
        png_data,
    })
}
