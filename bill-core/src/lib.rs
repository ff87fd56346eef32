//! Solar compensation statement: bill calculation and PNG rendering.
//!
//! ```no_run
//! use bill_core::{compute, render, BillInputs, InjectionRecord, Month, TrueTypeFace};
//!
//! # fn main() -> bill_core::Result<()> {
//! let inputs = BillInputs {
//!     consumption_kwh: 642.0,
//!     consumption_cost: 706.0,
//!     public_lighting_cost: 92.51,
//!     injections: vec![InjectionRecord {
//!         energy_kwh: 542.0,
//!         value: 595.98,
//!     }],
//!     ..Default::default()
//! };
//! let outputs = compute(&inputs);
//! let face = TrueTypeFace::builtin()?;
//! let image = render(&inputs, &outputs, Month::Agosto, 2025, &face)?;
//! std::fs::write("statement.png", &image.png_data)?;
//! # Ok(())
//! # }
//! ```

pub mod billing;
pub mod error;
pub mod fonts;
pub mod format;
pub mod raster;
pub mod statement;
pub mod textflow;
pub mod truetype;

pub use billing::{
    compute, BillInputs, BillOutputs, Deduction, DiscountScope, FlagFigures, FlagKind,
    InjectionRecord, Month, RateFlag, RateFlags,
};
pub use error::{Error, Result};
pub use fonts::{FontWeight, TextMeasurer, TextStyle, Typeface};
pub use statement::{
    layout, render, render_with, DrawOp, FlagCostDisplay, RasterImage, RowKind, StatementLayout,
    StatementOptions, StatementRow,
};
pub use textflow::{flow_text, wrap_words, Flow};
pub use truetype::TrueTypeFace;
