//! Desktop shell around the generator.
//!
//! | Sub-module         | Responsibility |
//! | ------------------ | -------------- |
//! | [`lissajous_app`]  | [`LissajousApp`] state, control panel and plot (eframe) |
//! | [`run`]            | [`run_lissajous()`] entry point and icon loading |

mod lissajous_app;
mod run;

pub use lissajous_app::{LissajousApp, PlotError};
pub use run::run_lissajous;
