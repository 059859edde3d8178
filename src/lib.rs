//! okscale - accessible color palettes
//!
//! Loads a palette configuration, generates one contrast-stable scale per
//! color family and renders the result as JSON. The color math lives in
//! `okscale-core`; this crate is the file and output layer around it.

pub mod config;
pub mod error;
pub mod output;
