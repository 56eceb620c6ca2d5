//! Kennedy Curve grade rescaling: roster input, the curve engine, and
//! table/TSV/JSON/CSV output.

pub mod config;
pub mod curve;
pub mod output;
pub mod roster;
