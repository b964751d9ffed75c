//! # TTML Exporter: Lyric Lines to Apple Music / AMLL Style TTML
//!
//! This crate turns the in-memory timed-lyric representation produced by the
//! lyric database's TTML parser back into TTML text. It keeps per-word timing,
//! the two-voice agent assignment, nested background vocals, translations and
//! romanizations.
//!
//! The entry points are:
//! - [`export_ttml`]: exports with a full [`TtmlExportOptions`].
//! - [`export_ttml_text`]: exports with default options, only choosing between
//!   compact and pretty output.
//!
//! ## Examples
//!
//! ```rust
//! use ttml_exporter::export_ttml_text;
//! use ttml_db_core::LyricLine;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let lines = vec![LyricLine::new(1000, 2000, "Hello")];
//!
//!     let ttml = export_ttml_text(&lines, false)?;
//!
//!     assert!(ttml.contains(r#"<body dur="00:03.000">"#));
//!     assert!(ttml.contains(r#"<div begin="00:01.000" end="00:03.000">"#));
//!     assert!(ttml.contains(">Hello</p>"));
//!     Ok(())
//! }
//! ```

pub mod generator;

pub use generator::{export_ttml, export_ttml_text};
pub use ttml_db_core::TtmlExportOptions;
