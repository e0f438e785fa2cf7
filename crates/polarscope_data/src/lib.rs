//! # polarscope_data
//!
//! Review table loading for polarscope.
//!
//! This crate provides:
//! - [`parse_table`] to turn CSV text into an immutable [`RowTable`]
//! - [`parse_row`] and [`split_lines`], the quote-aware CSV splitter it uses
//! - I/O helpers for local files and one-shot HTTP fetches
//! - Embedding coordinate extraction for PCA/UMAP scatter plots
//! - Per-review label summaries
//!
//! ## Example
//!
//! ```rust
//! use polarscope_data::parse_table;
//!
//! let csv = "text,polarity,gemma2:2b_sentiment_code\n\
//!            \"great, really\",2,2\n\
//!            awful,1,2\n";
//! let table = parse_table(csv)?;
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.label_columns().len(), 2);
//! # Ok::<(), polarscope_data::DataError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod csv;
pub mod embedding;
mod error;
mod io;
pub mod review;
mod table;

pub use csv::{parse_row, split_lines};
pub use embedding::{EmbeddingKind, EmbeddingPoint};
pub use error::{DataError, Result};
pub use io::{fetch_table, load_table, read_table};
pub use review::ReviewLabel;
pub use table::{parse_table, Row, RowTable, Value};

/// Default location of the review table.
pub const DEFAULT_SOURCE: &str = "reviews.csv";

/// Default column holding the review text.
pub const TEXT_COLUMN: &str = "text";
