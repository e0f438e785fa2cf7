//! # polarscope_core
//!
//! Core types for polarscope sentiment-model comparison.
//!
//! This crate provides:
//! - [`Label`] for nullable sentiment codes read from a review table
//! - [`Sentiment`] for the closed two-value positive/negative encoding
//! - Column naming rules ([`is_label_column`], [`display_name`], [`LabelColumn`])
//! - Error types and common utilities
//!
//! ## Label Encoding
//!
//! Every label column uses the same fixed two-class scheme:
//! - `2`: positive
//! - `1`: negative
//!
//! Any other code, or a field that does not parse, is kept in the table but
//! never counted when two columns are compared.
//!
//! ## Example
//!
//! ```rust
//! use polarscope_core::{Label, Sentiment};
//!
//! let label = Label::parse("2");
//! assert_eq!(label.sentiment(), Some(Sentiment::Positive));
//! assert_eq!(Label::parse("n/a"), Label::Missing);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod column;
mod error;
mod label;

pub use column::{
    display_name, is_label_column, is_model_column, LabelColumn, FINE_TUNED_COLUMN,
    POLARITY_COLUMN, SENTIMENT_SUFFIX,
};
pub use error::{CoreError, Result};
pub use label::{Label, Sentiment};
