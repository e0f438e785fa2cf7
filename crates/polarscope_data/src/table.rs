//! Typed review table.

use std::collections::HashMap;

use polarscope_core::{is_label_column, is_model_column, Label, LabelColumn, POLARITY_COLUMN};
use serde::{Deserialize, Serialize};

use crate::csv::{parse_row, split_lines};
use crate::error::{DataError, Result};

/// The value of one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// Cell of a label column.
    Label(Label),
    /// Cell of any other column, trimmed but otherwise verbatim.
    Text(String),
}

impl Value {
    /// The label, if this is a label cell.
    pub fn as_label(&self) -> Option<Label> {
        match self {
            Self::Label(label) => Some(*label),
            Self::Text(_) => None,
        }
    }

    /// The text, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Label(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

/// One review: column name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    fields: HashMap<String, Value>,
}

impl Row {
    /// Build a row by zipping fields to header names.
    ///
    /// If the header repeats a name the later column wins.
    fn from_fields(headers: &[String], fields: Vec<String>) -> Self {
        let fields = headers
            .iter()
            .zip(fields)
            .map(|(name, raw)| {
                let value = if is_label_column(name) {
                    Value::Label(Label::parse(&raw))
                } else {
                    Value::Text(raw)
                };
                (name.clone(), value)
            })
            .collect();
        Self { fields }
    }

    /// Value of a column.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    /// Label of a column, if the column exists and holds labels.
    pub fn label(&self, column: &str) -> Option<Label> {
        self.get(column).and_then(Value::as_label)
    }

    /// Text of a column, if the column exists and holds text.
    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(Value::as_text)
    }

    /// Iterate over all cells in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// An immutable table of reviews.
///
/// Every row carries exactly the header's column set. The table is never
/// mutated after [`parse_table`] returns, so it can be shared freely between
/// readers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowTable {
    headers: Vec<String>,
    rows: Vec<Row>,
    label_columns: Vec<LabelColumn>,
}

impl RowTable {
    /// Header names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Whether the header contains a column.
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    /// All rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row at an index.
    pub fn row(&self, index: usize) -> Result<&Row> {
        self.rows.get(index).ok_or(DataError::IndexOutOfBounds {
            index,
            length: self.rows.len(),
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Selectable label columns: `polarity` first, then model columns in header order.
    pub fn label_columns(&self) -> &[LabelColumn] {
        &self.label_columns
    }

    /// Model prediction columns, in header order.
    pub fn model_columns(&self) -> impl Iterator<Item = &LabelColumn> {
        self.label_columns.iter().filter(|c| !c.is_polarity())
    }

    /// Per-row labels of one column.
    pub fn labels(&self, column: &str) -> Result<Vec<Label>> {
        if !self.has_column(column) {
            return Err(DataError::UnknownColumn(column.to_string()));
        }
        if !is_label_column(column) {
            return Err(DataError::NotLabelColumn(column.to_string()));
        }
        Ok(self
            .rows
            .iter()
            .map(|row| row.label(column).unwrap_or_default())
            .collect())
    }
}

/// Parse CSV text into a [`RowTable`].
///
/// The header must contain `polarity` and at least one `*_sentiment_code`
/// column, otherwise [`DataError::Schema`] is returned and no table is
/// produced. Data lines whose field count differs from the header's are
/// dropped. A leading UTF-8 byte-order mark is skipped.
pub fn parse_table(csv_text: &str) -> Result<RowTable> {
    let csv_text = csv_text.strip_prefix('\u{feff}').unwrap_or(csv_text);
    let mut lines = split_lines(csv_text);

    let headers = match lines.next() {
        Some(line) => parse_row(line),
        None => return Err(DataError::Schema("input contains no header row".to_string())),
    };
    validate_headers(&headers)?;

    let mut rows = Vec::new();
    // Line numbers count non-blank lines only; the header is line 1.
    for (line_no, line) in lines.enumerate().map(|(i, l)| (i + 2, l)) {
        let fields = parse_row(line);
        if fields.len() != headers.len() {
            tracing::trace!(
                "Dropping line {}: {} fields, header has {}",
                line_no,
                fields.len(),
                headers.len()
            );
            continue;
        }
        rows.push(Row::from_fields(&headers, fields));
    }

    let label_columns = std::iter::once(LabelColumn::new(POLARITY_COLUMN))
        .chain(
            headers
                .iter()
                .filter(|h| is_model_column(h))
                .map(|h| LabelColumn::new(h.as_str())),
        )
        .collect::<Vec<_>>();

    tracing::debug!(
        "Loaded review table: {} rows, {} columns, {} label columns",
        rows.len(),
        headers.len(),
        label_columns.len()
    );

    Ok(RowTable {
        headers,
        rows,
        label_columns,
    })
}

fn validate_headers(headers: &[String]) -> Result<()> {
    let has_polarity = headers.iter().any(|h| h == POLARITY_COLUMN);
    let has_model = headers.iter().any(|h| is_model_column(h));

    let missing = match (has_polarity, has_model) {
        (true, true) => return Ok(()),
        (false, true) => "the 'polarity' column",
        (true, false) => "a '*_sentiment_code' model column",
        (false, false) => "the 'polarity' column and a '*_sentiment_code' model column",
    };
    Err(DataError::Schema(format!("header is missing {}", missing)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "text,polarity,gemma2:2b_sentiment_code,llama3.2:1b_sentiment_code\n\
                       good,2,2,1\n\
                       bad,1,1,x\n\
                       \"meh, fine\",2,,2\n";

    #[test]
    fn test_bom_header() {
        let table = parse_table("\u{feff}polarity,m_sentiment_code\n2,2\n1,2\n").unwrap();
        assert_eq!(table.headers()[0], POLARITY_COLUMN);
        assert_eq!(
            table.labels(POLARITY_COLUMN).unwrap(),
            vec![Label::Valid(2), Label::Valid(1)]
        );
    }

    #[test]
    fn test_parse_table_types_columns() {
        let table = parse_table(CSV).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.headers().len(), 4);

        let row = table.row(0).unwrap();
        assert_eq!(row.text("text"), Some("good"));
        assert_eq!(row.label("polarity"), Some(Label::Valid(2)));
        assert_eq!(row.label("text"), None);

        let row = table.row(1).unwrap();
        assert_eq!(row.label("llama3.2:1b_sentiment_code"), Some(Label::Missing));

        let row = table.row(2).unwrap();
        assert_eq!(row.text("text"), Some("meh, fine"));
        assert_eq!(row.label("gemma2:2b_sentiment_code"), Some(Label::Missing));
    }

    #[test]
    fn test_label_columns_order() {
        let table = parse_table(CSV).unwrap();
        let names: Vec<_> = table.label_columns().iter().map(|c| c.column.as_str()).collect();
        assert_eq!(
            names,
            vec!["polarity", "gemma2:2b_sentiment_code", "llama3.2:1b_sentiment_code"]
        );
        assert_eq!(table.label_columns()[0].display_name, "Polarity");
        assert_eq!(table.model_columns().count(), 2);
    }

    #[test]
    fn test_row_shape_mismatch_dropped() {
        let csv = "polarity,a_sentiment_code,text\n\
                   2,2,one\n\
                   1,1,two\n\
                   1,1\n\
                   2,1,four\n\
                   2,1,five,extra\n";
        let table = parse_table(csv).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.row(2).unwrap().text("text"), Some("four"));
    }

    #[test]
    fn test_schema_errors() {
        assert!(matches!(parse_table(""), Err(DataError::Schema(_))));
        assert!(matches!(parse_table("\n  \n"), Err(DataError::Schema(_))));
        assert!(matches!(
            parse_table("text,a_sentiment_code\nx,1\n"),
            Err(DataError::Schema(_))
        ));
        assert!(matches!(
            parse_table("text,polarity\nx,1\n"),
            Err(DataError::Schema(_))
        ));
    }

    #[test]
    fn test_header_only_table() {
        let table = parse_table("polarity,a_sentiment_code\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.labels("polarity").unwrap(), Vec::<Label>::new());
    }

    #[test]
    fn test_labels_lookup_errors() {
        let table = parse_table(CSV).unwrap();
        assert_eq!(
            table.labels("polarity").unwrap(),
            vec![Label::Valid(2), Label::Valid(1), Label::Valid(2)]
        );
        assert!(matches!(table.labels("nope"), Err(DataError::UnknownColumn(_))));
        assert!(matches!(table.labels("text"), Err(DataError::NotLabelColumn(_))));
        assert!(matches!(
            table.row(10),
            Err(DataError::IndexOutOfBounds { index: 10, length: 3 })
        ));
    }

    #[test]
    fn test_duplicate_header_later_wins() {
        let table = parse_table("polarity,a_sentiment_code,polarity\n1,2,2\n").unwrap();
        assert_eq!(table.row(0).unwrap().label("polarity"), Some(Label::Valid(2)));
    }

    #[test]
    fn test_table_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RowTable>();
    }
}
