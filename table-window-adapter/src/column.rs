use alloc::string::{String, ToString};
use alloc::sync::Arc;
use core::fmt;

/// A raw cell value extracted from a row, before formatting.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// A missing value; renders as an empty string.
    #[default]
    Empty,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for CellValue {
    fn from(v: u64) -> Self {
        Self::UInt(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl<T: Into<Self>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Empty, Into::into)
    }
}

/// Extracts a column's value from a row.
pub type CellAccessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;

/// Custom cell formatting for a column.
///
/// The variant is picked once when the column is defined, so formatting a cell never has to
/// inspect what the callback accepts.
pub enum CellFormatter<T> {
    /// Formats a cell from its value alone.
    Value(Arc<dyn Fn(&CellValue) -> String + Send + Sync>),
    /// Formats a cell from its value and the full row.
    ValueWithRow(Arc<dyn Fn(&CellValue, &T) -> String + Send + Sync>),
}

impl<T> Clone for CellFormatter<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Value(f) => Self::Value(Arc::clone(f)),
            Self::ValueWithRow(f) => Self::ValueWithRow(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for CellFormatter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(_) => f.write_str("Value(..)"),
            Self::ValueWithRow(_) => f.write_str("ValueWithRow(..)"),
        }
    }
}

/// A table column: how to read a value from a row and how to show it.
///
/// Cheap to clone; callbacks are stored in `Arc`s.
pub struct Column<T> {
    pub key: String,
    pub header: String,
    /// Fixed width. Columns without one share the table width equally.
    pub width: Option<u32>,
    pub value: CellAccessor<T>,
    pub formatter: Option<CellFormatter<T>>,
}

impl<T> Column<T> {
    pub fn new(
        key: impl Into<String>,
        header: impl Into<String>,
        value: impl Fn(&T) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            width: None,
            value: Arc::new(value),
            formatter: None,
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Formats cells from their value alone.
    pub fn with_formatter(
        mut self,
        f: impl Fn(&CellValue) -> String + Send + Sync + 'static,
    ) -> Self {
        self.formatter = Some(CellFormatter::Value(Arc::new(f)));
        self
    }

    /// Formats cells from their value and the row they belong to.
    pub fn with_row_formatter(
        mut self,
        f: impl Fn(&CellValue, &T) -> String + Send + Sync + 'static,
    ) -> Self {
        self.formatter = Some(CellFormatter::ValueWithRow(Arc::new(f)));
        self
    }

    pub fn value_of(&self, row: &T) -> CellValue {
        (self.value)(row)
    }

    /// Produces the display text of this column's cell in `row`.
    pub fn format_cell(&self, row: &T) -> String {
        let value = self.value_of(row);
        match &self.formatter {
            None => value.to_string(),
            Some(CellFormatter::Value(f)) => f(&value),
            Some(CellFormatter::ValueWithRow(f)) => f(&value, row),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            width: self.width,
            value: Arc::clone(&self.value),
            formatter: self.formatter.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("width", &self.width)
            .field("formatter", &self.formatter)
            .finish_non_exhaustive()
    }
}
