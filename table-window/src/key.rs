/// The stable identity of a dataset row.
pub type RowKey = u64;

/// A dataset row that exposes a unique integer id.
///
/// The key follows the row through slicing, so a presentation layer can use it for diffing or
/// selection without knowing the row's dataset index.
pub trait TableRow {
    fn row_key(&self) -> RowKey;
}

impl<T: TableRow + ?Sized> TableRow for &T {
    fn row_key(&self) -> RowKey {
        (**self).row_key()
    }
}
