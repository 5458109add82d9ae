use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

/// Conversion from a fetched Postgres row into a model.
///
/// Implemented beside each repository, so a query's column list and the
/// field mapping it feeds live in the same module.
pub trait TryFromRow<R>: Sized {
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Reads a required bounded text column.
///
/// The VARCHAR widths in the migrations match the heapless capacities on
/// the models; a failure here means the schema and the model drifted apart.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let text: String = row.try_get(col_name)?;
    bounded(col_name, &text)
}

/// Reads a nullable bounded text column, keeping null distinct from empty.
pub fn get_optional_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<Option<HeaplessString<N>>, Box<dyn Error + Send + Sync>> {
    let text: Option<String> = row.try_get(col_name)?;
    text.map(|value| bounded(col_name, &value)).transpose()
}

fn bounded<const N: usize>(
    col_name: &str,
    text: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    HeaplessString::try_from(text)
        .map_err(|_| format!("column '{col_name}' holds more than {N} characters").into())
}
