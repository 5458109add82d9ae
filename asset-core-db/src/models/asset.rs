use chrono::{DateTime, NaiveDate, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Represents a tracked item of value in the database.
///
/// Category, department and person rows live outside this core; their
/// columns are bare UUID references. An asset row is destroyed only through
/// the approval transaction or a direct admin deletion, never by a bare
/// delete outside those sequences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetModel {
    pub id: Uuid,
    pub name: HeaplessString<100>,
    pub category_id: Uuid,
    pub department_id: Uuid,
    pub purchase_date: NaiveDate,
    /// Positive amount, backed by a CHECK constraint.
    pub cost: Decimal,
    pub created_by: Uuid,
    pub updated_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for AssetModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
