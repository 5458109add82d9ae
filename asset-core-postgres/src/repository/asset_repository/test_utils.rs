use asset_core_db::models::asset::AssetModel;
use chrono::{NaiveDate, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use uuid::Uuid;

pub fn create_test_asset(created_by: Uuid) -> AssetModel {
    let now = Utc::now();
    AssetModel {
        id: Uuid::new_v4(),
        name: HeaplessString::try_from("Dell Latitude 5420").unwrap(),
        category_id: Uuid::new_v4(),
        department_id: Uuid::new_v4(),
        purchase_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        cost: Decimal::new(120000, 2),
        created_by,
        updated_by: created_by,
        created_at: now,
        updated_at: now,
    }
}
