use serde::{Deserialize, Serialize};
use sqlx::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "audit_entity_type", rename_all = "snake_case")]
pub enum AuditEntityType {
    Asset,
    DeletionRequest,
}

impl From<AuditEntityType> for &str {
    fn from(val: AuditEntityType) -> Self {
        match val {
            AuditEntityType::Asset => "asset",
            AuditEntityType::DeletionRequest => "deletion_request",
        }
    }
}

pub fn serialize_audit_entity_type<S>(
    entity_type: &AuditEntityType,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str((*entity_type).into())
}

pub fn deserialize_audit_entity_type<'de, D>(deserializer: D) -> Result<AuditEntityType, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    match s.as_str() {
        "asset" => Ok(AuditEntityType::Asset),
        "deletion_request" => Ok(AuditEntityType::DeletionRequest),
        _ => Err(serde::de::Error::custom(format!("Unknown entity type: {s}"))),
    }
}
