use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The identified user performing an operation.
///
/// Identity is resolved by the (external) session layer; the core trusts the
/// caller-supplied actor and evaluates authorization against it explicitly
/// rather than relying on database-level policies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub person_id: Uuid,
    pub email: HeaplessString<100>,
    pub role: ActorRole,
}

impl Actor {
    pub fn is_admin(&self) -> bool {
        self.role == ActorRole::Admin
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorRole {
    Admin,
    User,
}
