//! Owner-based access decisions shared by every user-owned resource.

use uuid::Uuid;

/// A record that belongs to exactly one user.
pub trait Owned {
    fn owner_id(&self) -> Uuid;

    fn belongs_to(&self, user_id: Uuid) -> bool {
        self.owner_id() == user_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Permitted,
    Denied,
}

/// Missing and foreign records are both `Denied`.
pub fn authorize<T: Owned>(caller_id: Uuid, record: Option<&T>) -> Access {
    match record {
        Some(r) if r.belongs_to(caller_id) => Access::Permitted,
        _ => Access::Denied,
    }
}

/// Keeps the record only when the caller owns it.
pub fn owned_by<T: Owned>(caller_id: Uuid, record: Option<T>) -> Option<T> {
    match authorize(caller_id, record.as_ref()) {
        Access::Permitted => record,
        Access::Denied => None,
    }
}
