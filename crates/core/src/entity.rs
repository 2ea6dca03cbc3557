//! Records the backend owns.

use crate::id::RecordId;

/// A record owned by the backend and identified by a [`RecordId`].
pub trait Entity {
    /// Returns the backend identifier.
    fn id(&self) -> &RecordId;
}
