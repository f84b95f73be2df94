//! Domain model for the remote board.
//!
//! The structs in this module are local mirrors of remote entities. They
//! hold only the fields the synchronization engine reads or writes; the
//! remote service remains the system of record for everything else.

mod card;
mod error;
mod ids;
mod list;

pub use card::{Card, CardDraft, CardPatch, Checklist, ChecklistItem, Label};
pub use error::{ParseListRoleError, UnconfiguredListError};
pub use ids::{CardId, ChecklistId, ChecklistItemId, LabelId, ListId};
pub use list::{List, ListDirectory, ListRole, ListRoleNames};
