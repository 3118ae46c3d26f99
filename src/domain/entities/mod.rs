pub mod conversation;
pub mod machine;
pub mod series;
pub mod summary;

pub use conversation::{ChatEntry, ChatRole, Conversation};
pub use machine::{MachineProfile, REPAIR_STEPS, SparePart};
pub use series::{OccurrencePoint, OccurrenceSeries};
pub use summary::Summary;
