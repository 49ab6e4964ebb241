use crate::{due_date::DueDate, task::Task};

pub type WorkdayId = String;

/// One user's work record for one calendar day. Identified by the
/// (user_id, display_date) pair at the business level; `id` is the
/// store-assigned identifier and only present after a read.
#[derive(Clone, PartialEq, Debug)]
pub struct Workday {
    pub id: Option<WorkdayId>,
    pub user_id: String,
    pub notes: String,
    /// Derived from `due_date` at save time, never caller-supplied
    pub display_date: String,
    pub due_date: DueDate,
    /// Ordered, embedded in the stored document by composition
    pub tasks: Vec<Task>,
}
