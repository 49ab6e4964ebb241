/// A single work item. The store layer does not validate the counters, it
/// is a pure carrier.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Task {
    pub title: String,
    /// Remaining units
    pub todo: i64,
    /// Completed units
    pub done: i64,
    /// Completion flag, independent of the counters
    pub completed: bool,
}
