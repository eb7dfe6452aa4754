//! Page planners.
//!
//! The forward planner produces the current page and the start keys of the
//! next pages; the backward planner produces the start keys of the previous
//! pages. Neither consumes the other's output - the paginator runs both and
//! merges their results, aborting on the first failure.

pub(crate) mod backward;
pub(crate) mod forward;
