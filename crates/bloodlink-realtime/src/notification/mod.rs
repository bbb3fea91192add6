//! Emergency notification handling: building, ordering, surfacing, and
//! acknowledging notifications.

pub mod builder;
pub mod center;
pub mod dedup;
pub mod formatter;
pub mod priority;
