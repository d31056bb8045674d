//! Port definitions - interfaces between the application layer and
//! infrastructure adapters.

pub mod outbound;
