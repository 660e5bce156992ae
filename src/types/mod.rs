//! Assorted types, not localised to any part of the library.

pub mod err;
