//! Generic structures, with no dependence on the rest of the library.

pub mod combinations;
