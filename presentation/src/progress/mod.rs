//! Progress reporting while the question document loads

pub mod reporter;
