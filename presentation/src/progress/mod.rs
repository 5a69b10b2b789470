//! Progress reporting for record composition

pub mod reporter;
