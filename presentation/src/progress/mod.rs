//! Progress reporting between quiz questions

pub mod reporter;
