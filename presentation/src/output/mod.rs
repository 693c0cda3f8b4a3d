//! Result output: console formatting and the path-printing presenter

pub mod console;
pub mod path_printer;
