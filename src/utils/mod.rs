pub mod paths;
pub mod term;
