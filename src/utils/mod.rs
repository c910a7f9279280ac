pub mod env;
pub mod parsers;
