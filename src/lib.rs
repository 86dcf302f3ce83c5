#![deny(rust_2018_idioms)]
#![deny(future_incompatible)]

mod usage;

mod scan;

pub mod parser;

pub use usage::*;
