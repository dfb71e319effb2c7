#[macro_use]
extern crate lazy_static;

pub mod catalog;
pub mod cli;
pub mod core;
pub mod dbml;
pub mod sql;
pub mod util;

pub use crate::{
    core::{ConvertError, ErrorKind},
    sql::Converter,
};
