pub mod extract;
pub mod parser;
pub mod resolve;
pub mod scope;
pub mod session;

pub use session::Converter;
