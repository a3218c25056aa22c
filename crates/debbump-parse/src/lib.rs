mod error;
mod parse;
mod serialize;

pub use error::HeaderError;
pub use parse::parse_header;
pub use serialize::format_header;
