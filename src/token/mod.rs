mod header;
#[allow(clippy::module_inception)]
mod token;

pub use header::TokenHeader;
pub use token::Token;
