pub mod base64url;
pub(crate) mod pem;

pub use base64url::{decode_bytes, encode, encode_bytes};
