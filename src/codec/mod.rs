pub mod token;

pub use token::{decode, encode, fragment_of, share_url, try_decode, try_encode};
