//! URL modeling and filename derivation.
//!
//! Listing links and resolved URLs are handled as plain strings: the final
//! segment is whatever follows the last `/`, and the local filename is that
//! segment percent-decoded.

mod decode;
mod path;

pub use decode::local_filename;
pub use path::{join_listing_url, last_segment};
