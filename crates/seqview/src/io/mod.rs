//! IO front-end that turns uploaded structure files into parsed [`Structure`](crate::model::structure::Structure)s.
//!
//! Bytes are decoded strictly as UTF-8 before parsing, so undecodable input and malformed
//! records surface as distinct [`Error`] variants.

mod context;
mod error;
mod pdb;

pub use pdb::reader::decode;
pub use pdb::reader::read as read_pdb_structure;
pub use pdb::reader::read_bytes as read_pdb_bytes;
pub use pdb::reader::read_str as read_pdb_str;

pub use context::IoContext;

pub use error::Error;
