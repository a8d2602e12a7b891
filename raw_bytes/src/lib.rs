#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod buffer;
pub mod error;

pub use buffer::ByteBuffer;
pub use error::StorageError;
