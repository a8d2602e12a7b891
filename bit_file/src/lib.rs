//! Binary save format for [`bit_array::BitArray`].
//!
//! A file is the 18-byte ASCII tag `BitArray_Data_File`, the bit length as a
//! little-endian `u64`, then the packed bytes exactly as held in memory
//! (pad bits included).

pub mod error;
pub mod file;

pub use error::FileError;
pub use file::{FileHeader, HEADER_LEN, MAGIC, load, load_from_file, save, save_to_file};
