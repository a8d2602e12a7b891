//! # bit_array
//!
//! A `no_std` compatible dynamic bit array packed into bytes, most
//! significant bit first.
//!
//! ```rust
//! use bit_array::{BitArray, BitState};
//!
//! let mut bits = BitArray::new(24).expect("failed to allocate");
//! bits.set_region(9, 11).unwrap();
//! assert_eq!(bits.to_bin(), "000000000111000000000000");
//!
//! bits.toggle_region(8, 13).unwrap();
//! assert_eq!(bits.find_next(BitState::Set, 9).unwrap(), Some(12));
//! assert_eq!(bits.count_set(), 3);
//! ```
//!
//! ## Hex form
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! // A partial final nibble is right-aligned
//! let bits = BitArray::from_bin("1010111").unwrap();
//! assert_eq!(bits.to_hex(), "A7");
//!
//! // Parsing always produces whole nibbles
//! assert_eq!(BitArray::from_hex("A7").unwrap().to_bin(), "10100111");
//! ```
//!
//! Index validation can be compiled out with the `fast` feature.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub use error::BitArrayError;

mod bit_ops;
mod index;

mod array;
mod bitwise;
mod iter;
mod region;
mod search;
mod text;

pub use array::{BitArray, BitState};
pub use bit_ops::bytes_for_bits;
pub use iter::{Iter, Ones};
pub use region::BitOp;
