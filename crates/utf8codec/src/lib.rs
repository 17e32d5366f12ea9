//! An RFC 3629 UTF-8 codec.
//!
//! A code point is turned into an [`EncodingUnit`] of one to four octets by
//! [`encode`], checked by [`validate`], and turned back into a `char` by
//! [`decode`]. The same pieces drive [`decode_buffer`], which scans a whole
//! byte buffer, and (with the default `std` feature) the file-backed
//! [`read`] and [`write`] operations.
//!
//! ```rust
//! use utf8codec::{decode, encode};
//!
//! let unit = encode(0x20AC);
//! assert_eq!(unit.len(), 3);
//! assert_eq!(unit.as_bytes(), &[0xE2, 0x82, 0xAC]);
//! assert_eq!(decode(&unit), Ok('€'));
//!
//! // Surrogates never encode.
//! assert!(encode(0xD800).is_invalid());
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod classify;
mod decode;
mod encode;
mod error;
mod options;
mod unit;
mod validate;

#[cfg(feature = "std")]
mod reader;
#[cfg(feature = "std")]
mod writer;

#[cfg(test)]
mod tests;

pub use classify::{MAX_CODE_POINT, length_for_code_point, length_for_leading_octet};
pub use decode::{Decoder, decode, decode_buffer};
pub use encode::{encode, encode_char, try_encode};
#[cfg(feature = "std")]
pub use error::StreamError;
pub use error::{CodecError, DecodeError};
pub use options::{DEFAULT_MAX_INPUT_SIZE, ReaderOptions, WriteMode, WriterOptions};
#[cfg(feature = "std")]
pub use reader::{read, read_from, read_with};
pub use unit::EncodingUnit;
pub use validate::{is_valid, validate};
#[cfg(feature = "std")]
pub use writer::{write, write_to, write_with};
