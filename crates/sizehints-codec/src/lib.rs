//! Size Hints Codec
//!
//! Lossless decoding and encoding of the ICCCM `WM_NORMAL_HINTS` property
//! (`WM_SIZE_HINTS` type), plus pure flag queries and clears.
//!
//! ```
//! use sizehints_codec::SizeHints;
//!
//! let mut data = [0u8; 72];
//! data[0] = 0x80; // P_ASPECT
//! let hints = SizeHints::decode(&data).unwrap();
//! assert!(hints.is_aspect_set());
//!
//! let updated = hints.clear_aspect();
//! assert_eq!(updated.encode()[0], 0);
//! assert_eq!(hints.encode(), data);
//! ```

pub mod codec;
pub mod error;
pub mod flags;
pub mod layout;
mod mutate;

pub use codec::{decode, encode};
pub use error::{CodecError, CodecResult};
pub use flags::SizeHintsFlags;
pub use layout::{Aspect, Field, RECORD_SIZE, SizeHints};
