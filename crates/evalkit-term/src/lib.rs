//! Bidirectional conversion between human-readable term descriptions
//! ("2025 Summer Term I") and compact term keys ("2025_01_SU1"), plus
//! section-number inference from auxiliary class identifiers.
//!
//! The codec never fails: free text that does not match the expected shape
//! comes back as [`DecodedTerm::Unparsed`] and callers decide how loudly to
//! complain.

pub mod codec;
pub mod section;

pub use codec::{DecodedTerm, TermDescriptor, decode, encode, parse_key};
pub use section::infer_section;
