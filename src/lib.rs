//! Assemble regular expression patterns from named building blocks (anchors,
//! groups, repetitions, alternations) instead of writing the raw syntax by
//! hand.
//!
//! Rules come in two flavors producing the same text:
//! - macros, expanding to a string literal at compile time (see [`group!`],
//!   [`many!`], etc.);
//! - functions returning a [`Fragment`], for patterns built from values only
//!   known at run time (see the [`rules`] module).
//!
//! Nothing is parsed, validated or escaped: the output is handed as is to
//! whatever regular expression engine is used by the caller.
//!
//! # Rule families
//!
//! Repetition and alternation operators bind to the last atom only (`ab*`
//! repeats `b`). Rules of the *unsafe* family append their operator as is,
//! while rules of the *safe* family first wrap the content in a
//! non-capturing group:
//!
//! ```
//! use regex_assembler::{safe_many, unsafe_many};
//!
//! assert_eq!(unsafe_many!("ab"), "ab*");
//! assert_eq!(safe_many!("ab"), "(?:ab)*");
//! ```
//!
//! Both families are always available under their `unsafe_` and `safe_`
//! names. The unprefixed names ([`many!`], [`rules::many`], ...) refer to the
//! unsafe family, or to the safe one when the `safe` feature is enabled. The
//! family can also be chosen at run time with an [`Assembler`].
//!
//! ```
//! use regex_assembler::{class, unsafe_at_least_one, Assembler, Family, Fragment};
//!
//! const DIGITS: &str = unsafe_at_least_one!(class!("0-9"));
//!
//! let safe = Assembler::new(Family::Safe);
//! let number = Fragment::from(DIGITS) + safe.optional(Fragment::new("\\.") + DIGITS);
//! assert_eq!(number, "[0-9]+(?:\\.[0-9]+)?");
//! ```
//!
//! Macro bounds are literals. A bound only known as a constant goes through
//! the functions instead:
//!
//! ```compile_fail
//! const N: u32 = 3;
//! const TRIPLE: &str = regex_assembler::unsafe_exactly!(N, "ab");
//! ```
//!
//! ```
//! const N: u32 = 3;
//! assert_eq!(regex_assembler::unsafe_exactly(N, "ab"), "ab{3}");
//! ```
mod macros;

pub mod rules;
pub use rules::*;

mod fragment;
pub use fragment::*;

mod family;
pub use family::*;
