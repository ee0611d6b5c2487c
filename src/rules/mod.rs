//! Substitution rules.
//!
//! Every rule is a pure function from fragments to a new fragment. The
//! content is never inspected nor escaped: it is taken as regular
//! expression syntax and only wrapped or suffixed.
use std::fmt;

use crate::{Assembler, Fragment};

mod repeat;
pub use repeat::*;

/// Alternation operator.
pub const OR: &str = "|";

/// Anchors `content` at the start of the haystack: `^content`.
pub fn front_anchor(content: impl AsRef<str>) -> Fragment {
	Fragment::new(format!("^{}", content.as_ref()))
}

/// Anchors `content` at the end of the haystack: `content$`.
pub fn back_anchor(content: impl AsRef<str>) -> Fragment {
	Fragment::new(format!("{}$", content.as_ref()))
}

/// Anchors `content` at both ends: `^content$`.
pub fn full_anchor(content: impl AsRef<str>) -> Fragment {
	front_anchor(back_anchor(content))
}

/// Capture group: `(content)`.
pub fn submatch(content: impl AsRef<str>) -> Fragment {
	Fragment::new(format!("({})", content.as_ref()))
}

/// Non-capturing group: `(?:content)`.
pub fn group(content: impl AsRef<str>) -> Fragment {
	Fragment::new(format!("(?:{})", content.as_ref()))
}

/// Character class: `[content]`.
pub fn class(content: impl AsRef<str>) -> Fragment {
	Fragment::new(format!("[{}]", content.as_ref()))
}

/// Makes the preceding repetition lazy by appending `?`.
///
/// Meant to be applied on the output of a repetition rule, of any family.
pub fn minimal(content: impl AsRef<str>) -> Fragment {
	Fragment::new(format!("{}?", content.as_ref()))
}

// The following rules use the default family, selected by the `safe`
// feature.

pub fn at_most(max: impl fmt::Display, content: impl AsRef<str>) -> Fragment {
	Assembler::default().at_most(max, content)
}

pub fn at_least(min: impl fmt::Display, content: impl AsRef<str>) -> Fragment {
	Assembler::default().at_least(min, content)
}

pub fn exactly(n: impl fmt::Display, content: impl AsRef<str>) -> Fragment {
	Assembler::default().exactly(n, content)
}

pub fn within(
	min: impl fmt::Display,
	max: impl fmt::Display,
	content: impl AsRef<str>,
) -> Fragment {
	Assembler::default().within(min, max, content)
}

pub fn many(content: impl AsRef<str>) -> Fragment {
	Assembler::default().many(content)
}

pub fn at_least_one(content: impl AsRef<str>) -> Fragment {
	Assembler::default().at_least_one(content)
}

pub fn optional(content: impl AsRef<str>) -> Fragment {
	Assembler::default().optional(content)
}

pub fn either(a: impl AsRef<str>, b: impl AsRef<str>) -> Fragment {
	Assembler::default().either(a, b)
}

#[cfg(test)]
mod tests {
	use super::*;

	// Each pair is of the form `(assembled, expected)`.
	fn structural() -> Vec<(Fragment, &'static str)> {
		vec![
			(front_anchor("abc"), "^abc"),
			(back_anchor("abc"), "abc$"),
			(full_anchor("abc"), "^abc$"),
			(full_anchor(""), "^$"),
			(submatch("a|b"), "(a|b)"),
			(group("a|b"), "(?:a|b)"),
			(group(group("a")), "(?:(?:a))"),
			(class("0-9a-f"), "[0-9a-f]"),
			(class("^\\s"), "[^\\s]"),
			(minimal("a*"), "a*?"),
			(minimal(""), "?"),
		]
	}

	#[test]
	fn structural_rules() {
		for (assembled, expected) in structural() {
			assert_eq!(assembled, expected)
		}
	}

	#[test]
	fn content_is_not_altered() {
		// Unbalanced and meaningless content goes through untouched.
		let content = "(]\\{,}|$^";
		assert_eq!(group(content), format!("(?:{content})").as_str());
		assert_eq!(either(content, content).matches(content).count(), 2)
	}

	#[test]
	fn switched_rules() {
		let family = crate::Family::default();
		assert_eq!(family.is_safe(), cfg!(feature = "safe"));

		let expected: &[(Fragment, &str, &str)] = &[
			(many("ab"), "ab*", "(?:ab)*"),
			(at_least_one("ab"), "ab+", "(?:ab)+"),
			(optional("ab"), "ab?", "(?:ab)?"),
			(either("a", "b"), "a|b", "(?:(?:a)|(?:b))"),
			(exactly(3, "ab"), "ab{3}", "(?:ab){3}"),
			(within(1, 4, "ab"), "ab{1,4}", "(?:ab){1,4}"),
			(at_least(2, "ab"), "ab{2,}", "(?:ab){2,}"),
			(at_most(5, "ab"), "ab{,5}", "(?:ab){,5}"),
		];

		for (assembled, unsafe_form, safe_form) in expected {
			if family.is_safe() {
				assert_eq!(assembled, safe_form)
			} else {
				assert_eq!(assembled, unsafe_form)
			}
		}
	}
}
