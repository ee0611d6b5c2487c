//! Repetition and alternation rules.
//!
//! Unsafe rules only insert the operator characters, which then bind to the
//! last atom of the content (`ab*` repeats `b` only). Safe rules first wrap
//! the content in a non-capturing group so the operator applies to the
//! whole of it.
use std::fmt;

use super::group;
use crate::Fragment;

pub fn unsafe_at_most(max: impl fmt::Display, content: impl AsRef<str>) -> Fragment {
	Fragment::new(format!("{}{{,{}}}", content.as_ref(), max))
}

pub fn unsafe_at_least(min: impl fmt::Display, content: impl AsRef<str>) -> Fragment {
	Fragment::new(format!("{}{{{},}}", content.as_ref(), min))
}

pub fn unsafe_exactly(n: impl fmt::Display, content: impl AsRef<str>) -> Fragment {
	Fragment::new(format!("{}{{{}}}", content.as_ref(), n))
}

pub fn unsafe_within(
	min: impl fmt::Display,
	max: impl fmt::Display,
	content: impl AsRef<str>,
) -> Fragment {
	Fragment::new(format!("{}{{{},{}}}", content.as_ref(), min, max))
}

pub fn unsafe_many(content: impl AsRef<str>) -> Fragment {
	Fragment::new(format!("{}*", content.as_ref()))
}

pub fn unsafe_at_least_one(content: impl AsRef<str>) -> Fragment {
	Fragment::new(format!("{}+", content.as_ref()))
}

pub fn unsafe_optional(content: impl AsRef<str>) -> Fragment {
	Fragment::new(format!("{}?", content.as_ref()))
}

pub fn unsafe_either(a: impl AsRef<str>, b: impl AsRef<str>) -> Fragment {
	Fragment::new(format!("{}{}{}", a.as_ref(), super::OR, b.as_ref()))
}

pub fn safe_at_most(max: impl fmt::Display, content: impl AsRef<str>) -> Fragment {
	unsafe_at_most(max, group(content))
}

pub fn safe_at_least(min: impl fmt::Display, content: impl AsRef<str>) -> Fragment {
	unsafe_at_least(min, group(content))
}

pub fn safe_exactly(n: impl fmt::Display, content: impl AsRef<str>) -> Fragment {
	unsafe_exactly(n, group(content))
}

pub fn safe_within(
	min: impl fmt::Display,
	max: impl fmt::Display,
	content: impl AsRef<str>,
) -> Fragment {
	unsafe_within(min, max, group(content))
}

pub fn safe_many(content: impl AsRef<str>) -> Fragment {
	unsafe_many(group(content))
}

pub fn safe_at_least_one(content: impl AsRef<str>) -> Fragment {
	unsafe_at_least_one(group(content))
}

pub fn safe_optional(content: impl AsRef<str>) -> Fragment {
	unsafe_optional(group(content))
}

/// Alternation of `a` and `b`, each grouped, the whole being grouped too.
///
/// The outer group keeps the alternation from swallowing whatever is
/// concatenated around it.
pub fn safe_either(a: impl AsRef<str>, b: impl AsRef<str>) -> Fragment {
	group(unsafe_either(group(a), group(b)))
}
