use std::{fmt, str::FromStr};

use educe::Educe;

use crate::{rules, Fragment};

/// Rule family used by repetition and alternation rules.
///
/// The default family is [`Family::Unsafe`], or [`Family::Safe`] when the
/// `safe` feature is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Educe)]
#[educe(Default)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(rename_all = "lowercase", try_from = "String")
)]
pub enum Family {
	/// Operators are appended to the content as is.
	#[cfg_attr(not(feature = "safe"), educe(Default))]
	Unsafe,

	/// Content is wrapped in a non-capturing group before the operator is
	/// applied.
	#[cfg_attr(feature = "safe", educe(Default))]
	Safe,
}

impl Family {
	pub fn is_safe(&self) -> bool {
		matches!(self, Self::Safe)
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Unsafe => "unsafe",
			Self::Safe => "safe",
		}
	}
}

impl fmt::Display for Family {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Display::fmt(self.as_str(), f)
	}
}

#[derive(Debug, thiserror::Error)]
#[error("invalid rule family `{0}`, expected `unsafe` or `safe`")]
pub struct InvalidFamily(pub String);

impl FromStr for Family {
	type Err = InvalidFamily;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let name = s.trim();
		if name.eq_ignore_ascii_case("unsafe") {
			Ok(Self::Unsafe)
		} else if name.eq_ignore_ascii_case("safe") {
			Ok(Self::Safe)
		} else {
			Err(InvalidFamily(s.to_owned()))
		}
	}
}

impl TryFrom<String> for Family {
	type Error = InvalidFamily;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

/// Pattern assembler bound to a rule family.
///
/// Provides the repetition and alternation rules of its family. The other
/// rules do not depend on the family and are found in the [`rules`] module.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Assembler {
	family: Family,
}

impl Assembler {
	pub fn new(family: Family) -> Self {
		Self { family }
	}

	pub fn family(&self) -> Family {
		self.family
	}

	pub fn at_most(&self, max: impl fmt::Display, content: impl AsRef<str>) -> Fragment {
		match self.family {
			Family::Unsafe => rules::unsafe_at_most(max, content),
			Family::Safe => rules::safe_at_most(max, content),
		}
	}

	pub fn at_least(&self, min: impl fmt::Display, content: impl AsRef<str>) -> Fragment {
		match self.family {
			Family::Unsafe => rules::unsafe_at_least(min, content),
			Family::Safe => rules::safe_at_least(min, content),
		}
	}

	pub fn exactly(&self, n: impl fmt::Display, content: impl AsRef<str>) -> Fragment {
		match self.family {
			Family::Unsafe => rules::unsafe_exactly(n, content),
			Family::Safe => rules::safe_exactly(n, content),
		}
	}

	pub fn within(
		&self,
		min: impl fmt::Display,
		max: impl fmt::Display,
		content: impl AsRef<str>,
	) -> Fragment {
		match self.family {
			Family::Unsafe => rules::unsafe_within(min, max, content),
			Family::Safe => rules::safe_within(min, max, content),
		}
	}

	pub fn many(&self, content: impl AsRef<str>) -> Fragment {
		match self.family {
			Family::Unsafe => rules::unsafe_many(content),
			Family::Safe => rules::safe_many(content),
		}
	}

	pub fn at_least_one(&self, content: impl AsRef<str>) -> Fragment {
		match self.family {
			Family::Unsafe => rules::unsafe_at_least_one(content),
			Family::Safe => rules::safe_at_least_one(content),
		}
	}

	pub fn optional(&self, content: impl AsRef<str>) -> Fragment {
		match self.family {
			Family::Unsafe => rules::unsafe_optional(content),
			Family::Safe => rules::safe_optional(content),
		}
	}

	pub fn either(&self, a: impl AsRef<str>, b: impl AsRef<str>) -> Fragment {
		match self.family {
			Family::Unsafe => rules::unsafe_either(a, b),
			Family::Safe => rules::safe_either(a, b),
		}
	}
}

impl From<Family> for Assembler {
	fn from(family: Family) -> Self {
		Self::new(family)
	}
}
