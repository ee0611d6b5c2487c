use std::{
	borrow::Borrow,
	fmt,
	ops::{Add, Deref},
};

use crate::rules;

/// Regular expression pattern fragment.
///
/// Opaque piece of regular expression syntax. Rules never look inside a
/// fragment, they only wrap it or concatenate it with other fragments.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(transparent)
)]
pub struct Fragment(String);

impl Fragment {
	pub fn new(content: impl Into<String>) -> Self {
		Self(content.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}

	/// Appends `other` at the end of this fragment.
	///
	/// This is plain concatenation: no grouping is added, so
	/// `Fragment::new("a|b").then("c")` is `a|bc`.
	pub fn then(mut self, other: impl AsRef<str>) -> Self {
		self.0.push_str(other.as_ref());
		self
	}

	pub fn front_anchor(self) -> Self {
		rules::front_anchor(self)
	}

	pub fn back_anchor(self) -> Self {
		rules::back_anchor(self)
	}

	pub fn full_anchor(self) -> Self {
		rules::full_anchor(self)
	}

	pub fn submatch(self) -> Self {
		rules::submatch(self)
	}

	pub fn group(self) -> Self {
		rules::group(self)
	}

	pub fn class(self) -> Self {
		rules::class(self)
	}

	pub fn minimal(self) -> Self {
		rules::minimal(self)
	}

	pub fn at_most(self, max: impl fmt::Display) -> Self {
		rules::at_most(max, self)
	}

	pub fn at_least(self, min: impl fmt::Display) -> Self {
		rules::at_least(min, self)
	}

	pub fn exactly(self, n: impl fmt::Display) -> Self {
		rules::exactly(n, self)
	}

	pub fn within(self, min: impl fmt::Display, max: impl fmt::Display) -> Self {
		rules::within(min, max, self)
	}

	pub fn many(self) -> Self {
		rules::many(self)
	}

	pub fn at_least_one(self) -> Self {
		rules::at_least_one(self)
	}

	pub fn optional(self) -> Self {
		rules::optional(self)
	}

	pub fn either(self, other: impl AsRef<str>) -> Self {
		rules::either(self, other)
	}
}

impl fmt::Display for Fragment {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}

impl Deref for Fragment {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		self.0.as_str()
	}
}

impl AsRef<str> for Fragment {
	fn as_ref(&self) -> &str {
		self.0.as_str()
	}
}

impl Borrow<str> for Fragment {
	fn borrow(&self) -> &str {
		self.0.as_str()
	}
}

impl<'a> From<&'a str> for Fragment {
	fn from(value: &'a str) -> Self {
		Self(value.to_owned())
	}
}

impl From<String> for Fragment {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<Fragment> for String {
	fn from(value: Fragment) -> Self {
		value.0
	}
}

impl PartialEq<str> for Fragment {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl<'a> PartialEq<&'a str> for Fragment {
	fn eq(&self, other: &&'a str) -> bool {
		self.0 == *other
	}
}

impl PartialEq<Fragment> for str {
	fn eq(&self, other: &Fragment) -> bool {
		self == other.0
	}
}

impl<'a> PartialEq<Fragment> for &'a str {
	fn eq(&self, other: &Fragment) -> bool {
		*self == other.0
	}
}

impl<S: AsRef<str>> Add<S> for Fragment {
	type Output = Self;

	fn add(self, rhs: S) -> Self::Output {
		self.then(rhs)
	}
}

impl<S: AsRef<str>> Extend<S> for Fragment {
	fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
		for s in iter {
			self.0.push_str(s.as_ref())
		}
	}
}

impl<S: AsRef<str>> FromIterator<S> for Fragment {
	fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
		let mut result = Self::default();
		result.extend(iter);
		result
	}
}
