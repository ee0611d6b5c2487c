use std::ops::Range;

use regex_assembler::{
	class, full_anchor, group, minimal, rules, safe_either, safe_many, submatch,
	unsafe_at_least_one, unsafe_either, unsafe_many, Assembler, Family, Fragment,
};
use regex_lite::Regex;

fn compile(pattern: impl AsRef<str>) -> Regex {
	Regex::new(pattern.as_ref()).unwrap()
}

fn full_matches(pattern: &Fragment, haystack: &str) -> bool {
	compile(full_anchor(pattern)).is_match(haystack)
}

#[test]
fn unsafe_repetition_binds_last_atom() {
	let vectors = [("ab", true), ("abbb", true), ("a", true), ("abab", false), ("", false)];

	let pattern = rules::unsafe_many("ab");
	for (haystack, expected) in vectors {
		assert_eq!(full_matches(&pattern, haystack), expected, "{haystack}")
	}
}

#[test]
fn safe_repetition_binds_content() {
	let vectors = [("ab", true), ("abab", true), ("", true), ("abbb", false), ("a", false)];

	let pattern = rules::safe_many("ab");
	for (haystack, expected) in vectors {
		assert_eq!(full_matches(&pattern, haystack), expected, "{haystack}")
	}
}

#[test]
fn alternation_scope() {
	let vectors = [
		("xa", true, false),
		("by", true, false),
		("xay", true, true),
		("xby", true, true),
	];

	for family in [Family::Unsafe, Family::Safe] {
		let pattern = Fragment::new("x") + Assembler::new(family).either("a", "b") + "y";
		let regex = compile(full_anchor(&pattern));

		for (haystack, unsafe_expected, safe_expected) in vectors {
			let expected = if family.is_safe() {
				safe_expected
			} else {
				unsafe_expected
			};

			assert_eq!(regex.is_match(haystack), expected, "{family} {haystack}")
		}
	}
}

#[test]
fn bounded_repetitions() {
	let safe = Assembler::new(Family::Safe);

	let vectors: [(Fragment, &str, bool); 8] = [
		(safe.exactly(2, "ab"), "abab", true),
		(safe.exactly(2, "ab"), "ababab", false),
		(safe.within(1, 2, "ab"), "ab", true),
		(safe.within(1, 2, "ab"), "", false),
		(safe.at_least(2, "ab"), "ababab", true),
		(safe.at_least(2, "ab"), "ab", false),
		(rules::unsafe_exactly(2, "ab"), "abb", true),
		(rules::unsafe_at_least(2, "ab"), "abab", false),
	];

	for (pattern, haystack, expected) in vectors {
		assert_eq!(full_matches(&pattern, haystack), expected, "{pattern} {haystack}")
	}
}

#[test]
fn lazy_repetitions() {
	let vectors: [(Fragment, &str, Range<usize>); 3] = [
		(rules::unsafe_at_least_one("a"), "aaa", 0..3),
		(minimal(rules::unsafe_at_least_one("a")), "aaa", 0..1),
		(minimal(rules::safe_many("ab")), "abab", 0..0),
	];

	for (pattern, haystack, expected) in vectors {
		let found = compile(&pattern).find(haystack).unwrap();
		assert_eq!(found.range(), expected, "{pattern}")
	}
}

#[test]
fn submatches() {
	let key = submatch(rules::unsafe_at_least_one(class("a-z")));
	let value = submatch(rules::unsafe_at_least_one(class("0-9")));
	let pattern = full_anchor(key + "=" + value);

	let captures = compile(pattern).captures("width=120").unwrap();
	assert_eq!(&captures[1], "width");
	assert_eq!(&captures[2], "120");

	// Non-capturing groups do not shift capture indices.
	let pattern = group("x") + submatch("y");
	let captures = compile(pattern).captures("xy").unwrap();
	assert_eq!(&captures[1], "y");
	assert_eq!(captures.len(), 2)
}

#[test]
fn compile_time_patterns() {
	const KEY_VALUE: &str = full_anchor!(
		submatch!(unsafe_at_least_one!(class!("a-z"))),
		"=",
		safe_either!(unsafe_at_least_one!(class!("0-9")), "auto")
	);
	const WORDS: &str = full_anchor!(safe_many!(unsafe_at_least_one!(class!("a-z")), " "));

	let vectors = [
		(KEY_VALUE, "width=120", true),
		(KEY_VALUE, "width=auto", true),
		(KEY_VALUE, "width=", false),
		(KEY_VALUE, "w=autoo", false),
		(WORDS, "", true),
		(WORDS, "hello world ", true),
		(WORDS, "hello world", false),
		(full_anchor!(unsafe_many!("ab")), "abab", false),
		(full_anchor!(unsafe_either!("x", "y")), "y", true),
	];

	for (pattern, haystack, expected) in vectors {
		assert_eq!(
			compile(pattern).is_match(haystack),
			expected,
			"{pattern} {haystack}"
		)
	}

	assert_eq!(group!(minimal!(unsafe_many!("."))), "(?:.*?)")
}
