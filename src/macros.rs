//! Compile-time rules.
//!
//! Each macro expands to a [`concat!`] invocation and hence to a string
//! literal, usable in `const` and `static` items. Content arguments must
//! themselves be literals or invocations of these macros. When several
//! content arguments are given, they are concatenated first:
//! `group!("a", "b")` is `"(?:ab)"`.
//!
//! Bounds of repetition macros must be literals (`exactly!(3, "a")`), and
//! are placed in the output exactly as written. A constant or any other
//! identifier in bound position is a compile error since [`concat!`] cannot
//! read its value; use the functions of the [`rules`](crate::rules) module
//! for bounds computed from values.

#[macro_export]
macro_rules! front_anchor {
	($($content:expr),+ $(,)?) => {
		concat!("^", $($content),+)
	};
}

#[macro_export]
macro_rules! back_anchor {
	($($content:expr),+ $(,)?) => {
		concat!($($content),+, "$")
	};
}

#[macro_export]
macro_rules! full_anchor {
	($($content:expr),+ $(,)?) => {
		$crate::front_anchor!($crate::back_anchor!($($content),+))
	};
}

#[macro_export]
macro_rules! submatch {
	($($content:expr),+ $(,)?) => {
		concat!("(", $($content),+, ")")
	};
}

#[macro_export]
macro_rules! group {
	($($content:expr),+ $(,)?) => {
		concat!("(?:", $($content),+, ")")
	};
}

#[macro_export]
macro_rules! class {
	($($content:expr),+ $(,)?) => {
		concat!("[", $($content),+, "]")
	};
}

#[macro_export]
macro_rules! or {
	() => {
		"|"
	};
}

#[macro_export]
macro_rules! minimal {
	($($content:expr),+ $(,)?) => {
		concat!($($content),+, "?")
	};
}

// Unsafe family.

#[macro_export]
macro_rules! unsafe_at_most {
	($max:literal, $($content:expr),+ $(,)?) => {
		concat!($($content),+, "{,", $max, "}")
	};
}

#[macro_export]
macro_rules! unsafe_at_least {
	($min:literal, $($content:expr),+ $(,)?) => {
		concat!($($content),+, "{", $min, ",}")
	};
}

#[macro_export]
macro_rules! unsafe_exactly {
	($n:literal, $($content:expr),+ $(,)?) => {
		concat!($($content),+, "{", $n, "}")
	};
}

#[macro_export]
macro_rules! unsafe_within {
	($min:literal, $max:literal, $($content:expr),+ $(,)?) => {
		concat!($($content),+, "{", $min, ",", $max, "}")
	};
}

#[macro_export]
macro_rules! unsafe_many {
	($($content:expr),+ $(,)?) => {
		concat!($($content),+, "*")
	};
}

#[macro_export]
macro_rules! unsafe_at_least_one {
	($($content:expr),+ $(,)?) => {
		concat!($($content),+, "+")
	};
}

#[macro_export]
macro_rules! unsafe_optional {
	($($content:expr),+ $(,)?) => {
		concat!($($content),+, "?")
	};
}

#[macro_export]
macro_rules! unsafe_either {
	($a:expr, $b:expr $(,)?) => {
		concat!($a, $crate::or!(), $b)
	};
}

// Safe family.

#[macro_export]
macro_rules! safe_at_most {
	($max:literal, $($content:expr),+ $(,)?) => {
		$crate::unsafe_at_most!($max, $crate::group!($($content),+))
	};
}

#[macro_export]
macro_rules! safe_at_least {
	($min:literal, $($content:expr),+ $(,)?) => {
		$crate::unsafe_at_least!($min, $crate::group!($($content),+))
	};
}

#[macro_export]
macro_rules! safe_exactly {
	($n:literal, $($content:expr),+ $(,)?) => {
		$crate::unsafe_exactly!($n, $crate::group!($($content),+))
	};
}

#[macro_export]
macro_rules! safe_within {
	($min:literal, $max:literal, $($content:expr),+ $(,)?) => {
		$crate::unsafe_within!($min, $max, $crate::group!($($content),+))
	};
}

#[macro_export]
macro_rules! safe_many {
	($($content:expr),+ $(,)?) => {
		$crate::unsafe_many!($crate::group!($($content),+))
	};
}

#[macro_export]
macro_rules! safe_at_least_one {
	($($content:expr),+ $(,)?) => {
		$crate::unsafe_at_least_one!($crate::group!($($content),+))
	};
}

#[macro_export]
macro_rules! safe_optional {
	($($content:expr),+ $(,)?) => {
		$crate::unsafe_optional!($crate::group!($($content),+))
	};
}

#[macro_export]
macro_rules! safe_either {
	($a:expr, $b:expr $(,)?) => {
		$crate::group!($crate::unsafe_either!($crate::group!($a), $crate::group!($b)))
	};
}

// Default family. The `safe` feature is evaluated here, when this crate is
// compiled, not in the crate invoking the macro.

#[cfg(not(feature = "safe"))]
#[macro_export]
macro_rules! at_most {
	($($args:tt)*) => { $crate::unsafe_at_most!($($args)*) };
}

#[cfg(feature = "safe")]
#[macro_export]
macro_rules! at_most {
	($($args:tt)*) => { $crate::safe_at_most!($($args)*) };
}

#[cfg(not(feature = "safe"))]
#[macro_export]
macro_rules! at_least {
	($($args:tt)*) => { $crate::unsafe_at_least!($($args)*) };
}

#[cfg(feature = "safe")]
#[macro_export]
macro_rules! at_least {
	($($args:tt)*) => { $crate::safe_at_least!($($args)*) };
}

#[cfg(not(feature = "safe"))]
#[macro_export]
macro_rules! exactly {
	($($args:tt)*) => { $crate::unsafe_exactly!($($args)*) };
}

#[cfg(feature = "safe")]
#[macro_export]
macro_rules! exactly {
	($($args:tt)*) => { $crate::safe_exactly!($($args)*) };
}

#[cfg(not(feature = "safe"))]
#[macro_export]
macro_rules! within {
	($($args:tt)*) => { $crate::unsafe_within!($($args)*) };
}

#[cfg(feature = "safe")]
#[macro_export]
macro_rules! within {
	($($args:tt)*) => { $crate::safe_within!($($args)*) };
}

#[cfg(not(feature = "safe"))]
#[macro_export]
macro_rules! many {
	($($args:tt)*) => { $crate::unsafe_many!($($args)*) };
}

#[cfg(feature = "safe")]
#[macro_export]
macro_rules! many {
	($($args:tt)*) => { $crate::safe_many!($($args)*) };
}

#[cfg(not(feature = "safe"))]
#[macro_export]
macro_rules! at_least_one {
	($($args:tt)*) => { $crate::unsafe_at_least_one!($($args)*) };
}

#[cfg(feature = "safe")]
#[macro_export]
macro_rules! at_least_one {
	($($args:tt)*) => { $crate::safe_at_least_one!($($args)*) };
}

#[cfg(not(feature = "safe"))]
#[macro_export]
macro_rules! optional {
	($($args:tt)*) => { $crate::unsafe_optional!($($args)*) };
}

#[cfg(feature = "safe")]
#[macro_export]
macro_rules! optional {
	($($args:tt)*) => { $crate::safe_optional!($($args)*) };
}

#[cfg(not(feature = "safe"))]
#[macro_export]
macro_rules! either {
	($($args:tt)*) => { $crate::unsafe_either!($($args)*) };
}

#[cfg(feature = "safe")]
#[macro_export]
macro_rules! either {
	($($args:tt)*) => { $crate::safe_either!($($args)*) };
}
