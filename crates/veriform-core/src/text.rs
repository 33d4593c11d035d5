//! Plain-text extraction seam consumed by the `hasContent` rule
//!
//! The engine does not parse HTML itself; it asks a [`PlainTextExtractor`]
//! for the rendered text of a fragment. [`TagStripper`] is the built-in
//! implementation. A registry built without an extractor makes `hasContent`
//! fail with [`UnsupportedEnvironment`](crate::ValidationError).

/// Extracts rendered text content from an HTML/text fragment.
///
/// Implementations must be pure and synchronous: same fragment in, same
/// text out, no I/O.
pub trait PlainTextExtractor: Send + Sync {
	/// Return the fragment's text content with markup removed
	fn extract(&self, fragment: &str) -> String;
}

/// Scanner state while walking a fragment.
#[derive(Clone, Copy)]
enum Scan {
	Text,
	Tag,
	Comment,
}

/// Built-in extractor: removes tags and HTML comments.
///
/// Tolerates the malformed input a validation path sees in practice: `>`
/// inside quoted attribute values, unclosed tags, and unterminated comments
/// (both swallow the rest of the fragment).
///
/// # Examples
///
/// ```
/// use veriform_core::text::{PlainTextExtractor, TagStripper};
///
/// let stripper = TagStripper;
/// assert_eq!(stripper.extract("<p>Hello <b>World</b></p>"), "Hello World");
/// assert_eq!(stripper.extract(r#"<a title="x>y">Link</a>"#), "Link");
/// assert_eq!(stripper.extract("before<!-- note -->after"), "beforeafter");
/// assert_eq!(stripper.extract("no markup"), "no markup");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TagStripper;

impl PlainTextExtractor for TagStripper {
	fn extract(&self, fragment: &str) -> String {
		let chars: Vec<char> = fragment.chars().collect();
		let mut text = String::with_capacity(fragment.len());
		let mut state = Scan::Text;
		let mut in_single = false;
		let mut in_double = false;
		let mut i = 0;

		while i < chars.len() {
			match state {
				Scan::Text => {
					if chars[i] == '<' {
						if chars[i..].starts_with(&['<', '!', '-', '-']) {
							state = Scan::Comment;
							i += 4;
						} else {
							state = Scan::Tag;
							in_single = false;
							in_double = false;
							i += 1;
						}
					} else {
						text.push(chars[i]);
						i += 1;
					}
				}
				Scan::Tag => {
					match chars[i] {
						'\'' if !in_double => in_single = !in_single,
						'"' if !in_single => in_double = !in_double,
						'>' if !in_single && !in_double => state = Scan::Text,
						_ => {}
					}
					i += 1;
				}
				Scan::Comment => {
					if chars[i..].starts_with(&['-', '-', '>']) {
						state = Scan::Text;
						i += 3;
					} else {
						i += 1;
					}
				}
			}
		}
		text
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("<p>Foo</p>", "Foo")]
	#[case("<p><span><br/><br/></span></p>", "")]
	#[case("plain text", "plain text")]
	#[case("<div>a</div> <div>b</div>", "a b")]
	#[case("<a href=\"#\">Link</a>", "Link")]
	fn test_strips_markup(#[case] fragment: &str, #[case] expected: &str) {
		assert_eq!(TagStripper.extract(fragment), expected);
	}

	#[test]
	fn test_quoted_angle_brackets_stay_inside_tag() {
		assert_eq!(TagStripper.extract(r#"<a title="x>y">Link</a>"#), "Link");
		assert_eq!(TagStripper.extract("<a title='a>b'>c</a>"), "c");
	}

	#[test]
	fn test_comments_removed() {
		assert_eq!(TagStripper.extract("a<!-- <b>hidden</b> -->z"), "az");
	}

	#[test]
	fn test_unclosed_constructs_swallow_rest() {
		assert_eq!(TagStripper.extract("text<unclosed attr=\"v"), "text");
		assert_eq!(TagStripper.extract("text<!-- never closed"), "text");
	}

	#[test]
	fn test_empty_fragment() {
		assert_eq!(TagStripper.extract(""), "");
	}
}
