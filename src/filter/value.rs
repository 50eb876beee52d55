//! Filter values: a predicate paired with a mutable argument.
//!
//! A [`FilterValue`] is what a filter widget produces: a pure predicate over
//! `(item, argument)` and the argument the user typed or picked. The argument
//! can change while the predicate stays registered, so a search box only has
//! to call [`FilterValue::set_argument`] on every keystroke.
//!
//! # Built-in filters
//!
//! - [`FilterValue::text`]: case-insensitive substring match on every
//!   whitespace-separated token
//! - [`FilterValue::fuzzy`]: skim-style fuzzy match on every token
//!
//! # Example
//!
//! ```rust
//! use pagewise::FilterValue;
//!
//! struct Server { name: String, running: bool }
//!
//! let running = FilterValue::new(|s: &Server, arg: &str| arg != "running" || s.running, "running");
//! let by_name = FilterValue::text(|s: &Server| s.name.clone(), "web");
//!
//! let server = Server { name: "web-1".into(), running: true };
//! assert!(running.matches(&server));
//! assert!(by_name.matches(&server));
//! ```

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::fmt;
use std::rc::Rc;

/// Pure predicate over an item and the filter's argument.
pub type Predicate<T> = Rc<dyn Fn(&T, &str) -> bool>;

/// A predicate plus its current argument.
pub struct FilterValue<T> {
    predicate: Predicate<T>,
    argument: String,
}

impl<T> FilterValue<T> {
    /// Creates a filter value from a predicate and its initial argument.
    pub fn new(predicate: impl Fn(&T, &str) -> bool + 'static, argument: impl Into<String>) -> Self {
        Self {
            predicate: Rc::new(predicate),
            argument: argument.into(),
        }
    }

    #[must_use]
    pub fn argument(&self) -> &str {
        &self.argument
    }

    pub fn set_argument(&mut self, argument: impl Into<String>) {
        self.argument = argument.into();
    }

    /// Evaluates the predicate against `item` with the current argument.
    #[must_use]
    pub fn matches(&self, item: &T) -> bool {
        (self.predicate)(item, &self.argument)
    }
}

impl<T: 'static> FilterValue<T> {
    /// Case-insensitive token filter.
    ///
    /// The argument is split on whitespace and lowercased; an item passes when
    /// every token is a substring of the lowercased text extracted from it. An
    /// empty or blank argument accepts every item.
    pub fn text(extract: impl Fn(&T) -> String + 'static, argument: impl Into<String>) -> Self {
        Self::new(
            move |item: &T, argument: &str| {
                let haystack = extract(item).to_lowercase();
                tokens(argument).all(|token| haystack.contains(&token))
            },
            argument,
        )
    }

    /// Fuzzy token filter using the skim matching algorithm.
    ///
    /// Every token of the argument must fuzzy-match the extracted text. An
    /// empty or blank argument accepts every item.
    pub fn fuzzy(extract: impl Fn(&T) -> String + 'static, argument: impl Into<String>) -> Self {
        let matcher = SkimMatcherV2::default();
        Self::new(
            move |item: &T, argument: &str| {
                let haystack = extract(item).to_lowercase();
                tokens(argument).all(|token| matcher.fuzzy_match(&haystack, &token).is_some())
            },
            argument,
        )
    }
}

fn tokens(argument: &str) -> impl Iterator<Item = String> + '_ {
    argument.split_whitespace().map(str::to_lowercase)
}

impl<T> Clone for FilterValue<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Rc::clone(&self.predicate),
            argument: self.argument.clone(),
        }
    }
}

impl<T> fmt::Debug for FilterValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterValue")
            .field("argument", &self.argument)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &&str) -> String {
        (*s).to_string()
    }

    #[test]
    fn test_custom_predicate_sees_argument() {
        let mut longer = FilterValue::new(|s: &&str, arg: &str| s.len() > arg.parse::<usize>().unwrap_or(0), "3");
        assert!(longer.matches(&"abcd"));
        assert!(!longer.matches(&"abc"));

        longer.set_argument("1");
        assert!(longer.matches(&"abc"));
        assert_eq!(longer.argument(), "1");
    }

    #[test]
    fn test_text_requires_all_tokens() {
        let filter = FilterValue::text(name, "Web PROD");
        assert!(filter.matches(&"prod-web-01"));
        assert!(!filter.matches(&"web-staging"));
    }

    #[test]
    fn test_blank_argument_accepts_everything() {
        assert!(FilterValue::text(name, "  ").matches(&"anything"));
        assert!(FilterValue::fuzzy(name, "").matches(&"anything"));
    }

    #[test]
    fn test_fuzzy_matches_subsequence() {
        let filter = FilterValue::fuzzy(name, "dsrc");
        assert!(filter.matches(&"datasource"));
        assert!(!filter.matches(&"mail-session"));
    }
}
