//! Word-list validators.
//!
//! A validator looks at a candidate word and the words accepted so far and
//! decides whether the candidate may join the puzzle. Validators run in the
//! order they are configured; the first rejection wins.

use std::fmt::Debug;

use wordsearch_core::WordList;

pub use self::{
    no_palindromes::NoPalindromes, no_punctuation::NoPunctuation,
    no_single_letter_words::NoSingleLetterWords, no_subwords::NoSubwords,
};

/// Returns the validators applied when nothing else is configured.
///
/// Includes, in order:
/// - [`NoPunctuation`]
/// - [`NoSingleLetterWords`]
/// - [`NoSubwords`]
/// - [`NoPalindromes`]
#[must_use]
pub fn default_validators() -> Vec<BoxedValidator> {
    vec![
        Box::new(NoPunctuation::new()),
        Box::new(NoSingleLetterWords::new()),
        Box::new(NoSubwords::new()),
        Box::new(NoPalindromes::new()),
    ]
}

/// A boxed validator.
pub type BoxedValidator = Box<dyn Validator>;

/// An accept/reject check applied before a word enters the generator.
pub trait Validator: Debug + Send + Sync {
    /// Returns the validator name, used in rejection reports and logs.
    fn name(&self) -> &'static str;

    /// Clones the validator into a boxed trait object.
    fn clone_box(&self) -> BoxedValidator;

    /// Returns `true` if `text` may be added next to `accepted`.
    ///
    /// `text` is already normalized (trimmed and upper-cased).
    fn validate(&self, text: &str, accepted: &WordList) -> bool;
}

impl Clone for BoxedValidator {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

mod no_palindromes {
    use super::{BoxedValidator, Validator};
    use wordsearch_core::WordList;

    const NAME: &str = "No Palindromes";

    /// Rejects words that read the same backwards.
    ///
    /// A palindrome can be found in two directions at once, which makes the
    /// answer key ambiguous.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct NoPalindromes {}

    impl NoPalindromes {
        /// Creates a new `NoPalindromes` validator.
        #[must_use]
        pub const fn new() -> Self {
            Self {}
        }
    }

    impl Validator for NoPalindromes {
        fn name(&self) -> &'static str {
            NAME
        }

        fn clone_box(&self) -> BoxedValidator {
            Box::new(*self)
        }

        fn validate(&self, text: &str, _accepted: &WordList) -> bool {
            !text.chars().eq(text.chars().rev())
        }
    }
}

mod no_punctuation {
    use super::{BoxedValidator, Validator};
    use wordsearch_core::WordList;

    const NAME: &str = "No Punctuation";

    /// Rejects words containing punctuation.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct NoPunctuation {}

    impl NoPunctuation {
        /// Creates a new `NoPunctuation` validator.
        #[must_use]
        pub const fn new() -> Self {
            Self {}
        }
    }

    impl Validator for NoPunctuation {
        fn name(&self) -> &'static str {
            NAME
        }

        fn clone_box(&self) -> BoxedValidator {
            Box::new(*self)
        }

        fn validate(&self, text: &str, _accepted: &WordList) -> bool {
            !text.chars().any(|c| c.is_ascii_punctuation())
        }
    }
}

mod no_single_letter_words {
    use super::{BoxedValidator, Validator};
    use wordsearch_core::WordList;

    const NAME: &str = "No Single Letter Words";

    /// Rejects words shorter than two letters.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct NoSingleLetterWords {}

    impl NoSingleLetterWords {
        /// Creates a new `NoSingleLetterWords` validator.
        #[must_use]
        pub const fn new() -> Self {
            Self {}
        }
    }

    impl Validator for NoSingleLetterWords {
        fn name(&self) -> &'static str {
            NAME
        }

        fn clone_box(&self) -> BoxedValidator {
            Box::new(*self)
        }

        fn validate(&self, text: &str, _accepted: &WordList) -> bool {
            text.chars().count() > 1
        }
    }
}

mod no_subwords {
    use super::{BoxedValidator, Validator};
    use wordsearch_core::WordList;

    const NAME: &str = "No Subwords";

    /// Rejects words that contain, or are contained in, an accepted word.
    ///
    /// `CAT` next to `CATALOG` would be found twice. Equal texts are not
    /// rejected, so re-adding a word still merges its settings.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct NoSubwords {}

    impl NoSubwords {
        /// Creates a new `NoSubwords` validator.
        #[must_use]
        pub const fn new() -> Self {
            Self {}
        }
    }

    impl Validator for NoSubwords {
        fn name(&self) -> &'static str {
            NAME
        }

        fn clone_box(&self) -> BoxedValidator {
            Box::new(*self)
        }

        fn validate(&self, text: &str, accepted: &WordList) -> bool {
            accepted.iter().all(|word| {
                let other = word.text();
                other == text || !(other.contains(text) || text.contains(other))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use wordsearch_core::Word;

    use super::*;

    fn accepted(texts: &[&str]) -> WordList {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn test_no_palindromes() {
        let v = NoPalindromes::new();
        assert!(!v.validate("LEVEL", &WordList::new()));
        assert!(!v.validate("ABBA", &WordList::new()));
        assert!(v.validate("LEVER", &WordList::new()));
    }

    #[test]
    fn test_no_punctuation() {
        let v = NoPunctuation::new();
        assert!(!v.validate("DON'T", &WordList::new()));
        assert!(!v.validate("CO-OP", &WordList::new()));
        assert!(v.validate("DONT", &WordList::new()));
    }

    #[test]
    fn test_no_single_letter_words() {
        let v = NoSingleLetterWords::new();
        assert!(!v.validate("A", &WordList::new()));
        assert!(v.validate("AN", &WordList::new()));
    }

    #[test]
    fn test_no_subwords() {
        let v = NoSubwords::new();
        let list = accepted(&["catalog", "dog"]);
        assert!(!v.validate("CAT", &list));
        assert!(!v.validate("HOTDOG", &list));
        assert!(v.validate("DOG", &list));
        assert!(v.validate("BIRD", &list));
    }

    #[test]
    fn test_default_validators() {
        let names: Vec<_> = default_validators().iter().map(|v| v.name()).collect();
        assert_eq!(
            names,
            [
                "No Punctuation",
                "No Single Letter Words",
                "No Subwords",
                "No Palindromes"
            ]
        );
        let cloned = default_validators().clone();
        assert_eq!(cloned.len(), 4);
    }
}
