//! Ordered keyword classification.
//!
//! Each classifier is a table of `(keyword, category)` pairs checked top to
//! bottom against lowercased text. The first keyword found wins; if none is
//! found the table's default applies.

/// A priority-ordered keyword table with a terminal default.
#[derive(Debug)]
pub struct KeywordRules<T: 'static> {
    rules: &'static [(&'static str, T)],
    default: T,
}

impl<T: Copy + 'static> KeywordRules<T> {
    pub const fn new(rules: &'static [(&'static str, T)], default: T) -> Self {
        Self { rules, default }
    }

    /// First category whose keyword occurs in `text`.
    ///
    /// `text` must already be lowercased.
    pub fn classify(&self, text: &str) -> T {
        self.rules
            .iter()
            .find(|(keyword, _)| text.contains(keyword))
            .map(|&(_, category)| category)
            .unwrap_or(self.default)
    }

    pub fn rules(&self) -> &'static [(&'static str, T)] {
        self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Size {
        Large,
        Medium,
        Unknown,
    }

    static SIZES: KeywordRules<Size> =
        KeywordRules::new(&[("large", Size::Large), ("medium", Size::Medium)], Size::Unknown);

    #[test]
    fn first_listed_keyword_wins() {
        assert_eq!(SIZES.classify("medium or large"), Size::Large);
        assert_eq!(SIZES.classify("medium"), Size::Medium);
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(SIZES.classify("small"), Size::Unknown);
        assert_eq!(SIZES.classify(""), Size::Unknown);
    }
}
