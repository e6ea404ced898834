/*
 * Copyright © 2020-present Peter M. Stahl pemistahl@gmail.com
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either expressed or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::borrow::Borrow;
use std::fmt;
use std::fmt::Display;

/// An owned character n-gram of length 1..=5, used as language model key.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) struct Ngram {
    pub(crate) value: String,
}

impl Ngram {
    pub(crate) fn new(value: &str) -> Self {
        let char_count = value.chars().count();
        if !(1..6).contains(&char_count) {
            panic!("length {} of ngram '{}' is not in range 1..6", char_count, value);
        }
        Self {
            value: value.to_string(),
        }
    }

    pub(crate) fn get_ngram_name_by_length(ngram_length: usize) -> &'static str {
        match ngram_length {
            1 => "unigram",
            2 => "bigram",
            3 => "trigram",
            4 => "quadrigram",
            5 => "fivegram",
            _ => panic!("ngram length {} is not in range 1..6", ngram_length),
        }
    }
}

impl Display for Ngram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// Allows looking up `HashMap<Ngram, _>` entries by string slice.
impl Borrow<str> for Ngram {
    fn borrow(&self) -> &str {
        &self.value
    }
}

/// A borrowed n-gram pointing into the text under detection.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) struct NgramRef<'a> {
    pub(crate) value: &'a str,
}

impl<'a> NgramRef<'a> {
    pub(crate) fn new(value: &'a str) -> Self {
        let char_count = value.chars().count();
        if !(1..6).contains(&char_count) {
            panic!("length {} of ngram '{}' is not in range 1..6", char_count, value);
        }
        Self { value }
    }

    pub(crate) fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Yields this n-gram followed by its successively shorter prefixes,
    /// each dropping the trailing character, down to the unigram.
    pub(crate) fn range_of_lower_order_ngrams(&self) -> NgramRange<'a> {
        NgramRange { value: self.value }
    }
}

impl<'a> Display for NgramRef<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

pub(crate) struct NgramRange<'a> {
    value: &'a str,
}

impl<'a> Iterator for NgramRange<'a> {
    type Item = NgramRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.value.is_empty() {
            return None;
        }
        let result = NgramRef { value: self.value };
        let (last_char_index, _) = self.value.char_indices().last().unwrap();
        self.value = &self.value[..last_char_index];
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_ngram_name_by_length() {
        assert_eq!(Ngram::get_ngram_name_by_length(1), "unigram");
        assert_eq!(Ngram::get_ngram_name_by_length(2), "bigram");
        assert_eq!(Ngram::get_ngram_name_by_length(3), "trigram");
        assert_eq!(Ngram::get_ngram_name_by_length(4), "quadrigram");
        assert_eq!(Ngram::get_ngram_name_by_length(5), "fivegram");
    }

    #[test]
    #[should_panic(expected = "ngram length 6 is not in range 1..6")]
    fn test_invalid_ngram_name_lookup() {
        Ngram::get_ngram_name_by_length(6);
    }

    #[test]
    #[should_panic(expected = "length 0 of ngram '' is not in range 1..6")]
    fn test_zerogram_is_rejected() {
        Ngram::new("");
    }

    #[test]
    #[should_panic(expected = "length 6 of ngram 'abcdef' is not in range 1..6")]
    fn test_sixgram_is_rejected() {
        NgramRef::new("abcdef");
    }

    #[test]
    fn test_ngram_length_counts_chars_not_bytes() {
        assert_eq!(Ngram::new("äöüßé").value, "äöüßé");
    }

    #[test]
    fn test_range_of_lower_order_ngrams() {
        let ngram = NgramRef::new("abcde");
        let range = ngram.range_of_lower_order_ngrams().collect_vec();
        assert_eq!(
            range,
            vec![
                NgramRef::new("abcde"),
                NgramRef::new("abcd"),
                NgramRef::new("abc"),
                NgramRef::new("ab"),
                NgramRef::new("a"),
            ]
        );
    }

    #[test]
    fn test_range_of_lower_order_ngrams_is_char_aware() {
        let ngram = NgramRef::new("мир");
        let range = ngram.range_of_lower_order_ngrams().collect_vec();
        assert_eq!(
            range,
            vec![NgramRef::new("мир"), NgramRef::new("ми"), NgramRef::new("м")]
        );
    }
}
