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

use once_cell::sync::Lazy;
use regex::Regex;

/// The scripts the rule-based filters distinguish between.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) enum Alphabet {
    Arabic,
    Cyrillic,
    Greek,
    Latin,
}

impl Alphabet {
    /// Reports whether the given word is written in this script.
    ///
    /// A word matches if every code point is part of the script or is
    /// script-neutral (Common/Inherited), and at least one code point is part
    /// of the script proper. Punctuation such as the Spanish '¿' has
    /// Script=Common and must not disqualify an otherwise Latin word.
    pub(crate) fn matches(&self, text: &str) -> bool {
        static ARABIC: Lazy<Regex> =
            Lazy::new(|| Regex::new("^[\\p{Arabic}\\p{Common}\\p{Inherited}]+$").unwrap());
        static CYRILLIC: Lazy<Regex> =
            Lazy::new(|| Regex::new("^[\\p{Cyrillic}\\p{Common}\\p{Inherited}]+$").unwrap());
        static GREEK: Lazy<Regex> =
            Lazy::new(|| Regex::new("^[\\p{Greek}\\p{Common}\\p{Inherited}]+$").unwrap());
        static LATIN: Lazy<Regex> =
            Lazy::new(|| Regex::new("^[\\p{Latin}\\p{Common}\\p{Inherited}]+$").unwrap());

        static ARABIC_PROPER: Lazy<Regex> = Lazy::new(|| Regex::new("\\p{Arabic}").unwrap());
        static CYRILLIC_PROPER: Lazy<Regex> = Lazy::new(|| Regex::new("\\p{Cyrillic}").unwrap());
        static GREEK_PROPER: Lazy<Regex> = Lazy::new(|| Regex::new("\\p{Greek}").unwrap());
        static LATIN_PROPER: Lazy<Regex> = Lazy::new(|| Regex::new("\\p{Latin}").unwrap());

        match self {
            Alphabet::Arabic => ARABIC.is_match(text) && ARABIC_PROPER.is_match(text),
            Alphabet::Cyrillic => CYRILLIC.is_match(text) && CYRILLIC_PROPER.is_match(text),
            Alphabet::Greek => GREEK.is_match(text) && GREEK_PROPER.is_match(text),
            Alphabet::Latin => LATIN.is_match(text) && LATIN_PROPER.is_match(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_alphabet_is_matched() {
        assert!(Alphabet::Latin.matches("language"));
        assert!(Alphabet::Latin.matches("détection"));
        assert!(!Alphabet::Latin.matches("смесь"));
    }

    #[test]
    fn test_cyrillic_alphabet_is_matched() {
        assert!(Alphabet::Cyrillic.matches("смесь"));
        assert!(!Alphabet::Cyrillic.matches("smes"));
    }

    #[test]
    fn test_greek_alphabet_is_matched() {
        assert!(Alphabet::Greek.matches("Αθήνα"));
        assert!(!Alphabet::Greek.matches("Athens"));
    }

    #[test]
    fn test_arabic_alphabet_is_matched() {
        assert!(Alphabet::Arabic.matches("مرحبا"));
        assert!(!Alphabet::Arabic.matches("marhaba"));
    }

    #[test]
    fn test_script_neutral_characters_do_not_disqualify_a_word() {
        assert!(Alphabet::Latin.matches("¿cómo"));
        assert!(Alphabet::Latin.matches("estás?"));
        assert!(Alphabet::Cyrillic.matches("мир,"));
    }

    #[test]
    fn test_words_without_script_proper_characters_match_no_script() {
        assert!(!Alphabet::Latin.matches("123"));
        assert!(!Alphabet::Greek.matches("***"));
        assert!(!Alphabet::Cyrillic.matches(""));
    }

    #[test]
    fn test_mixed_script_words_match_no_script() {
        assert!(!Alphabet::Latin.matches("abcд"));
        assert!(!Alphabet::Cyrillic.matches("abcд"));
    }
}
