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

use crate::fraction::Fraction;
use crate::language::Language;
use crate::ngram::{Ngram, NgramRef};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

#[derive(Deserialize)]
struct JsonLanguageModel {
    language: Language,
    ngrams: HashMap<Fraction, String>,
}

/// An immutable mapping from n-grams of a single order to their relative
/// frequencies in the training corpus of one language. Absent keys mean
/// the n-gram was not seen in training.
#[derive(Debug)]
pub(crate) struct NgramModel {
    pub(crate) language: Language,
    pub(crate) ngram_length: usize,
    relative_frequencies: HashMap<Ngram, f64>,
}

impl NgramModel {
    /// Decodes a model resource of the given language and order.
    ///
    /// The JSON format groups n-grams by their common relative frequency,
    /// written as a fraction:
    /// `{"language":"ENGLISH","ngrams":{"3/100":"a c p u"}}`
    pub(crate) fn from_json(json: &str, language: Language, ngram_length: usize) -> Result<Self> {
        let ngram_name = Ngram::get_ngram_name_by_length(ngram_length);
        let model = serde_json::from_str::<JsonLanguageModel>(json).with_context(|| {
            format!("the {ngram_name} model for {language:?} is not valid JSON")
        })?;

        if model.language != language {
            bail!(
                "the {ngram_name} model expected to describe {language:?} describes {:?} instead",
                model.language
            );
        }

        let mut relative_frequencies = hashmap!();

        for (fraction, ngrams) in model.ngrams {
            let frequency = fraction.to_f64();
            if !(0.0..=1.0).contains(&frequency) || frequency == 0.0 {
                bail!(
                    "relative frequency {fraction} in the {ngram_name} model for {language:?} \
                     is outside the interval (0,1]"
                );
            }
            for ngram in ngrams.split(' ') {
                if ngram.chars().count() != ngram_length {
                    bail!(
                        "ngram '{ngram}' in the {ngram_name} model for {language:?} does not \
                         consist of {ngram_length} characters"
                    );
                }
                relative_frequencies.insert(Ngram::new(ngram), frequency);
            }
        }

        Ok(Self {
            language,
            ngram_length,
            relative_frequencies,
        })
    }

    pub(crate) fn get_relative_frequency(&self, ngram: &NgramRef) -> Option<f64> {
        self.relative_frequencies.get(ngram.value).copied()
    }
}

/// Collects the distinct n-grams of the given length occurring in the text.
///
/// Windows are taken from each line independently and never cross line
/// breaks. Only windows consisting entirely of letters are emitted, so
/// whitespace, digits and punctuation split them.
pub(crate) fn create_test_data_ngrams(text: &str, ngram_length: usize) -> HashSet<NgramRef<'_>> {
    if !(1..6).contains(&ngram_length) {
        panic!("ngram length {} is not in range 1..6", ngram_length);
    }
    let mut ngrams = hashset!();
    for line in text.lines() {
        let chars = line.char_indices().collect::<Vec<_>>();
        if chars.len() < ngram_length {
            continue;
        }
        for window in chars.windows(ngram_length) {
            if window.iter().all(|(_, character)| character.is_alphabetic()) {
                let (start, _) = window[0];
                let (last_index, last_char) = window[ngram_length - 1];
                let end = last_index + last_char.len_utf8();
                ngrams.insert(NgramRef::new(&line[start..end]));
            }
        }
    }
    ngrams
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use itertools::Itertools;
    use rstest::*;

    #[test]
    fn test_malformed_model_is_rejected() {
        let json = r#"{"language":"ENGLISH","ngrams":{"three hundredths":"a"}}"#;
        let result = NgramModel::from_json(json, Language::English, 1);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("is not valid JSON"));
    }

    const VALID_ENGLISH_UNIGRAM_MODEL_JSON: &str = r#"
    {
        "language":"ENGLISH",
        "ngrams":{
            "3/100":"a c p u y",
            "1/100":"b g l m",
            "1/20":"d r",
            "7/50":"e",
            "1/50":"f w",
            "1/25":"h",
            "3/50":"i",
            "1/10":"n o s",
            "13/100":"t"
        }
    }
    "#;

    #[test]
    fn test_model_is_decoded_from_json() {
        let model =
            NgramModel::from_json(VALID_ENGLISH_UNIGRAM_MODEL_JSON, Language::English, 1).unwrap();
        assert_eq!(model.language, Language::English);
        assert_eq!(model.ngram_length, 1);

        let frequency = model.get_relative_frequency(&NgramRef::new("a")).unwrap();
        assert!(approx_eq!(f64, frequency, 0.03, ulps = 2));

        let frequency = model.get_relative_frequency(&NgramRef::new("e")).unwrap();
        assert!(approx_eq!(f64, frequency, 0.14, ulps = 2));

        assert_eq!(model.get_relative_frequency(&NgramRef::new("x")), None);
    }

    #[test]
    fn test_model_for_wrong_language_is_rejected() {
        let result = NgramModel::from_json(VALID_ENGLISH_UNIGRAM_MODEL_JSON, Language::German, 1);
        assert_eq!(
            result.unwrap_err().to_string(),
            "the unigram model expected to describe German describes English instead"
        );
    }

    #[test]
    fn test_model_with_wrong_ngram_length_is_rejected() {
        let result = NgramModel::from_json(VALID_ENGLISH_UNIGRAM_MODEL_JSON, Language::English, 2);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("does not consist of 2 characters"));
    }

    #[test]
    fn test_model_with_zero_frequency_is_rejected() {
        let json = r#"{"language":"ENGLISH","ngrams":{"0/100":"a"}}"#;
        let result = NgramModel::from_json(json, Language::English, 1);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("outside the interval (0,1]"));
    }

    mod test_data {
        use super::*;

        const TEXT: &str = "
            These sentences are intended for testing purposes.
            ⚠ Do not use them in production
            By the way, they consist of 23 words in total.
        ";

        #[fixture]
        fn expected_unigrams() -> Vec<&'static str> {
            vec![
                "a", "b", "c", "d", "e", "f", "g", "h", "i", "l", "m", "n", "o", "p", "r", "s",
                "t", "u", "w", "y",
            ]
        }

        #[fixture]
        fn expected_bigrams() -> Vec<&'static str> {
            vec![
                "al", "ar", "ay", "by", "ce", "co", "ct", "de", "do", "ds", "du", "ed", "em",
                "en", "es", "ey", "fo", "he", "in", "io", "is", "nc", "nd", "ng", "no", "ns",
                "nt", "od", "of", "on", "or", "os", "ot", "po", "pr", "pu", "rd", "re", "ro",
                "rp", "se", "si", "st", "ta", "te", "th", "ti", "to", "uc", "ur", "us", "wa",
                "wo",
            ]
        }

        #[fixture]
        fn expected_trigrams() -> Vec<&'static str> {
            vec![
                "are", "ces", "con", "cti", "ded", "duc", "enc", "end", "ent", "ese", "est",
                "for", "hem", "hes", "hey", "ing", "int", "ion", "ist", "nce", "nde", "not",
                "nsi", "nte", "odu", "ons", "ord", "ose", "ota", "pos", "pro", "pur", "rds",
                "rod", "rpo", "sen", "ses", "sis", "sti", "tal", "ten", "tes", "the", "tin",
                "tio", "tot", "uct", "urp", "use", "way", "wor",
            ]
        }

        #[fixture]
        fn expected_quadrigrams() -> Vec<&'static str> {
            vec![
                "cons", "ctio", "duct", "ence", "ende", "ente", "esti", "hese", "inte", "nces",
                "nded", "nsis", "nten", "oduc", "onsi", "ords", "oses", "otal", "pose", "prod",
                "purp", "rodu", "rpos", "sent", "sist", "stin", "tenc", "tend", "test", "them",
                "thes", "they", "ting", "tion", "tota", "ucti", "urpo", "word",
            ]
        }

        #[fixture]
        fn expected_fivegrams() -> Vec<&'static str> {
            vec![
                "consi", "ction", "ducti", "ences", "ended", "enten", "estin", "inten", "nsist",
                "ntenc", "ntend", "oduct", "onsis", "poses", "produ", "purpo", "roduc", "rpose",
                "sente", "sting", "tence", "tende", "testi", "these", "total", "uctio", "urpos",
                "words",
            ]
        }

        #[rstest(
            ngram_length,
            expected_ngrams,
            case::unigrams(1, expected_unigrams()),
            case::bigrams(2, expected_bigrams()),
            case::trigrams(3, expected_trigrams()),
            case::quadrigrams(4, expected_quadrigrams()),
            case::fivegrams(5, expected_fivegrams())
        )]
        fn test_test_data_ngram_extraction(ngram_length: usize, expected_ngrams: Vec<&str>) {
            let text = TEXT.trim().to_lowercase();
            let ngrams = create_test_data_ngrams(&text, ngram_length);
            let actual_ngrams = ngrams.iter().map(|it| it.value).sorted().collect_vec();
            assert_eq!(actual_ngrams, expected_ngrams);
        }

        #[test]
        fn test_ngrams_do_not_cross_line_breaks() {
            let ngrams = create_test_data_ngrams("ab\ncd", 2);
            let actual_ngrams = ngrams.iter().map(|it| it.value).sorted().collect_vec();
            assert_eq!(actual_ngrams, vec!["ab", "cd"]);
        }

        #[test]
        fn test_non_letters_split_ngram_windows() {
            let ngrams = create_test_data_ngrams("ab1cd e'f", 2);
            let actual_ngrams = ngrams.iter().map(|it| it.value).sorted().collect_vec();
            assert_eq!(actual_ngrams, vec!["ab", "cd"]);
        }

        #[test]
        fn test_too_short_text_yields_no_ngrams() {
            assert!(create_test_data_ngrams("ab", 3).is_empty());
        }

        #[test]
        #[should_panic(expected = "ngram length 0 is not in range 1..6")]
        fn test_zerogram_extraction_is_rejected() {
            create_test_data_ngrams("abc", 0);
        }
    }
}
