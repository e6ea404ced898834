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

use crate::alphabet::Alphabet;
use crate::constant::{CHARS_TO_LANGUAGES_MAPPING, CHARS_TO_SINGLE_LANGUAGE_MAPPING, NO_LETTER};
use crate::language::Language;
use crate::model::{create_test_data_ngrams, NgramModel};
use crate::ngram::{Ngram, NgramRef};
use crate::storage::ModelStore;
use anyhow::{Context, Result};
use itertools::Itertools;
use log::debug;
use once_cell::sync::OnceCell;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

const MAX_NGRAM_LENGTH: usize = 5;

/// This struct detects the language of given input text.
pub struct LanguageDetector {
    languages: HashSet<Language>,
    model_store: Arc<dyn ModelStore>,
    language_models: HashMap<Language, [OnceCell<NgramModel>; MAX_NGRAM_LENGTH]>,
}

impl LanguageDetector {
    pub(crate) fn from(languages: HashSet<Language>, model_store: Arc<dyn ModelStore>) -> Self {
        let language_models = languages
            .iter()
            .map(|&language| (language, Default::default()))
            .collect();
        Self {
            languages,
            model_store,
            language_models,
        }
    }

    /// Detects the language of given input text.
    /// If no language can be reliably detected, [`Language::Unknown`] is returned.
    ///
    /// Panics if a language model needed for scoring cannot be loaded.
    /// Use [`try_detect_language_of`](Self::try_detect_language_of) to handle
    /// such failures instead.
    pub fn detect_language_of<T: Into<String>>(&self, text: T) -> Language {
        self.try_detect_language_of(text)
            .unwrap_or_else(|error| panic!("{error:#}"))
    }

    /// Detects the language of given input text, reporting model loading
    /// failures instead of panicking.
    pub fn try_detect_language_of<T: Into<String>>(&self, text: T) -> Result<Language> {
        let text = text.into();
        let normalized_text = text.trim().to_lowercase();

        if normalized_text.is_empty() || NO_LETTER.is_match(&normalized_text) {
            return Ok(Language::Unknown);
        }

        let words = split_text_into_words(&normalized_text);

        let language_detected_by_rules = self.detect_language_with_rules(&words);
        if language_detected_by_rules != Language::Unknown {
            return Ok(language_detected_by_rules);
        }

        let mut candidates = self.languages.clone();
        self.filter_languages_by_rules(&words, &mut candidates);
        if candidates.is_empty() {
            return Ok(Language::Unknown);
        }

        let char_count = normalized_text.chars().count();
        let mut layers = vec![];

        for ngram_length in 1..=MAX_NGRAM_LENGTH {
            if char_count < ngram_length {
                break;
            }
            let test_ngrams = create_test_data_ngrams(&normalized_text, ngram_length);
            if test_ngrams.is_empty() {
                continue;
            }
            let probabilities = self.compute_language_probabilities(&candidates, &test_ngrams)?;
            // A candidate without a single hit keeps its initial sum of 0.0.
            // Such a layer would let the other candidates compete against a
            // hard zero, so it is discarded as a whole.
            if probabilities.values().any(|&probability| probability == 0.0) {
                continue;
            }
            layers.push(probabilities);
        }

        if layers.is_empty() {
            return Ok(Language::Unknown);
        }

        let mut total_probabilities = HashMap::with_capacity(candidates.len());
        for layer in layers {
            for (language, probability) in layer {
                *total_probabilities.entry(language).or_insert(0.0) += probability;
            }
        }

        Ok(most_likely_language(&total_probabilities))
    }

    /// Detects the languages of all given input texts, in order.
    pub fn detect_languages_of<T: Into<String>>(
        &self,
        texts: impl IntoIterator<Item = T>,
    ) -> Vec<Language> {
        texts
            .into_iter()
            .map(|text| self.detect_language_of(text))
            .collect_vec()
    }

    /// Detects the languages of all given input texts, in order, spreading
    /// the independent detection calls over the rayon thread pool.
    pub fn detect_languages_in_parallel_of<T: Into<String> + Send>(
        &self,
        texts: Vec<T>,
    ) -> Vec<Language> {
        texts
            .into_par_iter()
            .map(|text| self.detect_language_of(text))
            .collect()
    }

    /// Adds the given language to the set of languages considered by
    /// subsequent detection calls. Its models are loaded lazily on first use.
    ///
    /// Panics for [`Language::Unknown`].
    pub fn add_language(&mut self, language: Language) {
        if language == Language::Unknown {
            panic!("Unknown cannot be added to the set of languages");
        }
        self.languages.insert(language);
        self.language_models.entry(language).or_default();
    }

    /// Removes the given language from the set of languages considered by
    /// subsequent detection calls. Already loaded models are retained.
    pub fn remove_language(&mut self, language: Language) {
        self.languages.remove(&language);
    }

    pub(crate) fn preload_language_models(&self) {
        let languages_and_lengths = self
            .languages
            .iter()
            .copied()
            .cartesian_product(1..=MAX_NGRAM_LENGTH)
            .collect_vec();
        languages_and_lengths
            .into_par_iter()
            .for_each(|(language, ngram_length)| {
                if let Err(error) = self.load_language_model(language, ngram_length) {
                    panic!("{error:#}");
                }
            });
        debug!("preloaded all models of {} languages", self.languages.len());
    }

    fn detect_language_with_rules(&self, words: &[&str]) -> Language {
        for word in words {
            if Alphabet::Greek.matches(word) {
                if self.languages.contains(&Language::Greek) {
                    return Language::Greek;
                }
            } else if Alphabet::Latin.matches(word) {
                for (characters, language) in CHARS_TO_SINGLE_LANGUAGE_MAPPING.iter() {
                    if word.chars().any(|character| characters.contains(character))
                        && self.languages.contains(language)
                    {
                        return *language;
                    }
                }
            }
        }
        Language::Unknown
    }

    fn filter_languages_by_rules(&self, words: &[&str], candidates: &mut HashSet<Language>) {
        for word in words {
            if Alphabet::Cyrillic.matches(word) {
                candidates.retain(|it| it.uses_cyrillic_alphabet());
            } else if Alphabet::Arabic.matches(word) {
                candidates.retain(|it| it.uses_arabic_alphabet());
            } else if Alphabet::Latin.matches(word) {
                candidates.retain(|it| it.uses_latin_alphabet());

                // With both written variants still in the race, the umbrella
                // language cannot win anything the variants would not cover.
                if candidates.contains(&Language::Bokmal)
                    && candidates.contains(&Language::Nynorsk)
                {
                    candidates.remove(&Language::Norwegian);
                }

                let mut languages_subset = hashset!();
                for (characters, languages) in CHARS_TO_LANGUAGES_MAPPING.iter() {
                    if word.chars().any(|character| characters.contains(character)) {
                        languages_subset.extend(languages.iter().copied());
                    }
                }
                if !languages_subset.is_empty() {
                    candidates.retain(|it| languages_subset.contains(it));
                }
            } else {
                continue;
            }
            // Rule filtering is a cheap triage. The first word written in one
            // of the scripts above decides; later words never refine it.
            return;
        }
    }

    fn compute_language_probabilities(
        &self,
        candidates: &HashSet<Language>,
        test_ngrams: &HashSet<NgramRef>,
    ) -> Result<HashMap<Language, f64>> {
        let mut probabilities = HashMap::with_capacity(candidates.len());
        for &language in candidates {
            let sum = self.compute_sum_of_ngram_probabilities(language, test_ngrams)?;
            probabilities.insert(language, sum);
        }
        Ok(probabilities)
    }

    fn compute_sum_of_ngram_probabilities(
        &self,
        language: Language,
        test_ngrams: &HashSet<NgramRef>,
    ) -> Result<f64> {
        let mut sum = 0.0;
        for ngram in test_ngrams {
            for lower_order_ngram in ngram.range_of_lower_order_ngrams() {
                let model = self.load_language_model(language, lower_order_ngram.char_count())?;
                if let Some(frequency) = model.get_relative_frequency(&lower_order_ngram) {
                    sum += frequency.ln();
                    break;
                }
            }
        }
        Ok(sum)
    }

    fn load_language_model(&self, language: Language, ngram_length: usize) -> Result<&NgramModel> {
        // Every enabled language has its model cells provisioned, either at
        // construction time or by add_language.
        let models = self.language_models.get(&language).unwrap();
        models[ngram_length - 1].get_or_try_init(|| {
            let ngram_name = Ngram::get_ngram_name_by_length(ngram_length);
            let json = self
                .model_store
                .read_model(language.iso_code_639_1(), &format!("{ngram_name}s"))
                .with_context(|| {
                    format!("the {ngram_name} model for {language:?} could not be loaded")
                })?;
            let model = NgramModel::from_json(&json, language, ngram_length)?;
            debug!(
                "loaded the {} model for {:?}",
                Ngram::get_ngram_name_by_length(model.ngram_length),
                model.language
            );
            Ok(model)
        })
    }
}

fn most_likely_language(total_probabilities: &HashMap<Language, f64>) -> Language {
    let mut most_likely_language = Language::Unknown;
    let mut highest_probability = f64::NEG_INFINITY;
    for (&language, &probability) in total_probabilities
        .iter()
        .sorted_by_key(|(&language, _)| language)
    {
        if probability > highest_probability {
            highest_probability = probability;
            most_likely_language = language;
        }
    }
    if highest_probability == 0.0 {
        // Unreachable as long as every accepted layer carries a non-zero sum
        // for every candidate; kept as a guard.
        return Language::Unknown;
    }
    most_likely_language
}

pub(crate) fn split_text_into_words(text: &str) -> Vec<&str> {
    if text.contains(' ') {
        text.split(' ').collect_vec()
    } else {
        vec![text]
    }
}
