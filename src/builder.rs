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

use crate::detector::LanguageDetector;
use crate::isocode::{IsoCode639_1, IsoCode639_3};
use crate::language::Language;
use crate::storage::{EmbeddedModelStore, ModelStore};
use std::collections::HashSet;
use std::sync::Arc;

const MISSING_LANGUAGE_MESSAGE: &str = "LanguageDetector needs at least 2 languages to choose from";

/// This struct configures and creates an instance of [`LanguageDetector`].
pub struct LanguageDetectorBuilder {
    languages: HashSet<Language>,
    model_store: Option<Arc<dyn ModelStore>>,
    is_every_language_model_preloaded: bool,
}

impl LanguageDetectorBuilder {
    /// Creates and returns an instance of `LanguageDetectorBuilder`
    /// with all supported languages.
    pub fn from_all_languages() -> Self {
        Self::from(Language::all())
    }

    /// Creates and returns an instance of `LanguageDetectorBuilder`
    /// with all supported languages written in Arabic script.
    pub fn from_all_languages_with_arabic_script() -> Self {
        Self::from(Language::all_with_arabic_script())
    }

    /// Creates and returns an instance of `LanguageDetectorBuilder`
    /// with all supported languages written in Cyrillic script.
    pub fn from_all_languages_with_cyrillic_script() -> Self {
        Self::from(Language::all_with_cyrillic_script())
    }

    /// Creates and returns an instance of `LanguageDetectorBuilder`
    /// with all supported languages written in Latin script.
    pub fn from_all_languages_with_latin_script() -> Self {
        Self::from(Language::all_with_latin_script())
    }

    /// Creates and returns an instance of `LanguageDetectorBuilder`
    /// with all supported languages except those specified in `languages`.
    ///
    /// Panics if fewer than two languages remain.
    pub fn from_all_languages_without(languages: &[Language]) -> Self {
        let mut languages_to_load = Language::all();
        languages_to_load.retain(|it| !languages.contains(it));
        if languages_to_load.len() < 2 {
            panic!("{}", MISSING_LANGUAGE_MESSAGE);
        }
        Self::from(languages_to_load)
    }

    /// Creates and returns an instance of `LanguageDetectorBuilder`
    /// with the specified `languages`.
    ///
    /// Panics if fewer than two languages are specified or if
    /// [`Language::Unknown`] is among them.
    pub fn from_languages(languages: &[Language]) -> Self {
        if languages.contains(&Language::Unknown) {
            panic!("Unknown is not a language a detector can be built from");
        }
        if languages.len() < 2 {
            panic!("{}", MISSING_LANGUAGE_MESSAGE);
        }
        Self::from(languages.iter().copied().collect())
    }

    /// Creates and returns an instance of `LanguageDetectorBuilder`
    /// with the languages specified by the given ISO 639-1 codes.
    ///
    /// Panics if fewer than two codes are specified.
    pub fn from_iso_codes_639_1(iso_codes: &[IsoCode639_1]) -> Self {
        if iso_codes.len() < 2 {
            panic!("{}", MISSING_LANGUAGE_MESSAGE);
        }
        let languages = iso_codes
            .iter()
            .map(Language::from_iso_code_639_1)
            .collect::<HashSet<_>>();
        Self::from(languages)
    }

    /// Creates and returns an instance of `LanguageDetectorBuilder`
    /// with the languages specified by the given ISO 639-3 codes.
    ///
    /// Panics if fewer than two codes are specified.
    pub fn from_iso_codes_639_3(iso_codes: &[IsoCode639_3]) -> Self {
        if iso_codes.len() < 2 {
            panic!("{}", MISSING_LANGUAGE_MESSAGE);
        }
        let languages = iso_codes
            .iter()
            .map(Language::from_iso_code_639_3)
            .collect::<HashSet<_>>();
        Self::from(languages)
    }

    /// Configures the built detector to decode the models of all enabled
    /// languages at build time instead of on first use.
    pub fn with_preloaded_language_models(&mut self) -> &mut Self {
        self.is_every_language_model_preloaded = true;
        self
    }

    /// Configures the built detector to resolve its model resources through
    /// the given store instead of the crate's embedded model directory.
    pub fn with_model_store(&mut self, model_store: Arc<dyn ModelStore>) -> &mut Self {
        self.model_store = Some(model_store);
        self
    }

    /// Creates and returns the configured instance of [`LanguageDetector`].
    pub fn build(&mut self) -> LanguageDetector {
        let model_store = self
            .model_store
            .clone()
            .unwrap_or_else(|| Arc::new(EmbeddedModelStore::bundled()));
        let detector = LanguageDetector::from(self.languages.clone(), model_store);
        if self.is_every_language_model_preloaded {
            detector.preload_language_models();
        }
        detector
    }

    fn from(languages: HashSet<Language>) -> Self {
        Self {
            languages,
            model_store: None,
            is_every_language_model_preloaded: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language::*;
    use crate::storage::InMemoryModelStore;

    #[test]
    #[should_panic(expected = "LanguageDetector needs at least 2 languages to choose from")]
    fn test_detector_cannot_be_built_from_too_few_languages() {
        LanguageDetectorBuilder::from_languages(&[German]);
    }

    #[test]
    #[should_panic(expected = "Unknown is not a language a detector can be built from")]
    fn test_detector_cannot_be_built_from_unknown() {
        LanguageDetectorBuilder::from_languages(&[German, Unknown]);
    }

    #[test]
    #[should_panic(expected = "LanguageDetector needs at least 2 languages to choose from")]
    fn test_detector_cannot_be_built_from_too_few_iso_codes() {
        LanguageDetectorBuilder::from_iso_codes_639_1(&[IsoCode639_1::DE]);
    }

    #[test]
    fn test_detector_is_built_from_iso_codes() {
        let detector = LanguageDetectorBuilder::from_iso_codes_639_1(&[
            IsoCode639_1::DE,
            IsoCode639_1::SV,
        ])
        .build();
        assert_eq!(detector.detect_language_of("ß"), German);
    }

    #[test]
    fn test_rule_based_detection_works_without_any_models() {
        let detector =
            LanguageDetectorBuilder::from_languages(&[German, Greek, Spanish]).build();
        assert_eq!(detector.detect_language_of("ß"), German);
        assert_eq!(detector.detect_language_of("Αθήνα"), Greek);
        assert_eq!(detector.detect_language_of("¡Hola!"), Spanish);
    }

    #[test]
    fn test_detector_is_built_with_custom_model_store() {
        let mut store = InMemoryModelStore::new();
        for (ngram_name, json) in [
            ("unigrams", r#"{"language":"GERMAN","ngrams":{"1/10":"a b c d e f g h i"}}"#),
            ("bigrams", r#"{"language":"GERMAN","ngrams":{"1/10":"ab cd"}}"#),
            ("trigrams", r#"{"language":"GERMAN","ngrams":{"1/10":"abc"}}"#),
            ("quadrigrams", r#"{"language":"GERMAN","ngrams":{"1/10":"abcd"}}"#),
            ("fivegrams", r#"{"language":"GERMAN","ngrams":{"1/10":"abcde"}}"#),
        ] {
            store.insert(IsoCode639_1::DE, ngram_name, json);
        }
        for (ngram_name, json) in [
            ("unigrams", r#"{"language":"ENGLISH","ngrams":{"1/10":"a b c d e f g h i"}}"#),
            ("bigrams", r#"{"language":"ENGLISH","ngrams":{"1/10":"ab cd"}}"#),
            ("trigrams", r#"{"language":"ENGLISH","ngrams":{"1/10":"abc"}}"#),
            ("quadrigrams", r#"{"language":"ENGLISH","ngrams":{"1/10":"abcd"}}"#),
            ("fivegrams", r#"{"language":"ENGLISH","ngrams":{"1/10":"abcde"}}"#),
        ] {
            store.insert(IsoCode639_1::EN, ngram_name, json);
        }

        let detector = LanguageDetectorBuilder::from_languages(&[English, German])
            .with_model_store(Arc::new(store))
            .with_preloaded_language_models()
            .build();
        assert!(detector.try_detect_language_of("abcde").is_ok());
    }
}
