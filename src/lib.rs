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

//! ## Language detection for European languages
//!
//! *Glossa* identifies the natural language of a text from a fixed set of
//! supported languages. Detection is layered: cheap rules based on Unicode
//! scripts and language-distinctive characters either decide the language
//! outright or narrow the candidate set, and a character n-gram model
//! (n = 1..5) ranks the remaining candidates by the summed log-likelihoods
//! of the n-grams occurring in the text.
//!
//! ```no_run
//! use glossa::{Language, LanguageDetectorBuilder};
//!
//! let detector = LanguageDetectorBuilder::from_languages(&[
//!     Language::English,
//!     Language::French,
//!     Language::German,
//!     Language::Spanish,
//! ])
//! .build();
//!
//! assert_eq!(
//!     detector.detect_language_of("languages are awesome"),
//!     Language::English
//! );
//! ```
//!
//! If no decision can be made, [`Language::Unknown`] is returned. Language
//! models are decoded lazily on first use and cached for the lifetime of the
//! detector; [`LanguageDetectorBuilder::with_preloaded_language_models`]
//! decodes them eagerly instead.

#[macro_use]
extern crate maplit;

mod alphabet;
mod builder;
mod constant;
mod detector;
mod fraction;
mod isocode;
mod language;
mod model;
mod ngram;
mod storage;

pub use builder::LanguageDetectorBuilder;
pub use detector::LanguageDetector;
pub use isocode::{IsoCode639_1, IsoCode639_3};
pub use language::Language;
pub use storage::{EmbeddedModelStore, FileSystemModelStore, InMemoryModelStore, ModelStore};
