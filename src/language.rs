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
use crate::isocode::{IsoCode639_1, IsoCode639_3};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// This enum specifies the so far supported languages which can be detected,
/// plus the [`Unknown`](Language::Unknown) sentinel which is returned whenever
/// no decision can be made. `Unknown` can never be part of the set of languages
/// a detector is built from.
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, EnumIter, Eq, PartialEq, Hash, Ord, PartialOrd,
)]
#[serde(rename_all(serialize = "UPPERCASE", deserialize = "UPPERCASE"))]
pub enum Language {
    Albanian,
    Arabic,
    Belarusian,
    Bokmal,
    Bulgarian,
    Catalan,
    Croatian,
    Czech,
    Danish,
    Dutch,
    English,
    Estonian,
    Finnish,
    French,
    German,
    Greek,
    Hungarian,
    Icelandic,
    Irish,
    Italian,
    Latvian,
    Lithuanian,
    Norwegian,
    Nynorsk,
    Persian,
    Polish,
    Portuguese,
    Romanian,
    Russian,
    Slovak,
    Slovene,
    Spanish,
    Swedish,
    Turkish,
    Vietnamese,
    Unknown,
}

impl Language {
    /// Returns a set of all supported languages.
    pub fn all() -> HashSet<Language> {
        Language::iter()
            .filter(|it| it != &Language::Unknown)
            .collect()
    }

    /// Returns a set of all supported languages written in Arabic script.
    pub fn all_with_arabic_script() -> HashSet<Language> {
        Language::iter()
            .filter(|it| it.uses_arabic_alphabet())
            .collect()
    }

    /// Returns a set of all supported languages written in Cyrillic script.
    pub fn all_with_cyrillic_script() -> HashSet<Language> {
        Language::iter()
            .filter(|it| it.uses_cyrillic_alphabet())
            .collect()
    }

    /// Returns a set of all supported languages written in Latin script.
    pub fn all_with_latin_script() -> HashSet<Language> {
        Language::iter()
            .filter(|it| it.uses_latin_alphabet())
            .collect()
    }

    /// Returns the language associated with the given ISO 639-1 code.
    pub fn from_iso_code_639_1(iso_code: &IsoCode639_1) -> Language {
        Language::iter()
            .filter(|it| it != &Language::Unknown)
            .find(|it| &it.iso_code_639_1() == iso_code)
            .unwrap()
    }

    /// Returns the language associated with the given ISO 639-3 code.
    pub fn from_iso_code_639_3(iso_code: &IsoCode639_3) -> Language {
        Language::iter()
            .filter(|it| it != &Language::Unknown)
            .find(|it| &it.iso_code_639_3() == iso_code)
            .unwrap()
    }

    /// Returns the ISO 639-1 code of this language.
    ///
    /// Panics for [`Language::Unknown`] which has no such code.
    pub fn iso_code_639_1(&self) -> IsoCode639_1 {
        match self {
            Language::Albanian => IsoCode639_1::SQ,
            Language::Arabic => IsoCode639_1::AR,
            Language::Belarusian => IsoCode639_1::BE,
            Language::Bokmal => IsoCode639_1::NB,
            Language::Bulgarian => IsoCode639_1::BG,
            Language::Catalan => IsoCode639_1::CA,
            Language::Croatian => IsoCode639_1::HR,
            Language::Czech => IsoCode639_1::CS,
            Language::Danish => IsoCode639_1::DA,
            Language::Dutch => IsoCode639_1::NL,
            Language::English => IsoCode639_1::EN,
            Language::Estonian => IsoCode639_1::ET,
            Language::Finnish => IsoCode639_1::FI,
            Language::French => IsoCode639_1::FR,
            Language::German => IsoCode639_1::DE,
            Language::Greek => IsoCode639_1::EL,
            Language::Hungarian => IsoCode639_1::HU,
            Language::Icelandic => IsoCode639_1::IS,
            Language::Irish => IsoCode639_1::GA,
            Language::Italian => IsoCode639_1::IT,
            Language::Latvian => IsoCode639_1::LV,
            Language::Lithuanian => IsoCode639_1::LT,
            Language::Norwegian => IsoCode639_1::NO,
            Language::Nynorsk => IsoCode639_1::NN,
            Language::Persian => IsoCode639_1::FA,
            Language::Polish => IsoCode639_1::PL,
            Language::Portuguese => IsoCode639_1::PT,
            Language::Romanian => IsoCode639_1::RO,
            Language::Russian => IsoCode639_1::RU,
            Language::Slovak => IsoCode639_1::SK,
            Language::Slovene => IsoCode639_1::SL,
            Language::Spanish => IsoCode639_1::ES,
            Language::Swedish => IsoCode639_1::SV,
            Language::Turkish => IsoCode639_1::TR,
            Language::Vietnamese => IsoCode639_1::VI,
            Language::Unknown => panic!("the Unknown language has no ISO 639-1 code"),
        }
    }

    /// Returns the ISO 639-3 code of this language.
    ///
    /// Panics for [`Language::Unknown`] which has no such code.
    pub fn iso_code_639_3(&self) -> IsoCode639_3 {
        match self {
            Language::Albanian => IsoCode639_3::SQI,
            Language::Arabic => IsoCode639_3::ARA,
            Language::Belarusian => IsoCode639_3::BEL,
            Language::Bokmal => IsoCode639_3::NOB,
            Language::Bulgarian => IsoCode639_3::BUL,
            Language::Catalan => IsoCode639_3::CAT,
            Language::Croatian => IsoCode639_3::HRV,
            Language::Czech => IsoCode639_3::CES,
            Language::Danish => IsoCode639_3::DAN,
            Language::Dutch => IsoCode639_3::NLD,
            Language::English => IsoCode639_3::ENG,
            Language::Estonian => IsoCode639_3::EST,
            Language::Finnish => IsoCode639_3::FIN,
            Language::French => IsoCode639_3::FRA,
            Language::German => IsoCode639_3::DEU,
            Language::Greek => IsoCode639_3::ELL,
            Language::Hungarian => IsoCode639_3::HUN,
            Language::Icelandic => IsoCode639_3::ISL,
            Language::Irish => IsoCode639_3::GLE,
            Language::Italian => IsoCode639_3::ITA,
            Language::Latvian => IsoCode639_3::LAV,
            Language::Lithuanian => IsoCode639_3::LIT,
            Language::Norwegian => IsoCode639_3::NOR,
            Language::Nynorsk => IsoCode639_3::NNO,
            Language::Persian => IsoCode639_3::FAS,
            Language::Polish => IsoCode639_3::POL,
            Language::Portuguese => IsoCode639_3::POR,
            Language::Romanian => IsoCode639_3::RON,
            Language::Russian => IsoCode639_3::RUS,
            Language::Slovak => IsoCode639_3::SLK,
            Language::Slovene => IsoCode639_3::SLV,
            Language::Spanish => IsoCode639_3::SPA,
            Language::Swedish => IsoCode639_3::SWE,
            Language::Turkish => IsoCode639_3::TUR,
            Language::Vietnamese => IsoCode639_3::VIE,
            Language::Unknown => panic!("the Unknown language has no ISO 639-3 code"),
        }
    }

    pub(crate) fn alphabets(&self) -> HashSet<Alphabet> {
        match self {
            Language::Albanian
            | Language::Bokmal
            | Language::Catalan
            | Language::Croatian
            | Language::Czech
            | Language::Danish
            | Language::Dutch
            | Language::English
            | Language::Estonian
            | Language::Finnish
            | Language::French
            | Language::German
            | Language::Hungarian
            | Language::Icelandic
            | Language::Irish
            | Language::Italian
            | Language::Latvian
            | Language::Lithuanian
            | Language::Norwegian
            | Language::Nynorsk
            | Language::Polish
            | Language::Portuguese
            | Language::Romanian
            | Language::Slovak
            | Language::Slovene
            | Language::Spanish
            | Language::Swedish
            | Language::Turkish
            | Language::Vietnamese => hashset!(Alphabet::Latin),

            Language::Belarusian | Language::Bulgarian | Language::Russian => {
                hashset!(Alphabet::Cyrillic)
            }

            Language::Arabic | Language::Persian => hashset!(Alphabet::Arabic),

            Language::Greek => hashset!(Alphabet::Greek),

            Language::Unknown => hashset!(),
        }
    }

    /// Reports whether this language is written in Latin script.
    pub fn uses_latin_alphabet(&self) -> bool {
        self.alphabets().contains(&Alphabet::Latin)
    }

    /// Reports whether this language is written in Cyrillic script.
    pub fn uses_cyrillic_alphabet(&self) -> bool {
        self.alphabets().contains(&Alphabet::Cyrillic)
    }

    /// Reports whether this language is written in Arabic script.
    pub fn uses_arabic_alphabet(&self) -> bool {
        self.alphabets().contains(&Alphabet::Arabic)
    }
}
