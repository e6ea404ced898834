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

use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString};

/// This enum specifies the ISO 639-1 code representations for the supported languages.
///
/// ISO 639 is a standardized nomenclature used to classify languages.
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, EnumIter, EnumString, Eq, PartialEq, Hash, Ord, PartialOrd,
)]
#[allow(clippy::upper_case_acronyms)]
#[strum(ascii_case_insensitive)]
pub enum IsoCode639_1 {
    /// The ISO 639-1 code for [`Arabic`](crate::language::Language::Arabic)
    AR,
    /// The ISO 639-1 code for [`Belarusian`](crate::language::Language::Belarusian)
    BE,
    /// The ISO 639-1 code for [`Bulgarian`](crate::language::Language::Bulgarian)
    BG,
    /// The ISO 639-1 code for [`Catalan`](crate::language::Language::Catalan)
    CA,
    /// The ISO 639-1 code for [`Czech`](crate::language::Language::Czech)
    CS,
    /// The ISO 639-1 code for [`Danish`](crate::language::Language::Danish)
    DA,
    /// The ISO 639-1 code for [`German`](crate::language::Language::German)
    DE,
    /// The ISO 639-1 code for [`Greek`](crate::language::Language::Greek)
    EL,
    /// The ISO 639-1 code for [`English`](crate::language::Language::English)
    EN,
    /// The ISO 639-1 code for [`Spanish`](crate::language::Language::Spanish)
    ES,
    /// The ISO 639-1 code for [`Estonian`](crate::language::Language::Estonian)
    ET,
    /// The ISO 639-1 code for [`Persian`](crate::language::Language::Persian)
    FA,
    /// The ISO 639-1 code for [`Finnish`](crate::language::Language::Finnish)
    FI,
    /// The ISO 639-1 code for [`French`](crate::language::Language::French)
    FR,
    /// The ISO 639-1 code for [`Irish`](crate::language::Language::Irish)
    GA,
    /// The ISO 639-1 code for [`Croatian`](crate::language::Language::Croatian)
    HR,
    /// The ISO 639-1 code for [`Hungarian`](crate::language::Language::Hungarian)
    HU,
    /// The ISO 639-1 code for [`Icelandic`](crate::language::Language::Icelandic)
    IS,
    /// The ISO 639-1 code for [`Italian`](crate::language::Language::Italian)
    IT,
    /// The ISO 639-1 code for [`Lithuanian`](crate::language::Language::Lithuanian)
    LT,
    /// The ISO 639-1 code for [`Latvian`](crate::language::Language::Latvian)
    LV,
    /// The ISO 639-1 code for [`Bokmal`](crate::language::Language::Bokmal)
    NB,
    /// The ISO 639-1 code for [`Dutch`](crate::language::Language::Dutch)
    NL,
    /// The ISO 639-1 code for [`Nynorsk`](crate::language::Language::Nynorsk)
    NN,
    /// The ISO 639-1 code for [`Norwegian`](crate::language::Language::Norwegian)
    NO,
    /// The ISO 639-1 code for [`Polish`](crate::language::Language::Polish)
    PL,
    /// The ISO 639-1 code for [`Portuguese`](crate::language::Language::Portuguese)
    PT,
    /// The ISO 639-1 code for [`Romanian`](crate::language::Language::Romanian)
    RO,
    /// The ISO 639-1 code for [`Russian`](crate::language::Language::Russian)
    RU,
    /// The ISO 639-1 code for [`Slovak`](crate::language::Language::Slovak)
    SK,
    /// The ISO 639-1 code for [`Slovene`](crate::language::Language::Slovene)
    SL,
    /// The ISO 639-1 code for [`Albanian`](crate::language::Language::Albanian)
    SQ,
    /// The ISO 639-1 code for [`Swedish`](crate::language::Language::Swedish)
    SV,
    /// The ISO 639-1 code for [`Turkish`](crate::language::Language::Turkish)
    TR,
    /// The ISO 639-1 code for [`Vietnamese`](crate::language::Language::Vietnamese)
    VI,
}

/// This enum specifies the ISO 639-3 code representations for the supported languages.
///
/// ISO 639 is a standardized nomenclature used to classify languages.
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, EnumIter, EnumString, Eq, PartialEq, Hash, Ord, PartialOrd,
)]
#[allow(clippy::upper_case_acronyms)]
#[strum(ascii_case_insensitive)]
pub enum IsoCode639_3 {
    /// The ISO 639-3 code for [`Arabic`](crate::language::Language::Arabic)
    ARA,
    /// The ISO 639-3 code for [`Belarusian`](crate::language::Language::Belarusian)
    BEL,
    /// The ISO 639-3 code for [`Bulgarian`](crate::language::Language::Bulgarian)
    BUL,
    /// The ISO 639-3 code for [`Catalan`](crate::language::Language::Catalan)
    CAT,
    /// The ISO 639-3 code for [`Czech`](crate::language::Language::Czech)
    CES,
    /// The ISO 639-3 code for [`Danish`](crate::language::Language::Danish)
    DAN,
    /// The ISO 639-3 code for [`German`](crate::language::Language::German)
    DEU,
    /// The ISO 639-3 code for [`Greek`](crate::language::Language::Greek)
    ELL,
    /// The ISO 639-3 code for [`English`](crate::language::Language::English)
    ENG,
    /// The ISO 639-3 code for [`Estonian`](crate::language::Language::Estonian)
    EST,
    /// The ISO 639-3 code for [`Persian`](crate::language::Language::Persian)
    FAS,
    /// The ISO 639-3 code for [`Finnish`](crate::language::Language::Finnish)
    FIN,
    /// The ISO 639-3 code for [`French`](crate::language::Language::French)
    FRA,
    /// The ISO 639-3 code for [`Irish`](crate::language::Language::Irish)
    GLE,
    /// The ISO 639-3 code for [`Croatian`](crate::language::Language::Croatian)
    HRV,
    /// The ISO 639-3 code for [`Hungarian`](crate::language::Language::Hungarian)
    HUN,
    /// The ISO 639-3 code for [`Icelandic`](crate::language::Language::Icelandic)
    ISL,
    /// The ISO 639-3 code for [`Italian`](crate::language::Language::Italian)
    ITA,
    /// The ISO 639-3 code for [`Latvian`](crate::language::Language::Latvian)
    LAV,
    /// The ISO 639-3 code for [`Lithuanian`](crate::language::Language::Lithuanian)
    LIT,
    /// The ISO 639-3 code for [`Dutch`](crate::language::Language::Dutch)
    NLD,
    /// The ISO 639-3 code for [`Nynorsk`](crate::language::Language::Nynorsk)
    NNO,
    /// The ISO 639-3 code for [`Bokmal`](crate::language::Language::Bokmal)
    NOB,
    /// The ISO 639-3 code for [`Norwegian`](crate::language::Language::Norwegian)
    NOR,
    /// The ISO 639-3 code for [`Polish`](crate::language::Language::Polish)
    POL,
    /// The ISO 639-3 code for [`Portuguese`](crate::language::Language::Portuguese)
    POR,
    /// The ISO 639-3 code for [`Romanian`](crate::language::Language::Romanian)
    RON,
    /// The ISO 639-3 code for [`Russian`](crate::language::Language::Russian)
    RUS,
    /// The ISO 639-3 code for [`Slovak`](crate::language::Language::Slovak)
    SLK,
    /// The ISO 639-3 code for [`Slovene`](crate::language::Language::Slovene)
    SLV,
    /// The ISO 639-3 code for [`Spanish`](crate::language::Language::Spanish)
    SPA,
    /// The ISO 639-3 code for [`Albanian`](crate::language::Language::Albanian)
    SQI,
    /// The ISO 639-3 code for [`Swedish`](crate::language::Language::Swedish)
    SWE,
    /// The ISO 639-3 code for [`Turkish`](crate::language::Language::Turkish)
    TUR,
    /// The ISO 639-3 code for [`Vietnamese`](crate::language::Language::Vietnamese)
    VIE,
}

impl Display for IsoCode639_1 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let debug_repr = format!("{self:?}");
        write!(f, "{}", debug_repr.to_lowercase())
    }
}

impl Display for IsoCode639_3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let debug_repr = format!("{self:?}");
        write!(f, "{}", debug_repr.to_lowercase())
    }
}
