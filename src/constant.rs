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

use crate::language::Language;
use crate::language::Language::*;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

pub(crate) static NO_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new("^[^\\p{L}]+$").unwrap());

/// Characters which occur in exactly one supported language. A word containing
/// one of them decides the detection without any scoring. The table is scanned
/// in definition order; the first match wins.
pub(crate) static CHARS_TO_SINGLE_LANGUAGE_MAPPING: Lazy<Vec<(&'static str, Language)>> =
    Lazy::new(|| {
        vec![
            ("Ëë", Albanian),
            ("Ïï", Catalan),
            ("ĚěŘřŮů", Czech),
            ("ß", German),
            ("ŐőŰű", Hungarian),
            ("ĀāĒēĢģĪīĶķĻļŅņ", Latvian),
            ("ĖėĮįŲų", Lithuanian),
            ("ŁłŃńŚśŹź", Polish),
            ("Țţ", Romanian),
            ("ĹĺĽľŔŕ", Slovak),
            ("¿¡", Spanish),
            ("İıĞğ", Turkish),
            (
                "ẰằẦầẲẳẨẩẴẵẪẫẮắẤấẠạẶặẬậỀềẺẻỂểẼẽỄễẾếỆệỈỉĨĩỊịƠơỒồỜờỎỏỔổỞởỖỗỠỡỐốỚớỘộỢợƯưỪừỦủỬửŨũỮữỨứỤụỰựỲỳỶỷỸỹỴỵ",
                Vietnamese,
            ),
        ]
    });

/// Characters which are shared between a handful of supported languages.
/// A word containing one of them restricts the candidate set to the union of
/// the associated languages.
pub(crate) static CHARS_TO_LANGUAGES_MAPPING: Lazy<HashMap<&'static str, HashSet<Language>>> =
    Lazy::new(|| {
        hashmap!(
            "Іі" => hashset!(Belarusian),
            "Ññ" => hashset!(Spanish),

            "Ãã" => hashset!(Portuguese, Vietnamese),
            "ĄąĘę" => hashset!(Lithuanian, Polish),
            "Żż" => hashset!(Polish, Romanian),
            "Îî" => hashset!(French, Romanian),
            "ŇňŤť" => hashset!(Czech, Slovak),
            "Ăă" => hashset!(Romanian, Vietnamese),
            "Ūū" => hashset!(Latvian, Lithuanian),
            "Şş" => hashset!(Romanian, Turkish),
            "Ćć" => hashset!(Croatian, Polish),
            "Đđ" => hashset!(Croatian, Vietnamese),
            "Ìì" => hashset!(Italian, Vietnamese),
            "ЁёЫыЭэ" => hashset!(Belarusian, Russian),
            "ЩщЪъ" => hashset!(Bulgarian, Russian),

            "Ďď" => hashset!(Czech, Romanian, Slovak),
            "ÐðÞþ" => hashset!(Icelandic, Latvian, Turkish),
            "Ûû" => hashset!(French, Hungarian, Latvian),
            "ÈèÙù" => hashset!(French, Italian, Vietnamese),
            "Êê" => hashset!(French, Portuguese, Vietnamese),
            "ЙйЬьЮюЧчЯя" => hashset!(Belarusian, Bulgarian, Russian),

            "Õõ" => hashset!(Estonian, Hungarian, Portuguese, Vietnamese),
            "Ôô" => hashset!(French, Portuguese, Slovak, Vietnamese),
            "Øø" => hashset!(Bokmal, Danish, Norwegian, Nynorsk),
            "Òò" => hashset!(Catalan, Italian, Latvian, Vietnamese),

            "Ýý" => hashset!(Czech, Icelandic, Slovak, Turkish, Vietnamese),
            "Ää" => hashset!(Estonian, Finnish, German, Slovak, Swedish),
            "Ââ" => hashset!(Latvian, Portuguese, Romanian, Turkish, Vietnamese),
            "Àà" => hashset!(Catalan, French, Italian, Portuguese, Vietnamese),
            "Ææ" => hashset!(Bokmal, Danish, Icelandic, Norwegian, Nynorsk),
            "Åå" => hashset!(Bokmal, Danish, Norwegian, Nynorsk, Swedish),
            "Üü" => hashset!(Catalan, Estonian, German, Hungarian, Turkish),

            "ČčŠšŽž" => hashset!(Croatian, Czech, Latvian, Lithuanian, Slovak, Slovene),
            "Çç" => hashset!(Albanian, Catalan, French, Latvian, Portuguese, Turkish),

            "Öö" => hashset!(
                Estonian, Finnish, German, Hungarian, Icelandic, Swedish, Turkish
            ),

            "Óó" => hashset!(
                Catalan, Hungarian, Icelandic, Irish, Polish, Portuguese, Slovak, Vietnamese
            ),
            "ÁáÍíÚú" => hashset!(
                Catalan, Czech, Hungarian, Icelandic, Irish, Portuguese, Slovak, Vietnamese
            ),

            "Éé" => hashset!(
                Catalan, Czech, French, Hungarian, Icelandic, Irish, Italian, Portuguese, Slovak,
                Vietnamese
            )
        )
    });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assert_single_language_table_order_is_stable() {
        let languages = CHARS_TO_SINGLE_LANGUAGE_MAPPING
            .iter()
            .map(|(_, language)| *language)
            .collect::<Vec<_>>();
        assert_eq!(
            languages,
            vec![
                Albanian, Catalan, Czech, German, Hungarian, Latvian, Lithuanian, Polish,
                Romanian, Slovak, Spanish, Turkish, Vietnamese
            ]
        );
    }

    #[test]
    fn assert_scandinavian_characters_map_to_all_norwegian_variants() {
        assert_eq!(
            CHARS_TO_LANGUAGES_MAPPING["Åå"],
            hashset!(Bokmal, Danish, Norwegian, Nynorsk, Swedish)
        );
    }

    #[test]
    fn assert_acute_e_maps_to_expected_languages() {
        assert_eq!(
            CHARS_TO_LANGUAGES_MAPPING["Éé"],
            hashset!(
                Catalan, Czech, French, Hungarian, Icelandic, Irish, Italian, Portuguese, Slovak,
                Vietnamese
            )
        );
    }

    #[test]
    fn assert_mapped_languages_are_supported() {
        for (_, language) in CHARS_TO_SINGLE_LANGUAGE_MAPPING.iter() {
            assert!(Language::all().contains(language));
        }
        for languages in CHARS_TO_LANGUAGES_MAPPING.values() {
            for language in languages {
                assert!(Language::all().contains(language));
            }
        }
    }
}
