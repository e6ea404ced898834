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

use crate::isocode::IsoCode639_1;
use anyhow::{anyhow, Context, Result};
use include_dir::{include_dir, Dir};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

static MODELS_DIRECTORY: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets/models");

/// Resolves language model resources.
///
/// A model resource is addressed by the ISO 639-1 code of its language and
/// the plural name of its n-gram order, one of `unigrams`, `bigrams`,
/// `trigrams`, `quadrigrams` and `fivegrams`. It decodes to a mapping from
/// n-grams to relative frequencies.
pub trait ModelStore: Send + Sync {
    /// Returns the raw JSON of the model resource for the given language
    /// and n-gram order.
    fn read_model(&self, iso_code: IsoCode639_1, ngram_name: &str) -> Result<String>;
}

/// A model store backed by a directory embedded into the binary at compile
/// time. The default store of [`LanguageDetectorBuilder`](crate::LanguageDetectorBuilder)
/// serves the crate's own `assets/models` directory which is populated by the
/// offline training pipeline.
pub struct EmbeddedModelStore {
    directory: &'static Dir<'static>,
}

impl EmbeddedModelStore {
    pub const fn new(directory: &'static Dir<'static>) -> Self {
        Self { directory }
    }

    pub(crate) fn bundled() -> Self {
        Self::new(&MODELS_DIRECTORY)
    }
}

impl ModelStore for EmbeddedModelStore {
    fn read_model(&self, iso_code: IsoCode639_1, ngram_name: &str) -> Result<String> {
        let file_path = format!("{iso_code}/{ngram_name}.json");
        let file = self.directory.get_file(&file_path).ok_or_else(|| {
            anyhow!("model file '{file_path}' is not part of the embedded directory")
        })?;
        let json = file
            .contents_utf8()
            .ok_or_else(|| anyhow!("model file '{file_path}' is not valid utf-8"))?;
        Ok(json.to_string())
    }
}

/// A model store reading from a model directory on disk, laid out as
/// `<root>/<iso 639-1 code>/<ngram name>.json`.
pub struct FileSystemModelStore {
    root: PathBuf,
}

impl FileSystemModelStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

impl ModelStore for FileSystemModelStore {
    fn read_model(&self, iso_code: IsoCode639_1, ngram_name: &str) -> Result<String> {
        let file_path = self
            .root
            .join(iso_code.to_string())
            .join(format!("{ngram_name}.json"));
        fs::read_to_string(&file_path)
            .with_context(|| format!("model file '{}' cannot be read", file_path.display()))
    }
}

/// A model store holding its resources in memory, for programmatically
/// created models.
#[derive(Default)]
pub struct InMemoryModelStore {
    models: HashMap<(IsoCode639_1, String), String>,
}

impl InMemoryModelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<S: Into<String>>(&mut self, iso_code: IsoCode639_1, ngram_name: &str, json: S) {
        self.models
            .insert((iso_code, ngram_name.to_string()), json.into());
    }
}

impl ModelStore for InMemoryModelStore {
    fn read_model(&self, iso_code: IsoCode639_1, ngram_name: &str) -> Result<String> {
        self.models
            .get(&(iso_code, ngram_name.to_string()))
            .cloned()
            .ok_or_else(|| anyhow!("no {ngram_name} model was stored for '{iso_code}'"))
    }
}
