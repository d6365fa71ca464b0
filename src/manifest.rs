// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::ManifestError;

pub const MANIFEST_FILENAME: &str = "site.json";

/// Record of the last successful generation, stored next to the pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteManifest {
    pub api_url: String,
    pub episode_count: usize,
    pub revalidate_secs: u64,
    pub content_hash: String,
    pub generated_at: String,
}

impl SiteManifest {
    pub fn new(api_url: &str, episode_count: usize, revalidate_secs: u64, home_html: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            episode_count,
            revalidate_secs,
            content_hash: content_hash(home_html),
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Hash of rendered page content in the form `sha256:<hex>`
pub fn content_hash(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    format!("sha256:{}", hex::encode(digest))
}

/// Write the manifest to the output directory
pub fn write_manifest(manifest: &SiteManifest, output_dir: &Path) -> Result<(), ManifestError> {
    let path = output_dir.join(MANIFEST_FILENAME);

    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(&path, json).map_err(|e| ManifestError::WriteFailed { path, source: e })
}

/// Read the manifest from the output directory
pub fn read_manifest(output_dir: &Path) -> Result<SiteManifest, ManifestError> {
    let path = output_dir.join(MANIFEST_FILENAME);

    let content = std::fs::read_to_string(&path).map_err(|e| ManifestError::ReadFailed {
        path: path.clone(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ManifestError::JsonParseFailed { path, source: e })
}
