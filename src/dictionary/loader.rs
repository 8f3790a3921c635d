//! Loading and automatic provisioning of the dictionary JSON files: plain or
//! gzipped for the general dictionary, zipped for the names dictionary, with
//! conventional-path probing and a GitHub-release auto-download fallback.
//!
//! Grounded on `original_source/services/jmdict.py`'s `_find_and_load`/
//! `_download_latest`/`_get_latest_release_info`/`_find_and_load_names`/
//! `_download_latest_names`.

use std::io::Read;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::dirs::Dirs;
use crate::error::{KernelError, Result};
use crate::report_info;
use crate::reporter::Reporter;

use super::schema::Dump;
use super::Dictionary;

const RELEASES_API: &str = "https://api.github.com/repos/scriptin/jmdict-simplified/releases/latest";
const WORD_ASSET_PATTERN: &str = r"^jmdict-eng-\d+\.\d+\.\d+\.json\.gz$";
const NAME_ASSET_PATTERN: &str = r"^jmnedict-all-.*\.json\.zip$";

/// Parse a JSON dump from a path that may be plain JSON or gzip-compressed
/// (detected by the `.gz` extension, per `jmdict.py::_load`).
fn read_dump(path: &Path) -> Result<Dump> {
    if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        let file = std::fs::File::open(path)?;
        let mut decoder = flate2::read::GzDecoder::new(file);
        let mut text = String::new();
        decoder.read_to_string(&mut text)?;
        Ok(serde_json::from_str(&text)?)
    } else {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Parse a names dump from a zip archive containing exactly one `.json`
/// member, per `jmdict.py::_load_names`'s zip-extraction behavior.
fn read_name_zip(path: &Path) -> Result<Dump> {
    let file = std::fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    for i in 0..archive.len() {
        let mut member = archive.by_index(i)?;
        if member.name().ends_with(".json") {
            let mut text = String::new();
            member.read_to_string(&mut text)?;
            return Ok(serde_json::from_str(&text)?);
        }
    }
    Err(KernelError::DictionaryUnavailable {
        reason: format!("no .json member in {}", path.display()),
    })
}

/// Conventional local paths probed before falling back to a download,
/// mirroring `jmdict.py::_find_and_load`'s `search_paths` list.
fn candidate_paths(dirs: &Dirs, stem: &str, ext: &str) -> Vec<PathBuf> {
    vec![
        PathBuf::from(format!("data/{stem}.{ext}")),
        PathBuf::from(format!("./data/{stem}-eng.{ext}")),
        dirs.cache_dir(format!("{stem}.{ext}")),
    ]
}

#[cfg(feature = "download")]
fn fetch_latest_release_asset(pattern: &str) -> Result<(String, String)> {
    let client = reqwest::blocking::Client::builder()
        .user_agent("kaiseki")
        .build()
        .map_err(|e| KernelError::DictionaryUnavailable { reason: e.to_string() })?;

    let response: serde_json::Value = client
        .get(RELEASES_API)
        .header("Accept", "application/vnd.github.v3+json")
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| KernelError::DictionaryUnavailable { reason: e.to_string() })?
        .json()
        .map_err(|e| KernelError::DictionaryUnavailable { reason: e.to_string() })?;

    let version = response
        .get("tag_name")
        .and_then(|v| v.as_str())
        .unwrap_or("unknown")
        .to_string();

    let re = Regex::new(pattern).expect("static pattern is valid");
    let assets = response.get("assets").and_then(|a| a.as_array()).cloned().unwrap_or_default();

    for asset in assets {
        let Some(name) = asset.get("name").and_then(|n| n.as_str()) else {
            continue;
        };
        if re.is_match(name) {
            if let Some(url) = asset.get("browser_download_url").and_then(|u| u.as_str()) {
                return Ok((url.to_string(), version));
            }
        }
    }

    Err(KernelError::DictionaryUnavailable {
        reason: "no matching release asset found".to_string(),
    })
}

#[cfg(feature = "download")]
fn download_to(url: &str, target: &Path) -> Result<()> {
    let client = reqwest::blocking::Client::builder()
        .user_agent("kaiseki")
        .build()
        .map_err(|e| KernelError::DictionaryUnavailable { reason: e.to_string() })?;
    let mut response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| KernelError::DictionaryUnavailable { reason: e.to_string() })?;

    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::File::create(target)?;
    std::io::copy(&mut response, &mut file)?;
    Ok(())
}

#[cfg(not(feature = "download"))]
fn fetch_latest_release_asset(_pattern: &str) -> Result<(String, String)> {
    Err(KernelError::DictionaryUnavailable {
        reason: "auto-download disabled (feature `download` not enabled)".to_string(),
    })
}

/// Load the general word dictionary, probing conventional paths and then
/// auto-downloading as a last resort. Grounded on `jmdict.py::_find_and_load`.
pub fn load_words(dirs: &Dirs, reporter: &dyn Reporter) -> Result<Dictionary> {
    for ext in ["json", "json.gz"] {
        for path in candidate_paths(dirs, "jmdict-eng", ext) {
            if path.exists() {
                report_info!(reporter, "loading dictionary from {}", path.display());
                let dump = read_dump(&path)?;
                return Ok(Dictionary::from_word_dump(dump));
            }
        }
    }

    report_info!(reporter, "dictionary not found locally, attempting download");
    let (url, version) = fetch_latest_release_asset(WORD_ASSET_PATTERN)?;
    report_info!(reporter, "downloading jmdict {version}");
    let target = dirs.cache_dir("jmdict-eng.json.gz");
    download_to(&url, &target)?;
    let dump = read_dump(&target)?;
    Ok(Dictionary::from_word_dump(dump))
}

/// Load the names dictionary into an existing [`Dictionary`]. A failure here
/// is non-fatal: the pipeline simply has no name-suffix fallback available
/// (spec.md §7, `DictionaryUnavailable` is reported but not propagated by
/// callers that treat names as a nice-to-have).
pub fn load_names(dirs: &Dirs, reporter: &dyn Reporter, dict: &mut Dictionary) -> Result<()> {
    for ext in ["json", "json.gz"] {
        for path in candidate_paths(dirs, "jmnedict-eng", ext) {
            if path.exists() {
                report_info!(reporter, "loading names from {}", path.display());
                let dump = read_dump(&path)?;
                dict.merge_name_dump(dump);
                return Ok(());
            }
        }
    }
    for path in candidate_paths(dirs, "jmnedict-all", "json.zip") {
        if path.exists() {
            report_info!(reporter, "loading names from {}", path.display());
            let dump = read_name_zip(&path)?;
            dict.merge_name_dump(dump);
            return Ok(());
        }
    }

    report_info!(reporter, "names dictionary not found locally, attempting download");
    let (url, version) = fetch_latest_release_asset(NAME_ASSET_PATTERN)?;
    report_info!(reporter, "downloading jmnedict {version}");
    let zip_target = dirs.cache_dir("jmnedict-all.json.zip");
    download_to(&url, &zip_target)?;
    let dump = read_name_zip(&zip_target)?;
    dict.merge_name_dump(dump);
    Ok(())
}
