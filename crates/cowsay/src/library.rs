//! Locating cowfiles: cowpath directories, zipped cow packs and the bundled set.
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use zip::ZipArchive;

use crate::{template::TemplateResource, CowError, Result};

/// Name of the cow used when none is requested.
pub const DEFAULT_COW: &str = "default";

const COW_EXTENSION: &str = "cow";

#[cfg(feature = "bundled")]
static BUNDLED: &[(&str, &str)] = &[
    ("bunny", include_str!("../cows/bunny.cow")),
    ("default", include_str!("../cows/default.cow")),
    ("eyes", include_str!("../cows/eyes.cow")),
    ("kitty", include_str!("../cows/kitty.cow")),
    ("moose", include_str!("../cows/moose.cow")),
    ("sheep", include_str!("../cows/sheep.cow")),
    ("small", include_str!("../cows/small.cow")),
    ("tux", include_str!("../cows/tux.cow")),
    ("www", include_str!("../cows/www.cow")),
];

#[cfg(not(feature = "bundled"))]
static BUNDLED: &[(&str, &str)] = &[];

/// Cows compiled into the library, as `(name, content)` pairs.
pub fn bundled() -> &'static [(&'static str, &'static str)] {
    BUNDLED
}

/// Resolves cow names to template resources.
///
/// Cowpath entries are searched in order, each being either a directory of
/// `.cow` files or a zip archive containing them. The bundled cows come last.
#[derive(Clone, Debug, Default)]
pub struct CowLibrary {
    cowpath: Vec<PathBuf>,
}

impl CowLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cowpath<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.cowpath.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn cowpath(&self) -> &[PathBuf] {
        &self.cowpath
    }

    /// Loads a cow by name, or directly from a path to a `.cow` file.
    ///
    /// Unreadable cowpath entries are skipped like in [`CowLibrary::list`].
    pub fn load(&self, name: &str) -> Result<TemplateResource> {
        if is_path_like(name) {
            let path = Path::new(name);
            if path.is_file() {
                log::debug!("loading cow from file {}", path.display());
                let content = fs::read_to_string(path)?;
                let stem = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| name.to_string());
                return Ok(TemplateResource::new(stem, content));
            }
            return Err(CowError::CowNotFound(name.to_string()));
        }

        for entry in &self.cowpath {
            let found = if is_archive(entry) {
                load_from_archive(entry, name)
            } else {
                load_from_dir(entry, name)
            };
            match found {
                Ok(Some(content)) => {
                    log::debug!("cow {name} found in {}", entry.display());
                    return Ok(TemplateResource::new(name, content));
                }
                Ok(None) => {}
                Err(err) => log::warn!("skipping cowpath entry {}: {err}", entry.display()),
            }
        }

        BUNDLED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(n, content)| {
                log::debug!("cow {name} is bundled");
                TemplateResource::new(*n, *content)
            })
            .ok_or_else(|| CowError::CowNotFound(name.to_string()))
    }

    /// Sorted names of all available cows. Unreadable cowpath entries are skipped.
    pub fn list(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        for entry in &self.cowpath {
            let listed = if is_archive(entry) {
                list_archive(entry)
            } else {
                list_dir(entry)
            };
            match listed {
                Ok(found) => names.extend(found),
                Err(err) => log::warn!("skipping cowpath entry {}: {err}", entry.display()),
            }
        }
        names.extend(BUNDLED.iter().map(|(n, _)| n.to_string()));
        names.into_iter().collect()
    }
}

fn is_path_like(name: &str) -> bool {
    name.contains('/') || name.contains(MAIN_SEPARATOR) || name.ends_with(".cow")
}

fn is_archive(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

/// Cow name for a file name, if it carries the `.cow` extension.
fn cow_name(file_name: &str) -> Option<String> {
    let path = Path::new(file_name);
    if path.extension()? != COW_EXTENSION {
        return None;
    }
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}

fn load_from_dir(dir: &Path, name: &str) -> Result<Option<String>> {
    let path = dir.join(format!("{name}.{COW_EXTENSION}"));
    if !path.is_file() {
        return Ok(None);
    }
    Ok(Some(fs::read_to_string(path)?))
}

fn open_archive(path: &Path) -> Result<ZipArchive<File>> {
    let file = File::open(path)?;
    ZipArchive::new(file).map_err(|e| CowError::Archive(format!("{}: {e}", path.display())))
}

fn load_from_archive(path: &Path, name: &str) -> Result<Option<String>> {
    if !path.is_file() {
        return Ok(None);
    }
    let mut archive = open_archive(path)?;
    for i in 0..archive.len() {
        let mut file = archive
            .by_index(i)
            .map_err(|e| CowError::Archive(format!("zip entry error: {e}")))?;
        if file.is_dir() || cow_name(file.name()).as_deref() != Some(name) {
            continue;
        }
        let mut content = String::new();
        file.read_to_string(&mut content)?;
        return Ok(Some(content));
    }
    Ok(None)
}

fn list_dir(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        if let Some(name) = cow_name(&entry.file_name().to_string_lossy()) {
            names.push(name);
        }
    }
    Ok(names)
}

fn list_archive(path: &Path) -> Result<Vec<String>> {
    let archive = open_archive(path)?;
    Ok(archive.file_names().filter_map(cow_name).collect())
}
