//! The long-lived service bundle: the dictionary index and phrase catalogue,
//! built once and shared behind an [`Arc`] for the lifetime of a process
//! (spec.md §5, "Concurrency & Resource Model").
//!
//! Grounded on the teacher's `database`/index-construction split: build is a
//! one-shot, fallible step kept separate from the read-only, `Send + Sync`
//! value every request then borrows.

use std::sync::{Arc, OnceLock};

use crate::dictionary::{loader, Dictionary};
use crate::dirs::Dirs;
use crate::error::Result;
use crate::phrase::PhraseCatalogue;
use crate::report_warn;
use crate::reporter::Reporter;

/// The indices a single analysis request reads from. Immutable once built;
/// every lookup takes `&self` (spec.md §5: "no locking on the read path").
#[derive(Debug, Default)]
pub struct Services {
    pub dictionary: Dictionary,
    pub phrases: PhraseCatalogue,
}

impl Services {
    /// Build the service bundle: load the word dictionary (required), merge
    /// in the names dictionary (best-effort — a missing names dictionary
    /// only disables the name-suffix fallback, it never fails the whole
    /// build), and construct the phrase catalogue in memory.
    pub fn build(dirs: &Dirs, reporter: &dyn Reporter) -> Result<Services> {
        let mut dictionary = loader::load_words(dirs, reporter)?;
        if let Err(err) = loader::load_names(dirs, reporter, &mut dictionary) {
            report_warn!(reporter, "names dictionary unavailable: {err}");
        }
        Ok(Services { dictionary, phrases: PhraseCatalogue::build() })
    }
}

static GLOBAL: OnceLock<Arc<Services>> = OnceLock::new();

/// Build the service bundle once and stash it behind a process-wide
/// [`OnceLock`], returning the shared handle. Subsequent calls return the
/// already-built instance regardless of their arguments.
pub fn global(dirs: &Dirs, reporter: &dyn Reporter) -> Result<Arc<Services>> {
    if let Some(existing) = GLOBAL.get() {
        return Ok(existing.clone());
    }
    let built = Arc::new(Services::build(dirs, reporter)?);
    Ok(GLOBAL.get_or_init(|| built).clone())
}
