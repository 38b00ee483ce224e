// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Range filtering for catalogs.

use tracing::debug;

use super::Catalog;
use crate::music::{note_to_pitch, Pitch};

/// Keep the entries whose pitch lies in `[min, max]` inclusive.
///
/// Entries whose note cannot be parsed are skipped, since they cannot be
/// range-checked.
pub fn filter_by_range(catalog: &Catalog, min: Pitch, max: Pitch) -> Catalog {
    let entries = catalog
        .entries()
        .iter()
        .filter(|entry| match note_to_pitch(entry.note) {
            Ok(pitch) => pitch >= min && pitch <= max,
            Err(err) => {
                debug!(note = entry.note, %err, "Skipping malformed catalog entry");
                false
            }
        })
        .copied()
        .collect();

    Catalog::from_entries(entries)
}
