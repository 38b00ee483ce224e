// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Answer validation.

use crate::catalog::Fingering;

/// Check a candidate against the accepted fingerings for a note.
///
/// The candidate must equal one accepted pattern element for element.
/// A candidate of the wrong arity simply matches nothing.
pub fn is_correct(accepted: &[Fingering], candidate: &Fingering) -> bool {
    accepted
        .iter()
        .any(|pattern| pattern.as_slice() == candidate.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{get_catalog, Difficulty, Instrument};

    #[test]
    fn test_trumpet_c4() {
        let catalog = get_catalog(Instrument::Trumpet, Difficulty::Beginner);
        let accepted = catalog.get("C4").unwrap();

        assert!(is_correct(accepted, &Fingering::Valves([0, 0, 0])));
        assert!(!is_correct(accepted, &Fingering::Valves([1, 0, 0])));
    }

    #[test]
    fn test_any_alternate_accepted() {
        let accepted = [Fingering::Valves([1, 2, 0]), Fingering::Valves([0, 0, 1])];
        assert!(is_correct(&accepted, &Fingering::Valves([1, 2, 0])));
        assert!(is_correct(&accepted, &Fingering::Valves([0, 0, 1])));
        assert!(!is_correct(&accepted, &Fingering::Valves([1, 1, 0])));
    }

    #[test]
    fn test_half_valve_is_distinct() {
        let accepted = [Fingering::Valves([1, 2, 0])];
        assert!(!is_correct(&accepted, &Fingering::Valves([1, 1, 0])));
    }

    #[test]
    fn test_arity_mismatch_is_incorrect() {
        let accepted = [Fingering::Slide(1)];
        assert!(!is_correct(&accepted, &Fingering::Valves([1, 0, 0])));

        let accepted = [Fingering::Valves([0, 0, 0])];
        assert!(!is_correct(&accepted, &Fingering::Slide(0)));
    }

    #[test]
    fn test_empty_accepted_set() {
        assert!(!is_correct(&[], &Fingering::Slide(3)));
    }

    #[test]
    fn test_trombone_c3() {
        let catalog = get_catalog(Instrument::Trombone, Difficulty::Beginner);
        let accepted = catalog.get("C3").unwrap();

        assert!(is_correct(accepted, &Fingering::Slide(6)));
        assert!(!is_correct(accepted, &Fingering::Slide(1)));
        assert!(!is_correct(accepted, &Fingering::NO_SLIDE));
    }
}
