//! Pattern resolution
//!
//! Turns a root and a list of interval labels into a [`Pattern`]: every
//! label is looked up in the interval table (unknown labels are logged and
//! skipped), transposed onto the root, and tagged with its original label.
//! Chord and arpeggio patterns can be rotated into an inversion and then
//! rearranged into a drop voicing.

use crate::error::TheoryError;
use crate::models::{DropVoicing, Interval, Pattern, PatternKind, PatternLibrary, PatternTone, PitchClass};

/// Rotate a voicing left by `inversion` positions (modulo its length)
///
/// The first `inversion` elements move to the end in their original
/// order. Rotating by `k` and then by `n - k` restores the input.
pub fn invert<T: Clone>(voices: &[T], inversion: usize) -> Vec<T> {
    if voices.is_empty() {
        return Vec::new();
    }
    let mut rotated = voices.to_vec();
    rotated.rotate_left(inversion % voices.len());
    rotated
}

/// Rearrange a four-voice, low-to-high voicing into a drop voicing
///
/// The dropped voice moves to the bottom and is marked one octave down.
/// Voicings of any other size are returned unchanged (`None`).
pub fn drop_voicing(tones: &[PatternTone], drop: DropVoicing) -> Option<Vec<PatternTone>> {
    if tones.len() != 4 {
        return None;
    }
    let mut voiced = tones.to_vec();
    let mut dropped = voiced.remove(drop.dropped_index());
    dropped.octave_shift -= 1;
    voiced.insert(0, dropped);
    Some(voiced)
}

/// Resolve interval labels against a root
///
/// Returns `None` when not a single label could be resolved, since a
/// pattern is never empty. `inversion` and `drop` are ignored for scales
/// and explicit voicings.
pub fn resolve<S: AsRef<str>>(
    kind: PatternKind,
    name: &str,
    root: PitchClass,
    labels: &[S],
    inversion: usize,
    drop: Option<DropVoicing>,
) -> Option<Pattern> {
    let labels: Vec<&str> = labels.iter().map(|label| label.as_ref()).collect();
    let inversion = if kind.supports_inversion() && !labels.is_empty() {
        inversion % labels.len()
    } else {
        0
    };

    let mut tones: Vec<PatternTone> = invert(&labels, inversion)
        .into_iter()
        .filter_map(|label| {
            match Interval::parse(label) {
                Some(interval) => Some(PatternTone {
                    pitch_class: root.transpose(interval.semitones as i32),
                    interval,
                    octave_shift: 0,
                }),
                None => {
                    log::warn!("{} in {} '{}'; skipping", TheoryError::UnknownIntervalLabel(label.to_string()), kind, name);
                    None
                }
            }
        })
        .collect();

    if tones.is_empty() {
        log::warn!("{} '{}' has no resolvable intervals", kind, name);
        return None;
    }

    let mut applied_drop = None;
    if let Some(drop) = drop.filter(|_| kind.supports_inversion()) {
        match drop_voicing(&tones, drop) {
            Some(voiced) => {
                tones = voiced;
                applied_drop = Some(drop);
            }
            None => log::debug!("Drop voicing needs four voices; '{}' has {}", name, tones.len()),
        }
    }

    Some(Pattern {
        kind,
        name: name.to_string(),
        root,
        tones,
        inversion,
        drop: applied_drop,
    })
}

/// Look a pattern up in the library by name and resolve it on a named root
pub fn resolve_pattern(
    library: &PatternLibrary,
    kind: PatternKind,
    root_name: &str,
    pattern_name: &str,
    inversion: usize,
    drop: Option<DropVoicing>,
) -> Result<Pattern, TheoryError> {
    let root = PitchClass::from_name(root_name)?;
    let unknown = || TheoryError::UnknownPattern {
        kind,
        name: pattern_name.to_string(),
    };
    let labels = library.get(kind, pattern_name).ok_or_else(unknown)?;
    resolve(kind, pattern_name, root, labels, inversion, drop).ok_or_else(unknown)
}
