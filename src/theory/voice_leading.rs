//! Voice-leading analysis between two voicings
//!
//! Voicings are compared string by string. A `None` entry is a muted
//! string; unresolvable spellings are treated the same way. Each voice
//! moves by the shortest chromatic path, so no movement exceeds a tritone.

use serde::{Deserialize, Serialize};

use crate::models::PitchClass;

/// Direction a single voice moves
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Same,
}

/// Movement of one voice from the first voicing to the second
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoiceMovement {
    pub from: Option<PitchClass>,
    pub to: Option<PitchClass>,
    pub direction: Direction,

    /// Size of the movement, 0-6
    pub semitones: u8,

    /// Both voices sound and share a pitch class
    pub common_tone: bool,
}

impl VoiceMovement {
    fn between(from: Option<PitchClass>, to: Option<PitchClass>) -> Self {
        let (Some(a), Some(b)) = (from, to) else {
            return Self {
                from,
                to,
                direction: Direction::Same,
                semitones: 0,
                common_tone: false,
            };
        };

        let mut delta = b.value() as i8 - a.value() as i8;
        if delta > 6 {
            delta -= 12;
        } else if delta < -6 {
            delta += 12;
        }

        Self {
            from,
            to,
            direction: match delta {
                d if d > 0 => Direction::Up,
                d if d < 0 => Direction::Down,
                _ => Direction::Same,
            },
            semitones: delta.unsigned_abs(),
            common_tone: delta == 0,
        }
    }

    /// Both ends of the movement are sounding notes
    pub fn is_active(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }
}

/// Suggestions derived from the movement metrics
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Recommendation {
    /// No voice is held between the two chords
    KeepCommonTone,
    /// Some voice leaps more than a major third
    ReduceLeaps,
    /// Average movement per voice is above three semitones
    ReduceOverallMotion,
    /// Smoothness above 80
    Excellent,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoiceLeadingAnalysis {
    pub movements: Vec<VoiceMovement>,
    pub common_tones: usize,
    pub max_movement: u8,
    pub average_movement: f64,

    /// 0-100, higher is smoother
    pub smoothness: f64,

    pub recommendations: Vec<Recommendation>,
}

/// Compare two voicings given as per-string pitch classes
pub fn analyze(from: &[Option<PitchClass>], to: &[Option<PitchClass>]) -> VoiceLeadingAnalysis {
    let movements: Vec<VoiceMovement> = from
        .iter()
        .zip(to.iter())
        .map(|(&a, &b)| VoiceMovement::between(a, b))
        .collect();

    let common_tones = movements.iter().filter(|m| m.common_tone).count();
    let moving = movements.iter().filter(|m| m.is_active() && !m.common_tone);
    let total: u32 = moving.clone().map(|m| m.semitones as u32).sum();
    let max_movement = moving.map(|m| m.semitones).max().unwrap_or(0);

    let active = movements.iter().filter(|m| m.is_active()).count();
    let average_movement = if active > 0 {
        total as f64 / active as f64
    } else {
        0.0
    };
    let smoothness = (100.0 - average_movement * 10.0 - max_movement as f64 * 5.0).max(0.0);

    let mut recommendations = Vec::new();
    if common_tones == 0 {
        recommendations.push(Recommendation::KeepCommonTone);
    }
    if max_movement > 4 {
        recommendations.push(Recommendation::ReduceLeaps);
    }
    if average_movement > 3.0 {
        recommendations.push(Recommendation::ReduceOverallMotion);
    }
    if smoothness > 80.0 {
        recommendations.push(Recommendation::Excellent);
    }

    VoiceLeadingAnalysis {
        movements,
        common_tones,
        max_movement,
        average_movement,
        smoothness,
        recommendations,
    }
}

/// Compare two voicings given as per-string spellings ("x" or "" for muted)
pub fn analyze_names<S: AsRef<str>>(from: &[S], to: &[S]) -> VoiceLeadingAnalysis {
    analyze(&parse_voicing(from), &parse_voicing(to))
}

fn parse_voicing<S: AsRef<str>>(notes: &[S]) -> Vec<Option<PitchClass>> {
    notes
        .iter()
        .map(|note| {
            let note = note.as_ref().trim();
            if note.is_empty() || note.eq_ignore_ascii_case("x") {
                return None;
            }
            // Voicing tables may carry octave digits ("G3")
            let spelling = note.trim_end_matches(|c: char| c.is_ascii_digit());
            match PitchClass::from_name(spelling) {
                Ok(pc) => Some(pc),
                Err(e) => {
                    log::warn!("{}; treating the string as muted", e);
                    None
                }
            }
        })
        .collect()
}
