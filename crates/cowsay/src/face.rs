//! Cow faces and the mood registry.
//!
//! A [`Face`] is the pair of glyphs substituted for `$eyes` and `$tongue` in a
//! cow template. Faces come either from a [`Mood`] preset or from explicit
//! overrides; overrides always win over the preset field they replace.
use crate::{CowError, Result};

/// Eyes used when no mood or override is given.
pub const DEFAULT_EYES: &str = "oo";
/// Blank tongue, two columns wide like the eyes.
pub const DEFAULT_TONGUE: &str = "  ";

/// Columns reserved for eyes and tongue in the classic cowfiles.
const FACE_WIDTH: usize = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mood {
    Borg,
    Dead,
    Greedy,
    Paranoid,
    Stoned,
    Tired,
    Wired,
    Young,
}

struct Preset {
    mood: Mood,
    letter: char,
    eyes: &'static str,
    tongue: &'static str,
}

// Ordered by letter; this order is also the priority when several mood flags are set.
static PRESETS: [Preset; 8] = [
    Preset { mood: Mood::Borg, letter: 'b', eyes: "==", tongue: DEFAULT_TONGUE },
    Preset { mood: Mood::Dead, letter: 'd', eyes: "xx", tongue: "U " },
    Preset { mood: Mood::Greedy, letter: 'g', eyes: "$$", tongue: DEFAULT_TONGUE },
    Preset { mood: Mood::Paranoid, letter: 'p', eyes: "@@", tongue: DEFAULT_TONGUE },
    Preset { mood: Mood::Stoned, letter: 's', eyes: "**", tongue: "U " },
    Preset { mood: Mood::Tired, letter: 't', eyes: "--", tongue: DEFAULT_TONGUE },
    Preset { mood: Mood::Wired, letter: 'w', eyes: "OO", tongue: DEFAULT_TONGUE },
    Preset { mood: Mood::Young, letter: 'y', eyes: "..", tongue: DEFAULT_TONGUE },
];

impl Mood {
    /// All moods in their fixed enumeration order.
    pub const ALL: [Mood; 8] = [
        Mood::Borg,
        Mood::Dead,
        Mood::Greedy,
        Mood::Paranoid,
        Mood::Stoned,
        Mood::Tired,
        Mood::Wired,
        Mood::Young,
    ];

    pub fn from_letter(letter: char) -> Option<Mood> {
        PRESETS.iter().find(|p| p.letter == letter).map(|p| p.mood)
    }

    pub fn letter(self) -> char {
        self.preset().letter
    }

    pub fn name(self) -> &'static str {
        match self {
            Mood::Borg => "borg",
            Mood::Dead => "dead",
            Mood::Greedy => "greedy",
            Mood::Paranoid => "paranoid",
            Mood::Stoned => "stoned",
            Mood::Tired => "tired",
            Mood::Wired => "wired",
            Mood::Young => "young",
        }
    }

    pub fn face(self) -> Face {
        let preset = self.preset();
        Face {
            eyes: preset.eyes.to_string(),
            tongue: preset.tongue.to_string(),
        }
    }

    /// Picks the active mood from a set of requested flags.
    ///
    /// The first requested mood in [`Mood::ALL`] order wins.
    pub fn first_requested(requested: &[Mood]) -> Option<Mood> {
        Mood::ALL.into_iter().find(|m| requested.contains(m))
    }

    fn preset(self) -> &'static Preset {
        // PRESETS and Mood::ALL share the same order.
        &PRESETS[self as usize]
    }
}

/// Returns true iff `letter` names a registered mood.
pub fn is_known_mode(letter: char) -> bool {
    PRESETS.iter().any(|p| p.letter == letter)
}

/// Preset face for a mood letter, `None` for unknown letters.
pub fn preset_for(letter: char) -> Option<Face> {
    Mood::from_letter(letter).map(Mood::face)
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Face {
    eyes: String,
    tongue: String,
}

impl Default for Face {
    fn default() -> Self {
        Self {
            eyes: DEFAULT_EYES.to_string(),
            tongue: DEFAULT_TONGUE.to_string(),
        }
    }
}

impl Face {
    /// Resolves the face for one render.
    ///
    /// Starts from the preset of `mood` (or the default face) and applies the
    /// eyes/tongue overrides on top. Fails for an unregistered mood letter.
    pub fn resolve(mood: Option<char>, eyes: Option<&str>, tongue: Option<&str>) -> Result<Self> {
        let mut face = match mood {
            Some(letter) => preset_for(letter).ok_or(CowError::UnknownMode(letter))?,
            None => Face::default(),
        };
        if let Some(eyes) = eyes {
            face = face.with_eyes(eyes);
        }
        if let Some(tongue) = tongue {
            face = face.with_tongue(tongue);
        }
        Ok(face)
    }

    /// Overrides the eyes, keeping at most two characters. Empty input is ignored.
    pub fn with_eyes(mut self, eyes: &str) -> Self {
        if !eyes.is_empty() {
            self.eyes = eyes.chars().take(FACE_WIDTH).collect();
        }
        self
    }

    /// Overrides the tongue, keeping at most two characters. Empty input is ignored.
    pub fn with_tongue(mut self, tongue: &str) -> Self {
        if !tongue.is_empty() {
            self.tongue = tongue.chars().take(FACE_WIDTH).collect();
        }
        self
    }

    pub fn eyes(&self) -> &str {
        &self.eyes
    }

    pub fn tongue(&self) -> &str {
        &self.tongue
    }
}
