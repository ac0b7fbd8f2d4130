//! Generation settings and their validation.

use crate::classes::{AcceptMode, CharClass, ClassModes};
use crate::error::{ConfigError, ConfigWarning};
use crate::sampler::RMAX;

pub const DEFAULT_REPETITIONS: u32 = 5;
pub const DEFAULT_MIN_LENGTH: u32 = 16;
pub const DEFAULT_MAX_LENGTH: u32 = 32;

/// Everything that shapes a batch of passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationConfig {
    /// Number of passwords per batch.
    pub repetitions: u32,
    pub min_length: u32,
    pub max_length: u32,
    pub modes: ClassModes,
    /// Drop look-alike glyphs from the letter and digit classes.
    pub printable: bool,
    /// Replaces class-based selection entirely when set.
    pub custom_alphabet: Option<Vec<char>>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            modes: ClassModes::default(),
            printable: true,
            custom_alphabet: None,
        }
    }
}

impl GenerationConfig {
    /// Sets a fixed length (`min == max`).
    pub fn with_length(mut self, length: u32) -> Self {
        self.min_length = length;
        self.max_length = length;
        self
    }

    pub fn with_length_range(mut self, min: u32, max: u32) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    pub fn with_repetitions(mut self, repetitions: u32) -> Self {
        self.repetitions = repetitions;
        self
    }

    pub fn with_modes(mut self, modes: ClassModes) -> Self {
        self.modes = modes;
        self
    }

    pub fn with_mode(mut self, class: CharClass, mode: AcceptMode) -> Self {
        self.modes.set(class, mode);
        self
    }

    pub fn with_printable(mut self, printable: bool) -> Self {
        self.printable = printable;
        self
    }

    pub fn with_custom_alphabet(mut self, alphabet: &str) -> Self {
        self.custom_alphabet = Some(alphabet.chars().collect());
        self
    }

    /// Checks the numeric parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repetitions < 1 {
            return Err(ConfigError::InvalidRepetitions(self.repetitions));
        }
        if self.min_length < 1 {
            return Err(ConfigError::InvalidMinLength(self.min_length));
        }
        // The sampler's range tops out at RMAX.
        if self.max_length < 1 || self.max_length > RMAX {
            return Err(ConfigError::InvalidMaxLength(self.max_length));
        }
        if self.min_length > self.max_length {
            return Err(ConfigError::InvertedLengthRange {
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }

    /// Replaces unusable settings with defaults and reports each substitution.
    ///
    /// A blank custom alphabet is dropped. If that leaves no custom alphabet
    /// and every class is disallowed, the default class modes are restored.
    pub fn normalize(&mut self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.custom_alphabet.as_ref().is_some_and(Vec::is_empty) {
            self.custom_alphabet = None;
            warnings.push(ConfigWarning::BlankCustomAlphabet);
        }

        if self.custom_alphabet.is_none() && self.modes.all_disallowed() {
            self.modes = ClassModes::default();
            warnings.push(ConfigWarning::AllClassesDisallowed);
        }

        warnings
    }

    /// Alphabet in effect, if any.
    pub fn custom_alphabet(&self) -> Option<&[char]> {
        self.custom_alphabet.as_deref().filter(|a| !a.is_empty())
    }
}
