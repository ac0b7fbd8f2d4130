//! Built-in character classes, their glyph tables and accept modes.
//!
//! Table order is significant: a sampled index maps to a fixed glyph, so
//! reordering a table changes every password produced from a given seed.

use std::fmt;
use std::str::FromStr;

const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGIT: &[u8] = b"0123456789";
const UPPER_PRINTABLE: &[u8] = b"ABCDEFGHIJKLMNPQRSTUVWXYZ";
const LOWER_PRINTABLE: &[u8] = b"abcdefghijkmnopqrstuvwxyz";
const DIGIT_PRINTABLE: &[u8] = b"23456789";
const PUNCTUATION: &[u8] = b"`-=~!@#$%^&*()_+[]\\{}|;':\",./<>?";

/// One of the four built-in character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Punctuation,
}

impl CharClass {
    /// All classes, in the order the class draw maps `0..4` onto them.
    pub const ALL: [CharClass; 4] =
        [CharClass::Upper, CharClass::Lower, CharClass::Digit, CharClass::Punctuation];

    /// Maps a draw from `[0, 4)` to its class.
    #[inline]
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the glyphs this class draws from.
    ///
    /// With `printable` set, letters and digits lose their look-alikes
    /// (`O`, `l`, `0`, `1`). Punctuation is unaffected.
    pub const fn glyphs(self, printable: bool) -> &'static [u8] {
        match (self, printable) {
            (CharClass::Upper, false) => UPPER,
            (CharClass::Upper, true) => UPPER_PRINTABLE,
            (CharClass::Lower, false) => LOWER,
            (CharClass::Lower, true) => LOWER_PRINTABLE,
            (CharClass::Digit, false) => DIGIT,
            (CharClass::Digit, true) => DIGIT_PRINTABLE,
            (CharClass::Punctuation, _) => PUNCTUATION,
        }
    }

    /// Single-letter tag used in option summaries.
    pub const fn letter(self) -> char {
        match self {
            CharClass::Upper => 'U',
            CharClass::Lower => 'L',
            CharClass::Digit => 'D',
            CharClass::Punctuation => 'A',
        }
    }

    /// Returns the class a built-in glyph belongs to, if any.
    pub fn of(glyph: char) -> Option<Self> {
        if !glyph.is_ascii() {
            return None;
        }
        let b = glyph as u8;
        Self::ALL.into_iter().find(|class| class.glyphs(false).contains(&b))
    }
}

/// Per-class policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AcceptMode {
    /// Never used.
    Disallowed,
    /// May be used.
    Allowed,
    /// Must appear at least once.
    Forced,
}

impl AcceptMode {
    /// `-`, `+` or `=`, matching the option shorthand.
    pub const fn sigil(self) -> char {
        match self {
            AcceptMode::Disallowed => '-',
            AcceptMode::Allowed => '+',
            AcceptMode::Forced => '=',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid accept mode '{0}': expected YES, NO, or FORCE")]
pub struct ParseAcceptModeError(String);

impl FromStr for AcceptMode {
    type Err = ParseAcceptModeError;

    /// Accepts `yes`/`no`/`force` written either all-lowercase or all-uppercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NO" | "no" => Ok(AcceptMode::Disallowed),
            "YES" | "yes" => Ok(AcceptMode::Allowed),
            "FORCE" | "force" => Ok(AcceptMode::Forced),
            _ => Err(ParseAcceptModeError(s.to_string())),
        }
    }
}

/// Accept modes for all four classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassModes {
    pub upper: AcceptMode,
    pub lower: AcceptMode,
    pub digit: AcceptMode,
    pub punctuation: AcceptMode,
}

impl Default for ClassModes {
    /// Upper, lower and digit forced; punctuation disallowed.
    fn default() -> Self {
        Self {
            upper: AcceptMode::Forced,
            lower: AcceptMode::Forced,
            digit: AcceptMode::Forced,
            punctuation: AcceptMode::Disallowed,
        }
    }
}

impl ClassModes {
    /// Every class set to `mode`.
    pub const fn uniform(mode: AcceptMode) -> Self {
        Self { upper: mode, lower: mode, digit: mode, punctuation: mode }
    }

    pub const fn get(&self, class: CharClass) -> AcceptMode {
        match class {
            CharClass::Upper => self.upper,
            CharClass::Lower => self.lower,
            CharClass::Digit => self.digit,
            CharClass::Punctuation => self.punctuation,
        }
    }

    pub fn set(&mut self, class: CharClass, mode: AcceptMode) {
        match class {
            CharClass::Upper => self.upper = mode,
            CharClass::Lower => self.lower = mode,
            CharClass::Digit => self.digit = mode,
            CharClass::Punctuation => self.punctuation = mode,
        }
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, class: CharClass, mode: AcceptMode) -> Self {
        self.set(class, mode);
        self
    }

    /// Classes whose mode is [`AcceptMode::Forced`].
    pub fn forced(&self) -> ClassSet {
        self.matching(|mode| mode == AcceptMode::Forced)
    }

    /// Classes whose mode is anything but [`AcceptMode::Disallowed`].
    pub fn accepted(&self) -> ClassSet {
        self.matching(|mode| mode != AcceptMode::Disallowed)
    }

    pub fn all_disallowed(&self) -> bool {
        self.accepted().is_empty()
    }

    fn matching(&self, pred: impl Fn(AcceptMode) -> bool) -> ClassSet {
        CharClass::ALL.into_iter().filter(|&class| pred(self.get(class))).collect()
    }
}

impl fmt::Display for ClassModes {
    /// Renders as `=U =L =D -A`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in CharClass::ALL.into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}{}", self.get(class).sigil(), class.letter())?;
        }
        Ok(())
    }
}

/// A set of character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const EMPTY: ClassSet = ClassSet(0);

    #[inline]
    pub fn insert(&mut self, class: CharClass) {
        self.0 |= 1 << class.index();
    }

    #[inline]
    pub fn contains(self, class: CharClass) -> bool {
        self.0 & (1 << class.index()) != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Classes in `self` that are not in `other`.
    #[inline]
    pub fn difference(self, other: ClassSet) -> ClassSet {
        ClassSet(self.0 & !other.0)
    }

    pub fn iter(self) -> impl Iterator<Item = CharClass> {
        CharClass::ALL.into_iter().filter(move |&class| self.contains(class))
    }
}

impl FromIterator<CharClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> Self {
        let mut set = ClassSet::EMPTY;
        for class in iter {
            set.insert(class);
        }
        set
    }
}
