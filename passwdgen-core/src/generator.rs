//! Constraint-driven password generation.
//!
//! Each password is built left to right. With a custom alphabet every glyph
//! is a flat uniform pick from it. Otherwise each position first works out
//! which classes it may draw from: forced classes that have not appeared yet
//! take priority, and once all of them have appeared every non-disallowed
//! class is eligible again. A class is then chosen by rejection over the fixed
//! four-way class draw, and a glyph is drawn from that class's table. The
//! finished buffer is shuffled so forced glyphs don't cluster at the front.

use tracing::{debug, trace};

use crate::classes::{CharClass, ClassModes, ClassSet};
use crate::config::GenerationConfig;
use crate::engine::{Engine, Xoshiro256PlusPlus};
use crate::error::{ConfigError, ConfigWarning};
use crate::sampler::{pick, uniform_int};
use crate::shuffle::permute;

/// A password under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordBuffer {
    glyphs: Vec<char>,
    satisfied: ClassSet,
}

impl PasswordBuffer {
    pub fn with_capacity(len: usize) -> Self {
        Self { glyphs: Vec::with_capacity(len), satisfied: ClassSet::EMPTY }
    }

    /// Classes the next draw may choose from.
    ///
    /// Forced classes without a glyph yet, if there are any; otherwise every
    /// class that isn't disallowed.
    pub fn eligible(&self, modes: &ClassModes) -> ClassSet {
        let pending = modes.forced().difference(self.satisfied);
        if pending.is_empty() { modes.accepted() } else { pending }
    }

    /// Classes that have placed at least one glyph.
    pub fn satisfied(&self) -> ClassSet {
        self.satisfied
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    fn push(&mut self, glyph: char) {
        self.glyphs.push(glyph);
    }

    fn push_from(&mut self, class: CharClass, glyph: char) {
        self.glyphs.push(glyph);
        self.satisfied.insert(class);
    }

    fn shuffle<E: Engine + ?Sized>(&mut self, engine: &mut E) {
        permute(engine, &mut self.glyphs);
    }

    pub fn into_string(self) -> String {
        self.glyphs.into_iter().collect()
    }
}

/// Produces passwords for one validated configuration from one engine.
///
/// The engine is owned; independent generators never share state.
#[derive(Debug, Clone)]
pub struct PasswordGenerator<E = Xoshiro256PlusPlus> {
    engine: E,
    config: GenerationConfig,
    warnings: Vec<ConfigWarning>,
}

impl PasswordGenerator<Xoshiro256PlusPlus> {
    /// Builds a generator on the default engine seeded with `seed`.
    pub fn from_seed(config: GenerationConfig, seed: u32) -> Result<Self, ConfigError> {
        Self::new(config, Xoshiro256PlusPlus::from_seed(seed))
    }
}

impl<E: Engine> PasswordGenerator<E> {
    /// Validates and normalizes `config`.
    ///
    /// Substitutions made during normalization are available from
    /// [`warnings`](Self::warnings); surfacing them is up to the caller.
    pub fn new(mut config: GenerationConfig, engine: E) -> Result<Self, ConfigError> {
        config.validate()?;
        let warnings = config.normalize();

        debug!(
            min_length = config.min_length,
            max_length = config.max_length,
            repetitions = config.repetitions,
            modes = %config.modes,
            printable = config.printable,
            custom_alphabet = ?config.custom_alphabet().map(<[char]>::len),
            "generator configured"
        );

        Ok(Self { engine, config, warnings })
    }

    /// The configuration in effect, after normalization.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Draws the length of the next password.
    ///
    /// A fixed range skips the sampler. Otherwise the result lies in
    /// `[min, max - 1]`: `max` itself is only reachable when `min == max`.
    pub fn choose_length(&mut self) -> usize {
        let (min, max) = (self.config.min_length, self.config.max_length);
        if min == max {
            return max as usize;
        }
        (uniform_int(&mut self.engine, max - min) + min) as usize
    }

    /// Generates one password.
    pub fn generate(&mut self) -> String {
        let length = self.choose_length();
        trace!(length, "generating password");
        self.generate_with_length(length).into_string()
    }

    /// Generates `repetitions` passwords, in order.
    pub fn generate_batch(&mut self) -> Vec<String> {
        (0..self.config.repetitions).map(|_| self.generate()).collect()
    }

    /// Builds and shuffles a buffer of exactly `length` glyphs.
    pub fn generate_with_length(&mut self, length: usize) -> PasswordBuffer {
        let mut buf = PasswordBuffer::with_capacity(length);

        match self.config.custom_alphabet() {
            Some(alphabet) => {
                for _ in 0..length {
                    buf.push(pick(&mut self.engine, alphabet));
                }
            }
            None => {
                for _ in 0..length {
                    let class = self.select_class(buf.eligible(&self.config.modes));
                    let glyph = pick(&mut self.engine, class.glyphs(self.config.printable));
                    buf.push_from(class, glyph as char);
                }
            }
        }

        buf.shuffle(&mut self.engine);
        buf
    }

    /// Rejection-selects a class from `eligible` using the four-way class draw.
    fn select_class(&mut self, eligible: ClassSet) -> CharClass {
        // Normalization guarantees at least one accepted class.
        assert!(!eligible.is_empty(), "no eligible character class");

        loop {
            let draw = uniform_int(&mut self.engine, CharClass::ALL.len() as u32);
            if let Some(class) = CharClass::from_index(draw).filter(|&c| eligible.contains(c)) {
                return class;
            }
        }
    }
}
