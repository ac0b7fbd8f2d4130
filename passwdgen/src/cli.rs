use clap::{ArgAction, Parser};
use passwdgen_core::config::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DEFAULT_REPETITIONS};
use passwdgen_core::{AcceptMode, ClassModes, GenerationConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "passwdgen", version, disable_version_flag = true)]
#[command(about = "Generate pseudo-random passwords from constrained character classes")]
pub struct Args {
    /// Number of passwords to generate
    #[arg(short = 'c', long = "count", default_value_t = DEFAULT_REPETITIONS)]
    pub count: u32,

    /// Minimum password length
    #[arg(
        short = 'n',
        long = "min",
        visible_alias = "minimum",
        default_value_t = DEFAULT_MIN_LENGTH
    )]
    pub min_length: u32,

    /// Maximum password length (only reached when equal to the minimum)
    #[arg(
        short = 'x',
        long = "max",
        visible_alias = "maximum",
        default_value_t = DEFAULT_MAX_LENGTH
    )]
    pub max_length: u32,

    /// Upper case letters: YES, NO or FORCE
    #[arg(long, visible_alias = "upper-case", value_name = "MODE", default_value = "FORCE")]
    pub upper: AcceptMode,

    /// Lower case letters: YES, NO or FORCE
    #[arg(long, visible_alias = "lower-case", value_name = "MODE", default_value = "FORCE")]
    pub lower: AcceptMode,

    /// Decimal digits: YES, NO or FORCE
    #[arg(long, visible_alias = "decimal", value_name = "MODE", default_value = "FORCE")]
    pub digits: AcceptMode,

    /// Non-alphanumeric ASCII characters: YES, NO or FORCE
    #[arg(long, visible_alias = "punctuation", value_name = "MODE", default_value = "NO")]
    pub ascii: AcceptMode,

    /// Leave out look-alike characters (1, l, O, 0): YES or NO
    #[arg(
        long,
        visible_alias = "print",
        value_name = "YES|NO",
        default_value = "YES",
        value_parser = parse_yes_no,
        action = ArgAction::Set
    )]
    pub printable: bool,

    /// Seed for the generator (defaults to the current Unix time)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Print the effective options as JSON and exit
    #[arg(long)]
    pub debug: bool,

    /// Log generation details to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Build passwords from exactly these characters; class options are ignored
    #[arg(last = true, value_name = "CHARACTERS")]
    pub characters: Option<String>,
}

impl Args {
    /// Assembles the generation settings. Validation happens in the generator.
    pub fn to_config(&self) -> GenerationConfig {
        GenerationConfig {
            repetitions: self.count,
            min_length: self.min_length,
            max_length: self.max_length,
            modes: ClassModes {
                upper: self.upper,
                lower: self.lower,
                digit: self.digits,
                punctuation: self.ascii,
            },
            printable: self.printable,
            custom_alphabet: self.characters.as_deref().map(|s| s.chars().collect()),
        }
    }
}

fn parse_yes_no(s: &str) -> Result<bool, String> {
    match s {
        "YES" | "yes" => Ok(true),
        "NO" | "no" => Ok(false),
        _ => Err(format!("expected YES or NO, got '{s}'")),
    }
}
