use crate::locale::Locale;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Hides the banner printed before any command output.
    pub no_banner: bool,
    /// `0` prints the full layout, `1` plain lines, `2` bare values only.
    pub quiet: u8,
    /// Language used for labels, prompts and messages.
    pub locale: Locale,
    /// Never prompt. Fields missing from the command line take their defaults.
    pub disable_input: bool,
}
