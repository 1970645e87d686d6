use clap::Parser;

/// Control the mouse pointer with hand gestures.
///
/// Landmarks are read as JSON lines, one frame per line, from a file or
/// from stdin when the input is `-`.
#[derive(Debug, Parser)]
#[command(name = "air_mouse", version, about)]
pub struct Cli {
    /// Settings file, created with defaults on first run.
    #[arg(long, default_value = "settings.json")]
    pub settings: String,

    /// Landmark stream, `-` for stdin.
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Log actions instead of moving the real pointer.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["air_mouse"]);
        assert_eq!(cli.settings, "settings.json");
        assert_eq!(cli.input, "-");
        assert!(!cli.dry_run);
        assert!(!cli.verbose);
    }

    #[test]
    fn flags() {
        let cli = Cli::parse_from(["air_mouse", "--input", "hands.jsonl", "--dry-run", "-v"]);
        assert_eq!(cli.input, "hands.jsonl");
        assert!(cli.dry_run);
        assert!(cli.verbose);
    }
}
