use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "assistant-bot", version)]
#[command(about = "Interactive assistant that keeps your contacts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive contact assistant (default)
    Bot,

    /// Print Fibonacci numbers
    Fib {
        /// Index of the number to print
        #[arg(required_unless_present = "sequence")]
        n: Option<u64>,

        /// Print the first COUNT numbers instead
        #[arg(short, long, value_name = "COUNT", conflicts_with = "n")]
        sequence: Option<usize>,
    },

    /// Sum the numbers found in a piece of text
    Sum {
        /// Text to scan (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_bot() {
        let cli = Cli::try_parse_from(["assistant-bot"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_fib_index() {
        let cli = Cli::try_parse_from(["assistant-bot", "fib", "10"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Fib {
                n: Some(10),
                sequence: None
            })
        ));
    }

    #[test]
    fn parses_fib_sequence() {
        let cli = Cli::try_parse_from(["assistant-bot", "fib", "--sequence", "5"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Fib {
                n: None,
                sequence: Some(5)
            })
        ));
    }

    #[test]
    fn fib_needs_an_argument() {
        assert!(Cli::try_parse_from(["assistant-bot", "fib"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["assistant-bot", "sum", "1", "2", "-v", "--config-dir", "/tmp"])
                .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp")));
    }
}
