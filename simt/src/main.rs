use anyhow::Context;
use clap::{Args, FromArgMatches, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::exit;
use tracing::*;
use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};

mod config;
mod prompt;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    globals: Globals,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct Globals {
    /// Read comparison options from a JSON config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    debug: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two texts and print their similarity score
    ///
    /// This is also what runs when no command is given.
    Compare(CompareArgs),

    /// Print the tokens of a text that take part in a comparison, one per line
    Tokenize {
        /// The text to tokenize
        text: String,

        #[command(flatten)]
        options: config::Overrides,
    },
}

#[derive(Args)]
struct CompareArgs {
    /// The first text.  If not given, it's asked for on the terminal.
    x: Option<String>,

    /// The second text.  If not given, it's asked for on the terminal.
    y: Option<String>,

    #[command(flatten)]
    options: config::Overrides,

    /// Ask on the terminal for each true/false option not already given on the command line, in
    /// the environment or in the config file
    #[arg(long)]
    ask: bool,

    /// Print the token, n-gram and combined scores as JSON
    #[arg(long)]
    json: bool,
}

impl CompareArgs {
    /// The arguments of a bare `compare`, with nothing on the command line.  Parsed by clap so
    /// that the environment variable fallbacks still apply.
    fn from_env() -> Result<Self, clap::Error> {
        let matches = Self::augment_args(clap::Command::new("compare"))
            .try_get_matches_from(["compare"])?;

        Self::from_arg_matches(&matches)
    }
}

/// The line reporting a score.  The two spaces before the number are part of the established
/// output format.
fn score_line(score: f64) -> String {
    format!("The similarity of these two texts is a score of:  {score:?}")
}

impl Commands {
    fn execute(self, globals: &Globals) -> anyhow::Result<()> {
        use Commands::*;

        let mut input = std::io::stdin().lock();
        let mut output = std::io::stdout().lock();

        match self {
            Compare(args) => {
                let x = match args.x {
                    Some(x) => x,
                    None => prompt::prompt_line(
                        &mut input,
                        &mut output,
                        "Please write the first text: ",
                    )?,
                };
                let y = match args.y {
                    Some(y) => y,
                    None => prompt::prompt_line(
                        &mut input,
                        &mut output,
                        "Please write the second text: ",
                    )?,
                };

                let mut overrides = config::layered(&args.options, globals.config.as_deref())?;

                if args.ask {
                    overrides.ask_missing(&mut input, &mut output)?;
                }

                let options = overrides.apply(config::defaults());

                debug!(?options, "Comparing texts");

                let similarity = simtext::compare_texts_detailed(&x, &y, &options)
                    .context("Failed to compare the texts")?;

                if args.json {
                    writeln!(output, "{}", serde_json::to_string_pretty(&similarity)?)?;
                } else {
                    writeln!(output, "{}", score_line(similarity.score))?;
                }
            }
            Tokenize { text, options } => {
                let options = config::resolve(&options, globals.config.as_deref())?;

                let tokens = simtext::normalize(
                    simtext::tokenize(&text),
                    options.remove_punctuation,
                    options.remove_stopwords,
                );

                for token in tokens {
                    writeln!(output, "{token}")?;
                }
            }
        }

        Ok(())
    }
}

fn main() {
    let cli = Cli::parse();
    let default_log_directive = match cli.globals.debug {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // Log as JSON on stderr, so stdout carries nothing but prompts and results
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_log_directive.into())
                .from_env_lossy(),
        )
        .json()
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    if let Some(config_path) = cli.globals.config.as_deref() {
        debug!("Value for config: {}", config_path.display());
    }

    let command = match cli.command {
        Some(command) => command,
        None => match CompareArgs::from_env() {
            Ok(args) => Commands::Compare(args),
            Err(e) => e.exit(),
        },
    };

    if let Err(e) = command.execute(&cli.globals) {
        error!("{:#}", e);
        exit(1);
    } else {
        debug!("command executed successfully");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simtext::EmptyNgramPolicy;

    /// Verify that there aren't any invalid attributes in the CLI specification that can only be
    /// detected at runtime
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert()
    }

    #[test]
    fn no_command_means_compare() {
        let cli = Cli::try_parse_from(["simt"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn compare_arguments() {
        let cli = Cli::try_parse_from([
            "simt",
            "compare",
            "the first text",
            "the second text",
            "--ngram-length",
            "2",
            "--preserve-order",
            "true",
            "--empty-ngrams",
            "skip",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Compare(args)) => {
                assert_eq!(Some("the first text"), args.x.as_deref());
                assert_eq!(Some("the second text"), args.y.as_deref());
                assert_eq!(Some(2), args.options.ngram_length);
                assert_eq!(Some(true), args.options.preserve_order);
                assert_eq!(Some(EmptyNgramPolicy::Skip), args.options.empty_ngrams);
                assert!(args.json);
                assert!(!args.ask);
            }
            _ => panic!("expected the compare command"),
        }
    }

    #[test]
    fn score_output_format() {
        assert_eq!(
            "The similarity of these two texts is a score of:  1.0",
            score_line(1.0)
        );
        assert_eq!(
            "The similarity of these two texts is a score of:  0.5",
            score_line(0.5)
        );
    }

    #[test]
    fn bare_command_reads_the_environment() {
        // Only this test sets this variable, and every other test that parses it passes the flag
        // explicitly
        std::env::set_var("SIMT_EMPTY_NGRAMS", "zero");

        let explicit = match Cli::try_parse_from(["simt", "compare"]).unwrap().command {
            Some(Commands::Compare(args)) => args,
            _ => panic!("expected the compare command"),
        };
        let bare = CompareArgs::from_env().unwrap();

        std::env::remove_var("SIMT_EMPTY_NGRAMS");

        assert_eq!(Some(EmptyNgramPolicy::Zero), explicit.options.empty_ngrams);
        assert_eq!(explicit.options, bare.options);
        assert!(bare.x.is_none() && bare.y.is_none());
        assert!(!bare.ask && !bare.json);
    }

    #[test]
    fn boolean_options_must_be_true_or_false() {
        assert!(Cli::try_parse_from(["simt", "compare", "--preserve-order", "yes"]).is_err());
        assert!(Cli::try_parse_from(["simt", "compare", "--empty-ngrams", "sometimes"]).is_err());
    }
}
