use anyhow::Result;
use caseshift::cli::output::OutputFormat;
use caseshift::converter::{detector, joiner, CaseConverter, Target};
use caseshift::{cli, Config, Style};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

#[derive(Parser, Debug)]
#[command(name = "caseshift")]
#[command(version, about = "A blazingly fast case converter CLI", long_about = None)]
struct Cli {
    /// Identifiers to convert
    #[arg(value_name = "IDENTIFIERS")]
    identifiers: Vec<String>,

    /// Target style (snake, camel, pascal, kebab, upper-snake)
    #[arg(short, long, value_name = "STYLE", conflicts_with = "cycle")]
    to: Option<Style>,

    /// Toggle each identifier to the next style in the cycle order
    #[arg(short, long)]
    cycle: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output format (text, json, plain)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Pattern for identifiers to leave unchanged (regex)
    #[arg(long)]
    ignore_pattern: Vec<String>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Style inspection
    Style {
        #[command(subcommand)]
        action: StyleCommands,
    },
}

#[derive(Parser, Debug)]
enum StyleCommands {
    /// List supported styles in cycle order
    List,
    /// Detect the style of an identifier
    Detect {
        /// Identifier to classify
        identifier: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "caseshift", &mut io::stdout());
        return Ok(());
    }

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command);
    }

    // Load configuration
    let config = Config::load(cli.ignore_pattern.clone())?;

    // Validate input
    if cli.identifiers.is_empty() {
        anyhow::bail!("No identifiers specified. Use --help for usage information.");
    }

    let target = match cli.to {
        Some(style) => Target::Style(style),
        None if cli.cycle => Target::Cycle,
        None => anyhow::bail!("No target style specified. Use --to <STYLE> or --cycle."),
    };

    let colored = !cli.no_color && config.color;

    // Convert all spans, then print the collected batch
    let converter = CaseConverter::new(&config)?;
    let result = converter.convert_batch(&cli.identifiers, target);

    cli::output::print_conversions(&result, colored, &cli.format);
    if matches!(cli.format, OutputFormat::Text) {
        cli::output::print_summary(&result, colored);
    }

    Ok(())
}

fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Style { action } => match action {
            StyleCommands::List => {
                let example: Vec<String> =
                    ["my", "var", "name"].iter().map(|s| s.to_string()).collect();
                for style in Style::CYCLE {
                    println!("{:<12} {}", style.to_string(), joiner::join(&example, style));
                }
            }
            StyleCommands::Detect { identifier } => match detector::detect(&identifier) {
                Some(style) => println!("{}", style),
                None => println!("unknown"),
            },
        },
    }
    Ok(())
}
