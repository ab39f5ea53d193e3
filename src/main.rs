use clap::{Parser as ClapParser, Subcommand};
use shape_lang::cli::{self, CheckArgs, CheckResult, CliError};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "shape")]
#[command(about = "Shape - check JSON values against structural type expressions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check JSON input against a type expression
    Check {
        /// The type expression, e.g. "{ id: string } | null"
        type_text: String,

        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Accept 0/1 for boolean, false and true
        #[arg(long)]
        casual_boolean: bool,

        /// Read RFC 3339 strings in the input as dates
        #[arg(long)]
        parse_dates: bool,

        /// Only compile the type and print its normalized form
        #[arg(long)]
        syntax_only: bool,

        /// Pretty-print the normalized type
        #[arg(short, long)]
        pretty: bool,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'shape docs' to list categories)
        category: String,
    },

    /// Short tutorial
    Onboard,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            type_text,
            input,
            casual_boolean,
            parse_dates,
            syntax_only,
            pretty,
        } => {
            let args = CheckArgs {
                type_text,
                input,
                casual_boolean,
                parse_dates,
                syntax_only,
                pretty,
            };
            run_check(args)
        }
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => match cli::get_doc_category(&category) {
            Ok(content) => {
                print!("{}", content);
                Ok(())
            }
            Err(e) => Err(e),
        },
        Commands::Onboard => {
            print!("{}", cli::get_onboarding_content());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `SHAPE_LOG` (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("SHAPE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_check(mut args: CheckArgs) -> Result<(), CliError> {
    if args.input.is_none() && !args.syntax_only && !atty::is(atty::Stream::Stdin) {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        args.input = Some(buffer);
    }

    match cli::execute_check(&args)? {
        CheckResult::SyntaxValid(text) => println!("{}", text),
        CheckResult::Valid => println!("valid"),
    }
    Ok(())
}
