use anyhow::Result;
use argh::FromArgs;
use opener_shell::style::Style;
use opener_shell::{Console, DEFAULT_PROMPT, Interpreter, Opener};
use rustyline::DefaultEditor;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(FromArgs)]
/// Interactive shell supporting write, open, help and exit.
struct Args {
    #[argh(option, default = "DEFAULT_PROMPT.to_string()")]
    /// text shown before each input line.
    prompt: String,

    #[argh(option)]
    /// program used by `open` instead of the platform default.
    opener: Option<String>,

    #[argh(switch)]
    /// disable colored output (also disabled when NO_COLOR is set).
    no_color: bool,

    #[argh(switch, short = 'v')]
    /// log debug diagnostics to stderr.
    verbose: bool,
}

fn init_logging(verbose: bool) {
    // RUST_LOG wins over --verbose; diagnostics stay off otherwise.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "off" }));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    init_logging(args.verbose);

    let style = if args.no_color {
        Style::disabled()
    } else {
        Style::new()
    };
    let opener = match args.opener {
        Some(program) => Opener::new(program),
        None => Opener::platform_default(),
    };

    let mut sh = Interpreter::new(Console::stdout(style), opener).with_prompt(args.prompt);
    let mut rl = DefaultEditor::new()?;
    sh.repl(&mut rl)?;

    tracing::debug!("shell terminated");
    std::process::exit(0)
}
