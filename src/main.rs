use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::PathBuf;
use std::thread;

use anyhow::{anyhow, Context, Result};
use clap::Parser as ClapParser;
use clap::Subcommand;
use env_logger::Builder;
use log::{debug, info};

use rox::error::StderrReporter;
use rox::interpreter::MAX_CALL_DEPTH;
use rox::lox::Lox;
use rox::scanner::Scanner;

/// Lox calls recurse on the host stack.  Leave room for `MAX_CALL_DEPTH`
/// nested calls even in unoptimised builds.
const INTERPRETER_STACK_SIZE: usize = MAX_CALL_DEPTH * 256 * 1024;

#[derive(ClapParser, Debug)]
#[command(version, about = "Lox language interpreter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    commands: Option<Commands>,

    /// Enable logging to app.log
    #[arg(long, global = true)]
    log: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenizes input from a file, printing each token
    Tokenize {
        filename: PathBuf,

        /// Print one JSON object per token
        #[arg(long)]
        json: bool,
    },

    /// Runs input from a file as a Lox program
    Run { filename: PathBuf },

    /// Starts an interactive prompt (the default)
    Repl,
}

/// Reads the contents of a file into a String
fn read_file(filename: &PathBuf) -> Result<String> {
    info!("Reading file: {:?}", filename);
    let file = File::open(filename).context(format!("Failed to open file {:?}", filename))?;
    let mut reader = BufReader::new(file);
    let mut buf = String::new();

    let bytes = reader
        .read_to_string(&mut buf)
        .context(format!("Failed to read file {:?}", filename))?;

    info!("Read {} bytes from {:?}", bytes, filename);

    Ok(buf)
}

fn init_logger() -> Result<()> {
    let log_file = File::create("app.log").context("Failed to create app.log")?;

    Builder::new()
        .format(|buf, record| {
            // Strip 'rox::' from module path
            let module = record
                .module_path()
                .unwrap_or("<unnamed>")
                .strip_prefix("rox::")
                .unwrap_or(record.module_path().unwrap_or("<unnamed>"));
            writeln!(
                buf,
                "[{}:{}] - {}",
                module,
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .filter(None, log::LevelFilter::Debug) // Default to Debug, override with RUST_LOG
        .parse_default_env()
        .init();

    info!("Logger initialized, writing to app.log");
    Ok(())
}

fn tokenize(filename: &PathBuf, json: bool) -> Result<i32> {
    let source = read_file(filename)?;
    let mut tokenized = true;

    for token in Scanner::new(&source) {
        match token {
            Ok(token) if json => println!("{}", serde_json::to_string(&token)?),

            Ok(token) => println!("{}", token),

            Err(e) => {
                tokenized = false;
                debug!("Tokenization debug: {}", e);
                eprintln!("{}", e);
            }
        }
    }

    Ok(if tokenized { 0 } else { 65 })
}

fn run_file(filename: &PathBuf) -> Result<i32> {
    let source = read_file(filename)?;

    info!("Provided input:\n {}", source);

    let status = Lox::new().run(&source, &mut StderrReporter);

    info!("Run finished with {:?}", status);

    Ok(status.exit_code())
}

fn run_prompt() -> Result<i32> {
    let mut lox = Lox::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        // ^D or an empty line ends the session
        let Some(line) = lines.next() else { break };
        let line = line.context("Failed to read from stdin")?;
        if line.is_empty() {
            break;
        }

        // Errors are already printed; the prompt carries on.
        let status = lox.run(&line, &mut StderrReporter);
        debug!("REPL line finished with {:?}", status);
    }

    Ok(0)
}

fn dispatch(args: Cli) -> Result<i32> {
    match &args.commands {
        Some(Commands::Tokenize { filename, json }) => tokenize(filename, *json),
        Some(Commands::Run { filename }) => run_file(filename),
        Some(Commands::Repl) | None => run_prompt(),
    }
}

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    // Initialize logger only if --log flag is provided
    if args.log {
        init_logger()?;
    } else {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Off)
            .init();
    }

    info!("CLI arguments: {:?}", args);

    let code = thread::Builder::new()
        .name("interpreter".into())
        .stack_size(INTERPRETER_STACK_SIZE)
        .spawn(move || dispatch(args))
        .context("Failed to spawn interpreter thread")?
        .join()
        .map_err(|_| anyhow!("Interpreter thread panicked"))??;

    if code != 0 {
        debug!("Exiting with code {}", code);
        std::process::exit(code);
    }

    Ok(())
}
