#![deny(missing_docs)]
//! A command-line interface for the classical cipher toolkit.

use clap::{Args, Parser, Subcommand};
use log::{error, info};
use serde::Serialize;
use simplecipher_core::{
    Direction, ErrorCode, Method, MethodTable, Session, ValidationError, alphabet, pad_generator,
};
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Encrypt with the default simple substitution method\nsimplecipher-cli encrypt --key LEMON \"Attack at dawn\"\n\n# Decrypt a Caesar ciphertext read from stdin\necho 'Khoor' | simplecipher-cli decrypt --method caesar --key 3\n\n# Generate a one-time-pad key sized for a message, then use it\nsimplecipher-cli pad --for \"Meet me\"\nsimplecipher-cli encrypt --method \"One-Time Pad\" --key <KEY> \"Meet me\""
)]
struct Cli {
    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message
    Encrypt(CipherArgs),
    /// Decrypt a message
    Decrypt(CipherArgs),
    /// Print the substitution alphabet derived from a keyword
    Mapping {
        /// The keyword to derive the alphabet from
        #[arg(short, long, allow_hyphen_values = true)]
        key: String,
    },
    /// Generate a random one-time-pad key
    Pad {
        /// The number of characters in the key
        #[arg(short, long, required_unless_present = "for_message", conflicts_with = "for_message")]
        length: Option<usize>,

        /// Size the key to this message instead of giving a length
        #[arg(long = "for", value_name = "MESSAGE")]
        for_message: Option<String>,
    },
    /// List the available cipher methods
    Methods,
}

#[derive(Args)]
struct CipherArgs {
    /// The cipher method, as an identifier (caesar) or a label ("Simple Substitution")
    #[arg(short, long, default_value = "simple-substitution")]
    method: String,

    /// A natural number for Caesar, a keyword for substitution, or a pad as long as the message
    #[arg(short, long, allow_hyphen_values = true)]
    key: String,

    /// The message to transform. Read from stdin when omitted.
    #[arg()]
    message: Option<String>,
}

#[derive(Serialize)]
struct CipherOutput<'a> {
    method: Method,
    direction: Direction,
    output: &'a str,
}

#[derive(Serialize)]
struct MethodEntry {
    id: &'static str,
    label: &'static str,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let table = MethodTable::default();

    match cli.command {
        Commands::Encrypt(args) => run_cipher(&table, &args, Direction::Encrypt, cli.json),
        Commands::Decrypt(args) => run_cipher(&table, &args, Direction::Decrypt, cli.json),
        Commands::Mapping { key } => {
            let mapping: String = alphabet::derive_mapping(&key).into_iter().collect();
            if cli.json {
                print_json(&serde_json::json!({ "key": key, "mapping": mapping }));
            } else {
                println!("{mapping}");
            }
        }
        Commands::Pad {
            length,
            for_message,
        } => {
            let generated = match (length, for_message) {
                (_, Some(message)) => pad_generator::generate_pad_key_for(&message),
                (Some(length), None) => pad_generator::generate_pad_key(length),
                (None, None) => {
                    error!("Either --length or --for is required.");
                    process::exit(2);
                }
            };
            let key = generated.unwrap_or_else(|e| {
                error!("Cannot generate the key: {e}");
                process::exit(2);
            });
            info!("Generated a one-time-pad key of {} characters.", key.chars().count());
            if cli.json {
                print_json(&serde_json::json!({ "key": key }));
            } else {
                println!("{key}");
            }
        }
        Commands::Methods => {
            if cli.json {
                let entries: Vec<MethodEntry> = Method::ALL
                    .into_iter()
                    .map(|m| MethodEntry {
                        id: m.id(),
                        label: m.label(),
                    })
                    .collect();
                print_json(&entries);
            } else {
                println!("{:<22} {}", "ID", "LABEL");
                println!("{:-<40}", "");
                for method in Method::ALL {
                    println!("{:<22} {}", method.id(), method.label());
                }
            }
        }
    }
}

/// Resolves `name` as a machine identifier first, then as a display label.
fn resolve_method(session: &mut Session, table: &MethodTable, name: &str) -> Result<Method, ErrorCode> {
    if let Ok(method) = name.parse::<Method>() {
        session.set_method(method);
        return Ok(method);
    }
    session.select_method(table, name)
}

fn run_cipher(table: &MethodTable, args: &CipherArgs, direction: Direction, json: bool) {
    let mut session = Session::new();
    let method = resolve_method(&mut session, table, &args.method).unwrap_or_else(|e| {
        error!("{e}: '{}'", args.method);
        error!("Run 'simplecipher-cli methods' to list the available methods.");
        process::exit(2);
    });

    let message = match &args.message {
        Some(message) => message.clone(),
        None => read_stdin_message().unwrap_or_else(|e| {
            error!("Failed to read the message from stdin: {e}");
            process::exit(1);
        }),
    };

    match session.try_cipher(&message, &args.key, direction.is_decrypt()) {
        Ok(output) => {
            info!("Applied {method} to {} characters.", message.chars().count());
            if json {
                print_json(&CipherOutput {
                    method,
                    direction,
                    output: &output,
                });
            } else {
                println!("{output}");
            }
        }
        Err(validation) => {
            report_validation(&validation, json);
            process::exit(1);
        }
    }
}

fn report_validation(validation: &ValidationError, json: bool) {
    for code in validation.codes() {
        error!("Cannot cipher the message: {code}");
    }
    if json {
        let codes: Vec<ErrorCode> = validation.codes().collect();
        print_json(&serde_json::json!({ "errors": codes, "fields": validation }));
    }
}

/// Reads the whole of stdin, dropping a single trailing newline.
fn read_stdin_message() -> io::Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            error!("Failed to serialize output: {e}");
            process::exit(1);
        }
    }
}
