use std::net::SocketAddr;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;
use serde_json::Value;

use jcmp_core::{CompareOptions, Comparer, ComparerResponse, ResponseType};
use jcmp_server::{DiffServer, ServerConfig};
use jcmp_store::{decode_document, parse_document, Side};

use crate::cli::*;

/// Exit status when the documents differ.
pub const EXIT_DIFFERENT: u8 = 1;
/// Exit status when a command could not run to completion.
pub const EXIT_TROUBLE: u8 = 2;

/// Turn a command result into the process exit status, reporting errors on
/// stderr.
pub fn exit_code(result: anyhow::Result<ExitCode>) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::from(EXIT_TROUBLE)
        }
    }
}

pub fn run_command(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Command::Compare(args) => cmd_compare(args, &cli.format),
        Command::Serve(args) => cmd_serve(args),
    }
}

fn cmd_compare(args: CompareArgs, format: &OutputFormat) -> anyhow::Result<ExitCode> {
    let left = load_document(&args.left, Side::Left, args.base64)?;
    let right = load_document(&args.right, Side::Right, args.base64)?;

    let options = CompareOptions::default().with_array_semantics(args.array_semantics.into());
    let response = Comparer::with_options(options)
        .compare(&left, &right)
        .context("comparison failed")?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Text => print_response(&response)?,
    }

    Ok(if response.is_equal() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_DIFFERENT)
    })
}

fn load_document(path: &Path, side: Side, base64: bool) -> anyhow::Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {} document {}", side, path.display()))?;
    let document = if base64 {
        decode_document(side, &text)?
    } else {
        parse_document(side, &text)?
    };
    Ok(document)
}

fn print_response(response: &ComparerResponse) -> anyhow::Result<()> {
    match response.outcome {
        ResponseType::ObjectsAreEqual => {
            println!("{} {}", "✓".green().bold(), response.message.green());
        }
        ResponseType::ObjectsAreNotEqual => {
            println!("{} {}", "≠".yellow().bold(), response.message.yellow());
            println!("{}", serde_json::to_string_pretty(&response.data)?);
        }
        ResponseType::ObjectsAreNotOfSameSize => {
            println!("{} {}", "✗".red().bold(), response.message.red());
            if let Some(trace) = response.data.get("trace").and_then(Value::as_str) {
                println!("  {}", trace.dimmed());
            }
        }
    }
    Ok(())
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<ExitCode> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_toml_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.bind_addr = bind
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid bind address {bind}"))?;
    }

    println!("jcmp server on {}", config.bind_addr.to_string().bold());
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(DiffServer::new(config).serve())?;
    Ok(ExitCode::SUCCESS)
}
