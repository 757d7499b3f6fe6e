use anyhow::{bail, Context};
use colored::Colorize;
use rxl_ledger::{genesis_drugs, DrugLedger};
use rxl_protocol::{dispatch, KeyedRecord, ProtocolError, Request, Response};
use rxl_types::codec::{encode_holder_change, encode_new_drug};
use rxl_types::{join_location, DrugRecord, NewDrug};

use crate::cli::*;
use crate::config::RxlConfig;

pub fn run_command(cli: Cli, config: &RxlConfig) -> anyhow::Result<()> {
    let format = cli.format;
    let ledger = || DrugLedger::in_memory(&config.ledger);
    match cli.command {
        Command::List => run_one(&ledger()?, Request::ListDrugs, format),
        Command::Get(args) => run_one(&ledger()?, Request::GetDrug { id: args.id }, format),
        Command::Add(args) => {
            let encoded = add_encoding(args)?;
            run_one(&ledger()?, Request::AddDrug { encoded }, format)
        }
        Command::Transfer(args) => {
            let encoded = transfer_encoding(args)?;
            run_one(&ledger()?, Request::ChangeHolder { encoded }, format)
        }
        Command::Exec(args) => run_script(&ledger()?, &args.paths, format),
        Command::Replay(args) => {
            let text = std::fs::read_to_string(&args.file)
                .with_context(|| format!("read request file {}", args.file.display()))?;
            run_script(&ledger()?, &script_lines(&text), format)
        }
        Command::Genesis => cmd_genesis(format),
    }
}

fn add_encoding(args: AddArgs) -> anyhow::Result<String> {
    if let Some(encoded) = args.encoded {
        return Ok(encoded);
    }
    match (
        args.id,
        args.longitude,
        args.latitude,
        args.timestamp,
        args.holder,
        args.manufacturer,
    ) {
        (Some(id), Some(longitude), Some(latitude), Some(timestamp), Some(holder), Some(manufacturer)) => {
            let drug = NewDrug::new(
                id,
                join_location(&longitude, &latitude),
                timestamp,
                holder,
                manufacturer,
            );
            Ok(encode_new_drug(&drug))
        }
        _ => bail!(
            "pass an encoded drug, or all of --id --longitude --latitude --timestamp --holder --manufacturer"
        ),
    }
}

fn transfer_encoding(args: TransferArgs) -> anyhow::Result<String> {
    if let Some(encoded) = args.encoded {
        return Ok(encoded);
    }
    match (args.id, args.holder) {
        (Some(id), Some(holder)) => Ok(encode_holder_change(&id, &holder)),
        _ => bail!("pass an encoded transfer, or both --id and --holder"),
    }
}

fn run_one(ledger: &DrugLedger, request: Request, format: OutputFormat) -> anyhow::Result<()> {
    match dispatch(ledger, &request) {
        Ok(response) => print_response(&response, format),
        Err(err) => {
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string(&err.to_body())?);
            }
            Err(anyhow::Error::new(err).context(format!("request {request} failed")))
        }
    }
}

/// Run every path against the same ledger, reporting failures without
/// stopping.
fn run_script<P: AsRef<str>>(
    ledger: &DrugLedger,
    paths: &[P],
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut failed = 0usize;
    for path in paths {
        let path = path.as_ref();
        if format == OutputFormat::Text {
            println!("{} {}", "→".cyan(), path.bold());
        }
        let outcome = Request::parse(path).and_then(|request| dispatch(ledger, &request));
        match outcome {
            Ok(response) => print_response(&response, format)?,
            Err(err) => {
                failed += 1;
                print_error(path, &err, format)?;
            }
        }
    }
    if failed > 0 {
        bail!("{failed} of {} requests failed", paths.len());
    }
    Ok(())
}

/// Request paths in a replay file: one per line, blank lines and `#`
/// comments skipped.
fn script_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

fn print_response(response: &Response, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", response.to_json()?),
        OutputFormat::Text => match response {
            Response::Drugs(records) => print_listing(records),
            Response::Drug(record) => print_record(record),
            Response::NotFound => println!("{}", rxl_protocol::NOT_FOUND_SENTINEL.yellow()),
        },
    }
    Ok(())
}

fn print_error(path: &str, err: &ProtocolError, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&err.to_body())?),
        OutputFormat::Text => {
            eprintln!("{} {} ({}): {}", "✗".red().bold(), path, err.code(), err);
        }
    }
    Ok(())
}

fn print_listing(records: &[KeyedRecord]) {
    if records.is_empty() {
        println!("No drugs recorded.");
        return;
    }
    println!(
        "{:>5}  {:<8} {:<20} {:<10} {:<22} {}",
        "KEY".bold(),
        "ID".bold(),
        "HOLDER".bold(),
        "MAKER".bold(),
        "LOCATION".bold(),
        "TIMESTAMP".bold()
    );
    for entry in records {
        let record = &entry.record;
        println!(
            "{:>5}  {:<8} {:<20} {:<10} {:<22} {}",
            entry.key.yellow(),
            record.id(),
            record.holder().green(),
            record.manufacturer(),
            record.location(),
            record.timestamp().dimmed()
        );
    }
}

fn print_record(record: &DrugRecord) {
    println!("Drug {} (key {})", record.id().bold(), record.key().to_string().yellow());
    println!("  Holder:       {}", record.holder().green());
    println!("  Manufacturer: {}", record.manufacturer());
    println!("  Location:     {}", record.location());
    println!("  Timestamp:    {}", record.timestamp());
}

fn cmd_genesis(format: OutputFormat) -> anyhow::Result<()> {
    let drugs = genesis_drugs();
    match format {
        OutputFormat::Json => {
            let records: Vec<KeyedRecord> = drugs
                .into_iter()
                .map(|(key, drug)| drug.into_record(key).into())
                .collect();
            println!("{}", Response::Drugs(records).to_json()?);
        }
        OutputFormat::Text => {
            for (key, drug) in &drugs {
                println!("{}  {}", key.to_string().yellow(), encode_new_drug(drug));
            }
        }
    }
    Ok(())
}
