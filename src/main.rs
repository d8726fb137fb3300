use std::fs;
use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use wallet_transaction::{RequestMoneyRequest, SendMoneyRequest, Transaction, TransactionEnvelope, TransactionInfo};

const USAGE: &str = "Usage:
  wallet-transaction decode [input].json [log_level:optional]
  wallet-transaction send [to] [currency] [amount] [notes:optional] [log_level:optional]
  wallet-transaction request [from] [currency] [amount] [notes:optional] [log_level:optional]
Available log levels: error, warn, info, debug, trace (default: error)";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("decode") if args.len() >= 3 => {
            setup_logging(args.get(3).map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR));
            decode(&args[2])
        }
        Some(command @ ("send" | "request")) if args.len() >= 5 => {
            setup_logging(args.get(6).map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR));
            encode(command, &args[2], &args[3], &args[4], args.get(5).map(String::as_str))
        }
        _ => {
            eprintln!("{USAGE}");
            exit(1);
        }
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the command output, logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn decode(path: &str) -> Result<()> {
    let payload = fs::read(path)?;
    let envelope = TransactionEnvelope::from_wire(&payload)?;

    info!("Decoded transaction envelope from {path}");

    write_fields_to_stdout(&envelope)
}

fn encode(command: &str, party: &str, currency: &str, amount: &str, notes: Option<&str>) -> Result<()> {
    let transaction = if command == "send" {
        let mut request = SendMoneyRequest::from_text(party, currency, amount)?;
        if let Some(notes) = notes {
            request = request.with_notes(notes);
        }
        Transaction::from(request)
    } else {
        let mut request = RequestMoneyRequest::from_text(party, currency, amount)?;
        if let Some(notes) = notes {
            request = request.with_notes(notes);
        }
        Transaction::from(request)
    };

    let json = TransactionEnvelope::wrap_outbound(transaction).to_wire()?;
    let mut output = stdout().lock();

    writeln!(output, "{json}")?;

    Ok(())
}

fn write_fields_to_stdout(envelope: &TransactionEnvelope) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());
    let text = |value: Option<&str>| value.unwrap_or("").to_string();

    writeln!(output, "field,value")?;
    writeln!(output, "success,{}", envelope.is_success())?;
    writeln!(output, "errors,{}", envelope.errors().join(";"))?;
    writeln!(output, "id,{}", text(envelope.id()))?;
    writeln!(output, "created_at,{}", envelope.created_at().map(|at| at.to_rfc3339()).unwrap_or_default())?;
    writeln!(output, "amount,{}", envelope.amount().map(|amount| amount.amount().to_string()).unwrap_or_default())?;
    writeln!(output, "currency,{}", text(envelope.amount().map(|amount| amount.currency_code())))?;
    writeln!(output, "request,{}", envelope.is_request())?;
    writeln!(output, "status,{}", envelope.status().map(|status| status.to_string()).unwrap_or_default())?;
    writeln!(output, "sender,{}", text(envelope.sender().and_then(|user| user.email())))?;
    writeln!(output, "recipient,{}", text(envelope.recipient().and_then(|user| user.email())))?;
    writeln!(output, "recipient_address,{}", text(envelope.recipient_address()))?;
    writeln!(output, "notes,{}", text(envelope.notes()))?;
    writeln!(output, "hsh,{}", text(envelope.transaction_hash()))?;
    writeln!(output, "idem,{}", text(envelope.idempotency_key()))?;

    output.flush()?;

    Ok(())
}
