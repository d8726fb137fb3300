use std::collections::HashMap;
use std::io::Write;
use std::process::Command;

use anyhow::{anyhow, Result};
use serde_json::{json, Value};
use tempfile::NamedTempFile;

fn binary_path() -> &'static str {
    env!("CARGO_BIN_EXE_wallet-transaction")
}

fn create_temporary_json(payload: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{payload}")?;
    file.flush()?;

    Ok(file)
}

#[test]
fn test_cli_decodes_envelope_fields() -> Result<()> {
    let file = create_temporary_json(&json!({
        "success": true,
        "errors": [],
        "transaction": {
            "id": "5018f833f8182b129c00002f",
            "created_at": "2012-08-01T02:34:43-07:00",
            "amount": {"amount": "-1.10000000", "currency": "BTC"},
            "request": true,
            "status": "complete",
            "sender": {"id": "1", "name": "User Two", "email": "user2@example.com"},
            "notes": "lunch",
            "hsh": "9d6a7d11",
            "idem": "abc123"
        }
    }))?;

    let output = Command::new(binary_path()).arg("decode").arg(file.path()).output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut lines = stdout.lines();

    assert_eq!(lines.next(), Some("field,value"));

    let fields: HashMap<&str, &str> = lines.filter_map(|line| line.split_once(',')).collect();
    let field = |name: &str| fields.get(name).copied().ok_or_else(|| anyhow!("{name} missing from output"));

    assert_eq!(field("success")?, "true");
    assert_eq!(field("id")?, "5018f833f8182b129c00002f");
    assert_eq!(field("created_at")?, "2012-08-01T09:34:43+00:00");
    assert_eq!(field("amount")?, "-1.10000000");
    assert_eq!(field("currency")?, "BTC");
    assert_eq!(field("request")?, "true");
    assert_eq!(field("status")?, "complete");
    assert_eq!(field("sender")?, "user2@example.com");
    assert_eq!(field("recipient")?, "");
    assert_eq!(field("hsh")?, "9d6a7d11");
    assert_eq!(field("idem")?, "abc123");

    Ok(())
}

#[test]
fn test_cli_fails_on_unknown_status() -> Result<()> {
    let file = create_temporary_json(&json!({
        "success": true,
        "transaction": {
            "amount": {"amount": "1.0", "currency": "USD"},
            "status": "refunded"
        }
    }))?;

    let output = Command::new(binary_path()).arg("decode").arg(file.path()).output()?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)?.contains("refunded"));

    Ok(())
}

#[test]
fn test_cli_prints_remote_failure_as_data() -> Result<()> {
    let file = create_temporary_json(&json!({"success": false, "errors": ["insufficient funds", "account locked"]}))?;

    let output = Command::new(binary_path()).arg("decode").arg(file.path()).output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let fields: HashMap<&str, &str> = stdout.lines().skip(1).filter_map(|line| line.split_once(',')).collect();

    assert_eq!(fields.get("success"), Some(&"false"));
    assert_eq!(fields.get("errors"), Some(&"insufficient funds;account locked"));
    assert_eq!(fields.get("id"), Some(&""));
    assert_eq!(fields.get("amount"), Some(&""));

    Ok(())
}

#[test]
fn test_cli_encodes_send_money_request() -> Result<()> {
    let output = Command::new(binary_path())
        .args(["send", "bob@example.com", "USD", "10.00", "gift"])
        .output()?;

    assert!(output.status.success());

    let wire: Value = serde_json::from_slice(&output.stdout)?;

    assert_eq!(wire, json!({
        "transaction": {
            "amount_string": "10.00",
            "amount_currency_iso": "USD",
            "notes": "gift",
            "to": "bob@example.com",
            "instant_buy": false
        },
        "success": true,
        "errors": []
    }));

    Ok(())
}

#[test]
fn test_cli_encodes_money_request() -> Result<()> {
    let output = Command::new(binary_path())
        .args(["request", "alice@example.com", "BTC", "0.5"])
        .output()?;

    assert!(output.status.success());

    let wire: Value = serde_json::from_slice(&output.stdout)?;

    assert_eq!(wire["transaction"]["from"], "alice@example.com");
    assert_eq!(wire["transaction"]["amount_string"], "0.5");
    assert!(wire["transaction"].get("notes").is_none());

    Ok(())
}

#[test]
fn test_cli_rejects_invalid_amount() -> Result<()> {
    let output = Command::new(binary_path())
        .args(["send", "bob@example.com", "USD", "ten"])
        .output()?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_cli_prints_usage_without_arguments() -> Result<()> {
    let output = Command::new(binary_path()).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains("Usage:"));

    Ok(())
}
