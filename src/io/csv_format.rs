//! CSV format handling for transaction records and the account report
//!
//! This module centralizes all format concerns:
//! - Header validation
//! - CsvRecord structure for deserialization and its conversion to domain types
//! - Report serialization with a fixed 4-decimal precision
//!
//! All functions except `write_report` are pure (no I/O) for easy testing.

use crate::types::{
    AccountReport, ClientId, LedgerError, TransactionId, TransactionRecord, TransactionType,
};
use csv::StringRecord;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use std::io::{BufWriter, Write};
use std::str::FromStr;

/// Field names of the input header, in order
pub const INPUT_HEADER: [&str; 4] = ["type", "client", "tx", "amount"];

/// First line of the report
pub const REPORT_HEADER: &str = "client, available, held, total, locked";

/// Decimal places printed for every amount in the report
pub const OUTPUT_DECIMAL_PLACES: u32 = 4;

/// CSV record structure for deserialization
///
/// Fields are kept as text so each one can be validated with its line number.
/// `amount` is absent for the 3-field form and may be empty in the 4-field form.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord<'r> {
    #[serde(rename = "type")]
    pub tx_type: &'r str,
    pub client: &'r str,
    pub tx: &'r str,
    #[serde(default, borrow)]
    pub amount: Option<&'r str>,
}

/// Check the first row against `type, client, tx, amount`
pub fn validate_header(header: &StringRecord) -> Result<(), LedgerError> {
    if header.iter().eq(INPUT_HEADER.iter().copied()) {
        Ok(())
    } else {
        let found: Vec<&str> = header.iter().collect();
        Err(LedgerError::invalid_header(&found, &INPUT_HEADER))
    }
}

/// Parse one data row found at `line`
///
/// Only 3- and 4-field rows are accepted.
pub fn parse_record(record: &StringRecord, line: u64) -> Result<TransactionRecord, LedgerError> {
    if !(3..=4).contains(&record.len()) {
        return Err(LedgerError::MalformedRecord {
            fields: record.len(),
            line,
        });
    }

    let csv_record: CsvRecord<'_> = record.deserialize(None)?;
    convert_csv_record(csv_record, line)
}

/// Convert a CsvRecord to a TransactionRecord
///
/// - The type tag must match one of the five types exactly
/// - Client and tx must be unsigned integers in range
/// - Deposits and withdrawals need a decimal amount
/// - A dispute, resolve, or chargeback may leave the amount column empty, but
///   a non-empty amount there makes the type unrecognized for that shape
pub fn convert_csv_record(
    csv_record: CsvRecord<'_>,
    line: u64,
) -> Result<TransactionRecord, LedgerError> {
    let tx_type: TransactionType = csv_record
        .tx_type
        .parse()
        .map_err(|_| LedgerError::unknown_transaction_type(csv_record.tx_type, line))?;

    let client: ClientId = csv_record
        .client
        .parse()
        .map_err(|_| LedgerError::invalid_field("client", csv_record.client, line))?;

    let tx: TransactionId = csv_record
        .tx
        .parse()
        .map_err(|_| LedgerError::invalid_field("tx", csv_record.tx, line))?;

    // An amount only belongs on deposits and withdrawals
    let amount = match csv_record.amount.filter(|amount| !amount.is_empty()) {
        Some(_) if !tx_type.carries_amount() => {
            return Err(LedgerError::unknown_transaction_type(
                csv_record.tx_type,
                line,
            ))
        }
        Some(amount) => Some(
            Decimal::from_str(amount).map_err(|_| LedgerError::invalid_amount(amount, line))?,
        ),
        None => None,
    };

    TransactionRecord::new(tx_type, client, tx, amount)
        .ok_or_else(|| LedgerError::missing_amount(tx_type.as_str(), line))
}

/// Render an amount with exactly [`OUTPUT_DECIMAL_PLACES`] decimals
///
/// Rounds midpoints away from zero. A value that rounds to zero prints
/// without a sign.
pub fn format_amount(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(OUTPUT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    let rounded = if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    };
    format!("{:.*}", OUTPUT_DECIMAL_PLACES as usize, rounded)
}

/// Write the account report
///
/// Writes the header line followed by one `client, available, held, total,
/// locked` row per account, in the report's (client ID) order.
pub fn write_report(report: &AccountReport, output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = BufWriter::new(output);

    writeln!(writer, "{}", REPORT_HEADER)?;

    for account in report {
        writeln!(
            writer,
            "{}, {}, {}, {}, {}",
            account.client,
            format_amount(account.available),
            format_amount(account.held),
            format_amount(account.total()),
            account.locked
        )?;
    }

    writer.flush()?;

    Ok(())
}
