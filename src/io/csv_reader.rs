//! CSV record source with iterator interface
//!
//! Provides a streaming iterator over transaction records from delimited text.
//! Delegates format concerns to the csv_format module.
//!
//! # Design
//!
//! The header is read and validated when the source is built, so a missing or
//! wrong header fails before any record reaches the engine. Data rows are read
//! one at a time into a reused buffer and converted lazily.
//!
//! ```no_run
//! use tx_ledger::io::CsvRecordSource;
//! use std::path::Path;
//!
//! let source = CsvRecordSource::from_path(Path::new("transactions.csv")).unwrap();
//! for result in source {
//!     match result {
//!         Ok(record) => println!("{:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Opening the file and reading the header fail from the constructor
//! - Row errors are yielded as `Err` items carrying the 1-based line number

use crate::io::csv_format::{parse_record, validate_header};
use crate::types::{LedgerError, TransactionRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, trace};

/// Streaming source of transaction records
#[derive(Debug)]
pub struct CsvRecordSource<R> {
    reader: csv::Reader<R>,
    record: StringRecord,
    /// Rows read so far, header included
    rows_read: u64,
}

impl CsvRecordSource<File> {
    /// Open a CSV file and validate its header
    pub fn from_path(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| LedgerError::open_file(path, &e))?;
        debug!(path = %path.display(), "opened transactions file");
        Self::new(file)
    }
}

impl<R: Read> CsvRecordSource<R> {
    /// Wrap a reader and validate its header
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace around every field
    /// - Allow flexible field counts (the amount column is optional)
    /// - Treat the first row as data, so the header can be checked here
    pub fn new(input: R) -> Result<Self, LedgerError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(input);

        let mut header = StringRecord::new();
        if !reader.read_record(&mut header)? {
            return Err(LedgerError::MissingHeader);
        }
        validate_header(&header)?;

        Ok(Self {
            reader,
            record: StringRecord::new(),
            rows_read: 1,
        })
    }
}

impl<R: Read> Iterator for CsvRecordSource<R> {
    type Item = Result<TransactionRecord, LedgerError>;

    /// Read and convert the next data row
    ///
    /// Rows are numbered in read order with the header as line 1. Blank lines
    /// are skipped by the reader and do not count.
    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                self.rows_read += 1;
                let line = self.rows_read;
                trace!(line, "read transaction row");
                Some(parse_record(&self.record, line))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
