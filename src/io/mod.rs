//! I/O module
//!
//! Handles CSV parsing and report output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (header check, record conversion, report serialization)
//! - `csv_reader` - Streaming CSV record source with iterator interface

pub mod csv_format;
pub mod csv_reader;

pub use csv_format::{
    convert_csv_record, format_amount, parse_record, validate_header, write_report, CsvRecord,
    INPUT_HEADER, OUTPUT_DECIMAL_PLACES, REPORT_HEADER,
};
pub use csv_reader::CsvRecordSource;
