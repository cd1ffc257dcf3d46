use clap::Parser;
use std::path::PathBuf;

/// Replay a CSV transaction log and print the final account balances
#[derive(Parser, Debug)]
#[command(name = "tx-ledger")]
#[command(about = "Replay a CSV transaction log and print per-client balances", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing transaction records
    #[arg(value_name = "INPUT", help = "Path to the transactions CSV file")]
    pub input_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::relative(&["tx-ledger", "transactions.csv"], "transactions.csv")]
    #[case::absolute(&["tx-ledger", "/tmp/input.csv"], "/tmp/input.csv")]
    #[case::after_separator(&["tx-ledger", "--", "-odd-name.csv"], "-odd-name.csv")]
    fn test_input_path_parsing(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.input_file, PathBuf::from(expected));
    }

    #[rstest]
    #[case::missing_input(&["tx-ledger"])]
    #[case::extra_argument(&["tx-ledger", "a.csv", "b.csv"])]
    #[case::unknown_flag(&["tx-ledger", "--strategy", "sync", "input.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
