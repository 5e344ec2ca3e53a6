// Statement import: CSV files whose amounts are parsed with the currency codec
pub mod statement_csv;

pub use statement_csv::StatementCsvParser;
