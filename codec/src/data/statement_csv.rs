use crate::config::StatementSettings;
use crate::currency::CurrencyCodec;
use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use shared::models::Transaction;
use std::fs::File;
use std::io::{BufReader, Read};

pub struct StatementCsvParser;

impl StatementCsvParser {
    // CSV Header: Data;Descrição;Valor;Categoria (Categoria optional)
    // Example Row: 30/12/2024;Supermercado;-R$ 1.234,56;Alimentação
    pub fn load_transactions_from_csv(
        file_path: &str,
        settings: &StatementSettings,
        codec: &CurrencyCodec,
    ) -> Result<Vec<Transaction>> {
        let file = File::open(file_path)
            .with_context(|| format!("Failed to open CSV file '{}'", file_path))?;
        let transactions = Self::load_transactions_from_reader(BufReader::new(file), settings, codec)?;
        tracing::info!("Loaded {} transactions from {}", transactions.len(), file_path);
        Ok(transactions)
    }

    pub fn load_transactions_from_reader<R: Read>(
        reader: R,
        settings: &StatementSettings,
        codec: &CurrencyCodec,
    ) -> Result<Vec<Transaction>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(settings.delimiter_byte()?)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let mut transactions = Vec::new();

        for (idx, result) in rdr.records().enumerate() {
            let line = idx + 2; // header is line 1
            let record = result.with_context(|| format!("Error reading CSV record at line {}", line))?;

            let date_str = Self::get_field(&record, &headers, &["Data"])
                .ok_or_else(|| anyhow!("Missing 'Data' field in CSV record at line {}", line))?;
            let description = Self::get_field(&record, &headers, &["Descrição", "Descricao"])
                .ok_or_else(|| anyhow!("Missing 'Descrição' field in CSV record at line {}", line))?;
            let amount_str = Self::get_field(&record, &headers, &["Valor"])
                .ok_or_else(|| anyhow!("Missing 'Valor' field in CSV record at line {}", line))?;
            let category = Self::get_field(&record, &headers, &["Categoria"])
                .filter(|c| !c.is_empty())
                .map(str::to_string);

            let date = NaiveDate::parse_from_str(date_str, &settings.date_format)
                .map_err(|e| anyhow!("Error parsing 'Data' at line {}: '{}': {}", line, date_str, e))?;
            let amount = codec
                .parse(amount_str)
                .map_err(|e| anyhow!("Error parsing 'Valor' at line {}: {}", line, e))?;

            transactions.push(Transaction {
                date,
                description: description.to_string(),
                amount,
                category,
            });
        }
        Ok(transactions)
    }

    // Looks a field up by any of its accepted header names.
    fn get_field<'a>(record: &'a StringRecord, headers: &StringRecord, names: &[&str]) -> Option<&'a str> {
        headers
            .iter()
            .position(|header| names.contains(&header))
            .and_then(|pos| record.get(pos))
    }
}
