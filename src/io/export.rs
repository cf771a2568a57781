use std::io::Write;

use crate::application::AppError;
use crate::domain::Transaction;

/// Column order shared by the CSV export and the JSON object keys.
pub const EXPORT_COLUMNS: [&str; 5] = ["id", "date", "amount", "type", "category"];

/// Exporter for writing a (usually filtered) sequence of transactions to a sink.
pub struct Exporter<'a> {
    transactions: &'a [Transaction],
}

impl<'a> Exporter<'a> {
    pub fn new(transactions: &'a [Transaction]) -> Self {
        Self { transactions }
    }

    /// JSON array of transaction objects, nothing else.
    pub fn json_payload(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self.transactions)
    }

    /// Export transactions as a JSON array
    pub fn export_json<W: Write>(&self, mut writer: W) -> Result<usize, AppError> {
        let json = self.json_payload()?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(self.transactions.len())
    }

    /// Export transactions to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize, AppError> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(EXPORT_COLUMNS)?;

        let mut count = 0;
        for transaction in self.transactions {
            csv_writer.write_record(&[
                transaction.id.to_string(),
                transaction.date.format("%Y-%m-%d").to_string(),
                transaction.amount.to_string(),
                transaction.kind.as_str().to_string(),
                transaction.category.clone(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }
}
