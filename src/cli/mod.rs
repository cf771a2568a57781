use std::fs::File;
use std::io::{BufRead, Write, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::application::{AppError, LedgerService};
use crate::domain::{
    DEFAULT_CATEGORIES, NewTransaction, Transaction, TransactionFilter, TransactionType,
    format_amount, parse_amount,
};
use crate::io::{Exporter, load_snapshot};

/// Saldo - income/expense ledger
#[derive(Parser)]
#[command(name = "saldo")]
#[command(about = "Record income and expenses and see the balance of any filtered view")]
#[command(version)]
pub struct Cli {
    /// JSON snapshot (as written by `export`) to start from; the demo ledger is used otherwise
    #[arg(short, long, env = "SALDO_INPUT")]
    pub input: Option<PathBuf>,

    /// Start from an empty ledger instead of the demo ledger
    #[arg(long, conflicts_with = "input")]
    pub empty: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List transactions matching the filter
    List(FilterArgs),

    /// Show the balance of the transactions matching the filter
    Balance(FilterArgs),

    /// List the category options (first entry is "all")
    Categories,

    /// Income, expense and per-category totals for the transactions matching the filter
    Summary(FilterArgs),

    /// Export the transactions matching the filter
    Export(ExportArgs),

    /// Read commands from stdin and apply them to one in-memory ledger
    Session,
}

/// Filter flags shared by every read command.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Transaction type: all, income, expense
    #[arg(short = 't', long = "type", default_value = "all")]
    pub kind: String,

    /// Category, or "all"
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Filter from date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from_date: Option<String>,

    /// Filter to date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to_date: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> Result<TransactionFilter> {
        let from_date = self
            .from_date
            .as_deref()
            .map(parse_date)
            .transpose()
            .context("Invalid from-date")?;
        let to_date = self
            .to_date
            .as_deref()
            .map(parse_date)
            .transpose()
            .context("Invalid to-date")?;

        TransactionFilter::from_selection(&self.kind, &self.category, from_date, to_date)
            .with_context(|| format!("Invalid type filter '{}'", self.kind))
    }
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

/// One line of a `session`.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Record a transaction
    Add {
        /// Date of the transaction (YYYY-MM-DD)
        date: String,

        /// Amount (e.g., "50" or "12.5"), never negative
        amount: String,

        /// Transaction type: income or expense
        #[arg(short = 't', long = "type", default_value = "income")]
        kind: String,

        /// Category (e.g., Groceries, Bills, Salary)
        #[arg(short, long)]
        category: String,
    },

    /// Replace the fields of a transaction; omitted fields keep their current value
    Edit {
        /// Transaction id or unique id prefix
        id: String,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        amount: Option<String>,

        #[arg(short = 't', long = "type")]
        kind: Option<String>,

        #[arg(short, long)]
        category: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction id or unique id prefix
        id: String,
    },

    /// Show one transaction
    Show {
        /// Transaction id or unique id prefix
        id: String,
    },

    List(FilterArgs),

    Balance(FilterArgs),

    Categories,

    Summary(FilterArgs),

    Export(ExportArgs),

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

impl Cli {
    fn load_service(&self) -> Result<LedgerService> {
        if self.empty {
            return Ok(LedgerService::empty());
        }

        match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open snapshot: {}", path.display()))?;
                let transactions = load_snapshot(file)
                    .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
                Ok(LedgerService::from_snapshot(transactions)?)
            }
            None => Ok(LedgerService::with_demo_data()),
        }
    }

    pub fn run(self) -> Result<()> {
        let mut service = self.load_service()?;
        tracing::debug!(
            transactions = service.list_transactions().len(),
            "ledger loaded"
        );

        match self.command {
            Commands::List(filter) => run_list_command(&service, &filter)?,
            Commands::Balance(filter) => run_balance_command(&service, &filter)?,
            Commands::Categories => run_categories_command(&service),
            Commands::Summary(filter) => run_summary_command(&service, &filter)?,
            Commands::Export(args) => run_export_command(&service, &args)?,
            Commands::Session => {
                let stdin = std::io::stdin();
                run_session(&mut service, stdin.lock())?;
            }
        }

        Ok(())
    }
}

/// Apply session commands read line by line. A bad line is reported and skipped.
pub fn run_session<R: BufRead>(service: &mut LedgerService, reader: R) -> Result<()> {
    for (line_num, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read session input")?;
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() || words[0].starts_with('#') {
            continue;
        }

        let parsed = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(err) => {
                eprintln!("line {}: {}", line_num + 1, err.render().to_string().trim_end());
                continue;
            }
        };

        if matches!(parsed.command, SessionCommand::Quit) {
            break;
        }

        if let Err(err) = run_session_command(service, parsed.command) {
            eprintln!("line {}: {:#}", line_num + 1, err);
        }
    }
    Ok(())
}

fn run_session_command(service: &mut LedgerService, command: SessionCommand) -> Result<()> {
    match command {
        SessionCommand::Add {
            date,
            amount,
            kind,
            category,
        } => {
            let new = parse_new_transaction(&date, &amount, &kind, &category)?;
            let transaction =
                service.create_transaction(new.date, new.amount, new.kind, new.category);
            println!(
                "Added {} {} {} ({})",
                short_id(&transaction),
                transaction.kind,
                format_amount(transaction.amount),
                transaction.category
            );
        }

        SessionCommand::Edit {
            id,
            date,
            amount,
            kind,
            category,
        } => {
            let current = service.find_by_id_prefix(&id)?;
            let transaction_id = current.id;
            let mut fields = current.to_new();

            if let Some(date) = date {
                fields.date = parse_date(&date)?;
            }
            if let Some(amount) = amount {
                fields.amount = parse_amount_field(&amount)?;
            }
            if let Some(kind) = kind {
                fields.kind = parse_type_field(&kind)?;
            }
            if let Some(category) = category {
                fields.category = validate_category(&category)?;
            }

            service.try_update_transaction(
                transaction_id,
                fields.date,
                fields.amount,
                fields.kind,
                fields.category,
            )?;
            println!("Updated {}", &transaction_id.to_string()[..8]);
        }

        SessionCommand::Delete { id } => {
            let transaction_id = service.find_by_id_prefix(&id)?.id;
            service.try_delete_transaction(transaction_id)?;
            println!("Deleted {}", &transaction_id.to_string()[..8]);
        }

        SessionCommand::Show { id } => {
            let transaction = service.find_by_id_prefix(&id)?;
            println!("Transaction: {}", transaction.id);
            println!("  Date:      {}", transaction.date);
            println!("  Type:      {}", transaction.kind);
            println!("  Amount:    {}", format_amount(transaction.amount));
            println!("  Category:  {}", transaction.category);
        }

        SessionCommand::List(filter) => run_list_command(service, &filter)?,
        SessionCommand::Balance(filter) => run_balance_command(service, &filter)?,
        SessionCommand::Categories => run_categories_command(service),
        SessionCommand::Summary(filter) => run_summary_command(service, &filter)?,
        SessionCommand::Export(args) => run_export_command(service, &args)?,
        SessionCommand::Quit => {}
    }
    Ok(())
}

fn run_list_command(service: &LedgerService, filter: &FilterArgs) -> Result<()> {
    let transactions = service.get_filtered_transactions(&filter.to_filter()?);

    if transactions.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }

    println!(
        "{:<10} {:<12} {:<8} {:>12} CATEGORY",
        "ID", "DATE", "TYPE", "AMOUNT"
    );
    println!("{}", "-".repeat(60));
    for transaction in &transactions {
        println!(
            "{:<10} {:<12} {:<8} {:>12} {}",
            short_id(transaction),
            transaction.date,
            transaction.kind,
            format_amount(transaction.amount),
            truncate(&transaction.category, 20)
        );
    }
    println!("{}", "-".repeat(60));
    println!("Balance: {}", format_amount(service.get_balance(&transactions)));
    Ok(())
}

fn run_balance_command(service: &LedgerService, filter: &FilterArgs) -> Result<()> {
    let transactions = service.get_filtered_transactions(&filter.to_filter()?);
    println!("Balance: {}", format_amount(service.get_balance(&transactions)));
    Ok(())
}

fn run_categories_command(service: &LedgerService) {
    let categories = service.get_categories();
    for category in &categories {
        println!("{}", category);
    }
    // Suggest the form defaults the ledger does not use yet
    let unused: Vec<&str> = DEFAULT_CATEGORIES
        .iter()
        .copied()
        .filter(|d| !categories.iter().any(|c| c == d))
        .collect();
    if !unused.is_empty() {
        eprintln!("Suggested: {}", unused.join(", "));
    }
}

fn run_summary_command(service: &LedgerService, filter: &FilterArgs) -> Result<()> {
    let transactions = service.get_filtered_transactions(&filter.to_filter()?);
    let summary = service.summarize(&transactions);

    println!("Transactions: {}", summary.count);
    println!("Income:       {}", format_amount(summary.total_income));
    println!("Expense:      {}", format_amount(summary.total_expense));
    println!("Net:          {}", format_amount(summary.net));

    let breakdown = service.category_breakdown(&transactions);
    if !breakdown.is_empty() {
        println!();
        println!(
            "{:<20} {:>12} {:>12} {:>12} {:>6}",
            "CATEGORY", "INCOME", "EXPENSE", "NET", "COUNT"
        );
        println!("{}", "-".repeat(66));
        for entry in breakdown {
            println!(
                "{:<20} {:>12} {:>12} {:>12} {:>6}",
                truncate(&entry.category, 20),
                format_amount(entry.income),
                format_amount(entry.expense),
                format_amount(entry.net),
                entry.count
            );
        }
    }
    Ok(())
}

fn run_export_command(service: &LedgerService, args: &ExportArgs) -> Result<()> {
    let transactions = service.get_filtered_transactions(&args.filter.to_filter()?);
    let exporter = Exporter::new(&transactions);

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    let count = match args.format {
        ExportFormat::Json => exporter.export_json(writer)?,
        ExportFormat::Csv => exporter.export_csv(writer)?,
    };

    if args.output.is_some() {
        eprintln!("Exported {} transactions", count);
    }
    Ok(())
}

/// Validate the raw form fields of a transaction.
pub fn parse_new_transaction(
    date: &str,
    amount: &str,
    kind: &str,
    category: &str,
) -> Result<NewTransaction> {
    let date = parse_date(date)?;
    let amount = parse_amount_field(amount)?;
    let kind = parse_type_field(kind)?;
    let category = validate_category(category)?;
    Ok(NewTransaction::new(date, amount, kind, category))
}

fn parse_amount_field(amount: &str) -> Result<f64, AppError> {
    Ok(parse_amount(amount)?)
}

fn parse_type_field(kind: &str) -> Result<TransactionType, AppError> {
    Ok(kind.parse()?)
}

fn validate_category(category: &str) -> Result<String, AppError> {
    let category = category.trim();
    if category.is_empty() {
        return Err(AppError::EmptyCategory);
    }
    Ok(category.to_string())
}

fn parse_date(date_str: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(date_str.to_string()))
}

fn short_id(transaction: &Transaction) -> String {
    transaction.id.to_string()[..8].to_string()
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
