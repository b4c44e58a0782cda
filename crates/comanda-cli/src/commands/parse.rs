//! Parse command - extract a single order from text.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use comanda_core::models::config::OutputFormat;
use comanda_core::{format_currency, ExtractedOrder, OrderParser, OrderRecord, TextOrderParser};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input text file, or "-" for stdin
    #[arg(required = true)]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Report issues with the extracted order
    #[arg(long)]
    validate: bool,

    /// Emit the persisted order record (JSON only)
    #[arg(long)]
    record: bool,

    /// Free-text observations attached to the record
    #[arg(long, requires = "record")]
    observations: Option<String>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum FormatArg {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    let format = args.format.map(OutputFormat::from).unwrap_or(config.output.format);
    let pretty = args.pretty || config.output.pretty;

    if args.record && format != OutputFormat::Json {
        anyhow::bail!("--record is only available with JSON output");
    }

    let text = read_input(&args.input).await?;
    info!("Parsing order from {}", args.input);

    let parser = TextOrderParser::with_config(config.extraction.clone());
    let result = parser.parse(&text);

    for warning in &result.warnings {
        debug!("{}", warning);
    }

    if args.validate {
        let issues = result.order.validate();
        if !issues.is_empty() {
            eprintln!("{}", style("Validation issues:").yellow());
            for issue in &issues {
                eprintln!("  - {}", issue);
            }
        }
    }

    let output = if args.record {
        let record = OrderRecord::from_extracted(result.order, args.observations);
        to_json(&record, pretty)?
    } else {
        format_order(&result.order, format, pretty)?
    };

    if let Some(output_path) = &args.output {
        tokio::fs::write(output_path, &output).await?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

async fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        tokio::io::stdin().read_to_string(&mut text).await?;
        return Ok(text);
    }

    let path = PathBuf::from(input);
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    Ok(tokio::fs::read_to_string(&path).await?)
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

/// File extension for an output format.
pub fn extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Json => "json",
        OutputFormat::Csv => "csv",
        OutputFormat::Text => "txt",
    }
}

pub fn format_order(
    order: &ExtractedOrder,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => to_json(order, pretty),
        OutputFormat::Csv => format_csv(order),
        OutputFormat::Text => Ok(format_text(order)),
    }
}

/// One-line item summary: `2x Pastel; 1x Suco`.
pub fn items_summary(order: &ExtractedOrder) -> String {
    order
        .items
        .iter()
        .map(|i| format!("{}x {}", i.qty, i.name))
        .collect::<Vec<_>>()
        .join("; ")
}

fn format_csv(order: &ExtractedOrder) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["client", "date", "payment_method", "items", "total"])?;

    wtr.write_record([
        order.client.clone().unwrap_or_default(),
        order.date.clone().unwrap_or_default(),
        order.payment_method.map(|m| m.to_string()).unwrap_or_default(),
        items_summary(order),
        order.total.map(|t| t.to_string()).unwrap_or_default(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(order: &ExtractedOrder) -> String {
    let mut output = String::new();

    output.push_str(&format!("Client: {}\n", order.client.as_deref().unwrap_or("-")));
    output.push_str(&format!("Date: {}\n", order.date.as_deref().unwrap_or("-")));
    output.push('\n');

    output.push_str("Items:\n");
    if order.items.is_empty() {
        output.push_str("  (none)\n");
    }
    for item in &order.items {
        output.push_str(&format!(
            "  {}x {}  {}\n",
            item.qty,
            item.name,
            format_currency(item.price)
        ));
    }
    output.push('\n');

    output.push_str(&format!(
        "Payment: {}\n",
        order.payment_method.map(|m| m.label()).unwrap_or("-")
    ));
    output.push_str(&format!("Total: {}\n", format_currency(order.total)));

    output
}
