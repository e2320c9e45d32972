use std::io::{stderr, stdout, BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use transaction_dashboard::aggregate::{Dashboard, HistogramBar, Statistics, TableQuery, TableView};
use transaction_dashboard::dataset;
use transaction_dashboard::models::ChartKind;
use transaction_dashboard::types::MonthFilter;

/// Text front end for the sales dashboard: prints the chart, statistics,
/// and table views of a transaction dataset.
#[derive(Parser, Debug)]
#[command(name = "transaction-dashboard")]
#[command(version, about)]
struct Cli {
    /// Dataset file (.json array of records, or headered .csv)
    dataset: PathBuf,

    /// Month selection: All or a month name
    #[arg(short, long, default_value = "All")]
    month: MonthFilter,

    /// Which chart section(s) to print: all, bar, pie, line
    #[arg(short, long, default_value = "all")]
    chart: ChartKind,

    /// Search text applied to the table view
    #[arg(short, long, default_value = "")]
    search: String,

    /// 1-indexed table page
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Table rows per page
    #[arg(long, default_value_t = 10)]
    page_size: usize,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "error")]
    log_level: String
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let page_size = NonZeroUsize::new(cli.page_size)
        .context("page size must be at least 1")?;

    let timer = Instant::now();
    let records = dataset::load(&cli.dataset)?;
    info!("Loaded {} records in {:?}", records.len(), timer.elapsed());

    let dashboard = Dashboard::new(records);

    let histogram = dashboard.chart_view(cli.month);
    let statistics = dashboard.statistics_view(cli.month);
    let table = dashboard.table_view(&TableQuery {
        month: cli.month,
        search: cli.search,
        page_number: cli.page,
        page_size
    });

    let mut output = BufWriter::new(stdout().lock());

    write_chart_sections(&mut output, cli.month, cli.chart, &histogram)?;
    write_statistics(&mut output, cli.month, &statistics)?;
    write_table(&mut output, &table)?;

    output.flush()?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    // Views go to stdout, so logging stays on stderr.
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_chart_sections<W: Write>(
    output: &mut W,
    month: MonthFilter,
    chart: ChartKind,
    histogram: &[HistogramBar]
) -> Result<()> {
    // Bar, pie, and line are all drawn from the same histogram; the chart
    // selection only decides which section headers appear.
    let sections = [
        (ChartKind::Bar, "Bar chart"),
        (ChartKind::Pie, "Pie chart"),
        (ChartKind::Line, "Line chart")
    ];

    for (kind, heading) in sections {
        if !chart.includes(kind) {
            continue;
        }

        writeln!(output, "{heading} - {month}")?;

        for bar in histogram {
            writeln!(output, "{},{}", bar.label, bar.count)?;
        }

        writeln!(output)?;
    }

    Ok(())
}

fn write_statistics<W: Write>(output: &mut W, month: MonthFilter, statistics: &Statistics) -> Result<()> {
    writeln!(output, "Statistics - {month}")?;
    writeln!(output, "Total sale: {:.2}", statistics.total_sale.round_dp(2))?;
    writeln!(output, "Total sold items: {}", statistics.total_sold_items)?;
    writeln!(output, "Total not sold items: {}", statistics.total_not_sold_items)?;
    writeln!(output)?;

    Ok(())
}

fn write_table<W: Write>(output: &mut W, table: &TableView) -> Result<()> {
    writeln!(output, "id,title,description,price,category,sold,image")?;

    for row in &table.rows {
        writeln!(
            output,
            "{},{},{},{},{},{},{}",
            row.id,
            row.title,
            row.description,
            row.price,
            row.category,
            if row.sold { "Yes" } else { "No" },
            row.image
        )?;
    }

    writeln!(output, "Page {} of {} ({} rows)", table.page_number, table.total_pages, table.total_rows)?;

    Ok(())
}
