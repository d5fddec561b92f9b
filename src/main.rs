use anyhow::{anyhow, Context, Result};
use clap::Parser;
use periodgen::{
    init_tracing_once, parse_date, parse_weekday, Date, GeneratorOptions, Grouping, Period,
    PeriodGenerator, Weekday,
};
use std::io::{self, BufWriter, Write};

/// Print the calendar periods between two dates.
#[derive(Parser)]
#[command(
    name = "periodgen",
    version,
    about = "Generate day, week or month periods over a date range"
)]
struct Cli {
    /// First date of the range (YYYY-MM-DD).
    #[arg(value_parser = parse_date_arg)]
    start: Date,

    /// Last date of the range, inclusive (YYYY-MM-DD).
    #[arg(value_parser = parse_date_arg)]
    end: Date,

    /// Period size: day, week or month.
    #[arg(short, long, default_value_t = Grouping::Day)]
    grouping: Grouping,

    /// Walk from `start` back to `end` (requires start >= end).
    #[arg(short, long)]
    backward: bool,

    /// Weekday weeks start on (week grouping only).
    #[arg(long, default_value = "monday", value_parser = parse_weekday_arg)]
    first_day_of_week: Weekday,

    /// Stop before the period containing this date, report it, then resume.
    #[arg(long, value_parser = parse_date_arg)]
    until: Option<Date>,

    /// Emit one JSON object per period instead of plain text.
    #[arg(long)]
    json: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_date_arg(s: &str) -> Result<Date> {
    parse_date(s).with_context(|| format!("invalid date '{s}', expected YYYY-MM-DD"))
}

fn parse_weekday_arg(s: &str) -> Result<Weekday> {
    parse_weekday(s).ok_or_else(|| anyhow!("unknown weekday '{s}'"))
}

fn emit(out: &mut impl Write, period: Period, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, &period)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{period}")?;
    }
    Ok(())
}

/// Marker written after the `--until` walk stalls: the period the walk resumes from.
fn emit_boundary(out: &mut impl Write, period: Period, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, &serde_json::json!({ "boundary": period }))?;
        writeln!(out)?;
    } else {
        writeln!(out, "@@ {period}")?;
    }
    Ok(())
}

/// Write every period of `generator` to `out`, pausing at `until` when given.
fn walk(
    generator: &mut PeriodGenerator,
    until: Option<Date>,
    json: bool,
    out: &mut impl Write,
) -> Result<usize> {
    let mut count = 0usize;

    if let Some(until) = until {
        while generator.advance_until(until).has_next {
            if let Some(p) = generator.current_period() {
                emit(out, p, json)?;
                count += 1;
            }
        }
        if let Some(p) = generator.current_period() {
            emit_boundary(out, p, json)?;
        }
        tracing::info!(
            until = %until,
            cursor = ?generator.current_date(),
            finished = generator.is_finished(),
            "reached boundary, resuming"
        );
    }

    for period in generator.periods() {
        emit(out, period, json)?;
        count += 1;
    }
    Ok(count)
}

fn run(cli: Cli) -> Result<usize> {
    let mut generator = GeneratorOptions::default()
        .with_grouping(cli.grouping)
        .backward(cli.backward)
        .with_first_day_of_week(cli.first_day_of_week)
        .build(cli.start, cli.end)
        .context("cannot create period generator")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let count = walk(&mut generator, cli.until, cli.json, &mut out)?;
    out.flush().context("failed to flush output")?;
    Ok(count)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing_once(cli.verbose);
    let count = run(cli)?;
    tracing::info!("Generated {} periods.", count);
    Ok(())
}
