//! call-center — priority call-center simulation runner.
//!
//! Runs the classic model (4 operators, 14-minute calls, a call every ~2
//! minutes, 600-minute shift) unless overridden by a JSON config file or
//! command-line flags.  Flags win over the file.
//!
//! Usage:
//!   call-center --seed 7 --operators 5
//!   call-center --config shift.json --output-dir output/run1 --json report.json
//!   call-center --replications 20

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;

use cc_core::{Priority, SimConfig};
use cc_output::{CsvWriter, OutputWriter, SimOutputObserver, write_report};
use cc_sim::{NoopObserver, SimBuilder, SimObserver, SimReport, replication_seeds, run_replications};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "call-center", about = "Discrete-event simulation of a priority call center")]
struct Args {
    /// JSON file holding a (partial) SimConfig.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    operators: Option<usize>,

    /// Simulated minutes to run.
    #[arg(long)]
    horizon: Option<u64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Handling time per call, in minutes.
    #[arg(long)]
    call_duration: Option<u64>,

    /// Centre of the inter-arrival distribution, in minutes.
    #[arg(long)]
    call_interval: Option<u64>,

    #[arg(long)]
    interval_spread: Option<u64>,

    #[arg(long)]
    min_interarrival: Option<u64>,

    /// Comma-separated priority levels, e.g. `0,1,2`.
    #[arg(long, value_delimiter = ',')]
    priorities: Option<Vec<u32>>,

    /// Number of independent runs; seeds are derived from `--seed`.
    #[arg(long, default_value_t = 1)]
    replications: usize,

    /// Write occupancy and call tables here.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Write `output.db` instead of CSV files (needs the `sqlite` feature).
    #[arg(long)]
    sqlite: bool,

    /// Dump the full report (single run) or all reports (replications) as JSON.
    #[arg(long)]
    json: Option<PathBuf>,
}

impl Args {
    fn load_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("opening config {}", path.display()))?;
                serde_json::from_reader(file)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => SimConfig::default(),
        };

        if let Some(v) = self.operators        { config.num_operators = v; }
        if let Some(v) = self.horizon          { config.horizon = v; }
        if let Some(v) = self.seed             { config.seed = v; }
        if let Some(v) = self.call_duration    { config.call_duration = v; }
        if let Some(v) = self.call_interval    { config.call_interval = v; }
        if let Some(v) = self.interval_spread  { config.interval_spread = v; }
        if let Some(v) = self.min_interarrival { config.min_interarrival = v; }
        if let Some(v) = &self.priorities {
            config.priorities = v.iter().copied().map(Priority).collect();
        }

        config.validate()?;
        Ok(config)
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

#[cfg(feature = "sqlite")]
fn open_writer(dir: &Path, sqlite: bool) -> Result<Box<dyn OutputWriter>> {
    fs::create_dir_all(dir)?;
    if sqlite {
        return Ok(Box::new(cc_output::SqliteWriter::new(dir)?));
    }
    Ok(Box::new(CsvWriter::new(dir)?))
}

#[cfg(not(feature = "sqlite"))]
fn open_writer(dir: &Path, sqlite: bool) -> Result<Box<dyn OutputWriter>> {
    if sqlite {
        bail!("--sqlite requires building with the `sqlite` feature");
    }
    fs::create_dir_all(dir)?;
    Ok(Box::new(CsvWriter::new(dir)?))
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)?;
    Ok(())
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn print_summary(report: &SimReport) {
    let s = &report.summary;
    println!("Simulation ended at {} minutes (seed {})", report.final_time.0, report.seed);
    println!("  calls arrived      : {}", s.arrived);
    println!("  calls served       : {}", s.served);
    println!("  calls departed     : {}", s.departed);
    println!("  still waiting      : {}", s.still_waiting);
    println!("  in service at end  : {}", s.in_service);
    println!("  mean wait (min)    : {:.2}", s.mean_wait);
    println!("  max wait (min)     : {}", s.max_wait);
    println!("  max queue length   : {}", s.max_queue_len);
    println!("  utilisation        : {:.1}%", s.utilisation * 100.0);
    println!("  peak busy operators: {} / {}", report.peak_occupancy(), report.num_operators);
    println!();
    println!("{:<10} {:>8} {:>12}", "Priority", "Served", "Mean wait");
    println!("{}", "-".repeat(32));
    for level in &s.wait_by_priority {
        println!("{:<10} {:>8} {:>12.2}", level.priority.to_string(), level.served, level.mean_wait);
    }
}

fn print_replications(reports: &[SimReport]) {
    println!("{:<6} {:>20} {:>8} {:>8} {:>10} {:>8}", "Rep", "Seed", "Arrived", "Served", "Mean wait", "Util");
    println!("{}", "-".repeat(66));
    for (i, r) in reports.iter().enumerate() {
        let s = &r.summary;
        println!(
            "{:<6} {:>20} {:>8} {:>8} {:>10.2} {:>7.1}%",
            i, r.seed, s.arrived, s.served, s.mean_wait, s.utilisation * 100.0,
        );
    }
    let n = reports.len() as f64;
    let mean_wait = reports.iter().map(|r| r.summary.mean_wait).sum::<f64>() / n;
    let utilisation = reports.iter().map(|r| r.summary.utilisation).sum::<f64>() / n;
    println!();
    println!("Across {} replications: mean wait {:.2} min, utilisation {:.1}%", reports.len(), mean_wait, utilisation * 100.0);
}

// ── main ──────────────────────────────────────────────────────────────────────

fn run_single<O: SimObserver>(config: SimConfig, observer: &mut O) -> Result<SimReport> {
    let mut sim = SimBuilder::new(config).build()?;
    Ok(sim.run(observer)?)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.load_config()?;
    if args.replications == 0 {
        bail!("--replications must be at least 1");
    }

    println!("=== call-center — priority queueing simulation ===");
    println!(
        "Operators: {}  |  Horizon: {} min  |  Call duration: {} min  |  Seed: {}",
        config.num_operators, config.horizon, config.call_duration, config.seed,
    );
    println!();

    let t0 = Instant::now();

    if args.replications > 1 {
        let seeds = replication_seeds(config.seed, args.replications);
        let reports = run_replications(&config, &seeds)?;
        info!("{} replications finished in {:.3} s", reports.len(), t0.elapsed().as_secs_f64());

        if let Some(dir) = &args.output_dir {
            for (i, report) in reports.iter().enumerate() {
                let mut writer = open_writer(&dir.join(format!("rep-{i}")), args.sqlite)?;
                write_report(&mut writer, report)?;
            }
        }
        if let Some(path) = &args.json {
            write_json(path, &reports)?;
        }
        print_replications(&reports);
        return Ok(());
    }

    let report = match &args.output_dir {
        Some(dir) => {
            let mut obs = SimOutputObserver::new(open_writer(dir, args.sqlite)?);
            let report = run_single(config, &mut obs)?;
            if let Some(e) = obs.take_error() {
                return Err(e).with_context(|| format!("writing output to {}", dir.display()));
            }
            report
        }
        None => run_single(config, &mut NoopObserver)?,
    };
    info!("Simulation complete in {:.3} s", t0.elapsed().as_secs_f64());

    if let Some(path) = &args.json {
        write_json(path, &report)?;
    }
    print_summary(&report);
    Ok(())
}
