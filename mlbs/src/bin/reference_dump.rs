//! Compute an MLBS reference bundle and dump it for offline comparison.
//!
//! Writes the four artifacts as CSV columns, or prints a short summary when
//! no output path is given. Useful for diffing against captures from the
//! vendor tooling.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use mlbs::{reference_dependencies, AcquisitionParams, SequenceOrder};

/// MLBS reference bundle dump tool
#[derive(Parser, Debug)]
#[command(name = "reference_dump")]
#[command(about = "Compute an MLBS reference bundle and dump it as CSV")]
#[command(version)]
struct Args {
    /// MLBS register order (9, 12, or 15)
    #[arg(short = 'm', long, default_value = "9")]
    order: u32,

    /// Sequence clock rate in GHz
    #[arg(short, long, default_value = "13.312")]
    clock: f64,

    /// Oversampling factor
    #[arg(short, long, default_value = "1")]
    oversampling: u32,

    /// Output CSV path (summary to stdout when omitted)
    #[arg(short = 'f', long)]
    output: Option<PathBuf>,

    /// Reject parameter combinations without golden validation data
    #[arg(long)]
    strict: bool,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let order = SequenceOrder::try_from(args.order)?;
    let params = AcquisitionParams::new(args.clock, args.oversampling, order)?;
    if args.strict {
        params.ensure_verified()?;
    }

    let bundle = reference_dependencies(&params)?;
    info!(
        "computed reference bundle: {} samples at {} GHz",
        bundle.len(),
        params.sample_rate_ghz()
    );

    match &args.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            writeln!(out, "delay_ns,waveform,spectrum_re,spectrum_im,frequency_ghz")?;
            for k in 0..bundle.len() {
                writeln!(
                    out,
                    "{},{},{},{},{}",
                    bundle.delay_times_ns()[k],
                    bundle.waveform()[k],
                    bundle.spectrum()[k].re,
                    bundle.spectrum()[k].im,
                    bundle.frequencies_ghz()[k],
                )?;
            }
            println!("wrote {} rows to {}", bundle.len(), path.display());
        }
        None => {
            let last_delay = *bundle.delay_times_ns().last().unwrap_or(&0.0);
            let max_freq = bundle
                .frequencies_ghz()
                .iter()
                .fold(0.0_f64, |m, &f| m.max(f));
            println!("order:        {order}");
            println!("samples:      {}", bundle.len());
            println!("delay span:   0 .. {last_delay:.4} ns");
            println!("max frequency: {max_freq:.4} GHz");
            println!("verified:     {}", params.is_verified());
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
