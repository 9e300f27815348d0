use super::build_chain;
use crate::cli::FoldArgs;
use crate::config::RunFile;
use crate::error::{CliError, Result};
use crate::ui::ProgressView;
use hpfold::engine::config::FoldConfigBuilder;
use hpfold::engine::progress::ProgressReporter;
use hpfold::engine::state::Termination;
use hpfold::workflows::fold;
use hpfold::workflows::fold::FoldResult;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Step budget used when neither the flags nor the run file give one.
const DEFAULT_STEPS: u64 = 2_000;

pub fn run(args: FoldArgs, quiet: bool) -> Result<()> {
    let file = match &args.config {
        Some(path) => RunFile::load(path)?,
        None => RunFile::default(),
    };

    let sequence = args.sequence.or(file.sequence).ok_or_else(|| {
        CliError::Argument("a residue sequence is required (--sequence or a run file)".into())
    })?;
    let path = args.path.or(file.path);
    let chain = build_chain(&sequence, path.as_deref())?;

    let mut builder =
        FoldConfigBuilder::new().steps(args.steps.or(file.steps).unwrap_or(DEFAULT_STEPS));
    if let Some(limit) = args.retry_limit.or(file.retry_limit) {
        builder = builder.retry_limit(limit);
    }
    if let Some(seed) = args.seed.or(file.seed) {
        builder = builder.seed(seed);
    }
    let config = builder.build()?;

    info!(sequence = %sequence, steps = config.steps, "folding chain");

    let view = Arc::new(ProgressView::new(!quiet));
    let reporter = {
        let view = Arc::clone(&view);
        ProgressReporter::with_callback(Box::new(move |event| view.handle(event)))
    };

    let result = fold::run(&chain, &config, &reporter)?;

    if let Some(trace_path) = &args.trace {
        write_trace(trace_path, &result.energy_trace)?;
        info!(path = %trace_path.display(), "energy trace written");
    }

    print_report(&sequence, &result);
    Ok(())
}

fn print_report(sequence: &str, result: &FoldResult) {
    println!("Sequence:       {sequence}");
    println!("Initial energy: {}", result.initial.energy);
    println!("Final energy:   {}", result.best.energy);
    println!(
        "Steps:          {} evaluated, {} accepted",
        result.steps_completed, result.accepted_moves
    );
    if let Termination::ProposalsExhausted { steps, attempts } = result.termination {
        println!(
            "Stopped early after step {steps}: no valid proposal within {attempts} attempts"
        );
    }
    println!("Final conformation:");
    for residue in result.best.chain.residues() {
        println!(
            "  {:>3} {} ({}, {})",
            residue.index, residue.hydrophobicity, residue.position.x, residue.position.y
        );
    }
}

fn write_trace(path: &Path, energy_trace: &[u32]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["step", "energy"])?;
    for (step, energy) in energy_trace.iter().enumerate() {
        writer.write_record([(step + 1).to_string(), energy.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
