use super::build_chain;
use crate::cli::ScoreArgs;
use crate::error::Result;
use hpfold::core::energy::unfavorable_contacts;

pub fn run(args: ScoreArgs) -> Result<()> {
    let chain = build_chain(&args.sequence, args.path.as_deref())?;
    let energy = unfavorable_contacts(chain.positions(), chain.tags());

    println!("Sequence: {}", args.sequence);
    println!(
        "Shape:    {}",
        args.path.as_deref().unwrap_or("straight strand")
    );
    println!("Energy:   {energy}");
    Ok(())
}
