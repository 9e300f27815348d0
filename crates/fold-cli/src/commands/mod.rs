pub mod fold;
pub mod score;

use crate::error::Result;
use hpfold::core::models::chain::Chain;
use hpfold::core::models::lattice::parse_path;
use hpfold::core::models::residue::parse_sequence;

/// Builds the initial chain from a sequence and an optional direction path.
///
/// Without a path the chain starts as a straight strand along +x, matching
/// the conventional unfolded starting conformation.
pub(crate) fn build_chain(sequence: &str, path: Option<&str>) -> Result<Chain> {
    let tags = parse_sequence(sequence)?;
    let chain = match path {
        Some(path) => Chain::from_directions(tags, &parse_path(path)?)?,
        None => Chain::extended(tags)?,
    };
    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn build_chain_defaults_to_a_straight_strand() {
        let chain = build_chain("HPPH", None).unwrap();
        assert_eq!(chain.len(), 4);
        assert!(chain.positions().iter().all(|p| p.y == 0));
    }

    #[test]
    fn build_chain_follows_an_explicit_path() {
        let chain = build_chain("HPPH", Some("ENW")).unwrap();
        assert_eq!(chain.len(), 4);
        assert!(chain.validate().is_ok());
    }

    #[test]
    fn build_chain_rejects_a_bad_sequence() {
        assert!(matches!(
            build_chain("HQX", None),
            Err(CliError::Sequence(_))
        ));
    }

    #[test]
    fn build_chain_rejects_a_self_intersecting_path() {
        assert!(matches!(
            build_chain("HPP", Some("EW")),
            Err(CliError::Chain(_))
        ));
    }
}
