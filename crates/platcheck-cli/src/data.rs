use std::{fmt, fs::File, io::BufReader, path::Path, str::FromStr};

use anyhow::{Context as _, bail};
use log::debug;
use platcheck_engine::Chunk;
use serde::de::DeserializeOwned;

/// Component counts available for the suboptimal GMM variants, in file order.
pub(crate) const GMM_COMPONENT_COUNTS: [u32; 7] = [8, 28, 48, 68, 88, 108, 128];

/// Which group of generated chunks to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChunkGroup {
    /// Chunks cut from the original levels.
    Original,
    /// VAE-generated chunks.
    Vae,
    /// Best-configuration GMM output.
    GmmOptimized,
    /// GMM output for a specific component count.
    GmmComponents(u32),
}

impl fmt::Display for ChunkGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original => write!(f, "org"),
            Self::Vae => write!(f, "vae"),
            Self::GmmOptimized => write!(f, "gmm-optim"),
            Self::GmmComponents(n) => write!(f, "gmm-{n}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unrecognized chunk group {group:?} (expected org, vae, gmm-optim, or gmm-<n>)")]
pub(crate) struct ParseChunkGroupError {
    group: String,
}

impl FromStr for ChunkGroup {
    type Err = ParseChunkGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseChunkGroupError {
            group: s.to_owned(),
        };
        match s {
            "org" => Ok(Self::Original),
            "vae" => Ok(Self::Vae),
            "gmm-optim" => Ok(Self::GmmOptimized),
            _ => {
                let n = s
                    .strip_prefix("gmm-")
                    .and_then(|n| n.parse().ok())
                    .ok_or_else(err)?;
                if !GMM_COMPONENT_COUNTS.contains(&n) {
                    return Err(err());
                }
                Ok(Self::GmmComponents(n))
            }
        }
    }
}

/// Loads the chunk array for a group from `data_dir`.
pub(crate) fn load_chunks(data_dir: &Path, group: ChunkGroup) -> anyhow::Result<Vec<Chunk>> {
    let chunks = match group {
        ChunkGroup::Original => read_json(&data_dir.join("smb_binary.json"))?,
        ChunkGroup::Vae => read_json(&data_dir.join("gens_binary.json"))?,
        ChunkGroup::GmmOptimized => read_json(&data_dir.join("gmms_binary.json"))?,
        ChunkGroup::GmmComponents(n) => {
            // One chunk array per component count, in GMM_COMPONENT_COUNTS
            // order.
            let path = data_dir.join("gmms_suboptim_binary.json");
            let variants: Vec<Vec<Chunk>> = read_json(&path)?;
            let index = GMM_COMPONENT_COUNTS
                .iter()
                .position(|&count| count == n)
                .with_context(|| format!("no variant for {n} components"))?;
            variants
                .into_iter()
                .nth(index)
                .with_context(|| format!("{} has no entry at index {index}", path.display()))?
        }
    };
    if chunks.is_empty() {
        bail!("chunk group {group} is empty");
    }
    debug!("chunk group {group}: {} chunks loaded", chunks.len());
    Ok(chunks)
}

fn read_json<T>(path: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_groups() {
        assert_eq!("org".parse(), Ok(ChunkGroup::Original));
        assert_eq!("vae".parse(), Ok(ChunkGroup::Vae));
        assert_eq!("gmm-optim".parse(), Ok(ChunkGroup::GmmOptimized));
    }

    #[test]
    fn test_parse_component_counts() {
        for n in GMM_COMPONENT_COUNTS {
            let parsed: ChunkGroup = format!("gmm-{n}").parse().unwrap();
            assert_eq!(parsed, ChunkGroup::GmmComponents(n));
        }
    }

    #[test]
    fn test_reject_unknown_selectors() {
        for s in ["", "orig", "gmm", "gmm-", "gmm-50", "gmm-optimal", "vae2"] {
            assert!(s.parse::<ChunkGroup>().is_err(), "{s:?} must be rejected");
        }
    }

    #[test]
    fn test_display_round_trips() {
        for group in [
            ChunkGroup::Original,
            ChunkGroup::Vae,
            ChunkGroup::GmmOptimized,
            ChunkGroup::GmmComponents(28),
        ] {
            assert_eq!(group.to_string().parse(), Ok(group));
        }
    }
}
