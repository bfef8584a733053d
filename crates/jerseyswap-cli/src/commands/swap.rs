use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use jerseyswap_application::{DownloadArtifact, SwapWorkflow};
use jerseyswap_core::studio::PlayerCard;
use jerseyswap_core::workflow::DEFAULT_JERSEY_NUMBER;
use jerseyswap_infrastructure::studio::image::{decode_data_url, read_image_file};

#[derive(Args)]
pub struct SwapArgs {
    /// Source photo (png, jpeg, webp or gif)
    pub photo: PathBuf,
    /// League id, see `jerseyswap leagues`
    #[arg(long)]
    pub league: String,
    /// Team id, see `jerseyswap teams <league>`
    #[arg(long)]
    pub team: String,
    #[arg(long, default_value = DEFAULT_JERSEY_NUMBER)]
    pub number: String,
    #[arg(long)]
    pub remove_background: bool,
    /// Upscale the result to 4K before saving
    #[arg(long = "4k")]
    pub upscale: bool,
    /// Print the generated player card
    #[arg(long)]
    pub card: bool,
    /// Output directory
    #[arg(long, short, default_value = ".")]
    pub out: PathBuf,
}

pub async fn run(flow: &mut SwapWorkflow, args: SwapArgs) -> Result<()> {
    let handle = flow
        .active_profile()
        .map(|p| p.handle.clone())
        .context("Not signed in. Run `jerseyswap signin` first.")?;
    let photo = read_image_file(&args.photo)
        .await
        .with_context(|| format!("Failed to read {}", args.photo.display()))?;

    flow.start()?;
    println!("📸 Preparing plate...");
    flow.upload(photo).await?;
    flow.select_league(&args.league)?;
    let team = flow.select_team(&args.team)?.name;
    flow.set_number(&args.number)?;
    flow.set_remove_background(args.remove_background)?;

    println!("⚙️  Swapping {} into {} #{}...", handle, team, args.number);
    flow.confirm_swap().await?;
    if args.upscale {
        println!("🔬 Synthesizing 4K...");
        flow.upgrade_to_4k().await?;
    }
    if args.card {
        print_card(flow.view_card()?);
    }

    let artifact = flow.download()?;
    match save_artifact(&artifact, &args.out).await? {
        Some(path) => println!("✅ Saved {}", path.display()),
        None => println!("✅ Result available at {}", artifact.image),
    }
    Ok(())
}

/// Writes a data-URL result to `dir`. Remote results are left where they are.
async fn save_artifact(artifact: &DownloadArtifact, dir: &Path) -> Result<Option<PathBuf>> {
    if !artifact.image.is_data_url() {
        return Ok(None);
    }
    let bytes = decode_data_url(&artifact.image)?;
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(&artifact.file_name);
    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(Some(path))
}

fn print_card(card: &PlayerCard) {
    println!("┌─ PLAYER CARD ─────────────");
    for (label, value) in &card.stats {
        println!("│ {label:<4} {value:>3}");
    }
    for highlight in &card.highlights {
        println!("│ ★ {highlight}");
    }
    println!("└───────────────────────────");
}

#[cfg(test)]
mod tests {
    use super::*;
    use jerseyswap_core::studio::ImageRef;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_data_url_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("out");
        let artifact = DownloadArtifact {
            file_name: "jerseyswap-kansas-city-chiefs-23.png".to_string(),
            image: ImageRef::new("data:image/png;base64,aGVsbG8="),
        };

        let path = save_artifact(&artifact, &out).await.unwrap().unwrap();
        assert_eq!(path, out.join("jerseyswap-kansas-city-chiefs-23.png"));
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    }

    #[tokio::test]
    async fn test_remote_artifact_is_not_written() {
        let temp_dir = TempDir::new().unwrap();
        let artifact = DownloadArtifact {
            file_name: "jerseyswap-athlete-23.png".to_string(),
            image: ImageRef::new("https://cdn.example.com/swap.png"),
        };

        assert!(save_artifact(&artifact, temp_dir.path()).await.unwrap().is_none());
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }
}
