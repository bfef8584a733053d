use anyhow::{Context, Result};
use jerseyswap_application::SwapWorkflow;
use jerseyswap_core::user::{VAULT_CAPACITY, VaultAnalytics};

pub fn list(flow: &SwapWorkflow) -> Result<()> {
    let profile = flow.active_profile().context("Not signed in")?;
    let analytics = VaultAnalytics::of(profile);

    println!(
        "VAULT {}/{}  TOP {}  CONSISTENCY {}%  AVG OVR {}",
        analytics.total, VAULT_CAPACITY, analytics.top_league, analytics.consistency, analytics.avg_ovr
    );
    if profile.vault.is_empty() {
        println!("  (empty) run `jerseyswap swap` to create your first entry");
    }
    for swap in &profile.vault {
        println!(
            "  {}  {}  {:<24} {:<14} {}",
            swap.id, swap.date, swap.team, swap.league, swap.season
        );
    }
    Ok(())
}

pub async fn remove(flow: &mut SwapWorkflow, id: &str) -> Result<()> {
    let removed = flow.remove_swap(id).await?;
    println!("🗑️  Removed {} ({})", removed.team, removed.date);
    Ok(())
}
