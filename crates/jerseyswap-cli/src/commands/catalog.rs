use anyhow::{Context, Result};
use jerseyswap_core::catalog::{self, LEAGUES};

pub fn leagues() {
    for league in LEAGUES {
        println!("{:<4} {:<14} {}", league.id, league.name, league.description);
    }
}

pub fn teams(league_id: &str) -> Result<()> {
    let league = catalog::find_league(league_id)
        .with_context(|| format!("Unknown league '{league_id}'. Try `jerseyswap leagues`."))?;
    println!("{}", league.name);
    for team in catalog::teams_for_league(league.id) {
        println!("  {:<8} {:<24} {}", team.id, team.name, team.primary_hex);
    }
    Ok(())
}
