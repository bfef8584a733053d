use anyhow::{Context, Result, bail};
use clap::Args;
use jerseyswap_application::SwapWorkflow;
use jerseyswap_core::user::{AuthProvider, OnboardingDetails, Role, SignUpRequest, UserProfile};

#[derive(Args)]
pub struct SignupArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub handle: String,
    #[arg(long)]
    pub password: String,
    /// athlete, pro-designer or scout
    #[arg(long)]
    pub role: Option<Role>,
    #[arg(long)]
    pub league_preference: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub avatar: Option<String>,
}

#[derive(Args)]
pub struct EditProfileArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub handle: Option<String>,
    #[arg(long)]
    pub role: Option<Role>,
    #[arg(long)]
    pub league_preference: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub avatar: Option<String>,
}

pub async fn signup(flow: &mut SwapWorkflow, args: SignupArgs) -> Result<()> {
    ensure_signed_out(flow)?;
    flow.sign_up(SignUpRequest::new(
        args.name,
        args.email,
        args.handle,
        args.password,
    ))?;
    flow.complete_onboarding(OnboardingDetails {
        role: args.role,
        league_preference: args.league_preference,
        bio: args.bio,
        avatar: args.avatar,
        ..Default::default()
    })
    .await?;

    let profile = flow.active_profile().context("Profile was not activated")?;
    println!("✅ Neural link established. Welcome, {}!", profile.name);
    print_profile(profile);
    Ok(())
}

pub async fn signin(flow: &mut SwapWorkflow, identifier: &str, password: &str) -> Result<()> {
    ensure_signed_out(flow)?;
    flow.sign_in(identifier, password).await?;
    if let Some(profile) = flow.active_profile() {
        println!("✅ Signed in as {}", profile.handle);
    }
    Ok(())
}

pub async fn sso(flow: &mut SwapWorkflow, provider: AuthProvider) -> Result<()> {
    ensure_signed_out(flow)?;
    flow.sign_in_with_provider(provider).await?;
    if let Some(profile) = flow.active_profile() {
        println!("✅ {} gateway open. Signed in as {}", provider.label(), profile.handle);
    }
    Ok(())
}

pub async fn signout(flow: &mut SwapWorkflow) -> Result<()> {
    let Some(handle) = flow.active_profile().map(|p| p.handle.clone()) else {
        println!("Not signed in");
        return Ok(());
    };
    flow.sign_out().await?;
    println!("👋 Signed out {handle}");
    Ok(())
}

pub fn whoami(flow: &SwapWorkflow) {
    match flow.active_profile() {
        Some(profile) => print_profile(profile),
        None => println!("Not signed in"),
    }
}

pub fn profiles(flow: &SwapWorkflow) {
    let active = flow.active_profile().map(|p| p.id.as_str());
    let profiles = flow.session().profiles();
    if profiles.is_empty() {
        println!("No profiles on this device. Run `jerseyswap signup` to create one.");
        return;
    }
    for profile in profiles {
        let marker = if Some(profile.id.as_str()) == active { "*" } else { " " };
        println!(
            "{} {:<16} {:<20} {}",
            marker, profile.handle, profile.name, profile.id
        );
    }
}

/// Switches to a stored profile. A rejected credential leaves the current
/// session signed in.
pub async fn select(flow: &mut SwapWorkflow, profile: &str, password: Option<&str>) -> Result<()> {
    let id = flow
        .session()
        .profiles()
        .iter()
        .find(|p| p.id == profile || p.matches_identifier(profile))
        .map(|p| p.id.clone())
        .with_context(|| format!("No stored profile matches '{profile}'"))?;

    flow.switch_profile(&id, password).await?;
    if let Some(profile) = flow.active_profile() {
        println!("✅ Switched to {}", profile.handle);
    }
    Ok(())
}

pub async fn edit_profile(flow: &mut SwapWorkflow, args: EditProfileArgs) -> Result<()> {
    let mut edited = flow.active_profile().context("Not signed in")?.clone();
    if let Some(name) = args.name {
        edited.name = name;
    }
    if let Some(email) = args.email {
        edited.email = email;
    }
    if let Some(handle) = args.handle {
        edited.handle = handle;
    }
    if let Some(role) = args.role {
        edited.role = role;
    }
    if let Some(league_preference) = args.league_preference {
        edited.league_preference = league_preference;
    }
    if let Some(bio) = args.bio {
        edited.bio = bio;
    }
    if args.avatar.is_some() {
        edited.avatar = args.avatar;
    }

    let profile = flow.update_profile(edited).await?;
    println!("✅ Profile saved");
    print_profile(profile);
    Ok(())
}

fn ensure_signed_out(flow: &SwapWorkflow) -> Result<()> {
    if let Some(profile) = flow.active_profile() {
        bail!(
            "Already signed in as {}. Run `jerseyswap signout` first.",
            profile.handle
        );
    }
    Ok(())
}

fn print_profile(profile: &UserProfile) {
    println!("{} {}", profile.name, profile.handle);
    println!("  email:   {}", profile.email);
    println!("  role:    {}", profile.role);
    println!("  league:  {}", profile.league_preference);
    println!("  bio:     {}", profile.bio);
    println!(
        "  stats:   PRECISION {} / SYNC {} / SPEED {}  OVR {}",
        profile.stats.precision, profile.stats.sync, profile.stats.speed, profile.ovr
    );
    println!("  vault:   {} swaps", profile.vault.len());
    for achievement in &profile.achievements {
        println!(
            "  🏆 {} [{}] {}",
            achievement.title, achievement.rarity, achievement.unlocked_at
        );
    }
}
