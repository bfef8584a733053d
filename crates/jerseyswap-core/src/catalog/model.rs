//! League and team catalog entries.

use serde::Serialize;

/// Base URL of the public asset bucket.
pub const ASSET_BASE_URL: &str = "https://storage.googleapis.com/jerseyswap";

/// Folders inside the asset bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum AssetFolder {
    Leagues,
    Logos,
    Teams,
    Players,
    Uploads,
    Profiles,
    Swaps,
}

/// Builds the public URL for a file in the asset bucket.
///
/// Returns an empty string for an empty file name.
pub fn asset_url(folder: AssetFolder, file_name: &str) -> String {
    if file_name.is_empty() {
        return String::new();
    }
    format!("{}/{}/{}", ASSET_BASE_URL, folder.as_ref(), file_name)
}

/// A league the user can swap into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub accent_color: &'static str,
    /// File name under the `leagues` asset folder
    pub logo_file: &'static str,
}

impl League {
    pub fn logo_url(&self) -> String {
        asset_url(AssetFolder::Leagues, self.logo_file)
    }
}

/// A team inside a league.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: &'static str,
    pub league_id: &'static str,
    pub name: &'static str,
    pub primary_hex: &'static str,
    /// Path under the `teams` asset folder
    pub logo_file: &'static str,
}

impl Team {
    pub fn logo_url(&self) -> String {
        asset_url(AssetFolder::Teams, self.logo_file)
    }
}
