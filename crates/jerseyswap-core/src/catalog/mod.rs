//! Fixed league and team catalog.
//!
//! The catalog is compiled in. Teams are filtered by league when the
//! customize step is shown.

mod model;

pub use model::{ASSET_BASE_URL, AssetFolder, League, Team, asset_url};

const fn team(
    id: &'static str,
    league_id: &'static str,
    name: &'static str,
    primary_hex: &'static str,
    logo_file: &'static str,
) -> Team {
    Team {
        id,
        league_id,
        name,
        primary_hex,
        logo_file,
    }
}

pub static LEAGUES: &[League] = &[
    League {
        id: "nfl",
        name: "NFL PRO-SYNC",
        description: "National Football League Elite",
        accent_color: "#013369",
        logo_file: "nfl.png",
    },
    League {
        id: "nba",
        name: "NBA 2K-READY",
        description: "National Basketball Association",
        accent_color: "#17408B",
        logo_file: "2k.png",
    },
    League {
        id: "fc",
        name: "EA SPORTS FC",
        description: "The World's Game",
        accent_color: "#ccff00",
        logo_file: "fc.png",
    },
];

pub static TEAMS: &[Team] = &[
    team("ari", "nfl", "Arizona Cardinals", "#97233F", "nfl/ARI.svg"),
    team("atl", "nfl", "Atlanta Falcons", "#A71930", "nfl/ATL.svg"),
    team("bal", "nfl", "Baltimore Ravens", "#241773", "nfl/BAL.svg"),
    team("buf", "nfl", "Buffalo Bills", "#00338D", "nfl/BUF.svg"),
    team("car", "nfl", "Carolina Panthers", "#0085CA", "nfl/CAR.svg"),
    team("chi-nfl", "nfl", "Chicago Bears", "#0B162A", "nfl/CHI.svg"),
    team("cin", "nfl", "Cincinnati Bengals", "#FB4F14", "nfl/CIN.svg"),
    team("cle", "nfl", "Cleveland Browns", "#311D00", "nfl/CLE.svg"),
    team("dal", "nfl", "Dallas Cowboys", "#003594", "nfl/DAL.svg"),
    team("den", "nfl", "Denver Broncos", "#FB4F14", "nfl/DEN.svg"),
    team("det", "nfl", "Detroit Lions", "#0076B6", "nfl/DET.svg"),
    team("gb", "nfl", "Green Bay Packers", "#204E32", "nfl/GB.svg"),
    team("hou", "nfl", "Houston Texans", "#03202F", "nfl/HOU.svg"),
    team("ind", "nfl", "Indianapolis Colts", "#002C5F", "nfl/IND.svg"),
    team("jax", "nfl", "Jacksonville Jaguars", "#006778", "nfl/JAX.svg"),
    team("kc", "nfl", "Kansas City Chiefs", "#E31837", "nfl/KC.svg"),
    team("lv", "nfl", "Las Vegas Raiders", "#000000", "nfl/LV.svg"),
    team("lac", "nfl", "LA Chargers", "#0080C6", "nfl/LAC.svg"),
    team("lar", "nfl", "LA Rams", "#003594", "nfl/LAR.svg"),
    team("mia", "nfl", "Miami Dolphins", "#008E97", "nfl/MIA.svg"),
    team("min", "nfl", "Minnesota Vikings", "#4F2683", "nfl/MIN.svg"),
    team("ne", "nfl", "New England Patriots", "#002244", "nfl/NE.svg"),
    team("no", "nfl", "New Orleans Saints", "#D3BC8D", "nfl/NO.svg"),
    team("nyg", "nfl", "New York Giants", "#0B2265", "nfl/NYG.svg"),
    team("nyj", "nfl", "New York Jets", "#125740", "nfl/NYJ.svg"),
    team("phi-e", "nfl", "Philadelphia Eagles", "#004C54", "nfl/PHI.svg"),
    team("pit", "nfl", "Pittsburgh Steelers", "#FFB612", "nfl/PIT.svg"),
    team("sf", "nfl", "San Francisco 49ers", "#AA0000", "nfl/SF.svg"),
    team("sea", "nfl", "Seattle Seahawks", "#002244", "nfl/SEA.svg"),
    team("tb", "nfl", "Tampa Bay Buccaneers", "#D50A0A", "nfl/TB.svg"),
    team("ten", "nfl", "Tennessee Titans", "#0C2340", "nfl/TEN.svg"),
    team("was", "nfl", "Washington Commanders", "#5A1414", "nfl/WAS.svg"),

    team("phi-76", "nba", "Philadelphia 76ers", "#006BB6", "nba/76ers.svg"),
    team("lal", "nba", "LA Lakers", "#552583", "nba/lakers.svg"),
    team("bos", "nba", "Boston Celtics", "#007A33", "nba/celtics.svg"),
    team("gsw", "nba", "Golden State Warriors", "#1D428A", "nba/warriors.svg"),
    team("mil", "nba", "Milwaukee Bucks", "#00471B", "nba/bucks.svg"),
    team("phx", "nba", "Phoenix Suns", "#1D1160", "nba/suns.svg"),
    team("mia-h", "nba", "Miami Heat", "#98002E", "nba/heat.svg"),
    team("dal-m", "nba", "Dallas Mavericks", "#00538C", "nba/mavs.svg"),

    team("real", "fc", "Real Madrid", "#FEBE10", "laliga/realmadrid.svg"),
    team("city", "fc", "Manchester City", "#6CABDD", "epl/mancity.svg"),
    team("barca", "fc", "FC Barcelona", "#A8102A", "laliga/barcelona.svg"),
    team("liv", "fc", "Liverpool FC", "#C8102E", "epl/liverpool.svg"),
    team("psg", "fc", "Paris Saint-Germain", "#004170", "ligue1/psg.svg"),
    team("bayern", "fc", "Bayern Munich", "#DC052D", "bundesliga/bayern.svg"),
    team("ars", "fc", "Arsenal FC", "#EF0107", "epl/arsenal.svg"),
];

/// Looks up a league by id.
pub fn find_league(id: &str) -> Option<&'static League> {
    LEAGUES.iter().find(|league| league.id == id)
}

/// Looks up a team by id.
pub fn find_team(id: &str) -> Option<&'static Team> {
    TEAMS.iter().find(|team| team.id == id)
}

/// Returns the teams that belong to `league_id`, in catalog order.
pub fn teams_for_league(league_id: &str) -> impl Iterator<Item = &'static Team> + '_ {
    TEAMS.iter().filter(move |team| team.league_id == league_id)
}
