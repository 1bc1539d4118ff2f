use crate::money::Money;
use crate::venue::Sport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "badge badge--primary",
            Difficulty::Intermediate => "badge badge--secondary",
            Difficulty::Advanced => "badge badge--accent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TournamentStatus {
    Open,
    #[serde(rename = "Filling Fast")]
    FillingFast,
    Full,
    Completed,
    Upcoming,
}

impl TournamentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TournamentStatus::Open => "Open",
            TournamentStatus::FillingFast => "Filling Fast",
            TournamentStatus::Full => "Full",
            TournamentStatus::Completed => "Completed",
            TournamentStatus::Upcoming => "Upcoming",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            TournamentStatus::Open => "badge badge--primary",
            TournamentStatus::FillingFast => "badge badge--accent",
            TournamentStatus::Full | TournamentStatus::Completed => "badge badge--muted",
            TournamentStatus::Upcoming => "badge badge--secondary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: String,
    pub name: String,
    pub image: String,
    pub sport: Sport,
    pub date_label: String,
    pub time_label: String,
    pub location: String,
    pub participants: u32,
    pub max_participants: u32,
    pub prize: String,
    pub registration_fee: Money,
    pub difficulty: Difficulty,
    pub status: TournamentStatus,
}

impl Tournament {
    pub fn fill_percent(&self) -> u32 {
        if self.max_participants == 0 {
            return 0;
        }
        let pct = u64::from(self.participants) * 100 / u64::from(self.max_participants);
        pct.min(100) as u32
    }

    /// Registration is closed only when the tournament is marked full.
    pub fn can_register(&self) -> bool {
        self.status != TournamentStatus::Full
    }

    pub fn register_label(&self) -> &'static str {
        if self.can_register() {
            "Register Now"
        } else {
            "Tournament Full"
        }
    }

    pub fn participants_label(&self) -> String {
        format!("{}/{} players", self.participants, self.max_participants)
    }
}

/// A tournament the signed-in player has entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentRegistration {
    pub id: String,
    pub name: String,
    pub sport: Sport,
    pub date_label: String,
    pub status: TournamentStatus,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub prize_won: Option<String>,
    #[serde(default)]
    pub registered_on: Option<String>,
}

pub const FEATURED_CATEGORIES: [Sport; 4] =
    [Sport::Football, Sport::Basketball, Sport::Padel, Sport::Tennis];

/// Upcoming tournament count for each featured category.
pub fn category_counts(tournaments: &[Tournament]) -> Vec<(Sport, usize)> {
    FEATURED_CATEGORIES
        .iter()
        .map(|sport| {
            let count = tournaments.iter().filter(|t| t.sport == *sport).count();
            (*sport, count)
        })
        .collect()
}
