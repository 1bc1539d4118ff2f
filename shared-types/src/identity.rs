use serde::{Deserialize, Serialize};

/// The signed-in player as reported by the authentication provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub display_name: String,
    pub email: String,
}

impl Identity {
    /// Up to two uppercase initials for the avatar bubble.
    pub fn initials(&self) -> String {
        let initials: String = self
            .display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            self.email
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default()
        } else {
            initials
        }
    }
}
