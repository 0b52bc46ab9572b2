use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
    Health,
    Education,
    Other,
}

impl Category {
    /// Lowercase name, identical to the stored form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Bills => "bills",
            Self::Health => "health",
            Self::Education => "education",
            Self::Other => "other",
        }
    }

    /// Case-insensitive lookup. Unknown names are rejected rather than
    /// mapped to `Other`, since the set is closed.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::all().iter().copied().find(|c| c.as_str() == lower)
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Transport,
            Self::Entertainment,
            Self::Shopping,
            Self::Bills,
            Self::Health,
            Self::Education,
            Self::Other,
        ]
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Food => "🍕",
            Self::Transport => "🚗",
            Self::Entertainment => "🎬",
            Self::Shopping => "🛍️",
            Self::Bills => "📄",
            Self::Health => "🏥",
            Self::Education => "📚",
            Self::Other => "💫",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }

    /// Next/previous category in display order, wrapping at both ends.
    pub fn cycle(&self, delta: i32) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| c == self).unwrap_or(0) as i32;
        let len = all.len() as i32;
        all[(idx + delta).rem_euclid(len) as usize]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
