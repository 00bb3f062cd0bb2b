/// A subscription tier shown on the plans page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    /// Monthly price in dollars
    pub price: u32,
    pub features: &'static [&'static str],
    /// The tier this account is on
    pub current: bool,
    pub popular: bool,
}

/// Which audience the plans page is pitched at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanAudience {
    #[default]
    SmallTeams,
    Organizations,
}

impl PlanAudience {
    pub fn label(self) -> &'static str {
        match self {
            PlanAudience::SmallTeams => "For Small Teams",
            PlanAudience::Organizations => "For Organizations",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            PlanAudience::SmallTeams => PlanAudience::Organizations,
            PlanAudience::Organizations => PlanAudience::SmallTeams,
        }
    }
}

pub static PLANS: [Plan; 4] = [
    Plan {
        name: "Free",
        price: 0,
        features: &[
            "Test-drive StudioBinder",
            "covering all of pre-production",
            "from scripting to call sheets.",
        ],
        current: true,
        popular: false,
    },
    Plan {
        name: "Starter",
        price: 49,
        features: &[
            "2 users",
            "Scriptwriting & Docs",
            "Breakdowns & Scheduling",
            "Mood Boards & Storyboards",
            "Shot Lists",
            "Tasks & Calendars",
        ],
        current: false,
        popular: false,
    },
    Plan {
        name: "Indie",
        price: 99,
        features: &[
            "4 Users",
            "Script Outlines",
            "Script Revisions",
            "Advanced Scheduling",
            "Image Editor & Arrows",
            "Contact Messaging",
        ],
        current: false,
        popular: true,
    },
    Plan {
        name: "Professional",
        price: 149,
        features: &[
            "8 users",
            "Script Timing",
            "Episodic Scripts",
            "Shot List Scheduling",
            "Call Sheet Templates",
            "AutoFills Call Sheets",
        ],
        current: false,
        popular: false,
    },
];
