//! Fixed figures shown on the dashboard. There is no metrics backend.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesPoint {
    pub label: &'static str,
    pub value: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct DashboardSnapshot {
    pub stats: [StatCard; 3],
    pub registrations: &'static [SeriesPoint],
    pub roles: &'static [SeriesPoint],
}

/// Index into [`DashboardSnapshot::stats`] of the card that opens the users
/// view.
pub const USERS_CARD: usize = 0;

const REGISTRATIONS: [SeriesPoint; 6] = [
    SeriesPoint { label: "Jan", value: 30 },
    SeriesPoint { label: "Feb", value: 45 },
    SeriesPoint { label: "Mar", value: 60 },
    SeriesPoint { label: "Apr", value: 40 },
    SeriesPoint { label: "May", value: 80 },
    SeriesPoint { label: "Jun", value: 70 },
];

const ROLES: [SeriesPoint; 3] = [
    SeriesPoint { label: "Admin", value: 5 },
    SeriesPoint { label: "Editor", value: 12 },
    SeriesPoint { label: "Viewer", value: 25 },
];

pub fn snapshot() -> DashboardSnapshot {
    DashboardSnapshot {
        stats: [
            StatCard {
                title: "Users",
                value: 120,
            },
            StatCard {
                title: "Active Sessions",
                value: 45,
            },
            StatCard {
                title: "Pending Requests",
                value: 8,
            },
        ],
        registrations: &REGISTRATIONS,
        roles: &ROLES,
    }
}
