use serde::Serialize;

use crate::domain::{Document, Event, Member, MemberRole};

/// Member counts per role, in role declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RoleDistribution {
    counts: [usize; MemberRole::ALL.len()],
    total: usize,
}

impl RoleDistribution {
    pub fn from_roles(roles: impl IntoIterator<Item = MemberRole>) -> Self {
        let mut distribution = Self::default();
        for role in roles {
            distribution.counts[role.index()] += 1;
            distribution.total += 1;
        }
        distribution
    }

    pub fn from_members<'a>(members: impl IntoIterator<Item = &'a Member>) -> Self {
        Self::from_roles(members.into_iter().map(|member| member.role))
    }

    pub const fn total(&self) -> usize {
        self.total
    }

    pub const fn count(&self, role: MemberRole) -> usize {
        self.counts[role.index()]
    }

    /// Roles with at least one member.
    pub fn counts(&self) -> Vec<(MemberRole, usize)> {
        MemberRole::ALL
            .into_iter()
            .map(|role| (role, self.count(role)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// The `n` most frequent roles; equal counts keep declaration order.
    pub fn top(&self, n: usize) -> Vec<(MemberRole, usize)> {
        let mut counts = self.counts();
        // stable sort keeps declaration order among ties
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(n);
        counts
    }

    /// Share of Pastor, Presbítero and Diácono among all members, rounded.
    pub fn leadership_percentage(&self) -> u8 {
        let leaders: usize = MemberRole::ALL
            .into_iter()
            .filter(|role| role.is_leadership())
            .map(|role| self.count(role))
            .sum();
        let total = self.total.max(1);
        // round half up in integer arithmetic
        let percent = (leaders * 200 + total) / (total * 2);
        u8::try_from(percent).unwrap_or(100)
    }

    /// Largest count, never below 1 so it can divide.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0).max(1)
    }
}

/// Everything the admin dashboard home screen shows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardSnapshot {
    pub total_events: usize,
    pub total_members: usize,
    pub total_congregations: usize,
    pub total_posts: usize,
    pub pending_prayers: usize,
    pub roles: RoleDistribution,
    pub leadership_percentage: u8,
    pub upcoming_events: Vec<Document<Event>>,
}

impl DashboardSnapshot {
    pub const TOP_ROLES: usize = 6;
    pub const UPCOMING: usize = 3;

    pub fn new(
        events: &[Document<Event>],
        members: &[Document<Member>],
        total_congregations: usize,
        total_posts: usize,
        pending_prayers: usize,
    ) -> Self {
        let roles = RoleDistribution::from_members(members.iter().map(|doc| &doc.fields));
        Self {
            total_events: events.len(),
            total_members: members.len(),
            total_congregations,
            total_posts,
            pending_prayers,
            leadership_percentage: roles.leadership_percentage(),
            roles,
            upcoming_events: upcoming(events, Self::UPCOMING),
        }
    }
}

/// First `n` events by date text, ascending.
pub fn upcoming(events: &[Document<Event>], n: usize) -> Vec<Document<Event>> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));
    sorted.truncate(n);
    sorted
}
