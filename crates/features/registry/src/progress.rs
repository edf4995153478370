use crate::FeatureGroup;
use featdeck_domain::Status;
use serde::Serialize;

/// Readiness counts for one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupProgress {
    pub group: &'static str,
    pub total: usize,
    /// Features flagged `ready`.
    pub ready: usize,
    /// Features whose status is `production`.
    pub production: usize,
}

impl GroupProgress {
    pub(crate) fn of(group: &FeatureGroup) -> Self {
        let mut progress = Self { group: group.name, total: 0, ready: 0, production: 0 };
        for feature in group.features {
            progress.total += 1;
            progress.ready += usize::from(feature.descriptor.ready);
            progress.production += usize::from(feature.descriptor.status == Status::Production);
        }
        progress
    }

    /// Share of ready features, rounded to the nearest percent.
    #[must_use]
    pub const fn ready_percent(&self) -> usize {
        percent(self.ready, self.total)
    }

    /// Share of production features, rounded to the nearest percent.
    #[must_use]
    pub const fn completion_percent(&self) -> usize {
        percent(self.production, self.total)
    }
}

/// Readiness counts for a whole registry, in group order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub groups: Vec<GroupProgress>,
}

impl Progress {
    pub(crate) const fn new(groups: Vec<GroupProgress>) -> Self {
        Self { groups }
    }

    #[must_use]
    pub fn group(&self, name: &str) -> Option<&GroupProgress> {
        self.groups.iter().find(|g| g.group == name)
    }

    /// Totals across every group, reported under the group name `*`.
    #[must_use]
    pub fn overall(&self) -> GroupProgress {
        self.groups.iter().fold(
            GroupProgress { group: "*", total: 0, ready: 0, production: 0 },
            |mut acc, g| {
                acc.total += g.total;
                acc.ready += g.ready;
                acc.production += g.production;
                acc
            },
        )
    }
}

// An empty group counts as 0%.
const fn percent(part: usize, total: usize) -> usize {
    if total == 0 { 0 } else { (part * 100 + total / 2) / total }
}

#[cfg(test)]
mod tests {
    use super::percent;

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(7, 8), 88);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(1, 2), 50);
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(8, 8), 100);
    }
}
