//! Headline counters shown in the hero section

use crate::pricing::display::group_thousands;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    /// Shown as `N+`
    Count,
    /// Shown as `N%`
    Percent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCounter {
    pub target: u32,
    pub kind: StatKind,
    pub caption: &'static str,
}

impl StatCounter {
    /// Final text of the counter once its animation has finished
    pub fn display(&self) -> String {
        let suffix = match self.kind {
            StatKind::Count => '+',
            StatKind::Percent => '%',
        };
        format!("{}{}", group_thousands(i128::from(self.target)), suffix)
    }
}

pub fn headline_stats() -> Vec<StatCounter> {
    vec![
        StatCounter {
            target: 1500,
            kind: StatKind::Count,
            caption: "довольных клиентов",
        },
        StatCounter {
            target: 5000,
            kind: StatKind::Count,
            caption: "убранных помещений",
        },
        StatCounter {
            target: 98,
            kind: StatKind::Percent,
            caption: "положительных отзывов",
        },
    ]
}
