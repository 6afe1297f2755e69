use bevy::prelude::Resource;
use std::collections::BTreeMap;

use crate::economy::calendar::Calendar;
use crate::economy::logistics::LogisticsReport;
use crate::economy::nation::NationId;
use crate::workers::jobs::JobEvent;

/// Summary of one resolved turn.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct TurnReport {
    /// Turn that was resolved
    pub turn: u32,
    /// Calendar date the game moved into
    pub calendar: Calendar,
    pub events: Vec<JobEvent>,
    pub logistics: BTreeMap<NationId, LogisticsReport>,
}

impl TurnReport {
    /// Log lines for the turn, job events first.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "Turn {} resolved, now {}",
            self.turn,
            self.calendar.display()
        )];
        lines.extend(self.events.iter().map(ToString::to_string));
        for (nation, report) in &self.logistics {
            if report.shipped() == 0 {
                continue;
            }
            let mut line = format!(
                "{} shipped {}/{}",
                nation,
                report.shipped(),
                report.capacity
            );
            if report.revenue > 0 {
                line.push_str(&format!(", +{} treasury", report.revenue));
            }
            lines.push(line);
        }
        lines
    }
}
