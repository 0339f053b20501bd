//! Planner: activities of the active month grouped by kind.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::activity::{Activity, ActivityKind};
use crate::frame::MonthFrame;

/// Activities of one month, partitioned by kind and ascending by day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planner {
    pub tasks: Vec<Activity>,
    pub events: Vec<Activity>,
    pub appointments: Vec<Activity>,
    pub meetings: Vec<Activity>,
}

impl Planner {
    /// Filter `activities` to `frame`, sort them by day and partition them.
    ///
    /// The sort is stable, so activities on the same day keep their input
    /// order.
    pub fn build(activities: &[Activity], frame: &MonthFrame) -> Self {
        let mut in_month: Vec<&Activity> = activities
            .iter()
            .filter(|a| {
                a.year() == frame.year()
                    && a.month_index() == frame.month_index()
                    && (frame.start_day()..=frame.end_day()).contains(&a.day())
            })
            .collect();
        in_month.sort_by_key(|a| a.day());

        trace!(
            kept = in_month.len(),
            dropped = activities.len() - in_month.len(),
            "filtered datebook to month frame"
        );

        let mut planner = Planner::default();
        for activity in in_month {
            planner.list_mut(activity.kind).push(activity.clone());
        }
        planner
    }

    /// Append `other` after `self`, kind by kind.
    ///
    /// Each side keeps its internal order; the result is not re-sorted.
    pub fn concat(&self, other: &Planner) -> Planner {
        let join = |a: &[Activity], b: &[Activity]| [a, b].concat();
        Planner {
            tasks: join(&self.tasks, &other.tasks),
            events: join(&self.events, &other.events),
            appointments: join(&self.appointments, &other.appointments),
            meetings: join(&self.meetings, &other.meetings),
        }
    }

    pub fn list(&self, kind: ActivityKind) -> &[Activity] {
        match kind {
            ActivityKind::Task => &self.tasks,
            ActivityKind::Event => &self.events,
            ActivityKind::Appointment => &self.appointments,
            ActivityKind::Meeting => &self.meetings,
        }
    }

    fn list_mut(&mut self, kind: ActivityKind) -> &mut Vec<Activity> {
        match kind {
            ActivityKind::Task => &mut self.tasks,
            ActivityKind::Event => &mut self.events,
            ActivityKind::Appointment => &mut self.appointments,
            ActivityKind::Meeting => &mut self.meetings,
        }
    }

    /// All activities in tasks, events, appointments, meetings order.
    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        ActivityKind::ALL
            .into_iter()
            .flat_map(move |kind| self.list(kind).iter())
    }

    pub fn len(&self) -> usize {
        self.tasks.len() + self.events.len() + self.appointments.len() + self.meetings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of activities of `kind` on `day`.
    pub fn count_on(&self, kind: ActivityKind, day: u32) -> u32 {
        self.list(kind).iter().filter(|a| a.day() == day).count() as u32
    }
}
