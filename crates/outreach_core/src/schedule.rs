//! Daily-message scheduling plan and its derived projections.
//!
//! The plan is a projection display only: start/pause flips a flag and
//! stamps a mock "next batch" time, but nothing ever dispatches a message.

use crate::schema::ScheduleSlot;
use time::{Duration, OffsetDateTime};

/// Fixed campaign length the projections assume.
pub const CAMPAIGN_DAYS: u32 = 20;
/// Assumed response rate, percent.
pub const RESPONSE_RATE_PCT: f64 = 3.5;
/// Assumed response-to-deal conversion.
pub const DEAL_CONVERSION_RATE: f64 = 0.15;

pub const DAILY_TARGET_MIN: u32 = 5;
pub const DAILY_TARGET_MAX: u32 = 50;

#[derive(Debug, Clone)]
pub struct SchedulePlan {
    daily_target: u32,
    pub slots: Vec<ScheduleSlot>,
    running: bool,
    next_batch_at: Option<OffsetDateTime>,
}

impl Default for SchedulePlan {
    fn default() -> Self {
        Self {
            daily_target: 20,
            slots: vec![
                slot("09:00", 5),
                slot("13:00", 5),
                slot("16:00", 10),
            ],
            running: false,
            next_batch_at: None,
        }
    }
}

fn slot(time: &str, messages_per_slot: u32) -> ScheduleSlot {
    ScheduleSlot {
        time: time.to_string(),
        messages_per_slot,
        days: "Monday to Friday".to_string(),
    }
}

impl SchedulePlan {
    pub fn daily_target(&self) -> u32 {
        self.daily_target
    }

    /// Set the daily target, clamped to the input control's [5, 50] range.
    pub fn set_daily_target(&mut self, target: u32) {
        self.daily_target = target.clamp(DAILY_TARGET_MIN, DAILY_TARGET_MAX);
    }

    /// Append the default slot: 10:00, 5 messages, Monday to Friday.
    pub fn add_slot(&mut self) {
        self.slots.push(slot("10:00", 5));
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut ScheduleSlot> {
        self.slots.get_mut(index)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn next_batch_at(&self) -> Option<OffsetDateTime> {
        self.next_batch_at
    }

    /// Toggle the run flag. Starting stamps the top of the next hour as the
    /// mock "next batch" time; pausing leaves the stamp in place (it is
    /// only shown while running). Returns the new run state.
    pub fn toggle(&mut self, now: OffsetDateTime) -> bool {
        if self.running {
            self.running = false;
        } else {
            self.running = true;
            self.next_batch_at = Some(top_of_next_hour(now));
        }
        self.running
    }

    pub fn messages_scheduled(&self) -> u32 {
        self.daily_target * CAMPAIGN_DAYS
    }

    pub fn expected_responses(&self) -> u32 {
        (f64::from(self.messages_scheduled()) * RESPONSE_RATE_PCT / 100.0).floor() as u32
    }

    pub fn estimated_conversions(&self) -> u32 {
        (f64::from(self.messages_scheduled()) * RESPONSE_RATE_PCT / 100.0
            * DEAL_CONVERSION_RATE)
            .floor() as u32
    }

    /// Messages per day implied by the slot table.
    pub fn daily_volume(&self) -> u32 {
        self.slots.iter().map(|slot| slot.messages_per_slot).sum()
    }
}

fn top_of_next_hour(now: OffsetDateTime) -> OffsetDateTime {
    let truncated = now
        .replace_nanosecond(0)
        .and_then(|t| t.replace_second(0))
        .and_then(|t| t.replace_minute(0))
        .unwrap_or(now);
    truncated + Duration::HOUR
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn projections_at_target_twenty() {
        let mut plan = SchedulePlan::default();
        plan.set_daily_target(20);
        assert_eq!(plan.messages_scheduled(), 400);
        assert_eq!(plan.expected_responses(), 14);
        assert_eq!(plan.estimated_conversions(), 2);
    }

    #[test]
    fn daily_target_clamps_to_control_range() {
        let mut plan = SchedulePlan::default();
        plan.set_daily_target(3);
        assert_eq!(plan.daily_target(), 5);
        plan.set_daily_target(500);
        assert_eq!(plan.daily_target(), 50);
        plan.set_daily_target(35);
        assert_eq!(plan.daily_target(), 35);
    }

    #[test]
    fn default_slot_table_sums_to_twenty_per_day() {
        let plan = SchedulePlan::default();
        assert_eq!(plan.slots.len(), 3);
        assert_eq!(plan.daily_volume(), 20);
    }

    #[test]
    fn added_slot_uses_the_default_shape() {
        let mut plan = SchedulePlan::default();
        plan.add_slot();
        let added = plan.slots.last().unwrap();
        assert_eq!(added.time, "10:00");
        assert_eq!(added.messages_per_slot, 5);
        assert_eq!(added.days, "Monday to Friday");
    }

    #[test]
    fn slots_are_editable_by_index() {
        let mut plan = SchedulePlan::default();
        plan.slot_mut(0).unwrap().messages_per_slot = 8;
        assert_eq!(plan.daily_volume(), 23);
        assert!(plan.slot_mut(99).is_none());
    }

    #[test]
    fn starting_stamps_the_top_of_the_next_hour() {
        let mut plan = SchedulePlan::default();
        let now = datetime!(2026-03-05 14:23:41 UTC);
        assert!(plan.toggle(now));
        assert_eq!(plan.next_batch_at(), Some(datetime!(2026-03-05 15:00:00 UTC)));

        // Pausing keeps the stamp, restarting refreshes it.
        assert!(!plan.toggle(now));
        let later = datetime!(2026-03-05 23:59:59 UTC);
        assert!(plan.toggle(later));
        assert_eq!(plan.next_batch_at(), Some(datetime!(2026-03-06 00:00:00 UTC)));
    }
}
