//! Ordered keyword rule table
//!
//! Rules are evaluated top to bottom against the lower-cased utterance; the
//! first rule with a matching trigger wins.

use concierge_core::{TaskCategory, TaskDraft, TaskPriority};

use super::Extraction;
use crate::slot_extraction::UNKNOWN_ROOM;

/// What a rule sees when it fires
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Utterance as spoken
    pub original: &'a str,
    /// Lower-cased utterance
    pub lowered: &'a str,
    pub room_number: Option<&'a str>,
}

impl<'a> RuleContext<'a> {
    /// Room number, or the spoken placeholder
    pub fn room(&self) -> &'a str {
        self.room_number.unwrap_or(UNKNOWN_ROOM)
    }

    fn draft(&self, category: TaskCategory, priority: TaskPriority) -> TaskDraft {
        TaskDraft::new(self.original, category)
            .with_room(self.room_number.map(str::to_string))
            .with_priority(priority)
    }
}

type Handler = fn(&RuleContext<'_>) -> Extraction;

/// A (predicate, handler) pair
pub struct IntentRule {
    pub name: &'static str,
    /// Substrings of the lower-cased utterance that trigger this rule
    pub triggers: &'static [&'static str],
    handler: Handler,
}

impl IntentRule {
    pub const fn new(name: &'static str, triggers: &'static [&'static str], handler: Handler) -> Self {
        Self {
            name,
            triggers,
            handler,
        }
    }

    pub fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t))
    }

    pub fn apply(&self, ctx: &RuleContext<'_>) -> Extraction {
        (self.handler)(ctx)
    }
}

impl std::fmt::Debug for IntentRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentRule")
            .field("name", &self.name)
            .field("triggers", &self.triggers)
            .finish()
    }
}

fn housekeeping(ctx: &RuleContext<'_>) -> Extraction {
    Extraction::with_task(
        format!(
            "Certainly, I'll send fresh towels to room {}. Is there anything else?",
            ctx.room()
        ),
        ctx.draft(TaskCategory::Housekeeping, TaskPriority::Medium),
    )
}

fn maintenance(ctx: &RuleContext<'_>) -> Extraction {
    let priority = if ctx.lowered.contains("urgent") {
        TaskPriority::High
    } else {
        TaskPriority::Medium
    };

    Extraction::with_task(
        format!(
            "I've noted a maintenance request for room {}. Could you describe the issue briefly?",
            ctx.room()
        ),
        ctx.draft(TaskCategory::Maintenance, priority),
    )
}

fn room_service(ctx: &RuleContext<'_>) -> Extraction {
    Extraction::with_task(
        format!(
            "Certainly, what would you like to order from room service for room {}?",
            ctx.room()
        ),
        ctx.draft(TaskCategory::RoomService, TaskPriority::Medium),
    )
}

// Spa bookings and HotSOS tickets go through their own endpoints.
fn spa_booking(_: &RuleContext<'_>) -> Extraction {
    Extraction::reply(
        "Certainly, I can help with a spa booking. What service are you interested in and what is your name?",
    )
}

fn hotsos_task(_: &RuleContext<'_>) -> Extraction {
    Extraction::reply("I can create a HotSOS task. Please describe the task.")
}

/// Built-in rules in evaluation order
pub fn default_rules() -> Vec<IntentRule> {
    vec![
        IntentRule::new("housekeeping", &["towel", "towels", "linens"], housekeeping),
        IntentRule::new("maintenance", &["fix", "broken", "maintenance"], maintenance),
        IntentRule::new("room_service", &["food", "drink", "room service"], room_service),
        IntentRule::new("spa_booking", &["spa booking", "spa appointment"], spa_booking),
        IntentRule::new("hotsos_task", &["create task", "hotsos"], hotsos_task),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(original: &'a str, lowered: &'a str, room: Option<&'a str>) -> RuleContext<'a> {
        RuleContext {
            original,
            lowered,
            room_number: room,
        }
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = default_rules().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["housekeeping", "maintenance", "room_service", "spa_booking", "hotsos_task"]
        );
    }

    #[test]
    fn test_triggers_are_lowercase() {
        for rule in default_rules() {
            for trigger in rule.triggers {
                assert_eq!(*trigger, trigger.to_lowercase(), "rule {}", rule.name);
            }
        }
    }

    #[test]
    fn test_maintenance_urgency() {
        let text = "Fix the sink, URGENT";
        let lowered = text.to_lowercase();
        let out = maintenance(&ctx(text, &lowered, None));
        let draft = out.draft.unwrap();
        assert_eq!(draft.priority, TaskPriority::High);
        assert_eq!(draft.guest_request, text);
        assert!(out.response.contains("room your room"));
    }

    #[test]
    fn test_draft_keeps_room() {
        let out = room_service(&ctx("food to rm 9", "food to rm 9", Some("9")));
        let draft = out.draft.unwrap();
        assert_eq!(draft.category, TaskCategory::RoomService);
        assert_eq!(draft.room_number.as_deref(), Some("9"));
        assert!(out.response.ends_with("for room 9?"));
    }
}
