#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system deriving transient player notifications from world events.

use std::fmt;

use hero_defense_core::{Event, PlacementError, PurchaseError, WaveError};

/// Visual weight of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Informational confirmation.
    Normal,
    /// Refused action the player should correct.
    Error,
}

/// Short message shown to the player and then discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Visual weight of the message.
    pub severity: Severity,
    /// Headline.
    pub title: String,
    /// Supporting sentence.
    pub message: String,
}

impl Notification {
    fn normal(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Normal,
            title: title.into(),
            message: message.into(),
        }
    }

    fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.severity {
            Severity::Normal => "*",
            Severity::Error => "!",
        };
        write!(f, "[{marker}] {}: {}", self.title, self.message)
    }
}

/// Notification system translating events into player-facing messages.
#[derive(Clone, Copy, Debug, Default)]
pub struct Notifications;

impl Notifications {
    /// Creates a new notification system.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Appends one notification per player-relevant event, in event order.
    pub fn handle(&self, events: &[Event], out: &mut Vec<Notification>) {
        out.extend(events.iter().filter_map(describe));
    }
}

fn describe(event: &Event) -> Option<Notification> {
    let notification = match event {
        Event::HeroPlaced { kind, .. } => Notification::normal(
            "Hero placed!",
            format!("{} placed successfully.", kind.archetype().name),
        ),
        Event::HeroPlacementRejected { reason, .. } => rejection(*reason),
        Event::HeroSold { refund, .. } => Notification::normal(
            "Hero sold",
            format!("You recovered {refund} gold of your investment."),
        ),
        Event::WaveStarted { wave } => Notification::normal(
            format!("Wave {wave} started!"),
            "Defend your base against the enemies.",
        ),
        Event::WaveStartRejected {
            reason: WaveError::NoHeroes,
        } => Notification::error(
            "No heroes placed",
            "Place at least one hero before starting the wave!",
        ),
        Event::WaveStartRejected {
            reason: WaveError::AlreadyActive,
        } => Notification::error("Wave in progress", "Wait for the current wave to end."),
        Event::HeroSelected { .. }
        | Event::HoveredCellChanged { .. }
        | Event::RangeOverlayChanged { .. }
        | Event::PauseToggled { .. } => return None,
    };
    Some(notification)
}

fn rejection(reason: PurchaseError) -> Notification {
    match reason {
        PurchaseError::Placement(PlacementError::OnPath) => Notification::error(
            "Invalid placement",
            "Heroes cannot be placed on the enemy path.",
        ),
        PurchaseError::Placement(PlacementError::OutOfBounds) => {
            Notification::error("Invalid placement", "That cell lies outside the grid.")
        }
        PurchaseError::Placement(PlacementError::Occupied) => Notification::error(
            "Cell occupied",
            "A hero already stands on this cell.",
        ),
        PurchaseError::InsufficientGold {
            required,
            available,
        } => Notification::error(
            "Not enough gold",
            format!("This hero costs {required} gold and you have {available}."),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hero_defense_core::{CellCoord, HeroId, HeroKind};

    #[test]
    fn ui_only_events_are_silent() {
        let mut out = Vec::new();
        Notifications::new().handle(
            &[
                Event::HeroSelected { hero: None },
                Event::HoveredCellChanged {
                    cell: Some(CellCoord::new(1, 1)),
                },
                Event::RangeOverlayChanged { visible: true },
                Event::PauseToggled { paused: true },
            ],
            &mut out,
        );
        assert!(out.is_empty());
    }

    #[test]
    fn placement_names_the_archetype() {
        let mut out = Vec::new();
        Notifications::new().handle(
            &[Event::HeroPlaced {
                hero: HeroId::new(1, 2),
                kind: HeroKind::Priest,
                cell: CellCoord::new(0, 0),
                cost: 1500,
            }],
            &mut out,
        );

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].severity, Severity::Normal);
        assert_eq!(out[0].message, "Priest placed successfully.");
    }

    #[test]
    fn display_marks_errors() {
        let notification = rejection(PurchaseError::Placement(PlacementError::Occupied));
        assert_eq!(
            notification.to_string(),
            "[!] Cell occupied: A hero already stands on this cell."
        );
    }
}
