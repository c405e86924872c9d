//! Engine-side state the replay task owns and publishes.
use engine_api::{Field, StateSnapshot, Stats};

/// Maximum notifications kept in the engine's log.
const NOTIFICATION_CAPACITY: usize = 64;

#[derive(Debug, Default)]
pub(crate) struct ReplayWorld {
    stats: Option<Stats>,
    notifications: Vec<String>,
    notifications_dirty: bool,
}

impl ReplayWorld {
    /// Fold a scripted step into the world.
    ///
    /// Stats sub-fields overwrite individually; scripted notifications are
    /// appended to the log and an explicit `null` clears it.
    pub(crate) fn apply_step(&mut self, step: &StateSnapshot) {
        match &step.stats {
            Field::Absent => {}
            Field::Cleared => self.stats = None,
            Field::Present(patch) => {
                let stats = self.stats.get_or_insert_with(Stats::default);
                if let Some(health) = patch.health {
                    stats.health = Some(health);
                }
                if let Some(gold) = patch.gold {
                    stats.gold = Some(gold);
                }
                if let Some(items) = &patch.items {
                    stats.items = Some(items.clone());
                }
            }
        }

        match &step.notifications {
            Field::Absent => {}
            Field::Cleared => {
                self.notifications.clear();
                self.notifications_dirty = true;
            }
            Field::Present(messages) => {
                for message in messages {
                    self.notify(message.clone());
                }
            }
        }
    }

    /// Consume one unit of the item with `slug`.
    ///
    /// Returns false when no such item is held.
    pub(crate) fn use_item(&mut self, slug: &str) -> bool {
        let Some(items) = self.stats.as_mut().and_then(|stats| stats.items.as_mut()) else {
            self.notify(format!("You have no {} to use.", slug));
            return false;
        };

        let Some(index) = items.iter().position(|item| item.slug == slug) else {
            self.notify(format!("You have no {} to use.", slug));
            return false;
        };

        let item = &mut items[index];
        item.amount -= 1.0;
        let message = format!("Used {}.", item.name);
        if item.amount <= 0.0 {
            items.remove(index);
        }

        self.notify(message);
        true
    }

    /// Snapshot of the current world. Notifications are only included when
    /// they changed since the previous snapshot.
    pub(crate) fn snapshot(&mut self) -> StateSnapshot {
        let stats = match &self.stats {
            Some(stats) => Field::Present(stats.clone()),
            None => Field::Cleared,
        };

        let notifications = if self.notifications_dirty {
            self.notifications_dirty = false;
            Field::Present(self.notifications.clone())
        } else {
            Field::Absent
        };

        StateSnapshot {
            stats,
            notifications,
            ..StateSnapshot::default()
        }
    }

    fn notify(&mut self, message: String) {
        if self.notifications.len() == NOTIFICATION_CAPACITY {
            self.notifications.remove(0);
        }
        self.notifications.push(message);
        self.notifications_dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use engine_api::Item;

    use super::*;

    fn stocked() -> ReplayWorld {
        let mut world = ReplayWorld::default();
        world.apply_step(
            &StateSnapshot::new().with_stats(
                Stats::new()
                    .with_health(10.0, 10.0)
                    .with_items(vec![Item::new("Potion", 2.0, "potion")]),
            ),
        );
        world
    }

    #[test]
    fn stats_patches_overwrite_individual_fields() {
        let mut world = stocked();
        world.apply_step(&StateSnapshot::new().with_stats(Stats::new().with_gold(5.0)));

        let snapshot = world.snapshot();
        let stats = snapshot.stats.as_present().unwrap();
        assert_eq!(stats.gold, Some(5.0));
        assert_eq!(stats.health.map(|health| health.current), Some(10.0));
    }

    #[test]
    fn scripted_notifications_append() {
        let mut world = ReplayWorld::default();
        world.apply_step(&StateSnapshot::new().with_notifications(["one"]));
        world.apply_step(&StateSnapshot::new().with_notifications(["two"]));

        assert_eq!(
            world.snapshot().notifications,
            Field::Present(vec!["one".to_string(), "two".to_string()])
        );
    }

    #[test]
    fn unchanged_notifications_are_omitted() {
        let mut world = ReplayWorld::default();
        world.apply_step(&StateSnapshot::new().with_notifications(["one"]));
        let _ = world.snapshot();

        assert_eq!(world.snapshot().notifications, Field::Absent);
    }

    #[test]
    fn using_last_unit_removes_item() {
        let mut world = stocked();
        assert!(world.use_item("potion"));
        assert!(world.use_item("potion"));

        let snapshot = world.snapshot();
        let stats = snapshot.stats.as_present().unwrap();
        assert_eq!(stats.items, Some(Vec::new()));
        assert_eq!(
            snapshot.notifications,
            Field::Present(vec!["Used Potion.".to_string(), "Used Potion.".to_string()])
        );
    }

    #[test]
    fn using_unknown_item_only_notifies() {
        let mut world = stocked();
        assert!(!world.use_item("sword"));

        let snapshot = world.snapshot();
        assert_eq!(
            snapshot.notifications,
            Field::Present(vec!["You have no sword to use.".to_string()])
        );
    }
}
