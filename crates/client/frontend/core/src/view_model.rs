//! View-model snapshots derived from [`HudState`].
//!
//! Pure: the same state always yields the same view. Each HUD section is an
//! `Option` that is `None` whenever its source data is missing, so frontends
//! draw nothing for that section instead of failing.
use engine_api::{Health, Item};

use crate::store::HudState;

/// High-level snapshot of the HUD used by presentation layers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HudView {
    pub health: Option<HealthBarView>,
    pub items: Option<Vec<ItemRowView>>,
    pub gold: Option<GoldView>,
    pub notifications: Option<Vec<NotificationView>>,
}

impl HudView {
    pub fn from_state(state: &HudState) -> Self {
        let stats = state.stats.as_ref();

        Self {
            health: stats
                .and_then(|stats| stats.health.as_ref())
                .map(HealthBarView::from_health),
            items: stats
                .and_then(|stats| stats.items.as_ref())
                .map(|items| items.iter().map(ItemRowView::from_item).collect()),
            gold: stats
                .and_then(|stats| stats.gold)
                .map(|amount| GoldView { amount }),
            notifications: state.notifications.as_ref().map(|messages| {
                messages
                    .iter()
                    .enumerate()
                    .map(|(key, text)| NotificationView {
                        key,
                        text: text.clone(),
                    })
                    .collect()
            }),
        }
    }

    /// Slug bound to the `index`-th item row, if any.
    pub fn item_slug(&self, index: usize) -> Option<&str> {
        self.items
            .as_ref()?
            .get(index)
            .map(|item| item.slug.as_str())
    }

    pub fn item_count(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.health.is_none()
            && self.items.is_none()
            && self.gold.is_none()
            && self.notifications.is_none()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HealthBarView {
    pub current: f64,
    pub max: f64,
    /// Fill in `[0, 100]`.
    pub percentage: f64,
    pub label: String,
}

impl HealthBarView {
    fn from_health(health: &Health) -> Self {
        Self {
            current: health.current,
            max: health.max,
            percentage: health_percentage(health.current, health.max),
            label: format!("{}/{}", health.current, health.max),
        }
    }

    /// Fill as a ratio in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        self.percentage / 100.0
    }
}

/// `current / max * 100`, clamped to `[0, 100]`.
///
/// A zero `max` or a NaN ratio yields `0`; an overflowing ratio clamps like
/// any other out-of-range value.
pub fn health_percentage(current: f64, max: f64) -> f64 {
    if max == 0.0 {
        return 0.0;
    }

    let percentage = current / max * 100.0;
    if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 100.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ItemRowView {
    pub name: String,
    pub amount: f64,
    /// Click target handed to the dispatcher.
    pub slug: String,
}

impl ItemRowView {
    fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            amount: item.amount,
            slug: item.slug.clone(),
        }
    }

    pub fn amount_label(&self) -> String {
        self.amount.to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoldView {
    pub amount: f64,
}

impl GoldView {
    pub fn label(&self) -> String {
        self.amount.to_string()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NotificationView {
    /// Position in the current snapshot.
    pub key: usize,
    pub text: String,
}
