//! Project-card category filter with a quick-view details modal.

use std::collections::BTreeMap;

use crate::animation::ease::Ease;
use crate::animation::tween::Tween;

/// Category id that matches every card.
pub const ALL_CATEGORIES: &str = "all";

const SHOW_SECS: f64 = 0.4;
const HIDE_SECS: f64 = 0.3;

/// One labelled line in the modal.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetailItem {
    /// Short label.
    pub label: String,
    /// Body text.
    pub text: String,
}

/// Modal content for a category.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryDetails {
    /// Heading.
    pub title: String,
    /// One-line description.
    pub desc: String,
    /// Detail rows, in display order.
    #[serde(default)]
    pub details: Vec<DetailItem>,
}

/// Category id → modal content.
pub type Catalog = BTreeMap<String, CategoryDetails>;

/// A project card and the categories it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    /// Stable card id.
    pub id: String,
    /// Category ids.
    pub categories: Vec<String>,
}

impl Card {
    /// Build a card from an id and category ids.
    pub fn new(id: impl Into<String>, categories: &[&str]) -> Self {
        Self {
            id: id.into(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn matches(&self, filter: &str) -> bool {
        filter == ALL_CATEGORIES || self.categories.iter().any(|c| c == filter)
    }
}

/// Open modal contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalView {
    /// Category the modal describes.
    pub category: String,
    /// Content shown.
    pub details: CategoryDetails,
}

/// What a filter click changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterOutcome {
    /// The active filter changed and card visibility was re-targeted; scroll-linked layout should
    /// be re-measured.
    pub layout_changed: bool,
    /// The modal is open after the click.
    pub modal_open: bool,
}

#[derive(Clone, Debug)]
struct CardState {
    card: Card,
    opacity: Tween,
}

/// Filter buttons, card grid visibility and the modal.
#[derive(Clone, Debug)]
pub struct CategoryFilter {
    catalog: Catalog,
    cards: Vec<CardState>,
    active: String,
    modal: Option<ModalView>,
}

impl CategoryFilter {
    /// Initial state: `all` active, every card visible, modal closed.
    pub fn new(catalog: Catalog, cards: Vec<Card>) -> Self {
        Self {
            catalog,
            cards: cards
                .into_iter()
                .map(|card| CardState {
                    card,
                    opacity: Tween::settled(1.0),
                })
                .collect(),
            active: ALL_CATEGORIES.to_string(),
            modal: None,
        }
    }

    /// Active filter id.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Open modal, if any.
    pub fn modal(&self) -> Option<&ModalView> {
        self.modal.as_ref()
    }

    /// A filter button was clicked.
    ///
    /// Re-clicking the active filter toggles the modal; any other filter becomes active, re-filters
    /// the grid and opens its modal.
    pub fn click_filter(&mut self, now_secs: f64, category: &str) -> FilterOutcome {
        if category == self.active {
            if self.modal.is_some() {
                self.close_modal();
            } else {
                self.open_modal(category);
            }
            return FilterOutcome {
                layout_changed: false,
                modal_open: self.modal.is_some(),
            };
        }

        self.active = category.to_string();
        for state in &mut self.cards {
            if state.card.matches(category) {
                state
                    .opacity
                    .retarget(now_secs, 1.0, SHOW_SECS, Ease::OutCubic);
            } else {
                state.opacity.retarget(now_secs, 0.0, HIDE_SECS, Ease::InCubic);
            }
        }
        self.open_modal(category);
        tracing::debug!(category, modal_open = self.modal.is_some(), "filter changed");
        FilterOutcome {
            layout_changed: true,
            modal_open: self.modal.is_some(),
        }
    }

    /// A click landed outside both the modal and the filter buttons.
    pub fn click_outside(&mut self) {
        self.close_modal();
    }

    /// Close the modal.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    fn open_modal(&mut self, category: &str) {
        // Categories without catalog content leave the modal as it is.
        let Some(details) = self.catalog.get(category) else {
            return;
        };
        self.modal = Some(ModalView {
            category: category.to_string(),
            details: details.clone(),
        });
    }

    /// Opacity of card `id` at `now_secs`, or `None` for unknown cards.
    pub fn card_opacity(&self, id: &str, now_secs: f64) -> Option<f64> {
        self.cards
            .iter()
            .find(|s| s.card.id == id)
            .map(|s| s.opacity.value_at(now_secs))
    }

    /// Ids of cards that take part in layout at `now_secs`.
    ///
    /// Hidden cards drop out of layout once their fade-out has finished.
    pub fn displayed_cards(&self, now_secs: f64) -> Vec<&str> {
        self.cards
            .iter()
            .filter(|s| s.opacity.target() > 0.0 || !s.opacity.is_done(now_secs))
            .map(|s| s.card.id.as_str())
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glue/filter.rs"]
mod tests;
