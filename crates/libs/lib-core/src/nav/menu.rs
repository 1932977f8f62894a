//! # Navigation Menu State
//!
//! [`NavMenu`] is the whole state of one "Trade" dropdown:
//!
//! - `Closed`/`Open`, toggled by click or by the hover debounce
//! - the category tabs, which gain a leading `Favorites` tab while the user
//!   has favorites and lose it when the last one is removed
//! - the active tab, reset to `Spot` when `Favorites` disappears under it
//!
//! Invariant: the tab list is `[Spot, Perp]` or `[Favorites, Spot, Perp]`,
//! the latter exactly when the last synced favorites count is non-zero.

use shared::dto::market::MarketConfig;
use tracing::debug;

use super::category::{default_categories, CategoryKind, MenuCategory};
use super::hover::{HoverAction, HoverDebounce, HoverState, TimerCommand};
use crate::markets::GroupConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct NavMenu {
    open: bool,
    active: CategoryKind,
    categories: Vec<MenuCategory>,
    hover: HoverDebounce,
}

impl NavMenu {
    pub fn new(hover_delay_ms: u32) -> Self {
        Self {
            open: false,
            active: CategoryKind::Spot,
            categories: default_categories(),
            hover: HoverDebounce::new(hover_delay_ms),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active_category(&self) -> CategoryKind {
        self.active
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    /// Position of the active tab, for the sliding indicator.
    pub fn active_index(&self) -> usize {
        self.categories
            .iter()
            .position(|c| c.kind == self.active)
            .unwrap_or(0)
    }

    pub fn hover_state(&self) -> HoverState {
        self.hover.state()
    }

    /// Trigger clicked: flip the menu immediately and drop any pending
    /// hover transition. The active tab is left as it is.
    pub fn click(&mut self) -> TimerCommand {
        self.open = !self.open;
        debug!(open = self.open, "nav menu clicked");
        self.hover.cancel()
    }

    pub fn pointer_enter(&mut self, now: u64) -> TimerCommand {
        self.hover.pointer_enter(now, self.open)
    }

    pub fn pointer_leave(&mut self, now: u64) -> TimerCommand {
        self.hover.pointer_leave(now, self.open)
    }

    /// Hover timer elapsed. Applies the due transition, if any.
    ///
    /// Opening this way selects `Favorites` when the user has any, `Spot`
    /// otherwise.
    pub fn fire(&mut self, now: u64, favorites_count: usize) -> Option<HoverAction> {
        let action = self.hover.fire(now)?;
        match action {
            HoverAction::Open => {
                self.sync_favorites(favorites_count);
                self.open = true;
                self.active = if favorites_count > 0 {
                    CategoryKind::Favorites
                } else {
                    CategoryKind::Spot
                };
            }
            HoverAction::Close => self.open = false,
        }
        debug!(?action, active = %self.active, "nav menu hover transition");
        Some(action)
    }

    /// Component is going away: drop the pending transition.
    pub fn teardown(&mut self) -> TimerCommand {
        self.hover.cancel()
    }

    /// Make `kind` the active tab. Tabs not currently listed are ignored.
    pub fn select_category(&mut self, kind: CategoryKind) -> bool {
        if !self.categories.iter().any(|c| c.kind == kind) {
            debug!(category = %kind, "ignoring selection of hidden category");
            return false;
        }
        self.active = kind;
        true
    }

    /// Recompute the tab list after the favorites list changed.
    pub fn sync_favorites(&mut self, favorites_count: usize) {
        let has_tab = self.categories.len() == 3;

        if favorites_count > 0 && !has_tab {
            self.categories.insert(0, MenuCategory::FAVORITES);
        }

        if favorites_count == 0 && has_tab {
            self.categories.retain(|c| c.kind != CategoryKind::Favorites);
            if self.active == CategoryKind::Favorites {
                self.active = CategoryKind::Spot;
            }
        }
    }

    /// Markets listed under the active tab.
    ///
    /// Favorites come back in insertion order; Spot and Perp are copies of
    /// the configured lists in configured order.
    pub fn markets(&self, favorites: &[MarketConfig], group: &GroupConfig) -> Vec<MarketConfig> {
        match self.active {
            CategoryKind::Favorites => favorites.to_vec(),
            CategoryKind::Spot => group.spot_markets.clone(),
            CategoryKind::Perp => group.perp_markets.clone(),
        }
    }

    /// Whether a document-level pointer-down should have its propagation
    /// stopped. Only pointer-downs outside the trigger button are swallowed;
    /// the menu state is not touched either way.
    pub fn suppresses_pointer_down(inside_trigger: bool) -> bool {
        !inside_trigger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Cluster;
    use crate::model::store::{favorites, FavoritesStore, JsonFavoritesStore, MemoryStorage};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const DELAY: u32 = 200;

    fn names(menu: &NavMenu) -> Vec<&'static str> {
        menu.categories().iter().map(|c| c.name()).collect()
    }

    fn assert_tab_invariant(menu: &NavMenu, favorites_count: usize) {
        let len = menu.categories().len();
        assert!(len == 2 || len == 3, "unexpected tab count {}", len);
        let has_favorites = menu.categories().iter().any(|c| c.kind == CategoryKind::Favorites);
        assert_eq!(has_favorites, favorites_count > 0);
        assert!(menu.categories().iter().any(|c| c.kind == menu.active_category()));
    }

    #[test]
    fn test_initial_state() {
        let menu = NavMenu::new(DELAY);
        assert!(!menu.is_open());
        assert_eq!(menu.active_category(), CategoryKind::Spot);
        assert_eq!(names(&menu), vec!["Spot", "Perp"]);
        assert_eq!(menu.hover_state(), HoverState::Idle);
    }

    #[test]
    fn test_favorites_tab_follows_favorites() {
        let mut menu = NavMenu::new(DELAY);

        menu.sync_favorites(1);
        assert_eq!(names(&menu), vec!["Favorites", "Spot", "Perp"]);

        menu.sync_favorites(2);
        assert_eq!(names(&menu), vec!["Favorites", "Spot", "Perp"]);

        assert!(menu.select_category(CategoryKind::Favorites));
        menu.sync_favorites(0);
        assert_eq!(names(&menu), vec!["Spot", "Perp"]);
        assert_eq!(menu.active_category(), CategoryKind::Spot);
    }

    #[test]
    fn test_removing_favorites_keeps_other_active_tab() {
        let mut menu = NavMenu::new(DELAY);
        menu.sync_favorites(1);
        menu.select_category(CategoryKind::Perp);
        menu.sync_favorites(0);
        assert_eq!(menu.active_category(), CategoryKind::Perp);
    }

    #[test]
    fn test_toggle_favorite_in_and_out_restores_menu() {
        let group = GroupConfig::for_cluster(Cluster::MainnetBeta);
        let store = JsonFavoritesStore::new(MemoryStorage::new());
        let mut menu = NavMenu::new(DELAY);
        menu.sync_favorites(store.get().len());
        menu.select_category(CategoryKind::Perp);
        let before = menu.clone();

        let market = group.perp_markets[1].clone();
        let list = favorites::toggle_favorite(&store, &store.get(), &market).unwrap();
        menu.sync_favorites(list.len());
        menu.select_category(CategoryKind::Favorites);
        assert_eq!(menu.markets(&list, &group), vec![market.clone()]);

        let list = favorites::toggle_favorite(&store, &list, &market).unwrap();
        menu.sync_favorites(list.len());
        assert_eq!(menu.categories(), before.categories());
        assert_eq!(menu.active_category(), CategoryKind::Spot);

        // Without visiting the Favorites tab the active tab survives untouched.
        let list = favorites::toggle_favorite(&store, &list, &market).unwrap();
        menu.sync_favorites(list.len());
        menu.select_category(CategoryKind::Perp);
        let list = favorites::toggle_favorite(&store, &list, &market).unwrap();
        menu.sync_favorites(list.len());
        assert_eq!(menu, before);
    }

    #[test]
    fn test_random_favorites_sequences_keep_tab_invariant() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut menu = NavMenu::new(DELAY);
            let mut count = 0usize;
            for _ in 0..40 {
                match rng.random_range(0..4) {
                    0 => count += 1,
                    1 => count = count.saturating_sub(1),
                    2 => count = 0,
                    _ => {
                        let kind = [CategoryKind::Favorites, CategoryKind::Spot, CategoryKind::Perp]
                            [rng.random_range(0..3)];
                        menu.select_category(kind);
                    }
                }
                menu.sync_favorites(count);
                assert_tab_invariant(&menu, count);
            }
        }
    }

    #[test]
    fn test_hover_open_selects_favorites_when_present() {
        let mut menu = NavMenu::new(DELAY);
        menu.pointer_enter(0);
        assert_eq!(menu.fire(DELAY as u64, 2), Some(HoverAction::Open));
        assert!(menu.is_open());
        assert_eq!(menu.active_category(), CategoryKind::Favorites);
        assert_tab_invariant(&menu, 2);
    }

    #[test]
    fn test_hover_open_selects_spot_without_favorites() {
        let mut menu = NavMenu::new(DELAY);
        menu.sync_favorites(0);
        menu.select_category(CategoryKind::Perp);
        menu.pointer_enter(0);
        menu.fire(DELAY as u64, 0);
        assert!(menu.is_open());
        assert_eq!(menu.active_category(), CategoryKind::Spot);
    }

    #[test]
    fn test_hover_close() {
        let mut menu = NavMenu::new(DELAY);
        menu.click();
        assert!(menu.is_open());
        assert!(matches!(menu.pointer_leave(1_000), TimerCommand::Schedule { .. }));
        assert_eq!(menu.fire(1_000 + DELAY as u64, 0), Some(HoverAction::Close));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_click_toggles_and_cancels_pending() {
        let mut menu = NavMenu::new(DELAY);
        menu.select_category(CategoryKind::Perp);
        menu.pointer_enter(0);
        assert_eq!(menu.click(), TimerCommand::Cancel);
        assert!(menu.is_open());
        assert_eq!(menu.active_category(), CategoryKind::Perp);
        assert_eq!(menu.fire(DELAY as u64, 0), None);
        assert!(menu.is_open());

        assert_eq!(menu.click(), TimerCommand::Keep);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_teardown_drops_pending_timer() {
        let mut menu = NavMenu::new(DELAY);
        menu.pointer_enter(0);
        assert_eq!(menu.teardown(), TimerCommand::Cancel);
        assert_eq!(menu.fire(10_000, 0), None);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_markets_per_category() {
        let group = GroupConfig::for_cluster(Cluster::MainnetBeta);
        let favorites = vec![
            MarketConfig::new("SOL-PERP", "SOL", 3),
            MarketConfig::new("BTC/USDC", "BTC", 1),
        ];
        let mut menu = NavMenu::new(DELAY);
        menu.sync_favorites(favorites.len());

        assert_eq!(menu.markets(&favorites, &group), group.spot_markets);
        menu.select_category(CategoryKind::Perp);
        assert_eq!(menu.markets(&favorites, &group), group.perp_markets);
        menu.select_category(CategoryKind::Favorites);
        assert_eq!(menu.markets(&favorites, &group), favorites);
    }

    #[test]
    fn test_hidden_category_selection_ignored() {
        let mut menu = NavMenu::new(DELAY);
        assert!(!menu.select_category(CategoryKind::Favorites));
        assert_eq!(menu.active_category(), CategoryKind::Spot);
        assert_eq!(menu.active_index(), 0);
        menu.select_category(CategoryKind::Perp);
        assert_eq!(menu.active_index(), 1);
    }

    #[test]
    fn test_outside_pointer_down_is_suppressed_without_state_change() {
        let mut menu = NavMenu::new(DELAY);
        menu.click();
        assert!(menu.is_open());

        // Outside the trigger: swallowed, and the open panel stays open.
        assert!(NavMenu::suppresses_pointer_down(false));
        assert!(menu.is_open());

        // On the trigger itself the press goes through to the click handler.
        assert!(!NavMenu::suppresses_pointer_down(true));
        menu.click();
        assert!(!menu.is_open());
    }

    /// Pointer events spaced closer than the delay never flip the menu while
    /// they keep coming; once they stop, the menu flips at most once and ends
    /// up matching where the pointer is.
    #[test]
    fn test_debounce_holds_for_rapid_pointer_sequences() {
        let mut rng = StdRng::seed_from_u64(42);

        for round in 0..200 {
            let mut menu = NavMenu::new(DELAY);
            if round % 2 == 1 {
                menu.click();
            }
            let started_open = menu.is_open();

            let mut now = 1_000u64;
            let mut last_enter = started_open;
            let events = rng.random_range(1..30);
            for _ in 0..events {
                now += rng.random_range(0..DELAY as u64);
                last_enter = rng.random_bool(0.5);
                let command = if last_enter {
                    menu.pointer_enter(now)
                } else {
                    menu.pointer_leave(now)
                };
                if let TimerCommand::Schedule { deadline, .. } = command {
                    assert!(deadline > now);
                }
                // Any timer from earlier in the burst is not yet due.
                assert_eq!(menu.fire(now, 0), None);
                assert_eq!(menu.is_open(), started_open);
            }

            let mut transitions = 0;
            for _ in 0..3 {
                now += DELAY as u64;
                if menu.fire(now, 0).is_some() {
                    transitions += 1;
                }
            }
            assert!(transitions <= 1);
            assert_eq!(menu.is_open(), last_enter);
            assert_eq!(transitions == 1, started_open != last_enter);
        }
    }
}
