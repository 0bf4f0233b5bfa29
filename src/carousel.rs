//! Selection, auto-advance and scroll state for the looping project showcase.
//!
//! The controller is rendering agnostic. The view layer feeds it pointer,
//! click, scroll and timer events and applies the [`ScrollCommand`]s it
//! returns to the card strip.

mod scroll;
mod timer;

pub use scroll::{
    ScrollBehavior, ScrollCommand, ScrollGeometry, DEFAULT_CARD_GAP, DEFAULT_CARD_WIDTH,
};
pub use timer::{TimerHandle, DEFAULT_AUTO_ADVANCE_PERIOD};

use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::content::ProjectRecord;

pub const MIN_REPETITIONS: usize = 2;
pub const MAX_REPETITIONS: usize = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("invalid carousel configuration: {0}")]
    InvalidConfiguration(String),
    #[error("unknown project record: {0}")]
    UnknownRecord(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub geometry: ScrollGeometry,
    pub repetitions: usize,
    pub auto_advance_period: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            geometry: ScrollGeometry::default(),
            repetitions: MAX_REPETITIONS,
            auto_advance_period: DEFAULT_AUTO_ADVANCE_PERIOD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Mounted,
    TornDown,
}

/// Copyable view of the state that affects rendering. The scroll offset is
/// left out so scroll events don't invalidate the cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselSnapshot {
    pub selected: usize,
    pub hovered: Option<usize>,
    pub auto_advance: bool,
    pub pointer_in_region: bool,
}

impl CarouselSnapshot {
    /// Index of the record whose details are shown: hover wins over selection.
    pub fn displayed(&self) -> usize {
        self.hovered.unwrap_or(self.selected)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }

    /// Selected and hovered cards get the gradient treatment.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.is_selected(index) || self.is_hovered(index)
    }
}

/// One card in the rendered strip, resolving back to its logical record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub id: String,
    pub logical_index: usize,
    pub repetition: usize,
}

impl RenderedCard {
    pub fn key(&self) -> String {
        format!("{}-{}", self.id, self.repetition)
    }
}

pub struct Carousel {
    records: Vec<ProjectRecord>,
    config: CarouselConfig,
    viewport_width: f64,
    selected: usize,
    hovered: Option<usize>,
    auto_advance: bool,
    pointer_in_region: bool,
    scroll_offset: f64,
    timer: Option<Box<dyn TimerHandle>>,
    lifecycle: Lifecycle,
}

impl fmt::Debug for Carousel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("records", &self.records.len())
            .field("config", &self.config)
            .field("viewport_width", &self.viewport_width)
            .field("selected", &self.selected)
            .field("hovered", &self.hovered)
            .field("auto_advance", &self.auto_advance)
            .field("pointer_in_region", &self.pointer_in_region)
            .field("scroll_offset", &self.scroll_offset)
            .field("has_timer", &self.timer.is_some())
            .field("lifecycle", &self.lifecycle)
            .finish()
    }
}

impl Carousel {
    pub fn initialize(
        records: Vec<ProjectRecord>,
        config: CarouselConfig,
    ) -> Result<Self, CarouselError> {
        if records.is_empty() {
            return Err(CarouselError::InvalidConfiguration(
                "record list is empty".to_string(),
            ));
        }
        {
            let mut ids = HashSet::new();
            if let Some(dup) = records.iter().find(|r| !ids.insert(r.id.as_str())) {
                return Err(CarouselError::InvalidConfiguration(format!(
                    "duplicate record id: {}",
                    dup.id
                )));
            }
        }
        if !config.geometry.is_valid() {
            return Err(CarouselError::InvalidConfiguration(format!(
                "card width and gap must be finite and positive, got {:?}",
                config.geometry
            )));
        }
        if !(MIN_REPETITIONS..=MAX_REPETITIONS).contains(&config.repetitions) {
            return Err(CarouselError::InvalidConfiguration(format!(
                "repetitions must be between {MIN_REPETITIONS} and {MAX_REPETITIONS}, got {}",
                config.repetitions
            )));
        }
        if config.auto_advance_period.is_zero() {
            return Err(CarouselError::InvalidConfiguration(
                "auto-advance period must be non-zero".to_string(),
            ));
        }

        log::debug!("carousel initialized with {} records", records.len());
        Ok(Self {
            records,
            config,
            viewport_width: 0.0,
            selected: 0,
            hovered: None,
            auto_advance: true,
            pointer_in_region: false,
            scroll_offset: 0.0,
            timer: None,
            lifecycle: Lifecycle::Mounted,
        })
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn auto_advance_period(&self) -> Duration {
        self.config.auto_advance_period
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            selected: self.selected,
            hovered: self.hovered,
            auto_advance: self.auto_advance,
            pointer_in_region: self.pointer_in_region,
        }
    }

    pub fn selected_id(&self) -> &str {
        &self.records[self.selected].id
    }

    pub fn hovered_id(&self) -> Option<&str> {
        self.hovered.map(|i| self.records[i].id.as_str())
    }

    pub fn is_auto_advance_enabled(&self) -> bool {
        self.auto_advance
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn displayed_record(&self) -> &ProjectRecord {
        &self.records[self.snapshot().displayed()]
    }

    pub fn index_of(&self, id: &str) -> Result<usize, CarouselError> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| CarouselError::UnknownRecord(id.to_string()))
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        if width.is_finite() && width >= 0.0 {
            self.viewport_width = width;
        }
    }

    /// Centers the record `id` in a viewport of `viewport_width`, measured
    /// against the logical (non-repeated) list.
    pub fn compute_scroll_target(
        &self,
        id: &str,
        viewport_width: f64,
    ) -> Result<f64, CarouselError> {
        let index = self.index_of(id)?;
        Ok(self.config.geometry.centered_offset(index, viewport_width))
    }

    /// Smooth scroll that centers `index` in the copy nearest the middle of
    /// the strip, clamped to the reachable range.
    fn scroll_to_index(&mut self, index: usize) -> ScrollCommand {
        let geometry = &self.config.geometry;
        let offset = geometry.recentered_offset(
            geometry.centered_offset(index, self.viewport_width),
            self.viewport_width,
            self.records.len(),
            self.config.repetitions,
        );
        self.scroll_offset = offset;
        ScrollCommand::smooth(offset)
    }

    /// Jumps to the current selection without changing any state, e.g. on
    /// mount or after the viewport is resized.
    pub fn recenter(&mut self) -> ScrollCommand {
        ScrollCommand::instant(self.scroll_to_index(self.selected).offset)
    }

    /// Explicit user selection. Turns auto-advance off for the rest of this
    /// carousel's life.
    pub fn select(&mut self, id: &str) -> Result<ScrollCommand, CarouselError> {
        let index = self.index_of(id)?;
        self.selected = index;
        self.auto_advance = false;
        log::debug!("carousel selected {id}, auto-advance off");
        Ok(self.scroll_to_index(index))
    }

    pub fn hover(&mut self, id: Option<&str>) -> Result<(), CarouselError> {
        self.hovered = id.map(|id| self.index_of(id)).transpose()?;
        Ok(())
    }

    pub fn pointer_entered_region(&mut self) {
        self.pointer_in_region = true;
    }

    pub fn pointer_left_region(&mut self) {
        self.pointer_in_region = false;
    }

    pub fn can_tick(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted && self.auto_advance && !self.pointer_in_region
    }

    /// Timer callback. Advances to the next record, wrapping at the end.
    pub fn tick(&mut self) -> Option<ScrollCommand> {
        if !self.can_tick() {
            return None;
        }
        let next = (self.selected + 1) % self.records.len();
        self.selected = next;
        Some(self.scroll_to_index(next))
    }

    /// Play/pause control. Returns the new auto-advance state.
    pub fn toggle_auto_advance(&mut self) -> bool {
        self.auto_advance = !self.auto_advance;
        self.auto_advance
    }

    pub fn render_sequence(&self) -> Vec<RenderedCard> {
        (0..self.config.repetitions)
            .flat_map(|repetition| {
                self.records
                    .iter()
                    .enumerate()
                    .map(move |(logical_index, r)| RenderedCard {
                        id: r.id.clone(),
                        logical_index,
                        repetition,
                    })
            })
            .collect()
    }

    /// Records the observed scroll position and returns an instant jump when
    /// the strip has drifted close to either end.
    pub fn on_scroll_boundary(&mut self, offset: f64) -> Option<ScrollCommand> {
        self.scroll_offset = offset;
        let corrected = self.config.geometry.boundary_correction(
            offset,
            self.viewport_width,
            self.records.len(),
            self.config.repetitions,
        )?;
        self.scroll_offset = corrected;
        Some(ScrollCommand::instant(corrected))
    }

    /// Takes ownership of the auto-advance timer, cancelling any previous one.
    pub fn attach_timer(&mut self, handle: impl TimerHandle + 'static) {
        let mut handle: Box<dyn TimerHandle> = Box::new(handle);
        if self.lifecycle == Lifecycle::TornDown {
            handle.cancel();
            return;
        }
        if let Some(mut old) = self.timer.replace(handle) {
            old.cancel();
        }
    }

    pub fn teardown(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
        if self.lifecycle == Lifecycle::Mounted {
            log::debug!("carousel torn down");
        }
        self.lifecycle = Lifecycle::TornDown;
        self.hovered = None;
        self.pointer_in_region = false;
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::timer::testing::CountingTimer;
    use super::*;
    use crate::content::{ProjectKind, ProjectLinks, VisualTheme};

    fn record(id: &str) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            kind: ProjectKind::Project,
            category: None,
            title: id.to_uppercase(),
            description: format!("{id} description"),
            tags: vec![],
            links: ProjectLinks::default(),
            theme: VisualTheme::default(),
        }
    }

    fn abc() -> Carousel {
        let mut c = Carousel::initialize(
            vec![record("a"), record("b"), record("c")],
            CarouselConfig::default(),
        )
        .unwrap();
        c.set_viewport_width(1000.0);
        c
    }

    #[test]
    fn test_initialize() {
        let c = abc();
        assert_eq!(c.selected_id(), "a");
        assert!(c.is_auto_advance_enabled());
        assert_eq!(c.hovered_id(), None);
        assert_eq!(c.lifecycle(), Lifecycle::Mounted);
    }

    #[test]
    fn test_initialize_rejects_bad_configuration() {
        let err = Carousel::initialize(vec![], CarouselConfig::default()).unwrap_err();
        assert!(matches!(err, CarouselError::InvalidConfiguration(_)));

        let err = Carousel::initialize(vec![record("a"), record("a")], CarouselConfig::default())
            .unwrap_err();
        assert!(matches!(err, CarouselError::InvalidConfiguration(_)));

        for config in [
            CarouselConfig {
                repetitions: 1,
                ..Default::default()
            },
            CarouselConfig {
                geometry: ScrollGeometry::new(-1.0, 24.0),
                ..Default::default()
            },
            CarouselConfig {
                auto_advance_period: Duration::ZERO,
                ..Default::default()
            },
        ] {
            assert!(Carousel::initialize(vec![record("a")], config).is_err());
        }
    }

    #[test]
    fn test_select_disables_auto_advance() {
        let mut c = abc();
        c.select("c").unwrap();
        assert_eq!(c.selected_id(), "c");
        assert!(!c.is_auto_advance_enabled());

        c.select("a").unwrap();
        assert_eq!(c.selected_id(), "a");
        assert!(!c.is_auto_advance_enabled());
    }

    #[test]
    fn test_select_unknown_leaves_state_unchanged() {
        let mut c = abc();
        c.tick();
        let before = c.snapshot();
        let offset = c.scroll_offset();
        let err = c.select("zzz").unwrap_err();
        assert_eq!(err, CarouselError::UnknownRecord("zzz".to_string()));
        assert_eq!(c.snapshot(), before);
        assert_eq!(c.scroll_offset(), offset);

        assert!(c.hover(Some("zzz")).is_err());
        assert_eq!(c.snapshot(), before);
    }

    #[test]
    fn test_hover_round_trip() {
        let mut c = abc();
        let before = c.snapshot();
        c.hover(Some("c")).unwrap();
        assert_eq!(c.displayed_record().id, "c");
        assert_eq!(c.selected_id(), "a");
        assert!(c.is_auto_advance_enabled());

        c.hover(None).unwrap();
        assert_eq!(c.displayed_record().id, "a");
        assert_eq!(c.snapshot(), before);
    }

    #[test]
    fn test_tick_is_cyclic() {
        let mut c = abc();
        let mut seen = vec![];
        for _ in 0..3 {
            assert!(c.tick().is_some());
            seen.push(c.selected_id().to_string());
        }
        assert_eq!(seen, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_tick_after_select_is_inert() {
        let mut c = abc();
        c.tick();
        c.select("b").unwrap();
        for _ in 0..5 {
            assert_eq!(c.tick(), None);
        }
        assert_eq!(c.selected_id(), "b");
    }

    #[test]
    fn test_pointer_in_region_suspends_ticks() {
        let mut c = abc();
        c.pointer_entered_region();
        assert_eq!(c.tick(), None);
        assert_eq!(c.selected_id(), "a");
        assert!(c.is_auto_advance_enabled());

        c.pointer_left_region();
        assert!(c.tick().is_some());
        assert_eq!(c.selected_id(), "b");
    }

    #[test]
    fn test_toggle_auto_advance() {
        let mut c = abc();
        assert!(!c.toggle_auto_advance());
        assert_eq!(c.tick(), None);
        assert!(c.toggle_auto_advance());
        assert!(c.tick().is_some());
    }

    #[test]
    fn test_compute_scroll_target_is_pure() {
        let mut c = abc();
        assert_eq!(c.compute_scroll_target("a", 1000.0).unwrap(), -340.0);
        assert_eq!(c.compute_scroll_target("b", 1000.0).unwrap(), 4.0);
        assert_eq!(c.compute_scroll_target("c", 1000.0).unwrap(), 348.0);

        c.hover(Some("c")).unwrap();
        assert_eq!(c.compute_scroll_target("b", 1000.0).unwrap(), 4.0);
        assert!(matches!(
            c.compute_scroll_target("zzz", 1000.0),
            Err(CarouselError::UnknownRecord(_))
        ));
    }

    #[test]
    fn test_emitted_targets_land_in_middle_repetition() {
        let mut c = abc();
        let period = c.config().geometry.period(3);
        let cmd = c.select("b").unwrap();
        assert_eq!(cmd.behavior, ScrollBehavior::Smooth);
        assert_eq!(cmd.offset, 4.0 + period);
        assert_eq!(c.scroll_offset(), cmd.offset);
    }

    #[test]
    fn test_recenter_keeps_state() {
        let mut c = abc();
        c.tick();
        let before = c.snapshot();
        let cmd = c.recenter();
        assert_eq!(cmd.behavior, ScrollBehavior::Instant);
        assert_eq!(cmd.offset, 4.0 + 1032.0);
        assert_eq!(c.snapshot(), before);
        assert!(c.is_auto_advance_enabled());
    }

    #[test]
    fn test_render_sequence() {
        let c = abc();
        let cards = c.render_sequence();
        assert_eq!(cards.len(), 9);
        assert_eq!(cards[4].id, "b");
        assert_eq!(cards[4].logical_index, 1);
        assert_eq!(cards[4].repetition, 1);
        assert_eq!(cards[8].key(), "c-2");
        assert!(cards
            .iter()
            .all(|card| c.records()[card.logical_index].id == card.id));
    }

    #[test]
    fn test_scroll_boundary_correction() {
        let mut c = abc();
        let cmd = c.on_scroll_boundary(10.0).unwrap();
        assert_eq!(cmd.behavior, ScrollBehavior::Instant);
        assert_eq!(cmd.offset, 10.0 + 1032.0);
        assert_eq!(c.scroll_offset(), cmd.offset);

        assert_eq!(c.on_scroll_boundary(1100.0), None);
        assert_eq!(c.scroll_offset(), 1100.0);
    }

    #[test]
    fn test_two_repetitions_stay_in_range() {
        let config = CarouselConfig {
            repetitions: 2,
            ..Default::default()
        };
        let mut c =
            Carousel::initialize(vec![record("a"), record("b"), record("c")], config).unwrap();
        c.set_viewport_width(1000.0);
        let max_scroll = c.config().geometry.max_scroll(3, 2, 1000.0);

        let cmd = c.select("c").unwrap();
        assert_eq!(cmd.offset, 348.0);
        assert!(cmd.offset <= max_scroll);

        // right edge snaps back by one period
        let cmd = c.on_scroll_boundary(max_scroll).unwrap();
        assert_eq!(cmd.offset, 8.0);
        assert_eq!(c.on_scroll_boundary(cmd.offset), None);

        c.toggle_auto_advance();
        for _ in 0..6 {
            let cmd = c.tick().unwrap();
            assert!((0.0..=max_scroll).contains(&cmd.offset));
        }
    }

    #[test]
    fn test_wide_viewport_targets_are_reachable() {
        let mut c = abc();
        c.set_viewport_width(1216.0);
        let max_scroll = c.config().geometry.max_scroll(3, 3, 1216.0);
        for id in ["a", "b", "c"] {
            let cmd = c.select(id).unwrap();
            assert!((0.0..=max_scroll).contains(&cmd.offset), "{id}: {}", cmd.offset);
        }
        let cmd = c.on_scroll_boundary(1800.0).unwrap();
        assert_eq!(cmd.offset, 768.0);
    }

    #[test]
    fn test_teardown_cancels_timer() {
        let mut c = abc();
        let timer = CountingTimer::default();
        c.attach_timer(timer.clone());
        c.teardown();
        c.teardown();
        assert_eq!(timer.cancelled(), 1);
        assert_eq!(c.tick(), None);
        assert_eq!(c.lifecycle(), Lifecycle::TornDown);

        let late = CountingTimer::default();
        c.attach_timer(late.clone());
        assert_eq!(late.cancelled(), 1);
    }

    #[test]
    fn test_replacing_timer_cancels_previous() {
        let mut c = abc();
        let first = CountingTimer::default();
        let second = CountingTimer::default();
        c.attach_timer(first.clone());
        c.attach_timer(second.clone());
        assert_eq!(first.cancelled(), 1);
        assert_eq!(second.cancelled(), 0);
        drop(c);
        assert_eq!(second.cancelled(), 1);
    }

    #[test]
    fn test_end_to_end_selection_scenario() {
        let mut c = abc();
        assert_eq!(c.selected_id(), "a");
        c.tick();
        assert_eq!(c.selected_id(), "b");
        c.select("b").unwrap();
        assert_eq!(c.selected_id(), "b");
        assert!(!c.is_auto_advance_enabled());
        c.tick();
        c.tick();
        assert_eq!(c.selected_id(), "b");
    }

    #[test]
    fn test_end_to_end_hover_scenario() {
        let mut c = abc();
        c.hover(Some("c")).unwrap();
        assert_eq!(c.displayed_record().id, "c");
        let snap = c.snapshot();
        assert!(snap.is_highlighted(0));
        assert!(snap.is_highlighted(2));
        assert!(!snap.is_highlighted(1));
        c.hover(None).unwrap();
        assert_eq!(c.displayed_record().id, "a");
    }
}
