//! Viewport-driven section visibility.
//!
//! The observer holds one marker per watched section. Every intersection
//! entry overwrites the marker with `ratio >= threshold`; there is no memory
//! of earlier ratios and no hysteresis.

use std::collections::BTreeMap;

use shared::domain::SectionId;

pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.35;

/// Vertical extent in screen coordinates; `top <= bottom` for a laid-out region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub bottom: f32,
}

impl Span {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    pub fn height(self) -> f32 {
        (self.bottom - self.top).max(0.0)
    }
}

/// Fraction of `section` inside `viewport`, in `0.0..=1.0`.
pub fn intersection_ratio(section: Span, viewport: Span) -> f32 {
    let height = section.height();
    if height <= 0.0 || !height.is_finite() {
        return 0.0;
    }
    let overlap = section.bottom.min(viewport.bottom) - section.top.max(viewport.top);
    (overlap.max(0.0) / height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub section: SectionId,
    pub ratio: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityChange {
    pub section: SectionId,
    pub visible: bool,
}

#[derive(Debug)]
pub struct VisibilityObserver {
    threshold: f32,
    watched: BTreeMap<SectionId, bool>,
    connected: bool,
}

impl VisibilityObserver {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            watched: BTreeMap::new(),
            connected: true,
        }
    }

    /// Starts watching `section`. Returns false if it was already watched or
    /// the observer has been disconnected.
    pub fn observe(&mut self, section: SectionId) -> bool {
        if !self.connected || self.watched.contains_key(&section) {
            return false;
        }
        self.watched.insert(section, false);
        true
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Applies one batch of intersection entries and returns the markers that flipped.
    pub fn handle(&mut self, entries: &[IntersectionEntry]) -> Vec<VisibilityChange> {
        let mut changes = Vec::new();
        if !self.connected {
            return changes;
        }

        for entry in entries {
            let Some(marker) = self.watched.get_mut(&entry.section) else {
                continue;
            };
            let visible = entry.ratio >= self.threshold;
            if *marker != visible {
                *marker = visible;
                tracing::trace!(section = entry.section.anchor(), visible, "section visibility changed");
                changes.push(VisibilityChange {
                    section: entry.section,
                    visible,
                });
            }
        }
        changes
    }

    pub fn is_visible(&self, section: SectionId) -> bool {
        self.watched.get(&section).copied().unwrap_or(false)
    }

    pub fn visible_sections(&self) -> Vec<SectionId> {
        self.watched
            .iter()
            .filter(|(_, visible)| **visible)
            .map(|(section, _)| *section)
            .collect()
    }

    /// Stops watching every section. The observer stays inert afterwards.
    pub fn disconnect(&mut self) {
        if self.connected {
            tracing::debug!(sections = self.watched.len(), "visibility observer disconnected");
        }
        self.watched.clear();
        self.connected = false;
    }
}

impl Default for VisibilityObserver {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBILITY_THRESHOLD)
    }
}
