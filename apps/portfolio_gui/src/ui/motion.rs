//! Entrance and attention timelines. Everything here is a pure function of
//! elapsed seconds so frames can sample it without stored animation state.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Power2Out,
    Power4Out,
    SineInOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power4Out => 1.0 - (1.0 - t).powi(5),
            Ease::SineInOut => -((std::f32::consts::PI * t).cos() - 1.0) / 2.0,
        }
    }
}

pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub delay: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl Tween {
    /// Eased progress in `0.0..=1.0` at `elapsed` seconds after the timeline start.
    pub fn progress(&self, elapsed: f32) -> f32 {
        let local = elapsed - self.delay;
        if local <= 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 || local >= self.duration {
            return 1.0;
        }
        self.ease.apply(local / self.duration)
    }

    pub fn end(&self) -> f32 {
        self.delay + self.duration
    }
}

/// Repeats forever, playing forward then backward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Yoyo {
    pub duration: f32,
    pub ease: Ease,
}

impl Yoyo {
    pub fn value(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 || elapsed <= 0.0 {
            return 0.0;
        }
        let cycles = elapsed / self.duration;
        let leg = cycles.floor();
        let frac = cycles - leg;
        let t = if leg as u64 % 2 == 0 { frac } else { 1.0 - frac };
        self.ease.apply(t)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub offset: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamePose {
    pub opacity: f32,
    pub offset: f32,
    /// Extra letter spacing in em.
    pub letter_spacing: f32,
}

const MENU_TWEEN: Tween = Tween {
    delay: 0.0,
    duration: 0.8,
    ease: Ease::Power2Out,
};
const MENU_STAGGER: f32 = 0.05;
const MENU_RISE: f32 = 12.0;

const NAME_TWEEN: Tween = Tween {
    delay: 0.0,
    duration: 1.25,
    ease: Ease::Power4Out,
};
const NAME_RISE: f32 = 30.0;
const NAME_SPACING_FROM: f32 = 0.4;
const NAME_SPACING_TO: f32 = -0.02;

const NAME_GLOW: Yoyo = Yoyo {
    duration: 2.2,
    ease: Ease::SineInOut,
};

/// Page entrance timeline, anchored at the first frame.
#[derive(Debug, Default)]
pub struct EntranceTimeline {
    started_at: Option<f64>,
}

impl EntranceTimeline {
    pub fn elapsed(&mut self, now: f64) -> f32 {
        let started_at = *self.started_at.get_or_insert(now);
        (now - started_at).max(0.0) as f32
    }

    pub fn menu_item(&self, elapsed: f32, index: usize) -> Pose {
        let tween = Tween {
            delay: MENU_TWEEN.delay + MENU_STAGGER * index as f32,
            ..MENU_TWEEN
        };
        let p = tween.progress(elapsed);
        Pose {
            opacity: p,
            offset: lerp(MENU_RISE, 0.0, p),
        }
    }

    pub fn name(&self, elapsed: f32) -> NamePose {
        let p = NAME_TWEEN.progress(elapsed);
        NamePose {
            opacity: p,
            offset: lerp(NAME_RISE, 0.0, p),
            letter_spacing: lerp(NAME_SPACING_FROM, NAME_SPACING_TO, p),
        }
    }

    /// Glow strength in `0.0..=1.0`; never settles.
    pub fn name_glow(&self, elapsed: f32) -> f32 {
        NAME_GLOW.value(elapsed)
    }

    pub fn entrance_done(&self, elapsed: f32, menu_items: usize) -> bool {
        let last_menu = MENU_STAGGER * menu_items.saturating_sub(1) as f32 + MENU_TWEEN.end();
        elapsed >= last_menu.max(NAME_TWEEN.end())
    }
}
