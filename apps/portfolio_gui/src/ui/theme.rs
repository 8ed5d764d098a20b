use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn attribute(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Label of the toggle names the surface it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Light Surface",
            ThemeMode::Light => "Dark Surface",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: egui::Color32,
    pub surface: egui::Color32,
    pub text: egui::Color32,
    pub muted: egui::Color32,
    pub border: egui::Color32,
    pub accent: egui::Color32,
    pub success: egui::Color32,
    pub error: egui::Color32,
}

pub fn palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Dark => Palette {
            background: egui::Color32::from_rgb(10, 10, 10),
            surface: egui::Color32::from_rgb(20, 20, 21),
            text: egui::Color32::from_rgb(240, 240, 236),
            muted: egui::Color32::from_rgb(140, 140, 136),
            border: egui::Color32::from_rgb(44, 44, 46),
            accent: egui::Color32::from_rgb(245, 245, 240),
            success: egui::Color32::from_rgb(134, 204, 150),
            error: egui::Color32::from_rgb(232, 120, 112),
        },
        ThemeMode::Light => Palette {
            background: egui::Color32::from_rgb(248, 247, 243),
            surface: egui::Color32::from_rgb(255, 255, 255),
            text: egui::Color32::from_rgb(17, 17, 17),
            muted: egui::Color32::from_rgb(110, 110, 106),
            border: egui::Color32::from_rgb(222, 220, 214),
            accent: egui::Color32::from_rgb(17, 17, 17),
            success: egui::Color32::from_rgb(38, 120, 62),
            error: egui::Color32::from_rgb(176, 48, 40),
        },
    }
}

pub fn visuals_for_theme(mode: ThemeMode) -> egui::Visuals {
    let palette = palette(mode);
    let mut visuals = match mode {
        ThemeMode::Dark => egui::Visuals::dark(),
        ThemeMode::Light => egui::Visuals::light(),
    };

    visuals.override_text_color = Some(palette.text);
    visuals.window_fill = palette.background;
    visuals.panel_fill = palette.background;
    visuals.extreme_bg_color = palette.surface;
    visuals.faint_bg_color = lighten_color(palette.surface, 0.03);
    visuals.hyperlink_color = palette.accent;
    visuals.selection.bg_fill = palette.muted.gamma_multiply(0.6);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, palette.border);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, palette.border);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, palette.muted);
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.2, palette.accent);

    let radius = egui::CornerRadius::same(2);
    visuals.widgets.noninteractive.corner_radius = radius;
    visuals.widgets.inactive.corner_radius = radius;
    visuals.widgets.hovered.corner_radius = radius;
    visuals.widgets.active.corner_radius = radius;
    visuals.widgets.open.corner_radius = radius;

    visuals
}

pub fn lighten_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

/// Linear blend from `from` towards `to`; used for the name glow.
pub fn blend_color(from: egui::Color32, to: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| -> u8 {
        (a as f32 + (b as f32 - a as f32) * t)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgba_unmultiplied(
        mix(from.r(), to.r()),
        mix(from.g(), to.g()),
        mix(from.b(), to.b()),
        mix(from.a(), to.a()),
    )
}
