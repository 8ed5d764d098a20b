use std::time::Duration;

use chrono::Datelike;
use client_core::{visibility::intersection_ratio, IntersectionEntry, Span};
use crossbeam_channel::Receiver;
use eframe::egui;
use shared::{content, domain::SectionId};

use crate::controller::{events::UiEvent, page::PageController};
use crate::ui::{
    motion::EntranceTimeline,
    sections,
    theme::{blend_color, palette, visuals_for_theme, ThemeMode},
};

const REVEAL_SECONDS: f32 = 0.6;
const REVEAL_RISE: f32 = 28.0;
const SECTION_GAP: f32 = 72.0;
const COMPACT_WIDTH: f32 = 760.0;
const NAME_SIZE: f32 = 26.0;
const STATUS_FADE_SECONDS: f32 = 0.4;

pub struct PortfolioApp {
    page: PageController,
    ui_rx: Receiver<UiEvent>,
    timeline: EntranceTimeline,
    applied_theme: Option<ThemeMode>,
    outcome_shown_at: Option<f64>,
}

impl PortfolioApp {
    pub fn new(page: PageController, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            page,
            ui_rx,
            timeline: EntranceTimeline::default(),
            applied_theme: None,
            outcome_shown_at: None,
        }
    }

    fn process_ui_events(&mut self, now: f64) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.page.apply_event(event);
        }

        if self
            .page
            .take_submission_changes()
            .into_iter()
            .any(|status| status.is_terminal())
        {
            self.outcome_shown_at = Some(now);
        }
    }

    /// Fade-in of the form's outcome line, restarted on every terminal status.
    fn status_reveal(&self, now: f64) -> f32 {
        match self.outcome_shown_at {
            Some(shown_at) => ((now - shown_at) as f32 / STATUS_FADE_SECONDS).clamp(0.0, 1.0),
            None => 1.0,
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        let theme = self.page.theme();
        if self.applied_theme == Some(theme) {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = visuals_for_theme(theme);
        style.spacing.item_spacing = egui::vec2(10.0, 8.0);
        style.spacing.button_padding = egui::vec2(14.0, 7.0);
        ctx.set_style(style);
        self.applied_theme = Some(theme);
    }

    fn show_header(&mut self, ctx: &egui::Context, elapsed: f32) {
        let palette = palette(self.page.theme());
        let pose = self.timeline.name(elapsed);
        let glow = self.timeline.name_glow(elapsed);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new("PORTFOLIO")
                            .size(11.0)
                            .color(palette.muted),
                    );
                    ui.add_space(pose.offset * 0.3);

                    let color = blend_color(palette.text, palette.muted, glow * 0.4)
                        .gamma_multiply(pose.opacity);
                    let mut job = egui::text::LayoutJob::default();
                    job.append(
                        content::OWNER_NAME,
                        0.0,
                        egui::TextFormat {
                            font_id: egui::FontId::proportional(NAME_SIZE),
                            color,
                            extra_letter_spacing: pose.letter_spacing * NAME_SIZE,
                            ..Default::default()
                        },
                    );
                    ui.label(job);
                    ui.label(egui::RichText::new(content::OWNER_TAGLINE).color(palette.muted));
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.hyperlink_to("LinkedIn", content::LINKEDIN_URL)
                        .on_hover_text(format!("{} LinkedIn", content::OWNER_NAME));
                    ui.hyperlink_to("GitHub", content::GITHUB_URL)
                        .on_hover_text(format!("{} GitHub", content::OWNER_NAME));
                });
            });
            ui.add_space(10.0);
        });
    }

    fn show_menu(&mut self, ctx: &egui::Context, elapsed: f32) {
        let palette = palette(self.page.theme());
        let compact = ctx.available_rect().width() < COMPACT_WIDTH;

        egui::SidePanel::left("menu")
            .resizable(false)
            .exact_width(if compact { 150.0 } else { 210.0 })
            .show(ctx, |ui| {
                ui.add_space(16.0);
                ui.label(egui::RichText::new("INDEX").size(11.0).color(palette.muted));
                ui.add_space(6.0);

                if compact {
                    let label = if self.page.menu_open() { "Close" } else { "Menu" };
                    if ui.button(label).clicked() {
                        self.page.toggle_menu();
                    }
                }

                if !compact || self.page.menu_open() {
                    let current = self.page.current_section();
                    for (index, item) in content::NAV_ITEMS.iter().enumerate() {
                        let pose = self.timeline.menu_item(elapsed, index);
                        let clicked = ui
                            .scope(|ui| {
                                ui.multiply_opacity(pose.opacity);
                                ui.horizontal(|ui| {
                                    ui.add_space(pose.offset);
                                    let mut label = egui::RichText::new(item.label);
                                    if current == Some(item.target) {
                                        label = label.strong().color(palette.text);
                                    }
                                    ui.link(label).clicked()
                                })
                                .inner
                            })
                            .inner;
                        if clicked {
                            self.page.navigate(item.target);
                        }
                    }
                }

                ui.add_space(24.0);
                if ui.button(self.page.theme().toggle_label()).clicked() {
                    self.page.toggle_theme();
                }
            });
    }

    fn show_footer(&mut self, ctx: &egui::Context) {
        let palette = palette(self.page.theme());
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                ui.label(content::copyright_line(chrono::Local::now().year()));
                ui.label(
                    egui::RichText::new("Built with Rust, egui, and purposeful whitespace.")
                        .color(palette.muted),
                );
                if !self.page.status().is_empty() {
                    ui.label(
                        egui::RichText::new(self.page.status())
                            .color(palette.muted)
                            .small(),
                    );
                }
            });
            ui.add_space(6.0);
        });
    }

    fn show_content(&mut self, ctx: &egui::Context, status_reveal: f32) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let viewport = ui.clip_rect();
                    let viewport = Span::new(viewport.top(), viewport.bottom());
                    let mut entries = Vec::with_capacity(SectionId::ALL.len());

                    ui.add_space(12.0);
                    for section in SectionId::ALL {
                        let reveal = ctx.animate_bool_with_time(
                            egui::Id::new(("section_reveal", section.anchor())),
                            self.page.is_section_visible(section),
                            REVEAL_SECONDS,
                        );

                        let response = ui
                            .scope(|ui| {
                                ui.multiply_opacity(reveal);
                                ui.add_space((1.0 - reveal) * REVEAL_RISE);
                                sections::render(section, ui, &mut self.page, status_reveal);
                            })
                            .response;

                        if self.page.take_pending_scroll(section) {
                            response.scroll_to_me(Some(egui::Align::TOP));
                        }

                        let rect = response.rect;
                        let span = Span::new(rect.top(), rect.bottom());
                        entries.push(IntersectionEntry {
                            section,
                            ratio: intersection_ratio(span, viewport),
                        });
                        ui.add_space(SECTION_GAP);
                    }

                    self.page.observe(&entries);
                });
        });
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        self.process_ui_events(now);
        self.apply_theme_if_needed(ctx);

        let elapsed = self.timeline.elapsed(now);
        self.show_header(ctx, elapsed);
        self.show_menu(ctx, elapsed);
        self.show_footer(ctx);
        self.show_content(ctx, self.status_reveal(now));

        // The name glow never settles and worker replies are polled, so keep ticking.
        if self.timeline.entrance_done(elapsed, content::NAV_ITEMS.len()) {
            ctx.request_repaint_after(Duration::from_millis(33));
        } else {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}

impl Drop for PortfolioApp {
    fn drop(&mut self) {
        self.page.shutdown();
    }
}
