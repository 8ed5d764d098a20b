//! Section bodies. Each function renders one observable region.

use eframe::egui;
use shared::{
    content::{
        self, BookCard, ProjectCard, StoryCard, CONTACT_EMAIL, CONTACT_PHONE, GITHUB_HANDLE,
        GITHUB_URL, LINKEDIN_URL,
    },
    domain::{SectionId, SubmissionStatus},
};

use crate::controller::page::PageController;
use crate::ui::theme::{palette, Palette};

/// `status_reveal` fades in the contact form's outcome line.
pub fn render(
    section: SectionId,
    ui: &mut egui::Ui,
    page: &mut PageController,
    status_reveal: f32,
) {
    let palette = palette(page.theme());
    match section {
        SectionId::Home => hero(ui, &palette),
        SectionId::Stories => stories(ui, &palette),
        SectionId::Projects => projects(ui, &palette),
        SectionId::FavouredLiterature => literature(ui, &palette),
        SectionId::Contact => contact(ui, &palette, page, status_reveal),
    }
}

fn eyebrow(ui: &mut egui::Ui, palette: &Palette, text: &str) {
    ui.label(
        egui::RichText::new(text.to_uppercase())
            .size(11.0)
            .color(palette.muted),
    );
}

fn heading(
    ui: &mut egui::Ui,
    eyebrow_text: Option<&str>,
    title: &str,
    note: Option<&str>,
    palette: &Palette,
) {
    if let Some(text) = eyebrow_text {
        eyebrow(ui, palette, text);
    }
    ui.label(egui::RichText::new(title).size(30.0).strong());
    if let Some(note) = note {
        ui.label(egui::RichText::new(note).color(palette.muted));
    }
    ui.add_space(14.0);
}

fn card<R>(
    ui: &mut egui::Ui,
    palette: &Palette,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::new()
        .fill(palette.surface)
        .stroke(egui::Stroke::new(1.0, palette.border))
        .corner_radius(egui::CornerRadius::same(2))
        .inner_margin(egui::Margin::symmetric(18, 16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

fn hero(ui: &mut egui::Ui, palette: &Palette) {
    ui.add_space(24.0);
    ui.label(egui::RichText::new(content::HERO_TITLE).size(40.0).strong());
    ui.add_space(10.0);
    ui.label(egui::RichText::new(content::HERO_LEDE).size(18.0));
    ui.add_space(16.0);
    ui.horizontal_wrapped(|ui| {
        for (idx, line) in content::HERO_META.iter().enumerate() {
            if idx > 0 {
                ui.label(egui::RichText::new("/").color(palette.border));
            }
            ui.label(egui::RichText::new(*line).color(palette.muted));
        }
    });
    ui.add_space(24.0);
}

fn story_card(ui: &mut egui::Ui, palette: &Palette, story: &StoryCard) {
    card(ui, palette, |ui| {
        ui.label(egui::RichText::new(story.title).size(17.0).strong());
        ui.add_space(4.0);
        ui.label(story.copy);
    });
}

fn stories(ui: &mut egui::Ui, palette: &Palette) {
    heading(ui, None, content::STORIES_HEADING, None, palette);
    ui.columns(content::STORIES.len(), |columns| {
        for (column, story) in columns.iter_mut().zip(content::STORIES.iter()) {
            story_card(column, palette, story);
        }
    });

    ui.add_space(16.0);
    eyebrow(ui, palette, "Examples");
    for example in content::EXAMPLES {
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new("—").color(palette.muted));
            ui.label(example);
        });
    }
}

fn project_card(ui: &mut egui::Ui, palette: &Palette, project: &ProjectCard) {
    card(ui, palette, |ui| {
        ui.label(
            egui::RichText::new(project.status.to_uppercase())
                .size(11.0)
                .color(palette.muted),
        );
        ui.label(egui::RichText::new(project.title).size(18.0).strong());
        ui.add_space(4.0);
        ui.label(project.summary);
    });
}

fn projects(ui: &mut egui::Ui, palette: &Palette) {
    heading(
        ui,
        Some(content::section_title(SectionId::Projects)),
        content::PROJECTS_HEADING,
        Some(content::PROJECTS_NOTE),
        palette,
    );
    ui.columns(content::PROJECTS.len(), |columns| {
        for (column, project) in columns.iter_mut().zip(content::PROJECTS.iter()) {
            project_card(column, palette, project);
        }
    });
}

fn book_card(ui: &mut egui::Ui, palette: &Palette, book: &BookCard) {
    card(ui, palette, |ui| {
        ui.label(egui::RichText::new(book.title).size(18.0).strong());
        ui.label(egui::RichText::new(book.author).color(palette.muted));
        ui.add_space(8.0);
        ui.label(egui::RichText::new(format!("“{}”", book.quote)).italics());
        ui.add_space(8.0);
        ui.label(book.review);
    });
}

fn literature(ui: &mut egui::Ui, palette: &Palette) {
    heading(
        ui,
        Some(content::section_title(SectionId::FavouredLiterature)),
        content::LITERATURE_HEADING,
        Some(content::LITERATURE_NOTE),
        palette,
    );
    for book in content::FAVOURED_LITERATURE.iter() {
        book_card(ui, palette, book);
        ui.add_space(10.0);
    }
}

fn contact(
    ui: &mut egui::Ui,
    palette: &Palette,
    page: &mut PageController,
    status_reveal: f32,
) {
    heading(
        ui,
        Some(content::CONTACT_EYEBROW),
        content::CONTACT_HEADING,
        None,
        palette,
    );

    egui::Grid::new("contact_block")
        .num_columns(2)
        .spacing([28.0, 8.0])
        .show(ui, |ui| {
            eyebrow(ui, palette, "Mail");
            ui.hyperlink_to(CONTACT_EMAIL, format!("mailto:{CONTACT_EMAIL}"));
            ui.end_row();

            eyebrow(ui, palette, "Phone");
            ui.label(CONTACT_PHONE);
            ui.end_row();

            eyebrow(ui, palette, "GitHub");
            ui.hyperlink_to(GITHUB_HANDLE, GITHUB_URL);
            ui.end_row();

            eyebrow(ui, palette, "LinkedIn");
            ui.hyperlink_to("Profile", LINKEDIN_URL);
            ui.end_row();
        });

    ui.add_space(18.0);
    contact_form(ui, palette, page, status_reveal);
}

fn contact_form(
    ui: &mut egui::Ui,
    palette: &Palette,
    page: &mut PageController,
    status_reveal: f32,
) {
    card(ui, palette, |ui| {
        let form = page.form_mut();

        ui.label("Name");
        ui.add(
            egui::TextEdit::singleline(&mut form.user_name)
                .hint_text("Your name")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);

        ui.label("Email");
        ui.add(
            egui::TextEdit::singleline(&mut form.user_email)
                .hint_text("you@example.com")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);

        ui.label("Message");
        ui.add(
            egui::TextEdit::multiline(&mut form.message)
                .hint_text("How can we collaborate?")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(10.0);

        let send = ui.add_enabled(page.can_submit(), egui::Button::new("Send"));
        if send.clicked() {
            page.submit_contact();
        }

        if let Some(notice) = page.form_notice() {
            ui.label(egui::RichText::new(notice).color(palette.muted).small());
        }

        let status = page.submission_status();
        if let Some(message) = status.message() {
            let color = match status {
                SubmissionStatus::Success => palette.success,
                SubmissionStatus::Error => palette.error,
                _ => palette.muted,
            };
            let color = color.gamma_multiply(status_reveal);
            ui.label(egui::RichText::new(message).color(color));
        }
    });
}
