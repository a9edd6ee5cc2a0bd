//! Minimal: centred header, underlined section titles, pill-shaped skills.

use crate::models::resume::{EducationEntry, ExperienceEntry, ResumeData};
use crate::render::markup::{el, Element};
use crate::render::{
    contact_items, date_range, display_name, display_title, non_blank, non_blank_opt,
    BODY_TEXT_COLOR,
};

pub fn render(data: &ResumeData) -> Element {
    let color = data.color.as_str();
    let info = &data.personal_info;

    let contacts = contact_items(info, true, false).into_iter().map(|(kind, value)| {
        el("div")
            .class("flex items-center gap-1")
            .child(el("i").class(kind.icon_class()).style("color", color))
            .child(el("span").text(value))
    });

    let header = el("header")
        .class("mb-8 text-center")
        .child(el("h1").class("text-3xl font-bold mb-2").text(display_name(info)))
        .child(el("p").class("text-lg mb-4").text(display_title(info)))
        .child(
            el("div")
                .class("flex flex-wrap justify-center gap-4 text-sm")
                .children(contacts),
        );

    let summary = non_blank(&info.summary).map(|summary| {
        section("Professional Summary", color, "mb-6")
            .child(el("p").class("text-sm").text(summary))
    });

    let experience = (!data.experience.is_empty()).then(|| {
        section("Work Experience", color, "mb-6").child(
            el("div")
                .class("space-y-4")
                .children(data.experience.iter().map(experience_item)),
        )
    });

    let education = (!data.education.is_empty()).then(|| {
        section("Education", color, "mb-6").child(
            el("div")
                .class("space-y-4")
                .children(data.education.iter().map(education_item)),
        )
    });

    let skills = (!data.skills.is_empty()).then(|| {
        section("Skills", color, "").child(
            el("div").class("flex flex-wrap gap-2").children(data.skills.iter().map(|skill| {
                el("span")
                    .class("inline-block px-3 py-1 rounded-full text-sm chip")
                    .style("background-color", data.color.with_alpha("20"))
                    .text(skill.name.as_str())
            })),
        )
    });

    el("div")
        .class("p-8 font-sans")
        .style("color", BODY_TEXT_COLOR)
        .child(header)
        .child_opt(summary)
        .child_opt(experience)
        .child_opt(education)
        .child_opt(skills)
}

fn section(title: &str, color: &str, spacing: &str) -> Element {
    let mut section = el("section");
    if !spacing.is_empty() {
        section = section.class(spacing);
    }
    section.child(
        el("h2")
            .class("text-lg font-semibold mb-2 pb-1 border-b")
            .style("border-bottom", format!("1px solid {color}"))
            .text(title),
    )
}

fn period_block(start: &str, end: &str, location: Option<&str>) -> Element {
    el("div")
        .class("text-sm text-right")
        .child(el("div").text(date_range(start, end)))
        .child_opt(location.map(|l| el("div").text(l)))
}

fn experience_item(exp: &ExperienceEntry) -> Element {
    el("div")
        .child(
            el("div")
                .class("flex justify-between items-start mb-1")
                .child(
                    el("div")
                        .child(el("h3").class("text-base font-medium").text(exp.position.as_str()))
                        .child(el("h4").class("text-sm").text(exp.company.as_str())),
                )
                .child(period_block(
                    &exp.start_date,
                    &exp.end_date,
                    non_blank_opt(&exp.location),
                )),
        )
        .child_opt(
            non_blank(&exp.description).map(|d| el("p").class("text-sm mb-2").text(d)),
        )
        .child_opt((!exp.achievements.is_empty()).then(|| {
            el("ul")
                .class("text-sm space-y-1 pl-5 list-disc")
                .children(exp.achievements.iter().map(|a| el("li").text(a.as_str())))
        }))
}

fn education_item(edu: &EducationEntry) -> Element {
    let heading = match non_blank_opt(&edu.field_of_study) {
        Some(field) => format!("{}, {}", edu.degree, field),
        None => edu.degree.clone(),
    };
    el("div")
        .child(
            el("div")
                .class("flex justify-between items-start mb-1")
                .child(
                    el("div")
                        .child(el("h3").class("text-base font-medium").text(heading))
                        .child(el("h4").class("text-sm").text(edu.institution.as_str())),
                )
                .child(period_block(
                    &edu.start_date,
                    &edu.end_date,
                    non_blank_opt(&edu.location),
                )),
        )
        .child_opt(non_blank_opt(&edu.description).map(|d| el("p").class("text-sm").text(d)))
}
