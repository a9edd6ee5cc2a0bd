//! Professional: accent header band, main column plus a narrow side column.

use crate::models::resume::{EducationEntry, ExperienceEntry, ResumeData};
use crate::render::markup::{el, Element};
use crate::render::{
    contact_items, date_range, display_name, display_title, non_blank, non_blank_opt,
    ContactKind, BODY_TEXT_COLOR,
};

pub fn render(data: &ResumeData) -> Element {
    let color = data.color.as_str();
    let info = &data.personal_info;

    let contacts = contact_items(info, false, false).into_iter().map(|(kind, value)| {
        el("div")
            .class("flex items-center gap-2")
            .child(el("i").class(kind.icon_class()))
            .child(el("span").text(value))
    });

    let header = el("header")
        .class("mb-8 p-6 rounded-lg text-white")
        .style("background-color", color)
        .style("color", "#FFFFFF")
        .child(el("h1").class("text-3xl font-bold mb-2").text(display_name(info)))
        .child(el("p").class("text-xl mb-4").text(display_title(info)))
        .child(el("div").class("flex flex-wrap gap-6 text-sm").children(contacts));

    // Main column
    let summary = non_blank(&info.summary).map(|s| {
        el("section")
            .child(heading("PROFESSIONAL SUMMARY", color, "mb-3"))
            .child(el("p").class("text-sm").text(s))
    });

    let experience = (!data.experience.is_empty()).then(|| {
        el("section")
            .child(heading("WORK EXPERIENCE", color, "mb-4"))
            .child(
                el("div")
                    .class("space-y-5")
                    .children(data.experience.iter().map(|e| experience_item(e, color))),
            )
    });

    // Side column
    let education = (!data.education.is_empty()).then(|| {
        el("section")
            .child(heading("EDUCATION", color, "mb-4"))
            .child(
                el("div")
                    .class("space-y-4")
                    .children(data.education.iter().map(education_item)),
            )
    });

    let skills = (!data.skills.is_empty()).then(|| {
        el("section")
            .child(heading("SKILLS", color, "mb-4"))
            .child(el("div").class("space-y-2").children(data.skills.iter().map(|skill| {
                el("div")
                    .class("flex items-center gap-2")
                    .child(
                        el("div")
                            .class("w-2 h-2 rounded-full dot")
                            .style("background-color", color),
                    )
                    .child(el("span").class("text-sm").text(skill.name.as_str()))
            })))
    });

    let link_values: Vec<&str> = [non_blank_opt(&info.website), non_blank_opt(&info.linkedin)]
        .into_iter()
        .flatten()
        .collect();
    let links = (!link_values.is_empty()).then(|| {
        el("section")
            .child(heading("LINKS", color, "mb-4"))
            .child(el("div").class("space-y-2").children(link_values.iter().map(|link| {
                el("div")
                    .class("flex items-center gap-2")
                    .child(
                        el("i")
                            .class(ContactKind::Link.icon_class())
                            .style("color", color),
                    )
                    .child(el("span").class("text-sm").text(*link))
            })))
    });

    el("div")
        .class("p-8 font-sans")
        .style("color", BODY_TEXT_COLOR)
        .child(header)
        .child(
            el("div")
                .class("flex flex-col md:flex-row gap-8")
                .child(
                    el("div")
                        .class("md:w-2/3 space-y-6")
                        .child_opt(summary)
                        .child_opt(experience),
                )
                .child(
                    el("div")
                        .class("md:w-1/3 space-y-6")
                        .child_opt(education)
                        .child_opt(skills)
                        .child_opt(links),
                ),
        )
}

fn heading(title: &str, color: &str, spacing: &str) -> Element {
    el("h2")
        .class("text-lg font-bold")
        .class(spacing)
        .style("color", color)
        .text(title)
}

fn experience_item(exp: &ExperienceEntry, color: &str) -> Element {
    el("div")
        .child(
            el("div")
                .class("flex justify-between items-start mb-2")
                .child(
                    el("div")
                        .child(el("h3").class("text-base font-semibold").text(exp.position.as_str()))
                        .child(el("h4").class("text-sm font-medium").text(exp.company.as_str())),
                )
                .child(
                    el("div")
                        .class("text-sm text-right")
                        .child(
                            el("div")
                                .class("font-medium")
                                .text(date_range(&exp.start_date, &exp.end_date)),
                        )
                        .child_opt(non_blank_opt(&exp.location).map(|l| el("div").text(l))),
                ),
        )
        .child_opt(non_blank(&exp.description).map(|d| el("p").class("text-sm mb-2").text(d)))
        .child_opt((!exp.achievements.is_empty()).then(|| {
            el("ul").class("text-sm space-y-1").children(exp.achievements.iter().map(|a| {
                el("li")
                    .class("flex items-start gap-2")
                    .child(
                        el("i")
                            .class("icon-check-circle")
                            .style("color", color),
                    )
                    .child(el("span").text(a.as_str()))
            }))
        }))
}

fn education_item(edu: &EducationEntry) -> Element {
    el("div")
        .child(el("h3").class("text-base font-semibold").text(edu.degree.as_str()))
        .child_opt(
            non_blank_opt(&edu.field_of_study)
                .map(|f| el("p").class("text-sm font-medium").text(f)),
        )
        .child(el("p").class("text-sm").text(edu.institution.as_str()))
        .child(
            el("p")
                .class("text-sm")
                .text(date_range(&edu.start_date, &edu.end_date)),
        )
        .child_opt(non_blank_opt(&edu.location).map(|l| el("p").class("text-sm").text(l)))
        .child_opt(
            non_blank_opt(&edu.description).map(|d| el("p").class("text-sm mt-1").text(d)),
        )
}
