//! Modern: heavy accent rule under the header, narrow left column, experience on the right.

use crate::models::resume::{EducationEntry, ExperienceEntry, ResumeData};
use crate::render::markup::{el, Element};
use crate::render::{
    contact_items, date_range, display_name, display_title, non_blank, non_blank_opt,
    BODY_TEXT_COLOR,
};

pub fn render(data: &ResumeData) -> Element {
    let color = data.color.as_str();
    let info = &data.personal_info;

    let contacts = contact_items(info, true, true).into_iter().map(|(kind, value)| {
        el("div")
            .class("flex items-center gap-1")
            .child(el("i").class(kind.icon_class()).style("color", color))
            .child(el("span").text(value))
    });

    let header = el("header")
        .class("mb-8 pb-6")
        .style("border-bottom", format!("4px solid {color}"))
        .child(el("h1").class("text-4xl font-bold mb-2").text(display_name(info)))
        .child(
            el("p")
                .class("text-xl mb-4")
                .style("color", color)
                .text(display_title(info)),
        )
        .child(el("div").class("flex flex-wrap gap-4 text-sm").children(contacts));

    let profile = non_blank(&info.summary).map(|s| {
        el("section")
            .child(heading("PROFILE", "mb-3"))
            .child(el("p").class("text-sm").text(s))
    });

    let skills = (!data.skills.is_empty()).then(|| {
        el("section")
            .child(heading("SKILLS", "mb-3"))
            .child(el("div").class("flex flex-wrap gap-2").children(data.skills.iter().map(|skill| {
                el("span")
                    .class("px-3 py-1 text-sm rounded-md chip")
                    .style("background-color", data.color.with_alpha("10"))
                    .style("border", format!("1px solid {}", data.color.with_alpha("30")))
                    .text(skill.name.as_str())
            })))
    });

    let education = (!data.education.is_empty()).then(|| {
        el("section")
            .child(heading("EDUCATION", "mb-3"))
            .child(
                el("div")
                    .class("space-y-4")
                    .children(data.education.iter().map(|e| education_item(e, color))),
            )
    });

    let experience = (!data.experience.is_empty()).then(|| {
        el("section")
            .child(heading("EXPERIENCE", "mb-4"))
            .child(
                el("div")
                    .class("space-y-6")
                    .children(data.experience.iter().map(|e| experience_item(e, color))),
            )
    });

    el("div")
        .class("p-8 font-sans")
        .style("color", BODY_TEXT_COLOR)
        .child(header)
        .child(
            el("div")
                .class("grid grid-cols-1 md:grid-cols-3 gap-8")
                .child(
                    el("div")
                        .class("md:col-span-1 space-y-6")
                        .child_opt(profile)
                        .child_opt(skills)
                        .child_opt(education),
                )
                .child(
                    el("div")
                        .class("md:col-span-2 space-y-6")
                        .child_opt(experience),
                ),
        )
}

fn heading(title: &str, spacing: &str) -> Element {
    el("h2").class("text-lg font-bold").class(spacing).text(title)
}

fn education_item(edu: &EducationEntry, color: &str) -> Element {
    el("div")
        .child(el("h3").class("text-base font-semibold").text(edu.degree.as_str()))
        .child_opt(non_blank_opt(&edu.field_of_study).map(|f| {
            el("p")
                .class("text-sm font-medium")
                .style("color", color)
                .text(f)
        }))
        .child(el("p").class("text-sm").text(edu.institution.as_str()))
        .child(
            el("p")
                .class("text-sm text-gray-500")
                .text(date_range(&edu.start_date, &edu.end_date)),
        )
}

fn experience_item(exp: &ExperienceEntry, color: &str) -> Element {
    el("div")
        .child(
            el("div")
                .class("flex justify-between items-start mb-2")
                .child(
                    el("div")
                        .child(el("h3").class("text-base font-semibold").text(exp.position.as_str()))
                        .child(
                            el("h4")
                                .class("text-sm font-medium")
                                .style("color", color)
                                .text(exp.company.as_str()),
                        ),
                )
                .child(
                    el("div")
                        .class("text-sm text-gray-500 text-right")
                        .child(el("div").text(date_range(&exp.start_date, &exp.end_date)))
                        .child_opt(non_blank_opt(&exp.location).map(|l| el("div").text(l))),
                ),
        )
        .child_opt(non_blank(&exp.description).map(|d| el("p").class("text-sm mb-2").text(d)))
        .child_opt((!exp.achievements.is_empty()).then(|| {
            el("ul")
                .class("text-sm space-y-1 list-disc pl-5")
                .children(exp.achievements.iter().map(|a| el("li").text(a.as_str())))
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures::{empty_resume, full_resume, html_of};
    use crate::render::markup::escape_text;

    #[test]
    fn test_header_rule_and_title_use_accent() {
        let html = html_of(render(&full_resume()));
        assert!(html.contains("border-bottom: 4px solid #3B82F6"));
        assert!(html.contains(r#"<p class="text-xl mb-4" style="color: #3B82F6">Staff Engineer</p>"#));
    }

    #[test]
    fn test_contacts_include_both_links() {
        let html = html_of(render(&full_resume()));
        assert!(html.contains(&escape_text("https://jane.dev")));
        assert!(html.contains(&escape_text("https://linkedin.com/in/jane")));
        assert_eq!(html.matches("icon-link").count(), 2);
    }

    #[test]
    fn test_skill_chips_tinted() {
        let html = html_of(render(&full_resume()));
        assert!(html.contains("background-color: #3B82F610; border: 1px solid #3B82F630"));
    }

    #[test]
    fn test_sections_omitted_when_empty() {
        let html = html_of(render(&empty_resume()));
        for heading in ["PROFILE", "SKILLS", "EDUCATION", "EXPERIENCE"] {
            assert!(!html.contains(heading), "unexpected {heading}");
        }
    }

    #[test]
    fn test_achievements_as_disc_list() {
        let html = html_of(render(&full_resume()));
        assert!(html.contains(r#"<ul class="text-sm space-y-1 list-disc pl-5"><li>Cut costs 20%</li>"#));
    }
}
