//! Creative: accent sidebar with initials and skill bars, timeline main column.

use crate::models::resume::{EducationEntry, ExperienceEntry, ResumeData, SkillEntry};
use crate::render::markup::{el, Element};
use crate::render::{
    contact_items, date_range, display_name, display_title, initials, non_blank, non_blank_opt,
    BODY_TEXT_COLOR,
};

/// Level assumed when a skill has none (or zero).
const DEFAULT_SKILL_LEVEL: u8 = 3;
const MAX_SKILL_LEVEL: u8 = 5;

/// Width of a skill bar in percent: `level * 20`, defaulting to level 3.
pub fn skill_bar_percent(skill: &SkillEntry) -> u8 {
    let level = skill
        .level
        .filter(|l| *l > 0)
        .unwrap_or(DEFAULT_SKILL_LEVEL)
        .min(MAX_SKILL_LEVEL);
    level * 20
}

pub fn render(data: &ResumeData) -> Element {
    let color = data.color.as_str();
    let info = &data.personal_info;
    let section_rule = format!("1px solid {}", data.color.with_alpha("40"));

    let profile = el("div")
        .class("mb-10 text-center")
        .child(
            el("div")
                .class("w-32 h-32 mx-auto bg-white/20 rounded-full mb-4 flex items-center justify-center")
                .child(el("span").class("text-3xl font-bold initials").text(initials(&info.full_name))),
        )
        .child(el("h1").class("text-2xl font-bold mb-1").text(display_name(info)))
        .child(el("p").class("text-lg opacity-90 mb-4").text(display_title(info)));

    let contact = el("div")
        .class("mb-10 space-y-3")
        .child(sidebar_heading("CONTACT"))
        .children(contact_items(info, true, false).into_iter().map(|(kind, value)| {
            el("div")
                .class("flex items-center gap-3")
                .child(el("i").class(kind.icon_class()))
                .child(el("span").class("text-sm").text(value))
        }));

    let skills = (!data.skills.is_empty()).then(|| {
        el("div")
            .child(sidebar_heading("SKILLS"))
            .child(el("div").class("space-y-3").children(data.skills.iter().map(|skill| {
                el("div")
                    .child(
                        el("div")
                            .class("flex justify-between mb-1")
                            .child(el("span").class("text-sm").text(skill.name.as_str())),
                    )
                    .child(
                        el("div")
                            .class("w-full bg-white/20 rounded-full h-1.5 skill-track")
                            .child(
                                el("div")
                                    .class("bg-white h-1.5 rounded-full skill-bar")
                                    .style("width", format!("{}%", skill_bar_percent(skill))),
                            ),
                    )
            })))
    });

    let sidebar = el("aside")
        .class("md:w-1/3 p-8 text-white")
        .style("background-color", color)
        .style("color", "#FFFFFF")
        .child(
            el("div")
                .class("sticky top-8")
                .child(profile)
                .child(contact)
                .child_opt(skills),
        );

    let about = non_blank(&info.summary).map(|s| {
        el("section")
            .class("mb-10")
            .child(main_heading("ABOUT ME", color, &section_rule, "mb-4"))
            .child(el("p").class("text-sm leading-relaxed").text(s))
    });

    let experience = (!data.experience.is_empty()).then(|| {
        el("section")
            .class("mb-10")
            .child(main_heading("EXPERIENCE", color, &section_rule, "mb-6"))
            .child(
                el("div")
                    .class("space-y-8")
                    .children(data.experience.iter().map(|e| experience_item(e, data))),
            )
    });

    let education = (!data.education.is_empty()).then(|| {
        el("section")
            .child(main_heading("EDUCATION", color, &section_rule, "mb-6"))
            .child(
                el("div")
                    .class("space-y-6")
                    .children(data.education.iter().map(|e| education_item(e, color))),
            )
    });

    let main = el("main")
        .class("md:w-2/3 p-8")
        .child_opt(about)
        .child_opt(experience)
        .child_opt(education);

    el("div")
        .class("font-sans")
        .style("color", BODY_TEXT_COLOR)
        .child(
            el("div")
                .class("flex flex-col md:flex-row")
                .child(sidebar)
                .child(main),
        )
}

fn sidebar_heading(title: &str) -> Element {
    el("h2")
        .class("text-lg font-bold mb-4 border-b border-white/20 pb-2")
        .style("border-bottom", "1px solid rgba(255, 255, 255, 0.2)")
        .text(title)
}

fn main_heading(title: &str, color: &str, rule: &str, spacing: &str) -> Element {
    el("h2")
        .class("text-lg font-bold pb-2 border-b")
        .class(spacing)
        .style("border-bottom", rule)
        .style("color", color)
        .text(title)
}

fn experience_item(exp: &ExperienceEntry, data: &ResumeData) -> Element {
    let color = data.color.as_str();
    el("div")
        .class("relative pl-10 timeline-item")
        .child(
            el("div")
                .class("absolute left-0 top-1.5 w-4 h-4 rounded-full z-10 timeline-dot")
                .style("background-color", color),
        )
        .child(
            el("div")
                .class("absolute left-2 top-5 w-0.5 h-full -z-10 timeline-line")
                .style("background-color", data.color.with_alpha("30")),
        )
        .child(
            el("div")
                .class("mb-2")
                .child(el("h3").class("text-base font-semibold").text(exp.position.as_str()))
                .child(
                    el("div")
                        .class("flex justify-between")
                        .child(el("h4").class("text-sm font-medium").text(exp.company.as_str()))
                        .child(
                            el("span")
                                .class("text-sm text-gray-500")
                                .text(date_range(&exp.start_date, &exp.end_date)),
                        ),
                )
                .child_opt(
                    non_blank_opt(&exp.location)
                        .map(|l| el("div").class("text-sm text-gray-500").text(l)),
                ),
        )
        .child_opt(non_blank(&exp.description).map(|d| el("p").class("text-sm mb-3").text(d)))
        .child_opt((!exp.achievements.is_empty()).then(|| {
            el("ul").class("text-sm space-y-2").children(exp.achievements.iter().map(|a| {
                el("li")
                    .class("flex items-start gap-2")
                    .child(
                        el("span")
                            .class("font-bold text-xl leading-none mt-0.5 marker")
                            .style("color", color)
                            .text("\u{00B7}"),
                    )
                    .child(el("span").text(a.as_str()))
            }))
        }))
}

fn education_item(edu: &EducationEntry, color: &str) -> Element {
    el("div")
        .class("flex")
        .child(
            el("i")
                .class("icon-briefcase")
                .style("color", color),
        )
        .child(
            el("div")
                .child(el("h3").class("text-base font-semibold").text(edu.degree.as_str()))
                .child_opt(
                    non_blank_opt(&edu.field_of_study)
                        .map(|f| el("p").class("text-sm font-medium").text(f)),
                )
                .child(el("p").class("text-sm").text(format!(
                    "{}, {}",
                    edu.institution,
                    date_range(&edu.start_date, &edu.end_date)
                )))
                .child_opt(
                    non_blank_opt(&edu.location)
                        .map(|l| el("p").class("text-sm text-gray-500").text(l)),
                )
                .child_opt(
                    non_blank_opt(&edu.description).map(|d| el("p").class("text-sm mt-2").text(d)),
                ),
        )
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::render::fixtures::{empty_resume, full_resume, html_of};

    fn skill(level: Option<u8>) -> SkillEntry {
        SkillEntry {
            id: Uuid::new_v4(),
            name: "x".into(),
            level,
        }
    }

    #[test]
    fn test_skill_bar_width_from_level() {
        assert_eq!(skill_bar_percent(&skill(Some(5))), 100);
        assert_eq!(skill_bar_percent(&skill(Some(1))), 20);
        assert_eq!(skill_bar_percent(&skill(None)), 60);
        assert_eq!(skill_bar_percent(&skill(Some(0))), 60);
        assert_eq!(skill_bar_percent(&skill(Some(9))), 100);
    }

    #[test]
    fn test_sidebar_shows_initials() {
        let html = html_of(render(&full_resume()));
        assert!(html.contains(r#"<span class="text-3xl font-bold initials">JQD</span>"#));
    }

    #[test]
    fn test_blank_name_shows_placeholder_initials() {
        let html = html_of(render(&empty_resume()));
        assert!(html.contains(">YN</span>"));
        assert!(!html.contains("ABOUT ME"));
        assert!(!html.contains("EXPERIENCE"));
        // Contact heading is always present in the sidebar.
        assert!(html.contains("CONTACT"));
    }

    #[test]
    fn test_skill_bars_and_timeline_use_accent() {
        let html = html_of(render(&full_resume()));
        assert!(html.contains("width: 100%"));
        assert!(html.contains("width: 60%"));
        assert!(html.contains("background-color: #3B82F630"));
        assert!(html.contains("border-bottom: 1px solid #3B82F640"));
    }

    #[test]
    fn test_education_line_joins_institution_and_dates() {
        let html = html_of(render(&full_resume()));
        assert!(html.contains("State University, 2012 - 2016"));
    }
}
