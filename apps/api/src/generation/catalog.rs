//! Canned content the mock generator draws from.
//!
//! Summary and experience templates carry a `{title}` placeholder that is
//! replaced verbatim with the requested job title (no escaping).

pub const TITLE_PLACEHOLDER: &str = "{title}";

pub const SUMMARY_TEMPLATES: [&str; 3] = [
    "Innovative and detail-oriented {title} with 5+ years of experience designing and developing user-centered digital products. Proficient in collaborating with cross-functional teams to define, design, and ship new features. Passionate about creating intuitive, accessible, and responsive designs that enhance user experience.",
    "Results-driven {title} with a proven track record of increasing efficiency and productivity through strategic process improvements. Adept at analyzing complex data to identify opportunities for optimization and growth. Known for clear communication and the ability to translate technical concepts to non-technical stakeholders.",
    "Creative and analytical {title} with expertise in developing comprehensive solutions that align with business objectives. Skilled in managing projects from conception to completion, ensuring deliverables meet quality standards and deadlines. Enthusiastic about leveraging emerging technologies to solve challenging problems.",
];

/// Narrative paragraph, a blank line, then one achievement per line.
pub const EXPERIENCE_TEMPLATES: [&str; 3] = [
    "Led a team of 5 professionals in developing and implementing strategic initiatives that increased departmental efficiency by 25%. Collaborated with cross-functional teams to ensure alignment with organizational goals and objectives.\n\n\u{2022} Spearheaded the development of a new project management system that reduced project completion time by 30%\n\u{2022} Conducted regular performance reviews and provided mentorship to team members\n\u{2022} Presented quarterly progress reports to executive leadership\n\u{2022} Managed a budget of $500,000 and consistently came in under budget",
    "Designed and executed comprehensive marketing campaigns that resulted in a 40% increase in customer engagement and a 20% growth in revenue. Utilized data analytics to inform strategy adjustments and optimize performance metrics.\n\n\u{2022} Created and implemented a social media strategy that increased follower count by 15,000 in 6 months\n\u{2022} Developed compelling content for various platforms, resulting in a 35% increase in conversion rates\n\u{2022} Collaborated with the sales team to align marketing initiatives with sales goals\n\u{2022} Conducted market research to identify emerging trends and opportunities",
    "Developed and maintained complex software applications using cutting-edge technologies and best practices. Worked closely with product managers and designers to translate requirements into functional features that enhanced user experience.\n\n\u{2022} Reduced application load time by 40% through code optimization and refactoring\n\u{2022} Implemented automated testing protocols that caught 95% of bugs before production\n\u{2022} Mentored junior developers in code reviews and pair programming sessions\n\u{2022} Contributed to open-source projects and represented the company at industry conferences",
];

/// `"<degree> from <institution>"`. The apply step splits on `" from "`.
pub const EDUCATION_TEMPLATES: [&str; 4] = [
    "Bachelor of Science in Computer Science from Massachusetts Institute of Technology",
    "Master of Business Administration from Harvard Business School",
    "Bachelor of Arts in Communication from Stanford University",
    "Master of Science in Data Analytics from University of California, Berkeley",
];

/// Role → skill list, in match priority order. The first entry is the default.
pub const ROLE_SKILL_SETS: [(&str, &str); 6] = [
    (
        "Software Engineer",
        "JavaScript, TypeScript, React, Node.js, Python, SQL, Git, CI/CD, Cloud Architecture, Problem-Solving",
    ),
    (
        "Product Manager",
        "Product Strategy, Agile Methodologies, User Research, Data Analysis, Roadmapping, Stakeholder Management, A/B Testing, Wireframing",
    ),
    (
        "Data Scientist",
        "Python, R, SQL, Machine Learning, Statistical Analysis, Data Visualization, Big Data, TensorFlow, PyTorch, Tableau",
    ),
    (
        "Marketing Manager",
        "Digital Marketing, Content Strategy, SEO/SEM, Social Media Management, Analytics, Campaign Management, Brand Development",
    ),
    (
        "UX Designer",
        "User Research, Wireframing, Prototyping, Figma, Adobe Creative Suite, Interaction Design, Usability Testing, Information Architecture",
    ),
    (
        "Project Manager",
        "Agile, Scrum, JIRA, Project Planning, Risk Management, Stakeholder Communication, Budgeting, Resource Allocation",
    ),
];

/// Returns the role whose name occurs (case-insensitively) in `job_title`.
///
/// First match in `ROLE_SKILL_SETS` order wins; no match yields the first role.
pub fn match_role(job_title: &str) -> (&'static str, &'static str) {
    let title = job_title.to_lowercase();
    ROLE_SKILL_SETS
        .iter()
        .copied()
        .find(|(role, _)| title.contains(&role.to_lowercase()))
        .unwrap_or(ROLE_SKILL_SETS[0])
}

pub fn fill_title(template: &str, job_title: &str) -> String {
    template.replace(TITLE_PLACEHOLDER, job_title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_senior_data_scientist_matches_data_scientist() {
        let (role, skills) = match_role("Senior Data Scientist");
        assert_eq!(role, "Data Scientist");
        assert!(skills.starts_with("Python, R, SQL"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(match_role("lead ux designer").0, "UX Designer");
    }

    #[test]
    fn test_unknown_title_falls_back_to_software_engineer() {
        assert_eq!(match_role("Pastry Chef").0, "Software Engineer");
        assert_eq!(match_role("").0, "Software Engineer");
    }

    #[test]
    fn test_first_match_wins_by_table_order() {
        // Contains both "Product Manager" and "Project Manager"; the table
        // lists Product Manager first.
        assert_eq!(
            match_role("Project Manager / Product Manager").0,
            "Product Manager"
        );
        // Contains "Data Scientist" and "Software Engineer"; Software Engineer
        // is enumerated first even though it appears later in the title.
        assert_eq!(
            match_role("Data Scientist turned Software Engineer").0,
            "Software Engineer"
        );
    }

    #[test]
    fn test_title_is_inserted_verbatim() {
        let text = fill_title(SUMMARY_TEMPLATES[1], "<b>Chief</b> Tinkerer");
        assert!(text.starts_with("Results-driven <b>Chief</b> Tinkerer with"));
    }

    #[test]
    fn test_every_experience_template_has_narrative_and_bullets() {
        for template in EXPERIENCE_TEMPLATES {
            let mut parts = template.split("\n\n");
            assert!(!parts.next().unwrap().is_empty());
            assert_eq!(parts.next().unwrap().lines().count(), 4);
        }
    }

    #[test]
    fn test_every_education_template_splits_in_two() {
        for template in EDUCATION_TEMPLATES {
            assert_eq!(template.split(" from ").count(), 2);
        }
    }
}
