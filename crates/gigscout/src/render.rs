//! Report rendering
//!
//! Turns a `Report` into text. Every group renders as its own scoped block;
//! an empty group always shows its placeholder.

use crate::domain::{Advice, Listing, ListingGroup, ListingLayout, Notice, Report, Section};

pub const ADVICE_TITLE: &str = "📈 Skill Suggestions";
const SEPARATOR: &str = "---";

/// Output flavour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderStyle {
    /// Terminal text with indented blocks
    #[default]
    Plain,
    /// Markdown with collapsible `<details>` blocks
    Markdown,
}

/// Render the whole report
pub fn render(report: &Report, style: RenderStyle) -> String {
    let mut lines = Vec::new();

    for notice in &report.notices {
        lines.push(notice_line(notice, style));
    }
    if !report.notices.is_empty() {
        lines.push(String::new());
    }

    for section in &report.sections {
        render_section(&mut lines, section, style);
    }

    render_advice(&mut lines, &report.advice, style);

    lines.join("\n")
}

/// Render one group as a scoped block
pub fn render_group(group: &ListingGroup, style: RenderStyle) -> String {
    let mut lines = Vec::new();
    push_group(&mut lines, group, style);
    lines.join("\n")
}

fn render_section(lines: &mut Vec<String>, section: &Section, style: RenderStyle) {
    lines.push(heading(&section.title, style));
    lines.push(String::new());

    for notice in &section.notices {
        lines.push(notice_line(notice, style));
    }
    if !section.notices.is_empty() {
        lines.push(String::new());
    }

    for group in &section.groups {
        push_group(lines, group, style);
        lines.push(String::new());
    }
}

fn push_group(lines: &mut Vec<String>, group: &ListingGroup, style: RenderStyle) {
    match style {
        RenderStyle::Markdown => {
            lines.push("<details open>".to_string());
            lines.push(format!("<summary>{}</summary>", group.header));
            lines.push(String::new());
        }
        RenderStyle::Plain => lines.push(format!("▼ {}", group.header)),
    }

    if group.is_empty() {
        lines.push(match style {
            RenderStyle::Markdown => format!("_{}_", group.empty_message),
            RenderStyle::Plain => format!("  ℹ️  {}", group.empty_message),
        });
    } else {
        for (index, listing) in group.listings.iter().enumerate() {
            match group.layout {
                ListingLayout::Snippet => push_snippet_item(lines, index + 1, listing, style),
                ListingLayout::JobCard => push_job_card(lines, listing, style),
            }
        }
    }

    if style == RenderStyle::Markdown {
        lines.push(String::new());
        lines.push("</details>".to_string());
    }
}

fn push_snippet_item(lines: &mut Vec<String>, number: usize, listing: &Listing, style: RenderStyle) {
    let snippet = listing.snippet_or_default();

    match style {
        RenderStyle::Markdown => {
            lines.push(format!("**{}. [{}]({})**", number, listing.title, listing.link));
            lines.push(String::new());
            lines.push(format!("📝 {}", snippet));
            lines.push(String::new());
            lines.push(SEPARATOR.to_string());
            lines.push(String::new());
        }
        RenderStyle::Plain => {
            lines.push(format!("  {}. {}", number, listing.title));
            lines.push(format!("     {}", listing.link));
            lines.push(format!("     📝 {}", snippet));
            lines.push(format!("     {}", SEPARATOR));
        }
    }
}

fn push_job_card(lines: &mut Vec<String>, listing: &Listing, style: RenderStyle) {
    let job = listing.job.clone().unwrap_or_default();
    let remote = if job.remote { "Yes" } else { "No" };

    match style {
        RenderStyle::Markdown => {
            lines.push(format!("### 🔹 [{}]({})", listing.title, listing.link));
            lines.push(format!("- 🏢 **{}**", job.employer));
            lines.push(format!("- 📍 Location: *{}*", job.location));
            lines.push(format!("- 🕒 Employment Type: *{}*", job.employment_type));
            lines.push(format!("- 🌐 Remote: {}", remote));
            lines.push(format!("- 💰 Salary: {}", job.salary));
            lines.push(format!("- 📅 Posted on: {}", job.posted_on));
            lines.push(String::new());
            lines.push(SEPARATOR.to_string());
            lines.push(String::new());
        }
        RenderStyle::Plain => {
            lines.push(format!("  🔹 {}", listing.title));
            lines.push(format!("     {}", listing.link));
            lines.push(format!("     🏢 {}", job.employer));
            lines.push(format!("     📍 Location: {}", job.location));
            lines.push(format!("     🕒 Employment Type: {}", job.employment_type));
            lines.push(format!("     🌐 Remote: {}", remote));
            lines.push(format!("     💰 Salary: {}", job.salary));
            lines.push(format!("     📅 Posted on: {}", job.posted_on));
            lines.push(format!("     {}", SEPARATOR));
        }
    }
}

fn render_advice(lines: &mut Vec<String>, advice: &Advice, style: RenderStyle) {
    lines.push(heading(ADVICE_TITLE, style));
    lines.push(String::new());

    match advice {
        Advice::Suggestions(items) => {
            for item in items {
                lines.push(match style {
                    RenderStyle::Markdown => format!("- **{}:** {}", item.track.heading(), item.text),
                    RenderStyle::Plain => format!("  • {}: {}", item.track.heading(), item.text),
                });
            }
        }
        Advice::Fallback(message) => {
            lines.push(notice_line(&Notice::Info(message.clone()), style));
        }
    }
}

fn heading(title: &str, style: RenderStyle) -> String {
    match style {
        RenderStyle::Markdown => format!("## {}", title),
        RenderStyle::Plain => format!("== {} ==", title),
    }
}

fn notice_line(notice: &Notice, style: RenderStyle) -> String {
    let icon = match notice {
        Notice::Info(_) => "ℹ️",
        Notice::Warning(_) => "⚠️",
        Notice::Error(_) => "❌",
    };

    match style {
        RenderStyle::Markdown => format!("> {} {}", icon, notice.message()),
        RenderStyle::Plain => format!("{}  {}", icon, notice.message()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{advise, JobDetails, FALLBACK_ADVICE, NO_DESCRIPTION};

    fn paid_group(listings: Vec<Listing>) -> ListingGroup {
        ListingGroup::labelled("💰", "Paid Internships", ListingLayout::Snippet, listings)
    }

    #[test]
    fn test_empty_group_shows_placeholder() {
        for style in [RenderStyle::Plain, RenderStyle::Markdown] {
            let text = render_group(&paid_group(vec![]), style);
            assert!(text.contains("💰 Paid Internships"));
            assert!(text.contains("No paid internships found for your query."));
        }
    }

    #[test]
    fn test_markdown_group_is_collapsible() {
        let text = render_group(&paid_group(vec![]), RenderStyle::Markdown);
        assert!(text.starts_with("<details open>"));
        assert!(text.ends_with("</details>"));
    }

    #[test]
    fn test_snippet_items_numbered_with_defaults() {
        let group = paid_group(vec![
            Listing::new("First", "https://a.example").with_snippet("Stipend offered"),
            Listing::new("Second", "#"),
        ]);

        let text = render_group(&group, RenderStyle::Markdown);
        assert!(text.contains("**1. [First](https://a.example)**"));
        assert!(text.contains("📝 Stipend offered"));
        assert!(text.contains("**2. [Second](#)**"));
        assert!(text.contains(&format!("📝 {}", NO_DESCRIPTION)));
        assert_eq!(text.matches(SEPARATOR).count(), 2);
    }

    #[test]
    fn test_job_card_fields() {
        let job = JobDetails {
            employer: "Acme".to_string(),
            remote: true,
            ..JobDetails::default()
        };
        let group = ListingGroup::labelled(
            "",
            "Opportunities",
            ListingLayout::JobCard,
            vec![Listing::new("Backend", "https://acme.example").with_job(job)],
        );

        let text = render_group(&group, RenderStyle::Markdown);
        assert!(text.contains("### 🔹 [Backend](https://acme.example)"));
        assert!(text.contains("- 🏢 **Acme**"));
        assert!(text.contains("- 📍 Location: *N/A*"));
        assert!(text.contains("- 🌐 Remote: Yes"));
        assert!(text.contains("- 💰 Salary: Not specified"));
        assert!(text.contains("- 📅 Posted on: N/A"));
    }

    #[test]
    fn test_job_card_without_details_uses_defaults() {
        let group = ListingGroup::labelled(
            "",
            "Opportunities",
            ListingLayout::JobCard,
            vec![Listing::new("Backend", "#")],
        );

        let text = render_group(&group, RenderStyle::Plain);
        assert!(text.contains("🌐 Remote: No"));
        assert!(text.contains("🏢 N/A"));
    }

    #[test]
    fn test_report_renders_notices_sections_and_advice() {
        let report = Report {
            notices: vec![Notice::Error("An error occurred".to_string())],
            sections: vec![Section::new("🎓 Internships")
                .with_notice(Notice::Warning("No internship listings found".to_string()))
                .with_group(paid_group(vec![]))],
            advice: advise("web and ai"),
        };

        let text = render(&report, RenderStyle::Markdown);
        assert!(text.starts_with("> ❌ An error occurred"));
        assert!(text.contains("## 🎓 Internships"));
        assert!(text.contains("> ⚠️ No internship listings found"));
        assert!(text.contains("No paid internships found for your query."));
        assert!(text.contains("- **For Web Development:**"));
        assert!(text.contains("- **For AI/ML:**"));
        assert!(!text.contains("For Data Roles"));
    }

    #[test]
    fn test_fallback_advice_rendered_as_info() {
        let report = Report {
            notices: vec![],
            sections: vec![],
            advice: advise("Finance"),
        };

        let text = render(&report, RenderStyle::Plain);
        assert!(text.contains("== 📈 Skill Suggestions =="));
        assert!(text.contains(FALLBACK_ADVICE));
    }
}
