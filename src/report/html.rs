use crate::model::{BoardSection, CardEntry, Report};
use indexmap::IndexMap;
use std::fmt::Write;

pub trait HtmlReport {
    /// Telegram HTML text of the report, `None` when there is nothing due.
    fn render_html(&self) -> Option<String>;
}

impl HtmlReport for Report {
    fn render_html(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let mut projects: IndexMap<&str, Vec<&BoardSection>> = IndexMap::new();
        for section in self.sections() {
            projects
                .entry(section.project.as_str())
                .or_default()
                .push(section);
        }

        let mut doc = String::new();
        for (project, boards) in projects {
            doc.add_project(project);
            for section in boards {
                doc.add_board(&section.board, &section.cards);
            }
        }
        Some(doc.trim().to_string())
    }
}

trait HtmlExt {
    fn add_project(&mut self, project: &str);
    fn add_board(&mut self, board: &str, cards: &[CardEntry]);
}

impl HtmlExt for String {
    fn add_project(&mut self, project: &str) {
        let _ = write!(self, "\n----- Project: <b>{}</b> -----\n", escape(project));
    }

    fn add_board(&mut self, board: &str, cards: &[CardEntry]) {
        let _ = write!(self, "\nBoard: <b>{}</b>\n", escape(board));
        for card in cards {
            let _ = write!(self, "\n📄 Card: {}(🕒 {})\n", escape(&card.name), card.due);
            if !card.comment.is_empty() {
                let _ = write!(self, "<i>💬 Comment: {}</i>\n", escape(&card.comment));
            }
        }
        self.push_str("---\n");
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_renders_nothing() {
        assert_eq!(Report::new().render_html(), None);
    }

    #[test]
    fn renders_projects_boards_and_comments() {
        let mut report = Report::new();
        report.push(
            "Ops",
            "Sprint",
            CardEntry::new("Fix pipeline", "10-06-2025 13:00", ""),
        );
        report.push(
            "Ops",
            "Sprint",
            CardEntry::new("Rotate keys", "11-06-2025 09:30", "waiting on vendor"),
        );
        report.push("Dev", "Backlog", CardEntry::new("Docs", "12-06-2025 18:00", ""));

        let expected = "----- Project: <b>Ops</b> -----\n\
            \n\
            Board: <b>Sprint</b>\n\
            \n\
            📄 Card: Fix pipeline(🕒 10-06-2025 13:00)\n\
            \n\
            📄 Card: Rotate keys(🕒 11-06-2025 09:30)\n\
            <i>💬 Comment: waiting on vendor</i>\n\
            ---\n\
            \n\
            ----- Project: <b>Dev</b> -----\n\
            \n\
            Board: <b>Backlog</b>\n\
            \n\
            📄 Card: Docs(🕒 12-06-2025 18:00)\n\
            ---";
        assert_eq!(report.render_html().unwrap(), expected);
    }

    #[test]
    fn escapes_markup_in_names() {
        let mut report = Report::new();
        report.push("R&D", "<core>", CardEntry::new("a < b", "10-06-2025 13:00", "x>y"));
        let html = report.render_html().unwrap();
        assert!(html.contains("<b>R&amp;D</b>"));
        assert!(html.contains("<b>&lt;core&gt;</b>"));
        assert!(html.contains("Card: a &lt; b("));
        assert!(html.contains("Comment: x&gt;y</i>"));
    }
}
