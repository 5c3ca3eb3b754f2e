use crate::model::{
    Board, BoardIncluded, Card, CardEntry, DueWindow, Error, IncludedResponse, ItemsResponse,
    Project, ProjectIncluded, Report, Result,
};
use crate::planka::{CommentFetcher, PlankaClient, Token};
use chrono::{DateTime, FixedOffset};
use std::collections::HashSet;
use tracing::debug;

const DUE_DATE_FORMAT: &str = "%d-%m-%Y %H:%M";

pub trait DueCardAggregator {
    /// Open cards of the allow-listed boards whose due date falls in `window`.
    async fn due_cards(&self, token: &Token, window: &DueWindow) -> Result<Report>;
}

impl DueCardAggregator for PlankaClient {
    async fn due_cards(&self, token: &Token, window: &DueWindow) -> Result<Report> {
        let mut report = Report::new();

        let projects: ItemsResponse<Project> = self.get_json(token, "/projects").await?;
        for project in &projects.items {
            let path = format!("/projects/{}", project.id);
            let details: IncludedResponse<ProjectIncluded> = self.get_json(token, &path).await?;
            let boards = details
                .included
                .boards
                .iter()
                .filter(|board| self.config().is_board_allowed(&board.id));

            for board in boards {
                self.collect_board(token, window, project, board, &mut report)
                    .await?;
            }
        }
        Ok(report)
    }
}

impl PlankaClient {
    async fn collect_board(
        &self,
        token: &Token,
        window: &DueWindow,
        project: &Project,
        board: &Board,
        report: &mut Report,
    ) -> Result<()> {
        let path = format!("/boards/{}", board.id);
        let details: IncludedResponse<BoardIncluded> = self.get_json(token, &path).await?;
        let valid_list_ids = details
            .included
            .lists
            .iter()
            .map(|list| list.id.as_str())
            .collect::<HashSet<_>>();

        for card in &details.included.cards {
            let Some(due_date) = due_in_window(card, &valid_list_ids, window, &self.config().timezone)
                .map_err(|e| Error::malformed(&path, format!("card {}: {}", card.id, e)))?
            else {
                continue;
            };
            debug!("Card {} on board {} is due {}", card.id, board.id, due_date);

            let comment = self.latest_comment(token, &card.id).await;
            report.push(
                &project.name,
                &board.name,
                CardEntry::new(card.short_name(), due_date.format(DUE_DATE_FORMAT), comment),
            );
        }
        Ok(())
    }
}

/// Due date of a card that belongs on the board and is open and due inside
/// `window`.
fn due_in_window(
    card: &Card,
    valid_list_ids: &HashSet<&str>,
    window: &DueWindow,
    timezone: &FixedOffset,
) -> std::result::Result<Option<DateTime<FixedOffset>>, chrono::ParseError> {
    let Some(list_id) = &card.list_id else {
        return Ok(None);
    };
    if !valid_list_ids.contains(list_id.as_str()) {
        return Ok(None);
    }
    let due_date = card
        .open_due_date(timezone)?
        .filter(|due_date| window.contains(due_date.date_naive()));
    Ok(due_date)
}
