use std::collections::HashMap;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CardEntry {
    pub name: String,
    pub due: String,
    pub comment: String,
}

impl CardEntry {
    pub fn new(name: impl ToString, due: impl ToString, comment: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            due: due.to_string(),
            comment: comment.to_string(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BoardSection {
    pub project: String,
    pub board: String,
    pub cards: Vec<CardEntry>,
}

/// Due cards grouped by project and board, in the order they were found.
#[derive(Debug, Clone, Default)]
pub struct Report {
    sections: Vec<BoardSection>,
    index: HashMap<(String, String), usize>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, project: &str, board: &str, entry: CardEntry) {
        let key = (project.to_string(), board.to_string());
        let position = match self.index.get(&key) {
            Some(position) => *position,
            None => {
                self.sections.push(BoardSection {
                    project: project.to_string(),
                    board: board.to_string(),
                    cards: vec![],
                });
                self.index.insert(key, self.sections.len() - 1);
                self.sections.len() - 1
            }
        };
        self.sections[position].cards.push(entry);
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn sections(&self) -> &[BoardSection] {
        &self.sections
    }

    pub fn cards(&self, project: &str, board: &str) -> Option<&[CardEntry]> {
        self.index
            .get(&(project.to_string(), board.to_string()))
            .map(|position| self.sections[*position].cards.as_slice())
    }
}
