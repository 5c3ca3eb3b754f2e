mod config;
mod planka;
mod report;
mod result;
mod window;

pub use config::Config;
pub use planka::{
    Board, BoardIncluded, BoardList, Card, CardAction, Comment, IncludedResponse, ItemResponse,
    ItemsResponse, Project, ProjectIncluded,
};
pub use report::{BoardSection, CardEntry, Report};
pub use result::{Error, Result};
pub use window::DueWindow;
