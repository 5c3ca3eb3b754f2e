pub mod bot;
pub mod model;
pub mod planka;
pub mod report;
pub mod telegram;
pub mod utils;
