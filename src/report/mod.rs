pub mod html;

pub use html::HtmlReport;
