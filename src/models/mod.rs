pub mod action;
pub mod report;

pub use action::ActionRow;
pub use report::SyncReport;
