pub mod backup;
pub mod provision;
pub mod sync;
pub mod template;
pub mod workbook;
