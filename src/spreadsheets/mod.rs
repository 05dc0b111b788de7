pub mod schedule_xlsx;

pub use schedule_xlsx::schedule_workbook;
