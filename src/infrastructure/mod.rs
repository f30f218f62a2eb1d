pub mod csv_source;
pub mod report_writer;

pub use csv_source::{LongCsvSource, WideCsvSource};
pub use report_writer::ReportFormat;
