pub use self::{label_map::LabelMap, report_row::ReportRow};

mod label_map;
mod report_row;
