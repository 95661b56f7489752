pub use self::{
    http::HTTP,
    label_file::read_label_map,
    spreadsheet::{export, output_file_name, write_report, HEADER},
};

mod http;
mod label_file;
mod spreadsheet;
