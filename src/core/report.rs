//! Summary table rendering

use tabled::builder::Builder;
use tabled::settings::Style;

use super::config::{DETAIL_HEADER, TABLE_HEADERS};
use super::records::RepositoryRecord;

/// Renders the records as a bordered table, one row per record
///
/// Cell text is never wrapped. With `show_details` a fourth column carries
/// the failure detail of each row.
pub fn render_summary(records: &[RepositoryRecord], show_details: bool) -> String {
    let mut builder = Builder::default();

    let mut header: Vec<String> = TABLE_HEADERS.iter().map(|h| h.to_string()).collect();
    if show_details {
        header.push(DETAIL_HEADER.to_string());
    }
    builder.push_record(header);

    for record in records {
        let mut row = vec![
            record.path.display().to_string(),
            record.remote.clone(),
            record.status.text().to_string(),
        ];
        if show_details {
            row.push(record.detail.clone().unwrap_or_default());
        }
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::ascii());
    table.to_string()
}

/// Prints the summary table to stdout
pub fn print_summary(records: &[RepositoryRecord], show_details: bool) {
    println!("{}", render_summary(records, show_details));
}
