//! Query CLI command.

use chrono::NaiveDate;
use clap::Parser;
use subboard_core::monitor::{QueryOptions, SchoolIdentity};

/// Arguments for one board query.
#[derive(Debug, Parser)]
pub struct QueryCommand {
    /// School name as registered on the monitor server.
    #[arg(long, env = "SUBBOARD_SCHOOL")]
    pub school: String,

    /// Monitor display format name.
    #[arg(long, env = "SUBBOARD_FORMAT")]
    pub format_name: String,

    /// Department ID; repeat for several departments.
    #[arg(long = "department-id", value_name = "ID")]
    pub department_ids: Vec<i64>,

    /// Query date (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Day offset applied to the query date (may be negative).
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub offset: i64,

    /// Number of days to request.
    #[arg(long, default_value = "1")]
    pub days: u32,

    /// Class/course group to keep; repeat for several groups.
    /// Without this flag the whole board is shown.
    #[arg(long = "class", value_name = "GROUP")]
    pub classes: Vec<String>,
}

impl QueryCommand {
    /// The school identity described by these arguments.
    pub fn identity(&self) -> SchoolIdentity {
        SchoolIdentity::new(&self.school, &self.format_name)
            .with_department_ids(self.department_ids.clone())
    }

    /// The query options described by these arguments.
    pub fn options(&self) -> QueryOptions {
        let mut options = QueryOptions::default()
            .with_date_offset(self.offset)
            .with_number_of_days(self.days);
        if let Some(date) = self.date {
            options = options.with_target_date(date);
        }
        if !self.classes.is_empty() {
            options = options.with_filter_groups(self.classes.clone());
        }
        options
    }
}
