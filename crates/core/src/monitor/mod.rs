mod dates;
mod error;
mod grouping;
mod operations;
mod presentation;
mod request;
mod types;

pub use dates::{apply_offset, encode_date};
pub use error::IdentityError;
pub use grouping::{group_by_class, UNKNOWN_GROUP};
pub use operations::filter_rows;
pub use presentation::{present_row, strip_tags, RowView, PLACEHOLDER};
pub use request::{DisplayFlags, MonitorRequest};
pub use types::{
    Absence, AbsentElement, MonitorPayload, QueryOptions, Row, SchoolIdentity, CANCEL_STYLE,
};
