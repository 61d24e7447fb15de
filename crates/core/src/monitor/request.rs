use chrono::Local;
use serde::Serialize;

use super::dates::{apply_offset, encode_date};
use super::error::IdentityError;
use super::types::{QueryOptions, SchoolIdentity};

/// Display and behavior flags the monitor endpoint expects on every
/// request. Their semantics live upstream; the block is sent verbatim
/// so the response keeps the shape the rest of the pipeline decodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayFlags {
    pub strikethrough: bool,
    pub merge_blocks: bool,
    pub show_only_future_sub: bool,
    pub show_break_supervisions: bool,
    pub show_teacher: bool,
    pub show_class: bool,
    pub show_hour: bool,
    pub show_info: bool,
    pub show_room: bool,
    pub show_subject: bool,
    pub group_by: u8,
    pub hide_absent: bool,
    pub department_element_type: i32,
    pub hide_cancel_with_substitution: bool,
    pub hide_cancel_caused_by_event: bool,
    pub show_time: bool,
    pub show_subst_text: bool,
    pub show_absent_elements: Vec<i32>,
    pub show_affected_elements: Vec<i32>,
    pub show_unit_time: bool,
    pub show_messages: bool,
    pub show_studentgroup: bool,
    pub enable_substitution_from: bool,
    pub show_substitution_from: i32,
    pub show_teacher_on_event: bool,
    pub show_absent_teacher: bool,
    pub strikethrough_absent_teacher: bool,
    pub activity_type_ids: Vec<i32>,
    pub show_event: bool,
    pub show_cancel: bool,
    pub show_only_cancel: bool,
    pub show_subst_type_color: bool,
    pub show_exam_supervision: bool,
    pub show_unheralded_exams: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            strikethrough: true,
            merge_blocks: true,
            show_only_future_sub: false,
            show_break_supervisions: false,
            show_teacher: true,
            show_class: true,
            show_hour: true,
            show_info: true,
            show_room: true,
            show_subject: true,
            group_by: 1,
            hide_absent: false,
            department_element_type: -1,
            hide_cancel_with_substitution: true,
            hide_cancel_caused_by_event: false,
            show_time: true,
            show_subst_text: true,
            show_absent_elements: vec![1],
            show_affected_elements: vec![1],
            show_unit_time: true,
            show_messages: true,
            show_studentgroup: false,
            enable_substitution_from: false,
            show_substitution_from: 1530,
            show_teacher_on_event: false,
            show_absent_teacher: true,
            strikethrough_absent_teacher: true,
            activity_type_ids: vec![2, 3],
            show_event: true,
            show_cancel: true,
            show_only_cancel: false,
            show_subst_type_color: false,
            show_exam_supervision: false,
            show_unheralded_exams: true,
        }
    }
}

/// The outbound request body for the substitution data endpoint.
/// Built fresh per call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorRequest {
    pub school_name: String,
    pub format_name: String,
    pub department_ids: Vec<i64>,
    /// Query date encoded as YYYYMMDD, offset already applied.
    pub date: u32,
    pub date_offset: i64,
    pub number_of_days: u32,
    #[serde(flatten)]
    pub flags: DisplayFlags,
}

impl MonitorRequest {
    /// Builds the request body from a validated identity and the query
    /// options. Performs no I/O; deterministic whenever `target_date`
    /// is supplied ("today" is the only implicit input).
    pub fn build(
        identity: &SchoolIdentity,
        options: &QueryOptions,
    ) -> Result<Self, IdentityError> {
        identity.validate()?;

        let base = options
            .target_date
            .unwrap_or_else(|| Local::now().date_naive());
        let query_date = apply_offset(base, options.date_offset);

        Ok(Self {
            school_name: identity.school_name.clone(),
            format_name: identity.format_name.clone(),
            department_ids: identity.department_ids.clone(),
            date: encode_date(query_date),
            date_offset: options.date_offset,
            number_of_days: options.number_of_days,
            flags: DisplayFlags::default(),
        })
    }
}
