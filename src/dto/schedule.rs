use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::store::schedule::ScheduleRow;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    #[serde(default)]
    pub day_of_week: String,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub classroom: Option<String>,
    #[serde(default)]
    pub course_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub id_schedule: i64,
    pub day_of_week: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub classroom: Option<String>,
    pub course_id: i64,
    pub course_name: String,
    pub course_code: String,
}

impl ScheduleResponse {
    pub fn from_row(row: ScheduleRow) -> Self {
        ScheduleResponse {
            id_schedule: row.id_schedule,
            day_of_week: row.day_of_week,
            start_time: row.start_time,
            end_time: row.end_time,
            classroom: row.classroom,
            course_id: row.id_course,
            course_name: row.course_name,
            course_code: row.course_code,
        }
    }
}
