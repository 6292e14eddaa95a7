use serde::{Deserialize, Serialize};

use super::common::{CalendarReference, InfoMap, PriorityReference, SlaReference};

/// Which calendar the SLA hours are counted against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlaBasedOn {
    #[default]
    MyCalendar,
    Customer,
    Custom,
    /// A value this client does not know about yet
    #[serde(other)]
    Unknown,
}

/// A service level agreement, `/service/slas/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sla {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_flag: Option<bool>,
    #[serde(default)]
    pub respond_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respond_percent: Option<i32>,
    #[serde(default)]
    pub plan_within: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_within_percent: Option<i32>,
    #[serde(default)]
    pub resolution_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_percent: Option<i32>,
    #[serde(default)]
    pub based_on: SlaBasedOn,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_calendar: Option<CalendarReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_order: Option<i32>,
    #[serde(rename = "_info", default, skip_serializing_if = "Option::is_none")]
    pub info: Option<InfoMap>,
}

/// The reduced SLA record served by `/service/slas/info`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_flag: Option<bool>,
    #[serde(rename = "_info", default, skip_serializing_if = "Option::is_none")]
    pub info: Option<InfoMap>,
}

/// Per-priority target hours of an SLA, `/service/slas/{id}/priorities/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaPriority {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sla: Option<SlaReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<PriorityReference>,
    #[serde(default)]
    pub respond_hours: f64,
    #[serde(default)]
    pub plan_within: f64,
    #[serde(default)]
    pub resolution_hours: f64,
    #[serde(rename = "_info", default, skip_serializing_if = "Option::is_none")]
    pub info: Option<InfoMap>,
}

/// A record that references an SLA, `/service/slas/{id}/usages`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub usage_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
