pub mod flow;

use crate::core::engine::StatusEngine;
use crate::domain::model::DayStatus;
use crate::domain::ports::{HolidaySource, SettingsProvider, VacationSource};
use serde::Serialize;

/// Response of the "get current status" operation.
///
/// Either the full status flattened into a camelCase payload, or
/// `{ok: false, error}` when the settings store cannot be read. Upstream
/// failures never produce the failure variant; they degrade inside the
/// engine to an all-false status.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StatusResponse {
    Ok(StatusPayload),
    Failed(FailurePayload),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPayload {
    pub ok: bool,
    pub date: chrono::NaiveDate,
    pub state: String,
    pub is_public_holiday: bool,
    pub is_school_vacation: bool,
    pub public_holiday_names: Vec<String>,
    pub vacation_names: Vec<String>,
    pub special_today: bool,
}

#[derive(Debug, Serialize)]
pub struct FailurePayload {
    pub ok: bool,
    pub error: String,
}

impl From<DayStatus> for StatusPayload {
    fn from(status: DayStatus) -> Self {
        Self {
            ok: true,
            date: status.date,
            state: status.state,
            is_public_holiday: status.public_holiday_today,
            is_school_vacation: status.school_vacation_today,
            public_holiday_names: status.public_holiday_names,
            vacation_names: status.vacation_names,
            special_today: status.special_today,
        }
    }
}

/// The status query endpoint. Reads state and vacation-check flag from the
/// settings provider; a provider failure is the only error surfaced.
pub async fn get_status<H, V, P>(engine: &StatusEngine<H, V>, provider: &P) -> StatusResponse
where
    H: HolidaySource,
    V: VacationSource,
    P: SettingsProvider,
{
    match provider.settings() {
        Ok(settings) => {
            let status = engine.build_status(&settings).await;
            StatusResponse::Ok(StatusPayload::from(status))
        }
        Err(e) => {
            tracing::error!("getStatus failed: {}", e);
            StatusResponse::Failed(FailurePayload {
                ok: false,
                error: e.to_string(),
            })
        }
    }
}
