use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::tickets::models::{CounterSnapshot, IssuedTicket, Period, TicketCounter};

/// Optional period scope for the current-count endpoint.
/// Both `year` and `month` must be given together; omit both for the current period.
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PeriodQuery {
    #[validate(range(min = 2000, max = 9999, message = "Year must be between 2000 and 9999"))]
    #[param(minimum = 2000, maximum = 9999)]
    pub year: Option<i32>,

    #[validate(range(min = 1, max = 12, message = "Month must be between 1 and 12"))]
    #[param(minimum = 1, maximum = 12)]
    pub month: Option<u32>,
}

impl PeriodQuery {
    pub fn period(&self) -> Result<Option<Period>> {
        match (self.year, self.month) {
            (Some(year), Some(month)) => Period::new(year, month).map(Some),
            (None, None) => Ok(None),
            _ => Err(AppError::Validation(
                "Year and month must be provided together".to_string(),
            )),
        }
    }
}

/// Response for `GET /tickets/current/{locationId}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentCountResponseDto {
    pub success: bool,
    pub location_id: i32,
    pub current_count: i32,
    pub next_ticket: i32,
    pub manual_reset: bool,
    pub year: i32,
    pub month: u32,
}

impl TryFrom<CounterSnapshot> for CurrentCountResponseDto {
    type Error = AppError;

    fn try_from(s: CounterSnapshot) -> Result<Self> {
        Ok(Self {
            success: true,
            location_id: s.location_id.get(),
            current_count: s.current_count,
            next_ticket: s.next_ticket()?,
            manual_reset: s.manual_reset,
            year: s.period.year(),
            month: s.period.month(),
        })
    }
}

/// Response for `GET /tickets/next/{locationId}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NextTicketResponseDto {
    pub ticket: i32,
    pub location_id: i32,
    pub year: i32,
    pub month: u32,
}

impl From<IssuedTicket> for NextTicketResponseDto {
    fn from(t: IssuedTicket) -> Self {
        Self {
            ticket: t.ticket,
            location_id: t.location_id.get(),
            year: t.period.year(),
            month: t.period.month(),
        }
    }
}

/// Response for `POST /tickets/reset/{locationId}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResetCounterResponseDto {
    pub success: bool,
    pub message: String,
    pub location_id: i32,
    pub next_ticket: i32,
}

impl TryFrom<TicketCounter> for ResetCounterResponseDto {
    type Error = AppError;

    fn try_from(c: TicketCounter) -> Result<Self> {
        let next_ticket = c.next_ticket()?;
        Ok(Self {
            success: true,
            message: format!(
                "Ticket counter reset for location {} ({:04}-{:02})",
                c.business_location_id, c.year, c.month
            ),
            location_id: c.business_location_id,
            next_ticket,
        })
    }
}

/// One period of a location's counter history
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketCounterDto {
    pub id: i64,
    pub location_id: i32,
    pub year: i32,
    pub month: i32,
    pub current_count: i32,
    pub manual_reset: bool,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<TicketCounter> for TicketCounterDto {
    fn from(c: TicketCounter) -> Self {
        Self {
            id: c.id,
            location_id: c.business_location_id,
            year: c.year,
            month: c.month,
            current_count: c.current_count,
            manual_reset: c.manual_reset,
            created_at: c.created_at,
            last_updated: c.last_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::tickets::models::LocationId;

    #[test]
    fn test_period_query_requires_both_fields() {
        let both = PeriodQuery {
            year: Some(2026),
            month: Some(2),
        };
        assert_eq!(both.period().unwrap(), Some(Period::new(2026, 2).unwrap()));
        assert_eq!(PeriodQuery::default().period().unwrap(), None);

        let only_year = PeriodQuery {
            year: Some(2026),
            month: None,
        };
        assert!(matches!(only_year.period(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_period_query_validate_ranges() {
        let bad_month = PeriodQuery {
            year: Some(2026),
            month: Some(13),
        };
        assert!(bad_month.validate().is_err());

        let bad_year = PeriodQuery {
            year: Some(1999),
            month: Some(1),
        };
        assert!(bad_year.validate().is_err());
    }

    #[test]
    fn test_current_count_serializes_camel_case() {
        let snapshot = CounterSnapshot::empty(
            LocationId::new(7).unwrap(),
            Period::new(2026, 10).unwrap(),
        );
        let dto = CurrentCountResponseDto::try_from(snapshot).unwrap();
        let json = serde_json::to_value(dto).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["currentCount"], 0);
        assert_eq!(json["nextTicket"], 1);
        assert_eq!(json["locationId"], 7);
    }

    #[test]
    fn test_current_count_at_max_is_rejected() {
        let mut snapshot = CounterSnapshot::empty(
            LocationId::new(7).unwrap(),
            Period::new(2026, 10).unwrap(),
        );
        snapshot.current_count = i32::MAX;

        assert!(matches!(
            CurrentCountResponseDto::try_from(snapshot),
            Err(AppError::CounterUnavailable(_))
        ));
    }

    #[test]
    fn test_next_ticket_response_includes_period() {
        let issued = IssuedTicket {
            location_id: LocationId::new(7).unwrap(),
            period: Period::new(2026, 3).unwrap(),
            ticket: 12,
        };
        let json = serde_json::to_value(NextTicketResponseDto::from(issued)).unwrap();

        assert_eq!(json["ticket"], 12);
        assert_eq!(json["locationId"], 7);
        assert_eq!(json["year"], 2026);
        assert_eq!(json["month"], 3);
    }
}
