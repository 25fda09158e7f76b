pub mod contracts;
pub mod detail;
pub mod meter;

pub use contracts::{CompareRequest, Contract, MonthCost};
pub use detail::{DailyDetail, HourlyDetail, MonthQuery, ZonneplanMonthly};
pub use meter::{
    ConsumptionSplitPayload, HourlyPoint, HourlyUsageMap, MeterSummary, MeterUnit, UploadResponse,
};
