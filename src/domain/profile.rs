//! The canonical household profile produced by the intake flow.
//!
//! A profile is built once per submission, owned by the session context, and
//! only ever replaced wholesale. Views receive it read-only.

use crate::models::{HourlyUsageMap, MeterSummary};

/// How the monthly consumption figure was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumptionSource {
    /// User typed a monthly kWh number
    Manual,
    /// Estimated from energy label and household size
    LabelEstimate,
    /// Taken from an uploaded smart-meter file, via the backend
    SmartMeter,
}

/// Backend-derived normal/dal split of yearly consumption. Never recomputed
/// locally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsumptionSplit {
    pub normal_kwh: f64,
    pub low_kwh: f64,
}

/// Solar panel type, as picked in the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolarPanelType {
    Monokristallijn,
    Polykristallijn,
    GlasGlas,
    Amorf,
    #[default]
    Unknown,
}

impl SolarPanelType {
    pub const ALL: [SolarPanelType; 5] = [
        Self::Monokristallijn,
        Self::Polykristallijn,
        Self::GlasGlas,
        Self::Amorf,
        Self::Unknown,
    ];

    pub fn parse(value: &str) -> Self {
        match value {
            "monokristallijn" => Self::Monokristallijn,
            "polykristallijn" => Self::Polykristallijn,
            "glasglas" => Self::GlasGlas,
            "amorf" => Self::Amorf,
            _ => Self::Unknown,
        }
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            Self::Monokristallijn => "monokristallijn",
            Self::Polykristallijn => "polykristallijn",
            Self::GlasGlas => "glasglas",
            Self::Amorf => "amorf",
            Self::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Monokristallijn => "Monokristallijn (Zwart)",
            Self::Polykristallijn => "Polykristallijn (Blauw)",
            Self::GlasGlas => "Glas-glas zonnepanelen",
            Self::Amorf => "Amorf / Dunne film panelen",
            Self::Unknown => "Geen idee",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Monokristallijn => {
                "Hoge efficiëntie (18-22%), langdurig betrouwbaar, duurder maar beter rendement op lange termijn."
            }
            Self::Polykristallijn => {
                "Goede efficiëntie (15-17%), kosteneffectief, populaire keuze voor huishoudens."
            }
            Self::GlasGlas => {
                "Dubbele glaslaag, uitzonderlijke duurzaamheid, zeer weersbestendig, langere levensduur (40+ jaar)."
            }
            Self::Amorf => {
                "Lager rendement (8-10%), beter in zwak licht, flexibel en licht, ideaal voor aangepaste toepassingen."
            }
            Self::Unknown => "",
        }
    }
}

/// Backend-processed smart-meter data carried along for the dashboard view.
#[derive(Debug, Clone)]
pub struct MeterData {
    pub summary: MeterSummary,
    pub hourly: HourlyUsageMap,
}

/// Canonical record produced by the intake flow. Immutable once constructed;
/// the session holder replaces it wholesale or discards it on restart.
#[derive(Debug, Clone)]
pub struct Profile {
    pub monthly_consumption_kwh: f64,
    pub source: ConsumptionSource,
    pub consumption_split: Option<ConsumptionSplit>,
    /// Nonzero only when `source` is `SmartMeter`; the normalizer forces it
    /// to 0 for every other source.
    pub variable_costs_total_euros: f64,

    pub address: String,
    pub zip_code: String,
    pub city: String,

    pub has_gas: bool,
    pub gas_consumption: Option<f64>,
    pub has_solar_panels: bool,
    pub solar_panel_count: Option<u32>,
    pub solar_panel_type: SolarPanelType,
    pub has_home_battery: bool,
    pub home_battery_capacity: Option<String>,

    /// Present iff `source` is `SmartMeter`.
    pub meter: Option<MeterData>,
}

impl Profile {
    pub fn is_smart_meter(&self) -> bool {
        self.source == ConsumptionSource::SmartMeter
    }
}
