pub mod estimate;
pub mod hourly;
pub mod intake;
pub mod profile;
pub mod route;

pub use estimate::{estimate, EnergyLabel};
pub use hourly::{peak_hour, trough_hour, NO_HOUR};
pub use intake::{normalize, validate, ConsumptionMode, FieldError, IntakeError, IntakeForm};
pub use profile::{ConsumptionSource, ConsumptionSplit, MeterData, Profile, SolarPanelType};
pub use route::{after_submit, back_from_comparison, View};
