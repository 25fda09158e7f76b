//! Consumption estimate from an energy label and household size.

/// Building energy-efficiency label, as selected in the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyLabel {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    Unknown,
}

impl EnergyLabel {
    pub const ALL: [EnergyLabel; 8] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::Unknown,
    ];

    /// Parse a form value. Empty means "not selected"; any other
    /// unrecognized value falls back to `Unknown`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "" => None,
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            "E" => Some(Self::E),
            "F" => Some(Self::F),
            "G" => Some(Self::G),
            _ => Some(Self::Unknown),
        }
    }

    /// Form value for this label
    pub fn as_value(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
            Self::Unknown => "unknown",
        }
    }

    /// Display name for the label dropdown
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::A => "A - Zeer energiezuinig",
            Self::B => "B - Energiezuinig",
            Self::C => "C - Matig energieverbruik",
            Self::D => "D - Hoger energieverbruik",
            Self::E => "E - Hoog energieverbruik",
            Self::F => "F - Zeer hoog energieverbruik",
            Self::G => "G - Extreem hoog energieverbruik",
            Self::Unknown => "Geen idee",
        }
    }

    /// Baseline yearly consumption in kWh for a single-person household
    fn yearly_baseline(&self) -> f64 {
        match self {
            Self::A => 1500.0,
            Self::B => 2000.0,
            Self::C => 2500.0,
            Self::D => 3500.0,
            Self::E => 4500.0,
            Self::F => 5500.0,
            Self::G => 6500.0,
            Self::Unknown => 3000.0,
        }
    }
}

/// Estimate monthly consumption in kWh from the energy label and the number
/// of household members. Each member beyond the first adds 500 kWh/year.
///
/// Without a label or with zero members there is nothing to base a number
/// on, so the estimate is 0 rather than a fabricated value.
pub fn estimate(label: Option<EnergyLabel>, members: u32) -> f64 {
    let Some(label) = label else {
        return 0.0;
    };
    if members == 0 {
        return 0.0;
    }
    let yearly = label.yearly_baseline() + f64::from(members.max(1) - 1) * 500.0;
    yearly / 12.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_c_three_members() {
        let monthly = estimate(Some(EnergyLabel::C), 3);
        // (2500 + 2 * 500) / 12
        assert!((monthly - 3500.0 / 12.0).abs() < 1e-9);
        assert_eq!(format!("{:.0} kWh", monthly), "292 kWh");
    }

    #[test]
    fn no_label_or_members_gives_zero() {
        assert_eq!(estimate(None, 3), 0.0);
        for label in EnergyLabel::ALL {
            assert_eq!(estimate(Some(label), 0), 0.0);
        }
    }

    #[test]
    fn non_decreasing_in_label_severity() {
        let ordered = [
            EnergyLabel::A,
            EnergyLabel::B,
            EnergyLabel::C,
            EnergyLabel::D,
            EnergyLabel::E,
            EnergyLabel::F,
            EnergyLabel::G,
        ];
        for pair in ordered.windows(2) {
            assert!(estimate(Some(pair[0]), 2) <= estimate(Some(pair[1]), 2));
        }
    }

    #[test]
    fn strictly_increasing_in_members() {
        for label in EnergyLabel::ALL {
            for members in 1..6 {
                assert!(estimate(Some(label), members) < estimate(Some(label), members + 1));
            }
        }
    }

    #[test]
    fn unrecognized_value_falls_back_to_unknown() {
        assert_eq!(EnergyLabel::parse("H"), Some(EnergyLabel::Unknown));
        assert_eq!(EnergyLabel::parse(""), None);
        let unknown = estimate(EnergyLabel::parse("H"), 1);
        assert!((unknown - 3000.0 / 12.0).abs() < 1e-9);
    }
}
