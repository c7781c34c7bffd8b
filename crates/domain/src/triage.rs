//! Vital-sign triage
//!
//! Pure classifiers that decide whether an ambulance carrying a patient with
//! the given vitals should get a green light. Two threshold profiles exist:
//! the bedside safety score (low readings only) and the roadside IoT
//! controller (low and high readings).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Systolic pressure below this is critical (mmHg)
pub const CRITICAL_SYSTOLIC_LOW: u16 = 90;
/// Systolic pressure above this is critical for the IoT profile (mmHg)
pub const CRITICAL_SYSTOLIC_HIGH: u16 = 140;
/// Oxygen saturation below this is critical (%)
pub const CRITICAL_SPO2: u16 = 92;
/// Heart rate below this is critical (bpm)
pub const CRITICAL_HEART_RATE_LOW: u16 = 50;
/// Heart rate above this is critical for the IoT profile (bpm)
pub const CRITICAL_HEART_RATE_HIGH: u16 = 120;

/// One set of patient readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalSigns {
    /// Systolic blood pressure in mmHg
    pub systolic_bp: u16,
    /// Blood oxygen saturation in percent
    pub spo2: u16,
    /// Heart rate in beats per minute
    pub heart_rate: u16,
}

impl VitalSigns {
    /// Bundle three readings
    #[must_use]
    pub const fn new(systolic_bp: u16, spo2: u16, heart_rate: u16) -> Self {
        Self {
            systolic_bp,
            spo2,
            heart_rate,
        }
    }

    /// Parse the three readings from free text, as typed at a prompt
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` naming the first field that is
    /// not a non-negative integer.
    pub fn parse(systolic_bp: &str, spo2: &str, heart_rate: &str) -> Result<Self, DomainError> {
        Ok(Self::new(
            parse_reading("blood pressure", systolic_bp)?,
            parse_reading("SpO2", spo2)?,
            parse_reading("heart rate", heart_rate)?,
        ))
    }
}

fn parse_reading(name: &str, raw: &str) -> Result<u16, DomainError> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::ValidationError(format!("{name} must be a whole number, got {raw:?}")))
}

impl fmt::Display for VitalSigns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BP: {} mmHg | SpO2: {}% | HR: {} bpm",
            self.systolic_bp, self.spo2, self.heart_rate
        )
    }
}

/// Traffic light state for the ambulance's path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrafficLight {
    /// Normal traffic control
    #[default]
    Red,
    /// Cleared for the ambulance
    Green,
}

impl TrafficLight {
    /// Whether the light was switched for an emergency
    #[must_use]
    pub const fn is_green(self) -> bool {
        matches!(self, Self::Green)
    }
}

impl fmt::Display for TrafficLight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => f.write_str("RED"),
            Self::Green => f.write_str("GREEN"),
        }
    }
}

/// Which threshold set to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriageProfile {
    /// Low-reading thresholds, reported as a safety score
    #[default]
    Safety,
    /// Low and high thresholds, reported as a traffic controller decision
    Iot,
}

impl TriageProfile {
    /// Classify vitals under this profile
    #[must_use]
    pub const fn classify(self, vitals: &VitalSigns) -> TrafficLight {
        match self {
            Self::Safety => safety_light(vitals),
            Self::Iot => iot_light(vitals),
        }
    }

    /// Human-readable verdict for a light under this profile
    #[must_use]
    pub const fn verdict(self, light: TrafficLight) -> &'static str {
        match (self, light) {
            (Self::Safety, TrafficLight::Green) => "High Risk",
            (Self::Safety, TrafficLight::Red) => "Normal",
            (Self::Iot, TrafficLight::Green) => {
                "EMERGENCY DETECTED! Traffic Light turned GREEN for ambulance!"
            },
            (Self::Iot, TrafficLight::Red) => "Patient stable. Traffic Light remains RED.",
        }
    }
}

impl fmt::Display for TriageProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Safety => f.write_str("safety"),
            Self::Iot => f.write_str("iot"),
        }
    }
}

impl FromStr for TriageProfile {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "safety" => Ok(Self::Safety),
            "iot" => Ok(Self::Iot),
            other => Err(DomainError::ValidationError(format!(
                "unknown triage profile: {other}"
            ))),
        }
    }
}

/// Safety score classifier: green on any critically low reading
#[must_use]
pub const fn safety_light(vitals: &VitalSigns) -> TrafficLight {
    if vitals.systolic_bp < CRITICAL_SYSTOLIC_LOW
        || vitals.spo2 < CRITICAL_SPO2
        || vitals.heart_rate < CRITICAL_HEART_RATE_LOW
    {
        TrafficLight::Green
    } else {
        TrafficLight::Red
    }
}

/// IoT controller classifier: green on any reading outside its band
#[must_use]
pub const fn iot_light(vitals: &VitalSigns) -> TrafficLight {
    if vitals.systolic_bp < CRITICAL_SYSTOLIC_LOW
        || vitals.systolic_bp > CRITICAL_SYSTOLIC_HIGH
        || vitals.spo2 < CRITICAL_SPO2
        || vitals.heart_rate < CRITICAL_HEART_RATE_LOW
        || vitals.heart_rate > CRITICAL_HEART_RATE_HIGH
    {
        TrafficLight::Green
    } else {
        TrafficLight::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STABLE: VitalSigns = VitalSigns::new(120, 98, 75);

    #[test]
    fn stable_patient_keeps_red() {
        assert_eq!(safety_light(&STABLE), TrafficLight::Red);
        assert_eq!(iot_light(&STABLE), TrafficLight::Red);
    }

    #[test]
    fn low_readings_turn_both_green() {
        for vitals in [
            VitalSigns::new(85, 98, 75),
            VitalSigns::new(120, 91, 75),
            VitalSigns::new(120, 98, 45),
        ] {
            assert!(safety_light(&vitals).is_green(), "{vitals}");
            assert!(iot_light(&vitals).is_green(), "{vitals}");
        }
    }

    #[test]
    fn high_readings_only_trip_iot() {
        for vitals in [VitalSigns::new(150, 98, 75), VitalSigns::new(120, 98, 130)] {
            assert_eq!(safety_light(&vitals), TrafficLight::Red);
            assert_eq!(iot_light(&vitals), TrafficLight::Green);
        }
    }

    #[test]
    fn thresholds_are_exclusive() {
        let edge = VitalSigns::new(90, 92, 50);
        assert_eq!(safety_light(&edge), TrafficLight::Red);
        let upper = VitalSigns::new(140, 92, 120);
        assert_eq!(iot_light(&upper), TrafficLight::Red);
    }

    #[test]
    fn profile_dispatches_and_reports() {
        let low = VitalSigns::new(80, 98, 75);
        let light = TriageProfile::Safety.classify(&low);
        assert_eq!(TriageProfile::Safety.verdict(light), "High Risk");
        assert_eq!(
            TriageProfile::Iot.verdict(TriageProfile::Iot.classify(&STABLE)),
            "Patient stable. Traffic Light remains RED."
        );
    }

    #[test]
    fn parses_prompt_input() {
        let vitals = VitalSigns::parse(" 118", "97 ", "64").unwrap();
        assert_eq!(vitals, VitalSigns::new(118, 97, 64));
        let err = VitalSigns::parse("high", "97", "64").unwrap_err();
        assert!(err.to_string().contains("blood pressure"));
    }

    #[test]
    fn profile_from_str() {
        assert_eq!("IoT".parse::<TriageProfile>().unwrap(), TriageProfile::Iot);
        assert_eq!("safety".parse::<TriageProfile>().unwrap(), TriageProfile::Safety);
        assert!("other".parse::<TriageProfile>().is_err());
    }

    #[test]
    fn light_display() {
        assert_eq!(TrafficLight::Green.to_string(), "GREEN");
        assert_eq!(TrafficLight::default().to_string(), "RED");
        assert_eq!(serde_json::to_string(&TrafficLight::Green).unwrap(), r#""GREEN""#);
    }
}
