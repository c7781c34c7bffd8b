//! Vital-sign triage sessions
//!
//! Classifies patient readings with a [`TriageProfile`] and reports the
//! resulting traffic light state.

use std::io::{self, BufRead, Write};

use domain::{TrafficLight, TriageProfile, VitalSigns};
use tracing::info;

use crate::prompt::Prompter;

const EXIT: &str = "exit";

/// Classify one reading and write the verdict
pub fn report<W: Write>(
    out: &mut W,
    profile: TriageProfile,
    vitals: &VitalSigns,
) -> io::Result<TrafficLight> {
    let light = profile.classify(vitals);
    info!(%profile, %vitals, %light, "Vitals classified");

    writeln!(out, "{vitals}")?;
    match profile {
        TriageProfile::Safety => {
            writeln!(out, "Safety Score: {}", profile.verdict(light))?;
            writeln!(out, "Current Safety Simulation Traffic Light: {light}")?;
        },
        TriageProfile::Iot => {
            writeln!(out, "{}", profile.verdict(light))?;
            writeln!(out, "Current IoT Traffic Light Status: {light}")?;
        },
    }
    Ok(light)
}

fn title(profile: TriageProfile) -> &'static str {
    match profile {
        TriageProfile::Safety => "Safety Score Simulation",
        TriageProfile::Iot => "IoT Traffic Simulation",
    }
}

/// Read one answer, treating end of input and `exit` alike
fn field<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    question: &str,
) -> io::Result<Option<String>> {
    Ok(prompter
        .ask(question)?
        .filter(|answer| !answer.eq_ignore_ascii_case(EXIT)))
}

/// Prompt for readings until `exit` or end of input
///
/// Invalid readings are reported and skipped. Returns the light after the
/// last valid reading, RED if there was none.
pub fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    profile: TriageProfile,
) -> io::Result<TrafficLight> {
    let mut light = TrafficLight::default();
    writeln!(prompter.output(), "\n=== {} ===", title(profile))?;

    loop {
        let Some(bp) = field(prompter, "Enter Blood Pressure (or type 'exit' to finish): ")?
        else {
            break;
        };
        let Some(spo2) = field(prompter, "Enter SpO2: ")? else {
            break;
        };
        let Some(hr) = field(prompter, "Enter Heart Rate: ")? else {
            break;
        };

        match VitalSigns::parse(&bp, &spo2, &hr) {
            Ok(vitals) => light = report(prompter.output(), profile, &vitals)?,
            Err(e) => writeln!(
                prompter.output(),
                "Invalid input. Please enter numeric values. ({e})"
            )?,
        }
    }

    writeln!(prompter.output(), "{} completed.", title(profile))?;
    Ok(light)
}
