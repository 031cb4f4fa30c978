use std::fmt;

/// Pump efficiency below this fraction draws a replacement suggestion.
pub const PUMP_EFFICIENCY_WARN: f64 = 0.60;

/// Motor efficiency below this fraction draws a high-efficiency-motor
/// suggestion.
pub const MOTOR_EFFICIENCY_WARN: f64 = 0.85;

/// Annual energy cost above this level (currency units) draws a
/// variable-frequency-drive suggestion.
pub const ANNUAL_COST_VFD_THRESHOLD: f64 = 5000.0;

/// One suggestion picked by the rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    LowPumpEfficiency,
    LowMotorEfficiency,
    ConsiderVfd,
    PreventiveMaintenance,
}

impl Advisory {
    /// Text handed to front-ends and reports.
    pub fn message(self) -> &'static str {
        match self {
            Advisory::LowPumpEfficiency => {
                "Pump efficiency below 60%. Consider replacing the pump with a more modern model."
            }
            Advisory::LowMotorEfficiency => {
                "Motor efficiency below 85%. High-efficiency (IE3+) motors can deliver significant savings."
            }
            Advisory::ConsiderVfd => {
                "If flow demand varies, a variable frequency drive can sharply cut energy consumption."
            }
            Advisory::PreventiveMaintenance => {
                "Perform preventive maintenance, checking for leaks and the condition of pump components."
            }
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Run the rule set for one evaluated duty point.
///
/// Rules are independent: every one that fires is included, in fixed
/// order, and the preventive-maintenance reminder always closes the list.
/// Efficiencies are fractions, cost is the annual figure.
pub fn evaluate(pump_efficiency: f64, motor_efficiency: f64, annual_cost: f64) -> Vec<Advisory> {
    let mut advisories = Vec::new();
    if pump_efficiency < PUMP_EFFICIENCY_WARN {
        advisories.push(Advisory::LowPumpEfficiency);
    }
    if motor_efficiency < MOTOR_EFFICIENCY_WARN {
        advisories.push(Advisory::LowMotorEfficiency);
    }
    if annual_cost > ANNUAL_COST_VFD_THRESHOLD {
        advisories.push(Advisory::ConsiderVfd);
    }
    advisories.push(Advisory::PreventiveMaintenance);
    advisories
}
