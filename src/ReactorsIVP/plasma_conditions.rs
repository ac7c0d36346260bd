//! Driving conditions of the discharge: gas temperature, the electron temperature pulse and the water
//! vapour content of the air.
use crate::Kinetics::kinetics::EV_TO_KELVIN;

/// Boltzmann constant, J/K
pub const K_BOLTZMANN: f64 = 1.380649e-23;
/// pulse is over after this many pulse durations
pub const PULSE_WIDTHS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlasmaConditions {
    /// gas temperature, K
    pub tgas: f64,
    /// peak electron temperature, K
    pub te_peak: f64,
    /// pulse duration, s
    pub plasma_time: f64,
}

impl PlasmaConditions {
    pub fn new(tgas: f64, te_peak_ev: f64, plasma_time: f64) -> Self {
        Self {
            tgas,
            te_peak: te_peak_ev * EV_TO_KELVIN,
            plasma_time,
        }
    }

    /// end of the pulse, s
    pub fn pulse_end(&self) -> f64 {
        PULSE_WIDTHS * self.plasma_time
    }

    pub fn pulse_on(&self, t: f64) -> bool {
        t < self.pulse_end()
    }

    /// Gaussian pulse centred at 5 pulse durations, gas temperature afterwards
    pub fn electron_temperature(&self, t: f64) -> f64 {
        if !self.pulse_on(t) {
            return self.tgas;
        }
        let x = (t - 5.0 * self.plasma_time) / self.plasma_time;
        self.tgas + (self.te_peak - self.tgas) * f64::exp(-0.5 * x * x)
    }
}

/// saturation pressure of water vapour (Tetens), Pa; temperature in K
pub fn saturation_pressure(temperature: f64) -> f64 {
    let tc = temperature - 273.15;
    610.94 * f64::exp(17.625 * tc / (tc + 243.04))
}

/// water vapour density (m^-3) at relative humidity `rh` (percent) and temperature `temperature` (K)
pub fn water_density_from_rh(rh: f64, temperature: f64) -> f64 {
    rh / 100.0 * saturation_pressure(temperature) / (K_BOLTZMANN * temperature)
}
