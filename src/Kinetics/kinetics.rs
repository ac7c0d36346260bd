// Different types of rate laws of the plasma mechanism
use std::f64;

/// 1 eV in Kelvin
pub const EV_TO_KELVIN: f64 = 11605.0;
/// reference temperature of the power-law factors, K
pub const T_REF: f64 = 300.0;
/// lowest electron temperature the analytic laws are evaluated at, K
pub const TE_MIN: f64 = 1.0;
/////////////////////////GAS TEMPERATURE ARRHENIUS///////////////////////////////////////////////////////
// k = A * (Tgas/300)^n * exp(-Ea/Tgas), Ea in Kelvin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasArrheniusStruct {
    pub a: f64,
    pub n: f64,
    pub ea: f64,
}
#[allow(non_snake_case)]
impl GasArrheniusStruct {
    pub const fn new(a: f64, n: f64, ea: f64) -> Self {
        Self { a, n, ea }
    }
    pub fn K_const(&self, Tgas: f64) -> f64 {
        power_law(self.a, Tgas, self.n, self.ea)
    }
}
/////////////////////////ELECTRON TEMPERATURE ARRHENIUS//////////////////////////////////////////////////
// k = A * (Te/300)^n * exp(-Ea/Te), Te in Kelvin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectronArrheniusStruct {
    pub a: f64,
    pub n: f64,
    pub ea: f64,
}
#[allow(non_snake_case)]
impl ElectronArrheniusStruct {
    pub const fn new(a: f64, n: f64, ea: f64) -> Self {
        Self { a, n, ea }
    }
    pub fn K_const(&self, Te: f64) -> f64 {
        power_law(self.a, Te, self.n, self.ea)
    }
}
/////////////////////////TWO TEMPERATURE (attachment)////////////////////////////////////////////////////
// k = A * (Tgas/300)^ng * (Te/300)^ne * exp(-Eg/Tgas) * exp(-Ee/Te)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoTemperatureStruct {
    pub a: f64,
    pub ng: f64,
    pub ne: f64,
    pub eg: f64,
    pub ee: f64,
}
#[allow(non_snake_case)]
impl TwoTemperatureStruct {
    pub const fn new(a: f64, ng: f64, ne: f64, eg: f64, ee: f64) -> Self {
        Self { a, ng, ne, eg, ee }
    }
    pub fn K_const(&self, Tgas: f64, Te: f64) -> f64 {
        self.a
            * (Tgas / T_REF).powf(self.ng)
            * (Te / T_REF).powf(self.ne)
            * f64::exp(-self.eg / Tgas)
            * f64::exp(-self.ee / Te)
    }
}

fn power_law(a: f64, temp: f64, n: f64, ea: f64) -> f64 {
    if n == 0.0 && ea == 0.0 {
        return a;
    }
    a * (temp / T_REF).powf(n) * f64::exp(-ea / temp)
}

/// closed-form rate laws
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalyticLaw {
    Constant(f64),
    GasArrhenius(GasArrheniusStruct),
    ElectronArrhenius(ElectronArrheniusStruct),
    TwoTemperature(TwoTemperatureStruct),
}

#[allow(non_snake_case)]
impl AnalyticLaw {
    /// rate coefficient in SI units (s^-1, m^3/s or m^6/s). ATTENTION! both temperatures in Kelvin
    pub fn K_const(&self, Tgas: f64, Te: f64) -> f64 {
        // negative powers of Te diverge at 0 K
        let Te = Te.max(TE_MIN);
        match self {
            AnalyticLaw::Constant(k) => *k,
            AnalyticLaw::GasArrhenius(law) => law.K_const(Tgas),
            AnalyticLaw::ElectronArrhenius(law) => law.K_const(Te),
            AnalyticLaw::TwoTemperature(law) => law.K_const(Tgas, Te),
        }
    }
}

/// rate law selector of a reaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateLaw {
    Analytic(AnalyticLaw),
    /// coefficient interpolated from the electron-impact rate table; `number` selects the column
    Table { number: u32 },
}

impl RateLaw {
    pub const fn constant(k: f64) -> Self {
        RateLaw::Analytic(AnalyticLaw::Constant(k))
    }
    pub const fn gas(a: f64, n: f64, ea: f64) -> Self {
        RateLaw::Analytic(AnalyticLaw::GasArrhenius(GasArrheniusStruct::new(a, n, ea)))
    }
    pub const fn electron(a: f64, n: f64, ea: f64) -> Self {
        RateLaw::Analytic(AnalyticLaw::ElectronArrhenius(ElectronArrheniusStruct::new(
            a, n, ea,
        )))
    }
    pub const fn two_temperature(a: f64, ng: f64, ne: f64, eg: f64, ee: f64) -> Self {
        RateLaw::Analytic(AnalyticLaw::TwoTemperature(TwoTemperatureStruct::new(
            a, ng, ne, eg, ee,
        )))
    }
    pub const fn table(number: u32) -> Self {
        RateLaw::Table { number }
    }
    pub fn is_table(&self) -> bool {
        matches!(self, RateLaw::Table { .. })
    }
    /// short human readable form used in the reaction listing
    pub fn describe(&self) -> String {
        match self {
            RateLaw::Analytic(AnalyticLaw::Constant(k)) => format!("{:.3e}", k),
            RateLaw::Analytic(AnalyticLaw::GasArrhenius(l)) => {
                format!("{:.3e}*(Tg/300)^{}*exp(-{}/Tg)", l.a, l.n, l.ea)
            }
            RateLaw::Analytic(AnalyticLaw::ElectronArrhenius(l)) => {
                format!("{:.3e}*(Te/300)^{}*exp(-{}/Te)", l.a, l.n, l.ea)
            }
            RateLaw::Analytic(AnalyticLaw::TwoTemperature(l)) => format!(
                "{:.3e}*(Tg/300)^{}*(Te/300)^{}*exp(-{}/Tg)*exp(-{}/Te)",
                l.a, l.ng, l.ne, l.eg, l.ee
            ),
            RateLaw::Table { number } => format!("BOLSIG+ table R{}", number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gas_arrhenius() {
        let law = GasArrheniusStruct::new(4.4e-18, 1.0, 3220.0);
        let expected = 4.4e-18 * (600.0 / 300.0) * f64::exp(-3220.0 / 600.0);
        assert_relative_eq!(law.K_const(600.0), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_electron_arrhenius_at_reference_temperature() {
        let law = ElectronArrheniusStruct::new(1.8e-13, -0.39, 0.0);
        assert_relative_eq!(law.K_const(300.0), 1.8e-13, max_relative = 1e-12);
        // recombination slows down with electron temperature
        assert!(law.K_const(30000.0) < law.K_const(300.0));
    }

    #[test]
    fn test_two_temperature() {
        let law = TwoTemperatureStruct::new(1.4e-41, 0.0, -1.0, -100.0, 700.0);
        let (tg, te): (f64, f64) = (300.0, 11605.0);
        let expected = 1.4e-41 * (te / 300.0).powf(-1.0) * f64::exp(100.0 / tg) * f64::exp(-700.0 / te);
        assert_relative_eq!(law.K_const(tg, te), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_electron_laws_at_zero_temperature() {
        let recombination = AnalyticLaw::ElectronArrhenius(ElectronArrheniusStruct::new(1.8e-13, -0.39, 0.0));
        let attachment = AnalyticLaw::TwoTemperature(TwoTemperatureStruct::new(1.4e-41, 0.0, -1.0, -100.0, 700.0));
        for law in [recombination, attachment] {
            let k = law.K_const(300.0, 0.0);
            assert!(k.is_finite());
            assert_eq!(k, law.K_const(300.0, TE_MIN));
        }
        assert_eq!(AnalyticLaw::Constant(2.0e-16).K_const(300.0, 0.0), 2.0e-16);
    }

    #[test]
    fn test_rate_law_dispatch() {
        let law = RateLaw::gas(2.0e-13, -0.5, 0.0);
        match law {
            RateLaw::Analytic(analytic) => {
                assert_relative_eq!(analytic.K_const(300.0, 5000.0), 2.0e-13, max_relative = 1e-12)
            }
            RateLaw::Table { .. } => panic!("expected analytic law"),
        }
        assert!(RateLaw::table(641).is_table());
        assert_eq!(RateLaw::constant(1.0).describe(), "1.000e0");
    }
}
