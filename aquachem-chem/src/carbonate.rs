//! Carbonate speciation, alkalinity, and pH solving
//!
//! All concentrations are carried internally in M and hydrogen activity as
//! h = 10^-pH. Alkalinity here is carbonate alkalinity plus water:
//! alk = [HCO3-] + 2[CO3--] + [OH-] - [H+], the net base addition needed to
//! hold the system at a given pH. The open-system functions fix dissolved
//! CO2 from a headspace partial pressure via Henry's law; the closed-system
//! functions fix total inorganic carbon instead.

use aquachem_units::{Quantity, UnitKind};

use crate::helpers::{at, common_length};
use crate::solver::{bisect, SolverOptions};
use crate::{CarbonateSystem, ChemError, ConstantsTable};

/// The three dissolved inorganic carbon species at a given pH
#[derive(Debug, Clone, PartialEq)]
pub struct CarbonateSpeciation {
    /// Dissolved CO2 + true carbonic acid (H2CO3*)
    pub h2co3: Quantity,
    /// Bicarbonate
    pub hco3: Quantity,
    /// Carbonate
    pub co3: Quantity,
}

/// Equilibrium fractions (a0, a1, a2) of H2CO3*, HCO3-, CO3-- at hydrogen
/// activity `h`. The three always sum to 1.
fn speciation_fractions(h: f64, sys: &CarbonateSystem) -> (f64, f64, f64) {
    let k1 = sys.k1();
    let k2 = sys.k2();
    let a0 = 1.0 / (1.0 + k1 / h + k1 * k2 / (h * h));
    let a1 = 1.0 / (h / k1 + 1.0 + k2 / h);
    let a2 = 1.0 / (h * h / (k1 * k2) + h / k2 + 1.0);
    (a0, a1, a2)
}

/// Carbonate alkalinity (M) at hydrogen activity `h` for a closed system
/// holding `dic` mol/L of total inorganic carbon
fn closed_alkalinity(h: f64, dic: f64, sys: &CarbonateSystem) -> f64 {
    let (_, a1, a2) = speciation_fractions(h, sys);
    dic * (a1 + 2.0 * a2) + sys.kw() / h - h
}

/// Carbonate alkalinity (M) at hydrogen activity `h` for an open system
/// with fixed dissolved CO2 `co2_aq` mol/L
fn open_alkalinity(h: f64, co2_aq: f64, sys: &CarbonateSystem) -> f64 {
    let hco3 = sys.k1() * co2_aq / h;
    let co3 = sys.k2() * hco3 / h;
    hco3 + 2.0 * co3 + sys.kw() / h - h
}

/// Partition total inorganic carbon among H2CO3*, HCO3-, and CO3-- as a
/// function of pH. Elementwise over vector arguments with scalar broadcast.
pub fn calculate_carbonate_speciation(
    ph: &Quantity,
    dic: &Quantity,
    sys: &CarbonateSystem,
) -> Result<CarbonateSpeciation, ChemError> {
    ph.require_kind(UnitKind::Dimensionless, "calculate_carbonate_speciation(ph)")?;
    dic.require_kind(UnitKind::Molarity, "calculate_carbonate_speciation(dic)")?;

    let ph = ph.values().to_vec();
    let c = dic.extract_value("M")?;
    let n = common_length("calculate_carbonate_speciation", &[ph.len(), c.len()])?;

    let mut h2co3 = Vec::with_capacity(n);
    let mut hco3 = Vec::with_capacity(n);
    let mut co3 = Vec::with_capacity(n);
    for i in 0..n {
        let h = 10f64.powf(-at(&ph, i));
        let (a0, a1, a2) = speciation_fractions(h, sys);
        let total = at(&c, i);
        h2co3.push(total * a0);
        hco3.push(total * a1);
        co3.push(total * a2);
    }
    Ok(CarbonateSpeciation {
        h2co3: Quantity::new(h2co3, "M")?,
        hco3: Quantity::new(hco3, "M")?,
        co3: Quantity::new(co3, "M")?,
    })
}

/// Alkalinity of a closed system (fixed total inorganic carbon) at a given pH
pub fn calculate_closed_system_alkalinity(
    ph: &Quantity,
    tic: &Quantity,
    sys: &CarbonateSystem,
) -> Result<Quantity, ChemError> {
    ph.require_kind(UnitKind::Dimensionless, "calculate_closed_system_alkalinity(ph)")?;
    tic.require_kind(UnitKind::Molarity, "calculate_closed_system_alkalinity(tic)")?;

    let ph = ph.values().to_vec();
    let c = tic.extract_value("M")?;
    let n = common_length("calculate_closed_system_alkalinity", &[ph.len(), c.len()])?;
    let values: Vec<f64> = (0..n)
        .map(|i| closed_alkalinity(10f64.powf(-at(&ph, i)), at(&c, i), sys))
        .collect();
    Ok(Quantity::new(values, "M")?)
}

/// pH of a closed system from total inorganic carbon and alkalinity.
///
/// Solves the charge balance by bisection per element; the balance is
/// strictly increasing in pH, so the bracket in `options` either contains
/// exactly one root or fails with `NoRootInBracket`.
pub fn calculate_closed_system_ph(
    tic: &Quantity,
    alkalinity: &Quantity,
    sys: &CarbonateSystem,
    options: &SolverOptions,
) -> Result<Quantity, ChemError> {
    tic.require_kind(UnitKind::Molarity, "calculate_closed_system_ph(tic)")?;
    alkalinity.require_kind(UnitKind::Molarity, "calculate_closed_system_ph(alkalinity)")?;

    let c = tic.extract_value("M")?;
    let alk = alkalinity.extract_value("M")?;
    let n = common_length("calculate_closed_system_ph", &[c.len(), alk.len()])?;

    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let (ci, ai) = (at(&c, i), at(&alk, i));
        let root = bisect(
            |ph| closed_alkalinity(10f64.powf(-ph), ci, sys) - ai,
            options,
            "calculate_closed_system_ph",
        )?;
        out.push(root);
    }
    Ok(Quantity::new(out, "pH")?)
}

/// Total inorganic carbon of a closed system from pH and alkalinity
pub fn calculate_closed_system_tic(
    ph: &Quantity,
    alkalinity: &Quantity,
    sys: &CarbonateSystem,
) -> Result<Quantity, ChemError> {
    ph.require_kind(UnitKind::Dimensionless, "calculate_closed_system_tic(ph)")?;
    alkalinity.require_kind(UnitKind::Molarity, "calculate_closed_system_tic(alkalinity)")?;

    let ph = ph.values().to_vec();
    let alk = alkalinity.extract_value("M")?;
    let n = common_length("calculate_closed_system_tic", &[ph.len(), alk.len()])?;
    let values: Vec<f64> = (0..n)
        .map(|i| {
            let h = 10f64.powf(-at(&ph, i));
            let (_, a1, a2) = speciation_fractions(h, sys);
            (at(&alk, i) - sys.kw() / h + h) / (a1 + 2.0 * a2)
        })
        .collect();
    Ok(Quantity::new(values, "M")?)
}

/// Alkalinity of an open system (fixed headspace CO2 partial pressure)
/// at a given pH
pub fn calculate_open_system_alkalinity(
    ph: &Quantity,
    pco2: &Quantity,
    temperature: &Quantity,
    constants: &ConstantsTable,
    sys: &CarbonateSystem,
) -> Result<Quantity, ChemError> {
    ph.require_kind(UnitKind::Dimensionless, "calculate_open_system_alkalinity(ph)")?;
    pco2.require_kind(UnitKind::Pressure, "calculate_open_system_alkalinity(pco2)")?;
    temperature.require_kind(
        UnitKind::Temperature,
        "calculate_open_system_alkalinity(temperature)",
    )?;

    let entry = constants.lookup("CO2")?;
    let ph = ph.values().to_vec();
    let p = pco2.extract_value("bar")?;
    let t = temperature.extract_value("K")?;
    let n = common_length(
        "calculate_open_system_alkalinity",
        &[ph.len(), p.len(), t.len()],
    )?;

    let values: Vec<f64> = (0..n)
        .map(|i| {
            let co2_aq = entry.solubility_at(at(&t, i)) * at(&p, i);
            open_alkalinity(10f64.powf(-at(&ph, i)), co2_aq, sys)
        })
        .collect();
    Ok(Quantity::new(values, "M")?)
}

/// pH of an open system from headspace CO2 partial pressure, temperature,
/// and alkalinity. Dissolved CO2 is fixed by Henry's law; the remaining
/// charge balance is solved by bisection per element.
pub fn calculate_open_system_ph(
    pco2: &Quantity,
    temperature: &Quantity,
    alkalinity: &Quantity,
    constants: &ConstantsTable,
    sys: &CarbonateSystem,
    options: &SolverOptions,
) -> Result<Quantity, ChemError> {
    pco2.require_kind(UnitKind::Pressure, "calculate_open_system_ph(pco2)")?;
    temperature.require_kind(UnitKind::Temperature, "calculate_open_system_ph(temperature)")?;
    alkalinity.require_kind(UnitKind::Molarity, "calculate_open_system_ph(alkalinity)")?;

    let entry = constants.lookup("CO2")?;
    let p = pco2.extract_value("bar")?;
    let t = temperature.extract_value("K")?;
    let alk = alkalinity.extract_value("M")?;
    let n = common_length("calculate_open_system_ph", &[p.len(), t.len(), alk.len()])?;

    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let co2_aq = entry.solubility_at(at(&t, i)) * at(&p, i);
        let ai = at(&alk, i);
        let root = bisect(
            |ph| open_alkalinity(10f64.powf(-ph), co2_aq, sys) - ai,
            options,
            "calculate_open_system_ph",
        )?;
        out.push(root);
    }
    Ok(Quantity::new(out, "pH")?)
}
