//! Aquachem Chem - closed-form chemistry on unit-aware quantities
//!
//! Gas solubility (Henry's law), the ideal gas law, carbonate speciation,
//! and open/closed-system pH and alkalinity. Every function is a pure
//! consumer of the quantity contract: arguments are validated by kind,
//! extracted in fixed internal units, computed elementwise, and wrapped
//! back into quantities.

mod constants;
mod solver;
mod helpers;
mod gas;
mod carbonate;
mod error;

pub use constants::{default_constants, CarbonateSystem, ConstantsTable, GasConstants};
pub use solver::{bisect, SolverOptions};
pub use gas::{
    calculate_dissolved_gas_molarity, calculate_gas_solubility, calculate_ideal_gas_molarity,
    GAS_CONSTANT,
};
pub use carbonate::{
    calculate_carbonate_speciation, calculate_closed_system_alkalinity,
    calculate_closed_system_ph, calculate_closed_system_tic, calculate_open_system_alkalinity,
    calculate_open_system_ph, CarbonateSpeciation,
};
pub use error::ChemError;
