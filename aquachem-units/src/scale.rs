//! Automatic metric scale selection for display

use crate::registry::{METRIC_PREFIXES, UNITS};
use crate::Quantity;

impl Quantity {
    /// Pick the metric prefix that puts the mean finite magnitude in
    /// [1, 1000), i.e. the fewest leading/trailing zeros when rendered.
    ///
    /// Deterministic for a given value distribution and idempotent: scaling
    /// an already-scaled quantity chooses the same unit again. Temperature
    /// and dimensionless quantities are returned unchanged, as are
    /// quantities with no finite values.
    pub fn auto_scale(&self) -> Quantity {
        if !self.kind().is_scalable() {
            return self.clone();
        }

        let base = self.to_base();
        let mean = match base.mean_magnitude() {
            Some(m) if m > 0.0 => m,
            _ => return self.clone(),
        };

        // Largest prefix whose factor does not exceed the mean; values below
        // the smallest prefix stay in the smallest one.
        let mut chosen = METRIC_PREFIXES[0].0;
        for (prefix, factor) in METRIC_PREFIXES {
            if *factor <= mean {
                chosen = *prefix;
            } else {
                break;
            }
        }

        let symbol = format!("{}{}", chosen, self.kind().base_symbol());
        match UNITS.get(&symbol) {
            Some(unit) => base.convert_to_unit(unit).unwrap_or_else(|_| self.clone()),
            None => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity;

    #[test]
    fn test_picks_readable_prefix() {
        let q = quantity(0.0025, "M").unwrap().auto_scale();
        assert_eq!(q.unit().symbol, "mM");
        assert!((q.values()[0] - 2.5).abs() < 1e-12);

        let q = quantity(3.2e-7, "M").unwrap().auto_scale();
        assert_eq!(q.unit().symbol, "nM");
        assert!((q.values()[0] - 320.0).abs() < 1e-9);

        let q = quantity(5200.0, "g").unwrap().auto_scale();
        assert_eq!(q.unit().symbol, "kg");
    }

    #[test]
    fn test_uses_mean_of_vector() {
        // mean magnitude 0.002 M -> mM
        let q = quantity(vec![1.0, 3.0], "mM").unwrap().auto_scale();
        assert_eq!(q.unit().symbol, "mM");
    }

    #[test]
    fn test_idempotent() {
        let q = quantity(vec![0.00041, 0.0009], "M").unwrap();
        let once = q.auto_scale();
        let twice = once.auto_scale();
        assert_eq!(once.unit().symbol, twice.unit().symbol);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_never_changes_stored_values() {
        let q = quantity(0.0025, "M").unwrap();
        let _ = q.auto_scale();
        assert_eq!(q.values(), &[0.0025]);
        assert_eq!(q.unit().symbol, "M");
    }

    #[test]
    fn test_temperature_and_dimensionless_unscaled() {
        let t = quantity(0.001, "K").unwrap().auto_scale();
        assert_eq!(t.unit().symbol, "K");

        let ph = quantity(7.0, "pH").unwrap().auto_scale();
        assert_eq!(ph.unit().symbol, "pH");
    }

    #[test]
    fn test_na_only_and_zero_left_alone() {
        let q = quantity(vec![f64::NAN], "mM").unwrap().auto_scale();
        assert_eq!(q.unit().symbol, "mM");

        let q = quantity(0.0, "M").unwrap().auto_scale();
        assert_eq!(q.unit().symbol, "M");
    }

    #[test]
    fn test_below_smallest_prefix() {
        let q = quantity(1e-18, "M").unwrap().auto_scale();
        assert_eq!(q.unit().symbol, "fM");
    }
}
