#[cfg(test)]
mod tests {
    use crate::config::SolverConfig;
    use crate::models::{GeoCoordinate, ModifiedJulianDate, Territory};
    use crate::services::envelope::compute_envelope;

    const MJD_EQUINOX: f64 = 57467.0; // 2016-03-20
    const MJD_JUNE_SOLSTICE: f64 = 57559.0; // 2016-06-20

    fn territory(name: &str, coords: &[(f64, f64)]) -> Territory {
        let coordinates = coords
            .iter()
            .map(|&(lon, lat)| GeoCoordinate::new(lon, lat).unwrap())
            .collect();
        Territory::new(name, coordinates).unwrap()
    }

    #[test]
    fn test_single_point_envelope_has_no_spread() {
        let t = territory("UK-test", &[(-0.0005, 51.476852)]);
        let envelope = compute_envelope(
            &t,
            0,
            ModifiedJulianDate::new(MJD_EQUINOX),
            &SolverConfig::default(),
        )
        .unwrap();

        let extremes = envelope.extremes.expect("equinox day has an envelope");
        assert_eq!(extremes.ris_min, extremes.ris_max);
        assert_eq!(extremes.set_min, extremes.set_max);
    }

    #[test]
    fn test_rise_precedes_set() {
        let t = territory("UK-test", &[(-0.0005, 51.476852)]);
        let envelope = compute_envelope(
            &t,
            0,
            ModifiedJulianDate::new(MJD_EQUINOX),
            &SolverConfig::default(),
        )
        .unwrap();

        let extremes = envelope.extremes.unwrap();
        assert!(extremes.ris_min.value() < extremes.set_min.value());
        assert!(extremes.ris_max.value() < extremes.set_max.value());
    }

    #[test]
    fn test_circumpolar_territory_yields_absent_envelope() {
        let t = territory("North Pole", &[(0.0, 90.0)]);
        let envelope = compute_envelope(
            &t,
            0,
            ModifiedJulianDate::new(MJD_JUNE_SOLSTICE),
            &SolverConfig::default(),
        )
        .unwrap();

        assert!(envelope.extremes.is_none());
        assert_eq!(envelope.territory_name, "North Pole");
    }

    #[test]
    fn test_circumpolar_sample_excluded_but_others_contribute() {
        let t = territory("Mixed", &[(0.0, 90.0), (0.0, 45.0)]);
        let envelope = compute_envelope(
            &t,
            0,
            ModifiedJulianDate::new(MJD_JUNE_SOLSTICE),
            &SolverConfig::default(),
        )
        .unwrap();

        // The polar sample drops out; the envelope equals the mid-latitude
        // sample's rise/set pair.
        let extremes = envelope.extremes.expect("mid-latitude sample contributes");
        assert_eq!(extremes.ris_min, extremes.ris_max);
        assert_eq!(extremes.set_min, extremes.set_max);
    }

    #[test]
    fn test_eastern_sample_sets_the_early_edges() {
        let east = (10.0, 45.0);
        let west = (0.0, 45.0);
        let both = territory("Pair", &[west, east]);
        let config = SolverConfig::default();
        let day_start = ModifiedJulianDate::new(MJD_EQUINOX);

        let envelope = compute_envelope(&both, 0, day_start, &config).unwrap();
        let pair = envelope.extremes.unwrap();

        let east_only = compute_envelope(&territory("E", &[east]), 0, day_start, &config)
            .unwrap()
            .extremes
            .unwrap();
        let west_only = compute_envelope(&territory("W", &[west]), 0, day_start, &config)
            .unwrap()
            .extremes
            .unwrap();

        // Further east means earlier UTC sunrise and earlier UTC sunset.
        assert_eq!(pair.ris_min, east_only.ris_min);
        assert_eq!(pair.set_min, east_only.set_min);
        assert_eq!(pair.ris_max, west_only.ris_max);
        assert_eq!(pair.set_max, west_only.set_max);
    }

    #[test]
    fn test_sample_order_does_not_change_envelope() {
        let coords = [(-5.35, 36.14), (-14.37, -7.95), (-63.06, 18.22)];
        let reversed: Vec<(f64, f64)> = coords.iter().rev().copied().collect();
        let config = SolverConfig::default();
        let day_start = ModifiedJulianDate::new(MJD_EQUINOX);

        let forward = compute_envelope(&territory("T", &coords), 3, day_start, &config).unwrap();
        let backward = compute_envelope(&territory("T", &reversed), 3, day_start, &config).unwrap();

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_envelope_nesting_inequality() {
        let t = territory(
            "Spread",
            &[(-63.06, 18.22), (-5.35, 36.14), (72.42, -7.31)],
        );
        let envelope = compute_envelope(
            &t,
            0,
            ModifiedJulianDate::new(MJD_EQUINOX),
            &SolverConfig::default(),
        )
        .unwrap();

        let e = envelope.extremes.unwrap();
        let inner_width = e.set_min.value() - e.ris_max.value();
        let outer_width = e.set_max.value() - e.ris_min.value();
        assert!(inner_width <= outer_width);
    }
}
