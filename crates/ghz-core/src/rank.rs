//! Local filtering and ranking of volcano lists.
//!
//! The volcano source has no server-side filter, so both the radius search
//! and the text search operate on the full fetched list.

use crate::geo::{GeoPoint, distance_km};
use crate::models::{RankedVolcano, VolcanoRecord};

/// Rank volcanoes by distance from `center`.
///
/// Keeps records within `radius_km` (inclusive boundary), sorts ascending
/// by distance (stable: ties keep input order), and truncates to `limit`.
/// The input slice is never mutated.
#[must_use]
pub fn rank_by_distance(
    volcanoes: &[VolcanoRecord],
    center: GeoPoint,
    radius_km: f64,
    limit: usize,
) -> Vec<RankedVolcano> {
    let mut ranked: Vec<RankedVolcano> = volcanoes
        .iter()
        .filter_map(|volcano| {
            let distance = distance_km(center, volcano.location());
            (distance <= radius_km).then(|| RankedVolcano {
                volcano: volcano.clone(),
                distance_km: distance,
            })
        })
        .collect();

    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked.truncate(limit);
    ranked
}

/// Filter volcanoes by case-insensitive substring match.
///
/// `country` and `name` each match their field when supplied; when both are
/// supplied a record must match both. Truncates to `limit`.
#[must_use]
pub fn filter_by_text(
    volcanoes: &[VolcanoRecord],
    country: Option<&str>,
    name: Option<&str>,
    limit: usize,
) -> Vec<VolcanoRecord> {
    let country = country.map(str::to_lowercase);
    let name = name.map(str::to_lowercase);

    volcanoes
        .iter()
        .filter(|volcano| {
            let country_ok = country
                .as_deref()
                .is_none_or(|needle| volcano.country.to_lowercase().contains(needle));
            let name_ok = name
                .as_deref()
                .is_none_or(|needle| volcano.name.to_lowercase().contains(needle));
            country_ok && name_ok
        })
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn volcano(id: i64, name: &str, country: &str, latitude: f64, longitude: f64) -> VolcanoRecord {
        VolcanoRecord {
            id,
            name: name.to_string(),
            country: country.to_string(),
            subregion: String::new(),
            latitude,
            longitude,
            elevation_m: 1000.0,
            observatory: None,
            webpage: None,
        }
    }

    #[test]
    fn keeps_only_volcanoes_within_radius() {
        let volcanoes = vec![
            volcano(1, "Fuji", "Japan", 35.36, 138.73),
            volcano(2, "Merapi", "Indonesia", -7.54, 110.446),
        ];
        let tokyo = GeoPoint::new(35.68, 139.65);

        let ranked = rank_by_distance(&volcanoes, tokyo, 200.0, 20);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].volcano.name, "Fuji");
        assert!(ranked[0].distance_km <= 200.0);
    }

    #[test]
    fn sorts_ascending_by_distance() {
        let center = GeoPoint::new(0.0, 0.0);
        let volcanoes = vec![
            volcano(1, "Far", "X", 0.0, 8.0),
            volcano(2, "Near", "X", 0.0, 1.0),
            volcano(3, "Mid", "X", 0.0, 4.0),
        ];

        let ranked = rank_by_distance(&volcanoes, center, 2000.0, 20);

        let names: Vec<&str> = ranked.iter().map(|r| r.volcano.name.as_str()).collect();
        assert_eq!(names, vec!["Near", "Mid", "Far"]);
        assert!(ranked.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
    }

    #[test]
    fn ties_keep_input_order() {
        let center = GeoPoint::new(0.0, 0.0);
        let volcanoes = vec![
            volcano(1, "East", "X", 0.0, 1.0),
            volcano(2, "West", "X", 0.0, -1.0),
        ];

        let ranked = rank_by_distance(&volcanoes, center, 2000.0, 20);

        assert_eq!(ranked[0].volcano.name, "East");
        assert_eq!(ranked[1].volcano.name, "West");
    }

    #[test]
    fn truncates_to_limit() {
        let center = GeoPoint::new(0.0, 0.0);
        let volcanoes: Vec<VolcanoRecord> = (0..10i64)
            .map(|i| volcano(i, &format!("V{i}"), "X", 0.0, i as f64 * 0.1))
            .collect();

        let ranked = rank_by_distance(&volcanoes, center, 10_000.0, 3);

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].volcano.name, "V0");
    }

    #[test]
    fn radius_boundary_is_inclusive() {
        let center = GeoPoint::new(0.0, 0.0);
        let target = volcano(1, "Edge", "X", 0.0, 1.0);
        let exact = distance_km(center, target.location());

        let ranked = rank_by_distance(&[target], center, exact, 20);

        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn input_is_not_mutated() {
        let volcanoes = vec![
            volcano(1, "B", "X", 0.0, 2.0),
            volcano(2, "A", "X", 0.0, 1.0),
        ];
        let before = volcanoes.clone();

        let _ = rank_by_distance(&volcanoes, GeoPoint::new(0.0, 0.0), 1000.0, 20);

        assert_eq!(volcanoes, before);
    }

    #[test]
    fn text_filter_is_case_insensitive() {
        let volcanoes = vec![
            volcano(1, "Fuji", "Japan", 35.36, 138.73),
            volcano(2, "Merapi", "Indonesia", -7.54, 110.446),
        ];

        let matched = filter_by_text(&volcanoes, Some("JAPAN"), None, 20);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Fuji");

        let matched = filter_by_text(&volcanoes, None, Some("mera"), 20);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Merapi");
    }

    #[test]
    fn text_filters_are_anded() {
        let volcanoes = vec![
            volcano(1, "Fuji", "Japan", 35.36, 138.73),
            volcano(2, "Aso", "Japan", 32.88, 131.1),
            volcano(3, "Merapi", "Indonesia", -7.54, 110.446),
        ];

        let matched = filter_by_text(&volcanoes, Some("japan"), Some("fuji"), 20);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Fuji");

        // Country matches, name does not.
        let matched = filter_by_text(&volcanoes, Some("japan"), Some("merapi"), 20);
        assert!(matched.is_empty());
    }

    #[test]
    fn text_filter_respects_limit() {
        let volcanoes: Vec<VolcanoRecord> = (0..5)
            .map(|i| volcano(i, &format!("Peak {i}"), "Chile", -20.0, -68.0))
            .collect();

        let matched = filter_by_text(&volcanoes, Some("chile"), None, 2);
        assert_eq!(matched.len(), 2);
    }
}
