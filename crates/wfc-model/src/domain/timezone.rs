use chrono_tz::{TZ_VARIANTS, Tz};
use tracing::warn;

use crate::domain::DEFAULT_TIMEZONE;

/// Geographic areas offered in the catalog. Zones outside them (`Etc/*`,
/// `US/*`, `EST5EDT` and other legacy links) stay resolvable but unlisted.
const CATALOG_AREAS: [&str; 10] = [
    "Africa",
    "America",
    "Antarctica",
    "Arctic",
    "Asia",
    "Atlantic",
    "Australia",
    "Europe",
    "Indian",
    "Pacific",
];

fn is_common(name: &str) -> bool {
    match name.split_once('/') {
        Some((area, _)) => CATALOG_AREAS.contains(&area),
        None => matches!(name, "UTC" | "GMT"),
    }
}

/// Selectable timezone names with `default` moved to the front.
///
/// The remaining entries are the common zones of the bundled tz database,
/// sorted by name. `default` appears exactly once.
pub fn timezone_catalog(default: &str) -> Vec<String> {
    let mut names: Vec<&str> = TZ_VARIANTS
        .iter()
        .map(|tz| tz.name())
        .filter(|name| is_common(name))
        .collect();
    names.sort_unstable();

    let mut out = Vec::with_capacity(names.len() + 1);
    out.push(default.to_string());
    out.extend(
        names
            .into_iter()
            .filter(|name| *name != default)
            .map(str::to_string),
    );
    out
}

/// Pick the default timezone from the caller-detected value, falling back to UTC.
pub fn resolve_default_timezone(detected: Option<&str>) -> String {
    match detected.map(str::trim).filter(|s| !s.is_empty()) {
        Some(name) if name.parse::<Tz>().is_ok() => name.to_string(),
        Some(name) => {
            warn!(timezone = %name, "ignoring unknown detected timezone");
            DEFAULT_TIMEZONE.to_string()
        }
        None => DEFAULT_TIMEZONE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_first_and_unique() {
        let catalog = timezone_catalog("Europe/Berlin");

        assert_eq!(catalog[0], "Europe/Berlin");
        assert_eq!(
            catalog.iter().filter(|n| n.as_str() == "Europe/Berlin").count(),
            1
        );
        assert!(catalog.iter().any(|n| n == "UTC"));
    }

    #[test]
    fn tail_is_sorted() {
        let catalog = timezone_catalog("UTC");
        let tail = &catalog[1..];
        assert!(tail.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn legacy_and_etc_zones_are_unlisted() {
        let catalog = timezone_catalog("UTC");

        for hidden in ["Etc/GMT+5", "US/Eastern", "EST5EDT", "Cuba"] {
            assert!(!catalog.iter().any(|n| n == hidden), "{hidden} listed");
        }
        for shown in ["America/New_York", "Europe/Berlin", "Pacific/Auckland", "GMT"] {
            assert!(catalog.iter().any(|n| n == shown), "{shown} missing");
        }
    }

    #[test]
    fn unlisted_default_still_leads() {
        let catalog = timezone_catalog("US/Eastern");
        assert_eq!(catalog[0], "US/Eastern");
        assert_eq!(catalog.iter().filter(|n| n.as_str() == "US/Eastern").count(), 1);
    }

    #[test]
    fn resolve_accepts_known_zone() {
        assert_eq!(
            resolve_default_timezone(Some("America/Chicago")),
            "America/Chicago"
        );
    }

    #[test]
    fn resolve_falls_back_to_utc() {
        assert_eq!(resolve_default_timezone(None), "UTC");
        assert_eq!(resolve_default_timezone(Some("")), "UTC");
        assert_eq!(resolve_default_timezone(Some("Nowhere/Land")), "UTC");
    }
}
