use chrono::{DateTime, Duration, Utc};

use crate::purge::filter::NameFilter;
use crate::purge::policy::is_expired;
use crate::runtime::{RemovableHandle, ResourceDescriptor, ResourceKind};

/// Pick the resources eligible for removal out of one listed batch.
///
/// Single pass in listing order; the output preserves the input's relative
/// order and is never deduplicated. An item is selected iff it is expired
/// and its primary name passes the filter.
pub fn select(
    listed: Vec<ResourceDescriptor>,
    kind: ResourceKind,
    threshold: Duration,
    filter: &NameFilter,
    now: DateTime<Utc>,
) -> Vec<RemovableHandle> {
    listed
        .into_iter()
        .filter(|descriptor| {
            is_expired(descriptor.created_at, threshold, now)
                && filter.matches(descriptor.primary_name())
        })
        .map(|descriptor| RemovableHandle {
            name: descriptor.primary_name().to_string(),
            id: descriptor.id,
            kind,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn now() -> DateTime<Utc> {
        "2026-03-01T12:00:00Z".parse().unwrap()
    }

    fn descriptor(id: &str, name: &str, age_days: i64) -> ResourceDescriptor {
        ResourceDescriptor {
            id: id.to_string(),
            names: vec![format!("/{name}")],
            created_at: now() - Duration::days(age_days),
        }
    }

    #[test]
    fn keeps_only_expired_resources() {
        let listed = vec![
            descriptor("a", "old", 3),
            descriptor("b", "fresh", 0),
            descriptor("c", "older", 5),
        ];
        let selected = select(
            listed,
            ResourceKind::Container,
            Duration::days(1),
            &NameFilter::default(),
            now(),
        );
        let ids: Vec<&str> = selected.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn preserves_listing_order() {
        let listed = vec![
            descriptor("z", "third", 2),
            descriptor("a", "first", 2),
            descriptor("m", "second", 2),
        ];
        let selected = select(
            listed,
            ResourceKind::Container,
            Duration::days(1),
            &NameFilter::default(),
            now(),
        );
        let names: Vec<&str> = selected.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["third", "first", "second"]);
    }

    #[test]
    fn applies_name_filter_on_primary_name() {
        let filter = NameFilter::new(
            Some(Regex::new("web-").unwrap()),
            Some(Regex::new("web-staging").unwrap()),
        );
        let listed = vec![
            descriptor("a", "web-prod", 3),
            descriptor("b", "web-staging", 3),
            descriptor("c", "db-prod", 3),
        ];
        let selected = select(listed, ResourceKind::Container, Duration::days(1), &filter, now());
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "web-prod");
    }

    #[test]
    fn duplicate_ids_propagate_as_duplicate_handles() {
        let listed = vec![descriptor("dup", "twin", 2), descriptor("dup", "twin", 2)];
        let selected = select(
            listed,
            ResourceKind::Container,
            Duration::days(1),
            &NameFilter::default(),
            now(),
        );
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn handles_carry_the_requested_kind() {
        let listed = vec![descriptor("s1", "api", 2)];
        let selected = select(
            listed,
            ResourceKind::Service,
            Duration::days(1),
            &NameFilter::default(),
            now(),
        );
        assert_eq!(selected[0].kind, ResourceKind::Service);
    }
}
