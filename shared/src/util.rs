/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate an opaque string ID for a new entity.
///
/// UUID v4, so collisions are negligible at this application's scale
/// (tens of thousands of entities per installation). Used for menu
/// items, orders, and reservations; table IDs are small integers
/// assigned at seeding and are not produced here.
pub fn new_entity_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_entity_ids_are_unique() {
        let ids: HashSet<String> = (0..10_000).map(|_| new_entity_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_entity_id_is_valid_uuid() {
        let id = new_entity_id();
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_now_millis_is_recent() {
        // 2024-01-01 00:00:00 UTC
        assert!(now_millis() > 1_704_067_200_000);
    }
}
