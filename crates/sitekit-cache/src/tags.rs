//! Cache tags and key builders.
//!
//! Centralising tag and key construction prevents typos and makes it easy
//! to find every key the application uses. A tag owns the key space
//! `sitekit:{tag}:*`; invalidating the tag deletes that whole space.

/// Prefix applied to all Sitekit cache keys.
const PREFIX: &str = "sitekit";

// ── Tag constants ──────────────────────────────────────────

/// All content cards, across lists.
pub const CONTENT_CARDS: &str = "content-cards";
/// Content list definitions.
pub const CONTENT_LISTS: &str = "content-lists";
/// The services page section.
pub const SERVICES: &str = "services";
/// The homepage service teaser section.
pub const SERVICE_SECTION: &str = "service-section";
/// Portfolio projects.
pub const PROJECTS: &str = "projects";
/// Blog posts.
pub const BLOG_POSTS: &str = "blog-posts";
/// Course catalog.
pub const COURSES: &str = "courses";
/// Course schedule listings.
pub const COURSE_SCHEDULES: &str = "course-schedules";
/// Team member listings.
pub const TEAM_MEMBERS: &str = "team-members";

// ── Key builders ───────────────────────────────────────────

/// Key holding a tag's full public collection.
pub fn collection_key(tag: &str) -> String {
    format!("{PREFIX}:{tag}:all")
}

/// Key holding a single public entry of a tag (by slug or id).
pub fn entry_key(tag: &str, suffix: &str) -> String {
    format!("{PREFIX}:{tag}:{suffix}")
}

/// Pattern matching every key owned by a tag.
pub fn tag_pattern(tag: &str) -> String {
    format!("{PREFIX}:{tag}:*")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_shapes() {
        assert_eq!(collection_key(COURSES), "sitekit:courses:all");
        assert_eq!(entry_key(BLOG_POSTS, "hello"), "sitekit:blog-posts:hello");
        assert_eq!(tag_pattern(PROJECTS), "sitekit:projects:*");
    }

    #[test]
    fn test_pattern_covers_keys() {
        let pattern = tag_pattern(COURSES);
        let prefix = pattern.trim_end_matches('*');
        assert!(collection_key(COURSES).starts_with(prefix));
        assert!(entry_key(COURSES, "rust-101").starts_with(prefix));
    }
}
