//! Randomized sample boards for demos and load testing

use crate::board::BoardConfig;
use crate::types::{Column, Item, Priority, Swimlane};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

const TITLES: &[&str] = &[
    "Implement user authentication",
    "Fix responsive design issues",
    "Add dark mode support",
    "Optimize database queries",
    "Create API documentation",
    "Setup CI/CD pipeline",
    "Refactor legacy code",
    "Add unit tests",
    "Implement search functionality",
    "Update dependencies",
    "Fix security vulnerabilities",
    "Improve error handling",
    "Add data validation",
    "Optimize bundle size",
    "Implement caching strategy",
];

const DESCRIPTIONS: &[&str] = &[
    "This task requires careful planning and execution to ensure all requirements are met.",
    "Need to review the current implementation and identify areas for improvement.",
    "Important feature that will enhance user experience significantly.",
    "Critical bug that needs immediate attention and resolution.",
    "Enhancement that will improve overall system performance.",
    "Documentation update to keep everything current and accurate.",
    "Refactoring needed to improve code maintainability.",
    "Testing implementation to ensure code quality and reliability.",
];

const ASSIGNEES: &[&str] = &[
    "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Henry",
];

const TAGS: &[&str] = &[
    "frontend",
    "backend",
    "api",
    "ui/ux",
    "database",
    "security",
    "performance",
    "testing",
];

const DESCRIPTION_PROBABILITY: f64 = 0.7;
const ASSIGNEE_PROBABILITY: f64 = 0.8;
const CREATED_WITHIN_MS: i64 = 30 * 24 * 60 * 60 * 1000;

/// `created_at` anchor for seeded sample sessions, 2025-01-01T00:00:00Z
pub const SEEDED_SAMPLE_ANCHOR_SECS: i64 = 1_735_689_600;

/// [`SEEDED_SAMPLE_ANCHOR_SECS`] as a timestamp
pub fn seeded_sample_anchor() -> DateTime<Utc> {
    DateTime::from_timestamp(SEEDED_SAMPLE_ANCHOR_SECS, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

/// Generates items spread over a board's columns and swimlanes.
///
/// ```
/// use kanban_grid::{BoardConfig, SampleGenerator};
///
/// let board = BoardConfig::default();
/// let items = SampleGenerator::new(&board).with_seed(42).generate(10);
/// assert_eq!(items.len(), 10);
/// assert_eq!(items[3].id, "item-3");
/// ```
#[derive(Debug)]
pub struct SampleGenerator<'a> {
    columns: &'a [Column],
    swimlanes: &'a [Swimlane],
    rng: StdRng,
    now: DateTime<Utc>,
}

impl<'a> SampleGenerator<'a> {
    pub fn new(board: &'a BoardConfig) -> Self {
        Self {
            columns: board.columns(),
            swimlanes: board.swimlanes(),
            rng: StdRng::from_rng(&mut rand::rng()),
            now: Utc::now(),
        }
    }

    /// Make generation reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Anchor for `created_at`; items are created within the 30 days before it
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Produce `count` items with ids `item-0` .. `item-{count-1}`.
    ///
    /// A board without columns or swimlanes has no cell to place items in,
    /// so nothing is generated.
    pub fn generate(&mut self, count: usize) -> Vec<Item> {
        if self.columns.is_empty() || self.swimlanes.is_empty() {
            warn!(count, "board has no cells; no sample items generated");
            return Vec::new();
        }

        let items: Vec<Item> = (0..count).map(|i| self.item(i)).collect();
        debug!(count = items.len(), "generated sample items");
        items
    }

    fn item(&mut self, i: usize) -> Item {
        let (columns, swimlanes) = (self.columns, self.swimlanes);
        let title = TITLES[self.rng.random_range(0..TITLES.len())];
        let column = &columns[self.rng.random_range(0..columns.len())];
        let swimlane = &swimlanes[self.rng.random_range(0..swimlanes.len())];

        let mut item = Item::new(
            format!("item-{}", i),
            title,
            column.id.clone(),
            swimlane.id.clone(),
        );

        if self.rng.random_bool(DESCRIPTION_PROBABILITY) {
            item.description =
                Some(DESCRIPTIONS[self.rng.random_range(0..DESCRIPTIONS.len())].to_string());
        }
        if self.rng.random_bool(ASSIGNEE_PROBABILITY) {
            item.assignee = Some(ASSIGNEES[self.rng.random_range(0..ASSIGNEES.len())].to_string());
        }

        let priority = Priority::ALL[self.rng.random_range(0..Priority::ALL.len())];
        let age = Duration::milliseconds(self.rng.random_range(0..CREATED_WITHIN_MS));
        let tag_count = self.rng.random_range(1..=3);
        let tags: Vec<&str> = TAGS
            .choose_multiple(&mut self.rng, tag_count)
            .copied()
            .collect();

        item.with_priority(priority)
            .with_created_at(self.now - age)
            .with_tags(tags)
    }
}
