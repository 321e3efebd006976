//! Data Model
//!
//! Plain records mirrored from the Language Portal REST API:
//!
//! - **activity**: Study activities (vocabulary, grammar, kanji, reading)
//! - **session**: Completed study sessions and their scores
//! - **word**: Vocabulary entries and mastery tracking
//! - **group**: Word groups
//! - **dashboard**: Aggregated dashboard statistics
//! - **pagination**: The `{ data, total, page, per_page, total_pages }` envelope
//!
//! Lifecycle is owned by the server. Client-side code only reads these
//! records and submits the `New*` / `*Update` payloads.

pub mod activity;
pub mod dashboard;
pub mod group;
pub mod pagination;
pub mod session;
pub mod word;

pub use activity::{ActivityType, Difficulty, NewStudyActivity, StudyActivity, StudyActivityUpdate};
pub use dashboard::{DashboardStats, HealthStatus, MasteryDistribution};
pub use group::{NewWordGroup, WordGroup, WordGroupUpdate};
pub use pagination::{total_pages, PaginatedResponse};
pub use session::{NewStudySession, StudySession, StudySessionUpdate};
pub use word::{MasteryLevel, NewWord, Word, WordFilters, WordUpdate};
