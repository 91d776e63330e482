//! ChatDeck Console Data
//!
//! Typed mock data boundary for the admin console. A fixture-backed
//! `MockDb` plays the role of the real backend, and async services layer
//! simulated latency and typed errors on top so the console's loading and
//! failure paths behave like production.
//!
//! Swapping in a real backend means reimplementing `MockDb`'s queries;
//! the service signatures already match that world.

pub mod datasets;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

pub use db::MockDb;
pub use error::{DataError, Result};
pub use models::{
    ActivityActor, ActivityItem, ActivityType, AiPerformancePoint, AnalyticsSummary,
    CategoryValue, ChartKind, ChartPoint, Conversation, ConversationStats, ConversationStatus,
    ConversationUser, DashboardSummary, DatedCount, ModelComparison, ModelPerformance,
    OverviewStat, Period, QueryItem, SatisfactionBucket, StatCard, Trend, User, UserRole,
    UserStats, UserStatus,
};
pub use services::{AnalyticsService, ConversationService, DashboardService, UserService};
