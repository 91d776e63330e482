//! Async service layer over the mock database
//!
//! Each console screen talks to one service. Services share a `MockDb`
//! behind an `Arc`, simulate network latency so loading states are
//! exercised, and translate lookup misses into typed errors. Constructing
//! a service with `latency_ms(0)` disables the delay for tests.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use crate::db::MockDb;
use crate::error::{DataError, Result};
use crate::models::{
    ActivityItem, ActivityType, AiPerformancePoint, AnalyticsSummary, CategoryValue, ChartKind,
    ChartPoint, Conversation, ConversationStats, ConversationStatus, DashboardSummary, DatedCount,
    ModelComparison, ModelPerformance, OverviewStat, Period, QueryItem, SatisfactionBucket,
    StatCard, User, UserRole, UserStats, UserStatus,
};

/// Simulated round-trip latency shared by the services
#[derive(Debug, Clone, Copy)]
struct Latency {
    override_ms: Option<u64>,
}

impl Latency {
    fn new(override_ms: Option<u64>) -> Self {
        Self { override_ms }
    }

    /// Sleep for the configured or default delay. A zero delay skips the
    /// timer entirely so tests run without a runtime pause.
    async fn simulate(&self, default_ms: u64) {
        let ms = self.override_ms.unwrap_or(default_ms);
        if ms > 0 {
            sleep(Duration::from_millis(ms)).await;
        }
    }
}

/// Queries for the user-management screen
#[derive(Debug, Clone)]
pub struct UserService {
    db: Arc<MockDb>,
    latency: Latency,
}

impl UserService {
    pub fn new(db: Arc<MockDb>) -> Self {
        Self {
            db,
            latency: Latency::new(None),
        }
    }

    /// Override the simulated latency; 0 disables it
    pub fn with_latency_ms(mut self, ms: u64) -> Self {
        self.latency = Latency::new(Some(ms));
        self
    }

    pub async fn get_users(&self) -> Result<Vec<User>> {
        self.latency.simulate(300).await;
        debug!("fetching all users");
        Ok(self.db.users())
    }

    pub async fn get_user_by_id(&self, id: &str) -> Result<User> {
        self.latency.simulate(200).await;
        debug!(id, "fetching user");
        self.db
            .user_by_id(id)
            .ok_or_else(|| DataError::UserNotFound(id.to_string()))
    }

    pub async fn search_users(&self, query: &str) -> Result<Vec<User>> {
        self.latency.simulate(400).await;
        debug!(query, "searching users");
        Ok(self.db.search_users(query))
    }

    pub async fn filter_by_status(&self, status: Option<UserStatus>) -> Result<Vec<User>> {
        self.latency.simulate(300).await;
        Ok(self.db.filter_users_by_status(status))
    }

    pub async fn filter_by_role(&self, role: Option<UserRole>) -> Result<Vec<User>> {
        self.latency.simulate(300).await;
        Ok(self.db.filter_users_by_role(role))
    }

    pub async fn get_user_stats(&self) -> Result<UserStats> {
        self.latency.simulate(300).await;
        Ok(self.db.user_stats())
    }
}

/// Queries for the conversations screen
#[derive(Debug, Clone)]
pub struct ConversationService {
    db: Arc<MockDb>,
    latency: Latency,
}

impl ConversationService {
    pub fn new(db: Arc<MockDb>) -> Self {
        Self {
            db,
            latency: Latency::new(None),
        }
    }

    pub fn with_latency_ms(mut self, ms: u64) -> Self {
        self.latency = Latency::new(Some(ms));
        self
    }

    pub async fn get_conversations(&self) -> Result<Vec<Conversation>> {
        self.latency.simulate(300).await;
        debug!("fetching all conversations");
        Ok(self.db.conversations())
    }

    pub async fn get_conversation_by_id(&self, id: &str) -> Result<Conversation> {
        self.latency.simulate(200).await;
        debug!(id, "fetching conversation");
        self.db
            .conversation_by_id(id)
            .ok_or_else(|| DataError::ConversationNotFound(id.to_string()))
    }

    pub async fn search_conversations(&self, query: &str) -> Result<Vec<Conversation>> {
        self.latency.simulate(400).await;
        debug!(query, "searching conversations");
        Ok(self.db.search_conversations(query))
    }

    pub async fn filter_by_status(
        &self,
        status: Option<ConversationStatus>,
    ) -> Result<Vec<Conversation>> {
        self.latency.simulate(300).await;
        Ok(self.db.filter_conversations_by_status(status))
    }

    pub async fn get_conversation_stats(&self) -> Result<ConversationStats> {
        self.latency.simulate(300).await;
        Ok(self.db.conversation_stats())
    }
}

/// Queries for the dashboard screen
#[derive(Debug, Clone)]
pub struct DashboardService {
    db: Arc<MockDb>,
    latency: Latency,
}

impl DashboardService {
    pub fn new(db: Arc<MockDb>) -> Self {
        Self {
            db,
            latency: Latency::new(None),
        }
    }

    pub fn with_latency_ms(mut self, ms: u64) -> Self {
        self.latency = Latency::new(Some(ms));
        self
    }

    pub async fn get_stats(&self) -> Result<Vec<StatCard>> {
        self.latency.simulate(300).await;
        debug!("fetching dashboard stats");
        Ok(self.db.dashboard_stats())
    }

    pub async fn get_chart_data(&self, kind: ChartKind) -> Result<Vec<ChartPoint>> {
        self.latency.simulate(300).await;
        debug!(?kind, "fetching chart data");
        Ok(self.db.chart_data(kind))
    }

    pub async fn get_recent_activities(
        &self,
        filter: Option<ActivityType>,
    ) -> Result<Vec<ActivityItem>> {
        self.latency.simulate(300).await;
        Ok(self.db.recent_activities(filter))
    }

    pub async fn get_top_queries(&self, search_term: &str) -> Result<Vec<QueryItem>> {
        self.latency.simulate(200).await;
        Ok(self.db.top_queries(search_term))
    }

    pub async fn get_model_performance(&self) -> Result<Vec<ModelPerformance>> {
        self.latency.simulate(300).await;
        Ok(self.db.ai_model_performance())
    }

    pub async fn get_summary(&self) -> Result<DashboardSummary> {
        self.latency.simulate(200).await;
        Ok(self.db.dashboard_summary())
    }
}

/// Queries for the analytics screen
#[derive(Debug, Clone)]
pub struct AnalyticsService {
    db: Arc<MockDb>,
    latency: Latency,
}

impl AnalyticsService {
    pub fn new(db: Arc<MockDb>) -> Self {
        Self {
            db,
            latency: Latency::new(None),
        }
    }

    pub fn with_latency_ms(mut self, ms: u64) -> Self {
        self.latency = Latency::new(Some(ms));
        self
    }

    pub async fn get_overview_stats(&self) -> Result<Vec<OverviewStat>> {
        self.latency.simulate(300).await;
        debug!("fetching analytics overview");
        Ok(self.db.analytics_overview_stats())
    }

    pub async fn get_user_growth(&self, period: Period) -> Result<Vec<DatedCount>> {
        self.latency.simulate(400).await;
        debug!(?period, "fetching user growth");
        Ok(self.db.user_growth(period))
    }

    pub async fn get_user_engagement(&self) -> Result<Vec<CategoryValue>> {
        self.latency.simulate(300).await;
        Ok(self.db.user_engagement())
    }

    pub async fn get_user_demographics(&self) -> Result<Vec<CategoryValue>> {
        self.latency.simulate(300).await;
        Ok(self.db.user_demographics())
    }

    pub async fn get_conversation_metrics(&self, period: Period) -> Result<Vec<DatedCount>> {
        self.latency.simulate(400).await;
        Ok(self.db.conversation_metrics(period))
    }

    pub async fn get_conversation_durations(&self) -> Result<Vec<CategoryValue>> {
        self.latency.simulate(300).await;
        Ok(self.db.conversation_durations())
    }

    pub async fn get_satisfaction_distribution(&self) -> Result<Vec<SatisfactionBucket>> {
        self.latency.simulate(300).await;
        Ok(self.db.satisfaction_distribution())
    }

    pub async fn get_ai_performance(&self, period: Period) -> Result<Vec<AiPerformancePoint>> {
        self.latency.simulate(400).await;
        Ok(self.db.ai_performance(period))
    }

    pub async fn get_model_comparison(&self) -> Result<Vec<ModelComparison>> {
        self.latency.simulate(300).await;
        Ok(self.db.model_comparison())
    }

    pub async fn get_summary(&self) -> Result<AnalyticsSummary> {
        self.latency.simulate(200).await;
        Ok(self.db.analytics_summary())
    }
}
