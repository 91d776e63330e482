//! In-memory database backing the console services
//!
//! `MockDb` loads the seed fixtures once and answers queries over cloned
//! rows, the same contract a real store would offer. Lookups return
//! `Option`; the services turn misses into typed errors.

use chrono::Utc;

use crate::datasets;
use crate::models::{
    ActivityItem, ActivityType, AiPerformancePoint, AnalyticsSummary, CategoryValue, ChartKind,
    ChartPoint, Conversation, ConversationStats, ConversationStatus, DashboardSummary, DatedCount,
    ModelComparison, ModelPerformance, OverviewStat, Period, QueryItem, SatisfactionBucket,
    StatCard, User, UserRole, UserStats, UserStatus,
};

/// Fixture-backed database for the admin console
pub struct MockDb {
    users: Vec<User>,
    conversations: Vec<Conversation>,
    dashboard_stats: Vec<StatCard>,
    conversation_chart: Vec<ChartPoint>,
    user_chart: Vec<ChartPoint>,
    performance_chart: Vec<ChartPoint>,
    recent_activities: Vec<ActivityItem>,
    top_queries: Vec<QueryItem>,
    ai_models: Vec<ModelPerformance>,
    user_growth: Vec<DatedCount>,
    user_engagement: Vec<CategoryValue>,
    user_demographics: Vec<CategoryValue>,
    conversation_metrics: Vec<DatedCount>,
    conversation_durations: Vec<CategoryValue>,
    satisfaction_distribution: Vec<SatisfactionBucket>,
    ai_performance: Vec<AiPerformancePoint>,
    model_comparison: Vec<ModelComparison>,
    overview_stats: Vec<OverviewStat>,
}

impl MockDb {
    pub fn new() -> Self {
        Self {
            users: datasets::seed_users(),
            conversations: datasets::seed_conversations(),
            dashboard_stats: datasets::seed_dashboard_stats(),
            conversation_chart: datasets::seed_conversation_chart(),
            user_chart: datasets::seed_user_chart(),
            performance_chart: datasets::seed_performance_chart(),
            recent_activities: datasets::seed_recent_activities(),
            top_queries: datasets::seed_top_queries(),
            ai_models: datasets::seed_ai_models(),
            user_growth: datasets::seed_user_growth(),
            user_engagement: datasets::seed_user_engagement(),
            user_demographics: datasets::seed_user_demographics(),
            conversation_metrics: datasets::seed_conversation_metrics(),
            conversation_durations: datasets::seed_conversation_durations(),
            satisfaction_distribution: datasets::seed_satisfaction_distribution(),
            ai_performance: datasets::seed_ai_performance(),
            model_comparison: datasets::seed_model_comparison(),
            overview_stats: datasets::seed_overview_stats(),
        }
    }

    // User queries

    pub fn users(&self) -> Vec<User> {
        self.users.clone()
    }

    pub fn user_by_id(&self, id: &str) -> Option<User> {
        self.users.iter().find(|user| user.id == id).cloned()
    }

    /// Case-insensitive substring match over name and email
    pub fn search_users(&self, query: &str) -> Vec<User> {
        if query.is_empty() {
            return self.users();
        }
        let needle = query.to_lowercase();
        self.users
            .iter()
            .filter(|user| {
                user.name.to_lowercase().contains(&needle)
                    || user.email.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// `None` means no filter, every user is returned
    pub fn filter_users_by_status(&self, status: Option<UserStatus>) -> Vec<User> {
        match status {
            None => self.users(),
            Some(status) => self
                .users
                .iter()
                .filter(|user| user.status == status)
                .cloned()
                .collect(),
        }
    }

    pub fn filter_users_by_role(&self, role: Option<UserRole>) -> Vec<User> {
        match role {
            None => self.users(),
            Some(role) => self
                .users
                .iter()
                .filter(|user| user.role == role)
                .cloned()
                .collect(),
        }
    }

    pub fn user_stats(&self) -> UserStats {
        UserStats {
            total: self.users.len(),
            active: self.count_users_with_status(UserStatus::Active),
            inactive: self.count_users_with_status(UserStatus::Inactive),
            pending: self.count_users_with_status(UserStatus::Pending),
            admins: self.count_users_with_role(UserRole::Admin),
            regular_users: self.count_users_with_role(UserRole::User),
            guests: self.count_users_with_role(UserRole::Guest),
        }
    }

    fn count_users_with_status(&self, status: UserStatus) -> usize {
        self.users.iter().filter(|u| u.status == status).count()
    }

    fn count_users_with_role(&self, role: UserRole) -> usize {
        self.users.iter().filter(|u| u.role == role).count()
    }

    // Conversation queries

    pub fn conversations(&self) -> Vec<Conversation> {
        self.conversations.clone()
    }

    pub fn conversation_by_id(&self, id: &str) -> Option<Conversation> {
        self.conversations.iter().find(|c| c.id == id).cloned()
    }

    /// Case-insensitive substring match over participant name, email and
    /// the latest message
    pub fn search_conversations(&self, query: &str) -> Vec<Conversation> {
        if query.is_empty() {
            return self.conversations();
        }
        let needle = query.to_lowercase();
        self.conversations
            .iter()
            .filter(|c| {
                c.user.name.to_lowercase().contains(&needle)
                    || c.user.email.to_lowercase().contains(&needle)
                    || c.last_message.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    pub fn filter_conversations_by_status(
        &self,
        status: Option<ConversationStatus>,
    ) -> Vec<Conversation> {
        match status {
            None => self.conversations(),
            Some(status) => self
                .conversations
                .iter()
                .filter(|c| c.status == status)
                .cloned()
                .collect(),
        }
    }

    pub fn conversation_stats(&self) -> ConversationStats {
        let count = |status: ConversationStatus| {
            self.conversations
                .iter()
                .filter(|c| c.status == status)
                .count()
        };
        ConversationStats {
            total: self.conversations.len(),
            active: count(ConversationStatus::Active),
            completed: count(ConversationStatus::Completed),
            abandoned: count(ConversationStatus::Abandoned),
            average_duration: "8m 45s".to_string(),
            average_satisfaction: 4.2,
        }
    }

    // Dashboard queries

    pub fn dashboard_stats(&self) -> Vec<StatCard> {
        self.dashboard_stats.clone()
    }

    pub fn chart_data(&self, kind: ChartKind) -> Vec<ChartPoint> {
        match kind {
            ChartKind::Conversations => self.conversation_chart.clone(),
            ChartKind::Users => self.user_chart.clone(),
            ChartKind::Performance => self.performance_chart.clone(),
        }
    }

    pub fn recent_activities(&self, filter: Option<ActivityType>) -> Vec<ActivityItem> {
        match filter {
            None => self.recent_activities.clone(),
            Some(kind) => self
                .recent_activities
                .iter()
                .filter(|a| a.activity_type == kind)
                .cloned()
                .collect(),
        }
    }

    pub fn top_queries(&self, search_term: &str) -> Vec<QueryItem> {
        if search_term.is_empty() {
            return self.top_queries.clone();
        }
        let needle = search_term.to_lowercase();
        self.top_queries
            .iter()
            .filter(|q| q.query.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn ai_model_performance(&self) -> Vec<ModelPerformance> {
        self.ai_models.clone()
    }

    pub fn dashboard_summary(&self) -> DashboardSummary {
        DashboardSummary {
            total_users: 12345,
            active_conversations: 1234,
            average_response_time: "1.2s".to_string(),
            accuracy_rate: "94.2%".to_string(),
            total_queries: 45678,
            knowledge_base_size: "2.3GB".to_string(),
            last_updated: Utc::now(),
        }
    }

    // Analytics queries

    pub fn analytics_overview_stats(&self) -> Vec<OverviewStat> {
        self.overview_stats.clone()
    }

    /// The fixture covers one year; `period` selects the window a real
    /// backend would aggregate over
    pub fn user_growth(&self, _period: Period) -> Vec<DatedCount> {
        self.user_growth.clone()
    }

    pub fn user_engagement(&self) -> Vec<CategoryValue> {
        self.user_engagement.clone()
    }

    pub fn user_demographics(&self) -> Vec<CategoryValue> {
        self.user_demographics.clone()
    }

    pub fn conversation_metrics(&self, _period: Period) -> Vec<DatedCount> {
        self.conversation_metrics.clone()
    }

    pub fn conversation_durations(&self) -> Vec<CategoryValue> {
        self.conversation_durations.clone()
    }

    pub fn satisfaction_distribution(&self) -> Vec<SatisfactionBucket> {
        self.satisfaction_distribution.clone()
    }

    pub fn ai_performance(&self, _period: Period) -> Vec<AiPerformancePoint> {
        self.ai_performance.clone()
    }

    pub fn model_comparison(&self) -> Vec<ModelComparison> {
        self.model_comparison.clone()
    }

    pub fn analytics_summary(&self) -> AnalyticsSummary {
        AnalyticsSummary {
            total_conversations: 52600,
            average_response_time: "0.8s".to_string(),
            user_satisfaction: 4.3,
            ai_accuracy: "94.2%".to_string(),
            active_users: 4500,
            top_query: "How do I reset my password?".to_string(),
            best_performing_model: "Gemini Pro".to_string(),
            last_updated: Utc::now(),
        }
    }
}

impl Default for MockDb {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MockDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockDb")
            .field("users", &self.users.len())
            .field("conversations", &self.conversations.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_lookup_and_miss() {
        let db = MockDb::new();
        let user = db.user_by_id("1").unwrap();
        assert_eq!(user.name, "Sarah Johnson");
        assert!(db.user_by_id("missing").is_none());
    }

    #[test]
    fn test_search_users_is_case_insensitive() {
        let db = MockDb::new();
        let by_name = db.search_users("SARAH");
        assert_eq!(by_name.len(), 1);
        let by_email = db.search_users("@example.com");
        assert_eq!(by_email.len(), 7);
        assert!(db.search_users("zzz").is_empty());
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let db = MockDb::new();
        assert_eq!(db.search_users("").len(), 7);
        assert_eq!(db.search_conversations("").len(), 7);
        assert_eq!(db.top_queries("").len(), 8);
    }

    #[test]
    fn test_none_filter_returns_everything() {
        let db = MockDb::new();
        assert_eq!(db.filter_users_by_status(None).len(), 7);
        assert_eq!(db.filter_conversations_by_status(None).len(), 7);
        assert_eq!(db.recent_activities(None).len(), 5);
    }

    #[test]
    fn test_status_filters() {
        let db = MockDb::new();
        assert_eq!(db.filter_users_by_status(Some(UserStatus::Active)).len(), 5);
        assert_eq!(db.filter_users_by_status(Some(UserStatus::Pending)).len(), 1);
        assert_eq!(db.filter_users_by_role(Some(UserRole::Admin)).len(), 1);
        assert_eq!(
            db.filter_conversations_by_status(Some(ConversationStatus::Completed))
                .len(),
            4
        );
    }

    #[test]
    fn test_stats_add_up() {
        let db = MockDb::new();
        let users = db.user_stats();
        assert_eq!(users.total, 7);
        assert_eq!(users.active + users.inactive + users.pending, users.total);
        assert_eq!(users.admins + users.regular_users + users.guests, users.total);

        let conversations = db.conversation_stats();
        assert_eq!(conversations.total, 7);
        assert_eq!(
            conversations.active + conversations.completed + conversations.abandoned,
            conversations.total
        );
        assert_eq!(conversations.average_duration, "8m 45s");
    }

    #[test]
    fn test_conversation_search_matches_last_message() {
        let db = MockDb::new();
        let hits = db.search_conversations("reset my password");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "conv-1");
    }

    #[test]
    fn test_chart_kinds_return_distinct_series() {
        let db = MockDb::new();
        let conversations = db.chart_data(ChartKind::Conversations);
        let users = db.chart_data(ChartKind::Users);
        assert_eq!(conversations[0].value, 65);
        assert_eq!(users[0].value, 30);
    }

    #[test]
    fn test_summaries_are_consistent() {
        let db = MockDb::new();
        let dashboard = db.dashboard_summary();
        assert_eq!(dashboard.total_users, 12345);
        let analytics = db.analytics_summary();
        assert_eq!(analytics.best_performing_model, "Gemini Pro");
        assert_eq!(
            analytics.top_query,
            db.top_queries("")[0].query
        );
    }
}
