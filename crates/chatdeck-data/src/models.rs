//! Record types served by the console data boundary
//!
//! These are the typed shapes the dashboard, analytics, conversations and
//! user-management screens consume. Field names serialize in camelCase for
//! the console frontend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account status of a console-visible end user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
}

/// Role of an end user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    Guest,
}

/// An end user of the support widget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub role: UserRole,
    /// Human-readable recency label ("2 minutes ago", "Never")
    pub last_active: String,
    /// Total conversations this user has had
    pub conversations: u32,
    pub avatar: String,
}

/// Lifecycle state of a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationStatus {
    Active,
    Completed,
    Abandoned,
}

/// The user a conversation belongs to, denormalized for list rendering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationUser {
    pub name: String,
    pub email: String,
    pub avatar: String,
}

/// One support conversation as shown in the conversations screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub user: ConversationUser,
    pub status: ConversationStatus,
    pub messages: u32,
    pub duration: String,
    /// 1-5 rating; None until the visitor rates the conversation
    pub satisfaction: Option<u8>,
    pub last_message: String,
    pub timestamp: String,
}

/// Direction of a stat-card trend indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// One dashboard stat card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub id: String,
    pub title: String,
    pub value: String,
    pub description: String,
    pub trend: Trend,
    pub trend_value: String,
}

/// Which dashboard chart series to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Conversations,
    Users,
    Performance,
}

/// One point of a monthly dashboard chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub month: String,
    pub value: u32,
}

/// Category of a recent-activity entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Conversation,
    User,
    System,
    Ai,
}

/// Actor shown next to a recent-activity entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityActor {
    pub name: String,
    pub avatar: String,
}

/// One row of the recent-activity feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: String,
    pub user: ActivityActor,
    pub action: String,
    pub target: String,
    pub time: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
}

/// One entry of the top-queries table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryItem {
    pub query: String,
    pub count: u32,
}

/// Per-model performance row on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelPerformance {
    pub model: String,
    pub accuracy: f32,
    /// Share of traffic served by this model, in percent
    pub usage: u32,
    pub response_time: String,
}

/// Aggregate counters for the dashboard header
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_users: u64,
    pub active_conversations: u64,
    pub average_response_time: String,
    pub accuracy_rate: String,
    pub total_queries: u64,
    pub knowledge_base_size: String,
    pub last_updated: DateTime<Utc>,
}

/// Tallies of users per status and role
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub pending: usize,
    pub admins: usize,
    pub regular_users: usize,
    pub guests: usize,
}

/// Tallies of conversations per status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub abandoned: usize,
    pub average_duration: String,
    pub average_satisfaction: f32,
}

/// Reporting period of an analytics series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Month,
    Quarter,
    Year,
}

/// One dated count of a growth series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatedCount {
    pub date: String,
    pub count: u32,
}

/// One labeled value of a categorical series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryValue {
    pub category: String,
    pub value: u32,
}

/// Count of conversations that received a given rating
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SatisfactionBucket {
    pub rating: u8,
    pub count: u32,
}

/// One dated sample of AI accuracy and latency
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiPerformancePoint {
    pub date: String,
    pub accuracy: f32,
    pub response_time: f32,
}

/// Cross-model comparison row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelComparison {
    pub model: String,
    pub accuracy: f32,
    pub response_time: f32,
    pub cost_per_query: f64,
}

/// Headline stat on the analytics overview tab
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverviewStat {
    pub title: String,
    pub value: String,
    pub change: String,
    pub positive: bool,
    /// Progress toward target, in percent
    pub progress: u8,
}

/// Aggregate counters for the analytics header
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_conversations: u64,
    pub average_response_time: String,
    pub user_satisfaction: f32,
    pub ai_accuracy: String,
    pub active_users: u64,
    pub top_query: String,
    pub best_performing_model: String,
    pub last_updated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enums_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&UserStatus::Inactive).unwrap(),
            "\"inactive\""
        );
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::to_string(&ConversationStatus::Abandoned).unwrap(),
            "\"abandoned\""
        );
        assert_eq!(serde_json::to_string(&ActivityType::Ai).unwrap(), "\"ai\"");
    }

    #[test]
    fn test_activity_type_uses_type_key() {
        let item = ActivityItem {
            id: "1".to_string(),
            user: ActivityActor {
                name: "System".to_string(),
                avatar: String::new(),
            },
            action: "performed".to_string(),
            target: "knowledge base update".to_string(),
            time: "5 hours ago".to_string(),
            activity_type: ActivityType::System,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"].as_str(), Some("system"));
    }

    #[test]
    fn test_unrated_conversation_satisfaction_is_null() {
        let conversation = Conversation {
            id: "conv-1".to_string(),
            user: ConversationUser {
                name: "Sarah Johnson".to_string(),
                email: "sarah.johnson@example.com".to_string(),
                avatar: String::new(),
            },
            status: ConversationStatus::Active,
            messages: 12,
            duration: "15m 23s".to_string(),
            satisfaction: None,
            last_message: "How do I reset my password?".to_string(),
            timestamp: "2 minutes ago".to_string(),
        };
        let json = serde_json::to_value(&conversation).unwrap();
        assert!(json["satisfaction"].is_null());
        assert_eq!(json["lastMessage"].as_str(), Some("How do I reset my password?"));
    }
}
