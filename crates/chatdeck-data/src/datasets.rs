//! Seed fixtures for the in-memory database
//!
//! These rows stand in for a real backend. They are deliberately small and
//! deterministic so console screens and tests render the same data every run.

use crate::models::{
    ActivityActor, ActivityItem, ActivityType, AiPerformancePoint, CategoryValue, ChartPoint,
    Conversation, ConversationStatus, ConversationUser, DatedCount, ModelComparison,
    ModelPerformance, OverviewStat, QueryItem, SatisfactionBucket, StatCard, Trend, User,
    UserRole, UserStatus,
};

fn avatar(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}")
}

fn bot_avatar(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/bottts/svg?seed={seed}")
}

pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@example.com".to_string(),
            status: UserStatus::Active,
            role: UserRole::Admin,
            last_active: "2 minutes ago".to_string(),
            conversations: 152,
            avatar: avatar("Sarah"),
        },
        User {
            id: "2".to_string(),
            name: "Michael Chen".to_string(),
            email: "michael.chen@example.com".to_string(),
            status: UserStatus::Active,
            role: UserRole::User,
            last_active: "15 minutes ago".to_string(),
            conversations: 87,
            avatar: avatar("Michael"),
        },
        User {
            id: "3".to_string(),
            name: "Emily Rodriguez".to_string(),
            email: "emily.rodriguez@example.com".to_string(),
            status: UserStatus::Active,
            role: UserRole::User,
            last_active: "3 hours ago".to_string(),
            conversations: 64,
            avatar: avatar("Emily"),
        },
        User {
            id: "4".to_string(),
            name: "David Kim".to_string(),
            email: "david.kim@example.com".to_string(),
            status: UserStatus::Inactive,
            role: UserRole::User,
            last_active: "2 days ago".to_string(),
            conversations: 23,
            avatar: avatar("David"),
        },
        User {
            id: "5".to_string(),
            name: "Jessica Taylor".to_string(),
            email: "jessica.taylor@example.com".to_string(),
            status: UserStatus::Pending,
            role: UserRole::Guest,
            last_active: "Never".to_string(),
            conversations: 0,
            avatar: avatar("Jessica"),
        },
        User {
            id: "6".to_string(),
            name: "Robert Wilson".to_string(),
            email: "robert.wilson@example.com".to_string(),
            status: UserStatus::Active,
            role: UserRole::User,
            last_active: "1 hour ago".to_string(),
            conversations: 42,
            avatar: avatar("Robert"),
        },
        User {
            id: "7".to_string(),
            name: "Amanda Martinez".to_string(),
            email: "amanda.martinez@example.com".to_string(),
            status: UserStatus::Active,
            role: UserRole::User,
            last_active: "5 hours ago".to_string(),
            conversations: 31,
            avatar: avatar("Amanda"),
        },
    ]
}

pub fn seed_conversations() -> Vec<Conversation> {
    fn participant(name: &str, email: &str, seed: &str) -> ConversationUser {
        ConversationUser {
            name: name.to_string(),
            email: email.to_string(),
            avatar: avatar(seed),
        }
    }

    vec![
        Conversation {
            id: "conv-1".to_string(),
            user: participant("Sarah Johnson", "sarah.johnson@example.com", "Sarah"),
            status: ConversationStatus::Active,
            messages: 12,
            duration: "15m 23s".to_string(),
            satisfaction: None,
            last_message: "How do I reset my password?".to_string(),
            timestamp: "2 minutes ago".to_string(),
        },
        Conversation {
            id: "conv-2".to_string(),
            user: participant("Michael Chen", "michael.chen@example.com", "Michael"),
            status: ConversationStatus::Completed,
            messages: 8,
            duration: "5m 12s".to_string(),
            satisfaction: Some(5),
            last_message: "Thanks for your help!".to_string(),
            timestamp: "15 minutes ago".to_string(),
        },
        Conversation {
            id: "conv-3".to_string(),
            user: participant("Emily Rodriguez", "emily.rodriguez@example.com", "Emily"),
            status: ConversationStatus::Completed,
            messages: 15,
            duration: "12m 45s".to_string(),
            satisfaction: Some(4),
            last_message: "I'll try that solution, thank you.".to_string(),
            timestamp: "1 hour ago".to_string(),
        },
        Conversation {
            id: "conv-4".to_string(),
            user: participant("David Kim", "david.kim@example.com", "David"),
            status: ConversationStatus::Abandoned,
            messages: 3,
            duration: "1m 30s".to_string(),
            satisfaction: None,
            last_message: "This isn't working for me.".to_string(),
            timestamp: "3 hours ago".to_string(),
        },
        Conversation {
            id: "conv-5".to_string(),
            user: participant("Jessica Taylor", "jessica.taylor@example.com", "Jessica"),
            status: ConversationStatus::Completed,
            messages: 20,
            duration: "18m 10s".to_string(),
            satisfaction: Some(3),
            last_message: "I still have some questions but this helps.".to_string(),
            timestamp: "5 hours ago".to_string(),
        },
        Conversation {
            id: "conv-6".to_string(),
            user: participant("Robert Wilson", "robert.wilson@example.com", "Robert"),
            status: ConversationStatus::Completed,
            messages: 7,
            duration: "4m 55s".to_string(),
            satisfaction: Some(5),
            last_message: "Perfect! That's exactly what I needed.".to_string(),
            timestamp: "Yesterday".to_string(),
        },
        Conversation {
            id: "conv-7".to_string(),
            user: participant("Amanda Martinez", "amanda.martinez@example.com", "Amanda"),
            status: ConversationStatus::Active,
            messages: 9,
            duration: "8m 20s".to_string(),
            satisfaction: None,
            last_message: "Can you explain how to use this feature?".to_string(),
            timestamp: "Just now".to_string(),
        },
    ]
}

pub fn seed_dashboard_stats() -> Vec<StatCard> {
    fn card(
        id: &str,
        title: &str,
        value: &str,
        description: &str,
        trend: Trend,
        trend_value: &str,
    ) -> StatCard {
        StatCard {
            id: id.to_string(),
            title: title.to_string(),
            value: value.to_string(),
            description: description.to_string(),
            trend,
            trend_value: trend_value.to_string(),
        }
    }

    vec![
        card(
            "total-users",
            "Total Users",
            "12,345",
            "Active accounts",
            Trend::Up,
            "12%",
        ),
        card(
            "active-conversations",
            "Active Conversations",
            "1,234",
            "Ongoing chats",
            Trend::Up,
            "18%",
        ),
        card(
            "response-time",
            "AI Response Time",
            "1.2s",
            "Average response",
            Trend::Down,
            "0.3s",
        ),
        card(
            "accuracy-rate",
            "AI Accuracy Rate",
            "94.2%",
            "Successful responses",
            Trend::Up,
            "2.4%",
        ),
    ]
}

fn monthly(points: &[(&str, u32)]) -> Vec<ChartPoint> {
    points
        .iter()
        .map(|&(month, value)| ChartPoint {
            month: month.to_string(),
            value,
        })
        .collect()
}

pub fn seed_conversation_chart() -> Vec<ChartPoint> {
    monthly(&[
        ("Jan", 65),
        ("Feb", 45),
        ("Mar", 75),
        ("Apr", 55),
        ("May", 85),
        ("Jun", 70),
        ("Jul", 90),
    ])
}

pub fn seed_user_chart() -> Vec<ChartPoint> {
    monthly(&[
        ("Jan", 30),
        ("Feb", 40),
        ("Mar", 45),
        ("Apr", 60),
        ("May", 75),
        ("Jun", 85),
        ("Jul", 95),
    ])
}

pub fn seed_performance_chart() -> Vec<ChartPoint> {
    monthly(&[
        ("Jan", 80),
        ("Feb", 82),
        ("Mar", 85),
        ("Apr", 88),
        ("May", 90),
        ("Jun", 92),
        ("Jul", 94),
    ])
}

pub fn seed_recent_activities() -> Vec<ActivityItem> {
    fn entry(
        id: &str,
        name: &str,
        avatar_url: String,
        action: &str,
        target: &str,
        time: &str,
        activity_type: ActivityType,
    ) -> ActivityItem {
        ActivityItem {
            id: id.to_string(),
            user: ActivityActor {
                name: name.to_string(),
                avatar: avatar_url,
            },
            action: action.to_string(),
            target: target.to_string(),
            time: time.to_string(),
            activity_type,
        }
    }

    vec![
        entry(
            "1",
            "Sarah Johnson",
            avatar("Sarah"),
            "started a new",
            "conversation",
            "2 minutes ago",
            ActivityType::Conversation,
        ),
        entry(
            "2",
            "Michael Chen",
            avatar("Michael"),
            "registered a new",
            "account",
            "15 minutes ago",
            ActivityType::User,
        ),
        entry(
            "3",
            "AI Assistant",
            bot_avatar("AI"),
            "was updated to",
            "version 2.4",
            "1 hour ago",
            ActivityType::Ai,
        ),
        entry(
            "4",
            "Emily Rodriguez",
            avatar("Emily"),
            "completed a conversation with",
            "5-star rating",
            "3 hours ago",
            ActivityType::Conversation,
        ),
        entry(
            "5",
            "System",
            bot_avatar("System"),
            "performed",
            "knowledge base update",
            "5 hours ago",
            ActivityType::System,
        ),
    ]
}

pub fn seed_top_queries() -> Vec<QueryItem> {
    [
        ("How do I reset my password?", 342),
        ("What are your business hours?", 271),
        ("How to upgrade my subscription?", 234),
        ("Where is my order?", 198),
        ("How to contact support?", 157),
        ("Do you offer refunds?", 143),
        ("How to change my email?", 128),
        ("What payment methods do you accept?", 112),
    ]
    .iter()
    .map(|&(query, count)| QueryItem {
        query: query.to_string(),
        count,
    })
    .collect()
}

pub fn seed_ai_models() -> Vec<ModelPerformance> {
    [
        ("Gemini Pro", 94.2, 68, "0.8s"),
        ("Hugging Face - Mistral", 91.7, 22, "1.2s"),
        ("Hugging Face - Llama", 89.5, 10, "1.5s"),
    ]
    .iter()
    .map(|&(model, accuracy, usage, response_time)| ModelPerformance {
        model: model.to_string(),
        accuracy,
        usage,
        response_time: response_time.to_string(),
    })
    .collect()
}

fn dated(points: &[(&str, u32)]) -> Vec<DatedCount> {
    points
        .iter()
        .map(|&(date, count)| DatedCount {
            date: date.to_string(),
            count,
        })
        .collect()
}

fn categorized(points: &[(&str, u32)]) -> Vec<CategoryValue> {
    points
        .iter()
        .map(|&(category, value)| CategoryValue {
            category: category.to_string(),
            value,
        })
        .collect()
}

pub fn seed_user_growth() -> Vec<DatedCount> {
    dated(&[
        ("2023-01-01", 1200),
        ("2023-02-01", 1500),
        ("2023-03-01", 1800),
        ("2023-04-01", 2300),
        ("2023-05-01", 2900),
        ("2023-06-01", 3600),
        ("2023-07-01", 4500),
        ("2023-08-01", 5600),
        ("2023-09-01", 7000),
        ("2023-10-01", 8500),
        ("2023-11-01", 10200),
        ("2023-12-01", 12345),
    ])
}

pub fn seed_user_engagement() -> Vec<CategoryValue> {
    categorized(&[
        ("Daily Active", 4500),
        ("Weekly Active", 8200),
        ("Monthly Active", 10500),
        ("Returning Users", 7800),
        ("New Users", 2700),
    ])
}

pub fn seed_user_demographics() -> Vec<CategoryValue> {
    categorized(&[
        ("North America", 45),
        ("Europe", 30),
        ("Asia", 15),
        ("South America", 5),
        ("Africa", 3),
        ("Oceania", 2),
    ])
}

pub fn seed_conversation_metrics() -> Vec<DatedCount> {
    dated(&[
        ("2023-01-01", 5200),
        ("2023-02-01", 6100),
        ("2023-03-01", 7300),
        ("2023-04-01", 9200),
        ("2023-05-01", 11500),
        ("2023-06-01", 14200),
        ("2023-07-01", 17800),
        ("2023-08-01", 22300),
        ("2023-09-01", 28100),
        ("2023-10-01", 35400),
        ("2023-11-01", 42800),
        ("2023-12-01", 52600),
    ])
}

pub fn seed_conversation_durations() -> Vec<CategoryValue> {
    categorized(&[
        ("< 1 min", 15),
        ("1-3 mins", 25),
        ("3-5 mins", 30),
        ("5-10 mins", 20),
        ("> 10 mins", 10),
    ])
}

pub fn seed_satisfaction_distribution() -> Vec<SatisfactionBucket> {
    [(1, 120), (2, 250), (3, 850), (4, 1750), (5, 2300)]
        .iter()
        .map(|&(rating, count)| SatisfactionBucket { rating, count })
        .collect()
}

pub fn seed_ai_performance() -> Vec<AiPerformancePoint> {
    [
        ("2023-01-01", 85.2, 1.8),
        ("2023-02-01", 86.5, 1.7),
        ("2023-03-01", 87.8, 1.6),
        ("2023-04-01", 88.9, 1.5),
        ("2023-05-01", 90.1, 1.4),
        ("2023-06-01", 91.2, 1.3),
        ("2023-07-01", 92.3, 1.2),
        ("2023-08-01", 92.8, 1.1),
        ("2023-09-01", 93.2, 1.0),
        ("2023-10-01", 93.6, 0.9),
        ("2023-11-01", 94.0, 0.85),
        ("2023-12-01", 94.2, 0.8),
    ]
    .iter()
    .map(|&(date, accuracy, response_time)| AiPerformancePoint {
        date: date.to_string(),
        accuracy,
        response_time,
    })
    .collect()
}

pub fn seed_model_comparison() -> Vec<ModelComparison> {
    [
        ("Gemini Pro", 94.2, 0.8, 0.0012),
        ("Mistral", 91.7, 1.2, 0.0008),
        ("Llama", 89.5, 1.5, 0.0005),
        ("GPT-4", 95.1, 1.1, 0.002),
        ("Claude", 93.8, 0.9, 0.0015),
    ]
    .iter()
    .map(|&(model, accuracy, response_time, cost_per_query)| ModelComparison {
        model: model.to_string(),
        accuracy,
        response_time,
        cost_per_query,
    })
    .collect()
}

pub fn seed_overview_stats() -> Vec<OverviewStat> {
    [
        ("Total Conversations", "52,600", "+24.5%", true, 75),
        ("Avg. Response Time", "0.8s", "-0.3s", true, 85),
        ("User Satisfaction", "4.3/5", "+0.2", true, 80),
        ("AI Accuracy", "94.2%", "+2.4%", true, 90),
    ]
    .iter()
    .map(|&(title, value, change, positive, progress)| OverviewStat {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        positive,
        progress,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConversationStatus, UserStatus};

    #[test]
    fn test_seed_users_are_stable() {
        let users = seed_users();
        assert_eq!(users.len(), 7);
        assert_eq!(users[0].name, "Sarah Johnson");
        assert_eq!(users[4].status, UserStatus::Pending);
        assert_eq!(users[4].conversations, 0);
        assert_eq!(users, seed_users());
    }

    #[test]
    fn test_seed_conversations_satisfaction() {
        let conversations = seed_conversations();
        assert_eq!(conversations.len(), 7);
        let rated: Vec<u8> = conversations
            .iter()
            .filter_map(|c| c.satisfaction)
            .collect();
        assert_eq!(rated, vec![5, 4, 3, 5]);
        assert!(conversations
            .iter()
            .filter(|c| c.status == ConversationStatus::Active)
            .all(|c| c.satisfaction.is_none()));
    }

    #[test]
    fn test_chart_series_cover_same_months() {
        let conversations = seed_conversation_chart();
        let users = seed_user_chart();
        let performance = seed_performance_chart();
        assert_eq!(conversations.len(), 7);
        assert_eq!(users.len(), 7);
        assert_eq!(performance.len(), 7);
        for ((a, b), c) in conversations.iter().zip(&users).zip(&performance) {
            assert_eq!(a.month, b.month);
            assert_eq!(b.month, c.month);
        }
    }

    #[test]
    fn test_yearly_series_have_twelve_points() {
        assert_eq!(seed_user_growth().len(), 12);
        assert_eq!(seed_conversation_metrics().len(), 12);
        assert_eq!(seed_ai_performance().len(), 12);
    }

    #[test]
    fn test_satisfaction_buckets_span_ratings() {
        let buckets = seed_satisfaction_distribution();
        let ratings: Vec<u8> = buckets.iter().map(|b| b.rating).collect();
        assert_eq!(ratings, vec![1, 2, 3, 4, 5]);
    }
}
