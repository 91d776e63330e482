//! Integration tests driving the data services the way console screens do

use std::sync::Arc;

use chatdeck_data::{
    ActivityType, AnalyticsService, ChartKind, ConversationService, ConversationStatus,
    DashboardService, MockDb, Period, UserRole, UserService, UserStatus,
};

fn shared_db() -> Arc<MockDb> {
    Arc::new(MockDb::new())
}

#[tokio::test]
async fn test_users_screen_flow() {
    let service = UserService::new(shared_db()).with_latency_ms(0);

    let all = service.get_users().await.unwrap();
    assert_eq!(all.len(), 7);

    let hits = service.search_users("chen").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].email, "michael.chen@example.com");

    let pending = service
        .filter_by_status(Some(UserStatus::Pending))
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].name, "Jessica Taylor");

    let admins = service.filter_by_role(Some(UserRole::Admin)).await.unwrap();
    assert_eq!(admins.len(), 1);

    let stats = service.get_user_stats().await.unwrap();
    assert_eq!(stats.active, 5);
    assert_eq!(stats.guests, 1);
}

#[tokio::test]
async fn test_conversations_screen_flow() {
    let service = ConversationService::new(shared_db()).with_latency_ms(0);

    let completed = service
        .filter_by_status(Some(ConversationStatus::Completed))
        .await
        .unwrap();
    assert_eq!(completed.len(), 4);
    assert!(completed.iter().all(|c| c.satisfaction.is_some()));

    let hits = service.search_conversations("refund").await.unwrap();
    assert!(hits.is_empty());
    let hits = service.search_conversations("feature").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "conv-7");

    let stats = service.get_conversation_stats().await.unwrap();
    assert_eq!(stats.abandoned, 1);
    assert!((stats.average_satisfaction - 4.2).abs() < f32::EPSILON);
}

#[tokio::test]
async fn test_dashboard_screen_flow() {
    let db = shared_db();
    let service = DashboardService::new(db).with_latency_ms(0);

    let cards = service.get_stats().await.unwrap();
    let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Total Users",
            "Active Conversations",
            "AI Response Time",
            "AI Accuracy Rate"
        ]
    );

    let chart = service
        .get_chart_data(ChartKind::Performance)
        .await
        .unwrap();
    assert_eq!(chart.last().map(|p| p.value), Some(94));

    let system_only = service
        .get_recent_activities(Some(ActivityType::System))
        .await
        .unwrap();
    assert_eq!(system_only.len(), 1);
    assert_eq!(system_only[0].user.name, "System");

    let queries = service.get_top_queries("password").await.unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].count, 342);

    let summary = service.get_summary().await.unwrap();
    assert_eq!(summary.knowledge_base_size, "2.3GB");
}

#[tokio::test]
async fn test_analytics_screen_flow() {
    let service = AnalyticsService::new(shared_db()).with_latency_ms(0);

    let overview = service.get_overview_stats().await.unwrap();
    assert_eq!(overview.len(), 4);
    assert!(overview.iter().all(|s| s.positive));

    let growth = service.get_user_growth(Period::Year).await.unwrap();
    assert_eq!(growth.first().map(|p| p.count), Some(1200));
    assert_eq!(growth.last().map(|p| p.count), Some(12345));

    let buckets = service.get_satisfaction_distribution().await.unwrap();
    let total: u32 = buckets.iter().map(|b| b.count).sum();
    assert_eq!(total, 5270);

    let comparison = service.get_model_comparison().await.unwrap();
    let best = comparison
        .iter()
        .max_by(|a, b| a.accuracy.total_cmp(&b.accuracy))
        .unwrap();
    assert_eq!(best.model, "GPT-4");

    let summary = service.get_summary().await.unwrap();
    assert_eq!(summary.total_conversations, 52600);
    assert_eq!(summary.best_performing_model, "Gemini Pro");
}

#[tokio::test]
async fn test_services_can_fan_out_concurrently() {
    let db = shared_db();
    let users = UserService::new(Arc::clone(&db)).with_latency_ms(0);
    let dashboard = DashboardService::new(Arc::clone(&db)).with_latency_ms(0);
    let analytics = AnalyticsService::new(db).with_latency_ms(0);

    let (user_stats, summary, overview) = tokio::join!(
        users.get_user_stats(),
        dashboard.get_summary(),
        analytics.get_overview_stats()
    );

    assert_eq!(user_stats.unwrap().total, 7);
    assert_eq!(summary.unwrap().total_users, 12345);
    assert_eq!(overview.unwrap().len(), 4);
}
