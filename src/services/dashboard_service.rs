// src/services/dashboard_service.rs
//
// Dashboard overview data. The variant comes from configuration, so one
// route serves chat-, blog-, gallery-, or tracker-flavored dashboards.

use serde::Serialize;
use serde_json::json;

use crate::application::config::DashboardKind;

#[derive(Debug, Clone, Serialize)]
pub struct ActivityItem {
    pub title: String,
    pub description: String,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<u32>,
}

impl ActivityItem {
    fn new(title: &str, description: &str, timestamp: &str, kind: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            timestamp: timestamp.to_string(),
            kind: kind.to_string(),
            views: None,
            comments: None,
        }
    }

    fn with_engagement(mut self, views: u32, comments: u32) -> Self {
        self.views = Some(views);
        self.comments = Some(comments);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub kind: DashboardKind,
    pub stats: serde_json::Value,
    pub recent_activity: Vec<ActivityItem>,
}

pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        Self
    }

    pub fn overview(&self, kind: DashboardKind) -> DashboardData {
        match kind {
            DashboardKind::Chat => DashboardData {
                kind,
                stats: json!({
                    "total_messages": 247,
                    "active_chats": 5,
                    "unread_messages": 3,
                    "online_friends": 12,
                }),
                recent_activity: vec![
                    ActivityItem::new(
                        "General Chat",
                        "Join the community discussion",
                        "2 minutes ago",
                        "chat",
                    ),
                    ActivityItem::new(
                        "Tech Talk",
                        "Latest programming discussions",
                        "15 minutes ago",
                        "chat",
                    ),
                ],
            },
            DashboardKind::Gallery => DashboardData {
                kind,
                stats: json!({
                    "total_photos": 342,
                    "albums": 8,
                    "favorites": 23,
                    "storage_used": "67%",
                }),
                recent_activity: vec![
                    ActivityItem::new(
                        "Vacation 2025",
                        "Beach photos from summer trip",
                        "1 hour ago",
                        "photo",
                    ),
                    ActivityItem::new(
                        "City Lights",
                        "Night photography collection",
                        "3 hours ago",
                        "photo",
                    ),
                ],
            },
            DashboardKind::Blog => DashboardData {
                kind,
                stats: json!({
                    "total_posts": 24,
                    "draft_posts": 3,
                    "total_views": 1847,
                    "comments": 89,
                }),
                recent_activity: vec![
                    ActivityItem::new(
                        "Getting Started with Rust",
                        "A comprehensive guide for beginners to learn systems programming",
                        "2 hours ago",
                        "blog",
                    )
                    .with_engagement(156, 12),
                    ActivityItem::new(
                        "Web Development Best Practices",
                        "Essential tips and tricks for modern web development",
                        "1 day ago",
                        "blog",
                    )
                    .with_engagement(234, 18),
                    ActivityItem::new(
                        "Database Design Fundamentals",
                        "Understanding the principles of good database architecture",
                        "3 days ago",
                        "blog",
                    )
                    .with_engagement(189, 7),
                ],
            },
            DashboardKind::Default => DashboardData {
                kind,
                stats: json!({
                    "total_items": 15,
                    "active_items": 8,
                    "pending_items": 4,
                    "completed_items": 3,
                }),
                recent_activity: vec![ActivityItem::new(
                    "Welcome!",
                    "Dashboard loaded successfully",
                    "Just now",
                    "system",
                )],
            },
        }
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_variant() {
        let data = DashboardService::new().overview(DashboardKind::Chat);
        assert_eq!(data.stats["total_messages"], 247);
        assert_eq!(data.recent_activity.len(), 2);
        assert_eq!(data.recent_activity[0].kind, "chat");
    }

    #[test]
    fn test_blog_variant_carries_engagement() {
        let data = DashboardService::new().overview(DashboardKind::Blog);
        assert_eq!(data.recent_activity[0].views, Some(156));
        assert_eq!(data.recent_activity[0].comments, Some(12));
    }

    #[test]
    fn test_default_variant() {
        let data = DashboardService::new().overview(DashboardKind::Default);
        assert_eq!(data.stats["total_items"], 15);
        assert_eq!(data.recent_activity.len(), 1);
    }
}
