use crate::time::Time;
use serde::{Deserialize, Serialize};

/// An account on the service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub screen_name: String,
    pub location: String,
    pub description: String,
    pub profile_image_url: String,
    pub url: Option<String>,
    pub protected: bool,
    pub followers_count: i64,
    pub friends_count: i64,
    pub statuses_count: i64,
    pub created_at: Option<Time>,
}

/// A single status update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
    pub id: i64,
    pub text: String,
    pub source: String,
    pub created_at: Option<Time>,
    pub in_reply_to_status_id: Option<i64>,
    pub in_reply_to_user_id: Option<i64>,
    pub in_reply_to_screen_name: Option<String>,
    pub favorited: bool,
    pub truncated: bool,
    pub user: Option<User>,
}

/// A direct message between two accounts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectMessage {
    pub id: i64,
    pub text: String,
    pub created_at: Option<Time>,
    pub sender_id: i64,
    pub recipient_id: i64,
    pub sender_screen_name: String,
    pub recipient_screen_name: String,
    pub sender: Option<User>,
    pub recipient: Option<User>,
}

/// One hit from the search API. Search results carry a reduced shape with
/// RFC 2822 timestamps rather than full statuses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    pub id: i64,
    pub text: String,
    pub from_user: String,
    pub from_user_id: i64,
    pub to_user: Option<String>,
    pub created_at: Option<Time>,
    pub source: String,
}

/// Search API response wrapper
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResults {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub since_id: i64,
    pub max_id: i64,
    pub page: i64,
    pub results_per_page: i64,
}

/// A single trending topic
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Trend {
    pub name: String,
    pub url: String,
}

/// Trends response wrapper
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Trends {
    pub as_of: String,
    pub trends: Vec<Trend>,
}

/// A saved search query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedSearch {
    pub id: i64,
    pub name: String,
    pub query: String,
    pub position: Option<i64>,
    pub created_at: Option<Time>,
}

/// One side of a friendship
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Friend {
    pub id: i64,
    pub screen_name: String,
    pub following: bool,
    pub followed_by: bool,
    pub notifications_enabled: Option<bool>,
}

/// `friendships/show` payload: the relationship between two accounts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Relationship {
    pub source: Friend,
    pub target: Friend,
}

/// Wrapper object the service puts around a relationship
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationshipResult {
    pub relationship: Relationship,
}

/// `account/rate_limit_status` payload. Surfaced as data only; this library
/// does not enforce limits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitStatus {
    pub remaining_hits: i64,
    pub hourly_limit: i64,
    pub reset_time_in_seconds: i64,
    pub reset_time: Option<Time>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_deserialization() {
        let json = r#"{
            "id": 210462857140252672,
            "text": "Along with our new #Twitterbird, we've also updated our Display Guidelines",
            "created_at": "Wed Jun 06 20:07:10 +0000 2012",
            "user": {"id": 783214, "screen_name": "twitter", "name": "Twitter"}
        }"#;

        let status: Status = serde_json::from_str(json).unwrap();
        assert_eq!(status.id, 210462857140252672);
        assert_eq!(status.user.as_ref().unwrap().screen_name, "twitter");
        assert!(status.created_at.is_some());
        assert!(!status.favorited);
    }

    #[test]
    fn test_search_results_deserialization() {
        let json = r#"{
            "query": "rust",
            "max_id": 122078461840982016,
            "results": [
                {"id": 122032448266698752, "from_user": "ferris", "text": "crab facts",
                 "created_at": "Thu, 06 Oct 2011 19:36:17 +0000"}
            ]
        }"#;

        let results: SearchResults = serde_json::from_str(json).unwrap();
        assert_eq!(results.results.len(), 1);
        assert_eq!(results.results[0].from_user, "ferris");
        assert_eq!(results.results[0].created_at.unwrap().unix(), 1317929777);
    }

    #[test]
    fn test_relationship_deserialization() {
        let json = r#"{
            "relationship": {
                "source": {"id": 1, "screen_name": "alice", "following": true, "followed_by": false},
                "target": {"id": 2, "screen_name": "bob", "following": false, "followed_by": true}
            }
        }"#;

        let result: RelationshipResult = serde_json::from_str(json).unwrap();
        assert!(result.relationship.source.following);
        assert!(result.relationship.target.followed_by);
    }

    #[test]
    fn test_rate_limit_status() {
        let json = r#"{
            "remaining_hits": 150,
            "hourly_limit": 350,
            "reset_time_in_seconds": 1346260378,
            "reset_time": "Wed Aug 29 17:12:58 +0000 2012"
        }"#;

        let rls: RateLimitStatus = serde_json::from_str(json).unwrap();
        assert_eq!(rls.remaining_hits, 150);
        assert_eq!(rls.reset_time.unwrap().unix(), rls.reset_time_in_seconds);
    }
}
