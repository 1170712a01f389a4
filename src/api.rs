//! Typed per-endpoint methods. Each one builds the parameter subset its
//! operation reads, names the catalog entry, dispatches, and decodes —
//! nothing else. All request/response mechanics live in [`crate::rest`].

use crate::error::Result;
use crate::models::{
    DirectMessage, RateLimitStatus, Relationship, RelationshipResult, SavedSearch, SearchResults,
    Status, Trends, User,
};
use crate::params::Params;
use crate::response;
use crate::rest::Client;

impl Client {
    // --- statuses ---

    pub fn public_timeline(&self) -> Result<Vec<Status>> {
        self.call("statuses/public_timeline", None)
    }

    pub fn home_timeline(&self, params: &Params) -> Result<Vec<Status>> {
        self.call("statuses/home_timeline", Some(params))
    }

    pub fn friends_timeline(&self, params: &Params) -> Result<Vec<Status>> {
        self.call("statuses/friends_timeline", Some(params))
    }

    pub fn user_timeline(&self, params: &Params) -> Result<Vec<Status>> {
        self.call("statuses/user_timeline", Some(params))
    }

    pub fn mentions(&self, params: &Params) -> Result<Vec<Status>> {
        self.call("statuses/mentions", Some(params))
    }

    pub fn show_status(&self, id: &str) -> Result<Status> {
        let params = Params {
            id: id.to_string(),
            ..Params::default()
        };
        self.call("statuses/show", Some(&params))
    }

    /// Post a status update. `in_reply_to_status_id` may be empty.
    pub fn update_status(&self, status: &str, in_reply_to_status_id: &str) -> Result<Status> {
        let params = Params {
            status: status.to_string(),
            in_reply_to_status_id: in_reply_to_status_id.to_string(),
            ..Params::default()
        };
        self.call("statuses/update", Some(&params))
    }

    pub fn destroy_status(&self, id: &str) -> Result<Status> {
        let params = Params {
            id: id.to_string(),
            ..Params::default()
        };
        self.call("statuses/destroy", Some(&params))
    }

    pub fn retweet(&self, id: &str) -> Result<Status> {
        let params = Params {
            id: id.to_string(),
            ..Params::default()
        };
        self.call("statuses/retweet", Some(&params))
    }

    /// Post a status update together with a photo read from a local path
    pub fn update_with_media(&self, status: &str, photo_path: &str) -> Result<Status> {
        let params = Params {
            status: status.to_string(),
            photo_path: photo_path.to_string(),
            ..Params::default()
        };
        self.call("statuses/update_with_media", Some(&params))
    }

    // --- users ---

    pub fn show_user(&self, screen_name: &str) -> Result<User> {
        let params = Params {
            screen_name: screen_name.to_string(),
            ..Params::default()
        };
        self.call("users/show", Some(&params))
    }

    pub fn search_users(&self, query: &str) -> Result<Vec<User>> {
        let params = Params {
            query: query.to_string(),
            ..Params::default()
        };
        self.call("users/search", Some(&params))
    }

    // --- friendships ---

    pub fn follow(&self, screen_name: &str) -> Result<User> {
        let params = Params {
            screen_name: screen_name.to_string(),
            ..Params::default()
        };
        self.call("friendships/create", Some(&params))
    }

    pub fn unfollow(&self, screen_name: &str) -> Result<User> {
        let params = Params {
            screen_name: screen_name.to_string(),
            ..Params::default()
        };
        self.call("friendships/destroy", Some(&params))
    }

    /// Whether `user_a` follows `user_b`. The service answers with the JSON
    /// string `"true"`/`"false"`, hence the special-case decode.
    pub fn friendship_exists(&self, user_a: &str, user_b: &str) -> Result<bool> {
        let params = Params {
            user_a: user_a.to_string(),
            user_b: user_b.to_string(),
            ..Params::default()
        };
        let body = self.invoke("friendships/exists", Some(&params))?;
        response::decode_bool_string(&body)
    }

    pub fn show_friendship(
        &self,
        source_screen_name: &str,
        target_screen_name: &str,
    ) -> Result<Relationship> {
        let params = Params {
            source_screen_name: source_screen_name.to_string(),
            target_screen_name: target_screen_name.to_string(),
            ..Params::default()
        };
        let result: RelationshipResult = self.call("friendships/show", Some(&params))?;
        Ok(result.relationship)
    }

    // --- direct messages ---

    pub fn direct_messages(&self, params: &Params) -> Result<Vec<DirectMessage>> {
        self.call("direct_messages", Some(params))
    }

    pub fn sent_direct_messages(&self, params: &Params) -> Result<Vec<DirectMessage>> {
        self.call("direct_messages/sent", Some(params))
    }

    pub fn new_direct_message(&self, screen_name: &str, text: &str) -> Result<DirectMessage> {
        let params = Params {
            screen_name: screen_name.to_string(),
            text: text.to_string(),
            ..Params::default()
        };
        self.call("direct_messages/new", Some(&params))
    }

    pub fn destroy_direct_message(&self, id: &str) -> Result<DirectMessage> {
        let params = Params {
            id: id.to_string(),
            ..Params::default()
        };
        self.call("direct_messages/destroy", Some(&params))
    }

    // --- favorites ---

    pub fn favorites(&self, params: &Params) -> Result<Vec<Status>> {
        self.call("favorites", Some(params))
    }

    pub fn create_favorite(&self, id: &str) -> Result<Status> {
        let params = Params {
            id: id.to_string(),
            ..Params::default()
        };
        self.call("favorites/create", Some(&params))
    }

    pub fn destroy_favorite(&self, id: &str) -> Result<Status> {
        let params = Params {
            id: id.to_string(),
            ..Params::default()
        };
        self.call("favorites/destroy", Some(&params))
    }

    // --- blocks ---

    pub fn create_block(&self, screen_name: &str) -> Result<User> {
        let params = Params {
            screen_name: screen_name.to_string(),
            ..Params::default()
        };
        self.call("blocks/create", Some(&params))
    }

    pub fn destroy_block(&self, screen_name: &str) -> Result<User> {
        let params = Params {
            screen_name: screen_name.to_string(),
            ..Params::default()
        };
        self.call("blocks/destroy", Some(&params))
    }

    /// Whether the authenticated account blocks `screen_name`; same
    /// string-boolean answer as [`Client::friendship_exists`].
    pub fn block_exists(&self, screen_name: &str) -> Result<bool> {
        let params = Params {
            screen_name: screen_name.to_string(),
            ..Params::default()
        };
        let body = self.invoke("blocks/exists", Some(&params))?;
        response::decode_bool_string(&body)
    }

    pub fn blocking(&self, params: &Params) -> Result<Vec<User>> {
        self.call("blocks/blocking", Some(params))
    }

    // --- saved searches ---

    pub fn saved_searches(&self) -> Result<Vec<SavedSearch>> {
        self.call("saved_searches", None)
    }

    pub fn show_saved_search(&self, id: &str) -> Result<SavedSearch> {
        let params = Params {
            id: id.to_string(),
            ..Params::default()
        };
        self.call("saved_searches/show", Some(&params))
    }

    pub fn create_saved_search(&self, query: &str) -> Result<SavedSearch> {
        let params = Params {
            query: query.to_string(),
            ..Params::default()
        };
        self.call("saved_searches/create", Some(&params))
    }

    pub fn destroy_saved_search(&self, id: &str) -> Result<SavedSearch> {
        let params = Params {
            id: id.to_string(),
            ..Params::default()
        };
        self.call("saved_searches/destroy", Some(&params))
    }

    // --- search and trends ---

    /// Run a search. Extra knobs (lang, result_type, paging) come from
    /// `params`; the query itself is the first argument.
    pub fn search(&self, query: &str, params: &Params) -> Result<SearchResults> {
        let mut params = params.clone();
        params.query = query.to_string();
        self.call("search", Some(&params))
    }

    pub fn trends(&self) -> Result<Trends> {
        self.call("trends", None)
    }

    pub fn current_trends(&self) -> Result<Trends> {
        self.call("trends/current", None)
    }

    // --- account ---

    pub fn rate_limit_status(&self) -> Result<RateLimitStatus> {
        self.call("account/rate_limit_status", None)
    }

    pub fn verify_credentials(&self) -> Result<User> {
        self.call("account/verify_credentials", None)
    }

    pub fn end_session(&self) -> Result<()> {
        self.invoke("account/end_session", None)?;
        Ok(())
    }

    /// Replace the authenticated account's profile image with a local file
    pub fn update_profile_image(&self, image_path: &str) -> Result<User> {
        let params = Params {
            image_path: image_path.to_string(),
            ..Params::default()
        };
        self.call("account/update_profile_image", Some(&params))
    }
}
