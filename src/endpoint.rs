use std::collections::HashMap;
use std::sync::LazyLock;

/// HTTP verb for a GET dispatch
pub const GET: &str = "GET";
/// HTTP verb for a form-encoded POST dispatch
pub const POST: &str = "POST";
/// Synthetic verb: multipart POST carrying the file named by `photo_path`
pub const PHOTO: &str = "photo";
/// Synthetic verb: multipart POST carrying the file named by `image_path`
pub const IMAGE: &str = "image";

/// Host class an endpoint is served from. Resolved to a concrete base URL by
/// `Config`, which under the default configuration yields the service's
/// documented absolute URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    Api,
    Search,
    Upload,
}

/// One named remote operation: where it lives and how it is dispatched
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub name: &'static str,
    pub host: Host,
    pub path: &'static str,
    pub method: &'static str,
}

const TABLE: &[Endpoint] = &[
    // statuses
    ep("statuses/public_timeline", Host::Api, "/statuses/public_timeline.json", GET),
    ep("statuses/home_timeline", Host::Api, "/statuses/home_timeline.json", GET),
    ep("statuses/friends_timeline", Host::Api, "/statuses/friends_timeline.json", GET),
    ep("statuses/user_timeline", Host::Api, "/statuses/user_timeline.json", GET),
    ep("statuses/mentions", Host::Api, "/statuses/mentions.json", GET),
    ep("statuses/show", Host::Api, "/statuses/show.json", GET),
    ep("statuses/update", Host::Api, "/statuses/update.json", POST),
    ep("statuses/destroy", Host::Api, "/statuses/destroy.json", POST),
    ep("statuses/retweet", Host::Api, "/statuses/retweet.json", POST),
    ep("statuses/update_with_media", Host::Upload, "/statuses/update_with_media.json", PHOTO),
    // users
    ep("users/show", Host::Api, "/users/show.json", GET),
    ep("users/search", Host::Api, "/users/search.json", GET),
    // friendships
    ep("friendships/create", Host::Api, "/friendships/create.json", POST),
    ep("friendships/destroy", Host::Api, "/friendships/destroy.json", POST),
    ep("friendships/exists", Host::Api, "/friendships/exists.json", GET),
    ep("friendships/show", Host::Api, "/friendships/show.json", GET),
    // direct messages
    ep("direct_messages", Host::Api, "/direct_messages.json", GET),
    ep("direct_messages/sent", Host::Api, "/direct_messages/sent.json", GET),
    ep("direct_messages/new", Host::Api, "/direct_messages/new.json", POST),
    ep("direct_messages/destroy", Host::Api, "/direct_messages/destroy.json", POST),
    // favorites
    ep("favorites", Host::Api, "/favorites.json", GET),
    ep("favorites/create", Host::Api, "/favorites/create.json", POST),
    ep("favorites/destroy", Host::Api, "/favorites/destroy.json", POST),
    // blocks
    ep("blocks/create", Host::Api, "/blocks/create.json", POST),
    ep("blocks/destroy", Host::Api, "/blocks/destroy.json", POST),
    ep("blocks/exists", Host::Api, "/blocks/exists.json", GET),
    ep("blocks/blocking", Host::Api, "/blocks/blocking.json", GET),
    // saved searches
    ep("saved_searches", Host::Api, "/saved_searches.json", GET),
    ep("saved_searches/show", Host::Api, "/saved_searches/show.json", GET),
    ep("saved_searches/create", Host::Api, "/saved_searches/create.json", POST),
    ep("saved_searches/destroy", Host::Api, "/saved_searches/destroy.json", POST),
    // search + trends
    ep("search", Host::Search, "/search.json", GET),
    ep("trends", Host::Api, "/trends.json", GET),
    ep("trends/current", Host::Api, "/trends/current.json", GET),
    // account
    ep("account/rate_limit_status", Host::Api, "/account/rate_limit_status.json", GET),
    ep("account/verify_credentials", Host::Api, "/account/verify_credentials.json", GET),
    ep("account/end_session", Host::Api, "/account/end_session.json", POST),
    ep("account/update_profile_image", Host::Api, "/account/update_profile_image.json", IMAGE),
];

const fn ep(name: &'static str, host: Host, path: &'static str, method: &'static str) -> Endpoint {
    Endpoint { name, host, path, method }
}

static CATALOG: LazyLock<HashMap<&'static str, &'static Endpoint>> =
    LazyLock::new(|| TABLE.iter().map(|e| (e.name, e)).collect());

/// Look up an endpoint by its operation name
pub fn lookup(name: &str) -> Option<&'static Endpoint> {
    CATALOG.get(name).copied()
}

/// Catalog lookup for names defined by this library. A missing entry is a
/// bug in the caller, not a runtime condition.
pub(crate) fn require(name: &str) -> &'static Endpoint {
    lookup(name).unwrap_or_else(|| panic!("undefined endpoint: {}", name))
}
