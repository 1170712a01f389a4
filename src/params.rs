use url::form_urlencoded;

/// Canonical request parameters shared by every endpoint.
///
/// Each endpoint reads only the subset of fields relevant to it; an empty
/// string means the field is omitted from the encoded request entirely, never
/// sent as an empty value. All values are strings — numeric parameters
/// (counts, pages, ids) are pre-formatted to decimal strings by the caller.
///
/// `photo_path` and `image_path` are local file paths consumed by the
/// multipart dispatch verbs and never appear on the wire.
#[derive(Debug, Clone, Default)]
pub struct Params {
    pub id: String,
    pub user_id: String,
    pub screen_name: String,
    pub user_a: String,
    pub user_b: String,
    pub source_screen_name: String,
    pub target_screen_name: String,
    pub since_id: String,
    pub max_id: String,
    pub count: String,
    pub page: String,
    pub cursor: String,
    pub status: String,
    pub in_reply_to_status_id: String,
    pub text: String,
    pub query: String,
    pub lang: String,
    pub result_type: String,
    pub mode: String,
    pub device: String,
    pub place_id: String,
    pub lat: String,
    pub long: String,

    /// Local path of the photo for `statuses/update_with_media`
    pub photo_path: String,
    /// Local path of the image for `account/update_profile_image`
    pub image_path: String,
}

impl Params {
    pub fn new() -> Self {
        Params::default()
    }

    /// Wire-name table. Field inclusion is decided here, declaratively,
    /// instead of through runtime struct introspection. The path fields are
    /// deliberately absent: they never travel in a query or form body.
    fn table(&self) -> [(&'static str, &str); 23] {
        [
            ("id", &self.id),
            ("user_id", &self.user_id),
            ("screen_name", &self.screen_name),
            ("user_a", &self.user_a),
            ("user_b", &self.user_b),
            ("source_screen_name", &self.source_screen_name),
            ("target_screen_name", &self.target_screen_name),
            ("since_id", &self.since_id),
            ("max_id", &self.max_id),
            ("count", &self.count),
            ("page", &self.page),
            ("cursor", &self.cursor),
            ("status", &self.status),
            ("in_reply_to_status_id", &self.in_reply_to_status_id),
            ("text", &self.text),
            ("q", &self.query),
            ("lang", &self.lang),
            ("result_type", &self.result_type),
            ("mode", &self.mode),
            ("device", &self.device),
            ("place_id", &self.place_id),
            ("lat", &self.lat),
            ("long", &self.long),
        ]
    }

    /// All non-empty fields as (wire name, value) pairs
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        self.table()
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (*k, v.to_string()))
            .collect()
    }

    /// True if no field would be encoded
    pub fn is_empty(&self) -> bool {
        self.table().iter().all(|(_, v)| v.is_empty())
    }

    /// URL-encode the non-empty fields as a query/form string
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
    }
}
