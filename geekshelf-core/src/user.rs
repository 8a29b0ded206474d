use serde::{Deserialize, Serialize};

/// Public profile from the user endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub year_registered: i64,
    pub avatar_link: String,
}

/// Portrait links of a person (designer, artist, publisher contact).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonImage {
    pub id: i64,
    pub thumbnail: String,
    pub image: String,
}
