use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const STATUS_SUCCESS: &str = "success";
pub const REGION: &str = "IND";
pub const EVENT_TITLE: &str = "TEST EVENT 1";
pub const EVENT_BANNER: &str = "https://i.imgur.com/6Q9Z8Zl.png";

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    #[schema(example = "TEST EVENT 1")]
    pub title: String,
    /// Banner image url
    #[schema(example = "https://i.imgur.com/6Q9Z8Zl.png")]
    pub banner: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct EventResponse {
    #[schema(example = "success")]
    pub status: String,
    /// Region code. Always `IND`, never derived from the request.
    #[schema(example = "IND")]
    pub region: String,
    pub events: Vec<EventRecord>,
}

impl EventResponse {
    pub fn fixed() -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            region: REGION.to_string(),
            events: vec![EventRecord {
                title: EVENT_TITLE.to_string(),
                banner: EVENT_BANNER.to_string(),
            }],
        }
    }
}
