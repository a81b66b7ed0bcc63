use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Flat string map served by the local endpoint's placeholder routes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceholderPayload(pub BTreeMap<String, String>);

impl PlaceholderPayload {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    /// Body of `GET /` and `POST /`.
    pub fn greeting() -> Self {
        Self::from_pairs([("abc", "ddd"), ("bbd", "ccc")])
    }

    /// Body of `GET /data`.
    pub fn data() -> Self {
        Self::from_pairs([("nnn", "ddd"), ("qqq", "ccc")])
    }
}
