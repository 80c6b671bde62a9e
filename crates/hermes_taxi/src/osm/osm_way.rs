use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct OsmWay {
    id: usize,
    pub tags: HashMap<String, String>,
}

impl OsmWay {
    pub fn from_tags<K, V, I>(id: usize, tags: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        OsmWay {
            id,
            tags: tags
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    pub fn osm_id(&self) -> usize {
        self.id
    }

    pub fn tag(&self, tag: &str) -> Option<&str> {
        self.tags.get(tag).map(|tag| tag.as_str())
    }

    pub fn has_tag(&self, tag: &str, value: &str) -> bool {
        self.tag(tag).is_some_and(|tag_value| tag_value == value)
    }

    pub fn has_tag_in(&self, tag: &str, values: &[&str]) -> bool {
        self.tag(tag).is_some_and(|tag_value| values.contains(&tag_value))
    }
}
