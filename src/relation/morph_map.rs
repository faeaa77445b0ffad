//! Registry of discriminator values for polymorphic parents.

use crate::model::Model;
use std::any::TypeId;
use std::collections::HashMap;

/// Maps model types to the strings stored in `*_type` columns
///
/// Without an entry, the model's own [`Model::morph_class`] is used.
///
/// # Example
///
/// ```
/// use harbor::{Model, MorphMap};
/// use sea_query::Value;
///
/// struct Video;
///
/// impl Model for Video {
///     fn table_name(&self) -> &'static str {
///         "videos"
///     }
///
///     fn primary_key_value(&self) -> Value {
///         1i64.into()
///     }
/// }
///
/// let mut map = MorphMap::new();
/// map.register::<Video>("video");
///
/// assert_eq!(map.class_of(&Video), "video");
/// assert_eq!(map.alias_of::<Video>(), Some("video"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MorphMap {
    aliases: HashMap<TypeId, String>,
}

impl MorphMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `alias` as the stored discriminator for `M`
    ///
    /// Registering the same type twice replaces the earlier alias.
    pub fn register<M: Model + 'static>(&mut self, alias: impl Into<String>) -> &mut Self {
        let alias = alias.into();
        log::debug!(
            "morph map: {} => {}",
            std::any::type_name::<M>(),
            alias
        );
        self.aliases.insert(TypeId::of::<M>(), alias);
        self
    }

    /// Registered alias for `M`
    pub fn alias_of<M: Model + 'static>(&self) -> Option<&str> {
        self.aliases.get(&TypeId::of::<M>()).map(String::as_str)
    }

    /// Discriminator to store for `model`
    pub fn class_of<M: Model + 'static>(&self, model: &M) -> String {
        match self.alias_of::<M>() {
            Some(alias) => alias.to_string(),
            None => model.morph_class(),
        }
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_query::Value;

    struct Post;
    struct Video;

    impl Model for Post {
        fn table_name(&self) -> &'static str {
            "posts"
        }

        fn primary_key_value(&self) -> Value {
            1i64.into()
        }
    }

    impl Model for Video {
        fn table_name(&self) -> &'static str {
            "videos"
        }

        fn primary_key_value(&self) -> Value {
            2i64.into()
        }

        fn morph_class(&self) -> String {
            "media.video".to_string()
        }
    }

    #[test]
    fn test_unregistered_type_falls_back_to_model() {
        let map = MorphMap::new();
        assert!(map.is_empty());
        assert_eq!(map.class_of(&Video), "media.video");
        assert_eq!(map.class_of(&Post), std::any::type_name::<Post>());
    }

    #[test]
    fn test_registered_alias_wins() {
        let mut map = MorphMap::new();
        map.register::<Post>("post").register::<Video>("video");
        assert_eq!(map.len(), 2);
        assert_eq!(map.class_of(&Post), "post");
        assert_eq!(map.class_of(&Video), "video");
    }

    #[test]
    fn test_register_replaces_alias() {
        let mut map = MorphMap::new();
        map.register::<Post>("post");
        map.register::<Post>("article");
        assert_eq!(map.len(), 1);
        assert_eq!(map.alias_of::<Post>(), Some("article"));
    }
}
