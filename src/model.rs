//! Model trait consumed by relations.

use sea_query::Value;

/// A persisted record that can act as the parent side of a relation.
///
/// Relations only need to know how to read the parent's key and which
/// discriminator to store for it. Hydration and attribute casting live
/// elsewhere.
///
/// # Example
///
/// ```
/// use harbor::Model;
/// use sea_query::Value;
///
/// struct Post {
///     id: i64,
/// }
///
/// impl Model for Post {
///     fn table_name(&self) -> &'static str {
///         "posts"
///     }
///
///     fn primary_key_value(&self) -> Value {
///         self.id.into()
///     }
/// }
///
/// let post = Post { id: 7 };
/// assert_eq!(post.primary_key(), "id");
/// assert!(post.morph_class().ends_with("Post"));
/// ```
pub trait Model {
    /// Table the model is stored in
    fn table_name(&self) -> &'static str;

    /// Name of the primary key column
    fn primary_key(&self) -> &'static str {
        "id"
    }

    /// Value of the primary key for this instance
    fn primary_key_value(&self) -> Value;

    /// Discriminator stored in `*_type` columns when this model is a
    /// polymorphic parent.
    ///
    /// Defaults to the Rust type path. Override it, or register an alias in a
    /// [`MorphMap`](crate::relation::MorphMap), to decouple stored values from
    /// module layout.
    fn morph_class(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}
