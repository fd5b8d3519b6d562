mod document;

use proc_macro::TokenStream;

/// Derive macro binding a struct to a document collection.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Document)]
/// #[document(collection = "books")]
/// struct BookRecord {
///     #[document(id)]
///     pub id: String,
///     pub title: String,
/// }
/// ```
///
/// - `#[document(collection = "...")]` sets the collection name.
///   If omitted, defaults to snake_case struct name + "s".
///   Collection names may only contain ASCII letters, digits and `_`.
/// - `#[document(id)]` marks the `String` field holding the application id.
///   If omitted, defaults to a field named `id`.
#[proc_macro_derive(Document, attributes(document))]
pub fn derive_document(input: TokenStream) -> TokenStream {
    document::derive_document(input)
}
