//! Cursor-paginated list responses.
//!
//! List endpoints of the v2 API answer with one page of items plus a cursor.
//! Pages are never followed automatically: a caller who wants the next page
//! builds that call from [`Pager::next_page`].

use serde::{Deserialize, Serialize};

/// Cursor metadata of a list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    /// Opaque reference to the next page; `None` on the last page.
    #[serde(default)]
    pub next_page: Option<String>,
    /// Object discriminator, `"list"` for list responses.
    #[serde(default)]
    pub object: String,
    /// Path of the listed collection.
    #[serde(default)]
    pub url: String,
}

impl Pager {
    /// Check if there are more pages after the current one.
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }
}

/// One page of a list response.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: revenuecat_rs::RevenueCatClient) -> revenuecat_rs::Result<()> {
/// let page = client.projects().list().await?;
/// for project in &page.items {
///     println!("{}", project.name);
/// }
/// if let Some(cursor) = &page.pager.next_page {
///     println!("more projects at {cursor}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Cursor metadata.
    #[serde(flatten)]
    pub pager: Pager,
    /// The items in this page, in server order.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Check if there are more pages after this one.
    pub fn has_more(&self) -> bool {
        self.pager.has_more()
    }

    /// Number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
