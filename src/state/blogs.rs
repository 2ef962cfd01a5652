#[cfg(test)]
#[path = "blogs_test.rs"]
mod blogs_test;

use crate::net::types::Blog;

/// The locally mirrored blog list.
///
/// Never authoritative: every mutating method here applies a
/// server-confirmed result, so a failed request simply never reaches this
/// type. Newest posts sit at the front, matching the service's ordering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlogListState {
    pub items: Vec<Blog>,
    pub loading: bool,
}

impl BlogListState {
    /// Replace the whole list with a fresh fetch.
    pub fn replace_all(&mut self, items: Vec<Blog>) {
        self.items = items;
        self.loading = false;
    }

    /// Prepend a newly created post.
    pub fn insert_new(&mut self, blog: Blog) {
        self.items.insert(0, blog);
    }

    /// Swap in the confirmed copy of an updated post, keeping order.
    /// A result matching nothing leaves the list unchanged.
    pub fn apply_update(&mut self, blog: Blog) {
        if let Some(slot) = self.items.iter_mut().find(|b| b.id == blog.id) {
            *slot = blog;
        }
    }

    /// Evict a deleted post by id match. Unknown ids are a no-op.
    pub fn apply_remove(&mut self, id: &str) {
        self.items.retain(|b| b.id != id);
    }
}
