//! Collection state machine for the front end.
//!
//! A `CollectionController` owns where the user currently is (selected
//! category, active search term) and what is displayed for it. Every read
//! and write goes through the [`ApiClient`]; local state changes only after
//! the backend confirmed the operation, so a failed call leaves the
//! controller exactly where it was.
//!
//! Operations take `&mut self` and await their fetch inline, which is also
//! the concurrency story: two operations cannot overlap on one controller,
//! so stale-response races between search keystrokes cannot occur here.

use crate::api::{categories, sites, ApiClient, ApiError, Normalized};
use crate::model::{Category, Id, Site, SiteDraft};

/// What the front end should currently display.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Nothing chosen and no search active.
    NoSelection,
    /// A category is selected; its sites were fetched on entry.
    CategorySites { category_id: Id, sites: Vec<Site> },
    /// A search term is active; sites are the filtered global list.
    SearchResults { term: String, sites: Vec<Site> },
    /// The shown search results no longer reflect the backend (something
    /// was deleted since the fetch). The caller must re-issue the search.
    Invalidated,
}

/// Where the user currently is.
///
/// The selected category survives an active search, so clearing the term
/// returns to the same category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub current_category: Option<Id>,
    pub search_term: String,
}

pub struct CollectionController {
    client: ApiClient,
    selection: SelectionState,
    categories: Vec<Category>,
    view: View,
}

impl CollectionController {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            selection: SelectionState::default(),
            categories: Vec::new(),
            view: View::NoSelection,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Fetch the category list and cache it for [`visible_categories`].
    ///
    /// [`visible_categories`]: Self::visible_categories
    pub async fn load_categories(&mut self) -> Result<&[Category], ApiError> {
        self.categories = self.client.call(categories::ListRequest).await?;
        Ok(&self.categories)
    }

    /// The cached categories matching the active search term; all of them
    /// when no search is active.
    pub fn visible_categories(&self) -> Vec<&Category> {
        if self.selection.search_term.is_empty() {
            self.categories.iter().collect()
        } else {
            filter_categories(&self.categories, &self.selection.search_term)
        }
    }

    /// Select a category: clears any active search and fetches that
    /// category's sites fresh.
    pub async fn select(&mut self, category_id: Id) -> Result<(), ApiError> {
        let sites = self
            .client
            .call(sites::ListRequest {
                category_id: category_id.clone(),
            })
            .await?
            .into_vec();
        tracing::debug!(category = %category_id, count = sites.len(), "category selected");

        self.selection.current_category = Some(category_id.clone());
        self.selection.search_term.clear();
        self.view = View::CategorySites { category_id, sites };
        Ok(())
    }

    /// Change the search term.
    ///
    /// A non-empty term switches to global search: *all* sites are fetched
    /// fresh (no cache, no debounce) and filtered in memory against name
    /// and user. An empty term exits search, back to the selected category
    /// (re-fetched) or to no selection.
    pub async fn set_search_term(&mut self, term: &str) -> Result<(), ApiError> {
        if term.is_empty() {
            return self.exit_search().await;
        }

        let all = self.client.call(sites::ListAllRequest).await?.into_vec();
        let total = all.len();
        let sites = filter_sites(all, term);
        tracing::debug!(term, matched = sites.len(), total, "global search");

        self.selection.search_term = term.to_string();
        self.view = View::SearchResults {
            term: term.to_string(),
            sites,
        };
        Ok(())
    }

    async fn exit_search(&mut self) -> Result<(), ApiError> {
        match self.selection.current_category.clone() {
            Some(category_id) => {
                let sites = self
                    .client
                    .call(sites::ListRequest {
                        category_id: category_id.clone(),
                    })
                    .await?
                    .into_vec();
                self.selection.search_term.clear();
                self.view = View::CategorySites { category_id, sites };
            }
            None => {
                self.selection.search_term.clear();
                self.view = View::NoSelection;
            }
        }
        Ok(())
    }

    /// Create a category. Write-through: nothing is inserted locally,
    /// re-list to observe the new entry.
    pub async fn add_category(&self, name: &str) -> Result<Normalized, ApiError> {
        self.client
            .call(categories::CreateRequest {
                name: name.to_string(),
            })
            .await
    }

    /// Delete a category; the backend cascades to its sites.
    ///
    /// On confirmation the id is dropped from the cached list. If it was
    /// the selected category the controller falls back to no selection;
    /// active search results may have shown its sites and are invalidated.
    pub async fn delete_category(&mut self, id: &Id) -> Result<Normalized, ApiError> {
        let ack = self
            .client
            .call(categories::DeleteRequest { id: id.clone() })
            .await?;

        self.categories.retain(|c| &c.id != id);
        if self.selection.current_category.as_ref() == Some(id) {
            self.selection.current_category = None;
            if matches!(self.view, View::CategorySites { .. }) {
                self.view = View::NoSelection;
            }
        }
        // The cascade may have removed sites the current results show.
        if matches!(self.view, View::SearchResults { .. }) {
            self.view = View::Invalidated;
        }
        Ok(ack)
    }

    /// Create a site under a category. Write-through like
    /// [`add_category`](Self::add_category).
    pub async fn add_site(&self, category_id: Id, draft: SiteDraft) -> Result<Normalized, ApiError> {
        self.client
            .call(sites::CreateRequest { category_id, draft })
            .await
    }

    /// Delete a site, then bring the display back in line: a selected
    /// category is re-fetched, search results cannot be patched locally
    /// and are invalidated instead.
    ///
    /// A refetch failure after the confirmed delete surfaces that error;
    /// the view then keeps its last confirmed (now stale) contents.
    pub async fn delete_site(&mut self, id: &Id) -> Result<Normalized, ApiError> {
        let ack = self
            .client
            .call(sites::DeleteRequest { id: id.clone() })
            .await?;

        match &self.view {
            View::CategorySites { category_id, .. } => {
                let category_id = category_id.clone();
                let sites = self
                    .client
                    .call(sites::ListRequest {
                        category_id: category_id.clone(),
                    })
                    .await?
                    .into_vec();
                self.view = View::CategorySites { category_id, sites };
            }
            View::SearchResults { .. } => {
                self.view = View::Invalidated;
            }
            View::NoSelection | View::Invalidated => {}
        }
        Ok(ack)
    }
}

/// The subset of `sites` whose name or user contains `term`,
/// case-insensitively, in input order.
///
/// The empty term is the controller's "exit search" signal and never
/// reaches this filter through it.
pub fn filter_sites(mut sites: Vec<Site>, term: &str) -> Vec<Site> {
    let needle = term.to_lowercase();
    sites.retain(|s| {
        s.name.to_lowercase().contains(&needle) || s.user.to_lowercase().contains(&needle)
    });
    sites
}

/// The categories whose name contains `term`, case-insensitively.
pub fn filter_categories<'a>(categories: &'a [Category], term: &str) -> Vec<&'a Category> {
    let needle = term.to_lowercase();
    categories
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .collect()
}
