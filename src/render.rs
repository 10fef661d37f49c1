use std::fmt;

use crate::data_models::{Listing, ListingId};

pub const NO_IMAGE_PLACEHOLDER: &str = "No Image Available";
pub const NO_DESCRIPTION_PLACEHOLDER: &str = "No description available";
pub const EMPTY_RESULTS_MESSAGE: &str = "No products found. Please revise your filters.";
pub const VIEW_MORE_LABEL: &str = "View More";
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;
const ELLIPSIS: &str = "...";

/// Short form of a description for a result card. Counts characters, not bytes.
pub fn description_preview(description: Option<&str>) -> String {
    match description {
        None => NO_DESCRIPTION_PLACEHOLDER.to_string(),
        Some(text) if text.chars().count() >= DESCRIPTION_PREVIEW_CHARS => {
            let mut preview: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
            preview.push_str(ELLIPSIS);
            preview
        }
        Some(text) => text.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    Url(String),
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingCard {
    pub id: ListingId,
    pub title: String,
    pub image: ImageSlot,
    pub description: String,
}

impl From<&Listing> for ListingCard {
    fn from(listing: &Listing) -> Self {
        ListingCard {
            id: listing.id.clone(),
            title: listing.name.clone(),
            image: listing
                .image
                .clone()
                .map(ImageSlot::Url)
                .unwrap_or(ImageSlot::Placeholder),
            description: description_preview(listing.description.as_deref()),
        }
    }
}

/// Everything the search page shows below the filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPageView {
    /// Set when the last request failed; results are then the last good set.
    pub error: Option<String>,
    pub cards: Vec<ListingCard>,
}

impl SearchPageView {
    pub fn new(listings: &[Listing], error: Option<String>) -> Self {
        SearchPageView {
            error,
            cards: listings.iter().map(ListingCard::from).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for SearchPageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = &self.error {
            writeln!(f, "[error] {error}")?;
        }
        if self.cards.is_empty() {
            return writeln!(f, "{EMPTY_RESULTS_MESSAGE}");
        }
        for card in &self.cards {
            writeln!(f, "{}", card.title)?;
            match &card.image {
                ImageSlot::Url(url) => writeln!(f, "  image: {url}")?,
                ImageSlot::Placeholder => writeln!(f, "  {NO_IMAGE_PLACEHOLDER}")?,
            }
            writeln!(f, "  {}", card.description)?;
            writeln!(f, "  [{VIEW_MORE_LABEL}: {}]", card.id)?;
        }
        Ok(())
    }
}
