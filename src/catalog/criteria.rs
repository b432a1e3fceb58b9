use std::fmt;

/// Ordering applied to the visible product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    PriceAsc,
    PriceDesc,
    /// Highest rated first.
    Rating,
    Title,
}

impl SortOrder {
    /// Parse a sort key. Unknown keys fall back to [`SortOrder::PriceAsc`].
    pub fn parse(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "asc" | "price" | "price_asc" => Self::PriceAsc,
            "desc" | "price_desc" => Self::PriceDesc,
            "rating" => Self::Rating,
            "title" => Self::Title,
            other => {
                tracing::debug!(sort_key = %other, "Unrecognized sort key, using price ascending");
                Self::PriceAsc
            }
        }
    }

    /// Stable key used in config files and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::Rating => "rating",
            Self::Title => "title",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PriceAsc => "Price: Low → High",
            Self::PriceDesc => "Price: High → Low",
            Self::Rating => "Top Rated",
            Self::Title => "Title: A → Z",
        }
    }

    pub fn all() -> &'static [SortOrder] {
        &[Self::PriceAsc, Self::PriceDesc, Self::Rating, Self::Title]
    }

    /// The next order in [`SortOrder::all`], wrapping around.
    pub fn next(&self) -> Self {
        let all = Self::all();
        let index = all.iter().position(|s| s == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search text, category and sort order that derive the visible list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub search: String,
    /// `None` means every category.
    pub category: Option<String>,
    pub sort: SortOrder,
}

impl FilterCriteria {
    pub fn new(search: impl Into<String>, category: Option<String>, sort: SortOrder) -> Self {
        Self {
            search: search.into(),
            category,
            sort,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}

/// Normalize a user supplied category: empty or `all` means no filter.
pub fn parse_category(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(trimmed.to_string())
    }
}
