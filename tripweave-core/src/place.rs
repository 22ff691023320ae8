//! Points of interest as seen by the planner.
//!
//! A [`Place`] is an immutable snapshot of one record owned by the external
//! store. The planner only reads it for the lifetime of a single request.

use geo::Coord;
use serde::{Deserialize, Serialize};

/// Score assumed when a place carries no recommendation score.
pub const DEFAULT_BASE_SCORE: i32 = 50;

/// Longitude/latitude pair in degrees.
///
/// A zero or non-finite component means the position is unknown; such
/// places are deprioritised by the distance helpers rather than dropped.
///
/// # Examples
/// ```
/// use tripweave_core::Coordinates;
///
/// assert!(Coordinates::new(126.97, 37.56).is_known());
/// assert!(!Coordinates::UNKNOWN.is_known());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    /// Longitude in degrees.
    #[serde(rename = "mapx", default)]
    pub lon: f64,
    /// Latitude in degrees.
    #[serde(rename = "mapy", default)]
    pub lat: f64,
}

impl Coordinates {
    /// Placeholder for a position nobody recorded.
    pub const UNKNOWN: Self = Self { lon: 0.0, lat: 0.0 };

    /// Construct a coordinate pair.
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Report whether both components carry a usable value.
    #[must_use]
    pub const fn is_known(self) -> bool {
        Self::usable(self.lon) && Self::usable(self.lat)
    }

    const fn usable(value: f64) -> bool {
        value.is_finite() && value != 0.0
    }
}

impl From<Coordinates> for Coord<f64> {
    fn from(value: Coordinates) -> Self {
        Self {
            x: value.lon,
            y: value.lat,
        }
    }
}

impl From<Coord<f64>> for Coordinates {
    fn from(value: Coord<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

/// Identifier of a category in the upstream tourism catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

impl CategoryId {
    /// Catalogue category for lodging.
    pub const LODGING: Self = Self(6);
    /// Catalogue category for restaurants.
    pub const RESTAURANT: Self = Self(8);
}

/// Planner-facing grouping of categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceKind {
    /// Anything worth visiting that is neither food nor lodging.
    Attraction,
    /// Somewhere to eat.
    Meal,
    /// Somewhere to sleep.
    Lodging,
}

impl PlaceKind {
    /// Classify an optional catalogue category.
    ///
    /// # Examples
    /// ```
    /// use tripweave_core::{CategoryId, PlaceKind};
    ///
    /// assert_eq!(PlaceKind::of(Some(CategoryId::RESTAURANT)), PlaceKind::Meal);
    /// assert_eq!(PlaceKind::of(Some(CategoryId(12))), PlaceKind::Attraction);
    /// assert_eq!(PlaceKind::of(None), PlaceKind::Attraction);
    /// ```
    #[must_use]
    pub const fn of(category: Option<CategoryId>) -> Self {
        match category {
            Some(CategoryId::RESTAURANT) => Self::Meal,
            Some(CategoryId::LODGING) => Self::Lodging,
            _ => Self::Attraction,
        }
    }
}

/// Publication state of a record in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceStatus {
    /// Visible to planners.
    #[default]
    Active,
    /// Hidden from planners.
    Inactive,
}

/// A location a traveller may visit, eat at, or stay in.
///
/// # Examples
/// ```
/// use tripweave_core::{CategoryId, Coordinates, Place, PlaceKind};
///
/// let place = Place::new(7, Coordinates::new(127.0, 37.5), Some(CategoryId::RESTAURANT))
///     .with_like_count(4);
/// assert_eq!(place.kind(), PlaceKind::Meal);
/// assert_eq!(place.base_score(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Unique identifier.
    pub id: u64,
    /// Position of the place.
    #[serde(flatten)]
    pub location: Coordinates,
    /// Catalogue category, when known.
    #[serde(rename = "category_id", default)]
    pub category: Option<CategoryId>,
    /// Editorial recommendation score.
    #[serde(rename = "recommendation_score", default)]
    pub base_score: Option<i32>,
    /// Number of travellers who liked the place.
    #[serde(default)]
    pub like_count: u32,
    /// Weekly closure description, e.g. `"매주 월요일"`.
    #[serde(default)]
    pub rest_date: String,
    /// Display name.
    #[serde(default)]
    pub title: String,
    /// Thumbnail image URL.
    #[serde(rename = "thumbnail_image", default)]
    pub thumbnail: String,
    /// Region the place belongs to.
    #[serde(default)]
    pub region_id: Option<u64>,
    /// City the place belongs to.
    #[serde(default)]
    pub city_id: Option<u64>,
    /// Display name of the region.
    #[serde(default)]
    pub region_name: Option<String>,
    /// Display name of the city.
    #[serde(default)]
    pub city_name: Option<String>,
    /// Display name of the category.
    #[serde(default)]
    pub category_name: Option<String>,
    /// Publication state.
    #[serde(default)]
    pub status: PlaceStatus,
}

impl Place {
    /// Construct an active place with no popularity signals.
    #[must_use]
    pub fn new(id: u64, location: Coordinates, category: Option<CategoryId>) -> Self {
        Self {
            id,
            location,
            category,
            base_score: None,
            like_count: 0,
            rest_date: String::new(),
            title: String::new(),
            thumbnail: String::new(),
            region_id: None,
            city_id: None,
            region_name: None,
            city_name: None,
            category_name: None,
            status: PlaceStatus::Active,
        }
    }

    /// Set the editorial score.
    #[must_use]
    pub fn with_base_score(mut self, score: i32) -> Self {
        self.base_score = Some(score);
        self
    }

    /// Set the like counter.
    #[must_use]
    pub fn with_like_count(mut self, likes: u32) -> Self {
        self.like_count = likes;
        self
    }

    /// Set the weekly closure description.
    #[must_use]
    pub fn with_rest_date(mut self, pattern: impl Into<String>) -> Self {
        self.rest_date = pattern.into();
        self
    }

    /// Set the display name.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Attach the place to a region and city.
    #[must_use]
    pub fn in_area(mut self, region_id: u64, city_id: u64) -> Self {
        self.region_id = Some(region_id);
        self.city_id = Some(city_id);
        self
    }

    /// Set the publication state.
    #[must_use]
    pub fn with_status(mut self, status: PlaceStatus) -> Self {
        self.status = status;
        self
    }

    /// Planner grouping derived from the category.
    #[must_use]
    pub const fn kind(&self) -> PlaceKind {
        PlaceKind::of(self.category)
    }

    /// Editorial score, substituting [`DEFAULT_BASE_SCORE`] when unset or zero.
    #[must_use]
    pub const fn base_score(&self) -> i32 {
        match self.base_score {
            Some(score) if score != 0 => score,
            _ => DEFAULT_BASE_SCORE,
        }
    }

    /// Report whether two places share a known category.
    #[must_use]
    pub fn shares_category_with(&self, other: &Self) -> bool {
        matches!((self.category, other.category), (Some(a), Some(b)) if a == b)
    }

    /// Fields exposed to clients in the itinerary payload.
    #[must_use]
    pub fn summary(&self) -> PlaceSummary {
        PlaceSummary {
            id: self.id,
            title: self.title.clone(),
            thumbnail_image: self.thumbnail.clone(),
            region_name: self.region_name.clone(),
            city_name: self.city_name.clone(),
            category_name: self.category_name.clone(),
            recommendation_score: self.base_score,
            location: self.location,
        }
    }
}

/// Client-facing projection of a [`Place`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSummary {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub title: String,
    /// Thumbnail image URL.
    pub thumbnail_image: String,
    /// Display name of the region.
    pub region_name: Option<String>,
    /// Display name of the city.
    pub city_name: Option<String>,
    /// Display name of the category.
    pub category_name: Option<String>,
    /// Editorial score as stored.
    pub recommendation_score: Option<i32>,
    /// Position of the place.
    #[serde(flatten)]
    pub location: Coordinates,
}
