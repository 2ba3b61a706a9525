//! Package model matching the admin frontend Package interface.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// One day within a package itinerary.
///
/// `day` is the 1-based ordinal shown in the UI. The sequence keeps ordinals
/// contiguous from 1; [`Package::remove_itinerary_day`] renumbers after a
/// removal so the ordinal always matches the position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    pub day: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub activities: Vec<String>,
}

/// A frequently asked question attached to a package.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// A sellable travel offering with itinerary, pricing, and marketing metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Store-generated UUID; clients never supply one.
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub duration: String,
    pub location: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
    #[serde(default)]
    pub inclusions: Vec<String>,
    #[serde(default)]
    pub exclusions: Vec<String>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub featured: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Package {
    /// Validate the required fields of a stored or about-to-be-stored record.
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("Title", &self.title)?;
        require_text("Description", &self.description)?;
        require_text("Duration", &self.duration)?;
        require_text("Location", &self.location)?;
        require_text("Image URL", &self.image_url)?;
        if self.price < 0.0 {
            return Err(AppError::Validation(
                "Price must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Append a day to the itinerary, numbering it after the current last day.
    pub fn push_itinerary_day(&mut self, mut day: ItineraryDay) {
        let last = self.itinerary.last().map(|d| d.day).unwrap_or(0);
        day.day = last + 1;
        self.itinerary.push(day);
    }

    /// Remove the itinerary day at `index` and renumber the remaining days so
    /// their ordinals run contiguously from 1 again.
    ///
    /// Returns the removed day, or `None` when `index` is out of bounds.
    pub fn remove_itinerary_day(&mut self, index: usize) -> Option<ItineraryDay> {
        if index >= self.itinerary.len() {
            return None;
        }
        let removed = self.itinerary.remove(index);
        for (position, day) in self.itinerary.iter_mut().enumerate() {
            day.day = (position + 1) as u32;
        }
        Some(removed)
    }
}

/// Request body for creating a new package.
///
/// Carries every [`Package`] field except `id` and the timestamps, which the
/// store assigns. `price` stays optional here so that a missing price is
/// reported as a validation failure rather than a deserialization one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePackageRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub people: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
    #[serde(default)]
    pub inclusions: Vec<String>,
    #[serde(default)]
    pub exclusions: Vec<String>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub featured: bool,
}

impl CreatePackageRequest {
    /// Validate required fields. Runs before any write on either backend.
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("Title", &self.title)?;
        require_text("Description", &self.description)?;
        let Some(price) = self.price else {
            return Err(AppError::Validation("Price is required".to_string()));
        };
        if price < 0.0 {
            return Err(AppError::Validation(
                "Price must not be negative".to_string(),
            ));
        }
        require_text("Duration", &self.duration)?;
        require_text("Location", &self.location)?;
        require_text("Image URL", &self.image_url)?;
        Ok(())
    }

    /// Build the stored record from this request. The caller has already run
    /// [`CreatePackageRequest::validate`] and supplies the id and timestamp.
    pub fn to_package(&self, id: String, now: String) -> Package {
        Package {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price.unwrap_or_default(),
            duration: self.duration.clone(),
            location: self.location.clone(),
            image_url: self.image_url.clone(),
            people: self.people,
            rating: self.rating,
            reviews: self.reviews,
            itinerary: self.itinerary.clone(),
            inclusions: self.inclusions.clone(),
            exclusions: self.exclusions.clone(),
            faqs: self.faqs.clone(),
            featured: self.featured,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Request body for updating an existing package.
///
/// Fields absent from the patch keep their current value; present fields
/// overwrite wholesale. That includes the nested sequences: a patch carrying
/// `itinerary` replaces the whole sequence, it never splices individual days.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePackageRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub people: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<Vec<ItineraryDay>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inclusions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faqs: Option<Vec<Faq>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl UpdatePackageRequest {
    /// Shallow-merge this patch onto an existing record.
    ///
    /// Both backends share this merge so their update semantics cannot drift.
    /// `updated_at` is refreshed by the store, not here.
    pub fn merge_onto(&self, existing: &Package) -> Package {
        Package {
            id: existing.id.clone(),
            title: self.title.clone().unwrap_or_else(|| existing.title.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| existing.description.clone()),
            price: self.price.unwrap_or(existing.price),
            duration: self
                .duration
                .clone()
                .unwrap_or_else(|| existing.duration.clone()),
            location: self
                .location
                .clone()
                .unwrap_or_else(|| existing.location.clone()),
            image_url: self
                .image_url
                .clone()
                .unwrap_or_else(|| existing.image_url.clone()),
            people: self.people.or(existing.people),
            rating: self.rating.or(existing.rating),
            reviews: self.reviews.or(existing.reviews),
            itinerary: self
                .itinerary
                .clone()
                .unwrap_or_else(|| existing.itinerary.clone()),
            inclusions: self
                .inclusions
                .clone()
                .unwrap_or_else(|| existing.inclusions.clone()),
            exclusions: self
                .exclusions
                .clone()
                .unwrap_or_else(|| existing.exclusions.clone()),
            faqs: self.faqs.clone().unwrap_or_else(|| existing.faqs.clone()),
            featured: self.featured.unwrap_or(existing.featured),
            created_at: existing.created_at.clone(),
            updated_at: existing.updated_at.clone(),
        }
    }
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_package() -> Package {
        Package {
            id: "pkg-1".to_string(),
            title: "Bali Paradise Escape".to_string(),
            description: "Seven days of beaches and temples".to_string(),
            price: 1299.0,
            duration: "7 days".to_string(),
            location: "Bali, Indonesia".to_string(),
            image_url: "https://example.com/bali.jpg".to_string(),
            people: None,
            rating: None,
            reviews: None,
            itinerary: vec![
                day(1, "Arrival"),
                day(2, "Ubud"),
                day(3, "Beach"),
                day(4, "Departure"),
            ],
            inclusions: vec!["Hotel".to_string()],
            exclusions: vec!["Flights".to_string()],
            faqs: vec![],
            featured: true,
            created_at: "2023-05-15T00:00:00+00:00".to_string(),
            updated_at: "2023-06-10T00:00:00+00:00".to_string(),
        }
    }

    fn day(ordinal: u32, title: &str) -> ItineraryDay {
        ItineraryDay {
            day: ordinal,
            title: title.to_string(),
            description: String::new(),
            activities: vec![],
        }
    }

    #[test]
    fn test_remove_itinerary_day_renumbers() {
        let mut package = sample_package();
        let removed = package.remove_itinerary_day(1).unwrap();

        assert_eq!(removed.title, "Ubud");
        let ordinals: Vec<u32> = package.itinerary.iter().map(|d| d.day).collect();
        assert_eq!(ordinals, vec![1, 2, 3]);
        assert_eq!(package.itinerary[1].title, "Beach");
    }

    #[test]
    fn test_remove_first_and_last_day() {
        let mut package = sample_package();
        package.remove_itinerary_day(0).unwrap();
        package.remove_itinerary_day(2).unwrap();

        let ordinals: Vec<u32> = package.itinerary.iter().map(|d| d.day).collect();
        assert_eq!(ordinals, vec![1, 2]);
        assert_eq!(package.itinerary[0].title, "Ubud");
        assert_eq!(package.itinerary[1].title, "Beach");
    }

    #[test]
    fn test_remove_itinerary_day_out_of_bounds() {
        let mut package = sample_package();
        assert!(package.remove_itinerary_day(4).is_none());
        assert_eq!(package.itinerary.len(), 4);
    }

    #[test]
    fn test_push_itinerary_day_numbers_after_last() {
        let mut package = sample_package();
        package.push_itinerary_day(day(0, "Extension"));
        assert_eq!(package.itinerary.last().unwrap().day, 5);

        let mut empty = sample_package();
        empty.itinerary.clear();
        empty.push_itinerary_day(day(0, "First"));
        assert_eq!(empty.itinerary[0].day, 1);
    }

    #[test]
    fn test_create_request_validation() {
        let mut request = CreatePackageRequest {
            title: "Test".to_string(),
            description: "d".to_string(),
            price: Some(100.0),
            duration: "3 days".to_string(),
            location: "X".to_string(),
            image_url: "http://x".to_string(),
            people: None,
            rating: None,
            reviews: None,
            itinerary: vec![],
            inclusions: vec![],
            exclusions: vec![],
            faqs: vec![],
            featured: false,
        };
        assert!(request.validate().is_ok());

        request.title = "   ".to_string();
        let err = request.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.message(), "Title is required");

        request.title = "Test".to_string();
        request.price = None;
        assert_eq!(request.validate().unwrap_err().message(), "Price is required");

        request.price = Some(-1.0);
        assert_eq!(
            request.validate().unwrap_err().message(),
            "Price must not be negative"
        );
    }

    #[test]
    fn test_merge_changes_only_patched_fields() {
        let existing = sample_package();
        let patch = UpdatePackageRequest {
            price: Some(999.0),
            ..Default::default()
        };

        let merged = patch.merge_onto(&existing);
        assert_eq!(merged.price, 999.0);
        assert_eq!(merged.title, existing.title);
        assert_eq!(merged.itinerary.len(), existing.itinerary.len());
        assert_eq!(merged.created_at, existing.created_at);
        assert_eq!(merged.featured, existing.featured);
    }

    #[test]
    fn test_merge_replaces_sequences_wholesale() {
        let existing = sample_package();
        let patch = UpdatePackageRequest {
            itinerary: Some(vec![day(1, "Only day")]),
            ..Default::default()
        };

        let merged = patch.merge_onto(&existing);
        assert_eq!(merged.itinerary.len(), 1);
        assert_eq!(merged.itinerary[0].title, "Only day");
        // Untouched sequences survive as-is.
        assert_eq!(merged.inclusions, existing.inclusions);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let package = sample_package();
        let value = serde_json::to_value(&package).unwrap();

        assert!(value.get("imageUrl").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("image_url").is_none());
        // Unset optionals are omitted entirely.
        assert!(value.get("people").is_none());
    }
}
