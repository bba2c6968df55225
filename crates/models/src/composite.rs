use serde::{Deserialize, Serialize};

use crate::{Recommendation, Review};

/// Product merged with its recommendations and reviews. Never stored; rebuilt per request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAggregate {
    pub product_id: i32,
    pub name: String,
    pub weight: i32,
    #[serde(default)]
    pub recommendations: Vec<RecommendationSummary>,
    #[serde(default)]
    pub reviews: Vec<ReviewSummary>,
    #[serde(default)]
    pub service_addresses: ServiceAddresses,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSummary {
    pub recommendation_id: i32,
    pub author: String,
    pub rating: i32,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub review_id: i32,
    pub author: String,
    pub subject: String,
    pub content: String,
}

/// One address per component; an empty string means that component did not answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAddresses {
    #[serde(default)]
    pub composite: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub review: String,
}

impl From<Recommendation> for RecommendationSummary {
    fn from(r: Recommendation) -> Self {
        Self {
            recommendation_id: r.recommendation_id,
            author: r.author,
            rating: r.rating,
            content: r.content,
        }
    }
}

impl From<Review> for ReviewSummary {
    fn from(r: Review) -> Self {
        Self {
            review_id: r.review_id,
            author: r.author,
            subject: r.subject,
            content: r.content,
        }
    }
}
