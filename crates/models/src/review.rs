use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub product_id: i32,
    pub review_id: i32,
    pub author: String,
    pub subject: String,
    pub content: String,
    #[serde(default)]
    pub service_address: Option<String>,
}

impl Review {
    pub fn new(
        product_id: i32,
        review_id: i32,
        author: impl Into<String>,
        subject: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            review_id,
            author: author.into(),
            subject: subject.into(),
            content: content.into(),
            service_address: None,
        }
    }

    pub fn with_service_address(mut self, addr: impl Into<String>) -> Self {
        self.service_address = Some(addr.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_review_list_in_order() {
        let body = r#"[
            {"productId":1,"reviewId":1,"author":"a","subject":"s","content":"c"},
            {"productId":1,"reviewId":2,"author":"a","subject":"s","content":"c"}
        ]"#;
        let reviews: Vec<Review> = serde_json::from_str(body).unwrap();
        let ids: Vec<i32> = reviews.iter().map(|r| r.review_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
