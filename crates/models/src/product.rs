use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub weight: i32,
    /// Which backend instance answered; diagnostic only.
    #[serde(default)]
    pub service_address: Option<String>,
}

impl Product {
    pub fn new(product_id: i32, name: impl Into<String>, weight: i32) -> Self {
        Self { product_id, name: name.into(), weight, service_address: None }
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
    fn decodes_camel_case_body() {
        let p: Product = serde_json::from_str(
            r#"{"productId":1,"name":"name","weight":1,"serviceAddress":"p-1/10.0.0.1:7001"}"#,
        )
        .unwrap();
        assert_eq!(p, Product::new(1, "name", 1).with_service_address("p-1/10.0.0.1:7001"));
    }

    #[test]
    fn missing_service_address_is_none() {
        let p: Product = serde_json::from_str(r#"{"productId":4,"name":"n","weight":9}"#).unwrap();
        assert_eq!(p.service_address, None);
    }
}
