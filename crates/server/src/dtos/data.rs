use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DataItem {
    pub id: u32,
    pub name: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DataResponse {
    pub data: Vec<DataItem>,
}

/// The fixed listing served by `/api/data`, in response order
pub const ITEMS: [DataItem; 3] = [
    DataItem { id: 1, name: "Docker" },
    DataItem { id: 2, name: "Containers" },
    DataItem { id: 3, name: "Flask" },
];

impl DataResponse {
    pub fn listing() -> Self {
        Self {
            data: ITEMS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_keeps_declared_order() {
        let names: Vec<_> = DataResponse::listing()
            .data
            .iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, ["Docker", "Containers", "Flask"]);
    }

    #[test]
    fn serializes_as_id_name_pairs() {
        let body = serde_json::to_string(&DataResponse::listing()).unwrap();
        assert_eq!(
            body,
            r#"{"data":[{"id":1,"name":"Docker"},{"id":2,"name":"Containers"},{"id":3,"name":"Flask"}]}"#
        );
    }
}
