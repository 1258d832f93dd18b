use serde::{Deserialize, Serialize};

/// A user as returned by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Option<u32>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<Name>,
    pub address: Option<Address>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Name {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geolocation: Option<Geolocation>,
}

/// Coordinates are strings on the wire. The live API spells the longitude
/// key `long`; both spellings are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Geolocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<String>,
    #[serde(alias = "long", skip_serializing_if = "Option::is_none")]
    pub lng: Option<String>,
}

/// Payload for creating or replacing a user. The id is server-assigned.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Name>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> UserRequest {
        UserRequest {
            email: Some("john@gmail.com".to_string()),
            username: Some("johnd".to_string()),
            password: Some("m38rmF$".to_string()),
            name: Some(Name {
                firstname: Some("John".to_string()),
                lastname: Some("Doe".to_string()),
            }),
            address: Some(Address {
                city: Some("kilcoole".to_string()),
                street: Some("7835 new road".to_string()),
                number: Some(3),
                zipcode: Some("12926-3874".to_string()),
                geolocation: Some(Geolocation {
                    lat: Some("-37.3159".to_string()),
                    lng: Some("81.1496".to_string()),
                }),
            }),
            phone: Some("1-570-236-7033".to_string()),
        }
    }

    #[test]
    fn request_round_trips() {
        let request = full_request();
        let json = serde_json::to_string(&request).unwrap();
        let back: UserRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn partial_request_omits_nested_nulls() {
        let request = UserRequest {
            email: Some("updated@example.com".to_string()),
            name: Some(Name {
                firstname: Some("Jane".to_string()),
                lastname: None,
            }),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "updated@example.com", "name": {"firstname": "Jane"}})
        );
    }

    #[test]
    fn response_parses_full_user() {
        let body = r#"{
            "address": {
                "geolocation": {"lat": "-37.3159", "long": "81.1496"},
                "city": "kilcoole", "street": "new road", "number": 7682, "zipcode": "12926-3874"
            },
            "id": 1, "email": "john@gmail.com", "username": "johnd", "password": "m38rmF$",
            "name": {"firstname": "john", "lastname": "doe"},
            "phone": "1-570-236-7033", "__v": 0
        }"#;
        let user: User = serde_json::from_str(body).unwrap();
        assert_eq!(user.id, Some(1));
        assert_eq!(user.name.unwrap().lastname.as_deref(), Some("doe"));
        let address = user.address.unwrap();
        assert_eq!(address.number, Some(7682));
        assert_eq!(address.geolocation.unwrap().lng.as_deref(), Some("81.1496"));
    }

    #[test]
    fn response_tolerates_missing_fields() {
        let user: User = serde_json::from_str(r#"{"id":11}"#).unwrap();
        assert_eq!(user.id, Some(11));
        assert!(user.email.is_none());
        assert!(user.address.is_none());
    }
}
