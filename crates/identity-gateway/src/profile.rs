//! Verified user profile returned by `get-user`
//!
//! The profile keeps the gateway's `data` object exactly as received and
//! serializes back to it unchanged, explicit `null`s included. Typed access
//! goes through accessor methods that read the raw object leniently: a field
//! that is missing, `null` or of an unexpected type reads as `None`. Nothing
//! is defaulted and nothing is rejected.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile {
    raw: Map<String, Value>,
}

/// When the user joined, as the gateway sent it: an ISO-8601 string or epoch
/// milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    Millis(i64),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Email<'a> {
    pub address: Option<&'a str>,
    pub verified: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phone<'a> {
    pub number: Option<&'a str>,
    pub verified: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalDetails<'a> {
    pub name: Option<&'a str>,
    pub date_of_birth: Option<&'a str>,
    pub gender: Option<Gender>,
}

/// Gender as reported by the identity provider.
///
/// Values outside the four documented ones are kept in `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
    RatherNotSay,
    Unrecognized(String),
}

impl From<&str> for Gender {
    fn from(value: &str) -> Self {
        match value {
            "MALE" => Gender::Male,
            "FEMALE" => Gender::Female,
            "OTHER" => Gender::Other,
            "RATHER_NOT_SAY" => Gender::RatherNotSay,
            other => Gender::Unrecognized(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyDetails<'a> {
    pub name: Option<&'a str>,
    pub website: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillingDetails<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub address_line1: Option<&'a str>,
    pub address_line2: Option<&'a str>,
    pub city: Option<&'a str>,
    pub state: Option<&'a str>,
    pub postal_code: Option<&'a str>,
    pub country: Option<&'a str>,
}

impl UserProfile {
    /// The `data` object exactly as the gateway sent it.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.raw
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.raw
    }

    /// Raw value of any top-level field, including ones without an accessor.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    pub fn id(&self) -> Option<&str> {
        text(&self.raw, "id")
    }

    pub fn joined_at(&self) -> Option<Timestamp> {
        match self.raw.get("joinedAt")? {
            Value::String(s) => Some(Timestamp::Text(s.clone())),
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
                .map(Timestamp::Millis),
            _ => None,
        }
    }

    pub fn kyc_verified(&self) -> Option<bool> {
        flag(&self.raw, "kycVerified")
    }

    pub fn email(&self) -> Option<Email<'_>> {
        let group = group(&self.raw, "email")?;
        Some(Email {
            address: text(group, "address"),
            verified: flag(group, "verified"),
        })
    }

    pub fn phone(&self) -> Option<Phone<'_>> {
        let group = group(&self.raw, "phone")?;
        Some(Phone {
            number: text(group, "number"),
            verified: flag(group, "verified"),
        })
    }

    pub fn personal(&self) -> Option<PersonalDetails<'_>> {
        let group = group(&self.raw, "personal")?;
        Some(PersonalDetails {
            name: text(group, "name"),
            date_of_birth: text(group, "dateOfBirth"),
            gender: text(group, "gender").map(Gender::from),
        })
    }

    pub fn company(&self) -> Option<CompanyDetails<'_>> {
        let group = group(&self.raw, "company")?;
        Some(CompanyDetails {
            name: text(group, "name"),
            website: text(group, "website"),
        })
    }

    pub fn billing(&self) -> Option<BillingDetails<'_>> {
        let group = group(&self.raw, "billing")?;
        Some(BillingDetails {
            first_name: text(group, "firstName"),
            last_name: text(group, "lastName"),
            address_line1: text(group, "addressLine1"),
            address_line2: text(group, "addressLine2"),
            city: text(group, "city"),
            state: text(group, "state"),
            postal_code: text(group, "postalCode"),
            country: text(group, "country"),
        })
    }
}

impl From<Map<String, Value>> for UserProfile {
    fn from(raw: Map<String, Value>) -> Self {
        Self { raw }
    }
}

fn group<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    map.get(key).and_then(Value::as_object)
}

fn text<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str)
}

fn flag(map: &Map<String, Value>, key: &str) -> Option<bool> {
    map.get(key).and_then(Value::as_bool)
}
