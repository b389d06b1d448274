//! Identity gateway client library
//!
//! Typed async client for an identity provider's HTTP gateway. Authenticates
//! end users and retrieves their verified profile data. The library keeps no
//! state between calls: no token storage, no refresh, no retries.
//!
//! Typical flow:
//! 1. Build a `ClientConfig` (or load `GatewaySettings` from TOML)
//! 2. `GatewayClient::exchange_token()` turns the front-end's ephemeral token
//!    into an access token
//! 3. `GatewayClient::get_user()` fetches the verified `UserProfile`
//! 4. `GatewayClient::notify()` pushes notifications to the user
//! 5. `GatewayClient::revoke_access_token()` when the session ends
//!
//! Rejections from the gateway surface as `Error::Gateway` carrying the
//! remote message; transport failures surface as `Error::Http`.

pub mod client;
pub mod config;
pub mod constants;
pub mod envelope;
pub mod error;
pub mod notification;
pub mod profile;
pub mod secret;

pub use client::GatewayClient;
pub use config::{ClientConfig, GatewaySettings};
pub use constants::DEFAULT_BASE_URL;
pub use envelope::{Envelope, Outcome};
pub use error::{Error, Result};
pub use notification::Notification;
pub use profile::{
    BillingDetails, CompanyDetails, Email, Gender, PersonalDetails, Phone, Timestamp, UserProfile,
};
pub use secret::ClientSecret;
