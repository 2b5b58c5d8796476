//! LoadMaster API Client
//!
//! A Rust client library for the LoadMaster load balancer `accessv2` JSON
//! management API. Every operation is a single POST of a JSON command
//! carrying the credentials; responses are decoded into typed models.
//!
//! # Example
//!
//! ```no_run
//! use loadmaster_client::{LoadMasterClient, RealServerParameters, VirtualServiceParameters};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = LoadMasterClient::with_api_key("https://192.0.2.10", "your-api-key")?;
//!
//! // Create an HTTP virtual service
//! let params = VirtualServiceParameters::with_type("http");
//! let created = client.add_virtual_service("192.0.2.100", "80", "tcp", &params).await?;
//! let vs = created.virtual_service.index.to_string();
//!
//! // Put a real server behind it
//! client
//!     .add_real_server(&vs, "10.0.0.10", "8080", &RealServerParameters::default())
//!     .await?;
//!
//! // Take a backup of the configuration
//! let backup = client.backup().await?;
//! let archive = backup.decode()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Virtual Services**: Virtual services, sub virtual services and real servers
//! - **Content Rules**: Match, header, URL and body rules and their assignment
//! - **Certificates**: TLS and intermediate certificates, ACME (Let's Encrypt, DigiCert)
//! - **Security**: Access control lists, WAF and OWASP rule management
//! - **Administration**: API keys, backup and restore

pub mod client;
pub mod common;
pub mod config;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod loadmaster_trait;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use client::LoadMasterClient;
pub use common::{Auth, Command, Credentials, HttpClient, decode_payload, encode_payload};
pub use config::ClientConfig;
pub use error::{LoadMasterError, Result};
pub use loadmaster_trait::LoadMasterClientTrait;
pub use models::*;
#[cfg(any(test, feature = "test-util"))]
pub use mock::MockLoadMasterClient;
