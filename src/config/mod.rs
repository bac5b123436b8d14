//! Client configuration: types, default template, runtime overlay, passcodes.

pub mod overlay;
pub mod passcode;
pub mod template;
pub mod types;

pub use overlay::RuntimeValues;
pub use passcode::{generate_passcode, generate_passcode_and_config};
pub use template::default_client_config;
pub use types::{AgentConfig, ClientConfig, IdentifierConfig, UserConfig};
