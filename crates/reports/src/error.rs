use thiserror::Error;

use crate::services::PermissionError;

/// Errors raised by the report registry.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RegistryError {
	/// A required collaborator was not supplied to the builder.
	#[error("missing collaborator: {0}")]
	MissingCollaborator(&'static str),
	/// A report was requested but no reports are registered.
	#[error("invalid argument: report index is empty, no report types were registered")]
	EmptyIndex,
	/// The permission service refused access.
	#[error(transparent)]
	Permission(#[from] PermissionError),
	/// Registry configuration could not be parsed.
	#[error("invalid registry config: {0}")]
	Config(#[from] toml::de::Error),
}
