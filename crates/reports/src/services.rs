//! Collaborator interfaces supplied by the host application.

use thiserror::Error;

/// Failure raised by a [`PermissionService`] when validation is refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PermissionError {
	/// The caller lacks the named permission.
	#[error("access denied: missing permission {permission:?}")]
	Denied {
		/// Permission that was checked.
		permission: String,
		/// Localized message supplied by the service, if any.
		message: Option<String>,
	},
	/// No caller identity is available.
	#[error("access denied: not authenticated")]
	NotAuthenticated,
}

/// Answers permission questions for the current caller.
pub trait PermissionService {
	/// Returns true if the caller holds `permission`.
	fn has_permission(&self, permission: &str) -> bool;

	/// Validates that the caller holds `permission`.
	///
	/// The failure policy belongs to the implementation; the default refuses
	/// with [`PermissionError::Denied`] whenever
	/// [`has_permission`](Self::has_permission) is false.
	fn validate_permission(
		&self,
		permission: &str,
		localizer: &dyn TextLocalizer,
	) -> Result<(), PermissionError> {
		if self.has_permission(permission) {
			return Ok(());
		}
		Err(PermissionError::Denied {
			permission: permission.to_owned(),
			message: localizer.try_get("Authorization.AccessDenied"),
		})
	}
}

/// Resolves localized text by resource key.
pub trait TextLocalizer {
	fn try_get(&self, key: &str) -> Option<String>;
}

/// Localizer that knows no texts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocalizer;

impl TextLocalizer for NoLocalizer {
	fn try_get(&self, _key: &str) -> Option<String> {
		None
	}
}

impl<S: ::std::hash::BuildHasher> TextLocalizer for std::collections::HashMap<String, String, S> {
	fn try_get(&self, key: &str) -> Option<String> {
		self.get(key).cloned()
	}
}

impl<F> PermissionService for F
where
	F: Fn(&str) -> bool,
{
	fn has_permission(&self, permission: &str) -> bool {
		self(permission)
	}
}
