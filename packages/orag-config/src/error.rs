pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read config file at {path:?}.")]
	ReadConfig { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to parse config file at {path:?}.")]
	ParseConfig { path: std::path::PathBuf, source: toml::de::Error },
	#[error("Invalid config: {setting} {reason}.")]
	Validation { setting: String, reason: String },
}

impl Error {
	pub(crate) fn invalid(setting: impl Into<String>, reason: &str) -> Self {
		Self::Validation { setting: setting.into(), reason: reason.to_string() }
	}
}
