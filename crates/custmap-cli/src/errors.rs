use console::style;
use custmap_core::CustmapError;
use std::fmt;
use std::path::Path;

/// Enhanced error type with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Create error for a failed input file read
pub fn input_failed(path: &Path, error: CustmapError) -> CliError {
    let err = match error {
        CustmapError::InputNotFound { .. } => CliError::new("Input file not found")
            .with_context(format!(
                "The specified input file does not exist.\n\nPath: {}",
                path.display()
            ))
            .with_suggestion("Check the file path and try again")
            .with_suggestion("Use absolute path or path relative to current directory"),
        CustmapError::UnsupportedFormat { extension } => {
            CliError::new("Unsupported input format")
                .with_context(format!(
                    "Cannot read '{}' files.\n\nPath: {}",
                    extension,
                    path.display()
                ))
                .with_suggestion("Export customer records as a JSON array (.json)")
                .with_suggestion("Or provide a GeoJSON point layer (.geojson)")
        }
        CustmapError::InvalidRecord { index, reason } => {
            CliError::new("Invalid customer record")
                .with_context(format!("Record {} in {}: {}", index, path.display(), reason))
                .with_suggestion("Fix or remove the record")
                .with_suggestion("Or drop --strict to skip records without a valid location")
        }
        other => CliError::new("Cannot read input file")
            .with_context(format!("Path: {}\n\nError: {}", path.display(), other)),
    };

    err.with_help("Run: custmap --help")
}

/// Create error for invalid configuration
pub fn invalid_config(key: &str, reason: &str) -> CliError {
    CliError::new(format!("Invalid configuration: {}", key))
        .with_context(format!("Configuration value is invalid.\n\nReason: {}", reason))
        .with_suggestion("Check custmap.toml for syntax errors")
        .with_suggestion("Check CUSTMAP_* environment variables")
        .with_help("Run: custmap config")
}

/// Convert anyhow::Error to CliError with context
pub fn from_anyhow(error: anyhow::Error) -> CliError {
    if let Some(CustmapError::ConfigInvalid { key, reason }) = error.downcast_ref::<CustmapError>()
    {
        return invalid_config(key, reason);
    }

    let message = format!("{:#}", error);

    if message.contains("permission denied") || message.contains("Permission denied") {
        CliError::new("Permission denied")
            .with_context(format!("Error: {}", message))
            .with_suggestion("Check file permissions")
    } else {
        CliError::new(message)
    }
}
