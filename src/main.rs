// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, Context};
use log::{LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::{Config, TranslationProvider};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod document_processor;
mod errors;
mod file_utils;
mod git_utils;
mod language_utils;
mod providers;
mod translation_service;

/// CLI Wrapper for TranslationProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslationProvider {
    #[value(name = "openai")]
    OpenAI,
    #[value(name = "gemini")]
    Gemini,
    #[value(name = "anthropic")]
    Anthropic,
    #[value(name = "azure")]
    Azure,
}

impl From<CliTranslationProvider> for TranslationProvider {
    fn from(cli_provider: CliTranslationProvider) -> Self {
        match cli_provider {
            CliTranslationProvider::OpenAI => TranslationProvider::OpenAI,
            CliTranslationProvider::Gemini => TranslationProvider::Gemini,
            CliTranslationProvider::Anthropic => TranslationProvider::Anthropic,
            CliTranslationProvider::Azure => TranslationProvider::Azure,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate changed documentation files (default command)
    #[command(alias = "translate")]
    Translate(TranslateArgs),

    /// Generate shell completions for docwai
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Repository root to scan for changed files
    #[arg(value_name = "REPO_PATH", default_value = ".")]
    repo_path: PathBuf,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Model name to use for translation
    #[arg(short, long, env = "MODEL")]
    model: Option<String>,

    /// Target language display name (e.g., 'Persian')
    #[arg(short, long, env = "TARGET_LANG")]
    target_language: Option<String>,

    /// Target language ISO 639-1 code (e.g., 'fa')
    #[arg(short = 'c', long, env = "TARGET_LANG_CODE")]
    target_language_code: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// docwai - Documentation Translation with AI
///
/// Translates documentation files changed in the latest commit using an AI
/// provider (OpenAI, Gemini, Anthropic, Azure Translator) and commits the
/// translated files back to the repository.
#[derive(Parser, Debug)]
#[command(name = "docwai")]
#[command(version = "1.0.0")]
#[command(about = "AI-powered documentation translation tool")]
#[command(long_about = "docwai detects documentation files changed in the latest commit, translates
them with an AI provider while preserving YAML front matter, writes the
translations under a templated filename, and commits the result.

EXAMPLES:
    docwai                                # Translate changes in the current repo
    docwai /path/to/repo                  # Translate changes in another repo
    docwai -p anthropic -m claude-3-haiku-20240307
    docwai -t German -c de                # Override the target language
    docwai --log-level debug              # Verbose processing trace
    docwai completions bash > docwai.bash # Generate bash completions

CONFIGURATION:
    Configuration comes from the environment: API_KEY (required), PROVIDER,
    MODEL, TARGET_LANG, TARGET_LANG_CODE, FILE_EXTS, OUTPUT_FORMAT,
    SYSTEM_PROMPT, USER_PROMPT, ENDPOINT and AZURE_REGION. Command line
    options override their environment counterparts.

SUPPORTED PROVIDERS:
    openai    - OpenAI chat completions API (requires API key)
    gemini    - Gemini generateContent API (requires API key)
    anthropic - Anthropic messages API (requires API key)
    azure     - Azure Translator (requires API key and AZURE_REGION)")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    translate: TranslateArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level from the CLI options if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "docwai", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => run_translate(cli.translate).await,
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(cmd_log_level.clone().into());
    }

    // Load configuration from the environment
    let mut config = Config::from_env();

    // If log level was not set via command line, take it from the environment
    if options.log_level.is_none() {
        let config_level = match config.log_level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        };
        log::set_max_level(config_level);
    }

    // Override config with CLI options if provided
    if let Some(provider) = &options.provider {
        let provider: TranslationProvider = provider.clone().into();
        config.provider = provider.to_lowercase_string();
    }

    if let Some(model) = &options.model {
        config.model = model.clone();
    }

    if let Some(target_language) = &options.target_language {
        config.target_language = target_language.clone();
    }

    if let Some(target_language_code) = &options.target_language_code {
        config.target_language_code = target_language_code.clone();
    }

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // Create controller and run the pipeline
    let controller = Controller::with_config(config)?;
    controller.run(&options.repo_path).await
}
